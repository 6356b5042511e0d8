//! Public landing page.

use leptos::prelude::*;

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="landing-page">
            <div class="landing-page__hero">
                <h1>"Emotion Aware"</h1>
                <p class="landing-page__tagline">
                    "Write freely. See how you felt. Your journal, with emotion analysis on every entry."
                </p>
                <div class="landing-page__actions">
                    <a class="btn btn--primary" href="/login">
                        "Sign In"
                    </a>
                    <a class="btn" href="/register">
                        "Create Account"
                    </a>
                </div>
            </div>
        </div>
    }
}
