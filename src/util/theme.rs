//! Theme preference (light/dark) for the app chrome.
//!
//! The choice is applied as a `data-theme` attribute on `<html>` and
//! persisted to `localStorage`. With no stored preference the system
//! preference decides. SSR paths safely no-op.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Visual theme for the app chrome.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Parse a stored preference; anything unrecognized is `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Self::Dark
    }
}

#[cfg(feature = "hydrate")]
const STORAGE_KEY: &str = "emotion_aware_theme";

/// Initial theme: the stored preference if any, else the system preference.
pub fn initial() -> Theme {
    #[cfg(feature = "hydrate")]
    {
        let Some(window) = web_sys::window() else {
            return Theme::Light;
        };
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(value)) = storage.get_item(STORAGE_KEY) {
                if let Some(theme) = Theme::parse(&value) {
                    return theme;
                }
            }
        }
        let prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches());
        if prefers_dark { Theme::Dark } else { Theme::Light }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Theme::Light
    }
}

/// Apply the theme to the document and persist the choice.
pub fn set(theme: Theme) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Some(el) = window.document().and_then(|doc| doc.document_element()) {
                let _ = el.set_attribute("data-theme", theme.as_str());
            }
            if let Ok(Some(storage)) = window.local_storage() {
                let _ = storage.set_item(STORAGE_KEY, theme.as_str());
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = theme;
    }
}
