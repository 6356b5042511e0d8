//! Envelope-normalizing request helpers shared by the REST modules.
//!
//! ERROR HANDLING
//! ==============
//! Every helper resolves to an `Envelope`, never an error: failed request
//! construction, transport failures, and non-envelope bodies all collapse
//! into `success: false` with the caller-supplied fallback message. Non-2xx
//! responses still parse their body, so backend-reported failures keep the
//! server's own message.

use gloo_net::http::{Request, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use web_sys::RequestCredentials;

use super::types::Envelope;

pub(crate) async fn get_envelope<T: DeserializeOwned>(url: &str, fallback: &str) -> Envelope<T> {
    let request = Request::get(url)
        .credentials(RequestCredentials::Include)
        .build();
    dispatch(request, url, fallback).await
}

pub(crate) async fn post_envelope<T, B>(url: &str, body: &B, fallback: &str) -> Envelope<T>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let request = Request::post(url)
        .credentials(RequestCredentials::Include)
        .json(body);
    dispatch(request, url, fallback).await
}

pub(crate) async fn put_envelope<T, B>(url: &str, body: &B, fallback: &str) -> Envelope<T>
where
    T: DeserializeOwned,
    B: Serialize,
{
    let request = Request::put(url)
        .credentials(RequestCredentials::Include)
        .json(body);
    dispatch(request, url, fallback).await
}

pub(crate) async fn delete_envelope<T: DeserializeOwned>(url: &str, fallback: &str) -> Envelope<T> {
    let request = Request::delete(url)
        .credentials(RequestCredentials::Include)
        .build();
    dispatch(request, url, fallback).await
}

async fn dispatch<T: DeserializeOwned>(
    request: Result<Request, gloo_net::Error>,
    url: &str,
    fallback: &str,
) -> Envelope<T> {
    let request = match request {
        Ok(request) => request,
        Err(e) => {
            log::warn!("failed to build request for {url}: {e}");
            return Envelope::failure(fallback);
        }
    };
    let response: Response = match request.send().await {
        Ok(response) => response,
        Err(e) => {
            log::warn!("request to {url} failed: {e}");
            return Envelope::failure(fallback);
        }
    };
    match response.json::<Envelope<T>>().await {
        Ok(envelope) => envelope,
        Err(e) => {
            log::debug!("non-envelope response from {url}: {e}");
            Envelope::failure(fallback)
        }
    }
}
