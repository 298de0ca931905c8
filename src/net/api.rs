//! HTTP gateway: base address, credential forwarding, verb helpers, and the
//! authentication endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, always sending
//! cookies (`credentials: include`) so the httpOnly session rides along.
//! Server-side (SSR): stubs returning an error since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call resolves to `Result<T, ApiError>`; no retries, no caching.
//! Callers decide how failures degrade their view.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::ApiError;
#[cfg(feature = "hydrate")]
use super::error::ServerMessage;
use super::types::{IdentityResponse, LoginPayload, LoginResponse, MutationResponse, PasswordPayload, ProfilePayload, RegisterPayload};

/// Base address of the remote API. Overridable at compile time so deploys
/// can point the client at a different origin.
pub fn api_base() -> &'static str {
    option_env!("PORTFOLIO_API_URL").unwrap_or("/api")
}

/// Resolve an endpoint path against the configured base address.
pub fn api_url(path: &str) -> String {
    format!("{}{path}", api_base())
}

#[cfg(feature = "hydrate")]
async fn decode_response<T: DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiError> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.json::<ServerMessage>().await.ok();
        return Err(ApiError::from_status(status, body));
    }
    resp.json::<T>().await.map_err(ApiError::transport)
}

/// `GET` a JSON body from `path`.
#[cfg(feature = "hydrate")]
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::get(&api_url(path))
        .credentials(web_sys::RequestCredentials::Include)
        .send()
        .await
        .map_err(ApiError::transport)?;
    decode_response(resp).await
}

/// `POST` a JSON payload to `path` and decode the JSON response.
#[cfg(feature = "hydrate")]
pub async fn post_json<T, B>(path: &str, body: &B) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize + ?Sized,
{
    let request = gloo_net::http::Request::post(&api_url(path))
        .credentials(web_sys::RequestCredentials::Include)
        .json(body)
        .map_err(ApiError::transport)?;
    let resp = request.send().await.map_err(ApiError::transport)?;
    decode_response(resp).await
}

/// `PUT` a JSON payload to `path` and decode the JSON response.
#[cfg(feature = "hydrate")]
pub async fn put_json<T, B>(path: &str, body: &B) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize + ?Sized,
{
    let request = gloo_net::http::Request::put(&api_url(path))
        .credentials(web_sys::RequestCredentials::Include)
        .json(body)
        .map_err(ApiError::transport)?;
    let resp = request.send().await.map_err(ApiError::transport)?;
    decode_response(resp).await
}

/// `DELETE` the resource at `path`.
#[cfg(feature = "hydrate")]
pub async fn delete_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let resp = gloo_net::http::Request::delete(&api_url(path))
        .credentials(web_sys::RequestCredentials::Include)
        .send()
        .await
        .map_err(ApiError::transport)?;
    decode_response(resp).await
}

/// `POST` a multipart form (used when a binary asset is attached).
#[cfg(feature = "hydrate")]
pub async fn post_form<T: DeserializeOwned>(path: &str, form: web_sys::FormData) -> Result<T, ApiError> {
    let request = gloo_net::http::Request::post(&api_url(path))
        .credentials(web_sys::RequestCredentials::Include)
        .body(form)
        .map_err(ApiError::transport)?;
    let resp = request.send().await.map_err(ApiError::transport)?;
    decode_response(resp).await
}

/// `PUT` a multipart form (used when a binary asset is attached).
#[cfg(feature = "hydrate")]
pub async fn put_form<T: DeserializeOwned>(path: &str, form: web_sys::FormData) -> Result<T, ApiError> {
    let request = gloo_net::http::Request::put(&api_url(path))
        .credentials(web_sys::RequestCredentials::Include)
        .body(form)
        .map_err(ApiError::transport)?;
    let resp = request.send().await.map_err(ApiError::transport)?;
    decode_response(resp).await
}

// SSR stubs: keep the same signatures so callers compile on both sides.

#[cfg(not(feature = "hydrate"))]
pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let _ = path;
    Err(ApiError::transport("not available on server"))
}

#[cfg(not(feature = "hydrate"))]
pub async fn post_json<T, B>(path: &str, body: &B) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize + ?Sized,
{
    let _ = (path, body);
    Err(ApiError::transport("not available on server"))
}

#[cfg(not(feature = "hydrate"))]
pub async fn put_json<T, B>(path: &str, body: &B) -> Result<T, ApiError>
where
    T: DeserializeOwned,
    B: Serialize + ?Sized,
{
    let _ = (path, body);
    Err(ApiError::transport("not available on server"))
}

#[cfg(not(feature = "hydrate"))]
pub async fn delete_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let _ = path;
    Err(ApiError::transport("not available on server"))
}

/// Assemble a multipart form from text fields plus an optional file part.
#[cfg(feature = "hydrate")]
pub fn multipart(
    fields: &[(&'static str, String)],
    file: Option<(&'static str, &web_sys::File)>,
) -> Result<web_sys::FormData, ApiError> {
    let form = web_sys::FormData::new().map_err(|_| ApiError::transport("form assembly failed"))?;
    for (name, value) in fields {
        form.append_with_str(name, value)
            .map_err(|_| ApiError::transport("form assembly failed"))?;
    }
    if let Some((name, file)) = file {
        form.append_with_blob_and_filename(name, file, &file.name())
            .map_err(|_| ApiError::transport("form assembly failed"))?;
    }
    Ok(form)
}

// ---------------------------------------------------------------------------
// Authentication endpoints.
// ---------------------------------------------------------------------------

/// Fetch the current identity (`GET /`). A falsy success flag or any failure
/// means "anonymous visitor", which is a valid state for a public site.
pub async fn fetch_identity() -> Result<IdentityResponse, ApiError> {
    get_json("/").await
}

/// Authenticate with email + password.
pub async fn login(payload: &LoginPayload) -> Result<LoginResponse, ApiError> {
    post_json("/login", payload).await
}

/// Register the administrator account.
pub async fn register(payload: &RegisterPayload) -> Result<MutationResponse, ApiError> {
    post_json("/register", payload).await
}

/// End the server session. Best-effort: local state is cleared regardless,
/// so the outcome is ignored beyond a debug log.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let sent = gloo_net::http::Request::post(&api_url("/logout"))
            .credentials(web_sys::RequestCredentials::Include)
            .send()
            .await;
        if let Err(err) = sent {
            log::warn!("logout request failed: {err}");
        }
    }
}

/// Update the administrator's display name and email.
pub async fn update_profile(payload: &ProfilePayload) -> Result<MutationResponse, ApiError> {
    put_json("/profile", payload).await
}

/// Change the administrator's password.
pub async fn change_password(payload: &PasswordPayload) -> Result<MutationResponse, ApiError> {
    put_json("/changePassword", payload).await
}
