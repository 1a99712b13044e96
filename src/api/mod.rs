//! REST API Clients
//!
//! Typed bindings to the archive backend, organized by resource.

mod admin;
mod subject;

pub use admin::AdminSubjectApi;
pub use subject::SubjectApi;

use reqwasm::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Connection settings shared by all API clients
#[derive(Clone, Debug, PartialEq)]
pub struct ApiConfig {
    pub base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into() }
    }

    /// Config pointing at the origin the app was served from.
    pub fn from_window() -> Self {
        let origin = web_sys::window()
            .and_then(|window| window.location().origin().ok())
            .unwrap_or_else(|| "http://localhost:8080".to_string());
        Self::new(origin)
    }
}

/// Both API clients, bundled for provision via the Leptos context API
#[derive(Clone)]
pub struct ApiContext {
    pub subjects: SubjectApi,
    pub admin: AdminSubjectApi,
}

impl ApiContext {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            subjects: SubjectApi::new(config.clone()),
            admin: AdminSubjectApi::new(config),
        }
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

async fn get_json<T: DeserializeOwned>(config: &ApiConfig, path: &str) -> Result<T, String> {
    let url = join_url(&config.base_url, path);
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|error| format!("request failed: {error}"))?;
    read_json(response).await
}

async fn post_json<T: DeserializeOwned, B: Serialize>(
    config: &ApiConfig,
    path: &str,
    body: &B,
) -> Result<T, String> {
    let response = send_post(config, path, body).await?;
    read_json(response).await
}

/// POST to an endpoint that answers with an empty body.
async fn post_unit<B: Serialize>(config: &ApiConfig, path: &str, body: &B) -> Result<(), String> {
    let response = send_post(config, path, body).await?;
    if !response.ok() {
        return Err(format!("HTTP {}", response.status()));
    }
    Ok(())
}

async fn send_post<B: Serialize>(
    config: &ApiConfig,
    path: &str,
    body: &B,
) -> Result<Response, String> {
    let url = join_url(&config.base_url, path);
    let payload = serde_json::to_string(body).map_err(|error| format!("encode failed: {error}"))?;
    Request::post(&url)
        .header("Content-Type", "application/json")
        .body(payload)
        .send()
        .await
        .map_err(|error| format!("request failed: {error}"))
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, String> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|error| format!("read failed: {error}"))?;
    if !response.ok() {
        return Err(format!("HTTP {status}: {text}"));
    }
    serde_json::from_str(&text).map_err(|error| format!("decode failed: {error}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_url_normalizes_slashes() {
        assert_eq!(join_url("http://host", "subjects/en"), "http://host/subjects/en");
        assert_eq!(join_url("http://host/", "/subjects/en"), "http://host/subjects/en");
        assert_eq!(join_url("http://host/", "subjects/en"), "http://host/subjects/en");
    }
}
