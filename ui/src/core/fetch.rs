//! Read-only JSON loading for widget data.
//!
//! On the web every location goes through `gloo-net` (relative paths resolve
//! against the page). On desktop, `http(s)://` URLs go through `ureq` and
//! everything else is read from disk.

use serde::de::DeserializeOwned;

#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(u16),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed body: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No source configured for {0}")]
    Unsupported(String),
}

/// Fetch `location` and decode its body as JSON.
pub async fn fetch_json<T: DeserializeOwned>(location: &str) -> Result<T, FetchError> {
    let body = fetch_text(location).await?;
    Ok(serde_json::from_str(&body)?)
}

#[cfg(target_arch = "wasm32")]
async fn fetch_text(location: &str) -> Result<String, FetchError> {
    use gloo_net::http::{Request, RequestCache};

    let resp = Request::get(location)
        .cache(RequestCache::NoStore)
        .send()
        .await
        .map_err(|err| FetchError::Network(err.to_string()))?;

    if !resp.ok() {
        return Err(FetchError::Http(resp.status()));
    }
    resp.text()
        .await
        .map_err(|err| FetchError::Network(err.to_string()))
}

#[cfg(not(target_arch = "wasm32"))]
async fn fetch_text(location: &str) -> Result<String, FetchError> {
    if location.starts_with("http://") || location.starts_with("https://") {
        return match ureq::get(location).call() {
            Ok(resp) => Ok(resp.into_string()?),
            Err(ureq::Error::Status(code, _)) => Err(FetchError::Http(code)),
            Err(err) => Err(FetchError::Network(err.to_string())),
        };
    }
    if location.starts_with('/') && !std::path::Path::new(location).exists() {
        return Err(FetchError::Unsupported(location.to_string()));
    }
    Ok(std::fs::read_to_string(location)?)
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn temp_file(name: &str, body: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "learnadmin-fetch-{}-{name}",
            std::process::id()
        ));
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn reads_local_json() {
        let path = temp_file("ok.json", r#"{"students": 120}"#);
        let value: HashMap<String, u32> =
            futures::executor::block_on(fetch_json(path.to_str().unwrap())).unwrap();
        assert_eq!(value["students"], 120);
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn malformed_body_is_a_decode_error() {
        let path = temp_file("bad.json", "{ not json");
        let result: Result<serde_json::Value, _> =
            futures::executor::block_on(fetch_json(path.to_str().unwrap()));
        assert!(matches!(result, Err(FetchError::Decode(_))));
        std::fs::remove_file(path).ok();
    }

    #[test]
    fn missing_api_path_is_unsupported() {
        let result: Result<serde_json::Value, _> =
            futures::executor::block_on(fetch_json("/api/reports"));
        assert!(matches!(result, Err(FetchError::Unsupported(_))));
    }

    #[test]
    fn missing_relative_file_is_io_error() {
        let result: Result<serde_json::Value, _> =
            futures::executor::block_on(fetch_json("assets/data/does-not-exist.json"));
        assert!(matches!(result, Err(FetchError::Io(_))));
    }
}
