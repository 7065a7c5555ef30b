//! Where the ClearFrame service lives.
//!
//! The base URL is read from the environment exactly once, in `main`, and
//! the resulting [`ApiConfig`] is handed to the app and to every network
//! worker. Nothing else reads the environment.

use std::env;

/// Environment variable holding the base URL of the processing service.
pub const API_URL_ENV: &str = "CLEARFRAME_API_URL";

/// Service address used when the environment does not say otherwise.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    /// Reads the base URL from [`API_URL_ENV`], falling back to
    /// [`DEFAULT_API_URL`].
    pub fn from_env() -> Self {
        match env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => {
                log::info!("{API_URL_ENV} not set, using {DEFAULT_API_URL}");
                Self::new(DEFAULT_API_URL)
            }
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Endpoint receiving the multipart batch upload.
    pub fn batch_process_url(&self) -> String {
        format!("{}/api/batch-process/", self.base_url)
    }

    /// Endpoint listing the names of processed images.
    pub fn processed_list_url(&self) -> String {
        format!("{}/api/get-processed/", self.base_url)
    }

    /// Endpoint serving the bytes of one processed image.
    pub fn processed_image_url(&self, name: &str) -> String {
        format!("{}/api/get-processed/{}", self.base_url, name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_normalized() {
        let config = ApiConfig::new("http://localhost:8000/");
        assert_eq!(config.base_url(), "http://localhost:8000");
    }

    #[test]
    fn endpoint_urls() {
        let config = ApiConfig::new("https://api.clearframe.example");
        assert_eq!(
            config.batch_process_url(),
            "https://api.clearframe.example/api/batch-process/"
        );
        assert_eq!(
            config.processed_list_url(),
            "https://api.clearframe.example/api/get-processed/"
        );
        assert_eq!(
            config.processed_image_url("out1.png"),
            "https://api.clearframe.example/api/get-processed/out1.png"
        );
    }
}
