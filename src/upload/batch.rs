use crate::config::ApiConfig;
use crate::upload::types::{BatchEvent, PendingFile, ProcessedListing};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, StatusCode};
use std::path::Path;
use std::sync::mpsc::Sender;
use thiserror::Error;
use tokio::fs;

/// Field key shared by every file part of the batch form.
pub const BATCH_FIELD: &str = "files";

#[derive(Error, Debug)]
pub enum BatchError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("malformed listing response: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read {path}: {source}")]
    FileRead {
        path: String,
        source: std::io::Error,
    },
}

/// Client for the two ClearFrame endpoints the uploader talks to.
pub struct BatchClient {
    http: Client,
    config: ApiConfig,
}

impl BatchClient {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }

    /// POSTs all pending files as one multipart batch and returns the
    /// HTTP status. The response body is not inspected.
    pub async fn submit(&self, files: &[PendingFile]) -> Result<StatusCode, BatchError> {
        let form = build_form(files).await?;
        let response = self
            .http
            .post(self.config.batch_process_url())
            .multipart(form)
            .send()
            .await?;
        Ok(response.status())
    }

    /// Fetches the listing of processed image names.
    ///
    /// The body is parsed whatever the HTTP status; only transport and
    /// parse failures are errors.
    pub async fn fetch_processed(&self) -> Result<Vec<String>, BatchError> {
        let body = self
            .http
            .get(self.config.processed_list_url())
            .send()
            .await?
            .text()
            .await?;
        let listing: ProcessedListing = serde_json::from_str(&body)?;
        Ok(listing.images)
    }

    /// Drives one submit from the worker thread, reporting through
    /// `events`. `Finished` is always the last event sent, whatever
    /// happened before it.
    pub async fn run(&self, files: Vec<PendingFile>, events: &Sender<BatchEvent>) {
        match self.submit(&files).await {
            Ok(status) if status.is_success() => {
                events.send(BatchEvent::Uploaded).unwrap_or_default();
                match self.fetch_processed().await {
                    Ok(names) => {
                        log::info!("received {} processed image names", names.len());
                        events.send(BatchEvent::Listing(names)).unwrap_or_default();
                    }
                    // The listing the UI already shows stays untouched.
                    Err(e) => log::error!("failed to fetch processed listing: {e}"),
                }
            }
            Ok(status) => {
                events
                    .send(BatchEvent::Rejected(format!(
                        "Upload failed with status: {status}"
                    )))
                    .unwrap_or_default();
            }
            Err(e @ BatchError::FileRead { .. }) => {
                events
                    .send(BatchEvent::Rejected(e.to_string()))
                    .unwrap_or_default();
            }
            // Transport problems are logged, not shown.
            Err(e) => log::error!("batch upload failed: {e}"),
        }
        events.send(BatchEvent::Finished).unwrap_or_default();
    }
}

async fn build_form(files: &[PendingFile]) -> Result<Form, BatchError> {
    let mut form = Form::new();
    for file in files {
        let bytes = fs::read(&file.path)
            .await
            .map_err(|source| BatchError::FileRead {
                path: file.path.display().to_string(),
                source,
            })?;
        let part = Part::bytes(bytes)
            .file_name(file.name.clone())
            .mime_str(mime_for(&file.path))?;
        form = form.part(BATCH_FIELD, part);
    }
    Ok(form)
}

/// MIME type for a form part, derived from the file extension.
fn mime_for(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("png") => "image/png",
        Some(ext) if ext.eq_ignore_ascii_case("jpg") || ext.eq_ignore_ascii_case("jpeg") => {
            "image/jpeg"
        }
        Some(ext) if ext.eq_ignore_ascii_case("webp") => "image/webp",
        _ => "application/octet-stream",
    }
}
