//! Desktop client for the ClearFrame image-processing service.
//!
//! Select image files, upload them to the service as one multipart batch,
//! then fetch and display the processed results. All state is in-memory
//! and scoped to the app session.

pub mod app;
pub mod config;
pub mod gallery;
pub mod upload;
pub mod utils;
