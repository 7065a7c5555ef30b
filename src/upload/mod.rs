mod batch;
mod ingest;
mod types;

pub use batch::{BatchClient, BatchError, BATCH_FIELD};
pub use ingest::{collect_images, is_supported_image, SUPPORTED_EXTENSIONS};
pub use types::{BatchEvent, PendingFile, ProcessedListing};
