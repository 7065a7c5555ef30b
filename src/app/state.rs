use crate::upload::{BatchEvent, PendingFile};
use std::sync::mpsc::Receiver;

/// Warning shown when submit is pressed with nothing selected.
pub const NO_FILES_WARNING: &str = "No files selected!";

/// Whether a batch is currently in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UploadStatus {
    #[default]
    Idle,
    Processing,
}

/// Everything the session holds between frames.
///
/// Lives on the UI thread; worker threads only reach it through the
/// event channel.
#[derive(Default)]
pub struct SessionState {
    pub status: UploadStatus,
    pub pending: Vec<PendingFile>,
    pub uploaded: bool,
    pub processed: Vec<String>,
    pub error_message: Option<String>,
    pub event_receiver: Option<Receiver<BatchEvent>>,
}

impl SessionState {
    pub fn clear(&mut self) {
        *self = SessionState::default();
    }

    pub fn is_processing(&self) -> bool {
        self.status == UploadStatus::Processing
    }

    /// Gate for starting a batch.
    ///
    /// A submit while one is in flight is a no-op. A submit with nothing
    /// pending records the user-visible warning and stays Idle. Otherwise
    /// the warning is cleared and the session flips to Processing.
    pub fn begin_submit(&mut self) -> bool {
        if self.is_processing() {
            log::warn!("upload already in flight, ignoring submit");
            return false;
        }
        if self.pending.is_empty() {
            self.error_message = Some(NO_FILES_WARNING.to_string());
            return false;
        }
        self.error_message = None;
        self.status = UploadStatus::Processing;
        true
    }

    /// Folds one worker event into the session. Returns the new listing
    /// when the processed set was replaced, so the caller can refresh the
    /// gallery.
    pub fn apply(&mut self, event: BatchEvent) -> Option<Vec<String>> {
        match event {
            BatchEvent::Uploaded => {
                self.uploaded = true;
                None
            }
            BatchEvent::Rejected(message) => {
                self.error_message = Some(message);
                None
            }
            BatchEvent::Listing(names) => {
                self.processed = names.clone();
                Some(names)
            }
            BatchEvent::Finished => {
                self.status = UploadStatus::Idle;
                self.event_receiver = None;
                None
            }
        }
    }

    /// Label of the submit control.
    pub fn submit_label(&self) -> &'static str {
        match self.status {
            UploadStatus::Idle => "Process Images",
            UploadStatus::Processing => "Processing…",
        }
    }

    /// The gallery only shows once an upload has succeeded and the
    /// listing is non-empty.
    pub fn gallery_visible(&self) -> bool {
        self.uploaded && !self.processed.is_empty()
    }
}
