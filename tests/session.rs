use clearframe::app::{SessionState, UploadStatus, NO_FILES_WARNING};
use clearframe::config::ApiConfig;
use clearframe::upload::{BatchEvent, PendingFile};

fn pending(names: &[&str]) -> Vec<PendingFile> {
    names.iter().map(|n| PendingFile::from_path(*n)).collect()
}

// ── selection ────────────────────────────────────────────────────

#[test]
fn selection_preserves_order_and_duplicates() {
    let mut state = SessionState::default();
    for name in ["cat.jpg", "dog.png", "cat.jpg"] {
        state.pending.push(PendingFile::from_path(name));
    }

    let names: Vec<_> = state.pending.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["cat.jpg", "dog.png", "cat.jpg"]);
}

// ── submit gate ──────────────────────────────────────────────────

#[test]
fn submit_with_nothing_pending_warns_and_stays_idle() {
    let mut state = SessionState::default();

    assert!(!state.begin_submit());
    assert_eq!(state.error_message.as_deref(), Some(NO_FILES_WARNING));
    assert_eq!(state.status, UploadStatus::Idle);
}

#[test]
fn submit_flips_to_processing_and_clears_the_warning() {
    let mut state = SessionState::default();
    state.error_message = Some("old warning".into());
    state.pending = pending(&["cat.jpg"]);

    assert!(state.begin_submit());
    assert_eq!(state.status, UploadStatus::Processing);
    assert!(state.error_message.is_none());
    assert_eq!(state.submit_label(), "Processing…");
}

#[test]
fn a_second_submit_while_processing_is_a_no_op() {
    let mut state = SessionState::default();
    state.pending = pending(&["cat.jpg"]);

    assert!(state.begin_submit());
    assert!(!state.begin_submit());
    assert_eq!(state.status, UploadStatus::Processing);
}

// ── event folding ────────────────────────────────────────────────

#[test]
fn finished_returns_to_idle_whatever_the_outcome() {
    let outcomes: [Option<BatchEvent>; 3] = [
        Some(BatchEvent::Uploaded),
        Some(BatchEvent::Rejected("Upload failed with status: 500".into())),
        None, // transport failure: the worker said nothing at all
    ];

    for outcome in outcomes {
        let mut state = SessionState::default();
        state.pending = pending(&["cat.jpg"]);
        assert!(state.begin_submit());

        let expect_uploaded = matches!(outcome, Some(BatchEvent::Uploaded));
        if let Some(event) = outcome {
            state.apply(event);
        }
        state.apply(BatchEvent::Finished);

        assert_eq!(state.status, UploadStatus::Idle);
        assert_eq!(state.submit_label(), "Process Images");
        assert_eq!(state.uploaded, expect_uploaded);
    }
}

#[test]
fn a_listing_replaces_rather_than_appends() {
    let mut state = SessionState::default();
    state.processed = vec!["stale.png".to_string()];

    let replaced = state.apply(BatchEvent::Listing(vec![
        "a.png".to_string(),
        "b.png".to_string(),
    ]));

    assert_eq!(state.processed, ["a.png", "b.png"]);
    assert_eq!(
        replaced,
        Some(vec!["a.png".to_string(), "b.png".to_string()])
    );
}

#[test]
fn a_rejection_shows_its_message() {
    let mut state = SessionState::default();
    state.apply(BatchEvent::Rejected("Upload failed with status: 503".into()));

    assert_eq!(
        state.error_message.as_deref(),
        Some("Upload failed with status: 503")
    );
    assert!(!state.uploaded);
}

// ── gallery gating ───────────────────────────────────────────────

#[test]
fn the_gallery_needs_an_upload_and_a_nonempty_listing() {
    let mut state = SessionState::default();
    assert!(!state.gallery_visible());

    // A listing alone is not enough.
    state.apply(BatchEvent::Listing(vec!["a.png".to_string()]));
    assert!(!state.gallery_visible());

    state.apply(BatchEvent::Uploaded);
    assert!(state.gallery_visible());

    // An empty listing hides it again.
    state.apply(BatchEvent::Listing(Vec::new()));
    assert!(!state.gallery_visible());
}

// ── end to end over the state machine ────────────────────────────

#[test]
fn upload_then_listing_scenario() {
    let mut state = SessionState::default();
    state.pending = pending(&["cat.jpg", "dog.png"]);
    assert!(state.begin_submit());
    assert_eq!(state.submit_label(), "Processing…");

    for event in [
        BatchEvent::Uploaded,
        BatchEvent::Listing(vec!["out1.png".to_string()]),
        BatchEvent::Finished,
    ] {
        state.apply(event);
    }

    assert!(state.uploaded);
    assert!(state.gallery_visible());
    assert_eq!(state.submit_label(), "Process Images");

    let config = ApiConfig::new("http://localhost:8000");
    let urls: Vec<_> = state
        .processed
        .iter()
        .map(|name| config.processed_image_url(name))
        .collect();
    assert_eq!(urls, ["http://localhost:8000/api/get-processed/out1.png"]);
}

#[test]
fn clear_resets_everything() {
    let mut state = SessionState::default();
    state.pending = pending(&["cat.jpg"]);
    state.uploaded = true;
    state.processed = vec!["a.png".to_string()];
    state.error_message = Some("boom".into());

    state.clear();

    assert!(state.pending.is_empty());
    assert!(!state.uploaded);
    assert!(state.processed.is_empty());
    assert!(state.error_message.is_none());
    assert_eq!(state.status, UploadStatus::Idle);
}
