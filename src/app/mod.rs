mod state;
mod ui;

pub use state::{SessionState, UploadStatus, NO_FILES_WARNING};

use crate::config::ApiConfig;
use crate::gallery::Gallery;
use crate::upload::{collect_images, BatchClient, PendingFile};
use eframe::egui;
use std::path::{Path, PathBuf};
use std::sync::mpsc::channel;

pub struct ClearFrameApp {
    config: ApiConfig,
    state: SessionState,
    gallery: Gallery,
}

impl ClearFrameApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: ApiConfig) -> Self {
        log::info!("initializing ClearFrame uploader for {}", config.base_url());
        Self {
            config,
            state: SessionState::default(),
            gallery: Gallery::default(),
        }
    }

    /// Appends picked files to the pending list, in selection order.
    pub fn add_files(&mut self, paths: Vec<PathBuf>) {
        for path in paths {
            self.state.pending.push(PendingFile::from_path(path));
        }
    }

    /// Appends every supported image found under `dir`.
    pub fn add_folder(&mut self, dir: &Path) {
        let found = collect_images(dir);
        log::info!("found {} images under {}", found.len(), dir.display());
        self.state.pending.extend(found);
    }

    /// Starts one batch upload, unless the gate refuses.
    pub fn start_processing(&mut self) {
        if !self.state.begin_submit() {
            return;
        }
        log::info!("uploading batch of {} files", self.state.pending.len());

        let client = BatchClient::new(self.config.clone());
        let files = self.state.pending.clone();
        let (sender, receiver) = channel();
        self.state.event_receiver = Some(receiver);

        std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().unwrap();
            rt.block_on(async {
                client.run(files, &sender).await;
            });
        });
    }

    /// Resets the whole session: pending files, flags, listing, gallery.
    pub fn reset(&mut self) {
        log::info!("resetting session state");
        self.state.clear();
        self.gallery.clear();
    }

    /// Drains worker events and gallery results; called every frame.
    pub fn update_state(&mut self, ctx: &egui::Context) {
        let mut events = Vec::new();
        if let Some(receiver) = &self.state.event_receiver {
            while let Ok(event) = receiver.try_recv() {
                events.push(event);
            }
        }
        for event in events {
            if let Some(names) = self.state.apply(event) {
                self.gallery.reload(&self.config, &names);
            }
            ctx.request_repaint();
        }

        self.gallery.poll(ctx);

        if self.state.is_processing() || self.gallery.is_loading() {
            ctx.request_repaint();
        }
    }
}

impl eframe::App for ClearFrameApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_state(ctx);
        self.render(ctx);
    }
}
