//! Display side of the processed-image listing.
//!
//! A worker thread fetches and decodes each listed image; the UI thread
//! turns the arrived pixels into textures and renders them in listing
//! order. A new listing throws the old textures away and starts over.

use crate::config::ApiConfig;
use eframe::egui;
use std::collections::{HashMap, HashSet};
use std::sync::mpsc::{channel, Receiver};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GalleryError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("could not decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// One fetched image, or the reason it is missing.
pub struct FetchedImage {
    pub name: String,
    pub result: Result<egui::ColorImage, GalleryError>,
}

/// Decodes raw image bytes into egui pixel data.
pub fn decode_image(bytes: &[u8]) -> Result<egui::ColorImage, image::ImageError> {
    let decoded = image::load_from_memory(bytes)?.to_rgba8();
    let size = [decoded.width() as usize, decoded.height() as usize];
    Ok(egui::ColorImage::from_rgba_unmultiplied(
        size,
        decoded.as_flat_samples().as_slice(),
    ))
}

/// Texture cache for the current listing.
#[derive(Default)]
pub struct Gallery {
    textures: HashMap<String, egui::TextureHandle>,
    failed: HashSet<String>,
    receiver: Option<Receiver<FetchedImage>>,
    expected: usize,
    received: usize,
}

impl Gallery {
    pub fn clear(&mut self) {
        *self = Gallery::default();
    }

    /// Drops the current textures and starts fetching `names`.
    pub fn reload(&mut self, config: &ApiConfig, names: &[String]) {
        self.clear();
        if names.is_empty() {
            return;
        }
        self.expected = names.len();

        let (sender, receiver) = channel();
        self.receiver = Some(receiver);

        let config = config.clone();
        let names = names.to_vec();
        std::thread::spawn(move || {
            let rt = tokio::runtime::Runtime::new().unwrap();
            rt.block_on(async {
                let http = reqwest::Client::new();
                for name in names {
                    let result = fetch_image(&http, &config, &name).await;
                    if let Err(e) = &result {
                        log::error!("failed to load processed image {name}: {e}");
                    }
                    sender
                        .send(FetchedImage { name, result })
                        .unwrap_or_default();
                }
            });
        });
    }

    /// Drains the loader channel and uploads arrived pixels as textures.
    pub fn poll(&mut self, ctx: &egui::Context) {
        let mut fetched = Vec::new();
        if let Some(receiver) = &self.receiver {
            while let Ok(image) = receiver.try_recv() {
                fetched.push(image);
            }
        }

        for image in fetched {
            self.received += 1;
            match image.result {
                Ok(pixels) => {
                    let texture =
                        ctx.load_texture(image.name.clone(), pixels, egui::TextureOptions::LINEAR);
                    self.textures.insert(image.name, texture);
                }
                Err(_) => {
                    self.failed.insert(image.name);
                }
            }
            ctx.request_repaint();
        }

        if self.receiver.is_some() && self.received >= self.expected {
            self.receiver = None;
        }
    }

    pub fn texture(&self, name: &str) -> Option<&egui::TextureHandle> {
        self.textures.get(name)
    }

    pub fn has_failed(&self, name: &str) -> bool {
        self.failed.contains(name)
    }

    pub fn is_loading(&self) -> bool {
        self.receiver.is_some()
    }
}

async fn fetch_image(
    http: &reqwest::Client,
    config: &ApiConfig,
    name: &str,
) -> Result<egui::ColorImage, GalleryError> {
    let bytes = http
        .get(config.processed_image_url(name))
        .send()
        .await?
        .error_for_status()?
        .bytes()
        .await?;
    Ok(decode_image(&bytes)?)
}

#[cfg(test)]
mod tests {
    use super::decode_image;

    /// 1x1 RGB PNG, as small as the format allows.
    fn minimal_png() -> Vec<u8> {
        vec![
            0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, // signature
            0x00, 0x00, 0x00, 0x0D, // IHDR length
            0x49, 0x48, 0x44, 0x52, // IHDR
            0x00, 0x00, 0x00, 0x01, // width = 1
            0x00, 0x00, 0x00, 0x01, // height = 1
            0x08, 0x02, 0x00, 0x00, 0x00, // 8-bit RGB
            0x90, 0x77, 0x53, 0xDE, // IHDR CRC
            0x00, 0x00, 0x00, 0x0C, // IDAT length
            0x49, 0x44, 0x41, 0x54, // IDAT
            0x08, 0x99, 0x01, 0x01, 0x00, 0x00, 0x00, 0xFF, 0xFF, 0x00, 0x00, 0x00, 0x02, 0x00,
            0x01, // IDAT data
            0x00, 0x00, 0x00, 0x00, // IEND length
            0x49, 0x45, 0x4E, 0x44, // IEND
            0xAE, 0x42, 0x60, 0x82, // IEND CRC
        ]
    }

    #[test]
    fn decodes_png_bytes_into_pixels() {
        let pixels = decode_image(&minimal_png()).unwrap();
        assert_eq!(pixels.size, [1, 1]);
    }

    #[test]
    fn rejects_non_image_bytes() {
        assert!(decode_image(b"not an image").is_err());
    }
}
