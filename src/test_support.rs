//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::HashMap;
use std::io::Cursor;

use async_trait::async_trait;

use crate::media::{FetchError, ImageSource};

/// Serves canned bytes per URL; anything else is a 404.
#[derive(Default)]
pub struct StaticImageSource {
    responses: HashMap<String, Vec<u8>>,
}

impl StaticImageSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: &str, bytes: Vec<u8>) -> Self {
        self.responses.insert(url.to_string(), bytes);
        self
    }
}

#[async_trait]
impl ImageSource for StaticImageSource {
    fn name(&self) -> &str {
        "static"
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        self.responses
            .get(url)
            .cloned()
            .ok_or_else(|| FetchError::Status {
                status: 404,
                url: url.to_string(),
            })
    }
}

/// A source that is always offline.
pub struct FailingImageSource;

#[async_trait]
impl ImageSource for FailingImageSource {
    fn name(&self) -> &str {
        "failing"
    }

    async fn fetch(&self, _url: &str) -> Result<Vec<u8>, FetchError> {
        Err(FetchError::Network("connection refused".to_string()))
    }
}

/// Encodes a solid-color PNG.
pub fn png_bytes(width: u32, height: u32, color: [u8; 3]) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb(color));
    let mut buf = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .unwrap();
    buf
}

/// Creates a test App over the built-in deck.
pub fn test_app() -> crate::core::state::App {
    crate::core::state::App::new(crate::core::deck::Deck::builtin())
}
