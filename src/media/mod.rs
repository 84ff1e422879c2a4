//! # Media
//!
//! The image collaborator. Pages reference images by URL; this module fetches
//! them through an [`ImageSource`], decodes them into a [`Raster`], and falls
//! back to a deterministic placeholder when anything goes wrong.

pub mod loader;
pub mod raster;
pub mod source;

pub use loader::{ImageOrigin, ResolvedImage, offline_image, resolve_image};
pub use raster::{Fit, Raster, Rgb};
pub use source::{FetchError, HttpImageSource, ImageSource};
