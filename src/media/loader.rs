//! Image resolution with fallback.
//!
//! ```text
//! request.url ──fail──▶ request.placeholder_url ──fail──▶ Raster::generated(key)
//! ```
//!
//! The chain always ends in a raster, so callers never see an error.

use std::sync::Arc;

use log::{info, warn};

use crate::core::deck::ImageRequest;
use crate::media::raster::Raster;
use crate::media::source::{FetchError, ImageSource};

/// Size of the locally generated last-resort raster.
pub const GENERATED_SIZE: (u32, u32) = (96, 64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageOrigin {
    /// The page's own image URL.
    Primary,
    /// The deterministic placeholder URL.
    Placeholder,
    /// Generated locally after both URLs failed.
    Generated,
}

#[derive(Debug, Clone)]
pub struct ResolvedImage {
    pub key: String,
    pub origin: ImageOrigin,
    pub raster: Arc<Raster>,
}

async fn fetch_raster(source: &dyn ImageSource, url: &str) -> Result<Raster, FetchError> {
    let bytes = source.fetch(url).await?;
    Raster::decode(&bytes)
}

/// Resolves one image, walking the fallback chain.
pub async fn resolve_image(source: &dyn ImageSource, request: &ImageRequest) -> ResolvedImage {
    let (raster, origin) = match fetch_raster(source, &request.url).await {
        Ok(raster) => (raster, ImageOrigin::Primary),
        Err(primary_err) => {
            warn!(
                "Image '{}' failed via {} ({}), trying placeholder",
                request.key,
                source.name(),
                primary_err
            );
            match fetch_raster(source, &request.placeholder_url).await {
                Ok(raster) => (raster, ImageOrigin::Placeholder),
                Err(placeholder_err) => {
                    warn!(
                        "Placeholder for '{}' failed ({}), generating locally",
                        request.key, placeholder_err
                    );
                    let (w, h) = GENERATED_SIZE;
                    (Raster::generated(&request.key, w, h), ImageOrigin::Generated)
                }
            }
        }
    };

    info!(
        "Image '{}' resolved ({:?}, {}x{})",
        request.key,
        origin,
        raster.width(),
        raster.height()
    );

    ResolvedImage {
        key: request.key.clone(),
        origin,
        raster: Arc::new(raster),
    }
}

/// Fallback used when image loading is disabled: straight to the local raster.
pub fn offline_image(request: &ImageRequest) -> ResolvedImage {
    let (w, h) = GENERATED_SIZE;
    ResolvedImage {
        key: request.key.clone(),
        origin: ImageOrigin::Generated,
        raster: Arc::new(Raster::generated(&request.key, w, h)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{FailingImageSource, StaticImageSource, png_bytes};

    fn request() -> ImageRequest {
        ImageRequest {
            key: "intro".to_string(),
            url: "mem://primary".to_string(),
            placeholder_url: "mem://placeholder".to_string(),
        }
    }

    #[test]
    fn test_primary_wins_when_available() {
        let source = StaticImageSource::new()
            .with("mem://primary", png_bytes(2, 2, [1, 1, 1]))
            .with("mem://placeholder", png_bytes(2, 2, [9, 9, 9]));
        let resolved = tokio_test::block_on(resolve_image(&source, &request()));
        assert_eq!(resolved.origin, ImageOrigin::Primary);
        assert_eq!(resolved.raster.pixel(0, 0), [1, 1, 1]);
    }

    #[test]
    fn test_placeholder_used_when_primary_fails() {
        let source = StaticImageSource::new().with("mem://placeholder", png_bytes(2, 2, [9, 9, 9]));
        let resolved = tokio_test::block_on(resolve_image(&source, &request()));
        assert_eq!(resolved.origin, ImageOrigin::Placeholder);
        assert_eq!(resolved.raster.pixel(1, 1), [9, 9, 9]);
        assert_eq!(resolved.key, "intro");
    }

    #[test]
    fn test_undecodable_primary_falls_back() {
        let source = StaticImageSource::new()
            .with("mem://primary", b"<html>not found</html>".to_vec())
            .with("mem://placeholder", png_bytes(2, 2, [9, 9, 9]));
        let resolved = tokio_test::block_on(resolve_image(&source, &request()));
        assert_eq!(resolved.origin, ImageOrigin::Placeholder);
    }

    #[test]
    fn test_generated_when_everything_fails() {
        let resolved = tokio_test::block_on(resolve_image(&FailingImageSource, &request()));
        assert_eq!(resolved.origin, ImageOrigin::Generated);
        let (w, h) = GENERATED_SIZE;
        assert_eq!(*resolved.raster, Raster::generated("intro", w, h));
    }

    #[test]
    fn test_offline_image_matches_generated_fallback() {
        let offline = offline_image(&request());
        let failed = tokio_test::block_on(resolve_image(&FailingImageSource, &request()));
        assert_eq!(offline.raster, failed.raster);
        assert_eq!(offline.origin, ImageOrigin::Generated);
    }
}
