//! # Raster
//!
//! A small decoded RGB image, sized for terminal rendering. Pixels are
//! sampled through [`Raster::sample_fitted`], which implements CSS-like
//! `object-fit` (cover/contain) plus a zoom factor for the scale-in effect.

use crate::media::source::FetchError;

pub type Rgb = [u8; 3];

/// Largest edge kept after decoding. Terminals never show more.
pub const MAX_DIMENSION: u32 = 320;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fit {
    /// Fill the box, cropping the overflow.
    Cover,
    /// Fit inside the box, leaving the remainder empty.
    Contain,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    pixels: Vec<Rgb>,
}

impl Raster {
    pub fn from_rgb(width: u32, height: u32, pixels: Vec<Rgb>) -> Option<Self> {
        if width == 0 || height == 0 || pixels.len() != (width * height) as usize {
            return None;
        }
        Some(Self {
            width,
            height,
            pixels,
        })
    }

    /// Decodes PNG/JPEG/WebP bytes, downscaling to [`MAX_DIMENSION`].
    pub fn decode(bytes: &[u8]) -> Result<Self, FetchError> {
        let img = image::load_from_memory(bytes).map_err(|e| FetchError::Decode(e.to_string()))?;
        let img = if img.width() > MAX_DIMENSION || img.height() > MAX_DIMENSION {
            img.thumbnail(MAX_DIMENSION, MAX_DIMENSION)
        } else {
            img
        };
        let rgb = img.to_rgb8();
        let (width, height) = rgb.dimensions();
        let pixels = rgb.pixels().map(|p| p.0).collect();
        Self::from_rgb(width, height, pixels)
            .ok_or_else(|| FetchError::Decode("image has no pixels".to_string()))
    }

    /// Local last-resort placeholder: a diagonal two-tone gradient whose hues
    /// are derived from `seed`. The same seed always yields the same raster.
    pub fn generated(seed: &str, width: u32, height: u32) -> Self {
        let width = width.max(1);
        let height = height.max(1);
        let hash = fnv1a(seed.as_bytes());
        let from = hue_to_rgb((hash % 360) as f64, 0.35, 0.55);
        let to = hue_to_rgb(((hash >> 16) % 360) as f64, 0.45, 0.30);

        let mut pixels = Vec::with_capacity((width * height) as usize);
        let span = (width + height).saturating_sub(2).max(1) as f64;
        for y in 0..height {
            for x in 0..width {
                let t = (x + y) as f64 / span;
                pixels.push(mix(from, to, t));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn pixel(&self, x: u32, y: u32) -> Rgb {
        let x = x.min(self.width - 1);
        let y = y.min(self.height - 1);
        self.pixels[(y * self.width + x) as usize]
    }

    /// Nearest-neighbour sample at normalized coordinates.
    pub fn sample(&self, u: f64, v: f64) -> Rgb {
        let x = (u.clamp(0.0, 1.0) * self.width as f64) as u32;
        let y = (v.clamp(0.0, 1.0) * self.height as f64) as u32;
        self.pixel(x, y)
    }

    /// Samples the raster laid into a `box_w × box_h` pixel box at `(x, y)`.
    ///
    /// `zoom > 1` magnifies about the center. Returns `None` for box pixels
    /// the image does not cover (only possible with [`Fit::Contain`]).
    pub fn sample_fitted(
        &self,
        box_w: u32,
        box_h: u32,
        x: u32,
        y: u32,
        fit: Fit,
        zoom: f64,
    ) -> Option<Rgb> {
        if box_w == 0 || box_h == 0 {
            return None;
        }
        let box_aspect = box_w as f64 / box_h as f64;
        let img_aspect = self.width as f64 / self.height as f64;

        let mut u = (x as f64 + 0.5) / box_w as f64;
        let mut v = (y as f64 + 0.5) / box_h as f64;

        match fit {
            Fit::Cover => {
                // Fraction of the source visible along the cropped axis
                if img_aspect > box_aspect {
                    u = 0.5 + (u - 0.5) * (box_aspect / img_aspect);
                } else {
                    v = 0.5 + (v - 0.5) * (img_aspect / box_aspect);
                }
            }
            Fit::Contain => {
                // Fraction of the box the image occupies along the short axis
                if img_aspect > box_aspect {
                    let f = box_aspect / img_aspect;
                    v = (v - (1.0 - f) / 2.0) / f;
                } else {
                    let f = img_aspect / box_aspect;
                    u = (u - (1.0 - f) / 2.0) / f;
                }
                if !(0.0..1.0).contains(&u) || !(0.0..1.0).contains(&v) {
                    return None;
                }
            }
        }

        let zoom = zoom.max(f64::EPSILON);
        u = 0.5 + (u - 0.5) / zoom;
        v = 0.5 + (v - 0.5) / zoom;
        Some(self.sample(u, v))
    }
}

fn fnv1a(bytes: &[u8]) -> u64 {
    let mut hash: u64 = 0xcbf2_9ce4_8422_2325;
    for b in bytes {
        hash ^= *b as u64;
        hash = hash.wrapping_mul(0x0000_0100_0000_01b3);
    }
    hash
}

fn mix(a: Rgb, b: Rgb, t: f64) -> Rgb {
    let t = t.clamp(0.0, 1.0);
    let ch = |i: usize| (a[i] as f64 + (b[i] as f64 - a[i] as f64) * t).round() as u8;
    [ch(0), ch(1), ch(2)]
}

/// HSL → RGB with hue in degrees.
fn hue_to_rgb(hue: f64, saturation: f64, lightness: f64) -> Rgb {
    let c = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let h = hue / 60.0;
    let x = c * (1.0 - (h % 2.0 - 1.0).abs());
    let (r, g, b) = match h as u32 {
        0 => (c, x, 0.0),
        1 => (x, c, 0.0),
        2 => (0.0, c, x),
        3 => (0.0, x, c),
        4 => (x, 0.0, c),
        _ => (c, 0.0, x),
    };
    let m = lightness - c / 2.0;
    let to_u8 = |v: f64| ((v + m) * 255.0).round().clamp(0.0, 255.0) as u8;
    [to_u8(r), to_u8(g), to_u8(b)]
}
