//! # RasterView Widget
//!
//! Draws a [`Raster`] with upper-half blocks: each cell shows two vertically
//! stacked pixels (`▀` foreground = top, background = bottom), which gives
//! roughly square pixels in most terminal fonts.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Color;
use ratatui::widgets::Widget;

use crate::media::{Fit, Raster, Rgb};
use crate::tui::palette::{blend_rgb, rgb, to_rgb, vintage};

const HALF_BLOCK: &str = "▀";

/// How much of `backdrop` shows through at normalized column `t` of the box.
pub type Mask = fn(f64) -> f64;

/// Content-page seam: solid paper at the seam, clearing by mid-image, plus a
/// faint wash at the outer edge.
pub fn seam_mask(t: f64) -> f64 {
    let seam = (1.0 - t / 0.45).clamp(0.0, 1.0);
    let edge = 0.3 * ((t - 2.0 / 3.0) * 3.0).clamp(0.0, 1.0);
    seam.max(edge)
}

pub struct RasterView<'a> {
    pub raster: &'a Raster,
    pub fit: Fit,
    /// `> 1.0` magnifies about the center.
    pub zoom: f64,
    pub opacity: f64,
    /// Color under the image (letterbox, fade, mask).
    pub backdrop: Color,
    pub mask: Option<Mask>,
    pub sepia: f64,
    pub brightness: f64,
}

impl<'a> RasterView<'a> {
    pub fn new(raster: &'a Raster, backdrop: Color) -> Self {
        Self {
            raster,
            fit: Fit::Cover,
            zoom: 1.0,
            opacity: 1.0,
            backdrop,
            mask: None,
            sepia: 0.0,
            brightness: 1.0,
        }
    }

    pub fn fit(mut self, fit: Fit) -> Self {
        self.fit = fit;
        self
    }

    pub fn zoom(mut self, zoom: f64) -> Self {
        self.zoom = zoom;
        self
    }

    pub fn opacity(mut self, opacity: f64) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn mask(mut self, mask: Mask) -> Self {
        self.mask = Some(mask);
        self
    }

    pub fn tone(mut self, sepia: f64, brightness: f64) -> Self {
        self.sepia = sepia;
        self.brightness = brightness;
        self
    }

    fn pixel(&self, box_w: u32, box_h: u32, x: u32, y: u32, backdrop: Rgb) -> Rgb {
        let Some(px) = self
            .raster
            .sample_fitted(box_w, box_h, x, y, self.fit, self.zoom)
        else {
            return backdrop;
        };
        let px = vintage(px, self.sepia, self.brightness);
        let px = match self.mask {
            Some(mask) => blend_rgb(px, backdrop, mask((x as f64 + 0.5) / box_w as f64)),
            None => px,
        };
        blend_rgb(backdrop, px, self.opacity)
    }
}

impl Widget for RasterView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() || self.opacity <= 0.0 {
            return;
        }
        let Some(backdrop) = to_rgb(self.backdrop) else {
            return;
        };
        let box_w = area.width as u32;
        let box_h = area.height as u32 * 2;

        for row in 0..area.height {
            for col in 0..area.width {
                let x = col as u32;
                let top = self.pixel(box_w, box_h, x, row as u32 * 2, backdrop);
                let bottom = self.pixel(box_w, box_h, x, row as u32 * 2 + 1, backdrop);
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_symbol(HALF_BLOCK);
                    cell.set_fg(rgb(top));
                    cell.set_bg(rgb(bottom));
                }
            }
        }
    }
}
