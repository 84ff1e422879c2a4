//! # FolioPage Widget
//!
//! The content-page template: paper background, text on the left half,
//! image on the right half.
//!
//! ```text
//! ┌──────────────────────────┬──────────────────────────┐
//! │  S A I   V I D Y A ...   │░░░▒▒▓▓██ image ██████████│
//! │  Institution Overview    │░░░▒▒▓▓██████████████████ │
//! │  ▀▀▀▀▀▀                  │░░░▒▒▓▓██████████████████ │
//! │  Established in 2008...  │░░░▒▒▓▓██████████████████ │
//! └──────────────────────────┴──────────────────────────┘
//! ```
//!
//! Both halves reveal together (`reveal` 0 → 1): text fades in and rises two
//! rows, the image fades in while zooming from 1.05 to 1.0. The reveal is
//! purely cosmetic and never gates navigation.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use crate::core::deck::Page;
use crate::media::{Fit, Raster};
use crate::tui::components::raster_view::{RasterView, seam_mask};
use crate::tui::palette::{BODY, INK, LABEL, PAPER, blend, darken};

/// Widest the body copy is allowed to run.
const MAX_TEXT_WIDTH: u16 = 52;
const RISE_ROWS: f64 = 2.0;
const START_ZOOM: f64 = 1.05;
const RULE: &str = "▀▀▀▀▀▀";

pub struct FolioPage<'a> {
    pub page: &'a Page,
    /// `None` while the image is still loading.
    pub image: Option<&'a Raster>,
    pub reveal: f64,
    /// Shade falling over the page as it turns away (0 = none).
    pub shade: f64,
}

impl<'a> FolioPage<'a> {
    pub fn new(page: &'a Page, image: Option<&'a Raster>) -> Self {
        Self {
            page,
            image,
            reveal: 1.0,
            shade: 0.0,
        }
    }

    pub fn reveal(mut self, reveal: f64) -> Self {
        self.reveal = reveal.clamp(0.0, 1.0);
        self
    }

    pub fn shade(mut self, shade: f64) -> Self {
        self.shade = shade.clamp(0.0, 1.0);
        self
    }
}

/// Spreads letters apart when there is room, like tracked small caps.
fn tracked(text: &str, width: u16) -> String {
    let upper = text.to_uppercase();
    let spaced: String = upper
        .chars()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    if spaced.width() <= width as usize {
        spaced
    } else {
        upper
    }
}

/// Builds the text block at full opacity; the caller fades it.
fn text_lines(page: &Page, width: u16, alpha: f64) -> Vec<Line<'static>> {
    let fade = |color: Color| blend(PAPER, color, alpha);
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled(
        tracked(page.title, width),
        Style::default()
            .fg(fade(blend(PAPER, LABEL, 0.6)))
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::default());

    for row in textwrap::wrap(page.subtitle, width as usize) {
        lines.push(Line::from(Span::styled(
            row.into_owned(),
            Style::default().fg(fade(INK)).add_modifier(Modifier::BOLD),
        )));
    }
    lines.push(Line::default());

    lines.push(Line::from(Span::styled(
        RULE,
        Style::default().fg(fade(blend(PAPER, LABEL, 0.2))),
    )));
    lines.push(Line::default());

    for row in textwrap::wrap(page.content, width as usize) {
        lines.push(Line::from(Span::styled(
            row.into_owned(),
            Style::default().fg(fade(blend(PAPER, BODY, 0.9))),
        )));
    }

    lines
}

impl FolioPage<'_> {
    fn render_text(&self, area: Rect, buf: &mut Buffer) {
        if self.reveal <= 0.0 || area.width < 12 {
            return;
        }
        let inner = Rect {
            x: area.x + 4u16.min(area.width / 8),
            width: area.width.saturating_sub(6).min(MAX_TEXT_WIDTH),
            ..area
        };
        let lines = text_lines(self.page, inner.width, self.reveal);
        let height = (lines.len() as u16).min(inner.height);
        let rise = ((1.0 - self.reveal) * RISE_ROWS).round() as u16;
        let top = inner.y + (inner.height - height) / 2;
        let y = (top + rise).min(inner.bottom().saturating_sub(height));

        Paragraph::new(lines).render(
            Rect {
                y,
                height,
                ..inner
            },
            buf,
        );
    }

    fn render_image(&self, area: Rect, buf: &mut Buffer) {
        match self.image {
            Some(raster) => {
                RasterView::new(raster, PAPER)
                    .fit(Fit::Cover)
                    .zoom(START_ZOOM - (START_ZOOM - 1.0) * self.reveal)
                    .opacity(self.reveal)
                    .mask(seam_mask)
                    .tone(0.2, 0.95)
                    .render(area, buf);
            }
            None => {
                // Still loading: a faint mark where the image will land
                if area.width > 0 && area.height > 0 {
                    let x = area.x + area.width / 2;
                    let y = area.y + area.height / 2;
                    buf.set_string(x, y, "◌", Style::default().fg(blend(PAPER, LABEL, 0.3)));
                }
            }
        }
    }

    /// Right-edge shadow and, while turning away, the shade from the binding.
    fn render_shadows(&self, area: Rect, buf: &mut Buffer) {
        let width = area.width as f64;
        for col in 0..area.width {
            let from_right = area.width - 1 - col;
            let edge: f64 = match from_right {
                0 => 0.10,
                1 => 0.05,
                _ => 0.0,
            };
            let t = col as f64 / width;
            let binding = 0.3 * self.shade * (1.0 - t * 2.0).clamp(0.0, 1.0);
            let amount = edge.max(binding);
            if amount <= 0.0 {
                continue;
            }
            for row in 0..area.height {
                if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                    cell.set_fg(darken(cell.fg, amount));
                    cell.set_bg(darken(cell.bg, amount));
                }
            }
        }
    }
}

impl Widget for FolioPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(PAPER).fg(BODY));
        let [text_area, image_area] =
            Layout::horizontal([Constraint::Percentage(50), Constraint::Percentage(50)])
                .areas(area);
        self.render_image(image_area, buf);
        self.render_text(text_area, buf);
        self.render_shadows(area, buf);
    }
}
