//! # Cover Widget
//!
//! The cover template: dark board, logo on the left, a thin divider, and the
//! institution name block on the right, all centered.
//!
//! The cover ignores the `Page` record entirely; it draws `CoverContent`.

use ratatui::buffer::Buffer;
use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use crate::core::deck::CoverContent;
use crate::media::{Fit, Raster};
use crate::tui::components::raster_view::RasterView;
use crate::tui::palette::{COVER, WHITE, blend};

const LOGO_COLS: u16 = 16;
const LOGO_ROWS: u16 = 8;
const GAP: u16 = 3;

pub struct CoverPage<'a> {
    pub cover: &'a CoverContent,
    /// `None` while the logo is still loading.
    pub logo: Option<&'a Raster>,
}

impl<'a> CoverPage<'a> {
    pub fn new(cover: &'a CoverContent, logo: Option<&'a Raster>) -> Self {
        Self { cover, logo }
    }

    fn headline(&self) -> String {
        // Letter-spaced display type
        self.cover
            .headline
            .chars()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(" ")
    }

    fn text_lines(&self) -> Vec<Line<'static>> {
        let headline = self.headline();
        let width = headline
            .width()
            .max(self.cover.subheading.width())
            .max(self.cover.tagline.width());

        vec![
            Line::from(Span::styled(
                headline,
                Style::default().fg(WHITE).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                self.cover.subheading.to_string(),
                Style::default().fg(blend(COVER, WHITE, 0.9)),
            )),
            Line::default(),
            Line::from(Span::styled(
                "─".repeat(width),
                Style::default().fg(blend(COVER, WHITE, 0.4)),
            )),
            Line::default(),
            Line::from(Span::styled(
                self.cover.tagline.to_string(),
                Style::default()
                    .fg(blend(COVER, WHITE, 0.8))
                    .add_modifier(Modifier::ITALIC),
            )),
        ]
    }
}

impl Widget for CoverPage<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, Style::default().bg(COVER).fg(WHITE));

        let lines = self.text_lines();
        let text_w = lines.iter().map(|l| l.width()).max().unwrap_or(0) as u16;
        let text_h = lines.len() as u16;
        let block_h = text_h.max(LOGO_ROWS);
        let with_logo = area.width >= LOGO_COLS + GAP * 2 + 1 + text_w && area.height >= LOGO_ROWS;

        let [block] = Layout::vertical([Constraint::Length(block_h.min(area.height))])
            .flex(Flex::Center)
            .areas(area);

        let text_area = if with_logo {
            let [logo_area, _, divider_area, _, text_area] = Layout::horizontal([
                Constraint::Length(LOGO_COLS),
                Constraint::Length(GAP),
                Constraint::Length(1),
                Constraint::Length(GAP),
                Constraint::Length(text_w),
            ])
            .flex(Flex::Center)
            .areas(block);

            if let Some(logo) = self.logo {
                RasterView::new(logo, COVER)
                    .fit(Fit::Contain)
                    .tone(0.0, 1.1)
                    .render(logo_area, buf);
            }

            let divider = Style::default().fg(blend(COVER, WHITE, 0.3));
            for row in 0..divider_area.height {
                buf.set_string(divider_area.x, divider_area.y + row, "│", divider);
            }
            text_area
        } else {
            let [text_area] = Layout::horizontal([Constraint::Length(text_w)])
                .flex(Flex::Center)
                .areas(block);
            text_area
        };

        let [text_area] = Layout::vertical([Constraint::Length(text_h)])
            .flex(Flex::Center)
            .areas(text_area);
        Paragraph::new(lines).render(text_area, buf);
    }
}
