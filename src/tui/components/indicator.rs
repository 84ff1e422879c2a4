//! # FolioIndicator Component
//!
//! "Folio n / len" in the bottom-right corner of the stage, followed by one
//! mark per page. Draws foreground only so the page underneath shows through.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};

use crate::core::navigator::Navigator;
use crate::tui::component::Component;
use crate::tui::palette::{ACCENT, INK};

const MARGIN: u16 = 2;

pub struct FolioIndicator<'a> {
    pub navigator: &'a Navigator,
}

impl<'a> FolioIndicator<'a> {
    pub fn new(navigator: &'a Navigator) -> Self {
        Self { navigator }
    }

    fn line(&self) -> Line<'static> {
        let current = self.navigator.current_index();
        let mut spans = vec![
            Span::styled(
                self.navigator.folio_label(),
                Style::default().fg(INK).add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
        ];
        for index in 0..self.navigator.len() {
            if index > 0 {
                spans.push(Span::raw(" "));
            }
            let mark = if index == current {
                Span::styled("━━", Style::default().fg(ACCENT))
            } else {
                Span::styled("━", Style::default().fg(INK))
            };
            spans.push(mark);
        }
        Line::from(spans)
    }
}

impl Component for FolioIndicator<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let line = self.line();
        let width = line.width() as u16;
        if area.height < MARGIN || area.width < width + MARGIN {
            return;
        }
        let x = area.right() - MARGIN - width;
        let y = area.bottom() - MARGIN;
        frame.buffer_mut().set_line(x, y, &line, width);
    }
}
