//! # SpiralBinding Component
//!
//! Wire coils down the bound edge. Drawn after the stage so the coils sit on
//! top of a page turning toward the hinge.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};

use crate::tui::component::Component;
use crate::tui::palette::{BLACK, STEEL_DARK, STEEL_LIGHT, STEEL_MID};

pub const RINGS: u16 = 24;

pub struct SpiralBinding;

/// Steel shading across one coil: light at the top of the curve, dark where
/// it dives into the punched hole.
fn steel(t: f64) -> Color {
    if t < 0.3 {
        STEEL_LIGHT
    } else if t < 0.7 {
        STEEL_MID
    } else {
        STEEL_DARK
    }
}

impl Component for SpiralBinding {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if area.width < 2 || area.height == 0 {
            return;
        }
        let rings = RINGS.min(area.height);
        let buf = frame.buffer_mut();

        for ring in 0..rings {
            let y = area.y + (ring as u32 * area.height as u32 / rings as u32) as u16;
            let wire = area.width - 1;
            for col in 0..wire {
                let t = col as f64 / wire as f64;
                buf.set_string(area.x + col, y, "━", Style::default().fg(steel(t)));
            }
            // Punched hole on the page side
            buf.set_string(area.x + wire, y, "●", Style::default().fg(BLACK));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn ring_rows(height: u16) -> usize {
        let mut terminal = Terminal::new(TestBackend::new(8, height)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                SpiralBinding.render(f, area);
            })
            .unwrap();
        let buffer = terminal.backend().buffer();
        (0..height)
            .filter(|&y| buffer[(7, y)].symbol() == "●")
            .count()
    }

    #[test]
    fn test_draws_all_rings_when_tall() {
        assert_eq!(ring_rows(48), RINGS as usize);
    }

    #[test]
    fn test_short_strip_draws_one_ring_per_row() {
        assert_eq!(ring_rows(10), 10);
    }
}
