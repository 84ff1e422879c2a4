use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::Style;

use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{FolioIndicator, NavZones, PageStage, SpiralBinding};
use crate::tui::palette::{BACKDROP, darken};

/// How much the outermost ring of cells is darkened.
const VIGNETTE: f64 = 0.25;

/// Splits the frame into the binding strip and the stage.
pub fn split_frame(area: Rect) -> [Rect; 2] {
    use Constraint::{Min, Percentage};
    Layout::horizontal([Percentage(10), Min(0)]).areas(area)
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, now: Instant) {
    let area = frame.area();
    frame.buffer_mut().set_style(area, Style::default().bg(BACKDROP));

    let [spiral_area, stage] = split_frame(area);
    tui.nav_zones.stage = stage;

    let elapsed = tui.turn.as_ref().map_or(0.0, |turn| turn.elapsed(now));
    PageStage::new(app, tui.turn.as_ref(), elapsed, &tui.motion).render(frame, stage);
    NavZones::new(&tui.nav_zones, app.navigator()).render(frame, stage);
    FolioIndicator::new(app.navigator()).render(frame, stage);
    SpiralBinding.render(frame, spiral_area);

    draw_vignette(frame, area);
}

fn draw_vignette(frame: &mut Frame, area: Rect) {
    if area.is_empty() {
        return;
    }
    let buf = frame.buffer_mut();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            let edge = y == area.top()
                || y == area.bottom() - 1
                || x == area.left()
                || x == area.right() - 1;
            if !edge {
                continue;
            }
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_fg(darken(cell.fg, VIGNETTE));
                cell.set_bg(darken(cell.bg, VIGNETTE));
            }
        }
    }
}
