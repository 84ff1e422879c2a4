//! # PageStage Component
//!
//! The area where pages live. At rest it draws the current page flat. During
//! a turn it draws both pages off-screen, then projects each one onto the
//! stage according to its sampled pose.
//!
//! ```text
//! Pose { rotate_y, opacity }            stage
//!   rotate_y = 0°    → full width       │██████████████│
//!   rotate_y = ±60°  → half width       │███████       │
//!   rotate_y ≥ ±90°  → back face, gone  │              │
//! ```
//!
//! The hinge is the left (bound) edge, so a page shrinks toward the spiral.
//! Cells squeezed by the projection are darkened as the page bends away.

use std::time::Instant;

use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;

use crate::core::motion::Motion;
use crate::core::navigator::PageChange;
use crate::core::state::App;
use crate::core::transition::{Pose, StackOrder, TransitionPlan, plan_transition, sample_turn};
use crate::tui::component::Component;
use crate::tui::components::cover::CoverPage;
use crate::tui::components::folio_page::FolioPage;
use crate::tui::palette::{BACKDROP, blend, darken};

/// How dark a page gets when it is almost edge-on.
const BEND_SHADE: f64 = 0.35;

/// A turn in flight. Pages are tracked by id so an image arriving mid-turn
/// lands on the right page.
#[derive(Debug, Clone)]
pub struct PageTurn {
    pub plan: TransitionPlan,
    pub outgoing_id: &'static str,
    pub incoming_id: &'static str,
    pub started: Instant,
}

impl PageTurn {
    pub fn start(change: &PageChange, now: Instant) -> Self {
        Self {
            plan: plan_transition(change.from, change.to, change.direction),
            outgoing_id: change.outgoing_id,
            incoming_id: change.incoming_id,
            started: now,
        }
    }

    /// Seconds since the turn started.
    pub fn elapsed(&self, now: Instant) -> f64 {
        now.saturating_duration_since(self.started).as_secs_f64()
    }
}

/// Renders page `id` into an off-screen buffer the size of `area`.
///
/// The cover template never looks at the page record; content pages draw
/// their own fields and image.
pub fn render_page(app: &App, id: &str, reveal: f64, shade: f64, area: Rect) -> Buffer {
    let local = Rect::new(0, 0, area.width, area.height);
    let mut buf = Buffer::empty(local);
    let image = app.image(id).map(|resolved| resolved.raster.as_ref());

    match app.deck.position_of(id) {
        Some(index) if app.deck.is_cover(index) => {
            CoverPage::new(app.deck.cover(), image).render(local, &mut buf);
        }
        Some(index) => {
            FolioPage::new(app.deck.page_at(index), image)
                .reveal(reveal)
                .shade(shade)
                .render(local, &mut buf);
        }
        None => {
            log::warn!("No page with id {:?} in the deck", id);
        }
    }
    buf
}

/// Projects an off-screen page onto `dest` about the left edge of `area`.
fn project(page: &Buffer, pose: Pose, area: Rect, dest: &mut Buffer) {
    let visible = pose.visible_width();
    let cols = (area.width as f64 * visible).round() as u16;
    if cols == 0 || pose.opacity <= 0.0 {
        return;
    }
    let bend = (1.0 - visible) * BEND_SHADE;
    let opacity = pose.opacity.min(1.0);

    for dx in 0..cols {
        let src_x = (((dx as f64 + 0.5) / cols as f64) * area.width as f64) as u16;
        let src_x = src_x.min(area.width - 1);
        for dy in 0..area.height {
            let src = &page[(src_x, dy)];
            let Some(cell) = dest.cell_mut((area.x + dx, area.y + dy)) else {
                continue;
            };
            let under = cell.bg;
            let bg = blend(under, darken(src.bg, bend), opacity);
            if opacity >= 0.5 {
                let fg = blend(under, darken(src.fg, bend), opacity);
                cell.set_symbol(src.symbol());
                cell.modifier = src.modifier;
                cell.set_fg(fg);
            }
            cell.set_bg(bg);
        }
    }
}

/// Props for one frame of the stage.
pub struct PageStage<'a> {
    pub app: &'a App,
    pub turn: Option<&'a PageTurn>,
    /// Seconds into `turn`; ignored at rest.
    pub elapsed: f64,
    pub motion: &'a Motion,
}

impl<'a> PageStage<'a> {
    pub fn new(app: &'a App, turn: Option<&'a PageTurn>, elapsed: f64, motion: &'a Motion) -> Self {
        Self {
            app,
            turn,
            elapsed,
            motion,
        }
    }
}

impl Component for PageStage<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        if area.is_empty() {
            return;
        }
        let buf = frame.buffer_mut();
        buf.set_style(area, ratatui::style::Style::default().bg(BACKDROP));

        let Some(turn) = self.turn else {
            let id = self.app.current_page().id;
            let page = render_page(self.app, id, 1.0, 0.0, area);
            project(&page, Pose::CENTER, area, buf);
            return;
        };

        let sample = sample_turn(&turn.plan, self.motion, self.elapsed);
        let outgoing = render_page(self.app, turn.outgoing_id, 1.0, sample.shade, area);
        let incoming = render_page(self.app, turn.incoming_id, sample.reveal, 0.0, area);

        match sample.stack {
            StackOrder::OutgoingAbove => {
                project(&incoming, sample.incoming, area, buf);
                project(&outgoing, sample.outgoing, area, buf);
            }
            StackOrder::IncomingAbove => {
                project(&outgoing, sample.outgoing, area, buf);
                project(&incoming, sample.incoming, area, buf);
            }
        }
    }
}
