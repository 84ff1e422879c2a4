//! # NavZones Component
//!
//! Invisible click targets over the stage, plus the arrow badge that appears
//! while the pointer hovers one.
//!
//! ```text
//! ┌────────┬───────────────┬──────────────────────────┐
//! │ ‹ prev │   (no zone)   │          next ›          │
//! │  20%   │      30%      │           50%            │
//! └────────┴───────────────┴──────────────────────────┘
//! ```
//!
//! Clicks always emit a `Step`; the navigator decides whether it moves. The
//! badge, on the other hand, only shows when the step is actually possible.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;

use crate::core::navigator::{Navigator, Step};
use crate::tui::component::{Component, EventHandler};
use crate::tui::event::TuiEvent;
use crate::tui::palette::{INK, PAPER, blend};

const PREVIOUS_PERCENT: u32 = 20;
const NEXT_PERCENT: u32 = 50;
const BADGE_MARGIN: u16 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Zone {
    Previous,
    Next,
}

impl Zone {
    pub fn step(self) -> Step {
        match self {
            Zone::Previous => Step::Backward,
            Zone::Next => Step::Forward,
        }
    }

    fn arrow(self) -> &'static str {
        match self {
            Zone::Previous => " ‹ ",
            Zone::Next => " › ",
        }
    }
}

/// Which zone (if any) covers `(col, row)` inside `stage`.
pub fn zone_at(stage: Rect, col: u16, row: u16) -> Option<Zone> {
    if stage.is_empty() || row < stage.y || row >= stage.bottom() {
        return None;
    }
    if col < stage.x || col >= stage.right() {
        return None;
    }
    let offset = (col - stage.x) as u32;
    let width = stage.width as u32;
    if offset * 100 < width * PREVIOUS_PERCENT {
        Some(Zone::Previous)
    } else if offset * 100 >= width * (100 - NEXT_PERCENT) {
        Some(Zone::Next)
    } else {
        None
    }
}

/// Hover state. `stage` is refreshed every draw so hit tests follow resizes.
#[derive(Debug, Default)]
pub struct NavZonesState {
    pub hovered: Option<Zone>,
    pub stage: Rect,
}

impl NavZonesState {
    pub fn new() -> Self {
        Self::default()
    }
}

impl EventHandler for NavZonesState {
    type Event = Step;

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Step> {
        match *event {
            TuiEvent::MouseMove(col, row) => {
                self.hovered = zone_at(self.stage, col, row);
                None
            }
            TuiEvent::MouseClick(col, row) => zone_at(self.stage, col, row).map(Zone::step),
            _ => None,
        }
    }
}

pub struct NavZones<'a> {
    pub state: &'a NavZonesState,
    pub navigator: &'a Navigator,
}

impl<'a> NavZones<'a> {
    pub fn new(state: &'a NavZonesState, navigator: &'a Navigator) -> Self {
        Self { state, navigator }
    }
}

impl Component for NavZones<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let Some(zone) = self.state.hovered else {
            return;
        };
        if !self.navigator.can_paginate(zone.step()) {
            return;
        }
        let badge_width = 3;
        if area.width < badge_width + BADGE_MARGIN * 2 || area.height == 0 {
            return;
        }

        let x = match zone {
            Zone::Previous => area.x + BADGE_MARGIN,
            Zone::Next => area.right() - BADGE_MARGIN - badge_width,
        };
        let y = area.y + area.height / 2;
        let style = Style::default().fg(PAPER).bg(blend(PAPER, INK, 0.8));
        frame.buffer_mut().set_string(x, y, zone.arrow(), style);
    }
}
