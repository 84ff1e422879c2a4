//! # Navigator
//!
//! Owns the `(current_index, direction)` pair. The only way to change it is
//! [`Navigator::paginate`], which writes both fields in one assignment so a
//! reader can never observe a new index paired with a stale direction.
//!
//! ```text
//!   (0, Rest) ──Forward──▶ (1, Forward) ──Forward──▶ (2, Forward)
//!       ▲                      │
//!       └──────Backward────────┘   (0, Backward)
//! ```

use crate::core::deck::Deck;

/// How the current page was reached. Only meaningful for picking the
/// transition geometry; it carries no information at rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    Backward,
    #[default]
    Rest,
    Forward,
}

impl Direction {
    pub fn signum(self) -> i8 {
        match self {
            Direction::Backward => -1,
            Direction::Rest => 0,
            Direction::Forward => 1,
        }
    }
}

/// A single navigation step. Only ±1 exists; jumping is not supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Backward,
    Forward,
}

impl Step {
    pub fn delta(self) -> isize {
        match self {
            Step::Backward => -1,
            Step::Forward => 1,
        }
    }
}

impl From<Step> for Direction {
    fn from(step: Step) -> Self {
        match step {
            Step::Backward => Direction::Backward,
            Step::Forward => Direction::Forward,
        }
    }
}

/// Read-only projection handed to the render layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavigationState {
    pub current_index: usize,
    pub direction: Direction,
}

/// The outcome of a successful `paginate`: everything the animation layer
/// needs, with page ids as identity keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageChange {
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
    pub outgoing_id: &'static str,
    pub incoming_id: &'static str,
}

#[derive(Debug, Clone)]
pub struct Navigator {
    state: NavigationState,
    len: usize,
}

impl Navigator {
    /// Starts at the cover with no direction. A deck always has a cover, so
    /// `len` is never zero.
    fn new(len: usize) -> Self {
        debug_assert!(len > 0, "navigator needs at least one page");
        Self {
            state: NavigationState::default(),
            len,
        }
    }

    pub fn for_deck(deck: &Deck) -> Self {
        Self::new(deck.len())
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn target(&self, step: Step) -> Option<usize> {
        self.state
            .current_index
            .checked_add_signed(step.delta())
            .filter(|next| *next < self.len)
    }

    /// Whether `step` would move. Drives the arrow affordances.
    pub fn can_paginate(&self, step: Step) -> bool {
        self.target(step).is_some()
    }

    /// Moves one page in `step`'s direction.
    ///
    /// Out of bounds is a silent no-op (returns `None`, state untouched).
    pub fn paginate(&mut self, step: Step, deck: &Deck) -> Option<PageChange> {
        let next = self.target(step)?;
        let from = self.state.current_index;

        self.state = NavigationState {
            current_index: next,
            direction: step.into(),
        };

        Some(PageChange {
            from,
            to: next,
            direction: step.into(),
            outgoing_id: deck.page_at(from).id,
            incoming_id: deck.page_at(next).id,
        })
    }

    /// `"Folio 1 / 8"`: 1-based for display.
    pub fn folio_label(&self) -> String {
        format!("Folio {} / {}", self.state.current_index + 1, self.len)
    }
}
