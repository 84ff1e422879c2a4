//! # Application State
//!
//! Core state for Folio. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── deck: Deck                         // immutable content store
//! ├── navigator: Navigator               // (current_index, direction)
//! └── images: HashMap<String, Resolved>  // resolved images keyed by page id
//! ```
//!
//! State changes only happen through `update(state, action)` in action.rs.
//! The navigator is private: readers get a by-value `NavigationState`.

use std::collections::HashMap;

use crate::core::deck::{Deck, Page};
use crate::core::navigator::{NavigationState, Navigator, PageChange, Step};
use crate::media::ResolvedImage;

pub struct App {
    pub deck: Deck,
    navigator: Navigator,
    /// Images that have finished resolving. Absent = still loading.
    pub images: HashMap<String, ResolvedImage>,
}

impl App {
    pub fn new(deck: Deck) -> Self {
        let navigator = Navigator::for_deck(&deck);
        Self {
            deck,
            navigator,
            images: HashMap::new(),
        }
    }

    pub fn navigation(&self) -> NavigationState {
        self.navigator.state()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// The page that is (or is becoming) active.
    pub fn current_page(&self) -> &Page {
        self.deck.page_at(self.navigator.current_index())
    }

    pub fn image(&self, key: &str) -> Option<&ResolvedImage> {
        self.images.get(key)
    }

    pub(crate) fn paginate(&mut self, step: Step) -> Option<PageChange> {
        self.navigator.paginate(step, &self.deck)
    }
}
