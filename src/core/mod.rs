//! # Core Application Logic
//!
//! This module contains Folio's domain logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • Deck (content)       │
//!                    │  • Navigator (index)    │
//!                    │  • Action / update()    │
//!                    │  • Transition geometry  │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │   Media    │
//!             │  Adapter   │          │  (images)  │
//!             │ (ratatui)  │          │            │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`deck`]: The `Deck` — ordered, immutable pages
//! - [`navigator`]: `(current_index, direction)` and `paginate`
//! - [`state`]: The `App` struct — all application state in one place
//! - [`action`]: The `Action` enum and the `update` reducer
//! - [`transition`]: Pure page-turn geometry
//! - [`motion`]: Spring and tween tracks
//! - [`config`]: Layered settings

pub mod action;
pub mod config;
pub mod deck;
pub mod motion;
pub mod navigator;
pub mod state;
pub mod transition;
