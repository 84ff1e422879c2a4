//! # Actions
//!
//! Everything that can happen in Folio becomes an `Action`.
//! Viewer clicks the right half? That's `Action::Paginate(Step::Forward)`.
//! An image finishes loading? That's `Action::ImageResolved(image)`.
//!
//! The `update()` function takes the current state and an action, mutates the
//! state, and returns an `Effect` describing what the adapter should do next.
//! No side effects here. I/O and animation clocks happen elsewhere.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info};

use crate::core::navigator::{PageChange, Step};
use crate::core::state::App;
use crate::media::ResolvedImage;

#[derive(Debug)]
pub enum Action {
    Paginate(Step),
    ImageResolved(ResolvedImage),
    Quit,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The page changed: start a turn animation.
    Turn(PageChange),
    /// Visible content changed without navigation.
    Redraw,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Paginate(step) => match app.paginate(step) {
            Some(change) => {
                info!(
                    "Paginate {:?}: {} → {} ({})",
                    step,
                    change.outgoing_id,
                    change.incoming_id,
                    app.navigator().folio_label()
                );
                Effect::Turn(change)
            }
            None => {
                debug!("Paginate {:?} ignored at boundary", step);
                Effect::None
            }
        },
        Action::ImageResolved(image) => {
            let visible = image.key == app.current_page().id;
            app.images.insert(image.key.clone(), image);
            if visible { Effect::Redraw } else { Effect::None }
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::navigator::Direction;
    use crate::media::{ImageOrigin, Raster};
    use crate::test_support::test_app;
    use std::sync::Arc;

    fn resolved(key: &str) -> ResolvedImage {
        ResolvedImage {
            key: key.to_string(),
            origin: ImageOrigin::Generated,
            raster: Arc::new(Raster::generated(key, 4, 4)),
        }
    }

    #[test]
    fn test_paginate_forward_emits_turn() {
        let mut app = test_app();
        let effect = update(&mut app, Action::Paginate(Step::Forward));
        match effect {
            Effect::Turn(change) => {
                assert_eq!(change.from, 0);
                assert_eq!(change.to, 1);
                assert_eq!(change.direction, Direction::Forward);
            }
            other => panic!("expected Turn, got {:?}", other),
        }
        assert_eq!(app.navigation().current_index, 1);
    }

    #[test]
    fn test_paginate_at_boundary_is_noop() {
        let mut app = test_app();
        let before = app.navigation();
        assert_eq!(update(&mut app, Action::Paginate(Step::Backward)), Effect::None);
        assert_eq!(app.navigation(), before);
    }

    #[test]
    fn test_rapid_clicks_apply_against_logical_index() {
        let mut app = test_app();
        // No animation clock exists here: three clicks land on three pages.
        for expected in 1..=3 {
            let effect = update(&mut app, Action::Paginate(Step::Forward));
            assert!(matches!(effect, Effect::Turn(ref c) if c.to == expected));
        }
        assert_eq!(app.current_page().id, "leadership");
    }

    #[test]
    fn test_image_for_current_page_requests_redraw() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::ImageResolved(resolved("cover"))), Effect::Redraw);
        assert!(app.image("cover").is_some());
    }

    #[test]
    fn test_image_for_hidden_page_is_stored_quietly() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::ImageResolved(resolved("vision"))), Effect::None);
        assert!(app.image("vision").is_some());
        assert_eq!(app.navigation().current_index, 0);
    }

    #[test]
    fn test_quit() {
        let mut app = test_app();
        assert_eq!(update(&mut app, Action::Quit), Effect::Quit);
    }
}
