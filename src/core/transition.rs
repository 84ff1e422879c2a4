//! # Page-Turn Geometry
//!
//! A page turn is a rotation about the left (bound) edge. Which poses the two
//! pages move between depends only on the sign of the direction, so the whole
//! geometry is a pure function:
//!
//! ```text
//! plan_transition(from, to, direction) → TransitionPlan { enter, center, exit, stack }
//!
//!            incoming                     outgoing              stack
//! Forward    enter(0°, flat beneath)      0° → exit(-180°)      outgoing above
//! Backward   enter(-180°, far side) → 0°  0° → exit(-180°)      incoming above
//! ```
//!
//! Going forward the next page already lies flat under the current one, so
//! it is uncovered as the outgoing page turns over on top of it.
//!
//! `sample_turn` evaluates both pages' poses at a point in time using the
//! decoupled tracks from [`crate::core::motion`].

use crate::core::motion::Motion;
use crate::core::navigator::Direction;

/// Rotation of a page lying flat, face up.
pub const CENTERED_DEG: f64 = 0.0;
/// Rotation of a page turned over onto the far side of the binding.
pub const FAR_SIDE_DEG: f64 = -180.0;

/// Where a page sits: rotation about the bound edge, opacity, stacking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pose {
    pub rotate_y: f64,
    pub opacity: f64,
    pub z_index: i8,
}

impl Pose {
    pub const CENTER: Pose = Pose {
        rotate_y: CENTERED_DEG,
        opacity: 1.0,
        z_index: 1,
    };

    /// Fraction of the page's width visible after projection. Zero once the
    /// back face would show.
    pub fn visible_width(&self) -> f64 {
        self.rotate_y.to_radians().cos().max(0.0)
    }
}

/// Which of the two layered pages is drawn on top during a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackOrder {
    OutgoingAbove,
    IncomingAbove,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionPlan {
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
    /// Incoming page's starting pose.
    pub enter: Pose,
    /// Resting pose both pages share at the hinge point.
    pub center: Pose,
    /// Outgoing page's final pose.
    pub exit: Pose,
    pub stack: StackOrder,
}

/// Plans the turn from `from` to `to`. A `Rest` direction yields an instant
/// swap (enter and exit equal the centered pose), which is what first paint
/// uses.
pub fn plan_transition(from: usize, to: usize, direction: Direction) -> TransitionPlan {
    let (enter, exit, stack) = match direction {
        Direction::Forward => (
            Pose {
                rotate_y: CENTERED_DEG,
                opacity: 1.0,
                z_index: 0,
            },
            Pose {
                rotate_y: FAR_SIDE_DEG,
                opacity: 1.0,
                z_index: 2,
            },
            StackOrder::OutgoingAbove,
        ),
        Direction::Backward => (
            Pose {
                rotate_y: FAR_SIDE_DEG,
                opacity: 0.0,
                z_index: 1,
            },
            Pose {
                rotate_y: FAR_SIDE_DEG,
                opacity: 0.0,
                z_index: 0,
            },
            StackOrder::IncomingAbove,
        ),
        Direction::Rest => (Pose::CENTER, Pose::CENTER, StackOrder::IncomingAbove),
    };

    TransitionPlan {
        from,
        to,
        direction,
        enter,
        center: Pose::CENTER,
        exit,
        stack,
    }
}

/// Both pages' poses at one instant of a turn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurnFrame {
    pub outgoing: Pose,
    pub incoming: Pose,
    pub stack: StackOrder,
    /// Shade over the outgoing page (0 = none, 1 = full).
    pub shade: f64,
    /// Progress of the incoming page's content reveal.
    pub reveal: f64,
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Samples a plan `elapsed` seconds after the turn started.
///
/// z-index is not interpolated: each page keeps its starting layer for the
/// whole turn, and `stack` is fixed by the plan.
pub fn sample_turn(plan: &TransitionPlan, motion: &Motion, elapsed: f64) -> TurnFrame {
    let rotation = motion.rotation.progress(elapsed);
    let fade = motion.fade.progress(elapsed);

    let incoming = Pose {
        rotate_y: lerp(plan.enter.rotate_y, plan.center.rotate_y, rotation),
        opacity: lerp(plan.enter.opacity, plan.center.opacity, fade),
        z_index: plan.enter.z_index,
    };
    let outgoing = Pose {
        rotate_y: lerp(plan.center.rotate_y, plan.exit.rotate_y, rotation),
        opacity: lerp(plan.center.opacity, plan.exit.opacity, fade),
        z_index: plan.exit.z_index,
    };

    TurnFrame {
        outgoing,
        incoming,
        stack: plan.stack,
        shade: motion.shade.progress(elapsed),
        reveal: motion.reveal.progress(elapsed),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forward_plan_geometry() {
        let plan = plan_transition(2, 3, Direction::Forward);
        assert_eq!(plan.enter.rotate_y, CENTERED_DEG);
        assert_eq!(plan.enter.opacity, 1.0);
        assert_eq!(plan.exit.rotate_y, FAR_SIDE_DEG);
        assert_eq!(plan.center, Pose::CENTER);
        assert_eq!(plan.stack, StackOrder::OutgoingAbove);
        assert!(plan.exit.z_index > plan.enter.z_index);
    }

    #[test]
    fn test_backward_plan_geometry() {
        let plan = plan_transition(3, 2, Direction::Backward);
        assert_eq!(plan.enter.rotate_y, FAR_SIDE_DEG);
        assert_eq!(plan.exit.rotate_y, FAR_SIDE_DEG);
        assert_eq!(plan.enter.opacity, 0.0);
        assert_eq!(plan.exit.opacity, 0.0);
        assert_eq!(plan.stack, StackOrder::IncomingAbove);
        assert!(plan.enter.z_index > plan.exit.z_index);
    }

    #[test]
    fn test_stack_depends_only_on_direction_sign() {
        for (from, to) in [(0, 1), (5, 6), (1, 0), (7, 6)] {
            assert_eq!(
                plan_transition(from, to, Direction::Forward).stack,
                StackOrder::OutgoingAbove
            );
            assert_eq!(
                plan_transition(from, to, Direction::Backward).stack,
                StackOrder::IncomingAbove
            );
        }
    }

    #[test]
    fn test_rest_plan_is_instant() {
        let plan = plan_transition(0, 0, Direction::Rest);
        assert_eq!(plan.enter, Pose::CENTER);
        assert_eq!(plan.exit, Pose::CENTER);
    }

    #[test]
    fn test_sample_starts_at_enter_and_ends_centered() {
        let motion = Motion::default();
        let plan = plan_transition(1, 2, Direction::Forward);

        let start = sample_turn(&plan, &motion, 0.0);
        assert_eq!(start.incoming.rotate_y, CENTERED_DEG);
        assert_eq!(start.outgoing.rotate_y, CENTERED_DEG);
        assert_eq!(start.reveal, 0.0);

        let end = sample_turn(&plan, &motion, motion.total_duration());
        assert_eq!(end.incoming.rotate_y, CENTERED_DEG);
        assert_eq!(end.incoming.opacity, 1.0);
        assert_eq!(end.outgoing.rotate_y, FAR_SIDE_DEG);
        assert_eq!(end.reveal, 1.0);
        assert_eq!(end.shade, 1.0);
    }

    #[test]
    fn test_forward_pages_overlap_mid_turn() {
        let motion = Motion::default();
        let plan = plan_transition(1, 2, Direction::Forward);
        let frame = sample_turn(&plan, &motion, 0.2);
        let outgoing = frame.outgoing.visible_width();
        let incoming = frame.incoming.visible_width();
        assert!(outgoing > 0.0 && outgoing < 1.0);
        assert_eq!(incoming, 1.0);
        assert_eq!(frame.stack, StackOrder::OutgoingAbove);
    }

    #[test]
    fn test_backward_fade_outpaces_rotation() {
        let motion = Motion::default();
        let plan = plan_transition(2, 1, Direction::Backward);
        let frame = sample_turn(&plan, &motion, motion.fade.end());
        assert_eq!(frame.incoming.opacity, 1.0);
        assert_eq!(frame.outgoing.opacity, 0.0);
        assert!(frame.incoming.rotate_y < CENTERED_DEG);
    }

    #[test]
    fn test_stacking_layers_hold_for_whole_turn() {
        let motion = Motion::default();
        let plan = plan_transition(1, 2, Direction::Forward);
        for step in 0..50 {
            let frame = sample_turn(&plan, &motion, step as f64 * 0.05);
            assert_eq!(frame.stack, StackOrder::OutgoingAbove);
            assert!(frame.outgoing.z_index > frame.incoming.z_index);
        }
    }

    #[test]
    fn test_visible_width_hides_back_face() {
        assert_eq!(Pose::CENTER.visible_width(), 1.0);
        let edge_on = Pose {
            rotate_y: 90.0,
            ..Pose::CENTER
        };
        assert!(edge_on.visible_width() < 1e-9);
        let flipped = Pose {
            rotate_y: FAR_SIDE_DEG,
            ..Pose::CENTER
        };
        assert_eq!(flipped.visible_width(), 0.0);
        let half = Pose {
            rotate_y: -60.0,
            ..Pose::CENTER
        };
        assert!((half.visible_width() - 0.5).abs() < 1e-9);
    }
}
