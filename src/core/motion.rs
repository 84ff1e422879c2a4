//! # Motion Tracks
//!
//! Time → progress curves used by the page turn. Each animated property has
//! its own track so rotation and fade stay decoupled:
//!
//! - rotation follows a damped [`Spring`]
//! - opacity follows a fixed-duration [`Tween`]
//! - the content reveal is a delayed [`Tween`]
//!
//! All functions take elapsed seconds and return a normalized progress where
//! `0.0` is the start pose and `1.0` the target pose. No clocks live here.

/// Remaining displacement (as a fraction of the span) below which a spring
/// counts as settled.
pub const REST_DELTA: f64 = 0.001;

/// Upper bound for settle-time search.
const MAX_SETTLE_SECS: f64 = 10.0;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Ease {
    Linear,
    OutQuad,
    InOutQuad,
    OutCubic,
}

impl Ease {
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::OutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Self::InOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - ((-2.0 * t + 2.0).powi(2) / 2.0)
                }
            }
            Self::OutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// A delayed, fixed-duration tween.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tween {
    pub delay: f64,
    pub duration: f64,
    pub ease: Ease,
}

impl Tween {
    pub fn new(delay: f64, duration: f64, ease: Ease) -> Self {
        Self {
            delay,
            duration,
            ease,
        }
    }

    pub fn progress(&self, elapsed: f64) -> f64 {
        let local = elapsed - self.delay;
        if local <= 0.0 {
            return 0.0;
        }
        if self.duration <= 0.0 {
            return 1.0;
        }
        self.ease.apply(local / self.duration)
    }

    pub fn end(&self) -> f64 {
        self.delay + self.duration.max(0.0)
    }
}

/// Damped harmonic oscillator released from rest at displacement 1.
///
/// ```text
/// m·x'' + c·x' + k·x = 0,   x(0) = 1,  x'(0) = 0
/// progress(t) = 1 - x(t)
/// ```
///
/// Parameters are fixed at construction, where the settle time is computed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Spring {
    stiffness: f64,
    damping: f64,
    mass: f64,
    settle: f64,
}

impl Default for Spring {
    fn default() -> Self {
        Self::new(60.0, 18.0, 1.2)
    }
}

impl Spring {
    pub fn new(stiffness: f64, damping: f64, mass: f64) -> Self {
        let mut spring = Self {
            stiffness,
            damping,
            mass,
            settle: 0.0,
        };
        spring.settle = spring.scan_settle_time();
        spring
    }

    pub fn stiffness(&self) -> f64 {
        self.stiffness
    }

    pub fn damping(&self) -> f64 {
        self.damping
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    fn natural_frequency(&self) -> f64 {
        (self.stiffness / self.mass).sqrt()
    }

    pub fn damping_ratio(&self) -> f64 {
        self.damping / (2.0 * (self.stiffness * self.mass).sqrt())
    }

    /// Remaining displacement at `t` seconds (1 at start, 0 at target).
    pub fn displacement(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 1.0;
        }
        let w0 = self.natural_frequency();
        let zeta = self.damping_ratio();

        if (zeta - 1.0).abs() < 1e-6 {
            (-w0 * t).exp() * (1.0 + w0 * t)
        } else if zeta < 1.0 {
            let wd = w0 * (1.0 - zeta * zeta).sqrt();
            let decay = (-zeta * w0 * t).exp();
            decay * ((wd * t).cos() + (zeta * w0 / wd) * (wd * t).sin())
        } else {
            let root = (zeta * zeta - 1.0).sqrt();
            let r1 = -w0 * (zeta - root);
            let r2 = -w0 * (zeta + root);
            (r2 * (r1 * t).exp() - r1 * (r2 * t).exp()) / (r2 - r1)
        }
    }

    /// Normalized progress toward the target. May overshoot past 1.0 when
    /// underdamped.
    pub fn progress(&self, t: f64) -> f64 {
        if t >= self.settle {
            return 1.0;
        }
        1.0 - self.displacement(t)
    }

    /// First time after which the displacement stays within [`REST_DELTA`].
    pub fn settle_time(&self) -> f64 {
        self.settle
    }

    fn scan_settle_time(&self) -> f64 {
        let dt = 1.0 / 240.0;
        let mut last_outside = 0.0;
        let mut t = 0.0;
        while t < MAX_SETTLE_SECS {
            if self.displacement(t).abs() >= REST_DELTA {
                last_outside = t;
            }
            t += dt;
        }
        last_outside + dt
    }
}

/// Every track a page turn runs, with its timing.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Motion {
    /// Rotation about the bound edge.
    pub rotation: Spring,
    /// Opacity, independent of rotation.
    pub fade: Tween,
    /// Secondary content reveal on the incoming page.
    pub reveal: Tween,
    /// Shade that falls over an outgoing content page.
    pub shade: Tween,
}

impl Default for Motion {
    fn default() -> Self {
        Self {
            rotation: Spring::default(),
            fade: Tween::new(0.0, 0.4, Ease::InOutQuad),
            reveal: Tween::new(0.3, 1.0, Ease::OutCubic),
            shade: Tween::new(0.0, 0.5, Ease::InOutQuad),
        }
    }
}

impl Motion {
    /// Seconds until every track has come to rest.
    pub fn total_duration(&self) -> f64 {
        self.rotation
            .settle_time()
            .max(self.fade.end())
            .max(self.reveal.end())
            .max(self.shade.end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ease_endpoints_are_stable() {
        for ease in [Ease::Linear, Ease::OutQuad, Ease::InOutQuad, Ease::OutCubic] {
            assert_eq!(ease.apply(0.0), 0.0);
            assert_eq!(ease.apply(1.0), 1.0);
            assert!(ease.apply(0.25) < ease.apply(0.75));
        }
    }

    #[test]
    fn test_tween_respects_delay_and_duration() {
        let tween = Tween::new(0.3, 1.0, Ease::Linear);
        assert_eq!(tween.progress(0.0), 0.0);
        assert_eq!(tween.progress(0.3), 0.0);
        assert!((tween.progress(0.8) - 0.5).abs() < 1e-9);
        assert_eq!(tween.progress(1.3), 1.0);
        assert_eq!(tween.progress(5.0), 1.0);
        assert!((tween.end() - 1.3).abs() < 1e-9);
    }

    #[test]
    fn test_zero_duration_tween_jumps() {
        let tween = Tween::new(0.0, 0.0, Ease::Linear);
        assert_eq!(tween.progress(0.01), 1.0);
    }

    #[test]
    fn test_default_spring_is_slightly_overdamped() {
        let spring = Spring::default();
        assert!(spring.damping_ratio() > 1.0);
        // Overdamped: never overshoots
        let mut t = 0.0;
        while t < 3.0 {
            assert!(spring.progress(t) <= 1.0);
            t += 0.01;
        }
    }

    #[test]
    fn test_spring_starts_at_zero_and_settles_at_one() {
        for spring in [
            Spring::default(),
            Spring::new(100.0, 5.0, 1.0),   // underdamped
            Spring::new(100.0, 20.0, 1.0),  // critical
        ] {
            assert_eq!(spring.progress(0.0), 0.0);
            let settle = spring.settle_time();
            assert!(settle > 0.0 && settle < MAX_SETTLE_SECS);
            assert_eq!(spring.progress(settle), 1.0);
            assert!(spring.displacement(settle).abs() < REST_DELTA);
        }
    }

    #[test]
    fn test_settle_time_is_fixed_at_construction() {
        let spring = Spring::new(100.0, 5.0, 1.0);
        assert_eq!(spring.settle_time(), spring.scan_settle_time());
        assert_eq!(spring, Spring::new(100.0, 5.0, 1.0));
        // Copies carry the cached value
        let copy = spring;
        assert_eq!(copy.settle_time(), spring.settle_time());
        assert_eq!(copy.progress(copy.settle_time()), 1.0);
        assert!(copy.progress(copy.settle_time() - 1.0 / 240.0) != 1.0);
    }

    #[test]
    fn test_underdamped_spring_overshoots() {
        let spring = Spring::new(100.0, 5.0, 1.0);
        let peak = (0..200)
            .map(|i| spring.progress(i as f64 * 0.01))
            .fold(f64::MIN, f64::max);
        assert!(peak > 1.0);
    }

    #[test]
    fn test_rotation_and_fade_are_decoupled() {
        let motion = Motion::default();
        // Fade completes well before the spring settles
        assert_eq!(motion.fade.progress(0.4), 1.0);
        assert!(motion.rotation.progress(0.4) < 1.0);
    }

    #[test]
    fn test_total_duration_covers_every_track() {
        let motion = Motion::default();
        let total = motion.total_duration();
        assert!(total >= motion.rotation.settle_time());
        assert!(total >= motion.reveal.end());
        assert!(total >= motion.fade.end());
    }
}
