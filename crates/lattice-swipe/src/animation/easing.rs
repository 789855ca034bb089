//! Easing functions for swipe animations.
//!
//! Easing functions map a linear progress value (0.0 to 1.0) to a transformed
//! value. [`interpolate`] applies a curve to an elapsed/duration pair and
//! guarantees exact endpoints: it returns `from` at or before time zero and
//! `to` at or after `duration`, with no residual delta from floating-point
//! evaluation of the curve.

use serde::{Deserialize, Serialize};

/// Available easing functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Easing {
    /// Linear interpolation (no easing).
    Linear,
    /// Quadratic ease-in (starts slow, accelerates).
    QuadIn,
    /// Quadratic ease-out (starts fast, decelerates).
    QuadOut,
    /// Quadratic ease-in-out (smooth start and end).
    QuadInOut,
    /// Cubic ease-in (more pronounced than quadratic).
    CubicIn,
    /// Cubic ease-out (more pronounced than quadratic).
    #[default]
    CubicOut,
    /// Cubic ease-in-out (more pronounced than quadratic).
    CubicInOut,
    /// Bounces against the start before leaving it.
    BounceIn,
    /// Overshoots the target and bounces to rest on it.
    BounceOut,
    /// Bounces at both ends.
    BounceInOut,
}

impl Easing {
    /// Every supported curve, for iteration in tests and pickers.
    pub const ALL: [Easing; 10] = [
        Easing::Linear,
        Easing::QuadIn,
        Easing::QuadOut,
        Easing::QuadInOut,
        Easing::CubicIn,
        Easing::CubicOut,
        Easing::CubicInOut,
        Easing::BounceIn,
        Easing::BounceOut,
        Easing::BounceInOut,
    ];
}

/// Apply an easing function to a progress value.
///
/// # Arguments
///
/// * `easing` - The easing function to apply
/// * `t` - Progress value from 0.0 to 1.0
///
/// # Returns
///
/// The eased value. Bounce curves stay within 0.0 to 1.0; the others are
/// monotonic on that range.
///
/// # Example
///
/// ```
/// use lattice_swipe::animation::{ease, Easing};
///
/// // Linear: output equals input
/// assert_eq!(ease(Easing::Linear, 0.5), 0.5);
///
/// // Ease-in: slower at start
/// assert!(ease(Easing::QuadIn, 0.5) < 0.5);
///
/// // Ease-out: slower at end
/// assert!(ease(Easing::QuadOut, 0.5) > 0.5);
/// ```
#[inline]
pub fn ease(easing: Easing, t: f32) -> f32 {
    // Clamp input to valid range
    let t = t.clamp(0.0, 1.0);

    match easing {
        Easing::Linear => t,
        Easing::QuadIn => ease_in_quad(t),
        Easing::QuadOut => ease_out_quad(t),
        Easing::QuadInOut => ease_in_out_quad(t),
        Easing::CubicIn => ease_in_cubic(t),
        Easing::CubicOut => ease_out_cubic(t),
        Easing::CubicInOut => ease_in_out_cubic(t),
        Easing::BounceIn => ease_in_bounce(t),
        Easing::BounceOut => ease_out_bounce(t),
        Easing::BounceInOut => ease_in_out_bounce(t),
    }
}

/// Interpolate between two values using an easing function.
#[inline]
pub fn lerp_eased(easing: Easing, start: f32, end: f32, t: f32) -> f32 {
    let eased_t = ease(easing, t);
    start + (end - start) * eased_t
}

/// Value of an eased interpolation `elapsed` seconds into an animation.
///
/// Returns exactly `from` when `elapsed <= 0` and exactly `to` when
/// `elapsed >= duration`. A non-positive duration is a jump straight to `to`.
///
/// ```
/// use lattice_swipe::animation::{interpolate, Easing};
///
/// assert_eq!(interpolate(Easing::Linear, 0.15, 0.3, 0.0, 80.0), 40.0);
/// assert_eq!(interpolate(Easing::BounceOut, 0.3, 0.3, 0.0, 80.0), 80.0);
/// ```
pub fn interpolate(easing: Easing, elapsed: f32, duration: f32, from: f32, to: f32) -> f32 {
    if duration <= 0.0 || elapsed >= duration {
        return to;
    }
    if elapsed <= 0.0 {
        return from;
    }
    lerp_eased(easing, from, to, elapsed / duration)
}

// =============================================================================
// Quadratic Easing
// =============================================================================

#[inline]
fn ease_in_quad(t: f32) -> f32 {
    t * t
}

#[inline]
fn ease_out_quad(t: f32) -> f32 {
    1.0 - (1.0 - t) * (1.0 - t)
}

#[inline]
fn ease_in_out_quad(t: f32) -> f32 {
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

// =============================================================================
// Cubic Easing
// =============================================================================

#[inline]
fn ease_in_cubic(t: f32) -> f32 {
    t * t * t
}

#[inline]
fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

#[inline]
fn ease_in_out_cubic(t: f32) -> f32 {
    if t < 0.5 {
        4.0 * t * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(3) / 2.0
    }
}

// =============================================================================
// Bounce Easing
// =============================================================================

const BOUNCE_N: f32 = 7.5625;
const BOUNCE_D: f32 = 2.75;

#[inline]
fn ease_out_bounce(t: f32) -> f32 {
    if t < 1.0 / BOUNCE_D {
        BOUNCE_N * t * t
    } else if t < 2.0 / BOUNCE_D {
        let t = t - 1.5 / BOUNCE_D;
        BOUNCE_N * t * t + 0.75
    } else if t < 2.5 / BOUNCE_D {
        let t = t - 2.25 / BOUNCE_D;
        BOUNCE_N * t * t + 0.9375
    } else {
        let t = t - 2.625 / BOUNCE_D;
        BOUNCE_N * t * t + 0.984375
    }
}

#[inline]
fn ease_in_bounce(t: f32) -> f32 {
    1.0 - ease_out_bounce(1.0 - t)
}

#[inline]
fn ease_in_out_bounce(t: f32) -> f32 {
    if t < 0.5 {
        (1.0 - ease_out_bounce(1.0 - 2.0 * t)) / 2.0
    } else {
        (1.0 + ease_out_bounce(2.0 * t - 1.0)) / 2.0
    }
}
