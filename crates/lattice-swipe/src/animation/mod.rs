//! Animation support for swipeable rows.
//!
//! This module provides the easing curves and the per-row sequencer that
//! settle a row's offset after a gesture or a programmatic request.
//!
//! # Easing Functions
//!
//! Easing functions control the rate of change during animations. They take a
//! normalized progress value `t` (0.0 to 1.0) and return a transformed value.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use lattice_swipe::animation::{AnimationSequencer, AnimationSpec, Easing};
//!
//! let mut seq = AnimationSequencer::new();
//! seq.start(0.0, 80.0, AnimationSpec::new(0.3, Easing::Linear), ());
//!
//! let frame = seq.tick(Duration::from_millis(150)).unwrap();
//! assert!((frame.value - 40.0).abs() < 0.01);
//! ```

mod easing;
mod sequencer;

pub use easing::{ease, interpolate, lerp_eased, Easing};
pub use sequencer::{
    AnimationFrame, AnimationId, AnimationSequencer, AnimationSpec, DEFAULT_SWIPE_DURATION,
    DEFAULT_TRIGGER_DURATION,
};
