//! Offset animation sequencing.
//!
//! An [`AnimationSequencer`] drives a single value from a start to a target
//! over time. It owns no timer: the host (or a test) calls
//! [`tick`](AnimationSequencer::tick) with the time elapsed since the last
//! frame, and the sequencer answers with the value to render.
//!
//! At most one animation runs per sequencer. Starting another one, or
//! cancelling, hands back the completion payload of the interrupted
//! animation so the owner can report it as unfinished before anything else
//! happens.

use std::time::Duration;

use lattice_swipe_core::logging::targets;
use serde::{Deserialize, Serialize};

use super::easing::{interpolate, Easing};

/// Default duration of show/hide/stretch animations, in seconds.
pub const DEFAULT_SWIPE_DURATION: f32 = 0.3;

/// Default duration of expansion trigger animations, in seconds.
pub const DEFAULT_TRIGGER_DURATION: f32 = 0.2;

/// Timing of a single animated phase: how long it lasts and which curve it
/// follows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSpec {
    /// Duration in seconds. Zero or negative means an instantaneous jump.
    pub duration: f32,
    /// Curve applied to the progress.
    pub easing: Easing,
}

impl Default for AnimationSpec {
    fn default() -> Self {
        Self {
            duration: DEFAULT_SWIPE_DURATION,
            easing: Easing::CubicOut,
        }
    }
}

impl AnimationSpec {
    /// Create a spec from a duration in seconds and a curve.
    pub const fn new(duration: f32, easing: Easing) -> Self {
        Self { duration, easing }
    }

    /// The default trigger animation used by expansions.
    pub const fn trigger() -> Self {
        Self::new(DEFAULT_TRIGGER_DURATION, Easing::CubicOut)
    }

    /// A spec that jumps straight to its target.
    pub const fn instant() -> Self {
        Self::new(0.0, Easing::Linear)
    }

    /// Whether this spec degrades to a jump.
    ///
    /// Non-finite durations are treated as instantaneous as well.
    #[inline]
    pub fn is_instant(&self) -> bool {
        !self.duration.is_finite() || self.duration <= 0.0
    }

    /// Value at `elapsed` seconds for an animation between `from` and `to`.
    #[inline]
    pub fn value_at(&self, elapsed: f32, from: f32, to: f32) -> f32 {
        if self.is_instant() {
            return to;
        }
        interpolate(self.easing, elapsed, self.duration, from, to)
    }
}

/// Identifies one started animation; ids are never reused by a sequencer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AnimationId(u64);

/// The result of advancing a running animation by one frame.
#[derive(Debug)]
pub struct AnimationFrame<C> {
    /// The animation this frame belongs to.
    pub id: AnimationId,
    /// Value to render for this frame.
    pub value: f32,
    /// Completion payload, present on the frame that reaches the target.
    pub completed: Option<C>,
}

#[derive(Debug)]
struct ActiveAnimation<C> {
    id: AnimationId,
    from: f32,
    to: f32,
    spec: AnimationSpec,
    elapsed: f32,
    completion: C,
}

/// Runs one offset interpolation at a time.
///
/// `C` is the payload handed back when the animation ends, either finished
/// from [`tick`](Self::tick) or interrupted from [`start`](Self::start) /
/// [`cancel`](Self::cancel).
#[derive(Debug)]
pub struct AnimationSequencer<C> {
    active: Option<ActiveAnimation<C>>,
    next_id: u64,
}

impl<C> Default for AnimationSequencer<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> AnimationSequencer<C> {
    /// Create an idle sequencer.
    pub fn new() -> Self {
        Self {
            active: None,
            next_id: 0,
        }
    }

    /// Whether an animation is in flight.
    #[inline]
    pub fn is_running(&self) -> bool {
        self.active.is_some()
    }

    /// The id of the animation in flight.
    pub fn current(&self) -> Option<AnimationId> {
        self.active.as_ref().map(|a| a.id)
    }

    /// Target value of the animation in flight.
    pub fn target(&self) -> Option<f32> {
        self.active.as_ref().map(|a| a.to)
    }

    /// Start animating from `from` to `to`.
    ///
    /// Returns the new animation's id and the completion payload of the
    /// animation it replaced, if one was still running. The caller must
    /// report that payload as unfinished before rendering the new
    /// animation's first frame.
    pub fn start(
        &mut self,
        from: f32,
        to: f32,
        spec: AnimationSpec,
        completion: C,
    ) -> (AnimationId, Option<C>) {
        let interrupted = self.cancel();
        let id = AnimationId(self.next_id);
        self.next_id += 1;

        tracing::trace!(
            target: targets::ANIMATION,
            id = id.0,
            from,
            to,
            duration = spec.duration,
            easing = ?spec.easing,
            "animation started"
        );

        self.active = Some(ActiveAnimation {
            id,
            from,
            to,
            spec,
            elapsed: 0.0,
            completion,
        });
        (id, interrupted)
    }

    /// Stop the animation in flight, returning its completion payload.
    pub fn cancel(&mut self) -> Option<C> {
        let active = self.active.take()?;
        tracing::trace!(
            target: targets::ANIMATION,
            id = active.id.0,
            elapsed = active.elapsed,
            "animation cancelled"
        );
        Some(active.completion)
    }

    /// Advance the animation in flight by `dt`.
    ///
    /// Returns `None` when idle. The frame that reaches the target carries
    /// the completion payload and leaves the sequencer idle. A zero `dt`
    /// re-reports the current value without side effects.
    pub fn tick(&mut self, dt: Duration) -> Option<AnimationFrame<C>> {
        let active = self.active.as_mut()?;
        active.elapsed += dt.as_secs_f32();

        let done = active.spec.is_instant() || active.elapsed >= active.spec.duration;
        let value = active.spec.value_at(active.elapsed, active.from, active.to);
        let id = active.id;

        if !done {
            return Some(AnimationFrame {
                id,
                value,
                completed: None,
            });
        }

        let finished = self.active.take()?;
        tracing::trace!(target: targets::ANIMATION, id = id.0, "animation finished");
        Some(AnimationFrame {
            id,
            value: finished.to,
            completed: Some(finished.completion),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(millis: u64) -> Duration {
        Duration::from_millis(millis)
    }

    #[test]
    fn test_defaults() {
        let spec = AnimationSpec::default();
        assert_eq!(spec.duration, 0.3);
        assert_eq!(spec.easing, Easing::CubicOut);
        assert_eq!(AnimationSpec::trigger().duration, 0.2);
    }

    #[test]
    fn test_idle_tick() {
        let mut seq = AnimationSequencer::<()>::new();
        assert!(seq.tick(ms(16)).is_none());
        assert!(seq.cancel().is_none());
    }

    #[test]
    fn test_runs_to_completion() {
        let mut seq = AnimationSequencer::new();
        let (id, interrupted) = seq.start(0.0, 80.0, AnimationSpec::new(0.3, Easing::Linear), "done");
        assert!(interrupted.is_none());
        assert_eq!(seq.current(), Some(id));
        assert_eq!(seq.target(), Some(80.0));

        let frame = seq.tick(ms(150)).unwrap();
        assert!((frame.value - 40.0).abs() < 0.01);
        assert!(frame.completed.is_none());

        let frame = seq.tick(ms(150)).unwrap();
        assert_eq!(frame.value, 80.0);
        assert_eq!(frame.completed, Some("done"));
        assert!(!seq.is_running());
    }

    #[test]
    fn test_values_monotonic_for_monotonic_curve() {
        let mut seq = AnimationSequencer::new();
        seq.start(0.0, 100.0, AnimationSpec::new(0.3, Easing::QuadInOut), ());
        let mut last = 0.0;
        while let Some(frame) = seq.tick(ms(16)) {
            assert!(frame.value >= last);
            last = frame.value;
        }
        assert_eq!(last, 100.0);
    }

    #[test]
    fn test_restart_hands_back_previous() {
        let mut seq = AnimationSequencer::new();
        let (first, _) = seq.start(0.0, 80.0, AnimationSpec::default(), 1);
        seq.tick(ms(50));
        let (second, interrupted) = seq.start(30.0, 0.0, AnimationSpec::default(), 2);
        assert_eq!(interrupted, Some(1));
        assert_ne!(first, second);
    }

    #[test]
    fn test_instant_completes_on_first_tick() {
        let mut seq = AnimationSequencer::new();
        seq.start(10.0, 0.0, AnimationSpec::instant(), ());
        let frame = seq.tick(Duration::ZERO).unwrap();
        assert_eq!(frame.value, 0.0);
        assert!(frame.completed.is_some());
    }

    #[test]
    fn test_zero_tick_is_idempotent() {
        let mut seq = AnimationSequencer::new();
        seq.start(0.0, 80.0, AnimationSpec::new(0.3, Easing::Linear), ());
        seq.tick(ms(100));
        let a = seq.tick(Duration::ZERO).unwrap().value;
        let b = seq.tick(Duration::ZERO).unwrap().value;
        assert_eq!(a, b);
    }

    #[test]
    fn test_non_finite_duration_is_instant() {
        assert!(AnimationSpec::new(f32::NAN, Easing::Linear).is_instant());
        assert!(AnimationSpec::new(-0.1, Easing::Linear).is_instant());
        assert!(!AnimationSpec::new(0.1, Easing::Linear).is_instant());
    }
}
