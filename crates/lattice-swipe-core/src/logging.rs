//! Logging facilities for Lattice Swipe.
//!
//! This module provides:
//! - Target and span name constants for filtering `tracing` output
//! - A performance span guard for profiling
//!
//! # Tracing Integration
//!
//! Lattice Swipe only emits through the `tracing` facade. To see logs,
//! install a subscriber in your application:
//!
//! ```ignore
//! use tracing_subscriber::EnvFilter;
//!
//! fn main() {
//!     tracing_subscriber::fmt()
//!         .with_env_filter(EnvFilter::new("lattice_swipe::row=debug"))
//!         .init();
//! }
//! ```

/// Span names used throughout Lattice Swipe for tracing.
///
/// These constants can be used to filter traces for specific subsystems.
pub mod span_names {
    /// A drag gesture from begin to end or cancel.
    pub const GESTURE: &str = "lattice_swipe::gesture";
    /// A settle animation from start to completion.
    pub const SETTLE: &str = "lattice_swipe::settle";
    /// Per-frame tick processing.
    pub const TICK: &str = "lattice_swipe::tick";
}

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Core crate target.
    pub const CORE: &str = "lattice_swipe_core";
    /// Signal/slot system target.
    pub const SIGNAL: &str = "lattice_swipe_core::signal";
    /// Drag state machine target.
    pub const ROW: &str = "lattice_swipe::row";
    /// Animation sequencer target.
    pub const ANIMATION: &str = "lattice_swipe::animation";
    /// Open-row coordination target.
    pub const COORDINATOR: &str = "lattice_swipe::coordinator";
    /// Row collection target.
    pub const TABLE: &str = "lattice_swipe::table";
    /// Configuration loading target.
    pub const CONFIG: &str = "lattice_swipe::config";
}

/// A guard that emits a tracing span when dropped.
///
/// This is useful for tracking the duration of operations.
#[derive(Debug)]
pub struct PerfSpan {
    #[allow(dead_code)]
    span: tracing::span::EnteredSpan,
}

impl PerfSpan {
    /// Create a new performance span.
    ///
    /// The span will be active until the guard is dropped.
    pub fn new(name: &'static str) -> Self {
        let span = tracing::info_span!(target: "lattice_swipe::perf", "perf", operation = name);
        Self {
            span: span.entered(),
        }
    }
}
