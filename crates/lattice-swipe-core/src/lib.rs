//! Core systems for Lattice Swipe.
//!
//! This crate provides the foundations the swipe engine is built on:
//!
//! - **Signal/Slot System**: Type-safe notification from rows to the host
//! - **Geometry**: Points, sizes, rectangles and colors used by layouts
//! - **Errors**: The error type for the few fallible operations (configuration)
//! - **Logging**: `tracing` targets, span names and wrapper macros
//!
//! # Signal/Slot Example
//!
//! ```
//! use lattice_swipe_core::Signal;
//!
//! // Create a signal that notifies when an offset changes
//! let offset_changed = Signal::<f32>::new();
//!
//! // Connect a slot to handle the signal
//! let conn_id = offset_changed.connect(|offset| {
//!     println!("Offset is now: {}", offset);
//! });
//!
//! // Emit the signal
//! offset_changed.emit(42.0);
//!
//! // Disconnect when done
//! offset_changed.disconnect(conn_id);
//! ```
//!
//! # Geometry Example
//!
//! ```
//! use lattice_swipe_core::{Point, Rect};
//!
//! let row = Rect::new(0.0, 0.0, 320.0, 44.0);
//! assert!(row.contains(Point::new(10.0, 10.0)));
//! ```

mod error;
pub mod geometry;
pub mod logging;
pub mod signal;

pub use error::{Result, SwipeError};
pub use geometry::{Color, Point, Rect, Size};
pub use logging::PerfSpan;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
