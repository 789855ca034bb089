//! Lattice Swipe - swipeable list rows.
//!
//! A row can be dragged horizontally to reveal a tray of buttons on either
//! side. This crate is the engine behind that interaction: it tracks the
//! gesture, decides where the row settles, animates it there and computes
//! where every button is drawn for five transition styles. Drawing, touch
//! delivery and frame scheduling belong to the host.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use lattice_swipe::prelude::*;
//!
//! let mut table = SwipeTable::new();
//! let row = table.insert(RowGeometry::new(320.0, 44.0));
//! table.set_buttons(
//!     row,
//!     SwipeDirection::RightToLeft,
//!     ButtonTray::with_buttons(vec![SwipeButton::new(1, 40.0), SwipeButton::new(2, 40.0)]),
//! );
//!
//! // The host forwards touch events...
//! assert!(table.begin_drag(row, None, -10.0));
//! table.move_drag(row, -40.0);
//! table.end_drag(row, None);
//!
//! // ...and frame ticks until the row settles.
//! while table.tick(Duration::from_millis(16)) {}
//!
//! let row = table.row(row).unwrap();
//! assert_eq!(row.offset(), -80.0);
//! assert_eq!(row.phase(), SwipePhase::DraggingRightToLeft);
//!
//! let layout = row.layout().unwrap();
//! assert!(layout.buttons.iter().all(|b| b.is_untransformed()));
//! ```

pub use lattice_swipe_core::*;

pub mod animation;
pub mod config;
pub mod coordinator;
pub mod delegate;
pub mod expansion;
pub mod prelude;
pub mod row;
pub mod settings;
pub mod table;
pub mod transition;
pub mod tray;
