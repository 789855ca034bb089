//! Prelude module for Lattice Swipe.
//!
//! This module re-exports the most commonly used types for convenient importing:
//!
//! ```
//! use lattice_swipe::prelude::*;
//! ```
//!
//! This provides access to:
//! - Rows and tables (`SwipeTable`, `SwipeRow`, `RowId`)
//! - Host callbacks (`SwipeRowDelegate`)
//! - Buttons and settings (`ButtonTray`, `SwipeButton`, `SwipeSettings`, ...)
//! - Layout output (`TrayLayout`, `ButtonLayout`, `RowGeometry`)
//! - Geometry and signals (`Point`, `Rect`, `Color`, `Signal`)

// ============================================================================
// Rows
// ============================================================================

pub use crate::coordinator::RowCoordinator;
pub use crate::delegate::SwipeRowDelegate;
pub use crate::row::{RowId, SwipeCompletion, SwipeRow};
pub use crate::table::{SharedSwipeTable, SwipeTable};

// ============================================================================
// Configuration
// ============================================================================

pub use crate::animation::{AnimationSpec, Easing};
pub use crate::config::{SwipeConfig, TrayConfig};
pub use crate::settings::{
    ExpansionLayout, ExpansionSettings, RowOptions, SwipeDirection, SwipePhase, SwipeSettings,
    TransitionStyle,
};
pub use crate::tray::{ButtonHandle, ButtonTray, SwipeButton};

// ============================================================================
// Layout
// ============================================================================

pub use crate::expansion::ExpandedButton;
pub use crate::transition::{ButtonLayout, RowGeometry, TrayLayout};

// ============================================================================
// Core
// ============================================================================

pub use lattice_swipe_core::{Color, Point, Rect, Signal, Size};
