//! Host callbacks for swipeable rows.

use lattice_swipe_core::Point;

use crate::row::RowId;
use crate::settings::{SwipeDirection, SwipePhase};
use crate::tray::ButtonTray;

/// Decisions and notifications a row delegates to its host.
///
/// Every method has a default, so implementors only override what they
/// care about. Rows keep a weak reference to their delegate; a dropped
/// delegate behaves like one using the defaults.
pub trait SwipeRowDelegate: Send + Sync {
    /// Whether a swipe in `direction` may begin.
    ///
    /// `point` is the touch location in row coordinates, `None` for
    /// programmatic requests.
    fn can_swipe(&self, row: RowId, direction: SwipeDirection, point: Option<Point>) -> bool {
        let _ = (row, direction, point);
        true
    }

    /// Buttons for `direction`, asked for lazily when the tray is first
    /// needed. `None` leaves the side without buttons.
    fn swipe_buttons(&self, row: RowId, direction: SwipeDirection) -> Option<ButtonTray> {
        let _ = (row, direction);
        None
    }

    /// Called on every phase change.
    fn did_change_swipe_state(&self, row: RowId, phase: SwipePhase, gesture_is_active: bool) {
        let _ = (row, phase, gesture_is_active);
    }

    /// A button was activated by a tap or by an expansion.
    ///
    /// Return `true` to hide the row afterwards.
    fn tapped_button(
        &self,
        row: RowId,
        index: usize,
        direction: SwipeDirection,
        from_expansion: bool,
    ) -> bool {
        let _ = (row, index, direction, from_expansion);
        false
    }

    /// Whether a tap on the content of an open row should close it.
    fn should_hide_swipe_on_tap(&self, row: RowId, point: Point) -> bool {
        let _ = (row, point);
        true
    }

    fn will_begin_swiping(&self, row: RowId) {
        let _ = row;
    }

    fn will_end_swiping(&self, row: RowId) {
        let _ = row;
    }
}
