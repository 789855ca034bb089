//! A collection of swipeable rows sharing one coordinator.
//!
//! [`SwipeTable`] is what a list view embeds: it owns the rows, routes host
//! events to them by [`RowId`] and applies the single-open policy by hiding
//! the rows the coordinator queues after every operation.
//!
//! Row ids are generational. Events addressed to a removed row are
//! ignored, and so are events addressed to a recycled row through an id
//! handed out before [`SwipeTable::recycle`].

use std::sync::Arc;
use std::time::Duration;

use lattice_swipe_core::logging::{span_names, targets};
use lattice_swipe_core::{PerfSpan, Point};
use parking_lot::Mutex;
use slotmap::SlotMap;

use crate::animation::AnimationSpec;
use crate::config::SwipeConfig;
use crate::coordinator::RowCoordinator;
use crate::row::{RowId, SwipeCompletion, SwipeRow};
use crate::settings::SwipeDirection;
use crate::transition::RowGeometry;
use crate::tray::{ButtonTray, SwipeButton};

/// A table shared between threads.
///
/// Rows are not meant to be driven concurrently; the lock serializes a
/// multi-threaded host onto a single logical event stream.
pub type SharedSwipeTable = Arc<Mutex<SwipeTable>>;

/// Owns rows and the coordinator they share.
#[derive(Debug, Default)]
pub struct SwipeTable {
    rows: SlotMap<RowId, SwipeRow>,
    coordinator: RowCoordinator,
    config: SwipeConfig,
}

impl SwipeTable {
    /// Create an empty table with the single-open policy.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a table whose rows use `config`.
    ///
    /// Row options apply to every inserted row, tray settings to the trays
    /// built by [`install_buttons`](Self::install_buttons).
    pub fn with_config(config: SwipeConfig) -> Self {
        let config = config.normalized();
        Self {
            rows: SlotMap::with_key(),
            coordinator: RowCoordinator::with_multiple_open(config.allow_multiple_swipe),
            config,
        }
    }

    pub fn config(&self) -> &SwipeConfig {
        &self.config
    }

    /// Wrap the table for use from several threads.
    pub fn into_shared(self) -> SharedSwipeTable {
        Arc::new(Mutex::new(self))
    }

    pub fn allows_multiple_swipe(&self) -> bool {
        self.coordinator.allows_multiple()
    }

    /// Allow or forbid several rows to be open at once.
    pub fn set_allow_multiple_swipe(&mut self, allow: bool) {
        self.config.allow_multiple_swipe = allow;
        self.coordinator.set_allow_multiple(allow);
    }

    // =========================================================================
    // Rows
    // =========================================================================

    /// Add a row at rest and return its id.
    pub fn insert(&mut self, geometry: RowGeometry) -> RowId {
        let options = self.config.row.clone();
        let id = self.rows.insert_with_key(|id| {
            let mut row = SwipeRow::new(id, geometry);
            row.set_options(options);
            row
        });
        tracing::debug!(target: targets::TABLE, row = ?id, "row inserted");
        id
    }

    /// Remove a row, dropping it from the open set without animation.
    pub fn remove(&mut self, id: RowId) -> Option<SwipeRow> {
        let mut row = self.rows.remove(id)?;
        row.reset(&mut self.coordinator);
        tracing::debug!(target: targets::TABLE, row = ?id, "row removed");
        Some(row)
    }

    /// Recycle a row for new content.
    ///
    /// The old id stops working; the returned id addresses the same row,
    /// now at rest with its trays kept.
    pub fn recycle(&mut self, id: RowId) -> Option<RowId> {
        let row = self.remove(id)?;
        let new_id = self.rows.insert_with_key(|new_id| row.into_recycled(new_id));
        tracing::debug!(target: targets::TABLE, old = ?id, new = ?new_id, "row recycled");
        Some(new_id)
    }

    pub fn contains(&self, id: RowId) -> bool {
        self.rows.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, id: RowId) -> Option<&SwipeRow> {
        self.rows.get(id)
    }

    /// Mutable access for configuration (trays, delegate, signals).
    pub fn row_mut(&mut self, id: RowId) -> Option<&mut SwipeRow> {
        self.rows.get_mut(id)
    }

    pub fn rows(&self) -> impl Iterator<Item = (RowId, &SwipeRow)> {
        self.rows.iter()
    }

    /// Rows currently open or opening, oldest first.
    pub fn open_rows(&self) -> &[RowId] {
        self.coordinator.open_rows()
    }

    pub fn coordinator(&self) -> &RowCoordinator {
        &self.coordinator
    }

    // =========================================================================
    // Forwarded operations
    // =========================================================================

    /// Run `op` on row `id` with the coordinator, then hide the rows it
    /// displaced. Returns `None` for unknown ids.
    fn with_row<R>(
        &mut self,
        id: RowId,
        op: impl FnOnce(&mut SwipeRow, &mut RowCoordinator) -> R,
    ) -> Option<R> {
        let Some(row) = self.rows.get_mut(id) else {
            tracing::trace!(target: targets::TABLE, row = ?id, "event for unknown row ignored");
            return None;
        };
        let result = op(row, &mut self.coordinator);
        self.drain_hides();
        Some(result)
    }

    fn drain_hides(&mut self) {
        loop {
            let pending = self.coordinator.take_pending_hides();
            if pending.is_empty() {
                break;
            }
            for id in pending {
                match self.rows.get_mut(id) {
                    Some(row) => row.hide_swipe(true, &mut self.coordinator),
                    None => self.coordinator.row_recycled(id),
                }
            }
        }
    }

    /// Give row `id` the buttons for `direction`, laid out with the
    /// table's configured settings for that side.
    pub fn install_buttons(&mut self, id: RowId, direction: SwipeDirection, buttons: Vec<SwipeButton>) {
        let tray = self.config.tray(direction, buttons);
        self.set_buttons(id, direction, tray);
    }

    pub fn set_buttons(&mut self, id: RowId, direction: SwipeDirection, tray: ButtonTray) {
        if let Some(row) = self.rows.get_mut(id) {
            row.set_buttons(direction, tray);
        }
    }

    pub fn refresh_buttons(&mut self, id: RowId, using_delegate: bool) {
        self.with_row(id, |row, c| row.refresh_buttons(using_delegate, c));
    }

    /// Start a drag; `false` for unknown rows and rejected gestures.
    pub fn begin_drag(&mut self, id: RowId, point: Option<Point>, delta: f32) -> bool {
        self.with_row(id, |row, _| row.begin_drag(point, delta))
            .unwrap_or(false)
    }

    pub fn move_drag(&mut self, id: RowId, delta: f32) {
        self.with_row(id, |row, _| row.move_drag(delta));
    }

    pub fn end_drag(&mut self, id: RowId, velocity: Option<f32>) {
        self.with_row(id, |row, c| row.end_drag(velocity, c));
    }

    pub fn cancel_drag(&mut self, id: RowId) {
        self.with_row(id, |row, c| row.cancel_drag(c));
    }

    pub fn set_swipe_offset(
        &mut self,
        id: RowId,
        offset: f32,
        animation: Option<AnimationSpec>,
        completion: Option<SwipeCompletion>,
    ) {
        self.with_row(id, |row, c| {
            row.set_swipe_offset(offset, animation, completion, c)
        });
    }

    pub fn show_swipe(&mut self, id: RowId, direction: SwipeDirection, animated: bool) -> bool {
        self.with_row(id, |row, c| row.show_swipe(direction, animated, c))
            .unwrap_or(false)
    }

    pub fn hide_swipe(&mut self, id: RowId, animated: bool) {
        self.with_row(id, |row, c| row.hide_swipe(animated, c));
    }

    pub fn expand_swipe(&mut self, id: RowId, direction: SwipeDirection, animated: bool) -> bool {
        self.with_row(id, |row, c| row.expand_swipe(direction, animated, c))
            .unwrap_or(false)
    }

    pub fn tap_button(&mut self, id: RowId, direction: SwipeDirection, index: usize) -> bool {
        self.with_row(id, |row, c| row.tap_button(direction, index, c))
            .unwrap_or(false)
    }

    pub fn tap(&mut self, id: RowId, point: Point) -> bool {
        self.with_row(id, |row, c| row.tap(point, c))
            .unwrap_or(false)
    }

    /// Hide every open row.
    pub fn hide_all(&mut self, animated: bool) {
        let open: Vec<RowId> = self.coordinator.open_rows().to_vec();
        for id in open {
            self.hide_swipe(id, animated);
        }
    }

    /// Advance every running animation by `dt`.
    ///
    /// Returns whether any row is still animating.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let _span = PerfSpan::new(span_names::TICK);
        let mut animating = false;
        for (_, row) in self.rows.iter_mut() {
            if row.is_animating() {
                animating |= row.tick(dt, &mut self.coordinator);
            }
        }
        self.drain_hides();
        animating || self.rows.values().any(SwipeRow::is_animating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TrayConfig;
    use crate::settings::{RowOptions, SwipePhase, SwipeSettings, TransitionStyle};

    fn table_with_rows(n: usize) -> (SwipeTable, Vec<RowId>) {
        let mut table = SwipeTable::new();
        let ids = (0..n)
            .map(|_| {
                let id = table.insert(RowGeometry::new(320.0, 44.0));
                let tray = ButtonTray::with_buttons(vec![
                    SwipeButton::new(1, 40.0),
                    SwipeButton::new(2, 40.0),
                ]);
                table.set_buttons(id, SwipeDirection::LeftToRight, tray.clone());
                table.set_buttons(id, SwipeDirection::RightToLeft, tray);
                id
            })
            .collect();
        (table, ids)
    }

    fn settle(table: &mut SwipeTable) {
        while table.tick(Duration::from_millis(16)) {}
    }

    #[test]
    fn test_single_open_hides_previous() {
        let (mut table, ids) = table_with_rows(2);
        assert!(table.show_swipe(ids[0], SwipeDirection::LeftToRight, false));
        assert_eq!(table.open_rows(), &[ids[0]]);

        assert!(table.begin_drag(ids[1], None, -60.0));
        table.end_drag(ids[1], None);
        // The first row is already hiding before the second finishes opening.
        assert!(table.row(ids[1]).unwrap().is_animating());
        assert!(table.row(ids[0]).unwrap().is_animating());
        assert_eq!(table.open_rows(), &[ids[1]]);

        settle(&mut table);
        assert_eq!(table.row(ids[0]).unwrap().phase(), SwipePhase::Idle);
        assert_eq!(table.row(ids[1]).unwrap().offset(), -80.0);
    }

    #[test]
    fn test_multiple_open_allowed() {
        let (mut table, ids) = table_with_rows(3);
        table.set_allow_multiple_swipe(true);
        for &id in &ids {
            table.show_swipe(id, SwipeDirection::RightToLeft, false);
        }
        assert_eq!(table.open_rows().len(), 3);
        table.hide_all(false);
        assert!(table.open_rows().is_empty());
    }

    #[test]
    fn test_unknown_row_is_noop() {
        let (mut table, ids) = table_with_rows(1);
        let removed = ids[0];
        table.remove(removed);
        assert!(!table.begin_drag(removed, None, 10.0));
        table.move_drag(removed, 10.0);
        table.end_drag(removed, None);
        assert!(!table.show_swipe(removed, SwipeDirection::LeftToRight, true));
        assert!(table.is_empty());
    }

    #[test]
    fn test_recycle_invalidates_old_id() {
        let (mut table, ids) = table_with_rows(1);
        table.show_swipe(ids[0], SwipeDirection::LeftToRight, false);
        let fresh = table.recycle(ids[0]).unwrap();

        assert!(!table.contains(ids[0]));
        assert!(table.open_rows().is_empty());
        let row = table.row(fresh).unwrap();
        assert_eq!(row.offset(), 0.0);
        assert!(row.tray(SwipeDirection::LeftToRight).is_some());

        table.show_swipe(ids[0], SwipeDirection::LeftToRight, false);
        assert_eq!(table.row(fresh).unwrap().offset(), 0.0);
    }

    #[test]
    fn test_removed_open_row_leaves_open_set() {
        let (mut table, ids) = table_with_rows(2);
        table.show_swipe(ids[0], SwipeDirection::LeftToRight, false);
        table.remove(ids[0]);
        assert!(table.open_rows().is_empty());
        table.show_swipe(ids[1], SwipeDirection::LeftToRight, false);
        assert_eq!(table.open_rows(), &[ids[1]]);
    }

    #[test]
    fn test_config_applies_to_rows_and_trays() {
        let config = SwipeConfig {
            right: TrayConfig {
                swipe: SwipeSettings::with_style(TransitionStyle::Drag),
                ..TrayConfig::default()
            },
            row: RowOptions {
                allow_opposite_swipe: false,
                ..RowOptions::default()
            },
            allow_multiple_swipe: true,
            ..SwipeConfig::default()
        };
        let mut table = SwipeTable::with_config(config);
        assert!(table.allows_multiple_swipe());

        let id = table.insert(RowGeometry::new(320.0, 44.0));
        table.install_buttons(id, SwipeDirection::RightToLeft, vec![SwipeButton::new(1, 60.0)]);
        let row = table.row(id).unwrap();
        assert!(!row.options().allow_opposite_swipe);
        let tray = row.tray(SwipeDirection::RightToLeft).unwrap();
        assert_eq!(tray.settings().transition_style, TransitionStyle::Drag);
        assert_eq!(tray.width(), 60.0);
    }

    #[test]
    fn test_shared_table_across_threads() {
        let (table, ids) = table_with_rows(1);
        let shared = table.into_shared();
        let worker = {
            let shared = shared.clone();
            let id = ids[0];
            std::thread::spawn(move || {
                shared.lock().show_swipe(id, SwipeDirection::LeftToRight, false);
            })
        };
        worker.join().unwrap();
        assert_eq!(shared.lock().row(ids[0]).unwrap().offset(), 80.0);
    }
}
