//! Cross-row bookkeeping.
//!
//! The coordinator tracks which rows are open (settled open or settling
//! open) and enforces the single-open policy: when a row starts opening,
//! every other open row is queued for hiding. The owner of the rows drains
//! that queue with [`RowCoordinator::take_pending_hides`] after each
//! operation and hides the listed rows.

use lattice_swipe_core::logging::targets;

use crate::row::RowId;

/// Tracks open rows across a collection.
#[derive(Debug, Default)]
pub struct RowCoordinator {
    allow_multiple: bool,
    open: Vec<RowId>,
    pending_hides: Vec<RowId>,
}

impl RowCoordinator {
    pub fn new() -> Self {
        Self::default()
    }

    /// A coordinator that lets any number of rows stay open.
    pub fn with_multiple_open(allow_multiple: bool) -> Self {
        Self {
            allow_multiple,
            ..Self::default()
        }
    }

    #[inline]
    pub fn allows_multiple(&self) -> bool {
        self.allow_multiple
    }

    pub fn set_allow_multiple(&mut self, allow: bool) {
        self.allow_multiple = allow;
    }

    /// Rows currently open or opening, oldest first.
    pub fn open_rows(&self) -> &[RowId] {
        &self.open
    }

    pub fn is_open(&self, row: RowId) -> bool {
        self.open.contains(&row)
    }

    /// Record that `row` is opening.
    ///
    /// Unless multiple open rows are allowed, every other open row is moved
    /// to the pending-hide queue.
    pub fn row_opening(&mut self, row: RowId) {
        if !self.allow_multiple {
            let others: Vec<RowId> = self.open.iter().copied().filter(|&r| r != row).collect();
            for other in others {
                if !self.pending_hides.contains(&other) {
                    tracing::debug!(
                        target: targets::COORDINATOR,
                        opening = ?row,
                        hiding = ?other,
                        "hiding other open row"
                    );
                    self.pending_hides.push(other);
                }
            }
        }
        if !self.open.contains(&row) {
            self.open.push(row);
        }
        self.pending_hides.retain(|&r| r != row);
    }

    /// Record that `row` is closing or closed.
    pub fn row_closed(&mut self, row: RowId) {
        self.open.retain(|&r| r != row);
    }

    /// Forget `row` entirely, e.g. when it is recycled or removed.
    pub fn row_recycled(&mut self, row: RowId) {
        self.open.retain(|&r| r != row);
        self.pending_hides.retain(|&r| r != row);
    }

    /// Drain the rows that must be hidden.
    pub fn take_pending_hides(&mut self) -> Vec<RowId> {
        std::mem::take(&mut self.pending_hides)
    }

    pub fn has_pending_hides(&self) -> bool {
        !self.pending_hides.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use slotmap::SlotMap;

    fn ids(n: usize) -> Vec<RowId> {
        let mut map: SlotMap<RowId, ()> = SlotMap::with_key();
        (0..n).map(|_| map.insert(())).collect()
    }

    #[test]
    fn test_single_open_queues_others() {
        let rows = ids(3);
        let mut c = RowCoordinator::new();
        c.row_opening(rows[0]);
        assert!(!c.has_pending_hides());
        c.row_opening(rows[1]);
        assert_eq!(c.take_pending_hides(), vec![rows[0]]);
        assert_eq!(c.open_rows(), &[rows[0], rows[1]]);

        // The hidden row reports closing.
        c.row_closed(rows[0]);
        assert_eq!(c.open_rows(), &[rows[1]]);
        assert!(c.take_pending_hides().is_empty());
    }

    #[test]
    fn test_reopening_same_row_is_noop() {
        let rows = ids(1);
        let mut c = RowCoordinator::new();
        c.row_opening(rows[0]);
        c.row_opening(rows[0]);
        assert_eq!(c.open_rows().len(), 1);
        assert!(!c.has_pending_hides());
    }

    #[test]
    fn test_multiple_open_allowed() {
        let rows = ids(3);
        let mut c = RowCoordinator::with_multiple_open(true);
        for &r in &rows {
            c.row_opening(r);
        }
        assert_eq!(c.open_rows().len(), 3);
        assert!(!c.has_pending_hides());
    }

    #[test]
    fn test_recycled_row_dropped_from_queue() {
        let rows = ids(2);
        let mut c = RowCoordinator::new();
        c.row_opening(rows[0]);
        c.row_opening(rows[1]);
        c.row_recycled(rows[0]);
        assert!(c.take_pending_hides().is_empty());
        assert!(!c.is_open(rows[0]));
        assert!(c.is_open(rows[1]));
    }

    #[test]
    fn test_pending_row_reopening_cancels_its_hide() {
        let rows = ids(2);
        let mut c = RowCoordinator::new();
        c.row_opening(rows[0]);
        c.row_opening(rows[1]);
        c.row_opening(rows[0]);
        assert_eq!(c.take_pending_hides(), vec![rows[1]]);
    }
}
