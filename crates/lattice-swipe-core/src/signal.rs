//! Signal/slot system for Lattice Swipe.
//!
//! Rows report what happens to them (phase changes, offset updates, the
//! start and end of user swipes) through signals. A host connects slots
//! (closures) to the signals it cares about and ignores the rest, so no
//! host is forced to implement a full callback interface.
//!
//! # Key Types
//!
//! - [`Signal<Args>`]: something a row reports
//! - [`ConnectionId`]: returned by [`Signal::connect`]
//! - [`ConnectionGuard`]: disconnects when dropped
//!
//! # Invocation
//!
//! Slots are always invoked directly, in connection order, on the thread
//! that emits. The connection table is snapshotted before slots run, so a
//! slot may connect or disconnect slots on the same signal without
//! deadlocking; such changes take effect from the next emission.
//!
//! # Example
//!
//! ```
//! use lattice_swipe_core::Signal;
//!
//! let offset_changed = Signal::<f32>::new();
//! let id = offset_changed.connect(|offset| assert!(offset.is_finite()));
//!
//! offset_changed.emit(-40.0);
//! assert!(offset_changed.disconnect(id));
//! ```

use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use slotmap::{new_key_type, SlotMap};

use crate::logging::targets;

new_key_type! {
    /// Identifies one connection; pass it to [`Signal::disconnect`].
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;
type SlotTable<Args> = Mutex<SlotMap<ConnectionId, Slot<Args>>>;

/// A notification with any number of connected slots.
///
/// `Args` is what every slot receives, e.g. `f32` for an offset or
/// `(SwipePhase, bool)` for a phase change.
pub struct Signal<Args> {
    connections: Arc<SlotTable<Args>>,
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args> std::fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("connections", &self.connections.lock().len())
            .finish()
    }
}

impl<Args: 'static> Signal<Args> {
    pub fn new() -> Self {
        Self {
            connections: Arc::new(Mutex::new(SlotMap::with_key())),
        }
    }

    /// Connect `slot`; it runs on every later emission until disconnected.
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        self.connections.lock().insert(Arc::new(slot))
    }

    /// Connect `slot` for as long as the returned guard lives.
    ///
    /// The guard only holds a weak handle on the connection table, so it may
    /// outlive the signal.
    pub fn connect_scoped<F>(&self, slot: F) -> ConnectionGuard<Args>
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let id = self.connect(slot);
        ConnectionGuard {
            connections: Arc::downgrade(&self.connections),
            id,
        }
    }

    /// Returns `false` when `id` was not connected.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.connections.lock().remove(id).is_some()
    }

    pub fn disconnect_all(&self) {
        self.connections.lock().clear();
    }

    pub fn connection_count(&self) -> usize {
        self.connections.lock().len()
    }

    /// Invoke every connected slot with `args`, in connection order.
    #[tracing::instrument(skip_all, target = "lattice_swipe_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) {
        let slots: Vec<Slot<Args>> = self.connections.lock().values().cloned().collect();
        if slots.is_empty() {
            return;
        }
        tracing::trace!(target: targets::SIGNAL, slots = slots.len(), "emit");
        for slot in slots {
            slot(&args);
        }
    }
}

/// Disconnects its slot when dropped. Created by [`Signal::connect_scoped`].
///
/// ```
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use std::sync::Arc;
/// use lattice_swipe_core::Signal;
///
/// let began = Signal::<u64>::new();
/// let swipes = Arc::new(AtomicUsize::new(0));
/// {
///     let swipes = swipes.clone();
///     let _guard = began.connect_scoped(move |_| {
///         swipes.fetch_add(1, Ordering::SeqCst);
///     });
///     began.emit(7);
/// }
/// began.emit(8);
/// assert_eq!(swipes.load(Ordering::SeqCst), 1);
/// ```
pub struct ConnectionGuard<Args> {
    connections: Weak<SlotTable<Args>>,
    id: ConnectionId,
}

impl<Args> ConnectionGuard<Args> {
    pub fn id(&self) -> ConnectionId {
        self.id
    }
}

impl<Args> Drop for ConnectionGuard<Args> {
    fn drop(&mut self) {
        if let Some(connections) = self.connections.upgrade() {
            connections.lock().remove(self.id);
        }
    }
}
