//! A single swipeable row.
//!
//! [`SwipeRow`] owns one row's swipe state: the displayed offset, the phase,
//! the active gesture and the animation settling it. The host feeds it drag
//! events and frame ticks; the row answers through its signals, its
//! delegate and [`SwipeRow::layout`].
//!
//! # Phases
//!
//! ```text
//!            begin/move (allowed)                past expansion threshold
//!   Idle  ------------------------>  Dragging*  ------------------------->  Expanding*
//!    ^                                  |   ^  <-------------------------       |
//!    |        settle closed             |   |     back below (unless fill)      |
//!    +----------------------------------+   +-- settle open (stays Dragging*)   |
//!    +------------------------------------------------------------------------- +
//!                            trigger finished without fill
//! ```
//!
//! A row is `Idle` exactly when its offset is zero and neither a gesture
//! nor an animation is active. A row settled open keeps its `Dragging*`
//! phase; a row expanded with `fill_on_trigger` keeps its `Expanding*`
//! phase until it is hidden.
//!
//! Operations that may open or close the row take the [`RowCoordinator`]
//! of the collection the row belongs to. A standalone row can use its own
//! coordinator.

use std::fmt;
use std::sync::{Arc, Weak};
use std::time::Duration;

use lattice_swipe_core::logging::{span_names, targets};
use lattice_swipe_core::{PerfSpan, Point, Signal};

use crate::animation::{AnimationSequencer, AnimationSpec};
use crate::coordinator::RowCoordinator;
use crate::delegate::SwipeRowDelegate;
use crate::expansion;
use crate::settings::{RowOptions, SwipeDirection, SwipePhase};
use crate::transition::{self, RowGeometry, TrayLayout};
use crate::tray::ButtonTray;

slotmap::new_key_type! {
    /// Identifies a row within a [`SwipeTable`](crate::table::SwipeTable).
    pub struct RowId;
}

/// Release speed, in px/s, past which the fling direction decides the
/// settle target regardless of the reveal threshold.
pub const RELEASE_VELOCITY_THRESHOLD: f32 = 100.0;

/// Called once when a programmatic offset change ends, with `true` when it
/// reached its target and `false` when it was interrupted.
pub type SwipeCompletion = Box<dyn FnOnce(bool) + Send>;

/// Clamp a raw drag offset to the bounds allowed by `tray`.
///
/// Within the open extent the offset is returned unchanged. Past it the
/// overscroll is dropped when bounce is disabled, or scaled by
/// `bounce_resistance` and capped at `max(row_width, open_extent)`.
pub fn clamp_to_tray(raw: f32, tray: &ButtonTray, row_width: f32) -> f32 {
    if !raw.is_finite() {
        return 0.0;
    }
    let extent = tray.open_extent();
    let magnitude = raw.abs();
    if magnitude <= extent {
        return raw;
    }
    let settings = tray.settings();
    if !settings.bounce_enabled {
        return extent * raw.signum();
    }
    let overscroll = (magnitude - extent) * settings.bounce_resistance;
    (extent + overscroll).min(row_width.max(extent)) * raw.signum()
}

/// Decide where a released row settles.
///
/// A fling faster than [`RELEASE_VELOCITY_THRESHOLD`] opens (when the tray
/// keeps open) or closes depending on its direction; otherwise the tray
/// opens when it is revealed past its reveal threshold.
pub fn release_target(
    offset: f32,
    direction: SwipeDirection,
    velocity: Option<f32>,
    tray: &ButtonTray,
) -> f32 {
    let settings = tray.settings();
    let magnitude = (offset * direction.sign()).max(0.0);
    let fling = velocity
        .filter(|v| v.is_finite())
        .map(|v| v * direction.sign());

    let open = match fling {
        Some(v) if v > RELEASE_VELOCITY_THRESHOLD => settings.keep_open_past_threshold,
        Some(v) if v < -RELEASE_VELOCITY_THRESHOLD => false,
        _ => {
            settings.keep_open_past_threshold
                && tray.width() > 0.0
                && magnitude / tray.width() >= settings.reveal_threshold
        }
    };

    if open {
        tray.open_extent() * direction.sign()
    } else {
        0.0
    }
}

/// The animation used to settle from `current` to `target`.
pub fn settle_animation(current: f32, target: f32, tray: &ButtonTray) -> AnimationSpec {
    let settings = tray.settings();
    if target == 0.0 {
        settings.hide_animation
    } else if current.abs() > target.abs() {
        settings.stretch_animation
    } else {
        settings.show_animation
    }
}

#[derive(Debug, Clone)]
struct Gesture {
    raw: f32,
    point: Option<Point>,
    /// Direction the gesture started in.
    origin: Option<SwipeDirection>,
    /// Cached swipe permission per direction.
    allowed: [Option<bool>; 2],
    /// Waiting for the first nonzero movement.
    armed: bool,
    /// Direction whose fill-on-trigger expansion was crossed.
    latched: Option<SwipeDirection>,
}

#[derive(Debug, Clone, Copy)]
enum SettleKind {
    Plain,
    /// Approaching the expansion offset before triggering.
    Expand {
        direction: SwipeDirection,
        animated: bool,
    },
    Trigger {
        direction: SwipeDirection,
        index: usize,
    },
}

struct Settle {
    kind: SettleKind,
    completion: Option<SwipeCompletion>,
}

impl Settle {
    fn plain(completion: Option<SwipeCompletion>) -> Self {
        Self {
            kind: SettleKind::Plain,
            completion,
        }
    }

    fn of(kind: SettleKind) -> Self {
        Self {
            kind,
            completion: None,
        }
    }

    fn interrupt(self) {
        if let Some(completion) = self.completion {
            completion(false);
        }
    }
}

impl fmt::Debug for Settle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settle")
            .field("kind", &self.kind)
            .field("has_completion", &self.completion.is_some())
            .finish()
    }
}

/// One swipeable row.
pub struct SwipeRow {
    id: RowId,
    geometry: RowGeometry,
    options: RowOptions,
    delegate: Option<Weak<dyn SwipeRowDelegate>>,
    trays: [Option<ButtonTray>; 2],
    fetched: [bool; 2],

    offset: f32,
    phase: SwipePhase,
    direction: Option<SwipeDirection>,
    expanded_button: Option<usize>,
    gesture: Option<Gesture>,
    sequencer: AnimationSequencer<Settle>,

    /// Emitted on every phase change with the new phase and whether a user
    /// gesture is active.
    pub state_changed: Signal<(SwipePhase, bool)>,
    /// Emitted whenever the displayed offset changes.
    pub offset_changed: Signal<f32>,
    /// Emitted when a user gesture starts moving the row.
    pub swiping_began: Signal<RowId>,
    /// Emitted when that gesture ends.
    pub swiping_ended: Signal<RowId>,
}

impl fmt::Debug for SwipeRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SwipeRow")
            .field("id", &self.id)
            .field("offset", &self.offset)
            .field("phase", &self.phase)
            .field("direction", &self.direction)
            .field("expanded_button", &self.expanded_button)
            .field("gesture", &self.gesture)
            .field("animating", &self.sequencer.is_running())
            .finish_non_exhaustive()
    }
}

impl SwipeRow {
    /// Create a row at rest.
    pub fn new(id: RowId, geometry: RowGeometry) -> Self {
        Self {
            id,
            geometry,
            options: RowOptions::default(),
            delegate: None,
            trays: [None, None],
            fetched: [false; 2],
            offset: 0.0,
            phase: SwipePhase::Idle,
            direction: None,
            expanded_button: None,
            gesture: None,
            sequencer: AnimationSequencer::new(),
            state_changed: Signal::new(),
            offset_changed: Signal::new(),
            swiping_began: Signal::new(),
            swiping_ended: Signal::new(),
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[inline]
    pub fn id(&self) -> RowId {
        self.id
    }

    /// The displayed offset; positive reveals the left tray.
    #[inline]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    #[inline]
    pub fn phase(&self) -> SwipePhase {
        self.phase
    }

    /// The side currently revealed or being revealed.
    pub fn active_direction(&self) -> Option<SwipeDirection> {
        self.direction
    }

    pub fn expanded_button_index(&self) -> Option<usize> {
        self.expanded_button
    }

    /// Whether a user gesture is moving the row.
    pub fn is_gesture_active(&self) -> bool {
        self.gesture.as_ref().is_some_and(|g| !g.armed)
    }

    pub fn is_animating(&self) -> bool {
        self.sequencer.is_running()
    }

    pub fn geometry(&self) -> &RowGeometry {
        &self.geometry
    }

    pub fn set_geometry(&mut self, geometry: RowGeometry) {
        self.geometry = geometry;
    }

    pub fn options(&self) -> &RowOptions {
        &self.options
    }

    pub fn set_options(&mut self, options: RowOptions) {
        self.options = options;
    }

    /// Install the host delegate. The row only keeps a weak reference.
    pub fn set_delegate<D: SwipeRowDelegate + 'static>(&mut self, delegate: &Arc<D>) {
        let weak: Weak<D> = Arc::downgrade(delegate);
        self.delegate = Some(weak);
    }

    pub fn clear_delegate(&mut self) {
        self.delegate = None;
    }

    fn delegate(&self) -> Option<Arc<dyn SwipeRowDelegate>> {
        self.delegate.as_ref()?.upgrade()
    }

    // =========================================================================
    // Trays
    // =========================================================================

    /// The cached tray for `direction`, without asking the delegate.
    pub fn tray(&self, direction: SwipeDirection) -> Option<&ButtonTray> {
        self.trays[direction.index()].as_ref()
    }

    /// Install the tray for `direction`, replacing any cached one.
    pub fn set_buttons(&mut self, direction: SwipeDirection, tray: ButtonTray) {
        let i = direction.index();
        self.trays[i] = Some(tray);
        self.fetched[i] = true;
    }

    /// Drop the tray for `direction`.
    pub fn clear_buttons(&mut self, direction: SwipeDirection) {
        let i = direction.index();
        self.trays[i] = None;
        self.fetched[i] = true;
    }

    /// Re-layout after the buttons changed.
    ///
    /// With `using_delegate`, cached trays are dropped and fetched again from
    /// the delegate. A revealed side that lost its buttons snaps closed; an
    /// open row is re-clamped to its new extent.
    pub fn refresh_buttons(&mut self, using_delegate: bool, coordinator: &mut RowCoordinator) {
        if using_delegate {
            self.trays = [None, None];
            self.fetched = [false; 2];
        }
        let Some(direction) = self.direction else {
            return;
        };

        let offset = self.offset;
        let row_width = self.geometry.width();
        let clamped = self
            .ensure_tray(direction)
            .filter(|tray| tray.is_swipeable())
            .map(|tray| clamp_to_tray(offset, tray, row_width));

        match clamped {
            None => {
                tracing::debug!(target: targets::ROW, row = ?self.id, ?direction, "revealed tray removed");
                self.take_gesture();
                self.expanded_button = None;
                self.animate_to(0.0, AnimationSpec::instant(), Settle::plain(None), coordinator);
            }
            Some(clamped)
                if clamped != offset
                    && self.gesture.is_none()
                    && !self.sequencer.is_running()
                    && !self.phase.is_expanding() =>
            {
                self.animate_to(clamped, AnimationSpec::instant(), Settle::plain(None), coordinator);
            }
            Some(_) => self.offset_changed.emit(offset),
        }
    }

    fn ensure_tray(&mut self, direction: SwipeDirection) -> Option<&ButtonTray> {
        let i = direction.index();
        if !self.fetched[i] {
            self.fetched[i] = true;
            if self.trays[i].is_none() {
                if let Some(delegate) = self.delegate() {
                    tracing::trace!(target: targets::ROW, row = ?self.id, ?direction, "fetching buttons");
                    self.trays[i] = delegate.swipe_buttons(self.id, direction);
                }
            }
        }
        self.trays[i].as_ref()
    }

    fn can_swipe_direction(&mut self, direction: SwipeDirection, point: Option<Point>) -> bool {
        let swipeable = self
            .ensure_tray(direction)
            .is_some_and(ButtonTray::is_swipeable);
        if !swipeable {
            return false;
        }
        let id = self.id;
        self.delegate()
            .is_none_or(|delegate| delegate.can_swipe(id, direction, point))
    }

    fn direction_allowed(&mut self, direction: SwipeDirection) -> bool {
        let i = direction.index();
        if let Some(allowed) = self.gesture.as_ref().and_then(|g| g.allowed[i]) {
            return allowed;
        }
        let point = self.gesture.as_ref().and_then(|g| g.point);
        let allowed = self.can_swipe_direction(direction, point);
        if let Some(gesture) = self.gesture.as_mut() {
            gesture.allowed[i] = Some(allowed);
        }
        allowed
    }

    // =========================================================================
    // Gestures
    // =========================================================================

    /// Start a drag at `point` (row coordinates) with an initial `delta`.
    ///
    /// A zero delta on a row at rest arms the gesture: the direction is
    /// chosen, and the swipe permission checked, on the first nonzero
    /// [`move_drag`](Self::move_drag). Returns `false` when the gesture is
    /// rejected; a rejected gesture changes nothing and notifies nobody.
    pub fn begin_drag(&mut self, point: Option<Point>, delta: f32) -> bool {
        if self.gesture.is_some() {
            tracing::trace!(target: targets::ROW, row = ?self.id, "gesture already active");
            return false;
        }
        let delta = if delta.is_finite() { delta } else { 0.0 };

        let on_buttons = self.offset != 0.0 && point.and_then(|p| self.button_at(p)).is_some();
        if on_buttons && !self.options.allow_swipe_from_buttons {
            tracing::debug!(target: targets::ROW, row = ?self.id, "swipe from buttons rejected");
            return false;
        }

        let start = self.offset;
        self.gesture = Some(Gesture {
            raw: start,
            point,
            origin: SwipeDirection::from_offset(start),
            allowed: [None; 2],
            armed: true,
            latched: None,
        });

        let direction = SwipeDirection::from_offset(start)
            .or(SwipeDirection::from_offset(delta))
            .or(if self.sequencer.is_running() {
                self.direction
            } else {
                None
            });

        let Some(direction) = direction else {
            return true;
        };
        if self.activate(direction, delta) {
            true
        } else {
            self.gesture = None;
            false
        }
    }

    /// Move the active drag by `delta` pixels.
    ///
    /// Ignored when no gesture is active.
    pub fn move_drag(&mut self, delta: f32) {
        let Some(gesture) = self.gesture.as_mut() else {
            tracing::trace!(target: targets::ROW, row = ?self.id, "move without gesture ignored");
            return;
        };
        if !delta.is_finite() || delta == 0.0 {
            return;
        }
        if gesture.armed {
            let direction = SwipeDirection::from_offset(delta)
                .unwrap_or(SwipeDirection::LeftToRight);
            if !self.activate(direction, delta) {
                self.gesture = None;
            }
            return;
        }
        gesture.raw += delta;
        self.update_drag();
    }

    /// End the drag, optionally with the release velocity in px/s, and
    /// settle the row.
    pub fn end_drag(&mut self, velocity: Option<f32>, coordinator: &mut RowCoordinator) {
        let _span = PerfSpan::new(span_names::GESTURE);
        let Some(gesture) = self.take_gesture() else {
            tracing::trace!(target: targets::ROW, row = ?self.id, "end without gesture ignored");
            return;
        };
        if gesture.armed {
            return;
        }
        let Some(direction) = self.direction else {
            self.refresh_phase();
            return;
        };

        if self.expanded_button.is_some() {
            if !self.start_trigger(direction, true, coordinator) {
                self.expanded_button = None;
                self.animate_to(0.0, AnimationSpec::default(), Settle::plain(None), coordinator);
            }
            return;
        }

        let offset = self.offset;
        let (target, spec) = match self.tray(direction) {
            Some(tray) => {
                let target = release_target(offset, direction, velocity, tray);
                (target, settle_animation(offset, target, tray))
            }
            None => (0.0, AnimationSpec::default()),
        };
        tracing::debug!(
            target: targets::ROW,
            row = ?self.id,
            offset,
            target,
            ?velocity,
            "drag released"
        );
        self.animate_to(target, spec, Settle::plain(None), coordinator);
    }

    /// Cancel the drag; settles exactly like a release without velocity.
    pub fn cancel_drag(&mut self, coordinator: &mut RowCoordinator) {
        self.end_drag(None, coordinator);
    }

    fn activate(&mut self, direction: SwipeDirection, delta: f32) -> bool {
        if !self.direction_allowed(direction) {
            tracing::debug!(target: targets::ROW, row = ?self.id, ?direction, "swipe rejected");
            return false;
        }
        if let Some(settle) = self.sequencer.cancel() {
            settle.interrupt();
        }
        if let Some(gesture) = self.gesture.as_mut() {
            gesture.armed = false;
            gesture.origin = gesture.origin.or(Some(direction));
            gesture.raw += delta;
        }
        self.direction = Some(direction);
        self.expanded_button = None;

        tracing::debug!(target: targets::ROW, row = ?self.id, ?direction, "swipe began");
        if let Some(delegate) = self.delegate() {
            delegate.will_begin_swiping(self.id);
        }
        self.swiping_began.emit(self.id);

        self.update_drag();
        true
    }

    fn take_gesture(&mut self) -> Option<Gesture> {
        let gesture = self.gesture.take()?;
        if !gesture.armed {
            if let Some(delegate) = self.delegate() {
                delegate.will_end_swiping(self.id);
            }
            self.swiping_ended.emit(self.id);
        }
        Some(gesture)
    }

    fn filter(&mut self, raw: f32) -> f32 {
        let Some(direction) = SwipeDirection::from_offset(raw) else {
            return 0.0;
        };
        let origin = self.gesture.as_ref().and_then(|g| g.origin);
        if origin.is_some_and(|o| o != direction) && !self.options.allow_opposite_swipe {
            return 0.0;
        }
        if !self.direction_allowed(direction) {
            return 0.0;
        }
        match self.tray(direction) {
            Some(tray) => clamp_to_tray(raw, tray, self.geometry.width()),
            None => 0.0,
        }
    }

    fn update_drag(&mut self) {
        let Some(raw) = self.gesture.as_ref().map(|g| g.raw) else {
            return;
        };
        let offset = self.filter(raw);
        self.set_offset_internal(offset);

        let expansion = self.direction.and_then(|direction| {
            let tray = self.tray(direction)?;
            let index = tray.expansion_target()?;
            let latched = self
                .gesture
                .as_ref()
                .is_some_and(|g| g.latched == Some(direction));
            (latched || expansion::is_triggered(offset, tray)).then_some((
                direction,
                index,
                tray.expansion().fill_on_trigger,
            ))
        });

        if let (Some((direction, _, true)), Some(gesture)) = (expansion, self.gesture.as_mut()) {
            gesture.latched = Some(direction);
        }
        self.expanded_button = expansion.map(|(_, index, _)| index);
        self.refresh_phase();
    }

    // =========================================================================
    // Programmatic control
    // =========================================================================

    /// Move to `offset`, animated with `animation` or immediately.
    ///
    /// The offset is clamped like a drag would be; a side without buttons
    /// resolves to zero. Any active gesture is ended and any animation in
    /// flight is interrupted.
    pub fn set_swipe_offset(
        &mut self,
        offset: f32,
        animation: Option<AnimationSpec>,
        completion: Option<SwipeCompletion>,
        coordinator: &mut RowCoordinator,
    ) {
        let requested = if offset.is_finite() { offset } else { 0.0 };
        let row_width = self.geometry.width();
        let target = match SwipeDirection::from_offset(requested) {
            Some(direction) => self
                .ensure_tray(direction)
                .filter(|tray| tray.is_swipeable())
                .map_or(0.0, |tray| clamp_to_tray(requested, tray, row_width)),
            None => 0.0,
        };

        self.take_gesture();
        self.expanded_button = None;
        let spec = animation.unwrap_or_else(AnimationSpec::instant);
        self.animate_to(target, spec, Settle::plain(completion), coordinator);
    }

    /// Open the tray for `direction`. Returns `false` when it has no buttons.
    pub fn show_swipe(
        &mut self,
        direction: SwipeDirection,
        animated: bool,
        coordinator: &mut RowCoordinator,
    ) -> bool {
        let current = self.offset;
        let Some((target, spec)) = self
            .ensure_tray(direction)
            .filter(|tray| tray.is_swipeable())
            .map(|tray| {
                let target = tray.open_extent() * direction.sign();
                (target, settle_animation(current, target, tray))
            })
        else {
            tracing::debug!(target: targets::ROW, row = ?self.id, ?direction, "nothing to show");
            return false;
        };

        self.take_gesture();
        self.expanded_button = None;
        let spec = if animated { spec } else { AnimationSpec::instant() };
        self.animate_to(target, spec, Settle::plain(None), coordinator);
        true
    }

    /// Close the row. Does nothing on a row that is already idle.
    pub fn hide_swipe(&mut self, animated: bool, coordinator: &mut RowCoordinator) {
        if self.phase == SwipePhase::Idle && !self.sequencer.is_running() {
            tracing::trace!(target: targets::ROW, row = ?self.id, "hide on idle row ignored");
            return;
        }
        self.take_gesture();
        self.expanded_button = None;

        let spec = if animated {
            self.direction
                .and_then(|d| self.tray(d))
                .map_or_else(AnimationSpec::default, |tray| tray.settings().hide_animation)
        } else {
            AnimationSpec::instant()
        };
        self.animate_to(0.0, spec, Settle::plain(None), coordinator);
    }

    /// Expand the configured button of `direction` and trigger it, as if
    /// the user had dragged past the expansion threshold and released.
    ///
    /// Returns `false` when that side has no expansion target.
    pub fn expand_swipe(
        &mut self,
        direction: SwipeDirection,
        animated: bool,
        coordinator: &mut RowCoordinator,
    ) -> bool {
        let row_width = self.geometry.width();
        let Some((index, target, spec)) = self
            .ensure_tray(direction)
            .filter(|tray| tray.is_swipeable())
            .and_then(|tray| {
                let index = tray.expansion_target()?;
                let reach = tray
                    .expansion_offset()?
                    .min(row_width.max(tray.open_extent()));
                Some((index, reach * direction.sign(), tray.settings().show_animation))
            })
        else {
            tracing::debug!(target: targets::ROW, row = ?self.id, ?direction, "nothing to expand");
            return false;
        };

        self.take_gesture();
        self.expanded_button = Some(index);
        let spec = if animated { spec } else { AnimationSpec::instant() };
        self.animate_to(
            target,
            spec,
            Settle::of(SettleKind::Expand {
                direction,
                animated,
            }),
            coordinator,
        );
        true
    }

    /// Report a tap on button `index` of `direction` to the delegate.
    ///
    /// Hides the row when the delegate asks for it; returns that answer.
    pub fn tap_button(
        &mut self,
        direction: SwipeDirection,
        index: usize,
        coordinator: &mut RowCoordinator,
    ) -> bool {
        let valid = self
            .ensure_tray(direction)
            .is_some_and(|tray| index < tray.len());
        if !valid {
            tracing::trace!(target: targets::ROW, row = ?self.id, index, "tap on unknown button");
            return false;
        }
        let id = self.id;
        let auto_hide = self
            .delegate()
            .is_some_and(|delegate| delegate.tapped_button(id, index, direction, false));
        if auto_hide {
            self.hide_swipe(true, coordinator);
        }
        auto_hide
    }

    /// Handle a tap at `point` (row coordinates) on a revealed row.
    ///
    /// Taps on a button go to [`tap_button`](Self::tap_button); taps
    /// elsewhere hide the row when background taps are enabled and the
    /// delegate agrees. Returns whether the tap was consumed.
    pub fn tap(&mut self, point: Point, coordinator: &mut RowCoordinator) -> bool {
        if self.phase == SwipePhase::Idle {
            return false;
        }
        if let Some((direction, index)) = self.button_at(point) {
            self.tap_button(direction, index, coordinator);
            return true;
        }
        if !self.options.hide_on_background_tap {
            return false;
        }
        let id = self.id;
        if !self
            .delegate()
            .is_none_or(|delegate| delegate.should_hide_swipe_on_tap(id, point))
        {
            return false;
        }
        self.hide_swipe(true, coordinator);
        true
    }

    /// The revealed button under `point`, if any.
    pub fn button_at(&self, point: Point) -> Option<(SwipeDirection, usize)> {
        let layout = self.layout()?;
        layout.button_at(point).map(|index| (layout.direction, index))
    }

    /// Layout of the revealed tray at the current offset.
    pub fn layout(&self) -> Option<TrayLayout> {
        let direction = self.direction?;
        let tray = self.tray(direction)?;
        let mut layout = transition::render(self.offset, direction, tray, &self.geometry);
        if self.expanded_button.is_some() {
            expansion::apply(&mut layout, self.offset, tray, &self.geometry);
        }
        Some(layout)
    }

    /// Return the row to rest for reuse.
    ///
    /// The animation in flight is interrupted, the offset and state are
    /// cleared without notifications and the row leaves the coordinator.
    /// Cached trays are kept.
    pub fn reset(&mut self, coordinator: &mut RowCoordinator) {
        if let Some(settle) = self.sequencer.cancel() {
            settle.interrupt();
        }
        self.gesture = None;
        self.offset = 0.0;
        self.phase = SwipePhase::Idle;
        self.direction = None;
        self.expanded_button = None;
        coordinator.row_recycled(self.id);
    }

    /// Move this row's configuration to a new id, at rest.
    ///
    /// Trays, options, delegate and signal connections carry over.
    pub(crate) fn into_recycled(self, id: RowId) -> Self {
        Self {
            id,
            offset: 0.0,
            phase: SwipePhase::Idle,
            direction: None,
            expanded_button: None,
            gesture: None,
            sequencer: AnimationSequencer::new(),
            ..self
        }
    }

    // =========================================================================
    // Animation
    // =========================================================================

    /// Advance the animation in flight by `dt`.
    ///
    /// Returns whether an animation is still running afterwards.
    pub fn tick(&mut self, dt: Duration, coordinator: &mut RowCoordinator) -> bool {
        let Some(frame) = self.sequencer.tick(dt) else {
            return false;
        };
        self.set_offset_internal(frame.value);
        match frame.completed {
            Some(settle) => self.complete(settle, coordinator),
            None => self.refresh_phase(),
        }
        self.sequencer.is_running()
    }

    fn animate_to(
        &mut self,
        target: f32,
        spec: AnimationSpec,
        settle: Settle,
        coordinator: &mut RowCoordinator,
    ) {
        let target = if target.is_finite() { target } else { 0.0 };
        let spec = if self.offset == target {
            AnimationSpec::instant()
        } else {
            spec
        };

        if target != 0.0 {
            coordinator.row_opening(self.id);
        } else {
            coordinator.row_closed(self.id);
        }
        self.direction = SwipeDirection::from_offset(self.offset)
            .or(SwipeDirection::from_offset(target))
            .or(self.direction);

        tracing::debug!(
            target: targets::ROW,
            row = ?self.id,
            from = self.offset,
            to = target,
            duration = spec.duration,
            "settling"
        );
        let (_, interrupted) = self.sequencer.start(self.offset, target, spec, settle);
        if let Some(previous) = interrupted {
            previous.interrupt();
        }
        self.refresh_phase();

        if spec.is_instant() {
            self.tick(Duration::ZERO, coordinator);
        }
    }

    fn complete(&mut self, settle: Settle, coordinator: &mut RowCoordinator) {
        let _span = PerfSpan::new(span_names::SETTLE);
        let Settle { kind, completion } = settle;
        match kind {
            SettleKind::Plain => {
                self.settle_at_rest();
                self.refresh_phase();
                if let Some(completion) = completion {
                    completion(true);
                }
            }
            SettleKind::Expand {
                direction,
                animated,
            } => {
                if !self.start_trigger(direction, animated, coordinator) {
                    self.expanded_button = None;
                    self.refresh_phase();
                }
                if let Some(completion) = completion {
                    completion(true);
                }
            }
            SettleKind::Trigger { direction, index } => {
                let fill = self
                    .tray(direction)
                    .is_some_and(|tray| tray.expansion().fill_on_trigger);
                if !fill {
                    self.expanded_button = None;
                }
                self.settle_at_rest();
                self.refresh_phase();

                tracing::debug!(target: targets::ROW, row = ?self.id, index, ?direction, "expansion triggered");
                let id = self.id;
                let auto_hide = self
                    .delegate()
                    .is_some_and(|delegate| delegate.tapped_button(id, index, direction, true));
                if let Some(completion) = completion {
                    completion(true);
                }
                if auto_hide {
                    self.hide_swipe(true, coordinator);
                }
            }
        }
    }

    /// Animate from the expanded offset to where the expansion settles.
    fn start_trigger(
        &mut self,
        direction: SwipeDirection,
        animated: bool,
        coordinator: &mut RowCoordinator,
    ) -> bool {
        let row_width = self.geometry.width();
        let Some((index, target, spec)) = self.tray(direction).and_then(|tray| {
            let index = tray.expansion_target()?;
            Some((
                index,
                expansion::settle_offset(tray, direction, row_width),
                tray.expansion().trigger_animation,
            ))
        }) else {
            return false;
        };
        self.expanded_button = Some(index);
        let spec = if animated { spec } else { AnimationSpec::instant() };
        self.animate_to(
            target,
            spec,
            Settle::of(SettleKind::Trigger { direction, index }),
            coordinator,
        );
        true
    }

    fn settle_at_rest(&mut self) {
        if self.offset == 0.0 && !self.sequencer.is_running() && self.gesture.is_none() {
            self.direction = None;
            self.expanded_button = None;
        }
    }

    fn set_offset_internal(&mut self, offset: f32) {
        if let Some(direction) = SwipeDirection::from_offset(offset) {
            self.direction = Some(direction);
        }
        if offset == self.offset {
            return;
        }
        self.offset = offset;
        tracing::trace!(target: targets::ROW, row = ?self.id, offset, "offset changed");
        self.offset_changed.emit(offset);
    }

    fn refresh_phase(&mut self) {
        let gesture_active = self.is_gesture_active();
        let busy = gesture_active || self.sequencer.is_running();
        let phase = match self.direction {
            Some(direction) if self.offset != 0.0 || busy => {
                if self.expanded_button.is_some() {
                    SwipePhase::expanding(direction)
                } else {
                    SwipePhase::dragging(direction)
                }
            }
            _ => SwipePhase::Idle,
        };
        if phase == self.phase {
            return;
        }

        tracing::debug!(
            target: targets::ROW,
            row = ?self.id,
            from = ?self.phase,
            to = ?phase,
            gesture_active,
            "phase changed"
        );
        self.phase = phase;
        if let Some(delegate) = self.delegate() {
            delegate.did_change_swipe_state(self.id, phase, gesture_active);
        }
        self.state_changed.emit((phase, gesture_active));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::{ExpansionSettings, SwipeSettings};
    use crate::tray::SwipeButton;
    use parking_lot::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    enum Event {
        State(SwipePhase, bool),
        Fetched(SwipeDirection),
        Tapped(usize, SwipeDirection, bool),
        Began,
        Ended,
    }

    struct Recorder {
        events: Mutex<Vec<Event>>,
        can_swipe: bool,
        auto_hide: bool,
        hide_on_tap: bool,
        left: Option<ButtonTray>,
    }

    impl Recorder {
        fn new() -> Arc<Self> {
            Arc::new(Self {
                events: Mutex::new(Vec::new()),
                can_swipe: true,
                auto_hide: false,
                hide_on_tap: true,
                left: Some(tray(SwipeSettings::default(), ExpansionSettings::default())),
            })
        }

        fn events(&self) -> Vec<Event> {
            self.events.lock().clone()
        }

        fn states(&self) -> Vec<Event> {
            self.events()
                .into_iter()
                .filter(|e| matches!(e, Event::State(..)))
                .collect()
        }
    }

    impl SwipeRowDelegate for Recorder {
        fn can_swipe(&self, _: RowId, _: SwipeDirection, _: Option<Point>) -> bool {
            self.can_swipe
        }

        fn swipe_buttons(&self, _: RowId, direction: SwipeDirection) -> Option<ButtonTray> {
            self.events.lock().push(Event::Fetched(direction));
            match direction {
                SwipeDirection::LeftToRight => self.left.clone(),
                SwipeDirection::RightToLeft => None,
            }
        }

        fn did_change_swipe_state(&self, _: RowId, phase: SwipePhase, active: bool) {
            self.events.lock().push(Event::State(phase, active));
        }

        fn tapped_button(&self, _: RowId, index: usize, dir: SwipeDirection, exp: bool) -> bool {
            self.events.lock().push(Event::Tapped(index, dir, exp));
            self.auto_hide
        }

        fn should_hide_swipe_on_tap(&self, _: RowId, _: Point) -> bool {
            self.hide_on_tap
        }

        fn will_begin_swiping(&self, _: RowId) {
            self.events.lock().push(Event::Began);
        }

        fn will_end_swiping(&self, _: RowId) {
            self.events.lock().push(Event::Ended);
        }
    }

    fn tray(settings: SwipeSettings, expansion: ExpansionSettings) -> ButtonTray {
        ButtonTray::new(
            vec![SwipeButton::new(1, 40.0), SwipeButton::new(2, 40.0)],
            settings,
            expansion,
        )
    }

    fn row() -> SwipeRow {
        let mut row = SwipeRow::new(RowId::default(), RowGeometry::new(320.0, 44.0));
        row.set_buttons(
            SwipeDirection::LeftToRight,
            tray(SwipeSettings::default(), ExpansionSettings::default()),
        );
        row.set_buttons(
            SwipeDirection::RightToLeft,
            tray(SwipeSettings::default(), ExpansionSettings::default()),
        );
        row
    }

    fn settle(row: &mut SwipeRow, coordinator: &mut RowCoordinator) {
        while row.tick(Duration::from_millis(16), coordinator) {}
    }

    fn drag(row: &mut SwipeRow, to: f32) {
        assert!(row.begin_drag(None, 0.0));
        row.move_drag(to);
    }

    #[test]
    fn test_release_past_threshold_opens() {
        let mut c = RowCoordinator::new();
        let mut row = row();
        drag(&mut row, 50.0);
        assert_eq!(row.phase(), SwipePhase::DraggingLeftToRight);
        row.end_drag(None, &mut c);
        settle(&mut row, &mut c);
        assert_eq!(row.offset(), 80.0);
        assert_eq!(row.phase(), SwipePhase::DraggingLeftToRight);
        assert!(c.is_open(row.id()));
    }

    #[test]
    fn test_release_below_threshold_closes() {
        let mut c = RowCoordinator::new();
        let mut row = row();
        drag(&mut row, -30.0);
        assert_eq!(row.phase(), SwipePhase::DraggingRightToLeft);
        row.end_drag(None, &mut c);
        settle(&mut row, &mut c);
        assert_eq!(row.offset(), 0.0);
        assert_eq!(row.phase(), SwipePhase::Idle);
        assert!(row.active_direction().is_none());
    }

    #[test]
    fn test_cancel_settles_like_release() {
        let mut c = RowCoordinator::new();
        let mut row = row();
        let ended = Arc::new(Mutex::new(0));
        let e = ended.clone();
        row.swiping_ended.connect(move |_| *e.lock() += 1);

        drag(&mut row, 50.0);
        row.cancel_drag(&mut c);
        assert!(!row.is_gesture_active());
        settle(&mut row, &mut c);
        assert_eq!(row.offset(), 80.0);
        assert!(c.is_open(row.id()));
        assert_eq!(*ended.lock(), 1);

        row.hide_swipe(false, &mut c);
        drag(&mut row, 30.0);
        row.cancel_drag(&mut c);
        settle(&mut row, &mut c);
        assert_eq!(row.offset(), 0.0);
        assert_eq!(row.phase(), SwipePhase::Idle);
        assert!(!c.is_open(row.id()));
        assert_eq!(*ended.lock(), 2);
    }

    #[test]
    fn test_armed_gesture_waits_for_movement() {
        let delegate = Recorder::new();
        let mut row = SwipeRow::new(RowId::default(), RowGeometry::new(320.0, 44.0));
        row.set_delegate(&delegate);

        assert!(row.begin_drag(Some(Point::new(100.0, 10.0)), 0.0));
        assert_eq!(row.phase(), SwipePhase::Idle);
        assert!(delegate.events().is_empty());

        row.move_drag(10.0);
        assert_eq!(row.offset(), 10.0);
        assert_eq!(
            delegate.events(),
            vec![
                Event::Fetched(SwipeDirection::LeftToRight),
                Event::Began,
                Event::State(SwipePhase::DraggingLeftToRight, true),
            ]
        );
    }

    #[test]
    fn test_rejected_when_host_refuses() {
        let delegate = Arc::new(Recorder {
            can_swipe: false,
            ..Arc::into_inner(Recorder::new()).unwrap()
        });
        let mut row = SwipeRow::new(RowId::default(), RowGeometry::new(320.0, 44.0));
        row.set_delegate(&delegate);

        assert!(!row.begin_drag(None, 10.0));
        row.move_drag(30.0);
        assert_eq!(row.offset(), 0.0);
        assert_eq!(row.phase(), SwipePhase::Idle);
        assert!(delegate.states().is_empty());
    }

    #[test]
    fn test_rejected_without_buttons() {
        let mut row = SwipeRow::new(RowId::default(), RowGeometry::new(320.0, 44.0));
        assert!(!row.begin_drag(None, -10.0));
        assert!(!row.is_gesture_active());

        row.set_buttons(SwipeDirection::RightToLeft, ButtonTray::with_buttons(Vec::new()));
        assert!(!row.begin_drag(None, -10.0));
    }

    #[test]
    fn test_lazy_fetch_once_per_direction() {
        let delegate = Recorder::new();
        let mut c = RowCoordinator::new();
        let mut row = SwipeRow::new(RowId::default(), RowGeometry::new(320.0, 44.0));
        row.set_delegate(&delegate);

        for _ in 0..2 {
            drag(&mut row, 10.0);
            row.end_drag(None, &mut c);
            settle(&mut row, &mut c);
        }
        let fetched = delegate
            .events()
            .into_iter()
            .filter(|e| matches!(e, Event::Fetched(_)))
            .count();
        assert_eq!(fetched, 1);

        row.refresh_buttons(true, &mut c);
        drag(&mut row, 10.0);
        let fetched = delegate
            .events()
            .into_iter()
            .filter(|e| matches!(e, Event::Fetched(_)))
            .count();
        assert_eq!(fetched, 2);
    }

    #[test]
    fn test_bounce_disabled_clamps_to_extent() {
        let mut row = row();
        row.set_buttons(
            SwipeDirection::LeftToRight,
            tray(
                SwipeSettings {
                    bounce_enabled: false,
                    ..SwipeSettings::default()
                },
                ExpansionSettings::default(),
            ),
        );
        drag(&mut row, 200.0);
        assert_eq!(row.offset(), 80.0);
    }

    #[test]
    fn test_bounce_resistance_scales_overscroll() {
        let mut row = row();
        row.set_buttons(
            SwipeDirection::LeftToRight,
            tray(
                SwipeSettings {
                    bounce_resistance: 0.5,
                    ..SwipeSettings::default()
                },
                ExpansionSettings::default(),
            ),
        );
        drag(&mut row, 120.0);
        assert_eq!(row.offset(), 100.0);
        // Raw offset is tracked separately, so pulling back is exact.
        row.move_drag(-60.0);
        assert_eq!(row.offset(), 60.0);
    }

    #[test]
    fn test_overscroll_capped_at_row_width() {
        let mut row = row();
        drag(&mut row, 1000.0);
        assert_eq!(row.offset(), 320.0);
    }

    #[test]
    fn test_opposite_swipe_disallowed() {
        let mut row = row();
        row.set_options(RowOptions {
            allow_opposite_swipe: false,
            ..RowOptions::default()
        });
        drag(&mut row, 20.0);
        row.move_drag(-50.0);
        assert_eq!(row.offset(), 0.0);
        assert_eq!(row.phase(), SwipePhase::DraggingLeftToRight);
    }

    #[test]
    fn test_opposite_swipe_allowed() {
        let mut row = row();
        drag(&mut row, 20.0);
        row.move_drag(-50.0);
        assert_eq!(row.offset(), -30.0);
        assert_eq!(row.phase(), SwipePhase::DraggingRightToLeft);
    }

    #[test]
    fn test_release_velocity_overrides_threshold() {
        let mut c = RowCoordinator::new();
        let mut row = row();
        drag(&mut row, 10.0);
        row.end_drag(Some(500.0), &mut c);
        settle(&mut row, &mut c);
        assert_eq!(row.offset(), 80.0);

        assert!(row.begin_drag(None, -5.0));
        row.end_drag(Some(-500.0), &mut c);
        settle(&mut row, &mut c);
        assert_eq!(row.offset(), 0.0);
    }

    #[test]
    fn test_keep_open_disabled_always_closes() {
        let mut c = RowCoordinator::new();
        let mut row = row();
        row.set_buttons(
            SwipeDirection::LeftToRight,
            tray(
                SwipeSettings {
                    keep_open_past_threshold: false,
                    ..SwipeSettings::default()
                },
                ExpansionSettings::default(),
            ),
        );
        drag(&mut row, 70.0);
        row.end_drag(None, &mut c);
        settle(&mut row, &mut c);
        assert_eq!(row.offset(), 0.0);
    }

    #[test]
    fn test_hide_on_idle_is_silent() {
        let delegate = Recorder::new();
        let mut c = RowCoordinator::new();
        let mut row = row();
        row.set_delegate(&delegate);
        row.hide_swipe(true, &mut c);
        assert!(!row.is_animating());
        assert!(delegate.events().is_empty());
    }

    #[test]
    fn test_expansion_sticky_with_fill() {
        let mut row = row();
        row.set_buttons(
            SwipeDirection::LeftToRight,
            tray(
                SwipeSettings::default(),
                ExpansionSettings {
                    fill_on_trigger: true,
                    ..ExpansionSettings::for_button(0)
                },
            ),
        );
        drag(&mut row, 130.0);
        assert_eq!(row.phase(), SwipePhase::ExpandingLeftToRight);
        assert_eq!(row.expanded_button_index(), Some(0));
        row.move_drag(-40.0);
        assert_eq!(row.phase(), SwipePhase::ExpandingLeftToRight);
    }

    #[test]
    fn test_expansion_recedes_without_fill() {
        let mut row = row();
        row.set_buttons(
            SwipeDirection::LeftToRight,
            tray(SwipeSettings::default(), ExpansionSettings::for_button(1)),
        );
        drag(&mut row, 130.0);
        assert_eq!(row.phase(), SwipePhase::ExpandingLeftToRight);
        row.move_drag(-40.0);
        assert_eq!(row.phase(), SwipePhase::DraggingLeftToRight);
        assert_eq!(row.expanded_button_index(), None);
    }

    #[test]
    fn test_trigger_without_fill_closes_and_reports() {
        let delegate = Recorder::new();
        let mut c = RowCoordinator::new();
        let mut row = row();
        row.set_delegate(&delegate);
        row.set_buttons(
            SwipeDirection::LeftToRight,
            tray(SwipeSettings::default(), ExpansionSettings::for_button(0)),
        );
        drag(&mut row, 130.0);
        row.end_drag(None, &mut c);
        assert_eq!(row.phase(), SwipePhase::ExpandingLeftToRight);
        settle(&mut row, &mut c);
        assert_eq!(row.offset(), 0.0);
        assert_eq!(row.phase(), SwipePhase::Idle);
        assert!(delegate
            .events()
            .contains(&Event::Tapped(0, SwipeDirection::LeftToRight, true)));
    }

    #[test]
    fn test_tap_background_hides() {
        let mut c = RowCoordinator::new();
        let mut row = row();
        row.show_swipe(SwipeDirection::LeftToRight, false, &mut c);
        assert_eq!(row.offset(), 80.0);

        assert!(row.tap(Point::new(200.0, 10.0), &mut c));
        settle(&mut row, &mut c);
        assert_eq!(row.phase(), SwipePhase::Idle);
        assert!(!row.tap(Point::new(200.0, 10.0), &mut c));
    }

    #[test]
    fn test_tap_button_reports_and_auto_hides() {
        let delegate = Arc::new(Recorder {
            auto_hide: true,
            ..Arc::into_inner(Recorder::new()).unwrap()
        });
        let mut c = RowCoordinator::new();
        let mut row = row();
        row.set_delegate(&delegate);
        row.show_swipe(SwipeDirection::LeftToRight, false, &mut c);

        assert!(row.tap(Point::new(50.0, 10.0), &mut c));
        assert!(delegate
            .events()
            .contains(&Event::Tapped(1, SwipeDirection::LeftToRight, false)));
        settle(&mut row, &mut c);
        assert_eq!(row.offset(), 0.0);
    }

    #[test]
    fn test_background_tap_respects_options() {
        let mut c = RowCoordinator::new();
        let mut row = row();
        row.set_options(RowOptions {
            hide_on_background_tap: false,
            ..RowOptions::default()
        });
        row.show_swipe(SwipeDirection::LeftToRight, false, &mut c);
        assert!(!row.tap(Point::new(200.0, 10.0), &mut c));
        assert_eq!(row.offset(), 80.0);
    }

    #[test]
    fn test_swipe_from_buttons_disallowed() {
        let mut c = RowCoordinator::new();
        let mut row = row();
        row.set_options(RowOptions {
            allow_swipe_from_buttons: false,
            ..RowOptions::default()
        });
        row.show_swipe(SwipeDirection::LeftToRight, false, &mut c);
        assert!(!row.begin_drag(Some(Point::new(10.0, 10.0)), -5.0));
        assert!(row.begin_drag(Some(Point::new(200.0, 10.0)), -5.0));
        assert_eq!(row.offset(), 75.0);
    }

    #[test]
    fn test_drag_interrupts_animation() {
        let mut c = RowCoordinator::new();
        let mut row = row();
        let results = Arc::new(Mutex::new(Vec::new()));
        let sink = results.clone();
        row.set_swipe_offset(
            80.0,
            Some(AnimationSpec::default()),
            Some(Box::new(move |finished| sink.lock().push(finished))),
            &mut c,
        );
        row.tick(Duration::from_millis(100), &mut c);
        let mid = row.offset();
        assert!(mid > 0.0 && mid < 80.0);

        assert!(row.begin_drag(None, 0.0));
        assert_eq!(*results.lock(), vec![false]);
        assert!(!row.is_animating());
        assert_eq!(row.offset(), mid);
    }

    #[test]
    fn test_instant_offset_has_no_intermediate_frames() {
        let mut c = RowCoordinator::new();
        let mut row = row();
        let frames = Arc::new(Mutex::new(Vec::new()));
        let sink = frames.clone();
        row.offset_changed.connect(move |&o| sink.lock().push(o));
        row.set_swipe_offset(-60.0, Some(AnimationSpec::instant()), None, &mut c);
        assert_eq!(*frames.lock(), vec![-60.0]);
        assert!(!row.is_animating());
    }

    #[test]
    fn test_set_offset_clamped_to_tray() {
        let mut c = RowCoordinator::new();
        let mut row = row();
        row.clear_buttons(SwipeDirection::RightToLeft);
        row.set_swipe_offset(-50.0, None, None, &mut c);
        assert_eq!(row.offset(), 0.0);
        row.set_swipe_offset(5000.0, None, None, &mut c);
        assert_eq!(row.offset(), 320.0);
    }

    #[test]
    fn test_reset_clears_silently() {
        let delegate = Recorder::new();
        let mut c = RowCoordinator::new();
        let mut row = row();
        row.show_swipe(SwipeDirection::RightToLeft, true, &mut c);
        row.set_delegate(&delegate);
        row.reset(&mut c);
        assert_eq!(row.offset(), 0.0);
        assert_eq!(row.phase(), SwipePhase::Idle);
        assert!(!row.is_animating());
        assert!(c.open_rows().is_empty());
        assert!(delegate.states().is_empty());
        assert!(row.tray(SwipeDirection::LeftToRight).is_some());
    }

    #[test]
    fn test_refresh_removes_revealed_side() {
        let mut c = RowCoordinator::new();
        let mut row = row();
        row.show_swipe(SwipeDirection::RightToLeft, false, &mut c);
        row.clear_buttons(SwipeDirection::RightToLeft);
        row.refresh_buttons(false, &mut c);
        assert_eq!(row.offset(), 0.0);
        assert_eq!(row.phase(), SwipePhase::Idle);
    }

    #[test]
    fn test_gesture_hooks_and_signals() {
        let mut c = RowCoordinator::new();
        let mut row = row();
        let began = Arc::new(Mutex::new(0));
        let ended = Arc::new(Mutex::new(0));
        let (b, e) = (began.clone(), ended.clone());
        row.swiping_began.connect(move |_| *b.lock() += 1);
        row.swiping_ended.connect(move |_| *e.lock() += 1);

        drag(&mut row, 30.0);
        row.end_drag(None, &mut c);
        assert_eq!((*began.lock(), *ended.lock()), (1, 1));
    }

    #[test]
    fn test_release_target_pure() {
        let tray = tray(SwipeSettings::default(), ExpansionSettings::default());
        let ltr = SwipeDirection::LeftToRight;
        assert_eq!(release_target(40.0, ltr, None, &tray), 80.0);
        assert_eq!(release_target(39.0, ltr, None, &tray), 0.0);
        assert_eq!(release_target(39.0, ltr, Some(50.0), &tray), 0.0);
        assert_eq!(release_target(60.0, ltr, Some(-150.0), &tray), 0.0);
    }

    #[test]
    fn test_settle_animation_choice() {
        let settings = SwipeSettings {
            stretch_animation: AnimationSpec::new(0.1, crate::animation::Easing::Linear),
            ..SwipeSettings::default()
        };
        let tray = tray(settings, ExpansionSettings::default());
        assert_eq!(settle_animation(100.0, 80.0, &tray).duration, 0.1);
        assert_eq!(settle_animation(40.0, 80.0, &tray), tray.settings().show_animation);
        assert_eq!(settle_animation(40.0, 0.0, &tray), tray.settings().hide_animation);
    }
}
