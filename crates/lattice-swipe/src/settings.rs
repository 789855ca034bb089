//! Swipe, expansion and row settings.
//!
//! Settings are plain values: a row copies the settings of each tray when
//! the tray is installed and never mutates them afterwards. All types
//! deserialize with defaults for missing fields, see [`crate::config`].

use lattice_swipe_core::logging::targets;
use lattice_swipe_core::Color;
use serde::{Deserialize, Serialize};

use crate::animation::AnimationSpec;

/// Default fraction of the tray width past which a release settles open.
pub const DEFAULT_REVEAL_THRESHOLD: f32 = 0.5;

/// Default fraction of the tray width past which the expansion triggers.
pub const DEFAULT_EXPANSION_THRESHOLD: f32 = 1.5;

/// Smallest gap kept between the reveal and expansion thresholds.
pub const MIN_EXPANSION_GAP: f32 = 0.1;

/// Largest accepted reveal threshold. Past this, a release never opens
/// the tray anyway.
pub const MAX_REVEAL_THRESHOLD: f32 = 1.0e6;

/// The side a swipe reveals buttons from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeDirection {
    /// Content moves right, revealing the left tray.
    LeftToRight,
    /// Content moves left, revealing the right tray.
    RightToLeft,
}

impl SwipeDirection {
    /// Direction revealed by a signed offset, `None` at rest.
    #[inline]
    pub fn from_offset(offset: f32) -> Option<Self> {
        if offset > 0.0 {
            Some(Self::LeftToRight)
        } else if offset < 0.0 {
            Some(Self::RightToLeft)
        } else {
            None
        }
    }

    /// Sign of offsets in this direction.
    #[inline]
    pub fn sign(self) -> f32 {
        match self {
            Self::LeftToRight => 1.0,
            Self::RightToLeft => -1.0,
        }
    }

    /// Slot in per-direction arrays (left tray first).
    #[inline]
    pub(crate) fn index(self) -> usize {
        match self {
            Self::LeftToRight => 0,
            Self::RightToLeft => 1,
        }
    }
}

/// Swipe state of a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SwipePhase {
    /// At rest with no gesture or animation in progress.
    #[default]
    Idle,
    /// Revealing (or settled on) the left tray.
    DraggingLeftToRight,
    /// Revealing (or settled on) the right tray.
    DraggingRightToLeft,
    /// Past the left tray's expansion threshold.
    ExpandingLeftToRight,
    /// Past the right tray's expansion threshold.
    ExpandingRightToLeft,
}

impl SwipePhase {
    pub fn dragging(direction: SwipeDirection) -> Self {
        match direction {
            SwipeDirection::LeftToRight => Self::DraggingLeftToRight,
            SwipeDirection::RightToLeft => Self::DraggingRightToLeft,
        }
    }

    pub fn expanding(direction: SwipeDirection) -> Self {
        match direction {
            SwipeDirection::LeftToRight => Self::ExpandingLeftToRight,
            SwipeDirection::RightToLeft => Self::ExpandingRightToLeft,
        }
    }

    /// Direction of the tray this phase reveals.
    pub fn direction(self) -> Option<SwipeDirection> {
        match self {
            Self::Idle => None,
            Self::DraggingLeftToRight | Self::ExpandingLeftToRight => {
                Some(SwipeDirection::LeftToRight)
            }
            Self::DraggingRightToLeft | Self::ExpandingRightToLeft => {
                Some(SwipeDirection::RightToLeft)
            }
        }
    }

    pub fn is_expanding(self) -> bool {
        matches!(self, Self::ExpandingLeftToRight | Self::ExpandingRightToLeft)
    }
}

/// Visual algorithm mapping an offset to per-button layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionStyle {
    /// Buttons spread out from the row edge as the offset grows.
    #[default]
    Border,
    /// Buttons sit at their resting slots; only the reveal clip moves.
    Static,
    /// Buttons follow the content with a staggered parallax.
    Drag,
    /// Each button is revealed from its center outwards.
    ClipCenter,
    /// Buttons unfold from a quarter turn to flat.
    #[serde(rename = "rotate_3d")]
    Rotate3D,
}

impl TransitionStyle {
    pub const ALL: [TransitionStyle; 5] = [
        TransitionStyle::Border,
        TransitionStyle::Static,
        TransitionStyle::Drag,
        TransitionStyle::ClipCenter,
        TransitionStyle::Rotate3D,
    ];
}

/// Where the expanded button's content sits while it fills the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExpansionLayout {
    /// Content hugs the edge adjacent to the row content.
    #[default]
    Border,
    /// Content is centered in the revealed area.
    Center,
    /// Content stays at its resting slot.
    None,
}

/// Per-direction swipe behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SwipeSettings {
    pub transition_style: TransitionStyle,
    /// Fraction of the tray width past which a release keeps the tray open.
    pub reveal_threshold: f32,
    /// Extra distance, in pixels, between the row edge and the tray.
    pub position_offset: f32,
    pub top_margin: f32,
    pub bottom_margin: f32,
    pub button_spacing: f32,
    /// Extend the outermost button into the host's safe-area inset.
    pub expand_last_button_to_safe_area: bool,
    /// Settle open when released past the reveal threshold.
    pub keep_open_past_threshold: bool,
    /// Only the buttons move; the row content stays in place.
    pub buttons_only_mode: bool,
    /// Allow dragging past the fully open offset.
    pub bounce_enabled: bool,
    /// Fraction of the overscroll that is applied, in [0, 1].
    pub bounce_resistance: f32,
    /// Keep each button's own width instead of equalizing to the widest.
    pub allow_different_button_widths: bool,
    pub show_animation: AnimationSpec,
    pub hide_animation: AnimationSpec,
    /// Used when settling from an overscrolled offset back to open.
    pub stretch_animation: AnimationSpec,
}

impl Default for SwipeSettings {
    fn default() -> Self {
        Self {
            transition_style: TransitionStyle::Border,
            reveal_threshold: DEFAULT_REVEAL_THRESHOLD,
            position_offset: 0.0,
            top_margin: 0.0,
            bottom_margin: 0.0,
            button_spacing: 0.0,
            expand_last_button_to_safe_area: false,
            keep_open_past_threshold: true,
            buttons_only_mode: false,
            bounce_enabled: true,
            bounce_resistance: 1.0,
            allow_different_button_widths: false,
            show_animation: AnimationSpec::default(),
            hide_animation: AnimationSpec::default(),
            stretch_animation: AnimationSpec::default(),
        }
    }
}

impl SwipeSettings {
    /// Create settings with a transition style and defaults elsewhere.
    pub fn with_style(transition_style: TransitionStyle) -> Self {
        Self {
            transition_style,
            ..Self::default()
        }
    }

    /// Return a copy with every numeric field brought into its valid range.
    ///
    /// Non-finite values fall back to defaults, lengths are kept
    /// non-negative, `reveal_threshold` is clamped to
    /// [0, `MAX_REVEAL_THRESHOLD`] and `bounce_resistance` to [0, 1].
    pub fn normalized(&self) -> Self {
        let defaults = Self::default();
        let finite_or = |v: f32, fallback: f32| if v.is_finite() { v } else { fallback };
        Self {
            reveal_threshold: finite_or(self.reveal_threshold, defaults.reveal_threshold)
                .clamp(0.0, MAX_REVEAL_THRESHOLD),
            position_offset: finite_or(self.position_offset, 0.0).max(0.0),
            top_margin: finite_or(self.top_margin, 0.0).max(0.0),
            bottom_margin: finite_or(self.bottom_margin, 0.0).max(0.0),
            button_spacing: finite_or(self.button_spacing, 0.0).max(0.0),
            bounce_resistance: finite_or(self.bounce_resistance, 1.0).clamp(0.0, 1.0),
            ..self.clone()
        }
    }
}

/// Per-direction expansion behavior.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpansionSettings {
    /// Index of the expandable button, `-1` disables expansion.
    pub target_button_index: i32,
    /// Leave the button filling the row after it triggers.
    pub fill_on_trigger: bool,
    /// Fraction of the tray width past which the expansion triggers.
    pub expansion_threshold: f32,
    pub expansion_layout: ExpansionLayout,
    /// Background of the expanded area, defaults to the button's color.
    pub expansion_color: Option<Color>,
    pub trigger_animation: AnimationSpec,
}

impl Default for ExpansionSettings {
    fn default() -> Self {
        Self {
            target_button_index: -1,
            fill_on_trigger: false,
            expansion_threshold: DEFAULT_EXPANSION_THRESHOLD,
            expansion_layout: ExpansionLayout::Border,
            expansion_color: None,
            trigger_animation: AnimationSpec::trigger(),
        }
    }
}

impl ExpansionSettings {
    /// Settings expanding the button at `index`. An index beyond `i32`
    /// disables expansion.
    pub fn for_button(index: usize) -> Self {
        Self {
            target_button_index: i32::try_from(index).unwrap_or(-1),
            ..Self::default()
        }
    }

    /// The expandable button, if expansion is enabled.
    pub fn target(&self) -> Option<usize> {
        usize::try_from(self.target_button_index).ok()
    }

    pub fn is_enabled(&self) -> bool {
        self.target().is_some()
    }

    /// Return a copy whose threshold strictly exceeds `reveal_threshold`.
    ///
    /// A threshold at or below the reveal threshold is raised to
    /// `reveal_threshold + MIN_EXPANSION_GAP`, or to the next representable
    /// value when the gap is lost to rounding.
    pub fn normalized(&self, reveal_threshold: f32) -> Self {
        let floor = (reveal_threshold + MIN_EXPANSION_GAP).max(reveal_threshold.next_up());
        let threshold = if !self.expansion_threshold.is_finite() {
            DEFAULT_EXPANSION_THRESHOLD.max(floor)
        } else if self.expansion_threshold <= reveal_threshold {
            tracing::debug!(
                target: targets::CONFIG,
                expansion_threshold = self.expansion_threshold,
                reveal_threshold,
                "expansion threshold raised above reveal threshold"
            );
            floor
        } else {
            self.expansion_threshold
        };
        Self {
            expansion_threshold: threshold,
            ..self.clone()
        }
    }
}

/// Row-wide options that are not tied to a direction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RowOptions {
    /// Allow a drag to cross zero into the opposite tray.
    pub allow_opposite_swipe: bool,
    /// Allow a new drag to start on top of a revealed button.
    pub allow_swipe_from_buttons: bool,
    /// Close an open row when its content is tapped.
    pub hide_on_background_tap: bool,
}

impl Default for RowOptions {
    fn default() -> Self {
        Self {
            allow_opposite_swipe: true,
            allow_swipe_from_buttons: true,
            hide_on_background_tap: true,
        }
    }
}
