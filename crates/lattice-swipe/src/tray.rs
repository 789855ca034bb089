//! Button trays.
//!
//! A tray is the ordered set of buttons revealed on one side of a row,
//! together with the settings that govern how it is revealed. Buttons are
//! referenced through opaque [`ButtonHandle`]s; the host owns the actual
//! views and only tells the tray how wide each one wants to be.
//!
//! Index 0 is always the button nearest the row's outer edge, for both
//! trays: the leftmost button of the left tray, the rightmost button of the
//! right tray.

use lattice_swipe_core::Color;

use crate::settings::{ExpansionSettings, SwipeSettings};

/// Opaque reference to a host-owned button view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ButtonHandle(pub u64);

/// A button as the swipe engine sees it.
#[derive(Debug, Clone, PartialEq)]
pub struct SwipeButton {
    pub handle: ButtonHandle,
    /// Preferred width in pixels.
    pub width: f32,
    /// Background color, used for the expansion fill when no override is set.
    pub background: Option<Color>,
}

impl SwipeButton {
    pub fn new(handle: u64, width: f32) -> Self {
        Self {
            handle: ButtonHandle(handle),
            width,
            background: None,
        }
    }

    pub fn with_background(mut self, color: Color) -> Self {
        self.background = Some(color);
        self
    }
}

/// Horizontal slot of a button, measured from the row's outer edge.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    /// Distance from the outer edge to the button's outer side.
    pub start: f32,
    pub width: f32,
}

impl Slot {
    #[inline]
    pub fn end(&self) -> f32 {
        self.start + self.width
    }
}

/// The buttons and settings for one swipe direction.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonTray {
    buttons: Vec<SwipeButton>,
    settings: SwipeSettings,
    expansion: ExpansionSettings,
    slots: Vec<Slot>,
    width: f32,
}

impl ButtonTray {
    /// Build a tray, normalizing its settings.
    ///
    /// Negative or non-finite button widths count as zero. Unless
    /// `allow_different_button_widths` is set, every button takes the width
    /// of the widest one.
    pub fn new(
        buttons: Vec<SwipeButton>,
        settings: SwipeSettings,
        expansion: ExpansionSettings,
    ) -> Self {
        let settings = settings.normalized();
        let expansion = expansion.normalized(settings.reveal_threshold);

        let sanitize = |w: f32| if w.is_finite() { w.max(0.0) } else { 0.0 };
        let widest = buttons.iter().map(|b| sanitize(b.width)).fold(0.0, f32::max);

        let mut slots = Vec::with_capacity(buttons.len());
        let mut cursor = settings.position_offset;
        for (i, button) in buttons.iter().enumerate() {
            if i > 0 {
                cursor += settings.button_spacing;
            }
            let width = if settings.allow_different_button_widths {
                sanitize(button.width)
            } else {
                widest
            };
            slots.push(Slot {
                start: cursor,
                width,
            });
            cursor += width;
        }
        let width = (cursor - settings.position_offset).max(0.0);

        Self {
            buttons,
            settings,
            expansion,
            slots,
            width,
        }
    }

    /// A tray with default settings.
    pub fn with_buttons(buttons: Vec<SwipeButton>) -> Self {
        Self::new(buttons, SwipeSettings::default(), ExpansionSettings::default())
    }

    pub fn buttons(&self) -> &[SwipeButton] {
        &self.buttons
    }

    pub fn settings(&self) -> &SwipeSettings {
        &self.settings
    }

    pub fn expansion(&self) -> &ExpansionSettings {
        &self.expansion
    }

    pub fn len(&self) -> usize {
        self.buttons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }

    /// Total button width including spacing, excluding the position offset.
    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Whether the tray can be revealed at all.
    #[inline]
    pub fn is_swipeable(&self) -> bool {
        !self.is_empty() && self.width > 0.0
    }

    /// Magnitude of the offset at which the tray is fully open.
    #[inline]
    pub fn open_extent(&self) -> f32 {
        self.width + self.settings.position_offset
    }

    /// Resting slots of every button, outermost first.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// The expandable button, when expansion is enabled and in range.
    pub fn expansion_target(&self) -> Option<usize> {
        self.expansion.target().filter(|&i| i < self.buttons.len())
    }

    /// Offset magnitude at which the expansion triggers.
    pub fn expansion_offset(&self) -> Option<f32> {
        self.expansion_target()
            .map(|_| self.width * self.expansion.expansion_threshold)
    }

    /// Replace the settings, recomputing slots.
    pub fn set_settings(&mut self, settings: SwipeSettings, expansion: ExpansionSettings) {
        *self = Self::new(std::mem::take(&mut self.buttons), settings, expansion);
    }
}
