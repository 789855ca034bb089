//! Offset-to-layout mapping for the five transition styles.
//!
//! [`render`] is a pure function: given a signed offset, the tray being
//! revealed and the row geometry it returns where every button should be
//! drawn, how much of it is visible and how it is rotated. Nothing here
//! touches pixels.
//!
//! Positions are first computed in *edge-local* coordinates, where `0` is
//! the row's outer edge on the tray's side and values grow towards the row
//! center, then mirrored into row coordinates for the right tray.
//!
//! Every style converges on the same resting layout once the offset reaches
//! the tray width: buttons flat, fully opaque, unclipped, at their slots.

use std::f32::consts::FRAC_PI_2;

use lattice_swipe_core::{Point, Rect, Size};

use crate::settings::{SwipeDirection, TransitionStyle};
use crate::tray::{ButtonHandle, ButtonTray};

/// Perspective term applied while a button is rotated.
pub const ROTATE_3D_PERSPECTIVE: f32 = -1.0 / 400.0;

/// Size of a row and the host's safe-area insets on each side.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RowGeometry {
    pub size: Size,
    pub safe_area_left: f32,
    pub safe_area_right: f32,
}

impl RowGeometry {
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
            safe_area_left: 0.0,
            safe_area_right: 0.0,
        }
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.width
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.height
    }

    /// The safe-area inset on the tray's outer edge.
    pub fn safe_area(&self, direction: SwipeDirection) -> f32 {
        match direction {
            SwipeDirection::LeftToRight => self.safe_area_left,
            SwipeDirection::RightToLeft => self.safe_area_right,
        }
    }

    /// Convert an edge-local rectangle into row coordinates.
    pub(crate) fn to_row(&self, rect: Rect, direction: SwipeDirection) -> Rect {
        match direction {
            SwipeDirection::LeftToRight => rect,
            SwipeDirection::RightToLeft => rect.mirrored_x(self.width()),
        }
    }
}

/// Where and how one button is drawn.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonLayout {
    /// Position of the button in the tray, 0 = outermost.
    pub index: usize,
    pub handle: ButtonHandle,
    /// The button's frame in row coordinates.
    pub frame: Rect,
    /// The visible part of the frame, `None` when fully hidden.
    pub clip: Option<Rect>,
    pub opacity: f32,
    /// Rotation around the vertical axis, in radians.
    pub rotation_y: f32,
    /// Perspective term (`m34`), zero when the button is flat.
    pub perspective: f32,
    /// Whether this is the expanded button.
    pub expanded: bool,
}

impl ButtonLayout {
    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0 && self.clip.is_some()
    }

    /// Flat, opaque and completely visible.
    pub fn is_untransformed(&self) -> bool {
        self.rotation_y == 0.0
            && self.perspective == 0.0
            && self.opacity == 1.0
            && self.clip == Some(self.frame)
    }
}

/// Everything a host needs to draw one revealed tray.
#[derive(Debug, Clone, PartialEq)]
pub struct TrayLayout {
    pub direction: SwipeDirection,
    pub style: TransitionStyle,
    /// Reveal progress, `|offset| / tray width` clamped to [0, 1].
    pub progress: f32,
    /// Region of the row uncovered by the moving content.
    pub reveal: Rect,
    /// Horizontal translation of the row content.
    pub content_offset: f32,
    /// Buttons outermost first; inner buttons are drawn on top.
    pub buttons: Vec<ButtonLayout>,
    /// Present while the expansion threshold is crossed.
    pub expansion: Option<crate::expansion::ExpandedButton>,
}

impl TrayLayout {
    /// The button under a row-coordinate point, topmost first.
    pub fn button_at(&self, point: Point) -> Option<usize> {
        self.buttons
            .iter()
            .rev()
            .filter(|b| b.is_visible())
            .find(|b| b.clip.is_some_and(|clip| clip.contains(point)))
            .map(|b| b.index)
    }
}

/// Reveal progress of an offset magnitude against a tray width.
#[inline]
pub fn progress(magnitude: f32, tray_width: f32) -> f32 {
    if tray_width <= 0.0 {
        return 0.0;
    }
    (magnitude / tray_width).clamp(0.0, 1.0)
}

/// The part of `rect` inside `region`; `rect` itself when fully inside.
fn clip(rect: Rect, region: &Rect) -> Option<Rect> {
    let inside = rect.left() >= region.left()
        && rect.right() <= region.right()
        && rect.top() >= region.top()
        && rect.bottom() <= region.bottom();
    if inside && !rect.is_empty() {
        Some(rect)
    } else {
        rect.intersection(region)
    }
}

/// Compute the layout of `tray` revealed by `offset` in `direction`.
///
/// Offsets whose sign does not match `direction` reveal nothing.
pub fn render(
    offset: f32,
    direction: SwipeDirection,
    tray: &ButtonTray,
    geometry: &RowGeometry,
) -> TrayLayout {
    let magnitude = (offset * direction.sign()).max(0.0);
    let settings = tray.settings();
    let style = settings.transition_style;
    let t = progress(magnitude, tray.width());
    let hidden = tray.width() - magnitude.min(tray.width());

    let y = settings.top_margin;
    let height = (geometry.height() - settings.top_margin - settings.bottom_margin).max(0.0);
    let inset = if settings.expand_last_button_to_safe_area {
        geometry.safe_area(direction)
    } else {
        0.0
    };

    let visible_width = if geometry.width() > 0.0 {
        magnitude.min(geometry.width())
    } else {
        magnitude
    };
    let reveal = Rect::new(0.0, 0.0, visible_width, geometry.height());
    let clip_region = Rect::new(-inset, 0.0, visible_width + inset, geometry.height());

    let count = tray.len();
    let mut buttons = Vec::with_capacity(count);
    for (index, (button, slot)) in tray.buttons().iter().zip(tray.slots()).enumerate() {
        let stagger = (index + 1) as f32 / count as f32;

        let (x, rotation_y) = match style {
            TransitionStyle::Border => (slot.start * t, 0.0),
            TransitionStyle::Static => (slot.start, 0.0),
            TransitionStyle::Drag => (slot.start - hidden * stagger, 0.0),
            TransitionStyle::ClipCenter if t < 1.0 => {
                let center = (slot.start + slot.width / 2.0) * t;
                (center - slot.width / 2.0, 0.0)
            }
            TransitionStyle::ClipCenter => (slot.start, 0.0),
            TransitionStyle::Rotate3D => {
                let angle = FRAC_PI_2 * (1.0 - t) * direction.sign();
                (slot.start - hidden, if t < 1.0 { angle } else { 0.0 })
            }
        };

        let mut frame = Rect::new(x, y, slot.width, height);
        if index == 0 && inset > 0.0 {
            frame = Rect::new(x - inset, y, slot.width + inset, height);
        }

        let visible = if style == TransitionStyle::ClipCenter && t < 1.0 {
            let visible_w = frame.width() * t;
            let centered = Rect::new(
                frame.center().x - visible_w / 2.0,
                frame.top(),
                visible_w,
                frame.height(),
            );
            clip(centered, &clip_region)
        } else {
            clip(frame, &clip_region)
        };

        buttons.push(ButtonLayout {
            index,
            handle: button.handle,
            frame: geometry.to_row(frame, direction),
            clip: visible.map(|r| geometry.to_row(r, direction)),
            opacity: 1.0,
            rotation_y,
            perspective: if rotation_y != 0.0 {
                ROTATE_3D_PERSPECTIVE
            } else {
                0.0
            },
            expanded: false,
        });
    }

    let content_offset = if settings.buttons_only_mode {
        0.0
    } else {
        magnitude * direction.sign()
    };

    TrayLayout {
        direction,
        style,
        progress: t,
        reveal: geometry.to_row(reveal, direction),
        content_offset,
        buttons,
        expansion: None,
    }
}
