//! Expansion: one button growing to fill the revealed area.
//!
//! Past the expansion threshold the target button stretches across the
//! whole revealed region while its siblings fade out. Where the button's
//! own content sits inside that region depends on the
//! [`ExpansionLayout`].

use lattice_swipe_core::{Color, Rect};

use crate::settings::{ExpansionLayout, SwipeDirection};
use crate::transition::{RowGeometry, TrayLayout};
use crate::tray::ButtonTray;

/// Geometry of the expanded button, in row coordinates.
#[derive(Debug, Clone, PartialEq)]
pub struct ExpandedButton {
    pub index: usize,
    /// The button stretched across the revealed region.
    pub frame: Rect,
    /// Where the button's own content (title, icon) is drawn.
    pub content_frame: Rect,
    /// Area painted with the expansion color.
    pub background: Rect,
    pub color: Option<Color>,
}

/// `|offset|` as a fraction of the tray width, zero for an empty tray.
#[inline]
pub fn expansion_ratio(offset: f32, tray_width: f32) -> f32 {
    if tray_width <= 0.0 {
        return 0.0;
    }
    offset.abs() / tray_width
}

/// Whether `offset` is far enough to expand the tray's target button.
///
/// Always false when the tray has no valid expansion target.
pub fn is_triggered(offset: f32, tray: &ButtonTray) -> bool {
    tray.expansion_target().is_some()
        && expansion_ratio(offset, tray.width()) >= tray.expansion().expansion_threshold
}

/// Offset at which a triggered expansion settles.
///
/// Fill-on-trigger rows settle covering the row, others close.
pub fn settle_offset(tray: &ButtonTray, direction: SwipeDirection, row_width: f32) -> f32 {
    if tray.expansion().fill_on_trigger {
        row_width.max(tray.open_extent()) * direction.sign()
    } else {
        0.0
    }
}

/// Compute the expanded button's geometry for `offset`, or `None` when the
/// tray has no valid expansion target.
pub fn expanded_button(
    offset: f32,
    direction: SwipeDirection,
    tray: &ButtonTray,
    geometry: &RowGeometry,
) -> Option<ExpandedButton> {
    let index = tray.expansion_target()?;
    let slot = tray.slots()[index];
    let settings = tray.settings();

    let revealed = (offset * direction.sign()).max(0.0);
    let revealed = if geometry.width() > 0.0 {
        revealed.min(geometry.width())
    } else {
        revealed
    };
    let y = settings.top_margin;
    let height = (geometry.height() - settings.top_margin - settings.bottom_margin).max(0.0);

    let content_x = match tray.expansion().expansion_layout {
        ExpansionLayout::Border => revealed - slot.width,
        ExpansionLayout::Center => (revealed - slot.width) / 2.0,
        ExpansionLayout::None => slot.start,
    };

    let frame = Rect::new(0.0, y, revealed, height);
    let content_frame = Rect::new(content_x, y, slot.width, height);
    let background = Rect::new(0.0, 0.0, revealed, geometry.height());
    let color = tray
        .expansion()
        .expansion_color
        .or(tray.buttons()[index].background);

    Some(ExpandedButton {
        index,
        frame: geometry.to_row(frame, direction),
        content_frame: geometry.to_row(content_frame, direction),
        background: geometry.to_row(background, direction),
        color,
    })
}

/// Overlay the expansion onto a rendered tray layout.
///
/// The target button takes the expanded frame and every other button is
/// faded out. Does nothing when the tray has no valid target.
pub fn apply(
    layout: &mut TrayLayout,
    offset: f32,
    tray: &ButtonTray,
    geometry: &RowGeometry,
) {
    let Some(expanded) = expanded_button(offset, layout.direction, tray, geometry) else {
        return;
    };
    for button in &mut layout.buttons {
        if button.index == expanded.index {
            button.frame = expanded.frame;
            button.clip = Some(expanded.frame).filter(|f| !f.is_empty());
            button.opacity = 1.0;
            button.rotation_y = 0.0;
            button.perspective = 0.0;
            button.expanded = true;
        } else {
            button.opacity = 0.0;
            button.expanded = false;
        }
    }
    layout.expansion = Some(expanded);
}
