// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Screen-coordinate math for floating chrome.
//!
//! Pure functions: the platform layer measures the rectangles involved and
//! applies the returned position. All values are logical pixels.

use crate::TextAlign;

/// Vertical gap between the target rectangle and the floating element.
pub const VERTICAL_GAP: f64 = 10.0;

/// Horizontal inset of the floating element from the target edge.
pub const HORIZONTAL_OFFSET: f64 = 5.0;

/// A screen-space rectangle.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(top: f64, left: f64, width: f64, height: f64) -> Rect {
        Rect {
            top,
            left,
            width,
            height,
        }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Where to place a floating element, relative to its anchor element.
///
/// Has no identity beyond the current frame; recomputed on every resize,
/// scroll and selection event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FloatingPosition {
    pub top: f64,
    pub left: f64,
    /// `false` renders the element fully transparent (it is moved
    /// off-screen rather than destroyed, to avoid layout thrash).
    pub visible: bool,
}

impl FloatingPosition {
    /// The hidden position used whenever there is no valid target.
    pub const OFFSCREEN: FloatingPosition = FloatingPosition {
        top: -10000.0,
        left: -10000.0,
        visible: false,
    };
}

/// Compute the position of a floating element above a target rectangle.
///
/// The element is placed `vertical_gap` above the target, left-aligned
/// with a `horizontal_offset` inset. When the selection's start container
/// is right-aligned (or RTL `end`-aligned) the element anchors to the
/// target's right edge instead. If the element would poke above the
/// visible top of the scroll container it flips below the target, with
/// extra clearance for link-style popovers so the flipped element clears
/// the selected text. Horizontally the element is clamped inside the
/// scroll container. The result is relative to `anchor`.
///
/// A `None` target yields [`FloatingPosition::OFFSCREEN`].
pub fn position_floating_element(
    target: Option<Rect>,
    floating: Rect,
    anchor: Rect,
    scroller: Rect,
    is_link: bool,
    alignment: TextAlign,
) -> FloatingPosition {
    let Some(target) = target else {
        return FloatingPosition::OFFSCREEN;
    };

    let mut top = target.top - floating.height - VERTICAL_GAP;
    let mut left = target.left - HORIZONTAL_OFFSET;

    if alignment.anchors_right() {
        left = target.right() - floating.width + HORIZONTAL_OFFSET;
    }

    if top < scroller.top {
        top += floating.height
            + target.height
            + VERTICAL_GAP * if is_link { 9.0 } else { 2.0 };
    }

    if left + floating.width > scroller.right() {
        left = scroller.right() - floating.width - HORIZONTAL_OFFSET;
    }

    if left < scroller.left {
        left = scroller.left + HORIZONTAL_OFFSET;
    }

    FloatingPosition {
        top: top - anchor.top,
        left: left - anchor.left,
        visible: true,
    }
}
