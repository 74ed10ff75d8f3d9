// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Selection and pointer-resize state for a media node.
//!
//! One machine per rendered media node. States:
//!
//! ```text
//! Unselected → Selected → Resizing → Settling → Selected
//!      ↑                                            │
//!      └──────── escape / click elsewhere ──────────┘
//! ```
//!
//! `Settling` exists because pointer-up is often followed by a trailing
//! click on the same element; consuming clicks until the host's settle
//! timer fires keeps that click from immediately reopening a resize.
//!
//! Resize sessions are exclusive process-wide: the pointer listeners
//! backing them are installed at drag-start and torn down at drag-end,
//! so a second session cannot begin while one is active.

use once_cell::sync::Lazy;
use std::sync::Mutex;

use tracing::debug;

use crate::media::Dimension;
use crate::{EditorCommand, EditorHandle, NodeKey};

/// Minimum width and height of a resized media node, logical pixels.
pub const MIN_DIMENSION: f64 = 100.0;

/// The handle grabbed to start a resize. Corner handles preserve the
/// aspect ratio; edge handles move one axis only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResizeHandleKind {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl ResizeHandleKind {
    pub fn is_corner(&self) -> bool {
        matches!(
            self,
            ResizeHandleKind::NorthEast
                | ResizeHandleKind::NorthWest
                | ResizeHandleKind::SouthEast
                | ResizeHandleKind::SouthWest
        )
    }

    fn moves_east(&self) -> bool {
        matches!(
            self,
            ResizeHandleKind::East
                | ResizeHandleKind::NorthEast
                | ResizeHandleKind::SouthEast
        )
    }

    fn moves_west(&self) -> bool {
        matches!(
            self,
            ResizeHandleKind::West
                | ResizeHandleKind::NorthWest
                | ResizeHandleKind::SouthWest
        )
    }

    fn moves_north(&self) -> bool {
        matches!(
            self,
            ResizeHandleKind::North
                | ResizeHandleKind::NorthEast
                | ResizeHandleKind::NorthWest
        )
    }

    fn moves_south(&self) -> bool {
        matches!(
            self,
            ResizeHandleKind::South
                | ResizeHandleKind::SouthEast
                | ResizeHandleKind::SouthWest
        )
    }
}

/// Transient pointer-drag state, alive between pointer-down on a handle
/// and pointer-up.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragResizeSession {
    pub start_x: f64,
    pub start_y: f64,
    pub start_width: f64,
    pub start_height: f64,
    pub ratio: f64,
    pub handle: ResizeHandleKind,
    last_width: f64,
    last_height: f64,
}

impl DragResizeSession {
    fn new(
        handle: ResizeHandleKind,
        pointer: (f64, f64),
        size: (f64, f64),
    ) -> DragResizeSession {
        DragResizeSession {
            start_x: pointer.0,
            start_y: pointer.1,
            start_width: size.0,
            start_height: size.1,
            ratio: size.0 / size.1,
            handle,
            last_width: size.0,
            last_height: size.1,
        }
    }

    /// New dimensions for a pointer position, clamped to the minimum and
    /// to `max_width`. Corner handles scale both axes by the larger of
    /// the two deltas so the node grows and shrinks uniformly.
    fn resize_to(
        &mut self,
        pointer: (f64, f64),
        max_width: f64,
    ) -> (f64, f64) {
        let diff_x = pointer.0 - self.start_x;
        let diff_y = pointer.1 - self.start_y;

        let mut width = self.start_width;
        let mut height = self.start_height;

        if self.handle.moves_east() {
            width += diff_x;
        }
        if self.handle.moves_west() {
            width -= diff_x;
        }
        if self.handle.moves_south() {
            height += diff_y;
        }
        if self.handle.moves_north() {
            height -= diff_y;
        }

        if self.handle.is_corner() {
            let width_ratio = width / self.start_width;
            let height_ratio = height / self.start_height;
            let scale = width_ratio.max(height_ratio);
            width = self.start_width * scale;
            height = self.start_height * scale;
        }

        width = width.clamp(MIN_DIMENSION, max_width);
        height = height.max(MIN_DIMENSION);

        self.last_width = width;
        self.last_height = height;
        (width, height)
    }

    fn last_dimensions(&self) -> (f64, f64) {
        (self.last_width, self.last_height)
    }
}

// One resize at a time: the session owns module-level pointer listeners.
static ACTIVE_SESSION: Lazy<Mutex<Option<NodeKey>>> =
    Lazy::new(|| Mutex::new(None));

fn acquire_session(key: &NodeKey) -> bool {
    let mut active = ACTIVE_SESSION
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    if active.is_some() {
        return false;
    }
    *active = Some(key.clone());
    true
}

fn release_session(key: &NodeKey) {
    let mut active = ACTIVE_SESSION
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner);
    if active.as_ref() == Some(key) {
        *active = None;
    }
}

/// Drop any active resize session (test isolation).
pub fn clear_resize_session() {
    *ACTIVE_SESSION
        .lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner) = None;
}

/// Selection/resize lifecycle of one media node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaSelectionState {
    Unselected,
    Selected,
    Resizing,
    /// Pointer-up happened; waiting out the trailing click.
    Settling,
}

/// What a click on the media element did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MediaClick {
    /// The node became the sole selection; the host clears all others.
    SelectedExclusively,
    /// Shift-click added the node to the selection.
    Added,
    /// Shift-click removed the node from the selection.
    Removed,
    /// Swallowed by an active or just-finished resize.
    Consumed,
}

pub struct MediaChrome {
    key: NodeKey,
    max_width: f64,
    state: MediaSelectionState,
    session: Option<DragResizeSession>,
}

impl MediaChrome {
    pub fn new(key: NodeKey, max_width: f64) -> MediaChrome {
        MediaChrome {
            key,
            max_width,
            state: MediaSelectionState::Unselected,
            session: None,
        }
    }

    pub fn key(&self) -> &NodeKey {
        &self.key
    }

    pub fn state(&self) -> MediaSelectionState {
        self.state
    }

    pub fn is_selected(&self) -> bool {
        !matches!(self.state, MediaSelectionState::Unselected)
    }

    /// A click landing on the media element.
    pub fn click(&mut self, shift: bool) -> MediaClick {
        match self.state {
            MediaSelectionState::Resizing
            | MediaSelectionState::Settling => MediaClick::Consumed,
            MediaSelectionState::Unselected => {
                self.state = MediaSelectionState::Selected;
                if shift {
                    MediaClick::Added
                } else {
                    MediaClick::SelectedExclusively
                }
            }
            MediaSelectionState::Selected => {
                if shift {
                    self.state = MediaSelectionState::Unselected;
                    MediaClick::Removed
                } else {
                    MediaClick::SelectedExclusively
                }
            }
        }
    }

    /// A click landing anywhere else deselects, unless a resize is in
    /// flight.
    pub fn click_elsewhere(&mut self) {
        if matches!(
            self.state,
            MediaSelectionState::Resizing | MediaSelectionState::Settling
        ) {
            return;
        }
        self.state = MediaSelectionState::Unselected;
    }

    /// Escape while this node is the sole selection: deselect and return
    /// keyboard focus to the editable root. Escape with no selection is
    /// a no-op. Returns whether the event was handled.
    pub fn escape(
        &mut self,
        solely_selected: bool,
        handle: &mut dyn EditorHandle,
    ) -> bool {
        if self.state != MediaSelectionState::Selected || !solely_selected {
            return false;
        }
        self.state = MediaSelectionState::Unselected;
        handle.dispatch(EditorCommand::FocusRoot);
        true
    }

    /// Right-click on the element. Raised as a distinct context-menu
    /// signal only while this node is a selected single-node selection.
    pub fn right_click(&mut self, solely_selected: bool) -> bool {
        self.state == MediaSelectionState::Selected && solely_selected
    }

    /// Whether a browser-level drag starting on the media element must be
    /// suppressed. Always true: the node participates in the host's own
    /// block-drag protocol instead.
    pub fn suppress_native_drag_start(&self) -> bool {
        true
    }

    /// Pointer-down on a resize handle. Refused while unselected and
    /// while any other node's session is active.
    pub fn begin_resize(
        &mut self,
        handle: ResizeHandleKind,
        pointer: (f64, f64),
        size: (f64, f64),
    ) -> bool {
        if self.state != MediaSelectionState::Selected {
            return false;
        }
        if !acquire_session(&self.key) {
            debug!(key = %self.key, "resize refused, session active");
            return false;
        }
        self.session =
            Some(DragResizeSession::new(handle, pointer, size));
        self.state = MediaSelectionState::Resizing;
        true
    }

    /// Pointer-move during a resize: the preview dimensions to render.
    pub fn resize_to(&mut self, pointer: (f64, f64)) -> Option<(f64, f64)> {
        if self.state != MediaSelectionState::Resizing {
            return None;
        }
        let max_width = self.max_width;
        self.session
            .as_mut()
            .map(|session| session.resize_to(pointer, max_width))
    }

    /// Pointer-up: commit the final measured dimensions to the node's
    /// persistent attributes and settle. The session is discarded.
    pub fn end_resize(
        &mut self,
        handle: &mut dyn EditorHandle,
    ) -> Option<(f64, f64)> {
        if self.state != MediaSelectionState::Resizing {
            return None;
        }
        let session = self.session.take()?;
        let (width, height) = session.last_dimensions();
        release_session(&self.key);
        self.state = MediaSelectionState::Settling;

        handle.dispatch(EditorCommand::SetMediaSize {
            key: self.key.clone(),
            width: Dimension::Fixed(width),
            height: Dimension::Fixed(height),
        });
        Some((width, height))
    }

    /// The host's settle timer fired; trailing clicks are live again.
    pub fn settle(&mut self) {
        if self.state == MediaSelectionState::Settling {
            self.state = MediaSelectionState::Selected;
        }
    }
}

impl Drop for MediaChrome {
    fn drop(&mut self) {
        // A machine dropped mid-resize must not leak the session guard.
        if self.state == MediaSelectionState::Resizing {
            release_session(&self.key);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::MutexGuard;

    use super::*;
    use crate::test_support::RecordingHandle;

    // The session guard is process-wide; tests that acquire it must not
    // overlap.
    static SESSION_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn exclusive_session() -> MutexGuard<'static, ()> {
        let guard = SESSION_TEST_LOCK
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        clear_resize_session();
        guard
    }

    fn selected(key: &str) -> MediaChrome {
        let mut chrome = MediaChrome::new(NodeKey::from(key), 500.0);
        chrome.click(false);
        chrome
    }

    // ===================================================================
    // Selection transitions
    // ===================================================================

    #[test]
    fn plain_click_selects_exclusively() {
        let mut chrome = MediaChrome::new(NodeKey::from("m"), 500.0);
        assert_eq!(chrome.click(false), MediaClick::SelectedExclusively);
        assert_eq!(chrome.state(), MediaSelectionState::Selected);
    }

    #[test]
    fn shift_click_toggles_without_clearing() {
        let mut chrome = MediaChrome::new(NodeKey::from("m"), 500.0);
        assert_eq!(chrome.click(true), MediaClick::Added);
        assert_eq!(chrome.click(true), MediaClick::Removed);
        assert_eq!(chrome.state(), MediaSelectionState::Unselected);
    }

    #[test]
    fn click_elsewhere_deselects() {
        let mut chrome = selected("m");
        chrome.click_elsewhere();
        assert_eq!(chrome.state(), MediaSelectionState::Unselected);
    }

    #[test]
    fn escape_on_sole_selection_deselects_and_focuses_root() {
        let mut chrome = selected("m");
        let mut handle = RecordingHandle::new();
        assert!(chrome.escape(true, &mut handle));
        assert_eq!(chrome.state(), MediaSelectionState::Unselected);
        assert_eq!(handle.commands, vec![EditorCommand::FocusRoot]);
    }

    #[test]
    fn escape_with_no_selection_is_a_no_op() {
        let mut chrome = MediaChrome::new(NodeKey::from("m"), 500.0);
        let mut handle = RecordingHandle::new();
        assert!(!chrome.escape(true, &mut handle));
        assert!(handle.commands.is_empty());
    }

    #[test]
    fn escape_in_multi_selection_is_a_no_op() {
        let mut chrome = selected("m");
        let mut handle = RecordingHandle::new();
        assert!(!chrome.escape(false, &mut handle));
        assert_eq!(chrome.state(), MediaSelectionState::Selected);
    }

    #[test]
    fn right_click_signals_only_on_sole_selection() {
        let mut chrome = selected("m");
        assert!(chrome.right_click(true));
        assert!(!chrome.right_click(false));
        chrome.click_elsewhere();
        assert!(!chrome.right_click(true));
    }

    // ===================================================================
    // Resize math
    // ===================================================================

    #[test]
    fn corner_resize_preserves_aspect_ratio() {
        let _lock = exclusive_session();
        let mut chrome = selected("m");
        assert!(chrome.begin_resize(
            ResizeHandleKind::SouthEast,
            (0.0, 0.0),
            (400.0, 200.0),
        ));
        let (width, height) = chrome.resize_to((60.0, 10.0)).unwrap();
        let ratio = width / height;
        assert!(
            (ratio - 2.0).abs() < 1e-9,
            "ratio drifted: {width}x{height}"
        );
        // The larger of the two deltas wins: width grew by 60/400 = 15%.
        assert!((width - 460.0).abs() < 1e-9);
        assert!((height - 230.0).abs() < 1e-9);
    }

    #[test]
    fn corner_resize_shrinks_uniformly() {
        let _lock = exclusive_session();
        let mut chrome = selected("m");
        chrome.begin_resize(
            ResizeHandleKind::SouthEast,
            (0.0, 0.0),
            (400.0, 200.0),
        );
        let (width, height) = chrome.resize_to((-40.0, -60.0)).unwrap();
        // -40/400 = -10% beats -60/200 = -30%.
        assert!((width - 360.0).abs() < 1e-9);
        assert!((height - 180.0).abs() < 1e-9);
    }

    #[test]
    fn east_edge_resize_changes_width_only() {
        let _lock = exclusive_session();
        let mut chrome = selected("m");
        chrome.begin_resize(
            ResizeHandleKind::East,
            (0.0, 0.0),
            (300.0, 200.0),
        );
        let (width, height) = chrome.resize_to((50.0, 999.0)).unwrap();
        assert!((width - 350.0).abs() < 1e-9);
        assert!((height - 200.0).abs() < 1e-9);
    }

    #[test]
    fn north_edge_resize_changes_height_only() {
        let _lock = exclusive_session();
        let mut chrome = selected("m");
        chrome.begin_resize(
            ResizeHandleKind::North,
            (0.0, 0.0),
            (300.0, 200.0),
        );
        let (width, height) = chrome.resize_to((999.0, -50.0)).unwrap();
        assert!((width - 300.0).abs() < 1e-9);
        assert!((height - 250.0).abs() < 1e-9);
    }

    #[test]
    fn west_handle_grows_when_dragged_left() {
        let _lock = exclusive_session();
        let mut chrome = selected("m");
        chrome.begin_resize(
            ResizeHandleKind::West,
            (100.0, 0.0),
            (300.0, 200.0),
        );
        let (width, _) = chrome.resize_to((40.0, 0.0)).unwrap();
        assert!((width - 360.0).abs() < 1e-9);
    }

    #[test]
    fn dimensions_clamp_to_minimum_and_max_width() {
        let _lock = exclusive_session();
        let mut chrome = selected("m");
        chrome.begin_resize(
            ResizeHandleKind::SouthEast,
            (0.0, 0.0),
            (400.0, 200.0),
        );
        let (width, height) = chrome.resize_to((-1000.0, -1000.0)).unwrap();
        assert!(width >= MIN_DIMENSION);
        assert!(height >= MIN_DIMENSION);

        let (width, _) = chrome.resize_to((5000.0, 0.0)).unwrap();
        assert!(width <= 500.0);
    }

    // ===================================================================
    // Resize lifecycle
    // ===================================================================

    #[test]
    fn end_resize_commits_final_dimensions_and_settles() {
        let _lock = exclusive_session();
        let mut chrome = selected("m");
        chrome.begin_resize(
            ResizeHandleKind::SouthEast,
            (0.0, 0.0),
            (400.0, 200.0),
        );
        chrome.resize_to((40.0, 0.0));

        let mut handle = RecordingHandle::new();
        let (width, height) = chrome.end_resize(&mut handle).unwrap();
        assert!((width - 440.0).abs() < 1e-9);
        assert!((height - 220.0).abs() < 1e-9);
        assert_eq!(chrome.state(), MediaSelectionState::Settling);

        let [EditorCommand::SetMediaSize { key, width, height }] =
            &handle.commands[..]
        else {
            panic!("expected SetMediaSize, got {:?}", handle.commands);
        };
        assert_eq!(key, &NodeKey::from("m"));
        assert!((width.as_fixed().unwrap() - 440.0).abs() < 1e-9);
        assert!((height.as_fixed().unwrap() - 220.0).abs() < 1e-9);
    }

    #[test]
    fn trailing_click_is_consumed_until_settled() {
        let _lock = exclusive_session();
        let mut chrome = selected("m");
        chrome.begin_resize(
            ResizeHandleKind::SouthEast,
            (0.0, 0.0),
            (400.0, 200.0),
        );
        let mut handle = RecordingHandle::new();
        chrome.end_resize(&mut handle);

        assert_eq!(chrome.click(false), MediaClick::Consumed);
        chrome.settle();
        assert_eq!(chrome.state(), MediaSelectionState::Selected);
        assert_eq!(chrome.click(false), MediaClick::SelectedExclusively);
    }

    #[test]
    fn begin_resize_requires_selection() {
        let _lock = exclusive_session();
        let mut chrome = MediaChrome::new(NodeKey::from("m"), 500.0);
        assert!(!chrome.begin_resize(
            ResizeHandleKind::SouthEast,
            (0.0, 0.0),
            (400.0, 200.0),
        ));
    }

    #[test]
    fn only_one_resize_session_at_a_time() {
        let _lock = exclusive_session();
        let mut first = MediaChrome::new(NodeKey::from("m1"), 500.0);
        let mut second = MediaChrome::new(NodeKey::from("m2"), 500.0);
        first.click(false);
        second.click(false);

        assert!(first.begin_resize(
            ResizeHandleKind::SouthEast,
            (0.0, 0.0),
            (400.0, 200.0),
        ));
        assert!(!second.begin_resize(
            ResizeHandleKind::SouthEast,
            (0.0, 0.0),
            (400.0, 200.0),
        ));

        let mut handle = RecordingHandle::new();
        first.end_resize(&mut handle);
        assert!(second.begin_resize(
            ResizeHandleKind::SouthEast,
            (0.0, 0.0),
            (400.0, 200.0),
        ));
    }

    #[test]
    fn end_without_begin_is_a_no_op() {
        let mut chrome = selected("m");
        let mut handle = RecordingHandle::new();
        assert_eq!(chrome.end_resize(&mut handle), None);
        assert!(handle.commands.is_empty());
    }

    #[test]
    fn end_resize_without_movement_commits_start_size() {
        let _lock = exclusive_session();
        let mut chrome = selected("m");
        chrome.begin_resize(
            ResizeHandleKind::NorthWest,
            (10.0, 10.0),
            (320.0, 240.0),
        );
        let mut handle = RecordingHandle::new();
        assert_eq!(
            chrome.end_resize(&mut handle),
            Some((320.0, 240.0))
        );
    }
}
