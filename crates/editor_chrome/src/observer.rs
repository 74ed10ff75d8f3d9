// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Derives the toolbar snapshot from selection changes.
//!
//! Recomputes on every document-state change and every native
//! selection-change event. While a pointer button is held the state is
//! frozen (a drag-selection would otherwise make the toolbar flicker);
//! pointer release always forces one final recomputation.

use tracing::trace;

use crate::{SelectionSnapshot, ToolbarState};

#[derive(Debug, Default)]
pub struct ToolbarObserver {
    state: ToolbarState,
    pointer_down: bool,
}

impl ToolbarObserver {
    pub fn new() -> ToolbarObserver {
        ToolbarObserver::default()
    }

    pub fn state(&self) -> &ToolbarState {
        &self.state
    }

    pub fn pointer_is_down(&self) -> bool {
        self.pointer_down
    }

    /// A pointer button (primary or secondary) went down on the editor
    /// root: hide the toolbar and suppress recomputation until release.
    pub fn pointer_pressed(&mut self) {
        self.pointer_down = true;
        self.state = ToolbarState::hidden();
    }

    /// The pointer button was released: recomputation is forced exactly
    /// once, regardless of the suppression flag.
    pub fn pointer_released(
        &mut self,
        snapshot: &SelectionSnapshot,
    ) -> &ToolbarState {
        self.pointer_down = false;
        self.recompute_now(snapshot)
    }

    /// A document-state change notification.
    pub fn document_changed(
        &mut self,
        snapshot: &SelectionSnapshot,
    ) -> &ToolbarState {
        self.recompute(snapshot)
    }

    /// A native selection-change event.
    pub fn selection_changed(
        &mut self,
        snapshot: &SelectionSnapshot,
    ) -> &ToolbarState {
        self.recompute(snapshot)
    }

    /// Recompute unless suppressed by a held pointer button.
    pub fn recompute(
        &mut self,
        snapshot: &SelectionSnapshot,
    ) -> &ToolbarState {
        if self.pointer_down {
            return &self.state;
        }
        self.recompute_now(snapshot)
    }

    fn recompute_now(
        &mut self,
        snapshot: &SelectionSnapshot,
    ) -> &ToolbarState {
        self.state = derive_state(snapshot);
        trace!(visible = self.state.visible, "toolbar state recomputed");
        &self.state
    }
}

/// Map a selection snapshot to the toolbar state it implies.
///
/// Visibility requires a non-collapsed selection whose anchor lies inside
/// the editable root and whose content is not purely whitespace. Anything
/// else resets to the canonical hidden default.
fn derive_state(snapshot: &SelectionSnapshot) -> ToolbarState {
    if !snapshot.anchor_in_root
        || snapshot.collapsed
        || snapshot.is_whitespace_only()
    {
        return ToolbarState::hidden();
    }

    ToolbarState {
        visible: true,
        formats: snapshot.formats,
        block_kind: snapshot.block_kind(),
        font_color: snapshot.font_color.clone(),
        background_color: snapshot.background_color.clone(),
    }
}
