// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! The per-block grip/plus control.
//!
//! Tracks which block-level element the pointer hovers and anchors two
//! affordances to it: an add button that opens the block submenu on a
//! fresh paragraph, and a drag handle that reorders the block through the
//! host's block-drag protocol. Drag payloads travel as JSON because they
//! cross the host's drag-and-drop data transfer, where unrelated drag
//! sources can produce arbitrary bytes.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::media::MediaPayload;
use crate::{BlockCatalog, BlockOption, EditorCommand, EditorHandle, NodeKey};

/// What a chrome-originated drag carries across the data transfer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum DragPayload {
    /// A block reorder started from the drag handle.
    Block { key: NodeKey },
    /// A media node being moved; the node attributes ride along so the
    /// drop site can reinsert it.
    Media { key: NodeKey, node: MediaPayload },
}

impl DragPayload {
    /// Serialise for the drag data transfer.
    pub fn to_transfer(&self) -> String {
        // A payload of plain strings and numbers always serialises.
        serde_json::to_string(self).unwrap_or_default()
    }

    /// Parse a payload from the drag data transfer. Anything malformed —
    /// including payloads from unrelated drag sources — is `None`.
    pub fn from_transfer(raw: &str) -> Option<DragPayload> {
        match serde_json::from_str(raw) {
            Ok(payload) => Some(payload),
            Err(error) => {
                debug!(%error, "ignoring malformed drag payload");
                None
            }
        }
    }
}

pub struct BlockControl {
    catalog: Arc<BlockCatalog>,
    hovered: Option<NodeKey>,
    menu_open: bool,
}

impl BlockControl {
    pub fn new(catalog: Arc<BlockCatalog>) -> BlockControl {
        BlockControl {
            catalog,
            hovered: None,
            menu_open: false,
        }
    }

    /// The block the control is currently anchored to.
    pub fn hovered(&self) -> Option<&NodeKey> {
        self.hovered.as_ref()
    }

    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Track the pointer. A change of hovered block hides any open
    /// submenu.
    pub fn pointer_moved(
        &mut self,
        x: f64,
        y: f64,
        handle: &dyn EditorHandle,
    ) {
        let hovered = handle.node_at_point(x, y);
        if hovered != self.hovered {
            self.hovered = hovered;
            self.menu_open = false;
        }
    }

    /// The add affordance: insert an empty paragraph after the hovered
    /// block (the host places the caret at its start) and open the
    /// block-type submenu. No hovered block, no effect.
    pub fn add_block(&mut self, handle: &mut dyn EditorHandle) -> bool {
        let Some(key) = self.hovered.clone() else {
            return false;
        };
        handle.dispatch(EditorCommand::InsertParagraphAfter { key });
        self.menu_open = true;
        true
    }

    /// The submenu's options: the catalog filtered to insertable
    /// categories.
    pub fn menu_options(&self) -> Vec<&BlockOption> {
        self.catalog.insertable()
    }

    /// Choose from the open submenu. Runs the option's insertion routine
    /// against the freshly inserted paragraph and closes the menu.
    pub fn choose(
        &mut self,
        index: usize,
        handle: &mut dyn EditorHandle,
    ) -> bool {
        if !self.menu_open {
            return false;
        }
        let options = self.catalog.insertable();
        let Some(option) = options.get(index) else {
            return false;
        };
        option.insert(handle, "");
        self.menu_open = false;
        true
    }

    /// A document-level click. Clicks whose target lies inside the
    /// control's own subtree are "on the control" and keep the menu
    /// open; anything else dismisses it.
    pub fn document_clicked(&mut self, target_on_control: bool) {
        if !target_on_control {
            self.menu_open = false;
        }
    }

    /// Begin dragging the hovered block. Returns the payload to put on
    /// the data transfer, or `None` when nothing is hovered.
    pub fn start_drag(&self) -> Option<DragPayload> {
        self.hovered.clone().map(|key| DragPayload::Block { key })
    }

    /// A drop with the given raw payload landed before `before` (`None`
    /// is the end of the document). Malformed or missing payloads are a
    /// silent no-op — drags can originate anywhere.
    pub fn drop(
        &mut self,
        raw_payload: Option<&str>,
        before: Option<NodeKey>,
        handle: &mut dyn EditorHandle,
    ) -> bool {
        let Some(payload) = raw_payload.and_then(DragPayload::from_transfer)
        else {
            return false;
        };
        let key = match payload {
            DragPayload::Block { key } => key,
            DragPayload::Media { key, .. } => key,
        };
        handle.dispatch(EditorCommand::MoveBlock { key, before });
        true
    }
}
