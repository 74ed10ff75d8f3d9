// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Test doubles shared by the unit test modules.

use crate::{
    EditorCommand, EditorHandle, NodeKey, Rect, SelectionSnapshot,
};

/// An [`EditorHandle`] that records dispatched commands and answers
/// hit-tests from a fixed list of rectangles.
pub(crate) struct RecordingHandle {
    pub commands: Vec<EditorCommand>,
    pub snapshot: SelectionSnapshot,
    pub blocks: Vec<(Rect, NodeKey)>,
}

impl RecordingHandle {
    pub fn new() -> RecordingHandle {
        RecordingHandle {
            commands: Vec::new(),
            snapshot: SelectionSnapshot::default(),
            blocks: Vec::new(),
        }
    }

    pub fn with_snapshot(snapshot: SelectionSnapshot) -> RecordingHandle {
        RecordingHandle {
            snapshot,
            ..RecordingHandle::new()
        }
    }
}

impl EditorHandle for RecordingHandle {
    fn dispatch(&mut self, command: EditorCommand) {
        self.commands.push(command);
    }

    fn node_at_point(&self, x: f64, y: f64) -> Option<NodeKey> {
        self.blocks
            .iter()
            .find(|(rect, _)| {
                x >= rect.left
                    && x <= rect.right()
                    && y >= rect.top
                    && y <= rect.bottom()
            })
            .map(|(_, key)| key.clone())
    }

    fn selection(&self) -> SelectionSnapshot {
        self.snapshot.clone()
    }
}
