// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! The closed set of document mutations the chrome can request.

use strum_macros::{Display, EnumString};

use crate::media::{Dimension, MediaPayload};
use crate::{BlockKind, Location, NodeKey, TextAlign, TextFormatType};

/// An inline style property patched onto the selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString)]
pub enum StyleProperty {
    #[strum(serialize = "color")]
    FontColor,
    #[strum(serialize = "background-color")]
    BackgroundColor,
}

/// A single document mutation, applied by the host editor.
///
/// Commands are values: the chrome never mutates the document directly,
/// so read-after-write consistency stays with the host's state
/// versioning.
#[derive(Clone, Debug, PartialEq)]
pub enum EditorCommand {
    /// Toggle an inline text format on the current selection.
    FormatText(TextFormatType),
    /// Convert the block containing the selection to another kind.
    SetBlockKind(BlockKind),
    /// Align the block containing the selection.
    AlignBlock(TextAlign),
    /// Patch an inline style on the selection; `None` clears it.
    PatchStyle {
        property: StyleProperty,
        value: Option<String>,
    },
    /// Remove a text span, e.g. a consumed typeahead trigger.
    RemoveTextSpan { start: Location, end: Location },
    /// Collapse the selection to a caret at `offset`.
    CollapseSelection { offset: Location },
    /// Insert an empty paragraph immediately after `key` and place the
    /// caret at its start.
    InsertParagraphAfter { key: NodeKey },
    /// Remove the block `key` and reinsert it before `before`
    /// (`None` appends at the end of the document).
    MoveBlock {
        key: NodeKey,
        before: Option<NodeKey>,
    },
    /// Insert a horizontal divider at the selection.
    InsertDivider,
    /// Insert a media node at the selection.
    InsertMedia(MediaPayload),
    /// Open the insert-media dialog.
    OpenMediaDialog,
    /// Commit new display dimensions onto a media node.
    SetMediaSize {
        key: NodeKey,
        width: Dimension,
        height: Dimension,
    },
    /// Return keyboard focus to the editable root.
    FocusRoot,
}
