// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Selection snapshots and block-kind derivation.
//!
//! The host constructs a [`SelectionSnapshot`] from its own state at the
//! moment of a change notification. The snapshot is a plain value; nothing
//! in it stays live once the host's state moves on.

use crate::{BlockKind, FormatSet, ListKind, Location, Rect, TextAlign};

/// The kind of a container node on the path from the selection anchor up
/// to its top-level element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ContainerKind {
    Paragraph,
    Heading(u8),
    Quote,
    List(ListKind),
    ListItem,
    Other,
}

/// What the host knows about the current selection, flattened.
#[derive(Clone, Debug, Default)]
pub struct SelectionSnapshot {
    /// Whether the selection is a caret (start == end).
    pub collapsed: bool,
    /// Whether the native selection anchor lies inside the registered
    /// editable root.
    pub anchor_in_root: bool,
    /// The selected text content.
    pub text: String,
    /// Inline formats active across the selection.
    pub formats: FormatSet,
    /// Inline font color, if uniform across the selection.
    pub font_color: Option<String>,
    /// Inline background color, if uniform across the selection.
    pub background_color: Option<String>,
    /// Computed text alignment of the selection's start container.
    pub alignment: TextAlign,
    /// Bounding rectangle of the selection, if it intersects the editor.
    pub rect: Option<Rect>,
    /// The anchor offset in UTF-16 code units.
    pub anchor_offset: Location,
    /// Container kinds from the anchor's parent up to (and including) the
    /// top-level element.
    pub ancestors: Vec<ContainerKind>,
}

impl SelectionSnapshot {
    /// A collapsed caret inside the root, with no content selected.
    pub fn caret(offset: usize) -> SelectionSnapshot {
        SelectionSnapshot {
            collapsed: true,
            anchor_in_root: true,
            anchor_offset: Location::from(offset),
            ..SelectionSnapshot::default()
        }
    }

    /// Derive the block kind governing this selection.
    ///
    /// Classification happens on the top-level container. A list
    /// container resolves its flavour through the nearest ancestor list
    /// definition, so a nested check-list inside an unordered list
    /// reports `check-list`. Anything unrecognised is a paragraph.
    pub fn block_kind(&self) -> BlockKind {
        match self.ancestors.last() {
            Some(ContainerKind::List(top_kind)) => {
                let nearest = self.ancestors.iter().find_map(|kind| {
                    match kind {
                        ContainerKind::List(list_kind) => Some(*list_kind),
                        _ => None,
                    }
                });
                BlockKind::from(nearest.unwrap_or(*top_kind))
            }
            Some(ContainerKind::Heading(level)) => {
                BlockKind::heading(*level).unwrap_or(BlockKind::Paragraph)
            }
            Some(ContainerKind::Quote) => BlockKind::Quote,
            _ => BlockKind::Paragraph,
        }
    }

    /// Whether the selected text is empty once whitespace is ignored.
    /// A selection of newlines or spaces never shows the toolbar.
    pub fn is_whitespace_only(&self) -> bool {
        self.text.chars().all(char::is_whitespace)
    }
}
