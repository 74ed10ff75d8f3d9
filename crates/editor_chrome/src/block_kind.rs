// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Block-level type tags.
//!
//! A closed set of tags dispatched by pattern matching. The host editor's
//! own node classes never cross the seam; only these tags do.

use strum_macros::{Display, EnumString};

/// The block type governing the current selection, as shown in the
/// toolbar's block dropdown.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString,
)]
pub enum BlockKind {
    #[default]
    #[strum(serialize = "paragraph")]
    Paragraph,
    #[strum(serialize = "heading-1")]
    Heading1,
    #[strum(serialize = "heading-2")]
    Heading2,
    #[strum(serialize = "heading-3")]
    Heading3,
    #[strum(serialize = "heading-4")]
    Heading4,
    #[strum(serialize = "heading-5")]
    Heading5,
    #[strum(serialize = "heading-6")]
    Heading6,
    #[strum(serialize = "quote")]
    Quote,
    #[strum(serialize = "ordered-list")]
    OrderedList,
    #[strum(serialize = "unordered-list")]
    UnorderedList,
    #[strum(serialize = "check-list")]
    CheckList,
}

impl BlockKind {
    /// The heading kind for a tag level, `heading-1` through `heading-6`.
    pub fn heading(level: u8) -> Option<BlockKind> {
        match level {
            1 => Some(BlockKind::Heading1),
            2 => Some(BlockKind::Heading2),
            3 => Some(BlockKind::Heading3),
            4 => Some(BlockKind::Heading4),
            5 => Some(BlockKind::Heading5),
            6 => Some(BlockKind::Heading6),
            _ => None,
        }
    }

    /// The heading level, if this is a heading kind.
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            BlockKind::Heading1 => Some(1),
            BlockKind::Heading2 => Some(2),
            BlockKind::Heading3 => Some(3),
            BlockKind::Heading4 => Some(4),
            BlockKind::Heading5 => Some(5),
            BlockKind::Heading6 => Some(6),
            _ => None,
        }
    }
}

/// The flavour of a list container.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString)]
pub enum ListKind {
    #[strum(serialize = "ordered")]
    Ordered,
    #[strum(serialize = "unordered")]
    Unordered,
    #[strum(serialize = "check")]
    Check,
}

impl From<ListKind> for BlockKind {
    fn from(kind: ListKind) -> Self {
        match kind {
            ListKind::Ordered => BlockKind::OrderedList,
            ListKind::Unordered => BlockKind::UnorderedList,
            ListKind::Check => BlockKind::CheckList,
        }
    }
}

/// Computed text alignment of a selection's start container.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, EnumString,
)]
pub enum TextAlign {
    #[default]
    #[strum(serialize = "left")]
    Left,
    #[strum(serialize = "center")]
    Center,
    #[strum(serialize = "right")]
    Right,
    #[strum(serialize = "justify")]
    Justify,
    #[strum(serialize = "start")]
    Start,
    #[strum(serialize = "end")]
    End,
}

impl TextAlign {
    /// Whether the horizontal anchor for floating UI is the selection's
    /// right edge rather than its left edge.
    pub fn anchors_right(&self) -> bool {
        matches!(self, TextAlign::Right | TextAlign::End)
    }
}
