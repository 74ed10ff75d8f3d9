// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! The flattened formatting snapshot behind the floating toolbar.

use strum_macros::{Display, EnumString};

use crate::BlockKind;

/// The inline text formats the toolbar can toggle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString)]
pub enum TextFormatType {
    #[strum(serialize = "bold")]
    Bold,
    #[strum(serialize = "italic")]
    Italic,
    #[strum(serialize = "underline")]
    Underline,
    #[strum(serialize = "strikethrough")]
    StrikeThrough,
}

impl TextFormatType {
    /// All formats, in toolbar order.
    pub const ALL: [TextFormatType; 4] = [
        TextFormatType::Bold,
        TextFormatType::Italic,
        TextFormatType::Underline,
        TextFormatType::StrikeThrough,
    ];
}

/// The set of inline formats active on a selection. Nested formatting in
/// the host document is flattened into this struct.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FormatSet {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strike_through: bool,
}

impl FormatSet {
    pub fn contains(&self, format: TextFormatType) -> bool {
        match format {
            TextFormatType::Bold => self.bold,
            TextFormatType::Italic => self.italic,
            TextFormatType::Underline => self.underline,
            TextFormatType::StrikeThrough => self.strike_through,
        }
    }

    pub fn set(&mut self, format: TextFormatType, active: bool) {
        match format {
            TextFormatType::Bold => self.bold = active,
            TextFormatType::Italic => self.italic = active,
            TextFormatType::Underline => self.underline = active,
            TextFormatType::StrikeThrough => self.strike_through = active,
        }
    }
}

/// Derived, ephemeral toolbar snapshot. Recomputed on every selection or
/// content change; never persisted.
///
/// The default value is the single canonical "hidden" state: invisible,
/// all format flags off, block type `paragraph`, no colors.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToolbarState {
    pub visible: bool,
    pub formats: FormatSet,
    pub block_kind: BlockKind,
    pub font_color: Option<String>,
    pub background_color: Option<String>,
}

impl ToolbarState {
    /// The canonical hidden state.
    pub fn hidden() -> ToolbarState {
        ToolbarState::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_state_is_default() {
        let state = ToolbarState::hidden();
        assert!(!state.visible);
        assert_eq!(state.formats, FormatSet::default());
        assert_eq!(state.block_kind, BlockKind::Paragraph);
        assert_eq!(state.font_color, None);
        assert_eq!(state.background_color, None);
    }

    #[test]
    fn format_set_contains_and_set() {
        let mut formats = FormatSet::default();
        for format in TextFormatType::ALL {
            assert!(!formats.contains(format));
            formats.set(format, true);
            assert!(formats.contains(format));
        }
    }

    #[test]
    fn format_tags_serialize_lowercase() {
        assert_eq!(TextFormatType::Bold.to_string(), "bold");
        assert_eq!(TextFormatType::StrikeThrough.to_string(), "strikethrough");
    }
}
