// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! The insertable-block catalog.
//!
//! One catalog is assembled at editor-creation time from the base set plus
//! caller-supplied options, and is shared by the slash-command picker, the
//! toolbar's block dropdown and the drag control's add-block submenu. Keys
//! are unique within a catalog; menu ordering is catalog order, filtered
//! in place.

use std::collections::HashSet;
use std::fmt;

use regex::RegexBuilder;
use strum_macros::{Display, EnumString};

use crate::{BlockKind, ChromeError, EditorCommand, EditorHandle, TextAlign};

/// A block option's insertion routine: receives the live editor handle
/// and the matched query substring, and produces a document mutation.
pub type InsertFn = Box<dyn Fn(&mut dyn EditorHandle, &str)>;

/// Catalog section a block option belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString)]
pub enum BlockCategory {
    #[strum(serialize = "basic")]
    Basic,
    #[strum(serialize = "headings")]
    Headings,
    #[strum(serialize = "lists")]
    Lists,
    #[strum(serialize = "quotes")]
    Quotes,
    #[strum(serialize = "advanced")]
    Advanced,
    #[strum(serialize = "alignment")]
    Alignment,
}

/// Categories offered by the toolbar dropdown and the add-block submenu.
pub const INSERTABLE_CATEGORIES: [BlockCategory; 4] = [
    BlockCategory::Basic,
    BlockCategory::Headings,
    BlockCategory::Lists,
    BlockCategory::Quotes,
];

/// A catalog entry. Immutable once constructed.
pub struct BlockOption {
    key: String,
    title: String,
    icon: String,
    category: BlockCategory,
    keywords: Vec<String>,
    insert: InsertFn,
}

impl BlockOption {
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        icon: impl Into<String>,
        category: BlockCategory,
        keywords: &[&str],
        insert: impl Fn(&mut dyn EditorHandle, &str) + 'static,
    ) -> BlockOption {
        BlockOption {
            key: key.into(),
            title: title.into(),
            icon: icon.into(),
            category,
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            insert: Box::new(insert),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn icon(&self) -> &str {
        &self.icon
    }

    pub fn category(&self) -> BlockCategory {
        self.category
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Run the insertion routine with the matched query substring.
    pub fn insert(&self, handle: &mut dyn EditorHandle, query: &str) {
        (self.insert)(handle, query);
    }
}

impl fmt::Debug for BlockOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BlockOption")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("icon", &self.icon)
            .field("category", &self.category)
            .field("keywords", &self.keywords)
            .finish_non_exhaustive()
    }
}

/// The assembled catalog.
#[derive(Debug)]
pub struct BlockCatalog {
    options: Vec<BlockOption>,
}

impl BlockCatalog {
    /// Build a catalog from explicit options. Fails on duplicate keys.
    pub fn new(options: Vec<BlockOption>) -> Result<BlockCatalog, ChromeError> {
        let mut seen = HashSet::new();
        for option in &options {
            if !seen.insert(option.key.clone()) {
                return Err(ChromeError::DuplicateBlockKey(
                    option.key.clone(),
                ));
            }
        }
        Ok(BlockCatalog { options })
    }

    /// Build the base set plus caller-supplied extensions, in that order.
    pub fn with_extensions(
        extra: Vec<BlockOption>,
    ) -> Result<BlockCatalog, ChromeError> {
        let mut options = base_options();
        options.extend(extra);
        BlockCatalog::new(options)
    }

    pub fn options(&self) -> &[BlockOption] {
        &self.options
    }

    pub fn get(&self, key: &str) -> Option<&BlockOption> {
        self.options.iter().find(|option| option.key == key)
    }

    /// Filter the catalog against a typeahead query.
    ///
    /// The empty query returns the full catalog. Otherwise an option
    /// matches when its title or any keyword contains the query,
    /// case-insensitively. The query is escaped before compiling, so
    /// regex metacharacters match literally.
    pub fn filter(&self, query: &str) -> Vec<&BlockOption> {
        if query.is_empty() {
            return self.options.iter().collect();
        }

        // Escaped patterns always compile; an empty result is still the
        // safe answer if that ever stops holding.
        let Ok(matcher) = RegexBuilder::new(&regex::escape(query))
            .case_insensitive(true)
            .build()
        else {
            return Vec::new();
        };

        self.options
            .iter()
            .filter(|option| {
                matcher.is_match(&option.title)
                    || option
                        .keywords
                        .iter()
                        .any(|keyword| matcher.is_match(keyword))
            })
            .collect()
    }

    /// The options offered where only block insertion makes sense (the
    /// toolbar dropdown and the add-block submenu).
    pub fn insertable(&self) -> Vec<&BlockOption> {
        self.options
            .iter()
            .filter(|option| INSERTABLE_CATEGORIES.contains(&option.category))
            .collect()
    }
}

/// The base catalog every editor starts from.
pub fn base_options() -> Vec<BlockOption> {
    let mut options = vec![BlockOption::new(
        "paragraph",
        "Paragraph",
        "text",
        BlockCategory::Basic,
        &["normal", "paragraph", "p", "text"],
        |handle, _| {
            handle.dispatch(EditorCommand::SetBlockKind(BlockKind::Paragraph));
        },
    )];

    for level in 1..=3u8 {
        // Levels 1-3 ship by default; deeper headings arrive as
        // caller-supplied options.
        let kind = match level {
            1 => BlockKind::Heading1,
            2 => BlockKind::Heading2,
            _ => BlockKind::Heading3,
        };
        options.push(BlockOption::new(
            format!("heading-{level}"),
            format!("Heading {level}"),
            format!("heading-{level}"),
            BlockCategory::Headings,
            &["heading", "header", &format!("h{level}")],
            move |handle, _| {
                handle.dispatch(EditorCommand::SetBlockKind(kind));
            },
        ));
    }

    options.push(BlockOption::new(
        "bulleted-list",
        "Bulleted List",
        "list-bulleted",
        BlockCategory::Lists,
        &["bulleted list", "unordered list", "ul"],
        |handle, _| {
            handle.dispatch(EditorCommand::SetBlockKind(
                BlockKind::UnorderedList,
            ));
        },
    ));
    options.push(BlockOption::new(
        "numbered-list",
        "Numbered List",
        "list-numbered",
        BlockCategory::Lists,
        &["numbered list", "ordered list", "ol"],
        |handle, _| {
            handle
                .dispatch(EditorCommand::SetBlockKind(BlockKind::OrderedList));
        },
    ));
    options.push(BlockOption::new(
        "check-list",
        "Check List",
        "list-check",
        BlockCategory::Lists,
        &["check list", "todo list"],
        |handle, _| {
            handle.dispatch(EditorCommand::SetBlockKind(BlockKind::CheckList));
        },
    ));
    options.push(BlockOption::new(
        "quote",
        "Quote",
        "quote",
        BlockCategory::Quotes,
        &["block quote"],
        |handle, _| {
            handle.dispatch(EditorCommand::SetBlockKind(BlockKind::Quote));
        },
    ));
    options.push(BlockOption::new(
        "divider",
        "Divider",
        "horizontal-rule",
        BlockCategory::Advanced,
        &["horizontal rule", "divider", "hr"],
        |handle, _| {
            handle.dispatch(EditorCommand::InsertDivider);
        },
    ));
    options.push(BlockOption::new(
        "image",
        "Image",
        "image",
        BlockCategory::Advanced,
        &["image", "photo", "picture", "file"],
        |handle, _| {
            handle.dispatch(EditorCommand::OpenMediaDialog);
        },
    ));

    for (key, title, align) in [
        ("align-left", "Align Left", TextAlign::Left),
        ("align-center", "Align Center", TextAlign::Center),
        ("align-right", "Align Right", TextAlign::Right),
        ("align-justify", "Align Justify", TextAlign::Justify),
    ] {
        options.push(BlockOption::new(
            key,
            title,
            key,
            BlockCategory::Alignment,
            &["align", "justify"],
            move |handle, _| {
                handle.dispatch(EditorCommand::AlignBlock(align));
            },
        ));
    }

    options
}
