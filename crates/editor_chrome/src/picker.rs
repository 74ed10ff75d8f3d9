// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! The slash-command block picker.
//!
//! Watches the text run before the caret for a trigger character and
//! maintains the typeahead menu state while the trigger is live. The menu
//! shows the shared [`BlockCatalog`] filtered by everything typed since
//! the trigger; choosing an option removes the typed span and runs the
//! option's insertion routine.

use std::sync::Arc;

use regex::Regex;
use tracing::debug;

use crate::{BlockCatalog, BlockOption, EditorCommand, EditorHandle, Location};

/// Longest query the trigger keeps matching, in characters.
const QUERY_MAX_LENGTH: usize = 75;

/// A live trigger match in the text before the caret.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriggerMatch {
    /// Offset of the trigger character, in UTF-16 code units from the
    /// start of the scanned text.
    pub lead_offset: usize,
    /// The trigger character plus the query — the span removed when an
    /// option is chosen.
    pub replaceable_string: String,
    /// Everything typed since the trigger.
    pub query: String,
}

/// Scan the text run ending at the caret for a trigger.
///
/// The trigger must sit at the start of the run or after whitespace (or
/// an opening parenthesis); the query may itself contain whitespace and
/// has no minimum length.
fn check_trigger_match(matcher: &Regex, text: &str) -> Option<TriggerMatch> {
    let captures = matcher.captures(text)?;
    let whole = captures.get(0)?;
    let lead = captures.get(1)?;
    let replaceable = captures.get(2)?;
    let query = captures.get(3)?;

    let lead_offset =
        text[..whole.start() + lead.len()].encode_utf16().count();

    Some(TriggerMatch {
        lead_offset,
        replaceable_string: replaceable.as_str().to_string(),
        query: query.as_str().to_string(),
    })
}

/// Typeahead menu state.
///
/// The highlighted index is externally settable (pointer hover moves it)
/// and is stored unchecked; callers clamp it against the filtered list
/// before use.
pub struct BlockPicker {
    catalog: Arc<BlockCatalog>,
    trigger: char,
    matcher: Regex,
    active: Option<TriggerMatch>,
    caret: Location,
    highlighted_index: usize,
}

impl BlockPicker {
    /// A picker with the default `/` trigger.
    pub fn new(catalog: Arc<BlockCatalog>) -> BlockPicker {
        BlockPicker::with_trigger(catalog, '/')
    }

    pub fn with_trigger(
        catalog: Arc<BlockCatalog>,
        trigger: char,
    ) -> BlockPicker {
        let class = regex::escape(&trigger.to_string());
        let pattern = format!(
            r"(^|\s|\()([{class}]((?:[^{class}]){{0,{QUERY_MAX_LENGTH}}}))$"
        );
        // Built from an escaped single character and a constant; always
        // compiles.
        let matcher =
            Regex::new(&pattern).expect("trigger pattern compiles");
        BlockPicker {
            catalog,
            trigger,
            matcher,
            active: None,
            caret: Location::from(0),
            highlighted_index: 0,
        }
    }

    pub fn trigger(&self) -> char {
        self.trigger
    }

    /// Feed the text run ending at the caret, after any edit or caret
    /// move. Opens, updates or auto-closes the menu and returns whether
    /// it is open afterwards.
    pub fn update_from_text(
        &mut self,
        text_up_to_caret: &str,
        caret: Location,
    ) -> bool {
        let was_open = self.active.is_some();
        let found = check_trigger_match(&self.matcher, text_up_to_caret);

        self.active = match found {
            Some(m) => {
                // No match in the catalog closes the menu entirely.
                if self.catalog.filter(&m.query).is_empty() {
                    None
                } else {
                    Some(m)
                }
            }
            None => None,
        };
        self.caret = caret;

        if self.active.is_some() != was_open {
            debug!(open = self.active.is_some(), "block picker toggled");
        }
        if self.active.is_none() {
            self.highlighted_index = 0;
        }
        self.active.is_some()
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn query(&self) -> Option<&str> {
        self.active.as_ref().map(|m| m.query.as_str())
    }

    pub fn current_match(&self) -> Option<&TriggerMatch> {
        self.active.as_ref()
    }

    /// The catalog filtered by the live query, in catalog order.
    pub fn filtered(&self) -> Vec<&BlockOption> {
        match &self.active {
            Some(m) => self.catalog.filter(&m.query),
            None => Vec::new(),
        }
    }

    pub fn highlighted_index(&self) -> usize {
        self.highlighted_index
    }

    /// Set the highlighted row (pointer hover). Stored unchecked.
    pub fn set_highlighted_index(&mut self, index: usize) {
        self.highlighted_index = index;
    }

    /// Choose an option from the filtered list: removes the triggering
    /// text span, runs the insertion routine with the matched query, and
    /// closes the menu. Returns `false` when the menu is closed or the
    /// index is out of bounds.
    pub fn choose(
        &mut self,
        index: usize,
        handle: &mut dyn EditorHandle,
    ) -> bool {
        let Some(active) = self.active.clone() else {
            return false;
        };

        let filtered = self.catalog.filter(&active.query);
        let Some(option) = filtered.get(index) else {
            return false;
        };

        let span = active.replaceable_string.encode_utf16().count();
        let end = self.caret;
        let start = Location::from(end.as_usize().saturating_sub(span));
        handle.dispatch(EditorCommand::RemoveTextSpan { start, end });
        option.insert(handle, &active.query);

        debug!(key = option.key(), "block picker inserted");
        self.active = None;
        self.highlighted_index = 0;
        true
    }

    /// Close the menu without inserting.
    pub fn close(&mut self) {
        self.active = None;
        self.highlighted_index = 0;
    }
}
