// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Coordination model for block-editor chrome.
//!
//! This crate powers the UI state around a host editing engine: the
//! floating formatting toolbar, the slash-command block picker, the
//! per-block drag/add control and the embedded-media selection/resize
//! machinery. It contains no rendering and owns no document — the host
//! feeds events and [`SelectionSnapshot`]s in, and applies the
//! [`EditorCommand`]s that come back out.
//!
//! Everything runs single-threaded and event-driven. Asynchronous work
//! (media loads, uploads) is a suspend point whose continuation re-enters
//! through an explicit `complete`/`finish` call on the same event queue.

mod block_control;
mod block_kind;
mod catalog;
mod command;
mod editor;
mod error;
mod geometry;
mod handle;
pub mod media;
mod observer;
mod picker;
mod selection;
#[cfg(test)]
mod test_support;
mod toolbar;
mod toolbar_state;

pub use block_control::{BlockControl, DragPayload};
pub use block_kind::{BlockKind, ListKind, TextAlign};
pub use catalog::{
    base_options, BlockCatalog, BlockCategory, BlockOption, InsertFn,
    INSERTABLE_CATEGORIES,
};
pub use command::{EditorCommand, StyleProperty};
pub use editor::{
    media_extension, ChangeCallback, Editor, EditorOptions, EditorView,
    Extension, InitialContentFn, MediaErrorCallback, NodeKind,
    BASE_NODE_KINDS,
};
pub use error::ChromeError;
pub use geometry::{
    position_floating_element, FloatingPosition, Rect, HORIZONTAL_OFFSET,
    VERTICAL_GAP,
};
pub use handle::{EditorHandle, Location, NodeKey};
pub use media::{
    Dimension, MediaChrome, MediaNode, MediaPayload, MediaSelectionState,
};
pub use observer::ToolbarObserver;
pub use picker::{BlockPicker, TriggerMatch};
pub use selection::{ContainerKind, SelectionSnapshot};
pub use toolbar::{
    ColorSwatch, FloatingToolbar, ViewEvent, ViewLayout, DEFAULT_SWATCHES,
};
pub use toolbar_state::{FormatSet, TextFormatType, ToolbarState};
