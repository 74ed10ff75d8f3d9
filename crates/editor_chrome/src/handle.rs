// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! The seam to the host editing engine.
//!
//! The host owns the document tree, the real selection and the rendering
//! pipeline. This layer reaches it exclusively through [`EditorHandle`]:
//! commands go out, snapshots and hit-test answers come back. Controllers
//! never hold host state across events, so every recomputation observes
//! the state of the change that triggered it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{EditorCommand, SelectionSnapshot};

/// A document position in UTF-16 code units, matching platform text APIs.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
pub struct Location(usize);

impl Location {
    pub fn as_usize(&self) -> usize {
        self.0
    }
}

impl From<usize> for Location {
    fn from(offset: usize) -> Self {
        Location(offset)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The stable key of a node in the host document tree.
///
/// This layer holds keys, never nodes: the document exclusively owns its
/// nodes, and a key may stop resolving after any structural edit.
#[derive(
    Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct NodeKey(String);

impl NodeKey {
    pub fn new(key: impl Into<String>) -> NodeKey {
        NodeKey(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeKey {
    fn from(key: &str) -> Self {
        NodeKey(key.to_string())
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// The host editor, as seen from the chrome.
pub trait EditorHandle {
    /// Queue a document mutation. Dispatch order is preserved; the host
    /// applies commands against its current state version.
    fn dispatch(&mut self, command: EditorCommand);

    /// The nearest block-level node under a viewport point, if any.
    fn node_at_point(&self, x: f64, y: f64) -> Option<NodeKey>;

    /// A snapshot of the current selection.
    fn selection(&self) -> SelectionSnapshot;
}
