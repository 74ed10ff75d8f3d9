// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Errors surfaced by editor construction.
//!
//! Only configuration mistakes are fatal and reach the caller. Runtime
//! inconsistencies (a selection outside the root, a missing target
//! rectangle, a malformed drag payload) recover locally by hiding the
//! affected chrome or ignoring the event.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChromeError {
    /// An extension requires a node kind that was never registered. This
    /// is a build-time integration mistake in the embedding application,
    /// so it is surfaced immediately instead of failing at first use.
    #[error(
        "node kind `{kind}` is not registered but is required by the \
         `{extension}` extension"
    )]
    NodeKindNotRegistered { kind: String, extension: String },

    /// Two block options in one catalog share a key.
    #[error("duplicate block option key `{0}` in catalog")]
    DuplicateBlockKey(String),
}
