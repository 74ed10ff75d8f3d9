// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Embedded-media chrome: node attributes, the selection/resize state
//! machine, the process-wide load cache and the insertion dialog.

mod cache;
mod dialog;
mod node;
mod resize;

pub use cache::{
    clear_media_cache, drag_ghost, media_cache, DragGhost, LoadState,
    MediaLoadCache, MediaLoadError, RequestOutcome,
    BROKEN_MEDIA_PLACEHOLDER,
};
pub use dialog::{FileUpload, MediaDialog, UploadError, UploadFn};
pub use node::{Dimension, MediaNode, MediaPayload, DEFAULT_MAX_WIDTH};
pub use resize::{
    clear_resize_session, DragResizeSession, MediaChrome, MediaClick,
    MediaSelectionState, ResizeHandleKind, MIN_DIMENSION,
};
