// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! The insert-media dialog.
//!
//! The embedding application supplies the actual upload as a callback
//! `(file) -> address string`. Uploading is a suspend point: the dialog
//! marks itself busy, the host runs the callback, and the continuation
//! re-enters through [`MediaDialog::finish_upload`]. A rejected upload
//! leaves the dialog open with the busy indicator cleared so the user
//! can retry; this layer never retries on its own.

use thiserror::Error;
use tracing::debug;

use crate::media::MediaPayload;
use crate::{EditorCommand, EditorHandle};

/// A file picked or dropped into the dialog.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FileUpload {
    pub name: String,
    pub media_type: String,
    pub bytes: Vec<u8>,
}

/// The embedding-supplied upload callback rejected the file.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("upload rejected: {reason}")]
pub struct UploadError {
    pub reason: String,
}

/// Upload contract the embedding application fulfils to enable media
/// insertion.
pub type UploadFn = Box<dyn Fn(&FileUpload) -> Result<String, UploadError>>;

/// Dialog state: closed, or open with an optional pending file and an
/// alt-text field; busy while an upload is in flight.
#[derive(Debug, Default)]
pub struct MediaDialog {
    open: bool,
    busy: bool,
    file: Option<FileUpload>,
    alt_text: String,
}

impl MediaDialog {
    pub fn new() -> MediaDialog {
        MediaDialog::default()
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn is_busy(&self) -> bool {
        self.busy
    }

    pub fn file(&self) -> Option<&FileUpload> {
        self.file.as_ref()
    }

    pub fn alt_text(&self) -> &str {
        &self.alt_text
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Close and reset all fields, including a pending file.
    pub fn close(&mut self) {
        *self = MediaDialog::default();
    }

    pub fn set_file(&mut self, file: FileUpload) {
        if self.open {
            self.file = Some(file);
        }
    }

    pub fn set_alt_text(&mut self, alt_text: impl Into<String>) {
        self.alt_text = alt_text.into();
    }

    /// Begin submitting: returns the file to upload and marks the dialog
    /// busy. `None` when there is no file or an upload is already in
    /// flight.
    pub fn begin_submit(&mut self) -> Option<FileUpload> {
        if !self.open || self.busy {
            return None;
        }
        let file = self.file.clone()?;
        self.busy = true;
        Some(file)
    }

    /// The upload callback's continuation.
    ///
    /// Success dispatches the insertion and closes the dialog. Failure
    /// clears the busy indicator and keeps the dialog (and its fields)
    /// intact for a retry. Returns whether a media node was inserted.
    pub fn finish_upload(
        &mut self,
        result: Result<String, UploadError>,
        handle: &mut dyn EditorHandle,
    ) -> bool {
        self.busy = false;
        match result {
            Ok(src) => {
                let payload =
                    MediaPayload::new(src, self.alt_text.trim());
                handle.dispatch(EditorCommand::InsertMedia(payload));
                self.close();
                true
            }
            Err(error) => {
                debug!(%error, "media upload rejected, dialog stays open");
                false
            }
        }
    }
}
