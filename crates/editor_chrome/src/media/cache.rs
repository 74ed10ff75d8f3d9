// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! The process-wide media load cache.
//!
//! Each distinct source address is loaded at most once: the first
//! request returns [`RequestOutcome::StartLoad`] and the caller kicks
//! off the actual asynchronous load; every later request for the same
//! address attaches to the pending entry instead of issuing a duplicate.
//! Completions re-enter through [`MediaLoadCache::complete`] on the same
//! event queue. There is no cancellation: a component unmounting
//! mid-load simply never reads the result.
//!
//! The cache has an explicit lifecycle — initialised on first use,
//! clearable on demand — so tests can isolate themselves.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use once_cell::sync::Lazy;
use thiserror::Error;
use tracing::debug;

/// Rendered in place of media whose load failed.
pub const BROKEN_MEDIA_PLACEHOLDER: &str = "/images/image-broken.svg";

/// A media load that did not produce dimensions.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("failed to load media from `{address}`")]
pub struct MediaLoadError {
    pub address: String,
}

/// The lifecycle of one cached source address.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadState {
    /// A load is in flight.
    Pending,
    /// Loaded; intrinsic dimensions known.
    Ready { width: u32, height: u32 },
    /// The load failed; render [`BROKEN_MEDIA_PLACEHOLDER`].
    Failed,
}

/// What a request against the cache tells the caller to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RequestOutcome {
    /// First reference: the caller must start the load and report back
    /// through [`MediaLoadCache::complete`].
    StartLoad,
    /// Another reference already started the load; wait for it.
    Pending,
    Ready { width: u32, height: u32 },
    Failed,
}

#[derive(Debug, Default)]
pub struct MediaLoadCache {
    entries: HashMap<String, LoadState>,
}

impl MediaLoadCache {
    pub fn new() -> MediaLoadCache {
        MediaLoadCache::default()
    }

    /// Reference a source address, registering a pending load on first
    /// use. Keys are normalised so equivalent addresses share one entry.
    pub fn request(&mut self, source: &str) -> RequestOutcome {
        let key = embed_address::cache_key(source);
        match self.entries.get(&key) {
            None => {
                self.entries.insert(key, LoadState::Pending);
                debug!(source, "media load started");
                RequestOutcome::StartLoad
            }
            Some(LoadState::Pending) => RequestOutcome::Pending,
            Some(LoadState::Ready { width, height }) => {
                RequestOutcome::Ready {
                    width: *width,
                    height: *height,
                }
            }
            Some(LoadState::Failed) => RequestOutcome::Failed,
        }
    }

    /// Record the result of a load started via
    /// [`RequestOutcome::StartLoad`].
    pub fn complete(
        &mut self,
        source: &str,
        result: Result<(u32, u32), MediaLoadError>,
    ) {
        let key = embed_address::cache_key(source);
        let state = match result {
            Ok((width, height)) => LoadState::Ready { width, height },
            Err(error) => {
                debug!(%error, "media load failed");
                LoadState::Failed
            }
        };
        self.entries.insert(key, state);
    }

    /// Current state of an address, if it was ever requested.
    pub fn state(&self, source: &str) -> Option<LoadState> {
        self.entries
            .get(&embed_address::cache_key(source))
            .copied()
    }

    /// Drop every entry. Failed loads become retryable.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

// Process-wide instance: initialised on first use, cleared on demand,
// never implicitly reset.
static MEDIA_CACHE: Lazy<Mutex<MediaLoadCache>> =
    Lazy::new(|| Mutex::new(MediaLoadCache::new()));

/// Lock the process-wide media cache.
pub fn media_cache() -> std::sync::MutexGuard<'static, MediaLoadCache> {
    MEDIA_CACHE.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Clear the process-wide media cache (test isolation).
pub fn clear_media_cache() {
    media_cache().clear();
}

/// The shared drag-ghost image, constructed on first use.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragGhost {
    /// A transparent pixel, as a `data:` address.
    pub address: &'static str,
}

static DRAG_GHOST: Lazy<DragGhost> = Lazy::new(|| DragGhost {
    address: embed_address::TRANSPARENT_IMAGE,
});

/// The ghost every chrome-originated drag renders instead of the
/// browser's default preview.
pub fn drag_ghost() -> &'static DragGhost {
    &DRAG_GHOST
}
