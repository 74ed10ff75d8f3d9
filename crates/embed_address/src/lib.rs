// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Parsing and classification of embedded-media source addresses.
//!
//! Media nodes reference their content by an opaque address string: an
//! absolute `http(s)` URL, a `data:` URI produced by an upload preview, or
//! a path relative to the embedding application. This crate normalises
//! those strings so the rest of the editor chrome can use them as cache
//! keys without caring which form they arrived in.

use url::Url;

/// A 1×1 transparent GIF, used as the shared drag-ghost image so that the
/// browser's default drag preview never appears over the editor surface.
pub const TRANSPARENT_IMAGE: &str =
    "data:image/gif;base64,R0lGODlhAQABAIAAAAAAAP///yH5BAEAAAAALAAAAAABAAEAAAIBRAA7";

/// A classified media source address.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EmbedAddress {
    /// An absolute `http` or `https` URL.
    Web(Url),
    /// A `data:` URI. Only the media type is retained; the payload stays
    /// in the original string.
    Data { media_type: String },
    /// A path resolved against the embedding application's origin.
    Relative(String),
}

impl EmbedAddress {
    /// Parse a raw source string into a classified address.
    ///
    /// Returns `None` for empty (or whitespace-only) input and for
    /// absolute URLs with schemes this layer does not embed (`ftp:`,
    /// `javascript:` and friends).
    pub fn parse(source: &str) -> Option<EmbedAddress> {
        let source = source.trim();
        if source.is_empty() {
            return None;
        }

        match Url::parse(source) {
            Ok(url) => match url.scheme() {
                "http" | "https" => Some(EmbedAddress::Web(url)),
                "data" => Some(EmbedAddress::Data {
                    media_type: data_media_type(source),
                }),
                _ => None,
            },
            // Not an absolute URL: treat as a path within the embedding
            // application (e.g. "/images/image-broken.svg").
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                Some(EmbedAddress::Relative(source.to_string()))
            }
            Err(_) => None,
        }
    }

    /// Whether this address points at inline `data:` content.
    pub fn is_data(&self) -> bool {
        matches!(self, EmbedAddress::Data { .. })
    }

    /// The canonical string form, suitable as a process-wide cache key.
    ///
    /// Web URLs are re-serialised (normalising e.g. default ports and
    /// percent-encoding); other forms are the trimmed input.
    pub fn canonical(&self, source: &str) -> String {
        match self {
            EmbedAddress::Web(url) => url.as_str().to_string(),
            _ => source.trim().to_string(),
        }
    }
}

/// Normalise a raw source string into a cache key.
///
/// Unparseable addresses still get a key (the trimmed input) so that a
/// broken source is only loaded — and fails — once.
pub fn cache_key(source: &str) -> String {
    match EmbedAddress::parse(source) {
        Some(address) => address.canonical(source),
        None => source.trim().to_string(),
    }
}

/// Extract the media type from a `data:` URI, defaulting to
/// `text/plain` as the data-URI grammar does.
fn data_media_type(source: &str) -> String {
    let rest = &source["data:".len()..];
    let end = rest
        .find([';', ','])
        .unwrap_or(rest.len());
    let media_type = &rest[..end];
    if media_type.is_empty() {
        "text/plain".to_string()
    } else {
        media_type.to_ascii_lowercase()
    }
}
