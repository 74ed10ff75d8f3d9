// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Media node attributes.
//!
//! A media node is a tagged attribute record, not a class hierarchy: the
//! document tree owns the node, the chrome refers to it only by key and
//! dispatches on the record. Width and height each either carry a fixed
//! pixel value or defer to the intrinsic ("natural") size.

use embed_address::EmbedAddress;
use serde::{Deserialize, Serialize};

use crate::NodeKey;

/// Default maximum display width for inserted media.
pub const DEFAULT_MAX_WIDTH: f64 = 500.0;

/// A display dimension: fixed, or inherited from the intrinsic size.
///
/// `Inherit` serialises as `null` on the drag wire value.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Dimension {
    #[default]
    Inherit,
    Fixed(f64),
}

impl Dimension {
    pub fn as_fixed(&self) -> Option<f64> {
        match self {
            Dimension::Fixed(value) => Some(*value),
            Dimension::Inherit => None,
        }
    }
}

/// What the embedding application supplies to insert a media node:
/// an upload result or a plain URL, plus alt text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MediaPayload {
    pub src: String,
    pub alt_text: String,
    #[serde(default)]
    pub width: Dimension,
    #[serde(default)]
    pub height: Dimension,
    #[serde(default = "default_max_width")]
    pub max_width: f64,
}

fn default_max_width() -> f64 {
    DEFAULT_MAX_WIDTH
}

impl MediaPayload {
    pub fn new(src: impl Into<String>, alt_text: impl Into<String>) -> Self {
        MediaPayload {
            src: src.into(),
            alt_text: alt_text.into(),
            width: Dimension::Inherit,
            height: Dimension::Inherit,
            max_width: DEFAULT_MAX_WIDTH,
        }
    }

    /// Classify the source address, if it parses.
    pub fn address(&self) -> Option<EmbedAddress> {
        EmbedAddress::parse(&self.src)
    }
}

/// The persistent attributes of a media node in the document tree.
///
/// The document owns the node exclusively; the chrome holds the key.
/// Created on insertion, mutated on resize (width/height only), removed
/// on deletion or drag-move.
#[derive(Clone, Debug, PartialEq)]
pub struct MediaNode {
    pub key: NodeKey,
    pub src: String,
    pub alt_text: String,
    pub width: Dimension,
    pub height: Dimension,
    pub max_width: f64,
}

impl MediaNode {
    pub fn new(key: NodeKey, payload: MediaPayload) -> MediaNode {
        MediaNode {
            key,
            src: payload.src,
            alt_text: payload.alt_text,
            width: payload.width,
            height: payload.height,
            max_width: payload.max_width,
        }
    }

    /// Commit a resize result onto the node.
    pub fn set_width_and_height(
        &mut self,
        width: Dimension,
        height: Dimension,
    ) {
        self.width = width;
        self.height = height;
    }

    /// The payload needed to reinsert this node after a drag-move.
    pub fn payload(&self) -> MediaPayload {
        MediaPayload {
            src: self.src.clone(),
            alt_text: self.alt_text.clone(),
            width: self.width,
            height: self.height,
            max_width: self.max_width,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_defaults_to_natural_size() {
        let payload = MediaPayload::new("https://example.com/cat.png", "cat");
        assert_eq!(payload.width, Dimension::Inherit);
        assert_eq!(payload.height, Dimension::Inherit);
        assert_eq!(payload.max_width, DEFAULT_MAX_WIDTH);
    }

    #[test]
    fn payload_address_classification() {
        let payload = MediaPayload::new("https://example.com/cat.png", "");
        assert!(matches!(payload.address(), Some(EmbedAddress::Web(_))));
        let broken = MediaPayload::new("", "");
        assert_eq!(broken.address(), None);
    }

    #[test]
    fn resize_commits_only_dimensions() {
        let mut node = MediaNode::new(
            NodeKey::from("m1"),
            MediaPayload::new("/a.png", "alt"),
        );
        node.set_width_and_height(
            Dimension::Fixed(240.0),
            Dimension::Fixed(180.0),
        );
        assert_eq!(node.width, Dimension::Fixed(240.0));
        assert_eq!(node.height, Dimension::Fixed(180.0));
        assert_eq!(node.src, "/a.png");
        assert_eq!(node.alt_text, "alt");
    }

    #[test]
    fn payload_round_trips_through_node() {
        let payload = MediaPayload {
            src: "/a.png".to_string(),
            alt_text: "alt".to_string(),
            width: Dimension::Fixed(100.0),
            height: Dimension::Inherit,
            max_width: 640.0,
        };
        let node = MediaNode::new(NodeKey::from("m1"), payload.clone());
        assert_eq!(node.payload(), payload);
    }

    #[test]
    fn dimension_serialises_inherit_as_null() {
        let json = serde_json::to_string(&Dimension::Inherit).unwrap();
        assert_eq!(json, "null");
        let json = serde_json::to_string(&Dimension::Fixed(240.0)).unwrap();
        assert_eq!(json, "240.0");
        let parsed: Dimension = serde_json::from_str("null").unwrap();
        assert_eq!(parsed, Dimension::Inherit);
    }
}
