// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! Editor construction and the composed view surface.
//!
//! An [`Editor`] is assembled once from base parts plus caller-supplied
//! extensions, validating the configuration up front: a required node
//! kind missing at construction is an integration mistake in the
//! embedding application and fails immediately, not at first use.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use strum_macros::{Display, EnumString};
use tracing::debug;

use crate::media::{MediaDialog, UploadFn, BROKEN_MEDIA_PLACEHOLDER};
use crate::{
    BlockCatalog, BlockControl, BlockOption, BlockPicker, ChromeError,
    EditorHandle, FloatingToolbar, SelectionSnapshot,
};

/// The closed set of node kinds an editor can host.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumString)]
pub enum NodeKind {
    #[strum(serialize = "paragraph")]
    Paragraph,
    #[strum(serialize = "heading")]
    Heading,
    #[strum(serialize = "quote")]
    Quote,
    #[strum(serialize = "list")]
    List,
    #[strum(serialize = "list-item")]
    ListItem,
    #[strum(serialize = "divider")]
    Divider,
    #[strum(serialize = "media")]
    Media,
}

/// Node kinds every editor registers before caller extras.
pub const BASE_NODE_KINDS: [NodeKind; 6] = [
    NodeKind::Paragraph,
    NodeKind::Heading,
    NodeKind::Quote,
    NodeKind::List,
    NodeKind::ListItem,
    NodeKind::Divider,
];

/// A plugin registration: a name plus the node kinds it refuses to mount
/// without.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Extension {
    name: String,
    required_node_kinds: Vec<NodeKind>,
}

impl Extension {
    pub fn new(name: impl Into<String>) -> Extension {
        Extension {
            name: name.into(),
            required_node_kinds: Vec::new(),
        }
    }

    pub fn requires(mut self, kind: NodeKind) -> Extension {
        self.required_node_kinds.push(kind);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn required_node_kinds(&self) -> &[NodeKind] {
        &self.required_node_kinds
    }
}

/// The media extension: insert dialog, selection chrome, resize handles.
/// Requires the media node kind to be registered.
pub fn media_extension() -> Extension {
    Extension::new("media").requires(NodeKind::Media)
}

/// Runs once against the live editor to seed initial content.
pub type InitialContentFn = Box<dyn FnOnce(&mut dyn EditorHandle)>;

/// Invoked after every content change with the fresh snapshot.
pub type ChangeCallback = Box<dyn FnMut(&SelectionSnapshot)>;

/// Invoked when a media load fails, with the failing source address.
pub type MediaErrorCallback = Box<dyn FnMut(&str)>;

/// Everything the embedding application can configure.
pub struct EditorOptions {
    pub name: String,
    /// Theme token mapping passed through to the host renderer.
    pub theme: HashMap<String, String>,
    pub initial_content: Option<InitialContentFn>,
    pub extensions: Vec<Extension>,
    /// Node kinds registered in addition to [`BASE_NODE_KINDS`].
    pub node_kinds: Vec<NodeKind>,
    /// Block options appended to the base catalog.
    pub block_options: Vec<BlockOption>,
    /// Upload contract; media insertion stays disabled without it.
    pub upload: Option<UploadFn>,
}

impl Default for EditorOptions {
    fn default() -> Self {
        EditorOptions {
            name: "editor".to_string(),
            theme: HashMap::new(),
            initial_content: None,
            extensions: Vec::new(),
            node_kinds: Vec::new(),
            block_options: Vec::new(),
            upload: None,
        }
    }
}

/// A configured editor: the catalog, the registered node kinds and the
/// upload contract, ready to hand views out.
pub struct Editor {
    name: String,
    theme: HashMap<String, String>,
    catalog: Arc<BlockCatalog>,
    node_kinds: HashSet<NodeKind>,
    extensions: Vec<Extension>,
    upload: Option<UploadFn>,
    initial_content: Option<InitialContentFn>,
}

impl Editor {
    pub fn new(options: EditorOptions) -> Result<Editor, ChromeError> {
        let mut node_kinds: HashSet<NodeKind> =
            BASE_NODE_KINDS.into_iter().collect();
        node_kinds.extend(options.node_kinds.iter().copied());

        for extension in &options.extensions {
            for kind in extension.required_node_kinds() {
                if !node_kinds.contains(kind) {
                    return Err(ChromeError::NodeKindNotRegistered {
                        kind: kind.to_string(),
                        extension: extension.name().to_string(),
                    });
                }
            }
        }

        let catalog =
            Arc::new(BlockCatalog::with_extensions(options.block_options)?);
        debug!(name = %options.name, "editor configured");

        Ok(Editor {
            name: options.name,
            theme: options.theme,
            catalog,
            node_kinds,
            extensions: options.extensions,
            upload: options.upload,
            initial_content: options.initial_content,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn theme(&self) -> &HashMap<String, String> {
        &self.theme
    }

    pub fn catalog(&self) -> &Arc<BlockCatalog> {
        &self.catalog
    }

    pub fn has_node_kind(&self, kind: NodeKind) -> bool {
        self.node_kinds.contains(&kind)
    }

    pub fn extensions(&self) -> &[Extension] {
        &self.extensions
    }

    pub fn upload(&self) -> Option<&UploadFn> {
        self.upload.as_ref()
    }

    /// Seed initial content. Runs at most once.
    pub fn initialize(&mut self, handle: &mut dyn EditorHandle) {
        if let Some(seed) = self.initial_content.take() {
            seed(handle);
        }
    }

    /// Build the composed view surface over this editor.
    pub fn view(&self) -> EditorView {
        EditorView::new(Arc::clone(&self.catalog))
    }
}

/// The composed surface handed to the embedding application: the
/// toolbar, the block control and the picker behind visibility toggles,
/// plus the change notification hook.
pub struct EditorView {
    toolbar: FloatingToolbar,
    block_control: BlockControl,
    picker: BlockPicker,
    media_dialog: MediaDialog,
    show_toolbar: bool,
    show_block_handle: bool,
    placeholder: String,
    on_change: Option<ChangeCallback>,
    on_media_error: Option<MediaErrorCallback>,
}

impl EditorView {
    fn new(catalog: Arc<BlockCatalog>) -> EditorView {
        EditorView {
            toolbar: FloatingToolbar::new(Arc::clone(&catalog)),
            block_control: BlockControl::new(Arc::clone(&catalog)),
            picker: BlockPicker::new(catalog),
            media_dialog: MediaDialog::new(),
            show_toolbar: true,
            show_block_handle: true,
            placeholder: "Enter some text or type '/' for commands"
                .to_string(),
            on_change: None,
            on_media_error: None,
        }
    }

    pub fn toolbar(&mut self) -> &mut FloatingToolbar {
        &mut self.toolbar
    }

    pub fn block_control(&mut self) -> &mut BlockControl {
        &mut self.block_control
    }

    pub fn picker(&mut self) -> &mut BlockPicker {
        &mut self.picker
    }

    pub fn media_dialog(&mut self) -> &mut MediaDialog {
        &mut self.media_dialog
    }

    pub fn show_toolbar(&self) -> bool {
        self.show_toolbar
    }

    pub fn set_show_toolbar(&mut self, show: bool) {
        self.show_toolbar = show;
    }

    pub fn show_block_handle(&self) -> bool {
        self.show_block_handle
    }

    pub fn set_show_block_handle(&mut self, show: bool) {
        self.show_block_handle = show;
    }

    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    pub fn set_on_change(&mut self, callback: ChangeCallback) {
        self.on_change = Some(callback);
    }

    pub fn set_on_media_error(&mut self, callback: MediaErrorCallback) {
        self.on_media_error = Some(callback);
    }

    /// A document-state change: notify the embedding application.
    pub fn document_changed(&mut self, snapshot: &SelectionSnapshot) {
        if let Some(callback) = self.on_change.as_mut() {
            callback(snapshot);
        }
    }

    /// A media load failed: notify the embedding application and return
    /// the placeholder to render instead.
    pub fn media_load_failed(&mut self, source: &str) -> &'static str {
        if let Some(callback) = self.on_media_error.as_mut() {
            callback(source);
        }
        BROKEN_MEDIA_PLACEHOLDER
    }
}
