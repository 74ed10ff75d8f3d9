// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

//! The floating formatting toolbar.
//!
//! Combines the observer (what to show) with the positioner (where to
//! show it). While hidden the toolbar produces no position and reserves
//! no layout space; the element itself is parked off-screen.

use std::sync::Arc;

use tracing::debug;

use crate::{
    position_floating_element, BlockCatalog, BlockOption, EditorCommand,
    EditorHandle, FloatingPosition, FormatSet, Location, Rect,
    SelectionSnapshot, StyleProperty, TextFormatType, ToolbarObserver,
    ToolbarState,
};

/// The events that force a position recomputation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewEvent {
    /// Initial mount of the toolbar element.
    Mounted,
    /// A document-state change notification.
    StateChanged,
    /// A native selection-change event.
    SelectionChanged,
    /// The window was resized.
    WindowResized,
    /// The nearest scrollable ancestor scrolled.
    Scrolled,
}

/// Host-measured rectangles needed to position the toolbar.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewLayout {
    /// Current size of the floating element itself.
    pub floating: Rect,
    /// The anchor element positions are relative to.
    pub anchor: Rect,
    /// The scroll container bounding the toolbar.
    pub scroller: Rect,
}

/// A named color in the toolbar's color menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorSwatch {
    pub name: &'static str,
    pub value: &'static str,
}

/// The swatches offered by the font/background color menus.
pub const DEFAULT_SWATCHES: &[ColorSwatch] = &[
    ColorSwatch { name: "Default", value: "inherit" },
    ColorSwatch { name: "Gray", value: "#6b7280" },
    ColorSwatch { name: "Red", value: "#dc2626" },
    ColorSwatch { name: "Orange", value: "#ea580c" },
    ColorSwatch { name: "Yellow", value: "#ca8a04" },
    ColorSwatch { name: "Green", value: "#16a34a" },
    ColorSwatch { name: "Blue", value: "#2563eb" },
    ColorSwatch { name: "Purple", value: "#9333ea" },
    ColorSwatch { name: "Pink", value: "#db2777" },
];

pub struct FloatingToolbar {
    observer: ToolbarObserver,
    catalog: Arc<BlockCatalog>,
    position: FloatingPosition,
    pointer_transparent: bool,
}

impl FloatingToolbar {
    pub fn new(catalog: Arc<BlockCatalog>) -> FloatingToolbar {
        FloatingToolbar {
            observer: ToolbarObserver::new(),
            catalog,
            position: FloatingPosition::OFFSCREEN,
            pointer_transparent: false,
        }
    }

    pub fn state(&self) -> &ToolbarState {
        self.observer.state()
    }

    pub fn position(&self) -> FloatingPosition {
        self.position
    }

    /// Whether the element currently ignores pointer events (a drag
    /// selection is sweeping across it).
    pub fn pointer_transparent(&self) -> bool {
        self.pointer_transparent
    }

    /// The options shown in the toolbar's block dropdown.
    pub fn block_options(&self) -> Vec<&BlockOption> {
        self.catalog.insertable()
    }

    /// Process a view event: recompute the observed state where the
    /// event implies a state change, then recompute the position.
    pub fn handle_event(
        &mut self,
        event: ViewEvent,
        snapshot: &SelectionSnapshot,
        layout: &ViewLayout,
    ) -> FloatingPosition {
        match event {
            ViewEvent::Mounted | ViewEvent::StateChanged => {
                self.observer.document_changed(snapshot);
            }
            ViewEvent::SelectionChanged => {
                self.observer.selection_changed(snapshot);
            }
            ViewEvent::WindowResized | ViewEvent::Scrolled => {}
        }
        self.reposition(snapshot, layout)
    }

    /// A pointer button went down on the editor root.
    pub fn pointer_pressed(&mut self) {
        self.observer.pointer_pressed();
        self.position = FloatingPosition::OFFSCREEN;
    }

    /// Pointer moved while a button is held. When the pointer leaves the
    /// toolbar mid-drag the element goes click-through so the drag
    /// selection underneath it keeps working.
    pub fn pointer_dragged(&mut self, over_toolbar: bool) {
        if !over_toolbar {
            self.pointer_transparent = true;
        }
    }

    /// The pointer button was released: restore pointer events and force
    /// one recomputation.
    pub fn pointer_released(
        &mut self,
        snapshot: &SelectionSnapshot,
        layout: &ViewLayout,
    ) -> FloatingPosition {
        self.pointer_transparent = false;
        self.observer.pointer_released(snapshot);
        self.reposition(snapshot, layout)
    }

    fn reposition(
        &mut self,
        snapshot: &SelectionSnapshot,
        layout: &ViewLayout,
    ) -> FloatingPosition {
        self.position = if self.observer.state().visible {
            position_floating_element(
                snapshot.rect,
                layout.floating,
                layout.anchor,
                layout.scroller,
                false,
                snapshot.alignment,
            )
        } else {
            FloatingPosition::OFFSCREEN
        };
        self.position
    }

    /// Request a target set of inline formats.
    ///
    /// Exactly one format command is dispatched per format whose
    /// requested state differs from the current state; requesting the
    /// current state is an idempotent no-op.
    pub fn toggle_formats(
        &mut self,
        handle: &mut dyn EditorHandle,
        requested: FormatSet,
    ) {
        let current = self.observer.state().formats;
        for format in TextFormatType::ALL {
            if requested.contains(format) != current.contains(format) {
                handle.dispatch(EditorCommand::FormatText(format));
            }
        }
    }

    /// Toggle a single format to a desired state.
    pub fn set_format(
        &mut self,
        handle: &mut dyn EditorHandle,
        format: TextFormatType,
        active: bool,
    ) {
        let mut requested = self.observer.state().formats;
        requested.set(format, active);
        self.toggle_formats(handle, requested);
    }

    /// Switch the current block's type via a catalog lookup, then
    /// collapse the selection to the insertion point. Only options from
    /// the dropdown's insertable categories resolve.
    pub fn set_block(
        &mut self,
        handle: &mut dyn EditorHandle,
        key: &str,
    ) -> bool {
        let Some(option) =
            self.catalog.get(key).filter(|option| {
                crate::INSERTABLE_CATEGORIES.contains(&option.category())
            })
        else {
            debug!(key, "block dropdown key did not resolve");
            return false;
        };

        option.insert(handle, "");
        let offset: Location = handle.selection().anchor_offset;
        handle.dispatch(EditorCommand::CollapseSelection { offset });
        true
    }

    /// Apply a font color from the color menu; `None` clears it.
    pub fn apply_font_color(
        &mut self,
        handle: &mut dyn EditorHandle,
        color: Option<&str>,
    ) {
        handle.dispatch(EditorCommand::PatchStyle {
            property: StyleProperty::FontColor,
            value: color.map(str::to_string),
        });
    }

    /// Apply a background color from the color menu; `None` clears it.
    pub fn apply_background_color(
        &mut self,
        handle: &mut dyn EditorHandle,
        color: Option<&str>,
    ) {
        handle.dispatch(EditorCommand::PatchStyle {
            property: StyleProperty::BackgroundColor,
            value: color.map(str::to_string),
        });
    }
}
