// Copyright (c) 2026 Element Creations Ltd
//
// SPDX-License-Identifier: AGPL-3.0-only OR LicenseRef-Element-Commercial
// Please see LICENSE in the repository root for full details.

use speculoos::prelude::*;

use editor_chrome::media::{
    MediaLoadCache, RequestOutcome, UploadError,
};
use editor_chrome::{
    BlockCategory, BlockKind, BlockOption, ContainerKind, EditorCommand,
    EditorHandle, EditorOptions, FormatSet, Location, MediaChrome,
    MediaSelectionState, NodeKey, Rect, SelectionSnapshot, TextFormatType,
    ViewEvent, ViewLayout,
};

/// Host double: records dispatched commands, answers hit-tests from a
/// fixed block list and returns a fixed selection snapshot.
struct FakeHost {
    commands: Vec<EditorCommand>,
    snapshot: SelectionSnapshot,
    blocks: Vec<(Rect, NodeKey)>,
}

impl FakeHost {
    fn new() -> FakeHost {
        FakeHost {
            commands: Vec::new(),
            snapshot: SelectionSnapshot::caret(0),
            blocks: Vec::new(),
        }
    }
}

impl EditorHandle for FakeHost {
    fn dispatch(&mut self, command: EditorCommand) {
        self.commands.push(command);
    }

    fn node_at_point(&self, x: f64, y: f64) -> Option<NodeKey> {
        self.blocks
            .iter()
            .find(|(rect, _)| {
                x >= rect.left
                    && x <= rect.right()
                    && y >= rect.top
                    && y <= rect.bottom()
            })
            .map(|(_, key)| key.clone())
    }

    fn selection(&self) -> SelectionSnapshot {
        self.snapshot.clone()
    }
}

fn heading_option(level: u8) -> BlockOption {
    let kind = BlockKind::heading(level).unwrap();
    BlockOption::new(
        format!("heading-{level}"),
        format!("Heading {level}"),
        format!("heading-{level}"),
        BlockCategory::Headings,
        &["heading", "header", &format!("h{level}")],
        move |handle, _| {
            handle.dispatch(EditorCommand::SetBlockKind(kind));
        },
    )
}

/// An editor whose catalog carries Heading 1 through Heading 6 (the base
/// set plus caller-supplied deep headings).
fn editor_with_deep_headings() -> editor_chrome::Editor {
    editor_chrome::Editor::new(EditorOptions {
        block_options: vec![
            heading_option(4),
            heading_option(5),
            heading_option(6),
        ],
        ..EditorOptions::default()
    })
    .unwrap()
}

#[test]
fn slash_head_yields_all_six_headings_in_catalog_order() {
    let editor = editor_with_deep_headings();
    let mut view = editor.view();

    let picker = view.picker();
    assert!(picker.update_from_text("/head", Location::from(5)));

    let titles: Vec<String> = picker
        .filtered()
        .iter()
        .map(|option| option.title().to_string())
        .collect();
    assert_that(&titles).has_length(6);
    assert_eq!(
        titles,
        vec![
            "Heading 1",
            "Heading 2",
            "Heading 3",
            "Heading 4",
            "Heading 5",
            "Heading 6",
        ]
    );
}

#[test]
fn choosing_heading_two_replaces_typed_text_with_a_heading() {
    let editor = editor_with_deep_headings();
    let mut view = editor.view();
    let mut host = FakeHost::new();

    let picker = view.picker();
    picker.update_from_text("/head", Location::from(5));
    assert!(picker.choose(1, &mut host));

    assert_eq!(
        host.commands,
        vec![
            EditorCommand::RemoveTextSpan {
                start: Location::from(0),
                end: Location::from(5),
            },
            EditorCommand::SetBlockKind(BlockKind::Heading2),
        ]
    );
    assert!(!picker.is_open());
}

#[test]
fn trigger_match_survives_leading_prose() {
    let editor = editor_with_deep_headings();
    let mut view = editor.view();
    let mut host = FakeHost::new();

    let picker = view.picker();
    picker.update_from_text("notes /h6", Location::from(9));
    let titles: Vec<&str> =
        picker.filtered().iter().map(|o| o.title()).collect();
    assert_eq!(titles, vec!["Heading 6"]);

    assert!(picker.choose(0, &mut host));
    assert_eq!(
        host.commands,
        vec![
            EditorCommand::RemoveTextSpan {
                start: Location::from(6),
                end: Location::from(9),
            },
            EditorCommand::SetBlockKind(BlockKind::Heading6),
        ]
    );
}

#[test]
fn toolbar_toggle_is_idempotent_through_the_view() {
    let editor = editor_chrome::Editor::new(EditorOptions::default()).unwrap();
    let mut view = editor.view();
    let mut host = FakeHost::new();

    let snapshot = SelectionSnapshot {
        collapsed: false,
        anchor_in_root: true,
        text: "body".to_string(),
        formats: FormatSet {
            bold: true,
            ..FormatSet::default()
        },
        rect: Some(Rect::new(300.0, 100.0, 120.0, 20.0)),
        ancestors: vec![ContainerKind::Paragraph],
        ..SelectionSnapshot::default()
    };
    let layout = ViewLayout {
        floating: Rect::new(0.0, 0.0, 320.0, 40.0),
        anchor: Rect::new(0.0, 0.0, 800.0, 600.0),
        scroller: Rect::new(0.0, 0.0, 800.0, 600.0),
    };

    let toolbar = view.toolbar();
    let position =
        toolbar.handle_event(ViewEvent::StateChanged, &snapshot, &layout);
    assert_that(&position.visible).is_true();
    assert_that(&toolbar.state().formats.bold).is_true();

    // Re-requesting bold dispatches nothing; requesting italic
    // dispatches exactly one command.
    toolbar.set_format(&mut host, TextFormatType::Bold, true);
    assert_that(&host.commands).has_length(0);
    toolbar.set_format(&mut host, TextFormatType::Italic, true);
    assert_eq!(
        host.commands,
        vec![EditorCommand::FormatText(TextFormatType::Italic)]
    );
}

#[test]
fn add_block_then_pick_from_submenu() {
    let editor = editor_chrome::Editor::new(EditorOptions::default()).unwrap();
    let mut view = editor.view();
    let mut host = FakeHost::new();
    host.blocks = vec![
        (Rect::new(0.0, 0.0, 600.0, 40.0), NodeKey::from("p1")),
        (Rect::new(40.0, 0.0, 600.0, 40.0), NodeKey::from("p2")),
    ];

    let control = view.block_control();
    control.pointer_moved(12.0, 10.0, &host);
    assert_eq!(control.hovered(), Some(&NodeKey::from("p1")));

    assert!(control.add_block(&mut host));
    assert!(control.menu_open());

    // The submenu carries insertable categories only.
    let quote_index = control
        .menu_options()
        .iter()
        .position(|option| option.key() == "quote")
        .unwrap();
    assert!(control.choose(quote_index, &mut host));

    assert_eq!(
        host.commands,
        vec![
            EditorCommand::InsertParagraphAfter {
                key: NodeKey::from("p1")
            },
            EditorCommand::SetBlockKind(BlockKind::Quote),
        ]
    );
}

#[test]
fn media_resize_lifecycle_commits_clamped_ratio_preserving_size() {
    editor_chrome::media::clear_resize_session();
    let mut host = FakeHost::new();
    let mut chrome = MediaChrome::new(NodeKey::from("img"), 500.0);

    chrome.click(false);
    assert!(chrome.begin_resize(
        editor_chrome::media::ResizeHandleKind::SouthEast,
        (0.0, 0.0),
        (400.0, 200.0),
    ));

    // Drag out: ratio stays 2:1, width respects the configured maximum.
    let (width, height) = chrome.resize_to((400.0, 0.0)).unwrap();
    assert_that(&(width <= 500.0)).is_true();
    assert_that(&(width >= 100.0)).is_true();
    assert_that(&(height >= 100.0)).is_true();

    chrome.end_resize(&mut host);
    assert_eq!(chrome.state(), MediaSelectionState::Settling);
    chrome.settle();
    assert_eq!(chrome.state(), MediaSelectionState::Selected);

    let [EditorCommand::SetMediaSize { key, .. }] = &host.commands[..]
    else {
        panic!("expected SetMediaSize, got {:?}", host.commands);
    };
    assert_eq!(key, &NodeKey::from("img"));
    editor_chrome::media::clear_resize_session();
}

#[test]
fn media_cache_deduplicates_concurrent_loads() {
    let mut cache = MediaLoadCache::new();
    let sources = ["/cat.png", "/cat.png", "/cat.png", "/dog.png"];

    let mut loads_started = 0;
    for source in sources {
        if cache.request(source) == RequestOutcome::StartLoad {
            loads_started += 1;
        }
    }
    // One per distinct address, regardless of how many components asked.
    assert_eq!(loads_started, 2);

    cache.complete("/cat.png", Ok((640, 480)));
    assert_eq!(
        cache.request("/cat.png"),
        RequestOutcome::Ready {
            width: 640,
            height: 480
        }
    );
}

#[test]
fn failed_upload_allows_retry_and_then_inserts() {
    let editor = editor_chrome::Editor::new(EditorOptions {
        upload: Some(Box::new(|file| {
            if file.bytes.is_empty() {
                Err(UploadError {
                    reason: "empty file".to_string(),
                })
            } else {
                Ok(format!("https://cdn.example.com/{}", file.name))
            }
        })),
        ..EditorOptions::default()
    })
    .unwrap();

    let mut view = editor.view();
    let mut host = FakeHost::new();

    let dialog = view.media_dialog();
    dialog.open();
    dialog.set_file(editor_chrome::media::FileUpload {
        name: "cat.png".to_string(),
        media_type: "image/png".to_string(),
        bytes: Vec::new(),
    });

    let file = dialog.begin_submit().unwrap();
    let result = (editor.upload().unwrap())(&file);
    assert!(!dialog.finish_upload(result, &mut host));
    assert_that(&dialog.is_open()).is_true();
    assert_that(&dialog.is_busy()).is_false();

    // Retry with a real payload.
    dialog.set_file(editor_chrome::media::FileUpload {
        name: "cat.png".to_string(),
        media_type: "image/png".to_string(),
        bytes: vec![1, 2, 3],
    });
    let file = dialog.begin_submit().unwrap();
    let result = (editor.upload().unwrap())(&file);
    assert!(dialog.finish_upload(result, &mut host));

    let [EditorCommand::InsertMedia(payload)] = &host.commands[..] else {
        panic!("expected InsertMedia, got {:?}", host.commands);
    };
    assert_eq!(payload.src, "https://cdn.example.com/cat.png");
}
