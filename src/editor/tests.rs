//! Plugin tests: request messages drive the clipboard and move the selection.

use bevy::prelude::*;

use super::*;
use crate::asset::{Action, ActionMap, Binding, InputActionAsset};
use crate::config::ConfigPlugin;

fn asset() -> InputActionAsset {
    let mut map = ActionMap::new("Gameplay");
    map.actions.push(Action::new("Move"));
    map.actions.push(Action::new("Jump"));
    map.bindings = vec![
        Binding::composite("Move", "2D Vector", "2DVector"),
        Binding::part("Move", "up", "<Keyboard>/w"),
        Binding::part("Move", "down", "<Keyboard>/s"),
        Binding::new("Jump", "<Keyboard>/space"),
    ];
    InputActionAsset {
        name: "Controls".to_string(),
        maps: vec![map],
    }
}

fn editor_app() -> App {
    let mut app = App::new();
    app.add_plugins(EditorPlugin);
    app.insert_resource(ActionEditorState::new(asset()));
    app.update();
    app
}

fn select(app: &mut App, selection: EditorSelection) {
    app.world_mut().resource_mut::<ActionEditorState>().selection = selection;
}

fn send<M: Message>(app: &mut App, message: M) {
    app.world_mut().write_message(message);
    app.update();
}

fn state(app: &App) -> &ActionEditorState {
    app.world().resource::<ActionEditorState>()
}

#[test]
fn test_plugin_registers_resources() {
    let app = editor_app();
    assert!(app.world().contains_resource::<ActionClipboard>());
    assert_eq!(state(&app).selection.kind, SelectionKind::None);
}

#[test]
fn test_copy_paste_action_selects_pasted_action() {
    let mut app = editor_app();
    select(&mut app, EditorSelection::action(0, 0));

    send(&mut app, CopyRequest::default());
    send(&mut app, PasteRequest::default());

    let state = state(&app);
    assert_eq!(state.selection, EditorSelection::action(0, 1));
    assert_eq!(state.asset.maps[0].actions[1].name, "Move1");
    assert_eq!(state.asset.maps[0].bindings.len(), 7);
}

#[test]
fn test_cut_paste_is_one_shot() {
    let mut app = editor_app();
    select(&mut app, EditorSelection::action(0, 1));

    send(&mut app, CutRequest::default());
    send(&mut app, PasteRequest::default());
    send(&mut app, PasteRequest::default());

    let names: Vec<&str> = state(&app).asset.maps[0]
        .actions
        .iter()
        .map(|a| a.name.as_str())
        .collect();
    assert_eq!(names, vec!["Move", "Jump", "Jump1"]);
    assert!(!app.world().resource::<ActionClipboard>().last_action_was_cut());
}

#[test]
fn test_paste_whole_map_onto_map_selection() {
    let mut app = editor_app();
    select(&mut app, EditorSelection::action(0, 0));
    send(&mut app, CopyRequest { whole_map: true });

    // A map clipboard can't be pasted onto an action
    send(&mut app, PasteRequest::default());
    assert_eq!(state(&app).asset.maps.len(), 1);

    select(&mut app, EditorSelection::action_map(0));
    send(&mut app, PasteRequest::default());

    let state = state(&app);
    assert_eq!(state.asset.maps.len(), 2);
    assert_eq!(state.asset.maps[1].name, "Gameplay1");
    assert_eq!(state.selection, EditorSelection::action_map(1));
}

#[test]
fn test_paste_action_into_explicit_map() {
    let mut app = editor_app();
    app.world_mut()
        .resource_mut::<ActionEditorState>()
        .asset
        .maps
        .push(ActionMap::new("Menu"));
    select(&mut app, EditorSelection::action(0, 1));

    send(&mut app, CopyRequest::default());
    send(
        &mut app,
        PasteRequest {
            append_at_end: false,
            map_index: Some(1),
        },
    );

    let state = state(&app);
    assert_eq!(state.selection, EditorSelection::action(1, 0));
    assert_eq!(state.asset.maps[1].actions[0].name, "Jump");
    assert_eq!(state.asset.maps[1].bindings[0].action, "Jump");
}

#[test]
fn test_paste_map_after_explicit_map() {
    let mut app = editor_app();
    app.world_mut()
        .resource_mut::<ActionEditorState>()
        .asset
        .maps
        .push(ActionMap::new("Menu"));
    select(&mut app, EditorSelection::action(0, 0));

    send(&mut app, CopyRequest { whole_map: true });
    send(
        &mut app,
        PasteRequest {
            append_at_end: false,
            map_index: Some(1),
        },
    );

    let state = state(&app);
    let names: Vec<&str> = state.asset.maps.iter().map(|m| m.name.as_str()).collect();
    assert_eq!(names, vec!["Gameplay", "Menu", "Gameplay1"]);
    assert_eq!(state.selection, EditorSelection::action_map(2));
}

#[test]
fn test_duplicate_composite_selects_copy() {
    let mut app = editor_app();
    let selection = EditorSelection::binding(&state(&app).asset, 0, 0);
    select(&mut app, selection);

    send(&mut app, DuplicateRequest);

    let state = state(&app);
    assert_eq!(state.selection.kind, SelectionKind::Binding);
    assert_eq!(state.selection.binding, Some(3));
    assert_eq!(state.selection.action, Some(0));
    assert!(state.asset.maps[0].bindings[3].is_composite());
    // Duplicating doesn't touch the clipboard
    assert_eq!(app.world().resource::<ActionClipboard>().copied_kind(), None);
}

#[test]
fn test_paste_with_empty_clipboard_keeps_selection() {
    let mut app = editor_app();
    select(&mut app, EditorSelection::action(0, 0));

    send(&mut app, PasteRequest::default());

    let state = state(&app);
    assert_eq!(state.selection, EditorSelection::action(0, 0));
    assert_eq!(state.asset.maps[0].actions.len(), 2);
}

#[test]
fn test_memory_backend_from_config() {
    let mut app = App::new();
    app.add_plugins((ConfigPlugin, EditorPlugin));
    app.insert_resource(ActionEditorState::new(asset()));
    app.update();

    select(&mut app, EditorSelection::action(0, 0));
    send(&mut app, CopyRequest::default());

    let clipboard = app.world().resource::<ActionClipboard>();
    assert_eq!(clipboard.copied_kind(), Some(CopiedKind::Action));
}
