//! Systems that apply clipboard request messages to the editor state.

use bevy::prelude::*;

use crate::config::EditorConfig;

use super::clipboard::{
    ActionClipboard, CopiedKind, PastedElement, duplicate_selection, store_for_backend,
};
use super::messages::{CopyRequest, CutRequest, DuplicateRequest, PasteRequest};
use super::selection::{EditorSelection, SelectionKind};
use super::ActionEditorState;

/// Startup system: back the clipboard with the configured store
pub fn configure_clipboard_store(
    config: Option<Res<EditorConfig>>,
    mut clipboard: ResMut<ActionClipboard>,
) {
    if let Some(config) = config {
        clipboard.set_store(store_for_backend(config.data.clipboard_backend));
        debug!("Clipboard backend: {:?}", config.data.clipboard_backend);
    }
}

pub fn handle_copy(
    mut events: MessageReader<CopyRequest>,
    mut clipboard: ResMut<ActionClipboard>,
    state: Res<ActionEditorState>,
) {
    for request in events.read() {
        let result = if request.whole_map {
            clipboard.copy_action_map(&state.asset, &state.selection)
        } else {
            clipboard.copy_selection(&state.asset, &state.selection)
        };
        match result {
            Ok(true) => {}
            Ok(false) => debug!("Nothing selected to copy"),
            Err(e) => error!("Copy failed: {}", e),
        }
    }
}

pub fn handle_cut(
    mut events: MessageReader<CutRequest>,
    mut clipboard: ResMut<ActionClipboard>,
    state: Res<ActionEditorState>,
) {
    for request in events.read() {
        let result = if request.whole_map {
            clipboard.cut_action_map(&state.asset, &state.selection)
        } else {
            clipboard.cut_selection(&state.asset, &state.selection)
        };
        match result {
            Ok(true) => {}
            Ok(false) => debug!("Nothing selected to cut"),
            Err(e) => error!("Cut failed: {}", e),
        }
    }
}

pub fn handle_paste(
    mut events: MessageReader<PasteRequest>,
    mut clipboard: ResMut<ActionClipboard>,
    mut state: ResMut<ActionEditorState>,
) {
    let state = &mut *state;
    for request in events.read() {
        // Pasting into an explicit map behaves like pasting onto that map
        let selected_kind = if request.map_index.is_some() {
            SelectionKind::ActionMap
        } else {
            state.selection.kind
        };
        if !clipboard.has_pastable_data(selected_kind) {
            debug!("Clipboard has nothing pastable onto {:?}", selected_kind);
            continue;
        }

        let pasted = if clipboard.copied_kind() == Some(CopiedKind::ActionMap) {
            let insert_after = request.map_index.or(state.selection.map);
            clipboard.paste_action_maps(&mut state.asset, insert_after)
        } else {
            clipboard.paste_actions_or_bindings(
                &mut state.asset,
                &state.selection,
                request.append_at_end,
                request.map_index,
            )
        };

        if let Some(pasted) = pasted {
            state.selection = selection_for(&state.asset, pasted);
            info!("Pasted {:?} at {:?}", pasted.kind, pasted.index);
        }
    }
}

pub fn handle_duplicate(
    mut events: MessageReader<DuplicateRequest>,
    mut state: ResMut<ActionEditorState>,
) {
    let state = &mut *state;
    for _ in events.read() {
        if let Some(duplicated) = duplicate_selection(&mut state.asset, &state.selection) {
            state.selection = selection_for(&state.asset, duplicated);
        }
    }
}

/// Selection pointing at a freshly pasted element.
fn selection_for(asset: &crate::asset::InputActionAsset, pasted: PastedElement) -> EditorSelection {
    match pasted.kind {
        CopiedKind::ActionMap => EditorSelection::action_map(pasted.index),
        CopiedKind::Action => EditorSelection::action(pasted.map_index, pasted.index),
        CopiedKind::Binding => EditorSelection::binding(asset, pasted.map_index, pasted.index),
    }
}
