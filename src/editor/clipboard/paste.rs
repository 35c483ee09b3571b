//! Paste (Ctrl+V): resolve the target container and index, then reconstruct.
//!
//! Each insertion shifts everything after it, so every index is computed from the
//! list as it stands after the previous insertion, never up front.

use bevy::prelude::*;

use crate::asset::selectors::{
    binding_group_end, binding_insert_index_for_action, composite_group_end,
};
use crate::asset::{Binding, InputActionAsset};
use crate::editor::selection::{EditorSelection, SelectionKind};

use super::codec::{ClipboardBuffer, Transmission};
use super::restore::{BindingPaste, add_and_restore, paste_binding_blob, paste_binding_group};
use super::types::{ActionClipboard, CopiedKind, PastedElement};

impl ActionClipboard {
    /// Paste copied action maps after the map at `insert_after` (or first, if `None`).
    ///
    /// Does nothing unless the clipboard holds action maps.
    pub fn paste_action_maps(
        &mut self,
        asset: &mut InputActionAsset,
        insert_after: Option<usize>,
    ) -> Option<PastedElement> {
        let buffer = self.read_buffer()?;
        let pasted = paste_action_maps(asset, &buffer, insert_after);
        self.finish_paste(pasted)
    }

    /// Paste copied actions or bindings relative to `selection`.
    ///
    /// Actions go after the selected action, or after the last one with
    /// `append_at_end`; `map_index` overrides the selected map. Does nothing for an
    /// action-map clipboard.
    pub fn paste_actions_or_bindings(
        &mut self,
        asset: &mut InputActionAsset,
        selection: &EditorSelection,
        append_at_end: bool,
        map_index: Option<usize>,
    ) -> Option<PastedElement> {
        let buffer = self.read_buffer()?;
        let pasted = match buffer.kind {
            CopiedKind::ActionMap => None,
            CopiedKind::Action => {
                paste_actions(asset, selection, &buffer, append_at_end, map_index)
            }
            CopiedKind::Binding => paste_bindings(asset, selection, &buffer),
        };
        self.finish_paste(pasted)
    }
}

/// Insert each transmission's map after `insert_after`, keeping the copied order.
pub fn paste_action_maps(
    asset: &mut InputActionAsset,
    buffer: &ClipboardBuffer,
    insert_after: Option<usize>,
) -> Option<PastedElement> {
    if buffer.kind != CopiedKind::ActionMap {
        return None;
    }

    let mut index = insert_after.map_or(0, |i| i.saturating_add(1));
    let mut last = None;
    for transmission in &buffer.transmissions {
        match add_and_restore(&mut asset.maps, &transmission.item, index, true) {
            Ok(map_index) => {
                index = map_index + 1;
                last = Some(map_index);
            }
            Err(e) => warn!("Skipping unreadable action map: {}", e),
        }
    }

    last.map(|index| PastedElement {
        kind: CopiedKind::ActionMap,
        map_index: index,
        index,
    })
}

pub fn paste_actions(
    asset: &mut InputActionAsset,
    selection: &EditorSelection,
    buffer: &ClipboardBuffer,
    append_at_end: bool,
    map_index: Option<usize>,
) -> Option<PastedElement> {
    if buffer.kind != CopiedKind::Action {
        return None;
    }

    let map_index = map_index.or(selection.map)?;
    let actions = &asset.maps.get(map_index)?.actions;
    // The selected action index only means something inside the selected map
    let insert_after = if append_at_end || selection.map != Some(map_index) {
        actions.len().checked_sub(1)
    } else {
        selection.action
    };

    let mut index = insert_after.map_or(0, |i| i.saturating_add(1));
    let mut last = None;
    for transmission in &buffer.transmissions {
        if let Some(pasted) = paste_action(asset, map_index, transmission, index) {
            index = pasted + 1;
            last = Some(pasted);
        }
    }

    last.map(|index| PastedElement {
        kind: CopiedKind::Action,
        map_index,
        index,
    })
}

/// Reconstruct one action at `index` in map `map_index`, then its bindings.
///
/// The action gets a unique name first; its bindings are then pointed at that name
/// and placed just before the bindings of the actions that follow it.
pub fn paste_action(
    asset: &mut InputActionAsset,
    map_index: usize,
    transmission: &Transmission,
    index: usize,
) -> Option<usize> {
    let map = asset.maps.get_mut(map_index)?;
    let action_index = match add_and_restore(&mut map.actions, &transmission.item, index, true) {
        Ok(action_index) => action_index,
        Err(e) => {
            warn!("Skipping unreadable action: {}", e);
            return None;
        }
    };
    let action_name = map.actions[action_index].name.clone();
    let mut binding_index = binding_insert_index_for_action(map, action_index);

    // Composites inside an action are followed by their parts in the same list
    let target = BindingPaste {
        map_index,
        action_name: &action_name,
        expand_live_parts: false,
    };
    for blob in transmission.dependents.iter().flatten() {
        match paste_binding_blob(asset, &target, blob, binding_index) {
            Ok(Some(range)) => binding_index = range.end,
            Ok(None) => {}
            Err(e) => warn!("Skipping unreadable binding of {:?}: {}", action_name, e),
        }
    }

    debug!("Pasted action {:?} at index {}", action_name, action_index);
    Some(action_index)
}

/// Paste bindings next to the selection.
///
/// With an action selected they go to the end of its bindings. With a binding
/// selected they go after its composite group; a part goes directly after the
/// selected binding so it joins that composite. Later items follow the previous
/// one, except that a non-part item skips past any part run it would split.
pub fn paste_bindings(
    asset: &mut InputActionAsset,
    selection: &EditorSelection,
    buffer: &ClipboardBuffer,
) -> Option<PastedElement> {
    if buffer.kind != CopiedKind::Binding {
        return None;
    }

    let map_index = selection.map?;
    let map = asset.maps.get(map_index)?;
    let (action_name, group_end, selected_binding) = match selection.kind {
        SelectionKind::Action => {
            let action_index = selection.action?;
            let action = map.actions.get(action_index)?;
            (
                action.name.clone(),
                binding_group_end(map, action_index)?,
                None,
            )
        }
        SelectionKind::Binding => {
            let binding_index = selection.binding?;
            let binding = map.bindings.get(binding_index)?;
            (
                binding.action.clone(),
                composite_group_end(&map.bindings, binding_index),
                Some(binding_index),
            )
        }
        SelectionKind::None | SelectionKind::ActionMap => return None,
    };

    let target = BindingPaste {
        map_index,
        action_name: &action_name,
        expand_live_parts: true,
    };
    let mut next: Option<usize> = None;
    let mut last = None;
    for transmission in &buffer.transmissions {
        let item: Binding = match serde_json::from_str(&transmission.item) {
            Ok(item) => item,
            Err(e) => {
                warn!("Skipping unreadable binding: {}", e);
                continue;
            }
        };
        let index = match (next, selected_binding) {
            // Parts continue the run they were pasted into
            (Some(next), _) if item.is_part_of_composite() => next,
            // Anything else must not split a part run
            (Some(next), _) => {
                let bindings = &asset.maps[map_index].bindings;
                next.checked_sub(1)
                    .map_or(0, |prev| composite_group_end(bindings, prev))
            }
            (None, Some(selected)) if item.is_part_of_composite() => selected + 1,
            (None, _) => group_end,
        };

        let (after, top) =
            paste_binding_group(asset, &target, item, transmission.dependents.as_deref(), index);
        next = Some(after);
        if top.is_some() {
            last = top;
        }
    }

    last.map(|index| PastedElement {
        kind: CopiedKind::Binding,
        map_index,
        index,
    })
}
