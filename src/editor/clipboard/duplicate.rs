//! In-place duplication (Ctrl+D) of actions and bindings, bypassing the clipboard.

use bevy::prelude::*;

use crate::asset::selectors::composite_parts;
use crate::asset::{Binding, InputActionAsset};
use crate::editor::selection::{EditorSelection, SelectionKind};

use super::copy::action_transmission;
use super::paste::paste_action;
use super::restore::{insert_restored, paste_parts};
use super::types::{CopiedKind, PastedElement};

/// Duplicate an action and all of its bindings directly after it.
pub fn duplicate_action(
    asset: &mut InputActionAsset,
    map_index: usize,
    action_index: usize,
) -> Option<PastedElement> {
    let map = asset.maps.get(map_index)?;
    let action = map.actions.get(action_index)?;
    let transmission = match action_transmission(map, action) {
        Ok(transmission) => transmission,
        Err(e) => {
            warn!("Failed to duplicate action {:?}: {}", action.name, e);
            return None;
        }
    };

    paste_action(asset, map_index, &transmission, action_index + 1).map(|index| PastedElement {
        kind: CopiedKind::Action,
        map_index,
        index,
    })
}

/// Duplicate the binding at `source_index` into `index`, owned by `new_action_name`.
///
/// A composite is duplicated together with its parts as one contiguous block;
/// `index` is first moved past as many slots as the composite has parts, so the
/// usual `source_index + 1` lands after the existing group. Returns the index of
/// the new (composite) binding.
pub fn duplicate_binding(
    bindings: &mut Vec<Binding>,
    source_index: usize,
    new_action_name: &str,
    index: usize,
) -> Option<usize> {
    let mut copy = bindings.get(source_index)?.clone();
    copy.action = new_action_name.to_string();

    if !copy.is_composite() {
        return Some(insert_restored(bindings, copy, index, false));
    }

    let parts = composite_parts(bindings, source_index).to_vec();
    let composite = insert_restored(bindings, copy, index + parts.len(), false);
    paste_parts(bindings, &parts, composite + 1, new_action_name);
    Some(composite)
}

/// Duplicate the selected action or binding next to itself.
pub fn duplicate_selection(
    asset: &mut InputActionAsset,
    selection: &EditorSelection,
) -> Option<PastedElement> {
    let map_index = selection.map?;
    match selection.kind {
        SelectionKind::Action => duplicate_action(asset, map_index, selection.action?),
        SelectionKind::Binding => {
            let binding_index = selection.binding?;
            let bindings = &mut asset.maps.get_mut(map_index)?.bindings;
            let action_name = bindings.get(binding_index)?.action.clone();
            duplicate_binding(bindings, binding_index, &action_name, binding_index + 1).map(
                |index| PastedElement {
                    kind: CopiedKind::Binding,
                    map_index,
                    index,
                },
            )
        }
        SelectionKind::None | SelectionKind::ActionMap => None,
    }
}
