//! Serializer: turns selected items into transmissions and writes them to the clipboard.

use bevy::prelude::*;

use crate::asset::selectors::composite_parts;
use crate::asset::{Action, ActionMap, Binding, InputActionAsset};
use crate::editor::selection::{EditorSelection, SelectionKind};

use super::codec::{ClipboardBuffer, Transmission};
use super::error::ClipboardResult;
use super::types::{ActionClipboard, CopiedKind};

/// The items to copy, all of one kind.
#[derive(Debug, Clone)]
pub enum CopyTarget<'a> {
    ActionMaps(Vec<&'a ActionMap>),
    /// Actions of `map`, by index. Each carries all of its bindings.
    Actions { map: &'a ActionMap, indices: Vec<usize> },
    /// Bindings of `map`, by index. A composite carries its parts.
    Bindings { map: &'a ActionMap, indices: Vec<usize> },
}

impl<'a> CopyTarget<'a> {
    /// The selected map, action or binding; `None` if nothing (valid) is selected.
    pub fn from_selection(
        asset: &'a InputActionAsset,
        selection: &EditorSelection,
    ) -> Option<Self> {
        let map = selection.selected_map(asset)?;
        match selection.kind {
            SelectionKind::None => None,
            SelectionKind::ActionMap => Some(CopyTarget::ActionMaps(vec![map])),
            SelectionKind::Action => {
                let index = selection.action.filter(|&i| i < map.actions.len())?;
                Some(CopyTarget::Actions {
                    map,
                    indices: vec![index],
                })
            }
            SelectionKind::Binding => {
                let index = selection.binding.filter(|&i| i < map.bindings.len())?;
                Some(CopyTarget::Bindings {
                    map,
                    indices: vec![index],
                })
            }
        }
    }

    /// The map that owns the selection, whatever is selected inside it.
    pub fn selected_action_map(
        asset: &'a InputActionAsset,
        selection: &EditorSelection,
    ) -> Option<Self> {
        selection
            .selected_map(asset)
            .map(|map| CopyTarget::ActionMaps(vec![map]))
    }

    pub fn kind(&self) -> CopiedKind {
        match self {
            CopyTarget::ActionMaps(_) => CopiedKind::ActionMap,
            CopyTarget::Actions { .. } => CopiedKind::Action,
            CopyTarget::Bindings { .. } => CopiedKind::Binding,
        }
    }
}

/// Build the buffer for `target`: one transmission per item, in the given order.
///
/// Out-of-range indices are skipped.
pub fn serialize_items(target: &CopyTarget<'_>) -> ClipboardResult<ClipboardBuffer> {
    let mut buffer = ClipboardBuffer::new(target.kind());

    match target {
        CopyTarget::ActionMaps(maps) => {
            for map in maps {
                buffer
                    .transmissions
                    .push(Transmission::item(serde_json::to_string(map)?));
            }
        }
        CopyTarget::Actions { map, indices } => {
            for action in indices.iter().filter_map(|&i| map.actions.get(i)) {
                buffer.transmissions.push(action_transmission(map, action)?);
            }
        }
        CopyTarget::Bindings { map, indices } => {
            for &index in indices {
                if index < map.bindings.len() {
                    buffer
                        .transmissions
                        .push(binding_transmission(&map.bindings, index)?);
                }
            }
        }
    }

    Ok(buffer)
}

/// An action followed by every binding it owns, in map order.
pub fn action_transmission(map: &ActionMap, action: &Action) -> ClipboardResult<Transmission> {
    let dependents = map
        .bindings_for_action(&action.name)
        .map(serde_json::to_string)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Transmission::with_dependents(
        serde_json::to_string(action)?,
        dependents,
    ))
}

/// A binding; a composite also carries the parts that follow it.
fn binding_transmission(bindings: &[Binding], index: usize) -> ClipboardResult<Transmission> {
    let binding = &bindings[index];
    let item = serde_json::to_string(binding)?;
    if !binding.is_composite() {
        return Ok(Transmission::item(item));
    }
    let dependents = composite_parts(bindings, index)
        .iter()
        .map(serde_json::to_string)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(Transmission::with_dependents(item, dependents))
}

impl ActionClipboard {
    /// Copy `target` to the clipboard (Ctrl+C), replacing whatever was there.
    pub fn copy(&mut self, target: &CopyTarget<'_>) -> ClipboardResult<()> {
        let buffer = serialize_items(target)?;
        self.write_buffer(&buffer, false)?;
        debug!(
            "Copied {} {:?} item(s) to clipboard",
            buffer.transmissions.len(),
            buffer.kind
        );
        Ok(())
    }

    /// Copy whatever is selected. Returns `false` if nothing was selected.
    pub fn copy_selection(
        &mut self,
        asset: &InputActionAsset,
        selection: &EditorSelection,
    ) -> ClipboardResult<bool> {
        let Some(target) = CopyTarget::from_selection(asset, selection) else {
            return Ok(false);
        };
        self.copy(&target)?;
        Ok(true)
    }

    /// Copy the map that owns the selection.
    pub fn copy_action_map(
        &mut self,
        asset: &InputActionAsset,
        selection: &EditorSelection,
    ) -> ClipboardResult<bool> {
        let Some(target) = CopyTarget::selected_action_map(asset, selection) else {
            return Ok(false);
        };
        self.copy(&target)?;
        Ok(true)
    }
}
