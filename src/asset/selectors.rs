//! Read-only lookups over the asset: composite runs, binding groups and id search.
//!
//! Composite membership is never stored. A composite at index `i` owns the run of
//! `PartOfComposite` bindings starting at `i + 1`, so every lookup here scans for
//! adjacency instead of following a parent pointer.

use uuid::Uuid;

use super::{ActionMap, Binding, InputActionAsset};

/// Index of the composite that owns the binding at `index`.
///
/// Returns `index` itself for a composite, walks back over parts for a part, and
/// returns `None` for a plain binding or a part with no composite before it.
pub fn composite_start_index(bindings: &[Binding], index: usize) -> Option<usize> {
    let binding = bindings.get(index)?;
    if binding.is_composite() {
        return Some(index);
    }
    if !binding.is_part_of_composite() {
        return None;
    }
    (0..index)
        .rev()
        .find(|&i| !bindings[i].is_part_of_composite())
        .filter(|&i| bindings[i].is_composite())
}

/// Parts belonging to the composite group that contains `index`.
pub fn composite_parts(bindings: &[Binding], index: usize) -> &[Binding] {
    let Some(start) = composite_start_index(bindings, index) else {
        return &[];
    };
    let end = composite_group_end(bindings, start);
    &bindings[start + 1..end]
}

pub fn composite_part_count(bindings: &[Binding], index: usize) -> usize {
    composite_parts(bindings, index).len()
}

/// Index just past the run of parts that follows `index`.
///
/// For a composite this is the slot after its last part; for a part it is the slot
/// after the last part of the same run; for a plain binding it is `index + 1`.
pub fn composite_group_end(bindings: &[Binding], index: usize) -> usize {
    let mut end = (index + 1).min(bindings.len());
    while end < bindings.len() && bindings[end].is_part_of_composite() {
        end += 1;
    }
    end
}

/// Where the bindings of the action at `action_index` belong: just before the
/// first binding owned by any later action, or at the end of the list.
pub fn binding_insert_index_for_action(map: &ActionMap, action_index: usize) -> usize {
    let later: Vec<&str> = map
        .actions
        .iter()
        .skip(action_index + 1)
        .map(|a| a.name.as_str())
        .collect();
    map.bindings
        .iter()
        .position(|b| later.contains(&b.action.as_str()))
        .unwrap_or(map.bindings.len())
}

/// Index just past the last binding of the action at `action_index`.
///
/// An action without bindings resolves to where its group would start.
pub fn binding_group_end(map: &ActionMap, action_index: usize) -> Option<usize> {
    let action = map.actions.get(action_index)?;
    let last = map.bindings.iter().rposition(|b| b.action == action.name);
    Some(match last {
        Some(i) => composite_group_end(&map.bindings, i),
        None => binding_insert_index_for_action(map, action_index),
    })
}

/// Locate a binding anywhere in the asset, as `(map index, binding index)`.
pub fn find_binding_by_id(asset: &InputActionAsset, id: Uuid) -> Option<(usize, usize)> {
    asset.maps.iter().enumerate().find_map(|(map_index, map)| {
        map.bindings
            .iter()
            .position(|b| b.id == id)
            .map(|binding_index| (map_index, binding_index))
    })
}
