//! Reconstruction: insert elements restored from blobs, with fresh identity and
//! rewritten action references.

use std::ops::Range;

use bevy::prelude::*;

use crate::asset::selectors::{composite_parts, find_binding_by_id};
use crate::asset::{AssetElement, Binding, InputActionAsset, ensure_unique_name};

use super::error::ClipboardResult;

/// Insert a new element at `index`, restored from `blob`.
///
/// Fields missing from the blob keep their defaults. The element always gets fresh
/// ids; with `unique_name` it is also renamed so no sibling shares its name.
/// Returns where the element ended up (`index` clamped to the container).
pub fn add_and_restore<T: AssetElement>(
    container: &mut Vec<T>,
    blob: &str,
    index: usize,
    unique_name: bool,
) -> ClipboardResult<usize> {
    let element: T = serde_json::from_str(blob)?;
    Ok(insert_restored(container, element, index, unique_name))
}

pub(super) fn insert_restored<T: AssetElement>(
    container: &mut Vec<T>,
    mut element: T,
    index: usize,
    unique_name: bool,
) -> usize {
    element.assign_unique_ids();
    let index = index.min(container.len());
    container.insert(index, element);
    if unique_name {
        ensure_unique_name(container, index);
    }
    index
}

/// Destination of pasted bindings.
pub(super) struct BindingPaste<'a> {
    pub map_index: usize,
    /// Every pasted binding is re-pointed at this action.
    pub action_name: &'a str,
    /// For a composite pasted without embedded parts, copy the parts that follow
    /// the original composite in the live asset.
    pub expand_live_parts: bool,
}

/// A part may only land directly after a composite or another part.
fn part_has_owner(bindings: &[Binding], index: usize) -> bool {
    index > 0
        && bindings
            .get(index - 1)
            .is_some_and(|b| b.is_composite() || b.is_part_of_composite())
}

/// Paste one binding at `index`.
///
/// Returns the range of inserted indices (the binding plus any live parts), or
/// `None` when an orphaned part was skipped.
pub(super) fn paste_binding(
    asset: &mut InputActionAsset,
    target: &BindingPaste<'_>,
    mut binding: Binding,
    index: usize,
) -> Option<Range<usize>> {
    let bindings = &asset.maps.get(target.map_index)?.bindings;
    let index = index.min(bindings.len());

    if binding.is_part_of_composite() && !part_has_owner(bindings, index) {
        debug!(
            "Skipping part binding {:?}: no composite before index {}",
            binding.name, index
        );
        return None;
    }

    // Snapshot before inserting; the original may sit in the same list
    let live_parts: Vec<Binding> = if binding.is_composite() && target.expand_live_parts {
        find_binding_by_id(asset, binding.id)
            .map(|(m, b)| composite_parts(&asset.maps[m].bindings, b).to_vec())
            .unwrap_or_default()
    } else {
        Vec::new()
    };

    binding.action = target.action_name.to_string();
    let bindings = &mut asset.maps[target.map_index].bindings;
    let index = insert_restored(bindings, binding, index, false);
    let end = paste_parts(bindings, &live_parts, index + 1, target.action_name);
    Some(index..end)
}

pub(super) fn paste_binding_blob(
    asset: &mut InputActionAsset,
    target: &BindingPaste<'_>,
    blob: &str,
    index: usize,
) -> ClipboardResult<Option<Range<usize>>> {
    let binding: Binding = serde_json::from_str(blob)?;
    Ok(paste_binding(asset, target, binding, index))
}

/// Paste a top-level binding and its embedded parts.
///
/// Returns the index after the last inserted binding and the index of the
/// top-level binding, if it was inserted. A skipped blob leaves the running index
/// where it was and the remaining blobs are still attempted.
pub(super) fn paste_binding_group(
    asset: &mut InputActionAsset,
    target: &BindingPaste<'_>,
    item: Binding,
    dependents: Option<&[String]>,
    index: usize,
) -> (usize, Option<usize>) {
    let Some(dependents) = dependents else {
        return match paste_binding(asset, target, item, index) {
            Some(range) => (range.end, Some(range.start)),
            None => (index, None),
        };
    };

    // Parts travel with the composite, so don't also copy them from the source
    let embedded = BindingPaste {
        expand_live_parts: false,
        ..*target
    };
    let (mut next, top) = match paste_binding(asset, &embedded, item, index) {
        Some(range) => (range.end, Some(range.start)),
        None => (index, None),
    };
    for blob in dependents {
        match paste_binding_blob(asset, &embedded, blob, next) {
            Ok(Some(range)) => next = range.end,
            Ok(None) => {}
            Err(e) => warn!("Skipping unreadable composite part: {}", e),
        }
    }
    (next, top)
}

/// Insert copies of `parts` starting at `index`, owned by `action_name`.
///
/// Returns the index after the last copy.
pub(super) fn paste_parts(
    bindings: &mut Vec<Binding>,
    parts: &[Binding],
    mut index: usize,
    action_name: &str,
) -> usize {
    for part in parts {
        let mut copy = part.clone();
        copy.action = action_name.to_string();
        index = insert_restored(bindings, copy, index, false) + 1;
    }
    index
}
