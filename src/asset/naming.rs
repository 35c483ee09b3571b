//! Identity helpers: unique names within a container and fresh ids.

use serde::Serialize;
use serde::de::DeserializeOwned;
use uuid::Uuid;

use super::{Action, ActionMap, Binding};

/// An element stored in one of the asset's ordered containers.
pub trait AssetElement: Clone + Default + Serialize + DeserializeOwned {
    fn name(&self) -> &str;
    fn set_name(&mut self, name: String);
    fn id(&self) -> Uuid;

    /// Give the element (and anything it owns) fresh ids.
    fn assign_unique_ids(&mut self);
}

impl AssetElement for ActionMap {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn assign_unique_ids(&mut self) {
        self.id = Uuid::new_v4();
        for action in &mut self.actions {
            action.assign_unique_ids();
        }
        for binding in &mut self.bindings {
            binding.assign_unique_ids();
        }
    }
}

impl AssetElement for Action {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn assign_unique_ids(&mut self) {
        self.id = Uuid::new_v4();
    }
}

impl AssetElement for Binding {
    fn name(&self) -> &str {
        &self.name
    }

    fn set_name(&mut self, name: String) {
        self.name = name;
    }

    fn id(&self) -> Uuid {
        self.id
    }

    fn assign_unique_ids(&mut self) {
        self.id = Uuid::new_v4();
    }
}

/// Find a name based on `base` that none of `existing` uses (case-insensitive).
///
/// A free `base` is returned unchanged. Otherwise a number is appended; if `base`
/// already ends in digits, counting resumes after that number, so a taken `Fire2`
/// becomes `Fire3` and a taken `Move` becomes `Move1`.
pub fn make_unique_name<'a>(base: &str, existing: impl IntoIterator<Item = &'a str>) -> String {
    let taken: Vec<String> = existing.into_iter().map(str::to_lowercase).collect();
    let is_taken = |candidate: &str| taken.iter().any(|t| *t == candidate.to_lowercase());

    if !is_taken(base) {
        return base.to_string();
    }

    let stem = base.trim_end_matches(|c: char| c.is_ascii_digit());
    let mut counter: u64 = base[stem.len()..]
        .parse::<u64>()
        .map(|n| n.saturating_add(1))
        .unwrap_or(1);

    loop {
        let candidate = format!("{stem}{counter}");
        if !is_taken(&candidate) {
            return candidate;
        }
        counter = counter.saturating_add(1);
    }
}

/// Rename the element at `index` so no sibling in `container` shares its name.
pub fn ensure_unique_name<T: AssetElement>(container: &mut [T], index: usize) {
    let Some(element) = container.get(index) else {
        return;
    };
    let siblings = container
        .iter()
        .enumerate()
        .filter(|(i, _)| *i != index)
        .map(|(_, e)| e.name());
    let unique = make_unique_name(element.name(), siblings);
    container[index].set_name(unique);
}
