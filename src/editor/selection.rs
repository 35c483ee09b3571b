//! What the editor currently has selected in the action tree.

use crate::asset::{Action, ActionMap, Binding, InputActionAsset};

/// Kind of tree item that is selected.
#[derive(Default, Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum SelectionKind {
    #[default]
    None,
    ActionMap,
    Action,
    /// A plain, composite or part binding
    Binding,
}

/// The selected tree item, stored as indices into the asset.
///
/// `map` is set for every non-empty selection. `action` is set when an action is
/// selected and, when known, for a selected binding's owning action.
#[derive(Default, Clone, Copy, PartialEq, Eq, Debug)]
pub struct EditorSelection {
    pub kind: SelectionKind,
    pub map: Option<usize>,
    pub action: Option<usize>,
    pub binding: Option<usize>,
}

impl EditorSelection {
    pub fn action_map(map: usize) -> Self {
        Self {
            kind: SelectionKind::ActionMap,
            map: Some(map),
            ..Self::default()
        }
    }

    pub fn action(map: usize, action: usize) -> Self {
        Self {
            kind: SelectionKind::Action,
            map: Some(map),
            action: Some(action),
            binding: None,
        }
    }

    /// Select a binding, resolving its owning action index from the asset.
    pub fn binding(asset: &InputActionAsset, map: usize, binding: usize) -> Self {
        let action = asset
            .maps
            .get(map)
            .and_then(|m| m.bindings.get(binding).and_then(|b| m.action_index(&b.action)));
        Self {
            kind: SelectionKind::Binding,
            map: Some(map),
            action,
            binding: Some(binding),
        }
    }

    pub fn selected_map<'a>(&self, asset: &'a InputActionAsset) -> Option<&'a ActionMap> {
        asset.maps.get(self.map?)
    }

    pub fn selected_action<'a>(&self, asset: &'a InputActionAsset) -> Option<&'a Action> {
        self.selected_map(asset)?.actions.get(self.action?)
    }

    pub fn selected_binding<'a>(&self, asset: &'a InputActionAsset) -> Option<&'a Binding> {
        self.selected_map(asset)?.bindings.get(self.binding?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asset() -> InputActionAsset {
        let mut map = ActionMap::new("Gameplay");
        map.actions.push(Action::new("Jump"));
        map.actions.push(Action::new("Fire"));
        map.bindings.push(Binding::new("Fire", "<Mouse>/leftButton"));
        InputActionAsset {
            name: "Controls".to_string(),
            maps: vec![map],
        }
    }

    #[test]
    fn test_selection_default_is_none() {
        let selection = EditorSelection::default();
        assert_eq!(selection.kind, SelectionKind::None);
        assert!(selection.selected_map(&asset()).is_none());
    }

    #[test]
    fn test_binding_selection_resolves_action() {
        let asset = asset();
        let selection = EditorSelection::binding(&asset, 0, 0);
        assert_eq!(selection.action, Some(1));
        assert_eq!(selection.selected_action(&asset).unwrap().name, "Fire");
        assert_eq!(
            selection.selected_binding(&asset).unwrap().path,
            "<Mouse>/leftButton"
        );
    }

    #[test]
    fn test_stale_selection_resolves_to_none() {
        let asset = asset();
        assert!(EditorSelection::action(0, 7).selected_action(&asset).is_none());
        assert!(EditorSelection::action_map(3).selected_map(&asset).is_none());
        assert_eq!(EditorSelection::binding(&asset, 0, 9).action, None);
    }
}
