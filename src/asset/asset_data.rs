use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The asset being edited: an ordered list of action maps.
#[derive(Resource, Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputActionAsset {
    pub name: String,
    pub maps: Vec<ActionMap>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ActionMap {
    pub name: String,
    pub id: Uuid,
    pub actions: Vec<Action>,
    /// Flat binding list. Composite grouping is positional, see [`BindingFlags`].
    pub bindings: Vec<Binding>,
}

impl ActionMap {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: Uuid::new_v4(),
            ..default()
        }
    }

    pub fn action_index(&self, name: &str) -> Option<usize> {
        self.actions.iter().position(|a| a.name == name)
    }

    /// Bindings owned by `action_name`, in map order.
    pub fn bindings_for_action<'a>(
        &'a self,
        action_name: &'a str,
    ) -> impl Iterator<Item = &'a Binding> + 'a {
        self.bindings.iter().filter(move |b| b.action == action_name)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActionType {
    #[default]
    Value,
    Button,
    PassThrough,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Action {
    pub name: String,
    pub id: Uuid,
    pub action_type: ActionType,
    pub expected_control_type: String,
    pub processors: String,
    pub interactions: String,
    pub initial_state_check: bool,
}

impl Action {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: Uuid::new_v4(),
            ..default()
        }
    }
}

/// Structural role of a binding inside the flat binding list.
///
/// A `Composite` binding owns every `PartOfComposite` binding that immediately
/// follows it, up to the first binding that is not a part.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BindingFlags {
    #[default]
    Plain,
    Composite,
    PartOfComposite,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Binding {
    pub name: String,
    pub id: Uuid,
    pub path: String,
    pub interactions: String,
    pub processors: String,
    pub groups: String,
    /// Name of the owning action.
    pub action: String,
    pub flags: BindingFlags,
}

impl Binding {
    pub fn new(action: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            path: path.into(),
            action: action.into(),
            ..default()
        }
    }

    /// A composite binding such as "1D Axis"; its parts follow via [`Binding::part`].
    pub fn composite(
        action: impl Into<String>,
        name: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            flags: BindingFlags::Composite,
            ..Self::new(action, path)
        }
    }

    pub fn part(
        action: impl Into<String>,
        name: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            flags: BindingFlags::PartOfComposite,
            ..Self::new(action, path)
        }
    }

    pub fn is_composite(&self) -> bool {
        self.flags == BindingFlags::Composite
    }

    pub fn is_part_of_composite(&self) -> bool {
        self.flags == BindingFlags::PartOfComposite
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binding_flags_default_plain() {
        let binding = Binding::default();
        assert_eq!(binding.flags, BindingFlags::Plain);
        assert!(!binding.is_composite());
        assert!(!binding.is_part_of_composite());
    }

    #[test]
    fn test_binding_constructors_set_flags() {
        let composite = Binding::composite("Move", "1D Axis", "1DAxis");
        let part = Binding::part("Move", "negative", "<Keyboard>/a");

        assert!(composite.is_composite());
        assert!(part.is_part_of_composite());
        assert_eq!(part.action, "Move");
        assert_ne!(composite.id, part.id);
    }

    #[test]
    fn test_action_map_bindings_for_action() {
        let mut map = ActionMap::new("Gameplay");
        map.actions.push(Action::new("Jump"));
        map.actions.push(Action::new("Fire"));
        map.bindings.push(Binding::new("Jump", "<Keyboard>/space"));
        map.bindings.push(Binding::new("Fire", "<Mouse>/leftButton"));
        map.bindings.push(Binding::new("Jump", "<Gamepad>/buttonSouth"));

        let paths: Vec<&str> = map
            .bindings_for_action("Jump")
            .map(|b| b.path.as_str())
            .collect();
        assert_eq!(paths, vec!["<Keyboard>/space", "<Gamepad>/buttonSouth"]);
        assert_eq!(map.action_index("Fire"), Some(1));
        assert_eq!(map.action_index("Look"), None);
    }

    #[test]
    fn test_action_serialization_roundtrip() {
        let action = Action {
            action_type: ActionType::Button,
            expected_control_type: "Button".to_string(),
            interactions: "hold".to_string(),
            ..Action::new("Jump")
        };

        let json = serde_json::to_string(&action).unwrap();
        let deserialized: Action = serde_json::from_str(&json).unwrap();

        assert_eq!(action, deserialized);
    }

    #[test]
    fn test_binding_missing_fields_default_on_deserialize() {
        let json = r#"{ "path": "<Keyboard>/w", "flags": "PartOfComposite" }"#;

        let binding: Binding = serde_json::from_str(json).unwrap();
        assert_eq!(binding.path, "<Keyboard>/w");
        assert!(binding.is_part_of_composite());
        assert!(binding.action.is_empty());
        assert!(binding.id.is_nil());
    }

    #[test]
    fn test_action_map_embeds_children() {
        let mut map = ActionMap::new("UI");
        map.actions.push(Action::new("Submit"));
        map.bindings.push(Binding::new("Submit", "<Keyboard>/enter"));

        let json = serde_json::to_string(&map).unwrap();
        let deserialized: ActionMap = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.actions.len(), 1);
        assert_eq!(deserialized.bindings[0].action, "Submit");
        assert_eq!(deserialized.id, map.id);
    }
}
