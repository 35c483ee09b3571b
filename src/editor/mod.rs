pub mod clipboard;
mod messages;
pub mod selection;
mod systems;

#[cfg(test)]
mod tests;

pub use clipboard::{ActionClipboard, CopiedKind, PastedElement};
pub use messages::{CopyRequest, CutRequest, DuplicateRequest, PasteRequest};
pub use selection::{EditorSelection, SelectionKind};

use bevy::prelude::*;

use crate::asset::InputActionAsset;
use crate::config::ConfigLoaded;

/// The asset being edited and the current tree selection
#[derive(Resource, Default)]
pub struct ActionEditorState {
    pub asset: InputActionAsset,
    pub selection: EditorSelection,
}

impl ActionEditorState {
    pub fn new(asset: InputActionAsset) -> Self {
        Self {
            asset,
            selection: EditorSelection::default(),
        }
    }
}

pub struct EditorPlugin;

impl Plugin for EditorPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ActionEditorState>()
            .init_resource::<ActionClipboard>()
            .add_message::<CopyRequest>()
            .add_message::<CutRequest>()
            .add_message::<PasteRequest>()
            .add_message::<DuplicateRequest>()
            .add_systems(
                Startup,
                systems::configure_clipboard_store.after(ConfigLoaded),
            )
            .add_systems(
                Update,
                (
                    systems::handle_copy.run_if(on_message::<CopyRequest>),
                    systems::handle_cut.run_if(on_message::<CutRequest>),
                    systems::handle_paste.run_if(on_message::<PasteRequest>),
                    systems::handle_duplicate.run_if(on_message::<DuplicateRequest>),
                )
                    .chain(),
            );
    }
}
