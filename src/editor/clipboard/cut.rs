//! Cut (Ctrl+X): copy, then flag the clipboard for one-shot pasting.
//!
//! Removing the cut items from the asset is up to the caller.

use crate::asset::InputActionAsset;
use crate::editor::selection::EditorSelection;

use super::copy::{CopyTarget, serialize_items};
use super::error::ClipboardResult;
use super::types::ActionClipboard;

impl ActionClipboard {
    pub fn cut(&mut self, target: &CopyTarget<'_>) -> ClipboardResult<()> {
        let buffer = serialize_items(target)?;
        self.write_buffer(&buffer, true)
    }

    /// Cut whatever is selected. Returns `false` if nothing was selected.
    pub fn cut_selection(
        &mut self,
        asset: &InputActionAsset,
        selection: &EditorSelection,
    ) -> ClipboardResult<bool> {
        let Some(target) = CopyTarget::from_selection(asset, selection) else {
            return Ok(false);
        };
        self.cut(&target)?;
        Ok(true)
    }

    /// Cut the map that owns the selection.
    pub fn cut_action_map(
        &mut self,
        asset: &InputActionAsset,
        selection: &EditorSelection,
    ) -> ClipboardResult<bool> {
        let Some(target) = CopyTarget::selected_action_map(asset, selection) else {
            return Ok(false);
        };
        self.cut(&target)?;
        Ok(true)
    }
}
