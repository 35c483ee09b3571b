//! Request messages hosts send to drive the clipboard.

use bevy::prelude::*;

/// Copy the selection (Ctrl+C). With `whole_map`, copy the selected item's map.
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct CopyRequest {
    pub whole_map: bool,
}

/// Cut the selection (Ctrl+X). The host deletes the cut items itself.
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct CutRequest {
    pub whole_map: bool,
}

/// Paste onto the selection (Ctrl+V).
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct PasteRequest {
    /// Put pasted actions after the last action instead of after the selected one
    pub append_at_end: bool,
    /// Paste actions into this map instead of the selected one
    pub map_index: Option<usize>,
}

/// Duplicate the selected action or binding (Ctrl+D).
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct DuplicateRequest;
