//! Clipboard data types: the session clipboard, what was copied, and where a paste landed.

use bevy::prelude::*;

use crate::constants::{ACTION_MAP_TAG, ACTION_TAG, BINDING_TAG};
use crate::editor::selection::SelectionKind;

use super::codec::{ClipboardBuffer, peek_kind};
use super::error::ClipboardResult;
use super::store::{ClipboardStore, MemoryClipboard};

/// Resource holding the session's clipboard store and the cut flag.
///
/// Construct one per editing session. Copy and cut overwrite the store; a paste
/// that follows a cut empties it again so the cut items can only be pasted once.
#[derive(Resource)]
pub struct ActionClipboard {
    store: Box<dyn ClipboardStore>,
    last_action_was_cut: bool,
}

impl Default for ActionClipboard {
    fn default() -> Self {
        Self::new(MemoryClipboard::default())
    }
}

impl ActionClipboard {
    pub fn new(store: impl ClipboardStore + 'static) -> Self {
        Self::with_store(Box::new(store))
    }

    pub fn with_store(store: Box<dyn ClipboardStore>) -> Self {
        Self {
            store,
            last_action_was_cut: false,
        }
    }

    /// Swap the backing store, keeping the cut flag.
    pub fn set_store(&mut self, store: Box<dyn ClipboardStore>) {
        self.store = store;
    }

    pub fn store(&self) -> &dyn ClipboardStore {
        self.store.as_ref()
    }

    pub fn store_mut(&mut self) -> &mut dyn ClipboardStore {
        self.store.as_mut()
    }

    pub fn last_action_was_cut(&self) -> bool {
        self.last_action_was_cut
    }

    /// Kind of item on the clipboard, or `None` if the text isn't ours.
    pub fn copied_kind(&self) -> Option<CopiedKind> {
        let text = self.store.read_text().ok()?;
        peek_kind(&text).ok()
    }

    /// Whether the clipboard holds something that can be pasted onto `selected`.
    pub fn has_pastable_data(&self, selected: SelectionKind) -> bool {
        self.copied_kind()
            .is_some_and(|kind| kind.can_paste_into(selected))
    }

    pub(super) fn write_buffer(
        &mut self,
        buffer: &ClipboardBuffer,
        cut: bool,
    ) -> ClipboardResult<()> {
        self.store.write_text(&buffer.encode())?;
        self.last_action_was_cut = cut;
        Ok(())
    }

    /// Read and fully decode the clipboard. Anything unreadable is "nothing to paste".
    pub(super) fn read_buffer(&self) -> Option<ClipboardBuffer> {
        let text = match self.store.read_text() {
            Ok(text) => text,
            Err(e) => {
                warn!("Failed to read clipboard: {}", e);
                return None;
            }
        };
        match ClipboardBuffer::decode(&text) {
            Ok(buffer) => Some(buffer),
            Err(e) => {
                debug!("Clipboard is not pastable: {}", e);
                None
            }
        }
    }

    /// Empty the clipboard after the first successful paste following a cut.
    pub(super) fn finish_paste(&mut self, pasted: Option<PastedElement>) -> Option<PastedElement> {
        if pasted.is_some() && self.last_action_was_cut {
            if let Err(e) = self.store.write_text("") {
                warn!("Failed to clear clipboard after cut-paste: {}", e);
            }
            self.last_action_was_cut = false;
            debug!("Cleared clipboard after pasting cut items");
        }
        pasted
    }
}

/// Kind of top-level item a clipboard buffer holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CopiedKind {
    ActionMap,
    Action,
    Binding,
}

impl CopiedKind {
    /// Tags in the order they must be matched: `InputAction` is a prefix of
    /// `InputActionMap`, so the longer tag goes first.
    pub const ALL: [CopiedKind; 3] = [
        CopiedKind::ActionMap,
        CopiedKind::Action,
        CopiedKind::Binding,
    ];

    pub fn tag(&self) -> &'static str {
        match self {
            CopiedKind::ActionMap => ACTION_MAP_TAG,
            CopiedKind::Action => ACTION_TAG,
            CopiedKind::Binding => BINDING_TAG,
        }
    }

    /// Whether items of this kind can be pasted while `selected` is selected.
    ///
    /// | selected   | accepts              |
    /// |------------|----------------------|
    /// | ActionMap  | ActionMap, Action    |
    /// | Action     | Action, Binding      |
    /// | Binding    | Binding              |
    pub fn can_paste_into(&self, selected: SelectionKind) -> bool {
        match selected {
            SelectionKind::None => false,
            SelectionKind::ActionMap => {
                matches!(self, CopiedKind::ActionMap | CopiedKind::Action)
            }
            SelectionKind::Action => matches!(self, CopiedKind::Action | CopiedKind::Binding),
            SelectionKind::Binding => *self == CopiedKind::Binding,
        }
    }
}

/// Location of the last top-level element a paste or duplicate created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PastedElement {
    pub kind: CopiedKind,
    /// Map holding the element; for an action map this equals `index`.
    pub map_index: usize,
    /// Index in the map list, the map's action list or its binding list.
    pub index: usize,
}
