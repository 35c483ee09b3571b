//! Clipboard engine for copy/cut/paste/duplicate of action maps, actions and bindings.
//!
//! Selected items are serialized into a single text buffer (see [`codec`]) and
//! written to a [`ClipboardStore`]. Pasting decodes the buffer, works out where each
//! item belongs, and reconstructs it there with fresh ids, a collision-free name
//! and bindings re-pointed at their new action.
//!
//! ## Module Structure
//!
//! - [`types`] - The [`ActionClipboard`] resource, copied kinds and paste results
//! - [`codec`] - Wire format writer and tokenizer
//! - [`store`] - Backing stores (in-process, OS clipboard)
//! - [`copy`] - Serializer (Ctrl+C)
//! - [`cut`] - Cut (Ctrl+X)
//! - [`paste`] - Paste planner (Ctrl+V)
//! - [`restore`] - Element reconstruction and reference repair
//! - [`duplicate`] - In-place duplication (Ctrl+D)

pub mod codec;
mod copy;
mod cut;
mod duplicate;
mod error;
mod paste;
mod restore;
mod store;
mod types;


// Re-exports - Types
pub use codec::{ClipboardBuffer, Transmission};
pub use error::{ClipboardError, ClipboardResult};
#[cfg(feature = "system-clipboard")]
pub use store::SystemClipboard;
pub use store::{ClipboardStore, MemoryClipboard, store_for_backend};
pub use types::{ActionClipboard, CopiedKind, PastedElement};

// Re-exports - Operations
pub use copy::{CopyTarget, action_transmission, serialize_items};
pub use duplicate::{duplicate_action, duplicate_binding, duplicate_selection};
pub use paste::{paste_action, paste_action_maps, paste_actions, paste_bindings};
pub use restore::add_and_restore;
