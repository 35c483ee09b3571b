//! Copy, cut, paste and duplicate for input action assets.
//!
//! An [`InputActionAsset`](asset::InputActionAsset) holds action maps; each map
//! owns its actions and a flat binding list in which composite bindings are
//! immediately followed by their parts. The [`editor::clipboard`] engine moves
//! any of these through a text clipboard and rebuilds them with fresh ids,
//! unique names and repaired action references.
//!
//! Hosts either call the engine directly or add [`EditorPlugin`] (and optionally
//! [`ConfigPlugin`]) to a Bevy `App` and drive it with request messages.

pub mod asset;
pub mod config;
pub mod constants;
pub mod editor;
pub mod logging;
pub mod paths;

pub use config::{ConfigPlugin, EditorConfig};
pub use editor::{ActionClipboard, ActionEditorState, EditorPlugin};
