//! Wire-format constants for the clipboard buffer.
//!
//! The marker and type tags are plain text so another editor instance (or a human
//! looking at the OS clipboard) can recognise the payload. Separators are ASCII
//! control characters; blobs escape them with [`ESCAPE`].

/// Prefix of every buffer this crate writes.
pub const CLIPBOARD_MARKER: &str = "INPUTASSET ";

pub const ACTION_MAP_TAG: &str = "InputActionMap";
pub const ACTION_TAG: &str = "InputAction";
pub const BINDING_TAG: &str = "InputBinding";

/// Opens a transmission (STX).
pub const START_OF_TEXT: char = '\u{2}';

/// Closes a transmission (EOT).
pub const END_OF_TRANSMISSION: char = '\u{4}';

/// Opens the dependent-binding section of a transmission (RS).
pub const DEPENDENTS_MARKER: char = '\u{1e}';

/// Terminates one dependent binding blob (US).
pub const END_OF_DEPENDENT: char = '\u{1f}';

/// Escapes the next character inside a blob (DLE).
pub const ESCAPE: char = '\u{10}';

/// Default log filter when neither `RUST_LOG` nor the config sets one.
pub const DEFAULT_LOG_FILTER: &str = "info,actionforge=debug";
