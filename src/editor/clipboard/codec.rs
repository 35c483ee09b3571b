//! Text wire format for clipboard buffers.
//!
//! ```text
//! Buffer       := "INPUTASSET " TypeTag Transmission*
//! Transmission := STX ItemBlob [RS (DepBlob US)*] EOT
//! ```
//!
//! Blobs are JSON, but the codec does not rely on that: any separator (or DLE)
//! occurring inside a blob is written as DLE followed by the character.

use std::str::CharIndices;

use crate::constants::{
    CLIPBOARD_MARKER, DEPENDENTS_MARKER, END_OF_DEPENDENT, END_OF_TRANSMISSION, ESCAPE,
    START_OF_TEXT,
};

use super::error::{ClipboardError, ClipboardResult};
use super::types::CopiedKind;

/// One copied top-level item plus the bindings that travel with it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transmission {
    pub item: String,
    /// Present for actions (all their bindings) and composites (their parts).
    pub dependents: Option<Vec<String>>,
}

impl Transmission {
    pub fn item(item: String) -> Self {
        Self {
            item,
            dependents: None,
        }
    }

    pub fn with_dependents(item: String, dependents: Vec<String>) -> Self {
        Self {
            item,
            dependents: Some(dependents),
        }
    }
}

/// A decoded clipboard buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardBuffer {
    pub kind: CopiedKind,
    pub transmissions: Vec<Transmission>,
}

impl ClipboardBuffer {
    pub fn new(kind: CopiedKind) -> Self {
        Self {
            kind,
            transmissions: Vec::new(),
        }
    }

    pub fn encode(&self) -> String {
        let mut out = String::from(CLIPBOARD_MARKER);
        out.push_str(self.kind.tag());
        for transmission in &self.transmissions {
            out.push(START_OF_TEXT);
            escape_into(&transmission.item, &mut out);
            if let Some(dependents) = &transmission.dependents {
                out.push(DEPENDENTS_MARKER);
                for dependent in dependents {
                    escape_into(dependent, &mut out);
                    out.push(END_OF_DEPENDENT);
                }
            }
            out.push(END_OF_TRANSMISSION);
        }
        out
    }

    pub fn decode(text: &str) -> ClipboardResult<Self> {
        let (kind, body) = parse_header(text)?;
        let mut tokenizer = Tokenizer {
            chars: body.char_indices(),
            base: text.len() - body.len(),
            end: text.len(),
        };

        let mut transmissions = Vec::new();
        while let Some((offset, c)) = tokenizer.chars.next() {
            if c != START_OF_TEXT {
                return Err(tokenizer.malformed(offset, "expected start of transmission"));
            }
            let (item, terminator) =
                tokenizer.read_blob(&[DEPENDENTS_MARKER, END_OF_TRANSMISSION])?;

            let dependents = if terminator == DEPENDENTS_MARKER {
                let mut dependents = Vec::new();
                loop {
                    let (blob, terminator) =
                        tokenizer.read_blob(&[END_OF_DEPENDENT, END_OF_TRANSMISSION])?;
                    if terminator == END_OF_TRANSMISSION {
                        if !blob.is_empty() {
                            return Err(tokenizer.malformed_at_end("unterminated dependent blob"));
                        }
                        break;
                    }
                    dependents.push(blob);
                }
                Some(dependents)
            } else {
                None
            };

            transmissions.push(Transmission { item, dependents });
        }

        Ok(Self {
            kind,
            transmissions,
        })
    }
}

/// Read only the marker and type tag.
///
/// This is what "is there something pastable?" checks use; the body is validated
/// when a paste actually decodes the buffer.
pub fn peek_kind(text: &str) -> ClipboardResult<CopiedKind> {
    parse_header(text).map(|(kind, _)| kind)
}

fn parse_header(text: &str) -> ClipboardResult<(CopiedKind, &str)> {
    let rest = text
        .strip_prefix(CLIPBOARD_MARKER)
        .ok_or(ClipboardError::MissingMarker)?;

    for kind in CopiedKind::ALL {
        if let Some(body) = rest.strip_prefix(kind.tag())
            && (body.is_empty() || body.starts_with(START_OF_TEXT))
        {
            return Ok((kind, body));
        }
    }

    let tag: String = rest
        .chars()
        .take_while(|c| !c.is_control())
        .take(32)
        .collect();
    Err(ClipboardError::UnknownTypeTag(tag))
}

fn is_separator(c: char) -> bool {
    matches!(
        c,
        START_OF_TEXT | END_OF_TRANSMISSION | DEPENDENTS_MARKER | END_OF_DEPENDENT | ESCAPE
    )
}

/// Append `blob` to `out`, prefixing separators and DLE with DLE.
pub fn escape_into(blob: &str, out: &mut String) {
    out.reserve(blob.len());
    for c in blob.chars() {
        if is_separator(c) {
            out.push(ESCAPE);
        }
        out.push(c);
    }
}

struct Tokenizer<'a> {
    chars: CharIndices<'a>,
    /// Byte offset of the body within the whole buffer, for error positions.
    base: usize,
    end: usize,
}

impl Tokenizer<'_> {
    /// Read an escaped blob up to one of `terminators`, which is consumed and returned.
    fn read_blob(&mut self, terminators: &[char]) -> ClipboardResult<(String, char)> {
        let mut blob = String::new();
        while let Some((offset, c)) = self.chars.next() {
            if c == ESCAPE {
                match self.chars.next() {
                    Some((_, escaped)) => blob.push(escaped),
                    None => return Err(self.malformed(offset, "dangling escape")),
                }
            } else if terminators.contains(&c) {
                return Ok((blob, c));
            } else if is_separator(c) {
                return Err(self.malformed(offset, "unexpected separator"));
            } else {
                blob.push(c);
            }
        }
        Err(self.malformed_at_end("unterminated transmission"))
    }

    fn malformed(&self, offset: usize, reason: &'static str) -> ClipboardError {
        ClipboardError::Malformed {
            offset: self.base + offset,
            reason,
        }
    }

    fn malformed_at_end(&self, reason: &'static str) -> ClipboardError {
        ClipboardError::Malformed {
            offset: self.end,
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn escaped(blob: &str) -> String {
        let mut out = String::new();
        escape_into(blob, &mut out);
        out
    }

    #[test]
    fn test_encode_layout() {
        let mut buffer = ClipboardBuffer::new(CopiedKind::Action);
        buffer.transmissions.push(Transmission::with_dependents(
            "A".to_string(),
            vec!["b1".to_string(), "b2".to_string()],
        ));

        assert_eq!(
            buffer.encode(),
            "INPUTASSET InputAction\u{2}A\u{1e}b1\u{1f}b2\u{1f}\u{4}"
        );
    }

    #[test]
    fn test_encode_without_dependents() {
        let mut buffer = ClipboardBuffer::new(CopiedKind::Binding);
        buffer.transmissions.push(Transmission::item("x".to_string()));
        assert_eq!(buffer.encode(), "INPUTASSET InputBinding\u{2}x\u{4}");
    }

    #[test]
    fn test_escape_plain_text_untouched() {
        assert_eq!(escaped(r#"{"name":"+++bindingData"}"#), r#"{"name":"+++bindingData"}"#);
    }

    #[test]
    fn test_escape_prefixes_separators() {
        assert_eq!(escaped("a\u{2}b"), "a\u{10}\u{2}b");
        assert_eq!(escaped("\u{10}"), "\u{10}\u{10}");
        assert_eq!(escaped("\u{4}\u{1e}\u{1f}"), "\u{10}\u{4}\u{10}\u{1e}\u{10}\u{1f}");
    }

    #[test]
    fn test_blob_containing_separators_survives() {
        let nasty = "end\u{4}dep\u{1e}sep\u{1f}esc\u{10}start\u{2}";
        let mut buffer = ClipboardBuffer::new(CopiedKind::Binding);
        buffer.transmissions.push(Transmission::with_dependents(
            nasty.to_string(),
            vec![nasty.to_string()],
        ));

        let decoded = ClipboardBuffer::decode(&buffer.encode()).unwrap();
        assert_eq!(decoded, buffer);
    }

    #[test]
    fn test_decode_multiple_transmissions() {
        let text = "INPUTASSET InputActionMap\u{2}m1\u{4}\u{2}m2\u{4}";
        let buffer = ClipboardBuffer::decode(text).unwrap();
        assert_eq!(buffer.kind, CopiedKind::ActionMap);
        assert_eq!(
            buffer.transmissions,
            vec![Transmission::item("m1".into()), Transmission::item("m2".into())]
        );
    }

    #[test]
    fn test_decode_empty_dependent_section() {
        let buffer = ClipboardBuffer::decode("INPUTASSET InputAction\u{2}a\u{1e}\u{4}").unwrap();
        assert_eq!(buffer.transmissions[0].dependents, Some(vec![]));
    }

    #[test]
    fn test_decode_header_only() {
        let buffer = ClipboardBuffer::decode("INPUTASSET InputBinding").unwrap();
        assert_eq!(buffer.kind, CopiedKind::Binding);
        assert!(buffer.transmissions.is_empty());
    }

    #[test]
    fn test_decode_rejects_missing_marker() {
        assert!(matches!(
            ClipboardBuffer::decode("hello world"),
            Err(ClipboardError::MissingMarker)
        ));
        assert!(matches!(peek_kind(""), Err(ClipboardError::MissingMarker)));
    }

    #[test]
    fn test_decode_rejects_unknown_tag() {
        let err = peek_kind("INPUTASSET InputDevice\u{2}x\u{4}").unwrap_err();
        match err {
            ClipboardError::UnknownTypeTag(tag) => assert_eq!(tag, "InputDevice"),
            other => panic!("unexpected error {other:?}"),
        }
        assert!(peek_kind("INPUTASSET InputActionMapping").is_err());
    }

    #[test]
    fn test_peek_kind_prefers_longest_tag() {
        assert_eq!(
            peek_kind("INPUTASSET InputActionMap\u{2}x\u{4}").unwrap(),
            CopiedKind::ActionMap
        );
        assert_eq!(
            peek_kind("INPUTASSET InputAction\u{2}x\u{4}").unwrap(),
            CopiedKind::Action
        );
    }

    #[test]
    fn test_decode_rejects_unterminated_transmission() {
        let err = ClipboardBuffer::decode("INPUTASSET InputAction\u{2}abc").unwrap_err();
        assert!(matches!(err, ClipboardError::Malformed { reason: "unterminated transmission", .. }));
    }

    #[test]
    fn test_decode_rejects_unterminated_dependent() {
        let err = ClipboardBuffer::decode("INPUTASSET InputAction\u{2}a\u{1e}b\u{4}").unwrap_err();
        assert!(matches!(err, ClipboardError::Malformed { reason: "unterminated dependent blob", .. }));
    }

    #[test]
    fn test_decode_rejects_dangling_escape() {
        let err = ClipboardBuffer::decode("INPUTASSET InputBinding\u{2}a\u{10}").unwrap_err();
        assert!(matches!(err, ClipboardError::Malformed { reason: "dangling escape", .. }));
    }

    #[test]
    fn test_decode_rejects_bytes_between_transmissions() {
        let text = "INPUTASSET InputBinding\u{2}a\u{4}junk";
        let err = ClipboardBuffer::decode(text).unwrap_err();
        match err {
            ClipboardError::Malformed { offset, reason } => {
                assert_eq!(reason, "expected start of transmission");
                assert_eq!(offset, text.find("junk").unwrap());
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn test_decode_rejects_unescaped_separator_in_item() {
        let err = ClipboardBuffer::decode("INPUTASSET InputBinding\u{2}a\u{1f}b\u{4}").unwrap_err();
        assert!(matches!(err, ClipboardError::Malformed { reason: "unexpected separator", .. }));
    }
}
