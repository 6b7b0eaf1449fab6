//! Canonical JSON encoding for deterministic serialization.
//!
//! Statements are encoded as JSON with these rules:
//! - Object keys in struct declaration order
//! - Map keys (digest sets) in sorted order
//! - Two-space indentation, one trailing newline
//! - No HTML escaping: `<`, `>` and `&` are written literally
//!
//! The same value always produces identical bytes, which is what lets an
//! external signer and a later re-encoding agree.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::{CoreError, Result};

/// Encoder settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonConfig {
    /// Spaces per indentation level.
    pub indent: usize,
    /// Append a newline after the closing brace.
    pub trailing_newline: bool,
}

impl Default for JsonConfig {
    fn default() -> Self {
        Self {
            indent: 2,
            trailing_newline: true,
        }
    }
}

/// Encode a value to canonical JSON bytes.
///
/// The value is fully encoded into memory; nothing partial is returned on
/// failure.
pub fn to_canonical_json<T>(value: &T, config: &JsonConfig) -> Result<Vec<u8>>
where
    T: Serialize + ?Sized,
{
    let indent = vec![b' '; config.indent];
    let mut buf = Vec::new();
    {
        let formatter = PrettyFormatter::with_indent(&indent);
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        value.serialize(&mut ser).map_err(CoreError::EncodingError)?;
    }
    if config.trailing_newline {
        buf.push(b'\n');
    }
    Ok(buf)
}
