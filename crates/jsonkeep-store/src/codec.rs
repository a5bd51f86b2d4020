//! Conversion between in-memory values and JSON text.
//!
//! Both directions normalize: decoded documents and documents about to be
//! encoded have every string rewritten to NFC.

use std::io::{self, Write};
use std::path::Path;

use jsonkeep_core::{normalize_document, Document};
use serde::Serialize;
use serde_json::ser::{Formatter, PrettyFormatter};
use serde_json::Serializer;

use crate::config::StoreConfig;
use crate::finite::Finite;
use crate::error::{Result, StoreError};

/// Parse JSON bytes read from `path` into a normalized document.
///
/// Bytes that are not UTF-8 are reported as a decode failure.
pub(crate) fn decode(bytes: &[u8], path: &Path) -> Result<Document> {
    let value: Document = serde_json::from_slice(bytes).map_err(|source| StoreError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(normalize_document(value))
}

/// Convert `data` destined for `path` into a normalized document.
///
/// NaN and infinities are rejected rather than written as `null`.
pub(crate) fn to_document<T>(data: &T, path: &Path) -> Result<Document>
where
    T: Serialize + ?Sized,
{
    let value = Finite(data)
        .serialize(serde_json::value::Serializer)
        .map_err(|source| StoreError::NotSerializable {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(normalize_document(value))
}

/// Write `doc` as indented JSON text.
///
/// A `Document` always serializes, so the only errors are I/O errors.
pub(crate) fn encode_to<W: Write>(
    writer: W,
    doc: &Document,
    config: &StoreConfig,
) -> io::Result<()> {
    let indent = vec![b' '; config.indent];
    let pretty = PrettyFormatter::with_indent(&indent);

    let result = if config.ascii_only {
        let mut ser = Serializer::with_formatter(writer, AsciiFormatter { inner: pretty });
        doc.serialize(&mut ser)
    } else {
        let mut ser = Serializer::with_formatter(writer, pretty);
        doc.serialize(&mut ser)
    };
    result.map_err(io::Error::from)
}

/// Pretty formatter that escapes everything outside ASCII as `\uXXXX`.
///
/// Characters beyond the Basic Multilingual Plane become surrogate pairs.
struct AsciiFormatter<'a> {
    inner: PrettyFormatter<'a>,
}

impl Formatter for AsciiFormatter<'_> {
    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let mut start = 0;
        for (i, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }
            writer.write_all(fragment[start..i].as_bytes())?;
            let mut units = [0u16; 2];
            for unit in ch.encode_utf16(&mut units) {
                write!(writer, "\\u{:04x}", unit)?;
            }
            start = i + ch.len_utf8();
        }
        writer.write_all(fragment[start..].as_bytes())
    }

    fn begin_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.begin_array(writer)
    }

    fn end_array<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.end_array(writer)
    }

    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.begin_array_value(writer, first)
    }

    fn end_array_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.end_array_value(writer)
    }

    fn begin_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.begin_object(writer)
    }

    fn end_object<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.end_object(writer)
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.begin_object_key(writer, first)
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.begin_object_value(writer)
    }

    fn end_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.end_object_value(writer)
    }
}
