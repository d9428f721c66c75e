use crate::options::Options;
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{Formatter, PrettyFormatter, Serializer};
use std::io::{self, Write};

/// Canonical serialization: two-space indent, non-ASCII preserved literally
/// (unless `ensure_ascii`), exactly one trailing newline. This is the single
/// writer of repaired text; the validity guarantee is checked against its
/// output.
pub fn to_pretty_string(doc: &Value, opts: &Options) -> String {
    let mut buf = Vec::with_capacity(256);
    let result = if opts.ensure_ascii {
        let mut ser = Serializer::with_formatter(&mut buf, AsciiPretty::default());
        doc.serialize(&mut ser)
    } else {
        let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::new());
        doc.serialize(&mut ser)
    };
    // A Vec sink never fails and a Value has no unserializable shapes.
    result.expect("serializing a Value into memory cannot fail");
    buf.push(b'\n');
    String::from_utf8(buf).expect("serde_json emits valid UTF-8")
}

/// Pretty formatter that escapes every non-ASCII character as \uXXXX, with
/// surrogate pairs for astral code points.
struct AsciiPretty<'a> {
    inner: PrettyFormatter<'a>,
}

impl Default for AsciiPretty<'_> {
    fn default() -> Self {
        Self {
            inner: PrettyFormatter::new(),
        }
    }
}

impl Formatter for AsciiPretty<'_> {
    fn begin_array<W>(&mut self, w: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.begin_array(w)
    }

    fn end_array<W>(&mut self, w: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.end_array(w)
    }

    fn begin_array_value<W>(&mut self, w: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.begin_array_value(w, first)
    }

    fn end_array_value<W>(&mut self, w: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.end_array_value(w)
    }

    fn begin_object<W>(&mut self, w: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.begin_object(w)
    }

    fn end_object<W>(&mut self, w: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.end_object(w)
    }

    fn begin_object_key<W>(&mut self, w: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.begin_object_key(w, first)
    }

    fn begin_object_value<W>(&mut self, w: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.begin_object_value(w)
    }

    fn end_object_value<W>(&mut self, w: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        self.inner.end_object_value(w)
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        let mut start = 0usize;
        let bytes = fragment.as_bytes();
        for (i, ch) in fragment.char_indices() {
            if ch.is_ascii() {
                continue;
            }
            if i > start {
                writer.write_all(&bytes[start..i])?;
            }
            let cp = ch as u32;
            if cp <= 0xFFFF {
                write!(writer, "\\u{:04X}", cp)?;
            } else {
                let v = cp - 0x10000;
                let high = 0xD800 + ((v >> 10) & 0x3FF);
                let low = 0xDC00 + (v & 0x3FF);
                write!(writer, "\\u{:04X}\\u{:04X}", high, low)?;
            }
            start = i + ch.len_utf8();
        }
        if start < fragment.len() {
            writer.write_all(&bytes[start..])?;
        }
        Ok(())
    }
}
