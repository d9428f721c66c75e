use super::Stage;
use crate::classify::StringTracker;
use memchr::memchr;
use std::borrow::Cow;

/// Last-resort reconstruction. Scans line by line, keeps the lines that look
/// like a quoted key, a colon, and a quoted string value, and rebuilds a flat
/// object from those pairs alone. Each key and value literal is revalidated
/// through the JSON grammar before use, so the rebuilt text always parses.
///
/// Explicitly destructive: nested arrays, multi-line values, and non-string
/// scalars are dropped without a trace here. The pipeline surfaces the loss
/// afterwards by diffing the keys of the result against the source text.
pub struct Salvage;

impl Stage for Salvage {
    fn name(&self) -> &'static str {
        "salvage"
    }

    fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let mut pairs: Vec<(&str, &str)> = Vec::new();
        for line in text.lines() {
            if let Some(pair) = scrape_pair(line) {
                pairs.push(pair);
            }
        }
        if pairs.is_empty() {
            // Nothing recognizable; leave the text alone so pure garbage
            // still classifies as unrecoverable.
            return Cow::Borrowed(text);
        }
        let mut out = String::with_capacity(text.len());
        out.push_str("{\n");
        for (i, (key, value)) in pairs.iter().enumerate() {
            if i > 0 {
                out.push_str(",\n");
            }
            out.push_str("  ");
            out.push_str(key);
            out.push_str(": ");
            out.push_str(value);
        }
        out.push_str("\n}");
        Cow::Owned(out)
    }
}

/// Extract a `"key": "value"` pair from one physical line, or None when the
/// line is anything else (bare braces, comments, array openers, garbage).
/// Both literals must individually pass the JSON string grammar.
fn scrape_pair(line: &str) -> Option<(&str, &str)> {
    let bytes = line.as_bytes();
    let start = memchr(b'"', bytes)?;
    let key_end = string_end(bytes, start)?;
    let key = &line[start..=key_end];

    let mut i = key_end + 1;
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    if i >= bytes.len() || bytes[i] != b':' {
        return None;
    }
    i += 1;
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    if i >= bytes.len() || bytes[i] != b'"' {
        return None;
    }
    let value_end = string_end(bytes, i)?;
    let value = &line[i..=value_end];

    // Only whitespace and an optional comma may follow the value.
    let rest = line[value_end + 1..].trim();
    if !(rest.is_empty() || rest == ",") {
        return None;
    }

    let valid = |lit: &str| serde_json::from_str::<String>(lit).is_ok();
    (valid(key) && valid(value)).then_some((key, value))
}

/// Index of the closing quote of the string literal opening at `start`.
fn string_end(bytes: &[u8], start: usize) -> Option<usize> {
    let mut t = StringTracker::default();
    t.step(bytes[start]);
    for (i, &b) in bytes.iter().enumerate().skip(start + 1) {
        t.step(b);
        if !t.in_string() {
            return Some(i);
        }
    }
    None
}
