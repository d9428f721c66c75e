use super::Stage;
use crate::classify::{StringTracker, is_ws};
use memchr::{memchr, memrchr};
use std::borrow::Cow;

/// Collapse `{` + whitespace + optional stray comma + `}` into a canonical
/// empty object literal. String-aware.
pub struct EmptyObjects;

impl Stage for EmptyObjects {
    fn name(&self) -> &'static str {
        "empty-objects"
    }

    fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let bytes = text.as_bytes();
        let mut t = StringTracker::default();
        let mut out = String::new();
        let mut last = 0usize;
        let mut changed = false;
        let mut i = 0usize;
        while i < bytes.len() {
            let b = bytes[i];
            if t.step(b) || b != b'{' {
                i += 1;
                continue;
            }
            let mut j = i + 1;
            while j < bytes.len() && is_ws(bytes[j]) {
                j += 1;
            }
            if j < bytes.len() && bytes[j] == b',' {
                j += 1;
                while j < bytes.len() && is_ws(bytes[j]) {
                    j += 1;
                }
            }
            if j < bytes.len() && bytes[j] == b'}' && j > i + 1 {
                out.push_str(&text[last..=i]);
                last = j;
                changed = true;
                i = j;
            } else {
                i += 1;
            }
        }
        if !changed {
            return Cow::Borrowed(text);
        }
        out.push_str(&text[last..]);
        Cow::Owned(out)
    }
}

/// Append missing closers when openers outnumber them outside string
/// literals. A stack of open containers decides which closers to emit and in
/// what order. No-op when the text ends inside an unterminated string; a
/// closer cannot help there.
pub struct BalanceClosers;

impl Stage for BalanceClosers {
    fn name(&self) -> &'static str {
        "balance-closers"
    }

    fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let mut t = StringTracker::default();
        let mut stack: Vec<u8> = Vec::new();
        for b in text.bytes() {
            if t.step(b) {
                continue;
            }
            match b {
                b'{' | b'[' => stack.push(b),
                b'}' => {
                    if stack.last() == Some(&b'{') {
                        stack.pop();
                    }
                }
                b']' => {
                    if stack.last() == Some(&b'[') {
                        stack.pop();
                    }
                }
                _ => {}
            }
        }
        if stack.is_empty() || t.in_string() {
            return Cow::Borrowed(text);
        }
        let mut out = String::with_capacity(text.len() + stack.len() * 2);
        out.push_str(text.trim_end());
        for opener in stack.iter().rev() {
            out.push('\n');
            out.push(if *opener == b'{' { '}' } else { ']' });
        }
        Cow::Owned(out)
    }
}

/// Collapse runs of consecutive closing braces (whitespace-separated, outside
/// strings) into a single closing brace. Lossy and structurally risky: it can
/// silently close the wrong nesting level. Late in the chain for a reason.
pub struct CollapseClosers;

impl Stage for CollapseClosers {
    fn name(&self) -> &'static str {
        "collapse-closers"
    }

    fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let bytes = text.as_bytes();
        let mut t = StringTracker::default();
        let mut out = String::new();
        let mut last = 0usize;
        let mut changed = false;
        let mut i = 0usize;
        while i < bytes.len() {
            let b = bytes[i];
            if t.step(b) || b != b'}' {
                i += 1;
                continue;
            }
            let mut end = i + 1;
            let mut j = i + 1;
            loop {
                while j < bytes.len() && is_ws(bytes[j]) {
                    j += 1;
                }
                if j < bytes.len() && bytes[j] == b'}' {
                    j += 1;
                    end = j;
                } else {
                    break;
                }
            }
            if end > i + 1 {
                out.push_str(&text[last..=i]);
                last = end;
                changed = true;
            }
            i = end;
        }
        if !changed {
            return Cow::Borrowed(text);
        }
        out.push_str(&text[last..]);
        Cow::Owned(out)
    }
}

/// Cut the text back to the span from the first `{` to the last `}`,
/// discarding corrupted leading or trailing data. Targets the "Extra data"
/// class of parse failures.
pub struct OuterSlice;

impl Stage for OuterSlice {
    fn name(&self) -> &'static str {
        "outer-slice"
    }

    fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let bytes = text.as_bytes();
        let (Some(start), Some(end)) = (memchr(b'{', bytes), memrchr(b'}', bytes)) else {
            return Cow::Borrowed(text);
        };
        if end <= start {
            return Cow::Borrowed(text);
        }
        Cow::Borrowed(&text[start..=end])
    }
}
