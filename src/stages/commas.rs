use super::Stage;
use crate::classify::{StringTracker, is_closer, is_ws};
use std::borrow::Cow;

/// Delete any comma that appears, ignoring intervening whitespace, directly
/// before a closing `}` or `]`. String-aware: a `,}` inside a string literal
/// is content, not syntax. Idempotent; never removes required content.
pub struct TrailingCommas;

impl Stage for TrailingCommas {
    fn name(&self) -> &'static str {
        "trailing-commas"
    }

    fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        let bytes = text.as_bytes();
        let mut t = StringTracker::default();
        let mut out = String::new();
        let mut last = 0usize;
        let mut changed = false;
        for (i, &b) in bytes.iter().enumerate() {
            if t.step(b) {
                continue;
            }
            if b == b',' {
                let mut j = i + 1;
                while j < bytes.len() && is_ws(bytes[j]) {
                    j += 1;
                }
                if j < bytes.len() && is_closer(bytes[j]) {
                    out.push_str(&text[last..i]);
                    last = i + 1;
                    changed = true;
                }
            }
        }
        if !changed {
            return Cow::Borrowed(text);
        }
        out.push_str(&text[last..]);
        Cow::Owned(out)
    }
}

/// Drop physical lines consisting solely of a comma. These show up when a
/// property between two commas was deleted wholesale.
pub struct StrayCommaLines;

impl Stage for StrayCommaLines {
    fn name(&self) -> &'static str {
        "stray-comma-lines"
    }

    fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        if !text.lines().any(|l| l.trim() == ",") {
            return Cow::Borrowed(text);
        }
        let kept: Vec<&str> = text.split('\n').filter(|l| l.trim() != ",").collect();
        Cow::Owned(kept.join("\n"))
    }
}

/// When a line ends in a closing quote and the next non-empty line begins
/// with a quote (and is not a closing delimiter or already comma-prefixed),
/// append a comma to the first line. A physical-line heuristic, not grammar:
/// it assumes one property per line and will misfire on multi-line string
/// values. Accepted by design.
pub struct MissingPairCommas;

impl Stage for MissingPairCommas {
    fn name(&self) -> &'static str {
        "missing-pair-commas"
    }

    fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        insert_line_commas(text, |trimmed| trimmed.len() > 1 && trimmed.ends_with('"'))
    }
}

/// Same rule for a line ending in `}` or `]` followed by a quoted-key line.
pub struct MissingCloserCommas;

impl Stage for MissingCloserCommas {
    fn name(&self) -> &'static str {
        "missing-closer-commas"
    }

    fn apply<'a>(&self, text: &'a str) -> Cow<'a, str> {
        insert_line_commas(text, |trimmed| {
            trimmed.ends_with('}') || trimmed.ends_with(']')
        })
    }
}

fn insert_line_commas<'a>(text: &'a str, ends_pair: impl Fn(&str) -> bool) -> Cow<'a, str> {
    let lines: Vec<&str> = text.split('\n').collect();
    let mut needs_comma = vec![false; lines.len()];
    let mut changed = false;
    for i in 0..lines.len() {
        let trimmed = lines[i].trim_end_matches('\r').trim();
        if !ends_pair(trimmed) {
            continue;
        }
        let Some(next) = lines[i + 1..]
            .iter()
            .map(|l| l.trim_end_matches('\r').trim())
            .find(|l| !l.is_empty())
        else {
            continue;
        };
        if next.starts_with('"')
            && !next.starts_with('}')
            && !next.starts_with(']')
            && !next.starts_with(',')
        {
            needs_comma[i] = true;
            changed = true;
        }
    }
    if !changed {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len() + 8);
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        if needs_comma[i] {
            // Keep a trailing CR after the inserted comma.
            if let Some(body) = line.strip_suffix('\r') {
                out.push_str(body);
                out.push(',');
                out.push('\r');
            } else {
                out.push_str(line);
                out.push(',');
            }
        } else {
            out.push_str(line);
        }
    }
    Cow::Owned(out)
}

/// Delete commas that appear, ignoring whitespace, directly after an opening
/// `{`. String-aware.
pub struct LeadingCommas;

impl Stage for LeadingCommas {
    fn name(&self) -> &'static str {
        "leading-commas"
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
            // Drop every ws-separated comma directly after the brace.
            let mut j = i + 1;
            loop {
                while j < bytes.len() && is_ws(bytes[j]) {
                    j += 1;
                }
                if j < bytes.len() && bytes[j] == b',' {
                    out.push_str(&text[last..j]);
                    last = j + 1;
                    changed = true;
                    j += 1;
                } else {
                    break;
                }
            }
            i = j;
        }
        if !changed {
            return Cow::Borrowed(text);
        }
        out.push_str(&text[last..]);
        Cow::Owned(out)
    }
}
