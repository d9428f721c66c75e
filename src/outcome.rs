use crate::classify::StringTracker;
use crate::error::ParseFailure;
use serde_json::Value;
use std::collections::BTreeSet;

/// Per-file classification, the only thing that outlives one file's
/// processing. Aggregated by the driver.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// Already valid. Carries the parsed document for pass-through
    /// re-formatting; semantic content is never touched.
    Unchanged { doc: Value },
    /// Valid after repair. `stages` lists, in application order, the names of
    /// the stages that actually altered the text. `dropped_keys` lists keys
    /// textually present in the source but absent from the repaired
    /// document, surfacing what a lossy stage silently discarded.
    Repaired {
        doc: Value,
        stages: Vec<&'static str>,
        dropped_keys: Vec<String>,
    },
    /// No stage chain yielded valid JSON; carries the last parse failure
    /// observed. The file must be left untouched on disk.
    Unrecoverable { failure: ParseFailure },
}

impl Outcome {
    /// The reporting word used in status lines and summary counts.
    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Unchanged { .. } => "valid",
            Outcome::Repaired { .. } => "fixed",
            Outcome::Unrecoverable { .. } => "failed",
        }
    }

    pub fn doc(&self) -> Option<&Value> {
        match self {
            Outcome::Unchanged { doc } | Outcome::Repaired { doc, .. } => Some(doc),
            Outcome::Unrecoverable { .. } => None,
        }
    }
}

/// Keys present in the source text (any depth) that the repaired document no
/// longer has. The scrape is deliberately depth-blind: nesting in corrupted
/// text is unreliable, and over-reporting scope beats missing real loss.
pub(crate) fn dropped_keys(source: &str, repaired: &Value) -> Vec<String> {
    let mut have = BTreeSet::new();
    collect_doc_keys(repaired, &mut have);
    scrape_text_keys(source)
        .into_iter()
        .filter(|k| !have.contains(k))
        .collect()
}

/// Every decodable string literal in `text` that is followed, after optional
/// whitespace, by a colon outside any string literal.
fn scrape_text_keys(text: &str) -> BTreeSet<String> {
    let bytes = text.as_bytes();
    let mut keys = BTreeSet::new();
    let mut t = StringTracker::default();
    let mut lit_start: Option<usize> = None;
    let mut i = 0usize;
    while i < bytes.len() {
        let b = bytes[i];
        let was_in = t.in_string();
        t.step(b);
        if !was_in && t.in_string() {
            lit_start = Some(i);
        } else if was_in && !t.in_string() {
            if let Some(start) = lit_start.take() {
                let mut j = i + 1;
                while j < bytes.len() && bytes[j].is_ascii_whitespace() {
                    j += 1;
                }
                if j < bytes.len()
                    && bytes[j] == b':'
                    && let Ok(key) = serde_json::from_str::<String>(&text[start..=i])
                {
                    keys.insert(key);
                }
            }
        }
        i += 1;
    }
    keys
}

fn collect_doc_keys(value: &Value, out: &mut BTreeSet<String>) {
    match value {
        Value::Object(map) => {
            for (k, v) in map {
                out.insert(k.clone());
                collect_doc_keys(v, out);
            }
        }
        Value::Array(items) => {
            for v in items {
                collect_doc_keys(v, out);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scrape_finds_keys_at_any_depth() {
        let keys = scrape_text_keys("{\"a\": {\"b\": \"x : y\", \"c\": 1}}");
        assert!(keys.contains("a") && keys.contains("b") && keys.contains("c"));
        // "x : y" is a value, not a key
        assert!(!keys.contains("x : y"));
    }

    #[test]
    fn dropped_keys_diffs_against_the_document() {
        let src = "{\"kept\": \"1\", \"lost\": [\"deep\"]}";
        let doc = json!({"kept": "1"});
        assert_eq!(dropped_keys(src, &doc), vec!["lost".to_string()]);
    }
}
