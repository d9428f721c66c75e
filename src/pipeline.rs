use crate::error::ParseFailure;
use crate::options::Options;
use crate::outcome::{Outcome, dropped_keys};
use crate::stages::default_stages;
use serde_json::Value;
use std::borrow::Cow;

/// Repair one file's text. Pure: no I/O, no panics on malformed input;
/// malformed input is the expected case and classifies as `Unrecoverable`.
///
/// Fast path first: text that already parses comes back `Unchanged`. On
/// failure the ordered stage chain is applied cumulatively, re-parsing after
/// every stage that altered the text, and the first parse success wins. The
/// full canonical chain is always walked in order; there is no search for a
/// minimal fix.
pub fn repair(text: &str, opts: &Options) -> Outcome {
    let mut last_failure = match serde_json::from_str::<Value>(text) {
        Ok(doc) => return Outcome::Unchanged { doc },
        Err(e) => ParseFailure::from_serde(&e),
    };

    let mut current: Cow<'_, str> = Cow::Borrowed(text);
    let mut applied: Vec<&'static str> = Vec::new();
    for stage in default_stages(opts) {
        let next = match stage.apply(&current) {
            // A stage that did not touch the text cannot change the parse
            // result; skip the re-parse and keep it out of the record.
            Cow::Borrowed(s) if s.len() == current.len() => continue,
            Cow::Borrowed(s) => s.to_owned(),
            Cow::Owned(s) => s,
        };
        applied.push(stage.name());
        match serde_json::from_str::<Value>(&next) {
            Ok(doc) => {
                let dropped = dropped_keys(text, &doc);
                return Outcome::Repaired {
                    doc,
                    stages: applied,
                    dropped_keys: dropped,
                };
            }
            Err(e) => last_failure = ParseFailure::from_serde(&e),
        }
        current = Cow::Owned(next);
    }

    Outcome::Unrecoverable {
        failure: last_failure,
    }
}
