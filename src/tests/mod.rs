use super::*;

// Shared test helpers
fn opts() -> Options {
    Options::default()
}

fn assert_reparses(outcome: &Outcome, opts: &Options) -> serde_json::Value {
    let doc = outcome.doc().expect("outcome carries a document");
    let emitted = to_pretty_string(doc, opts);
    serde_json::from_str(&emitted).expect("emitted text must reparse")
}

mod emit_format;
mod stage_braces;
