// Debug binary: show the stage-by-stage evolution of one file's text through
// the repair chain. Handy when a locale file repairs to something unexpected.
use localemend::stages::{Stage, default_stages};
use localemend::{Options, repair};
use std::fs;

fn main() {
    let Some(path) = std::env::args().nth(1) else {
        eprintln!("Usage: stage_trace FILE");
        std::process::exit(2);
    };
    let text = match fs::read_to_string(&path) {
        Ok(t) => t,
        Err(e) => {
            eprintln!("{}: {}", path, e);
            std::process::exit(1);
        }
    };
    if serde_json::from_str::<serde_json::Value>(&text).is_ok() {
        println!("{}: already valid, no stages run", path);
        return;
    }

    let opts = Options::default();
    let mut current = text.clone();
    for stage in default_stages(&opts) {
        let next = stage.apply(&current).into_owned();
        if next == current {
            println!("-- {}: no change", stage.name());
            continue;
        }
        println!("-- {}:", stage.name());
        println!("{}", next);
        let parse = serde_json::from_str::<serde_json::Value>(&next);
        println!("   parses: {}", parse.is_ok());
        current = next;
    }

    match repair(&text, &opts) {
        localemend::Outcome::Repaired { stages, .. } => {
            println!("OUTCOME: fixed via ({})", stages.join(", "));
        }
        localemend::Outcome::Unrecoverable { failure } => {
            println!("OUTCOME: unrecoverable: {}", failure);
        }
        localemend::Outcome::Unchanged { .. } => unreachable!(),
    }
}
