mod classify;
pub mod cli;
pub mod discover;
pub mod driver;
mod emit;
pub mod error;
pub mod options;
mod outcome;
mod pipeline;
pub mod stages;

pub use discover::collect_json_files;
pub use driver::{Summary, VerifySummary, sweep, verify};
pub use emit::to_pretty_string;
pub use error::{MendError, ParseFailure, Result};
pub use options::Options;
pub use outcome::Outcome;

/// Repair one file's text into an [`Outcome`]: `Unchanged` when it already
/// parses, `Repaired` when one of the heuristic stages makes it parse, and
/// `Unrecoverable` when nothing does. Pure; writing repaired text back and
/// printing progress belong to the driver.
pub fn repair(text: &str, opts: &Options) -> Outcome {
    pipeline::repair(text, opts)
}

#[cfg(test)]
mod tests;
