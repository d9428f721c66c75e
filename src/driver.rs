use crate::emit::to_pretty_string;
use crate::error::MendError;
use crate::options::Options;
use crate::outcome::Outcome;
use crate::pipeline::repair;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Aggregate result of one repair sweep. Maintains
/// `valid + fixed + failed == total`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Summary {
    pub valid: usize,
    pub fixed: usize,
    pub failed: usize,
    pub total: usize,
    /// One entry per failed file: path and the reason it stayed broken.
    pub failures: Vec<(PathBuf, String)>,
}

/// Aggregate result of a verification pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct VerifySummary {
    pub valid: usize,
    pub invalid: usize,
    pub total: usize,
    pub failures: Vec<(PathBuf, String)>,
}

/// Run the repair pipeline over every path, write validated repairs back, and
/// report through `report`. Best-effort: a single file's failure never halts
/// the sweep, and I/O failures are counted against that file alone.
pub fn sweep(paths: &[PathBuf], opts: &Options, report: &mut dyn Write) -> io::Result<Summary> {
    let mut summary = Summary::default();
    for path in paths {
        summary.total += 1;
        let text = match fs::read_to_string(path).map_err(|e| MendError::io(path, e)) {
            Ok(t) => t,
            Err(e) => {
                writeln!(report, "io error: {}", e)?;
                summary.failed += 1;
                summary.failures.push((path.clone(), e.to_string()));
                continue;
            }
        };
        match repair(&text, opts) {
            Outcome::Unchanged { doc } => {
                if opts.rewrite_valid
                    && !opts.dry_run
                    && let Err(e) = write_back(path, &doc, opts)
                {
                    writeln!(report, "io error: {}", e)?;
                    summary.failed += 1;
                    summary.failures.push((path.clone(), e.to_string()));
                    continue;
                }
                writeln!(report, "{}: ok", path.display())?;
                summary.valid += 1;
            }
            Outcome::Repaired {
                doc,
                stages,
                dropped_keys,
            } => {
                if !opts.dry_run && let Err(e) = write_back(path, &doc, opts) {
                    writeln!(report, "io error: {}", e)?;
                    summary.failed += 1;
                    summary.failures.push((path.clone(), e.to_string()));
                    continue;
                }
                write!(report, "{}: fixed ({})", path.display(), stages.join(", "))?;
                if !dropped_keys.is_empty() {
                    write!(
                        report,
                        " (dropped {} keys: {})",
                        dropped_keys.len(),
                        dropped_keys.join(", ")
                    )?;
                }
                writeln!(report)?;
                summary.fixed += 1;
            }
            Outcome::Unrecoverable { failure } => {
                // The file stays untouched on disk.
                writeln!(report, "{}: FAILED: {}", path.display(), failure)?;
                summary.failed += 1;
                summary.failures.push((path.clone(), failure.to_string()));
            }
        }
    }
    write_summary(&summary, opts, report)?;
    Ok(summary)
}

/// Re-read every file and check it parses; no repairs, no writes.
pub fn verify(paths: &[PathBuf], report: &mut dyn Write) -> io::Result<VerifySummary> {
    let mut summary = VerifySummary::default();
    for path in paths {
        summary.total += 1;
        let reason = match fs::read_to_string(path) {
            Ok(text) => match serde_json::from_str::<serde_json::Value>(&text) {
                Ok(_) => {
                    summary.valid += 1;
                    continue;
                }
                Err(e) => e.to_string(),
            },
            Err(e) => e.to_string(),
        };
        writeln!(report, "{}: {}", path.display(), reason)?;
        summary.invalid += 1;
        summary.failures.push((path.clone(), reason));
    }
    writeln!(
        report,
        "verified: {} valid, {} invalid, {} total",
        summary.valid, summary.invalid, summary.total
    )?;
    if summary.invalid == 0 {
        writeln!(report, "all {} files parse cleanly", summary.total)?;
    }
    Ok(summary)
}

fn write_back(path: &Path, doc: &serde_json::Value, opts: &Options) -> crate::Result<()> {
    // Only text the pipeline has itself validated ever reaches this point.
    fs::write(path, to_pretty_string(doc, opts)).map_err(|e| MendError::io(path, e))
}

fn write_summary(summary: &Summary, opts: &Options, report: &mut dyn Write) -> io::Result<()> {
    writeln!(
        report,
        "summary: {} valid, {} fixed, {} failed, {} total",
        summary.valid, summary.fixed, summary.failed, summary.total
    )?;
    if summary.failures.is_empty() {
        return Ok(());
    }
    writeln!(report, "still broken:")?;
    for (path, reason) in summary.failures.iter().take(opts.max_listed_failures) {
        writeln!(report, "  {}: {}", path.display(), reason)?;
    }
    if summary.failures.len() > opts.max_listed_failures {
        writeln!(
            report,
            "  ... and {} more",
            summary.failures.len() - opts.max_listed_failures
        )?;
    }
    Ok(())
}
