use crate::error::Result;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Expand a list of input roots into the files to process. A directory root
/// is walked recursively for `*.json` at any depth; a file root is taken
/// as-is, which is how targeted remediation of an explicit path list works.
/// The result is sorted so reporting order is deterministic.
pub fn collect_json_files(roots: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for root in roots {
        if root.is_dir() {
            for entry in WalkDir::new(root) {
                let entry = entry?;
                if entry.file_type().is_file()
                    && entry.path().extension().is_some_and(|e| e == "json")
                {
                    files.push(entry.into_path());
                }
            }
        } else {
            files.push(root.clone());
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}
