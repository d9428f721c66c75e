#[derive(Clone, Debug)]
pub struct Options {
    /// Enable the last-resort salvage stage. Salvage rebuilds a flat object
    /// from recognizable `"key": "value"` lines and can silently drop nested
    /// structure; keep it off when fidelity matters more than recovery.
    pub salvage: bool,
    /// Rewrite files that already parse, normalizing them to the canonical
    /// format (two-space indent, trailing newline). When false, valid files
    /// are left byte-untouched on disk.
    pub rewrite_valid: bool,
    /// Classify and report without writing anything back.
    pub dry_run: bool,
    /// Escape non-ASCII characters in output as \uXXXX. Off by default:
    /// locale files are UTF-8 and diffs read better with literal text.
    pub ensure_ascii: bool,
    /// How many unrecoverable files to list individually in the summary
    /// before eliding the rest as "... and N more".
    pub max_listed_failures: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            salvage: true,
            rewrite_valid: true,
            dry_run: false,
            ensure_ascii: false,
            max_listed_failures: 10,
        }
    }
}
