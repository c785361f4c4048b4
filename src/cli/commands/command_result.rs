/// Candidate texts extracted from one file, sorted, duplicates preserved.
#[derive(Debug)]
pub struct FileExtraction {
    pub file_path: String,
    pub texts: Vec<String>,
}

/// Texts rewritten (or left without a key) in one file.
#[derive(Debug)]
pub struct FileRewrite {
    pub file_path: String,
    /// Unique `text -> key` pairs that were rewritten, in document order.
    pub replaced: Vec<(String, String)>,
    /// Unique candidate texts with no key in the primary locale messages.
    pub missing: Vec<String>,
}

#[derive(Debug)]
pub enum CommandSummary {
    Extract(ExtractSummary),
    Rewrite(RewriteSummary),
    Init(InitSummary),
}

#[derive(Debug)]
pub struct ExtractSummary {
    /// Per-file extractions, file paths sorted; files without texts included.
    pub extractions: Vec<FileExtraction>,
    pub total_texts: usize,
    pub json: bool,
}

#[derive(Debug)]
pub struct RewriteSummary {
    /// Files with at least one rewritten or key-less text.
    pub rewrites: Vec<FileRewrite>,
    pub replaced_total: usize,
    pub missing_total: usize,
    pub is_apply: bool,
}

#[derive(Debug)]
pub struct InitSummary {
    pub created: bool,
}

/// Result of running a hanlift command.
pub struct CommandResult {
    pub summary: CommandSummary,
    pub error_count: usize,
    /// If true, exit code 1 should be returned when error_count > 0.
    /// If false, always exit 0 (used for dry-run commands that report work to do).
    pub exit_on_errors: bool,
    /// Number of source files that were scanned.
    pub source_files_checked: usize,
}
