//! Shared setup for the extract and rewrite commands: config loading, CLI
//! overrides, and source file discovery.

use anyhow::{Context, Result};

use crate::cli::args::CommonArgs;
use crate::config::{Config, ConfigLoadResult, load_config};
use crate::scanner::scan_files;

pub struct CommandContext {
    pub config: Config,
    /// Scanned source files, sorted for stable output.
    pub files: Vec<String>,
}

impl CommandContext {
    pub fn new(common: &CommonArgs) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to resolve current directory")?;
        let ConfigLoadResult { mut config, .. } = load_config(&cwd)?;

        if let Some(locale) = &common.primary_locale {
            config.primary_locale = locale.clone();
        }
        if let Some(root) = &common.source_root {
            config.source_root = root.to_string_lossy().into_owned();
        }
        if let Some(root) = &common.messages_root {
            config.messages_root = root.to_string_lossy().into_owned();
        }

        let scan = scan_files(
            &config.source_root,
            &config.includes,
            &config.ignores,
            config.ignore_test_files,
            common.verbose,
        );

        let mut files: Vec<String> = scan.files.into_iter().collect();
        files.sort();

        Ok(Self { config, files })
    }
}
