use std::{collections::HashSet, fs, path::Path};

use anyhow::{Context, Result};
use rayon::prelude::*;

use super::context::CommandContext;
use super::{CommandResult, CommandSummary, FileRewrite, RewriteSummary};
use crate::cli::args::RewriteCommand;
use crate::core::{DocumentKind, process_document};
use crate::messages::{invert_messages, load_messages};

pub fn rewrite(cmd: RewriteCommand) -> Result<CommandResult> {
    let args = cmd.args;
    let ctx = CommandContext::new(&args.common)?;

    let messages = load_messages(&ctx.config.messages_root, &ctx.config.primary_locale)?;
    let lookup = invert_messages(&messages);

    let ignore_texts: HashSet<&str> = ctx
        .config
        .ignore_texts
        .iter()
        .map(String::as_str)
        .collect();

    let rewrites: Vec<FileRewrite> = ctx
        .files
        .par_iter()
        .map(|file_path| -> Result<Option<FileRewrite>> {
            let path = Path::new(file_path);
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read file: {}", path.display()))?;

            let resolve = |text: &str| -> Result<Option<String>> {
                if ignore_texts.contains(text) {
                    return Ok(None);
                }
                Ok(lookup.get(text).cloned())
            };

            let document = process_document(&content, DocumentKind::from_path(path), &resolve)?;

            let mut replaced: Vec<(String, String)> = Vec::new();
            let mut missing: Vec<String> = Vec::new();
            for text in &document.texts {
                if ignore_texts.contains(text.as_str()) {
                    continue;
                }
                match lookup.get(text) {
                    Some(key) => {
                        if !replaced.iter().any(|(t, _)| t == text) {
                            replaced.push((text.clone(), key.clone()));
                        }
                    }
                    None => {
                        if !missing.contains(text) {
                            missing.push(text.clone());
                        }
                    }
                }
            }

            if replaced.is_empty() && missing.is_empty() {
                return Ok(None);
            }

            if args.apply && document.content != content {
                fs::write(path, &document.content)
                    .with_context(|| format!("Failed to write file: {}", path.display()))?;
            }

            Ok(Some(FileRewrite {
                file_path: file_path.clone(),
                replaced,
                missing,
            }))
        })
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .flatten()
        .collect();

    let replaced_total = rewrites.iter().map(|r| r.replaced.len()).sum();
    let missing_total: usize = rewrites.iter().map(|r| r.missing.len()).sum();

    Ok(CommandResult {
        summary: CommandSummary::Rewrite(RewriteSummary {
            rewrites,
            replaced_total,
            missing_total,
            is_apply: args.apply,
        }),
        error_count: missing_total,
        // Dry runs always exit 0; an applied rewrite that leaves texts
        // without keys signals the leftover work through the exit code.
        exit_on_errors: args.apply,
        source_files_checked: ctx.files.len(),
    })
}
