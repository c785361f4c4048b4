use std::{collections::HashSet, path::Path};

use anyhow::Result;
use rayon::prelude::*;

use super::context::CommandContext;
use super::{CommandResult, CommandSummary, ExtractSummary, FileExtraction};
use crate::cli::args::ExtractCommand;
use crate::core::extract_file;

pub fn extract(cmd: ExtractCommand) -> Result<CommandResult> {
    let args = cmd.args;
    let ctx = CommandContext::new(&args.common)?;

    let ignore_texts: HashSet<&str> = ctx
        .config
        .ignore_texts
        .iter()
        .map(String::as_str)
        .collect();

    let mut extractions: Vec<FileExtraction> = ctx
        .files
        .par_iter()
        .map(|file_path| -> Result<FileExtraction> {
            let texts = extract_file(Path::new(file_path))?;
            Ok(FileExtraction {
                file_path: file_path.clone(),
                texts,
            })
        })
        .collect::<Result<Vec<_>>>()?;

    for extraction in &mut extractions {
        extraction
            .texts
            .retain(|text| !ignore_texts.contains(text.as_str()));
    }

    let total_texts = extractions.iter().map(|e| e.texts.len()).sum();

    Ok(CommandResult {
        summary: CommandSummary::Extract(ExtractSummary {
            extractions,
            total_texts,
            json: args.json,
        }),
        error_count: 0,
        exit_on_errors: true,
        source_files_checked: ctx.files.len(),
    })
}
