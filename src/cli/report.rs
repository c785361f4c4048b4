//! Report formatting and printing utilities.
//!
//! Separate from core logic so hanlift can be used as a library.

use anyhow::{Context, Result};
use colored::Colorize;
use unicode_width::UnicodeWidthStr;

use super::commands::{
    CommandResult, CommandSummary, ExtractSummary, FileRewrite, InitSummary, RewriteSummary,
};
use crate::config::CONFIG_FILE_NAME;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

pub fn print(result: &CommandResult) {
    match &result.summary {
        CommandSummary::Extract(summary) => print_extract(summary, result.source_files_checked),
        CommandSummary::Rewrite(summary) => print_rewrite(summary, result.source_files_checked),
        CommandSummary::Init(summary) => print_init(summary),
    }
}

fn print_extract(summary: &ExtractSummary, source_files: usize) {
    if summary.json {
        match extract_json(summary) {
            Ok(json) => println!("{}", json),
            Err(err) => eprintln!("Error: {}", err),
        }
        return;
    }

    for extraction in &summary.extractions {
        if extraction.texts.is_empty() {
            continue;
        }
        println!("{}", extraction.file_path.bold());
        for text in &extraction.texts {
            println!("  {}", text);
        }
        println!();
    }

    if summary.total_texts == 0 {
        print_nothing_found(source_files, "no hardcoded Chinese text found");
    } else {
        let file_count = summary
            .extractions
            .iter()
            .filter(|e| !e.texts.is_empty())
            .count();
        println!(
            "Found {} text(s) in {} file(s) (checked {}).",
            summary.total_texts, file_count, source_files
        );
    }
}

fn extract_json(summary: &ExtractSummary) -> Result<String> {
    let mut map = serde_json::Map::new();
    for extraction in &summary.extractions {
        if extraction.texts.is_empty() {
            continue;
        }
        map.insert(
            extraction.file_path.clone(),
            serde_json::json!(extraction.texts),
        );
    }
    serde_json::to_string_pretty(&serde_json::Value::Object(map))
        .context("Failed to serialize extraction result.")
}

fn print_rewrite(summary: &RewriteSummary, source_files: usize) {
    for rewrite in &summary.rewrites {
        print_file_rewrite(rewrite);
    }

    if summary.replaced_total == 0 && summary.missing_total == 0 {
        print_nothing_found(source_files, "nothing to rewrite");
        return;
    }

    let file_count = summary
        .rewrites
        .iter()
        .filter(|r| !r.replaced.is_empty())
        .count();

    if summary.replaced_total > 0 {
        if summary.is_apply {
            println!(
                "{} {} text(s) in {} file(s).",
                "Rewrote".green().bold(),
                summary.replaced_total,
                file_count
            );
        } else {
            println!(
                "{} {} text(s) in {} file(s).",
                "Would rewrite".yellow().bold(),
                summary.replaced_total,
                file_count
            );
            println!("Run with {} to rewrite these files.", "--apply".cyan());
        }
    }

    if summary.missing_total > 0 {
        println!(
            "{} {} text(s) have no key in the primary locale.",
            FAILURE_MARK.red(),
            summary.missing_total
        );
    }
}

fn print_file_rewrite(rewrite: &FileRewrite) {
    println!("{}", rewrite.file_path.bold());

    // Align the arrow column on display width, so CJK text lines up.
    let width = rewrite
        .replaced
        .iter()
        .map(|(text, _)| UnicodeWidthStr::width(text.as_str()))
        .chain(
            rewrite
                .missing
                .iter()
                .map(|text| UnicodeWidthStr::width(text.as_str())),
        )
        .max()
        .unwrap_or(0);

    for (text, key) in &rewrite.replaced {
        println!(
            "  {}{} {} {}",
            text,
            padding(width, text),
            "->".blue(),
            key.cyan()
        );
    }
    for text in &rewrite.missing {
        println!(
            "  {}{} {}",
            text,
            padding(width, text),
            "(no key)".yellow()
        );
    }
    println!();
}

fn padding(width: usize, text: &str) -> String {
    " ".repeat(width.saturating_sub(UnicodeWidthStr::width(text)))
}

fn print_nothing_found(source_files: usize, message: &str) {
    println!(
        "{} {}",
        SUCCESS_MARK.green(),
        format!(
            "Checked {} source {} - {}",
            source_files,
            if source_files == 1 { "file" } else { "files" },
            message
        )
        .green()
    );
}

fn print_init(summary: &InitSummary) {
    if summary.created {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!("Created {}", CONFIG_FILE_NAME).green()
        );
    }
}
