//! Per-document processing entry points.

use std::path::Path;

use anyhow::{Context, Result};

use super::comments::process_without_comments;
use super::processor::{KeyFn, Processor};

/// Sentinel key used by the extraction entry points: every candidate gets a
/// key, so every candidate is both recorded and textually replaced.
pub const EXTRACTION_SENTINEL_KEY: &str = "_#_";

/// How a document's content is classified before processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    /// Plain script code (JavaScript/TypeScript).
    Script,
    /// A single-file component with `<template>`/`<script>` regions.
    Markup,
}

impl DocumentKind {
    /// Derives the kind from a file extension: `.vue` is markup, anything
    /// else is script.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("vue") => DocumentKind::Markup,
            _ => DocumentKind::Script,
        }
    }
}

/// Result of one processing pass over a document.
#[derive(Debug)]
pub struct ProcessedDocument {
    /// The rewritten document text.
    pub content: String,
    /// Every candidate submitted to the key function, in document order.
    pub texts: Vec<String>,
}

/// Processes one document with the given key function, shielding comments
/// around the whole pass.
pub fn process_document(
    content: &str,
    kind: DocumentKind,
    resolve_key: KeyFn,
) -> Result<ProcessedDocument> {
    let mut processor = Processor::new(resolve_key);

    let content = process_without_comments(content, |masked| match kind {
        DocumentKind::Markup => processor.process_markup(masked),
        DocumentKind::Script => processor.process_script(masked),
    })?;

    Ok(ProcessedDocument {
        content,
        texts: processor.into_texts(),
    })
}

/// Extracts all candidate texts from one document, sorted lexicographically.
///
/// Duplicates are preserved with their multiplicity; de-duplication is the
/// caller's business.
pub fn extract_texts(content: &str, kind: DocumentKind) -> Result<Vec<String>> {
    let document = process_document(content, kind, &|_| {
        Ok(Some(EXTRACTION_SENTINEL_KEY.to_string()))
    })?;

    let mut texts = document.texts;
    texts.sort();
    Ok(texts)
}

/// Reads a file and extracts its candidate texts, deriving the document kind
/// from the extension.
pub fn extract_file(path: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path.display()))?;
    extract_texts(&content, DocumentKind::from_path(path))
}
