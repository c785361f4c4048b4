//! Core content-rewriting engine.
//!
//! A comment-preserving, regex-driven scanner that finds Han text in string
//! literals, template placeholders, and markup attributes, and rewrites each
//! occurrence into a `$t(...)` call while collecting the original text for
//! translation-key generation. Processing is a pure function of the document
//! text: no shared state across documents, every scan starts fresh.

mod comments;
mod document;
mod patterns;
mod processor;
mod segment;
mod template;

pub use comments::{CommentShield, process_without_comments};
pub use document::{
    DocumentKind, EXTRACTION_SENTINEL_KEY, ProcessedDocument, extract_file, extract_texts,
    process_document,
};
pub use patterns::contains_han;
pub use processor::{KeyFn, Processor};
pub use segment::{Segment, rewrite_segments, split_segments};
pub use template::TemplateParse;
