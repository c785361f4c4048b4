//! Generic split-by-pattern substitution primitive.
//!
//! Every rewrite rule in the processor goes through [`rewrite_segments`]: scan
//! all non-overlapping matches of a pattern left-to-right, map each match
//! through a replacer, and reassemble with the unmatched spans kept verbatim.
//! Replacer output is never re-scanned.

use anyhow::Result;
use regex::{Captures, Regex};

/// One span of a pattern-segmented source string.
#[derive(Debug)]
pub enum Segment<'a> {
    /// Unmatched text, to be carried through byte-for-byte.
    Literal(&'a str),
    /// A pattern match with its capture groups and zero-based match index.
    Match {
        text: &'a str,
        index: usize,
        captures: Captures<'a>,
    },
}

/// Splits `source` into literal and matched segments.
///
/// Match indices increase in source order with no gaps; concatenating all
/// segment texts yields `source` exactly.
pub fn split_segments<'a>(source: &'a str, pattern: &Regex) -> Vec<Segment<'a>> {
    let mut segments = Vec::new();
    let mut last_end = 0;
    let mut index = 0;

    for captures in pattern.captures_iter(source) {
        let Some(matched) = captures.get(0) else {
            continue;
        };

        if matched.start() > last_end {
            segments.push(Segment::Literal(&source[last_end..matched.start()]));
        }

        last_end = matched.end();
        segments.push(Segment::Match {
            text: matched.as_str(),
            index,
            captures,
        });
        index += 1;
    }

    if last_end < source.len() {
        segments.push(Segment::Literal(&source[last_end..]));
    }

    segments
}

/// Rewrites every match of `pattern` in `source` through `replacer`.
///
/// The replacer receives the matched text, its zero-based match index, and the
/// full captures. The first replacer error aborts the scan and propagates.
pub fn rewrite_segments<F>(source: &str, pattern: &Regex, mut replacer: F) -> Result<String>
where
    F: FnMut(&str, usize, &Captures) -> Result<String>,
{
    let mut result = String::with_capacity(source.len());

    for segment in split_segments(source, pattern) {
        match segment {
            Segment::Literal(text) => result.push_str(text),
            Segment::Match {
                text,
                index,
                captures,
            } => result.push_str(&replacer(text, index, &captures)?),
        }
    }

    Ok(result)
}
