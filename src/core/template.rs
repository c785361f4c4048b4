//! Template-literal decomposition.

use super::patterns::TEMPLATE_INTERPOLATION_REGEX;
use super::segment::{Segment, split_segments};

/// A template literal split into a literal skeleton and its expressions.
///
/// `` `xxx ${variable}` `` becomes skeleton `"xxx {0}"` with expressions
/// `["variable"]`. Placeholder positions correspond to expression indices.
#[derive(Debug, PartialEq, Eq)]
pub struct TemplateParse {
    pub skeleton: String,
    pub expressions: Vec<String>,
}

impl TemplateParse {
    /// Decomposes a full template-literal source, delimiters included.
    ///
    /// With no interpolations the skeleton is just the delimiter-stripped
    /// input and the expression list is empty — callers treat that as a plain
    /// string with no variables.
    pub fn parse(source: &str) -> Self {
        let inner = strip_delimiters(source);

        let mut skeleton = String::with_capacity(inner.len());
        let mut expressions = Vec::new();

        for segment in split_segments(inner, &TEMPLATE_INTERPOLATION_REGEX) {
            match segment {
                Segment::Literal(text) => skeleton.push_str(text),
                Segment::Match { text, index, .. } => {
                    expressions.push(text[2..text.len() - 1].to_string());
                    skeleton.push_str(&format!("{{{index}}}"));
                }
            }
        }

        Self {
            skeleton,
            expressions,
        }
    }
}

fn strip_delimiters(source: &str) -> &str {
    if source.len() >= 2 {
        &source[1..source.len() - 1]
    } else {
        source
    }
}
