//! The recursive content processor.
//!
//! Script mode rewrites template literals and quoted strings; markup mode
//! isolates the `<template>` and `<script>` regions and applies
//! attribute/interpolation/plain-text rules inside the template. Every rule
//! that needs to treat a sub-span as expression code recurses into script
//! mode — markup never appears inside a script expression in this model.
//!
//! Regions that cannot be confidently classified pass through unchanged; that
//! is the only fallback policy.

use anyhow::Result;

use super::patterns::{
    ATTRIBUTE_REGEX, LEADING_SEPARATORS_REGEX, MAYBE_HAN_TEXT_REGEX, MUSTACHE_REGEX,
    NEWLINE_INDENT_REGEX, QUOTED_STRING_REGEX, TEMPLATE_INTERPOLATION_REGEX,
    TEMPLATE_LITERAL_REGEX, TRAILING_SEPARATORS_REGEX, contains_han, tag_region_pattern,
};
use super::segment::rewrite_segments;
use super::template::TemplateParse;

/// Caller-supplied key policy: candidate text in, translation key out.
///
/// `None` means "do not translate, leave the text unchanged". An error aborts
/// the whole document pass.
pub type KeyFn<'a> = &'a dyn Fn(&str) -> Result<Option<String>>;

/// One document's processing pass.
///
/// Holds the pure key function plus the accumulator of every candidate text
/// submitted to it, in submission order.
pub struct Processor<'a> {
    resolve_key: KeyFn<'a>,
    texts: Vec<String>,
}

impl<'a> Processor<'a> {
    pub fn new(resolve_key: KeyFn<'a>) -> Self {
        Self {
            resolve_key,
            texts: Vec::new(),
        }
    }

    /// Every candidate submitted during this pass, in document order.
    pub fn into_texts(self) -> Vec<String> {
        self.texts
    }

    /// Rewrites script content: template literals first, then quoted strings.
    pub fn process_script(&mut self, content: &str) -> Result<String> {
        let content = rewrite_segments(content, &TEMPLATE_LITERAL_REGEX, |text, _, _| {
            if !contains_han(text) {
                return Ok(text.to_string());
            }

            let parsed = TemplateParse::parse(text);

            if parsed.expressions.is_empty() {
                let token = self.translation_call(&parsed.skeleton)?;
                return Ok(token.unwrap_or_else(|| text.to_string()));
            }

            if !contains_han(&parsed.skeleton) {
                // Only the interpolated expressions carry Han text; keep the
                // literal structure and recurse into each expression.
                return rewrite_segments(text, &TEMPLATE_INTERPOLATION_REGEX, |span, _, _| {
                    let expression = &span[2..span.len() - 1];
                    Ok(format!("${{{}}}", self.process_script(expression)?))
                });
            }

            let mut arguments = Vec::with_capacity(parsed.expressions.len());
            for expression in &parsed.expressions {
                arguments.push(self.process_script(expression)?);
            }

            match self.submit(&parsed.skeleton)? {
                Some(key) => Ok(format!("$t('{}', [{}])", key, arguments.join(", "))),
                None => Ok(text.to_string()),
            }
        })?;

        rewrite_segments(&content, &QUOTED_STRING_REGEX, |text, _, _| {
            if !contains_han(text) {
                return Ok(text.to_string());
            }

            let token = self.translation_call(text)?;
            Ok(token.unwrap_or_else(|| text.to_string()))
        })
    }

    /// Rewrites markup content: the `<template>` region through the template
    /// rules, the `<script>` region through script mode, everything else
    /// untouched.
    pub fn process_markup(&mut self, content: &str) -> Result<String> {
        let content = rewrite_segments(
            content,
            &tag_region_pattern("template"),
            |region, _, _| self.process_markup_template(region),
        )?;

        rewrite_segments(&content, &tag_region_pattern("script"), |region, _, _| {
            self.process_script(region)
        })
    }

    fn process_markup_template(&mut self, content: &str) -> Result<String> {
        // Pass 1: attribute values.
        let content = rewrite_segments(content, &ATTRIBUTE_REGEX, |text, _, captures| {
            let lead = captures.get(1).map_or("", |m| m.as_str());
            let name = captures.get(2).map_or("", |m| m.as_str());
            let value = captures.get(3).map_or("", |m| m.as_str());

            if !contains_han(value) {
                return Ok(text.to_string());
            }

            let is_bound = name.starts_with(':') || name.starts_with("v-");

            if is_bound {
                // Already an expression: recurse, and only rewrite when the
                // processed value actually differs.
                let replaced = self.process_script(value)?;
                if replaced == value {
                    Ok(text.to_string())
                } else {
                    Ok(format!("{lead}{name}=\"{replaced}\""))
                }
            } else {
                match self.translation_call(value)? {
                    Some(token) => Ok(format!("{lead}:{name}=\"{token}\"")),
                    None => Ok(text.to_string()),
                }
            }
        })?;

        // Pass 2: {{ ... }} interpolation blocks; the braces themselves are
        // untouched by script rules.
        let content = rewrite_segments(&content, &MUSTACHE_REGEX, |text, _, _| {
            self.process_script(text)
        })?;

        // Pass 3: plain text runs.
        rewrite_segments(&content, &MAYBE_HAN_TEXT_REGEX, |text, _, _| {
            if !contains_han(text) {
                return Ok(text.to_string());
            }

            let leading = LEADING_SEPARATORS_REGEX
                .find(text)
                .map_or("", |m| m.as_str());
            let trailing = TRAILING_SEPARATORS_REGEX
                .find(text)
                .map_or("", |m| m.as_str());
            let core = &text[leading.len()..text.len() - trailing.len()];

            match self.translation_call(core)? {
                Some(token) => Ok(format!("{leading}{{{{ {token} }}}}{trailing}")),
                None => Ok(text.to_string()),
            }
        })
    }

    /// Submits `content` as a candidate and wraps a returned key in a
    /// `$t('...')` call.
    fn translation_call(&mut self, content: &str) -> Result<Option<String>> {
        Ok(self.submit(content)?.map(|key| format!("$t('{key}')")))
    }

    /// Normalizes a candidate, records it, and asks the key function.
    fn submit(&mut self, text: &str) -> Result<Option<String>> {
        let text = normalize_candidate(text);
        self.texts.push(text.clone());
        (self.resolve_key)(&text)
    }
}

/// Strips a wrapping quote pair, collapses newline-plus-indentation runs to a
/// bare newline, and trims.
fn normalize_candidate(text: &str) -> String {
    let text = strip_wrapping_quotes(text);
    let text = NEWLINE_INDENT_REGEX.replace_all(text, "\n");
    text.trim().to_string()
}

fn strip_wrapping_quotes(text: &str) -> &str {
    let bytes = text.as_bytes();
    if bytes.len() >= 3 {
        let first = bytes[0];
        if matches!(first, b'"' | b'\'' | b'`') && bytes[bytes.len() - 1] == first {
            return &text[1..text.len() - 1];
        }
    }
    text
}
