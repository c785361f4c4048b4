//! Comment shielding.
//!
//! Comments are masked behind unique placeholder tokens before any rewriting
//! happens and substituted back verbatim afterward, so comment bodies are
//! never scanned for translatable text and never altered.

use anyhow::Result;

use super::patterns::{MARKUP_COMMENT_REGEX, SCRIPT_COMMENT_REGEX};
use super::segment::rewrite_segments;

/// Placeholder-token to original-comment mapping for one processing pass.
///
/// Tokens for markup comments look like `<!--0-->`, tokens for script comments
/// like `//__#1__`, sharing one counter. Neither token shape is producible by
/// the rewrite rules, so restoring is a plain first-occurrence substitution.
#[derive(Debug, Default)]
pub struct CommentShield {
    comments: Vec<(String, String)>,
}

impl CommentShield {
    /// Replace every comment span in `content` with a placeholder token,
    /// recording the original text. Markup comments are masked first, then
    /// script comments.
    pub fn mask(&mut self, content: &str) -> Result<String> {
        let content = rewrite_segments(content, &MARKUP_COMMENT_REGEX, |text, _, _| {
            Ok(self.stash(text, TokenStyle::Markup))
        })?;

        rewrite_segments(&content, &SCRIPT_COMMENT_REGEX, |_, _, captures| {
            let lead = captures.get(1).map_or("", |m| m.as_str());
            let comment = captures.get(2).map_or("", |m| m.as_str());
            Ok(format!("{}{}", lead, self.stash(comment, TokenStyle::Script)))
        })
    }

    /// Substitute every placeholder token back with its original comment.
    pub fn restore(self, mut content: String) -> String {
        for (token, comment) in self.comments {
            content = content.replacen(&token, &comment, 1);
        }
        content
    }

    fn stash(&mut self, comment: &str, style: TokenStyle) -> String {
        let token = match style {
            TokenStyle::Markup => format!("<!--{}-->", self.comments.len()),
            TokenStyle::Script => format!("//__#{}__", self.comments.len()),
        };
        self.comments.push((token.clone(), comment.to_string()));
        token
    }
}

enum TokenStyle {
    Markup,
    Script,
}

/// Runs `transform` over `content` with all comments shielded, restoring them
/// in the transformed output.
pub fn process_without_comments<F>(content: &str, transform: F) -> Result<String>
where
    F: FnOnce(&str) -> Result<String>,
{
    let mut shield = CommentShield::default();
    let masked = shield.mask(content)?;
    let transformed = transform(&masked)?;
    Ok(shield.restore(transformed))
}
