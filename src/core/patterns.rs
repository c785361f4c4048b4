//! Shared regex patterns and classification predicates.
//!
//! All patterns are compiled once behind `LazyLock` and carry no match-position
//! state; every scan over a document starts fresh. These are deliberately
//! pseudo-parsing patterns: they segment text well enough for rewriting without
//! being a JavaScript or HTML parser.

use std::sync::LazyLock;

use regex::Regex;

/// Matches a single- or double-quoted string, skipping escaped quotes inside.
pub static QUOTED_STRING_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#""(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*'"#).unwrap());

/// Matches a backtick-delimited template literal, skipping escaped backticks.
///
/// Interpolation contents are re-validated by the processor; this only has to
/// find the span.
pub static TEMPLATE_LITERAL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"`(?:[^`\\]|\\.)*`").unwrap());

/// Matches a `${...}` interpolation inside a template literal.
///
/// Non-greedy and non-nesting: `${a ? b : c}` is fine, `${`${x}`}` is not.
pub static TEMPLATE_INTERPOLATION_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\$\{.+?\}").unwrap());

/// Matches a `{{ ... }}` interpolation block in markup, possibly multi-line.
pub static MUSTACHE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)\{\{.+?\}\}").unwrap());

// Attribute spans inside a tag: a leading space, then `name="value"` where
// name may carry a `:` bind prefix or a `v-` directive prefix. The space is
// captured (group 1) and re-emitted by replacers so adjacent attributes keep
// their spacing.
pub static ATTRIBUTE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"( )(:?[\w-]+)="([^"]+)""#).unwrap());

/// Matches a run of "probably user-visible text": Han characters plus the
/// Latin letters, digits, punctuation and spaces that commonly adjoin them.
///
/// Leading/trailing separators are part of the match and must be stripped and
/// reattached by the caller.
pub static MAYBE_HAN_TEXT_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"[\p{Han}a-zA-Z0-9，,。.?？!！"“”% \-、：:【】\[\]]+"#).unwrap()
});

// Separator runs stripped off the edges of a plain-text match before the core
// text is submitted as a candidate.
pub static LEADING_SEPARATORS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[:：,，\-、 ]+").unwrap());
pub static TRAILING_SEPARATORS_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[:：,，\-、 ]+$").unwrap());

/// Collapses a newline plus following indentation into a bare newline when
/// normalizing candidate text.
pub static NEWLINE_INDENT_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n\s+").unwrap());

/// Matches an HTML comment `<!-- ... -->`.
pub static MARKUP_COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.+?-->").unwrap());

// Matches a `//` line comment or a `/* */` block comment. The preceding
// context (line start, whitespace, or a word character) is captured in group 1
// and re-emitted, so `http://` URLs inside strings are not treated as
// comments. Group 2 is the comment itself.
pub static SCRIPT_COMMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)(^|[\s\w])(//.+$|/\*(?s:.+?)\*/)").unwrap());

static HAN_CHAR_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\p{Han}").unwrap());

/// Checks if the text contains at least one Han-script character.
///
/// Used as a fast reject before any candidate submission or recursion.
///
/// # Examples
///
/// ```
/// use hanlift::core::contains_han;
///
/// assert!(contains_han("你好"));
/// assert!(contains_han("say 你好 loudly"));
/// assert!(!contains_han("hello"));
/// assert!(!contains_han(""));
/// ```
pub fn contains_han(text: &str) -> bool {
    HAN_CHAR_REGEX.is_match(text)
}

/// Builds a matcher for a `<tag ...> ... </tag>` region.
///
/// Greedy across the whole document: with several same-named tags, everything
/// from the first opening tag to the last closing tag is one region.
pub fn tag_region_pattern(tag_name: &str) -> Regex {
    Regex::new(&format!("(?s)<{tag_name}.*</{tag_name}>")).unwrap()
}
