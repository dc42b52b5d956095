//! Flattening of HTML (or already-plain) source pages into normalized lines.

use std::sync::LazyLock;

use regex::Regex;

static LINE_BREAK_TAGS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<br\s*/?>|</(?:tr|p|li)\s*>").expect("invalid regex: line break tags")
});

static ANY_TAG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<[^>]+>").expect("invalid regex: any tag"));

/// Entities decoded after tags are stripped, applied in this order.
const ENTITIES: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&amp;", "&"),
    ("&#8217;", "'"),
    ("&quot;", "\""),
    ("&#39;", "'"),
];

/// Decodes the fixed set of HTML entities the source pages use.
pub fn decode_html_entities(value: &str) -> String {
    ENTITIES
        .iter()
        .fold(value.to_string(), |acc, (entity, replacement)| {
            acc.replace(entity, replacement)
        })
}

/// Flattens an HTML fragment to plain text.
///
/// Row, paragraph, list-item and `<br>` boundaries become newlines; every
/// other tag becomes a single space. Plain text passes through untouched
/// apart from carriage returns and non-breaking spaces.
pub fn flatten_html_to_text(content: &str) -> String {
    let broken = LINE_BREAK_TAGS.replace_all(content, "\n");
    let stripped = ANY_TAG.replace_all(&broken, " ");
    decode_html_entities(&stripped)
        .replace('\r', "\n")
        .replace('\u{00A0}', " ")
}

/// Collapses whitespace runs to one space and trims the ends.
pub fn normalize_line(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Flattened, normalized, non-empty lines of `content`.
pub fn text_lines(content: &str) -> Vec<String> {
    flatten_html_to_text(content)
        .split('\n')
        .map(normalize_line)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Parses a count such as `1,234,567`, ignoring every non-digit character.
pub fn parse_integer_token(token: &str) -> Option<u64> {
    let digits: String = token.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}
