//! URL template matching with `:name` path parameters.

use regex::{Regex, RegexBuilder};

/// Route template compiled once and matched against many request paths.
///
/// A trailing slash is optional on both sides and literal segments compare
/// case-insensitively.
#[derive(Debug, Clone)]
pub struct UrlPattern {
    regex: Regex,
}

impl UrlPattern {
    pub fn new(template: &str) -> Self {
        Self {
            regex: pattern_to_regex(&normalize_path(template)),
        }
    }

    /// Match a decoded request path (no query string).
    pub fn matches(&self, path: &str) -> bool {
        self.regex.is_match(&normalize_path(path))
    }
}

fn normalize_path(path: &str) -> String {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/".into()
    } else {
        trimmed.into()
    }
}

fn is_param_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn pattern_to_regex(pattern: &str) -> Regex {
    let mut regex_str = String::new();
    let mut literal = String::new();
    let mut chars = pattern.chars().peekable();

    while let Some(c) = chars.next() {
        if c == ':' && chars.peek().copied().is_some_and(is_param_char) {
            while chars.next_if(|&next| is_param_char(next)).is_some() {}
            regex_str.push_str(&regex::escape(&literal));
            literal.clear();
            regex_str.push_str("[^/]+");
        } else {
            literal.push(c);
        }
    }
    regex_str.push_str(&regex::escape(&literal));

    RegexBuilder::new(&format!("^{regex_str}/?$"))
        .case_insensitive(true)
        .build()
        .expect("escaped template is a valid regex")
}
