//! Line classification and payload tokenization (spec.md §4.1).

/// What a single logical input line turns out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineKind {
    /// Empty, whitespace-only, or `#pragma`/`#` comment line.
    Ignore,
    /// `#!` line: flat stream of option terms, already split on runs of
    /// whitespace and `=` (spec.md §4.2's `NAME=value` / `NAME = value`
    /// both collapse to the same two-token stream this way).
    Option(Vec<String>),
    /// `!DIRECTIVE` line, directive name only (no leading `!`).
    Directive(String),
    /// Want-list / official-name line, tokenized per the FPAT scheme.
    Payload(Vec<String>),
}

pub fn classify_line(line: &str) -> LineKind {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return LineKind::Ignore;
    }
    if trimmed.starts_with("#pragma") {
        return LineKind::Ignore;
    }
    if let Some(rest) = trimmed.strip_prefix("#!") {
        return LineKind::Option(split_option_terms(rest));
    }
    if trimmed.starts_with('#') {
        return LineKind::Ignore;
    }
    if let Some(rest) = trimmed.strip_prefix('!') {
        return LineKind::Directive(rest.trim().to_string());
    }
    LineKind::Payload(tokenize_payload(trimmed))
}

fn split_option_terms(rest: &str) -> Vec<String> {
    rest.split(|c: char| c.is_whitespace() || c == '=')
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Tokenizes a payload line using the "FPAT" scheme of spec.md §4.1: a
/// token matches, in priority order, a quoted string, a parenthesized
/// group, a bracketed group, or a maximal run of non-whitespace. Bare `:`
/// and `;` fall out of the last rule automatically, since a lone
/// punctuation character surrounded by whitespace is itself a maximal
/// non-whitespace run.
pub fn tokenize_payload(line: &str) -> Vec<String> {
    let chars: Vec<char> = line.chars().collect();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < chars.len() {
        if chars[i].is_whitespace() {
            i += 1;
            continue;
        }
        match chars[i] {
            '"' => {
                let (token, next) = scan_quoted(&chars, i);
                tokens.push(token);
                i = next;
            }
            '(' => {
                let (token, next) = scan_delimited(&chars, i, '(', ')');
                tokens.push(token);
                i = next;
            }
            '[' => {
                let (token, next) = scan_delimited(&chars, i, '[', ']');
                tokens.push(token);
                i = next;
            }
            _ => {
                let start = i;
                while i < chars.len() && !chars[i].is_whitespace() {
                    i += 1;
                }
                tokens.push(chars[start..i].iter().collect());
            }
        }
    }
    tokens
}

/// Consumes a quoted group starting at `start` (pointing at the opening
/// `"`). To support doubly-quoted official names like
/// `""Foo" Bar Edition"`, the closing quote is the *last* `"` before the
/// next whitespace or end of line, matching the "longest stream of
/// quotation marks" behavior of the original grammar.
fn scan_quoted(chars: &[char], start: usize) -> (String, usize) {
    let mut end = start + 1;
    let mut last_quote = None;
    while end < chars.len() && !(chars[end].is_whitespace() && last_quote.is_some()) {
        if chars[end] == '"' {
            last_quote = Some(end);
        }
        end += 1;
    }
    match last_quote {
        Some(q) => (chars[start..=q].iter().collect(), q + 1),
        None => (chars[start..end].iter().collect(), end),
    }
}

/// Consumes a `(...)`/`[...]` group starting at `start`, stopping at the
/// first matching close delimiter (no nesting), per spec.md §4.1.
fn scan_delimited(chars: &[char], start: usize, _open: char, close: char) -> (String, usize) {
    let mut end = start + 1;
    while end < chars.len() && chars[end] != close {
        end += 1;
    }
    if end < chars.len() {
        (chars[start..=end].iter().collect(), end + 1)
    } else {
        (chars[start..end].iter().collect(), end)
    }
}
