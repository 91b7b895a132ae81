//! Exit list tokenization.
//!
//! Splits the text after an exit lead ("Exits:") into one token per exit.
//! Bracketed markers stay attached to the exit they describe, so
//! `south (locked door)` is one token.

/// Characters that separate exits.
const SEPARATORS: &[char] = &[',', ';', '/', '|'];

/// Tokenizes exit lists.
pub struct ExitTokenizer;

impl ExitTokenizer {
    /// Tokenizes the remainder of an exit line.
    ///
    /// - Splits on whitespace and the separator set
    /// - Drops the word `and` and a trailing period
    /// - Keeps bracketed text (`(...)`, `[...]`, `{...}`) as part of a token;
    ///   a bracket group standing alone attaches to the previous token unless
    ///   it holds a word of its own, like `(north)`
    #[must_use]
    pub fn tokenize(input: &str) -> Vec<String> {
        let mut tokens: Vec<String> = Vec::new();
        let mut chars = input.chars().peekable();
        let mut current = String::new();

        while let Some(ch) = chars.next() {
            match ch {
                '(' | '[' | '{' => {
                    let close = closing(ch);
                    let mut group = String::from(ch);
                    for c in chars.by_ref() {
                        group.push(c);
                        if c == close {
                            break;
                        }
                    }
                    if current.is_empty() && attaches_to_previous(&group) {
                        if let Some(last) = tokens.last_mut() {
                            last.push_str(&group);
                            continue;
                        }
                    }
                    current.push_str(&group);
                }
                c if c.is_whitespace() || SEPARATORS.contains(&c) => {
                    flush(&mut tokens, &mut current);
                }
                _ => current.push(ch),
            }
        }
        flush(&mut tokens, &mut current);

        if let Some(last) = tokens.last_mut() {
            while last.ends_with('.') {
                last.pop();
            }
            if last.is_empty() {
                tokens.pop();
            }
        }
        tokens
    }
}

fn closing(open: char) -> char {
    match open {
        '(' => ')',
        '[' => ']',
        _ => '}',
    }
}

/// A marker such as `(door)` describes the previous exit; `(north)` is an
/// exit of its own.
fn attaches_to_previous(group: &str) -> bool {
    let inner = group.trim_matches(|c| matches!(c, '(' | ')' | '[' | ']' | '{' | '}'));
    mudmap_foundation::Direction::parse(inner).is_none()
}

fn flush(tokens: &mut Vec<String>, current: &mut String) {
    if current.is_empty() {
        return;
    }
    let word = std::mem::take(current);
    if !word.eq_ignore_ascii_case("and") {
        tokens.push(word);
    }
}
