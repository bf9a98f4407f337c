//! Shell-quote-aware splitting of a command line into argv-like tokens.
//!
//! Only quoting and escaping are interpreted. Parameter expansion, globbing and
//! command substitution are left in the token text untouched.
//!
//! # Rules
//!
//! - Single quotes: everything is literal until the closing `'`, backslash included
//! - Double quotes: `\"`, `\\`, `\$`, `` \` `` and backslash-newline collapse to the
//!   escaped character; any other backslash is kept as-is
//! - Unquoted: a backslash makes the next character literal; any whitespace ends a token
//!
//! Malformed input never fails. An unterminated quote ends the scan and whatever was
//! accumulated becomes the last token.

use std::iter::Peekable;
use std::str::Chars;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuoteState {
    Unquoted,
    Single,
    Double,
}

/// Split a command line into tokens
///
/// # Examples
///
/// ```
/// use zsh_history_explorer::parsers::tokenizer::split;
///
/// assert_eq!(split("git commit -m 'first commit'"), vec!["git", "commit", "-m", "first commit"]);
/// assert_eq!(split(r"cd My\ Documents"), vec!["cd", "My Documents"]);
/// ```
pub fn split(input: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut state = QuoteState::Unquoted;
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        match state {
            QuoteState::Single => {
                if ch == '\'' {
                    state = QuoteState::Unquoted;
                } else {
                    current.push(ch);
                }
            }
            QuoteState::Double => match ch {
                '\\' => push_double_quoted_escape(&mut chars, &mut current),
                '"' => state = QuoteState::Unquoted,
                _ => current.push(ch),
            },
            QuoteState::Unquoted => match ch {
                // A trailing backslash has nothing to escape and stays literal
                '\\' => current.push(chars.next().unwrap_or('\\')),
                '\'' => state = QuoteState::Single,
                '"' => state = QuoteState::Double,
                c if c.is_whitespace() => flush_token(&mut tokens, &mut current),
                _ => current.push(ch),
            },
        }
    }

    flush_token(&mut tokens, &mut current);
    tokens
}

/// Characters a backslash may escape inside double quotes
fn is_double_quote_escapable(ch: char) -> bool {
    matches!(ch, '"' | '\\' | '$' | '`' | '\n')
}

fn push_double_quoted_escape(chars: &mut Peekable<Chars>, current: &mut String) {
    match chars.peek() {
        Some(&next) if is_double_quote_escapable(next) => {
            current.push(next);
            chars.next();
        }
        // The following character is handled on the next iteration
        _ => current.push('\\'),
    }
}

fn flush_token(tokens: &mut Vec<String>, current: &mut String) {
    if !current.is_empty() {
        tokens.push(std::mem::take(current));
    }
}
