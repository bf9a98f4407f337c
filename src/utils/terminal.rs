//! Terminal output sanitization
//!
//! History files are written by the shell but can contain anything the user typed or
//! pasted, including raw escape sequences. Text printed verbatim (command names in the
//! frequency view) goes through [`sanitize_for_terminal`] first.

use std::borrow::Cow;

/// Remove ANSI CSI sequences and control characters other than tab
///
/// Newlines from continued commands are dropped too, so the result always fits on
/// one output row.
///
/// # Examples
///
/// ```
/// use zsh_history_explorer::utils::terminal::sanitize_for_terminal;
///
/// assert_eq!(sanitize_for_terminal("\x1b[31mgit\x1b[0m"), "git");
/// assert_eq!(sanitize_for_terminal("ls"), "ls");
/// ```
pub fn sanitize_for_terminal(text: &str) -> Cow<'_, str> {
    if !text.chars().any(is_unsafe) {
        return Cow::Borrowed(text);
    }

    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        // ESC [ params final-byte
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for next in chars.by_ref() {
                if next.is_ascii_alphabetic() {
                    break;
                }
            }
            continue;
        }

        if !is_unsafe(ch) {
            result.push(ch);
        }
    }

    Cow::Owned(result)
}

fn is_unsafe(ch: char) -> bool {
    ch.is_control() && ch != '\t'
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_color_codes() {
        assert_eq!(sanitize_for_terminal("\x1b[1;31mrm\x1b[0m"), "rm");
    }

    #[test]
    fn test_sanitize_cursor_movement() {
        assert_eq!(sanitize_for_terminal("\x1b[2J\x1b[Hclear"), "clear");
    }

    #[test]
    fn test_sanitize_bell_and_backspace() {
        assert_eq!(sanitize_for_terminal("ls\x07\x08"), "ls");
    }

    #[test]
    fn test_sanitize_drops_newlines() {
        assert_eq!(sanitize_for_terminal("for\nx"), "forx");
    }

    #[test]
    fn test_sanitize_keeps_tabs_and_unicode() {
        assert_eq!(sanitize_for_terminal("a\tb 日本 👋"), "a\tb 日本 👋");
    }

    #[test]
    fn test_sanitize_borrows_clean_text() {
        assert!(matches!(sanitize_for_terminal("git"), Cow::Borrowed("git")));
    }

    #[test]
    fn test_sanitize_empty() {
        assert_eq!(sanitize_for_terminal(""), "");
    }
}
