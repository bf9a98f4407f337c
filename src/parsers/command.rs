use crate::models::ParsedCommand;
use crate::parsers::tokenizer::split;

/// Whether a leading token is an environment assignment such as `FOO=bar`
///
/// Flags like `--opt=value` are not assignments.
pub fn is_assignment(token: &str) -> bool {
    token.contains('=') && !token.starts_with('-')
}

/// Split a raw command line into its command name and arguments
///
/// Leading environment assignments (`FOO=1 BAR=2 cmd args`) are skipped. The raw text
/// is kept verbatim in [`ParsedCommand::raw`].
///
/// Quirk: when every token is an assignment, the first assignment is reported as the
/// command and there are no arguments, so `FOO=1` parses as command `FOO=1`.
///
/// # Examples
///
/// ```
/// use zsh_history_explorer::parsers::command::parse_command;
///
/// let parsed = parse_command("RUST_LOG=debug cargo run --release");
/// assert_eq!(parsed.command, "cargo");
/// assert_eq!(parsed.arguments, vec!["run", "--release"]);
/// ```
pub fn parse_command(raw: &str) -> ParsedCommand {
    let mut tokens = split(raw.trim());
    if tokens.is_empty() {
        return ParsedCommand { raw: raw.to_string(), command: String::new(), arguments: vec![] };
    }

    let start = tokens.iter().take_while(|token| is_assignment(token)).count();
    if start == tokens.len() {
        let command = tokens.swap_remove(0);
        return ParsedCommand { raw: raw.to_string(), command, arguments: vec![] };
    }

    let mut rest = tokens.split_off(start).into_iter();
    let command = rest.next().unwrap_or_default();
    ParsedCommand { raw: raw.to_string(), command, arguments: rest.collect() }
}
