//! Parsers for zsh history files and the command lines they contain
//!
//! # Error Handling Strategy
//!
//! Parsing never fails on content, only on I/O:
//!
//! - **I/O errors**: Failing to open or read the history file aborts the parse and is
//!   returned as an `anyhow::Error` with the file path as context. No partial results
//!   are returned.
//!
//! - **Malformed metadata**: A line that starts like an extended record but whose
//!   timestamp or duration is not an integer is reinterpreted as a plain command. This
//!   is logged at debug level and never surfaced to the caller.
//!
//! - **Malformed quoting**: Unterminated quotes end tokenization; the accumulated text
//!   becomes the last token.
//!
//! - **Encoding**: Bytes that are not valid UTF-8 are replaced rather than rejected.

pub mod command;
pub mod history;
pub mod tokenizer;

pub use command::parse_command;
pub use history::{parse_history, parse_history_file};
pub use tokenizer::split;
