pub mod environment;
pub mod terminal;

pub use environment::{get_history_path, history_path_in};
pub use terminal::sanitize_for_terminal;
