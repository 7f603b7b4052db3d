mod terminal;

pub use self::terminal::{Command, render_metrics, render_text};
