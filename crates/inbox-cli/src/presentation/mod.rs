//! Presentation utilities for CLI output.

mod notices;
mod tables;

pub use notices::NoticePrinter;
pub use tables::{EMPTY_STATE, NO_UNREAD, render_notifications, separator, truncate_string};
