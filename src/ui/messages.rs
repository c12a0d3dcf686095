//! One-line user messages on the terminal. Diagnostics go through `tracing`.

use ansi_term::{Colour, Style};
use std::fmt;

#[derive(Clone, Copy)]
enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn icon(self) -> &'static str {
        match self {
            Level::Info => "ℹ️",
            Level::Success => "✅",
            Level::Warning => "⚠️",
            Level::Error => "❌",
        }
    }

    fn style(self) -> Style {
        let colour = match self {
            Level::Info => Colour::Blue,
            Level::Success => Colour::Green,
            Level::Warning => Colour::Yellow,
            Level::Error => Colour::Red,
        };
        colour.bold()
    }

    fn line<T: fmt::Display>(self, msg: T) -> String {
        format!("{} {}", self.style().paint(self.icon()), msg)
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", Level::Info.line(msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", Level::Success.line(msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", Level::Warning.line(msg));
}

/// Written to stderr.
pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", Level::Error.line(msg));
}

/// Section title above a table.
pub fn header<T: fmt::Display>(msg: T) {
    let title = Colour::Blue.bold().paint(format!("── {msg} "));
    println!("{title}\n");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::table::strip_ansi;

    #[test]
    fn message_keeps_text_after_icon() {
        let plain = strip_ansi(&Level::Warning.line("No stamps"));
        assert_eq!(plain, "⚠️ No stamps");
    }
}
