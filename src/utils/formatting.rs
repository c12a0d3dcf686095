//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

/// Left-align on display width (CJK store and employee names are wide).
pub fn pad_right(s: &str, width: usize) -> String {
    let w = UnicodeWidthStr::width(s);
    format!("{}{}", s, " ".repeat(width.saturating_sub(w)))
}

pub fn mins2readable(mins: i64) -> String {
    let abs_m = mins.abs();
    let sign = if mins < 0 { "-" } else { "" };
    format!("{}{:02}h {:02}m", sign, abs_m / 60, abs_m % 60)
}

/// Short marker column for the history and admin tables.
pub fn day_flags(open: bool, anomaly: bool, order_violation: bool, modified: bool) -> String {
    let mut flags = Vec::new();
    if open {
        flags.push("open");
    }
    if anomaly {
        flags.push("extra-out");
    }
    if order_violation {
        flags.push("order");
    }
    if modified {
        flags.push("edited");
    }
    flags.join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_characters_are_padded_by_display_width() {
        assert_eq!(pad_right("本店", 6), "本店  ");
        assert_eq!(pad_right("North", 6), "North ");
        assert_eq!(pad_right("toolong", 3), "toolong");
    }

    #[test]
    fn readable_minutes() {
        assert_eq!(mins2readable(485), "08h 05m");
        assert_eq!(day_flags(true, false, false, true), "open,edited");
    }
}
