/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

fn is_blank(value: &str) -> bool {
    let v = value.trim();
    v.is_empty() || v == "--:--" || v == "-"
}

/// Grey for placeholders, plain text otherwise.
pub fn colorize_optional(value: &str) -> String {
    if is_blank(value) {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}

/// Clock-in times green, clock-out times red, placeholders grey.
pub fn colorize_in_out(value: &str, is_in: bool) -> String {
    if is_blank(value) {
        return format!("{GREY}{value}{RESET}");
    }

    if is_in {
        format!("{GREEN}{value}{RESET}")
    } else {
        format!("{RED}{value}{RESET}")
    }
}

/// Sunday red, Saturday blue, weekdays untouched (week starts on Sunday).
pub fn color_for_weekday(index: u32) -> &'static str {
    match index {
        0 => RED,
        6 => BLUE,
        _ => RESET,
    }
}
