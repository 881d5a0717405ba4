//! ANSI styling for terminal output

pub struct Colors;

impl Colors {
    pub const RESET: &'static str = "\x1b[0m";
    pub const BOLD: &'static str = "\x1b[1m";
    pub const DIM: &'static str = "\x1b[2m";
    pub const GREEN: &'static str = "\x1b[32m";
}

/// Apply color to text if the terminal supports it
pub fn colorize(text: &str, color: &str) -> String {
    if supports_formatting() {
        format!("{color}{text}{}", Colors::RESET)
    } else {
        text.to_string()
    }
}

/// Whether stdout is a terminal that understands ANSI escapes
pub fn supports_formatting() -> bool {
    use std::env;
    use std::io::IsTerminal;

    if env::var("NO_COLOR").is_ok() || env::var("FORCE_COLOR").as_deref() == Ok("0") {
        return false;
    }
    if env::var("FORCE_COLOR").is_ok() {
        return true;
    }
    if cfg!(test) || !std::io::stdout().is_terminal() {
        return false;
    }

    match env::var("TERM") {
        Ok(term) => !term.is_empty() && term != "dumb",
        Err(_) => env::var("TERM_PROGRAM").is_ok(),
    }
}
