use crossterm::execute;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use std::io::Write;
use std::sync::OnceLock;

static COLORED: OnceLock<bool> = OnceLock::new();

/// Enable or disable colors for the whole process. Only the first call counts.
/// Colors stay on when never called.
pub fn set_colored(enabled: bool) {
    let _ = COLORED.set(enabled);
}

fn colored() -> bool {
    COLORED.get().copied().unwrap_or(true)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ThemeColor {
    /// plain terminal color, used for data rows.
    Main,
    Second,
    Success,
    Warn,
    Error,
}

impl ThemeColor {
    fn color(&self) -> Option<Color> {
        match self {
            ThemeColor::Main => None,
            ThemeColor::Second => Some(Color::Grey),
            ThemeColor::Success => Some(Color::Green),
            ThemeColor::Warn => Some(Color::Yellow),
            ThemeColor::Error => Some(Color::Red),
        }
    }
}

/// # colored println
///
/// Print one line to `out` in the theme color.
/// Write failures are ignored, there is nowhere left to report them.
pub fn colored_println<W: Write>(out: &mut W, theme: ThemeColor, msg: &str) {
    println_in(out, theme.color().filter(|_| colored()), msg);
}

fn println_in<W: Write>(out: &mut W, color: Option<Color>, msg: &str) {
    let _ = match color {
        Some(color) => execute!(
            out,
            SetForegroundColor(color),
            Print(msg),
            ResetColor,
            Print("\n")
        ),
        None => execute!(out, Print(msg), Print("\n")),
    };
}
