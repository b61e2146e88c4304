// SGR styling for the banner and the prompt.

/// Starts every escape sequence the shell writes.
pub const ESC: char = '\x1b';

macro_rules! sgr {
    ($($code:literal),+) => {
        concat!($("\x1b[", $code, "m"),+)
    };
}

pub const STYLE_RESET: &str = sgr!("0");
pub const STYLE_BOLD: &str = sgr!("1");
pub const STYLE_ITALIC: &str = sgr!("3");
pub const FG_LIGHT_GRAY: &str = sgr!("37");
/// Bold cyan.
pub const PROMPT_STYLE: &str = sgr!("1", "36");
/// Bold yellow, while an edit waits for confirmation.
pub const PENDING_PROMPT_STYLE: &str = sgr!("1", "33");
