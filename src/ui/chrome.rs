use crate::ui::ansi::{
    FG_LIGHT_GRAY, PENDING_PROMPT_STYLE, PROMPT_STYLE, STYLE_BOLD, STYLE_ITALIC, STYLE_RESET,
};
use crate::ui::width_util::WidthUtil;
use std::io::{self, Write};

const BANNER_INNER_WIDTH: usize = 50;

/// Screen-level helpers: the start-up banner and the prompt.
#[derive(Debug, Default, Clone)]
pub struct UiChrome {
    util: WidthUtil,
}

impl UiChrome {
    pub fn new() -> Self {
        Self {
            util: WidthUtil::default(),
        }
    }

    pub fn print_banner(&self) {
        for line in self.banner_lines() {
            println!("{line}");
        }
    }

    pub fn banner_lines(&self) -> Vec<String> {
        let version = env!("CARGO_PKG_VERSION");
        let title = format!(
            "{STYLE_BOLD}T I M E T A B L E{STYLE_RESET} {FG_LIGHT_GRAY}(v{version}){STYLE_RESET}"
        );
        let subtitle = format!("{STYLE_ITALIC}Weekly slots without double-booking{STYLE_RESET}");
        let blank = format!("│{}│", " ".repeat(BANNER_INNER_WIDTH));
        vec![
            format!("╭{}╮", "─".repeat(BANNER_INNER_WIDTH)),
            blank.clone(),
            format!("│{}│", self.util.center_visible(&title, BANNER_INNER_WIDTH)),
            format!("│{}│", self.util.center_visible(&subtitle, BANNER_INNER_WIDTH)),
            blank,
            format!("╰{}╯", "─".repeat(BANNER_INNER_WIDTH)),
        ]
    }

    pub fn prompt_text(&self, pending: bool) -> &'static str {
        if pending { "pending > " } else { "> " }
    }

    /// Prints the prompt without a newline and flushes.
    pub fn print_prompt(&self, pending: bool) {
        let style = if pending { PENDING_PROMPT_STYLE } else { PROMPT_STYLE };
        print!("{style}{}{STYLE_RESET}", self.prompt_text(pending));
        let _ = io::stdout().flush();
    }
}
