//! Terminal rendering for the markdown produced by `studyplan-core`.
//!
//! Rich mode styles inline markdown with termimad and tints task lines by
//! status. Plain mode prints the markdown unchanged, which is what tests and
//! pipes see with `--no-color`.

use anyhow::Result;
use termimad::{
    crossterm::style::{Color, Stylize},
    MadSkin,
};

/// How a single output line is styled in rich mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Heading,
    Done,
    Skipped,
    Text,
}

impl LineKind {
    fn classify(line: &str) -> Self {
        if line.starts_with('#') {
            LineKind::Heading
        } else if line.contains("[✓ Done]") {
            LineKind::Done
        } else if line.contains("[✗ Skipped]") {
            LineKind::Skipped
        } else {
            LineKind::Text
        }
    }
}

/// Prints core output either styled or as plain markdown.
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            match LineKind::classify(line) {
                // Hash marks stay so day headings line up with plain output
                LineKind::Heading => println!("{}", line.with(Color::Blue).bold()),
                LineKind::Done => println!("{}", line.with(Color::Green)),
                LineKind::Skipped => println!("{}", line.with(Color::DarkGrey)),
                LineKind::Text => println!("{}", self.skin.inline(line)),
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}
