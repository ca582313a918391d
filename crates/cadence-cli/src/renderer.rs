//! Markdown output for the terminal.
//!
//! All coach output is markdown: headers for schedules and weekdays,
//! bullet lists for metadata, fenced blocks for exported JSON. The
//! renderer styles that markdown with termimad when color is on and
//! passes it through untouched when it is off.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Builds the skin used for colored output.
///
/// Headers stay on their own lines with the `#` markers visible (see
/// [`TerminalRenderer::render`]), so only inline styles matter here.
fn coach_skin() -> MadSkin {
    let mut skin = MadSkin::default();
    skin.set_headers_fg(Color::Green);
    skin.bold.set_fg(Color::Cyan);
    skin.italic.set_fg(Color::Magenta);
    skin.inline_code.set_bg(Color::AnsiValue(236));
    skin.code_block.set_bg(Color::AnsiValue(236));
    skin
}

/// Writes coach output to stdout, colored or plain.
pub struct TerminalRenderer {
    color: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(color: bool) -> Self {
        Self {
            color,
            skin: coach_skin(),
        }
    }

    /// Renders one markdown document.
    ///
    /// Header lines are printed verbatim in the header color rather than
    /// through termimad, keeping their `#` markers visible so the
    /// schedule/week/day nesting stays readable in a scrollback buffer.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.color {
            print!("{markdown}");
            return Ok(());
        }
        for line in markdown.lines() {
            if line.starts_with('#') {
                println!("\x1b[32m{line}\x1b[0m");
            } else {
                self.skin.print_inline(line);
                println!();
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
