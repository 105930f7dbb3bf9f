//! Terminal rendering module for rich markdown output
//!
//! Uses termimad for styled output, with a plain text fallback for pipes and
//! `--no-color`.

use std::io::{self, Write};

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Green);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        self.write_to(&mut out, markdown)?;
        out.flush()?;
        Ok(())
    }

    fn write_to<W: Write>(&self, out: &mut W, markdown: &str) -> io::Result<()> {
        if !self.rich_enabled {
            return out.write_all(markdown.as_bytes());
        }

        for line in markdown.lines() {
            // Headers keep their hash marks so nesting stays visible
            if line.starts_with('#') {
                writeln!(out, "\x1b[32m{line}\x1b[0m")?;
            } else {
                writeln!(out, "{}", self.skin.inline(line))?;
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);

        let mut out = Vec::new();
        renderer.write_to(&mut out, "# Today\n- **Drink 2L water**\n").unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "# Today\n- **Drink 2L water**\n");
    }

    #[test]
    fn test_rich_renderer_colors_headers() {
        let renderer = TerminalRenderer::new(true);
        let mut out = Vec::new();
        renderer.write_to(&mut out, "## Sleep (0/1)\n").unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("\x1b[32m## Sleep (0/1)"));
    }

    #[test]
    fn test_default_is_rich() {
        assert!(TerminalRenderer::default().rich_enabled);
    }
}
