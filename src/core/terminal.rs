/// Line-oriented terminal output for plain console mode
use std::io::{self, Write};

use crossterm::{
    style::{Color, ResetColor, SetForegroundColor},
    QueueableCommand,
};

/// Writer that colors lines with crossterm. Call [`flush`](Self::flush)
/// once per rendered frame.
pub struct TerminalContext<W: Write> {
    out: W,
    color: bool,
}

impl<W: Write> TerminalContext<W> {
    pub fn new(out: W, color: bool) -> Self {
        Self { out, color }
    }

    pub fn print_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.out, "{}", text)
    }

    /// Print a colored line, resetting the color afterwards
    pub fn print_colored_line(&mut self, text: &str, color: TerminalColor) -> io::Result<()> {
        if self.color {
            self.out.queue(SetForegroundColor(color.into()))?;
            writeln!(self.out, "{}", text)?;
            self.out.queue(ResetColor)?;
            Ok(())
        } else {
            self.print_line(text)
        }
    }

    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[derive(Clone, Copy, Debug)]
pub enum TerminalColor {
    Red,
    Green,
    Blue,
    Yellow,
    Cyan,
}

impl From<TerminalColor> for Color {
    fn from(color: TerminalColor) -> Self {
        match color {
            TerminalColor::Red => Color::Red,
            TerminalColor::Green => Color::Green,
            TerminalColor::Blue => Color::Blue,
            TerminalColor::Yellow => Color::Yellow,
            TerminalColor::Cyan => Color::Cyan,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_lines_have_no_escape_codes() {
        let mut ctx = TerminalContext::new(Vec::new(), false);
        ctx.print_line("hello").unwrap();
        ctx.print_colored_line("world", TerminalColor::Green).unwrap();

        let out = String::from_utf8(ctx.into_inner()).unwrap();
        assert_eq!(out, "hello\nworld\n");
    }

    #[test]
    fn colored_lines_are_wrapped_in_escape_codes() {
        let mut ctx = TerminalContext::new(Vec::new(), true);
        ctx.print_colored_line("x", TerminalColor::Red).unwrap();

        let out = String::from_utf8(ctx.into_inner()).unwrap();
        assert!(out.contains("x\n"));
        assert!(out.starts_with('\u{1b}'));
    }
}
