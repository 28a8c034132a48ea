/// Picas y Fijas renderer
use std::io::Write;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

use super::game::{GuessRecord, PicasState, PicasStatus, MAX_GUESSES};
use crate::core::game::PuzzleRenderer;
use crate::core::terminal::{TerminalColor, TerminalContext};

#[derive(Debug)]
pub struct PicasRenderer;

impl PuzzleRenderer<PicasState> for PicasRenderer {
    fn render(frame: &mut Frame, state: &PicasState, feedback: &str, input: &str) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(3), // Status
                Constraint::Min(0),    // History
                Constraint::Length(3), // Input
            ])
            .split(frame.area());

        let header = Paragraph::new("═══ PICAS Y FIJAS ═══")
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(header, chunks[0]);

        let (title, style) = match state.status {
            PicasStatus::Won => (" Congratulations! ", Style::default().fg(Color::Green)),
            PicasStatus::Lost => (" Game over ", Style::default().fg(Color::Red)),
            _ => (" Guess the four-digit code ", Style::default().fg(Color::Yellow)),
        };
        let status = Paragraph::new(feedback.to_string())
            .block(Block::default().borders(Borders::ALL).title(title))
            .style(style);
        frame.render_widget(status, chunks[1]);

        let items: Vec<ListItem> = state
            .history()
            .iter()
            .enumerate()
            .map(|(i, record)| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("Attempt {}: ", i + 1),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!("{} - ", record.guess)),
                    Span::styled(
                        format!("{} picas", record.picas),
                        Style::default().fg(Color::Blue),
                    ),
                    Span::raw(", "),
                    Span::styled(
                        format!("{} fijas", record.fijas),
                        Style::default().fg(Color::Green),
                    ),
                ]))
            })
            .collect();
        let history_title = format!(" History ({}/{}) ", state.history().len(), MAX_GUESSES);
        frame.render_widget(
            List::new(items).block(Block::default().borders(Borders::ALL).title(history_title)),
            chunks[2],
        );

        let prompt = if state.outcome().is_some() {
            "Type 'reset' to play again, Esc to quit".to_string()
        } else {
            format!("> {}", input)
        };
        frame.render_widget(
            Paragraph::new(prompt).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title("[Enter] Guess  [reset]  [Esc] Quit"),
            ),
            chunks[3],
        );
    }

    fn render_plain<W: Write>(
        ctx: &mut TerminalContext<W>,
        state: &PicasState,
    ) -> std::io::Result<()> {
        if let Some((i, record)) = state.history().iter().enumerate().last() {
            ctx.print_colored_line(&Self::history_line(i + 1, record), TerminalColor::Blue)?;
        }
        ctx.print_line(&format!("Guesses used: {} / {}", state.history().len(), MAX_GUESSES))
    }
}

impl PicasRenderer {
    fn history_line(n: usize, record: &GuessRecord) -> String {
        format!("Attempt {}: {} - {} picas, {} fijas", n, record.guess, record.picas, record.fijas)
    }
}
