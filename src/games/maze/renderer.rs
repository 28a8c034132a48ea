/// Maze-specific renderer
use std::io::Write;

use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use super::game::{MazeState, MazeStatus, GRID_SIZE, MAX_ATTEMPTS};
use crate::core::game::PuzzleRenderer;
use crate::core::terminal::{TerminalColor, TerminalContext};

#[derive(Debug)]
pub struct MazeRenderer;

impl PuzzleRenderer<MazeState> for MazeRenderer {
    fn render(frame: &mut Frame, state: &MazeState, feedback: &str, input: &str) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Length(5), // Status
                Constraint::Min(0),    // Grid
                Constraint::Length(3), // Input
            ])
            .split(frame.area());

        let header = Paragraph::new("═══ MAZE ESCAPE ═══")
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .alignment(Alignment::Center);
        frame.render_widget(header, chunks[0]);

        let status_style = match state.status {
            MazeStatus::Won => Style::default().fg(Color::Green),
            MazeStatus::Trapped => Style::default().fg(Color::Red),
            _ => Style::default().fg(Color::Yellow),
        };
        let mut lines = vec![Line::from(feedback.to_string()), Line::from(Self::summary(state))];
        if state.status == MazeStatus::Trapped {
            lines.push(Line::from(Self::reveal(state)));
        }
        let status = Paragraph::new(lines)
            .block(Block::default().borders(Borders::ALL).title("Status"))
            .style(status_style);
        frame.render_widget(status, chunks[1]);

        frame.render_widget(Self::grid_widget(state), chunks[2]);

        let prompt = if state.outcome().is_some() {
            "Type 'reset' for a new maze, Esc to quit".to_string()
        } else {
            format!("> {}", input)
        };
        let footer = Paragraph::new(prompt).block(
            Block::default()
                .borders(Borders::ALL)
                .title("[←↑↓→] Move  [reset]  [Esc] Quit"),
        );
        frame.render_widget(footer, chunks[3]);
    }

    fn render_plain<W: Write>(
        ctx: &mut TerminalContext<W>,
        state: &MazeState,
    ) -> std::io::Result<()> {
        for y in 0..GRID_SIZE {
            let row: String = (0..GRID_SIZE)
                .map(|x| if state.player.x == x && state.player.y == y { " P" } else { " ." })
                .collect();
            ctx.print_line(&row)?;
        }
        ctx.print_colored_line(&Self::summary(state), TerminalColor::Cyan)?;
        if state.status == MazeStatus::Trapped {
            ctx.print_colored_line(&Self::reveal(state), TerminalColor::Red)?;
        }
        Ok(())
    }
}

impl MazeRenderer {
    fn summary(state: &MazeState) -> String {
        format!(
            "Position: ({}, {})  Moves: {} / {}",
            state.player.x + 1,
            state.player.y + 1,
            state.attempts,
            MAX_ATTEMPTS
        )
    }

    fn reveal(state: &MazeState) -> String {
        format!("The exit was at ({}, {}).", state.exit.x + 1, state.exit.y + 1)
    }

    fn grid_widget(state: &MazeState) -> Table<'static> {
        let rows: Vec<Row> = (0..GRID_SIZE)
            .map(|y| {
                let cells = (0..GRID_SIZE).map(|x| {
                    let is_player = state.player.x == x && state.player.y == y;
                    let is_exit = state.exit.x == x && state.exit.y == y;
                    match (is_player, is_exit, state.status) {
                        (true, _, _) => Cell::from(" P ")
                            .style(Style::default().bg(Color::Green).fg(Color::Black)),
                        (false, true, MazeStatus::Trapped) => {
                            Cell::from(" X ").style(Style::default().fg(Color::Red))
                        }
                        _ => Cell::from(" · "),
                    }
                });
                Row::new(cells.collect::<Vec<_>>())
            })
            .collect();

        Table::new(rows, std::iter::repeat(Constraint::Length(3)).take(GRID_SIZE as usize))
            .block(Block::default().borders(Borders::ALL).title("Maze"))
    }
}
