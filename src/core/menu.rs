use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::games::GameInfo;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuResult {
    Play(&'static str), // Game ID
    Quit,
}

#[derive(Debug, Default)]
pub struct GameMenu {
    pub selected_game_index: usize,
}

impl GameMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn run(
        &mut self,
        terminal: &mut ratatui::DefaultTerminal,
        games: &[GameInfo],
    ) -> Result<MenuResult> {
        loop {
            terminal.draw(|f| self.render(f, games))?;

            if event::poll(Duration::from_millis(100))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    if let Some(result) = self.handle_key(key.code, games) {
                        return Ok(result);
                    }
                }
            }
        }
    }

    pub fn handle_key(&mut self, code: KeyCode, games: &[GameInfo]) -> Option<MenuResult> {
        match code {
            KeyCode::Enter | KeyCode::Char('p') => {
                games.get(self.selected_game_index).map(|g| MenuResult::Play(g.id))
            }
            KeyCode::Up => {
                self.selected_game_index = self.selected_game_index.saturating_sub(1);
                None
            }
            KeyCode::Down => {
                let last = games.len().saturating_sub(1);
                self.selected_game_index = (self.selected_game_index + 1).min(last);
                None
            }
            KeyCode::Char('q') | KeyCode::Esc => Some(MenuResult::Quit),
            _ => None,
        }
    }

    fn render(&self, f: &mut Frame, games: &[GameInfo]) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .margin(2)
            .constraints([Constraint::Length(3), Constraint::Min(0), Constraint::Length(3)])
            .split(f.area());

        f.render_widget(
            Paragraph::new(" TERMPUZZLES ")
                .block(Block::default().borders(Borders::ALL))
                .alignment(Alignment::Center),
            chunks[0],
        );

        let items: Vec<ListItem> = games
            .iter()
            .enumerate()
            .map(|(i, g)| {
                let style = if i == self.selected_game_index {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(format!(" » {} : {}  [{}]", g.name, g.description, g.author))
                    .style(style)
            })
            .collect();

        f.render_widget(
            List::new(items)
                .block(Block::default().title(" AVAILABLE GAMES ").borders(Borders::ALL)),
            chunks[1],
        );

        f.render_widget(
            Paragraph::new("[↑/↓] Navigate  [Enter] Play Selected  [Q] Quit")
                .alignment(Alignment::Center),
            chunks[2],
        );
    }
}
