use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::pig::PigGame;

pub struct PigRenderer;

impl PigRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, game: &PigGame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Title
                Constraint::Length(game.players().len() as u16 + 2),
                Constraint::Length(5), // Turn
                Constraint::Min(3),    // Log
                Constraint::Length(1), // Controls
            ])
            .split(frame.area());

        let title = Line::from(vec![
            Span::styled("Pig", Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)),
            Span::raw(format!(" - first to {} points wins", game.target())),
        ]);
        frame.render_widget(Paragraph::new(title).alignment(Alignment::Center), chunks[0]);
        frame.render_widget(self.scoreboard(game), chunks[1]);
        frame.render_widget(self.turn(game), chunks[2]);
        frame.render_widget(self.log(game), chunks[3]);
        frame.render_widget(self.controls(game), chunks[4]);
    }

    fn scoreboard(&self, game: &PigGame) -> Paragraph<'_> {
        let lines: Vec<Line> = game
            .players()
            .iter()
            .enumerate()
            .map(|(index, player)| {
                let is_current = index == game.current_index() && !game.is_over();
                let marker = if is_current { "> " } else { "  " };
                let kind = if player.controller.is_bot() { "bot" } else { "human" };
                let style = if is_current {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                Line::from(vec![
                    Span::styled(format!("{marker}{:<14}", player.name), style),
                    Span::styled(format!("{kind:<6}"), Style::default().fg(Color::DarkGray)),
                    Span::raw(format!("{:>4}", player.score)),
                ])
            })
            .collect();

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .title(" Scores "),
        )
    }

    fn turn(&self, game: &PigGame) -> Paragraph<'_> {
        let lines = match game.winner() {
            Some(winner) => vec![
                Line::from(Span::styled(
                    format!("The player {} has won!", winner.name),
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                )),
                Line::from(format!("Final score: {}", winner.score)),
                Line::from("Press Enter to play again or Q to quit"),
            ],
            None => {
                let turn = game.turn();
                let last = game
                    .last_roll()
                    .map_or_else(|| "-".to_string(), |value| value.to_string());
                vec![
                    Line::from(format!("It is {}'s turn!", game.current().name)),
                    Line::from(format!(
                        "Turn score: {}    Times rolled: {}    Last roll: {last}",
                        turn.score, turn.rolls
                    )),
                    Line::from(format!("Total score: {}", game.current().score)),
                ]
            }
        };

        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Turn "))
    }

    fn log(&self, game: &PigGame) -> Paragraph<'_> {
        let lines: Vec<Line> = game.log().map(|line| Line::from(line.to_string())).collect();
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Log "))
    }

    fn controls(&self, game: &PigGame) -> Paragraph<'_> {
        let line = if game.current().controller.is_bot() && !game.is_over() {
            Line::from(Span::styled(
                "Bot is playing...",
                Style::default().fg(Color::DarkGray),
            ))
        } else {
            Line::from(vec![
                Span::styled("Y", Style::default().fg(Color::Green)),
                Span::raw(" roll | "),
                Span::styled("N", Style::default().fg(Color::Cyan)),
                Span::raw(" hold | "),
                Span::styled("Q", Style::default().fg(Color::Red)),
                Span::raw(" quit"),
            ])
        };
        Paragraph::new(line).alignment(Alignment::Center)
    }
}

impl Default for PigRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::Controller;
    use crate::pig::PigPlayer;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(game: &PigGame) -> String {
        let renderer = PigRenderer::new();
        let mut terminal = Terminal::new(TestBackend::new(70, 24)).unwrap();
        terminal.draw(|frame| renderer.render(frame, game)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_shows_turn_state() {
        let mut game = PigGame::with_players(
            vec![
                PigPlayer::new("Ann", Controller::Human),
                PigPlayer::new("Sup_Bot", Controller::Bot),
            ],
            100,
        );
        game.apply_roll(4).unwrap();

        let text = draw(&game);

        assert!(text.contains("It is Ann's turn!"));
        assert!(text.contains("Turn score: 4"));
        assert!(text.contains("Last roll: 4"));
        assert!(text.contains("Ann rolled 4"));
    }

    #[test]
    fn test_shows_winner() {
        let mut game = PigGame::with_players(
            vec![
                PigPlayer::new("Ann", Controller::Human),
                PigPlayer::new("Bob", Controller::Human),
            ],
            10,
        );
        game.apply_roll(6).unwrap();
        game.apply_roll(6).unwrap();
        game.hold().unwrap();

        let text = draw(&game);

        assert!(text.contains("The player Ann has won!"));
    }
}
