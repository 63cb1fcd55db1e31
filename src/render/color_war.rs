use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color as TermColor, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::snake::centered;
use crate::color_war::{Cell, Color, ColorWarState, Outcome, PlayerId};

fn term_color(color: Color) -> TermColor {
    match color {
        Color::Blue => TermColor::Blue,
        Color::Cyan => TermColor::Cyan,
        Color::Green => TermColor::Green,
        Color::Magenta => TermColor::Magenta,
        Color::Red => TermColor::Red,
        Color::Yellow => TermColor::Yellow,
    }
}

/// Status line above the board
pub fn action_message(state: &ColorWarState) -> String {
    match state.outcome() {
        Some(Outcome::Winner { player, percent }) => {
            format!("Player {player} has won with {percent}%, hit N to start new game!")
        }
        Some(Outcome::Tie) => "Tie (50%), hit N to start new game!".to_string(),
        None if state.current().controller.is_bot() => {
            format!("Player {} is choosing...", state.current().id)
        }
        None => format!("Player {} choose your color!", state.current().id),
    }
}

pub struct ColorWarRenderer;

impl ColorWarRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &ColorWarState) {
        let size = state.board().size() as u16;
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(size + 2), // Board
                Constraint::Length(1),        // Action
                Constraint::Length(1),        // Scores
                Constraint::Length(3),        // Palette
                Constraint::Min(0),
            ])
            .split(frame.area());

        frame.render_widget(self.board(state), centered(chunks[0], size * 2 + 2));
        frame.render_widget(
            Paragraph::new(action_message(state))
                .style(Style::default().add_modifier(Modifier::BOLD))
                .alignment(Alignment::Center),
            chunks[1],
        );
        frame.render_widget(self.scores(state), chunks[2]);
        frame.render_widget(self.palette(state), centered(chunks[3], 48));
    }

    fn board(&self, state: &ColorWarState) -> Paragraph<'_> {
        let size = state.board().size();
        let one_home = PlayerId::One.home(size);
        let two_home = PlayerId::Two.home(size);

        let lines: Vec<Line> = (0..size)
            .map(|row| {
                let spans: Vec<Span> = (0..size)
                    .map(|col| {
                        let cell = Cell::new(row, col);
                        let style = Style::default()
                            .fg(TermColor::White)
                            .bg(term_color(state.display_color(cell)));
                        let label = if cell == one_home {
                            "1 "
                        } else if cell == two_home {
                            " 2"
                        } else {
                            "  "
                        };
                        Span::styled(label, style)
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Color War "))
    }

    fn scores(&self, state: &ColorWarState) -> Paragraph<'_> {
        let area = state.board().area();
        let spans: Vec<Span> = [PlayerId::One, PlayerId::Two]
            .into_iter()
            .flat_map(|id| {
                let player = state.player(id);
                let share = player.cell_count() * 100 / area;
                [
                    Span::styled(
                        format!("Player {id}: "),
                        Style::default().fg(term_color(player.color)),
                    ),
                    Span::raw(format!("{} cells ({share}%)    ", player.cell_count())),
                ]
            })
            .collect();

        Paragraph::new(Line::from(spans)).alignment(Alignment::Center)
    }

    /// One block per palette color: its number, and `#` when taken
    fn palette(&self, state: &ColorWarState) -> Paragraph<'_> {
        let rows: Vec<Line> = (0..3)
            .map(|row| {
                let spans: Vec<Span> = Color::ALL
                    .iter()
                    .flat_map(|color| {
                        let fill = if state.color_free(*color) { ' ' } else { '#' };
                        let text = if row == 1 {
                            format!("{fill}{fill}{}{fill}{fill}", color.number())
                        } else {
                            fill.to_string().repeat(5)
                        };
                        let style = Style::default()
                            .fg(TermColor::White)
                            .bg(term_color(*color))
                            .add_modifier(Modifier::BOLD);
                        [Span::styled(text, style), Span::raw("   ")]
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(rows)
    }
}

impl Default for ColorWarRenderer {
    fn default() -> Self {
        Self::new()
    }
}
