use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::metrics::GameMetrics;
use crate::snake::{Position, SnakeState, Status};

pub struct SnakeRenderer;

impl SnakeRenderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &SnakeState, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),                          // Status bar
                Constraint::Length(state.field_size as u16 + 2), // Field
                Constraint::Length(1),                          // Help
                Constraint::Min(0),
            ])
            .split(frame.area());

        frame.render_widget(self.status_bar(state, metrics), chunks[0]);

        let field_width = state.field_size as u16 * 2 + 2;
        if state.is_running() {
            frame.render_widget(self.field(state), centered(chunks[1], field_width));
        } else {
            let area = centered(chunks[1], field_width.max(40));
            frame.render_widget(self.start_panel(state, metrics), area);
        }

        frame.render_widget(self.help(), chunks[2]);
    }

    fn status_bar(&self, state: &SnakeState, metrics: &GameMetrics) -> Paragraph<'_> {
        let hearts = "\u{2764} ".repeat(state.lives as usize);
        let line = Line::from(vec![
            Span::styled("Points: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.points.to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Lives: ", Style::default().fg(Color::Yellow)),
            Span::styled(hearts, Style::default().fg(Color::Red)),
            Span::raw("    "),
            Span::styled("FPS: ", Style::default().fg(Color::Yellow)),
            Span::raw(metrics.fps.to_string()),
            Span::raw("    "),
            Span::styled("Time: ", Style::default().fg(Color::Yellow)),
            Span::raw(metrics.format_time()),
        ]);

        Paragraph::new(line).alignment(Alignment::Center)
    }

    fn field(&self, state: &SnakeState) -> Paragraph<'_> {
        let size = state.field_size as i32;
        let head = state.snake.head();
        let lines: Vec<Line> = (0..size)
            .map(|y| {
                let spans: Vec<Span> = (0..size)
                    .map(|x| {
                        let pos = Position::new(x, y);
                        if pos == head {
                            Span::styled("  ", Style::default().bg(Color::LightCyan))
                        } else if state.snake.contains(pos) {
                            Span::styled("  ", Style::default().bg(Color::Cyan))
                        } else if pos == state.apple {
                            Span::styled("  ", Style::default().bg(Color::Yellow))
                        } else {
                            Span::raw("  ")
                        }
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Thick)
                .border_style(Style::default().fg(Color::White))
                .title(" Snake "),
        )
    }

    /// Shown before the first game and after each game over
    fn start_panel(&self, state: &SnakeState, metrics: &GameMetrics) -> Paragraph<'_> {
        let mut text = vec![Line::from("")];
        if state.status == Status::GameOver {
            text.push(Line::from(Span::styled(
                format!("Your final score is {}.", state.points),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            )));
            text.push(Line::from(Span::styled(
                format!("High score: {}", metrics.high_score),
                Style::default().fg(Color::Yellow),
            )));
            text.push(Line::from(""));
        }
        text.push(Line::from(Span::styled(
            "Press a key to start!",
            Style::default().fg(Color::Green),
        )));

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
    }

    fn help(&self) -> Paragraph<'_> {
        let line = Line::from(vec![
            Span::styled("UP = K; DOWN = J; LEFT = H; RIGHT = L", Style::default().fg(Color::Cyan)),
            Span::raw(" (arrows and WASD work too) | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ]);

        Paragraph::new(line).alignment(Alignment::Center)
    }
}

impl Default for SnakeRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// A column of `width` cells centered in `area`
pub(crate) fn centered(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}
