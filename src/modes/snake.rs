use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use tokio::time::interval;
use tracing::info;

use super::terminal::{self, RENDER_INTERVAL, Tui};
use crate::input::{InputHandler, SnakeCommand};
use crate::metrics::GameMetrics;
use crate::render::SnakeRenderer;
use crate::snake::{Direction, SnakeConfig, SnakeEngine, SnakeState, Status, StepOutcome};

pub struct SnakeMode {
    engine: SnakeEngine,
    state: SnakeState,
    metrics: GameMetrics,
    renderer: SnakeRenderer,
    input_handler: InputHandler,
    should_quit: bool,
    pending_direction: Option<Direction>,
}

impl SnakeMode {
    pub fn new(config: SnakeConfig, seed: Option<u64>) -> Self {
        let engine = match seed {
            Some(seed) => SnakeEngine::seeded(config, seed),
            None => SnakeEngine::new(config),
        };
        let mut state = engine.new_game();
        state.status = Status::Waiting;

        Self {
            engine,
            state,
            metrics: GameMetrics::new(),
            renderer: SnakeRenderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
            pending_direction: None,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = terminal::enter()?;
        let result = self.run_game_loop(&mut terminal).await;
        terminal::leave(&mut terminal)?;
        result
    }

    async fn run_game_loop(&mut self, terminal: &mut Tui) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut tick_timer = interval(self.engine.config().frame_interval());
        let mut render_timer = interval(RENDER_INTERVAL);

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                _ = tick_timer.tick() => {
                    self.update_game();
                }

                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) {
        let Event::Key(key) = event else {
            return;
        };
        if key.kind != KeyEventKind::Press {
            return;
        }

        match self.input_handler.snake_key(key) {
            SnakeCommand::Quit => self.should_quit = true,
            _ if self.state.status == Status::Waiting => self.start(),
            _ if !self.state.is_running() => self.restart(),
            SnakeCommand::Turn(direction) => self.pending_direction = Some(direction),
            SnakeCommand::Other => {}
        }
    }

    fn update_game(&mut self) {
        if !self.state.is_running() {
            return;
        }

        let turn = self.pending_direction.take();
        let outcome = self.engine.step(&mut self.state, turn);
        self.metrics.on_frame();

        if let StepOutcome::GameOver(_) = outcome {
            self.metrics.on_game_over(self.state.points);
        }
    }

    fn start(&mut self) {
        info!("starting snake");
        self.state.status = Status::Running;
        self.metrics.on_game_start();
    }

    fn restart(&mut self) {
        info!(high_score = self.metrics.high_score, "restarting snake");
        self.engine.restart(&mut self.state);
        self.metrics.on_game_start();
        self.pending_direction = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::snake::{Position, Snake};
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mode() -> SnakeMode {
        let mut mode = SnakeMode::new(SnakeConfig::new(10), Some(4));
        mode.handle_event(key(KeyCode::Enter));
        mode
    }

    #[test]
    fn test_waits_for_a_key_before_first_game() {
        let mut mode = SnakeMode::new(SnakeConfig::new(10), Some(4));
        assert_eq!(mode.state.status, Status::Waiting);
        assert_eq!(mode.state.lives, 3);

        let head = mode.state.snake.head();
        mode.update_game();
        assert_eq!(mode.state.snake.head(), head);
        assert_eq!(mode.state.frames, 0);

        // The starting key does not steer
        mode.handle_event(key(KeyCode::Char('h')));
        assert!(mode.state.is_running());
        assert_eq!(mode.pending_direction, None);

        mode.update_game();
        assert_eq!(mode.state.snake.direction, Direction::Up);
        assert_eq!(mode.state.frames, 1);
    }

    #[test]
    fn test_turn_is_applied_on_next_tick() {
        let mut mode = mode();
        mode.handle_event(key(KeyCode::Char('h')));
        assert_eq!(mode.pending_direction, Some(Direction::Left));

        mode.update_game();

        assert_eq!(mode.state.snake.direction, Direction::Left);
        assert_eq!(mode.pending_direction, None);
    }

    #[test]
    fn test_game_over_then_any_key_restarts() {
        let mut mode = mode();
        mode.state.lives = 1;
        mode.state.points = 6;
        mode.state.snake = Snake::new(Position::new(0, 0), Direction::Up, 3);

        mode.update_game();
        assert_eq!(mode.state.status, Status::GameOver);
        assert_eq!(mode.metrics.high_score, 6);
        assert_eq!(mode.metrics.games_played, 1);

        mode.handle_event(key(KeyCode::Char('x')));
        assert!(mode.state.is_running());
        assert_eq!(mode.state.points, 0);
        assert_eq!(mode.state.lives, 3);
    }

    #[test]
    fn test_quit_key() {
        let mut mode = mode();
        mode.handle_event(key(KeyCode::Char('q')));
        assert!(mode.should_quit);
    }
}
