use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use rand::rngs::StdRng;
use tokio::time::interval;
use tracing::debug;

use super::terminal::{self, RENDER_INTERVAL, Tui, game_rng};
use crate::color_war::{Color, ColorWarConfig, ColorWarError, ColorWarState};
use crate::input::{ColorWarCommand, InputHandler};
use crate::render::ColorWarRenderer;

pub struct ColorWarMode {
    config: ColorWarConfig,
    state: ColorWarState,
    rng: StdRng,
    renderer: ColorWarRenderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl ColorWarMode {
    pub fn new(config: ColorWarConfig, seed: Option<u64>) -> Self {
        let mut rng = game_rng(seed);
        let state = ColorWarState::new(&config, &mut rng);

        Self {
            config,
            state,
            rng,
            renderer: ColorWarRenderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
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
        let mut bot_timer = interval(Duration::from_millis(self.config.bot_delay_ms.max(1)));
        let mut render_timer = interval(RENDER_INTERVAL);

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event);
                    }
                }

                _ = bot_timer.tick() => {
                    self.play_bot_turn();
                }

                _ = render_timer.tick() => {
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state);
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

        match self.input_handler.color_war_key(key) {
            ColorWarCommand::Quit => self.should_quit = true,
            ColorWarCommand::NewGame if self.state.outcome().is_some() => {
                self.state.reset(&self.config, &mut self.rng);
            }
            ColorWarCommand::Pick(number) if !self.state.current().controller.is_bot() => {
                if let Err(err) = self.pick(number) {
                    debug!(%err, "pick ignored");
                }
            }
            _ => {}
        }
    }

    fn pick(&mut self, number: u8) -> Result<(), ColorWarError> {
        let color = Color::from_number(number)?;
        let report = self.state.choose_color(color)?;
        debug!(player = %report.player, color = ?report.color, gained = report.gained, "human pick");
        Ok(())
    }

    /// Let a bot seat move if it is its turn
    fn play_bot_turn(&mut self) {
        if self.state.outcome().is_some() || !self.state.current().controller.is_bot() {
            return;
        }
        let color = self.state.bot_color(&mut self.rng);
        match self.state.choose_color(color) {
            Ok(report) => debug!(player = %report.player, gained = report.gained, "bot turn done"),
            Err(err) => debug!(%err, "bot pick rejected"),
        }
    }
}
