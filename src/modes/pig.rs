use anyhow::{Context, Result};
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use rand::rngs::StdRng;
use tokio::time::interval;
use tracing::debug;

use super::terminal::{self, RENDER_INTERVAL, Tui, game_rng};
use crate::input::{InputHandler, PigCommand};
use crate::pig::{Decision, PigConfig, PigGame};
use crate::render::PigRenderer;

pub struct PigMode {
    config: PigConfig,
    game: PigGame,
    rng: StdRng,
    renderer: PigRenderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl PigMode {
    pub fn new(config: PigConfig, seed: Option<u64>) -> Result<Self> {
        let mut rng = game_rng(seed);
        let game = PigGame::new(&config, &mut rng).context("Failed to seat pig players")?;

        Ok(Self {
            config,
            game,
            rng,
            renderer: PigRenderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> Result<()> {
        let mut terminal = terminal::enter()?;
        let result = self.run_game_loop(&mut terminal).await;
        terminal::leave(&mut terminal)?;
        result
    }

    async fn run_game_loop(&mut self, terminal: &mut Tui) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut bot_timer = interval(self.config.bot_delay().max(RENDER_INTERVAL));
        let mut render_timer = interval(RENDER_INTERVAL);

        loop {
            tokio::select! {
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event)?;
                    }
                }

                _ = bot_timer.tick() => {
                    self.play_bot_step();
                }

                _ = render_timer.tick() => {
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.game);
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

    fn handle_event(&mut self, event: Event) -> Result<()> {
        let Event::Key(key) = event else {
            return Ok(());
        };
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }

        let command = self.input_handler.pig_key(key);
        if command == PigCommand::Quit {
            self.should_quit = true;
            return Ok(());
        }

        if self.game.is_over() {
            if command == PigCommand::NewGame {
                self.game = PigGame::new(&self.config, &mut self.rng)
                    .context("Failed to seat pig players")?;
            }
            return Ok(());
        }

        if self.game.current().controller.is_bot() {
            return Ok(());
        }

        let decision = match command {
            PigCommand::Roll => Decision::Roll,
            PigCommand::Hold => Decision::Hold,
            _ => return Ok(()),
        };
        match self.game.play(decision, &mut self.rng) {
            Ok(event) => debug!(?event, "human move"),
            Err(err) => debug!(%err, "move ignored"),
        }
        Ok(())
    }

    /// One bot decision per tick, so each roll stays on screen for a moment
    fn play_bot_step(&mut self) {
        if self.game.is_over() || !self.game.current().controller.is_bot() {
            return;
        }
        let decision = self.game.bot_decision(&mut self.rng);
        match self.game.play(decision, &mut self.rng) {
            Ok(event) => debug!(?event, "bot move"),
            Err(err) => debug!(%err, "bot move rejected"),
        }
    }
}
