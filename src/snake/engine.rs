use rand::{Rng, SeedableRng, rngs::StdRng};
use tracing::{debug, info};

use super::config::SnakeConfig;
use super::state::{Collision, Direction, Position, Snake, SnakeState, Status};

/// What happened during one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    Moved,
    AteApple,
    /// Crashed with lives to spare; snake and apple were put back
    LostLife(Collision),
    /// Crashed on the last life
    GameOver(Collision),
    /// Nothing moves while the game is over
    Idle,
}

/// Runs the Snake rules on a [`SnakeState`]
pub struct SnakeEngine {
    config: SnakeConfig,
    rng: StdRng,
}

impl SnakeEngine {
    pub fn new(config: SnakeConfig) -> Self {
        Self {
            config,
            rng: StdRng::from_entropy(),
        }
    }

    /// Engine with a fixed apple sequence
    pub fn seeded(config: SnakeConfig, seed: u64) -> Self {
        Self {
            config,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn config(&self) -> &SnakeConfig {
        &self.config
    }

    /// A fresh game: full lives, no points
    pub fn new_game(&self) -> SnakeState {
        let (snake, apple) = self.starting_layout();
        info!(size = self.config.field_size, "new snake game");
        SnakeState::new(snake, apple, self.config.field_size, self.config.lives)
    }

    /// Put the snake and apple back at their starting spots
    fn respawn(&self, state: &mut SnakeState) {
        let (snake, apple) = self.starting_layout();
        state.snake = snake;
        state.apple = apple;
    }

    /// Snake in the middle heading up, apple a third of the way in. On
    /// fields small enough for those to overlap, the apple takes the first
    /// free cell instead.
    fn starting_layout(&self) -> (Snake, Position) {
        let size = self.config.field_size as i32;
        let center = size / 2;
        let third = size / 3;
        let snake = Snake::new(
            Position::new(center, center),
            Direction::Up,
            self.config.initial_length,
        );

        let mut apple = Position::new(third, third);
        if snake.contains(apple) {
            let first_free = (0..size)
                .flat_map(|y| (0..size).map(move |x| Position::new(x, y)))
                .find(|pos| !snake.contains(*pos));
            if let Some(pos) = first_free {
                apple = pos;
            }
        }
        (snake, apple)
    }

    /// Advance the game by one frame, applying `turn` first if given
    pub fn step(&mut self, state: &mut SnakeState, turn: Option<Direction>) -> StepOutcome {
        if !state.is_running() {
            return StepOutcome::Idle;
        }
        state.frames += 1;

        if let Some(direction) = turn {
            state.snake.turn(direction);
        }

        let head = state.snake.next_head();
        let eats = head == state.apple;

        let collision = if !state.is_in_bounds(head) {
            Some(Collision::Wall)
        } else if state.snake.would_bite(head, eats) {
            Some(Collision::Body)
        } else {
            None
        };

        if let Some(collision) = collision {
            return self.crash(state, collision);
        }

        state.snake.advance(eats);
        if !eats {
            return StepOutcome::Moved;
        }

        state.points += 1;
        if let Some(apple) = self.spawn_apple(state) {
            state.apple = apple;
        }
        StepOutcome::AteApple
    }

    fn crash(&self, state: &mut SnakeState, collision: Collision) -> StepOutcome {
        state.lives = state.lives.saturating_sub(1);
        debug!(?collision, lives = state.lives, "snake crashed");

        if state.lives == 0 {
            state.status = Status::GameOver;
            info!(points = state.points, "snake game over");
            return StepOutcome::GameOver(collision);
        }

        self.respawn(state);
        StepOutcome::LostLife(collision)
    }

    /// Start over after a game over
    pub fn restart(&self, state: &mut SnakeState) {
        *state = self.new_game();
    }

    /// Random cell not covered by the snake, or None on a full field
    fn spawn_apple(&mut self, state: &SnakeState) -> Option<Position> {
        let size = state.field_size as i32;
        let free: Vec<Position> = (0..size)
            .flat_map(|y| (0..size).map(move |x| Position::new(x, y)))
            .filter(|pos| !state.snake.contains(*pos))
            .collect();

        if free.is_empty() {
            return None;
        }
        Some(free[self.rng.gen_range(0..free.len())])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> SnakeEngine {
        SnakeEngine::seeded(SnakeConfig::new(10), 42)
    }

    #[test]
    fn test_new_game_layout() {
        let state = engine().new_game();
        assert!(state.is_running());
        assert_eq!(state.points, 0);
        assert_eq!(state.lives, 3);
        assert_eq!(state.snake.len(), 4);
        assert_eq!(state.snake.head(), Position::new(5, 5));
        assert_eq!(state.snake.direction, Direction::Up);
        assert_eq!(state.apple, Position::new(3, 3));
    }

    #[test]
    fn test_apple_never_starts_under_the_snake() {
        let config = SnakeConfig {
            initial_length: 2,
            ..SnakeConfig::new(3)
        };
        let mut state = SnakeEngine::seeded(config.clone(), 7).new_game();

        assert_eq!(state.snake.head(), Position::new(1, 1));
        assert!(!state.snake.contains(state.apple));
        assert_eq!(state.apple, Position::new(0, 0));

        // Respawning after a crash uses the same layout
        state.snake = Snake::new(Position::new(0, 1), Direction::Left, 2);
        let mut engine = SnakeEngine::seeded(config, 7);
        assert_eq!(engine.step(&mut state, None), StepOutcome::LostLife(Collision::Wall));
        assert!(!state.snake.contains(state.apple));
    }

    #[test]
    fn test_basic_movement() {
        let mut engine = engine();
        let mut state = engine.new_game();

        let outcome = engine.step(&mut state, None);

        assert_eq!(outcome, StepOutcome::Moved);
        assert_eq!(state.snake.head(), Position::new(5, 4));
        assert_eq!(state.frames, 1);
    }

    #[test]
    fn test_eating_grows_and_scores() {
        let mut engine = engine();
        let mut state = engine.new_game();
        state.apple = state.snake.next_head();

        let outcome = engine.step(&mut state, None);

        assert_eq!(outcome, StepOutcome::AteApple);
        assert_eq!(state.points, 1);
        assert_eq!(state.snake.len(), 5);
        assert!(!state.snake.contains(state.apple));
    }

    #[test]
    fn test_reverse_turn_is_ignored() {
        let mut engine = engine();
        let mut state = engine.new_game();

        engine.step(&mut state, Some(Direction::Down));

        assert_eq!(state.snake.direction, Direction::Up);
        assert_eq!(state.snake.head(), Position::new(5, 4));
    }

    #[test]
    fn test_wall_costs_a_life_and_respawns() {
        let mut engine = engine();
        let mut state = engine.new_game();
        state.points = 7;
        state.snake = Snake::new(Position::new(0, 5), Direction::Left, 3);

        let outcome = engine.step(&mut state, None);

        assert_eq!(outcome, StepOutcome::LostLife(Collision::Wall));
        assert_eq!(state.lives, 2);
        assert_eq!(state.points, 7);
        assert_eq!(state.snake.head(), Position::new(5, 5));
        assert!(state.is_running());
    }

    #[test]
    fn test_body_collision() {
        let mut engine = engine();
        let mut state = engine.new_game();
        state.snake = Snake::new(Position::new(5, 5), Direction::Right, 5);

        engine.step(&mut state, Some(Direction::Down));
        engine.step(&mut state, Some(Direction::Left));
        let outcome = engine.step(&mut state, Some(Direction::Up));

        assert_eq!(outcome, StepOutcome::LostLife(Collision::Body));
    }

    #[test]
    fn test_last_life_ends_game() {
        let mut engine = engine();
        let mut state = engine.new_game();
        state.lives = 1;
        state.points = 4;
        state.snake = Snake::new(Position::new(5, 0), Direction::Up, 3);

        let outcome = engine.step(&mut state, None);

        assert_eq!(outcome, StepOutcome::GameOver(Collision::Wall));
        assert_eq!(state.status, Status::GameOver);
        assert_eq!(state.points, 4);
        assert_eq!(engine.step(&mut state, None), StepOutcome::Idle);

        engine.restart(&mut state);
        assert!(state.is_running());
        assert_eq!(state.lives, 3);
        assert_eq!(state.points, 0);
    }

    #[test]
    fn test_chasing_the_tail_is_safe() {
        let mut engine = engine();
        let mut state = engine.new_game();
        // A 2x2 loop: the head moves into the cell the tail is leaving
        state.snake = Snake::new(Position::new(5, 5), Direction::Up, 4);
        state.snake.body = [(5, 5), (4, 5), (4, 6), (5, 6)]
            .into_iter()
            .map(|(x, y)| Position::new(x, y))
            .collect();
        state.snake.direction = Direction::Down;

        let outcome = engine.step(&mut state, None);

        assert_eq!(outcome, StepOutcome::Moved);
        assert_eq!(state.snake.head(), Position::new(5, 6));
    }
}
