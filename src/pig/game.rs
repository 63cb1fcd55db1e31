use std::collections::VecDeque;

use rand::Rng;
use tracing::{debug, info};

use super::bot::{self, Decision};
use super::config::PigConfig;
use super::error::PigError;
use super::player::{PigPlayer, Turn, name_seats, roll_die};

/// Messages kept for the on-screen log
const LOG_CAPACITY: usize = 12;

/// What a roll or hold did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnEvent {
    /// The die showed 2-6 and was added to the turn score
    Rolled { value: u8, turn_score: u32 },
    /// The die showed a 1; the turn score is gone and play moved on
    Busted,
    /// The turn score was banked and play moved on
    Held { banked: u32, score: u32 },
    /// The hold reached the target score
    Won { score: u32 },
}

/// A game of Pig between 2-4 seats
#[derive(Debug, Clone)]
pub struct PigGame {
    players: Vec<PigPlayer>,
    current: usize,
    turn: Turn,
    last_roll: Option<u8>,
    winner: Option<usize>,
    target: u32,
    log: VecDeque<String>,
}

impl PigGame {
    /// Seat the players and roll for order: highest roll goes first, ties
    /// keep seating order.
    pub fn new<R: Rng + ?Sized>(config: &PigConfig, rng: &mut R) -> Result<Self, PigError> {
        config.validate()?;

        let mut players = name_seats(&config.seats);
        for player in players.iter_mut() {
            player.roll_order = roll_die(rng);
        }
        players.sort_by(|a, b| b.roll_order.cmp(&a.roll_order));

        let mut game = Self::with_players(players, config.target_score);
        game.push_log("Rolling for order.");
        let first = game.players[0].name.clone();
        game.push_log(format!("First up: {first}"));
        info!(seats = game.players.len(), %first, "new pig game");
        Ok(game)
    }

    /// Seat players in the given order without rolling for it
    pub fn with_players(players: Vec<PigPlayer>, target: u32) -> Self {
        Self {
            players,
            current: 0,
            turn: Turn::default(),
            last_roll: None,
            winner: None,
            target,
            log: VecDeque::with_capacity(LOG_CAPACITY),
        }
    }

    pub fn players(&self) -> &[PigPlayer] {
        &self.players
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn current(&self) -> &PigPlayer {
        &self.players[self.current]
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    pub fn last_roll(&self) -> Option<u8> {
        self.last_roll
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    pub fn winner(&self) -> Option<&PigPlayer> {
        self.winner.map(|index| &self.players[index])
    }

    pub fn is_over(&self) -> bool {
        self.winner.is_some()
    }

    /// Newest message last
    pub fn log(&self) -> impl Iterator<Item = &str> {
        self.log.iter().map(String::as_str)
    }

    /// Roll for the current player
    pub fn roll<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<TurnEvent, PigError> {
        let value = roll_die(rng);
        self.apply_roll(value)
    }

    /// Apply a die value to the current turn
    pub fn apply_roll(&mut self, value: u8) -> Result<TurnEvent, PigError> {
        if self.is_over() {
            return Err(PigError::GameOver);
        }

        let name = self.current().name.clone();
        self.last_roll = Some(value);
        self.turn.rolls += 1;

        if value == 1 {
            debug!(player = %name, lost = self.turn.score, "busted");
            self.push_log(format!("{name} rolled a 1, turn score emptied"));
            self.next_player();
            return Ok(TurnEvent::Busted);
        }

        self.turn.score += u32::from(value);
        self.push_log(format!("{name} rolled {value}"));
        Ok(TurnEvent::Rolled {
            value,
            turn_score: self.turn.score,
        })
    }

    /// Bank the turn score for the current player
    pub fn hold(&mut self) -> Result<TurnEvent, PigError> {
        if self.is_over() {
            return Err(PigError::GameOver);
        }
        if self.turn.rolls == 0 {
            return Err(PigError::HoldBeforeRoll);
        }

        let banked = self.turn.score;
        let player = &mut self.players[self.current];
        player.score += banked;
        let score = player.score;
        let name = player.name.clone();

        if score >= self.target {
            self.winner = Some(self.current);
            self.push_log(format!("{name} has won!"));
            info!(winner = %name, score, "pig game won");
            return Ok(TurnEvent::Won { score });
        }

        self.push_log(format!("{name} holds, score {score}"));
        self.next_player();
        Ok(TurnEvent::Held { banked, score })
    }

    /// Carry out a decision for the current player
    pub fn play<R: Rng + ?Sized>(
        &mut self,
        decision: Decision,
        rng: &mut R,
    ) -> Result<TurnEvent, PigError> {
        match decision {
            Decision::Roll => self.roll(rng),
            Decision::Hold => self.hold(),
        }
    }

    /// What the heuristic would do in the current turn
    pub fn bot_decision<R: Rng + ?Sized>(&self, rng: &mut R) -> Decision {
        bot::decide(&self.turn, rng)
    }

    fn next_player(&mut self) {
        self.turn = Turn::default();
        self.current = (self.current + 1) % self.players.len();
        let name = self.current().name.clone();
        self.push_log(format!("It is {name}'s turn!"));
    }

    fn push_log(&mut self, message: impl Into<String>) {
        if self.log.len() == LOG_CAPACITY {
            self.log.pop_front();
        }
        self.log.push_back(message.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::Controller;
    use rand::{SeedableRng, rngs::StdRng};

    fn two_humans() -> PigGame {
        PigGame::with_players(
            vec![
                PigPlayer::new("Ann", Controller::Human),
                PigPlayer::new("Bob", Controller::Human),
            ],
            100,
        )
    }

    #[test]
    fn test_rolls_accumulate() {
        let mut game = two_humans();
        assert_eq!(
            game.apply_roll(4),
            Ok(TurnEvent::Rolled {
                value: 4,
                turn_score: 4
            })
        );
        game.apply_roll(6).unwrap();
        assert_eq!(game.turn(), Turn { score: 10, rolls: 2 });
        assert_eq!(game.current().name, "Ann");
    }

    #[test]
    fn test_rolling_one_clears_turn_and_passes() {
        let mut game = two_humans();
        game.apply_roll(5).unwrap();

        assert_eq!(game.apply_roll(1), Ok(TurnEvent::Busted));

        assert_eq!(game.turn(), Turn::default());
        assert_eq!(game.players()[0].score, 0);
        assert_eq!(game.current().name, "Bob");
        assert_eq!(game.last_roll(), Some(1));
    }

    #[test]
    fn test_hold_before_roll_is_rejected() {
        let mut game = two_humans();
        assert_eq!(game.hold(), Err(PigError::HoldBeforeRoll));
        assert_eq!(game.current().name, "Ann");
    }

    #[test]
    fn test_hold_banks_and_passes() {
        let mut game = two_humans();
        game.apply_roll(3).unwrap();
        game.apply_roll(5).unwrap();

        assert_eq!(game.hold(), Ok(TurnEvent::Held { banked: 8, score: 8 }));
        assert_eq!(game.players()[0].score, 8);
        assert_eq!(game.current().name, "Bob");

        game.apply_roll(2).unwrap();
        game.hold().unwrap();
        assert_eq!(game.current().name, "Ann");
    }

    #[test]
    fn test_reaching_target_wins() {
        let mut game = two_humans();
        game.players[0].score = 95;
        game.apply_roll(6).unwrap();

        assert_eq!(game.hold(), Ok(TurnEvent::Won { score: 101 }));
        assert!(game.is_over());
        assert_eq!(game.winner().map(|p| p.name.as_str()), Some("Ann"));
        assert_eq!(game.apply_roll(3), Err(PigError::GameOver));
        assert_eq!(game.hold(), Err(PigError::GameOver));
    }

    #[test]
    fn test_setup_rejects_bad_seat_counts() {
        let mut rng = StdRng::seed_from_u64(1);
        let config = PigConfig::new(vec![Controller::Human]);
        assert_eq!(
            PigGame::new(&config, &mut rng).err(),
            Some(PigError::SeatCount(1))
        );
    }

    #[test]
    fn test_setup_orders_by_roll() {
        let mut rng = StdRng::seed_from_u64(8);
        let config = PigConfig::new(vec![Controller::Human, Controller::Bot, Controller::Bot]);
        let game = PigGame::new(&config, &mut rng).unwrap();

        let orders: Vec<u8> = game.players().iter().map(|p| p.roll_order).collect();
        assert!(orders.windows(2).all(|pair| pair[0] >= pair[1]));
        assert!(game.log().any(|line| line.starts_with("First up:")));
    }

    #[test]
    fn test_bots_finish_a_game() {
        let mut rng = StdRng::seed_from_u64(77);
        let config = PigConfig::new(vec![Controller::Bot; 4]);
        let mut game = PigGame::new(&config, &mut rng).unwrap();

        for _ in 0..100_000 {
            if game.is_over() {
                break;
            }
            let decision = game.bot_decision(&mut rng);
            game.play(decision, &mut rng).unwrap();
        }

        let winner = game.winner().expect("bots should finish");
        assert!(winner.score >= 100);
    }

    #[test]
    fn test_log_is_bounded() {
        let mut game = two_humans();
        for _ in 0..40 {
            game.apply_roll(2).unwrap();
        }
        assert_eq!(game.log().count(), LOG_CAPACITY);
        assert_eq!(game.log().last(), Some("Ann rolled 2"));
    }
}
