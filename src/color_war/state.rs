use rand::Rng;
use tracing::{debug, info};

use super::board::{Board, Cell};
use super::bot;
use super::color::Color;
use super::config::ColorWarConfig;
use super::error::ColorWarError;
use super::player::{Player, PlayerId};

/// How a decided game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// One player holds more than half the board
    Winner { player: PlayerId, percent: u32 },
    /// The board is settled but nobody holds more than half of it
    Tie,
}

/// What a single accepted color pick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    pub player: PlayerId,
    pub color: Color,
    pub gained: usize,
}

/// True when the board is fully claimed, or when at least 90% of it is
/// claimed and one side holds more than half.
pub fn is_won(area: usize, first: usize, second: usize) -> bool {
    let claimed = first + second;
    if claimed >= area {
        return true;
    }
    claimed * 10 >= area * 9 && (holds_majority(area, first) || holds_majority(area, second))
}

fn holds_majority(area: usize, count: usize) -> bool {
    count * 2 > area
}

/// Share of the board as a whole percentage, rounded up
pub fn percent_of(area: usize, count: usize) -> u32 {
    ((count * 100).div_ceil(area)) as u32
}

/// Complete Color War state: the board and both seats.
///
/// `current` is the player whose turn it is; the two swap after every
/// accepted pick.
#[derive(Debug, Clone)]
pub struct ColorWarState {
    board: Board,
    current: Player,
    other: Player,
    outcome: Option<Outcome>,
    turns: u32,
}

impl ColorWarState {
    /// Start a fresh game with a random board and random distinct colors
    pub fn new<R: Rng + ?Sized>(config: &ColorWarConfig, rng: &mut R) -> Self {
        let size = config.board_size;
        let one_color = Color::random(rng);
        let two_color = loop {
            let color = Color::random(rng);
            if color != one_color {
                break color;
            }
        };

        let board = Board::random(size, rng);
        let one = Player::new(PlayerId::One, one_color, config.player_one, size);
        let two = Player::new(PlayerId::Two, two_color, config.player_two, size);

        info!(size, one = ?one_color, two = ?two_color, "new color war game");
        Self::from_parts(board, one, two)
    }

    /// Seat both players on `board`. Each home corner is repainted to its
    /// owner's color and claimed, then Player One floods before Player Two.
    pub fn from_parts(mut board: Board, mut one: Player, mut two: Player) -> Self {
        let size = board.size();

        let two_home = PlayerId::Two.home(size);
        board.set(two_home, two.color);
        two.add_cell(two_home);

        let one_home = PlayerId::One.home(size);
        board.set(one_home, one.color);
        one.add_cell(one_home);

        one.conquer(&board, &two);
        two.conquer(&board, &one);

        Self {
            board,
            current: one,
            other: two,
            outcome: None,
            turns: 0,
        }
    }

    /// Replace the game with a fresh one, keeping the seat controllers
    pub fn reset<R: Rng + ?Sized>(&mut self, config: &ColorWarConfig, rng: &mut R) {
        *self = Self::new(config, rng);
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Player whose turn it is
    pub fn current(&self) -> &Player {
        &self.current
    }

    pub fn other(&self) -> &Player {
        &self.other
    }

    pub fn player(&self, id: PlayerId) -> &Player {
        if self.current.id == id {
            &self.current
        } else {
            &self.other
        }
    }

    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Neither player owns the cell
    pub fn cell_free(&self, cell: Cell) -> bool {
        !self.current.has_cell(cell) && !self.other.has_cell(cell)
    }

    /// Neither player currently holds the color
    pub fn color_free(&self, color: Color) -> bool {
        self.current.color != color && self.other.color != color
    }

    pub fn owner(&self, cell: Cell) -> Option<PlayerId> {
        [&self.current, &self.other]
            .into_iter()
            .find(|player| player.has_cell(cell))
            .map(|player| player.id)
    }

    /// Color a cell is drawn with: its owner's color if owned
    pub fn display_color(&self, cell: Cell) -> Color {
        match self.owner(cell) {
            Some(id) => self.player(id).color,
            None => self.board.get(cell),
        }
    }

    /// Flood the current player's territory
    pub fn conquer_cells(&mut self) -> usize {
        self.current.conquer(&self.board, &self.other)
    }

    pub fn switch_players(&mut self) {
        std::mem::swap(&mut self.current, &mut self.other);
    }

    /// Color the current player's heuristic would choose
    pub fn bot_color<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
        bot::pick_color(&self.board, &self.current, &self.other, rng)
    }

    /// Play the current player's turn with `color`: repaint, flood, hand the
    /// turn over and settle the outcome if the game is decided.
    pub fn choose_color(&mut self, color: Color) -> Result<TurnReport, ColorWarError> {
        if self.outcome.is_some() {
            return Err(ColorWarError::GameOver);
        }
        if let Some(holder) = [&self.current, &self.other]
            .into_iter()
            .find(|player| player.color == color)
        {
            return Err(ColorWarError::ColorTaken(color.number(), holder.id));
        }

        let player = self.current.id;
        self.current.color = color;
        let gained = self.conquer_cells();
        self.switch_players();
        self.turns += 1;
        debug!(%player, ?color, gained, "color chosen");

        if self.game_won() {
            let outcome = match self.player_won() {
                Some(winner) => Outcome::Winner {
                    player: winner.id,
                    percent: percent_of(self.board.area(), winner.cell_count()),
                },
                None => Outcome::Tie,
            };
            info!(?outcome, turns = self.turns, "color war decided");
            self.outcome = Some(outcome);
        }

        Ok(TurnReport {
            player,
            color,
            gained,
        })
    }

    pub fn game_won(&self) -> bool {
        is_won(
            self.board.area(),
            self.current.cell_count(),
            self.other.cell_count(),
        )
    }

    /// The player holding more than half the board, if any
    pub fn player_won(&self) -> Option<&Player> {
        let area = self.board.area();
        [&self.current, &self.other]
            .into_iter()
            .find(|player| holds_majority(area, player.cell_count()))
    }
}
