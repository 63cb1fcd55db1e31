use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::snake::Direction;

/// Snake controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeCommand {
    Turn(Direction),
    Quit,
    /// Any other key; restarts the game once it is over
    Other,
}

/// Color War controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWarCommand {
    /// A digit key; the game decides whether it names a free color
    Pick(u8),
    NewGame,
    Quit,
    None,
}

/// Pig controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PigCommand {
    Roll,
    Hold,
    NewGame,
    Quit,
    None,
}

/// Maps key presses to per-game commands
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    fn is_quit(key: &KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return true;
        }
        matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
    }

    /// Arrows, vim keys (hjkl) and WASD
    pub fn snake_key(&self, key: KeyEvent) -> SnakeCommand {
        if Self::is_quit(&key) {
            return SnakeCommand::Quit;
        }

        let direction = match key.code {
            KeyCode::Up => Direction::Up,
            KeyCode::Down => Direction::Down,
            KeyCode::Left => Direction::Left,
            KeyCode::Right => Direction::Right,
            KeyCode::Char(c) => match c.to_ascii_lowercase() {
                'k' | 'w' => Direction::Up,
                'j' | 's' => Direction::Down,
                'h' | 'a' => Direction::Left,
                'l' | 'd' => Direction::Right,
                _ => return SnakeCommand::Other,
            },
            _ => return SnakeCommand::Other,
        };
        SnakeCommand::Turn(direction)
    }

    /// Digits pick colors, N starts over
    pub fn color_war_key(&self, key: KeyEvent) -> ColorWarCommand {
        if Self::is_quit(&key) {
            return ColorWarCommand::Quit;
        }

        match key.code {
            KeyCode::Char(c) if c.is_ascii_digit() => ColorWarCommand::Pick(c as u8 - b'0'),
            KeyCode::Char('n') | KeyCode::Char('N') => ColorWarCommand::NewGame,
            _ => ColorWarCommand::None,
        }
    }

    /// Y or R rolls, N or H holds, Enter starts over after a win
    pub fn pig_key(&self, key: KeyEvent) -> PigCommand {
        if Self::is_quit(&key) {
            return PigCommand::Quit;
        }

        match key.code {
            KeyCode::Char(c) => match c.to_ascii_lowercase() {
                'y' | 'r' | ' ' => PigCommand::Roll,
                'n' | 'h' => PigCommand::Hold,
                _ => PigCommand::None,
            },
            KeyCode::Enter => PigCommand::NewGame,
            _ => PigCommand::None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
