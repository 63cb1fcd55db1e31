use std::collections::VecDeque;

/// Heading of the snake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Column and row offset of one step
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }
}

/// A field coordinate; `y` grows downwards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn step(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// The snake: head at the front of `body`
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    pub body: VecDeque<Position>,
    pub direction: Direction,
}

impl Snake {
    /// Lay out a straight snake of `length` segments trailing behind `head`
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let back = direction.opposite();
        let mut body = VecDeque::with_capacity(length.max(1));
        let mut segment = head;
        body.push_back(segment);
        for _ in 1..length {
            segment = segment.step(back);
            body.push_back(segment);
        }
        Self { body, direction }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Turn towards `direction` unless it would reverse onto the neck
    pub fn turn(&mut self, direction: Direction) -> bool {
        if direction == self.direction.opposite() {
            return false;
        }
        self.direction = direction;
        true
    }

    /// Where the head goes next
    pub fn next_head(&self) -> Position {
        self.head().step(self.direction)
    }

    /// Whether `pos` hits the snake once it has moved. The tail segment
    /// moves away unless the snake is growing.
    pub fn would_bite(&self, pos: Position, growing: bool) -> bool {
        let skip_tail = usize::from(!growing);
        self.body
            .iter()
            .take(self.body.len().saturating_sub(skip_tail))
            .any(|segment| *segment == pos)
    }

    /// Advance one cell, keeping the tail when `grow` is set
    pub fn advance(&mut self, grow: bool) {
        let head = self.next_head();
        self.body.push_front(head);
        if !grow {
            self.body.pop_back();
        }
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }
}

/// What the snake ran into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    Wall,
    Body,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Before the first game; waiting for a key to begin
    Waiting,
    Running,
    /// Out of lives; waiting for a key to start over
    GameOver,
}

/// Complete Snake state
#[derive(Debug, Clone, PartialEq)]
pub struct SnakeState {
    pub snake: Snake,
    pub apple: Position,
    pub field_size: usize,
    pub points: u32,
    pub lives: u32,
    pub frames: u64,
    pub status: Status,
}

impl SnakeState {
    pub fn new(snake: Snake, apple: Position, field_size: usize, lives: u32) -> Self {
        Self {
            snake,
            apple,
            field_size,
            points: 0,
            lives,
            frames: 0,
            status: Status::Running,
        }
    }

    pub fn is_in_bounds(&self, pos: Position) -> bool {
        let size = self.field_size as i32;
        (0..size).contains(&pos.x) && (0..size).contains(&pos.y)
    }

    pub fn is_running(&self) -> bool {
        self.status == Status::Running
    }
}
