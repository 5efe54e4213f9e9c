use super::action::Direction;
use super::gates::GatePair;
use super::grid::Grid;
use super::items::ItemSpawner;
use super::mission::Mission;
use serde::{Deserialize, Serialize};

/// A position on (or just off) the game grid
///
/// Positions are plain values and may point outside the grid; use
/// [`Grid::locate`] to turn one into an accessible cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Move position by delta
    pub fn moved_by(&self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }

    /// Move position in a direction
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (d_row, d_col) = direction.delta();
        self.moved_by(d_row, d_col)
    }
}

/// Shortest length the snake may have while alive
pub const MIN_SNAKE_LENGTH: usize = 3;

/// The snake in the game
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    /// Body segments, with head at index 0
    pub body: Vec<Position>,
    /// Current direction of movement
    pub direction: Direction,
}

impl Snake {
    /// Create a new snake with given starting position and direction
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let mut body = vec![head];

        // Add initial body segments behind the head
        let back = direction.opposite();
        for i in 1..length {
            let prev = body[i - 1];
            body.push(prev.moved_in_direction(back));
        }

        Self { body, direction }
    }

    /// Get the head position
    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Get the tail position (last segment)
    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    /// Candidate head position one step ahead; never clamped or wrapped
    pub fn next_head(&self) -> Position {
        self.head().moved_in_direction(self.direction)
    }

    /// True if `pos` is any segment, head included
    pub fn collides_with(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Prepend `next` as the new head, dropping the tail unless growing
    pub fn advance(&mut self, next: Position, grow: bool) {
        self.body.insert(0, next);

        if !grow {
            self.body.pop();
        }
    }

    /// Remove one trailing segment
    pub fn drop_tail(&mut self) {
        self.body.pop();
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Check if the snake is empty (should never happen in practice)
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Per-stage counters, reset whenever a stage starts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageState {
    pub growth_count: u32,
    pub poison_count: u32,
    pub gate_use_count: u32,
    /// Longest length reached this stage
    pub max_length: usize,
    /// Successful (non-crash) ticks this stage
    pub ticks: u64,
}

impl StageState {
    pub fn new(initial_length: usize) -> Self {
        Self {
            growth_count: 0,
            poison_count: 0,
            gate_use_count: 0,
            max_length: initial_length,
            ticks: 0,
        }
    }
}

/// Why the run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrashCause {
    /// Requested the exact reverse of the current direction
    Reversal,
    /// Snake hit a wall or immune corner
    Wall,
    /// Snake hit itself
    SelfCollision,
    /// Ate poison at minimum length
    Poison,
}

/// Simulation state machine status
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Playing,
    Crashed(CrashCause),
    StageCleared,
    AllStagesCleared,
}

impl Status {
    pub fn is_playing(&self) -> bool {
        matches!(self, Status::Playing)
    }

    /// Crashes and the final victory end the whole session
    pub fn ends_session(&self) -> bool {
        matches!(self, Status::Crashed(_) | Status::AllStagesCleared)
    }
}

/// Complete state of one stage in progress
#[derive(Debug, Clone)]
pub struct GameState {
    /// Zero-based stage index
    pub stage: usize,
    pub grid: Grid,
    pub snake: Snake,
    pub counters: StageState,
    pub mission: Mission,
    pub items: ItemSpawner,
    pub gates: GatePair,
    pub status: Status,
}

impl GameState {
    pub fn is_alive(&self) -> bool {
        !matches!(self.status, Status::Crashed(_))
    }

    /// One-based stage number, as shown to the player
    pub fn stage_number(&self) -> usize {
        self.stage + 1
    }

    pub fn mission_complete(&self) -> bool {
        self.mission.is_complete(self.snake.len(), &self.counters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_by(1, 0), Position::new(6, 5));
        assert_eq!(pos.moved_by(-1, 0), Position::new(4, 5));
        assert_eq!(pos.moved_by(0, 1), Position::new(5, 6));
        assert_eq!(pos.moved_by(0, -1), Position::new(5, 4));
        assert_eq!(pos.moved_in_direction(Direction::Up), Position::new(4, 5));
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(5, 5));
        assert_eq!(snake.body[1], Position::new(5, 4));
        assert_eq!(snake.tail(), Position::new(5, 3));
    }

    #[test]
    fn test_snake_advance() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3);

        let next = snake.next_head();
        assert_eq!(next, Position::new(5, 6));

        // Move without growing
        snake.advance(next, false);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(5, 6));
        assert_eq!(snake.tail(), Position::new(5, 4));

        // Move with growing
        snake.advance(snake.next_head(), true);
        assert_eq!(snake.len(), 4);
        assert_eq!(snake.head(), Position::new(5, 7));
        assert_eq!(snake.tail(), Position::new(5, 4));

        snake.drop_tail();
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.tail(), Position::new(5, 5));
    }

    #[test]
    fn test_advance_keeps_segments_distinct() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        let turns = [Direction::Down, Direction::Left, Direction::Up, Direction::Right];

        // Spiral while growing; every move avoids the body
        for (i, direction) in turns.iter().cycle().take(12).enumerate() {
            snake.direction = *direction;
            for _ in 0..(i / 2 + 1) {
                let next = snake.next_head();
                if snake.collides_with(next) {
                    continue;
                }
                snake.advance(next, i % 3 == 0);

                let unique: HashSet<Position> = snake.body.iter().copied().collect();
                assert_eq!(unique.len(), snake.len(), "duplicate in {:?}", snake.body);
            }
        }
    }

    #[test]
    fn test_next_head_is_not_clamped() {
        let snake = Snake::new(Position::new(0, 3), Direction::Up, 3);
        assert_eq!(snake.next_head(), Position::new(-1, 3));
    }

    #[test]
    fn test_collision_includes_head() {
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        assert!(snake.collides_with(Position::new(5, 5)));
        assert!(snake.collides_with(Position::new(5, 3)));
        assert!(!snake.collides_with(Position::new(10, 10)));
    }

    #[test]
    fn test_status_helpers() {
        assert!(Status::Playing.is_playing());
        assert!(Status::Crashed(CrashCause::Wall).ends_session());
        assert!(Status::AllStagesCleared.ends_session());
        assert!(!Status::StageCleared.ends_session());
    }
}
