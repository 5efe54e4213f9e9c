use serde::{Deserialize, Serialize};

/// Direction the snake can move
///
/// The declaration order (Up, Down, Left, Right) is significant: gate exit
/// priorities are defined against it, see [`Direction::gate_exit_priority`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Returns true if turning from self to other would be a 180-degree turn
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    pub fn opposite(&self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Returns the delta (d_row, d_col) for moving in this direction
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    /// Order in which exit directions are tried when leaving an interior gate.
    ///
    /// Each row is `[d, d+1, d+3, d+2]` taken modulo 4 over the declaration
    /// order, not a geometric rotation: `Up` tries `Down` second. Kept as a
    /// literal table so reordering the enum cannot silently change it.
    pub fn gate_exit_priority(&self) -> [Direction; 4] {
        use Direction::*;
        match self {
            Up => [Up, Down, Right, Left],
            Down => [Down, Left, Up, Right],
            Left => [Left, Right, Down, Up],
            Right => [Right, Up, Left, Down],
        }
    }
}

/// Action that can be taken in the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move in a specific direction
    Move(Direction),
    /// Continue in current direction
    Continue,
}

impl From<Direction> for Action {
    fn from(direction: Direction) -> Self {
        Action::Move(direction)
    }
}

impl From<Option<Direction>> for Action {
    fn from(direction: Option<Direction>) -> Self {
        direction.map(Action::Move).unwrap_or(Action::Continue)
    }
}
