use super::action::Direction;
use super::error::ConfigError;
use super::stages::WallSegment;
use super::state::Position;

/// Terrain value of a single cell
///
/// The snake is never stored here; renderers overlay it on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Wall,
    /// Border corner: blocks like a wall, never hosts a gate
    ImmuneWall,
    GrowthItem,
    PoisonItem,
    Gate,
}

impl Cell {
    /// Wall or immune corner
    pub fn is_solid(&self) -> bool {
        matches!(self, Cell::Wall | Cell::ImmuneWall)
    }

    pub fn is_item(&self) -> bool {
        matches!(self, Cell::GrowthItem | Cell::PoisonItem)
    }
}

/// A coordinate known to lie inside the grid it came from.
///
/// Only [`Grid`] constructs these, so indexing with one cannot go out of
/// bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn position(&self) -> Position {
        Position::new(self.row as i32, self.col as i32)
    }
}

/// Bounded playfield
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Empty interior, wall ring, immune corners
    ///
    /// # Panics
    ///
    /// Panics if `height` or `width` is zero. [`GameConfig::validate`]
    /// rejects anything below 3x3 before a stage is built.
    ///
    /// [`GameConfig::validate`]: super::config::GameConfig::validate
    pub fn new(height: usize, width: usize) -> Self {
        let mut grid = Self {
            height,
            width,
            cells: vec![Cell::Empty; height * width],
        };

        for row in 0..height {
            for col in 0..width {
                if row == 0 || col == 0 || row == height - 1 || col == width - 1 {
                    grid.cells[row * width + col] = Cell::Wall;
                }
            }
        }

        for coord in grid.corners() {
            grid.set_cell(coord, Cell::ImmuneWall);
        }

        grid
    }

    /// Full rebuild for a stage: border ring first, then the stage's
    /// interior walls. Every wall must land strictly inside the border.
    pub fn for_stage(
        height: usize,
        width: usize,
        stage: usize,
        walls: &[WallSegment],
    ) -> Result<Self, ConfigError> {
        let mut grid = Self::new(height, width);

        for segment in walls {
            for pos in segment.cells() {
                let coord = grid
                    .locate(pos)
                    .filter(|coord| !grid.is_border(*coord))
                    .ok_or(ConfigError::LayoutOutOfBounds { stage, pos })?;
                grid.set_cell(coord, Cell::Wall);
            }
        }

        Ok(grid)
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    /// Validate a position against the grid bounds
    pub fn locate(&self, pos: Position) -> Option<Coord> {
        if pos.row < 0 || pos.col < 0 {
            return None;
        }
        let (row, col) = (pos.row as usize, pos.col as usize);
        (row < self.height && col < self.width).then_some(Coord { row, col })
    }

    pub fn cell(&self, coord: Coord) -> Cell {
        self.cells[coord.row * self.width + coord.col]
    }

    pub fn set_cell(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.row * self.width + coord.col] = cell;
    }

    /// Cell at an arbitrary position, `None` when off the grid
    pub fn cell_at(&self, pos: Position) -> Option<Cell> {
        self.locate(pos).map(|coord| self.cell(coord))
    }

    /// Neighbor of `coord` in `direction`, if it is on the grid
    pub fn neighbor(&self, coord: Coord, direction: Direction) -> Option<Coord> {
        self.locate(coord.position().moved_in_direction(direction))
    }

    pub fn is_border(&self, coord: Coord) -> bool {
        coord.row == 0
            || coord.col == 0
            || coord.row == self.height - 1
            || coord.col == self.width - 1
    }

    pub fn is_corner(&self, coord: Coord) -> bool {
        (coord.row == 0 || coord.row == self.height - 1)
            && (coord.col == 0 || coord.col == self.width - 1)
    }

    pub fn corners(&self) -> [Coord; 4] {
        let (bottom, right) = (self.height - 1, self.width - 1);
        [
            Coord { row: 0, col: 0 },
            Coord { row: 0, col: right },
            Coord { row: bottom, col: 0 },
            Coord { row: bottom, col: right },
        ]
    }

    /// All coordinates in row-major order
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.height).flat_map(move |row| (0..self.width).map(move |col| Coord { row, col }))
    }

    /// Coordinates strictly inside the border ring, row-major
    pub fn interior_coords(&self) -> impl Iterator<Item = Coord> + '_ {
        self.coords().filter(move |coord| !self.is_border(*coord))
    }

    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|c| **c == cell).count()
    }
}
