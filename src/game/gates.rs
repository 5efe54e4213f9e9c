use super::action::Direction;
use super::error::ConfigError;
use super::grid::{Cell, Coord, Grid};
use super::state::Position;
use rand::seq::index::sample;
use rand::Rng;

/// Where the snake comes out after entering a gate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Teleport {
    /// The gate the snake leaves from
    pub exit_gate: Coord,
    pub direction: Direction,
    /// New head position: the exit gate's neighbor in `direction`
    pub head: Position,
}

/// The two linked gates of a stage
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GatePair {
    gates: [Coord; 2],
}

impl GatePair {
    /// Turn two distinct non-corner wall cells into gates, chosen uniformly
    pub fn place<R: Rng>(grid: &mut Grid, stage: usize, rng: &mut R) -> Result<Self, ConfigError> {
        let candidates: Vec<Coord> = grid
            .coords()
            .filter(|coord| grid.cell(*coord) == Cell::Wall && !grid.is_corner(*coord))
            .collect();

        if candidates.len() < 2 {
            return Err(ConfigError::NotEnoughGateCandidates {
                stage,
                found: candidates.len(),
            });
        }

        let picked = sample(rng, candidates.len(), 2);
        let gates = [candidates[picked.index(0)], candidates[picked.index(1)]];
        for gate in gates {
            grid.set_cell(gate, Cell::Gate);
        }

        log::debug!("stage {stage} gates at {:?} and {:?}", gates[0], gates[1]);
        Ok(Self { gates })
    }

    pub fn gates(&self) -> [Coord; 2] {
        self.gates
    }

    /// The gate linked to `entered`
    pub fn other(&self, entered: Coord) -> Coord {
        if entered == self.gates[0] {
            self.gates[1]
        } else {
            self.gates[0]
        }
    }

    /// Exit through the gate opposite `entered`. Nothing between the two
    /// gates is checked, and the landing cell is not validated here.
    pub fn teleport(&self, grid: &Grid, entered: Coord, incoming: Direction) -> Teleport {
        let exit_gate = self.other(entered);
        let direction = exit_direction(grid, exit_gate, incoming);

        Teleport {
            exit_gate,
            direction,
            head: exit_gate.position().moved_in_direction(direction),
        }
    }
}

/// Direction the snake takes when leaving through `gate`.
///
/// Border gates always point into the field. Interior gates try
/// [`Direction::gate_exit_priority`] and take the first direction whose
/// neighbor is empty, keeping `incoming` if none is.
pub fn exit_direction(grid: &Grid, gate: Coord, incoming: Direction) -> Direction {
    if gate.row() == 0 {
        return Direction::Down;
    }
    if gate.row() == grid.height() - 1 {
        return Direction::Up;
    }
    if gate.col() == 0 {
        return Direction::Right;
    }
    if gate.col() == grid.width() - 1 {
        return Direction::Left;
    }

    incoming
        .gate_exit_priority()
        .into_iter()
        .find(|dir| {
            grid.neighbor(gate, *dir)
                .is_some_and(|coord| grid.cell(coord) == Cell::Empty)
        })
        .unwrap_or(incoming)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::stages::STAGES;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn at(grid: &Grid, row: i32, col: i32) -> Coord {
        grid.locate(Position::new(row, col)).unwrap()
    }

    #[test]
    fn test_places_two_distinct_gates_on_walls() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut grid = Grid::for_stage(21, 41, 2, STAGES[2].walls).unwrap();
            let pair = GatePair::place(&mut grid, 2, &mut rng).unwrap();

            let [a, b] = pair.gates();
            assert_ne!(a, b);
            assert!(!grid.is_corner(a) && !grid.is_corner(b));
            assert_eq!(grid.count(Cell::Gate), 2);
            assert_eq!(grid.count(Cell::ImmuneWall), 4);
        }
    }

    #[test]
    fn test_rejects_grid_without_candidates() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut grid = Grid::new(21, 41);
        let walls: Vec<Coord> = grid
            .coords()
            .filter(|c| grid.cell(*c) == Cell::Wall)
            .skip(1)
            .collect();
        for coord in walls {
            grid.set_cell(coord, Cell::ImmuneWall);
        }

        let result = GatePair::place(&mut grid, 0, &mut rng);
        assert_eq!(
            result,
            Err(ConfigError::NotEnoughGateCandidates { stage: 0, found: 1 })
        );
    }

    #[test]
    fn test_border_gates_point_inward() {
        let grid = Grid::new(21, 41);
        for incoming in Direction::ALL {
            assert_eq!(exit_direction(&grid, at(&grid, 0, 7), incoming), Direction::Down);
            assert_eq!(exit_direction(&grid, at(&grid, 20, 7), incoming), Direction::Up);
            assert_eq!(exit_direction(&grid, at(&grid, 9, 0), incoming), Direction::Right);
            assert_eq!(exit_direction(&grid, at(&grid, 9, 40), incoming), Direction::Left);
        }
    }

    #[test]
    fn test_interior_gate_keeps_incoming_when_free() {
        let grid = Grid::for_stage(21, 41, 1, STAGES[1].walls).unwrap();
        // Middle of the column wall at col 25: left and right are open
        let gate = at(&grid, 10, 25);
        assert_eq!(exit_direction(&grid, gate, Direction::Right), Direction::Right);
        assert_eq!(exit_direction(&grid, gate, Direction::Left), Direction::Left);
    }

    #[test]
    fn test_interior_gate_uses_enum_order_priority() {
        let grid = Grid::for_stage(21, 41, 1, STAGES[1].walls).unwrap();
        let gate = at(&grid, 10, 25);

        // Up is blocked by wall above, next in line for Up is Down (also
        // wall), then Right.
        assert_eq!(exit_direction(&grid, gate, Direction::Up), Direction::Right);
        // Down: Down blocked, Left is next.
        assert_eq!(exit_direction(&grid, gate, Direction::Down), Direction::Left);
    }

    #[test]
    fn test_interior_gate_falls_back_to_incoming() {
        let mut grid = Grid::new(21, 41);
        let gate = at(&grid, 10, 10);
        for dir in Direction::ALL {
            let coord = grid.neighbor(gate, dir).unwrap();
            grid.set_cell(coord, Cell::Wall);
        }
        assert_eq!(exit_direction(&grid, gate, Direction::Left), Direction::Left);
    }

    #[test]
    fn test_teleport_lands_next_to_other_gate() {
        for seed in 0..20 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut grid = Grid::for_stage(21, 41, 3, STAGES[3].walls).unwrap();
            let pair = GatePair::place(&mut grid, 3, &mut rng).unwrap();
            let [a, b] = pair.gates();

            for (entered, other) in [(a, b), (b, a)] {
                let jump = pair.teleport(&grid, entered, Direction::Right);
                assert_eq!(jump.exit_gate, other);
                assert_eq!(jump.head, other.position().moved_in_direction(jump.direction));
                assert_ne!(jump.head, entered.position());
            }
        }
    }
}
