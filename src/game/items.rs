use super::grid::{Cell, Coord, Grid};
use super::state::Position;
use rand::seq::SliceRandom;
use rand::Rng;

/// Items placed per respawn cycle
pub const ITEMS_PER_BATCH: usize = 3;

/// Tracks the active growth/poison items and replaces them in balanced batches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSpawner {
    active: Vec<Coord>,
    max_attempts: usize,
}

impl ItemSpawner {
    /// `max_attempts` bounds the random draws per item before falling back
    /// to scanning for empty cells
    pub fn new(max_attempts: usize) -> Self {
        Self {
            active: Vec::with_capacity(ITEMS_PER_BATCH),
            max_attempts,
        }
    }

    pub fn active(&self) -> &[Coord] {
        &self.active
    }

    /// Forget an item the snake just ate
    pub fn consume(&mut self, coord: Coord) {
        self.active.retain(|c| *c != coord);
    }

    /// Clear every active item, then place a fresh batch on empty interior
    /// cells. Growth is chosen while the batch's growth count does not exceed
    /// its poison count, giving two growth and one poison per batch.
    ///
    /// Returns the number of items placed, which is below
    /// [`ITEMS_PER_BATCH`] only when the grid ran out of empty cells.
    pub fn respawn_balanced<R: Rng>(&mut self, grid: &mut Grid, rng: &mut R) -> usize {
        for coord in self.active.drain(..) {
            if grid.cell(coord).is_item() {
                grid.set_cell(coord, Cell::Empty);
            }
        }

        let (mut growth, mut poison) = (0, 0);
        while self.active.len() < ITEMS_PER_BATCH {
            let Some(coord) = self.pick_empty(grid, rng) else {
                log::warn!(
                    "no empty cell left for items, placed {} of {}",
                    self.active.len(),
                    ITEMS_PER_BATCH
                );
                break;
            };

            let item = if growth <= poison {
                growth += 1;
                Cell::GrowthItem
            } else {
                poison += 1;
                Cell::PoisonItem
            };
            grid.set_cell(coord, item);
            self.active.push(coord);
        }

        log::debug!("spawned items at {:?}", self.active);
        self.active.len()
    }

    fn pick_empty<R: Rng>(&self, grid: &Grid, rng: &mut R) -> Option<Coord> {
        let (height, width) = (grid.height() as i32, grid.width() as i32);

        for _ in 0..self.max_attempts {
            let pos = Position::new(rng.gen_range(1..height - 1), rng.gen_range(1..width - 1));
            match grid.locate(pos) {
                Some(coord) if grid.cell(coord) == Cell::Empty => return Some(coord),
                _ => continue,
            }
        }

        log::debug!("random item placement exhausted, scanning for empty cells");
        let empty: Vec<Coord> = grid
            .interior_coords()
            .filter(|coord| grid.cell(*coord) == Cell::Empty)
            .collect();
        empty.choose(rng).copied()
    }
}
