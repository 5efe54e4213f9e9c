//! Compiled-in stage table: interior wall layouts and missions.

use super::mission::Mission;
use super::state::Position;

/// Straight run of interior wall cells, end exclusive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallSegment {
    Row { row: i32, cols: (i32, i32) },
    Column { col: i32, rows: (i32, i32) },
}

impl WallSegment {
    pub fn cells(&self) -> impl Iterator<Item = Position> {
        let (fixed, (start, end), horizontal) = match *self {
            WallSegment::Row { row, cols } => (row, cols, true),
            WallSegment::Column { col, rows } => (col, rows, false),
        };
        (start..end).map(move |i| {
            if horizontal {
                Position::new(fixed, i)
            } else {
                Position::new(i, fixed)
            }
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StageDef {
    pub walls: &'static [WallSegment],
    pub mission: Mission,
}

pub const STAGE_COUNT: usize = 4;

pub static STAGES: [StageDef; STAGE_COUNT] = [
    StageDef {
        walls: &[],
        mission: Mission::new(7, 4, 2, 1),
    },
    StageDef {
        walls: &[WallSegment::Column { col: 25, rows: (5, 16) }],
        mission: Mission::new(10, 5, 3, 2),
    },
    StageDef {
        walls: &[
            WallSegment::Row { row: 10, cols: (10, 20) },
            WallSegment::Column { col: 30, rows: (6, 15) },
        ],
        mission: Mission::new(12, 7, 5, 3),
    },
    StageDef {
        walls: &[
            WallSegment::Row { row: 10, cols: (10, 31) },
            WallSegment::Column { col: 30, rows: (5, 10) },
            WallSegment::Column { col: 10, rows: (11, 16) },
        ],
        mission: Mission::new(15, 8, 5, 4),
    },
];
