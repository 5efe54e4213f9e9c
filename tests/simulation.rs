use std::collections::HashSet;

use gate_snake::game::{
    Action, Cell, CrashCause, Direction, GameConfig, GameEngine, GameState, Position, Status,
    StepEvent, STAGE_COUNT,
};
use proptest::prelude::*;

fn engine(seed: u64) -> GameEngine {
    GameEngine::new(GameConfig::default().with_seed(seed)).unwrap()
}

fn assert_border(state: &GameState) {
    let grid = &state.grid;
    for coord in grid.coords().filter(|c| grid.is_border(*c)) {
        let cell = grid.cell(coord);
        if grid.is_corner(coord) {
            assert_eq!(cell, Cell::ImmuneWall);
        } else {
            assert!(matches!(cell, Cell::Wall | Cell::Gate), "{coord:?} is {cell:?}");
        }
    }
}

/// Turn relative to the current heading, never reversing
fn steer(current: Direction, choice: u8) -> Action {
    let (left, right) = match current {
        Direction::Up | Direction::Down => (Direction::Left, Direction::Right),
        Direction::Left | Direction::Right => (Direction::Up, Direction::Down),
    };
    match choice % 3 {
        0 => Action::Continue,
        1 => Action::Move(left),
        _ => Action::Move(right),
    }
}

#[test]
fn stage_zero_growth_on_first_tick() {
    let mut engine = engine(17);
    let mut state = engine.reset().unwrap();
    assert_eq!(state.snake.head(), Position::new(5, 5));
    assert_eq!(state.snake.len(), 3);
    assert_eq!(state.snake.direction, Direction::Right);

    let coord = state.grid.locate(Position::new(5, 6)).unwrap();
    state.grid.set_cell(coord, Cell::GrowthItem);

    let result = engine.step(&mut state, Action::Move(Direction::Right));
    assert_eq!(result.status, Status::Playing);
    assert_eq!(state.snake.len(), 4);
    assert_eq!(state.counters.growth_count, 1);
}

#[test]
fn every_stage_starts_consistent() {
    let mut engine = engine(5);
    for stage in 0..STAGE_COUNT {
        let state = engine.start_stage(stage).unwrap();
        assert_border(&state);
        assert_eq!(state.grid.count(Cell::Gate), 2);
        assert_eq!(state.grid.count(Cell::GrowthItem), 2);
        assert_eq!(state.grid.count(Cell::PoisonItem), 1);
        assert_eq!(state.counters.gate_use_count, 0);
    }
}

#[test]
fn reversal_crashes_regardless_of_grid() {
    for seed in 0..10 {
        let mut engine = engine(seed);
        let mut state = engine.start_stage((seed % 4) as usize).unwrap();
        let result = engine.step(&mut state, Action::Move(Direction::Left));
        assert_eq!(result.status, Status::Crashed(CrashCause::Reversal));
    }
}

#[test]
fn same_seed_same_stage() {
    let a = engine(99).start_stage(2).unwrap();
    let b = engine(99).start_stage(2).unwrap();
    assert_eq!(a.grid, b.grid);
    assert_eq!(a.gates, b.gates);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn invariants_hold_while_playing(
        seed in any::<u64>(),
        stage in 0..STAGE_COUNT,
        moves in prop::collection::vec(0u8..3, 1..200),
    ) {
        let mut engine = engine(seed);
        let mut state = engine.start_stage(stage).unwrap();
        let mut last_max = state.counters.max_length;
        let mut last = state.counters;
        let mut exited_onto_body = false;

        for choice in moves {
            let action = steer(state.snake.direction, choice);
            let result = engine.step(&mut state, action);

            if !result.status.is_playing() {
                break;
            }

            prop_assert!(state.snake.len() >= 3);
            // A gate exit may land on the body; until then segments stay apart
            let unique: HashSet<Position> = state.snake.body.iter().copied().collect();
            let teleported = matches!(result.event, StepEvent::Teleported { .. });
            if teleported && unique.len() != state.snake.len() {
                exited_onto_body = true;
            }
            if !exited_onto_body {
                prop_assert_eq!(unique.len(), state.snake.len());
            }
            prop_assert!(state.counters.max_length >= last_max);
            prop_assert!(state.counters.growth_count >= last.growth_count);
            prop_assert!(state.counters.poison_count >= last.poison_count);
            prop_assert!(state.counters.gate_use_count >= last.gate_use_count);
            prop_assert_eq!(state.counters.ticks, last.ticks + 1);
            prop_assert_eq!(state.grid.count(Cell::Gate), 2);
            let items = state.grid.count(Cell::GrowthItem) + state.grid.count(Cell::PoisonItem);
            prop_assert!(items <= 3);
            assert_border(&state);

            last_max = state.counters.max_length;
            last = state.counters;
        }
    }

    #[test]
    fn crash_is_terminal(seed in any::<u64>(), ticks in 0usize..50) {
        let mut engine = engine(seed);
        let mut state = engine.reset().unwrap();
        state.status = Status::Crashed(CrashCause::Wall);
        let snake = state.snake.clone();

        for _ in 0..ticks {
            let result = engine.step(&mut state, Action::Continue);
            prop_assert!(result.terminated());
        }
        prop_assert_eq!(state.snake, snake);
    }
}
