use super::{
    action::{Action, Direction},
    config::GameConfig,
    error::ConfigError,
    gates::GatePair,
    grid::{Cell, Coord, Grid},
    items::ItemSpawner,
    stages::{STAGES, STAGE_COUNT},
    state::{CrashCause, GameState, Snake, StageState, Status, MIN_SNAKE_LENGTH},
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Direction the snake faces at the start of every stage
pub const START_DIRECTION: Direction = Direction::Right;

/// Segments lost when eating poison
pub const POISON_COST: usize = 1;

/// What happened during a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent {
    /// Plain move onto an empty cell
    Moved,
    AteGrowth,
    AtePoison,
    /// Entered gate `from`, came out next to gate `to`
    Teleported { from: Coord, to: Coord },
    Crashed(CrashCause),
    /// The state was not playing; nothing changed
    Idle,
}

/// Result of a game step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepResult {
    /// Status after the step
    pub status: Status,
    pub event: StepEvent,
    /// Whether the item batch was replaced at the end of this step
    pub items_respawned: bool,
}

impl StepResult {
    pub fn terminated(&self) -> bool {
        !self.status.is_playing()
    }
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: StdRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self { config, rng })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Start the first stage
    pub fn reset(&mut self) -> Result<GameState, ConfigError> {
        self.start_stage(0)
    }

    /// Build a fresh stage: terrain, gates, first item batch, new snake and
    /// zeroed counters
    pub fn start_stage(&mut self, stage: usize) -> Result<GameState, ConfigError> {
        let def = STAGES.get(stage).ok_or(ConfigError::UnknownStage {
            stage,
            count: STAGE_COUNT,
        })?;

        let mut grid = Grid::for_stage(
            self.config.grid_height,
            self.config.grid_width,
            stage,
            def.walls,
        )?;

        let snake = Snake::new(
            self.config.snake_start,
            START_DIRECTION,
            self.config.initial_snake_length,
        );
        for &pos in &snake.body {
            if grid.cell_at(pos) != Some(Cell::Empty) {
                return Err(ConfigError::StartBlocked { stage, pos });
            }
        }

        let gates = GatePair::place(&mut grid, stage, &mut self.rng)?;

        let mut items = ItemSpawner::new(self.config.max_spawn_attempts);
        items.respawn_balanced(&mut grid, &mut self.rng);

        log::info!("stage {} started, mission {:?}", stage + 1, def.mission);

        Ok(GameState {
            stage,
            grid,
            snake,
            counters: StageState::new(self.config.initial_snake_length),
            mission: def.mission,
            items,
            gates,
            status: Status::Playing,
        })
    }

    /// The stage after `state`, or `None` once the last stage is done
    pub fn next_stage(&mut self, state: &GameState) -> Result<Option<GameState>, ConfigError> {
        let next = state.stage + 1;
        if next >= STAGE_COUNT {
            return Ok(None);
        }
        self.start_stage(next).map(Some)
    }

    /// Execute one tick of the game
    pub fn step(&mut self, state: &mut GameState, action: Action) -> StepResult {
        if !state.status.is_playing() {
            return StepResult {
                status: state.status,
                event: StepEvent::Idle,
                items_respawned: false,
            };
        }

        if let Action::Move(direction) = action {
            // A 180 degree turn runs into the neck
            if state.snake.direction.is_opposite(direction) {
                return Self::crash(state, CrashCause::Reversal);
            }
            state.snake.direction = direction;
        }

        let next = state.snake.next_head();

        let Some(coord) = state.grid.locate(next) else {
            return Self::crash(state, CrashCause::Wall);
        };
        let cell = state.grid.cell(coord);

        if cell.is_solid() {
            return Self::crash(state, CrashCause::Wall);
        }
        if state.snake.collides_with(next) {
            return Self::crash(state, CrashCause::SelfCollision);
        }

        let event = match cell {
            Cell::GrowthItem => {
                state.grid.set_cell(coord, Cell::Empty);
                state.items.consume(coord);
                state.counters.growth_count += 1;
                if state.snake.len() == state.counters.max_length {
                    state.counters.max_length += 1;
                }
                state.snake.advance(next, true);
                StepEvent::AteGrowth
            }
            Cell::PoisonItem => {
                // Lethal at the minimum length
                if state.snake.len() <= MIN_SNAKE_LENGTH {
                    return Self::crash(state, CrashCause::Poison);
                }
                state.grid.set_cell(coord, Cell::Empty);
                state.items.consume(coord);
                state.counters.poison_count += 1;
                state.snake.advance(next, false);
                for _ in 0..POISON_COST {
                    state.snake.drop_tail();
                }
                StepEvent::AtePoison
            }
            Cell::Gate => {
                state.counters.gate_use_count += 1;
                let jump = state.gates.teleport(&state.grid, coord, state.snake.direction);
                state.snake.direction = jump.direction;
                state.snake.advance(jump.head, false);
                log::debug!(
                    "teleported from {:?} to {:?} heading {:?}",
                    coord,
                    jump.exit_gate,
                    jump.direction
                );
                StepEvent::Teleported {
                    from: coord,
                    to: jump.exit_gate,
                }
            }
            _ => {
                state.snake.advance(next, false);
                StepEvent::Moved
            }
        };

        state.counters.ticks += 1;

        let items_respawned = state.counters.ticks % self.config.item_respawn_interval == 0;
        if items_respawned {
            state.items.respawn_balanced(&mut state.grid, &mut self.rng);
        }

        // First tick with every target met clears the stage
        if state.mission_complete() {
            state.status = if state.stage + 1 == STAGE_COUNT {
                Status::AllStagesCleared
            } else {
                Status::StageCleared
            };
            log::info!(
                "stage {} cleared after {} ticks",
                state.stage_number(),
                state.counters.ticks
            );
        }

        StepResult {
            status: state.status,
            event,
            items_respawned,
        }
    }

    fn crash(state: &mut GameState, cause: CrashCause) -> StepResult {
        state.status = Status::Crashed(cause);
        log::info!(
            "crashed in stage {} ({:?}) at length {}",
            state.stage_number(),
            cause,
            state.snake.len()
        );

        StepResult {
            status: state.status,
            event: StepEvent::Crashed(cause),
            items_respawned: false,
        }
    }
}
