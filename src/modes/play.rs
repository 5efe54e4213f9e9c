use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{Stderr, stderr};
use std::time::Duration;
use tokio::time::interval;

use crate::game::{Action, Direction, GameConfig, GameEngine, GameState, Status};
use crate::input::{InputHandler, KeyAction};
use crate::metrics::GameMetrics;
use crate::render::Renderer;

/// Keyboard-driven session over all stages
pub struct PlayMode {
    engine: GameEngine,
    state: GameState,
    metrics: GameMetrics,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
    /// Latest direction pressed since the last tick
    pending_direction: Option<Direction>,
}

impl PlayMode {
    /// `first_stage` is zero-based
    pub fn new(config: GameConfig, first_stage: usize) -> Result<Self> {
        let mut engine = GameEngine::new(config).context("Invalid game configuration")?;
        let state = engine
            .start_stage(first_stage)
            .with_context(|| format!("Failed to build stage {}", first_stage + 1))?;

        Ok(Self {
            engine,
            state,
            metrics: GameMetrics::new(),
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
            pending_direction: None,
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;

        // Cleanup terminal
        self.cleanup_terminal(&mut terminal)?;

        result
    }

    async fn run_game_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        let mut event_stream = EventStream::new();

        let tick_interval = Duration::from_millis(self.engine.config().tick_interval_ms);
        let mut tick_timer = interval(tick_interval);

        // Render at 30 FPS (33ms per frame)
        let render_interval = Duration::from_millis(33);
        let mut render_timer = interval(render_interval);

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    if let Some(Ok(event)) = maybe_event {
                        self.handle_event(event)?;
                    }
                }

                // Game logic tick
                _ = tick_timer.tick() => {
                    self.update_game();
                }

                // Render frame
                _ = render_timer.tick() => {
                    self.metrics.update();
                    terminal.draw(|frame| {
                        self.renderer.render(frame, &self.state, &self.metrics);
                    }).context("Failed to draw frame")?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn handle_event(&mut self, event: Event) -> Result<()> {
        if let Event::Key(key) = event {
            // Only process key press events, not release
            if key.kind != KeyEventKind::Press {
                return Ok(());
            }

            let action = self.input_handler.handle_key_event(key);
            self.handle_key_action(action)?;
        }

        Ok(())
    }

    fn handle_key_action(&mut self, action: KeyAction) -> Result<()> {
        if action == KeyAction::Quit {
            self.should_quit = true;
            return Ok(());
        }

        if !self.state.status.is_playing() {
            // Any key dismisses the outcome screen
            return self.acknowledge_outcome();
        }

        if let KeyAction::GameAction(Action::Move(dir)) = action {
            self.pending_direction = Some(dir);
        }

        Ok(())
    }

    fn acknowledge_outcome(&mut self) -> Result<()> {
        match self.state.status {
            Status::StageCleared => {
                match self
                    .engine
                    .next_stage(&self.state)
                    .context("Failed to build next stage")?
                {
                    Some(next) => {
                        self.state = next;
                        self.pending_direction = None;
                        self.metrics.on_stage_start();
                    }
                    None => self.should_quit = true,
                }
            }
            Status::Crashed(_) | Status::AllStagesCleared => self.should_quit = true,
            Status::Playing => {}
        }

        Ok(())
    }

    fn update_game(&mut self) {
        if !self.state.status.is_playing() {
            return;
        }

        let action = Action::from(self.pending_direction.take());
        let result = self.engine.step(&mut self.state, action);

        if matches!(
            result.status,
            Status::StageCleared | Status::AllStagesCleared
        ) {
            self.metrics.on_stage_cleared();
        }
    }

    fn cleanup_terminal(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<Stderr>>,
    ) -> Result<()> {
        disable_raw_mode().context("Failed to disable raw mode")?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen")?;
        terminal.show_cursor().context("Failed to show cursor")?;
        Ok(())
    }
}
