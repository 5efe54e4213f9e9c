use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
};

use crate::game::{Cell, CrashCause, GameState, Position, Status};
use crate::metrics::GameMetrics;

const PANEL_WIDTH: u16 = 28;

pub struct Renderer;

impl Renderer {
    pub fn new() -> Self {
        Self
    }

    pub fn render(&self, frame: &mut Frame, state: &GameState, metrics: &GameMetrics) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Header
                Constraint::Min(0),    // Game area
                Constraint::Length(3), // Footer
            ])
            .split(frame.area());

        let stats = self.render_stats(state, metrics);
        frame.render_widget(stats, chunks[0]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(PANEL_WIDTH)])
            .split(chunks[1]);

        match state.status {
            Status::Playing => frame.render_widget(self.render_grid(state), body[0]),
            status => frame.render_widget(self.render_outcome(state, status), body[0]),
        }

        let panels = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(7), Constraint::Length(7), Constraint::Min(0)])
            .split(body[1]);
        frame.render_widget(self.render_scoreboard(state), panels[0]);
        frame.render_widget(self.render_mission(state), panels[1]);

        let controls = self.render_controls();
        frame.render_widget(controls, chunks[2]);
    }

    fn render_grid(&self, state: &GameState) -> Paragraph<'_> {
        let mut lines = Vec::with_capacity(state.grid.height());

        for row in 0..state.grid.height() {
            let mut spans = Vec::with_capacity(state.grid.width());

            for col in 0..state.grid.width() {
                let pos = Position::new(row as i32, col as i32);

                let cell = if pos == state.snake.head() {
                    Span::styled(
                        "@ ",
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    )
                } else if state.snake.collides_with(pos) {
                    Span::styled("o ", Style::default().fg(Color::Green))
                } else {
                    let cell = state.grid.cell_at(pos).unwrap_or(Cell::Wall);
                    Span::styled(glyph(cell), cell_style(cell))
                };

                spans.push(cell);
            }

            lines.push(Line::from(spans));
        }

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Double)
                    .border_style(Style::default().fg(Color::White))
                    .title(format!(" Stage {} ", state.stage_number())),
            )
            .alignment(Alignment::Center)
    }

    fn render_stats(&self, state: &GameState, metrics: &GameMetrics) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("Stage: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.stage_number().to_string(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("    "),
            Span::styled("Ticks: ", Style::default().fg(Color::Yellow)),
            Span::styled(
                state.counters.ticks.to_string(),
                Style::default().fg(Color::White),
            ),
            Span::raw("    "),
            Span::styled("Stage time: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_stage_time(), Style::default().fg(Color::White)),
            Span::raw("    "),
            Span::styled("Total: ", Style::default().fg(Color::Yellow)),
            Span::styled(metrics.format_time(), Style::default().fg(Color::White)),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }

    fn render_scoreboard(&self, state: &GameState) -> Paragraph<'_> {
        let counters = &state.counters;
        let text = vec![
            Line::from(format!(
                "B: {:2} / {:2} (CURR / MAX)",
                state.snake.len(),
                counters.max_length
            )),
            Line::from(format!("+: {:2}", counters.growth_count)),
            Line::from(format!("-: {:2}", counters.poison_count)),
            Line::from(format!("G: {:2}", counters.gate_use_count)),
        ];

        Paragraph::new(text).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Score Board "),
        )
    }

    fn render_mission(&self, state: &GameState) -> Paragraph<'_> {
        let mission = &state.mission;
        let done = mission.progress(state.snake.len(), &state.counters);

        let text = vec![
            mission_line("B", mission.target_length as u32, done.length),
            mission_line("+", mission.growth_target, done.growth),
            mission_line("-", mission.poison_target, done.poison),
            mission_line("G", mission.gate_target, done.gates),
        ];

        Paragraph::new(text).block(Block::default().borders(Borders::ALL).title(" Mission "))
    }

    fn render_outcome(&self, state: &GameState, status: Status) -> Paragraph<'_> {
        let (headline, color, detail, prompt) = match status {
            Status::Crashed(cause) => (
                "Game Over!".to_string(),
                Color::Red,
                crash_reason(cause),
                "Press any key to exit...",
            ),
            Status::StageCleared => (
                format!("Stage {} Clear!", state.stage_number()),
                Color::Green,
                "",
                "Press any key to continue...",
            ),
            Status::AllStagesCleared => (
                "!! Congratulations !!".to_string(),
                Color::Yellow,
                "!! All Stages Cleared !!",
                "Press any key to exit...",
            ),
            Status::Playing => (String::new(), Color::White, "", ""),
        };

        let text = vec![
            Line::from(""),
            Line::from(vec![Span::styled(
                headline,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )]),
            Line::from(detail),
            Line::from(""),
            Line::from(vec![Span::styled(prompt, Style::default().fg(Color::Gray))]),
        ];

        Paragraph::new(text).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(color)),
        )
    }

    fn render_controls(&self) -> Paragraph<'_> {
        let text = vec![Line::from(vec![
            Span::styled("↑↓←→", Style::default().fg(Color::Cyan)),
            Span::raw(" or "),
            Span::styled("WASD", Style::default().fg(Color::Cyan)),
            Span::raw(" to move | "),
            Span::styled("Q", Style::default().fg(Color::Red)),
            Span::raw(" to quit"),
        ])];

        Paragraph::new(text).alignment(Alignment::Center)
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}

fn glyph(cell: Cell) -> &'static str {
    match cell {
        Cell::Empty => "  ",
        Cell::Wall => "W ",
        Cell::ImmuneWall => "I ",
        Cell::GrowthItem => "+ ",
        Cell::PoisonItem => "- ",
        Cell::Gate => "G ",
    }
}

fn cell_style(cell: Cell) -> Style {
    match cell {
        Cell::Empty => Style::default(),
        Cell::Wall => Style::default().fg(Color::Gray),
        Cell::ImmuneWall => Style::default().fg(Color::DarkGray),
        Cell::GrowthItem => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        Cell::PoisonItem => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        Cell::Gate => Style::default()
            .fg(Color::Magenta)
            .add_modifier(Modifier::BOLD),
    }
}

fn mission_line(label: &str, target: u32, met: bool) -> Line<'static> {
    let mark = if met { 'v' } else { ' ' };
    let style = if met {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };
    Line::from(Span::styled(format!("{label}: {target:2} ({mark})"), style))
}

fn crash_reason(cause: CrashCause) -> &'static str {
    match cause {
        CrashCause::Reversal => "Turned back into yourself",
        CrashCause::Wall => "Hit a wall",
        CrashCause::SelfCollision => "Ran into your own body",
        CrashCause::Poison => "Too short to survive poison",
    }
}
