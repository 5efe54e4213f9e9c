use std::time::{Duration, Instant};

/// Wall-clock timing for the header line
pub struct GameMetrics {
    pub session_start: Instant,
    pub stage_start: Instant,
    pub elapsed_time: Duration,
    pub stage_time: Duration,
    pub stages_cleared: usize,
}

impl GameMetrics {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            session_start: now,
            stage_start: now,
            elapsed_time: Duration::ZERO,
            stage_time: Duration::ZERO,
            stages_cleared: 0,
        }
    }

    pub fn update(&mut self) {
        self.elapsed_time = self.session_start.elapsed();
        self.stage_time = self.stage_start.elapsed();
    }

    pub fn on_stage_start(&mut self) {
        self.stage_start = Instant::now();
        self.stage_time = Duration::ZERO;
    }

    pub fn on_stage_cleared(&mut self) {
        self.stages_cleared += 1;
    }

    pub fn format_time(&self) -> String {
        format_duration(self.elapsed_time)
    }

    pub fn format_stage_time(&self) -> String {
        format_duration(self.stage_time)
    }
}

fn format_duration(duration: Duration) -> String {
    let total_secs = duration.as_secs();
    let minutes = total_secs / 60;
    let seconds = total_secs % 60;
    format!("{:02}:{:02}", minutes, seconds)
}

impl Default for GameMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_formatting() {
        let mut metrics = GameMetrics::new();
        metrics.elapsed_time = Duration::from_secs(125);
        assert_eq!(metrics.format_time(), "02:05");

        metrics.elapsed_time = Duration::from_secs(0);
        assert_eq!(metrics.format_time(), "00:00");

        metrics.stage_time = Duration::from_secs(3661);
        assert_eq!(metrics.format_stage_time(), "61:01");
    }

    #[test]
    fn test_stage_counting() {
        let mut metrics = GameMetrics::new();
        metrics.on_stage_cleared();
        metrics.on_stage_cleared();
        assert_eq!(metrics.stages_cleared, 2);
    }

    #[test]
    fn test_stage_start_resets_stage_time() {
        let mut metrics = GameMetrics::new();
        std::thread::sleep(Duration::from_millis(50));
        metrics.update();

        assert!(metrics.stage_time.as_millis() >= 50);

        metrics.on_stage_start();
        metrics.update();
        assert!(metrics.stage_time.as_millis() < 50);
        assert!(metrics.elapsed_time.as_millis() >= 50);
    }
}
