use super::state::StageState;
use serde::{Deserialize, Serialize};

/// Win condition for a stage: all four thresholds must hold at once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mission {
    pub target_length: usize,
    pub growth_target: u32,
    pub poison_target: u32,
    pub gate_target: u32,
}

/// Which targets are currently met, for the mission panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissionProgress {
    pub length: bool,
    pub growth: bool,
    pub poison: bool,
    pub gates: bool,
}

impl MissionProgress {
    pub fn all(&self) -> bool {
        self.length && self.growth && self.poison && self.gates
    }
}

impl Mission {
    pub const fn new(
        target_length: usize,
        growth_target: u32,
        poison_target: u32,
        gate_target: u32,
    ) -> Self {
        Self {
            target_length,
            growth_target,
            poison_target,
            gate_target,
        }
    }

    pub fn progress(&self, length: usize, counters: &StageState) -> MissionProgress {
        MissionProgress {
            length: length >= self.target_length,
            growth: counters.growth_count >= self.growth_target,
            poison: counters.poison_count >= self.poison_target,
            gates: counters.gate_use_count >= self.gate_target,
        }
    }

    /// Evaluated against the live length; not sticky across ticks
    pub fn is_complete(&self, length: usize, counters: &StageState) -> bool {
        self.progress(length, counters).all()
    }
}
