// ABOUTME: Simulated analysis progress for the final wizard step
// Idle -> Running -> Done, advancing a fixed increment per tick and saturating at 100

use serde::Serialize;
use tracing::info;

/// Progress value at which the analysis is complete
pub const PROGRESS_MAX: u8 = 100;

/// Default percentage added per tick
pub const DEFAULT_INCREMENT: u8 = 5;

/// Span of progress each milestone covers before it counts as complete
const MILESTONE_SPAN: u8 = 25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisPhase {
    Idle,
    Running,
    Done,
}

/// A caption shown while the analysis runs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub caption: &'static str,
    pub threshold: u8,
}

pub const MILESTONES: [Milestone; 4] = [
    Milestone {
        caption: "Dealing your financial cards...",
        threshold: 0,
    },
    Milestone {
        caption: "Shuffling market opportunities...",
        threshold: 25,
    },
    Milestone {
        caption: "Building your winning hand...",
        threshold: 50,
    },
    Milestone {
        caption: "Preparing your ace strategy...",
        threshold: 75,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MilestoneStatus {
    Pending,
    InProgress,
    Complete,
}

impl Milestone {
    pub fn status(&self, progress: u8) -> MilestoneStatus {
        if progress >= self.threshold.saturating_add(MILESTONE_SPAN) {
            MilestoneStatus::Complete
        } else if progress >= self.threshold {
            MilestoneStatus::InProgress
        } else {
            MilestoneStatus::Pending
        }
    }

    /// Highlighted once progress passes the threshold
    pub fn is_reached(&self, progress: u8) -> bool {
        self.status(progress) != MilestoneStatus::Pending
    }

    pub fn is_complete(&self, progress: u8) -> bool {
        self.status(progress) == MilestoneStatus::Complete
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProgressSimulator {
    progress: u8,
    phase: AnalysisPhase,
    increment: u8,
}

impl ProgressSimulator {
    /// Simulator adding `increment` per tick. A zero increment is raised to 1.
    pub fn new(increment: u8) -> Self {
        Self {
            progress: 0,
            phase: AnalysisPhase::Idle,
            increment: increment.max(1),
        }
    }

    pub fn progress(&self) -> u8 {
        self.progress
    }

    pub fn phase(&self) -> AnalysisPhase {
        self.phase
    }

    pub fn increment(&self) -> u8 {
        self.increment
    }

    pub fn is_running(&self) -> bool {
        self.phase == AnalysisPhase::Running
    }

    pub fn is_done(&self) -> bool {
        self.phase == AnalysisPhase::Done
    }

    /// Leave Idle. Returns false if the analysis was already started.
    pub fn start(&mut self) -> bool {
        if self.phase != AnalysisPhase::Idle {
            return false;
        }
        self.phase = AnalysisPhase::Running;
        info!("Analysis started");
        true
    }

    /// Advance one step while running; ticks in any other phase are ignored
    pub fn tick(&mut self) -> AnalysisPhase {
        if self.phase != AnalysisPhase::Running {
            return self.phase;
        }

        self.progress = self.progress.saturating_add(self.increment).min(PROGRESS_MAX);
        if self.progress >= PROGRESS_MAX {
            self.phase = AnalysisPhase::Done;
            info!("Analysis complete");
        }
        self.phase
    }

    /// Status of each milestone at the current progress
    pub fn milestones(&self) -> [(Milestone, MilestoneStatus); 4] {
        MILESTONES.map(|m| (m, m.status(self.progress)))
    }
}

impl Default for ProgressSimulator {
    fn default() -> Self {
        Self::new(DEFAULT_INCREMENT)
    }
}
