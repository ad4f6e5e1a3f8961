// ABOUTME: Wizard step definitions and the forward-only step controller
// Steps only move forward and saturate at the final analysis step

use serde::Serialize;

/// Steps in the onboarding wizard
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum WizardStep {
    Registration,
    Verification,
    Documents,
    Analysis,
}

impl WizardStep {
    /// Get all steps in order
    pub fn all() -> &'static [WizardStep] {
        &[
            Self::Registration,
            Self::Verification,
            Self::Documents,
            Self::Analysis,
        ]
    }

    /// Get the step number (1-indexed for display)
    pub fn number(&self) -> u8 {
        match self {
            Self::Registration => 1,
            Self::Verification => 2,
            Self::Documents => 3,
            Self::Analysis => 4,
        }
    }

    /// Round title shown in the step indicator
    pub fn title(&self) -> &'static str {
        match self {
            Self::Registration => "First Deal",
            Self::Verification => "Card Check",
            Self::Documents => "SPOT Draw",
            Self::Analysis => "SPOT Play",
        }
    }

    /// Short tagline under the title
    pub fn description(&self) -> &'static str {
        match self {
            Self::Registration => "Join the Game",
            Self::Verification => "Verify Your Hand",
            Self::Documents => "Submit Your Cards",
            Self::Analysis => "Reveal Your Hand",
        }
    }

    /// Get the next step, if any
    pub fn next(&self) -> Option<Self> {
        match self {
            Self::Registration => Some(Self::Verification),
            Self::Verification => Some(Self::Documents),
            Self::Documents => Some(Self::Analysis),
            Self::Analysis => None,
        }
    }
}

/// How a step appears in the indicator relative to the current one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    Completed,
    Active,
    Upcoming,
}

/// Bounded forward-only cursor over the wizard steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepController {
    step: WizardStep,
}

impl StepController {
    pub fn new() -> Self {
        Self {
            step: WizardStep::Registration,
        }
    }

    pub fn current(&self) -> WizardStep {
        self.step
    }

    /// Move one step forward. Returns false at the last step.
    pub fn advance(&mut self) -> bool {
        match self.step.next() {
            Some(next) => {
                self.step = next;
                true
            }
            None => false,
        }
    }

    /// True on the analysis step, where no further advance is possible
    pub fn is_final(&self) -> bool {
        self.step.next().is_none()
    }

    /// Status of `step` as seen from the current position
    pub fn status_of(&self, step: WizardStep) -> StepStatus {
        if step < self.step {
            StepStatus::Completed
        } else if step == self.step {
            StepStatus::Active
        } else {
            StepStatus::Upcoming
        }
    }
}

impl Default for StepController {
    fn default() -> Self {
        Self::new()
    }
}
