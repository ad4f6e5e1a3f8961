// ABOUTME: Framework-free onboarding wizard state machine
// Steps, form values, upload slots, and the simulated analysis, plus the view model they derive

pub mod error;
pub mod form;
pub mod progress;
pub mod state;
pub mod step;
pub mod timer;
pub mod upload;
pub mod view;

pub use error::ParseError;
pub use form::{FormField, FormState, Industry};
pub use progress::{AnalysisPhase, Milestone, MilestoneStatus, ProgressSimulator, MILESTONES};
pub use state::{OnboardingWizard, WizardFocus, WizardSettings};
pub use step::{StepController, StepStatus, WizardStep};
pub use timer::{Clock, ManualClock, RepeatingTimer, SystemClock};
pub use upload::{DocumentKind, UploadSlot, UploadTracker};
pub use view::{AnalysisView, StepView, WizardView};
