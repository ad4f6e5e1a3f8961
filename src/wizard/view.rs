// ABOUTME: Pure view model derived from wizard state on every frame
// Selects one branch per step and, on the analysis step, one of three sub-branches

use serde::Serialize;

use super::form::{FormField, FormState};
use super::progress::{MilestoneStatus, ProgressSimulator, PROGRESS_MAX};
use super::step::{StepController, StepStatus, WizardStep};
use super::upload::{UploadSlot, UploadTracker};

const MASK_CHAR: char = '•';

/// One entry of the round indicator across the top
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StepIndicator {
    pub step: WizardStep,
    pub status: StepStatus,
}

/// Displayable state of one form input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub field: FormField,
    pub label: &'static str,
    /// Text to draw; masked for secrets, option label for the industry selector
    pub value: String,
    pub placeholder: &'static str,
}

impl FieldView {
    fn of(form: &FormState, field: FormField) -> Self {
        let raw = form.text(field).unwrap_or_default();
        let value = if field.is_secret() {
            std::iter::repeat(MASK_CHAR).take(raw.chars().count()).collect()
        } else if field == FormField::IndustryType {
            form.industry()
                .map(|i| i.label().to_string())
                .unwrap_or_default()
        } else {
            raw.to_string()
        };

        Self {
            field,
            label: field.label(),
            value,
            placeholder: field.placeholder(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationView {
    pub fields: Vec<FieldView>,
    pub agree_to_terms: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationView {
    pub email: String,
    pub code: FieldView,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentsView {
    pub slots: Vec<UploadSlot>,
    pub remaining: usize,
    pub can_continue: bool,
    pub continue_caption: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MilestoneView {
    pub caption: &'static str,
    pub status: MilestoneStatus,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisView {
    /// Not started yet; offers "Start Analysis"
    Ready,
    InProgress {
        progress: u8,
        milestones: Vec<MilestoneView>,
    },
    /// Finished; offers "View Your Results"
    Complete,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepView {
    Registration(RegistrationView),
    Verification(VerificationView),
    Documents(DocumentsView),
    Analysis(AnalysisView),
}

/// Everything the renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardView {
    pub indicator: Vec<StepIndicator>,
    pub body: StepView,
}

impl WizardView {
    pub fn derive(
        steps: &StepController,
        form: &FormState,
        uploads: &UploadTracker,
        analysis: &ProgressSimulator,
    ) -> Self {
        let indicator = WizardStep::all()
            .iter()
            .map(|step| StepIndicator {
                step: *step,
                status: steps.status_of(*step),
            })
            .collect();

        let body = match steps.current() {
            WizardStep::Registration => StepView::Registration(RegistrationView {
                fields: FormField::registration()
                    .iter()
                    .filter(|f| f.accepts_text() || **f == FormField::IndustryType)
                    .map(|f| FieldView::of(form, *f))
                    .collect(),
                agree_to_terms: form.agree_to_terms,
            }),
            WizardStep::Verification => StepView::Verification(VerificationView {
                email: form.company_email.clone(),
                code: FieldView::of(form, FormField::VerificationCode),
            }),
            WizardStep::Documents => StepView::Documents(Self::documents(uploads)),
            WizardStep::Analysis => StepView::Analysis(Self::analysis(analysis)),
        };

        Self { indicator, body }
    }

    fn documents(uploads: &UploadTracker) -> DocumentsView {
        let remaining = uploads.remaining();
        let can_continue = uploads.all_uploaded();
        let continue_caption = if can_continue {
            "Continue to Analysis".to_string()
        } else {
            format!("Upload {} More Files", remaining)
        };

        DocumentsView {
            slots: uploads.slots().to_vec(),
            remaining,
            can_continue,
            continue_caption,
        }
    }

    fn analysis(analysis: &ProgressSimulator) -> AnalysisView {
        let progress = analysis.progress();
        if !analysis.is_running() && progress == 0 {
            AnalysisView::Ready
        } else if progress < PROGRESS_MAX {
            AnalysisView::InProgress {
                progress,
                milestones: analysis
                    .milestones()
                    .iter()
                    .map(|(m, status)| MilestoneView {
                        caption: m.caption,
                        status: *status,
                    })
                    .collect(),
            }
        } else {
            AnalysisView::Complete
        }
    }
}
