// ABOUTME: Wizard controller owning step, form, upload, and analysis state
// Every user action is a method here so the flow can be driven without a terminal

use std::time::Duration;

use tracing::{debug, info};

use super::form::{FormField, FormState};
use super::progress::{ProgressSimulator, DEFAULT_INCREMENT};
use super::step::{StepController, WizardStep};
use super::timer::{Clock, RepeatingTimer, SystemClock};
use super::upload::{DocumentKind, UploadTracker};
use super::view::WizardView;

/// Default address pre-filled into the company email field
pub const DEFAULT_COMPANY_EMAIL: &str = "tech@odela.com.my";

/// Default time between analysis ticks
pub const DEFAULT_TICK_INTERVAL: Duration = Duration::from_millis(200);

/// Construction parameters for a wizard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardSettings {
    pub company_email: String,
    pub tick_interval: Duration,
    pub increment: u8,
}

impl Default for WizardSettings {
    fn default() -> Self {
        Self {
            company_email: DEFAULT_COMPANY_EMAIL.to_string(),
            tick_interval: DEFAULT_TICK_INTERVAL,
            increment: DEFAULT_INCREMENT,
        }
    }
}

/// Focusable elements within a step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardFocus {
    /// A form input or the terms checkbox
    Field(FormField),
    /// Upload slot by index
    Slot(usize),
    /// Secondary "Resend Email" button on the verification step
    Resend,
    /// The step's main button
    Primary,
}

impl WizardFocus {
    /// Focus order for a step, first element focused on entry
    pub fn order(step: WizardStep) -> Vec<WizardFocus> {
        match step {
            WizardStep::Registration => FormField::registration()
                .iter()
                .map(|f| Self::Field(*f))
                .chain(std::iter::once(Self::Primary))
                .collect(),
            WizardStep::Verification => vec![
                Self::Field(FormField::VerificationCode),
                Self::Resend,
                Self::Primary,
            ],
            WizardStep::Documents => (0..DocumentKind::all().len())
                .map(Self::Slot)
                .chain(std::iter::once(Self::Primary))
                .collect(),
            WizardStep::Analysis => vec![Self::Primary],
        }
    }
}

/// The onboarding wizard: one owner for all state, one method per user action
#[derive(Debug)]
pub struct OnboardingWizard<C: Clock = SystemClock> {
    steps: StepController,
    form: FormState,
    uploads: UploadTracker,
    analysis: ProgressSimulator,
    timer: RepeatingTimer<C>,
    focus: WizardFocus,
    finished: bool,
}

impl OnboardingWizard<SystemClock> {
    pub fn new(settings: &WizardSettings) -> Self {
        Self::with_clock(SystemClock, settings)
    }
}

impl Default for OnboardingWizard<SystemClock> {
    fn default() -> Self {
        Self::new(&WizardSettings::default())
    }
}

impl<C: Clock> OnboardingWizard<C> {
    pub fn with_clock(clock: C, settings: &WizardSettings) -> Self {
        let steps = StepController::new();
        Self {
            focus: Self::first_focus(steps.current()),
            steps,
            form: FormState::new(settings.company_email.clone()),
            uploads: UploadTracker::new(),
            analysis: ProgressSimulator::new(settings.increment),
            timer: RepeatingTimer::new(clock, settings.tick_interval),
            finished: false,
        }
    }

    fn first_focus(step: WizardStep) -> WizardFocus {
        WizardFocus::order(step)
            .first()
            .copied()
            .unwrap_or(WizardFocus::Primary)
    }

    pub fn current_step(&self) -> WizardStep {
        self.steps.current()
    }

    pub fn steps(&self) -> &StepController {
        &self.steps
    }

    pub fn form(&self) -> &FormState {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut FormState {
        &mut self.form
    }

    pub fn uploads(&self) -> &UploadTracker {
        &self.uploads
    }

    pub fn analysis(&self) -> &ProgressSimulator {
        &self.analysis
    }

    pub fn focus(&self) -> WizardFocus {
        self.focus
    }

    pub fn timer_running(&self) -> bool {
        self.timer.is_running()
    }

    /// Whether the user asked to view results after the analysis finished
    pub fn is_finished(&self) -> bool {
        self.finished
    }

    /// Derive the display model for the current state
    pub fn view(&self) -> WizardView {
        WizardView::derive(&self.steps, &self.form, &self.uploads, &self.analysis)
    }

    /// Can the primary action move to the next step?
    pub fn can_advance(&self) -> bool {
        if self.steps.is_final() {
            return false;
        }
        match self.steps.current() {
            WizardStep::Documents => self.uploads.all_uploaded(),
            _ => true,
        }
    }

    /// Move to the next step if allowed. Returns true if the step changed.
    pub fn next_step(&mut self) -> bool {
        if !self.can_advance() {
            debug!("Advance blocked on step {}", self.steps.current().number());
            return false;
        }

        let from = self.steps.current();
        if !self.steps.advance() {
            return false;
        }

        let to = self.steps.current();
        self.focus = Self::first_focus(to);
        info!(
            "Wizard advanced from step {} ({}) to step {} ({})",
            from.number(),
            from.title(),
            to.number(),
            to.title()
        );
        true
    }

    pub fn focus_next(&mut self) {
        self.move_focus(true);
    }

    pub fn focus_prev(&mut self) {
        self.move_focus(false);
    }

    fn move_focus(&mut self, forward: bool) {
        let order = WizardFocus::order(self.steps.current());
        if order.is_empty() {
            return;
        }
        let idx = order.iter().position(|f| *f == self.focus).unwrap_or(0);
        let next = if forward {
            (idx + 1) % order.len()
        } else {
            (idx + order.len() - 1) % order.len()
        };
        self.focus = order[next];
    }

    /// Type a character into the focused text field
    pub fn input_char(&mut self, c: char) {
        if let WizardFocus::Field(field) = self.focus {
            self.form.push_char(field, c);
        }
    }

    pub fn backspace(&mut self) {
        if let WizardFocus::Field(field) = self.focus {
            self.form.pop_char(field);
        }
    }

    pub fn toggle_terms(&mut self) {
        self.form.toggle_terms();
    }

    /// Cycle the industry option when the industry selector has focus
    pub fn cycle_industry(&mut self, forward: bool) {
        if self.focus == WizardFocus::Field(FormField::IndustryType) {
            self.form.cycle_industry(forward);
        }
    }

    /// Mark a document as uploaded. Returns true if the slot changed.
    pub fn upload(&mut self, kind: DocumentKind) -> bool {
        self.uploads.mark_uploaded(kind)
    }

    /// Upload the slot at `index`. Out-of-range indexes are ignored.
    pub fn upload_slot(&mut self, index: usize) -> bool {
        match DocumentKind::all().get(index) {
            Some(kind) => self.upload(*kind),
            None => false,
        }
    }

    /// There is no mail backend; the request is only recorded
    pub fn resend_email(&self) {
        info!("Verification email resend requested for {}", self.form.company_email);
    }

    /// Begin the simulated analysis. Only valid on the analysis step, once.
    pub fn start_analysis(&mut self) -> bool {
        if self.steps.current() != WizardStep::Analysis {
            return false;
        }
        if !self.analysis.start() {
            return false;
        }
        self.timer.start();
        true
    }

    /// Apply any timer ticks that are due. Returns true if progress moved.
    pub fn pump(&mut self) -> bool {
        let ticks = self.timer.due_ticks();
        if ticks == 0 {
            return false;
        }

        let before = self.analysis.progress();
        for _ in 0..ticks {
            self.analysis.tick();
            if self.analysis.is_done() {
                self.timer.stop();
                break;
            }
        }
        self.analysis.progress() != before
    }

    /// Run the focused element's action, as if it were clicked
    pub fn activate(&mut self) {
        match self.focus {
            WizardFocus::Field(FormField::AgreeToTerms) => self.toggle_terms(),
            WizardFocus::Field(_) => self.focus_next(),
            WizardFocus::Slot(index) => {
                self.upload_slot(index);
            }
            WizardFocus::Resend => self.resend_email(),
            WizardFocus::Primary => self.primary_action(),
        }
    }

    /// The step's main button
    pub fn primary_action(&mut self) {
        match self.steps.current() {
            WizardStep::Registration | WizardStep::Verification | WizardStep::Documents => {
                self.next_step();
            }
            WizardStep::Analysis => {
                if self.analysis.is_done() {
                    info!("Results requested; wizard finished");
                    self.finished = true;
                } else {
                    self.start_analysis();
                }
            }
        }
    }

    /// Stop the timer. Called on teardown so no tick outlives the wizard.
    pub fn shutdown(&mut self) {
        self.timer.stop();
    }
}

impl<C: Clock> Drop for OnboardingWizard<C> {
    fn drop(&mut self) {
        self.shutdown();
    }
}
