// ABOUTME: Event handling system mapping keyboard input to wizard actions

use crate::app::AppState;
use crate::wizard::{Clock, FormField, WizardFocus, WizardStep};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tracing::{debug, info};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    Quit,
    FocusNext,
    FocusPrevious,
    /// Run the focused element (button press, checkbox, upload slot)
    Activate,
    InputChar(char),
    Backspace,
    ToggleTerms,
    NextIndustry,
    PreviousIndustry,
    /// Upload the slot at this index on the documents step
    UploadSlot(usize),
}

pub struct EventHandler;

impl EventHandler {
    pub fn handle_key_event<C: Clock>(key_event: KeyEvent, state: &AppState<C>) -> Option<AppEvent> {
        if key_event.modifiers.contains(KeyModifiers::CONTROL)
            && key_event.code == KeyCode::Char('c')
        {
            return Some(AppEvent::Quit);
        }

        let wizard = &state.wizard;
        let focus = wizard.focus();
        let text_focus = matches!(focus, WizardFocus::Field(f) if f.accepts_text());

        match key_event.code {
            KeyCode::Esc => Some(AppEvent::Quit),
            KeyCode::Tab | KeyCode::Down => Some(AppEvent::FocusNext),
            KeyCode::BackTab | KeyCode::Up => Some(AppEvent::FocusPrevious),
            KeyCode::Enter => Some(AppEvent::Activate),
            KeyCode::Backspace if text_focus => Some(AppEvent::Backspace),
            KeyCode::Right if focus == WizardFocus::Field(FormField::IndustryType) => {
                Some(AppEvent::NextIndustry)
            }
            KeyCode::Left if focus == WizardFocus::Field(FormField::IndustryType) => {
                Some(AppEvent::PreviousIndustry)
            }
            KeyCode::Char(c)
                if text_focus
                    && !key_event
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(AppEvent::InputChar(c))
            }
            KeyCode::Char(' ') if focus == WizardFocus::Field(FormField::AgreeToTerms) => {
                Some(AppEvent::ToggleTerms)
            }
            KeyCode::Char(' ') => Some(AppEvent::Activate),
            KeyCode::Char(c @ '1'..='3') if wizard.current_step() == WizardStep::Documents => {
                c.to_digit(10).map(|d| AppEvent::UploadSlot(d as usize - 1))
            }
            KeyCode::Char('q') => Some(AppEvent::Quit),
            _ => None,
        }
    }

    pub fn process_event<C: Clock>(event: AppEvent, state: &mut AppState<C>) {
        debug!("Processing event: {:?}", event);
        let wizard = &mut state.wizard;

        match event {
            AppEvent::Quit => {
                state.quit();
                return;
            }
            AppEvent::FocusNext => wizard.focus_next(),
            AppEvent::FocusPrevious => wizard.focus_prev(),
            AppEvent::Activate => wizard.activate(),
            AppEvent::InputChar(c) => wizard.input_char(c),
            AppEvent::Backspace => wizard.backspace(),
            AppEvent::ToggleTerms => wizard.toggle_terms(),
            AppEvent::NextIndustry => wizard.cycle_industry(true),
            AppEvent::PreviousIndustry => wizard.cycle_industry(false),
            AppEvent::UploadSlot(index) => {
                wizard.upload_slot(index);
            }
        }

        if state.wizard.is_finished() {
            info!("Wizard finished, exiting");
            state.quit();
        }
        state.ui_needs_refresh = true;
    }
}
