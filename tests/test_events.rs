// ABOUTME: Tests that keyboard input maps to the right wizard actions on each step

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use spot_onboard::app::{AppEvent, AppState, EventHandler};
use spot_onboard::config::AppConfig;
use spot_onboard::wizard::{FormField, WizardFocus, WizardStep};

const fn create_key_event(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn press(state: &mut AppState, code: KeyCode) {
    if let Some(event) = EventHandler::handle_key_event(create_key_event(code), state) {
        EventHandler::process_event(event, state);
    }
}

fn type_text(state: &mut AppState, text: &str) {
    for c in text.chars() {
        press(state, KeyCode::Char(c));
    }
}

#[test]
fn test_quit_key_events() {
    let state = AppState::new(AppConfig::default());

    assert_eq!(
        EventHandler::handle_key_event(create_key_event(KeyCode::Esc), &state),
        Some(AppEvent::Quit)
    );
    assert_eq!(
        EventHandler::handle_key_event(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &state
        ),
        Some(AppEvent::Quit)
    );
}

#[test]
fn test_registration_form_fill() {
    let mut state = AppState::new(AppConfig::default());

    type_text(&mut state, "Acme Sdn Bhd");
    press(&mut state, KeyCode::Tab);
    press(&mut state, KeyCode::Right);
    press(&mut state, KeyCode::Right);
    press(&mut state, KeyCode::Tab);
    type_text(&mut state, "Aisyah");
    press(&mut state, KeyCode::Backspace);

    let form = state.wizard.form();
    assert_eq!(form.company_name, "Acme Sdn Bhd");
    assert_eq!(form.industry_type, "healthcare");
    assert_eq!(form.representative_name, "Aisya");
}

#[test]
fn test_terms_checkbox_toggles_with_space() {
    let mut state = AppState::new(AppConfig::default());
    while state.wizard.focus() != WizardFocus::Field(FormField::AgreeToTerms) {
        press(&mut state, KeyCode::Down);
    }

    press(&mut state, KeyCode::Char(' '));
    assert!(state.wizard.form().agree_to_terms);
    press(&mut state, KeyCode::Enter);
    assert!(!state.wizard.form().agree_to_terms);
}

#[test]
fn test_primary_button_advances_through_verification() {
    let mut state = AppState::new(AppConfig::default());

    press(&mut state, KeyCode::BackTab);
    assert_eq!(state.wizard.focus(), WizardFocus::Primary);
    press(&mut state, KeyCode::Enter);
    assert_eq!(state.wizard.current_step(), WizardStep::Verification);
    assert_eq!(
        state.wizard.focus(),
        WizardFocus::Field(FormField::VerificationCode)
    );

    type_text(&mut state, "12345678");
    assert_eq!(state.wizard.form().verification_code, "123456");

    press(&mut state, KeyCode::Up);
    press(&mut state, KeyCode::Enter);
    assert_eq!(state.wizard.current_step(), WizardStep::Documents);
}

#[test]
fn test_number_keys_upload_on_documents_step() {
    let mut state = AppState::new(AppConfig::default());
    state.wizard.next_step();
    state.wizard.next_step();

    assert_eq!(
        EventHandler::handle_key_event(create_key_event(KeyCode::Char('2')), &state),
        Some(AppEvent::UploadSlot(1))
    );
    assert_eq!(
        EventHandler::handle_key_event(create_key_event(KeyCode::Char('4')), &state),
        None
    );

    press(&mut state, KeyCode::Char('1'));
    press(&mut state, KeyCode::Char('1'));
    assert_eq!(state.wizard.uploads().remaining(), 2);
}

#[test]
fn test_process_event_requests_redraw() {
    let mut state = AppState::new(AppConfig::default());
    state.ui_needs_refresh = false;
    EventHandler::process_event(AppEvent::FocusNext, &mut state);
    assert!(state.ui_needs_refresh);
    assert!(!state.should_quit);
}

#[test]
fn test_modified_letters_do_not_type() {
    let mut state = AppState::new(AppConfig::default());

    for modifiers in [KeyModifiers::ALT, KeyModifiers::CONTROL] {
        let event = KeyEvent::new(KeyCode::Char('x'), modifiers);
        assert_eq!(EventHandler::handle_key_event(event, &state), None);
    }

    let shifted = KeyEvent::new(KeyCode::Char('X'), KeyModifiers::SHIFT);
    if let Some(event) = EventHandler::handle_key_event(shifted, &state) {
        EventHandler::process_event(event, &mut state);
    }
    assert_eq!(state.wizard.form().company_name, "X");
}
