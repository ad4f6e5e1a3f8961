// ABOUTME: Test wizard rendering on each step using ratatui's TestBackend

use std::time::Duration;

use ratatui::{backend::TestBackend, Terminal};
use spot_onboard::app::AppState;
use spot_onboard::components::LayoutComponent;
use spot_onboard::config::AppConfig;
use spot_onboard::wizard::{
    Clock, DocumentKind, FormField, ManualClock, OnboardingWizard, WizardSettings,
};

fn render<C: Clock>(state: &AppState<C>, width: u16, height: u16) -> String {
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).unwrap();
    let mut layout = LayoutComponent::new();

    terminal
        .draw(|frame| {
            layout.render(frame, state);
        })
        .unwrap();

    let buffer = terminal.backend().buffer();
    buffer
        .content()
        .iter()
        .map(ratatui::buffer::Cell::symbol)
        .collect()
}

fn manual_state() -> (AppState<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let wizard = OnboardingWizard::with_clock(clock.clone(), &WizardSettings::default());
    (AppState::with_wizard(wizard, AppConfig::default()), clock)
}

fn to_analysis(state: &mut AppState<ManualClock>) {
    state.wizard.next_step();
    state.wizard.next_step();
    for kind in DocumentKind::all() {
        state.wizard.upload(*kind);
    }
    state.wizard.next_step();
}

#[test]
fn test_registration_step_shows_indicator_and_form() {
    let state = AppState::new(AppConfig::default());
    let content = render(&state, 120, 40);

    assert!(
        content.contains("Round 1: First Deal"),
        "Indicator should name round 1 but content was: {}",
        content
    );
    assert!(content.contains("Round 4: SPOT Play"));
    assert!(content.contains("Company Name"));
    assert!(content.contains("Enter your full name"));
    assert!(content.contains("[ ] I agree to the terms and conditions"));
    assert!(content.contains("Get Started"));
}

#[test]
fn test_password_is_masked() {
    let (mut state, _) = manual_state();
    state.wizard.form_mut().set(FormField::Password, "hunter2");
    let content = render(&state, 120, 40);

    assert!(content.contains("•••••••"));
    assert!(!content.contains("hunter2"));
}

#[test]
fn test_verification_step_shows_email() {
    let (mut state, _) = manual_state();
    state.wizard.next_step();
    let content = render(&state, 120, 40);

    assert!(content.contains("tech@odela.com.my"));
    assert!(content.contains("Resend Email"));
    assert!(content.contains("Verify & Continue"));
}

#[test]
fn test_documents_step_caption_tracks_uploads() {
    let (mut state, _) = manual_state();
    state.wizard.next_step();
    state.wizard.next_step();

    let content = render(&state, 120, 40);
    assert!(
        content.contains("Upload 3 More Files"),
        "Continue button should count missing files but content was: {}",
        content
    );

    state.wizard.upload(DocumentKind::Financial);
    let content = render(&state, 120, 40);
    assert!(content.contains("Upload 2 More Files"));
    assert!(content.contains("Upload Complete!"));

    state.wizard.upload(DocumentKind::Registration);
    state.wizard.upload(DocumentKind::BusinessPlan);
    let content = render(&state, 120, 40);
    assert!(content.contains("Continue to Analysis"));
}

#[test]
fn test_analysis_sub_views() {
    let (mut state, clock) = manual_state();
    to_analysis(&mut state);

    let content = render(&state, 120, 40);
    assert!(content.contains("Ready for the SPOT Showdown!"));
    assert!(content.contains("Start Analysis"));

    state.wizard.start_analysis();
    clock.advance(Duration::from_millis(200) * 5);
    state.on_tick();
    let content = render(&state, 120, 40);
    assert!(content.contains("25%"));
    assert!(content.contains("Shuffling market opportunities..."));

    clock.advance(Duration::from_secs(10));
    state.on_tick();
    let content = render(&state, 120, 40);
    assert!(content.contains("SPOT Complete!"));
    assert!(content.contains("View Your Results"));
}

#[test]
fn test_small_terminal_shows_notice() {
    let state = AppState::new(AppConfig::default());
    let content = render(&state, 40, 10);
    assert!(content.contains("Terminal too small"));
}
