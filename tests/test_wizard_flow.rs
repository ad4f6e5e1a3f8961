// ABOUTME: End-to-end wizard flow tests driven through the public wizard API with a manual clock

use std::time::Duration;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use spot_onboard::app::{AppState, EventHandler};
use spot_onboard::config::AppConfig;
use spot_onboard::wizard::{
    AnalysisPhase, AnalysisView, DocumentKind, ManualClock, MilestoneStatus, OnboardingWizard,
    StepView, WizardSettings, WizardStep,
};

const TICK: Duration = Duration::from_millis(200);

fn wizard() -> (OnboardingWizard<ManualClock>, ManualClock) {
    let clock = ManualClock::new();
    let wizard = OnboardingWizard::with_clock(clock.clone(), &WizardSettings::default());
    (wizard, clock)
}

fn analysis_view(wizard: &OnboardingWizard<ManualClock>) -> AnalysisView {
    match wizard.view().body {
        StepView::Analysis(view) => view,
        other => panic!("expected analysis step, got {:?}", other),
    }
}

#[test]
fn test_documents_step_blocks_until_all_uploaded() {
    let (mut wizard, _) = wizard();
    wizard.next_step();
    wizard.next_step();
    assert_eq!(wizard.current_step(), WizardStep::Documents);

    for _ in 0..3 {
        assert!(!wizard.next_step());
    }
    assert_eq!(wizard.current_step().number(), 3);

    wizard.upload(DocumentKind::Financial);
    wizard.upload(DocumentKind::Registration);
    wizard.upload(DocumentKind::BusinessPlan);
    assert!(wizard.next_step());
    assert_eq!(wizard.current_step().number(), 4);
}

#[test]
fn test_uploading_same_slot_twice_is_idempotent() {
    let (mut wizard, _) = wizard();
    assert!(wizard.upload(DocumentKind::Registration));
    assert!(!wizard.upload(DocumentKind::Registration));
    assert_eq!(wizard.uploads().remaining(), 2);
}

#[test]
fn test_five_ticks_reach_first_milestone() {
    let (mut wizard, clock) = wizard();
    wizard.next_step();
    wizard.next_step();
    for kind in DocumentKind::all() {
        wizard.upload(*kind);
    }
    wizard.next_step();

    assert_eq!(analysis_view(&wizard), AnalysisView::Ready);
    assert!(wizard.start_analysis());

    clock.advance(TICK * 5);
    wizard.pump();
    assert_eq!(wizard.analysis().progress(), 25);

    let AnalysisView::InProgress {
        progress,
        milestones,
    } = analysis_view(&wizard)
    else {
        panic!("expected analysis in progress");
    };
    assert_eq!(progress, 25);
    let statuses: Vec<MilestoneStatus> = milestones.iter().map(|m| m.status).collect();
    assert_eq!(
        statuses,
        vec![
            MilestoneStatus::Complete,
            MilestoneStatus::InProgress,
            MilestoneStatus::Pending,
            MilestoneStatus::Pending,
        ]
    );
}

#[test]
fn test_analysis_completes_and_timer_stops() {
    let (mut wizard, clock) = wizard();
    wizard.next_step();
    wizard.next_step();
    for kind in DocumentKind::all() {
        wizard.upload(*kind);
    }
    wizard.next_step();
    wizard.start_analysis();

    let mut last = 0;
    for _ in 0..19 {
        clock.advance(TICK);
        wizard.pump();
        let progress = wizard.analysis().progress();
        assert!(progress > last);
        last = progress;
    }
    assert_eq!(wizard.analysis().phase(), AnalysisPhase::Running);

    clock.advance(TICK);
    wizard.pump();
    assert_eq!(wizard.analysis().progress(), 100);
    assert_eq!(wizard.analysis().phase(), AnalysisPhase::Done);
    assert!(!wizard.timer_running());
    assert_eq!(analysis_view(&wizard), AnalysisView::Complete);
}

fn press(state: &mut AppState<ManualClock>, code: KeyCode) {
    let key = KeyEvent::new(code, KeyModifiers::NONE);
    if let Some(event) = EventHandler::handle_key_event(key, state) {
        EventHandler::process_event(event, state);
    }
}

#[test]
fn test_keyboard_run_from_registration_to_results() {
    let clock = ManualClock::new();
    let wizard = OnboardingWizard::with_clock(clock.clone(), &WizardSettings::default());
    let mut state = AppState::with_wizard(wizard, AppConfig::default());

    // Round 1: jump to Get Started
    press(&mut state, KeyCode::BackTab);
    press(&mut state, KeyCode::Enter);
    // Round 2: code field, then Verify & Continue
    press(&mut state, KeyCode::Up);
    press(&mut state, KeyCode::Enter);
    // Round 3: upload all three, then continue
    press(&mut state, KeyCode::Char('1'));
    press(&mut state, KeyCode::Char('2'));
    press(&mut state, KeyCode::Char('3'));
    press(&mut state, KeyCode::BackTab);
    press(&mut state, KeyCode::Enter);
    assert_eq!(state.wizard.current_step(), WizardStep::Analysis);

    // Round 4: start, let it finish, view results
    press(&mut state, KeyCode::Enter);
    assert!(state.wizard.timer_running());
    clock.advance(Duration::from_secs(10));
    state.on_tick();
    assert!(state.wizard.analysis().is_done());

    press(&mut state, KeyCode::Enter);
    assert!(state.wizard.is_finished());
    assert!(state.should_quit);
}

#[test]
fn test_quit_mid_analysis_stops_timer() {
    let clock = ManualClock::new();
    let mut wizard = OnboardingWizard::with_clock(clock.clone(), &WizardSettings::default());
    wizard.next_step();
    wizard.next_step();
    for kind in DocumentKind::all() {
        wizard.upload(*kind);
    }
    wizard.next_step();
    wizard.start_analysis();

    let mut state = AppState::with_wizard(wizard, AppConfig::default());
    clock.advance(TICK * 2);
    state.on_tick();
    assert_eq!(state.wizard.analysis().progress(), 10);

    state.quit();
    clock.advance(Duration::from_secs(10));
    state.on_tick();
    assert_eq!(state.wizard.analysis().progress(), 10);
    assert!(!state.wizard.timer_running());
}
