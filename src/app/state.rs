// ABOUTME: Application state wrapping the onboarding wizard for the TUI loop

use tracing::info;

use crate::config::AppConfig;
use crate::wizard::{Clock, OnboardingWizard, SystemClock};

/// Loop ticks between cursor blink toggles
const CURSOR_BLINK_TICKS: u8 = 5;

#[derive(Debug)]
pub struct AppState<C: Clock = SystemClock> {
    pub wizard: OnboardingWizard<C>,
    pub config: AppConfig,
    pub should_quit: bool,
    /// Whether the text cursor is drawn this frame
    pub show_cursor: bool,
    /// Set when something changed and the next frame must be drawn
    pub ui_needs_refresh: bool,
    blink_counter: u8,
}

impl AppState<SystemClock> {
    pub fn new(config: AppConfig) -> Self {
        let wizard = OnboardingWizard::new(&config.wizard_settings());
        Self::with_wizard(wizard, config)
    }
}

impl Default for AppState<SystemClock> {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}

impl<C: Clock> AppState<C> {
    pub fn with_wizard(wizard: OnboardingWizard<C>, config: AppConfig) -> Self {
        Self {
            wizard,
            config,
            should_quit: false,
            show_cursor: true,
            ui_needs_refresh: true,
            blink_counter: 0,
        }
    }

    /// Stop the wizard timer and flag the loop to exit
    pub fn quit(&mut self) {
        info!(
            "Quitting wizard on step {} at {}% analysis progress",
            self.wizard.current_step().number(),
            self.wizard.analysis().progress()
        );
        self.wizard.shutdown();
        self.should_quit = true;
    }

    /// Periodic work: apply due analysis ticks and blink the cursor
    pub fn on_tick(&mut self) {
        if self.wizard.pump() {
            self.ui_needs_refresh = true;
        }

        if self.config.ui.cursor_blink {
            self.blink_counter += 1;
            if self.blink_counter >= CURSOR_BLINK_TICKS {
                self.blink_counter = 0;
                self.show_cursor = !self.show_cursor;
                self.ui_needs_refresh = true;
            }
        }
    }
}

pub struct App<C: Clock = SystemClock> {
    pub state: AppState<C>,
}

impl App<SystemClock> {
    pub fn new(config: AppConfig) -> Self {
        Self {
            state: AppState::new(config),
        }
    }
}

impl<C: Clock> App<C> {
    pub fn tick(&mut self) {
        self.state.on_tick();
    }

    /// Check and clear the refresh flag
    pub fn needs_ui_refresh(&mut self) -> bool {
        std::mem::take(&mut self.state.ui_needs_refresh)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wizard::{ManualClock, WizardSettings};

    #[test]
    fn test_cursor_blinks_every_few_ticks() {
        let mut state = AppState::new(AppConfig::default());
        assert!(state.show_cursor);
        for _ in 0..CURSOR_BLINK_TICKS {
            state.on_tick();
        }
        assert!(!state.show_cursor);
    }

    #[test]
    fn test_cursor_blink_disabled() {
        let mut config = AppConfig::default();
        config.ui.cursor_blink = false;
        let mut state = AppState::new(config);
        for _ in 0..20 {
            state.on_tick();
        }
        assert!(state.show_cursor);
    }

    #[test]
    fn test_quit_stops_wizard_timer() {
        let clock = ManualClock::new();
        let wizard = OnboardingWizard::with_clock(clock, &WizardSettings::default());
        let mut state = AppState::with_wizard(wizard, AppConfig::default());

        state.quit();
        assert!(state.should_quit);
        assert!(!state.wizard.timer_running());
    }

    #[test]
    fn test_needs_ui_refresh_clears_flag() {
        let mut app = App::new(AppConfig::default());
        assert!(app.needs_ui_refresh());
        assert!(!app.needs_ui_refresh());
    }
}
