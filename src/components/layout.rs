// ABOUTME: Top-level layout component deciding what fills the terminal each frame

use ratatui::{
    prelude::*,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use super::OnboardingComponent;
use crate::app::AppState;
use crate::wizard::Clock;

const WARNING_ORANGE: Color = Color::Rgb(255, 165, 0);
const DARK_BG: Color = Color::Rgb(25, 25, 35);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);

/// Smallest area the wizard can be drawn in
pub const MIN_WIDTH: u16 = 60;
pub const MIN_HEIGHT: u16 = 24;

pub struct LayoutComponent {
    onboarding: OnboardingComponent,
}

impl LayoutComponent {
    pub fn new() -> Self {
        Self {
            onboarding: OnboardingComponent::new(),
        }
    }

    pub fn render<C: Clock>(&mut self, frame: &mut Frame, state: &AppState<C>) {
        let area = frame.size();
        if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            tracing::debug!("Terminal too small: {}x{}", area.width, area.height);
            render_too_small(frame, area);
            return;
        }

        self.onboarding
            .render(frame, area, &state.wizard, state.show_cursor);
    }
}

impl Default for LayoutComponent {
    fn default() -> Self {
        Self::new()
    }
}

fn render_too_small(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(WARNING_ORANGE))
        .style(Style::default().bg(DARK_BG));

    let message = Paragraph::new(vec![
        Line::from(Span::styled(
            "Terminal too small",
            Style::default().fg(WARNING_ORANGE),
        )),
        Line::from(Span::styled(
            format!("Resize to at least {}x{}", MIN_WIDTH, MIN_HEIGHT),
            Style::default().fg(SOFT_WHITE),
        )),
    ])
    .block(block)
    .alignment(Alignment::Center)
    .wrap(Wrap { trim: true });
    frame.render_widget(message, area);
}
