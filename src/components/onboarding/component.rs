// ABOUTME: Main onboarding wizard component
// Draws the derived wizard view: round indicator, step body, and key hints

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Gauge, Padding, Paragraph, Wrap},
    Frame,
};

use crate::wizard::view::{
    AnalysisView, DocumentsView, FieldView, MilestoneView, RegistrationView, StepIndicator,
    StepView, VerificationView,
};
use crate::wizard::{Clock, FormField, MilestoneStatus, OnboardingWizard, StepStatus, WizardFocus};

const ORANGE: Color = Color::Rgb(249, 115, 22);
const AMBER: Color = Color::Rgb(245, 158, 11);
const SELECTION_GREEN: Color = Color::Rgb(100, 200, 100);
const DARK_BG: Color = Color::Rgb(25, 25, 35);
const PANEL_BG: Color = Color::Rgb(30, 30, 40);
const SOFT_WHITE: Color = Color::Rgb(220, 220, 230);
const MUTED_GRAY: Color = Color::Rgb(120, 120, 140);
const SUBDUED_BORDER: Color = Color::Rgb(60, 60, 80);
const FOCUS_BG: Color = Color::Rgb(40, 40, 60);

/// Width of the label column on the registration form
const LABEL_WIDTH: usize = 30;

/// The onboarding wizard component
pub struct OnboardingComponent;

impl OnboardingComponent {
    pub fn new() -> Self {
        Self
    }

    /// Main render function
    pub fn render<C: Clock>(
        &self,
        frame: &mut Frame,
        area: Rect,
        wizard: &OnboardingWizard<C>,
        show_cursor: bool,
    ) {
        frame.render_widget(Clear, area);
        frame.render_widget(Block::default().style(Style::default().bg(DARK_BG)), area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(5), // Header with round indicator
                Constraint::Min(12),   // Step body
                Constraint::Length(3), // Key hints
            ])
            .split(area);

        let view = wizard.view();
        let focus = wizard.focus();

        self.render_header(frame, layout[0], &view.indicator);
        match &view.body {
            StepView::Registration(reg) => {
                self.render_registration(frame, layout[1], reg, focus, show_cursor);
            }
            StepView::Verification(ver) => {
                self.render_verification(frame, layout[1], ver, focus, show_cursor);
            }
            StepView::Documents(docs) => self.render_documents(frame, layout[1], docs, focus),
            StepView::Analysis(analysis) => self.render_analysis(frame, layout[1], analysis),
        }
        self.render_navigation(frame, layout[2], &view.body);
    }

    /// Render the title and round indicator
    fn render_header(&self, frame: &mut Frame, area: Rect, indicator: &[StepIndicator]) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(ORANGE))
            .style(Style::default().bg(PANEL_BG));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let header_layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(inner);

        let title = Paragraph::new(Line::from(vec![
            Span::styled("♠ ", Style::default().fg(AMBER)),
            Span::styled(
                "SPOT Growth Game",
                Style::default().fg(ORANGE).add_modifier(Modifier::BOLD),
            ),
        ]))
        .alignment(Alignment::Center);
        frame.render_widget(title, header_layout[0]);

        let mut spans = Vec::new();
        for (idx, entry) in indicator.iter().enumerate() {
            let (icon, icon_style, text_style) = match entry.status {
                StepStatus::Completed => (
                    "✓",
                    Style::default().fg(SELECTION_GREEN),
                    Style::default().fg(AMBER),
                ),
                StepStatus::Active => (
                    "◉",
                    Style::default().fg(ORANGE).add_modifier(Modifier::BOLD),
                    Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
                ),
                StepStatus::Upcoming => (
                    "○",
                    Style::default().fg(MUTED_GRAY),
                    Style::default().fg(MUTED_GRAY),
                ),
            };

            spans.push(Span::styled(icon, icon_style));
            spans.push(Span::styled(
                format!(" Round {}: {}", entry.step.number(), entry.step.title()),
                text_style,
            ));
            if idx + 1 < indicator.len() {
                spans.push(Span::styled(" → ", Style::default().fg(SUBDUED_BORDER)));
            }
        }

        let progress = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(progress, header_layout[1]);
    }

    fn step_block(title: &str) -> Block<'_> {
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(ORANGE))
            .style(Style::default().bg(PANEL_BG))
            .title(title)
            .title_style(Style::default().fg(AMBER).add_modifier(Modifier::BOLD))
    }

    fn button(label: &str, focused: bool, enabled: bool) -> Span<'static> {
        let style = match (focused, enabled) {
            (_, false) => Style::default().fg(MUTED_GRAY),
            (true, true) => Style::default()
                .fg(DARK_BG)
                .bg(ORANGE)
                .add_modifier(Modifier::BOLD),
            (false, true) => Style::default().fg(ORANGE).add_modifier(Modifier::BOLD),
        };
        Span::styled(format!("[ {} ]", label), style)
    }

    /// One form row: marker, padded label, and value or placeholder
    fn field_line(field: &FieldView, focused: bool, show_cursor: bool) -> Line<'static> {
        let marker = if focused { "▶ " } else { "  " };
        let label = format!("{:<width$}", field.label, width = LABEL_WIDTH);

        let mut spans = vec![
            Span::styled(marker, Style::default().fg(ORANGE)),
            Span::styled(
                label,
                if focused {
                    Style::default().fg(AMBER).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(SOFT_WHITE)
                },
            ),
        ];

        if field.field == FormField::IndustryType {
            let text = if field.is_empty() {
                field.placeholder.to_string()
            } else {
                field.value.clone()
            };
            spans.push(Span::styled("◀ ", Style::default().fg(MUTED_GRAY)));
            spans.push(Span::styled(
                text,
                if field.is_empty() {
                    Style::default().fg(MUTED_GRAY)
                } else {
                    Style::default().fg(SOFT_WHITE)
                },
            ));
            spans.push(Span::styled(" ▶", Style::default().fg(MUTED_GRAY)));
        } else if field.is_empty() && !focused {
            spans.push(Span::styled(
                field.placeholder.to_string(),
                Style::default().fg(MUTED_GRAY),
            ));
        } else {
            spans.push(Span::styled(field.value.clone(), Style::default().fg(SOFT_WHITE)));
            if focused && show_cursor {
                spans.push(Span::styled("│", Style::default().fg(ORANGE)));
            }
        }

        if focused {
            for span in &mut spans {
                span.style = span.style.bg(FOCUS_BG);
            }
        }
        Line::from(spans)
    }

    /// Render registration step
    fn render_registration(
        &self,
        frame: &mut Frame,
        area: Rect,
        view: &RegistrationView,
        focus: WizardFocus,
        show_cursor: bool,
    ) {
        let block = Self::step_block(" Round 1: First Deal ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let mut lines = vec![
            Line::from(Span::styled(
                "Enter the Growth Game!",
                Style::default().fg(ORANGE).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            Line::from(Span::styled(
                "Four simple rounds to your personalized SPOT Analysis.",
                Style::default().fg(MUTED_GRAY),
            ))
            .alignment(Alignment::Center),
            Line::from(""),
        ];

        for field in &view.fields {
            let focused = focus == WizardFocus::Field(field.field);
            lines.push(Self::field_line(field, focused, show_cursor));
        }

        let terms_focused = focus == WizardFocus::Field(FormField::AgreeToTerms);
        let checkbox = if view.agree_to_terms { "[x] " } else { "[ ] " };
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled(
                if terms_focused { "▶ " } else { "  " },
                Style::default().fg(ORANGE),
            ),
            Span::styled(checkbox, Style::default().fg(AMBER)),
            Span::styled(
                FormField::AgreeToTerms.label(),
                if terms_focused {
                    Style::default().fg(AMBER).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(SOFT_WHITE)
                },
            ),
        ]));

        lines.push(Line::from(""));
        lines.push(
            Line::from(Self::button(
                "Get Started →",
                focus == WizardFocus::Primary,
                true,
            ))
            .alignment(Alignment::Center),
        );

        let body = Paragraph::new(lines).block(Block::default().padding(Padding::horizontal(2)));
        frame.render_widget(body, inner);
    }

    /// Render verification step
    fn render_verification(
        &self,
        frame: &mut Frame,
        area: Rect,
        view: &VerificationView,
        focus: WizardFocus,
        show_cursor: bool,
    ) {
        let block = Self::step_block(" Round 2: Card Check ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let code_focused = focus == WizardFocus::Field(FormField::VerificationCode);
        let code_bg = if code_focused { FOCUS_BG } else { PANEL_BG };
        let code = if view.code.is_empty() && !code_focused {
            Span::styled(view.code.placeholder, Style::default().fg(MUTED_GRAY))
        } else {
            Span::styled(
                view.code.value.clone(),
                Style::default()
                    .fg(SOFT_WHITE)
                    .bg(code_bg)
                    .add_modifier(Modifier::BOLD),
            )
        };
        let cursor = if code_focused && show_cursor { "│" } else { " " };

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Check Your Inbox to Verify Your Hand!",
                Style::default().fg(ORANGE).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    "We've dealt a secure verification card to ",
                    Style::default().fg(SOFT_WHITE),
                ),
                Span::styled(
                    view.email.clone(),
                    Style::default().fg(ORANGE).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(""),
            Line::from(Span::styled(
                "Or enter verification code manually:",
                Style::default().fg(MUTED_GRAY),
            )),
            Line::from(vec![
                Span::styled(if code_focused { "▶ " } else { "  " }, Style::default().fg(ORANGE)),
                code,
                Span::styled(cursor, Style::default().fg(ORANGE)),
            ]),
            Line::from(""),
            Line::from(vec![
                Self::button("Resend Email", focus == WizardFocus::Resend, true),
                Span::raw("   "),
                Self::button("Verify & Continue →", focus == WizardFocus::Primary, true),
            ]),
        ];

        let body = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: false });
        frame.render_widget(body, inner);
    }

    /// Render document upload step
    fn render_documents(
        &self,
        frame: &mut Frame,
        area: Rect,
        view: &DocumentsView,
        focus: WizardFocus,
    ) {
        let block = Self::step_block(" Round 3: SPOT Draw ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let layout = Layout::default()
            .direction(Direction::Vertical)
            .margin(1)
            .constraints([
                Constraint::Length(2), // Intro
                Constraint::Min(6),    // Slot cards
                Constraint::Length(1), // Continue button
            ])
            .split(inner);

        let intro = Paragraph::new(Line::from(Span::styled(
            "Upload your files: each card reveals part of your winning strategy!",
            Style::default().fg(SOFT_WHITE),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(intro, layout[0]);

        let count = u32::try_from(view.slots.len().max(1)).unwrap_or(1);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(
                view.slots
                    .iter()
                    .map(|_| Constraint::Ratio(1, count))
                    .collect::<Vec<_>>(),
            )
            .split(layout[1]);

        for (idx, (slot, column)) in view.slots.iter().zip(columns.iter()).enumerate() {
            let focused = focus == WizardFocus::Slot(idx);
            let border = if focused { ORANGE } else { SUBDUED_BORDER };
            let card = Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .border_style(Style::default().fg(border))
                .title(format!(" {} ", idx + 1));

            let status = if slot.uploaded {
                vec![
                    Line::from(Span::styled("✓", Style::default().fg(SELECTION_GREEN))),
                    Line::from(Span::styled(
                        "Upload Complete!",
                        Style::default().fg(SELECTION_GREEN).add_modifier(Modifier::BOLD),
                    )),
                ]
            } else {
                vec![
                    Line::from(Span::styled("⇪", Style::default().fg(MUTED_GRAY))),
                    Line::from(Span::styled(
                        format!("Press {} to upload", idx + 1),
                        Style::default().fg(MUTED_GRAY),
                    )),
                ]
            };

            let mut lines = vec![Line::from(Span::styled(
                slot.name.clone(),
                Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
            ))];
            lines.push(Line::from(""));
            lines.extend(status);

            let card_body = Paragraph::new(lines)
                .block(card)
                .alignment(Alignment::Center)
                .wrap(Wrap { trim: true });
            frame.render_widget(card_body, *column);
        }

        let button = Paragraph::new(Line::from(Self::button(
            &view.continue_caption,
            focus == WizardFocus::Primary,
            view.can_continue,
        )))
        .alignment(Alignment::Center);
        frame.render_widget(button, layout[2]);
    }

    fn milestone_line(milestone: &MilestoneView) -> Line<'static> {
        let (icon, icon_style, text_style) = match milestone.status {
            MilestoneStatus::Complete => (
                "✓ ",
                Style::default().fg(SELECTION_GREEN),
                Style::default().fg(SOFT_WHITE),
            ),
            MilestoneStatus::InProgress => (
                "◌ ",
                Style::default().fg(ORANGE),
                Style::default().fg(SOFT_WHITE).add_modifier(Modifier::BOLD),
            ),
            MilestoneStatus::Pending => (
                "○ ",
                Style::default().fg(MUTED_GRAY),
                Style::default().fg(MUTED_GRAY),
            ),
        };
        Line::from(vec![
            Span::styled(icon, icon_style),
            Span::styled(milestone.caption, text_style),
        ])
    }

    /// Render analysis step
    fn render_analysis(&self, frame: &mut Frame, area: Rect, view: &AnalysisView) {
        let block = Self::step_block(" Round 4: SPOT Play ");
        let inner = block.inner(area);
        frame.render_widget(block, area);

        match view {
            AnalysisView::Ready => {
                let lines = vec![
                    Line::from(""),
                    Line::from(Span::styled(
                        "Ready for the SPOT Showdown!",
                        Style::default().fg(ORANGE).add_modifier(Modifier::BOLD),
                    )),
                    Line::from(""),
                    Line::from(Span::styled(
                        "All your cards have been played. We're ready to analyze your hand.",
                        Style::default().fg(SOFT_WHITE),
                    )),
                    Line::from(""),
                    Line::from(Self::button("Start Analysis", true, true)),
                ];
                let body = Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: false });
                frame.render_widget(body, inner);
            }
            AnalysisView::InProgress {
                progress,
                milestones,
            } => {
                let layout = Layout::default()
                    .direction(Direction::Vertical)
                    .margin(1)
                    .constraints([
                        Constraint::Length(2), // Heading
                        Constraint::Length(3), // Gauge
                        Constraint::Min(4),    // Milestones
                    ])
                    .split(inner);

                let heading = Paragraph::new(Line::from(Span::styled(
                    "Cards in Play: Your SPOT Hand is Being Dealt!",
                    Style::default().fg(ORANGE).add_modifier(Modifier::BOLD),
                )))
                .alignment(Alignment::Center);
                frame.render_widget(heading, layout[0]);

                let gauge = Gauge::default()
                    .block(
                        Block::default()
                            .borders(Borders::ALL)
                            .border_type(BorderType::Rounded)
                            .border_style(Style::default().fg(SUBDUED_BORDER)),
                    )
                    .gauge_style(Style::default().fg(ORANGE).bg(DARK_BG))
                    .percent(u16::from(*progress))
                    .label(format!("{}%", progress));
                frame.render_widget(gauge, layout[1]);

                let lines: Vec<Line> = milestones.iter().map(Self::milestone_line).collect();
                frame.render_widget(Paragraph::new(lines), layout[2]);
            }
            AnalysisView::Complete => {
                let lines = vec![
                    Line::from(""),
                    Line::from(Span::styled(
                        "SPOT Complete! 🎉",
                        Style::default().fg(ORANGE).add_modifier(Modifier::BOLD),
                    )),
                    Line::from(""),
                    Line::from(Span::styled(
                        "Your personalized SPOT Analysis is ready!",
                        Style::default().fg(SOFT_WHITE),
                    )),
                    Line::from(""),
                    Line::from(Self::button("View Your Results", true, true)),
                ];
                let body = Paragraph::new(lines)
                    .alignment(Alignment::Center)
                    .wrap(Wrap { trim: false });
                frame.render_widget(body, inner);
            }
        }
    }

    /// Render key hints footer
    fn render_navigation(&self, frame: &mut Frame, area: Rect, body: &StepView) {
        let block = Block::default()
            .borders(Borders::TOP)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(SUBDUED_BORDER))
            .style(Style::default().bg(DARK_BG));

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let hints: &[(&str, &str)] = match body {
            StepView::Registration(_) => &[
                ("Tab/↓", "Next field"),
                ("←/→", "Industry"),
                ("Space", "Agree"),
                ("Enter", "Select"),
            ],
            StepView::Verification(_) => &[("Tab/↓", "Next"), ("Enter", "Select")],
            StepView::Documents(_) => &[("1-3", "Upload"), ("Tab/↓", "Next"), ("Enter", "Select")],
            StepView::Analysis(AnalysisView::InProgress { .. }) => &[],
            StepView::Analysis(_) => &[("Enter", "Select")],
        };

        let mut spans = vec![Span::styled("  ", Style::default())];
        for (key, action) in hints.iter().chain(std::iter::once(&("Esc", "Quit"))) {
            spans.push(Span::styled("[", Style::default().fg(SUBDUED_BORDER)));
            spans.push(Span::styled(*key, Style::default().fg(AMBER)));
            spans.push(Span::styled("]", Style::default().fg(SUBDUED_BORDER)));
            spans.push(Span::styled(format!(" {}  ", action), Style::default().fg(MUTED_GRAY)));
        }

        let nav = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
        frame.render_widget(nav, inner);
    }
}

impl Default for OnboardingComponent {
    fn default() -> Self {
        Self::new()
    }
}
