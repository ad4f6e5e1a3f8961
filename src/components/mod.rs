// ABOUTME: UI components for the onboarding TUI

pub mod layout;
pub mod onboarding;

pub use layout::LayoutComponent;
pub use onboarding::OnboardingComponent;
