// ABOUTME: Onboarding wizard rendering
// Draws the four rounds from the wizard's derived view model

pub mod component;

pub use component::OnboardingComponent;
