// ABOUTME: Library crate for spot-onboard exposing the wizard and TUI for testing and reuse

#![allow(missing_docs)]

pub mod app;
pub mod cli;
pub mod components;
pub mod config;
pub mod wizard;
