// ABOUTME: CLI simulate command - run the analysis progress without a terminal UI
//
// Drives the same ProgressSimulator the wizard uses from a tokio interval
// and prints one report per tick.

use super::{OutputFormat, SimulateArgs};
use crate::config::AppConfig;
use crate::wizard::view::MilestoneView;
use crate::wizard::{AnalysisPhase, MilestoneStatus, ProgressSimulator};
use anyhow::{bail, Result};
use serde::Serialize;
use std::time::Duration;
use tracing::info;

/// Progress after one tick
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProgressReport {
    pub tick: u32,
    pub progress: u8,
    pub phase: AnalysisPhase,
    pub milestones: Vec<MilestoneView>,
}

impl ProgressReport {
    fn of(tick: u32, simulator: &ProgressSimulator) -> Self {
        Self {
            tick,
            progress: simulator.progress(),
            phase: simulator.phase(),
            milestones: simulator
                .milestones()
                .iter()
                .map(|(m, status)| MilestoneView {
                    caption: m.caption,
                    status: *status,
                })
                .collect(),
        }
    }

    /// Caption of the milestone currently being worked on
    pub fn active_caption(&self) -> Option<&'static str> {
        self.milestones
            .iter()
            .find(|m| m.status == MilestoneStatus::InProgress)
            .map(|m| m.caption)
    }
}

/// Execute the simulate command
pub async fn execute(args: SimulateArgs, format: OutputFormat, config: &AppConfig) -> Result<()> {
    let interval_ms = args.interval_ms.unwrap_or(config.analysis.tick_interval_ms);
    if interval_ms == 0 {
        bail!("--interval-ms must be at least 1");
    }

    let last = run(
        Duration::from_millis(interval_ms),
        config.analysis.increment,
        |report| print_report(report, format),
    )
    .await?;

    if format == OutputFormat::Text {
        println!("SPOT Complete! Analysis finished after {} ticks.", last.tick);
    }
    Ok(())
}

/// Run a simulation to completion, calling `on_tick` after every tick
pub async fn run<F>(interval: Duration, increment: u8, mut on_tick: F) -> Result<ProgressReport>
where
    F: FnMut(&ProgressReport) -> Result<()>,
{
    let mut simulator = ProgressSimulator::new(increment);
    simulator.start();
    info!(
        "Starting headless analysis: interval={:?}, increment={}",
        interval,
        simulator.increment()
    );

    let mut ticker = tokio::time::interval(interval);
    // The first tick completes immediately
    ticker.tick().await;

    let mut tick = 0;
    loop {
        ticker.tick().await;
        tick += 1;
        let phase = simulator.tick();
        let report = ProgressReport::of(tick, &simulator);
        on_tick(&report)?;

        if phase == AnalysisPhase::Done {
            info!("Headless analysis done after {} ticks", tick);
            return Ok(report);
        }
    }
}

fn print_report(report: &ProgressReport, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string(report)?),
        OutputFormat::Text => {
            let caption = report.active_caption().unwrap_or("All milestones complete");
            println!("{:>3}% | {}", report.progress, caption);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_run_reaches_done_in_twenty_ticks() {
        let mut seen = Vec::new();
        let last = run(Duration::from_millis(200), 5, |report| {
            seen.push(report.progress);
            Ok(())
        })
        .await
        .unwrap();

        assert_eq!(last.tick, 20);
        assert_eq!(last.progress, 100);
        assert_eq!(last.phase, AnalysisPhase::Done);
        assert_eq!(seen.len(), 20);
        assert!(seen.windows(2).all(|w| w[0] < w[1]));
    }

    #[tokio::test(start_paused = true)]
    async fn test_report_at_25_percent() {
        let mut fifth = None;
        run(Duration::from_millis(200), 5, |report| {
            if report.tick == 5 {
                fifth = Some(report.clone());
            }
            Ok(())
        })
        .await
        .unwrap();

        let fifth = fifth.unwrap();
        assert_eq!(fifth.progress, 25);
        assert_eq!(fifth.active_caption(), Some("Shuffling market opportunities..."));
        let statuses: Vec<MilestoneStatus> = fifth.milestones.iter().map(|m| m.status).collect();
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

    #[tokio::test(start_paused = true)]
    async fn test_callback_error_stops_run() {
        let result = run(Duration::from_millis(10), 5, |report| {
            if report.tick == 3 {
                bail!("stdout closed");
            }
            Ok(())
        })
        .await;
        assert!(result.is_err());
    }

    #[test]
    fn test_report_serialization() {
        let mut simulator = ProgressSimulator::default();
        simulator.start();
        simulator.tick();
        let json = serde_json::to_value(ProgressReport::of(1, &simulator)).unwrap();
        assert_eq!(json["progress"], 5);
        assert_eq!(json["phase"], "running");
        assert_eq!(json["milestones"][0]["status"], "in-progress");
    }
}
