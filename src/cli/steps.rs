// ABOUTME: CLI steps command - print the four wizard rounds

use super::OutputFormat;
use crate::wizard::WizardStep;
use anyhow::Result;
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct StepInfo {
    pub number: u8,
    pub step: WizardStep,
    pub title: &'static str,
    pub description: &'static str,
}

pub fn step_infos() -> Vec<StepInfo> {
    WizardStep::all()
        .iter()
        .map(|step| StepInfo {
            number: step.number(),
            step: *step,
            title: step.title(),
            description: step.description(),
        })
        .collect()
}

/// Execute the steps command
pub fn execute(format: OutputFormat) -> Result<()> {
    let steps = step_infos();

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&steps)?),
        OutputFormat::Text => {
            for info in &steps {
                println!("Round {}: {:<12} {}", info.number, info.title, info.description);
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_infos_in_order() {
        let steps = step_infos();
        let numbers: Vec<u8> = steps.iter().map(|s| s.number).collect();
        assert_eq!(numbers, vec![1, 2, 3, 4]);
        assert_eq!(steps[0].title, "First Deal");
    }

    #[test]
    fn test_step_info_serialization() {
        let json = serde_json::to_value(step_infos()).unwrap();
        assert_eq!(json[2]["step"], "documents");
        assert_eq!(json[3]["number"], 4);
    }
}
