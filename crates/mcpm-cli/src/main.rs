//! MCPM Report Binary
//!
//! Prints coherence measurements to stdout. With no scenario file it runs
//! the built-in comparison, replacement, and pattern reports.
//!
//! ```text
//! mcpm [SCENARIO.json]
//! ```

mod config;

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use mcpm_coherence::{
    compare_systems, presets, rank, CoherenceMetric, EfficiencyCalculator, ReplacementAnalysis,
};
use mcpm_common::{McpmError, SystemState, VERSION};
use mcpm_energy::EnergyIntegrator;

use crate::config::McpmConfig;

const RULE: &str = "======================================================================";

/// Entry of a scenario file
#[derive(Debug, Clone, Serialize, Deserialize)]
struct NamedSystem {
    name: String,
    system: SystemState,
}

fn main() -> Result<()> {
    // Logs go to stderr so stdout carries only the report
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    info!("Starting MCPM report v{}", VERSION);

    let config = McpmConfig::load()?.with_scenario_arg(std::env::args().nth(1));
    info!("Loaded configuration: {:?}", config);

    let metric = CoherenceMetric::new(&config.coherence)?;

    match &config.scenario_path {
        Some(path) => report_scenario_file(&metric, path)?,
        None => report_builtin(&metric)?,
    }

    Ok(())
}

fn parse_systems(raw: &str) -> mcpm_common::Result<Vec<(String, SystemState)>> {
    let systems: Vec<NamedSystem> = serde_json::from_str(raw)?;
    Ok(systems.into_iter().map(|s| (s.name, s.system)).collect())
}

fn load_systems(path: &Path) -> Result<Vec<(String, SystemState)>> {
    let raw = std::fs::read_to_string(path)
        .map_err(McpmError::from)
        .with_context(|| format!("reading scenario file {}", path.display()))?;
    let systems = parse_systems(&raw)
        .with_context(|| format!("parsing scenario file {}", path.display()))?;
    info!(count = systems.len(), "Loaded scenario file");
    Ok(systems)
}

fn report_scenario_file(metric: &CoherenceMetric, path: &Path) -> Result<()> {
    let systems = load_systems(path)?;

    println!("{RULE}");
    println!("COHERENCE MEASUREMENT: {}", path.display());
    println!("{RULE}");

    for (name, state) in &systems {
        let breakdown = metric
            .breakdown(state)
            .with_context(|| format!("measuring '{name}'"))?;
        println!();
        println!("{name}: {}", state.label());
        println!("  {breakdown}");

        if let Some(profile) = &state.energy {
            let energy = EnergyIntegrator::breakdown(profile)
                .with_context(|| format!("integrating energy of '{name}'"))?;
            for line in energy.to_string().lines() {
                println!("  {line}");
            }
            match EfficiencyCalculator::for_state(metric, state) {
                Ok(Some(eta)) => println!("  Efficiency: {eta:.4} coherence/kWh"),
                Ok(None) => println!("  Efficiency: N/A"),
                Err(err) => println!("  Efficiency: N/A ({err})"),
            }
        }
    }

    print_ranking(metric, &systems)
}

fn print_ranking(metric: &CoherenceMetric, systems: &[(String, SystemState)]) -> Result<()> {
    println!();
    println!("RANKING (by coherence):");
    for (position, (name, coherence)) in rank(metric, systems)?.into_iter().enumerate() {
        println!("  {}. {name:<20} M(S) = {coherence:+.3}", position + 1);
    }
    Ok(())
}

fn report_builtin(metric: &CoherenceMetric) -> Result<()> {
    println!("{RULE}");
    println!("COHERENCE METRIC DEMONSTRATION");
    println!("{RULE}");
    println!();

    let comparison = compare_systems(metric, &presets::rural_worker()?, &presets::executive()?)?;
    println!("{comparison}");
    println!();

    let analysis = ReplacementAnalysis::new(metric.clone());
    for scenario in [presets::human_vs_robot()?, presets::executive_vs_ai()?] {
        println!("{}", analysis.analyze(&scenario)?);
        println!();
    }

    println!("{RULE}");
    println!("INTERACTION PATTERNS");
    println!("{RULE}");
    let patterns = presets::interaction_patterns()?;
    for (name, state) in &patterns {
        println!("{name}: {}", metric.breakdown(state)?);
    }
    print_ranking(metric, &patterns)?;

    println!();
    println!("This measurement reveals truth. It doesn't enforce policy.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::path::PathBuf;

    const DEMO: &str = include_str!("../../../demos/systems.json");

    fn scenario_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("mcpm-{}-{name}.json", std::process::id()));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_demo_scenario_parses_and_ranks() {
        let systems = parse_systems(DEMO).unwrap();

        let metric = CoherenceMetric::default();
        let ranking = rank(&metric, &systems).unwrap();
        assert_eq!(ranking[0].0, "Household");
        assert_eq!(ranking[2].0, "Rigid firm");
    }

    #[test]
    fn test_demo_household_efficiency() {
        let systems: Vec<NamedSystem> = serde_json::from_str(DEMO).unwrap();
        let metric = CoherenceMetric::default();
        let eta = EfficiencyCalculator::for_state(&metric, &systems[0].system)
            .unwrap()
            .unwrap();
        assert!((eta - 3.667).abs() < 1e-3);
    }

    #[test]
    fn test_report_scenario_file() {
        let path = scenario_file("demo", DEMO);
        let result = report_scenario_file(&CoherenceMetric::default(), &path);
        std::fs::remove_file(&path).ok();
        assert!(result.is_ok());
    }

    #[test]
    fn test_malformed_scenario_file() {
        let path = scenario_file("malformed", r#"[{"name": "Broken", "system": {"#);
        let err = load_systems(&path).unwrap_err();
        std::fs::remove_file(&path).ok();

        assert!(err.to_string().contains("parsing scenario file"));
        assert!(matches!(
            err.downcast_ref::<McpmError>(),
            Some(McpmError::Serialization(_))
        ));
    }

    #[test]
    fn test_ragged_coupling_in_scenario_file() {
        let raw = r#"[{"name": "Ragged", "system": {
            "resonance_energy": 1.0, "adaptability": 1.0, "diversity": 1.0,
            "coupling": [[1.0, 0.0], [0.0]], "loss_rate": 0.0
        }}]"#;
        let err = parse_systems(raw).unwrap_err();
        assert!(matches!(err, McpmError::Serialization(ref msg) if msg.contains("must be square")));
    }

    #[test]
    fn test_missing_scenario_file() {
        let path = std::env::temp_dir().join("mcpm-no-such-scenario.json");
        let err = load_systems(&path).unwrap_err();
        assert!(matches!(err.downcast_ref::<McpmError>(), Some(McpmError::Io(_))));
    }

    #[test]
    fn test_invalid_system_in_scenario_file_fails_report() {
        let raw = r#"[{"name": "Negative", "system": {
            "resonance_energy": 1.0, "adaptability": 1.0, "diversity": -1.0,
            "coupling": 0.5, "loss_rate": 0.0
        }}]"#;
        let path = scenario_file("negative", raw);
        let err = report_scenario_file(&CoherenceMetric::default(), &path).unwrap_err();
        std::fs::remove_file(&path).ok();
        assert!(err.to_string().contains("measuring 'Negative'"));
    }
}
