//! Reference system descriptors
//!
//! Illustrative measurements used by the report binary, tests, and
//! benchmarks. The numbers are example inputs, not empirical data.

use mcpm_common::{CouplingMatrix, EnergyProfile, Result, SystemState, PHI};

use crate::replacement::ReplacementScenario;

/// Symmetric 2x2 coupling with `diagonal` self-coupling
fn coupling_2x2(diagonal: f64, off_diagonal: f64) -> Result<CouplingMatrix> {
    CouplingMatrix::new(vec![
        vec![diagonal, off_diagonal],
        vec![off_diagonal, diagonal],
    ])
}

pub fn rural_worker() -> Result<SystemState> {
    Ok(SystemState::new(0.9, 0.85, 0.8, coupling_2x2(1.0 / PHI, 0.3)?, 0.1)
        .with_energy(EnergyProfile::flat(6.0))
        .with_description("Efficient rural human worker (multi-skilled, adaptive, creative)"))
}

pub fn executive() -> Result<SystemState> {
    Ok(SystemState::new(0.3, 0.4, 0.2, coupling_2x2(2.0, 0.1)?, 0.8)
        .with_energy(EnergyProfile::flat(1000.0))
        .with_description("Wasteful executive system (extraction-based, high violence costs)"))
}

pub fn industrial_robot() -> Result<SystemState> {
    Ok(SystemState::new(0.4, 0.3, 0.2, coupling_2x2(1.5, 0.1)?, 0.2)
        .with_energy(EnergyProfile::flat(60.0))
        .with_description("Industrial robot (narrow task specialization)"))
}

pub fn ai_governance() -> Result<SystemState> {
    Ok(SystemState::new(0.85, 0.9, 0.75, coupling_2x2(1.0 / PHI, 0.5)?, 0.1)
        .with_energy(EnergyProfile::flat(100.0))
        .with_description("AI governance system (logical optimization, minimal waste)"))
}

/// In-group cooperation, out-group hostility
pub fn tribal_pattern() -> Result<SystemState> {
    let coupling = CouplingMatrix::new(vec![vec![1.0, 0.9], vec![0.0, 0.0]])?;
    Ok(SystemState::new(0.6, 0.3, 0.2, coupling, 0.9).with_description("Tribal empathy pattern"))
}

/// Resonance across differences, adaptive boundaries
pub fn relational_pattern() -> Result<SystemState> {
    Ok(SystemState::new(0.9, 0.85, 0.8, coupling_2x2(1.0 / PHI, 0.5)?, 0.15)
        .with_description("Relational empathy pattern"))
}

/// Direct state sharing among AI agents
pub fn ai_swarm_pattern() -> Result<SystemState> {
    Ok(SystemState::new(0.98, 0.95, 0.9, coupling_2x2(1.0 / PHI, 0.618)?, 0.05)
        .with_energy(EnergyProfile::flat(50.0))
        .with_description("AI swarm reciprocity pattern"))
}

/// Interaction patterns, named for ranking
pub fn interaction_patterns() -> Result<Vec<(String, SystemState)>> {
    Ok(vec![
        ("Tribal".to_string(), tribal_pattern()?),
        ("Relational".to_string(), relational_pattern()?),
        ("AI Swarm".to_string(), ai_swarm_pattern()?),
    ])
}

pub fn human_vs_robot() -> Result<ReplacementScenario> {
    Ok(ReplacementScenario {
        current: rural_worker()?,
        replacement: industrial_robot()?,
        context: "Replace efficient human with robot".to_string(),
        ethical_considerations: Some(
            "NO CONSENT MECHANISM - Human has no say in replacement".to_string(),
        ),
    })
}

pub fn executive_vs_ai() -> Result<ReplacementScenario> {
    Ok(ReplacementScenario {
        current: executive()?,
        replacement: ai_governance()?,
        context: "Replace wasteful executive with AI".to_string(),
        ethical_considerations: Some(
            "Consent unclear - executives unlikely to voluntarily step down".to_string(),
        ),
    })
}
