//! Ethical red flags raised by a replacement scenario
//!
//! Flags carry information. They never block or endorse a replacement.

use serde::{Deserialize, Serialize};

use super::ReplacementScenario;

/// Coherence delta below which a replacement destroys existing health
pub const COHERENCE_DESTRUCTION_THRESHOLD: f64 = -0.5;

/// Energy increase (kWh/day) above which scaling is flagged
pub const ENERGY_EXPLOSION_KWH: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Medium,
    High,
    Critical,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Severity::Medium => "MEDIUM",
            Severity::High => "HIGH",
            Severity::Critical => "CRITICAL",
        };
        f.write_str(s)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FlagKind {
    HumanReplacement,
    Regressive,
    CoherenceDestruction,
    EnergyExplosion,
    NoConsent,
}

impl FlagKind {
    pub fn code(&self) -> &'static str {
        match self {
            FlagKind::HumanReplacement => "HUMAN_REPLACEMENT",
            FlagKind::Regressive => "THERMODYNAMICALLY_REGRESSIVE",
            FlagKind::CoherenceDestruction => "COHERENCE_DESTRUCTION",
            FlagKind::EnergyExplosion => "ENERGY_EXPLOSION",
            FlagKind::NoConsent => "NO_CONSENT",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EthicalFlag {
    pub severity: Severity,
    pub kind: FlagKind,
    pub description: String,
    pub note: String,
}

impl EthicalFlag {
    fn new(
        severity: Severity,
        kind: FlagKind,
        description: impl Into<String>,
        note: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            kind,
            description: description.into(),
            note: note.into(),
        }
    }
}

fn mentions(text: Option<&str>, needle: &str) -> bool {
    text.is_some_and(|t| t.to_lowercase().contains(needle))
}

/// Flags for a scenario given its coherence and energy deltas
pub fn check(scenario: &ReplacementScenario, delta_coherence: f64, delta_energy: f64) -> Vec<EthicalFlag> {
    let mut flags = Vec::new();

    if mentions(scenario.current.description.as_deref(), "human") {
        flags.push(EthicalFlag::new(
            Severity::Critical,
            FlagKind::HumanReplacement,
            "Scenario involves replacing human with non-human system",
            "Humans have rights, dignity, and autonomy beyond thermodynamic efficiency",
        ));
    }

    if delta_coherence < 0.0 && delta_energy > 0.0 {
        flags.push(EthicalFlag::new(
            Severity::High,
            FlagKind::Regressive,
            "Replacement has BOTH lower coherence AND higher energy cost",
            "No rational justification - worse on every metric",
        ));
    }

    if delta_coherence < COHERENCE_DESTRUCTION_THRESHOLD {
        flags.push(EthicalFlag::new(
            Severity::High,
            FlagKind::CoherenceDestruction,
            "Replacement would destroy significant existing systemic health",
            "Large negative coherence delta indicates system degradation",
        ));
    }

    if delta_energy > ENERGY_EXPLOSION_KWH {
        flags.push(EthicalFlag::new(
            Severity::Medium,
            FlagKind::EnergyExplosion,
            format!("Energy cost increases by {delta_energy:.1} kWh/day"),
            "Unsustainable energy scaling",
        ));
    }

    if !mentions(scenario.ethical_considerations.as_deref(), "consent") {
        flags.push(EthicalFlag::new(
            Severity::Critical,
            FlagKind::NoConsent,
            "No consent mechanism described",
            "Replacement without consent is violence, regardless of efficiency",
        ));
    }

    flags
}

#[cfg(test)]
mod tests {
    use super::*;
    use mcpm_common::SystemState;

    fn scenario(current_desc: &str, considerations: Option<&str>) -> ReplacementScenario {
        ReplacementScenario {
            current: SystemState::new(1.0, 1.0, 1.0, 0.5, 0.0).with_description(current_desc),
            replacement: SystemState::new(1.0, 1.0, 1.0, 0.5, 0.0),
            context: "test".to_string(),
            ethical_considerations: considerations.map(str::to_string),
        }
    }

    fn kinds(flags: &[EthicalFlag]) -> Vec<FlagKind> {
        flags.iter().map(|f| f.kind).collect()
    }

    #[test]
    fn test_human_and_consent_flags() {
        let flags = check(&scenario("Rural HUMAN worker", None), 0.0, 0.0);
        assert_eq!(kinds(&flags), vec![FlagKind::HumanReplacement, FlagKind::NoConsent]);
    }

    #[test]
    fn test_consent_mentioned_clears_flag() {
        let flags = check(
            &scenario("robot arm", Some("Workers gave informed Consent")),
            0.0,
            0.0,
        );
        assert!(flags.is_empty());
    }

    #[test]
    fn test_degradation_flags() {
        let flags = check(&scenario("office", Some("consent obtained")), -0.8, 60.0);
        assert_eq!(
            kinds(&flags),
            vec![
                FlagKind::Regressive,
                FlagKind::CoherenceDestruction,
                FlagKind::EnergyExplosion
            ]
        );
        assert!(flags[2].description.contains("60.0 kWh/day"));
    }

    #[test]
    fn test_severity_ordering() {
        assert!(Severity::Critical > Severity::High);
        assert!(Severity::High > Severity::Medium);
    }
}
