//! Replacement analysis
//!
//! Calculates whether replacing one system with another makes
//! thermodynamic sense. The report is information about coherence and
//! energy tradeoffs; it accounts for none of dignity, community, autonomy,
//! or consent, and it never justifies a replacement.

pub mod flags;
pub mod verdict;

use mcpm_common::{Result, SystemState, ENERGY_UNIT};
use mcpm_energy::EnergyIntegrator;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use crate::efficiency::EfficiencyCalculator;
use crate::metric::CoherenceMetric;

pub use self::flags::{EthicalFlag, FlagKind, Severity};
pub use self::verdict::ThermodynamicVerdict;

/// Current system and its potential replacement
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplacementScenario {
    pub current: SystemState,
    pub replacement: SystemState,
    pub context: String,
    #[serde(default)]
    pub ethical_considerations: Option<String>,
}

/// Current/replacement pair of a measured quantity
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Delta<T> {
    pub current: T,
    pub replacement: T,
    pub delta: T,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplacementReport {
    pub context: String,
    pub current_description: String,
    pub replacement_description: String,
    pub coherence: Delta<f64>,
    /// kWh/day; a system without an energy profile counts as 0, but a
    /// profile that sums to 0 fails the analysis with `DivisionByZero`
    pub energy: Delta<f64>,
    pub efficiency: Delta<Option<f64>>,
    pub verdict: ThermodynamicVerdict,
    pub flags: Vec<EthicalFlag>,
}

impl ReplacementReport {
    /// Highest flag severity, if any flag was raised
    pub fn max_severity(&self) -> Option<Severity> {
        self.flags.iter().map(|f| f.severity).max()
    }

    pub fn has_flag(&self, kind: FlagKind) -> bool {
        self.flags.iter().any(|f| f.kind == kind)
    }
}

/// Analyzes replacement scenarios thermodynamically
#[derive(Debug, Clone, Default)]
pub struct ReplacementAnalysis {
    metric: CoherenceMetric,
}

impl ReplacementAnalysis {
    pub fn new(metric: CoherenceMetric) -> Self {
        Self { metric }
    }

    #[instrument(skip_all, fields(context = %scenario.context))]
    pub fn analyze(&self, scenario: &ReplacementScenario) -> Result<ReplacementReport> {
        let m_current = self.metric.calculate_from_state(&scenario.current)?;
        let m_replacement = self.metric.calculate_from_state(&scenario.replacement)?;
        let delta_m = m_replacement - m_current;

        let e_current = EnergyIntegrator::energy_cost(&scenario.current)?.unwrap_or(0.0);
        let e_replacement = EnergyIntegrator::energy_cost(&scenario.replacement)?.unwrap_or(0.0);
        let delta_e = e_replacement - e_current;

        let eff_current = EfficiencyCalculator::for_state(&self.metric, &scenario.current)?;
        let eff_replacement = EfficiencyCalculator::for_state(&self.metric, &scenario.replacement)?;
        let delta_eff = match (eff_current, eff_replacement) {
            (Some(c), Some(r)) => Some(r - c),
            _ => None,
        };

        let verdict = ThermodynamicVerdict::assess(delta_m, delta_e, delta_eff);
        let flags = flags::check(scenario, delta_m, delta_e);

        info!(
            delta_coherence = delta_m,
            delta_energy = delta_e,
            verdict = verdict.label(),
            flags = flags.len(),
            "Analyzed replacement"
        );

        Ok(ReplacementReport {
            context: scenario.context.clone(),
            current_description: scenario.current.label().to_string(),
            replacement_description: scenario.replacement.label().to_string(),
            coherence: Delta {
                current: m_current,
                replacement: m_replacement,
                delta: delta_m,
            },
            energy: Delta {
                current: e_current,
                replacement: e_replacement,
                delta: delta_e,
            },
            efficiency: Delta {
                current: eff_current,
                replacement: eff_replacement,
                delta: delta_eff,
            },
            verdict,
            flags,
        })
    }
}

const RULE: &str = "======================================================================";

fn write_system(
    f: &mut std::fmt::Formatter<'_>,
    heading: &str,
    description: &str,
    coherence: f64,
    energy: f64,
    efficiency: Option<f64>,
) -> std::fmt::Result {
    writeln!(f, "{heading}:")?;
    writeln!(f, "  {description}")?;
    writeln!(f, "  Coherence: {coherence:.3}")?;
    writeln!(f, "  Energy: {energy:.1} {ENERGY_UNIT}")?;
    match efficiency {
        Some(eff) => writeln!(f, "  Efficiency: {eff:.4} coherence/kWh")?,
        None => writeln!(f, "  Efficiency: N/A")?,
    }
    writeln!(f)
}

impl std::fmt::Display for ReplacementReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{RULE}")?;
        writeln!(f, "REPLACEMENT ANALYSIS: {}", self.context)?;
        writeln!(f, "{RULE}")?;
        writeln!(f)?;
        write_system(
            f,
            "CURRENT SYSTEM",
            &self.current_description,
            self.coherence.current,
            self.energy.current,
            self.efficiency.current,
        )?;
        write_system(
            f,
            "REPLACEMENT SYSTEM",
            &self.replacement_description,
            self.coherence.replacement,
            self.energy.replacement,
            self.efficiency.replacement,
        )?;

        let dm = self.coherence.delta;
        let de = self.energy.delta;
        writeln!(f, "DELTA:")?;
        writeln!(
            f,
            "  ΔM(S) = {dm:+.3} ({})",
            if dm > 0.0 { "IMPROVEMENT" } else { "DEGRADATION" }
        )?;
        writeln!(
            f,
            "  ΔE = {de:+.1} {ENERGY_UNIT} ({} energy)",
            if de > 0.0 { "MORE" } else { "LESS" }
        )?;
        match self.efficiency.delta {
            Some(deff) => writeln!(f, "  Δeff = {deff:+.4}")?,
            None => writeln!(f, "  Δeff = N/A")?,
        }
        writeln!(f)?;
        writeln!(f, "THERMODYNAMIC VERDICT: {}", self.verdict)?;
        writeln!(f)?;

        if !self.flags.is_empty() {
            writeln!(f, "ETHICAL FLAGS:")?;
            for flag in &self.flags {
                writeln!(f, "  [{}] {}", flag.severity, flag.kind.code())?;
                writeln!(f, "    {}", flag.description)?;
                writeln!(f, "    Note: {}", flag.note)?;
                writeln!(f)?;
            }
        }

        writeln!(f, "{RULE}")?;
        writeln!(f, "This analysis provides THERMODYNAMIC INFORMATION ONLY.")?;
        writeln!(f, "Thermodynamic efficiency ≠ Moral justification.")?;
        write!(f, "{RULE}")
    }
}
