//! Pairwise drug-interaction types.

use serde::{Deserialize, Serialize};

/// Interaction severity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionSeverity {
    Minor,
    Moderate,
    Major,
    Contraindicated,
}

impl InteractionSeverity {
    /// Fixed weight used only in aggregate risk scoring.
    pub fn weight(&self) -> u32 {
        match self {
            InteractionSeverity::Contraindicated => 10,
            InteractionSeverity::Major => 7,
            InteractionSeverity::Moderate => 4,
            InteractionSeverity::Minor => 1,
        }
    }
}

/// How quickly the interaction manifests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionOnset {
    Rapid,
    Delayed,
    Variable,
}

/// Quality of the supporting evidence. Display only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionDocumentation {
    Excellent,
    Good,
    Fair,
    Poor,
}

/// A known pairwise interaction from the static interaction table.
///
/// `drug_a`/`drug_b` are matched by substring containment in either
/// direction, not by canonical key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrugInteraction {
    pub drug_a: &'static str,
    pub drug_b: &'static str,
    pub severity: InteractionSeverity,
    pub mechanism: &'static str,
    pub clinical_effect: &'static str,
    pub pregnancy_specific_risk: &'static str,
    pub management: &'static str,
    pub alternatives: &'static [&'static str],
    pub monitoring_parameters: &'static [&'static str],
    pub onset: InteractionOnset,
    pub documentation: InteractionDocumentation,
}

/// Matched-interaction counts per severity tier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SeverityBreakdown {
    pub contraindicated: usize,
    pub major: usize,
    pub moderate: usize,
    pub minor: usize,
}

impl SeverityBreakdown {
    /// Count for a single tier.
    pub fn count(&self, severity: InteractionSeverity) -> usize {
        match severity {
            InteractionSeverity::Contraindicated => self.contraindicated,
            InteractionSeverity::Major => self.major,
            InteractionSeverity::Moderate => self.moderate,
            InteractionSeverity::Minor => self.minor,
        }
    }

    /// Increment the count for a tier.
    pub fn record(&mut self, severity: InteractionSeverity) {
        match severity {
            InteractionSeverity::Contraindicated => self.contraindicated += 1,
            InteractionSeverity::Major => self.major += 1,
            InteractionSeverity::Moderate => self.moderate += 1,
            InteractionSeverity::Minor => self.minor += 1,
        }
    }
}

/// Aggregate result of analyzing a medication list.
///
/// Built fresh per request and discarded after being returned.
#[derive(Debug, Clone, Serialize)]
pub struct InteractionAnalysis {
    pub total_interactions: usize,
    pub severity_breakdown: SeverityBreakdown,
    pub high_risk_combinations: Vec<DrugInteraction>,
    pub pregnancy_specific_warnings: Vec<String>,
    pub overall_risk_score: u32,
    pub recommendations: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_weights() {
        assert_eq!(InteractionSeverity::Contraindicated.weight(), 10);
        assert_eq!(InteractionSeverity::Major.weight(), 7);
        assert_eq!(InteractionSeverity::Moderate.weight(), 4);
        assert_eq!(InteractionSeverity::Minor.weight(), 1);
    }

    #[test]
    fn test_severity_serialization() {
        assert_eq!(
            serde_json::to_value(InteractionSeverity::Contraindicated).unwrap(),
            "contraindicated"
        );
        assert_eq!(
            serde_json::to_value(InteractionOnset::Rapid).unwrap(),
            "rapid"
        );
        assert_eq!(
            serde_json::to_value(InteractionDocumentation::Excellent).unwrap(),
            "excellent"
        );
    }
}
