//! Pairwise interaction analysis over a medication list.
//!
//! Pair matching is substring containment in both directions and either
//! drug order, first table row wins. Input names are NOT deduplicated or
//! canonicalized before pairing, so entering the same drug under two names
//! counts its interactions twice. Both behaviors are part of the scoring
//! contract; see DESIGN.md.

use crate::data::interactions::DRUG_INTERACTIONS;
use crate::models::{DrugInteraction, InteractionAnalysis, InteractionSeverity, SeverityBreakdown};

/// Recommendation emitted when fewer than two medications are given.
const NEED_MORE_MEDICATIONS: &str = "Agregue más medicamentos para analizar interacciones";

/// Analyze every unordered pair in the medication list.
pub fn analyze(medications: &[String]) -> InteractionAnalysis {
    if medications.len() < 2 {
        return InteractionAnalysis {
            total_interactions: 0,
            severity_breakdown: SeverityBreakdown::default(),
            high_risk_combinations: Vec::new(),
            pregnancy_specific_warnings: Vec::new(),
            overall_risk_score: 0,
            recommendations: vec![NEED_MORE_MEDICATIONS.to_string()],
        };
    }

    let lowered: Vec<String> = medications.iter().map(|m| m.to_lowercase()).collect();

    let mut found: Vec<&'static DrugInteraction> = Vec::new();
    for i in 0..lowered.len() {
        for j in (i + 1)..lowered.len() {
            if let Some(interaction) = find_pair(&lowered[i], &lowered[j]) {
                found.push(interaction);
            }
        }
    }

    let mut severity_breakdown = SeverityBreakdown::default();
    for interaction in &found {
        severity_breakdown.record(interaction.severity);
    }

    let overall_risk_score = found
        .iter()
        .map(|interaction| interaction.severity.weight())
        .sum();

    let high_risk_combinations: Vec<DrugInteraction> = found
        .iter()
        .filter(|interaction| {
            matches!(
                interaction.severity,
                InteractionSeverity::Major | InteractionSeverity::Contraindicated
            )
        })
        .map(|interaction| (*interaction).clone())
        .collect();

    let pregnancy_specific_warnings = found
        .iter()
        .map(|interaction| interaction.pregnancy_specific_risk.to_string())
        .collect();

    // The rules are independent; every applicable message is emitted.
    let mut recommendations = Vec::new();
    if severity_breakdown.contraindicated > 0 {
        recommendations.push(
            "🚨 URGENTE: Tiene combinaciones contraindicadas. Contacte inmediatamente a su médico."
                .to_string(),
        );
    }
    if severity_breakdown.major > 0 {
        recommendations.push("⚠️ ALTO RIESGO: Requiere supervisión médica estrecha.".to_string());
    }
    if severity_breakdown.moderate > 0 {
        recommendations
            .push("📋 MONITOREO: Necesario seguimiento de parámetros específicos.".to_string());
    }
    if found.is_empty() {
        recommendations.push(
            "✅ No se detectaron interacciones conocidas entre estos medicamentos.".to_string(),
        );
    }

    InteractionAnalysis {
        total_interactions: found.len(),
        severity_breakdown,
        high_risk_combinations,
        pregnancy_specific_warnings,
        overall_risk_score,
        recommendations,
    }
}

/// First table row matching the pair, substring containment in both
/// directions and either drug order.
fn find_pair(med_a: &str, med_b: &str) -> Option<&'static DrugInteraction> {
    DRUG_INTERACTIONS.iter().find(|interaction| {
        let drug_a = interaction.drug_a;
        let drug_b = interaction.drug_b;
        (drug_a.contains(med_a) && drug_b.contains(med_b))
            || (drug_a.contains(med_b) && drug_b.contains(med_a))
            || (med_a.contains(drug_a) && med_b.contains(drug_b))
            || (med_b.contains(drug_a) && med_a.contains(drug_b))
    })
}

/// All table rows mentioning the given medication on either side.
pub fn interactions_for(medication: &str) -> Vec<&'static DrugInteraction> {
    let med = medication.to_lowercase();
    DRUG_INTERACTIONS
        .iter()
        .filter(|interaction| {
            interaction.drug_a.contains(&med)
                || interaction.drug_b.contains(&med)
                || med.contains(interaction.drug_a)
                || med.contains(interaction.drug_b)
        })
        .collect()
}

/// Table rows whose mechanism text contains the given term.
pub fn by_mechanism(mechanism: &str) -> Vec<&'static DrugInteraction> {
    let mechanism = mechanism.to_lowercase();
    DRUG_INTERACTIONS
        .iter()
        .filter(|interaction| interaction.mechanism.to_lowercase().contains(&mechanism))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn meds(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn test_empty_and_single_input() {
        for input in [vec![], meds(&["paracetamol"])] {
            let analysis = analyze(&input);
            assert_eq!(analysis.total_interactions, 0);
            assert_eq!(analysis.overall_risk_score, 0);
            assert_eq!(analysis.recommendations, vec![NEED_MORE_MEDICATIONS]);
        }
    }

    #[test]
    fn test_warfarin_aspirin_major() {
        let analysis = analyze(&meds(&["warfarina", "aspirina"]));
        assert_eq!(analysis.total_interactions, 1);
        assert_eq!(analysis.severity_breakdown.major, 1);
        assert_eq!(analysis.severity_breakdown.contraindicated, 0);
        assert_eq!(analysis.severity_breakdown.moderate, 0);
        assert_eq!(analysis.severity_breakdown.minor, 0);
        assert_eq!(analysis.overall_risk_score, 7);
        assert_eq!(analysis.high_risk_combinations.len(), 1);
        assert!(analysis.recommendations[0].contains("ALTO RIESGO"));
    }

    #[test]
    fn test_enalapril_losartan_contraindicated() {
        let analysis = analyze(&meds(&["enalapril", "losartan"]));
        assert_eq!(analysis.total_interactions, 1);
        assert_eq!(analysis.severity_breakdown.contraindicated, 1);
        assert_eq!(analysis.overall_risk_score, 10);
        assert!(analysis.recommendations[0].contains("URGENTE"));
    }

    #[test]
    fn test_input_order_invariance() {
        let forward = analyze(&meds(&["warfarina", "aspirina", "fluconazol"]));
        let reversed = analyze(&meds(&["fluconazol", "aspirina", "warfarina"]));
        assert_eq!(forward.total_interactions, reversed.total_interactions);
        assert_eq!(forward.severity_breakdown, reversed.severity_breakdown);
        assert_eq!(forward.overall_risk_score, reversed.overall_risk_score);
    }

    #[test]
    fn test_score_additivity() {
        // warfarina+aspirina (major 7) and fluconazol+warfarina (major 7)
        let analysis = analyze(&meds(&["warfarina", "aspirina", "fluconazol"]));
        assert_eq!(analysis.overall_risk_score, 14);

        // Adding a drug with no known interactions leaves the score alone
        let with_noise = analyze(&meds(&["warfarina", "aspirina", "fluconazol", "loratadina"]));
        assert_eq!(with_noise.overall_risk_score, 14);
    }

    #[test]
    fn test_no_known_interactions() {
        let analysis = analyze(&meds(&["loratadina", "hierro"]));
        assert_eq!(analysis.total_interactions, 0);
        assert_eq!(analysis.recommendations.len(), 1);
        assert!(analysis.recommendations[0].contains("No se detectaron"));
    }

    #[test]
    fn test_duplicate_input_counts_twice() {
        // No canonical dedup: the same drug under two names doubles the hit
        let analysis = analyze(&meds(&["warfarina", "coumadin warfarina", "aspirina"]));
        assert_eq!(analysis.total_interactions, 2);
        assert_eq!(analysis.overall_risk_score, 14);
    }

    #[test]
    fn test_mixed_severities_emit_all_rules() {
        // enalapril+losartan contraindicated, ibuprofeno+enalapril major,
        // levotiroxina+omeprazol moderate
        let analysis = analyze(&meds(&[
            "enalapril",
            "losartan",
            "ibuprofeno",
            "levotiroxina",
            "omeprazol",
        ]));
        assert!(analysis.recommendations.iter().any(|r| r.contains("URGENTE")));
        assert!(analysis
            .recommendations
            .iter()
            .any(|r| r.contains("ALTO RIESGO")));
        assert!(analysis
            .recommendations
            .iter()
            .any(|r| r.contains("MONITOREO")));
    }

    #[test]
    fn test_interactions_for() {
        let hits = interactions_for("warfarina");
        assert_eq!(hits.len(), 3);
    }

    #[test]
    fn test_by_mechanism() {
        let hits = by_mechanism("anticoagulante");
        assert!(!hits.is_empty());
    }
}
