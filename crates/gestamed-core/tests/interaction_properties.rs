//! Property tests for the interaction analyzer.

use gestamed_core::interactions::analyze;
use proptest::prelude::*;

/// Drugs that appear in the interaction table, plus one that does not.
const POOL: &[&str] = &[
    "warfarina",
    "aspirina",
    "enalapril",
    "losartan",
    "metformina",
    "prednisona",
    "levotiroxina",
    "omeprazol",
    "fluconazol",
    "loratadina",
];

fn medication_lists() -> impl Strategy<Value = Vec<String>> {
    proptest::sample::subsequence(POOL.to_vec(), 0..POOL.len())
        .prop_map(|names| names.into_iter().map(String::from).collect())
}

proptest! {
    #[test]
    fn aggregates_are_input_order_invariant(meds in medication_lists()) {
        let forward = analyze(&meds);

        let mut reversed = meds.clone();
        reversed.reverse();
        let backward = analyze(&reversed);

        prop_assert_eq!(forward.total_interactions, backward.total_interactions);
        prop_assert_eq!(forward.severity_breakdown, backward.severity_breakdown);
        prop_assert_eq!(forward.overall_risk_score, backward.overall_risk_score);
    }

    #[test]
    fn score_equals_weighted_breakdown(meds in medication_lists()) {
        let analysis = analyze(&meds);
        let expected = 10 * analysis.severity_breakdown.contraindicated
            + 7 * analysis.severity_breakdown.major
            + 4 * analysis.severity_breakdown.moderate
            + analysis.severity_breakdown.minor;
        prop_assert_eq!(analysis.overall_risk_score, expected as u32);
    }

    #[test]
    fn adding_an_unknown_drug_never_changes_the_score(meds in medication_lists()) {
        let base = analyze(&meds);

        let mut extended = meds.clone();
        extended.push("droga inexistente zzz".to_string());
        let with_unknown = analyze(&extended);

        prop_assert_eq!(base.overall_risk_score, with_unknown.overall_risk_score);
    }

    #[test]
    fn high_risk_list_contains_only_major_and_contraindicated(meds in medication_lists()) {
        let analysis = analyze(&meds);
        let high_risk = analysis.severity_breakdown.major
            + analysis.severity_breakdown.contraindicated;
        prop_assert_eq!(analysis.high_risk_combinations.len(), high_risk);
    }
}
