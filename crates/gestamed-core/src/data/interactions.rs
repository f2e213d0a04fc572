//! Static pairwise drug-interaction table.
//!
//! Matching against this table is substring-based in both directions and
//! in either drug order; the analyzer takes the first matching row in
//! table order.

use crate::models::{
    DrugInteraction, InteractionDocumentation, InteractionOnset, InteractionSeverity,
};

pub const DRUG_INTERACTIONS: &[DrugInteraction] = &[
    // Interacciones major y contraindicadas
    DrugInteraction {
        drug_a: "warfarina",
        drug_b: "aspirina",
        severity: InteractionSeverity::Major,
        mechanism: "Sinergismo anticoagulante y antiagregante",
        clinical_effect: "Riesgo significativamente aumentado de hemorragia",
        pregnancy_specific_risk: "Hemorragia materna y fetal. Ambos medicamentos tienen riesgos en embarazo.",
        management: "Evitar combinación. Cambiar warfarina por heparina.",
        alternatives: &["heparina", "enoxaparina"],
        monitoring_parameters: &["INR", "TP", "signos de sangrado"],
        onset: InteractionOnset::Rapid,
        documentation: InteractionDocumentation::Excellent,
    },
    DrugInteraction {
        drug_a: "enalapril",
        drug_b: "losartan",
        severity: InteractionSeverity::Contraindicated,
        mechanism: "Doble bloqueo del sistema renina-angiotensina",
        clinical_effect: "Hipotensión severa, insuficiencia renal",
        pregnancy_specific_risk: "Oligohidramnios severo, muerte fetal",
        management: "Contraindicado absoluto. Usar metildopa.",
        alternatives: &["metildopa", "nifedipino"],
        monitoring_parameters: &["presión arterial", "función renal", "líquido amniótico"],
        onset: InteractionOnset::Rapid,
        documentation: InteractionDocumentation::Excellent,
    },
    DrugInteraction {
        drug_a: "fluoxetina",
        drug_b: "sertralina",
        severity: InteractionSeverity::Major,
        mechanism: "Duplicación efecto serotoninérgico",
        clinical_effect: "Síndrome serotoninérgico",
        pregnancy_specific_risk: "Toxicidad materna y posibles efectos neonatales",
        management: "Evitar combinación. Usar un solo ISRS.",
        alternatives: &["monoterapia con sertralina"],
        monitoring_parameters: &["síntomas serotoninérgicos", "temperatura"],
        onset: InteractionOnset::Rapid,
        documentation: InteractionDocumentation::Excellent,
    },
    DrugInteraction {
        drug_a: "clonazepam",
        drug_b: "diazepam",
        severity: InteractionSeverity::Major,
        mechanism: "Efecto aditivo sobre depresión SNC",
        clinical_effect: "Sedación excesiva, depresión respiratoria",
        pregnancy_specific_risk: "Mayor riesgo de malformaciones y síndrome de abstinencia neonatal",
        management: "Evitar combinación. Reducir gradualmente ambos.",
        alternatives: &["psicoterapia", "técnicas de relajación"],
        monitoring_parameters: &["nivel de conciencia", "función respiratoria"],
        onset: InteractionOnset::Rapid,
        documentation: InteractionDocumentation::Excellent,
    },
    // Interacciones moderadas
    DrugInteraction {
        drug_a: "metformina",
        drug_b: "prednisona",
        severity: InteractionSeverity::Moderate,
        mechanism: "Antagonismo en control glucémico",
        clinical_effect: "Hiperglucemia, pérdida de control diabético",
        pregnancy_specific_risk: "Diabetes gestacional descontrolada",
        management: "Monitoreo frecuente de glucosa. Ajustar dosis.",
        alternatives: &["insulina si es necesario"],
        monitoring_parameters: &["glucosa capilar", "HbA1c"],
        onset: InteractionOnset::Delayed,
        documentation: InteractionDocumentation::Good,
    },
    DrugInteraction {
        drug_a: "levotiroxina",
        drug_b: "omeprazol",
        severity: InteractionSeverity::Moderate,
        mechanism: "Reducción absorción de levotiroxina",
        clinical_effect: "Hipotiroidismo, pérdida de control tiroideo",
        pregnancy_specific_risk: "Hipotiroidismo maternal afecta desarrollo fetal",
        management: "Separar administración por 4 horas.",
        alternatives: &["esomeprazol con separación temporal"],
        monitoring_parameters: &["TSH", "T4 libre"],
        onset: InteractionOnset::Delayed,
        documentation: InteractionDocumentation::Good,
    },
    DrugInteraction {
        drug_a: "azitromicina",
        drug_b: "ondansetron",
        severity: InteractionSeverity::Moderate,
        mechanism: "Prolongación intervalo QT",
        clinical_effect: "Arritmias cardíacas",
        pregnancy_specific_risk: "Arritmias maternas, compromiso fetal",
        management: "Monitoreo EKG. Considerar alternativas.",
        alternatives: &["amoxicilina", "metoclopramida"],
        monitoring_parameters: &["EKG", "intervalo QT"],
        onset: InteractionOnset::Rapid,
        documentation: InteractionDocumentation::Good,
    },
    DrugInteraction {
        drug_a: "atenolol",
        drug_b: "insulina",
        severity: InteractionSeverity::Moderate,
        mechanism: "Enmascaramiento síntomas hipoglucemia",
        clinical_effect: "Hipoglucemia no reconocida",
        pregnancy_specific_risk: "Hipoglucemia materna severa",
        management: "Monitoreo frecuente de glucosa.",
        alternatives: &["metildopa", "monitoreo continuo glucosa"],
        monitoring_parameters: &["glucosa capilar frecuente"],
        onset: InteractionOnset::Variable,
        documentation: InteractionDocumentation::Good,
    },
    // Interacciones menores pero relevantes en embarazo
    DrugInteraction {
        drug_a: "paracetamol",
        drug_b: "warfarina",
        severity: InteractionSeverity::Moderate,
        mechanism: "Potenciación efecto anticoagulante",
        clinical_effect: "Aumento leve del riesgo de sangrado",
        pregnancy_specific_risk: "Warfarina ya contraindicada en embarazo",
        management: "Cambiar warfarina por heparina.",
        alternatives: &["heparina", "acetaminofén seguro con heparina"],
        monitoring_parameters: &["INR", "signos de sangrado"],
        onset: InteractionOnset::Delayed,
        documentation: InteractionDocumentation::Good,
    },
    DrugInteraction {
        drug_a: "amoxicilina",
        drug_b: "metformina",
        severity: InteractionSeverity::Minor,
        mechanism: "Alteración flora intestinal afecta absorción",
        clinical_effect: "Posible alteración leve en control glucémico",
        pregnancy_specific_risk: "Mínimo, ambos medicamentos seguros",
        management: "Monitoreo rutinario de glucosa.",
        alternatives: &["continuar ambos con monitoreo"],
        monitoring_parameters: &["glucosa capilar"],
        onset: InteractionOnset::Delayed,
        documentation: InteractionDocumentation::Fair,
    },
    DrugInteraction {
        drug_a: "cefalexina",
        drug_b: "heparina",
        severity: InteractionSeverity::Minor,
        mechanism: "Posible potenciación anticoagulante leve",
        clinical_effect: "Riesgo mínimamente aumentado de sangrado",
        pregnancy_specific_risk: "Ambos seguros en embarazo",
        management: "Monitoreo estándar.",
        alternatives: &["continuar con precaución"],
        monitoring_parameters: &["PTT", "signos de sangrado"],
        onset: InteractionOnset::Delayed,
        documentation: InteractionDocumentation::Fair,
    },
    DrugInteraction {
        drug_a: "ibuprofeno",
        drug_b: "enalapril",
        severity: InteractionSeverity::Major,
        mechanism: "Reducción efecto antihipertensivo y nefrotoxicidad",
        clinical_effect: "Hipertensión, insuficiencia renal",
        pregnancy_specific_risk: "Ambos medicamentos problemáticos en embarazo",
        management: "Evitar ambos. Usar paracetamol y metildopa.",
        alternatives: &["paracetamol", "metildopa"],
        monitoring_parameters: &["presión arterial", "función renal"],
        onset: InteractionOnset::Rapid,
        documentation: InteractionDocumentation::Excellent,
    },
    DrugInteraction {
        drug_a: "fluconazol",
        drug_b: "warfarina",
        severity: InteractionSeverity::Major,
        mechanism: "Inhibición CYP2C9, aumento concentración warfarina",
        clinical_effect: "Hemorragia severa",
        pregnancy_specific_risk: "Ambos contraindicados o problemáticos",
        management: "Evitar combinación. Usar nistatina y heparina.",
        alternatives: &["nistatina", "heparina"],
        monitoring_parameters: &["INR", "signos de sangrado"],
        onset: InteractionOnset::Rapid,
        documentation: InteractionDocumentation::Excellent,
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_size() {
        assert_eq!(DRUG_INTERACTIONS.len(), 13);
    }

    #[test]
    fn test_pair_names_are_lowercase() {
        for interaction in DRUG_INTERACTIONS {
            assert_eq!(interaction.drug_a, interaction.drug_a.to_lowercase());
            assert_eq!(interaction.drug_b, interaction.drug_b.to_lowercase());
        }
    }
}
