//! Legacy medications table.
//!
//! Oldest of the three tables. Keys are Spanish generic names; matching on
//! English/brand names goes through `english_names`. Some entries carry
//! per-trimester guidance notes the other tables lack.

use crate::models::{DrugRecord, RecordSource};

/// Per-trimester guidance, present on a minority of entries.
#[derive(Debug, Clone, Copy)]
pub struct TrimesterNotes {
    pub first: &'static str,
    pub second: &'static str,
    pub third: &'static str,
}

/// One entry of the legacy table.
#[derive(Debug, Clone, Copy)]
pub struct MedicationData {
    pub name: &'static str,
    pub english_names: &'static [&'static str],
    pub category: &'static str,
    pub description: &'static str,
    pub risks: &'static str,
    pub recommendations: &'static str,
    pub common_uses: &'static [&'static str],
    pub trimester_specific: Option<TrimesterNotes>,
}

impl MedicationData {
    /// Normalize into the pipeline's canonical record shape.
    pub fn to_record(&self) -> DrugRecord {
        let recommendations = match &self.trimester_specific {
            Some(notes) => format!(
                "{} Primer trimestre: {} Segundo trimestre: {} Tercer trimestre: {}",
                self.recommendations, notes.first, notes.second, notes.third
            ),
            None => self.recommendations.to_string(),
        };
        DrugRecord {
            name: self.name.to_string(),
            category: self.category.to_string(),
            description: self.description.to_string(),
            risks: self.risks.to_string(),
            recommendations,
            alternatives: Vec::new(),
            source: RecordSource::Legacy,
        }
    }
}

/// Exact-key lookup.
pub fn lookup(key: &str) -> Option<&'static MedicationData> {
    LEGACY_MEDICATIONS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, entry)| entry)
}

/// Table-specific search: exact Spanish key, then bidirectional substring
/// over the English/brand names. No substring matching on the key itself.
pub fn find(term: &str) -> Option<&'static MedicationData> {
    let term = term.to_lowercase();
    let term = term.trim();

    if let Some(entry) = lookup(term) {
        return Some(entry);
    }

    for (_, entry) in LEGACY_MEDICATIONS {
        if entry.english_names.iter().any(|name| {
            let name = name.to_lowercase();
            name.contains(term) || term.contains(name.as_str())
        }) {
            return Some(entry);
        }
    }

    None
}

/// All entries in table order.
pub fn all() -> impl Iterator<Item = &'static MedicationData> {
    LEGACY_MEDICATIONS.iter().map(|(_, entry)| entry)
}

/// Entries whose category letter equals the given label exactly.
pub fn by_category(label: &str) -> Vec<&'static MedicationData> {
    all().filter(|entry| entry.category == label).collect()
}

/// Canonical keys in table order.
pub fn keys() -> impl Iterator<Item = &'static str> {
    LEGACY_MEDICATIONS.iter().map(|(k, _)| *k)
}

pub const LEGACY_MEDICATIONS: &[(&str, MedicationData)] = &[
    // Antibióticos
    (
        "azitromicina",
        MedicationData {
            name: "Azitromicina",
            english_names: &["azithromycin", "Zithromax", "Z-Pak"],
            category: "B",
            description: "Antibiótico macrólido seguro durante el embarazo",
            risks: "Riesgo bajo. Puede causar náuseas o malestar estomacal.",
            recommendations: "Seguro para uso durante el embarazo bajo supervisión médica.",
            common_uses: &["Infecciones respiratorias", "Infecciones de piel", "Clamidia"],
            trimester_specific: Some(TrimesterNotes {
                first: "Seguro si es necesario",
                second: "Uso preferido",
                third: "Seguro, monitorear efectos gastrointestinales",
            }),
        },
    ),
    (
        "amoxicilina",
        MedicationData {
            name: "Amoxicilina",
            english_names: &["amoxicillin", "Amoxil", "Trimox"],
            category: "B",
            description: "Antibiótico penicilina ampliamente usado y seguro",
            risks: "Riesgo muy bajo. Posibles reacciones alérgicas en personas sensibles.",
            recommendations: "Antibiótico de primera línea durante el embarazo.",
            common_uses: &[
                "Infecciones del tracto urinario",
                "Infecciones respiratorias",
                "Infecciones dentales",
            ],
            trimester_specific: None,
        },
    ),
    (
        "cefalexina",
        MedicationData {
            name: "Cefalexina",
            english_names: &["cephalexin", "Keflex"],
            category: "B",
            description: "Antibiótico cefalosporina seguro para uso en embarazo",
            risks: "Riesgo bajo. Puede causar diarrea o candidiasis vaginal.",
            recommendations: "Alternativa segura a penicilinas.",
            common_uses: &["Infecciones de piel", "Infecciones del tracto urinario"],
            trimester_specific: None,
        },
    ),
    (
        "ciprofloxacina",
        MedicationData {
            name: "Ciprofloxacina",
            english_names: &["ciprofloxacin", "Cipro"],
            category: "C",
            description: "Antibiótico fluoroquinolona con uso limitado en embarazo",
            risks: "Riesgo moderado. Posibles efectos en el desarrollo del cartílago fetal.",
            recommendations: "Usar solo si otros antibióticos no son efectivos.",
            common_uses: &[
                "Infecciones del tracto urinario",
                "Infecciones gastrointestinales",
            ],
            trimester_specific: None,
        },
    ),
    // Analgésicos
    (
        "paracetamol",
        MedicationData {
            name: "Paracetamol (Acetaminofén)",
            english_names: &["acetaminophen", "Tylenol"],
            category: "B",
            description: "Analgésico y antipirético seguro durante todo el embarazo",
            risks: "Riesgo muy bajo cuando se usa según indicaciones.",
            recommendations: "Analgésico de primera elección durante el embarazo.",
            common_uses: &["Dolor", "Fiebre", "Dolor de cabeza"],
            trimester_specific: Some(TrimesterNotes {
                first: "Seguro en dosis normales",
                second: "Seguro en dosis normales",
                third: "Seguro, evitar uso prolongado en dosis altas",
            }),
        },
    ),
    (
        "ibuprofeno",
        MedicationData {
            name: "Ibuprofeno",
            english_names: &["ibuprofen", "Advil", "Motrin"],
            category: "C",
            description: "AINE con restricciones en el tercer trimestre",
            risks: "Riesgo de cierre prematuro del ductus arteriosus en tercer trimestre.",
            recommendations: "Evitar después de la semana 30. Usar paracetamol como alternativa.",
            common_uses: &["Dolor", "Inflamación", "Fiebre"],
            trimester_specific: Some(TrimesterNotes {
                first: "Usar con precaución",
                second: "Usar con precaución",
                third: "Evitar - riesgo cardiovascular fetal",
            }),
        },
    ),
    (
        "aspirina",
        MedicationData {
            name: "Aspirina (Ácido acetilsalicílico)",
            english_names: &["aspirin", "acetylsalicylic acid"],
            category: "D",
            description: "AINE con riesgos significativos en embarazo",
            risks: "Riesgo de sangrado y complicaciones cardiovasculares fetales.",
            recommendations: "Solo usar en dosis bajas para prevención de preeclampsia bajo supervisión.",
            common_uses: &["Prevención cardiovascular", "Dolor", "Fiebre"],
            trimester_specific: None,
        },
    ),
    // Benzodiacepinas
    (
        "clonazepam",
        MedicationData {
            name: "Clonazepam",
            english_names: &["clonazepam", "Klonopin", "Rivotril"],
            category: "D",
            description: "Benzodiacepina con riesgo de malformaciones y síndrome de abstinencia",
            risks: "Riesgo de labio leporino, síndrome de abstinencia neonatal.",
            recommendations: "Reducir gradualmente o cambiar a alternativas más seguras.",
            common_uses: &["Ansiedad", "Convulsiones", "Trastorno de pánico"],
            trimester_specific: Some(TrimesterNotes {
                first: "Alto riesgo de malformaciones",
                second: "Riesgo moderado",
                third: "Riesgo de síndrome de abstinencia neonatal",
            }),
        },
    ),
    (
        "diazepam",
        MedicationData {
            name: "Diazepam",
            english_names: &["diazepam", "Valium"],
            category: "D",
            description: "Benzodiacepina con riesgos conocidos durante el embarazo",
            risks: "Malformaciones congénitas, síndrome de abstinencia neonatal.",
            recommendations: "Evitar o reducir gradualmente bajo supervisión médica.",
            common_uses: &["Ansiedad", "Espasmos musculares", "Convulsiones"],
            trimester_specific: None,
        },
    ),
    // Antidepresivos
    (
        "fluoxetina",
        MedicationData {
            name: "Fluoxetina",
            english_names: &["fluoxetine", "Prozac"],
            category: "C",
            description: "ISRS con uso cauteloso durante el embarazo",
            risks: "Posible hipertensión pulmonar persistente en recién nacidos.",
            recommendations: "Evaluar beneficio-riesgo. Monitoreo estrecho.",
            common_uses: &["Depresión", "Ansiedad", "Trastorno obsesivo-compulsivo"],
            trimester_specific: None,
        },
    ),
    (
        "sertralina",
        MedicationData {
            name: "Sertralina",
            english_names: &["sertraline", "Zoloft"],
            category: "C",
            description: "ISRS preferido durante el embarazo cuando es necesario",
            risks: "Riesgo bajo de complicaciones neonatales.",
            recommendations: "ISRS de elección durante el embarazo si es necesario.",
            common_uses: &["Depresión", "Ansiedad", "Trastorno de pánico"],
            trimester_specific: None,
        },
    ),
    // Antihipertensivos
    (
        "atenolol",
        MedicationData {
            name: "Atenolol",
            english_names: &["atenolol", "Tenormin"],
            category: "D",
            description: "Beta-bloqueador con riesgos fetales",
            risks: "Retardo del crecimiento intrauterino, bradicardia fetal.",
            recommendations: "Cambiar a alternativas más seguras como metildopa.",
            common_uses: &["Hipertensión", "Arritmias", "Migraña"],
            trimester_specific: None,
        },
    ),
    (
        "enalapril",
        MedicationData {
            name: "Enalapril",
            english_names: &["enalapril", "Vasotec"],
            category: "D",
            description: "IECA contraindicado durante el embarazo",
            risks: "Oligohidramnios, insuficiencia renal fetal, muerte fetal.",
            recommendations: "Discontinuar inmediatamente. Cambiar a metildopa.",
            common_uses: &["Hipertensión", "Insuficiencia cardíaca"],
            trimester_specific: None,
        },
    ),
    (
        "metildopa",
        MedicationData {
            name: "Metildopa",
            english_names: &["methyldopa", "Aldomet"],
            category: "B",
            description: "Antihipertensivo de primera línea en embarazo",
            risks: "Riesgo bajo. Posible somnolencia o depresión.",
            recommendations: "Antihipertensivo preferido durante el embarazo.",
            common_uses: &["Hipertensión en embarazo"],
            trimester_specific: None,
        },
    ),
    // Anticoagulantes
    (
        "warfarina",
        MedicationData {
            name: "Warfarina",
            english_names: &["warfarin", "Coumadin"],
            category: "X",
            description: "Anticoagulante contraindicado en embarazo",
            risks: "Embriopatía por warfarina, hemorragias fetales.",
            recommendations: "Cambiar a heparina inmediatamente.",
            common_uses: &["Anticoagulación", "Fibrilación auricular"],
            trimester_specific: None,
        },
    ),
    (
        "heparina",
        MedicationData {
            name: "Heparina",
            english_names: &["heparin"],
            category: "B",
            description: "Anticoagulante seguro durante el embarazo",
            risks: "Riesgo bajo. No cruza la placenta.",
            recommendations: "Anticoagulante de elección durante el embarazo.",
            common_uses: &["Anticoagulación", "Tromboembolismo"],
            trimester_specific: None,
        },
    ),
    // Estatinas
    (
        "atorvastatina",
        MedicationData {
            name: "Atorvastatina",
            english_names: &["atorvastatin", "Lipitor"],
            category: "X",
            description: "Estatina contraindicada durante el embarazo",
            risks: "Defectos congénitos, malformaciones del SNC.",
            recommendations: "Discontinuar inmediatamente al confirmar embarazo.",
            common_uses: &["Hipercolesterolemia", "Prevención cardiovascular"],
            trimester_specific: None,
        },
    ),
    (
        "simvastatina",
        MedicationData {
            name: "Simvastatina",
            english_names: &["simvastatin", "Zocor"],
            category: "X",
            description: "Estatina contraindicada durante el embarazo",
            risks: "Malformaciones congénitas, defectos del tubo neural.",
            recommendations: "Suspender antes de la concepción.",
            common_uses: &["Hipercolesterolemia"],
            trimester_specific: None,
        },
    ),
    // Corticosteroides
    (
        "prednisona",
        MedicationData {
            name: "Prednisona",
            english_names: &["prednisone"],
            category: "C",
            description: "Corticosteroide con uso cauteloso en embarazo",
            risks: "Posible paladar hendido en primer trimestre, diabetes gestacional.",
            recommendations: "Usar la dosis mínima efectiva por el menor tiempo posible.",
            common_uses: &["Asma", "Artritis", "Enfermedades autoinmunes"],
            trimester_specific: None,
        },
    ),
    // Hormonas tiroideas
    (
        "levotiroxina",
        MedicationData {
            name: "Levotiroxina",
            english_names: &["levothyroxine", "Synthroid", "Eutirox"],
            category: "A",
            description: "Hormona tiroidea esencial durante el embarazo",
            risks: "Sin riesgos conocidos. Esencial para desarrollo fetal.",
            recommendations: "Continuar y ajustar dosis según necesidad.",
            common_uses: &["Hipotiroidismo"],
            trimester_specific: Some(TrimesterNotes {
                first: "Esencial - aumentar dosis si es necesario",
                second: "Monitorear TSH regularmente",
                third: "Mantener niveles óptimos",
            }),
        },
    ),
    // Antidiabéticos
    (
        "metformina",
        MedicationData {
            name: "Metformina",
            english_names: &["metformin", "Glucophage"],
            category: "B",
            description: "Antidiabético seguro durante el embarazo",
            risks: "Riesgo bajo. Puede reducir absorción de vitamina B12.",
            recommendations: "Puede continuarse durante el embarazo.",
            common_uses: &["Diabetes tipo 2", "Síndrome de ovario poliquístico"],
            trimester_specific: None,
        },
    ),
    (
        "insulina",
        MedicationData {
            name: "Insulina",
            english_names: &["insulin"],
            category: "B",
            description: "Tratamiento de primera línea para diabetes en embarazo",
            risks: "Sin riesgos fetales. No cruza la placenta.",
            recommendations: "Tratamiento preferido para diabetes gestacional.",
            common_uses: &["Diabetes tipo 1", "Diabetes gestacional"],
            trimester_specific: None,
        },
    ),
    // Inhibidores de bomba de protones
    (
        "esomeprazol",
        MedicationData {
            name: "Esomeprazol",
            english_names: &["esomeprazole", "Nexium"],
            category: "B",
            description: "Inhibidor de bomba de protones seguro durante el embarazo",
            risks: "Riesgo bajo. Puede causar dolor de cabeza o náuseas.",
            recommendations: "Seguro para uso durante el embarazo bajo supervisión médica.",
            common_uses: &[
                "Reflujo gastroesofágico",
                "Úlceras pépticas",
                "Síndrome de Zollinger-Ellison",
            ],
            trimester_specific: None,
        },
    ),
    (
        "lansoprazol",
        MedicationData {
            name: "Lansoprazol",
            english_names: &["lansoprazole", "Prevacid"],
            category: "B",
            description: "Inhibidor de bomba de protones con perfil de seguridad favorable",
            risks: "Riesgo bajo durante el embarazo.",
            recommendations: "Alternativa segura para el tratamiento de acidez.",
            common_uses: &["Reflujo gastroesofágico", "Úlceras duodenales"],
            trimester_specific: None,
        },
    ),
    (
        "pantoprazol",
        MedicationData {
            name: "Pantoprazol",
            english_names: &["pantoprazole", "Protonix"],
            category: "B",
            description: "Inhibidor de bomba de protones con uso seguro en embarazo",
            risks: "Perfil de seguridad favorable durante el embarazo.",
            recommendations: "Puede usarse cuando sea necesario.",
            common_uses: &["Esofagitis erosiva", "Úlceras gástricas"],
            trimester_specific: None,
        },
    ),
    // Antihistamínicos
    (
        "loratadina",
        MedicationData {
            name: "Loratadina",
            english_names: &["loratadine", "Claritin"],
            category: "B",
            description: "Antihistamínico no sedante seguro durante el embarazo",
            risks: "Riesgo bajo. Antihistamínico preferido.",
            recommendations: "Antihistamínico de primera elección durante el embarazo.",
            common_uses: &["Alergias", "Rinitis alérgica", "Urticaria"],
            trimester_specific: None,
        },
    ),
    (
        "cetirizina",
        MedicationData {
            name: "Cetirizina",
            english_names: &["cetirizine", "Zyrtec"],
            category: "B",
            description: "Antihistamínico con perfil de seguridad establecido",
            risks: "Riesgo bajo durante el embarazo.",
            recommendations: "Seguro para uso en embarazo.",
            common_uses: &["Alergias estacionales", "Dermatitis atópica"],
            trimester_specific: None,
        },
    ),
    (
        "difenhidramina",
        MedicationData {
            name: "Difenhidramina",
            english_names: &["diphenhydramine", "Benadryl"],
            category: "B",
            description: "Antihistamínico clásico con uso seguro en embarazo",
            risks: "Puede causar somnolencia. Seguro en dosis apropiadas.",
            recommendations: "Seguro para uso ocasional.",
            common_uses: &["Alergias", "Insomnio ocasional", "Náuseas"],
            trimester_specific: None,
        },
    ),
    // Antieméticos
    (
        "ondansetron",
        MedicationData {
            name: "Ondansetrón",
            english_names: &["ondansetron", "Zofran"],
            category: "B",
            description: "Antiemético usado para náuseas severas del embarazo",
            risks: "Riesgo bajo. Posible pequeño aumento de riesgo de fisura palatina.",
            recommendations: "Usar para náuseas severas cuando otros tratamientos fallan.",
            common_uses: &["Náuseas del embarazo", "Vómitos por quimioterapia"],
            trimester_specific: None,
        },
    ),
    (
        "metoclopramida",
        MedicationData {
            name: "Metoclopramida",
            english_names: &["metoclopramide", "Reglan"],
            category: "B",
            description: "Antiemético y procinético seguro en embarazo",
            risks: "Riesgo bajo. Evitar uso prolongado.",
            recommendations: "Seguro para uso a corto plazo.",
            common_uses: &["Náuseas", "Gastroparesia", "Reflujo"],
            trimester_specific: None,
        },
    ),
    // Broncodilatadores
    (
        "salbutamol",
        MedicationData {
            name: "Salbutamol",
            english_names: &["salbutamol", "albuterol", "Ventolin"],
            category: "C",
            description: "Broncodilatador de acción rápida para asma",
            risks: "Riesgo bajo cuando se usa según indicaciones.",
            recommendations: "Continuar uso para control del asma durante el embarazo.",
            common_uses: &["Asma", "Broncoespasmo", "EPOC"],
            trimester_specific: Some(TrimesterNotes {
                first: "Continuar si es necesario para control del asma",
                second: "Uso seguro para exacerbaciones",
                third: "Seguro, monitorear frecuencia cardíaca fetal",
            }),
        },
    ),
    // Antifúngicos
    (
        "fluconazol",
        MedicationData {
            name: "Fluconazol",
            english_names: &["fluconazole", "Diflucan"],
            category: "C",
            description: "Antifúngico con uso cauteloso en embarazo",
            risks: "Riesgo de malformaciones con dosis altas o uso prolongado.",
            recommendations: "Evitar en primer trimestre. Usar solo si es esencial.",
            common_uses: &["Candidiasis vaginal", "Infecciones fúngicas sistémicas"],
            trimester_specific: None,
        },
    ),
    (
        "nistatina",
        MedicationData {
            name: "Nistatina",
            english_names: &["nystatin", "Mycostatin"],
            category: "B",
            description: "Antifúngico tópico seguro durante el embarazo",
            risks: "Riesgo muy bajo. Absorción sistémica mínima.",
            recommendations: "Antifúngico de primera elección para candidiasis.",
            common_uses: &["Candidiasis oral", "Candidiasis vaginal"],
            trimester_specific: None,
        },
    ),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FdaCategory;

    #[test]
    fn test_find_exact_key() {
        assert_eq!(find("warfarina").unwrap().name, "Warfarina");
    }

    #[test]
    fn test_find_by_english_name() {
        assert_eq!(find("coumadin").unwrap().name, "Warfarina");
        assert_eq!(find("zofran").unwrap().name, "Ondansetrón");
    }

    #[test]
    fn test_find_no_key_substring() {
        // Unlike the comprehensive table, the legacy search never matches on
        // partial Spanish keys, only full keys or English-name substrings.
        // "ondansetró" is a prefix of the key but of no English name.
        assert!(find("ondansetró").is_none());
    }

    #[test]
    fn test_by_category() {
        let contraindicated = by_category("X");
        assert_eq!(contraindicated.len(), 3);
    }

    #[test]
    fn test_to_record_with_trimester_notes() {
        let record = lookup("ibuprofeno").unwrap().to_record();
        assert_eq!(record.source, RecordSource::Legacy);
        assert!(record.recommendations.contains("Tercer trimestre"));
    }

    #[test]
    fn test_tables_disagree_on_purpose() {
        // The essential table says C/D for ibuprofen, this one says C.
        // The disagreement is in the source data; which value wins depends
        // on which pipeline stage answers.
        assert_eq!(lookup("ibuprofeno").unwrap().category, "C");
        assert_eq!(
            FdaCategory::from_label(crate::data::essential::lookup("ibuprofeno").unwrap().categoria),
            FdaCategory::D
        );
    }
}
