//! Wire shape of a lookup answer.
//!
//! The web layer serializes this object verbatim. Consumers read both the
//! flat fields and the nested `sections` object, so the duplication is a
//! contract, not an accident.

use serde::Serialize;

use super::record::{DrugRecord, RecordSource};

/// Nested content block duplicating the flat fields.
#[derive(Debug, Clone, Serialize)]
pub struct LookupSections {
    pub categoria: String,
    pub descripcion: String,
    pub riesgos: String,
    pub recomendaciones: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternativas: Option<String>,
}

/// Flat + nested response for a single medication lookup.
#[derive(Debug, Clone, Serialize)]
pub struct LookupResponse {
    pub source: RecordSource,
    pub name: String,
    #[serde(rename = "medicationName")]
    pub medication_name: String,
    pub categoria: String,
    pub descripcion: String,
    pub riesgos: String,
    pub recomendaciones: String,
    pub sections: LookupSections,
}

impl From<DrugRecord> for LookupResponse {
    fn from(record: DrugRecord) -> Self {
        let alternativas = if record.alternatives.is_empty() {
            None
        } else {
            Some(record.alternatives.join(", "))
        };
        LookupResponse {
            source: record.source,
            name: record.name.clone(),
            medication_name: record.name,
            categoria: record.category.clone(),
            descripcion: record.description.clone(),
            riesgos: record.risks.clone(),
            recomendaciones: record.recommendations.clone(),
            sections: LookupSections {
                categoria: record.category,
                descripcion: record.description,
                riesgos: record.risks,
                recomendaciones: record.recommendations,
                alternativas,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::record::RecordSource;

    fn sample_record() -> DrugRecord {
        DrugRecord {
            name: "Paracetamol".into(),
            category: "Categoría B".into(),
            description: "Analgésico y antipirético".into(),
            risks: "Muy bajos.".into(),
            recommendations: "Analgésico de elección.".into(),
            alternatives: vec!["ibuprofeno tópico".into()],
            source: RecordSource::Essential,
        }
    }

    #[test]
    fn test_flat_and_nested_fields_match() {
        let response = LookupResponse::from(sample_record());
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["source"], "essential");
        assert_eq!(value["name"], "Paracetamol");
        assert_eq!(value["medicationName"], "Paracetamol");
        assert_eq!(value["categoria"], value["sections"]["categoria"]);
        assert_eq!(value["descripcion"], value["sections"]["descripcion"]);
        assert_eq!(value["riesgos"], value["sections"]["riesgos"]);
        assert_eq!(
            value["recomendaciones"],
            value["sections"]["recomendaciones"]
        );
        assert_eq!(value["sections"]["alternativas"], "ibuprofeno tópico");
    }

    #[test]
    fn test_empty_alternatives_omitted() {
        let mut record = sample_record();
        record.alternatives.clear();
        let value = serde_json::to_value(LookupResponse::from(record)).unwrap();
        assert!(value["sections"].get("alternativas").is_none());
    }

    #[test]
    fn test_exact_field_names() {
        let value = serde_json::to_value(LookupResponse::from(sample_record())).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();
        for expected in [
            "source",
            "name",
            "medicationName",
            "categoria",
            "descripcion",
            "riesgos",
            "recomendaciones",
            "sections",
        ] {
            assert!(keys.contains(&expected), "missing field {expected}");
        }
    }
}
