//! Normalized drug records.

use serde::{Deserialize, Serialize};

use super::category::FdaCategory;

/// Provenance of a [`DrugRecord`].
///
/// Shown to the user as a trust indicator; never used for scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RecordSource {
    Essential,
    Comprehensive,
    Legacy,
    OfficialLabel,
    KnowledgeApi,
    NotFound,
}

/// Canonical lookup output, regardless of which source produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrugRecord {
    /// Display name.
    pub name: String,
    /// Raw category label. May be a composite like "C/D"; composites are
    /// reduced to their worst letter only when compared numerically.
    pub category: String,
    /// Mechanism / drug class / route, free text.
    pub description: String,
    /// Pregnancy-specific risks, free text.
    pub risks: String,
    /// Clinical recommendations, free text.
    pub recommendations: String,
    /// Suggested safer alternatives (may be empty).
    pub alternatives: Vec<String>,
    /// Which pipeline stage produced this record.
    pub source: RecordSource,
}

impl DrugRecord {
    /// Reduce the raw category label to a single recognized category.
    pub fn resolved_category(&self) -> FdaCategory {
        FdaCategory::from_label(&self.category)
    }

    /// The sentinel record returned when every pipeline stage missed.
    ///
    /// This is a valid, successful output. Callers must treat
    /// `source == NotFound` as "no information", never as an error.
    pub fn not_found(query: &str) -> DrugRecord {
        DrugRecord {
            name: query.trim().to_string(),
            category: FdaCategory::NotAssigned.to_string(),
            description: "No se encontró información para este medicamento en las \
                          fuentes disponibles."
                .to_string(),
            risks: "Información no disponible. No se pudo determinar el perfil de \
                    riesgo durante el embarazo."
                .to_string(),
            recommendations: "Consulte a su médico o farmacéutico antes de tomar \
                              este medicamento durante el embarazo."
                .to_string(),
            alternatives: Vec::new(),
            source: RecordSource::NotFound,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_sentinel() {
        let record = DrugRecord::not_found("  xyznonexistent  ");
        assert_eq!(record.name, "xyznonexistent");
        assert_eq!(record.source, RecordSource::NotFound);
        assert_eq!(record.resolved_category(), FdaCategory::NotAssigned);
        assert!(!record.risks.is_empty());
        assert!(!record.recommendations.is_empty());
        assert!(record.alternatives.is_empty());
    }

    #[test]
    fn test_composite_category_resolution() {
        let mut record = DrugRecord::not_found("ibuprofeno");
        record.category = "C/D".to_string();
        assert_eq!(record.resolved_category(), FdaCategory::D);
    }

    #[test]
    fn test_source_serialization_tags() {
        let tag = |s: RecordSource| serde_json::to_value(s).unwrap();
        assert_eq!(tag(RecordSource::Essential), "essential");
        assert_eq!(tag(RecordSource::OfficialLabel), "officialLabel");
        assert_eq!(tag(RecordSource::KnowledgeApi), "knowledgeApi");
        assert_eq!(tag(RecordSource::NotFound), "notFound");
    }
}
