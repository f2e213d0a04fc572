//! Official drug-label database client (openFDA).
//!
//! The upstream database indexes only English and brand names, so each
//! query fans out over the Spanish term's translation variants and three
//! field-search strategies, stopping at the first combination that returns
//! a result. Failed attempts (404, timeout, 5xx) are swallowed and the
//! loop continues; only total exhaustion is a miss.

use std::time::Duration;

use serde::Deserialize;

use gestamed_core::data::translations;
use gestamed_core::lookup::{LabelSource, SourceError};
use gestamed_core::models::{DrugRecord, FdaCategory, RecordSource};

const DEFAULT_BASE_URL: &str = "https://api.fda.gov/drug/label.json";
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Character budget for the long free-text fields. The UI depends on this
/// bound and on the literal marker.
const TEXT_LIMIT: usize = 800;
const TRUNCATION_MARKER: &str = "... (texto truncado)";

/// Field-search strategies, tried in order per name variant.
const SEARCH_FIELDS: &[&str] = &[
    "openfda.generic_name",
    "openfda.brand_name",
    "openfda.substance_name",
];

const FALLBACK_DESCRIPTION: &str =
    "Información no disponible en la base de datos de la FDA.";
const FALLBACK_RISKS: &str = "Información no disponible en la base de datos de la FDA.";
const FALLBACK_RECOMMENDATIONS: &str =
    "Consulte a su médico antes de tomar este medicamento durante el embarazo.";
const FALLBACK_ALTERNATIVE: &str = "Consultar con su médico para alternativas específicas";

/// Blocking HTTP client for the drug-label search endpoint.
pub struct OpenFdaClient {
    api_key: Option<String>,
    base_url: String,
    client: reqwest::blocking::Client,
}

impl OpenFdaClient {
    /// Create a client. The API key is optional: the public endpoint
    /// accepts keyless low-volume use.
    pub fn new(api_key: Option<String>, base_url: impl Into<String>) -> Result<Self, SourceError> {
        let base_url = base_url.into();
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .map_err(|e| SourceError::Http(e.to_string()))?;
        Ok(Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    /// Create a client from the optional `OPENFDA_API_KEY` environment
    /// variable.
    pub fn from_env() -> Result<Self, SourceError> {
        Self::new(std::env::var("OPENFDA_API_KEY").ok(), DEFAULT_BASE_URL)
    }

    /// One bounded search attempt against a single field. `Ok(None)` means
    /// the endpoint answered with no results (openFDA reports that as 404).
    fn search_attempt(
        &self,
        search: &str,
        limit: usize,
    ) -> Result<Vec<LabelResult>, SourceError> {
        let limit = limit.to_string();
        let mut request = self
            .client
            .get(&self.base_url)
            .query(&[("search", search), ("limit", limit.as_str())]);
        if let Some(key) = &self.api_key {
            request = request.query(&[("api_key", key.as_str())]);
        }

        let response = request.send().map_err(|e| SourceError::Http(e.to_string()))?;
        let status = response.status();
        if status.as_u16() == 404 {
            return Ok(Vec::new());
        }
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                body: response.text().unwrap_or_default(),
            });
        }

        let parsed: LabelSearchResponse = response
            .json()
            .map_err(|e| SourceError::Parse(e.to_string()))?;
        Ok(parsed.results)
    }

    /// Labeled drugs carrying the given pregnancy category.
    pub fn search_by_category(
        &self,
        category: FdaCategory,
        limit: usize,
    ) -> Result<Vec<DrugRecord>, SourceError> {
        let search = format!("openfda.pregnancy_category:\"{category}\"");
        let results = self.search_attempt(&search, limit)?;
        Ok(results
            .into_iter()
            .map(|result| {
                let mut record = normalize_result(&result, "Medicamento desconocido");
                record.category = category.to_string();
                record
            })
            .collect())
    }
}

impl LabelSource for OpenFdaClient {
    fn query(&self, drug_name: &str) -> Result<Option<DrugRecord>, SourceError> {
        for candidate in candidate_names(drug_name) {
            for field in SEARCH_FIELDS {
                let search = exact_field_query(field, &candidate);
                match self.search_attempt(&search, 1) {
                    Ok(results) => {
                        if let Some(result) = results.first() {
                            tracing::debug!(
                                drug_name,
                                candidate = %candidate,
                                field = %field,
                                "label search hit"
                            );
                            return Ok(Some(normalize_result(result, drug_name)));
                        }
                    }
                    Err(error) => {
                        // A failed combination never aborts the sweep.
                        tracing::debug!(
                            drug_name,
                            candidate = %candidate,
                            field = %field,
                            %error,
                            "label search attempt failed"
                        );
                    }
                }
            }
        }
        Ok(None)
    }
}

/// Exact quoted search expression for one field.
fn exact_field_query(field: &str, term: &str) -> String {
    format!("{field}:\"{term}\"")
}

/// The query itself plus its translation variants, original first.
fn candidate_names(drug_name: &str) -> Vec<String> {
    let lowered = drug_name.to_lowercase();
    let lowered = lowered.trim().to_string();
    let mut candidates = vec![lowered.clone()];
    for name in translations::english_names(&lowered) {
        if !candidates.iter().any(|c| c == name) {
            candidates.push(name.to_string());
        }
    }
    candidates
}

/// Map one heterogeneous upstream result into the canonical record shape.
///
/// Name preference: brand > generic > substance > the original query.
/// A missing pregnancy-category field becomes `NotAssigned`; it is never
/// inferred from the warning text.
fn normalize_result(result: &LabelResult, query: &str) -> DrugRecord {
    let openfda = &result.openfda;

    let name = first_nonempty(&openfda.brand_name)
        .or_else(|| first_nonempty(&openfda.generic_name))
        .or_else(|| first_nonempty(&openfda.substance_name))
        .unwrap_or(query)
        .to_string();

    let category = first_nonempty(&openfda.pregnancy_category)
        .map(|c| c.to_uppercase())
        .unwrap_or_else(|| FdaCategory::NotAssigned.to_string());

    let mut description = openfda
        .pharm_class_epc
        .iter()
        .flatten()
        .filter(|s| !s.is_empty())
        .cloned()
        .collect::<Vec<_>>()
        .join(". ");
    if let Some(routes) = &openfda.route {
        if !routes.is_empty() {
            if !description.is_empty() {
                description.push_str(". ");
            }
            description.push_str(&format!("Vía de administración: {}.", routes.join(", ")));
        }
    }
    if description.is_empty() {
        description = FALLBACK_DESCRIPTION.to_string();
    }

    // Fixed preference order across the upstream's many possible fields.
    let risks = [
        &result.pregnancy,
        &result.pregnancy_or_breast_feeding,
        &result.warnings,
        &result.warnings_and_precautions,
        &result.precautions,
    ]
    .into_iter()
    .find_map(|field| join_nonempty(field))
    .unwrap_or_else(|| FALLBACK_RISKS.to_string());

    let recommendations = join_nonempty(&result.precautions)
        .or_else(|| {
            join_nonempty(&result.indications_and_usage)
                .map(|text| format!("Indicaciones de uso: {text}"))
        })
        .unwrap_or_else(|| FALLBACK_RECOMMENDATIONS.to_string());

    DrugRecord {
        name,
        category,
        description,
        risks: truncate_text(&risks),
        recommendations: truncate_text(&recommendations),
        alternatives: vec![FALLBACK_ALTERNATIVE.to_string()],
        source: RecordSource::OfficialLabel,
    }
}

fn first_nonempty(field: &Option<Vec<String>>) -> Option<&str> {
    field
        .as_deref()
        .and_then(|values| values.iter().find(|v| !v.is_empty()))
        .map(|s| s.as_str())
}

fn join_nonempty(field: &Option<Vec<String>>) -> Option<String> {
    match field.as_deref() {
        Some(values) if !values.is_empty() => Some(values.join(" ")),
        _ => None,
    }
}

/// Cap a long field at the character budget, appending the marker.
fn truncate_text(text: &str) -> String {
    if text.chars().count() > TEXT_LIMIT {
        let cut: String = text.chars().take(TEXT_LIMIT).collect();
        format!("{cut}{TRUNCATION_MARKER}")
    } else {
        text.to_string()
    }
}

// ---------------------------------------------------------------------------
// Wire types. Every upstream field is optional.
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct LabelSearchResponse {
    #[serde(default)]
    results: Vec<LabelResult>,
}

#[derive(Deserialize, Default)]
pub struct LabelResult {
    #[serde(default)]
    openfda: OpenFdaFields,
    pregnancy: Option<Vec<String>>,
    pregnancy_or_breast_feeding: Option<Vec<String>>,
    warnings: Option<Vec<String>>,
    warnings_and_precautions: Option<Vec<String>>,
    precautions: Option<Vec<String>>,
    indications_and_usage: Option<Vec<String>>,
}

#[derive(Deserialize, Default)]
struct OpenFdaFields {
    brand_name: Option<Vec<String>>,
    generic_name: Option<Vec<String>>,
    substance_name: Option<Vec<String>>,
    pharm_class_epc: Option<Vec<String>>,
    pregnancy_category: Option<Vec<String>>,
    route: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(json: serde_json::Value) -> LabelResult {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_candidate_names_expand_translations() {
        let candidates = candidate_names("Furosemida");
        assert_eq!(candidates, vec!["furosemida", "furosemide", "lasix"]);
    }

    #[test]
    fn test_candidate_names_unknown_term() {
        assert_eq!(candidate_names("algoextraño"), vec!["algoextraño"]);
    }

    #[test]
    fn test_exact_field_query() {
        assert_eq!(
            exact_field_query("openfda.generic_name", "furosemide"),
            "openfda.generic_name:\"furosemide\""
        );
    }

    #[test]
    fn test_normalize_prefers_brand_name() {
        let result = fixture(serde_json::json!({
            "openfda": {
                "brand_name": ["Lasix"],
                "generic_name": ["furosemide"],
                "pregnancy_category": ["C"],
                "route": ["ORAL"],
                "pharm_class_epc": ["Loop Diuretic [EPC]"]
            },
            "pregnancy": ["May cause fetal harm."]
        }));
        let record = normalize_result(&result, "furosemida");
        assert_eq!(record.name, "Lasix");
        assert_eq!(record.category, "C");
        assert!(record.description.contains("Loop Diuretic"));
        assert!(record.description.contains("Vía de administración: ORAL."));
        assert_eq!(record.risks, "May cause fetal harm.");
        assert_eq!(record.source, RecordSource::OfficialLabel);
    }

    #[test]
    fn test_normalize_missing_category_defaults_not_assigned() {
        let result = fixture(serde_json::json!({
            "openfda": { "generic_name": ["acetaminophen"] },
            "warnings": ["Do not exceed recommended dose."]
        }));
        let record = normalize_result(&result, "paracetamol");
        assert_eq!(record.name, "acetaminophen");
        assert_eq!(record.category, "No asignada");
        assert_eq!(record.resolved_category(), FdaCategory::NotAssigned);
        // warnings used because pregnancy fields are absent
        assert_eq!(record.risks, "Do not exceed recommended dose.");
    }

    #[test]
    fn test_normalize_empty_result_uses_fallbacks() {
        let record = normalize_result(&LabelResult::default(), "misterio");
        assert_eq!(record.name, "misterio");
        assert_eq!(record.description, FALLBACK_DESCRIPTION);
        assert_eq!(record.risks, FALLBACK_RISKS);
        assert_eq!(record.recommendations, FALLBACK_RECOMMENDATIONS);
        assert_eq!(record.alternatives, vec![FALLBACK_ALTERNATIVE]);
    }

    #[test]
    fn test_risks_preference_order() {
        let result = fixture(serde_json::json!({
            "pregnancy": ["Pregnancy text."],
            "warnings": ["Warning text."]
        }));
        assert_eq!(normalize_result(&result, "x").risks, "Pregnancy text.");
    }

    #[test]
    fn test_recommendations_from_indications_are_prefixed() {
        let result = fixture(serde_json::json!({
            "indications_and_usage": ["For the treatment of edema."]
        }));
        assert_eq!(
            normalize_result(&result, "x").recommendations,
            "Indicaciones de uso: For the treatment of edema."
        );
    }

    #[test]
    fn test_long_text_is_truncated_with_marker() {
        let long_text = "riesgo ".repeat(200);
        let result = fixture(serde_json::json!({ "pregnancy": [long_text] }));
        let record = normalize_result(&result, "x");
        assert!(record.risks.ends_with(TRUNCATION_MARKER));
        assert_eq!(
            record.risks.chars().count(),
            TEXT_LIMIT + TRUNCATION_MARKER.chars().count()
        );
    }

    #[test]
    fn test_short_text_is_not_truncated() {
        assert_eq!(truncate_text("corto"), "corto");
    }

    #[test]
    fn test_truncation_respects_multibyte_text() {
        let accented = "á".repeat(900);
        let truncated = truncate_text(&accented);
        assert!(truncated.ends_with(TRUNCATION_MARKER));
        assert_eq!(truncated.chars().take(TEXT_LIMIT).count(), TEXT_LIMIT);
    }
}
