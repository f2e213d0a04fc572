//! Generative knowledge-completion client.
//!
//! Sends a constrained Spanish prompt to a Gemini `generateContent`
//! endpoint and parses the free-text answer back into the four labeled
//! fields. The label-scanning parse is deliberately fragile: if the model
//! varies its phrasing, the affected fields silently fall back to fixed
//! placeholders. That behavior is part of the lookup contract.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use gestamed_core::lookup::{KnowledgeSource, SourceError};
use gestamed_core::models::{DrugRecord, RecordSource};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const MODEL: &str = "gemini-1.5-flash";
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Sentinel the model is instructed to emit for unknown drugs. Its
/// appearance anywhere in the response text turns the answer into a miss.
pub const NOT_FOUND_SENTINEL: &str = "MEDICAMENTO_NO_ENCONTRADO";

const PLACEHOLDER_UNAVAILABLE: &str = "Información no disponible";
const PLACEHOLDER_CONSULT: &str =
    "Consulte a su médico antes de tomar este medicamento durante el embarazo";

/// Blocking HTTP client for the knowledge-completion API.
pub struct GeminiClient {
    api_key: String,
    base_url: String,
    client: reqwest::blocking::Client,
}

impl GeminiClient {
    /// Create a client with an explicit key and base URL.
    pub fn new(
        api_key: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, SourceError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(SourceError::MissingCredential("GEMINI_API_KEY"));
        }
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

    /// Create a client from the `GEMINI_API_KEY` environment variable.
    ///
    /// A missing key is a configuration error, not a soft miss; the
    /// pipeline skips this stage entirely when construction fails.
    pub fn from_env() -> Result<Self, SourceError> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .map_err(|_| SourceError::MissingCredential("GEMINI_API_KEY"))?;
        Self::new(api_key, DEFAULT_BASE_URL)
    }
}

/// The fixed four-label prompt, plus the unknown-drug sentinel instruction.
fn build_prompt(drug_name: &str) -> String {
    format!(
        "Actúa como un experto farmacéutico y proporciona información sobre la \
         clasificación FDA del medicamento \"{drug_name}\" durante el embarazo. \
         Responde en español, con el siguiente formato exacto:\n\
         \n\
         Categoría FDA: [categoría]\n\
         Descripción: [descripción detallada de la categoría]\n\
         Riesgos: [lista de riesgos potenciales]\n\
         Recomendaciones: [recomendaciones específicas]\n\
         \n\
         Si no reconoces el medicamento, responde únicamente con: {NOT_FOUND_SENTINEL}"
    )
}

/// Fields recovered from the model's answer. `None` means the label was
/// never seen and the placeholder applies.
#[derive(Debug, Default, PartialEq)]
struct ParsedSections {
    categoria: Option<String>,
    descripcion: Option<String>,
    riesgos: Option<String>,
    recomendaciones: Option<String>,
}

/// Scan the answer line by line for the four labels. The label match is on
/// the lowercased line; the value is the segment between the first and
/// second colon. Later occurrences of a label overwrite earlier ones.
fn parse_sections(text: &str) -> ParsedSections {
    let mut sections = ParsedSections::default();
    for line in text.lines() {
        let lower = line.to_lowercase();
        let value = line.split(':').nth(1).map(|s| s.trim().to_string());
        if lower.contains("categoría fda:") {
            sections.categoria = value;
        } else if lower.contains("descripción:") {
            sections.descripcion = value;
        } else if lower.contains("riesgos:") {
            sections.riesgos = value;
        } else if lower.contains("recomendaciones:") {
            sections.recomendaciones = value;
        }
    }
    sections
}

/// Build the normalized record, substituting placeholders for any field
/// the parse did not recover.
fn record_from_text(drug_name: &str, text: &str) -> DrugRecord {
    let sections = parse_sections(text);
    DrugRecord {
        name: drug_name.to_string(),
        category: sections
            .categoria
            .unwrap_or_else(|| "No asignada".to_string()),
        description: sections
            .descripcion
            .unwrap_or_else(|| PLACEHOLDER_UNAVAILABLE.to_string()),
        risks: sections
            .riesgos
            .unwrap_or_else(|| PLACEHOLDER_UNAVAILABLE.to_string()),
        recommendations: sections
            .recomendaciones
            .unwrap_or_else(|| PLACEHOLDER_CONSULT.to_string()),
        alternatives: Vec::new(),
        source: RecordSource::KnowledgeApi,
    }
}

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<RequestContent<'a>>,
}

#[derive(Serialize)]
struct RequestContent<'a> {
    parts: Vec<RequestPart<'a>>,
}

#[derive(Serialize)]
struct RequestPart<'a> {
    text: &'a str,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<ResponseCandidate>,
}

#[derive(Deserialize)]
struct ResponseCandidate {
    content: Option<ResponseContent>,
}

#[derive(Deserialize)]
struct ResponseContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Deserialize)]
struct ResponsePart {
    #[serde(default)]
    text: String,
}

impl KnowledgeSource for GeminiClient {
    fn query(&self, drug_name: &str) -> Result<Option<DrugRecord>, SourceError> {
        let prompt = build_prompt(drug_name);
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url, MODEL, self.api_key
        );
        let body = GenerateRequest {
            contents: vec![RequestContent {
                parts: vec![RequestPart { text: &prompt }],
            }],
        };

        // Single attempt, fixed timeout. No retry on timeout or 5xx.
        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .map_err(|e| SourceError::Http(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                body: response.text().unwrap_or_default(),
            });
        }

        let parsed: GenerateResponse = response
            .json()
            .map_err(|e| SourceError::Parse(e.to_string()))?;

        let text = parsed
            .candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .and_then(|content| content.parts.first())
            .map(|part| part.text.as_str())
            .unwrap_or_default();

        if text.trim().is_empty() || text.contains(NOT_FOUND_SENTINEL) {
            tracing::debug!(drug_name, "knowledge api reported unknown drug");
            return Ok(None);
        }

        Ok(Some(record_from_text(drug_name, text)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gestamed_core::models::FdaCategory;

    #[test]
    fn test_prompt_contains_labels_and_sentinel() {
        let prompt = build_prompt("ibuprofeno");
        assert!(prompt.contains("\"ibuprofeno\""));
        assert!(prompt.contains("Categoría FDA:"));
        assert!(prompt.contains("Descripción:"));
        assert!(prompt.contains("Riesgos:"));
        assert!(prompt.contains("Recomendaciones:"));
        assert!(prompt.contains(NOT_FOUND_SENTINEL));
    }

    #[test]
    fn test_parse_complete_answer() {
        let text = "Categoría FDA: C\n\
                    Descripción: AINE de uso común.\n\
                    Riesgos: Cierre prematuro del ductus arterioso.\n\
                    Recomendaciones: Evitar en el tercer trimestre.";
        let sections = parse_sections(text);
        assert_eq!(sections.categoria.as_deref(), Some("C"));
        assert_eq!(sections.descripcion.as_deref(), Some("AINE de uso común."));
        assert_eq!(
            sections.riesgos.as_deref(),
            Some("Cierre prematuro del ductus arterioso.")
        );
        assert_eq!(
            sections.recomendaciones.as_deref(),
            Some("Evitar en el tercer trimestre.")
        );
    }

    #[test]
    fn test_parse_keeps_only_segment_between_first_two_colons() {
        // Faithful to the original split-on-colon parse: text after a
        // second colon is dropped, not preserved.
        let text = "Riesgos: sangrado: evitar en tercer trimestre";
        let sections = parse_sections(text);
        assert_eq!(sections.riesgos.as_deref(), Some("sangrado"));
    }

    #[test]
    fn test_parse_is_order_tolerant() {
        let text = "Recomendaciones: Consultar.\nCategoría FDA: B";
        let sections = parse_sections(text);
        assert_eq!(sections.categoria.as_deref(), Some("B"));
        assert_eq!(sections.recomendaciones.as_deref(), Some("Consultar."));
        assert_eq!(sections.descripcion, None);
    }

    #[test]
    fn test_missing_labels_fall_back_to_placeholders() {
        let record = record_from_text("algo", "El modelo respondió con prosa libre.");
        assert_eq!(record.category, "No asignada");
        assert_eq!(record.resolved_category(), FdaCategory::NotAssigned);
        assert_eq!(record.description, PLACEHOLDER_UNAVAILABLE);
        assert_eq!(record.risks, PLACEHOLDER_UNAVAILABLE);
        assert_eq!(record.recommendations, PLACEHOLDER_CONSULT);
        assert_eq!(record.source, RecordSource::KnowledgeApi);
    }

    #[test]
    fn test_varied_label_phrasing_is_not_recognized() {
        // "Categoría:" without "FDA" does not match the label scan.
        let record = record_from_text("algo", "Categoría: B");
        assert_eq!(record.category, "No asignada");
    }

    #[test]
    fn test_empty_api_key_is_configuration_error() {
        let result = GeminiClient::new("", DEFAULT_BASE_URL);
        assert!(matches!(
            result,
            Err(SourceError::MissingCredential("GEMINI_API_KEY"))
        ));
    }
}
