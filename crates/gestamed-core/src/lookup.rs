//! Lookup orchestrator.
//!
//! Precedence pipeline over a single free-text query:
//!
//! ```text
//! LocalEssential → OfficialLabels → KnowledgeApi → LocalFallback → NotFound
//! ```
//!
//! Terminal on first success. Remote stages are optional (skipped when no
//! client is configured) and recoverable (any source error is logged and
//! treated as a miss). The pipeline always produces a record: when every
//! stage misses, the answer is the `notFound` sentinel, not an error.

use thiserror::Error;

use crate::data::{comprehensive, essential, legacy, translations};
use crate::models::{DrugRecord, LookupResponse};
use crate::resolver;

/// Errors surfaced by an external data source.
///
/// Only `MissingCredential` ever reaches a caller (at client construction
/// time); everything else is absorbed by the pipeline as a stage miss.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Missing credential: {0}")]
    MissingCredential(&'static str),

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Unexpected status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Response parse error: {0}")]
    Parse(String),
}

/// Official drug-label database client.
pub trait LabelSource {
    /// `Ok(None)` means the source answered but knows nothing about the
    /// drug; `Err` means the source could not answer at all.
    fn query(&self, drug_name: &str) -> Result<Option<DrugRecord>, SourceError>;
}

/// Generative knowledge-completion client.
pub trait KnowledgeSource {
    /// `Ok(None)` means the model reported the drug as unknown.
    fn query(&self, drug_name: &str) -> Result<Option<DrugRecord>, SourceError>;
}

/// Input validation errors, raised before any network call.
#[derive(Error, Debug, PartialEq)]
pub enum LookupError {
    #[error("El término de búsqueda debe tener al menos 2 caracteres")]
    QueryTooShort,
}

/// The precedence pipeline. Stateless per call; holds only the configured
/// clients, never caches results between lookups.
#[derive(Default)]
pub struct LookupPipeline {
    labels: Option<Box<dyn LabelSource>>,
    knowledge: Option<Box<dyn KnowledgeSource>>,
}

impl LookupPipeline {
    /// Pipeline with no remote stages: local tables and the sentinel only.
    pub fn local_only() -> Self {
        Self::default()
    }

    /// Attach an official-label client.
    pub fn with_labels(mut self, source: impl LabelSource + 'static) -> Self {
        self.labels = Some(Box::new(source));
        self
    }

    /// Attach a knowledge-completion client.
    pub fn with_knowledge(mut self, source: impl KnowledgeSource + 'static) -> Self {
        self.knowledge = Some(Box::new(source));
        self
    }

    /// Run the full precedence pipeline for one query.
    pub fn lookup(&self, query: &str) -> Result<DrugRecord, LookupError> {
        let trimmed = query.trim();
        if trimmed.chars().count() < 2 {
            return Err(LookupError::QueryTooShort);
        }

        // Stage 1: essential table via the alias resolver.
        if let Some(key) = resolver::resolve(trimmed) {
            if let Some(entry) = essential::lookup(key) {
                tracing::debug!(query = trimmed, key, "lookup hit: essential table");
                return Ok(entry.to_record());
            }
        }

        // Stage 2: official label database, when configured.
        if let Some(labels) = &self.labels {
            match labels.query(trimmed) {
                Ok(Some(record)) => {
                    tracing::debug!(query = trimmed, "lookup hit: official labels");
                    return Ok(record);
                }
                Ok(None) => {}
                Err(error) => {
                    tracing::warn!(query = trimmed, %error, "official label stage failed, continuing");
                }
            }
        }

        // Stage 3: knowledge-completion API, when configured.
        if let Some(knowledge) = &self.knowledge {
            match knowledge.query(trimmed) {
                Ok(Some(record)) => {
                    tracing::debug!(query = trimmed, "lookup hit: knowledge api");
                    return Ok(record);
                }
                Ok(None) => {}
                Err(error) => {
                    tracing::warn!(query = trimmed, %error, "knowledge stage failed, continuing");
                }
            }
        }

        // Stage 4: comprehensive/legacy tables across name variants.
        for variant in name_variants(trimmed) {
            if let Some(entry) = comprehensive::find(&variant) {
                tracing::debug!(query = trimmed, variant = %variant, "lookup hit: comprehensive table");
                return Ok(entry.to_record());
            }
        }
        for variant in name_variants(trimmed) {
            if let Some(entry) = legacy::find(&variant) {
                tracing::debug!(query = trimmed, variant = %variant, "lookup hit: legacy table");
                return Ok(entry.to_record());
            }
        }

        // Stage 5: the sentinel. A successful answer, not an error.
        tracing::debug!(query = trimmed, "lookup exhausted, returning sentinel");
        Ok(DrugRecord::not_found(trimmed))
    }

    /// Like [`lookup`](Self::lookup), shaped for the wire.
    pub fn lookup_response(&self, query: &str) -> Result<LookupResponse, LookupError> {
        self.lookup(query).map(LookupResponse::from)
    }
}

/// Query plus its canonical key and English/brand variants, original first.
fn name_variants(query: &str) -> Vec<String> {
    let lowered = query.to_lowercase();
    let mut variants = vec![lowered.clone()];
    if let Some(key) = resolver::resolve(&lowered) {
        if !variants.iter().any(|v| v == key) {
            variants.push(key.to_string());
        }
    }
    for name in translations::english_names(&lowered) {
        if !variants.iter().any(|v| v == name) {
            variants.push(name.to_string());
        }
    }
    variants
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{FdaCategory, RecordSource};

    #[test]
    fn test_query_too_short() {
        let pipeline = LookupPipeline::local_only();
        assert_eq!(pipeline.lookup("a"), Err(LookupError::QueryTooShort));
        assert_eq!(pipeline.lookup("  x  "), Err(LookupError::QueryTooShort));
        assert_eq!(pipeline.lookup(""), Err(LookupError::QueryTooShort));
    }

    #[test]
    fn test_essential_hit() {
        let record = LookupPipeline::local_only().lookup("paracetamol").unwrap();
        assert_eq!(record.source, RecordSource::Essential);
        assert_eq!(record.resolved_category(), FdaCategory::B);
        assert!(!record.risks.is_empty());
        assert!(!record.recommendations.is_empty());
    }

    #[test]
    fn test_essential_hit_via_trade_name() {
        let record = LookupPipeline::local_only().lookup("tylenol").unwrap();
        assert_eq!(record.source, RecordSource::Essential);
        assert_eq!(record.name, "Paracetamol");
    }

    #[test]
    fn test_fallback_to_comprehensive() {
        // warfarina is absent from the essential table
        let record = LookupPipeline::local_only().lookup("warfarina").unwrap();
        assert_eq!(record.source, RecordSource::Comprehensive);
        assert_eq!(record.resolved_category(), FdaCategory::X);
    }

    #[test]
    fn test_fallback_to_legacy() {
        // ondansetron is only in the legacy table
        let record = LookupPipeline::local_only().lookup("ondansetron").unwrap();
        assert_eq!(record.source, RecordSource::Legacy);
    }

    #[test]
    fn test_not_found_sentinel() {
        let record = LookupPipeline::local_only()
            .lookup("xyznonexistentdrug123")
            .unwrap();
        assert_eq!(record.source, RecordSource::NotFound);
        assert!(!record.risks.is_empty());
        assert!(!record.recommendations.is_empty());
    }

    #[test]
    fn test_name_variants_include_translations() {
        let variants = name_variants("furosemida");
        assert!(variants.contains(&"furosemida".to_string()));
        assert!(variants.contains(&"furosemide".to_string()));
        assert!(variants.contains(&"lasix".to_string()));
    }
}
