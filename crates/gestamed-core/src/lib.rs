//! Gestamed Core Library
//!
//! Medication-safety lookup for obstetric clinical calculators.
//!
//! # Architecture
//!
//! ```text
//! Free-text drug name
//!         │
//!         ▼
//!   Alias Resolver ──► Essential Table ──hit──► DrugRecord (essential)
//!         │
//!        miss
//!         │
//!         ▼
//!   Official Label Client ──hit──► DrugRecord (officialLabel)
//!         │
//!        miss / unconfigured / error (logged)
//!         │
//!         ▼
//!   Knowledge API Client ──hit──► DrugRecord (knowledgeApi)
//!         │
//!        miss / unconfigured / error (logged)
//!         │
//!         ▼
//!   Comprehensive + Legacy Tables (name variants) ──hit──► DrugRecord
//!         │
//!        miss
//!         │
//!         ▼
//!   NotFound sentinel (a successful answer, never an error)
//! ```
//!
//! Multi-drug flows go through [`interactions::analyze`], which scores
//! pairwise matches from the static interaction table.
//!
//! # Modules
//!
//! - [`models`]: Domain types (FdaCategory, DrugRecord, InteractionAnalysis, ...)
//! - [`data`]: Embedded knowledge tables (essential / comprehensive / legacy)
//! - [`resolver`]: Free-text → canonical-key alias resolution
//! - [`lookup`]: The precedence pipeline and its external-source traits
//! - [`interactions`]: Pairwise interaction analysis and risk scoring
//! - [`history`]: Best-effort calculation-history persistence

pub mod data;
pub mod history;
pub mod interactions;
pub mod lookup;
pub mod models;
pub mod resolver;

// Re-export commonly used types
pub use history::{CalculationRecord, HistoryStore};
pub use lookup::{KnowledgeSource, LabelSource, LookupError, LookupPipeline, SourceError};
pub use models::{
    DrugInteraction, DrugRecord, FdaCategory, InteractionAnalysis, InteractionSeverity,
    LookupResponse, RecordSource,
};
