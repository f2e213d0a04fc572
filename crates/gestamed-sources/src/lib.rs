//! External data-source clients for the gestamed lookup pipeline.
//!
//! Two blocking HTTP clients, each implementing one of the core's source
//! traits:
//!
//! - [`gemini::GeminiClient`]: generative knowledge-completion API,
//!   constrained four-label prompt, sentinel-based unknown detection.
//! - [`openfda::OpenFdaClient`]: official drug-label database, translation
//!   variants × field strategies, first hit wins.
//!
//! Both are single-attempt with fixed timeouts: a failed call is a miss
//! for its pipeline stage, never a crash for the request.

pub mod gemini;
pub mod openfda;

pub use gemini::GeminiClient;
pub use openfda::OpenFdaClient;
