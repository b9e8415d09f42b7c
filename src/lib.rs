//! Disaster Tweet Analyzer - Classification Core
//!
//! Takes a short text message and produces a structured disaster
//! assessment: disaster/not-disaster with a confidence score, a keyword
//! category, location mentions, and sentiment. Model artifacts are loaded
//! once into an [`AnalyzerContext`] and shared read-only across calls.

pub mod constants;
pub mod error;
pub mod logic;

pub use error::{AnalyzeError, AnalyzeResult};
pub use logic::analyzer::{record_text, AnalyzerContext, EngineStatus};
pub use logic::locations::{EntityRecognizer, EntitySpan};
pub use logic::types::{Sentiment, TweetAssessment, UNKNOWN_CATEGORY};
