//! Logic Module - Analysis Engine
//!
//! The classification pipeline: feature extraction, classifier inference,
//! and the three independent text signals (category keywords, locations,
//! sentiment), composed by the analyzer.

pub mod analyzer;
pub mod features;
pub mod keywords;
pub mod locations;
pub mod model;
pub mod sentiment;
pub mod types;

#[cfg(test)]
mod tests;
