//! Feature Pipeline
//!
//! Turns raw text into the numeric representation the classifiers consume:
//! vocabulary tf-idf vectorization followed by per-dimension standardization.
//! The resulting [`FeatureVector`] is opaque to every other component.

pub mod scaler;
pub mod vector;
pub mod vectorizer;

pub use scaler::StandardScaler;
pub use vector::FeatureVector;
pub use vectorizer::TermVectorizer;
