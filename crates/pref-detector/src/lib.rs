//! Response-style preference detector.
//!
//! Scores free-form user text for visual, text and mixed signals and picks one
//! [`Category`]. Also provides a keyword-density confidence estimate for
//! diagnostics.

pub mod detector;
pub mod lexicon;
pub mod phrases;
pub mod strength;
pub mod tables;

pub use detector::{PreferenceDetector, Verdict};
pub use lexicon::Lexicon;
pub use phrases::{PhraseHits, PhraseSet};
pub use pref_core::{Category, DetectorConfig, ScoreVector};
pub use strength::{ScoredAnalysis, StrengthAnalyzer};

use std::sync::LazyLock;

/// Detector over the built-in tables and default weights.
pub static DETECTOR: LazyLock<PreferenceDetector> = LazyLock::new(|| {
    PreferenceDetector::new(&DetectorConfig::default()).expect("built-in preference tables compile")
});

/// Strength analyzer over the built-in tables and default coefficients.
pub static ANALYZER: LazyLock<StrengthAnalyzer> = LazyLock::new(|| {
    StrengthAnalyzer::new(&DetectorConfig::default().strength).expect("built-in strength tables compile")
});

/// Classify text with the default detector.
pub fn classify(text: Option<&str>) -> Verdict {
    DETECTOR.classify(text)
}

/// Keyword-density analysis with the default analyzer.
pub fn analyze_strength(text: Option<&str>) -> ScoredAnalysis {
    ANALYZER.analyze(text)
}

/// Category worth persisting for a personalization introduction, if any.
/// Absent or inconclusive text never overwrites a stored preference.
pub fn resolve_stored_preference(introduction: Option<&str>) -> Option<Category> {
    Some(classify(introduction).preference).filter(Category::is_definite)
}

#[cfg(test)]
mod tests;
