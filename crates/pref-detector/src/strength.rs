//! Keyword-density confidence estimate over a reduced visual/text vocabulary.
//!
//! Independent of the primary classifier: no phrase patterns, no mixed
//! category. The two may disagree on the same input.

use crate::lexicon::Lexicon;
use crate::tables;
use pref_core::{Category, Result, StrengthConfig};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredAnalysis {
    /// Only `Visual`, `Text` or `NoPreference`.
    pub preference: Category,
    /// In `[0.0, cap]`, two decimals. `0.0` whenever `preference` is `NoPreference`.
    pub confidence: f64,
    pub visual_keywords: Vec<String>,
    pub text_keywords: Vec<String>,
    pub total_keywords: usize,
}

impl ScoredAnalysis {
    pub fn empty() -> Self {
        Self::default()
    }
}

#[derive(Debug)]
pub struct StrengthAnalyzer {
    visual: Lexicon,
    text: Lexicon,
    config: StrengthConfig,
}

impl StrengthAnalyzer {
    pub fn new(config: &StrengthConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            visual: Lexicon::new(tables::STRENGTH_VISUAL_TERMS)?,
            text: Lexicon::new(tables::STRENGTH_TEXT_TERMS)?,
            config: config.clone(),
        })
    }

    pub fn config(&self) -> &StrengthConfig {
        &self.config
    }

    pub fn analyze(&self, text: Option<&str>) -> ScoredAnalysis {
        let Some(text) = text.filter(|t| !t.is_empty()) else {
            return ScoredAnalysis::empty();
        };
        let lowered = text.to_lowercase();

        let visual_keywords = self.visual.matched(&lowered);
        let text_keywords = self.text.matched(&lowered);
        let (v, t) = (visual_keywords.len(), text_keywords.len());
        let total_keywords = v + t;

        let word_count = text.split_whitespace().count().max(1);
        let density = total_keywords as f64 / word_count as f64;

        let (preference, confidence) = if v > t {
            (Category::Visual, self.confidence(v, density))
        } else if t > v {
            (Category::Text, self.confidence(t, density))
        } else {
            (Category::NoPreference, 0.0)
        };

        tracing::trace!(visual = v, text = t, word_count, confidence, %preference, "scored preference strength");

        ScoredAnalysis { preference, confidence, visual_keywords, text_keywords, total_keywords }
    }

    fn confidence(&self, winning: usize, density: f64) -> f64 {
        let c = &self.config;
        let raw = (c.base + c.per_keyword * winning as f64 + c.density * density).min(c.cap);
        round2(raw).min(c.cap)
    }
}

/// Two-decimal rounding of the exact binary value: 0.825 is stored just
/// below itself and rounds to 0.82, where `(x * 100.0).round()` gives 0.83.
fn round2(x: f64) -> f64 {
    format!("{x:.2}").parse().unwrap_or(x)
}
