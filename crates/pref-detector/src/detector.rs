//! Primary classifier: lexicon + phrase scores fed into the decision policy.

use crate::lexicon::Lexicon;
use crate::phrases::PhraseSet;
use crate::tables;
use pref_core::{Category, DetectorConfig, Result, ScoreVector};
use serde::Serialize;

/// Classification result with the scores that produced it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    pub preference: Category,
    pub lexicon: ScoreVector,
    pub phrases: ScoreVector,
    pub total: ScoreVector,
    pub signals: Vec<String>,
}

impl Verdict {
    /// Terminal result for absent or empty input.
    pub fn empty() -> Self {
        Self::default()
    }
}

#[derive(Debug)]
pub struct PreferenceDetector {
    visual: Lexicon,
    text: Lexicon,
    mixed: Lexicon,
    phrase_sets: [PhraseSet; 3],
}

impl PreferenceDetector {
    /// Build from the built-in tables with the configured phrase weights.
    pub fn new(config: &DetectorConfig) -> Result<Self> {
        config.phrases.validate()?;
        let weights = &config.phrases;
        Ok(Self {
            visual: Lexicon::new(tables::VISUAL_TERMS)?,
            text: Lexicon::new(tables::TEXT_TERMS)?,
            mixed: Lexicon::new(tables::MIXED_TERMS)?,
            phrase_sets: [
                PhraseSet::new(Category::Visual, weights.category, tables::VISUAL_PHRASES)?,
                PhraseSet::new(Category::Text, weights.category, tables::TEXT_PHRASES)?,
                PhraseSet::new(Category::Mixed, weights.mixed, tables::MIXED_PHRASES)?,
            ],
        })
    }

    /// Whole-word occurrence counts per category. Expects lowercased text.
    pub fn lexicon_scores(&self, text: &str) -> ScoreVector {
        ScoreVector::new(self.visual.count(text), self.text.count(text), self.mixed.count(text))
    }

    /// Phrase points per category plus the names of every pattern that fired.
    /// Expects lowercased text.
    pub fn phrase_scores(&self, text: &str) -> (ScoreVector, Vec<String>) {
        let mut scores = ScoreVector::default();
        let mut signals = Vec::new();
        for set in &self.phrase_sets {
            let hits = set.score(text);
            scores.bump(set.category(), hits.points);
            signals.extend(hits.signals);
        }
        (scores, signals)
    }

    pub fn classify(&self, text: Option<&str>) -> Verdict {
        let Some(text) = text.filter(|t| !t.is_empty()) else {
            return Verdict::empty();
        };
        let lowered = text.to_lowercase();

        let lexicon = self.lexicon_scores(&lowered);
        let (phrases, signals) = self.phrase_scores(&lowered);
        let total = lexicon + phrases;
        let preference = total.decide();

        tracing::debug!(
            visual = total.visual,
            text = total.text,
            mixed = total.mixed,
            %preference,
            "classified response preference"
        );

        Verdict { preference, lexicon, phrases, total, signals }
    }
}
