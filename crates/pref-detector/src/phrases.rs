//! Weighted contextual phrase patterns.

use pref_core::{Category, Result};
use regex::Regex;

#[derive(Debug)]
struct PhrasePattern {
    name: String,
    re: Regex,
}

/// Matched phrase points for one category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhraseHits {
    pub points: u32,
    /// `"<category>:<pattern>"` for each pattern that fired.
    pub signals: Vec<String>,
}

/// Phrase table for one category. Every pattern contributes `weight` at most
/// once per input, however often it matches.
#[derive(Debug)]
pub struct PhraseSet {
    category: Category,
    weight: u32,
    patterns: Vec<PhrasePattern>,
}

impl PhraseSet {
    pub fn new(category: Category, weight: u32, patterns: &[(&str, &str)]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|(name, pattern)| -> Result<PhrasePattern> {
                Ok(PhrasePattern { name: (*name).to_string(), re: Regex::new(pattern)? })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { category, weight, patterns })
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn weight(&self) -> u32 {
        self.weight
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Expects lowercased text.
    pub fn score(&self, text: &str) -> PhraseHits {
        let mut hits = PhraseHits::default();
        for p in self.patterns.iter().filter(|p| p.re.is_match(text)) {
            hits.points += self.weight;
            hits.signals.push(format!("{}:{}", self.category, p.name));
        }
        hits
    }
}
