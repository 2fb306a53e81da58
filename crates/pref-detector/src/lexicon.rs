//! Whole-word vocabulary matching.

use pref_core::Result;
use regex::Regex;

struct Term {
    word: String,
    re: Regex,
}

/// Ordered, immutable term list for one category.
///
/// Multi-word terms ("pie chart") match as one boundary-delimited phrase;
/// single words never match inside a larger word ("charting" is not "chart").
pub struct Lexicon {
    terms: Vec<Term>,
}

impl Lexicon {
    pub fn new<I, S>(terms: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let terms = terms
            .into_iter()
            .map(|t| -> Result<Term> {
                let word = t.as_ref().to_lowercase();
                let re = Regex::new(&format!(r"\b{}\b", regex::escape(&word)))?;
                Ok(Term { word, re })
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { terms })
    }

    /// Total occurrences of every term. Expects lowercased text.
    pub fn count(&self, text: &str) -> u32 {
        self.terms.iter().map(|t| t.re.find_iter(text).count() as u32).sum()
    }

    /// Terms present at least once, in table order. Expects lowercased text.
    pub fn matched(&self, text: &str) -> Vec<String> {
        self.terms
            .iter()
            .filter(|t| t.re.is_match(text))
            .map(|t| t.word.clone())
            .collect()
    }

    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.terms.iter().map(|t| t.word.as_str())
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl std::fmt::Debug for Lexicon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.terms()).finish()
    }
}
