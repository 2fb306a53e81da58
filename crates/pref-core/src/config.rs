use crate::error::{PrefError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct DetectorConfig {
    pub phrases: PhraseWeights,
    pub strength: StrengthConfig,
}

/// Flat points added once per matching phrase pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PhraseWeights {
    /// Visual and text phrase tables.
    pub category: u32,
    /// Mixed phrase table.
    pub mixed: u32,
}

impl Default for PhraseWeights {
    fn default() -> Self {
        Self { category: 2, mixed: 3 }
    }
}

/// Coefficients of the keyword-density confidence estimate:
/// `min(cap, base + per_keyword * winning + density * total / words)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StrengthConfig {
    pub base: f64,
    pub per_keyword: f64,
    pub density: f64,
    pub cap: f64,
}

impl Default for StrengthConfig {
    fn default() -> Self {
        Self { base: 0.3, per_keyword: 0.2, density: 0.5, cap: 0.9 }
    }
}

impl DetectorConfig {
    pub fn from_json_str(s: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&raw)
    }

    pub fn validate(&self) -> Result<()> {
        self.phrases.validate()?;
        self.strength.validate()
    }
}

impl PhraseWeights {
    pub fn validate(&self) -> Result<()> {
        if self.category == 0 || self.mixed == 0 {
            tracing::warn!(category = self.category, mixed = self.mixed, "rejecting phrase weights");
            return Err(PrefError::InvalidConfig("phrase weights must be positive".into()));
        }
        Ok(())
    }
}

impl StrengthConfig {
    pub fn validate(&self) -> Result<()> {
        let coefficients = [self.base, self.per_keyword, self.density, self.cap];
        if coefficients.iter().any(|c| !c.is_finite() || *c < 0.0) {
            tracing::warn!(?coefficients, "rejecting strength config");
            return Err(PrefError::InvalidConfig(
                "strength coefficients must be finite and non-negative".into(),
            ));
        }
        if self.cap > 1.0 || self.base > self.cap {
            tracing::warn!(base = self.base, cap = self.cap, "rejecting strength config");
            return Err(PrefError::InvalidConfig(format!(
                "expected 0 <= base ({}) <= cap ({}) <= 1",
                self.base, self.cap
            )));
        }
        Ok(())
    }
}
