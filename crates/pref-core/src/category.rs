//! Response-style categories and their external label form.

use crate::error::PrefError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Preferred response style inferred from user text.
///
/// At the JSON boundary this is `"visual" | "text" | "mixed" | null`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    /// Charts and graphs first, brief text.
    Visual,
    /// Detailed prose first, small supporting charts.
    Text,
    /// Equal emphasis on charts and prose.
    Mixed,
    /// No discernible signal.
    #[default]
    NoPreference,
}

impl Category {
    pub const ALL: [Category; 4] = [Self::Visual, Self::Text, Self::Mixed, Self::NoPreference];

    /// External label, `None` for [`Category::NoPreference`].
    pub fn label(&self) -> Option<&'static str> {
        match self {
            Self::Visual => Some("visual"),
            Self::Text => Some("text"),
            Self::Mixed => Some("mixed"),
            Self::NoPreference => None,
        }
    }

    pub fn is_definite(&self) -> bool {
        !matches!(self, Self::NoPreference)
    }

    /// Convert an optional external label. `None` maps to `NoPreference`.
    pub fn from_label(label: Option<&str>) -> Result<Self, PrefError> {
        match label {
            None => Ok(Self::NoPreference),
            Some(s) => s.parse(),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label().unwrap_or("none"))
    }
}

impl FromStr for Category {
    type Err = PrefError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "visual" => Ok(Self::Visual),
            "text" => Ok(Self::Text),
            "mixed" => Ok(Self::Mixed),
            "" | "none" | "null" => Ok(Self::NoPreference),
            _ => Err(PrefError::UnknownCategory(s.to_string())),
        }
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self.label() {
            Some(label) => serializer.serialize_str(label),
            None => serializer.serialize_none(),
        }
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = Option::<String>::deserialize(deserializer)?;
        Category::from_label(label.as_deref()).map_err(de::Error::custom)
    }
}
