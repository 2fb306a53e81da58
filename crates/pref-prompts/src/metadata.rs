//! `<UserMetaData>` block handed to the response generator, and the reverse
//! read of the preference it carries.

use chrono::{DateTime, FixedOffset, SecondsFormat};
use pref_core::Category;
use regex::Regex;
use std::sync::LazyLock;

pub const PREFERENCE_KEY: &str = "User Response Preference:";

static RE_PREFERENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"User Response Preference:[ \t]*(VISUAL|TEXT|MIXED)\b").unwrap());

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserMetadata {
    pub datetime: Option<DateTime<FixedOffset>>,
    pub location: Option<String>,
    pub preference: Category,
}

impl UserMetadata {
    pub fn new(preference: Category) -> Self {
        Self { preference, ..Self::default() }
    }

    pub fn with_datetime(mut self, datetime: DateTime<FixedOffset>) -> Self {
        self.datetime = Some(datetime);
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn render(&self) -> String {
        let mut lines = vec!["<UserMetaData>".to_string()];
        if let Some(dt) = &self.datetime {
            lines.push(format!("- User's current Datetime:{}", dt.to_rfc3339_opts(SecondsFormat::Secs, false)));
        }
        if let Some(location) = &self.location {
            let details = serde_json::json!({ "location": location });
            lines.push(format!("- User's current location details: {details}"));
        }
        lines.push(preference_line(self.preference));
        lines.push("</UserMetaData>".to_string());
        lines.join("\n")
    }
}

pub fn preference_line(category: Category) -> String {
    let value = match category {
        Category::Visual => "VISUAL (prefers big charts, graphs, and visual representations with brief text)",
        Category::Text => "TEXT (prefers detailed explanations and text-based content with small supporting charts)",
        Category::Mixed => "MIXED (prefers balanced charts, graphs and text with equal emphasis)",
        Category::NoPreference => "Not specified",
    };
    format!("- {PREFERENCE_KEY} {value}")
}

/// Read the preference back out of a rendered metadata block.
/// A missing or unrecognised preference line yields `NoPreference`.
pub fn extract_preference(metadata: &str) -> Category {
    let category = RE_PREFERENCE
        .captures(metadata)
        .and_then(|caps| caps.get(1))
        .map(|m| match m.as_str() {
            "VISUAL" => Category::Visual,
            "TEXT" => Category::Text,
            _ => Category::Mixed,
        })
        .unwrap_or_default();
    tracing::debug!(%category, "extracted stored preference");
    category
}
