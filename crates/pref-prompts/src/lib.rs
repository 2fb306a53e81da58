//! Consumers of a detected response preference.
//!
//! - `templates` — category -> system prompt registry
//! - `metadata` — `<UserMetaData>` block rendering and preference extraction
//! - `display` — human-readable labels for settings screens

pub mod display;
pub mod metadata;
pub mod templates;

pub use display::{badge_class, describe};
pub use metadata::{extract_preference, preference_line, UserMetadata};
pub use templates::{prompt_for, prompt_for_label, PromptRegistry, PromptTemplate, PROMPTS};

use pref_core::Category;

/// System prompt for the preference recorded in a metadata block.
pub fn prompt_for_metadata(metadata: &str) -> &'static str {
    prompt_for(extract_preference(metadata))
}

/// Prompt for freshly classified personalization text.
pub fn prompt_for_text(text: Option<&str>) -> (Category, &'static str) {
    let category = pref_detector::classify(text).preference;
    (category, prompt_for(category))
}
