//! System prompts selected by response preference.

use pref_core::Category;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptTemplate {
    pub category: Category,
    pub title: &'static str,
    pub body: &'static str,
}

const ROLE: &str = "You are a Financial Analyst answering finance, market or company questions. \
Your only data source is the *Context* in the user input; never introduce facts, figures or \
interpretations that are not explicitly present in it.";

const VISUAL_BODY: &str = "<Role>
{role}

**This user prefers VISUAL content. Always show BIG CHARTS and GRAPHS first, followed by BRIEF SUMMARY TEXT.**
</Role>

<Task>
Lead with charts built via `graph_generation_tool` from markdown tables of the Context data, then add short supporting text.
</Task>

<Structure>
1. Most impactful chart(s) first, large and prominent.
2. Brief bullet points, key numbers in **bold**, one or two sentences per point.
3. Remaining supporting charts last. Minimise text between charts.
4. Never emit an empty graph block.
</Structure>";

const TEXT_BODY: &str = "<Role>
{role}

**This user prefers DETAILED TEXT content. Give comprehensive explanations and in-depth analysis first, with SMALL SUPPORTING CHARTS as secondary evidence.**
</Role>

<Task>
Write a thorough, well-structured answer grounded in the Context. Use `graph_generation_tool` only to illustrate points already made in the text.
</Task>

<Structure>
1. Detailed introduction and background.
2. Full-paragraph analysis explaining the significance of each figure and trend.
3. Small charts placed after the text they support, each explained.
4. Detailed conclusions and implications.
</Structure>";

const MIXED_BODY: &str = "<Role>
{role}

**This user prefers BALANCED content. Mix charts and detailed explanations with equal emphasis.**
</Role>

<Task>
Integrate charts from `graph_generation_tool` with explanatory text so that each supports the other.
</Task>

<Structure>
1. Brief introduction and context.
2. Key charts, each with an accompanying explanation.
3. Moderate-length paragraphs combined with bullet points.
4. Comprehensive conclusions.
</Structure>";

const DEFAULT_BODY: &str = "<Role>
{role}
</Role>

<Task>
Answer the latest user query from the Context. Use `graph_generation_tool` where numerical data benefits from a chart, and explain what each chart shows.
</Task>";

/// Immutable category -> template table, built once.
#[derive(Debug)]
pub struct PromptRegistry {
    templates: HashMap<Category, PromptTemplate>,
    rendered: HashMap<Category, String>,
}

impl PromptRegistry {
    fn builtin() -> Self {
        let templates: HashMap<Category, PromptTemplate> = [
            (Category::Visual, "Visual-first", VISUAL_BODY),
            (Category::Text, "Text-first", TEXT_BODY),
            (Category::Mixed, "Balanced", MIXED_BODY),
            (Category::NoPreference, "Default", DEFAULT_BODY),
        ]
        .into_iter()
        .map(|(category, title, body)| (category, PromptTemplate { category, title, body }))
        .collect();

        let rendered = templates
            .iter()
            .map(|(category, t)| (*category, t.body.replace("{role}", ROLE)))
            .collect();

        Self { templates, rendered }
    }

    pub fn get(&self, category: Category) -> &PromptTemplate {
        &self.templates[&category]
    }

    /// Full system prompt text with the shared role section filled in.
    pub fn render(&self, category: Category) -> &str {
        &self.rendered[&category]
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

pub static PROMPTS: LazyLock<PromptRegistry> = LazyLock::new(PromptRegistry::builtin);

pub fn prompt_for(category: Category) -> &'static str {
    PROMPTS.render(category)
}

/// Prompt for a stored label. Unknown labels fall back to the default prompt.
pub fn prompt_for_label(label: Option<&str>) -> &'static str {
    let category = Category::from_label(label).unwrap_or_else(|err| {
        tracing::warn!(%err, "unrecognised stored preference, using default prompt");
        Category::NoPreference
    });
    prompt_for(category)
}
