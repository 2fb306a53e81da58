//! Built-in vocabulary and phrase tables.
//!
//! Terms are matched whole-word against lowercased text. Phrase patterns are
//! `(name, regex)` pairs; `.` never crosses a newline.

pub const VISUAL_TERMS: &[&str] = &[
    "chart", "charts", "graph", "graphs", "visual", "visuals",
    "diagram", "diagrams", "plot", "plots", "visualization",
    "visualizations", "graphic", "graphics", "image", "images",
    "figure", "figures", "infographic", "infographics",
    "dashboard", "dashboards", "map", "maps", "timeline",
    "timelines", "flowchart", "flowcharts", "pie chart",
    "bar chart", "line chart", "scatter plot", "heatmap",
    "treemap", "candlestick", "histogram", "big charts",
    "large graphs", "prominent visuals",
];

pub const TEXT_TERMS: &[&str] = &[
    "text", "explanation", "explanations", "detail", "details",
    "detailed", "description", "descriptions", "narrative",
    "narratives", "summary", "summaries", "analysis",
    "analyses", "report", "reports", "breakdown",
    "breakdowns", "insight", "insights", "commentary",
    "commentaries", "discussion", "discussions",
    "elaborate", "elaboration", "comprehensive",
    "thorough", "in-depth", "written", "textual",
    "verbal", "prose", "paragraph", "paragraphs",
    "bullet point", "bullet points", "list", "lists",
];

pub const MIXED_TERMS: &[&str] = &[
    "both", "balanced", "combination", "mix", "mixed",
    "balance", "together", "and", "plus", "along with",
    "as well as", "combined", "integrate", "blend",
];

/// Reduced vocabulary for the keyword-density estimate.
pub const STRENGTH_VISUAL_TERMS: &[&str] = &[
    "chart", "charts", "graph", "graphs", "visual", "visuals",
    "diagram", "diagrams", "plot", "plots", "visualization",
    "graphic", "graphics", "dashboard", "map", "timeline",
];

pub const STRENGTH_TEXT_TERMS: &[&str] = &[
    "text", "explanation", "explanations", "detail", "details",
    "detailed", "description", "analysis", "report", "summary",
    "elaborate", "comprehensive", "thorough", "in-depth",
];

pub const VISUAL_PHRASES: &[(&str, &str)] = &[
    ("verb-size-noun", r"\b(?:prefer|like|want|need|show me|give me|display).{0,20}(?:big|large|prominent).{0,10}(?:chart|graph|visual)"),
    ("size-noun", r"\b(?:big|large|prominent).{0,10}(?:chart|graph|visual)"),
    ("verb-noun", r"\b(?:prefer|like|want|need|show me|give me|display).{0,20}(?:chart|graph|visual)"),
    ("noun-verb", r"\b(?:chart|graph|visual).{0,20}(?:prefer|like|want|need|better)"),
    ("role", r"\bvisual\w*\s+(?:person|learner|type)"),
    ("see-noun", r"\bsee.{0,10}(?:chart|graph|visual)"),
    ("show-noun", r"\bshow.{0,10}(?:chart|graph|visual)"),
    ("comparison", r"\b(?:more|less).{0,10}(?:chart|graph|visual)"),
    ("visualize", r"\bvisualize\b"),
    ("dashboard", r"\bdashboard\b"),
];

pub const TEXT_PHRASES: &[(&str, &str)] = &[
    ("verb-depth-noun", r"\b(?:prefer|like|want|need|give me|show me).{0,20}(?:detailed|comprehensive|thorough).{0,10}(?:text|explanation|detail)"),
    ("depth-noun", r"\b(?:detailed|comprehensive|thorough).{0,10}(?:text|explanation|detail)"),
    ("verb-noun", r"\b(?:prefer|like|want|need|give me|show me).{0,20}(?:text|explanation|detail)"),
    ("noun-verb", r"\b(?:text|explanation|detail).{0,20}(?:prefer|like|want|need|better)"),
    ("role", r"\btext\w*\s+(?:person|learner|type)"),
    ("read-noun", r"\bread.{0,10}(?:text|explanation|detail)"),
    ("explain-detail", r"\bexplain.{0,10}(?:detail|thorough)"),
    ("comparison", r"\b(?:more|less).{0,20}(?:text|explanation|detail)"),
    ("contrast", r"\bbut.{0,10}(?:prefer|like).{0,10}(?:text|explanation|detail)"),
];

pub const MIXED_PHRASES: &[(&str, &str)] = &[
    ("both-visual-text", r"\b(?:both|combination|mix|balance).{0,20}(?:chart|graph|visual).{0,20}(?:text|explanation|detail)"),
    ("both-text-visual", r"\b(?:both|combination|mix|balance).{0,20}(?:text|explanation|detail).{0,20}(?:chart|graph|visual)"),
    ("visual-junction-text", r"\b(?:chart|graph|visual).{0,20}(?:and|plus|with).{0,20}(?:text|explanation|detail)"),
    ("text-junction-visual", r"\b(?:text|explanation|detail).{0,20}(?:and|plus|with).{0,20}(?:chart|graph|visual)"),
    ("balanced-approach", r"\bbalanced.{0,20}(?:approach|content|response)"),
    ("mix-of", r"\bmix.{0,20}of.{0,20}(?:visual|text)"),
    ("combine", r"\bcombine.{0,20}(?:visual|text)"),
    ("integrate", r"\bintegrate.{0,20}(?:chart|graph|visual).{0,20}(?:text|explanation)"),
];
