use pref_core::Category;

pub fn describe(category: Category) -> &'static str {
    match category {
        Category::Visual => "Visual content (big charts, graphs, brief summary text)",
        Category::Text => "Text-based content (detailed explanations, small supporting charts)",
        Category::Mixed => "Balanced content (equal mix of charts, graphs and text)",
        Category::NoPreference => "No specific preference detected",
    }
}

/// CSS utility class for the preference badge.
pub fn badge_class(category: Category) -> &'static str {
    match category {
        Category::Visual => "bg-blue-500",
        Category::Text => "bg-green-500",
        Category::Mixed => "bg-purple-500",
        Category::NoPreference => "bg-gray-400",
    }
}
