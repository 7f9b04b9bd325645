//! Keyword-based listing category suggestion.
//!
//! The title and image file names of a draft listing are folded into one
//! lowercase search string and matched against an ordered rule list. The
//! first rule with any keyword contained in the text wins; when nothing
//! matches the listing is assumed to be accommodation.

use std::fmt;

// ---------------------------------------------------------------------------
// Category slugs
// ---------------------------------------------------------------------------

/// The fixed set of marketplace categories the service can suggest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategorySlug {
    Accommodation,
    Mobility,
    WaterBeachActivities,
}

impl CategorySlug {
    /// All known categories.
    pub const ALL: [CategorySlug; 3] = [
        Self::Accommodation,
        Self::Mobility,
        Self::WaterBeachActivities,
    ];

    /// Slug as used in URLs and on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Accommodation => "accommodation",
            Self::Mobility => "mobility",
            Self::WaterBeachActivities => "water-beach-activities",
        }
    }

    /// Exact, case-sensitive slug lookup. Unknown slugs return `None`.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == slug)
    }
}

impl fmt::Display for CategorySlug {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Rules
// ---------------------------------------------------------------------------

/// One keyword group and the suggestion it produces.
#[derive(Debug, Clone, Copy)]
pub struct CategoryRule {
    pub keywords: &'static [&'static str],
    pub category: CategorySlug,
    pub confidence: f64,
}

impl CategoryRule {
    fn matches(&self, text: &str) -> bool {
        self.keywords.iter().any(|kw| text.contains(*kw))
    }
}

/// Ordered rule list. Evaluated top to bottom; order is observable when a
/// text contains keywords from more than one group.
pub const CATEGORY_RULES: [CategoryRule; 2] = [
    CategoryRule {
        keywords: &["paddle", "kayak", "beach", "water", "surf", "snorkel"],
        category: CategorySlug::WaterBeachActivities,
        confidence: 0.85,
    },
    CategoryRule {
        keywords: &["scooter", "motor", "car", "bike", "bicycle", "vehicle"],
        category: CategorySlug::Mobility,
        confidence: 0.80,
    },
];

/// Category suggested when no rule matches.
pub const DEFAULT_CATEGORY: CategorySlug = CategorySlug::Accommodation;
/// Confidence reported with [`DEFAULT_CATEGORY`].
pub const DEFAULT_CONFIDENCE: f64 = 0.60;

// ---------------------------------------------------------------------------
// Classification
// ---------------------------------------------------------------------------

/// A suggested category with the fixed confidence of the rule that chose it.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct CategorySuggestion {
    pub category: CategorySlug,
    pub confidence: f64,
}

/// Build the lowercase text the rules are matched against:
/// `"{title} {hint1 hint2 ...}"`.
pub fn search_text(title: Option<&str>, image_hints: &[String]) -> String {
    let hints = image_hints.join(" ");
    format!("{} {}", title.unwrap_or_default(), hints).to_lowercase()
}

/// Suggest a category from a listing title and image file names.
pub fn classify(title: Option<&str>, image_hints: &[String]) -> CategorySuggestion {
    let text = search_text(title, image_hints);

    CATEGORY_RULES
        .iter()
        .find(|rule| rule.matches(&text))
        .map(|rule| CategorySuggestion {
            category: rule.category,
            confidence: rule.confidence,
        })
        .unwrap_or(CategorySuggestion {
            category: DEFAULT_CATEGORY,
            confidence: DEFAULT_CONFIDENCE,
        })
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
