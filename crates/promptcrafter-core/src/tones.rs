//! Tone Catalog — the fixed set of tone labels offered to users, grouped by category.
//! Built once on first access and read-only afterwards.

use once_cell::sync::Lazy;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Returned by [`category_for`] when a tone is not in the catalog.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Category name and its tones, in declaration order.
const CATALOG: &[(&str, &[&str])] = &[
    (
        "Professional",
        &[
            "Formal", "Authoritative", "Confident", "Analytical", "Objective",
            "Diplomatic", "Precise", "Respectful", "Informative", "Instructional",
        ],
    ),
    (
        "Persuasive",
        &[
            "Convincing", "Compelling", "Urgent", "Promotional", "Assertive",
            "Motivational", "Inspirational", "Enthusiastic", "Passionate", "Persuasive",
        ],
    ),
    (
        "Conversational",
        &[
            "Casual", "Friendly", "Approachable", "Relatable", "Personable",
            "Warm", "Inviting", "Engaging", "Chatty", "Informal",
        ],
    ),
    (
        "Creative",
        &[
            "Imaginative", "Playful", "Humorous", "Witty", "Quirky",
            "Whimsical", "Entertaining", "Surprising", "Artistic", "Innovative",
        ],
    ),
    (
        "Emotional",
        &[
            "Empathetic", "Compassionate", "Supportive", "Encouraging", "Reassuring",
            "Sympathetic", "Caring", "Sensitive", "Heartfelt", "Sincere",
        ],
    ),
    (
        "Direct",
        &[
            "Straightforward", "Clear", "Concise", "Brief", "Blunt",
            "Candid", "Frank", "Explicit", "Direct", "No-nonsense",
        ],
    ),
    (
        "Descriptive",
        &[
            "Detailed", "Vivid", "Expressive", "Elaborate", "Illustrative",
            "Colorful", "Rich", "Evocative", "Picturesque", "Comprehensive",
        ],
    ),
    (
        "Technical",
        &[
            "Specialized", "Precise", "Factual", "Methodical", "Systematic",
            "Logical", "Detailed", "Accurate", "Thorough", "Rigorous",
        ],
    ),
    (
        "Collaborative",
        &[
            "Inclusive", "Cooperative", "Supportive", "Team-oriented", "Participatory",
            "Unifying", "Collective", "Facilitative", "Accommodating", "Consensus-building",
        ],
    ),
    (
        "Urgent",
        &[
            "Time-sensitive", "Critical", "Immediate", "Pressing", "Crucial",
            "Vital", "Essential", "Imperative", "Expedient", "Priority",
        ],
    ),
];

static CATEGORIES: Lazy<ToneCategories> = Lazy::new(|| ToneCategories {
    entries: CATALOG
        .iter()
        .map(|&(name, tones)| ToneCategory { name, tones })
        .collect(),
});

/// One named group of tones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToneCategory {
    pub name: &'static str,
    pub tones: &'static [&'static str],
}

impl ToneCategory {
    pub fn contains(&self, tone: &str) -> bool {
        self.tones.iter().any(|t| *t == tone)
    }
}

/// Read-only, ordered view of the catalog. Serializes as a JSON object keyed by category
/// name, keeping catalog order.
#[derive(Debug)]
pub struct ToneCategories {
    entries: Vec<ToneCategory>,
}

impl ToneCategories {
    pub fn iter(&self) -> impl Iterator<Item = &ToneCategory> {
        self.entries.iter()
    }

    pub fn get(&self, name: &str) -> Option<&'static [&'static str]> {
        self.entries.iter().find(|c| c.name == name).map(|c| c.tones)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|c| c.name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for ToneCategories {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for category in &self.entries {
            map.serialize_entry(category.name, category.tones)?;
        }
        map.end()
    }
}

/// Category name → tones, in catalog order.
pub fn categories() -> &'static ToneCategories {
    &CATEGORIES
}

/// Every tone of every category, flattened in catalog order. Duplicates across categories
/// (e.g. "Precise") are kept.
pub fn all_tones() -> Vec<&'static str> {
    CATEGORIES
        .iter()
        .flat_map(|c| c.tones.iter().copied())
        .collect()
}

/// First category containing `tone` (exact, case-sensitive), or [`UNCATEGORIZED`].
pub fn category_for(tone: &str) -> &'static str {
    CATEGORIES
        .iter()
        .find(|c| c.contains(tone))
        .map(|c| c.name)
        .unwrap_or(UNCATEGORIZED)
}
