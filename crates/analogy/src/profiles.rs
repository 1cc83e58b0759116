/// A persona the learner picks to flavor every explanation.
#[derive(Debug, Clone, serde::Serialize)]
pub struct AnalogyProfile {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub icon_emoji: &'static str,
    pub domain_keywords: &'static [&'static str],
    pub example_terms: &'static [&'static str],
}

pub static DEFAULT_PROFILES: &[AnalogyProfile] = &[
    AnalogyProfile {
        id: "chef",
        name: "Chef",
        description: "Cooking and culinary arts",
        icon_emoji: "👨‍🍳",
        domain_keywords: &["cooking", "recipe", "ingredients", "kitchen", "seasoning"],
        example_terms: &["recipe", "ingredients", "mise en place", "sauté", "reduction"],
    },
    AnalogyProfile {
        id: "mechanic",
        name: "Mechanic",
        description: "Automotive and machinery",
        icon_emoji: "🔧",
        domain_keywords: &["engine", "parts", "tools", "repair", "maintenance"],
        example_terms: &["components", "assembly", "troubleshoot", "tune-up", "diagnostics"],
    },
    AnalogyProfile {
        id: "musician",
        name: "Musician",
        description: "Music and sound",
        icon_emoji: "🎵",
        domain_keywords: &["rhythm", "harmony", "melody", "composition", "instrument"],
        example_terms: &["rhythm", "harmony", "composition", "performance", "practice"],
    },
    AnalogyProfile {
        id: "gardener",
        name: "Gardener",
        description: "Plants and gardening",
        icon_emoji: "🌱",
        domain_keywords: &["plants", "soil", "growth", "seeds", "cultivation"],
        example_terms: &["cultivation", "growth", "pruning", "fertilizer", "ecosystem"],
    },
    AnalogyProfile {
        id: "builder",
        name: "Builder",
        description: "Construction and building",
        icon_emoji: "🏗️",
        domain_keywords: &["foundation", "structure", "tools", "blueprint", "construction"],
        example_terms: &["foundation", "framework", "blueprint", "structure", "assembly"],
    },
    AnalogyProfile {
        id: "artist",
        name: "Artist",
        description: "Visual arts and creativity",
        icon_emoji: "🎨",
        domain_keywords: &["canvas", "colors", "composition", "texture", "creativity"],
        example_terms: &["composition", "palette", "technique", "expression", "medium"],
    },
    AnalogyProfile {
        id: "athlete",
        name: "Athlete",
        description: "Sports and fitness",
        icon_emoji: "🏃‍♀️",
        domain_keywords: &["training", "performance", "endurance", "technique", "competition"],
        example_terms: &["training", "performance", "stamina", "technique", "competition"],
    },
    AnalogyProfile {
        id: "teacher",
        name: "Teacher",
        description: "Education and learning",
        icon_emoji: "📚",
        domain_keywords: &["lesson", "knowledge", "understanding", "practice", "learning"],
        example_terms: &["curriculum", "understanding", "practice", "assessment", "growth"],
    },
];

pub fn find_profile(id: &str) -> Option<&'static AnalogyProfile> {
    let id = id.to_lowercase();
    DEFAULT_PROFILES.iter().find(|p| p.id == id)
}
