//! Default resource library and recommendation blocks.
//!
//! This module provides the built-in coping techniques for the system.

use crate::config::CustomCategory;
use crate::types::*;
use once_cell::sync::Lazy;
use std::collections::{BTreeMap, BTreeSet};

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<ResourceCatalog> = Lazy::new(build_default_catalog);

/// Get a reference to the cached default catalog
pub fn get_default_catalog() -> &'static ResourceCatalog {
    &DEFAULT_CATALOG
}

fn technique(name: &str, description: &str) -> Technique {
    Technique {
        name: name.into(),
        description: description.into(),
    }
}

/// Builds the default catalog
///
/// **Note**: For production use, prefer `get_default_catalog()` which returns a
/// cached reference.
pub fn build_default_catalog() -> ResourceCatalog {
    let mut categories = BTreeMap::new();
    let mut recommendations = BTreeMap::new();

    // ========================================================================
    // Resource Library
    // ========================================================================

    categories.insert(
        "Anxiety".to_string(),
        vec![
            technique(
                "Breathing exercises",
                "Inhale for 4 counts, hold for 7, exhale for 8",
            ),
            technique(
                "Grounding techniques",
                "Name 5 things you can see, 4 you can touch, 3 you can hear, 2 you can smell, 1 you can taste",
            ),
            technique(
                "Progressive muscle relaxation",
                "Tense and release each muscle group from toes to head",
            ),
        ],
    );

    categories.insert(
        "Depression".to_string(),
        vec![
            technique(
                "Behavioral activation",
                "Schedule pleasurable activities even when you don't feel like it",
            ),
            technique(
                "Thought challenging",
                "Identify and challenge negative automatic thoughts",
            ),
            technique(
                "Gratitude journaling",
                "Write down three good things each day",
            ),
        ],
    );

    categories.insert(
        "Stress".to_string(),
        vec![
            technique(
                "Time management",
                "Break tasks into smaller steps, prioritize",
            ),
            technique(
                "Mindfulness meditation",
                "Practice staying present without judgment",
            ),
            technique(
                "Physical exercise",
                "Regular exercise reduces stress hormones",
            ),
        ],
    );

    categories.insert(
        "Mindfulness".to_string(),
        vec![
            technique(
                "Body scan meditation",
                "Focus attention on different parts of your body",
            ),
            technique(
                "Mindful breathing",
                "Pay attention to the sensation of breathing",
            ),
            technique(
                "Loving-kindness meditation",
                "Send wishes for happiness to yourself and others",
            ),
        ],
    );

    // ========================================================================
    // Recommendation Blocks
    // ========================================================================

    recommendations.insert(
        RecommendationCategory::Negative,
        RecommendationBlock {
            headline: "Based on your recent entries, you might find these resources particularly helpful:".into(),
            items: vec![
                technique(
                    "Cognitive Behavioral Therapy (CBT) exercises",
                    "Challenge negative thought patterns",
                ),
                technique(
                    "Behavioral activation",
                    "Schedule enjoyable activities to improve mood",
                ),
                technique(
                    "Mindfulness meditation",
                    "Practice staying present without judgment",
                ),
            ],
        },
    );

    recommendations.insert(
        RecommendationCategory::Positive,
        RecommendationBlock {
            headline: "It's great to see you're doing well! These resources can help maintain positive mental health:".into(),
            items: vec![
                technique(
                    "Gratitude journaling",
                    "Regularly note things you're thankful for",
                ),
                technique(
                    "Preventive practices",
                    "Build resilience through regular self-care",
                ),
                technique(
                    "Community connection",
                    "Engage with supportive communities",
                ),
            ],
        },
    );

    recommendations.insert(
        RecommendationCategory::Neutral,
        RecommendationBlock {
            headline: "These general resources might be helpful for you:".into(),
            items: vec![
                technique(
                    "Stress management techniques",
                    "Breathing exercises, time management",
                ),
                technique("Mood tracking", "Continue monitoring patterns"),
                technique(
                    "Self-compassion practices",
                    "Be kind to yourself during difficult times",
                ),
            ],
        },
    );

    ResourceCatalog {
        categories,
        recommendations,
    }
}

impl ResourceCatalog {
    /// Technique names for a category, or empty if the category is unknown
    pub fn lookup(&self, category: &str) -> Vec<&str> {
        self.techniques(category)
            .iter()
            .map(|t| t.name.as_str())
            .collect()
    }

    /// Full techniques for a category, or empty if the category is unknown
    pub fn techniques(&self, category: &str) -> &[Technique] {
        self.categories
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Known category names
    pub fn categories(&self) -> BTreeSet<&str> {
        self.categories.keys().map(String::as_str).collect()
    }

    pub fn recommendation_block(
        &self,
        category: RecommendationCategory,
    ) -> Option<&RecommendationBlock> {
        self.recommendations.get(&category)
    }

    /// Build a new catalog extended with user-defined categories
    ///
    /// A custom category with the same name as a built-in one replaces it.
    pub fn with_custom(&self, custom: &[CustomCategory]) -> ResourceCatalog {
        let mut extended = self.clone();
        for category in custom {
            let techniques = category
                .techniques
                .iter()
                .map(|t| Technique {
                    name: t.name.clone(),
                    description: t.description.clone().unwrap_or_default(),
                })
                .collect();

            if extended
                .categories
                .insert(category.name.clone(), techniques)
                .is_some()
            {
                tracing::info!("Custom resources replace built-in category '{}'", category.name);
            }
        }
        extended
    }

    /// Validate the catalog for consistency and completeness
    ///
    /// Returns a list of validation errors, or empty Vec if valid.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for (name, techniques) in &self.categories {
            if name.trim().is_empty() {
                errors.push("Catalog has a category with an empty name".to_string());
            }
            if techniques.is_empty() {
                errors.push(format!("Category '{}' has no techniques", name));
            }
            for t in techniques {
                if t.name.trim().is_empty() {
                    errors.push(format!("Category '{}' has a technique with an empty name", name));
                }
            }
        }

        for category in RecommendationCategory::ALL {
            match self.recommendations.get(&category) {
                None => errors.push(format!("No recommendation block for {:?}", category)),
                Some(block) if block.items.is_empty() => {
                    errors.push(format!("Recommendation block for {:?} is empty", category))
                }
                Some(_) => {}
            }
        }

        errors
    }
}
