//! Category metadata used by filter controls and the browse-by-category panel.

use serde::Serialize;

use super::item::Category;

/// Value of the synthetic "no filter" entry.
pub const ALL_VALUE: &str = "all";

/// A `{value, label}` pair for a category control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryMeta {
    pub value: &'static str,
    pub label: &'static str,
    /// `None` only for the `all` sentinel.
    #[serde(skip)]
    pub category: Option<Category>,
}

impl CategoryMeta {
    pub fn is_all(&self) -> bool {
        self.category.is_none()
    }
}

const fn meta(category: Category, value: &'static str, label: &'static str) -> CategoryMeta {
    CategoryMeta {
        value,
        label,
        category: Some(category),
    }
}

/// Category metadata, `all` sentinel first, then every category in display order.
pub const CATEGORIES: [CategoryMeta; 16] = [
    CategoryMeta {
        value: ALL_VALUE,
        label: "All Categories",
        category: None,
    },
    meta(Category::Setup, "setup", "Setup & Startup"),
    meta(Category::Packages, "packages", "Package Management"),
    meta(Category::Dsa, "dsa", "DSA Basics"),
    meta(Category::Oop, "oop", "Object-Oriented Programming"),
    meta(Category::Frameworks, "frameworks", "Framework Usage"),
    meta(Category::Database, "database", "Database Integration"),
    meta(Category::Realtime, "realtime", "Real-Time Communication"),
    meta(Category::Async, "async", "Async & Threading"),
    meta(Category::DataHandling, "data-handling", "Data Handling"),
    meta(Category::Templates, "templates", "Template Engines"),
    meta(Category::Production, "production", "Production Deployment"),
    meta(Category::Docker, "docker", "Docker Integration"),
    meta(Category::Aws, "aws", "AWS Deployment"),
    meta(Category::Ai, "ai", "AI/ML & RAG"),
    meta(Category::Libraries, "libraries", "Common Libraries"),
];

/// Display label for a category.
pub fn label_for(category: Category) -> &'static str {
    CATEGORIES
        .iter()
        .find(|m| m.category == Some(category))
        .map(|m| m.label)
        .unwrap_or_else(|| category.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_covers_every_category_once() {
        assert!(CATEGORIES[0].is_all());
        for category in Category::all() {
            let hits = CATEGORIES
                .iter()
                .filter(|m| m.category == Some(*category))
                .count();
            assert_eq!(hits, 1, "{category} listed {hits} times");
        }
    }

    #[test]
    fn test_metadata_values_match_tags() {
        for m in CATEGORIES.iter().skip(1) {
            assert_eq!(m.value, m.category.unwrap().as_str());
        }
    }

    #[test]
    fn test_label_for() {
        assert_eq!(label_for(Category::Ai), "AI/ML & RAG");
        assert_eq!(label_for(Category::DataHandling), "Data Handling");
    }
}
