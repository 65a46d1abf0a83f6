//! Aggregate counts for the browse-by-category panel and the quick stats header.

use serde::Serialize;

use super::filter::FilterState;
use crate::models::{CategoryMeta, Difficulty, KnowledgeItem};

/// Item count for one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub meta: CategoryMeta,
    pub count: usize,
}

/// Count items per category (the `all` sentinel is skipped), sorted by count
/// descending. Ties keep metadata order.
pub fn category_counts(items: &[KnowledgeItem], categories: &[CategoryMeta]) -> Vec<CategoryCount> {
    let mut counts: Vec<CategoryCount> = categories
        .iter()
        .filter_map(|meta| {
            let category = meta.category?;
            Some(CategoryCount {
                meta: *meta,
                count: items.iter().filter(|i| i.category == category).count(),
            })
        })
        .collect();

    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// The category panel is shown only while the user is not already narrowing
/// by text or category, and something matched.
pub fn show_category_panel(filters: &FilterState, result_count: usize) -> bool {
    filters.query.is_empty() && filters.category.is_all() && result_count > 0
}

/// Totals shown above the results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct QuickStats {
    pub total: usize,
    pub beginner: usize,
    pub intermediate: usize,
    pub advanced: usize,
}

impl QuickStats {
    pub fn from_items(items: &[KnowledgeItem]) -> Self {
        items.iter().fold(
            QuickStats {
                total: items.len(),
                ..Default::default()
            },
            |mut acc, item| {
                match item.difficulty {
                    Difficulty::Beginner => acc.beginner += 1,
                    Difficulty::Intermediate => acc.intermediate += 1,
                    Difficulty::Advanced => acc.advanced += 1,
                }
                acc
            },
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, ItemType, CATEGORIES};
    use crate::search::filter::Facet;

    fn item(id: &str, category: Category, difficulty: Difficulty) -> KnowledgeItem {
        KnowledgeItem {
            id: id.to_string(),
            title: id.to_string(),
            category,
            item_type: ItemType::Guide,
            description: String::new(),
            code: None,
            explanation: String::new(),
            code_examples: vec![],
            best_practices: vec![],
            common_pitfalls: vec![],
            tags: vec![],
            difficulty,
            language: None,
        }
    }

    #[test]
    fn test_category_counts_sorted_descending() {
        let items = vec![
            item("a", Category::Dsa, Difficulty::Beginner),
            item("b", Category::Dsa, Difficulty::Beginner),
            item("c", Category::Ai, Difficulty::Advanced),
        ];
        let counts = category_counts(&items, &CATEGORIES);

        assert_eq!(counts.len(), CATEGORIES.len() - 1);
        assert_eq!(counts[0].meta.category, Some(Category::Dsa));
        assert_eq!(counts[0].count, 2);
        assert_eq!(counts[1].meta.category, Some(Category::Ai));
        assert_eq!(counts[1].count, 1);
        // Zero-count categories keep metadata order.
        assert_eq!(counts[2].meta.category, Some(Category::Setup));
        assert!(counts.iter().all(|c| !c.meta.is_all()));
    }

    #[test]
    fn test_category_panel_visibility() {
        let mut filters = FilterState::default();
        assert!(show_category_panel(&filters, 3));
        assert!(!show_category_panel(&filters, 0));

        filters.difficulty = Facet::Only(Difficulty::Advanced);
        assert!(show_category_panel(&filters, 3));

        filters.query = "docker".to_string();
        assert!(!show_category_panel(&filters, 3));

        filters.query.clear();
        filters.category = Facet::Only(Category::Docker);
        assert!(!show_category_panel(&filters, 3));
    }

    #[test]
    fn test_quick_stats() {
        let items = vec![
            item("a", Category::Dsa, Difficulty::Beginner),
            item("b", Category::Dsa, Difficulty::Intermediate),
            item("c", Category::Ai, Difficulty::Advanced),
            item("d", Category::Ai, Difficulty::Advanced),
        ];
        let stats = QuickStats::from_items(&items);
        assert_eq!(
            stats,
            QuickStats {
                total: 4,
                beginner: 1,
                intermediate: 1,
                advanced: 2,
            }
        );
    }
}
