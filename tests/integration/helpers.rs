//! Shared fixtures for integration tests

use codespace::content::ContentStore;
use codespace::models::{Category, Difficulty, ItemType, KnowledgeItem, Language};

/// Build a minimal item with the given facets.
pub fn item(
    id: &str,
    category: Category,
    difficulty: Difficulty,
    language: Option<Language>,
) -> KnowledgeItem {
    KnowledgeItem {
        id: id.to_string(),
        title: format!("Topic {id}"),
        category,
        item_type: ItemType::Concept,
        description: format!("Description of {id}"),
        code: None,
        explanation: String::new(),
        code_examples: vec![],
        best_practices: vec![],
        common_pitfalls: vec![],
        tags: vec![id.to_string()],
        difficulty,
        language,
    }
}

/// Item A (setup/beginner/bash), item B (dsa/advanced/python) and a `both` item.
pub fn scenario_store() -> ContentStore {
    ContentStore::from_items(vec![
        item("a", Category::Setup, Difficulty::Beginner, Some(Language::Bash)),
        item("b", Category::Dsa, Difficulty::Advanced, Some(Language::Python)),
        item("shared", Category::Oop, Difficulty::Intermediate, Some(Language::Both)),
    ])
    .expect("Failed to build scenario store")
}

/// `count` python items spread over two categories.
pub fn bulk_items(count: usize) -> Vec<KnowledgeItem> {
    (0..count)
        .map(|n| {
            let category = if n % 2 == 0 { Category::Async } else { Category::Database };
            item(&format!("item-{n:02}"), category, Difficulty::Beginner, Some(Language::Python))
        })
        .collect()
}

pub fn ids<'a>(items: &[&'a KnowledgeItem]) -> Vec<&'a str> {
    items.iter().map(|i| i.id.as_str()).collect()
}
