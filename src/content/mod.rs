//! Content store - the immutable set of knowledge items.
//!
//! Items are defined in YAML topic modules, one module per category, and
//! concatenated in module order at start-up. The store is never mutated after
//! construction; every view works on borrowed slices of it.

mod embedded;
mod error;

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::models::{CategoryMeta, KnowledgeItem, CATEGORIES};

pub use error::ContentError;

/// Read-only collection of knowledge items in insertion order.
#[derive(Debug, Clone, Default)]
pub struct ContentStore {
    items: Vec<KnowledgeItem>,
    index: HashMap<String, usize>,
}

impl ContentStore {
    /// Load the topic modules bundled with the binary.
    pub fn embedded() -> Result<Self, ContentError> {
        let mut items = Vec::new();
        for (module, source) in embedded::MODULES {
            let parsed = parse_module(module, source)?;
            debug!(module, count = parsed.len(), "loaded embedded content module");
            items.extend(parsed);
        }
        let store = Self::from_items(items)?;
        info!(items = store.len(), "content store ready");
        Ok(store)
    }

    /// Load every `*.yaml` module in `dir`, in file-name order.
    pub fn from_dir(dir: &Path) -> Result<Self, ContentError> {
        let pattern = dir.join("*.yaml");
        let mut paths: Vec<_> = glob::glob(&pattern.to_string_lossy())?
            .filter_map(Result::ok)
            .collect();
        paths.sort();

        if paths.is_empty() {
            return Err(ContentError::Empty(dir.to_path_buf()));
        }

        let mut items = Vec::new();
        for path in &paths {
            let source = fs::read_to_string(path).map_err(|source| ContentError::Io {
                path: path.clone(),
                source,
            })?;
            let module = path
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_else(|| path.display().to_string());
            let parsed = parse_module(&module, &source)?;
            debug!(module = %module, count = parsed.len(), "loaded content module");
            items.extend(parsed);
        }

        let store = Self::from_items(items)?;
        info!(items = store.len(), dir = %dir.display(), "content store ready");
        Ok(store)
    }

    /// Build a store from already-constructed items, validating invariants.
    pub fn from_items(items: Vec<KnowledgeItem>) -> Result<Self, ContentError> {
        let mut problems = Vec::new();
        let mut index = HashMap::with_capacity(items.len());

        for (pos, item) in items.iter().enumerate() {
            if item.id.trim().is_empty() {
                problems.push(format!("item #{} has an empty id", pos + 1));
                continue;
            }
            if item.title.trim().is_empty() {
                problems.push(format!("item '{}' has an empty title", item.id));
            }
            if index.insert(item.id.clone(), pos).is_some() {
                problems.push(format!("duplicate item id '{}'", item.id));
            }
        }

        if !problems.is_empty() {
            return Err(ContentError::Invalid(problems));
        }

        Ok(Self { items, index })
    }

    pub fn items(&self) -> &[KnowledgeItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&KnowledgeItem> {
        self.index.get(id).map(|&pos| &self.items[pos])
    }

    /// Category metadata, `all` sentinel first.
    pub fn categories(&self) -> &'static [CategoryMeta] {
        &CATEGORIES
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

fn parse_module(module: &str, source: &str) -> Result<Vec<KnowledgeItem>, ContentError> {
    serde_yaml::from_str(source).map_err(|source| ContentError::Parse {
        module: module.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, Difficulty, ItemType};

    fn item(id: &str, title: &str) -> KnowledgeItem {
        KnowledgeItem {
            id: id.to_string(),
            title: title.to_string(),
            category: Category::Setup,
            item_type: ItemType::Guide,
            description: String::new(),
            code: None,
            explanation: String::new(),
            code_examples: vec![],
            best_practices: vec![],
            common_pitfalls: vec![],
            tags: vec![],
            difficulty: Difficulty::Beginner,
            language: None,
        }
    }

    #[test]
    fn test_embedded_store_loads_and_validates() {
        let store = ContentStore::embedded().unwrap();
        assert!(!store.is_empty());
        assert!(store.get("setup-python-install").is_some());
    }

    #[test]
    fn test_embedded_store_covers_every_category() {
        let store = ContentStore::embedded().unwrap();
        for category in Category::all() {
            assert!(
                store.items().iter().any(|i| i.category == *category),
                "no embedded item for {category}"
            );
        }
    }

    #[test]
    fn test_embedded_module_order_is_preserved() {
        let store = ContentStore::embedded().unwrap();
        assert_eq!(store.items()[0].category, Category::Setup);
        assert_eq!(
            store.items().last().map(|i| i.category),
            Some(Category::Libraries)
        );
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let err = ContentStore::from_items(vec![item("a", "A"), item("a", "Again")]).unwrap_err();
        match err {
            ContentError::Invalid(problems) => {
                assert_eq!(problems, vec!["duplicate item id 'a'".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_all_problems_reported_together() {
        let err = ContentStore::from_items(vec![item("", "A"), item("b", " ")]).unwrap_err();
        match err {
            ContentError::Invalid(problems) => assert_eq!(problems.len(), 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_get_by_id() {
        let store = ContentStore::from_items(vec![item("a", "A"), item("b", "B")]).unwrap();
        assert_eq!(store.get("b").map(|i| i.title.as_str()), Some("B"));
        assert!(store.get("c").is_none());
        assert_eq!(store.categories()[0].value, "all");
    }

    #[test]
    fn test_parse_error_names_module() {
        let err = parse_module("broken", "- id: [").unwrap_err();
        assert!(err.to_string().contains("'broken'"));
    }
}
