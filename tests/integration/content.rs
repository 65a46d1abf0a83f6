//! Content loading from directories

use std::fs;

use codespace::content::{ContentError, ContentStore};
use codespace::models::Category;
use tempfile::TempDir;

const MODULE: &str = r#"
- id: venv-basics
  title: Virtual Environments
  category: setup
  type: guide
  description: Isolate project dependencies
  explanation: A venv keeps packages per project.
  tags: [python, venv]
  difficulty: beginner
  language: python
"#;

#[test]
fn test_bundled_content_loads() {
    let store = ContentStore::embedded().expect("Failed to load bundled content");
    assert!(!store.is_empty());
    for category in Category::all() {
        assert!(
            store.items().iter().any(|i| i.category == *category),
            "no bundled items for {category}"
        );
    }
}

#[test]
fn test_bundled_content_keeps_module_order() {
    let store = ContentStore::embedded().expect("Failed to load bundled content");
    assert_eq!(store.len(), 37);

    let ids: Vec<&str> = store.items().iter().map(|i| i.id.as_str()).collect();
    let position = |id: &str| ids.iter().position(|x| *x == id).expect("bundled id");
    assert!(position("aws-ec2-setup") < position("aws-s3-storage"));
    assert!(position("aws-s3-storage") < position("aws-lambda-functions"));
    assert!(position("frameworks-express-routing") < position("api-python-flask-crud-complete"));
    assert!(position("rag-vector-search") < position("ml-basic-models"));
}

#[test]
fn test_from_dir_reads_yaml_modules() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(dir.path().join("setup.yaml"), MODULE).expect("Failed to write module");

    let store = ContentStore::from_dir(dir.path()).expect("Failed to load dir");
    assert_eq!(store.len(), 1);
    let item = store.get("venv-basics").expect("item should be indexed");
    assert_eq!(item.category, Category::Setup);
    assert!(item.code.is_none());
}

#[test]
fn test_empty_dir_is_an_error() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let err = ContentStore::from_dir(dir.path()).unwrap_err();
    assert!(matches!(err, ContentError::Empty(_)));
}

#[test]
fn test_duplicate_ids_across_modules_are_rejected() {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(dir.path().join("a.yaml"), MODULE).expect("Failed to write module");
    fs::write(dir.path().join("b.yaml"), MODULE).expect("Failed to write module");

    let err = ContentStore::from_dir(dir.path()).unwrap_err();
    assert!(matches!(err, ContentError::Invalid(_)));
}
