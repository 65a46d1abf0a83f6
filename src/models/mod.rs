pub mod category;
pub mod constants;
pub mod execution;
pub mod item;

pub use category::{CategoryMeta, CATEGORIES};
pub use execution::{ExecutionRecord, RunLanguage};
pub use item::{Category, CodeExample, Difficulty, ItemType, KnowledgeItem, Language};
