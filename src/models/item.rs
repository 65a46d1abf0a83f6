//! Knowledge item records and their closed tag sets.

use serde::{Deserialize, Serialize};

/// A worked code example attached to a knowledge item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeExample {
    pub title: String,
    pub code: String,
    /// Free-form language tag (e.g. "python", "dockerfile"); not restricted to [`Language`].
    pub language: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
}

/// One topic record of the knowledge base.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnowledgeItem {
    pub id: String,
    pub title: String,
    pub category: Category,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    pub explanation: String,
    #[serde(default)]
    pub code_examples: Vec<CodeExample>,
    #[serde(default)]
    pub best_practices: Vec<String>,
    #[serde(default)]
    pub common_pitfalls: Vec<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub difficulty: Difficulty,
    /// `None` means the item is language-agnostic.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<Language>,
}

impl KnowledgeItem {
    /// Whether the item carries any runnable-looking code (primary or examples).
    pub fn has_code(&self) -> bool {
        self.code.is_some() || !self.code_examples.is_empty()
    }
}

/// Topic category. The set is closed; see [`crate::models::category::CATEGORIES`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Setup,
    Packages,
    Dsa,
    Oop,
    Frameworks,
    Database,
    Realtime,
    Async,
    DataHandling,
    Templates,
    Production,
    Docker,
    Aws,
    Ai,
    Libraries,
}

impl Category {
    /// All categories in metadata order.
    pub fn all() -> &'static [Category] {
        &[
            Category::Setup,
            Category::Packages,
            Category::Dsa,
            Category::Oop,
            Category::Frameworks,
            Category::Database,
            Category::Realtime,
            Category::Async,
            Category::DataHandling,
            Category::Templates,
            Category::Production,
            Category::Docker,
            Category::Aws,
            Category::Ai,
            Category::Libraries,
        ]
    }

    /// The tag used in content files and on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Setup => "setup",
            Category::Packages => "packages",
            Category::Dsa => "dsa",
            Category::Oop => "oop",
            Category::Frameworks => "frameworks",
            Category::Database => "database",
            Category::Realtime => "realtime",
            Category::Async => "async",
            Category::DataHandling => "data-handling",
            Category::Templates => "templates",
            Category::Production => "production",
            Category::Docker => "docker",
            Category::Aws => "aws",
            Category::Ai => "ai",
            Category::Libraries => "libraries",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Category::all()
            .iter()
            .copied()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| {
                let accepted: Vec<&str> = Category::all().iter().map(|c| c.as_str()).collect();
                anyhow::anyhow!("Invalid category: {s}. Use one of: {}", accepted.join(", "))
            })
    }
}

/// Kind of knowledge item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemType {
    Concept,
    Snippet,
    Algorithm,
    Pattern,
    Guide,
    Comparison,
    Command,
}

impl ItemType {
    pub fn all() -> &'static [ItemType] {
        &[
            ItemType::Concept,
            ItemType::Snippet,
            ItemType::Algorithm,
            ItemType::Pattern,
            ItemType::Guide,
            ItemType::Comparison,
            ItemType::Command,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ItemType::Concept => "concept",
            ItemType::Snippet => "snippet",
            ItemType::Algorithm => "algorithm",
            ItemType::Pattern => "pattern",
            ItemType::Guide => "guide",
            ItemType::Comparison => "comparison",
            ItemType::Command => "command",
        }
    }
}

impl std::fmt::Display for ItemType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Difficulty level. Ordered: beginner < intermediate < advanced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn all() -> &'static [Difficulty] {
        &[
            Difficulty::Beginner,
            Difficulty::Intermediate,
            Difficulty::Advanced,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Difficulty {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            _ => anyhow::bail!(
                "Invalid difficulty: {s}. Use: beginner, intermediate, advanced"
            ),
        }
    }
}

/// Language track of an item.
///
/// `Both` is a sentinel for content that applies to the Python and the
/// JavaScript track at once; it satisfies every specific language filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Python,
    Javascript,
    Bash,
    Dockerfile,
    Yaml,
    Nginx,
    Both,
}

impl Language {
    pub fn all() -> &'static [Language] {
        &[
            Language::Python,
            Language::Javascript,
            Language::Bash,
            Language::Dockerfile,
            Language::Yaml,
            Language::Nginx,
            Language::Both,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Javascript => "javascript",
            Language::Bash => "bash",
            Language::Dockerfile => "dockerfile",
            Language::Yaml => "yaml",
            Language::Nginx => "nginx",
            Language::Both => "both",
        }
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = match s.trim().to_lowercase().as_str() {
            "js" => "javascript".to_string(),
            "py" => "python".to_string(),
            other => other.to_string(),
        };
        Language::all()
            .iter()
            .copied()
            .find(|l| l.as_str() == wanted)
            .ok_or_else(|| {
                anyhow::anyhow!(
                    "Invalid language: {s}. Use: python, javascript, bash, dockerfile, yaml, nginx, both"
                )
            })
    }
}
