//! Playground execution records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Languages the playground accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunLanguage {
    Python,
    Javascript,
    Java,
}

impl RunLanguage {
    pub fn all() -> &'static [RunLanguage] {
        &[RunLanguage::Python, RunLanguage::Javascript, RunLanguage::Java]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RunLanguage::Python => "python",
            RunLanguage::Javascript => "javascript",
            RunLanguage::Java => "java",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RunLanguage::Python => "Python",
            RunLanguage::Javascript => "JavaScript",
            RunLanguage::Java => "Java",
        }
    }

    /// Cycle to the next language (used by the TUI language toggle).
    pub fn next(&self) -> RunLanguage {
        match self {
            RunLanguage::Python => RunLanguage::Javascript,
            RunLanguage::Javascript => RunLanguage::Java,
            RunLanguage::Java => RunLanguage::Python,
        }
    }

    /// Map a free-form snippet language tag to a run language, if supported.
    pub fn from_tag(tag: &str) -> Option<RunLanguage> {
        match tag.trim().to_lowercase().as_str() {
            "python" | "py" => Some(RunLanguage::Python),
            "javascript" | "js" | "node" => Some(RunLanguage::Javascript),
            "java" => Some(RunLanguage::Java),
            _ => None,
        }
    }
}

impl std::fmt::Display for RunLanguage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RunLanguage {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RunLanguage::from_tag(s)
            .ok_or_else(|| anyhow::anyhow!("Unsupported run language: {s}. Use: python, javascript, java"))
    }
}

/// Result of one simulated playground run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionRecord {
    pub id: String,
    pub code: String,
    /// Language tag the run was requested with.
    pub language: String,
    pub output: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<String>,
    /// Wall-clock time including the simulated latency.
    pub execution_time_ms: u64,
    pub timestamp: DateTime<Utc>,
}

impl ExecutionRecord {
    pub fn is_error(&self) -> bool {
        self.errors.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag() {
        assert_eq!(RunLanguage::from_tag("Python"), Some(RunLanguage::Python));
        assert_eq!(RunLanguage::from_tag("js"), Some(RunLanguage::Javascript));
        assert_eq!(RunLanguage::from_tag("java"), Some(RunLanguage::Java));
        assert_eq!(RunLanguage::from_tag("bash"), None);
    }

    #[test]
    fn test_next_cycles_through_all() {
        let mut lang = RunLanguage::Python;
        for _ in 0..RunLanguage::all().len() {
            lang = lang.next();
        }
        assert_eq!(lang, RunLanguage::Python);
    }

    #[test]
    fn test_record_error_flag() {
        let record = ExecutionRecord {
            id: "exec_1".to_string(),
            code: String::new(),
            language: "python".to_string(),
            output: String::new(),
            errors: Some("Execution error: boom".to_string()),
            execution_time_ms: 0,
            timestamp: Utc::now(),
        };
        assert!(record.is_error());
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"errors\""));
    }
}
