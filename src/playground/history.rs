use std::collections::VecDeque;

use crate::models::constants::HISTORY_CAP;
use crate::models::ExecutionRecord;

/// Bounded execution history, most recent first.
#[derive(Debug, Clone)]
pub struct ExecutionHistory {
    records: VecDeque<ExecutionRecord>,
    cap: usize,
}

impl Default for ExecutionHistory {
    fn default() -> Self {
        Self::with_cap(HISTORY_CAP)
    }
}

impl ExecutionHistory {
    /// A history keeping at most `cap` records (at least one).
    pub fn with_cap(cap: usize) -> Self {
        let cap = cap.max(1);
        Self {
            records: VecDeque::with_capacity(cap),
            cap,
        }
    }

    /// Insert at the front, evicting the oldest record past the cap.
    pub fn push(&mut self, record: ExecutionRecord) -> &ExecutionRecord {
        self.records.push_front(record);
        self.records.truncate(self.cap);
        &self.records[0]
    }

    pub fn latest(&self) -> Option<&ExecutionRecord> {
        self.records.front()
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &ExecutionRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn cap(&self) -> usize {
        self.cap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn record(n: usize) -> ExecutionRecord {
        ExecutionRecord {
            id: format!("exec_{n}"),
            code: String::new(),
            language: "python".to_string(),
            output: n.to_string(),
            errors: None,
            execution_time_ms: 0,
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_most_recent_first() {
        let mut history = ExecutionHistory::default();
        history.push(record(1));
        history.push(record(2));
        assert_eq!(history.latest().map(|r| r.id.as_str()), Some("exec_2"));
        let ids: Vec<_> = history.iter().map(|r| r.id.clone()).collect();
        assert_eq!(ids, vec!["exec_2", "exec_1"]);
    }

    #[test]
    fn test_never_exceeds_cap() {
        let mut history = ExecutionHistory::default();
        for n in 0..25 {
            history.push(record(n));
            assert!(history.len() <= HISTORY_CAP);
        }
        assert_eq!(history.len(), HISTORY_CAP);
        assert_eq!(history.latest().map(|r| r.id.as_str()), Some("exec_24"));
        assert_eq!(history.iter().last().map(|r| r.id.as_str()), Some("exec_15"));
    }

    #[test]
    fn test_clear() {
        let mut history = ExecutionHistory::with_cap(0);
        assert_eq!(history.cap(), 1);
        history.push(record(1));
        history.clear();
        assert!(history.is_empty());
        assert!(history.latest().is_none());
    }
}
