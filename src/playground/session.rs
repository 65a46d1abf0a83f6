//! Playground session: per-language buffers, the executing flag and history.

use std::collections::HashMap;
use std::sync::mpsc::{self, Receiver};
use std::thread;
use std::time::Instant;

use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use super::history::ExecutionHistory;
use super::runner::CodeRunner;
use super::simulator::UNSUPPORTED;
use super::templates::default_code;
use crate::models::{ExecutionRecord, RunLanguage};

/// Run `code` once and wrap the outcome in a record.
///
/// `tag` is the requested language as written by the caller; tags outside the
/// playground languages produce the unsupported transcript without running.
pub fn run_once<R: CodeRunner + ?Sized>(runner: &R, code: &str, tag: &str) -> ExecutionRecord {
    let started = Instant::now();
    let timestamp = Utc::now();
    let id = record_id();

    let Some(language) = RunLanguage::from_tag(tag) else {
        return ExecutionRecord {
            id,
            code: code.to_string(),
            language: tag.to_string(),
            output: UNSUPPORTED.to_string(),
            errors: None,
            execution_time_ms: elapsed_ms(started),
            timestamp,
        };
    };

    match runner.run(code, language) {
        Ok(output) => {
            let execution_time_ms = elapsed_ms(started);
            info!(%language, execution_time_ms, "execution finished");
            ExecutionRecord {
                id,
                code: code.to_string(),
                language: language.as_str().to_string(),
                output,
                errors: None,
                execution_time_ms,
                timestamp,
            }
        }
        Err(e) => {
            warn!(%language, error = %e, "execution failed");
            ExecutionRecord {
                id,
                code: code.to_string(),
                language: language.as_str().to_string(),
                output: String::new(),
                errors: Some(format!("Execution error: {e}")),
                execution_time_ms: 0,
                timestamp,
            }
        }
    }
}

/// Unique record id; runs can finish within the same millisecond.
fn record_id() -> String {
    format!("exec_{}", Uuid::new_v4().simple())
}

fn elapsed_ms(started: Instant) -> u64 {
    u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX)
}

/// Run on a worker thread; the record arrives on the returned channel.
pub fn spawn_execution<R>(runner: R, code: String, tag: String) -> Receiver<ExecutionRecord>
where
    R: CodeRunner + Send + 'static,
{
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let record = run_once(&runner, &code, &tag);
        // The receiver may be gone if the UI quit mid-run.
        let _ = tx.send(record);
    });
    rx
}

/// Interactive playground state.
pub struct Playground<R> {
    runner: R,
    language: RunLanguage,
    buffers: HashMap<RunLanguage, String>,
    history: ExecutionHistory,
    executing: bool,
}

impl<R: CodeRunner> Playground<R> {
    pub fn new(runner: R, history_cap: usize) -> Self {
        let buffers = RunLanguage::all()
            .iter()
            .map(|lang| (*lang, default_code(*lang).to_string()))
            .collect();
        Self {
            runner,
            language: RunLanguage::Python,
            buffers,
            history: ExecutionHistory::with_cap(history_cap),
            executing: false,
        }
    }

    pub fn language(&self) -> RunLanguage {
        self.language
    }

    /// Switch languages; each language keeps its own buffer.
    pub fn set_language(&mut self, language: RunLanguage) {
        self.language = language;
    }

    /// Source of the current language's buffer.
    pub fn code(&self) -> &str {
        self.buffers
            .get(&self.language)
            .map(String::as_str)
            .unwrap_or_else(|| default_code(self.language))
    }

    pub fn set_code(&mut self, code: impl Into<String>) {
        self.buffers.insert(self.language, code.into());
    }

    /// Restore the current language's starter program and clear output.
    pub fn reset_code(&mut self) {
        self.buffers
            .insert(self.language, default_code(self.language).to_string());
        self.clear_output();
    }

    pub fn clear_output(&mut self) {
        self.history.clear();
    }

    /// Run the current buffer synchronously.
    pub fn execute(&mut self) -> &ExecutionRecord {
        let code = self.code().to_string();
        let tag = self.language.as_str();
        self.execute_snippet(&code, tag)
    }

    /// Run arbitrary code tagged with a free-form language name.
    pub fn execute_snippet(&mut self, code: &str, tag: &str) -> &ExecutionRecord {
        self.executing = true;
        let record = run_once(&self.runner, code, tag);
        self.finish(record)
    }

    /// Store a finished record and clear the executing flag.
    pub fn finish(&mut self, record: ExecutionRecord) -> &ExecutionRecord {
        self.executing = false;
        self.history.push(record)
    }

    /// Give up on a pending run that will never report back.
    ///
    /// Records `reason` as an execution error and clears the executing flag
    /// so the next run can start.
    pub fn abort(&mut self, reason: &str) -> &ExecutionRecord {
        warn!(language = %self.language, reason, "execution aborted");
        let record = ExecutionRecord {
            id: record_id(),
            code: self.code().to_string(),
            language: self.language.as_str().to_string(),
            output: String::new(),
            errors: Some(format!("Execution error: {reason}")),
            execution_time_ms: 0,
            timestamp: Utc::now(),
        };
        self.finish(record)
    }

    pub fn is_executing(&self) -> bool {
        self.executing
    }

    /// Most recent record, shown in the output panel.
    pub fn latest(&self) -> Option<&ExecutionRecord> {
        self.history.latest()
    }

    pub fn history(&self) -> &ExecutionHistory {
        &self.history
    }
}

impl<R: CodeRunner + Clone + Send + 'static> Playground<R> {
    /// Start a background run of the current buffer.
    ///
    /// Returns `None` while another run is pending; the caller passes the
    /// received record to [`Playground::finish`].
    pub fn start(&mut self) -> Option<Receiver<ExecutionRecord>> {
        if self.executing {
            return None;
        }
        self.executing = true;
        Some(spawn_execution(
            self.runner.clone(),
            self.code().to_string(),
            self.language.as_str().to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::constants::HISTORY_CAP;
    use crate::playground::runner::SimulatedRunner;
    use crate::playground::simulator::SimulationError;

    fn playground() -> Playground<SimulatedRunner> {
        Playground::new(SimulatedRunner::instant(), HISTORY_CAP)
    }

    #[derive(Clone)]
    struct FailingRunner;

    impl CodeRunner for FailingRunner {
        fn run(&self, code: &str, _language: RunLanguage) -> Result<String, SimulationError> {
            Err(SimulationError::SourceTooLarge {
                len: code.len(),
                limit: 0,
            })
        }
    }

    #[derive(Clone)]
    struct PanickingRunner;

    impl CodeRunner for PanickingRunner {
        fn run(&self, _code: &str, _language: RunLanguage) -> Result<String, SimulationError> {
            panic!("runner crashed");
        }
    }

    #[test]
    fn test_execute_print_produces_output() {
        let mut pg = playground();
        pg.set_code("print('hi')");
        let record = pg.execute();
        assert!(!record.output.is_empty());
        assert!(record.errors.is_none());
        assert_eq!(record.language, "python");
        assert!(record.id.starts_with("exec_"));
        assert!(!pg.is_executing());
    }

    #[test]
    fn test_buffers_are_per_language() {
        let mut pg = playground();
        pg.set_code("print('edited')");
        pg.set_language(RunLanguage::Java);
        assert_eq!(pg.code(), default_code(RunLanguage::Java));
        pg.set_language(RunLanguage::Python);
        assert_eq!(pg.code(), "print('edited')");
    }

    #[test]
    fn test_reset_restores_template_and_clears_output() {
        let mut pg = playground();
        pg.set_code("print('x')");
        pg.execute();
        pg.reset_code();
        assert_eq!(pg.code(), default_code(RunLanguage::Python));
        assert!(pg.latest().is_none());
    }

    #[test]
    fn test_history_is_capped() {
        let mut pg = playground();
        for _ in 0..15 {
            pg.execute();
        }
        assert_eq!(pg.history().len(), HISTORY_CAP);
    }

    #[test]
    fn test_unsupported_snippet_tag() {
        let mut pg = playground();
        let record = pg.execute_snippet("docker build .", "dockerfile");
        assert_eq!(record.output, UNSUPPORTED);
        assert_eq!(record.language, "dockerfile");
        assert!(!record.is_error());
    }

    #[test]
    fn test_runner_failure_becomes_error_record() {
        let mut pg = Playground::new(FailingRunner, HISTORY_CAP);
        let record = pg.execute();
        assert!(record.output.is_empty());
        assert_eq!(record.execution_time_ms, 0);
        assert!(record
            .errors
            .as_deref()
            .is_some_and(|e| e.starts_with("Execution error: ")));
    }

    #[test]
    fn test_background_run_blocks_second_start() {
        let mut pg = playground();
        let rx = pg.start().unwrap();
        assert!(pg.is_executing());
        assert!(pg.start().is_none());

        let record = rx.recv().unwrap();
        pg.finish(record);
        assert!(!pg.is_executing());
        assert_eq!(pg.history().len(), 1);
    }

    #[test]
    fn test_record_ids_are_unique() {
        let mut pg = playground();
        let first = pg.execute().id.clone();
        let second = pg.execute().id.clone();
        assert_ne!(first, second);
        assert!(second.starts_with("exec_"));
    }

    #[test]
    fn test_abort_after_worker_dies_allows_next_run() {
        let mut pg = Playground::new(PanickingRunner, HISTORY_CAP);
        let rx = pg.start().unwrap();
        assert!(rx.recv().is_err());
        assert!(pg.is_executing());

        let record = pg.abort("worker stopped");
        assert_eq!(record.errors.as_deref(), Some("Execution error: worker stopped"));
        assert!(record.output.is_empty());
        assert!(!pg.is_executing());
        assert_eq!(pg.history().len(), 1);
        assert!(pg.start().is_some());
    }
}
