//! Simulated playground end to end

use codespace::models::constants::HISTORY_CAP;
use codespace::models::RunLanguage;
use codespace::playground::{default_code, Playground, SimulatedRunner};

#[test]
fn test_python_print_produces_record_at_front() {
    let mut playground = Playground::new(SimulatedRunner::instant(), HISTORY_CAP);
    playground.set_language(RunLanguage::Python);
    playground.set_code("print('hi')");

    let record = playground.execute().clone();
    assert_eq!(record.output, "hi");
    assert!(record.errors.is_none());
    assert_eq!(playground.latest(), Some(&record));
}

#[test]
fn test_history_never_exceeds_cap() {
    let mut playground = Playground::new(SimulatedRunner::instant(), HISTORY_CAP);
    for n in 0..(HISTORY_CAP + 5) {
        playground.execute_snippet(&format!("console.log('run {n}')"), "javascript");
    }
    assert_eq!(playground.history().len(), HISTORY_CAP);
    assert_eq!(
        playground.latest().map(|r| r.output.as_str()),
        Some(format!("run {}", HISTORY_CAP + 4).as_str())
    );
}

#[test]
fn test_unsupported_language_is_reported() {
    let mut playground = Playground::new(SimulatedRunner::instant(), HISTORY_CAP);
    let record = playground.execute_snippet("echo hi", "bash");
    assert_eq!(record.output, "Language not supported for execution");
    assert_eq!(record.language, "bash");
}

#[test]
fn test_starter_programs_have_output() {
    let mut playground = Playground::new(SimulatedRunner::instant(), HISTORY_CAP);
    for &language in RunLanguage::all() {
        playground.set_language(language);
        assert_eq!(playground.code(), default_code(language));
        let record = playground.execute();
        assert!(record.output.contains(language.label()), "{}", record.output);
    }
}
