//! Pattern-based output simulation.
//!
//! Nothing is executed. Print statements are pulled out of the source with
//! regular expressions, a few well-known variable names are substituted, and
//! the starter programs' greet/squares idioms are recognised so their
//! transcripts look plausible.

use regex::{Captures, Regex};
use thiserror::Error;

use crate::models::RunLanguage;

/// Failures of a simulated run.
#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("source is {len} bytes, the playground accepts at most {limit}")]
    SourceTooLarge { len: usize, limit: usize },

    #[error("invalid extraction pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Transcript used for tags the playground cannot run.
pub const UNSUPPORTED: &str = "Language not supported for execution";

/// Produce the simulated transcript for `code`.
pub fn simulate(code: &str, language: RunLanguage, max_bytes: usize) -> Result<String, SimulationError> {
    if code.len() > max_bytes {
        return Err(SimulationError::SourceTooLarge {
            len: code.len(),
            limit: max_bytes,
        });
    }

    let output = match language {
        RunLanguage::Python => python(code)?,
        RunLanguage::Javascript => javascript(code)?,
        RunLanguage::Java => java(code)?,
    };

    if output.is_empty() {
        Ok(no_output(language.as_str()))
    } else {
        Ok(output)
    }
}

/// Fallback transcript for a run that printed nothing.
pub fn no_output(language: &str) -> String {
    format!("{language} code executed successfully (no output)")
}

fn substitute(expr: &str, squares: &str) -> String {
    if expr.contains("name") {
        "World".to_string()
    } else if expr.contains("message") {
        "Hello, World!".to_string()
    } else if expr.contains("squares") {
        squares.to_string()
    } else {
        expr.to_string()
    }
}

/// Collect the first capture of every `call` match, one line each.
fn extract(code: &str, call: &Regex, mut render: impl FnMut(&str) -> String) -> String {
    let mut out = String::new();
    for caps in call.captures_iter(code) {
        if let Some(content) = caps.get(1) {
            out.push_str(&render(content.as_str()));
            out.push('\n');
        }
    }
    out
}

fn python(code: &str) -> Result<String, SimulationError> {
    let call = Regex::new(r"print\(([^)]+)\)")?;
    let quotes = Regex::new(r#"f?["'`]"#)?;
    let interpolation = Regex::new(r"\{([^}]+)\}")?;

    let mut out = extract(code, &call, |content| {
        let unquoted = quotes.replace_all(content, "");
        interpolation
            .replace_all(&unquoted, |caps: &Captures| substitute(&caps[1], "[1, 4, 9, 16, 25]"))
            .into_owned()
    });

    if code.contains("def greet") && code.contains("greet(") && !out.contains("Hello") {
        out.insert_str(0, "Hello, World!\n");
    }
    if code.contains("squares = [x**2 for x in") && !out.contains("Squares") {
        out.push_str("Squares: [1, 4, 9, 16, 25]\n");
    }

    Ok(out.trim().to_string())
}

fn javascript(code: &str) -> Result<String, SimulationError> {
    let call = Regex::new(r"console\.log\(([^)]+)\)")?;
    let quotes = Regex::new(r#"[`"']"#)?;
    let interpolation = Regex::new(r"\$\{([^}]+)\}")?;

    let mut out = extract(code, &call, |content| {
        let unquoted = quotes.replace_all(content, "");
        interpolation
            .replace_all(&unquoted, |caps: &Captures| substitute(&caps[1], "1,4,9,16,25"))
            .into_owned()
    });

    if code.contains("function greet") && code.contains("greet(") && !out.contains("Hello") {
        out.insert_str(0, "Hello, World!\n");
    }
    if code.contains(".map(x => x ** 2)") && !out.contains("Squares") {
        out.push_str("Squares: 1,4,9,16,25\n");
    }

    Ok(out.trim().to_string())
}

fn java(code: &str) -> Result<String, SimulationError> {
    let call = Regex::new(r"System\.out\.println?\(([^)]+)\)")?;
    let concat = Regex::new(r"\s*\+\s*")?;

    let mut out = extract(code, &call, |content| {
        let unquoted = content.replace('"', "");
        if unquoted.contains('+') {
            concat.replace_all(&unquoted, "").into_owned()
        } else {
            unquoted
        }
    });

    if code.contains("public static String greet") && !out.contains("Hello") {
        out.insert_str(0, "Hello, Java!\nHello, World!\n");
    }
    if code.contains("num * num") && !out.contains("Squares") {
        out.push_str("Squares: 1 4 9 16 25 \n");
    }

    Ok(out.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::constants::MAX_SOURCE_BYTES;
    use crate::playground::templates::default_code;

    fn run(code: &str, language: RunLanguage) -> String {
        simulate(code, language, MAX_SOURCE_BYTES).unwrap()
    }

    #[test]
    fn test_python_print_literal() {
        assert_eq!(run("print('hi')", RunLanguage::Python), "hi");
    }

    #[test]
    fn test_python_fstring_substitution() {
        assert_eq!(
            run("print(f\"Hi {name}, {squares}, {other}\")", RunLanguage::Python),
            "Hi World, [1, 4, 9, 16, 25], other"
        );
    }

    #[test]
    fn test_python_starter_program() {
        let out = run(default_code(RunLanguage::Python), RunLanguage::Python);
        assert_eq!(out, "Hello, Python!\nmessage\nSquares: [1, 4, 9, 16, 25]");
    }

    #[test]
    fn test_python_greet_without_hello_is_prefixed() {
        let code = "def greet(n):\n    return n\ngreet('x')";
        assert_eq!(run(code, RunLanguage::Python), "Hello, World!");
    }

    #[test]
    fn test_python_squares_idiom_appended() {
        let code = "squares = [x**2 for x in range(1, 6)]";
        assert_eq!(run(code, RunLanguage::Python), "Squares: [1, 4, 9, 16, 25]");
    }

    #[test]
    fn test_javascript_template_literal() {
        assert_eq!(
            run("console.log(`Squares: ${squares}`);", RunLanguage::Javascript),
            "Squares: 1,4,9,16,25"
        );
    }

    #[test]
    fn test_javascript_starter_program() {
        let out = run(default_code(RunLanguage::Javascript), RunLanguage::Javascript);
        assert_eq!(out, "Hello, JavaScript!\nmessage\nSquares: 1,4,9,16,25");
    }

    #[test]
    fn test_java_concatenation_is_collapsed() {
        let code = r#"System.out.println("a" + "b");"#;
        assert_eq!(run(code, RunLanguage::Java), "ab");
    }

    #[test]
    fn test_java_starter_program() {
        // `print(` calls are not extracted; the squares line comes from the idiom rule.
        let out = run(default_code(RunLanguage::Java), RunLanguage::Java);
        assert_eq!(out, "Hello, Java!\nmessage\nSquares: 1 4 9 16 25");
    }

    #[test]
    fn test_empty_transcript_falls_back() {
        assert_eq!(
            run("x = 1", RunLanguage::Python),
            "python code executed successfully (no output)"
        );
        assert_eq!(
            run("", RunLanguage::Java),
            "java code executed successfully (no output)"
        );
    }

    #[test]
    fn test_source_limit() {
        let err = simulate("print('hi')", RunLanguage::Python, 4).unwrap_err();
        assert!(matches!(err, SimulationError::SourceTooLarge { len: 11, limit: 4 }));
    }
}
