//! `codespace run` - simulated playground execution.

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use colored::Colorize;

use super::display::print_execution;
use super::AppContext;
use crate::models::{KnowledgeItem, RunLanguage};
use crate::playground::{default_code, Playground, SimulatedRunner};

const BANNER: &str =
    "Simulated run: output is synthesised from print statements, no code is executed.";

/// Source text and the language tag it will be run as.
#[derive(Debug, PartialEq, Eq)]
pub struct RunInput {
    pub code: String,
    pub tag: String,
}

pub fn execute(
    ctx: &AppContext,
    file: Option<PathBuf>,
    language: Option<RunLanguage>,
    item: Option<String>,
    example: Option<usize>,
    no_delay: bool,
    json: bool,
) -> Result<()> {
    let input = match item {
        Some(id) => {
            let Some(item) = ctx.store.get(&id) else {
                bail!("Unknown item: {id}. Use 'codespace search --list' to see item ids");
            };
            snippet_input(item, example, language)?
        }
        None => source_input(file.as_deref(), language)?,
    };

    let runner = if no_delay {
        SimulatedRunner {
            max_source_bytes: ctx.config.max_source_bytes,
            ..SimulatedRunner::instant()
        }
    } else {
        ctx.config.runner()
    };
    let mut playground = Playground::new(runner, ctx.config.history_cap);

    if !json {
        println!("{} {}", "⚠".yellow(), BANNER.dimmed());
        eprintln!("{}", format!("Running {}...", input.tag).dimmed());
    }

    let record = playground.execute_snippet(&input.code, &input.tag);

    if json {
        let rendered =
            serde_json::to_string_pretty(record).context("Failed to serialize execution")?;
        println!("{rendered}");
    } else {
        print_execution(record);
    }

    Ok(())
}

/// Code from a knowledge item: example `n` (1-based) or the primary block.
pub fn snippet_input(
    item: &KnowledgeItem,
    example: Option<usize>,
    language: Option<RunLanguage>,
) -> Result<RunInput> {
    let (code, tag) = match example {
        Some(n) => {
            let Some(example) = n.checked_sub(1).and_then(|i| item.code_examples.get(i)) else {
                bail!(
                    "Item '{}' has {} example(s); --example must be between 1 and {}",
                    item.id,
                    item.code_examples.len(),
                    item.code_examples.len()
                );
            };
            (example.code.clone(), example.language.clone())
        }
        None => {
            let Some(code) = &item.code else {
                bail!("Item '{}' has no primary code; pick one with --example N", item.id);
            };
            let tag = item.language.map_or("text", |l| l.as_str()).to_string();
            (code.clone(), tag)
        }
    };

    Ok(RunInput {
        code,
        tag: language.map(|l| l.as_str().to_string()).unwrap_or(tag),
    })
}

/// Code from a file, stdin (`-` or piped input), or the starter program.
pub fn source_input(file: Option<&Path>, language: Option<RunLanguage>) -> Result<RunInput> {
    let from_path = file
        .filter(|p| *p != Path::new("-"))
        .and_then(language_from_path);
    let language = language.or(from_path).unwrap_or(RunLanguage::Python);

    let code = match file {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        Some(_) => read_stdin()?,
        None if !io::stdin().is_terminal() => read_stdin()?,
        None => default_code(language).to_string(),
    };

    Ok(RunInput {
        code,
        tag: language.as_str().to_string(),
    })
}

fn read_stdin() -> Result<String> {
    let mut code = String::new();
    io::stdin()
        .read_to_string(&mut code)
        .context("Failed to read source from stdin")?;
    Ok(code)
}

/// Run language implied by a file extension.
pub fn language_from_path(path: &Path) -> Option<RunLanguage> {
    match path.extension()?.to_str()? {
        "py" => Some(RunLanguage::Python),
        "js" | "mjs" | "cjs" => Some(RunLanguage::Javascript),
        "java" => Some(RunLanguage::Java),
        _ => None,
    }
}
