use std::str::FromStr;

use anyhow::Result;
use codespace::commands::{browse, categories, run, search, show, stats, AppContext};
use codespace::completions::{generate_completions, Shell};
use codespace::search::FilterState;
use codespace::view::ViewMode;

use super::types::{Cli, Commands};

pub fn dispatch(cli: Cli) -> Result<()> {
    let Cli {
        config,
        content_dir,
        command,
        ..
    } = cli;

    // Completions need neither config nor content.
    if let Commands::Completions { shell } = &command {
        let shell = Shell::from_str(shell)?;
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate_completions(&mut cmd, shell);
        return Ok(());
    }

    let ctx = AppContext::load(config.as_deref(), content_dir.as_deref())?;

    match command {
        Commands::Search {
            query,
            category,
            difficulty,
            language,
            page,
            list,
            json,
        } => {
            let filters = FilterState {
                query,
                category: category.as_deref().unwrap_or("all").parse()?,
                difficulty: difficulty.as_deref().unwrap_or("all").parse()?,
                language: language.as_deref().unwrap_or("all").parse()?,
            };
            let mode = if list { ViewMode::List } else { ViewMode::Grid };
            search::execute(&ctx, filters, page, mode, json)
        }
        Commands::Show {
            id,
            code_only,
            json,
        } => show::execute(&ctx, &id, code_only, json),
        Commands::Categories => categories::execute(&ctx),
        Commands::Stats => stats::execute(&ctx),
        Commands::Run {
            file,
            language,
            item,
            example,
            no_delay,
            json,
        } => {
            let language = language.map(|l| l.parse()).transpose()?;
            run::execute(&ctx, file, language, item, example, no_delay, json)
        }
        Commands::Browse => browse::run_browse(ctx),
        Commands::Completions { .. } => Ok(()),
    }
}
