use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

const HELP_TEMPLATE: &str = "
 ┌─┐┌─┐┌┬┐┌─┐┌─┐┌─┐┌─┐┌─┐┌─┐
 │  │ │ ││├┤ └─┐├─┘├─┤│  ├┤
 └─┘└─┘─┴┘└─┘└─┘┴  ┴ ┴└─┘└─┘

{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}";

#[derive(Parser)]
#[command(name = "codespace")]
#[command(about = "Programming knowledge base and code playground", long_about = None)]
#[command(version)]
#[command(help_template = HELP_TEMPLATE)]
#[command(subcommand_help_heading = "Commands")]
pub struct Cli {
    /// Config file (defaults to $CODESPACE_CONFIG, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Load knowledge modules from this directory instead of the bundled set
    #[arg(long, global = true)]
    pub content_dir: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Search and filter knowledge items
    Search {
        /// Free-text query matched against title, description and tags
        #[arg(default_value = "")]
        query: String,

        /// Category id (e.g. dsa, docker) or "all"
        #[arg(short, long)]
        category: Option<String>,

        /// Difficulty: beginner, intermediate, advanced or "all"
        #[arg(short, long)]
        difficulty: Option<String>,

        /// Language: python, javascript, bash, dockerfile, yaml, nginx, both or "all"
        #[arg(short, long)]
        language: Option<String>,

        /// Page number (1-based, clamped to the last page)
        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Compact one-line rows instead of cards
        #[arg(long)]
        list: bool,

        /// Print the page as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show one item in full
    Show {
        /// Item id
        id: String,

        /// Print only the primary code block
        #[arg(long)]
        code_only: bool,

        /// Print the item as JSON
        #[arg(long)]
        json: bool,
    },

    /// List categories with item counts
    Categories,

    /// Show item totals by difficulty
    Stats,

    /// Run code in the simulated playground
    Run {
        /// Source file, or "-" for stdin (defaults to the starter program)
        file: Option<PathBuf>,

        /// Language: python, javascript or java
        #[arg(short, long)]
        language: Option<String>,

        /// Run the code of a knowledge item instead of a file
        #[arg(long, conflicts_with = "file")]
        item: Option<String>,

        /// Pick the item's Nth additional example (1-based)
        #[arg(long, requires = "item")]
        example: Option<usize>,

        /// Skip the simulated latency
        #[arg(long)]
        no_delay: bool,

        /// Print the execution record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Open the interactive browser
    Browse,

    /// Generate shell completion script
    Completions {
        /// Shell to generate completions for (bash, zsh, fish)
        shell: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_search_flags() {
        let cli = Cli::try_parse_from([
            "codespace", "search", "docker", "-c", "docker", "-d", "beginner", "-p", "2", "--list",
        ])
        .unwrap();
        match cli.command {
            Commands::Search {
                query,
                category,
                page,
                list,
                ..
            } => {
                assert_eq!(query, "docker");
                assert_eq!(category.as_deref(), Some("docker"));
                assert_eq!(page, 2);
                assert!(list);
            }
            _ => panic!("expected search"),
        }
    }

    #[test]
    fn test_example_requires_item() {
        assert!(Cli::try_parse_from(["codespace", "run", "--example", "1"]).is_err());
        assert!(Cli::try_parse_from(["codespace", "run", "--item", "x", "--example", "1"]).is_ok());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from(["codespace", "stats", "-vv", "--content-dir", "kb"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.content_dir, Some(PathBuf::from("kb")));
    }
}
