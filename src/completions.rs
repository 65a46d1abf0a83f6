//! Shell completion scripts.

use std::io;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use clap::Command;
use clap_complete::{generate, shells};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
}

impl FromStr for Shell {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "bash" => Ok(Shell::Bash),
            "zsh" => Ok(Shell::Zsh),
            "fish" => Ok(Shell::Fish),
            _ => Err(anyhow!(
                "Unsupported shell: {s}. Supported shells: bash, zsh, fish"
            )),
        }
    }
}

/// Write the completion script for `shell` to `out`.
pub fn write_completions(cmd: &mut Command, shell: Shell, out: &mut dyn io::Write) {
    let bin_name = cmd.get_name().to_string();
    match shell {
        Shell::Bash => generate(shells::Bash, cmd, bin_name, out),
        Shell::Zsh => generate(shells::Zsh, cmd, bin_name, out),
        Shell::Fish => generate(shells::Fish, cmd, bin_name, out),
    }
}

pub fn generate_completions(cmd: &mut Command, shell: Shell) {
    write_completions(cmd, shell, &mut io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_from_str() {
        assert_eq!(Shell::from_str("bash").unwrap(), Shell::Bash);
        assert_eq!(Shell::from_str("ZSH").unwrap(), Shell::Zsh);
        assert_eq!(Shell::from_str("Fish").unwrap(), Shell::Fish);
    }

    #[test]
    fn test_shell_from_str_error_message() {
        let err = Shell::from_str("powershell").unwrap_err().to_string();
        assert!(err.contains("Unsupported shell"));
        assert!(err.contains("powershell"));
    }

    #[test]
    fn test_bash_script_mentions_binary() {
        let mut cmd = Command::new("codespace").subcommand(Command::new("search"));
        let mut out = Vec::new();
        write_completions(&mut cmd, Shell::Bash, &mut out);
        let script = String::from_utf8(out).unwrap();
        assert!(script.contains("codespace"));
    }
}
