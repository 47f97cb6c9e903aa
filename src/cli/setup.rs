//! Shell completion setup instructions.
//!
//! Completions are generated at runtime by `clap_complete::CompleteEnv`, so
//! setup is a single line in the shell's startup file.

use std::env;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
}

impl Shell {
    /// Detect the shell from `$SHELL`.
    pub fn detect() -> Option<Self> {
        env::var("SHELL").ok().and_then(|s| Self::from_path(&s))
    }

    fn from_path(shell: &str) -> Option<Self> {
        match Path::new(shell).file_name()?.to_str()? {
            "bash" => Some(Shell::Bash),
            "zsh" => Some(Shell::Zsh),
            "fish" => Some(Shell::Fish),
            _ => None,
        }
    }

    pub fn rc_file(self) -> &'static str {
        match self {
            Shell::Bash => "~/.bashrc",
            Shell::Zsh => "~/.zshrc",
            Shell::Fish => "~/.config/fish/config.fish",
        }
    }

    pub fn setup_line(self, bin: &str) -> String {
        match self {
            Shell::Bash => format!("source <(COMPLETE=bash {})", bin),
            Shell::Zsh => format!("source <(COMPLETE=zsh {})", bin),
            Shell::Fish => format!("COMPLETE=fish {} | source", bin),
        }
    }
}

/// Print setup instructions for the detected shell, or for all supported
/// shells when detection fails.
pub fn print_completion_instructions(bin: &str) {
    match Shell::detect() {
        Some(shell) => {
            println!("Add this line to {}:\n", shell.rc_file());
            println!("    {}\n", shell.setup_line(bin));
            println!("Then restart your shell. `{} --course <TAB>` completes course ids.", bin);
        }
        None => {
            println!("Could not detect your shell. Add the line for your shell to its startup file:\n");
            for shell in [Shell::Bash, Shell::Zsh, Shell::Fish] {
                println!("  {:<28} {}", shell.rc_file(), shell.setup_line(bin));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_from_path() {
        assert_eq!(Shell::from_path("/bin/bash"), Some(Shell::Bash));
        assert_eq!(Shell::from_path("/usr/local/bin/fish"), Some(Shell::Fish));
        assert_eq!(Shell::from_path("zsh"), Some(Shell::Zsh));
        assert_eq!(Shell::from_path("/bin/tcsh"), None);
    }

    #[test]
    fn test_setup_line() {
        assert_eq!(
            Shell::Fish.setup_line("coursebook"),
            "COMPLETE=fish coursebook | source"
        );
        assert!(Shell::Zsh.setup_line("coursebook").contains("COMPLETE=zsh"));
    }
}
