use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[cfg(feature = "unstable-dynamic")]
use clap_complete::engine::{ArgValueCompleter, CompletionCandidate, ValueCompleter};

#[derive(Parser, Debug)]
#[command(name = "coursebook")]
#[command(version)]
#[command(about = "A terminal course browser for programming languages and web technologies")]
#[command(
    long_about = "coursebook - Browse programming courses and read their lessons in the terminal.\n\n\
    Launch without flags for the interactive browser: pick a course, pick a lesson, and read it\n\
    with syntax-highlighted code. Use flags for CLI mode to list the catalog, print a lesson,\n\
    or check that every lesson module loads.\n\n\
    Examples:\n  \
    coursebook                         # Interactive TUI mode\n  \
    coursebook -r /learn/Python/1      # Open a lesson directly\n  \
    coursebook -l                      # List all courses\n  \
    coursebook -l -c Go                # List the Go lessons\n  \
    coursebook -c Go -s 6              # Print Go lesson 6\n  \
    coursebook --check -o json         # Validate every lesson module\n  \
    coursebook --setup-completions     # Set up shell completions"
)]
pub struct Cli {
    /// Page to open at startup
    ///
    /// Any routable path: /, /learn, /faq, /about, /contact, /auth,
    /// or /learn/<course>/<lesson number> to open a lesson directly.
    #[arg(short = 'r', long = "route", value_name = "PATH", default_value = "/")]
    pub route: String,

    /// Read lesson modules from this directory instead of the built-in bundle
    ///
    /// Modules are looked up as <DIR>/<course>/<Module>.toml. Edits to files in
    /// this directory are reloaded live in the TUI.
    #[arg(long = "content-dir", value_name = "DIR", value_hint = clap::ValueHint::DirPath)]
    pub content_dir: Option<PathBuf>,

    /// Set theme for TUI mode
    ///
    /// Override the saved theme preference. Available themes:
    /// OceanDark, Nord, Dracula, Solarized, Monokai, Gruvbox
    ///
    /// Example: --theme Nord
    #[arg(long = "theme", value_name = "THEME")]
    pub theme: Option<String>,

    /// List the catalog (non-interactive)
    ///
    /// Prints every course with its lesson count. Combine with --course to
    /// list one course's lessons.
    #[arg(short = 'l', long = "list")]
    pub list: bool,

    /// Course identifier, e.g. Python, C#, NextJS
    #[arg(short = 'c', long = "course", value_name = "ID", add = course_completer())]
    pub course: Option<String>,

    /// Render lesson N (1-based) of --course to stdout
    #[arg(short = 's', long = "show", value_name = "N", requires = "course")]
    pub show: Option<usize>,

    /// Load and render every lesson module and report failures
    ///
    /// Lessons without a module are listed as missing. Exits with status 1
    /// if any lesson fails to parse or render.
    #[arg(long = "check")]
    pub check: bool,

    /// Output format for --list and --check
    ///
    ///   plain - Human-readable text (default)
    ///   json  - JSON for scripting
    #[arg(short = 'o', long = "output", default_value = "plain")]
    pub output: OutputFormat,

    /// Log filter, e.g. debug or coursebook=trace
    ///
    /// COURSEBOOK_LOG takes precedence when set.
    #[arg(long = "log-level", value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Print shell completion setup instructions
    #[arg(long = "setup-completions")]
    pub setup_completions: bool,
}

impl Cli {
    /// True when no flag asks for a non-interactive mode.
    pub fn is_interactive(&self) -> bool {
        !self.list && !self.check && self.show.is_none() && self.course.is_none()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    Plain,
    /// JSON output
    Json,
}

#[cfg(feature = "unstable-dynamic")]
fn course_completer() -> ArgValueCompleter {
    use coursebook::catalog::CourseId;
    use std::ffi::OsStr;
    use strum::IntoEnumIterator;

    struct CourseCompleter;

    impl ValueCompleter for CourseCompleter {
        fn complete(&self, current: &OsStr) -> Vec<CompletionCandidate> {
            let prefix = current.to_string_lossy().to_lowercase();
            CourseId::iter()
                .map(|id| id.as_str())
                .filter(|id| id.to_lowercase().starts_with(&prefix))
                .map(CompletionCandidate::new)
                .collect()
        }
    }

    ArgValueCompleter::new(CourseCompleter)
}

#[cfg(not(feature = "unstable-dynamic"))]
fn course_completer() -> clap::builder::ValueHint {
    clap::ValueHint::Other
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_interactive() {
        let cli = Cli::try_parse_from(["coursebook"]).unwrap();
        assert_eq!(cli.route, "/");
        assert_eq!(cli.output, OutputFormat::Plain);
        assert!(cli.is_interactive());
    }

    #[test]
    fn test_show_requires_course() {
        assert!(Cli::try_parse_from(["coursebook", "--show", "1"]).is_err());

        let cli = Cli::try_parse_from(["coursebook", "-c", "Go", "-s", "6"]).unwrap();
        assert_eq!(cli.course.as_deref(), Some("Go"));
        assert_eq!(cli.show, Some(6));
        assert!(!cli.is_interactive());
    }

    #[test]
    fn test_check_with_json_output() {
        let cli = Cli::try_parse_from(["coursebook", "--check", "-o", "json"]).unwrap();
        assert!(cli.check);
        assert_eq!(cli.output, OutputFormat::Json);
    }
}
