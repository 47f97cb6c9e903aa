//! # coursebook
//!
//! A terminal course browser with lazily loaded lessons and syntax-highlighted
//! code.
//!
//! ## Usage
//!
//! Launch the interactive TUI:
//! ```sh
//! coursebook
//! ```
//!
//! Open a lesson directly:
//! ```sh
//! coursebook -r /learn/Python/2
//! ```
//!
//! List the catalog:
//! ```sh
//! coursebook -l
//! ```

mod cli;

use clap::Parser as ClapParser;
use cli::{Cli, OutputFormat};
use color_eyre::Result;
use color_eyre::eyre::eyre;
use coursebook::catalog::{Catalog, Course, SubcourseKey};
use coursebook::error::ContentError;
use coursebook::lesson::{BundledLoader, ComponentRegistry, FsLoader, ModuleLoader};
use coursebook::logging::{self, LogTarget};
use coursebook::tui::ContentWatcher;
use coursebook::{App, Config};
use serde::Serialize;
use std::process;
use std::sync::Arc;

fn main() -> Result<()> {
    color_eyre::install()?;

    // Handle dynamic shell completions
    #[cfg(feature = "unstable-dynamic")]
    clap_complete::CompleteEnv::with_factory(|| {
        use clap::CommandFactory;
        Cli::command()
    })
    .complete();

    let args = Cli::parse();

    if args.setup_completions {
        cli::setup::print_completion_instructions("coursebook");
        return Ok(());
    }

    // Load configuration, CLI flags win. A bad file is reported once
    // logging is up.
    let config_path = Config::config_path();
    let (mut config, config_error) = match config_path.as_deref().map(Config::load_from) {
        Some(Ok(config)) => (config, None),
        Some(Err(e)) => (Config::default(), Some(e)),
        None => (Config::default(), None),
    };
    if let Some(ref theme_name) = args.theme {
        config.ui.theme = theme_name.clone();
    }

    let filter = logging::filter(args.log_level.as_deref(), &config.logging.level);
    let log_file = config.log_file();
    match (args.is_interactive(), log_file.as_deref()) {
        (true, Some(path)) => {
            if let Err(e) = logging::init(filter, LogTarget::File(path)) {
                eprintln!("Warning: could not open log file {}: {}", path.display(), e);
            }
        }
        // No place to log without corrupting the TUI
        (true, None) => {}
        (false, _) => logging::init(filter, LogTarget::Stderr)?,
    }
    if let Some(e) = config_error {
        tracing::warn!("using default settings: {}", e);
    }

    // A conflicting component table is a build defect: stop here
    let registry = ComponentRegistry::with_defaults()?;
    let catalog = Catalog::builtin()?;

    // CLI override is never saved back to config
    let content_dir = args.content_dir.as_deref().or(config.content.root.as_deref());
    let content_root = match content_dir {
        Some(dir) => Some(
            dir.canonicalize()
                .map_err(|e| eyre!("content directory {}: {}", dir.display(), e))?,
        ),
        None => None,
    };
    let loader: Arc<dyn ModuleLoader> = match &content_root {
        Some(root) => Arc::new(FsLoader::new(root)),
        None => Arc::new(BundledLoader),
    };
    tracing::debug!(source = %loader.describe(), "lesson loader ready");

    if !args.is_interactive() {
        return handle_cli_mode(&args, &catalog, &registry, loader.as_ref());
    }

    // Live reload only makes sense for a content directory
    let watcher = content_root.and_then(|root| match ContentWatcher::new(FsLoader::new(root)) {
        Ok(watcher) => Some(watcher),
        Err(e) => {
            tracing::warn!("live reload disabled: {}", e);
            None
        }
    });

    let app = App::new(catalog, Arc::new(registry), loader, config, &args.route)
        .with_config_path(config_path);

    let mut terminal = ratatui::init();
    let result = coursebook::tui::run(&mut terminal, app, watcher);
    ratatui::restore();

    result
}

fn handle_cli_mode(
    args: &Cli,
    catalog: &Catalog,
    registry: &ComponentRegistry,
    loader: &dyn ModuleLoader,
) -> Result<()> {
    if args.check {
        let failed = check_lessons(catalog, registry, loader, args.output)?;
        if failed > 0 {
            process::exit(1);
        }
        return Ok(());
    }

    let course = match args.course.as_deref() {
        Some(id) => match catalog.course(id) {
            Ok(course) => Some(course),
            Err(e) => {
                eprintln!("Error: {}", e);
                eprintln!(
                    "\nKnown courses: {}",
                    catalog
                        .course_ids()
                        .map(|id| id.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                );
                process::exit(1);
            }
        },
        None => None,
    };

    match (course, args.show) {
        (Some(course), Some(number)) => show_lesson(course, number, registry, loader),
        (Some(course), None) => print_course(course, args.output),
        (None, _) => print_catalog(catalog, args.output),
    }
}

fn print_catalog(catalog: &Catalog, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Plain => {
            for course in catalog.courses() {
                println!(
                    "{:<12} {} ({} lessons)",
                    course.id,
                    course.title,
                    course.subcourses.len()
                );
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(catalog.courses())?);
        }
    }
    Ok(())
}

fn print_course(course: &Course, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Plain => {
            println!("{}", course.title);
            for (i, sub) in course.subcourses.iter().enumerate() {
                println!("  {:>2}. {}", i + 1, sub.title);
            }
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(course)?);
        }
    }
    Ok(())
}

fn show_lesson(
    course: &Course,
    number: usize,
    registry: &ComponentRegistry,
    loader: &dyn ModuleLoader,
) -> Result<()> {
    let Some(sub) = number.checked_sub(1).and_then(|i| course.subcourse(i)) else {
        eprintln!(
            "Error: {} has {} lessons, there is no lesson {}",
            course.title,
            course.subcourses.len(),
            number
        );
        process::exit(1);
    };

    let module = loader.load(&sub.module)?;
    let lesson = registry.render(&module)?;
    termimad::MadSkin::default().print_text(&lesson.to_markdown());
    Ok(())
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
enum CheckStatus {
    Ok,
    Missing,
    Error,
}

#[derive(Debug, Serialize)]
struct CheckReport {
    lesson: String,
    title: &'static str,
    module: &'static str,
    status: CheckStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

fn check_one(
    key: SubcourseKey,
    title: &'static str,
    module: coursebook::catalog::ModuleRef,
    registry: &ComponentRegistry,
    loader: &dyn ModuleLoader,
) -> CheckReport {
    let result = loader
        .load(&module)
        .map_err(|e| {
            let status = match e {
                ContentError::NotFound { .. } => CheckStatus::Missing,
                _ => CheckStatus::Error,
            };
            (status, e.to_string())
        })
        .and_then(|m| {
            registry
                .render(&m)
                .map_err(|e| (CheckStatus::Error, e.to_string()))
        });

    let (status, error) = match result {
        Ok(_) => (CheckStatus::Ok, None),
        Err((status, error)) => (status, Some(error)),
    };
    CheckReport {
        lesson: key.to_string(),
        title,
        module: module.as_str(),
        status,
        error,
    }
}

/// Load and render every lesson. Returns how many failed to parse or
/// render; lessons with no module are reported but not counted.
fn check_lessons(
    catalog: &Catalog,
    registry: &ComponentRegistry,
    loader: &dyn ModuleLoader,
    format: OutputFormat,
) -> Result<usize> {
    let reports: Vec<CheckReport> = catalog
        .lessons()
        .map(|(key, sub)| check_one(key, sub.title, sub.module, registry, loader))
        .collect();

    let count = |status: fn(&CheckStatus) -> bool| reports.iter().filter(|r| status(&r.status)).count();
    let ok = count(|s| matches!(s, CheckStatus::Ok));
    let missing = count(|s| matches!(s, CheckStatus::Missing));
    let failed = count(|s| matches!(s, CheckStatus::Error));
    tracing::info!(ok, missing, failed, source = %loader.describe(), "lesson check finished");

    match format {
        OutputFormat::Plain => {
            for report in &reports {
                let tag = match report.status {
                    CheckStatus::Ok => "ok",
                    CheckStatus::Missing => "missing",
                    CheckStatus::Error => "FAIL",
                };
                match &report.error {
                    Some(error) if matches!(report.status, CheckStatus::Error) => {
                        println!("{:<8} {:<16} {}: {}", tag, report.lesson, report.title, error)
                    }
                    _ => println!("{:<8} {:<16} {}", tag, report.lesson, report.title),
                }
            }
            println!(
                "\n{} ok, {} missing, {} failed ({})",
                ok,
                missing,
                failed,
                loader.describe()
            );
        }
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
    }

    Ok(failed)
}
