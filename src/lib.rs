//! # coursebook
//!
//! A course catalog for programming languages and web technologies, with a
//! terminal browser that loads each lesson only when it is opened.
//!
//! ## Features
//!
//! - Static catalog of courses and their ordered lessons
//! - Lessons written as TOML modules built from a small set of components
//! - Explicit component registry handed to the renderer
//! - Background lesson loading; a newer selection always wins
//! - Route table with history and a not-found page
//! - Syntax-highlighted code blocks
//!
//! ## Example
//!
//! ```rust
//! use coursebook::catalog::Catalog;
//! use coursebook::lesson::{BundledLoader, ComponentRegistry, ModuleLoader};
//!
//! let catalog = Catalog::builtin().unwrap();
//! let registry = ComponentRegistry::with_defaults().unwrap();
//!
//! let course = catalog.course("Python").unwrap();
//! let intro = course.subcourse(0).unwrap();
//! assert_eq!(intro.title, "Introduction to Python");
//!
//! let module = BundledLoader.load(&intro.module).unwrap();
//! let lesson = registry.render(&module).unwrap();
//! println!("{}", lesson.to_markdown());
//! ```

/// Course catalog: courses, their lessons, lookup and search.
pub mod catalog;

/// Configuration module for persisting user preferences.
///
/// Provides configuration management for theme choices, UI settings,
/// the content directory and logging.
pub mod config;

pub mod error;

/// Keybindings module for customizable keyboard shortcuts.
///
/// Provides a flexible keybinding system that allows users to customize
/// keyboard shortcuts via configuration files.
pub mod keybindings;

/// Lesson modules, the component registry, loaders and the background
/// resolver.
pub mod lesson;

pub mod logging;

/// Route table and navigation history.
pub mod router;

/// TUI module for the interactive course browser.
pub mod tui;

// Re-export commonly used types for convenience
pub use catalog::{Catalog, CourseId};
pub use config::Config;
pub use lesson::{ComponentRegistry, RenderedLesson};
pub use tui::App;
