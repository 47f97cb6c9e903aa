//! Error types for catalog lookup, lesson loading, rendering, routing and
//! component registration.
//!
//! Everything except [`RegistryError`] is a runtime condition that the TUI
//! turns into on-screen state. A registry conflict is a build defect and
//! stops startup.

use std::path::PathBuf;
use thiserror::Error;

/// Course catalog construction and lookup failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CatalogError {
    #[error("course not found: {0}")]
    NotFound(String),

    #[error("duplicate course identifier: {0}")]
    DuplicateCourse(String),

    #[error("lesson module {module} is listed under both {first} and {second}")]
    SharedModule {
        module: String,
        first: String,
        second: String,
    },

    #[error("course {course} has no lesson #{index}")]
    SubcourseNotFound { course: String, index: usize },
}

/// A lesson module could not be produced by its loader.
#[derive(Debug, Error)]
pub enum ContentError {
    #[error("lesson module not found: {module}")]
    NotFound { module: String },

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid lesson module {module}: {source}")]
    Parse {
        module: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("lesson loader failed: {0}")]
    Worker(String),
}

/// A lesson module was loaded but could not be turned into blocks.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("unknown component `{name}`")]
    UnknownComponent { name: String },

    #[error("component `{component}` requires prop `{prop}`")]
    MissingProp {
        component: &'static str,
        prop: &'static str,
    },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("no page at {0}")]
    NotFound(String),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("component `{name}` is already registered with a different implementation")]
    Conflict { name: String },
}
