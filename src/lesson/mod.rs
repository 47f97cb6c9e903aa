//! Lesson modules and their rendering.
//!
//! A lesson module is a TOML document listing the components it is built from:
//!
//! ```toml
//! title = "Introduction to Python"
//!
//! [[component]]
//! name = "Header"
//! title = "Introduction to Python"
//!
//! [[component]]
//! name = "PreCode"
//! language = "python"
//! code = "print('Hello, world!')"
//! ```
//!
//! Modules name components but never import them; the [`ComponentRegistry`]
//! handed to [`ComponentRegistry::render`] decides what each name means.

pub mod components;
pub mod loader;
pub mod registry;
pub mod resolver;

pub use loader::{BundledLoader, FsLoader, ModuleLoader};
pub use registry::{ComponentRegistry, LessonComponent};
pub use resolver::{ContentResolver, Resolution};

use crate::error::ContentError;
use ratatui::text::Line;
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Parsed lesson module.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContentModule {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default, rename = "component")]
    pub components: Vec<ComponentUse>,
}

impl ContentModule {
    /// Parse a module from its TOML source. `module` names the module in errors.
    pub fn parse(module: &str, source: &str) -> Result<Self, ContentError> {
        toml::from_str(source).map_err(|source| ContentError::Parse {
            module: module.to_string(),
            source,
        })
    }
}

/// One component invocation inside a lesson module.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComponentUse {
    pub name: String,

    #[serde(flatten)]
    pub props: Props,
}

/// Content-bearing props shared by every lesson component.
///
/// Each component reads the subset it understands; see
/// [`components`] for which props are required where.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Props {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub text: Option<String>,
    pub paragraphs: Vec<String>,
    pub code: Option<String>,
    pub language: Option<String>,
    pub items: Vec<String>,
    pub ordered: bool,
}

/// A code block and, once the highlighter has run, its styled lines.
#[derive(Debug, Clone, PartialEq)]
pub struct CodeBlock {
    pub language: Option<String>,
    pub source: String,
    highlighted: Option<Vec<Line<'static>>>,
}

impl CodeBlock {
    pub fn new(source: impl Into<String>, language: Option<String>) -> Self {
        Self {
            language: language.filter(|l| !l.trim().is_empty()),
            source: source.into(),
            highlighted: None,
        }
    }

    pub fn is_highlighted(&self) -> bool {
        self.highlighted.is_some()
    }

    pub fn highlighted(&self) -> Option<&[Line<'static>]> {
        self.highlighted.as_deref()
    }

    pub fn set_highlighted(&mut self, lines: Vec<Line<'static>>) {
        self.highlighted = Some(lines);
    }

    pub fn clear_highlighting(&mut self) {
        self.highlighted = None;
    }
}

/// Output unit of a lesson component.
#[derive(Debug, Clone, PartialEq)]
pub enum LessonBlock {
    Heading {
        title: String,
        subtitle: Option<String>,
    },
    Paragraph(String),
    Section {
        title: String,
        paragraphs: Vec<String>,
    },
    Code(CodeBlock),
    List {
        title: Option<String>,
        items: Vec<String>,
        ordered: bool,
    },
}

/// A lesson module after rendering, ready for display.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderedLesson {
    pub title: Option<String>,
    pub blocks: Vec<LessonBlock>,
}

impl RenderedLesson {
    pub fn code_blocks(&self) -> impl Iterator<Item = &CodeBlock> {
        self.blocks.iter().filter_map(|b| match b {
            LessonBlock::Code(code) => Some(code),
            _ => None,
        })
    }

    pub fn code_blocks_mut(&mut self) -> impl Iterator<Item = &mut CodeBlock> {
        self.blocks.iter_mut().filter_map(|b| match b {
            LessonBlock::Code(code) => Some(code),
            _ => None,
        })
    }

    /// Drop highlighting so the next highlight pass starts over (theme change).
    pub fn clear_highlighting(&mut self) {
        for code in self.code_blocks_mut() {
            code.clear_highlighting();
        }
    }

    /// Markdown rendition used by the CLI.
    pub fn to_markdown(&self) -> String {
        let mut out = String::new();

        for block in &self.blocks {
            match block {
                LessonBlock::Heading { title, subtitle } => {
                    let _ = writeln!(out, "# {}\n", title);
                    if let Some(subtitle) = subtitle {
                        let _ = writeln!(out, "*{}*\n", subtitle);
                    }
                }
                LessonBlock::Paragraph(text) => {
                    let _ = writeln!(out, "{}\n", text);
                }
                LessonBlock::Section { title, paragraphs } => {
                    let _ = writeln!(out, "## {}\n", title);
                    for p in paragraphs {
                        let _ = writeln!(out, "{}\n", p);
                    }
                }
                LessonBlock::Code(code) => {
                    let _ = writeln!(
                        out,
                        "```{}\n{}\n```\n",
                        code.language.as_deref().unwrap_or(""),
                        code.source
                    );
                }
                LessonBlock::List {
                    title,
                    items,
                    ordered,
                } => {
                    if let Some(title) = title {
                        let _ = writeln!(out, "**{}**\n", title);
                    }
                    for (i, item) in items.iter().enumerate() {
                        if *ordered {
                            let _ = writeln!(out, "{}. {}", i + 1, item);
                        } else {
                            let _ = writeln!(out, "- {}", item);
                        }
                    }
                    out.push('\n');
                }
            }
        }

        out.trim_end().to_string()
    }
}
