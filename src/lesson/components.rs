//! Built-in lesson components.
//!
//! | Name          | Required props    | Optional props          |
//! |---------------|-------------------|-------------------------|
//! | `Header`      | `title`           | `subtitle`              |
//! | `Text`        | `text`            |                         |
//! | `TextSection` | `title`           | `text`, `paragraphs`    |
//! | `PreCode`     | `code`            | `language`              |
//! | `ListSection` | `items`           | `title`, `ordered`      |
//! | `TextCode`    | `text`, `code`    | `language`              |

use super::registry::LessonComponent;
use super::{CodeBlock, LessonBlock, Props};
use crate::error::RenderError;

/// Lesson title with an optional subtitle.
pub struct Header;

/// A block of prose. Blank lines split it into paragraphs.
pub struct Text;

/// Titled section of prose.
pub struct TextSection;

/// Preformatted code with a declared language.
pub struct PreCode;

/// Bulleted or numbered list.
pub struct ListSection;

/// Explanation followed by the code it describes.
pub struct TextCode;

impl Header {
    pub const NAME: &'static str = "Header";
}

impl Text {
    pub const NAME: &'static str = "Text";
}

impl TextSection {
    pub const NAME: &'static str = "TextSection";
}

impl PreCode {
    pub const NAME: &'static str = "PreCode";
}

impl ListSection {
    pub const NAME: &'static str = "ListSection";
}

impl TextCode {
    pub const NAME: &'static str = "TextCode";
}

impl LessonComponent for Header {
    fn render(&self, props: &Props) -> Result<Vec<LessonBlock>, RenderError> {
        let title = require(Self::NAME, "title", props.title.as_deref())?;
        Ok(vec![LessonBlock::Heading {
            title: title.to_string(),
            subtitle: non_blank(props.subtitle.as_deref()),
        }])
    }
}

impl LessonComponent for Text {
    fn render(&self, props: &Props) -> Result<Vec<LessonBlock>, RenderError> {
        let text = require(Self::NAME, "text", props.text.as_deref())?;
        Ok(split_paragraphs(text)
            .into_iter()
            .map(LessonBlock::Paragraph)
            .collect())
    }
}

impl LessonComponent for TextSection {
    fn render(&self, props: &Props) -> Result<Vec<LessonBlock>, RenderError> {
        let title = require(Self::NAME, "title", props.title.as_deref())?;

        let mut paragraphs = props
            .text
            .as_deref()
            .map(split_paragraphs)
            .unwrap_or_default();
        paragraphs.extend(
            props
                .paragraphs
                .iter()
                .map(|p| p.trim().to_string())
                .filter(|p| !p.is_empty()),
        );

        Ok(vec![LessonBlock::Section {
            title: title.to_string(),
            paragraphs,
        }])
    }
}

impl LessonComponent for PreCode {
    fn render(&self, props: &Props) -> Result<Vec<LessonBlock>, RenderError> {
        let code = require(Self::NAME, "code", props.code.as_deref())?;
        Ok(vec![LessonBlock::Code(CodeBlock::new(
            trim_code(code),
            props.language.clone(),
        ))])
    }
}

impl LessonComponent for ListSection {
    fn render(&self, props: &Props) -> Result<Vec<LessonBlock>, RenderError> {
        let items: Vec<String> = props
            .items
            .iter()
            .map(|i| i.trim().to_string())
            .filter(|i| !i.is_empty())
            .collect();
        if items.is_empty() {
            return Err(RenderError::MissingProp {
                component: Self::NAME,
                prop: "items",
            });
        }

        Ok(vec![LessonBlock::List {
            title: non_blank(props.title.as_deref()),
            items,
            ordered: props.ordered,
        }])
    }
}

impl LessonComponent for TextCode {
    fn render(&self, props: &Props) -> Result<Vec<LessonBlock>, RenderError> {
        let text = require(Self::NAME, "text", props.text.as_deref())?;
        let code = require(Self::NAME, "code", props.code.as_deref())?;

        let mut blocks: Vec<LessonBlock> = split_paragraphs(text)
            .into_iter()
            .map(LessonBlock::Paragraph)
            .collect();
        blocks.push(LessonBlock::Code(CodeBlock::new(
            trim_code(code),
            props.language.clone(),
        )));
        Ok(blocks)
    }
}

fn require<'a>(
    component: &'static str,
    prop: &'static str,
    value: Option<&'a str>,
) -> Result<&'a str, RenderError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(RenderError::MissingProp { component, prop })
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Split prose on blank lines, joining wrapped lines with spaces.
fn split_paragraphs(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            if !current.is_empty() {
                paragraphs.push(current.join(" "));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        paragraphs.push(current.join(" "));
    }

    paragraphs
}

/// Strip blank lines around code while keeping its indentation.
fn trim_code(code: &str) -> String {
    let lines: Vec<&str> = code.lines().collect();
    let start = lines.iter().position(|l| !l.trim().is_empty()).unwrap_or(0);
    let end = lines
        .iter()
        .rposition(|l| !l.trim().is_empty())
        .map(|i| i + 1)
        .unwrap_or(0);
    if start >= end {
        return String::new();
    }
    lines[start..end]
        .iter()
        .map(|l| l.trim_end())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn props() -> Props {
        Props::default()
    }

    #[test]
    fn test_header_requires_title() {
        let err = Header.render(&props()).unwrap_err();
        assert_eq!(
            err,
            RenderError::MissingProp {
                component: "Header",
                prop: "title"
            }
        );

        let blocks = Header
            .render(&Props {
                title: Some("Intro".into()),
                subtitle: Some("  ".into()),
                ..props()
            })
            .unwrap();
        assert_eq!(
            blocks,
            vec![LessonBlock::Heading {
                title: "Intro".into(),
                subtitle: None
            }]
        );
    }

    #[test]
    fn test_text_splits_paragraphs() {
        let blocks = Text
            .render(&Props {
                text: Some("First line\ncontinues.\n\nSecond paragraph.".into()),
                ..props()
            })
            .unwrap();
        assert_eq!(
            blocks,
            vec![
                LessonBlock::Paragraph("First line continues.".into()),
                LessonBlock::Paragraph("Second paragraph.".into()),
            ]
        );
    }

    #[test]
    fn test_text_section_merges_text_and_paragraphs() {
        let blocks = TextSection
            .render(&Props {
                title: Some("Why".into()),
                text: Some("One.".into()),
                paragraphs: vec!["Two.".into(), "".into()],
                ..props()
            })
            .unwrap();
        assert_eq!(
            blocks,
            vec![LessonBlock::Section {
                title: "Why".into(),
                paragraphs: vec!["One.".into(), "Two.".into()],
            }]
        );
    }

    #[test]
    fn test_pre_code_keeps_indentation() {
        let blocks = PreCode
            .render(&Props {
                code: Some("\n\ndef f():\n    return 1   \n\n".into()),
                language: Some("python".into()),
                ..props()
            })
            .unwrap();
        let LessonBlock::Code(code) = &blocks[0] else {
            panic!("expected code block");
        };
        assert_eq!(code.source, "def f():\n    return 1");
        assert_eq!(code.language.as_deref(), Some("python"));
    }

    #[test]
    fn test_list_section_requires_items() {
        let err = ListSection
            .render(&Props {
                items: vec!["   ".into()],
                ..props()
            })
            .unwrap_err();
        assert!(matches!(err, RenderError::MissingProp { prop: "items", .. }));
    }

    #[test]
    fn test_text_code_emits_text_then_code() {
        let blocks = TextCode
            .render(&Props {
                text: Some("Print a value:".into()),
                code: Some("print(1)".into()),
                language: Some("python".into()),
                ..props()
            })
            .unwrap();
        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0], LessonBlock::Paragraph("Print a value:".into()));
        assert!(matches!(blocks[1], LessonBlock::Code(_)));

        let err = TextCode
            .render(&Props {
                text: Some("no code".into()),
                ..props()
            })
            .unwrap_err();
        assert!(matches!(err, RenderError::MissingProp { prop: "code", .. }));
    }
}
