//! Component lookup table.
//!
//! The registry maps component names used by lesson modules to their
//! implementations. It is built once in `main` and handed to whoever renders
//! lessons; there is no process-wide component namespace.

use super::components::{Header, ListSection, PreCode, Text, TextCode, TextSection};
use super::{ContentModule, LessonBlock, Props, RenderedLesson};
use crate::error::{RegistryError, RenderError};
use indexmap::IndexMap;
use std::any::{Any, TypeId};
use std::sync::Arc;

/// A presentational unit that turns props into lesson blocks.
///
/// Two registrations count as the same implementation when they have the
/// same concrete type.
pub trait LessonComponent: Any + Send + Sync {
    fn render(&self, props: &Props) -> Result<Vec<LessonBlock>, RenderError>;
}

#[derive(Clone, Default)]
pub struct ComponentRegistry {
    components: IndexMap<String, Arc<dyn LessonComponent>>,
}

impl std::fmt::Debug for ComponentRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ComponentRegistry")
            .field("components", &self.components.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in lesson components.
    pub fn with_defaults() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        registry.register_defaults()?;
        Ok(registry)
    }

    /// Bind the built-in components. Safe to call more than once.
    pub fn register_defaults(&mut self) -> Result<(), RegistryError> {
        self.register(Header::NAME, Arc::new(Header))?;
        self.register(Text::NAME, Arc::new(Text))?;
        self.register(TextSection::NAME, Arc::new(TextSection))?;
        self.register(PreCode::NAME, Arc::new(PreCode))?;
        self.register(ListSection::NAME, Arc::new(ListSection))?;
        self.register(TextCode::NAME, Arc::new(TextCode))?;
        Ok(())
    }

    /// Bind `name` to `component`.
    ///
    /// Re-registering the same implementation under the same name is a no-op;
    /// a different implementation is a [`RegistryError::Conflict`].
    pub fn register(
        &mut self,
        name: &str,
        component: Arc<dyn LessonComponent>,
    ) -> Result<(), RegistryError> {
        if let Some(existing) = self.components.get(name) {
            if implementation(existing.as_ref()) == implementation(component.as_ref()) {
                tracing::trace!(component = name, "component already registered");
                return Ok(());
            }
            return Err(RegistryError::Conflict {
                name: name.to_string(),
            });
        }

        tracing::debug!(component = name, "registered lesson component");
        self.components.insert(name.to_string(), component);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&dyn LessonComponent> {
        self.components.get(name).map(|c| c.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.components.contains_key(name)
    }

    /// Registered names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.components.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Render a lesson module with the components in this table.
    pub fn render(&self, module: &ContentModule) -> Result<RenderedLesson, RenderError> {
        let mut blocks = Vec::new();

        for usage in &module.components {
            let component =
                self.get(&usage.name)
                    .ok_or_else(|| RenderError::UnknownComponent {
                        name: usage.name.clone(),
                    })?;
            blocks.extend(component.render(&usage.props)?);
        }

        Ok(RenderedLesson {
            title: module.title.clone(),
            blocks,
        })
    }
}

fn implementation(component: &dyn LessonComponent) -> TypeId {
    component.type_id()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lesson::ComponentUse;

    struct ShoutingText;

    impl LessonComponent for ShoutingText {
        fn render(&self, props: &Props) -> Result<Vec<LessonBlock>, RenderError> {
            Ok(vec![LessonBlock::Paragraph(
                props.text.clone().unwrap_or_default().to_uppercase(),
            )])
        }
    }

    fn usage(name: &str, props: Props) -> ComponentUse {
        ComponentUse {
            name: name.to_string(),
            props,
        }
    }

    #[test]
    fn test_defaults_registered_in_order() {
        let registry = ComponentRegistry::with_defaults().unwrap();
        let names: Vec<_> = registry.names().collect();
        assert_eq!(
            names,
            vec!["Header", "Text", "TextSection", "PreCode", "ListSection", "TextCode"]
        );
    }

    #[test]
    fn test_reregistering_defaults_is_noop() {
        let mut registry = ComponentRegistry::with_defaults().unwrap();
        registry.register_defaults().unwrap();
        assert_eq!(registry.len(), 6);

        registry.register("Text", Arc::new(Text)).unwrap();
        assert_eq!(registry.len(), 6);
    }

    #[test]
    fn test_conflicting_registration() {
        let mut registry = ComponentRegistry::with_defaults().unwrap();
        let err = registry
            .register("Text", Arc::new(ShoutingText))
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::Conflict {
                name: "Text".to_string()
            }
        );

        // The original binding survives
        let module = ContentModule {
            title: None,
            components: vec![usage(
                "Text",
                Props {
                    text: Some("quiet".into()),
                    ..Props::default()
                },
            )],
        };
        let lesson = registry.render(&module).unwrap();
        assert_eq!(lesson.blocks, vec![LessonBlock::Paragraph("quiet".into())]);
    }

    #[test]
    fn test_custom_component_in_injected_table() {
        let mut registry = ComponentRegistry::new();
        registry.register("Shout", Arc::new(ShoutingText)).unwrap();

        let module = ContentModule {
            title: Some("Custom".into()),
            components: vec![usage(
                "Shout",
                Props {
                    text: Some("hello".into()),
                    ..Props::default()
                },
            )],
        };
        let lesson = registry.render(&module).unwrap();
        assert_eq!(lesson.title.as_deref(), Some("Custom"));
        assert_eq!(lesson.blocks, vec![LessonBlock::Paragraph("HELLO".into())]);
    }

    #[test]
    fn test_unknown_component() {
        let registry = ComponentRegistry::with_defaults().unwrap();
        let module = ContentModule {
            title: None,
            components: vec![usage("Carousel", Props::default())],
        };
        assert_eq!(
            registry.render(&module).unwrap_err(),
            RenderError::UnknownComponent {
                name: "Carousel".into()
            }
        );
    }

    #[test]
    fn test_render_preserves_component_order() {
        let registry = ComponentRegistry::with_defaults().unwrap();
        let module = ContentModule {
            title: None,
            components: vec![
                usage(
                    "Header",
                    Props {
                        title: Some("T".into()),
                        ..Props::default()
                    },
                ),
                usage(
                    "PreCode",
                    Props {
                        code: Some("x = 1".into()),
                        ..Props::default()
                    },
                ),
                usage(
                    "Text",
                    Props {
                        text: Some("after".into()),
                        ..Props::default()
                    },
                ),
            ],
        };
        let lesson = registry.render(&module).unwrap();
        assert!(matches!(lesson.blocks[0], LessonBlock::Heading { .. }));
        assert!(matches!(lesson.blocks[1], LessonBlock::Code(_)));
        assert_eq!(lesson.blocks[2], LessonBlock::Paragraph("after".into()));
    }
}
