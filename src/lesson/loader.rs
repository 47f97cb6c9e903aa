//! Lesson module loaders.
//!
//! [`BundledLoader`] serves modules compiled into the binary. [`FsLoader`]
//! reads `<root>/<module>.toml` and is used when a content directory is
//! configured, which also enables live reload.

use super::ContentModule;
use crate::catalog::ModuleRef;
use crate::error::ContentError;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};

/// Produces a lesson module for a module reference.
///
/// Loaders are called from worker threads, never from the UI thread.
pub trait ModuleLoader: Send + Sync {
    fn load(&self, module: &ModuleRef) -> Result<ContentModule, ContentError>;

    /// Short description for logs and the status bar.
    fn describe(&self) -> String;
}

macro_rules! bundle {
    ($($path:literal),* $(,)?) => {
        &[$(($path, include_str!(concat!("../../content/", $path, ".toml")))),*]
    };
}

static BUNDLE: &[(&str, &str)] = bundle![
    "python/IntroductionPython",
    "python/GetStartedPython",
    "python/VariablesPython",
    "python/LoopsPython",
    "python/FunctionsPython",
    "javascript/IntroductionJavascript",
    "javascript/AsyncPromises",
    "typescript/IntroductionTypescript",
    "react/IntroductionReact",
    "csharp/IntroductionCSharp",
    "cplusplus/IntroductionCPlusPlus",
    "go/IntroductionGo",
    "go/ConcurrencyGo",
    "html/IntroductionHTML",
    "css/IntroductionCSS",
];

/// Lesson modules shipped inside the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledLoader;

impl BundledLoader {
    /// Module paths available in the bundle.
    pub fn modules() -> impl Iterator<Item = &'static str> {
        BUNDLE.iter().map(|(path, _)| *path)
    }
}

impl ModuleLoader for BundledLoader {
    fn load(&self, module: &ModuleRef) -> Result<ContentModule, ContentError> {
        let (_, source) = BUNDLE
            .iter()
            .find(|(path, _)| *path == module.as_str())
            .ok_or_else(|| ContentError::NotFound {
                module: module.to_string(),
            })?;
        ContentModule::parse(module.as_str(), source)
    }

    fn describe(&self) -> String {
        "bundled lessons".to_string()
    }
}

/// Reads lesson modules from a content directory.
#[derive(Debug, Clone)]
pub struct FsLoader {
    root: PathBuf,
}

impl FsLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// File backing a module, or `None` if the module path would escape the
    /// content root.
    pub fn module_path(&self, module: &str) -> Option<PathBuf> {
        let relative = Path::new(module);
        let safe = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)));
        if !safe || module.is_empty() {
            return None;
        }
        Some(self.root.join(format!("{module}.toml")))
    }

    /// Module path for a file under the root (inverse of [`Self::module_path`]).
    pub fn module_for_file(&self, file: &Path) -> Option<String> {
        if file.extension().is_none_or(|ext| ext != "toml") {
            return None;
        }
        let relative = file.strip_prefix(&self.root).ok()?.with_extension("");
        let parts: Vec<_> = relative
            .components()
            .map(|c| c.as_os_str().to_str())
            .collect::<Option<_>>()?;
        Some(parts.join("/"))
    }
}

impl ModuleLoader for FsLoader {
    fn load(&self, module: &ModuleRef) -> Result<ContentModule, ContentError> {
        let not_found = || ContentError::NotFound {
            module: module.to_string(),
        };
        let path = self.module_path(module.as_str()).ok_or_else(not_found)?;

        let source = std::fs::read_to_string(&path).map_err(|source| {
            if source.kind() == ErrorKind::NotFound {
                not_found()
            } else {
                ContentError::Io { path, source }
            }
        })?;

        ContentModule::parse(module.as_str(), &source)
    }

    fn describe(&self) -> String {
        format!("lessons from {}", self.root.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::lesson::ComponentRegistry;
    use std::fs;

    #[test]
    fn test_bundle_modules_belong_to_catalog() {
        let catalog = Catalog::builtin().unwrap();
        for module in BundledLoader::modules() {
            assert!(catalog.locate(module).is_some(), "{} not in catalog", module);
        }
    }

    #[test]
    fn test_bundled_lessons_render() {
        let registry = ComponentRegistry::with_defaults().unwrap();
        let catalog = Catalog::builtin().unwrap();
        for module in BundledLoader::modules() {
            let (_, module_ref) = catalog.locate(module).unwrap();
            let parsed = BundledLoader.load(&module_ref).unwrap();
            let lesson = registry
                .render(&parsed)
                .unwrap_or_else(|e| panic!("{} failed to render: {}", module, e));
            assert!(!lesson.blocks.is_empty(), "{} is empty", module);
        }
    }

    #[test]
    fn test_bundled_missing_module() {
        let err = BundledLoader
            .load(&ModuleRef::new("ruby/IntroductionRuby"))
            .unwrap_err();
        assert!(matches!(err, ContentError::NotFound { .. }));
    }

    #[test]
    fn test_fs_loader_reads_module() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("go")).unwrap();
        fs::write(
            dir.path().join("go/IntroductionGo.toml"),
            "[[component]]\nname = \"Text\"\ntext = \"Gophers\"\n",
        )
        .unwrap();

        let loader = FsLoader::new(dir.path());
        let module = loader.load(&ModuleRef::new("go/IntroductionGo")).unwrap();
        assert_eq!(module.components[0].props.text.as_deref(), Some("Gophers"));

        let err = loader.load(&ModuleRef::new("go/TestingGo")).unwrap_err();
        assert!(matches!(err, ContentError::NotFound { .. }));
    }

    #[test]
    fn test_fs_loader_rejects_escaping_paths() {
        let loader = FsLoader::new("/tmp/lessons");
        assert!(loader.module_path("../etc/passwd").is_none());
        assert!(loader.module_path("/abs").is_none());
        assert_eq!(
            loader.module_path("go/IntroductionGo"),
            Some(PathBuf::from("/tmp/lessons/go/IntroductionGo.toml"))
        );
    }

    #[test]
    fn test_module_for_file() {
        let loader = FsLoader::new("/tmp/lessons");
        assert_eq!(
            loader.module_for_file(Path::new("/tmp/lessons/go/IntroductionGo.toml")),
            Some("go/IntroductionGo".to_string())
        );
        assert_eq!(
            loader.module_for_file(Path::new("/tmp/lessons/go/notes.md")),
            None
        );
        assert_eq!(loader.module_for_file(Path::new("/elsewhere/x.toml")), None);
    }
}
