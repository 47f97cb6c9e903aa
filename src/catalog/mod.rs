//! Course catalog.
//!
//! The catalog is the single source of truth for navigable content: an
//! ordered table of [`Course`]s, each holding its lessons ([`Subcourse`]s) in
//! teaching order. It is built once at startup and never mutated.
//!
//! Lesson content is not part of the catalog. Each subcourse carries a
//! [`ModuleRef`] which a [`crate::lesson::ModuleLoader`] resolves on demand.

mod builtin;

use crate::error::CatalogError;
use nucleo_matcher::pattern::{CaseMatching, Normalization, Pattern};
use nucleo_matcher::{Config as MatcherConfig, Matcher};
use serde::{Serialize, Serializer};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use strum::{EnumIter, EnumString, IntoStaticStr};

/// Identifier of a course in the catalog.
///
/// The string form is the key the course is addressed by (`"C#"`, `"NextJS"`),
/// which is not always the display title (`"Next.js"`).
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, EnumIter, EnumString, IntoStaticStr,
)]
pub enum CourseId {
    Python,
    JavaScript,
    React,
    TypeScript,
    Vue,
    #[strum(serialize = "C#")]
    CSharp,
    #[strum(serialize = "C++")]
    Cpp,
    Go,
    Angular,
    #[strum(serialize = "HTML")]
    Html,
    #[strum(serialize = "CSS")]
    Css,
    #[strum(serialize = "NextJS")]
    NextJs,
    Java,
    #[strum(serialize = "PHP")]
    Php,
    Ruby,
    #[strum(serialize = "TailwindCSS")]
    TailwindCss,
    Bootstrap,
}

impl CourseId {
    pub fn as_str(&self) -> &'static str {
        self.into()
    }

    /// Whether `name` addresses this course by key or by variant name
    /// (`"CSharp"`, `"cpp"`), ignoring ASCII case.
    pub fn is_named(&self, name: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(name) || format!("{self:?}").eq_ignore_ascii_case(name)
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for CourseId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Reference to a lesson module, e.g. `python/IntroductionPython`.
///
/// Holding a `ModuleRef` loads nothing; it is resolved only when the lesson is
/// opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ModuleRef(&'static str);

impl ModuleRef {
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for ModuleRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// A single lesson.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Subcourse {
    pub title: &'static str,
    pub module: ModuleRef,
}

impl Subcourse {
    pub const fn new(title: &'static str, module: &'static str) -> Self {
        Self {
            title,
            module: ModuleRef::new(module),
        }
    }
}

/// A named, ordered collection of lessons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Course {
    pub id: CourseId,
    pub title: &'static str,
    pub subcourses: &'static [Subcourse],
}

impl Course {
    /// Lessons in teaching order.
    pub fn subcourses(&self) -> &'static [Subcourse] {
        self.subcourses
    }

    pub fn subcourse(&self, index: usize) -> Option<&'static Subcourse> {
        self.subcourses.get(index)
    }
}

/// Identifies one lesson of one course.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct SubcourseKey {
    pub course: CourseId,
    pub index: usize,
}

impl SubcourseKey {
    pub fn new(course: CourseId, index: usize) -> Self {
        Self { course, index }
    }
}

impl fmt::Display for SubcourseKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}#{}", self.course, self.index + 1)
    }
}

/// A lesson matched by [`Catalog::search`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchHit {
    pub key: SubcourseKey,
    pub course_title: &'static str,
    pub lesson_title: &'static str,
    pub score: u32,
}

/// Read-only table of all courses.
#[derive(Debug, Clone)]
pub struct Catalog {
    courses: Vec<Course>,
}

impl Catalog {
    /// Build a catalog, checking that course ids are unique and that no
    /// lesson module is shared between subcourses.
    pub fn new(courses: Vec<Course>) -> Result<Self, CatalogError> {
        let mut seen_courses = Vec::with_capacity(courses.len());
        let mut owners: HashMap<ModuleRef, String> = HashMap::new();

        for course in &courses {
            if seen_courses.contains(&course.id) {
                return Err(CatalogError::DuplicateCourse(course.id.to_string()));
            }
            seen_courses.push(course.id);

            for (index, sub) in course.subcourses.iter().enumerate() {
                let owner = SubcourseKey::new(course.id, index).to_string();
                if let Some(first) = owners.insert(sub.module, owner.clone()) {
                    return Err(CatalogError::SharedModule {
                        module: sub.module.to_string(),
                        first,
                        second: owner,
                    });
                }
            }
        }

        tracing::debug!(
            courses = courses.len(),
            lessons = owners.len(),
            "catalog built"
        );
        Ok(Self { courses })
    }

    /// The catalog shipped with coursebook.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::new(builtin::courses())
    }

    /// Course identifiers in definition order.
    pub fn course_ids(&self) -> impl Iterator<Item = CourseId> + '_ {
        self.courses.iter().map(|c| c.id)
    }

    /// Courses in definition order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    pub fn get(&self, id: CourseId) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == id)
    }

    /// Look up a course by its identifier.
    ///
    /// The canonical key (`"C#"`) is tried first, then the display title, then
    /// a case-insensitive match of the key, title or ASCII variant name
    /// (`"csharp"`).
    pub fn course(&self, id: &str) -> Result<&Course, CatalogError> {
        let id = id.trim();
        if let Ok(course_id) = CourseId::from_str(id) {
            if let Some(course) = self.get(course_id) {
                return Ok(course);
            }
        }

        self.courses
            .iter()
            .find(|c| c.title == id)
            .or_else(|| {
                self.courses.iter().find(|c| {
                    c.id.is_named(id) || c.title.eq_ignore_ascii_case(id)
                })
            })
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    /// Lessons of a course in teaching order.
    pub fn subcourses(&self, id: &str) -> Result<&'static [Subcourse], CatalogError> {
        self.course(id).map(|c| c.subcourses)
    }

    pub fn subcourse(&self, key: SubcourseKey) -> Result<&'static Subcourse, CatalogError> {
        let course = self
            .get(key.course)
            .ok_or_else(|| CatalogError::NotFound(key.course.to_string()))?;
        course
            .subcourse(key.index)
            .ok_or_else(|| CatalogError::SubcourseNotFound {
                course: key.course.to_string(),
                index: key.index,
            })
    }

    /// Find the lesson that owns a module.
    pub fn locate(&self, module: &str) -> Option<(SubcourseKey, ModuleRef)> {
        self.courses.iter().find_map(|course| {
            course
                .subcourses
                .iter()
                .position(|s| s.module.as_str() == module)
                .map(|index| (SubcourseKey::new(course.id, index), course.subcourses[index].module))
        })
    }

    /// Every lesson in catalog order.
    pub fn lessons(&self) -> impl Iterator<Item = (SubcourseKey, &'static Subcourse)> + '_ {
        self.courses.iter().flat_map(|course| {
            course
                .subcourses
                .iter()
                .enumerate()
                .map(move |(index, sub)| (SubcourseKey::new(course.id, index), sub))
        })
    }

    /// Fuzzy-match lessons by course and lesson title, best match first.
    pub fn search(&self, query: &str) -> Vec<SearchHit> {
        if query.trim().is_empty() {
            return Vec::new();
        }

        struct Candidate {
            key: SubcourseKey,
            course_title: &'static str,
            lesson_title: &'static str,
            haystack: String,
        }

        impl AsRef<str> for Candidate {
            fn as_ref(&self) -> &str {
                &self.haystack
            }
        }

        let candidates = self.courses.iter().flat_map(|course| {
            course
                .subcourses
                .iter()
                .enumerate()
                .map(move |(index, sub)| Candidate {
                    key: SubcourseKey::new(course.id, index),
                    course_title: course.title,
                    lesson_title: sub.title,
                    haystack: format!("{} {}", course.title, sub.title),
                })
        });

        let mut matcher = Matcher::new(MatcherConfig::DEFAULT);
        let pattern = Pattern::parse(query, CaseMatching::Ignore, Normalization::Smart);
        let mut hits: Vec<SearchHit> = pattern
            .match_list(candidates, &mut matcher)
            .into_iter()
            .map(|(c, score)| SearchHit {
                key: c.key,
                course_title: c.course_title,
                lesson_title: c.lesson_title,
                score,
            })
            .collect();

        hits.sort_by(|a, b| b.score.cmp(&a.score));
        hits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    static FIRST: [Subcourse; 2] = [
        Subcourse::new("One", "test/One"),
        Subcourse::new("Two", "test/Two"),
    ];
    static SHARED: [Subcourse; 1] = [Subcourse::new("Again", "test/One")];

    #[test]
    fn test_builtin_catalog_is_valid() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.len(), 17);
        // Every course id is present exactly once
        for id in CourseId::iter() {
            assert!(catalog.get(id).is_some(), "{} missing", id);
        }
    }

    #[test]
    fn test_course_ids_in_definition_order() {
        let catalog = Catalog::builtin().unwrap();
        let ids: Vec<_> = catalog.course_ids().map(|id| id.as_str()).collect();
        assert_eq!(&ids[..4], &["Python", "JavaScript", "React", "TypeScript"]);
        assert_eq!(ids.last(), Some(&"Bootstrap"));

        // Stable across calls
        let again: Vec<_> = catalog.course_ids().map(|id| id.as_str()).collect();
        assert_eq!(ids, again);
    }

    #[test]
    fn test_lookup_preserves_subcourse_order() {
        let catalog = Catalog::builtin().unwrap();
        for course in builtin::courses() {
            let found = catalog.course(course.id.as_str()).unwrap();
            let titles: Vec<_> = found.subcourses().iter().map(|s| s.title).collect();
            let declared: Vec<_> = course.subcourses.iter().map(|s| s.title).collect();
            assert_eq!(titles, declared);
        }

        let python = catalog.course("Python").unwrap();
        assert_eq!(python.subcourses()[0].title, "Introduction to Python");
        assert_eq!(python.subcourses()[1].title, "Get Started with Python");
    }

    #[test]
    fn test_lookup_unknown_course() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(
            catalog.course("Cobol").unwrap_err(),
            CatalogError::NotFound("Cobol".to_string())
        );
        assert!(catalog.subcourses("").is_err());
    }

    #[test]
    fn test_lookup_by_symbolic_key_and_title() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.course("C#").unwrap().id, CourseId::CSharp);
        assert_eq!(catalog.course("C++").unwrap().id, CourseId::Cpp);
        assert_eq!(catalog.course("Next.js").unwrap().id, CourseId::NextJs);
        assert_eq!(catalog.course("python").unwrap().id, CourseId::Python);
    }

    #[test]
    fn test_lookup_by_ascii_variant_name() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.course("CSharp").unwrap().id, CourseId::CSharp);
        assert_eq!(catalog.course("csharp").unwrap().id, CourseId::CSharp);
        assert_eq!(catalog.course("cpp").unwrap().id, CourseId::Cpp);
        assert_eq!(catalog.course("nextjs").unwrap().id, CourseId::NextJs);
        assert!(catalog.course("sharp").is_err());
    }

    #[test]
    fn test_subcourse_lookup() {
        let catalog = Catalog::builtin().unwrap();
        let sub = catalog
            .subcourse(SubcourseKey::new(CourseId::Python, 1))
            .unwrap();
        assert_eq!(sub.module.as_str(), "python/GetStartedPython");

        let err = catalog
            .subcourse(SubcourseKey::new(CourseId::Java, 5))
            .unwrap_err();
        assert!(matches!(err, CatalogError::SubcourseNotFound { index: 5, .. }));
    }

    #[test]
    fn test_duplicate_course_rejected() {
        let course = Course {
            id: CourseId::Python,
            title: "Python",
            subcourses: &FIRST,
        };
        let err = Catalog::new(vec![course, course]).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateCourse("Python".to_string()));
    }

    #[test]
    fn test_shared_module_rejected() {
        let a = Course {
            id: CourseId::Python,
            title: "Python",
            subcourses: &FIRST,
        };
        let b = Course {
            id: CourseId::Go,
            title: "Go",
            subcourses: &SHARED,
        };
        let err = Catalog::new(vec![a, b]).unwrap_err();
        assert!(matches!(err, CatalogError::SharedModule { .. }));
    }

    #[test]
    fn test_locate_module() {
        let catalog = Catalog::builtin().unwrap();
        let (key, module) = catalog.locate("go/ConcurrencyGo").unwrap();
        assert_eq!(key, SubcourseKey::new(CourseId::Go, 5));
        assert_eq!(module.as_str(), "go/ConcurrencyGo");
        assert!(catalog.locate("go/Nope").is_none());
    }

    #[test]
    fn test_search_finds_lessons() {
        let catalog = Catalog::builtin().unwrap();
        let hits = catalog.search("python loops");
        assert!(!hits.is_empty());
        assert_eq!(hits[0].lesson_title, "Python Loops");
        assert!(catalog.search("   ").is_empty());
    }

    #[test]
    fn test_json_shape() {
        let catalog = Catalog::builtin().unwrap();
        let json = serde_json::to_value(catalog.get(CourseId::CSharp).unwrap()).unwrap();
        assert_eq!(json["id"], "C#");
        assert_eq!(json["subcourses"][0]["module"], "csharp/IntroductionCSharp");
    }
}
