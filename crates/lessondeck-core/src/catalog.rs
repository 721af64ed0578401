//! The content catalog data model.
//!
//! A [`Catalog`] holds the site's modules, templates, and labs. The types
//! here are plain serde-derived data; the built-in catalog document and
//! file loading live in the `lessondeck-content` crate.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

/// One entry in a module's lesson list.
///
/// The legacy content model tolerated a lesson being either a plain label
/// or a structured object carrying a source file. That shape is kept as a
/// tagged variant instead of runtime type inspection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LessonEntry {
    /// A lesson with a markdown source file, relative to the content root.
    Sourced { title: String, file: PathBuf },
    /// A bare label with no source behind it.
    Label(String),
}

impl LessonEntry {
    /// The lesson's display title.
    pub fn title(&self) -> &str {
        match self {
            LessonEntry::Sourced { title, .. } => title,
            LessonEntry::Label(title) => title,
        }
    }

    /// The lesson's source path, if it has one.
    pub fn source(&self) -> Option<&Path> {
        match self {
            LessonEntry::Sourced { file, .. } => Some(file),
            LessonEntry::Label(_) => None,
        }
    }
}

/// A course module: a titled group of lessons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Module {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub duration: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub lessons: Vec<LessonEntry>,
}

impl Module {
    /// Number of lessons in this module.
    ///
    /// The legacy data carried this as a separate field that could drift
    /// from the actual list; here it is always derived.
    pub fn lesson_count(&self) -> usize {
        self.lessons.len()
    }
}

/// A downloadable document template.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub file: PathBuf,
}

/// Lab difficulty rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Difficulty::Beginner => "beginner",
            Difficulty::Intermediate => "intermediate",
            Difficulty::Advanced => "advanced",
        };
        f.write_str(s)
    }
}

/// Lab subject area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LabCategory {
    Software,
    Hardware,
    Automation,
    Systems,
}

impl fmt::Display for LabCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            LabCategory::Software => "software",
            LabCategory::Hardware => "hardware",
            LabCategory::Automation => "automation",
            LabCategory::Systems => "systems",
        };
        f.write_str(s)
    }
}

/// A hands-on lab exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lab {
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    pub duration: String,
    pub category: LabCategory,
}

/// Search hits across the three catalog sections.
#[derive(Debug, Default)]
pub struct SearchResults<'a> {
    pub modules: Vec<&'a Module>,
    pub templates: Vec<&'a Template>,
    pub labs: Vec<&'a Lab>,
}

impl SearchResults<'_> {
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty() && self.templates.is_empty() && self.labs.is_empty()
    }

    pub fn len(&self) -> usize {
        self.modules.len() + self.templates.len() + self.labs.len()
    }
}

/// The full content catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub modules: Vec<Module>,
    #[serde(default)]
    pub templates: Vec<Template>,
    #[serde(default)]
    pub labs: Vec<Lab>,
}

impl Catalog {
    /// Look up a module by id.
    pub fn module(&self, id: u32) -> Option<&Module> {
        self.modules.iter().find(|m| m.id == id)
    }

    /// Look up a lesson by module id and zero-based index.
    pub fn lesson(&self, module_id: u32, index: usize) -> Option<&LessonEntry> {
        self.module(module_id).and_then(|m| m.lessons.get(index))
    }

    /// Total lesson count across all modules.
    pub fn total_lessons(&self) -> usize {
        self.modules.iter().map(Module::lesson_count).sum()
    }

    /// Case-insensitive substring search over titles, descriptions, tags,
    /// and lesson labels.
    pub fn search(&self, query: &str) -> SearchResults<'_> {
        let q = query.to_lowercase();
        if q.is_empty() {
            return SearchResults {
                modules: self.modules.iter().collect(),
                templates: self.templates.iter().collect(),
                labs: self.labs.iter().collect(),
            };
        }

        let modules = self
            .modules
            .iter()
            .filter(|m| {
                m.title.to_lowercase().contains(&q)
                    || m.description.to_lowercase().contains(&q)
                    || m.tags.iter().any(|t| t.to_lowercase().contains(&q))
                    || m.lessons.iter().any(|l| l.title().to_lowercase().contains(&q))
            })
            .collect();

        let templates = self
            .templates
            .iter()
            .filter(|t| {
                t.title.to_lowercase().contains(&q) || t.description.to_lowercase().contains(&q)
            })
            .collect();

        let labs = self
            .labs
            .iter()
            .filter(|l| {
                l.title.to_lowercase().contains(&q)
                    || l.description.to_lowercase().contains(&q)
                    || l.category.to_string().contains(&q)
                    || l.difficulty.to_string().contains(&q)
            })
            .collect();

        SearchResults {
            modules,
            templates,
            labs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> Catalog {
        Catalog {
            modules: vec![Module {
                id: 0,
                title: "Foundations".to_string(),
                description: "Core principles".to_string(),
                duration: "2-3 hours".to_string(),
                tags: vec!["Beginner".to_string()],
                lessons: vec![
                    LessonEntry::Sourced {
                        title: "What is QA".to_string(),
                        file: PathBuf::from("docs/00/01-what-is-qa.md"),
                    },
                    LessonEntry::Label("Wrap-up discussion".to_string()),
                ],
            }],
            templates: vec![Template {
                title: "Test Plan".to_string(),
                description: "Comprehensive test plan template".to_string(),
                icon: "📋".to_string(),
                file: PathBuf::from("templates/test-plan.md"),
            }],
            labs: vec![Lab {
                title: "API Automation".to_string(),
                description: "Build automated API tests".to_string(),
                difficulty: Difficulty::Intermediate,
                duration: "3 hours".to_string(),
                category: LabCategory::Automation,
            }],
        }
    }

    #[test]
    fn test_lesson_entry_accessors() {
        let sourced = LessonEntry::Sourced {
            title: "A".to_string(),
            file: PathBuf::from("docs/a.md"),
        };
        assert_eq!(sourced.title(), "A");
        assert_eq!(sourced.source(), Some(Path::new("docs/a.md")));

        let label = LessonEntry::Label("B".to_string());
        assert_eq!(label.title(), "B");
        assert_eq!(label.source(), None);
    }

    #[test]
    fn test_lesson_entry_untagged_deserialization() {
        // Structured entry
        let toml = r#"
            title = "Lesson"
            file = "docs/lesson.md"
        "#;
        let entry: LessonEntry = toml::from_str(toml).unwrap();
        assert!(matches!(entry, LessonEntry::Sourced { .. }));

        // Bare label inside a wrapper table
        #[derive(Deserialize)]
        struct Wrapper {
            lesson: LessonEntry,
        }
        let wrapper: Wrapper = toml::from_str(r#"lesson = "Just a label""#).unwrap();
        assert!(matches!(wrapper.lesson, LessonEntry::Label(_)));
    }

    #[test]
    fn test_module_lookup() {
        let catalog = sample_catalog();
        assert!(catalog.module(0).is_some());
        assert!(catalog.module(99).is_none());
        assert_eq!(catalog.lesson(0, 0).unwrap().title(), "What is QA");
        assert!(catalog.lesson(0, 5).is_none());
    }

    #[test]
    fn test_total_lessons() {
        assert_eq!(sample_catalog().total_lessons(), 2);
    }

    #[test]
    fn test_search_matches_tags_case_insensitively() {
        let catalog = sample_catalog();
        let hits = catalog.search("BEGINNER");
        assert_eq!(hits.modules.len(), 1);
        assert!(hits.templates.is_empty());
    }

    #[test]
    fn test_search_matches_lesson_titles() {
        let catalog = sample_catalog();
        let hits = catalog.search("wrap-up");
        assert_eq!(hits.modules.len(), 1);
    }

    #[test]
    fn test_search_empty_query_returns_everything() {
        let catalog = sample_catalog();
        let hits = catalog.search("");
        assert_eq!(hits.len(), 3);
    }

    #[test]
    fn test_search_no_hits() {
        let catalog = sample_catalog();
        assert!(catalog.search("zzz-no-such-thing").is_empty());
    }

    #[test]
    fn test_difficulty_display() {
        assert_eq!(Difficulty::Beginner.to_string(), "beginner");
        assert_eq!(LabCategory::Systems.to_string(), "systems");
    }
}
