//! Lessondeck Progress
//!
//! The learner progress store. Progress is an explicit state object
//! with a fixed lifecycle: loaded once at startup, persisted after
//! every mutating operation. Nothing here is process-global; the store
//! is passed by reference to whatever needs to read or mutate it.
//!
//! # Example
//!
//! ```no_run
//! use lessondeck_progress::ProgressStore;
//! use std::path::PathBuf;
//!
//! let mut store = ProgressStore::load(PathBuf::from("progress.toml"));
//! store.complete_lesson(0, 1).unwrap();
//! assert!(store.is_lesson_complete(0, 1));
//! ```

use lessondeck_core::{Catalog, QuizScore, Result};
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Persisted progress state.
///
/// Lesson keys are `"<module>-<index>"`, matching the legacy store so
/// existing progress files keep their meaning. The per-module counter
/// is recomputed from the lesson map on every lesson completion rather
/// than incremented, so it can never drift.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Progress {
    /// Completed-lesson count per module id. Keys are stringified ids;
    /// TOML tables take string keys only, as did the legacy store.
    #[serde(default)]
    pub modules: BTreeMap<String, u32>,
    /// Lesson completion flags keyed `"<module>-<index>"`.
    #[serde(default)]
    pub lessons: BTreeMap<String, bool>,
    /// Lab completion flags keyed by lab title.
    #[serde(default)]
    pub labs: BTreeMap<String, bool>,
    /// Latest quiz score per module id.
    #[serde(default)]
    pub quizzes: BTreeMap<String, QuizScore>,
}

/// Completed/total counts for one summary section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SectionSummary {
    pub completed: usize,
    pub total: usize,
}

impl SectionSummary {
    /// Completion percentage, 0 when the section is empty.
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            0
        } else {
            ((self.completed * 100 + self.total / 2) / self.total) as u32
        }
    }
}

/// The three-section progress summary shown to the learner.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressSummary {
    /// Modules with at least one completed lesson.
    pub modules: SectionSummary,
    pub lessons: SectionSummary,
    pub labs: SectionSummary,
}

/// The progress store: state plus its persistence boundary.
#[derive(Debug)]
pub struct ProgressStore {
    path: PathBuf,
    progress: Progress,
}

impl ProgressStore {
    /// The platform-default progress file location.
    pub fn default_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("", "", "lessondeck")
            .map(|dirs| dirs.data_dir().join("progress.toml"))
    }

    /// Load the store from `path`, reading the file once.
    ///
    /// A missing file starts empty; an unreadable or corrupt file is
    /// logged and also starts empty rather than failing startup.
    pub fn load(path: PathBuf) -> Self {
        let progress = match std::fs::read_to_string(&path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(progress) => progress,
                Err(e) => {
                    warn!("Corrupt progress file {}: {}", path.display(), e);
                    Progress::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Progress::default(),
            Err(e) => {
                warn!("Cannot read progress file {}: {}", path.display(), e);
                Progress::default()
            }
        };
        Self { path, progress }
    }

    /// The file this store persists to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read-only view of the current state.
    pub fn progress(&self) -> &Progress {
        &self.progress
    }

    /// The `"<module>-<index>"` key for a lesson.
    pub fn lesson_key(module_id: u32, index: usize) -> String {
        format!("{}-{}", module_id, index)
    }

    pub fn is_lesson_complete(&self, module_id: u32, index: usize) -> bool {
        self.progress
            .lessons
            .get(&Self::lesson_key(module_id, index))
            .copied()
            .unwrap_or(false)
    }

    pub fn is_lab_complete(&self, title: &str) -> bool {
        self.progress.labs.get(title).copied().unwrap_or(false)
    }

    pub fn quiz_score(&self, module_id: u32) -> Option<QuizScore> {
        self.progress.quizzes.get(&module_id.to_string()).copied()
    }

    /// Mark a lesson complete, recompute the module's counter, persist.
    pub fn complete_lesson(&mut self, module_id: u32, index: usize) -> Result<()> {
        self.progress
            .lessons
            .insert(Self::lesson_key(module_id, index), true);

        let prefix = format!("{}-", module_id);
        let completed = self
            .progress
            .lessons
            .iter()
            .filter(|(key, done)| key.starts_with(&prefix) && **done)
            .count() as u32;
        self.progress.modules.insert(module_id.to_string(), completed);

        self.save()
    }

    /// Mark a lab complete by title, persist.
    pub fn complete_lab(&mut self, title: &str) -> Result<()> {
        self.progress.labs.insert(title.to_string(), true);
        self.save()
    }

    /// Record a quiz score for a module, persist. The stored score is
    /// simply the latest attempt.
    pub fn record_quiz(&mut self, module_id: u32, score: QuizScore) -> Result<()> {
        self.progress.quizzes.insert(module_id.to_string(), score);
        self.save()
    }

    /// Persist the current state. Called after every mutation; parent
    /// directories are created on demand.
    fn save(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let toml_string = toml::to_string_pretty(&self.progress).map_err(|e| {
            lessondeck_core::LessondeckError::Progress(format!("Serialization error: {}", e))
        })?;
        std::fs::write(&self.path, toml_string)?;
        Ok(())
    }

    /// Totals against a catalog, mirroring the legacy three-section
    /// progress display.
    pub fn summary(&self, catalog: &Catalog) -> ProgressSummary {
        ProgressSummary {
            modules: SectionSummary {
                completed: self.progress.modules.values().filter(|c| **c > 0).count(),
                total: catalog.modules.len(),
            },
            lessons: SectionSummary {
                completed: self.progress.lessons.values().filter(|done| **done).count(),
                total: catalog.total_lessons(),
            },
            labs: SectionSummary {
                completed: self.progress.labs.values().filter(|done| **done).count(),
                total: catalog.labs.len(),
            },
        }
    }
}
