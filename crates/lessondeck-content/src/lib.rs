//! Lessondeck Content
//!
//! This crate carries the built-in content: the full course catalog
//! (modules, templates, labs) and the quiz bank, both embedded as TOML
//! documents and parsed once through serde. User-supplied catalog and
//! quiz files replace or extend the built-ins using the same document
//! shapes.
//!
//! # Example
//!
//! ```
//! use lessondeck_content::builtin_catalog;
//!
//! let catalog = builtin_catalog();
//! assert!(catalog.module(0).is_some());
//! ```

mod data;
mod quizzes;

pub use quizzes::{builtin_quiz, builtin_quizzes, load_bank_from};

use lessondeck_core::{Catalog, LessondeckError, Quiz, Result};
use std::path::Path;
use std::sync::LazyLock;

static BUILTIN_CATALOG: LazyLock<Catalog> = LazyLock::new(|| {
    toml::from_str(data::DEFAULT_CATALOG).expect("Built-in catalog should be valid")
});

/// The embedded catalog.
pub fn builtin_catalog() -> &'static Catalog {
    &BUILTIN_CATALOG
}

/// Load a catalog from a user-supplied TOML file.
pub fn load_catalog_from(path: &Path) -> Result<Catalog> {
    let content = std::fs::read_to_string(path)?;
    toml::from_str(&content).map_err(|e| {
        LessondeckError::Catalog(format!("Catalog error in {}: {}", path.display(), e))
    })
}

/// Resolve the quiz for a module: a user bank entry wins over the
/// built-in one. `bank` is the pre-loaded user bank, if any.
pub fn resolve_quiz<'a>(bank: &'a [Quiz], module_id: u32) -> Option<&'a Quiz> {
    bank.iter()
        .find(|q| q.module_id == module_id)
        .or_else(|| builtin_quiz(module_id))
}
