//! Lessondeck Core
//!
//! This crate provides core types and error definitions for the
//! lessondeck learning-content toolkit.
//!
//! # Overview
//!
//! The core crate contains:
//! - [`Catalog`], [`Module`], [`LessonEntry`], [`Template`], [`Lab`] - The content model
//! - [`Quiz`], [`Question`], [`QuizScore`] - Quiz types and scoring
//! - [`LessondeckError`] - Error types

pub mod catalog;
pub mod error;
pub mod quiz;

pub use catalog::{
    Catalog, Difficulty, Lab, LabCategory, LessonEntry, Module, SearchResults, Template,
};
pub use error::{LessondeckError, Result};
pub use quiz::{grade, Question, Quiz, QuizScore};
