//! TrialForge Core - Primitive data model for factorial experimental designs
//!
//! This crate provides the fundamental abstractions for TrialForge:
//! - Level types for the values a factor can take
//! - Window types describing how derived levels read trial history
//! - Factor construction, validation, and trial-applicability queries
//! - The constraint capability contract consumed by solving backends

pub mod constraint;
pub mod design;
pub mod error;


pub use constraint::{desugar_all, Constraint, ConstraintClone};
pub use design::{DerivedLevel, Factor, Level, LevelId, SimpleLevel, Window, WindowShape};
pub use error::DesignError;
