//! TrialForge - Factorial experimental design primitives in Rust
//!
//! Declare factors and their levels, derive new factors through windows
//! over trial history, and hand the validated design to a block builder
//! and solving backend.
//!
//! # Example
//!
//! ```rust
//! use trialforge::prelude::*;
//!
//! let color = Factor::new("color", ["red", "blue"]).unwrap();
//! let text = Factor::new("text", ["red", "blue"]).unwrap();
//!
//! let congruent = Factor::new(
//!     "congruent?",
//!     [
//!         DerivedLevel::new(
//!             "con",
//!             Window::within_trial(|levels| levels[0] == levels[1], vec![color.clone(), text.clone()]),
//!         )
//!         .unwrap(),
//!         DerivedLevel::new(
//!             "inc",
//!             Window::within_trial(|levels| levels[0] != levels[1], vec![color.clone(), text.clone()]),
//!         )
//!         .unwrap(),
//!     ],
//! )
//! .unwrap();
//!
//! assert!(congruent.is_derived());
//! assert!(!congruent.has_complex_window());
//! assert!(congruent.applies_to_trial(1).unwrap());
//! ```

// Design primitives
pub use trialforge_core::design::{
    DerivationFn, DerivedLevel, Factor, Level, LevelId, SimpleLevel, Window, WindowShape,
};

// Constraint capability contract
pub use trialforge_core::constraint::{desugar_all, Constraint, ConstraintClone};

// Error type
pub use trialforge_core::error::{DesignError, Result};

pub mod prelude {
    pub use super::{
        desugar_all, Constraint, DerivedLevel, DesignError, Factor, Level, LevelId, SimpleLevel,
        Window, WindowShape,
    };
}
