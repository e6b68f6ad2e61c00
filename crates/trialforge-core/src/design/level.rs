//! Level types.
//!
//! A level is one value a factor can take: a plain value, or a value
//! computed by a derivation function over other factors' levels within a
//! window of trials. Levels are immutable after construction.

use std::sync::atomic::{AtomicU64, Ordering};

use tracing::trace;

use crate::design::window::Window;
use crate::error::{DesignError, Result};

static NEXT_LEVEL_ID: AtomicU64 = AtomicU64::new(0);

/// Opaque unique identifier for a level.
///
/// The same display name may legitimately be reused across factors (two
/// factors can both have a "red" level); identifiers tell such levels
/// apart. Identifiers never participate in level equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelId(u64);

impl LevelId {
    fn next() -> Self {
        LevelId(NEXT_LEVEL_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw identifier value.
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// A plain level: an explicit value a factor can take.
///
/// # Example
///
/// ```
/// use trialforge_core::design::SimpleLevel;
///
/// let a = SimpleLevel::new("red");
/// let b = SimpleLevel::new("red");
///
/// assert_eq!(a, b);
/// assert_ne!(a.id(), b.id());
/// ```
#[derive(Debug, Clone, Eq)]
pub struct SimpleLevel {
    name: String,
    id: LevelId,
}

impl SimpleLevel {
    /// Creates a plain level with the given display name.
    pub fn new(name: impl Into<String>) -> Self {
        SimpleLevel {
            name: name.into(),
            id: LevelId::next(),
        }
    }

    /// External display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Internal unique identifier.
    pub fn id(&self) -> LevelId {
        self.id
    }
}

/// Plain levels compare by display name; identifiers are excluded.
impl PartialEq for SimpleLevel {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

/// A derived level: a value computed by a derivation function applied over
/// a window of trials.
#[derive(Debug, Clone)]
pub struct DerivedLevel {
    name: String,
    id: LevelId,
    window: Window,
}

impl DerivedLevel {
    /// Creates a derived level computing its value through `window`.
    ///
    /// Fails with [`DesignError::DuplicateFactorInWindow`] if the window
    /// lists the same dependent factor twice, and with
    /// [`DesignError::InvalidDerivationChain`] if a dependent factor is
    /// itself derived through a window that does not apply to every trial.
    pub fn new(name: impl Into<String>, window: Window) -> Result<Self> {
        let name = name.into();
        validate_window_args(&name, &window)?;
        trace!(
            "Constructed derived level '{}' over {} dependent factors",
            name,
            window.args().len()
        );
        Ok(DerivedLevel {
            name,
            id: LevelId::next(),
            window,
        })
    }

    /// External display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Internal unique identifier.
    pub fn id(&self) -> LevelId {
        self.id
    }

    /// The window this level's value is derived through.
    pub fn window(&self) -> &Window {
        &self.window
    }

    /// Enumerates every combination of dependent level assignments.
    ///
    /// Returns the Cartesian product, across the width-expanded dependent
    /// arguments, of (factor name, level identifier) pairs: one inner
    /// vector per combination, argument-major. Solving backends walk this
    /// to determine, for each combination of upstream levels, what this
    /// level's value would be.
    pub fn get_dependent_cross_product(&self) -> Vec<Vec<(String, LevelId)>> {
        let mut product: Vec<Vec<(String, LevelId)>> = vec![Vec::new()];
        for factor in self.window.expanded_args() {
            let mut next = Vec::with_capacity(product.len() * factor.levels().len());
            for combination in &product {
                for level in factor.levels() {
                    let mut extended = combination.clone();
                    extended.push((factor.name().to_string(), level.id()));
                    next.push(extended);
                }
            }
            product = next;
        }
        product
    }
}

/// Derived levels compare by display name; identifiers and windows are
/// excluded.
impl PartialEq for DerivedLevel {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for DerivedLevel {}

fn validate_window_args(level: &str, window: &Window) -> Result<()> {
    let args = window.args();
    for (i, arg) in args.iter().enumerate() {
        if args[..i].iter().any(|earlier| earlier.name() == arg.name()) {
            return Err(DesignError::DuplicateFactorInWindow {
                level: level.to_string(),
                factor: arg.name().to_string(),
            });
        }
    }
    for arg in args {
        if let Some(dependent_window) = arg.window() {
            if dependent_window.shape().is_complex() {
                return Err(DesignError::InvalidDerivationChain {
                    level: level.to_string(),
                    dependent: arg.name().to_string(),
                });
            }
        }
    }
    Ok(())
}

/// One possible value of a factor.
///
/// Same-variant levels compare by display name only; a plain level never
/// equals a derived one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Level {
    /// An explicit value.
    Simple(SimpleLevel),
    /// A value computed from other factors' levels.
    Derived(DerivedLevel),
}

impl Level {
    /// External display name.
    pub fn name(&self) -> &str {
        match self {
            Level::Simple(level) => level.name(),
            Level::Derived(level) => level.name(),
        }
    }

    /// Internal unique identifier.
    pub fn id(&self) -> LevelId {
        match self {
            Level::Simple(level) => level.id(),
            Level::Derived(level) => level.id(),
        }
    }

    /// The derivation window, for derived levels.
    pub fn window(&self) -> Option<&Window> {
        match self {
            Level::Simple(_) => None,
            Level::Derived(level) => Some(level.window()),
        }
    }

    /// Returns true if this is a derived level.
    pub fn is_derived(&self) -> bool {
        matches!(self, Level::Derived(_))
    }
}

impl From<&str> for Level {
    fn from(name: &str) -> Self {
        Level::Simple(SimpleLevel::new(name))
    }
}

impl From<String> for Level {
    fn from(name: String) -> Self {
        Level::Simple(SimpleLevel::new(name))
    }
}

impl From<SimpleLevel> for Level {
    fn from(level: SimpleLevel) -> Self {
        Level::Simple(level)
    }
}

impl From<DerivedLevel> for Level {
    fn from(level: DerivedLevel) -> Self {
        Level::Derived(level)
    }
}
