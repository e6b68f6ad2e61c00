//! Factors: named experimental variables.

use tracing::debug;

use crate::design::level::{Level, LevelId};
use crate::design::window::Window;
use crate::error::{DesignError, Result};

/// A named experimental variable with an ordered, non-empty set of levels.
///
/// All levels of one factor share a variant: every level is plain, or every
/// level is derived. Derived factors additionally share one window shape
/// across all of their levels. Two factors are equal only if they match in
/// every constructed detail: name and full level list.
///
/// # Example
///
/// ```
/// use trialforge_core::design::Factor;
///
/// let color = Factor::new("color", ["red", "blue"]).unwrap();
///
/// assert_eq!(color.name(), "color");
/// assert!(!color.is_derived());
/// assert!(color.applies_to_trial(1).unwrap());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Factor {
    name: String,
    levels: Vec<Level>,
}

impl Factor {
    /// Creates a factor from a display name and level specifications.
    ///
    /// Bare values are wrapped into plain levels automatically; derived
    /// levels are passed pre-built. Fails with
    /// [`DesignError::EmptyLevelList`] for an empty level list,
    /// [`DesignError::MixedLevelVariants`] when plain and derived levels
    /// are mixed, and [`DesignError::InconsistentWindowShape`] when derived
    /// levels disagree on window shape.
    pub fn new<I>(name: impl Into<String>, levels: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Level>,
    {
        let name = name.into();
        let levels: Vec<Level> = levels.into_iter().map(Into::into).collect();
        validate_levels(&name, &levels)?;
        debug!("Constructed factor '{}' with {} levels", name, levels.len());
        Ok(Factor { name, levels })
    }

    /// Factor display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The factor's levels, in declaration order.
    pub fn levels(&self) -> &[Level] {
        &self.levels
    }

    /// Returns true if this factor's levels are derived.
    pub fn is_derived(&self) -> bool {
        self.levels[0].is_derived()
    }

    /// The window shared by this factor's derived levels, or `None` for a
    /// plain factor.
    pub fn window(&self) -> Option<&Window> {
        self.levels[0].window()
    }

    /// Returns true if this factor is derived through a window that spans
    /// more than one trial or skips trials.
    ///
    /// Solving backends use this to choose a strategy: only factors without
    /// complex windows are eligible for the fast combinatorial-counting
    /// path; everything else requires full constraint solving.
    pub fn has_complex_window(&self) -> bool {
        self.window().is_some_and(|w| w.shape().is_complex())
    }

    /// Looks up a level by its unique identifier.
    ///
    /// A missing identifier is a valid outcome, not an error.
    pub fn get_level(&self, id: LevelId) -> Option<&Level> {
        self.levels.iter().find(|level| level.id() == id)
    }

    /// Looks up a level by display name.
    pub fn level_named(&self, name: &str) -> Option<&Level> {
        self.levels.iter().find(|level| level.name() == name)
    }

    /// Returns true if this factor applies to the given trial. (1-based)
    ///
    /// Plain factors apply to every trial. A derived factor cannot produce
    /// a value before `width` trials of history exist, and afterward
    /// reapplies every `stride` trials: a transition factor does not apply
    /// to trial 1, but applies to every trial after it. Block construction
    /// uses this rule to decide, per trial column, which factors are live.
    pub fn applies_to_trial(&self, trial: usize) -> Result<bool> {
        if trial == 0 {
            return Err(DesignError::InvalidTrialNumber { trial });
        }
        Ok(match self.window() {
            None => true,
            Some(window) => {
                trial >= window.width() && (trial - window.width()) % window.stride() == 0
            }
        })
    }
}

fn validate_levels(name: &str, levels: &[Level]) -> Result<()> {
    if levels.is_empty() {
        return Err(DesignError::EmptyLevelList {
            factor: name.to_string(),
        });
    }
    let first_derived = levels[0].is_derived();
    if levels.iter().any(|level| level.is_derived() != first_derived) {
        return Err(DesignError::MixedLevelVariants {
            factor: name.to_string(),
        });
    }
    if let Some(window) = levels[0].window() {
        let shape = window.shape();
        if levels
            .iter()
            .any(|level| level.window().map(Window::shape) != Some(shape))
        {
            return Err(DesignError::InconsistentWindowShape {
                factor: name.to_string(),
            });
        }
    }
    Ok(())
}
