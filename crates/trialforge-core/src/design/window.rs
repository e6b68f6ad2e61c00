//! Derivation windows.
//!
//! A window describes how a derived level's value is computed: which factors
//! the derivation reads, how many consecutive trials it consumes (width),
//! and how often it reapplies (stride). The per-trial and transition shapes
//! are convenience constructors over the one general mechanism.

use std::fmt;
use std::sync::Arc;

use crate::design::factor::Factor;
use crate::error::{DesignError, Result};

/// Derivation predicate over dependent level names.
///
/// The predicate receives one display name per (argument, trial-offset)
/// pair in argument-major order: a transition window over `[color]` passes
/// a slice of color at the earlier trial followed by color at the later
/// trial, and returns whether this level applies to that combination.
pub type DerivationFn = Arc<dyn Fn(&[&str]) -> bool + Send + Sync>;

/// The (width, stride) pairing of a window, compared structurally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WindowShape {
    /// Number of consecutive trials the derivation reads.
    pub width: usize,
    /// Spacing, in trials, between reapplication points.
    pub stride: usize,
}

impl WindowShape {
    /// Returns true if this shape spans more than one trial or skips trials.
    ///
    /// Factors derived through complex windows are ineligible for the fast
    /// combinatorial-counting path and require full constraint solving.
    pub fn is_complex(&self) -> bool {
        self.width > 1 || self.stride > 1
    }
}

/// How a derived level's value is computed across trials.
///
/// # Example
///
/// ```
/// use trialforge_core::design::{Factor, Window};
///
/// let color = Factor::new("color", ["red", "blue"]).unwrap();
/// let repeats = Window::transition(|colors| colors[0] == colors[1], vec![color]);
///
/// assert_eq!(repeats.width(), 2);
/// assert_eq!(repeats.stride(), 1);
/// assert!(repeats.shape().is_complex());
/// ```
#[derive(Clone)]
pub struct Window {
    predicate: DerivationFn,
    args: Vec<Factor>,
    expanded_args: Vec<Factor>,
    width: usize,
    stride: usize,
}

impl Window {
    /// Creates a general window reading `width` consecutive trials and
    /// reapplying every `stride` trials.
    ///
    /// Width and stride must both be at least 1.
    pub fn new<F>(predicate: F, args: Vec<Factor>, width: usize, stride: usize) -> Result<Self>
    where
        F: Fn(&[&str]) -> bool + Send + Sync + 'static,
    {
        if width == 0 || stride == 0 {
            return Err(DesignError::InvalidWindowShape { width, stride });
        }
        Ok(Self::with_shape(Arc::new(predicate), args, width, stride))
    }

    /// Creates a per-trial window: the derivation reads only the current
    /// trial and applies to every trial.
    pub fn within_trial<F>(predicate: F, args: Vec<Factor>) -> Self
    where
        F: Fn(&[&str]) -> bool + Send + Sync + 'static,
    {
        Self::with_shape(Arc::new(predicate), args, 1, 1)
    }

    /// Creates a transition window: the derivation reads the previous trial
    /// and the current trial.
    pub fn transition<F>(predicate: F, args: Vec<Factor>) -> Self
    where
        F: Fn(&[&str]) -> bool + Send + Sync + 'static,
    {
        Self::with_shape(Arc::new(predicate), args, 2, 1)
    }

    fn with_shape(predicate: DerivationFn, args: Vec<Factor>, width: usize, stride: usize) -> Self {
        let expanded_args = expand_args(&args, width);
        Window {
            predicate,
            args,
            expanded_args,
            width,
            stride,
        }
    }

    /// The dependent factors, in declaration order.
    pub fn args(&self) -> &[Factor] {
        &self.args
    }

    /// The dependent factors with each argument repeated once per unit of
    /// width, argument-major.
    ///
    /// Downstream code builds the full dependent cross-product from this
    /// list without re-deriving window semantics: the predicate receives one
    /// value per entry.
    pub fn expanded_args(&self) -> &[Factor] {
        &self.expanded_args
    }

    /// Number of consecutive trials the derivation reads.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Spacing, in trials, between reapplication points.
    pub fn stride(&self) -> usize {
        self.stride
    }

    /// The structural shape of this window.
    pub fn shape(&self) -> WindowShape {
        WindowShape {
            width: self.width,
            stride: self.stride,
        }
    }

    /// Applies the derivation predicate to one combination of dependent
    /// level names, ordered like [`Window::expanded_args`].
    pub fn evaluate(&self, values: &[&str]) -> bool {
        (self.predicate)(values)
    }
}

impl fmt::Debug for Window {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Window")
            .field("width", &self.width)
            .field("stride", &self.stride)
            .field("args", &self.args.iter().map(Factor::name).collect::<Vec<_>>())
            .finish()
    }
}

/// Pure expansion of a window's argument list: each argument repeated once
/// per unit of width, argument-major. Computed once at construction and
/// never re-mutated.
fn expand_args(args: &[Factor], width: usize) -> Vec<Factor> {
    args.iter()
        .flat_map(|arg| std::iter::repeat(arg.clone()).take(width))
        .collect()
}
