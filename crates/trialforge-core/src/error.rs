//! Error types for TrialForge

use thiserror::Error;

/// Main error type for TrialForge design construction and queries.
///
/// Every variant is a fail-fast, construction-time validation failure: no
/// partially-built factor or level is ever exposed to the caller.
#[derive(Debug, Error)]
pub enum DesignError {
    /// Window constructed with a zero width or stride.
    #[error("window width and stride must be at least 1, but got width {width} and stride {stride}")]
    InvalidWindowShape {
        /// Rejected width.
        width: usize,
        /// Rejected stride.
        stride: usize,
    },

    /// The same factor appears twice in one derivation's argument list.
    #[error("factor '{factor}' is repeated in the argument list of derived level '{level}'")]
    DuplicateFactorInWindow {
        /// Derived level under construction.
        level: String,
        /// Repeated dependent factor.
        factor: String,
    },

    /// A derivation depends on a derived factor that does not apply to
    /// every trial.
    #[error("derived level '{level}' cannot derive from '{dependent}': dependent factors must apply to every trial")]
    InvalidDerivationChain {
        /// Derived level under construction.
        level: String,
        /// Offending dependent factor.
        dependent: String,
    },

    /// Factor constructed with no levels.
    #[error("factor '{factor}' must have at least one level")]
    EmptyLevelList {
        /// Factor under construction.
        factor: String,
    },

    /// Factor constructed with a mix of plain and derived levels.
    #[error("factor '{factor}' mixes plain and derived levels")]
    MixedLevelVariants {
        /// Factor under construction.
        factor: String,
    },

    /// Derived levels within one factor disagree on window shape.
    #[error("derived levels of factor '{factor}' must all share one window shape")]
    InconsistentWindowShape {
        /// Factor under construction.
        factor: String,
    },

    /// Trial numbers are 1-based; zero is not a trial.
    #[error("trial numbers start at 1, but got {trial}")]
    InvalidTrialNumber {
        /// Rejected trial number.
        trial: usize,
    },

    /// A constraint referenced a factor not present in the design.
    #[error("constraint references unknown factor '{factor}'")]
    UnknownFactor {
        /// Referenced factor name.
        factor: String,
    },

    /// A constraint referenced a level not present on its factor.
    #[error("constraint references unknown level '{level}' of factor '{factor}'")]
    UnknownLevel {
        /// Factor the level was looked up on.
        factor: String,
        /// Referenced level name.
        level: String,
    },
}

/// Result type alias for TrialForge operations
pub type Result<T> = std::result::Result<T, DesignError>;
