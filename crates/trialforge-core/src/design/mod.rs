//! Design primitives for factorial experiments
//!
//! These types describe the shape of an experiment:
//! - `Level`: one value a factor can take, plain or derived
//! - `Window`: how a derivation reads trial history (width and stride)
//! - `Factor`: a named, validated, ordered set of levels
//!
//! Block construction, constraint desugaring, and solving backends consume
//! these read-only; everything is immutable after construction.

mod factor;
mod level;
mod window;


pub use factor::Factor;
pub use level::{DerivedLevel, Level, LevelId, SimpleLevel};
pub use window::{DerivationFn, Window, WindowShape};
