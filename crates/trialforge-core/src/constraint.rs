//! The constraint capability contract.
//!
//! A constraint is something a design must satisfy. Concrete constraints
//! live with the constraint system; this module defines the capability
//! every one of them exposes to block construction and solving backends.

use std::any::Any;
use std::fmt;

use crate::design::Factor;
use crate::error::Result;

/// A rule a design must satisfy.
///
/// Constraints are applied against a fully-built design and a
/// backend-specific accumulation context (a constraint system, an encoding
/// under construction); the backend downcasts the context to its own type.
/// Shorthand constraints expand through [`Constraint::desugar`] before any
/// backend sees them.
pub trait Constraint: ConstraintClone + fmt::Debug + Send + Sync {
    /// Applies this constraint's effect to the backend context.
    ///
    /// Referencing a factor or level not present in `design` must fail
    /// with [`UnknownFactor`](crate::error::DesignError::UnknownFactor) or
    /// [`UnknownLevel`](crate::error::DesignError::UnknownLevel), never
    /// silently no-op.
    fn apply(&self, design: &[Factor], ctx: &mut dyn Any) -> Result<()>;

    /// Expands shorthand into constraints expressed only in terms of
    /// primitive (factor, level) pairs.
    ///
    /// Some constraints accept shorthand representations, like accepting a
    /// whole factor rather than individual factor and level pairs. The
    /// default covers constraints with no shorthand: a single-element
    /// sequence containing the constraint itself. Desugaring is idempotent.
    /// Design construction fully desugars every constraint before solving,
    /// so backends never need to special-case shorthand forms.
    fn desugar(&self) -> Vec<Box<dyn Constraint>> {
        vec![self.clone_box()]
    }
}

/// Clone support for boxed constraints.
///
/// Implemented automatically for every `Clone` constraint; gives
/// `Box<dyn Constraint>` a `Clone` impl so desugared lists stay cloneable.
pub trait ConstraintClone {
    /// Clones this constraint into a fresh box.
    fn clone_box(&self) -> Box<dyn Constraint>;
}

impl<C> ConstraintClone for C
where
    C: Constraint + Clone + 'static,
{
    fn clone_box(&self) -> Box<dyn Constraint> {
        Box::new(self.clone())
    }
}

impl Clone for Box<dyn Constraint> {
    fn clone(&self) -> Self {
        self.clone_box()
    }
}

/// Fully desugars a constraint list.
///
/// Design construction runs every constraint through
/// [`Constraint::desugar`] and hands backends the flattened result.
pub fn desugar_all(constraints: Vec<Box<dyn Constraint>>) -> Vec<Box<dyn Constraint>> {
    constraints
        .into_iter()
        .flat_map(|constraint| constraint.desugar())
        .collect()
}
