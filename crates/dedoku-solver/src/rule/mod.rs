//! First-pass solving rules.
//!
//! Each rule implements the [`Rule`] trait and is applied across the whole
//! board by the fixed-point driver in
//! [`Solver`](crate::Solver). Progress is reported through the board's
//! change flag rather than a return value, so a pass of several rules can
//! be driven to a fixed point cheaply.

use std::fmt::Debug;

use dedoku_core::{Board, UnitKind};

pub use self::{elimination::Eliminator, single_seeker::SingleSeeker};
use crate::SolveError;

mod elimination;
mod single_seeker;

/// A deductive solving rule.
pub trait Rule: Debug {
    /// Returns the name of the rule.
    fn name(&self) -> &'static str;

    /// Applies the rule across the whole board, raising the board's change
    /// flag for any candidate it removes or forces.
    ///
    /// # Errors
    ///
    /// Returns an error when the rule proves the board unsatisfiable or
    /// detects a logic fault.
    fn apply(&self, board: &mut Board) -> Result<(), SolveError>;
}

/// A boxed rule.
pub type BoxedRule = Box<dyn Rule>;

/// Returns the first-pass rule set in application order: the three
/// eliminators followed by the three single-candidate seekers, each
/// covering boxes, then rows, then columns.
///
/// The rules are order-independent up to convergence speed; this order
/// keeps the cheap eliminations ahead of the seeker scans.
#[must_use]
pub fn first_pass_rules() -> Vec<BoxedRule> {
    vec![
        Box::new(Eliminator::new(UnitKind::Box)),
        Box::new(Eliminator::new(UnitKind::Row)),
        Box::new(Eliminator::new(UnitKind::Column)),
        Box::new(SingleSeeker::new(UnitKind::Box)),
        Box::new(SingleSeeker::new(UnitKind::Row)),
        Box::new(SingleSeeker::new(UnitKind::Column)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_pass_rule_order() {
        let rules = first_pass_rules();
        let names: Vec<_> = rules.iter().map(|rule| rule.name()).collect();
        assert_eq!(
            names,
            [
                "box eliminator",
                "row eliminator",
                "column eliminator",
                "box single seeker",
                "row single seeker",
                "column single seeker",
            ]
        );
    }
}
