//! Core engine for placing traffic signals on an n×n road grid.
//!
//! A valid setup puts exactly one signal in every row such that no two
//! signals share a column or a diagonal. [`Solver`] enumerates every
//! valid [`Placement`] for a given grid size using row-by-row
//! backtracking with constant-time conflict checks.

mod placement;
mod solver;

pub use placement::Placement;
pub use solver::Solver;
