//! Capacitated doctor→hospital assignment.
//!
//! Doctors rank hospitals (1 = most preferred), each hospital has a fixed
//! number of open slots, and [`assign`] returns the assignment minimizing
//! total rank. The capacity problem is reduced to a square one-to-one
//! matching: each hospital becomes one cost column per slot, the matrix is
//! zero-padded square, an exact solver finds the minimum-cost perfect
//! matching, and padding matches are discarded on the way back out.

pub mod data;
pub mod expand;
pub mod extract;
pub mod server;
pub mod solver;
pub mod validate;

use serde_json::Value;
use thiserror::Error;

pub use data::{AssignmentOutput, AssignmentProblem, UNASSIGNED};
pub use solver::{AssignmentSolver, IlpSolver, KuhnMunkresSolver};
pub use validate::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssignError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    /// A failure reported by the matching solver, passed through unmodified.
    #[error("{0}")]
    Solver(String),
}

/// Assigns doctors to hospitals with the default ILP solver.
///
/// `ranks` must be a two-dimensional array of positive integers (rows =
/// doctors, columns = hospitals); `capacities` a one-dimensional array of
/// non-negative integers, one per hospital. The result holds one entry per
/// doctor: a hospital index, or -1 when no slot was left for them.
pub fn assign(ranks: &Value, capacities: &Value) -> Result<AssignmentOutput, AssignError> {
    assign_with(&IlpSolver, ranks, capacities)
}

/// Like [`assign`], with an explicit solver.
pub fn assign_with(
    solver: &dyn AssignmentSolver,
    ranks: &Value,
    capacities: &Value,
) -> Result<AssignmentOutput, AssignError> {
    let problem = validate::validate(ranks, capacities)?;
    let expansion = expand::expand_slots(&problem);
    let pairs = solver
        .solve(&expansion.cost_matrix)
        .map_err(AssignError::Solver)?;
    let assignments =
        extract::extract_assignments(&pairs, &expansion.slot_to_hospital, problem.n_doctors());
    let total_rank = assignments
        .iter()
        .enumerate()
        .filter(|&(_, &hospital)| hospital != UNASSIGNED)
        .map(|(doctor, &hospital)| problem.ranks[doctor][hospital as usize])
        .sum();
    Ok(AssignmentOutput {
        assignments,
        total_rank,
    })
}
