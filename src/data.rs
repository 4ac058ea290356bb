use serde::{Deserialize, Serialize};
use serde_json::Value;

// Type aliases for clarity
pub type HospitalIdx = usize;
pub type Rank = u64;

/// Sentinel for a doctor that received no hospital slot.
pub const UNASSIGNED: i64 = -1;

/// A validated problem instance: a rectangular matrix of positive ranks
/// (rows = doctors, columns = hospitals) and one non-negative capacity per
/// hospital.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentProblem {
    pub ranks: Vec<Vec<Rank>>,
    pub capacities: Vec<usize>,
}

impl AssignmentProblem {
    pub fn n_doctors(&self) -> usize {
        self.ranks.len()
    }

    pub fn n_hospitals(&self) -> usize {
        self.capacities.len()
    }

    pub fn total_slots(&self) -> usize {
        self.capacities.iter().sum()
    }
}

/// Raw request body for the HTTP surface. Ranks and capacities stay
/// dynamically typed here so the validator can report shape and element-type
/// problems with its own messages instead of a serde rejection.
#[derive(Debug, Clone, Deserialize)]
pub struct AssignmentRequest {
    pub ranks: Value,
    pub capacities: Value,
}

/// The final output: one entry per doctor, a hospital index or -1 for
/// unassigned, plus the summed rank of all assigned doctors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentOutput {
    pub assignments: Vec<i64>,
    pub total_rank: u64,
}
