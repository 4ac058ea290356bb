use crate::data::{AssignmentProblem, Rank};
use serde_json::Value;
use thiserror::Error;

/// Everything that can be wrong with raw input. The message strings are part
/// of the external contract and must not change.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Expected list of lists of positive integers for ranks")]
    MalformedRanks,
    #[error("Expected each doctor to rank the same number of hospitals")]
    RaggedRows,
    #[error("Expected ranks to be positive")]
    NonPositiveRank,
    #[error("Expected capacities to be non-negative integers")]
    BadCapacities,
    #[error("Expected one capacity provided for each hospital")]
    CapacityCountMismatch,
}

/// Parses and checks raw rank and capacity data in one pass at the boundary,
/// producing a strongly-typed problem instance. Checks run in a fixed order
/// and the first failure wins; nothing downstream sees unvalidated data.
pub fn validate(ranks: &Value, capacities: &Value) -> Result<AssignmentProblem, ValidationError> {
    // 1. ranks must be a list of lists of integers (no deeper nesting,
    //    no floats, no strings)
    let rows = ranks.as_array().ok_or(ValidationError::MalformedRanks)?;
    let mut parsed: Vec<Vec<i64>> = Vec::with_capacity(rows.len());
    for row in rows {
        let row = row.as_array().ok_or(ValidationError::MalformedRanks)?;
        let mut entries = Vec::with_capacity(row.len());
        for entry in row {
            entries.push(entry.as_i64().ok_or(ValidationError::MalformedRanks)?);
        }
        parsed.push(entries);
    }

    // 2. every doctor ranks the same number of hospitals; an empty matrix
    //    has no common row length to agree on
    let n_hospitals = match parsed.first() {
        Some(first) => first.len(),
        None => return Err(ValidationError::RaggedRows),
    };
    if parsed.iter().any(|row| row.len() != n_hospitals) {
        return Err(ValidationError::RaggedRows);
    }

    // 3. ranks are strictly positive
    if parsed.iter().flatten().any(|&rank| rank <= 0) {
        return Err(ValidationError::NonPositiveRank);
    }

    // 4. capacities are a list of non-negative integers
    let raw_caps = capacities
        .as_array()
        .ok_or(ValidationError::BadCapacities)?;
    let mut caps = Vec::with_capacity(raw_caps.len());
    for cap in raw_caps {
        let cap = cap.as_i64().ok_or(ValidationError::BadCapacities)?;
        if cap < 0 {
            return Err(ValidationError::BadCapacities);
        }
        caps.push(cap as usize);
    }

    // 5. one capacity per hospital
    if caps.len() != n_hospitals {
        return Err(ValidationError::CapacityCountMismatch);
    }

    Ok(AssignmentProblem {
        ranks: parsed
            .into_iter()
            .map(|row| row.into_iter().map(|rank| rank as Rank).collect())
            .collect(),
        capacities: caps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn rejects_flat_rank_list() {
        let err = validate(&json!([3, 2, 1]), &json!([1, 1, 1])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Expected list of lists of positive integers for ranks"
        );
    }

    #[test]
    fn rejects_three_dimensional_ranks() {
        let ranks = json!([[[1, 2], [2, 1]], [[1, 2], [2, 1]]]);
        let err = validate(&ranks, &json!([1, 1])).unwrap_err();
        assert_eq!(err, ValidationError::MalformedRanks);
    }

    #[test]
    fn rejects_string_ranks() {
        let ranks = json!([["a", "b", "c"], ["b", "c", "a"]]);
        let err = validate(&ranks, &json!([1, 1, 1])).unwrap_err();
        assert_eq!(err, ValidationError::MalformedRanks);
    }

    #[test]
    fn rejects_fractional_ranks() {
        let ranks = json!([[0.5, 1.1, 4.6], [1, 2, 3]]);
        let err = validate(&ranks, &json!([1, 1, 1])).unwrap_err();
        assert_eq!(err, ValidationError::MalformedRanks);
    }

    #[test]
    fn rejects_ragged_rows() {
        let err = validate(&json!([[1, 2, 3], [2, 1]]), &json!([1, 1, 1])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Expected each doctor to rank the same number of hospitals"
        );
    }

    #[test]
    fn rejects_empty_rank_matrix() {
        let err = validate(&json!([]), &json!([])).unwrap_err();
        assert_eq!(err, ValidationError::RaggedRows);
    }

    #[test]
    fn rejects_non_positive_ranks() {
        let err = validate(&json!([[1, 2, 3], [2, 1, -1]]), &json!([1, 1, 1])).unwrap_err();
        assert_eq!(err.to_string(), "Expected ranks to be positive");
    }

    #[test]
    fn rejects_negative_capacity() {
        let err = validate(&json!([[1, 2, 3], [2, 1, 3]]), &json!([1, 1, -1])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Expected capacities to be non-negative integers"
        );
    }

    #[test]
    fn rejects_fractional_capacity() {
        let err = validate(&json!([[1, 2], [2, 1]]), &json!([1, 0.5])).unwrap_err();
        assert_eq!(err, ValidationError::BadCapacities);
    }

    #[test]
    fn rejects_capacity_count_mismatch() {
        let err = validate(&json!([[1, 2, 3], [2, 1, 3]]), &json!([1, 1])).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Expected one capacity provided for each hospital"
        );
    }

    #[test]
    fn accepts_well_formed_input() {
        let problem = validate(&json!([[1, 2], [2, 1]]), &json!([1, 1])).unwrap();
        assert_eq!(problem.n_doctors(), 2);
        assert_eq!(problem.n_hospitals(), 2);
        assert_eq!(problem.total_slots(), 2);
        assert_eq!(problem.ranks, vec![vec![1, 2], vec![2, 1]]);
    }

    #[test]
    fn accepts_zero_capacity() {
        let problem = validate(&json!([[1, 2]]), &json!([0, 2])).unwrap();
        assert_eq!(problem.capacities, vec![0, 2]);
    }
}
