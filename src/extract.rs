use crate::data::{HospitalIdx, UNASSIGNED};

/// Maps solver output back to doctor→hospital assignments.
///
/// Pairs on padding rows (`row >= n_doctors`) belong to fictitious doctors
/// and are dropped. A real doctor matched to a padding column
/// (`col >= slot_to_hospital.len()`) stays at the unassigned sentinel, which
/// is the correct outcome when there are fewer slots than doctors.
pub fn extract_assignments(
    pairs: &[(usize, usize)],
    slot_to_hospital: &[HospitalIdx],
    n_doctors: usize,
) -> Vec<i64> {
    let mut assignments = vec![UNASSIGNED; n_doctors];
    for &(row, col) in pairs {
        if row < n_doctors && col < slot_to_hospital.len() {
            assignments[row] = slot_to_hospital[col] as i64;
        }
    }
    assignments
}
