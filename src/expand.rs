use crate::data::{AssignmentProblem, HospitalIdx, Rank};
use itertools::repeat_n;
use log::trace;

/// The square cost matrix handed to the solver, together with the map from
/// real column index back to hospital index. Columns at or past
/// `slot_to_hospital.len()` are padding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlotExpansion {
    pub cost_matrix: Vec<Vec<Rank>>,
    pub slot_to_hospital: Vec<HospitalIdx>,
}

/// Expands each hospital into one column per unit of capacity and pads the
/// result square.
///
/// Slot order is hospital-major, capacity-minor: all slots of hospital 0
/// come before all slots of hospital 1. The order never affects the optimal
/// cost, only which of several equal-cost matchings the solver picks.
///
/// If there are more slots than doctors, all-zero rows fill in for
/// fictitious doctors who absorb the surplus slots at no cost. If there are
/// more doctors than slots, all-zero columns model "no hospital available";
/// a real doctor matched to one stays unassigned.
pub fn expand_slots(problem: &AssignmentProblem) -> SlotExpansion {
    let n_doctors = problem.n_doctors();
    let slot_to_hospital: Vec<HospitalIdx> = problem
        .capacities
        .iter()
        .enumerate()
        .flat_map(|(hospital, &cap)| repeat_n(hospital, cap))
        .collect();
    let total_slots = slot_to_hospital.len();
    let size = n_doctors.max(total_slots);

    let cost_matrix: Vec<Vec<Rank>> = (0..size)
        .map(|doctor| {
            if doctor < n_doctors {
                let mut row: Vec<Rank> = slot_to_hospital
                    .iter()
                    .map(|&hospital| problem.ranks[doctor][hospital])
                    .collect();
                row.resize(size, 0);
                row
            } else {
                vec![0; size]
            }
        })
        .collect();

    trace!(
        "Expanded {} hospitals into {} slots for {} doctors; cost matrix is {size} x {size}",
        problem.n_hospitals(),
        total_slots,
        n_doctors
    );

    SlotExpansion {
        cost_matrix,
        slot_to_hospital,
    }
}
