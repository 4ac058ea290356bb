use crate::data::Rank;
use good_lp::variable;
use good_lp::{
    Expression, ProblemVariables, Solution, SolverModel, Variable, constraint, default_solver,
};
use itertools::Itertools;
use log::{info, trace};
use pathfinding::kuhn_munkres::{Weights, kuhn_munkres};
use std::collections::HashMap;
use std::time::Instant;

/// An exact minimum-cost perfect-matching solver over a square cost matrix.
///
/// Implementations must return exactly one (row, col) pair per row, with all
/// rows and all columns distinct, minimizing the summed cost. Any solver
/// meeting that contract is interchangeable; tie-breaks among equal-cost
/// matchings are implementation-defined.
pub trait AssignmentSolver {
    fn solve(&self, cost: &[Vec<Rank>]) -> Result<Vec<(usize, usize)>, String>;
}

/// Solves the matching as a 0/1 integer program using the HiGHS ILP solver.
pub struct IlpSolver;

impl AssignmentSolver for IlpSolver {
    fn solve(&self, cost: &[Vec<Rank>]) -> Result<Vec<(usize, usize)>, String> {
        let size = cost.len();
        if size == 0 {
            return Ok(Vec::new());
        }
        let start_time = Instant::now();

        // model setup
        info!("Setting up ILP model for a {size} x {size} cost matrix...");
        let mut problem = ProblemVariables::new();

        // x_rc =  1 if row r is matched to column c
        //         0 otherwise
        let cells = (0..size).cartesian_product(0..size).collect_vec();
        let cell_vars_vec = problem.add_vector(variable().binary(), cells.len());
        let mut cell_vars: HashMap<(usize, usize), Variable> = HashMap::new();
        for (i, &(row, col)) in cells.iter().enumerate() {
            cell_vars.insert((row, col), cell_vars_vec[i]);
        }
        trace!("Generated {} assignment variables.", cells.len());

        let objective = cell_vars
            .iter()
            .fold(Expression::from(0.0), |acc, (&(row, col), &var)| {
                acc + (cost[row][col] as f64) * var
            });

        let mut model = problem
            .minimise(objective)
            .using(default_solver)
            .set_option("threads", 1) // limit to 1 thread for reproducibility
            .set_option("random_seed", 1234) //set seed for reproducibility
            .set_option("log_to_console", "false");

        // each row matched exactly once
        for row in 0..size {
            let row_sum: Expression = (0..size).map(|col| cell_vars[&(row, col)]).sum();
            model.add_constraint(constraint!(row_sum == 1));
        }

        // each column matched exactly once
        for col in 0..size {
            let col_sum: Expression = (0..size).map(|row| cell_vars[&(row, col)]).sum();
            model.add_constraint(constraint!(col_sum == 1));
        }

        // solve
        let solution = match model.solve() {
            Ok(s) => s,
            Err(e) => {
                return Err(format!(
                    "No perfect matching found for the cost matrix. Solver error: {}",
                    e
                ));
            }
        };
        info!("Matching found in {:.2?}", start_time.elapsed());

        // read the matching back out of the solution
        let mut pairs = Vec::with_capacity(size);
        for (&(row, col), var) in &cell_vars {
            if solution.value(*var) > 0.9 {
                pairs.push((row, col));
            }
        }
        pairs.sort();
        Ok(pairs)
    }
}

/// Solves the matching with the Hungarian algorithm. Costs are negated so
/// the maximum-weight matching `kuhn_munkres` finds is the minimum-cost one.
pub struct KuhnMunkresSolver;

struct CostWeights(Vec<Vec<i64>>);

impl Weights<i64> for CostWeights {
    fn rows(&self) -> usize {
        self.0.len()
    }

    fn columns(&self) -> usize {
        self.0.first().map_or(0, |row| row.len())
    }

    fn at(&self, row: usize, col: usize) -> i64 {
        self.0[row][col]
    }

    fn neg(&self) -> Self {
        CostWeights(
            self.0
                .iter()
                .map(|row| row.iter().map(|&w| w.saturating_neg()).collect())
                .collect(),
        )
    }
}

impl AssignmentSolver for KuhnMunkresSolver {
    fn solve(&self, cost: &[Vec<Rank>]) -> Result<Vec<(usize, usize)>, String> {
        if cost.is_empty() {
            return Ok(Vec::new());
        }
        let weights = CostWeights(
            cost.iter()
                .map(|row| {
                    row.iter()
                        .map(|&c| -i64::try_from(c).unwrap_or(i64::MAX))
                        .collect()
                })
                .collect(),
        );
        let (_, columns) = kuhn_munkres(&weights);
        Ok(columns.into_iter().enumerate().collect())
    }
}
