use std::collections::HashSet;

use log::debug;

use crate::Placement;

/// Exhaustive solver for the signal placement problem.
///
/// Rows are filled in ascending order and columns are tried in ascending
/// order within each row, so the returned sequence is deterministic:
/// repeated calls with the same size yield placements in the same
/// discovery order.
#[derive(Debug, Default)]
pub struct Solver;

impl Solver {
    /// Create a new solver.
    pub fn new() -> Self {
        Self
    }

    /// Enumerate every valid placement on an `n`×`n` grid.
    ///
    /// Returns all setups where no two signals share a column or a
    /// diagonal, one signal per row, with no duplicates. A size of 0
    /// yields a single empty placement, following the combinatorial
    /// convention that the empty grid has exactly one (trivial) setup.
    pub fn solve(&self, n: usize) -> Vec<Placement> {
        let mut solutions = Vec::new();
        let mut state = SearchState::new(n);
        state.search(0, &mut |cols| {
            solutions.push(Placement::from_columns(cols.to_vec()));
        });
        debug!(
            "enumerated {} placements on a {}x{} grid",
            solutions.len(),
            n,
            n
        );
        solutions
    }

    /// Count valid placements without materializing them.
    pub fn count_solutions(&self, n: usize) -> usize {
        let mut count = 0;
        let mut state = SearchState::new(n);
        state.search(0, &mut |_| count += 1);
        count
    }
}

/// In-flight search state: the partial assignment plus the occupied
/// columns and diagonals, kept in sync for O(1) safety checks.
struct SearchState {
    n: usize,
    /// Columns assigned so far; index is the row.
    grid: Vec<usize>,
    cols: HashSet<i64>,
    /// Occupied "/" diagonals, identified by `row - col`.
    diag1: HashSet<i64>,
    /// Occupied "\" diagonals, identified by `row + col`.
    diag2: HashSet<i64>,
}

impl SearchState {
    fn new(n: usize) -> Self {
        Self {
            n,
            grid: Vec::with_capacity(n),
            cols: HashSet::new(),
            diag1: HashSet::new(),
            diag2: HashSet::new(),
        }
    }

    fn is_safe(&self, row: usize, col: usize) -> bool {
        let (r, c) = (row as i64, col as i64);
        !self.cols.contains(&c)
            && !self.diag1.contains(&(r - c))
            && !self.diag2.contains(&(r + c))
    }

    /// Try every column for `row`, recursing on each safe candidate and
    /// restoring the state exactly before moving to the next column.
    fn search(&mut self, row: usize, emit: &mut dyn FnMut(&[usize])) {
        if row == self.n {
            // the working vector keeps mutating as we backtrack, so the
            // callback must copy anything it wants to keep
            emit(&self.grid);
            return;
        }

        for col in 0..self.n {
            if !self.is_safe(row, col) {
                continue;
            }

            let (r, c) = (row as i64, col as i64);
            self.grid.push(col);
            self.cols.insert(c);
            self.diag1.insert(r - c);
            self.diag2.insert(r + c);

            self.search(row + 1, emit);

            self.grid.pop();
            self.cols.remove(&c);
            self.diag1.remove(&(r - c));
            self.diag2.remove(&(r + c));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_known_counts() {
        let solver = Solver::new();

        assert_eq!(solver.solve(1).len(), 1);
        assert_eq!(solver.solve(2).len(), 0);
        assert_eq!(solver.solve(3).len(), 0);
        assert_eq!(solver.solve(4).len(), 2);
        assert_eq!(solver.solve(5).len(), 10);
        assert_eq!(solver.solve(6).len(), 4);
        assert_eq!(solver.solve(8).len(), 92);
    }

    #[test]
    fn test_count_matches_solve() {
        let solver = Solver::new();

        for n in 0..=8 {
            assert_eq!(solver.count_solutions(n), solver.solve(n).len());
        }
    }

    #[test]
    fn test_size_zero_yields_one_empty_placement() {
        let solver = Solver::new();
        let solutions = solver.solve(0);

        assert_eq!(solutions.len(), 1);
        assert_eq!(solutions[0].size(), 0);
    }

    #[test]
    fn test_size_four_exact_solutions() {
        let solver = Solver::new();
        let solutions = solver.solve(4);

        assert_eq!(solutions.len(), 2);
        assert_eq!(solutions[0].columns(), &[1, 3, 0, 2]);
        assert_eq!(solutions[1].columns(), &[2, 0, 3, 1]);
    }

    #[test]
    fn test_all_placements_are_valid() {
        let solver = Solver::new();

        for n in 1..=7 {
            for placement in solver.solve(n) {
                assert!(placement.is_valid(), "invalid placement for n={}", n);
                assert_eq!(placement.size(), n);
            }
        }
    }

    #[test]
    fn test_no_duplicates() {
        let solver = Solver::new();

        for n in 1..=8 {
            let solutions = solver.solve(n);
            let unique: HashSet<_> = solutions.iter().collect();
            assert_eq!(unique.len(), solutions.len());
        }
    }

    #[test]
    fn test_deterministic_across_calls() {
        let solver = Solver::new();

        for n in 0..=7 {
            assert_eq!(solver.solve(n), solver.solve(n));
        }
    }

    /// Every column-per-row assignment on an n×n grid, n^n in total.
    fn all_assignments(n: usize) -> Vec<Vec<usize>> {
        let mut assignments = vec![Vec::new()];
        for _ in 0..n {
            assignments = assignments
                .into_iter()
                .flat_map(|partial| {
                    (0..n).map(move |col| {
                        let mut next = partial.clone();
                        next.push(col);
                        next
                    })
                })
                .collect();
        }
        assignments
    }

    /// Pairwise check written independently of the solver's conflict sets.
    fn attack_free(cols: &[usize]) -> bool {
        for i in 0..cols.len() {
            for j in (i + 1)..cols.len() {
                let row_gap = j - i;
                let col_gap = cols[i].abs_diff(cols[j]);
                if cols[i] == cols[j] || row_gap == col_gap {
                    return false;
                }
            }
        }
        true
    }

    #[test]
    fn test_complete_against_brute_force() {
        let solver = Solver::new();

        for n in 0..=6 {
            let expected: HashSet<Vec<usize>> = all_assignments(n)
                .into_iter()
                .filter(|cols| attack_free(cols))
                .collect();
            let found: HashSet<Vec<usize>> = solver
                .solve(n)
                .into_iter()
                .map(|p| p.columns().to_vec())
                .collect();

            assert_eq!(found, expected, "mismatch for n={}", n);
        }
    }
}
