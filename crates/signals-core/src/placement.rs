use serde::{Deserialize, Serialize};

/// A complete signal setup: one column per row, indexed by row.
///
/// Placements produced by the solver always satisfy the non-attack
/// constraint. [`Placement::from_columns`] does not enforce it, so
/// hand-built placements should be checked with [`Placement::is_valid`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Placement {
    cols: Vec<usize>,
}

impl Placement {
    /// Build a placement from an explicit column-per-row assignment.
    pub fn from_columns(cols: Vec<usize>) -> Self {
        Self { cols }
    }

    /// Grid size, equal to the number of rows.
    pub fn size(&self) -> usize {
        self.cols.len()
    }

    /// Column of the signal in `row`, or `None` if the row is out of range.
    pub fn column(&self, row: usize) -> Option<usize> {
        self.cols.get(row).copied()
    }

    /// Column assignments in row order.
    pub fn columns(&self) -> &[usize] {
        &self.cols
    }

    /// Check that no two signals share a column or a diagonal.
    ///
    /// Two cells share a diagonal iff their `row - col` values match
    /// ("/" family) or their `row + col` values match ("\" family).
    pub fn is_valid(&self) -> bool {
        let n = self.cols.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let (ci, cj) = (self.cols[i] as i64, self.cols[j] as i64);
                let (ri, rj) = (i as i64, j as i64);
                if ci == cj || ri - ci == rj - cj || ri + ci == rj + cj {
                    return false;
                }
            }
        }
        true
    }
}
