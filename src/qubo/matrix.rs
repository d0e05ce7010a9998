/*!
A dense, square, matrix of coefficients.

Entries are stored row-major, so entry (*i*, *j*) of an *n* × *n* matrix is at index *i*·*n* + *j*.
*/

/// The largest dimension of a dense matrix.
pub const MAX_DIMENSION: usize = 1 << 15;

/// A dense *n* × *n* matrix of QUBO coefficients.
#[derive(Clone, Debug, PartialEq)]
pub struct QuboMatrix {
    dimension: usize,
    entries: Vec<f64>,
}

impl QuboMatrix {
    /// The *n* × *n* matrix of zeros, or nothing if *n* exceeds [MAX_DIMENSION] or the entries cannot be allocated.
    pub fn zeros(dimension: usize) -> Option<Self> {
        if dimension > MAX_DIMENSION {
            return None;
        }
        let size = dimension.checked_mul(dimension)?;

        let mut entries = Vec::new();
        entries.try_reserve_exact(size).ok()?;
        entries.resize(size, 0.0);

        Some(QuboMatrix { dimension, entries })
    }

    /// The number of rows (and columns).
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// All entries, row-major.
    pub fn entries(&self) -> &[f64] {
        &self.entries
    }

    /// The entry at row `i` and column `j`.
    ///
    /// # Panics
    /// If either index is out of bounds.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(i < self.dimension && j < self.dimension);
        self.entries[i * self.dimension + j]
    }

    pub(super) fn set(&mut self, i: usize, j: usize, value: f64) {
        self.entries[i * self.dimension + j] = value;
    }

    /// The entries of row `i`.
    ///
    /// # Panics
    /// If `i` is out of bounds.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.entries[i * self.dimension..(i + 1) * self.dimension]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        // chunks panics on a zero size
        self.entries.chunks(self.dimension.max(1))
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.dimension)
            .all(|i| (i + 1..self.dimension).all(|j| self.get(i, j) == self.get(j, i)))
    }

    /// The largest absolute value of an entry, or zero for an empty matrix.
    pub fn max_abs(&self) -> f64 {
        self.entries.iter().fold(0.0, |max, entry| entry.abs().max(max))
    }

    /// The energy of a 0/1 configuration.
    ///
    /// The diagonal is read as linear coefficients and each pair *i* < *j* is counted once, from the upper triangle.
    /// Returns `None` if the configuration has the wrong length, or some value other than 0 or 1.
    pub fn energy(&self, configuration: &[i8]) -> Option<f64> {
        if configuration.len() != self.dimension
            || configuration.iter().any(|x| *x != 0 && *x != 1)
        {
            return None;
        }

        let mut energy = 0.0;
        for (i, &x_i) in configuration.iter().enumerate() {
            if x_i == 0 {
                continue;
            }
            let row = self.row(i);
            energy += row[i];
            for (j, &x_j) in configuration.iter().enumerate().skip(i + 1) {
                if x_j != 0 {
                    energy += row[j];
                }
            }
        }
        Some(energy)
    }
}

impl std::fmt::Display for QuboMatrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for i in 0..self.dimension {
            let row = self
                .row(i)
                .iter()
                .map(|entry| format!("{entry:>6.2}"))
                .collect::<Vec<_>>()
                .join(" ");
            writeln!(f, "[{row} ]")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod matrix_tests {
    use super::*;

    #[test]
    fn empty() {
        let matrix = QuboMatrix::zeros(0).expect("matrix");
        assert_eq!(matrix.dimension(), 0);
        assert!(matrix.entries().is_empty());
        assert_eq!(matrix.rows().count(), 0);
        assert!(matrix.is_symmetric());
        assert_eq!(matrix.energy(&[]), Some(0.0));
    }

    #[test]
    fn energy_counts_pairs_once() {
        let mut matrix = QuboMatrix::zeros(2).expect("matrix");
        matrix.set(0, 0, 1.0);
        matrix.set(1, 1, -3.0);
        matrix.set(0, 1, 2.0);
        matrix.set(1, 0, 2.0);

        assert_eq!(matrix.energy(&[0, 0]), Some(0.0));
        assert_eq!(matrix.energy(&[1, 0]), Some(1.0));
        assert_eq!(matrix.energy(&[1, 1]), Some(0.0));
        assert_eq!(matrix.energy(&[1]), None);
        assert_eq!(matrix.max_abs(), 3.0);
    }

    #[test]
    fn energy_of_non_binary_values() {
        let matrix = QuboMatrix::zeros(2).expect("matrix");
        assert_eq!(matrix.energy(&[-1, 1]), None);
        assert_eq!(matrix.energy(&[2, 0]), None);
    }

    #[test]
    fn too_large() {
        assert!(QuboMatrix::zeros(MAX_DIMENSION + 1).is_none());
        assert!(QuboMatrix::zeros(u32::MAX as usize).is_none());
        assert!(QuboMatrix::zeros(usize::MAX).is_none());
    }

    #[test]
    #[should_panic]
    fn row_out_of_bounds() {
        let matrix = QuboMatrix::zeros(2).expect("matrix");
        let _ = matrix.row(2);
    }
}
