/*!
Dense QUBO matrices from binary quadratic models.

A [QuboMatrix] over the variables *v*₀, …, *v*ₙ₋₁ of a model holds:
- The linear coefficient of *v*ᵢ at (*i*, *i*), or zero if *v*ᵢ has no linear entry.
- The quadratic coefficient of *v*ᵢ and *v*ⱼ at both (*i*, *j*) and (*j*, *i*).
- Zero everywhere else.

The order on variables is the order in which they were added to the model, so repeat conversions of a model agree entry for entry.

```rust
# use nae_qubo::qubo::to_dense_qubo;
# use nae_qubo::structures::{bqm::BQM, vartype::Vartype};
let bqm = BQM::from_parts(
    Vartype::Binary,
    [(0, 1.5), (1, -2.0), (2, 0.0)],
    [((0, 1), 3.0), ((1, 2), -1.0)],
    0.0,
);

let (matrix, order) = to_dense_qubo(&bqm).unwrap();
assert_eq!(order, vec![0, 1, 2]);
assert_eq!(matrix.row(1), &[3.0, -2.0, -1.0]);
```

# Terms without a single place

The builder makes no guesses about a term it cannot place.
- A quadratic term on a variable with no linear entry fails with [UnknownVariable](err::MatrixError::UnknownVariable).
- A quadratic term between a variable and itself fails with [InvalidTerm](err::MatrixError::InvalidTerm), rather than being merged into the diagonal.
- If a model holds a pair as both (*u*, *v*) and (*v*, *u*) the later term overwrites the earlier.

A model with more than [MAX_DIMENSION] variables fails with [TooLarge](err::MatrixError::TooLarge).

On failure no matrix is returned.
*/

mod matrix;
pub use matrix::{QuboMatrix, MAX_DIMENSION};

use std::collections::HashMap;

use crate::{
    misc::log::targets::{self},
    structures::{bqm::BQM, variable::Label, vartype::Vartype},
    types::err::{self},
};

/// The dense QUBO matrix of `bqm`, together with the variable order of its rows and columns.
pub fn to_dense_qubo<V: Label>(bqm: &BQM<V>) -> Result<(QuboMatrix, Vec<V>), err::MatrixError<V>> {
    let order = bqm.variables().cloned().collect::<Vec<_>>();

    let indices = order
        .iter()
        .enumerate()
        .map(|(index, variable)| (variable, index))
        .collect::<HashMap<_, _>>();

    let Some(mut matrix) = QuboMatrix::zeros(order.len()) else {
        log::warn!(target: targets::QUBO, "No dense matrix for {} variables", order.len());
        return Err(err::MatrixError::TooLarge(order.len()));
    };

    for (index, (_, bias)) in bqm.linear_terms().enumerate() {
        matrix.set(index, index, bias);
    }

    for (u, v, bias) in bqm.quadratic_terms() {
        if u == v {
            log::warn!(target: targets::QUBO, "Self-interaction on {u:?}");
            return Err(err::MatrixError::InvalidTerm(u.clone()));
        }

        let Some(&i) = indices.get(u) else {
            log::warn!(target: targets::QUBO, "Interaction on unknown variable {u:?}");
            return Err(err::MatrixError::UnknownVariable(u.clone()));
        };
        let Some(&j) = indices.get(v) else {
            log::warn!(target: targets::QUBO, "Interaction on unknown variable {v:?}");
            return Err(err::MatrixError::UnknownVariable(v.clone()));
        };

        matrix.set(i, j, bias);
        matrix.set(j, i, bias);
    }

    log::trace!(target: targets::QUBO, "Built a {n} × {n} matrix from {m} interactions", n = order.len(), m = bqm.num_interactions());

    Ok((matrix, order))
}

/// The dense QUBO matrix of `bqm` over binary variables, with its variable order and offset.
///
/// For any 0/1 configuration *x* the energy of *x* on the matrix plus the offset is the energy of `bqm` on the corresponding assignment.
pub fn dense_qubo_from_binary<V: Label>(
    bqm: &BQM<V>,
) -> Result<(QuboMatrix, Vec<V>, f64), err::MatrixError<V>> {
    let binary = bqm.change_vartype(Vartype::Binary)?;
    let (matrix, order) = to_dense_qubo(&binary)?;
    Ok((matrix, order, binary.offset()))
}

#[cfg(test)]
mod builder_tests {
    use super::*;

    fn example() -> BQM<u32> {
        BQM::from_parts(
            Vartype::Binary,
            [(0, 1.5), (1, -2.0), (2, 0.0)],
            [((0, 1), 3.0), ((1, 2), -1.0)],
            0.0,
        )
    }

    #[test]
    fn three_variables() {
        let (matrix, order) = to_dense_qubo(&example()).expect("matrix");

        assert_eq!(order, vec![0, 1, 2]);
        assert_eq!(matrix.row(0), &[1.5, 3.0, 0.0]);
        assert_eq!(matrix.row(1), &[3.0, -2.0, -1.0]);
        assert_eq!(matrix.row(2), &[0.0, -1.0, 0.0]);
    }

    #[test]
    fn unknown_variable() {
        let bqm = BQM::from_parts(
            Vartype::Binary,
            [(0, 1.5), (1, -2.0), (2, 0.0)],
            [((0, 1), 3.0), ((1, 5), -1.0)],
            0.0,
        );
        assert_eq!(
            to_dense_qubo(&bqm),
            Err(err::MatrixError::UnknownVariable(5))
        );
    }

    #[test]
    fn self_interaction() {
        let bqm = BQM::from_parts(Vartype::Binary, [(0, 1.0)], [((0, 0), 2.0)], 0.0);
        assert_eq!(to_dense_qubo(&bqm), Err(err::MatrixError::InvalidTerm(0)));
    }

    #[test]
    fn later_orientation_overwrites() {
        let bqm = BQM::from_parts(
            Vartype::Binary,
            [(0, 0.0), (1, 0.0)],
            [((0, 1), 1.0), ((1, 0), 4.0)],
            0.0,
        );
        let (matrix, _) = to_dense_qubo(&bqm).expect("matrix");
        assert_eq!(matrix.get(0, 1), 4.0);
        assert_eq!(matrix.get(1, 0), 4.0);
    }

    #[test]
    fn empty() {
        let bqm: BQM<u32> = BQM::new(Vartype::Spin);
        let (matrix, order) = to_dense_qubo(&bqm).expect("matrix");
        assert_eq!(matrix.dimension(), 0);
        assert!(order.is_empty());
    }

    #[test]
    fn too_many_variables() {
        let mut bqm = BQM::new(Vartype::Binary);
        for variable in 0..=MAX_DIMENSION as u32 {
            bqm.add_variable(variable, 0.0);
        }
        assert_eq!(
            to_dense_qubo(&bqm),
            Err(err::MatrixError::TooLarge(MAX_DIMENSION + 1))
        );
    }

    #[test]
    fn binary_conversion_errors() {
        let bqm = BQM::from_parts(Vartype::Spin, [(0, 1.0)], [((0, 3), 2.0)], 0.0);
        assert_eq!(
            dense_qubo_from_binary(&bqm),
            Err(err::MatrixError::Model(err::BQMError::UnknownVariable(3)))
        );
    }

    #[test]
    fn binary_offset() {
        let mut spin = BQM::new(Vartype::Spin);
        assert!(spin.add_interaction(0_u32, 1, 1.0).is_ok());

        let (matrix, order, offset) = dense_qubo_from_binary(&spin).expect("matrix");
        assert_eq!(order, vec![0, 1]);
        assert_eq!(matrix.row(0), &[-2.0, 4.0]);
        assert_eq!(offset, 1.0);

        // Equal spins, at energy one, correspond to equal bits.
        assert_eq!(matrix.energy(&[1, 1]).map(|e| e + offset), Some(1.0));
        assert_eq!(matrix.energy(&[0, 1]).map(|e| e + offset), Some(-1.0));
    }
}
