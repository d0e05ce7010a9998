use nae_qubo::{
    generators::nae3sat::random_nae3sat,
    qubo::{dense_qubo_from_binary, to_dense_qubo},
    structures::{
        bqm::{Assignment, BQM},
        vartype::Vartype,
    },
    types::err::{self},
};

mod matrix {
    use super::*;

    #[test]
    fn three_variable_example() {
        let bqm = BQM::from_parts(
            Vartype::Binary,
            [(0, 1.5), (1, -2.0), (2, 0.0)],
            [((0, 1), 3.0), ((1, 2), -1.0)],
            0.0,
        );

        let Ok((matrix, order)) = to_dense_qubo(&bqm) else {
            panic!("Conversion failed");
        };

        assert_eq!(order, vec![0, 1, 2]);
        assert_eq!(
            matrix.entries(),
            &[1.5, 3.0, 0.0, 3.0, -2.0, -1.0, 0.0, -1.0, 0.0]
        );
    }

    #[test]
    fn unknown_variable_is_named() {
        let bqm = BQM::from_parts(
            Vartype::Binary,
            [(0, 1.5), (1, -2.0), (2, 0.0)],
            [((0, 1), 3.0), ((2, 5), -1.0)],
            0.0,
        );

        assert_eq!(
            to_dense_qubo(&bqm),
            Err(err::MatrixError::UnknownVariable(5))
        );
    }

    #[test]
    fn empty_model() {
        let bqm: BQM<String> = BQM::new(Vartype::Binary);
        let (matrix, order) = to_dense_qubo(&bqm).expect("matrix");

        assert_eq!(matrix.dimension(), 0);
        assert!(order.is_empty());
    }

    #[test]
    fn labels_other_than_integers() {
        let mut bqm = BQM::new(Vartype::Spin);
        bqm.add_variable(String::from("z"), -1.0);
        assert!(bqm
            .add_interaction(String::from("z"), String::from("a"), 0.5)
            .is_ok());

        let (matrix, order) = to_dense_qubo(&bqm).expect("matrix");
        assert_eq!(order, vec![String::from("z"), String::from("a")]);
        assert_eq!(matrix.row(0), &[-1.0, 0.5]);
        assert_eq!(matrix.row(1), &[0.5, 0.0]);
    }
}

mod generated {
    use super::*;

    #[test]
    fn properties_of_generated_instances() {
        for seed in 0..8 {
            let bqm = random_nae3sat(30, 63, seed).expect("instance");
            let (matrix, order) = to_dense_qubo(&bqm).expect("matrix");

            assert_eq!(matrix.dimension(), bqm.num_variables());
            assert_eq!(order.len(), bqm.num_variables());
            assert!(matrix.is_symmetric());

            for (i, variable) in order.iter().enumerate() {
                assert_eq!(Some(matrix.get(i, i)), bqm.linear(variable));
            }

            let position = |v: &u32| order.iter().position(|o| o == v).expect("position");
            let mut placed = 0;
            for (u, v, bias) in bqm.quadratic_terms() {
                let (i, j) = (position(u), position(v));
                assert_eq!(matrix.get(i, j), bias);
                assert_eq!(matrix.get(j, i), bias);
                placed += 2;
            }

            let nonzero_off_diagonal = (0..order.len())
                .flat_map(|i| (0..order.len()).map(move |j| (i, j)))
                .filter(|(i, j)| i != j && matrix.get(*i, *j) != 0.0)
                .count();
            assert!(nonzero_off_diagonal <= placed);
        }
    }

    #[test]
    fn conversion_is_deterministic() {
        let bqm = random_nae3sat(75, 158, 42).expect("instance");

        let first = to_dense_qubo(&bqm).expect("matrix");
        let second = to_dense_qubo(&bqm).expect("matrix");

        assert_eq!(first.1, second.1);
        let bits = |entries: &[f64]| entries.iter().map(|e| e.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(first.0.entries()), bits(second.0.entries()));
    }

    #[test]
    fn binary_matrix_preserves_spin_energy() {
        let spin = random_nae3sat(8, 20, 3).expect("instance");
        let (matrix, order, offset) = dense_qubo_from_binary(&spin).expect("matrix");

        for bits in 0..(1_u32 << 8) {
            let configuration = (0..8).map(|i| ((bits >> i) & 1) as i8).collect::<Vec<_>>();
            let spins = order
                .iter()
                .zip(&configuration)
                .map(|(variable, x)| (*variable, Vartype::Binary.translate(*x)))
                .collect::<Assignment<u32>>();

            assert_eq!(
                matrix.energy(&configuration).map(|energy| energy + offset),
                spin.energy(&spins).ok()
            );
        }
    }
}
