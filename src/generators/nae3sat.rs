/*!
Random NAE3SAT instances.

Instances are built in two steps:
1. A collection of clauses is drawn by [kmc_sat].
   Each clause is *k* distinct variables, each with a sign of +1 or -1.
2. The clauses are translated to a spin model by [kmc_sat_to_bqm].
   For each pair of literals *i*, *j* in a clause the model gains the interaction *sᵢ*·*sⱼ* between their variables.

With *k* = 3, a clause contributes +3 to the energy of an assignment when its three literals agree, and -1 otherwise.
So, the energy of an assignment is 4·(violated clauses) - (clauses), and a ground state of energy -(clauses) satisfies every clause.

```rust
# use nae_qubo::generators::nae3sat::{random_nae3sat};
let bqm = random_nae3sat(75, 158, 42).unwrap();
assert_eq!(bqm.num_variables(), 75);
```
*/

use rand::{seq::index, Rng};

use crate::{
    generic::random::MinimalPCG32,
    misc::log::targets::{self},
    structures::{
        bqm::{Assignment, BQM},
        variable::Variable,
        vartype::Vartype,
    },
    types::err::{self},
};

/// A variable together with its sign, either +1 or -1.
pub type Literal = (Variable, i8);

/// A clause, as a collection of literals.
pub type Clause = Vec<Literal>;

/// Variables per clause of an NAE3SAT instance.
pub const NAE3SAT_K: usize = 3;

/// Clauses of `k` distinct variables drawn uniformly from [0..`num_variables`), each with a uniformly drawn sign.
///
/// All variables of all clauses are drawn before any sign.
pub fn kmc_sat<R: Rng>(
    num_variables: usize,
    num_clauses: usize,
    k: usize,
    rng: &mut R,
) -> Result<Vec<Clause>, err::GeneratorError> {
    if k > num_variables {
        return Err(err::GeneratorError::TooFewVariables {
            required: k,
            available: num_variables,
        });
    }
    if Variable::try_from(num_variables).is_err() {
        return Err(err::GeneratorError::VariableLimit);
    }

    let variables = (0..num_clauses)
        .map(|_| {
            index::sample(rng, num_variables, k)
                .into_iter()
                .map(|variable| variable as Variable)
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    let clauses = variables
        .into_iter()
        .map(|clause| {
            clause
                .into_iter()
                .map(|variable| (variable, if rng.random_bool(0.5) { 1 } else { -1 }))
                .collect()
        })
        .collect();

    Ok(clauses)
}

/// A spin model of the clauses, adding each interaction of each clause.
pub fn kmc_sat_to_bqm(clauses: &[Clause]) -> Result<BQM<Variable>, err::BQMError<Variable>> {
    let mut bqm = BQM::new(Vartype::Spin);
    add_clauses(&mut bqm, clauses)?;
    Ok(bqm)
}

fn add_clauses(bqm: &mut BQM<Variable>, clauses: &[Clause]) -> Result<(), err::BQMError<Variable>> {
    for clause in clauses {
        for (i, &(v_i, s_i)) in clause.iter().enumerate() {
            for &(v_j, s_j) in clause.iter().take(i) {
                bqm.add_interaction(v_i, v_j, (s_i * s_j) as f64)?;
            }
        }
    }
    Ok(())
}

/// The NAE3SAT clauses of an instance drawn from `seed`.
pub fn random_nae3sat_clauses(
    num_variables: usize,
    num_clauses: usize,
    seed: u64,
) -> Result<Vec<Clause>, err::GeneratorError> {
    let mut rng = MinimalPCG32::from_u64(seed);
    kmc_sat(num_variables, num_clauses, NAE3SAT_K, &mut rng)
}

/// A spin model of a random NAE3SAT instance with the given number of clauses.
///
/// Each variable in [0..`num_variables`) is present, in order, whether or not it appears in some clause.
pub fn random_nae3sat(
    num_variables: usize,
    num_clauses: usize,
    seed: u64,
) -> Result<BQM<Variable>, err::ErrorKind> {
    let clauses = random_nae3sat_clauses(num_variables, num_clauses, seed)?;

    let mut bqm = BQM::new(Vartype::Spin);
    for variable in 0..num_variables {
        bqm.add_variable(variable as Variable, 0.0);
    }
    add_clauses(&mut bqm, &clauses)?;

    log::info!(target: targets::GENERATOR, "NAE3SAT instance with {num_variables} variables, {num_clauses} clauses, and seed {seed}");
    log::debug!(target: targets::GENERATOR, "{} interactions", bqm.num_interactions());

    Ok(bqm)
}

/// A spin model of a random NAE3SAT instance with clause-to-variable ratio close to `rho`.
///
/// The number of clauses is drawn uniformly from ⌊*ρn*⌋ - 1, ⌊*ρn*⌋, and ⌊*ρn*⌋ + 1 (excluding any negative count).
pub fn nae3sat(num_variables: usize, rho: f64, seed: u64) -> Result<BQM<Variable>, err::ErrorKind> {
    if !rho.is_finite() || rho < 0.0 {
        return Err(err::GeneratorError::InvalidRatio.into());
    }

    let mut rng = MinimalPCG32::from_u64(seed);
    let base = (rho * num_variables as f64).floor() as usize;
    let num_clauses = rng.random_range(base.saturating_sub(1)..=base + 1);

    random_nae3sat(num_variables, num_clauses, seed)
}

/// The number of clauses for `num_variables` at ratio `rho`, as *ρn* rounded half to even.
pub fn clause_count(num_variables: usize, rho: f64) -> Result<usize, err::GeneratorError> {
    if !rho.is_finite() || rho < 0.0 {
        return Err(err::GeneratorError::InvalidRatio);
    }
    Ok((rho * num_variables as f64).round_ties_even() as usize)
}

/// The number of clauses whose literals all agree on a spin assignment.
///
/// A variable without a value in the assignment is read as -1.
pub fn violated_clauses(clauses: &[Clause], assignment: &Assignment<Variable>) -> usize {
    clauses
        .iter()
        .filter(|clause| {
            let mut values = clause.iter().map(|(variable, sign)| {
                sign * assignment.get(variable).copied().unwrap_or(-1)
            });
            match values.next() {
                Some(first) => values.all(|value| value == first),
                None => false,
            }
        })
        .count()
}
