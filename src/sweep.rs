/*!
A sweep over clause-to-variable ratios.

For each ratio *ρ* of a [config](crate::config::Config), in order:
1. The number of clauses is fixed as *ρn* rounded half to even.
2. A random NAE3SAT instance is generated from the seed of the config.
3. The instance is converted to binary variables, and its dense QUBO matrix is built.
4. The matrix is sampled, with the sampler config of the config.
5. The energies are summarised.

Whatever happens at some ratio is kept on the [record](SweepRecord) of that ratio, and no failure at one ratio stops the sweep from continuing to the next.
*/

use crate::{
    config::Config,
    generators::nae3sat::{clause_count, random_nae3sat},
    misc::log::targets::{self},
    qubo::{dense_qubo_from_binary, QuboMatrix},
    reports::EnergySummary,
    sampler::Sampler,
    structures::variable::Variable,
    types::err::{self},
};

/// The instance built for a ratio, and its matrix.
#[derive(Clone, Debug)]
pub struct Instance {
    pub num_clauses: usize,
    pub matrix: QuboMatrix,
    pub order: Vec<Variable>,
    pub offset: f64,
}

/// The outcome of a sweep at a single ratio.
#[derive(Clone, Debug)]
pub struct SweepRecord {
    pub rho: f64,

    /// The instance, if one was built.
    pub instance: Option<Instance>,

    /// A summary of the energies read by the sampler, or the reason there is none.
    pub outcome: Result<EnergySummary, err::ErrorKind>,
}

impl SweepRecord {
    pub fn is_ok(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Runs a sweep with the given sampler, returning a record for each ratio of the config.
pub fn run_sweep<S: Sampler>(config: &Config, sampler: &mut S) -> Vec<SweepRecord> {
    config
        .ratios()
        .iter()
        .map(|&rho| {
            log::info!(target: targets::SWEEP, "Creating an NAE3SAT problem with rho={rho} and N={}", config.num_variables.value);

            let instance = match build_instance(config, rho) {
                Ok(instance) => instance,
                Err(e) => {
                    log::warn!(target: targets::SWEEP, "No instance at rho={rho}: {e:?}");
                    return SweepRecord {
                        rho,
                        instance: None,
                        outcome: Err(e),
                    };
                }
            };

            log::info!(target: targets::SWEEP, "Sending problem to {}", sampler.name());

            let outcome = sampler
                .sample(
                    &instance.matrix,
                    instance.offset,
                    &instance.order,
                    &config.sampler_config(),
                )
                .map_err(err::ErrorKind::from)
                .and_then(|samples| {
                    EnergySummary::from_sample_set(&samples, config.bins.value)
                        .ok_or(err::ErrorKind::Sample(err::SampleError::NoReads))
                });

            if let Err(e) = &outcome {
                log::warn!(target: targets::SWEEP, "Sampling failed at rho={rho}: {e:?}");
            }

            SweepRecord {
                rho,
                instance: Some(instance),
                outcome,
            }
        })
        .collect()
}

/// The instance of a config at ratio `rho`.
pub fn build_instance(config: &Config, rho: f64) -> Result<Instance, err::ErrorKind> {
    let num_variables = config.num_variables.value;
    let num_clauses = clause_count(num_variables, rho)?;

    let bqm = random_nae3sat(num_variables, num_clauses, config.seed.value)?;
    let (matrix, order, offset) = dense_qubo_from_binary(&bqm)?;

    Ok(Instance {
        num_clauses,
        matrix,
        order,
        offset,
    })
}

#[cfg(test)]
mod sweep_tests {
    use super::*;

    #[test]
    fn instance_matches_generator() {
        let mut config = Config::default();
        assert!(config.num_variables.set(12).is_ok());

        let instance = build_instance(&config, 2.1).expect("instance");
        assert_eq!(instance.num_clauses, 25);
        assert_eq!(instance.order, (0..12).collect::<Vec<Variable>>());
        assert_eq!(instance.matrix.dimension(), 12);
        assert!(instance.matrix.is_symmetric());
    }

    #[test]
    fn instances_are_reproducible() {
        let config = Config::default();
        let a = build_instance(&config, 3.0).expect("instance");
        let b = build_instance(&config, 3.0).expect("instance");

        assert_eq!(a.matrix, b.matrix);
        assert_eq!(a.order, b.order);
        assert_eq!(a.offset, b.offset);
    }
}
