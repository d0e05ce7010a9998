//! A sampler of uniformly random configurations.
//!
//! No attempt is made to find low energy configurations, and so the energies of a sample set from the random sampler give a baseline for other samplers.

use std::time::Instant;

use rand::Rng;

use crate::{
    generic::random::MinimalPCG32,
    misc::log::targets::{self},
    qubo::QuboMatrix,
    sampler::{check_request, Sampler, SamplerConfig},
    structures::{sample::SampleSet, variable::Label, vartype::Vartype},
    types::err::{self},
};

pub struct RandomSampler {
    rng: MinimalPCG32,
}

impl RandomSampler {
    pub fn from_seed(seed: u64) -> Self {
        RandomSampler {
            rng: MinimalPCG32::from_u64(seed),
        }
    }
}

impl Sampler for RandomSampler {
    fn name(&self) -> &str {
        "Random"
    }

    fn sample<V: Label>(
        &mut self,
        qubo: &QuboMatrix,
        offset: f64,
        order: &[V],
        config: &SamplerConfig,
    ) -> Result<SampleSet<V>, err::SampleError> {
        check_request(qubo, order, config)?;

        if let Some(strength) = config.chain_strength {
            log::debug!(target: targets::SAMPLER, "Chain strength {strength} has no use without an embedding");
        }
        if config.auto_scale {
            log::debug!(target: targets::SAMPLER, "Auto scale has no effect on random reads");
        }

        let start = Instant::now();
        let mut set = SampleSet::new(order.to_vec(), Vartype::Binary);

        for read in 0..config.num_reads {
            if let Some(limit) = config.time_limit {
                if read > 0 && start.elapsed() >= limit {
                    log::info!(target: targets::SAMPLER, "Time limit reached after {read} of {} reads", config.num_reads);
                    break;
                }
            }

            let configuration = (0..qubo.dimension())
                .map(|_| self.rng.random_bool(0.5) as i8)
                .collect::<Vec<_>>();

            let energy = match qubo.energy(&configuration) {
                Some(energy) => energy + offset,
                None => {
                    return Err(err::SampleError::Solver(String::from(
                        "Configuration and matrix disagree on length",
                    )))
                }
            };

            set.push(configuration, energy);
        }

        set.timing = Some(start.elapsed());

        log::info!(target: targets::SAMPLER, "{} reads for '{}'", set.len(), config.label);

        Ok(set.aggregate())
    }
}
