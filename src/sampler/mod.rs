/*!
Samplers, which read low energy configurations of a QUBO.

A [Sampler] takes a dense QUBO matrix with its variable order and offset, and returns a [SampleSet] over the same order.
Energies in the returned set include the offset.

Every call is given a [SamplerConfig], and nothing about a call is read from the state of the sampler.
So, the same sampler may be used for any number of differently configured calls.

Optimising samplers (annealers, hybrid services, …) are not part of the library, and instead are expected to be supplied by implementing [Sampler].
The library provides only a [RandomSampler], as a baseline.
*/

use std::time::Duration;

mod random;
pub use random::RandomSampler;

use crate::{
    qubo::QuboMatrix,
    structures::{sample::SampleSet, variable::Label},
    types::err::{self},
};

/// Configuration of a single call to a sampler.
#[derive(Clone, Debug, PartialEq)]
pub struct SamplerConfig {
    /// The number of reads requested.
    pub num_reads: usize,

    /// The strength of the coupling between chained qubits, for samplers which embed.
    pub chain_strength: Option<f64>,

    /// Whether to rescale coefficients to the range of the sampler.
    pub auto_scale: bool,

    /// The budget for reads, after which a sampler returns what it has.
    pub time_limit: Option<Duration>,

    /// A label for the problem, for samplers which record one.
    pub label: String,
}

impl Default for SamplerConfig {
    fn default() -> Self {
        SamplerConfig {
            num_reads: 100,
            chain_strength: Some(3.0),
            auto_scale: false,
            time_limit: None,
            label: String::from("Example - NAE3SAT"),
        }
    }
}

pub trait Sampler {
    /// A name for the sampler, for reports.
    fn name(&self) -> &str;

    /// Sample configurations of `qubo`, whose rows follow `order`.
    fn sample<V: Label>(
        &mut self,
        qubo: &QuboMatrix,
        offset: f64,
        order: &[V],
        config: &SamplerConfig,
    ) -> Result<SampleSet<V>, err::SampleError>;
}

/// Checks common to all samplers.
pub(crate) fn check_request<V>(
    qubo: &QuboMatrix,
    order: &[V],
    config: &SamplerConfig,
) -> Result<(), err::SampleError> {
    if config.num_reads == 0 {
        return Err(err::SampleError::NoReads);
    }
    if order.len() != qubo.dimension() {
        return Err(err::SampleError::DimensionMismatch {
            order: order.len(),
            matrix: qubo.dimension(),
        });
    }
    Ok(())
}
