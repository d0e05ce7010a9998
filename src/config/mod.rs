/*!
Configuration of a sweep.

All configuration for a [sweep](crate::sweep) is contained within a [Config].
Each call to a sampler is given a [SamplerConfig] built from the config, and the sampler reads nothing else.

Values which may be set from outside are [ConfigOption]s, and so carry their bounds.
*/

use std::time::Duration;

mod config_option;
pub use config_option::ConfigOption;

use crate::{
    qubo::MAX_DIMENSION,
    sampler::SamplerConfig,
    types::err::{self},
};

/// Bounds on a clause-to-variable ratio.
pub const RATIO_MIN: f64 = 0.0;
pub const RATIO_MAX: f64 = 100.0;

/// The primary configuration structure.
#[derive(Clone, Debug)]
pub struct Config {
    /// The number of variables of each instance, at most the largest dimension of a dense matrix.
    pub num_variables: ConfigOption<usize>,

    /// The clause-to-variable ratios of the sweep, in order.
    ratios: Vec<f64>,

    /// The seed of each generated instance.
    pub seed: ConfigOption<u64>,

    /// The seed of the sampler.
    pub sampler_seed: ConfigOption<u64>,

    /// Reads requested of the sampler, per instance.
    pub num_reads: ConfigOption<usize>,

    pub chain_strength: ConfigOption<f64>,

    pub auto_scale: ConfigOption<bool>,

    /// The time limit of a call to the sampler, with zero for no limit.
    pub time_limit: ConfigOption<Duration>,

    /// Bins of the histogram of energies.
    pub bins: ConfigOption<usize>,

    /// A label passed to the sampler.
    pub label: String,
}

impl Default for Config {
    /// The default config is that of the example sweep: two instances of 75 variables, at ratios 2.1 and 3.0.
    fn default() -> Self {
        Config {
            num_variables: ConfigOption {
                name: "variables",
                min: 3,
                max: MAX_DIMENSION,
                value: 75,
            },

            ratios: vec![2.1, 3.0],

            seed: ConfigOption {
                name: "seed",
                min: u64::MIN,
                max: u64::MAX,
                value: 42,
            },

            sampler_seed: ConfigOption {
                name: "sampler_seed",
                min: u64::MIN,
                max: u64::MAX,
                value: 0,
            },

            num_reads: ConfigOption {
                name: "reads",
                min: 1,
                max: 1_000_000,
                value: 100,
            },

            chain_strength: ConfigOption {
                name: "chain_strength",
                min: 0.0,
                max: f64::MAX,
                value: 3.0,
            },

            auto_scale: ConfigOption {
                name: "auto_scale",
                min: false,
                max: true,
                value: false,
            },

            time_limit: ConfigOption {
                name: "time_limit",
                min: Duration::from_secs(0),
                max: Duration::MAX,
                value: Duration::from_secs(0),
            },

            bins: ConfigOption {
                name: "bins",
                min: 1,
                max: 1_000,
                value: 10,
            },

            label: String::from("Example - NAE3SAT"),
        }
    }
}

impl Config {
    pub fn ratios(&self) -> &[f64] {
        &self.ratios
    }

    /// Sets the ratios of the sweep, if there is at least one and each is within [RATIO_MIN, RATIO_MAX].
    pub fn set_ratios(&mut self, ratios: Vec<f64>) -> Result<(), err::ConfigError> {
        if ratios.is_empty() {
            return Err(err::ConfigError::Empty("rho"));
        }
        if !ratios
            .iter()
            .all(|rho| (RATIO_MIN..=RATIO_MAX).contains(rho))
        {
            return Err(err::ConfigError::OutOfRange("rho"));
        }
        self.ratios = ratios;
        Ok(())
    }

    /// The configuration of a call to the sampler.
    pub fn sampler_config(&self) -> SamplerConfig {
        SamplerConfig {
            num_reads: self.num_reads.value,
            chain_strength: Some(self.chain_strength.value),
            auto_scale: self.auto_scale.value,
            time_limit: match self.time_limit.value.is_zero() {
                true => None,
                false => Some(self.time_limit.value),
            },
            label: self.label.clone(),
        }
    }
}
