use std::time::Duration;

use clap::ArgMatches;

use nae_qubo::{config::Config, types::err::{self}};

pub fn config_from_args(args: &ArgMatches) -> Result<Config, err::ConfigError> {
    let mut the_config = Config::default();

    if let Some(variables) = args.get_one::<usize>("variables") {
        the_config.num_variables.set(*variables)?;
    };

    if let Some(ratios) = args.get_many::<f64>("rho") {
        the_config.set_ratios(ratios.copied().collect())?;
    };

    if let Some(seed) = args.get_one::<u64>("seed") {
        the_config.seed.set(*seed)?;
    };

    if let Some(seed) = args.get_one::<u64>("sampler_seed") {
        the_config.sampler_seed.set(*seed)?;
    };

    if let Some(reads) = args.get_one::<usize>("reads") {
        the_config.num_reads.set(*reads)?;
    };

    if let Some(strength) = args.get_one::<f64>("chain_strength") {
        the_config.chain_strength.set(*strength)?;
    };

    if args.get_flag("auto_scale") {
        the_config.auto_scale.set(true)?;
    };

    if let Some(millis) = args.get_one::<u64>("time_limit") {
        the_config.time_limit.set(Duration::from_millis(*millis))?;
    };

    if let Some(bins) = args.get_one::<usize>("bins") {
        the_config.bins.set(*bins)?;
    };

    if let Some(label) = args.get_one::<String>("label") {
        the_config.label = label.clone();
    };

    Ok(the_config)
}
