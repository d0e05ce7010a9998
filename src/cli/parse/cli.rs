use clap::{value_parser, Arg, ArgAction, Command};

use nae_qubo::config::Config;

pub fn cli() -> Command {
    let defaults = Config::default();

    Command::new("nae_qubo")
        .about("Builds random NAE3SAT instances as dense QUBO matrices, samples each, and summarises the energies read")
        .version(env!("CARGO_PKG_VERSION"))

        .arg(Arg::new("variables")
            .short('n')
            .long("variables")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help(format!("The number of variables of each instance, at most {}.
Default: {}", defaults.num_variables.max, defaults.num_variables.value)))

        .arg(Arg::new("rho")
            .short('r')
            .long("rho")
            .value_parser(value_parser!(f64))
            .required(false)
            .action(ArgAction::Append)
            .help("A clause-to-variable ratio, may be given more than once.")
            .long_help(format!("A clause-to-variable ratio, may be given more than once.
Default: {:?}

An instance is built for each ratio, in the order given, with ratio × variables clauses (rounded half to even).", defaults.ratios())))

        .arg(Arg::new("seed")
            .long("seed")
            .value_parser(value_parser!(u64))
            .required(false)
            .num_args(1)
            .help(format!("The seed of each instance.
Default: {}", defaults.seed.value)))

        .arg(Arg::new("sampler_seed")
            .long("sampler-seed")
            .value_parser(value_parser!(u64))
            .required(false)
            .num_args(1)
            .help(format!("The seed of the sampler.
Default: {}", defaults.sampler_seed.value)))

        .arg(Arg::new("reads")
            .long("reads")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help(format!("Reads requested of the sampler, for each instance.
Default: {}", defaults.num_reads.value)))

        .arg(Arg::new("chain_strength")
            .long("chain-strength")
            .value_parser(value_parser!(f64))
            .required(false)
            .num_args(1)
            .help(format!("Chain strength passed to the sampler.
Default: {}", defaults.chain_strength.value)))

        .arg(Arg::new("auto_scale")
            .long("auto-scale")
            .action(ArgAction::SetTrue)
            .help("Ask the sampler to rescale coefficients."))

        .arg(Arg::new("time_limit")
            .long("time-limit")
            .value_parser(value_parser!(u64))
            .required(false)
            .num_args(1)
            .help("A time limit on each call to the sampler, in milliseconds.")
            .long_help("A time limit on each call to the sampler, in milliseconds.
Default: none

Once the limit is reached the sampler returns the reads made so far, which is always at least one."))

        .arg(Arg::new("bins")
            .long("bins")
            .value_parser(value_parser!(usize))
            .required(false)
            .num_args(1)
            .help(format!("Bins of the histogram of energies.
Default: {}", defaults.bins.value)))

        .arg(Arg::new("label")
            .long("label")
            .value_parser(value_parser!(String))
            .required(false)
            .num_args(1)
            .help(format!("A label passed to the sampler.
Default: {}", defaults.label)))

        .arg(Arg::new("matrix")
            .short('m')
            .long("matrix")
            .action(ArgAction::SetTrue)
            .help("Display the variable order and QUBO matrix of each instance."))
}
