#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = Jemalloc;

use nae_qubo::{sampler::RandomSampler, sweep::run_sweep};

mod misc;
mod parse;

fn main() {
    #[cfg(feature = "log")]
    env_logger::init();

    let matches = parse::cli::cli().get_matches();

    let config = match parse::config::config_from_args(&matches) {
        Ok(config) => config,
        Err(e) => {
            println!("c Configuration error: {e:?}");
            std::process::exit(1);
        }
    };

    let show_matrix = matches.get_flag("matrix");

    let mut sampler = RandomSampler::from_seed(config.sampler_seed.value);
    let records = run_sweep(&config, &mut sampler);

    for record in &records {
        misc::print_record(record, &config, show_matrix);
    }

    let failures = records.iter().filter(|record| !record.is_ok()).count();
    println!();
    println!("c {} of {} ratios summarised", records.len() - failures, records.len());

    if failures > 0 {
        std::process::exit(2);
    }
}
