use nae_qubo::{config::Config, reports::plot_file_name, sweep::SweepRecord};

/// Writes a record as comment lines.
pub fn print_record(record: &SweepRecord, config: &Config, show_matrix: bool) {
    println!();
    println!(
        "c Creating an NAE3SAT problem with rho={} and N={}",
        record.rho, config.num_variables.value
    );

    if let Some(instance) = &record.instance {
        println!("c {} clauses", instance.num_clauses);

        if show_matrix {
            let order = instance
                .order
                .iter()
                .map(|variable| variable.to_string())
                .collect::<Vec<_>>()
                .join(" ");
            println!("c order {order}");
            println!("c offset {}", instance.offset);
            for line in instance.matrix.to_string().lines() {
                println!("c {line}");
            }
        }
    }

    match &record.outcome {
        Ok(summary) => {
            println!("c Energies for plots/{}", plot_file_name(record.rho));
            for line in summary.to_string().lines() {
                println!("c {line}");
            }
        }

        Err(e) => println!("c Error: {e:?}"),
    }
}
