/*!
Miscelanous items related to [logging](log).

Calls to the log macro are made throughout the library, each with one of the targets below.
So, with [env_logger](https://docs.rs/env_logger/latest/env_logger/), logs from building matrices alone can be had with `RUST_LOG=qubo …`.

Note, no log implementation is provided by the library.
For more details, see [log].
*/

/// Targets to be used within a [log]! macro.
pub mod targets {
    /// Logs related to [binary quadratic models](crate::structures::bqm)
    pub const BQM: &str = "bqm";

    /// Logs related to [building matrices](crate::qubo)
    pub const QUBO: &str = "qubo";

    /// Logs related to [instance generation](crate::generators)
    pub const GENERATOR: &str = "generator";

    /// Logs related to [samplers](crate::sampler)
    pub const SAMPLER: &str = "sampler";

    /// Logs related to [sweeps](crate::sweep)
    pub const SWEEP: &str = "sweep";
}
