//! A library for building random NAE3SAT instances as binary quadratic models, and for turning binary quadratic models into dense QUBO matrices.
//!
//! An NAE3SAT (not-all-equal 3-SAT) instance is a collection of clauses, each over three literals, where a clause is satisfied unless all three literals take the same value.
//! As a spin model, each clause contributes an interaction to each pair of its variables, and ground states of the model are assignments which satisfy as many clauses as possible.
//!
//! nae_qubo is developed to support experiments which send such instances to a QUBO solver, and compare the energies returned.
//! The library builds the instances and the matrices, and fixes the interface to a solver, while solving itself is left to whatever implements the interface.
//!
//! # Orientation
//!
//! - A [binary quadratic model](structures::bqm) holds linear and quadratic coefficients over labelled variables, plus an offset.
//! - The [QUBO matrix builder](qubo::to_dense_qubo) turns a model into a dense symmetric matrix, together with the order of the variables of its rows.
//! - [Generators](generators::nae3sat) build random NAE3SAT models from a seed.
//! - A [sampler](sampler::Sampler) reads configurations of a matrix, and [reports] summarise the energies read.
//! - A [sweep](sweep) ties the above together over a list of clause-to-variable ratios, as configured by a [config](config::Config).
//!
//! # Examples
//!
//! + Build the dense matrix of a small model.
//!
//! ```rust
//! # use nae_qubo::qubo::to_dense_qubo;
//! # use nae_qubo::structures::{bqm::BQM, vartype::Vartype};
//! # use nae_qubo::types::err::{self};
//! let mut bqm = BQM::new(Vartype::Binary);
//! bqm.add_variable("a", 1.5);
//! bqm.add_variable("b", -2.0);
//! assert!(bqm.add_interaction("a", "b", 3.0).is_ok());
//!
//! let (matrix, order) = to_dense_qubo(&bqm).unwrap();
//! assert_eq!(order, vec!["a", "b"]);
//! assert_eq!(matrix.entries(), &[1.5, 3.0, 3.0, -2.0]);
//!
//! let unknown = BQM::from_parts(Vartype::Binary, [("a", 0.0)], [(("a", "z"), 1.0)], 0.0);
//! assert_eq!(to_dense_qubo(&unknown), Err(err::MatrixError::UnknownVariable("z")));
//! ```
//!
//! + Sweep two ratios with the random baseline sampler.
//!
//! ```rust
//! # use nae_qubo::config::Config;
//! # use nae_qubo::sampler::RandomSampler;
//! # use nae_qubo::sweep::run_sweep;
//! let config = Config::default();
//! let mut sampler = RandomSampler::from_seed(0);
//!
//! let records = run_sweep(&config, &mut sampler);
//! assert_eq!(records.len(), 2);
//! assert!(records.iter().all(|record| record.is_ok()));
//! ```
//!
//! # Logs
//!
//! Calls to [log!](log) are made with the targets listed in [misc::log].
//! No logger is installed by the library, though the binary installs [env_logger](https://docs.rs/env_logger/latest/env_logger/) when built with the `log` feature.
//! For example, logs from the matrix builder alone can be had with `RUST_LOG=qubo …`.

pub mod config;
pub mod generators;
pub mod generic;
pub mod misc;
pub mod qubo;
pub mod reports;
pub mod sampler;
pub mod structures;
pub mod sweep;
pub mod types;
