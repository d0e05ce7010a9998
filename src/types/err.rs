//! Error types used in the library.
//!
//! - Errors from building a matrix or editing a model are returned to the caller immediately, and nothing partial is kept.
//! - Errors from a sampler are kept on the [record](crate::sweep::SweepRecord) of the ratio which failed, so a sweep carries on with the remaining ratios.
//!
//! Names of the error enums --- for the most part --- overlap with corresponding structs.
//  As such, throughout the library err::{self} is often used to prefix use of the types with `err::`.
//
// Errors over labels are generic, and the top-level kind fixes labels to the variables of generated instances.

use crate::structures::variable::Variable;

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    BQM(BQMError<Variable>),
    Config(ConfigError),
    Generator(GeneratorError),
    Matrix(MatrixError<Variable>),
    Sample(SampleError),
}

/// Errors when editing or evaluating a binary quadratic model.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BQMError<V> {
    /// An interaction between a variable and itself.
    InvalidTerm(V),

    /// A quadratic term mentions a variable with no linear entry.
    UnknownVariable(V),

    /// A sample has no value for some variable of the model.
    MissingValue(V),

    /// A sample gives a variable a value outside the domain of the model's vartype.
    InvalidValue(V),
}

impl From<BQMError<Variable>> for ErrorKind {
    fn from(e: BQMError<Variable>) -> Self {
        ErrorKind::BQM(e)
    }
}

/// Errors when building a dense QUBO matrix.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum MatrixError<V> {
    /// A quadratic term references a variable absent from the variable order.
    UnknownVariable(V),

    /// A quadratic term between a variable and itself.
    InvalidTerm(V),

    /// The model has more variables than a dense matrix may have rows.
    TooLarge(usize),

    /// The model could not be brought to the vartype of the matrix.
    Model(BQMError<V>),
}

impl From<MatrixError<Variable>> for ErrorKind {
    fn from(e: MatrixError<Variable>) -> Self {
        ErrorKind::Matrix(e)
    }
}

impl<V> From<BQMError<V>> for MatrixError<V> {
    fn from(e: BQMError<V>) -> Self {
        MatrixError::Model(e)
    }
}

/// Errors from generating a problem instance.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum GeneratorError {
    /// A clause asks for more distinct variables than exist.
    TooFewVariables { required: usize, available: usize },

    /// The clause-to-variable ratio is negative or not finite.
    InvalidRatio,

    /// More variables than may be labelled.
    VariableLimit,
}

impl From<GeneratorError> for ErrorKind {
    fn from(e: GeneratorError) -> Self {
        ErrorKind::Generator(e)
    }
}

/// Errors from a sampler.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SampleError {
    /// A request for zero reads.
    NoReads,

    /// The variable order and the matrix disagree on the number of variables.
    DimensionMismatch { order: usize, matrix: usize },

    /// Some failure reported by the solver itself.
    Solver(String),
}

impl From<SampleError> for ErrorKind {
    fn from(e: SampleError) -> Self {
        ErrorKind::Sample(e)
    }
}

/// Errors when setting a configuration option.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ConfigError {
    /// The requested value lies outside the bounds of the option.
    OutOfRange(&'static str),

    /// No value was given where at least one is required.
    Empty(&'static str),
}

impl From<ConfigError> for ErrorKind {
    fn from(e: ConfigError) -> Self {
        ErrorKind::Config(e)
    }
}
