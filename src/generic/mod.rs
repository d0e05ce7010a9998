//! Generic structures, not tied to models or matrices.

pub mod random;
