/*!
Abstract elements of a problem, and their representation.

- [Variables](variable) label the unknowns of a problem.
- A [vartype] fixes the values a variable may take.
- A [binary quadratic model](bqm) is an objective over variables.
- A [sample set](sample) holds configurations read by a sampler.
*/

pub mod bqm;
pub mod sample;
pub mod variable;
pub mod vartype;
