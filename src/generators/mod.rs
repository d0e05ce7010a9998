/*!
Generators of problem instances.

Each generator is seeded, and the same seed always gives the same instance.
*/

pub mod nae3sat;
