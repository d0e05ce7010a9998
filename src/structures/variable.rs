/*!
Variables of a model.

Models are generic over their labels, so long as a label can be cloned, compared, hashed, and printed for debugging.
See [Label].

Generated instances use [Variable]s, which are the integers [0..*n*) for an instance of *n* variables.

```rust
# use nae_qubo::structures::variable::Variable;
let n = 75;
let variables = (0..n).collect::<Vec<Variable>>();
assert_eq!(variables.len(), 75);
```
*/

use std::{fmt::Debug, hash::Hash};

/// A variable of a generated instance.
pub type Variable = u32;

/// Anything which may label a variable of a model.
pub trait Label: Clone + Eq + Hash + Debug {}

impl<T: Clone + Eq + Hash + Debug> Label for T {}
