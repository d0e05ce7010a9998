/*!
A binary quadratic model.

A model is an objective over variables of some [vartype](Vartype), made of:
- A linear coefficient for each variable.
- A quadratic coefficient for some pairs of distinct variables.
- A constant offset.

The energy of an assignment 𝐯 is offset + Σ *a*ᵥ·𝐯(*v*) + Σ *b*ᵤᵥ·𝐯(*u*)·𝐯(*v*).

Variables are kept in the order they were first added, and this order is used by anything which needs an order on the variables of a model (e.g. [the matrix builder](crate::qubo::to_dense_qubo)).

# Building models

Models built through [add_variable](BQM::add_variable) and [add_interaction](BQM::add_interaction) maintain two invariants:
- Each variable of a quadratic term has a linear entry.
- No quadratic term pairs a variable with itself.

Models received from elsewhere may instead be taken as-is through [from_parts](BQM::from_parts), in which case neither invariant is checked until the model is used.

```rust
# use nae_qubo::structures::bqm::BQM;
# use nae_qubo::structures::vartype::Vartype;
let mut bqm = BQM::new(Vartype::Spin);
assert!(bqm.add_interaction(0, 1, 1.0).is_ok());
assert!(bqm.add_interaction(1, 0, -1.0).is_ok());
assert!(bqm.add_interaction(2, 2, 1.0).is_err());

assert_eq!(bqm.num_variables(), 2);
assert_eq!(bqm.quadratic(&0, &1), Some(0.0));
```
*/

use std::collections::HashMap;

use crate::{
    misc::log::targets::{self},
    structures::{variable::Label, vartype::Vartype},
    types::err::{self},
};

/// A sample, as a map from labels to values.
pub type Assignment<V> = HashMap<V, i8>;

/// A binary quadratic model.
#[derive(Clone, Debug)]
pub struct BQM<V: Label> {
    vartype: Vartype,

    /// Linear coefficients, in the order variables were added.
    linear: Vec<(V, f64)>,

    /// The index of each variable in `linear`.
    indices: HashMap<V, usize>,

    /// Quadratic coefficients, keyed by the pair as first given.
    quadratic: Vec<((V, V), f64)>,

    /// The index of each pair in `quadratic`.
    pairs: HashMap<(V, V), usize>,

    offset: f64,
}

impl<V: Label> BQM<V> {
    /// An empty model, with no variables and offset zero.
    pub fn new(vartype: Vartype) -> Self {
        BQM {
            vartype,
            linear: Vec::default(),
            indices: HashMap::default(),
            quadratic: Vec::default(),
            pairs: HashMap::default(),
            offset: 0.0,
        }
    }

    /// A model from coefficient mappings, taken without any check.
    ///
    /// A repeated linear key, or a repeated quadratic key, overwrites the earlier coefficient.
    /// The pairs `(u, v)` and `(v, u)` are distinct keys, and so are both kept.
    pub fn from_parts(
        vartype: Vartype,
        linear: impl IntoIterator<Item = (V, f64)>,
        quadratic: impl IntoIterator<Item = ((V, V), f64)>,
        offset: f64,
    ) -> Self {
        let mut bqm = BQM::new(vartype);
        bqm.offset = offset;

        for (variable, bias) in linear {
            match bqm.indices.get(&variable) {
                Some(&index) => bqm.linear[index].1 = bias,
                None => {
                    bqm.indices.insert(variable.clone(), bqm.linear.len());
                    bqm.linear.push((variable, bias));
                }
            }
        }

        for (pair, bias) in quadratic {
            match bqm.pairs.get(&pair) {
                Some(&index) => bqm.quadratic[index].1 = bias,
                None => {
                    bqm.pairs.insert(pair.clone(), bqm.quadratic.len());
                    bqm.quadratic.push((pair, bias));
                }
            }
        }

        bqm
    }

    pub fn vartype(&self) -> Vartype {
        self.vartype
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn add_offset(&mut self, bias: f64) {
        self.offset += bias
    }

    pub fn num_variables(&self) -> usize {
        self.linear.len()
    }

    pub fn num_interactions(&self) -> usize {
        self.quadratic.len()
    }

    pub fn is_empty(&self) -> bool {
        self.linear.is_empty() && self.quadratic.is_empty()
    }

    /// The variables of the model, in the order they were added.
    pub fn variables(&self) -> impl Iterator<Item = &V> {
        self.linear.iter().map(|(variable, _)| variable)
    }

    /// Whether the variable has a linear entry.
    pub fn contains(&self, variable: &V) -> bool {
        self.indices.contains_key(variable)
    }

    /// The linear coefficient of a variable, if the variable has a linear entry.
    pub fn linear(&self, variable: &V) -> Option<f64> {
        self.indices
            .get(variable)
            .map(|&index| self.linear[index].1)
    }

    /// (variable, coefficient) pairs, in the order variables were added.
    pub fn linear_terms(&self) -> impl Iterator<Item = (&V, f64)> {
        self.linear.iter().map(|(variable, bias)| (variable, *bias))
    }

    /// (u, v, coefficient) triples, in the order pairs were added.
    pub fn quadratic_terms(&self) -> impl Iterator<Item = (&V, &V, f64)> {
        self.quadratic.iter().map(|((u, v), bias)| (u, v, *bias))
    }

    /// The quadratic coefficient between two variables, in either orientation.
    ///
    /// If both orientations are present, that of `(u, v)` is returned.
    pub fn quadratic(&self, u: &V, v: &V) -> Option<f64> {
        let key = (u.clone(), v.clone());
        let index = match self.pairs.get(&key) {
            Some(index) => Some(index),
            None => self.pairs.get(&(key.1, key.0)),
        };
        index.map(|&index| self.quadratic[index].1)
    }

    /// Adds `bias` to the linear coefficient of `variable`, adding the variable if required.
    ///
    /// Returns the position of the variable.
    pub fn add_variable(&mut self, variable: V, bias: f64) -> usize {
        match self.indices.get(&variable) {
            Some(&index) => {
                self.linear[index].1 += bias;
                index
            }
            None => {
                let index = self.linear.len();
                self.indices.insert(variable.clone(), index);
                self.linear.push((variable, bias));
                index
            }
        }
    }

    /// Adds `bias` to the quadratic coefficient of `u` and `v`, adding either variable if required.
    ///
    /// If the pair is present as `(v, u)` the existing coefficient is updated, otherwise the pair is added as `(u, v)`.
    pub fn add_interaction(&mut self, u: V, v: V, bias: f64) -> Result<(), err::BQMError<V>> {
        if u == v {
            return Err(err::BQMError::InvalidTerm(u));
        }

        self.add_variable(u.clone(), 0.0);
        self.add_variable(v.clone(), 0.0);

        let key = (u, v);
        if let Some(&index) = self.pairs.get(&key) {
            self.quadratic[index].1 += bias;
            return Ok(());
        }

        let flipped = (key.1, key.0);
        if let Some(&index) = self.pairs.get(&flipped) {
            self.quadratic[index].1 += bias;
            return Ok(());
        }

        let key = (flipped.1, flipped.0);
        self.pairs.insert(key.clone(), self.quadratic.len());
        self.quadratic.push((key, bias));
        Ok(())
    }

    pub fn add_interactions_from(
        &mut self,
        interactions: impl IntoIterator<Item = ((V, V), f64)>,
    ) -> Result<(), err::BQMError<V>> {
        for ((u, v), bias) in interactions {
            self.add_interaction(u, v, bias)?;
        }
        Ok(())
    }

    /// The energy of an assignment.
    ///
    /// Every variable of the model, including any mentioned only by a quadratic term, must be given a value in the domain of the model.
    pub fn energy(&self, sample: &Assignment<V>) -> Result<f64, err::BQMError<V>> {
        let value_of = |variable: &V| -> Result<f64, err::BQMError<V>> {
            match sample.get(variable) {
                None => Err(err::BQMError::MissingValue(variable.clone())),
                Some(&value) if !self.vartype.admits(value) => {
                    Err(err::BQMError::InvalidValue(variable.clone()))
                }
                Some(&value) => Ok(value as f64),
            }
        };

        let mut energy = self.offset;

        for (variable, bias) in &self.linear {
            energy += bias * value_of(variable)?;
        }

        for ((u, v), bias) in &self.quadratic {
            energy += bias * value_of(u)? * value_of(v)?;
        }

        Ok(energy)
    }

    /// A copy of the model over `vartype`, with the same energy on corresponding assignments.
    ///
    /// Variables keep their order, and quadratic terms given in both orientations are summed.
    pub fn change_vartype(&self, vartype: Vartype) -> Result<Self, err::BQMError<V>> {
        if vartype == self.vartype {
            return Ok(self.clone());
        }

        let mut bqm = BQM::new(vartype);
        for (variable, _) in &self.linear {
            bqm.add_variable(variable.clone(), 0.0);
        }
        bqm.offset = self.offset;

        match vartype {
            Vartype::Binary => {
                for (variable, bias) in &self.linear {
                    bqm.add_variable(variable.clone(), 2.0 * bias);
                    bqm.offset -= bias;
                }

                for ((u, v), bias) in &self.quadratic {
                    self.check_term(u, v)?;
                    bqm.add_interaction(u.clone(), v.clone(), 4.0 * bias)?;
                    bqm.add_variable(u.clone(), -2.0 * bias);
                    bqm.add_variable(v.clone(), -2.0 * bias);
                    bqm.offset += bias;
                }
            }

            Vartype::Spin => {
                for (variable, bias) in &self.linear {
                    bqm.add_variable(variable.clone(), bias / 2.0);
                    bqm.offset += bias / 2.0;
                }

                for ((u, v), bias) in &self.quadratic {
                    self.check_term(u, v)?;
                    bqm.add_interaction(u.clone(), v.clone(), bias / 4.0)?;
                    bqm.add_variable(u.clone(), bias / 4.0);
                    bqm.add_variable(v.clone(), bias / 4.0);
                    bqm.offset += bias / 4.0;
                }
            }
        }

        log::debug!(target: targets::BQM, "Changed vartype {} -> {vartype} over {} variables", self.vartype, bqm.num_variables());

        Ok(bqm)
    }

    fn check_term(&self, u: &V, v: &V) -> Result<(), err::BQMError<V>> {
        if u == v {
            return Err(err::BQMError::InvalidTerm(u.clone()));
        }
        for variable in [u, v] {
            if !self.contains(variable) {
                return Err(err::BQMError::UnknownVariable(variable.clone()));
            }
        }
        Ok(())
    }
}
