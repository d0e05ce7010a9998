/*!
Samples returned by a [sampler](crate::sampler).

A sample set fixes an order on some variables, and each record of the set holds:
- A configuration, with the *i*th value for the *i*th variable.
- The energy of the configuration.
- The number of times the configuration was read.
*/

use std::{collections::HashMap, time::Duration};

use crate::structures::{bqm::Assignment, variable::Label, vartype::Vartype};

/// A configuration read by a sampler, with its energy and number of occurrences.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub configuration: Vec<i8>,
    pub energy: f64,
    pub num_occurrences: usize,
}

#[derive(Clone, Debug)]
pub struct SampleSet<V: Label> {
    variables: Vec<V>,
    vartype: Vartype,
    records: Vec<Record>,

    /// Time spent sampling, if the sampler reports it.
    pub timing: Option<Duration>,
}

impl<V: Label> SampleSet<V> {
    pub fn new(variables: Vec<V>, vartype: Vartype) -> Self {
        SampleSet {
            variables,
            vartype,
            records: Vec::default(),
            timing: None,
        }
    }

    /// Adds a record of a single read.
    pub fn push(&mut self, configuration: Vec<i8>, energy: f64) {
        self.push_record(Record {
            configuration,
            energy,
            num_occurrences: 1,
        })
    }

    pub fn push_record(&mut self, record: Record) {
        self.records.push(record)
    }

    pub fn variables(&self) -> &[V] {
        &self.variables
    }

    pub fn vartype(&self) -> Vartype {
        self.vartype
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn energies(&self) -> impl Iterator<Item = f64> + '_ {
        self.records.iter().map(|record| record.energy)
    }

    pub fn num_occurrences(&self) -> impl Iterator<Item = usize> + '_ {
        self.records.iter().map(|record| record.num_occurrences)
    }

    /// The total number of reads over all records.
    pub fn total_occurrences(&self) -> usize {
        self.num_occurrences().sum()
    }

    /// The records of lowest energy, in order.
    pub fn lowest(&self) -> Vec<&Record> {
        let minimum = self.energies().fold(f64::INFINITY, f64::min);
        self.records
            .iter()
            .filter(|record| record.energy == minimum)
            .collect()
    }

    /// The configuration of a record as an assignment to the variables of the set.
    pub fn assignment(&self, index: usize) -> Option<Assignment<V>> {
        let record = self.records.get(index)?;
        Some(
            self.variables
                .iter()
                .cloned()
                .zip(record.configuration.iter().copied())
                .collect(),
        )
    }

    /// A copy of the set with identical configurations merged.
    ///
    /// Records are kept in the order configurations were first seen, and occurrences are summed.
    pub fn aggregate(&self) -> Self {
        let mut seen: HashMap<&[i8], usize> = HashMap::default();
        let mut records: Vec<Record> = Vec::default();

        for record in &self.records {
            match seen.get(record.configuration.as_slice()) {
                Some(&index) => records[index].num_occurrences += record.num_occurrences,
                None => {
                    seen.insert(record.configuration.as_slice(), records.len());
                    records.push(record.clone());
                }
            }
        }

        SampleSet {
            variables: self.variables.clone(),
            vartype: self.vartype,
            records,
            timing: self.timing,
        }
    }
}

#[cfg(test)]
mod sample_tests {
    use super::*;

    #[test]
    fn aggregation() {
        let mut set = SampleSet::new(vec!['a', 'b'], Vartype::Binary);
        set.push(vec![0, 1], -1.0);
        set.push(vec![1, 1], 2.0);
        set.push(vec![0, 1], -1.0);

        let aggregate = set.aggregate();
        assert_eq!(aggregate.len(), 2);
        assert_eq!(aggregate.total_occurrences(), 3);
        assert_eq!(aggregate.records()[0].num_occurrences, 2);
        assert_eq!(aggregate.records()[1].configuration, vec![1, 1]);
    }

    #[test]
    fn lowest() {
        let mut set = SampleSet::new(vec![0_u32], Vartype::Spin);
        set.push(vec![1], 0.0);
        set.push(vec![-1], -2.0);
        set.push(vec![-1], -2.0);

        assert_eq!(set.lowest().len(), 2);
        assert_eq!(set.assignment(1), Some(Assignment::from([(0, -1)])));
        assert_eq!(set.assignment(3), None);
    }
}
