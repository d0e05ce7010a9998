/*!
Summaries of sample sets.

A summary holds what is needed to draw the energy distribution of a sample set: a weighted histogram of energies and the weighted mean.
Drawing is left to the caller, though [plot_file_name] gives the name under which a distribution for some ratio is conventionally saved.
*/

use std::fmt;

use crate::structures::{sample::SampleSet, variable::Label};

/// Equal width bins over a range of values, with the weight in each.
#[derive(Clone, Debug, PartialEq)]
pub struct Histogram {
    /// Bin boundaries, one more than the number of bins.
    pub edges: Vec<f64>,

    /// Total weight in each bin.
    pub counts: Vec<usize>,
}

impl Histogram {
    /// A histogram of `values` with `bins` equal width bins over the range of the values.
    ///
    /// Each bin is half-open, except the last which also holds the maximum.
    /// If every value is the same the range is widened by a half either side.
    pub fn from_weighted(values: &[f64], weights: &[usize], bins: usize) -> Self {
        let empty = Histogram {
            edges: Vec::default(),
            counts: Vec::default(),
        };

        if bins == 0 || values.is_empty() {
            return empty;
        }

        let mut low = values.iter().copied().fold(f64::INFINITY, f64::min);
        let mut high = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        if low == high {
            low -= 0.5;
            high += 0.5;
        }

        let width = (high - low) / bins as f64;
        let edges = (0..=bins)
            .map(|index| match index == bins {
                true => high,
                false => low + width * index as f64,
            })
            .collect::<Vec<_>>();

        let mut counts = vec![0; bins];
        for (value, weight) in values.iter().zip(weights) {
            let bin = match edges[1..].iter().position(|edge| value < edge) {
                Some(bin) => bin,
                None => bins - 1,
            };
            counts[bin] += weight;
        }

        Histogram { edges, counts }
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// (low edge, high edge, count) triples.
    pub fn bins(&self) -> impl Iterator<Item = (f64, f64, usize)> + '_ {
        self.edges
            .windows(2)
            .zip(&self.counts)
            .map(|(edges, count)| (edges[0], edges[1], *count))
    }
}

/// The energy distribution of a sample set.
#[derive(Clone, Debug, PartialEq)]
pub struct EnergySummary {
    /// The total number of reads.
    pub reads: usize,

    pub min: f64,

    pub max: f64,

    /// The mean energy, weighting each record by its occurrences.
    pub mean: f64,

    pub histogram: Histogram,
}

impl EnergySummary {
    /// A summary of the energies of `samples`, or nothing if no reads were made.
    pub fn from_sample_set<V: Label>(samples: &SampleSet<V>, bins: usize) -> Option<Self> {
        let reads = samples.total_occurrences();
        if reads == 0 {
            return None;
        }

        let energies = samples.energies().collect::<Vec<_>>();
        let weights = samples.num_occurrences().collect::<Vec<_>>();

        let weighted_sum = energies
            .iter()
            .zip(&weights)
            .map(|(energy, weight)| energy * *weight as f64)
            .sum::<f64>();

        Some(EnergySummary {
            reads,
            min: energies.iter().copied().fold(f64::INFINITY, f64::min),
            max: energies.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            mean: weighted_sum / reads as f64,
            histogram: Histogram::from_weighted(&energies, &weights, bins),
        })
    }
}

impl fmt::Display for EnergySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "reads {} min {} max {} mean {:.4}",
            self.reads, self.min, self.max, self.mean
        )?;
        for (low, high, count) in self.histogram.bins() {
            writeln!(f, "[{low:>9.3}, {high:>9.3}) {count}")?;
        }
        Ok(())
    }
}

/// The file name for a plot of energies at clause-to-variable ratio `rho`, e.g. `rho_210_energies.png`.
///
/// The ratio is scaled by one hundred and truncated.
pub fn plot_file_name(rho: f64) -> String {
    format!("rho_{}_energies.png", (rho * 100.0) as i64)
}

#[cfg(test)]
mod report_tests {
    use super::*;
    use crate::structures::vartype::Vartype;

    #[test]
    fn weighted_histogram() {
        let histogram = Histogram::from_weighted(&[0.0, 1.0, 4.0], &[2, 1, 3], 4);

        assert_eq!(histogram.edges, vec![0.0, 1.0, 2.0, 3.0, 4.0]);
        assert_eq!(histogram.counts, vec![2, 1, 0, 3]);
    }

    #[test]
    fn single_value_histogram() {
        let histogram = Histogram::from_weighted(&[-3.0], &[5], 2);

        assert_eq!(histogram.edges, vec![-3.5, -3.0, -2.5]);
        assert_eq!(histogram.counts, vec![0, 5]);
    }

    #[test]
    fn empty_histograms() {
        assert!(Histogram::from_weighted(&[], &[], 10).is_empty());
        assert!(Histogram::from_weighted(&[1.0], &[1], 0).is_empty());
    }

    #[test]
    fn summary() {
        let mut samples = SampleSet::new(vec![0_u32, 1], Vartype::Binary);
        samples.push(vec![0, 0], -2.0);
        samples.push(vec![1, 0], 4.0);
        let mut samples = samples.aggregate();
        samples.push_record(crate::structures::sample::Record {
            configuration: vec![0, 1],
            energy: -2.0,
            num_occurrences: 2,
        });

        let summary = EnergySummary::from_sample_set(&samples, 10).expect("summary");
        assert_eq!(summary.reads, 4);
        assert_eq!(summary.min, -2.0);
        assert_eq!(summary.max, 4.0);
        assert_eq!(summary.mean, -0.5);
        assert_eq!(summary.histogram.counts.iter().sum::<usize>(), 4);
    }

    #[test]
    fn no_reads() {
        let samples: SampleSet<u32> = SampleSet::new(vec![], Vartype::Binary);
        assert_eq!(EnergySummary::from_sample_set(&samples, 10), None);
    }

    #[test]
    fn plot_names() {
        assert_eq!(plot_file_name(2.1), "rho_210_energies.png");
        assert_eq!(plot_file_name(3.0), "rho_300_energies.png");
    }
}
