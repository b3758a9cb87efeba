//! Accuracy measurement using CIEDE2000
//!
//! Differences are summarized rather than asserted one by one so a failing
//! run reports how far off the whole sample set is.

use swatchlab_core::{Lab, delta_e_2000};

/// Statistics from a deltaE comparison
#[derive(Debug, Clone, PartialEq)]
pub struct DeltaEStats {
    /// Mean deltaE across all samples
    pub mean: f64,
    /// Maximum deltaE
    pub max: f64,
    /// 95th percentile deltaE
    pub p95: f64,
    /// Number of samples
    pub count: usize,
}

impl DeltaEStats {
    /// Summarize a set of deltaE values
    pub fn from_values(mut values: Vec<f64>) -> Self {
        values.sort_by(f64::total_cmp);

        let count = values.len();
        let mean = if count == 0 {
            0.0
        } else {
            values.iter().sum::<f64>() / count as f64
        };
        let max = values.last().copied().unwrap_or(0.0);
        let p95_idx = ((count as f64 * 0.95) as usize).min(count.saturating_sub(1));
        let p95 = values.get(p95_idx).copied().unwrap_or(0.0);

        Self {
            mean,
            max,
            p95,
            count,
        }
    }

    /// Check if all differences are imperceptible (deltaE < 1.0)
    pub fn is_excellent(&self) -> bool {
        self.max < 1.0
    }

    /// Check if differences are barely perceptible (deltaE < 2.0)
    pub fn is_good(&self) -> bool {
        self.max < 2.0
    }
}

/// Pairwise deltaE2000 statistics between two equally long Lab sequences
pub fn compare_lab(ours: &[Lab], reference: &[Lab]) -> DeltaEStats {
    assert_eq!(ours.len(), reference.len(), "sample sets differ in length");
    DeltaEStats::from_values(
        ours.iter()
            .zip(reference)
            .map(|(a, b)| delta_e_2000(*a, *b))
            .collect(),
    )
}
