/// Monte Carlo trial driver and percolation threshold statistics
use anyhow::{bail, Result};
use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::percolation::Percolation;

/// Half-width multiplier for a 95% confidence interval
const CONFIDENCE_95: f64 = 1.96;

/// Run one trial: open uniformly random blocked sites until the grid
/// percolates, then return the fraction of open sites.
///
/// At least one site is always opened. On a 1x1 grid the reservoir pre-merges
/// make `percolates` true at construction, but the threshold is defined as the
/// open fraction at the moment percolation occurs, so the sole site still
/// counts and the sample is exactly 1.0.
pub fn run_trial(n: usize, rng: &mut impl Rng) -> Result<f64> {
    let mut grid = Percolation::new(n)?;

    loop {
        // Rejection-sample a blocked site
        let (row, col) = loop {
            let row = rng.gen_range(1..=n);
            let col = rng.gen_range(1..=n);
            if !grid.is_open(row, col)? {
                break (row, col);
            }
        };
        grid.open(row, col)?;

        if grid.percolates()? {
            break;
        }
    }

    Ok(grid.number_of_open_sites() as f64 / (n * n) as f64)
}

/// Percolation threshold samples from independent trials on an n-by-n grid
pub struct PercolationStats {
    samples: Vec<f64>,
}

impl PercolationStats {
    /// Run `trials` independent trials on an n-by-n grid. Trials share no
    /// state, so they run on the rayon pool. With a seed, each trial derives
    /// its own RNG from seed + trial index and results are reproducible
    /// regardless of thread count.
    pub fn run(n: usize, trials: usize, seed: Option<u64>) -> Result<Self> {
        if n == 0 {
            bail!("grid size must be at least 1");
        }
        if trials == 0 {
            bail!("trial count must be at least 1");
        }

        let samples = (0..trials as u64)
            .into_par_iter()
            .map(|trial| {
                let mut rng = match seed {
                    Some(s) => StdRng::seed_from_u64(s.wrapping_add(trial)),
                    None => StdRng::from_entropy(),
                };
                let sample = run_trial(n, &mut rng)?;
                debug!("trial {trial}: threshold {sample:.6}");
                Ok(sample)
            })
            .collect::<Result<Vec<f64>>>()?;

        Ok(PercolationStats { samples })
    }

    /// Per-trial threshold samples, in trial order
    pub fn samples(&self) -> &[f64] {
        &self.samples
    }

    /// Sample mean of the percolation threshold
    pub fn mean(&self) -> f64 {
        self.samples.iter().sum::<f64>() / self.samples.len() as f64
    }

    /// Sample standard deviation (n-1 denominator); 0.0 for a single trial
    pub fn stddev(&self) -> f64 {
        if self.samples.len() < 2 {
            return 0.0;
        }
        let mean = self.mean();
        let variance = self
            .samples
            .iter()
            .map(|s| (s - mean) * (s - mean))
            .sum::<f64>()
            / (self.samples.len() - 1) as f64;
        variance.sqrt()
    }

    /// Low endpoint of the 95% confidence interval
    pub fn confidence_lo(&self) -> f64 {
        self.mean() - CONFIDENCE_95 * self.stddev() / (self.samples.len() as f64).sqrt()
    }

    /// High endpoint of the 95% confidence interval
    pub fn confidence_hi(&self) -> f64 {
        self.mean() + CONFIDENCE_95 * self.stddev() / (self.samples.len() as f64).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_degenerate_parameters() {
        assert!(PercolationStats::run(0, 10, None).is_err());
        assert!(PercolationStats::run(10, 0, None).is_err());
    }

    #[test]
    fn test_single_site_trial_is_exactly_one() {
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(run_trial(1, &mut rng).unwrap(), 1.0);
    }

    #[test]
    fn test_trial_sample_is_a_valid_fraction() {
        let mut rng = StdRng::seed_from_u64(42);
        let sample = run_trial(8, &mut rng).unwrap();
        assert!(sample > 0.0 && sample <= 1.0);
    }

    #[test]
    fn test_stddev_of_single_trial_is_zero() {
        let stats = PercolationStats::run(1, 1, Some(1)).unwrap();
        assert_eq!(stats.stddev(), 0.0);
        assert_eq!(stats.mean(), 1.0);
        assert_eq!(stats.confidence_lo(), stats.confidence_hi());
    }

    #[test]
    fn test_identical_samples_have_zero_spread() {
        // Every 1x1 trial opens the one site, so all samples equal 1.0
        let stats = PercolationStats::run(1, 20, Some(3)).unwrap();
        assert_eq!(stats.mean(), 1.0);
        assert_eq!(stats.stddev(), 0.0);
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let a = PercolationStats::run(5, 16, Some(99)).unwrap();
        let b = PercolationStats::run(5, 16, Some(99)).unwrap();
        assert_eq!(a.samples(), b.samples());
    }

    #[test]
    fn test_confidence_interval_brackets_mean() {
        let stats = PercolationStats::run(6, 32, Some(11)).unwrap();
        assert!(stats.confidence_lo() <= stats.mean());
        assert!(stats.mean() <= stats.confidence_hi());
    }
}
