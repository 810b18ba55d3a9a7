use rand::SeedableRng;
use rand::rngs::StdRng;
use rand_distr::{Distribution, Normal, NormalError};
use thiserror::Error;
use tracing::instrument;

#[derive(Debug, Error)]
pub enum SamplingError {
    #[error("Invalid standard deviation {0}: must be finite and non-negative")]
    InvalidWidth(f64),
    #[error("Failed to create normal distribution: {source}")]
    DistributionError {
        #[from]
        source: NormalError,
    },
}

/// Seed of the smearing draw for a jet, derived from the event number and the jet
/// pseudorapidity only.
///
/// The sum is truncated towards zero; a negative result (very forward jets in event 0)
/// wraps around when reinterpreted as the unsigned generator seed.
#[inline]
pub fn smearing_seed(event: u64, eta: f64) -> u64 {
    (event as f64 + (eta + 2.5) * 10_000.0) as i64 as u64
}

/// Draws once from `Normal(mean, sigma)` using a generator freshly seeded with `seed`.
///
/// The generator lives only for this call, so repeated calls with the same seed share the
/// same underlying standard-normal value and differ only through `mean` and `sigma`.
#[instrument(level = "trace", skip_all, fields(seed = seed, sigma = sigma))]
pub fn seeded_gaussian(seed: u64, mean: f64, sigma: f64) -> Result<f64, SamplingError> {
    if !sigma.is_finite() || sigma < 0.0 {
        return Err(SamplingError::InvalidWidth(sigma));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let normal = Normal::new(mean, sigma)?;
    Ok(normal.sample(&mut rng))
}
