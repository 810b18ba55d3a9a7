use crate::core::corrections::traits::{BoundCorrection, CorrectionInput, LookupError};
use crate::engine::utils::sampling::{SamplingError, seeded_gaussian};
use tracing::trace;

/// Resolution scale factors for the nominal calibration and its two variations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleFactors {
    pub nominal: f64,
    pub up: f64,
    pub down: f64,
}

impl ScaleFactors {
    /// Evaluates the scale-factor capability at `(eta, pt_jec, label)` for each of the
    /// `"nom"`, `"up"` and `"down"` labels.
    pub fn evaluate(
        correction: &BoundCorrection,
        eta: f64,
        pt_jec: f64,
    ) -> Result<Self, LookupError> {
        let at = |label: &'static str| {
            correction.evaluate(&[
                CorrectionInput::Real(eta),
                CorrectionInput::Real(pt_jec),
                CorrectionInput::Str(label),
            ])
        };

        Ok(Self {
            nominal: at("nom")?,
            up: at("up")?,
            down: at("down")?,
        })
    }
}

/// Which smearing method produced a set of multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SmearBranch {
    /// A generator-level partner was found; the jet is scaled towards it.
    ScaleToTruth,
    /// No partner and a scale factor above one; multipliers are seeded Gaussian draws.
    Stochastic,
    /// Neither applies; every multiplier is exactly one.
    Unsmeared,
}

/// Non-negative multipliers applied to the energy-scale corrected kinematics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmearFactors {
    pub nominal: f64,
    pub up: f64,
    pub down: f64,
    pub branch: SmearBranch,
}

impl SmearFactors {
    fn unsmeared() -> Self {
        Self {
            nominal: 1.0,
            up: 1.0,
            down: 1.0,
            branch: SmearBranch::Unsmeared,
        }
    }

    fn clamped(self) -> Self {
        Self {
            nominal: self.nominal.max(0.0),
            up: self.up.max(0.0),
            down: self.down.max(0.0),
            branch: self.branch,
        }
    }

    pub fn apply(&self, pt_jec: f64, mass_jec: f64) -> SmearedKinematics {
        SmearedKinematics {
            pt: pt_jec * self.nominal,
            mass: mass_jec * self.nominal,
            up_pt: pt_jec * self.up,
            up_mass: mass_jec * self.up,
            down_pt: pt_jec * self.down,
            down_mass: mass_jec * self.down,
        }
    }
}

/// Jet kinematics after smearing with the nominal and varied scale factors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmearedKinematics {
    pub pt: f64,
    pub mass: f64,
    pub up_pt: f64,
    pub up_mass: f64,
    pub down_pt: f64,
    pub down_mass: f64,
}

/// Deterministic multiplier moving `pt_jec` towards the matched `pt_gen`.
#[inline]
pub fn scale_to_truth(sf: f64, pt_jec: f64, pt_gen: f64) -> f64 {
    1.0 + (sf - 1.0) * (pt_jec - pt_gen) / pt_jec
}

/// Width of the Gaussian used for unmatched jets.
///
/// A variation with `sf <= 1` gets width zero, so its draw is exactly `1.0` rather than
/// an undefined square root.
#[inline]
pub fn stochastic_width(resolution: f64, sf: f64) -> f64 {
    resolution * (sf * sf - 1.0).max(0.0).sqrt()
}

/// Computes the nominal, up and down smearing multipliers of one jet.
///
/// The branch is decided once from `matched_pt` and the nominal scale factor. In the
/// stochastic branch each of the three draws uses its own generator seeded with `seed`,
/// so all three share the same underlying standard-normal value.
pub fn smear_factors(
    pt_jec: f64,
    matched_pt: Option<f64>,
    resolution: f64,
    sf: ScaleFactors,
    seed: u64,
) -> Result<SmearFactors, SamplingError> {
    let factors = match matched_pt {
        Some(pt_gen) => SmearFactors {
            nominal: scale_to_truth(sf.nominal, pt_jec, pt_gen),
            up: scale_to_truth(sf.up, pt_jec, pt_gen),
            down: scale_to_truth(sf.down, pt_jec, pt_gen),
            branch: SmearBranch::ScaleToTruth,
        },
        None if sf.nominal > 1.0 => {
            let draw =
                |factor: f64| seeded_gaussian(seed, 1.0, stochastic_width(resolution, factor));
            SmearFactors {
                nominal: draw(sf.nominal)?,
                up: draw(sf.up)?,
                down: draw(sf.down)?,
                branch: SmearBranch::Stochastic,
            }
        }
        None => SmearFactors::unsmeared(),
    }
    .clamped();

    trace!(
        branch = ?factors.branch,
        nominal = factors.nominal,
        up = factors.up,
        down = factors.down,
        "Smearing multipliers."
    );
    Ok(factors)
}
