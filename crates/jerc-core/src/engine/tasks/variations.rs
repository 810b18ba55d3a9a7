use super::smearing::SmearedKinematics;
use crate::core::corrections::traits::{BoundCorrection, CorrectionInput, LookupError};
use crate::core::models::result::Variations;

/// Relative total energy-scale uncertainty of a jet, evaluated at `(eta, pt_jec)`.
pub fn total_uncertainty(
    correction: &BoundCorrection,
    eta: f64,
    pt_jec: f64,
) -> Result<f64, LookupError> {
    correction.evaluate(&[CorrectionInput::Real(eta), CorrectionInput::Real(pt_jec)])
}

/// Derives the systematic variations of a smeared jet.
///
/// The energy-scale variations shift the nominally smeared kinematics by `±uncertainty`;
/// the resolution variations are the kinematics smeared with the varied scale factors.
pub fn propagate(smeared: &SmearedKinematics, uncertainty: f64) -> Variations {
    Variations {
        scale_up_pt: smeared.pt * (1.0 + uncertainty),
        scale_down_pt: smeared.pt * (1.0 - uncertainty),
        scale_up_mass: smeared.mass * (1.0 + uncertainty),
        scale_down_mass: smeared.mass * (1.0 - uncertainty),
        smear_up_pt: smeared.up_pt,
        smear_down_pt: smeared.down_pt,
        smear_up_mass: smeared.up_mass,
        smear_down_mass: smeared.down_mass,
    }
}
