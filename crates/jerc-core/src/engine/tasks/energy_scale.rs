use crate::core::corrections::traits::{CorrectionInput, LookupError};
use crate::core::models::event::EventContext;
use crate::core::models::jet::RawJet;
use crate::engine::context::EnergyScaleCorrections;

/// Kinematics of a jet before and after the energy-scale chain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyScaleResult {
    pub pt_raw: f64,
    pub mass_raw: f64,
    pub pt_jec: f64,
    pub mass_jec: f64,
}

/// Ratio applied to the mass, `1.0` whenever the raw momentum is not positive.
#[inline]
pub fn mass_ratio(pt_raw: f64, pt_jec: f64) -> f64 {
    if pt_raw > 0.0 { pt_jec / pt_raw } else { 1.0 }
}

/// Applies L1 → L2 → L3 (→ L2L3 residual, if bound) to the raw momentum of `jet`.
///
/// Every level is evaluated at the momentum produced by the previous one.
pub fn run(
    jet: &RawJet,
    event: &EventContext,
    corrections: &EnergyScaleCorrections,
) -> Result<EnergyScaleResult, LookupError> {
    let pt_raw = jet.raw_pt();
    let mass_raw = jet.raw_mass();

    let pt_l1 = pt_raw
        * corrections.l1.evaluate(&[
            CorrectionInput::Real(jet.area),
            CorrectionInput::Real(jet.eta),
            CorrectionInput::Real(pt_raw),
            CorrectionInput::Real(event.rho),
        ])?;
    let pt_l2 = pt_l1 * corrections.l2.evaluate(jet.eta, jet.phi, pt_l1)?;
    let pt_l3 = pt_l2 * corrections.l3.evaluate(jet.eta, jet.phi, pt_l2)?;

    let pt_jec = match &corrections.residual {
        Some(residual) => pt_l3 * residual.evaluate(jet.eta, jet.phi, pt_l3)?,
        None => pt_l3,
    };

    Ok(EnergyScaleResult {
        pt_raw,
        mass_raw,
        pt_jec,
        mass_jec: mass_raw * mass_ratio(pt_raw, pt_jec),
    })
}
