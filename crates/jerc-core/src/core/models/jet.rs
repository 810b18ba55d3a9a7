/// A reconstructed jet exactly as stored in the event record.
///
/// `pt` and `mass` may already carry part of the energy-scale correction; `raw_factor`
/// records how much, so that `pt * (1 - raw_factor)` recovers the uncorrected momentum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawJet {
    pub pt: f64,
    pub mass: f64,
    pub eta: f64,
    pub phi: f64,
    pub area: f64,
    pub raw_factor: f64,
}

impl RawJet {
    /// Transverse momentum with all stored corrections removed.
    #[inline]
    pub fn raw_pt(&self) -> f64 {
        self.pt * (1.0 - self.raw_factor)
    }

    /// Mass with all stored corrections removed.
    #[inline]
    pub fn raw_mass(&self) -> f64 {
        self.mass * (1.0 - self.raw_factor)
    }
}

/// A generator-level jet, available only in simulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenJet {
    pub pt: f64,
    pub eta: f64,
    pub phi: f64,
}
