use crate::core::models::jet::GenJet;
use crate::core::utils::kinematics::delta_r;

/// Maximum angular distance between a jet and its generator-level partner.
pub const MAX_DELTA_R: f64 = 0.2;

/// Momentum window, in units of the jet's absolute resolution.
pub const RESOLUTION_WINDOW: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GenMatch {
    /// Position of the partner in the generator-level collection.
    pub index: usize,
    pub pt: f64,
}

/// Finds the generator-level partner of a corrected jet.
///
/// A candidate qualifies if its momentum is positive, lies within
/// `RESOLUTION_WINDOW * pt_jec * resolution` of `pt_jec`, and is closer than
/// [`MAX_DELTA_R`]. The first qualifying candidate in collection order is returned, even
/// when a later one is closer.
pub fn find_match(
    eta: f64,
    phi: f64,
    pt_jec: f64,
    resolution: f64,
    gen_jets: &[GenJet],
) -> Option<GenMatch> {
    let window = RESOLUTION_WINDOW * pt_jec * resolution;

    gen_jets
        .iter()
        .position(|candidate| {
            candidate.pt > 0.0
                && (pt_jec - candidate.pt).abs() < window
                && delta_r(eta, phi, candidate.eta, candidate.phi) < MAX_DELTA_R
        })
        .map(|index| GenMatch {
            index,
            pt: gen_jets[index].pt,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{PI, TAU};

    fn gen_jet(pt: f64, eta: f64, phi: f64) -> GenJet {
        GenJet { pt, eta, phi }
    }

    #[test]
    fn matches_compatible_partner() {
        let gens = [gen_jet(95.0, 0.51, 1.02)];
        let found = find_match(0.5, 1.0, 100.0, 0.1, &gens);
        assert_eq!(found, Some(GenMatch { index: 0, pt: 95.0 }));
    }

    #[test]
    fn rejects_partner_outside_momentum_window() {
        // window = 3 * 100 * 0.01 = 3
        let gens = [gen_jet(96.5, 0.5, 1.0)];
        assert_eq!(find_match(0.5, 1.0, 100.0, 0.01, &gens), None);
    }

    #[test]
    fn rejects_partner_outside_cone() {
        let gens = [gen_jet(100.0, 0.5, 1.25)];
        assert_eq!(find_match(0.5, 1.0, 100.0, 0.1, &gens), None);
    }

    #[test]
    fn first_qualifying_partner_wins_over_closer_one() {
        let gens = [
            gen_jet(50.0, 0.5, 1.0),
            gen_jet(98.0, 0.65, 1.0),
            gen_jet(100.0, 0.5, 1.0),
        ];
        let found = find_match(0.5, 1.0, 100.0, 0.1, &gens).unwrap();
        assert_eq!(found.index, 1);
        assert_eq!(found.pt, 98.0);
    }

    #[test]
    fn azimuth_difference_of_a_full_turn_is_no_difference() {
        let gens = [gen_jet(100.0, 0.5, 1.0 + TAU)];
        assert_eq!(
            find_match(0.5, 1.0, 100.0, 0.1, &gens).map(|m| m.index),
            Some(0)
        );
    }

    #[test]
    fn matches_across_the_azimuth_boundary() {
        let gens = [gen_jet(100.0, 0.5, -PI + 0.05)];
        assert!(find_match(0.5, PI - 0.05, 100.0, 0.1, &gens).is_some());
    }

    #[test]
    fn non_positive_partners_are_ignored() {
        let gens = [gen_jet(0.0, 0.5, 1.0), gen_jet(-1.0, 0.5, 1.0)];
        assert_eq!(find_match(0.5, 1.0, 0.5, 10.0, &gens), None);
    }

    #[test]
    fn corrupt_azimuth_is_unmatched_without_stalling() {
        let gens = [gen_jet(100.0, 0.5, 1.0e17), gen_jet(100.0, 0.5, f64::NAN)];
        assert_eq!(find_match(0.5, 1.0, 100.0, 0.1, &gens), None);
    }

    #[test]
    fn empty_collection_is_unmatched() {
        assert_eq!(find_match(0.5, 1.0, 100.0, 0.1, &[]), None);
    }
}
