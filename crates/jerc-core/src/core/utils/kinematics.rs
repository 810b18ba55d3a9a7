use std::f64::consts::{PI, TAU};

/// Wraps an azimuthal difference into `(-π, π]`.
///
/// Values already in range are returned unchanged; non-finite values pass through.
#[inline]
pub fn wrap_phi(dphi: f64) -> f64 {
    if !dphi.is_finite() || (dphi > -PI && dphi <= PI) {
        return dphi;
    }
    let wrapped = (dphi + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI { PI } else { wrapped }
}

#[inline]
pub fn delta_phi(phi1: f64, phi2: f64) -> f64 {
    wrap_phi(phi1 - phi2)
}

/// Angular distance `sqrt(Δη² + Δφ²)` with the azimuthal difference wrapped.
#[inline]
pub fn delta_r(eta1: f64, phi1: f64, eta2: f64, phi2: f64) -> f64 {
    let deta = eta1 - eta2;
    let dphi = delta_phi(phi1, phi2);
    (deta * deta + dphi * dphi).sqrt()
}
