//! End-to-end checks of the solver layer: conversions chained the way the
//! profile derivations chain them.

use starlore_core::constants::{PARSEC_M, VEGA_LUMINOSITY_W};
use starlore_core::{difficulty, solve_distance_modulus, solve_magnitude_flux, Quantity};
use std::f64::consts::PI;

#[test]
fn test_flux_magnitude_inverse_pair() {
    for mag in [-1.46, 0.0, 2.5, 6.0, 11.3] {
        let flux = solve_magnitude_flux(Quantity::Known(mag), Quantity::Unknown).unwrap();
        let back = solve_magnitude_flux(Quantity::Unknown, Quantity::Known(flux)).unwrap();
        assert!((back - mag).abs() < 1e-12, "magnitude {mag} did not survive");
    }
}

#[test]
fn test_modulus_chain_recovers_absolute_magnitude() {
    let (m, d) = (0.03, 7.678722);
    let abs =
        solve_distance_modulus(Quantity::Known(m), Quantity::Unknown, Quantity::Known(d)).unwrap();
    let d_back =
        solve_distance_modulus(Quantity::Known(m), Quantity::Known(abs), Quantity::Unknown)
            .unwrap();
    let abs_back = solve_distance_modulus(
        Quantity::Known(m),
        Quantity::Unknown,
        Quantity::Known(d_back),
    )
    .unwrap();
    assert!((abs_back - abs).abs() < 1e-12);
}

#[test]
fn test_magnitude_zero_flux_recovers_vega_luminosity() {
    // F(m=0) spread over the 10 pc reference sphere is the Vega anchor.
    let flux = solve_magnitude_flux(Quantity::Known(0.0), Quantity::Unknown).unwrap();
    let luminosity = flux * 4.0 * PI * (10.0 * *PARSEC_M).powi(2);
    assert!((luminosity / VEGA_LUMINOSITY_W - 1.0).abs() < 1e-12);
}

#[test]
fn test_difficulty_transitions() {
    assert_eq!(difficulty(-4.0).unwrap(), "Visible in daytime.");
    assert_eq!(difficulty(-3.9).unwrap(), "Visible at night.");
    assert_eq!(difficulty(6.0).unwrap(), "Visible at night.");
    assert!(difficulty(6.1).unwrap().ends_with("m telescope needed."));
}
