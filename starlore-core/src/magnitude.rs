//! Single-unknown solvers for the magnitude relations.
//!
//! Two equations underlie every photometric derivation in this workspace:
//!
//! - the **distance modulus** `m − M = 5·log10(d/10)` relating apparent
//!   magnitude, absolute magnitude, and distance in parsecs;
//! - the **magnitude definition** `m = −2.5·log10(F/F0)` relating apparent
//!   magnitude and flux in W/m², anchored at the reference flux
//!   [`F0_W_PER_M2`](crate::constants::F0_W_PER_M2).
//!
//! Each solver takes every slot of its equation explicitly as a
//! [`Quantity`]; exactly one slot must be [`Quantity::Unknown`] and the
//! solver returns that slot's value. Anything else is
//! [`StarError::AmbiguousUnknown`].
//!
//! ```
//! use starlore_core::{solve_magnitude_flux, Quantity};
//!
//! let flux = solve_magnitude_flux(Quantity::Known(6.0), Quantity::Unknown).unwrap();
//! let mag = solve_magnitude_flux(Quantity::Unknown, Quantity::Known(flux)).unwrap();
//! assert!((mag - 6.0).abs() < 1e-12);
//! ```

use crate::constants::F0_W_PER_M2;
use crate::errors::{MathErrorKind, StarError, StarResult};

/// One slot of a single-unknown equation.
///
/// Equations are passed with every slot explicit, so "which variable am I
/// solving for" is stated by the caller rather than sniffed from the input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Quantity {
    /// A given numeric value.
    Known(f64),
    /// The slot to solve for.
    Unknown,
}

impl Quantity {
    /// Returns true for the [`Quantity::Unknown`] marker.
    #[inline]
    pub fn is_unknown(self) -> bool {
        matches!(self, Quantity::Unknown)
    }
}

/// Solve the distance modulus `m − M = 5·log10(d/10)` for its unknown slot.
///
/// Slots are apparent magnitude `m`, absolute magnitude `M`, and distance
/// `d` in parsecs. The returned value is the unknown slot:
///
/// - unknown `d`: `d = 10 · 10^((m − M)/5)` parsecs
/// - unknown `M`: `M = m − 5·log10(d/10)`
/// - unknown `m`: `m = M + 5·log10(d/10)`
///
/// # Errors
///
/// - [`StarError::AmbiguousUnknown`] unless exactly one slot is unknown
/// - [`StarError::NumericDomain`] for non-finite known values or a
///   non-positive distance under a logarithm
pub fn solve_distance_modulus(
    apparent: Quantity,
    absolute: Quantity,
    distance: Quantity,
) -> StarResult<f64> {
    let known = count_known("distance_modulus", &[apparent, absolute, distance])?;
    match (apparent, absolute, distance) {
        (Quantity::Known(m), Quantity::Known(abs), Quantity::Unknown) => {
            Ok(10.0 * 10f64.powf((m - abs) / 5.0))
        }
        (Quantity::Known(m), Quantity::Unknown, Quantity::Known(d)) => {
            Ok(m - 5.0 * log10_positive("distance_modulus", "distance", d / 10.0)?)
        }
        (Quantity::Unknown, Quantity::Known(abs), Quantity::Known(d)) => {
            Ok(abs + 5.0 * log10_positive("distance_modulus", "distance", d / 10.0)?)
        }
        _ => Err(StarError::ambiguous_unknown("distance_modulus", 3, known)),
    }
}

/// Solve the magnitude definition `m = −2.5·log10(F/F0)` for its unknown slot.
///
/// Slots are apparent magnitude `m` and flux `F` in W/m². The returned
/// value is the unknown slot:
///
/// - unknown `F`: `F = F0 · 10^((−2)·m·(1/5))`
/// - unknown `m`: `m = −2.5 · log10(F/F0)`
///
/// # Errors
///
/// - [`StarError::AmbiguousUnknown`] unless exactly one slot is unknown
/// - [`StarError::NumericDomain`] for non-finite known values or a
///   non-positive flux under a logarithm
pub fn solve_magnitude_flux(magnitude: Quantity, flux: Quantity) -> StarResult<f64> {
    let known = count_known("magnitude_flux", &[magnitude, flux])?;
    match (magnitude, flux) {
        (Quantity::Known(m), Quantity::Unknown) => {
            Ok(*F0_W_PER_M2 * 10f64.powf((-2.0) * m * (1.0 / 5.0)))
        }
        (Quantity::Unknown, Quantity::Known(f)) => Ok(-2.5
            * log10_positive("magnitude_flux", "flux", f / *F0_W_PER_M2)?),
        _ => Err(StarError::ambiguous_unknown("magnitude_flux", 2, known)),
    }
}

/// Count known slots, rejecting non-finite values on any of them.
fn count_known(solver: &'static str, slots: &[Quantity]) -> StarResult<usize> {
    let mut known = 0;
    for slot in slots {
        if let Quantity::Known(v) = slot {
            if !v.is_finite() {
                return Err(StarError::numeric_domain(
                    solver,
                    MathErrorKind::InvalidInput,
                    &format!("known slot holds non-finite value {v}"),
                ));
            }
            known += 1;
        }
    }
    Ok(known)
}

fn log10_positive(operation: &str, quantity: &str, value: f64) -> StarResult<f64> {
    if value <= 0.0 {
        return Err(StarError::numeric_domain(
            operation,
            MathErrorKind::LogNonPositive,
            &format!("{quantity} ratio {value} requires a positive argument"),
        ));
    }
    Ok(value.log10())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-12;

    #[test]
    fn test_distance_from_modulus() {
        // m = M puts the star at the reference distance of 10 pc.
        let d = solve_distance_modulus(
            Quantity::Known(5.0),
            Quantity::Known(5.0),
            Quantity::Unknown,
        )
        .unwrap();
        assert!((d - 10.0).abs() < EPSILON);

        // Five magnitudes of modulus is one decade of distance.
        let d = solve_distance_modulus(
            Quantity::Known(10.0),
            Quantity::Known(5.0),
            Quantity::Unknown,
        )
        .unwrap();
        assert!((d - 100.0).abs() < 1e-10);
    }

    #[test]
    fn test_absolute_from_distance() {
        let abs = solve_distance_modulus(
            Quantity::Known(0.03),
            Quantity::Unknown,
            Quantity::Known(7.678722),
        )
        .unwrap();
        assert!((abs - 0.6035656).abs() < 1e-5);
    }

    #[test]
    fn test_apparent_from_distance() {
        let m = solve_distance_modulus(
            Quantity::Unknown,
            Quantity::Known(4.83),
            Quantity::Known(10.0),
        )
        .unwrap();
        assert!((m - 4.83).abs() < EPSILON);
    }

    #[test]
    fn test_distance_modulus_round_trip() {
        let (m, d) = (7.25, 42.0);
        let abs = solve_distance_modulus(
            Quantity::Known(m),
            Quantity::Unknown,
            Quantity::Known(d),
        )
        .unwrap();
        let d_back = solve_distance_modulus(
            Quantity::Known(m),
            Quantity::Known(abs),
            Quantity::Unknown,
        )
        .unwrap();
        assert!((d_back - d).abs() < 1e-9);
    }

    #[test]
    fn test_distance_modulus_ambiguous() {
        let err = solve_distance_modulus(
            Quantity::Known(1.0),
            Quantity::Known(2.0),
            Quantity::Known(3.0),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            StarError::AmbiguousUnknown { known: 3, .. }
        ));

        let err = solve_distance_modulus(
            Quantity::Unknown,
            Quantity::Unknown,
            Quantity::Known(3.0),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            StarError::AmbiguousUnknown { known: 1, .. }
        ));
    }

    #[test]
    fn test_distance_modulus_log_domain() {
        let err = solve_distance_modulus(
            Quantity::Known(1.0),
            Quantity::Unknown,
            Quantity::Known(-4.0),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            StarError::NumericDomain {
                kind: MathErrorKind::LogNonPositive,
                ..
            }
        ));
    }

    #[test]
    fn test_non_finite_known_rejected() {
        let err = solve_distance_modulus(
            Quantity::Known(f64::NAN),
            Quantity::Known(2.0),
            Quantity::Unknown,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            StarError::NumericDomain {
                kind: MathErrorKind::InvalidInput,
                ..
            }
        ));
    }

    #[test]
    fn test_flux_of_magnitude_zero_is_reference() {
        let f = solve_magnitude_flux(Quantity::Known(0.0), Quantity::Unknown).unwrap();
        assert!((f - *F0_W_PER_M2).abs() < EPSILON);
    }

    #[test]
    fn test_magnitude_flux_round_trip() {
        for flux in [1e-12, 3.7e-9, *F0_W_PER_M2, 2.5e-6] {
            let m = solve_magnitude_flux(Quantity::Unknown, Quantity::Known(flux)).unwrap();
            let f_back = solve_magnitude_flux(Quantity::Known(m), Quantity::Unknown).unwrap();
            assert!((f_back / flux - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_five_magnitudes_is_factor_hundred() {
        let bright = solve_magnitude_flux(Quantity::Known(1.0), Quantity::Unknown).unwrap();
        let faint = solve_magnitude_flux(Quantity::Known(6.0), Quantity::Unknown).unwrap();
        assert!((bright / faint - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_magnitude_flux_ambiguous() {
        assert!(matches!(
            solve_magnitude_flux(Quantity::Unknown, Quantity::Unknown).unwrap_err(),
            StarError::AmbiguousUnknown { known: 0, .. }
        ));
        assert!(matches!(
            solve_magnitude_flux(Quantity::Known(1.0), Quantity::Known(2.0)).unwrap_err(),
            StarError::AmbiguousUnknown { known: 2, .. }
        ));
    }

    #[test]
    fn test_magnitude_flux_log_domain() {
        let err =
            solve_magnitude_flux(Quantity::Unknown, Quantity::Known(0.0)).unwrap_err();
        assert!(matches!(
            err,
            StarError::NumericDomain {
                kind: MathErrorKind::LogNonPositive,
                ..
            }
        ));
    }
}
