//! Observability estimate for a given apparent magnitude.
//!
//! Maps an apparent magnitude to what it takes to see the object: daytime
//! visibility, ordinary night-sky visibility, or the aperture of the
//! telescope needed to collect as much light as a dark-adapted eye receives
//! from a magnitude-6 star.

use crate::errors::{MathErrorKind, StarError, StarResult};
use crate::magnitude::{solve_magnitude_flux, Quantity};
use std::f64::consts::PI;

/// Faintest magnitude visible to the naked eye under a dark sky.
pub const NAKED_EYE_LIMIT: f64 = 6.0;

/// Magnitude at or below which an object is visible in daylight.
pub const DAYTIME_LIMIT: f64 = -4.0;

/// Radius of a dark-adapted pupil, in meters.
const PUPIL_RADIUS_M: f64 = 0.005;

/// Describe the difficulty of observing an object of the given apparent
/// magnitude.
///
/// - `magnitude ≤ −4`: `"Visible in daytime."`
/// - `−4 < magnitude ≤ 6`: `"Visible at night."`
/// - fainter: `"<diameter> m telescope needed."` where the diameter collects
///   the object's flux at naked-eye power.
///
/// # Errors
///
/// Returns [`StarError::NumericDomain`] for a non-finite magnitude.
///
/// # Example
///
/// ```
/// use starlore_core::difficulty;
///
/// assert_eq!(difficulty(-5.0).unwrap(), "Visible in daytime.");
/// assert_eq!(difficulty(3.2).unwrap(), "Visible at night.");
/// assert!(difficulty(12.0).unwrap().ends_with("m telescope needed."));
/// ```
pub fn difficulty(magnitude: f64) -> StarResult<String> {
    if !magnitude.is_finite() {
        return Err(StarError::numeric_domain(
            "difficulty",
            MathErrorKind::InvalidInput,
            &format!("magnitude {magnitude} is not finite"),
        ));
    }
    if magnitude <= DAYTIME_LIMIT {
        return Ok("Visible in daytime.".to_string());
    }
    if magnitude <= NAKED_EYE_LIMIT {
        return Ok("Visible at night.".to_string());
    }

    let flux = solve_magnitude_flux(Quantity::Known(magnitude), Quantity::Unknown)?;
    let needed_flux = solve_magnitude_flux(Quantity::Known(NAKED_EYE_LIMIT), Quantity::Unknown)?;
    let eye_area = PI * PUPIL_RADIUS_M.powi(2);
    let needed_power = needed_flux * eye_area;
    let diameter = 2.0 * (needed_power / (flux * PI)).sqrt();
    Ok(format!("{diameter} m telescope needed."))
}
