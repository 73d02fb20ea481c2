//! Intrinsic star profile: the photometric derivation chain.
//!
//! From {apparent magnitude, parallax, color index, spectral type} the chain
//! derives absolute magnitude, luminosity, effective temperature, radius,
//! and (for main-sequence stars) a mass estimate. Errors compound along the
//! chain, which is why the radius and mass carry explicit low-confidence
//! qualifiers in the output.

use crate::record::RawStarRecord;
use crate::spectral::{classify, LuminosityGroup};
use serde::Serialize;
use starlore_core::constants::{
    PARSEC_M, SOLAR_LUMINOSITY_W, SOLAR_RADIUS_M, STEFAN_BOLTZMANN,
};
use starlore_core::{
    solve_distance_modulus, solve_magnitude_flux, MathErrorKind, Quantity, StarError, StarResult,
};
use std::f64::consts::PI;

/// Exponent of the main-sequence mass-luminosity relation `L ∝ M^3.5`.
const MASS_LUMINOSITY_EXPONENT: f64 = 3.5;

/// Ballesteros' formula coefficients: `T = 4600·(1/(0.92·c + 1.7) + 1/(0.92·c + 0.62))`.
const BALLESTEROS_SCALE_K: f64 = 4600.0;
const BALLESTEROS_SLOPE: f64 = 0.92;
const BALLESTEROS_OFFSET_A: f64 = 1.7;
const BALLESTEROS_OFFSET_B: f64 = 0.62;

/// Intrinsic physical properties of a star.
///
/// String-valued presentation contract; "unknown" marks fields the input
/// cannot support (and `age`/`exoplanets`, which no catalog field feeds).
#[derive(Debug, Serialize)]
pub struct ProfessionalReport {
    /// `"about <v> solar masses"` for main-sequence stars, else `"unknown"`.
    pub mass: String,
    /// Effective temperature, `"<value> K"`.
    pub temperature: String,
    /// Luminosity group name.
    #[serde(rename = "type")]
    pub luminosity_type: String,
    /// Absolute V magnitude.
    #[serde(rename = "absolute magnitude")]
    pub absolute_magnitude: String,
    /// `"VERY ROUGHLY <v> solar radii"`.
    pub radius: String,
    /// Always `"unknown"`: no age indicator in the record.
    pub age: String,
    /// Always `"unknown"`: no exoplanet data in the record.
    pub exoplanets: String,
}

/// Derive the professional profile from raw catalog fields.
///
/// # Errors
///
/// [`StarError::NumericDomain`] for a non-positive parallax, a color index
/// that zeroes a Ballesteros denominator, or a non-positive temperature.
pub fn derive_professional(record: &RawStarRecord) -> StarResult<ProfessionalReport> {
    let distance_pc = distance_parsecs(record.parallax_mas)?;
    let absolute_magnitude = solve_distance_modulus(
        Quantity::Known(record.magnitude),
        Quantity::Unknown,
        Quantity::Known(distance_pc),
    )?;

    // Flux the star would deliver at the 10 pc reference distance, scaled
    // back up over the reference sphere to total output.
    let flux_at_10pc =
        solve_magnitude_flux(Quantity::Known(absolute_magnitude), Quantity::Unknown)?;
    let luminosity_w = flux_at_10pc * 4.0 * PI * (10.0 * *PARSEC_M).powi(2);

    let temperature_k = ballesteros_temperature(record.color_index)?;
    let radius_solar = stefan_boltzmann_radius(luminosity_w, temperature_k)? / SOLAR_RADIUS_M;

    let class = classify(&record.spectral_type);
    let mass = match class.group {
        LuminosityGroup::MainSequence => {
            let luminosity_solar = luminosity_w / SOLAR_LUMINOSITY_W;
            let mass_solar = luminosity_solar.powf(1.0 / MASS_LUMINOSITY_EXPONENT);
            format!("about {:.1} solar masses", mass_solar)
        }
        _ => "unknown".to_string(),
    };

    Ok(ProfessionalReport {
        mass,
        temperature: format!("{} K", temperature_k),
        luminosity_type: class.group.to_string(),
        absolute_magnitude: format!("{}", absolute_magnitude),
        radius: format!("VERY ROUGHLY {:.1} solar radii", radius_solar),
        age: "unknown".to_string(),
        exoplanets: "unknown".to_string(),
    })
}

/// Distance in parsecs as the reciprocal of the parallax in arcseconds.
fn distance_parsecs(parallax_mas: f64) -> StarResult<f64> {
    if !(parallax_mas > 0.0) {
        return Err(StarError::numeric_domain(
            "parallax_distance",
            MathErrorKind::DivisionByZero,
            &format!("parallax {parallax_mas} mas must be positive"),
        ));
    }
    Ok(1.0 / (parallax_mas * 1e-3))
}

/// Effective temperature in Kelvin from the B−V color index
/// (Ballesteros 2012).
fn ballesteros_temperature(color_index: f64) -> StarResult<f64> {
    let denom_a = BALLESTEROS_SLOPE * color_index + BALLESTEROS_OFFSET_A;
    let denom_b = BALLESTEROS_SLOPE * color_index + BALLESTEROS_OFFSET_B;
    if denom_a == 0.0 || denom_b == 0.0 {
        return Err(StarError::numeric_domain(
            "ballesteros_temperature",
            MathErrorKind::DivisionByZero,
            &format!("color index {color_index} zeroes a denominator"),
        ));
    }
    Ok(BALLESTEROS_SCALE_K * (1.0 / denom_a + 1.0 / denom_b))
}

/// Radius in meters from luminosity and temperature via `L = σT⁴·4πR²`.
fn stefan_boltzmann_radius(luminosity_w: f64, temperature_k: f64) -> StarResult<f64> {
    if !(temperature_k > 0.0) {
        return Err(StarError::numeric_domain(
            "stefan_boltzmann_radius",
            MathErrorKind::InvalidInput,
            &format!("temperature {temperature_k} K must be positive"),
        ));
    }
    let area = luminosity_w / (STEFAN_BOLTZMANN * temperature_k.powi(4));
    Ok((area / (4.0 * PI)).sqrt())
}
