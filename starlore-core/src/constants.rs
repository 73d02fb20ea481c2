//! Physical and astronomical constants for stellar property derivation
//!
//! Fixed values are plain consts. The two derived reference values, the
//! parsec length and the zero-magnitude flux, are computed once per process
//! and shared read-only by every caller.

use once_cell::sync::Lazy;
use std::f64::consts::PI;

/// Astronomical unit in meters
///
/// IAU 2012 definition: exactly 149 597 870 700 m.
pub const ASTRONOMICAL_UNIT_M: f64 = 149_597_870_700.0;

/// Bolometric luminosity of Vega in Watts
///
/// Anchors the magnitude scale: a star of apparent magnitude zero delivers
/// the flux Vega would at its catalog distance of 10 parsecs.
pub const VEGA_LUMINOSITY_W: f64 = 3.0128e28;

/// Stefan-Boltzmann constant in W m⁻² K⁻⁴
pub const STEFAN_BOLTZMANN: f64 = 5.6703e-8;

/// Light-year in meters
///
/// Exact by definition: Julian year (365.25 d) times c.
pub const LIGHT_YEAR_M: f64 = 9_460_730_472_580_800.0;

/// Nominal solar radius in meters (IAU 2015 Resolution B3)
pub const SOLAR_RADIUS_M: f64 = 6.957e8;

/// Nominal solar luminosity in Watts (IAU 2015 Resolution B3)
pub const SOLAR_LUMINOSITY_W: f64 = 3.828e26;

/// Milliarcseconds per arcsecond
pub const MAS_PER_ARCSEC: f64 = 1000.0;

/// Parsec in meters
///
/// Distance at which one astronomical unit subtends one arcsecond:
/// `AU / tan(1")`. Computed once because `tan` is not const-evaluable.
pub static PARSEC_M: Lazy<f64> =
    Lazy::new(|| ASTRONOMICAL_UNIT_M / ((PI / 180.0) * (1.0 / 3600.0)).tan());

/// Reference flux for the apparent magnitude scale, in W/m²
///
/// Flux of a magnitude-zero star: `L_vega / (4π (10 pc)²)`.
pub static F0_W_PER_M2: Lazy<f64> =
    Lazy::new(|| VEGA_LUMINOSITY_W / (4.0 * PI * (10.0 * *PARSEC_M).powi(2)));
