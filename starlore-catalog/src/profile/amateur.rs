//! Sky-facing star profile: position, visibility, distance.

use crate::constellation::ConstellationResolver;
use crate::record::RawStarRecord;
use serde::Serialize;
use starlore_core::constants::{ASTRONOMICAL_UNIT_M, LIGHT_YEAR_M, MAS_PER_ARCSEC};
use starlore_core::{parse_dms, parse_hms, Angle, MathErrorKind, StarError, StarResult};

/// What an observer needs to see the star.
const NAKED_EYE_MAG: f64 = 6.0;
const BINOCULAR_MAG: f64 = 10.0;

/// Star properties relevant to an observer at a telescope.
///
/// String-valued on purpose: this is the presentation contract of the
/// report, with units carried in the values.
#[derive(Debug, Serialize)]
pub struct AmateurReport {
    /// Catalog designation, `"HIP <n>"`.
    pub name: String,
    /// IAU constellation, or `"unknown"` when unresolved.
    pub constellation: String,
    /// Right ascension in decimal degrees, `°`-suffixed.
    #[serde(rename = "right ascension")]
    pub right_ascension: String,
    /// Declination in decimal degrees, `°`-suffixed.
    pub declination: String,
    /// Apparent V magnitude.
    #[serde(rename = "apparent magnitude")]
    pub apparent_magnitude: String,
    /// `"naked eye"`, `"binoculars"`, or `"telescope"`.
    #[serde(rename = "requirements to view")]
    pub viewing_requirement: String,
    /// Distance from the parallax, `"<value> ly"`.
    pub distance: String,
}

/// Derive the amateur profile from raw catalog fields.
///
/// # Errors
///
/// - [`StarError::Parse`] if a coordinate string is not sexagesimal
/// - [`StarError::NumericDomain`] for a zero or negative parallax
pub fn derive_amateur(
    record: &RawStarRecord,
    resolver: &dyn ConstellationResolver,
) -> StarResult<AmateurReport> {
    let ra = parse_hms(&record.right_ascension)?;
    let dec = parse_dms(&record.declination)?;
    let constellation = resolver
        .resolve(ra.degrees(), dec.degrees())
        .unwrap_or_else(|| "unknown".to_string());

    let viewing_requirement = if record.magnitude <= NAKED_EYE_MAG {
        "naked eye"
    } else if record.magnitude <= BINOCULAR_MAG {
        "binoculars"
    } else {
        "telescope"
    };

    let distance_ly = distance_light_years(record.parallax_mas)?;

    Ok(AmateurReport {
        name: format!("HIP {}", record.hip),
        constellation,
        right_ascension: format!("{}\u{00b0}", ra.degrees()),
        declination: format!("{}\u{00b0}", dec.degrees()),
        apparent_magnitude: format!("{}", record.magnitude),
        viewing_requirement: viewing_requirement.to_string(),
        distance: format!("{} ly", distance_ly),
    })
}

/// Distance in light-years from a parallax in milliarcseconds.
///
/// The baseline is one astronomical unit: `d = AU / tan(parallax)`.
fn distance_light_years(parallax_mas: f64) -> StarResult<f64> {
    if !(parallax_mas > 0.0) {
        return Err(StarError::numeric_domain(
            "parallax_distance",
            MathErrorKind::DivisionByZero,
            &format!("parallax {parallax_mas} mas must be positive"),
        ));
    }
    let parallax = Angle::from_arcseconds(parallax_mas / MAS_PER_ARCSEC);
    let distance_m = ASTRONOMICAL_UNIT_M / parallax.tan();
    Ok(distance_m / LIGHT_YEAR_M)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constellation::Unresolved;

    fn vega_record() -> RawStarRecord {
        RawStarRecord {
            hip: 91262,
            right_ascension: "18 36 56.34".to_string(),
            declination: "+38 47 01.3".to_string(),
            magnitude: 0.03,
            parallax_mas: 130.23,
            color_index: 0.0,
            spectral_type: "A0Va".to_string(),
        }
    }

    #[test]
    fn test_vega_profile() {
        let report = derive_amateur(&vega_record(), &Unresolved).unwrap();
        assert_eq!(report.name, "HIP 91262");
        assert_eq!(report.constellation, "unknown");
        assert_eq!(report.viewing_requirement, "naked eye");
        assert!(report.right_ascension.ends_with('\u{00b0}'));
        assert!(report.declination.starts_with("38.78"));
    }

    #[test]
    fn test_vega_distance_about_25_ly() {
        let ly = distance_light_years(130.23).unwrap();
        assert!((ly - 25.04).abs() < 0.05, "got {ly}");
    }

    #[test]
    fn test_viewing_requirement_thresholds() {
        let mut record = vega_record();
        for (mag, expected) in [
            (6.0, "naked eye"),
            (6.01, "binoculars"),
            (10.0, "binoculars"),
            (10.01, "telescope"),
        ] {
            record.magnitude = mag;
            let report = derive_amateur(&record, &Unresolved).unwrap();
            assert_eq!(report.viewing_requirement, expected, "magnitude {mag}");
        }
    }

    #[test]
    fn test_resolver_is_consulted() {
        struct Fixed;
        impl ConstellationResolver for Fixed {
            fn resolve(&self, _ra: f64, _dec: f64) -> Option<String> {
                Some("Lyra".to_string())
            }
        }
        let report = derive_amateur(&vega_record(), &Fixed).unwrap();
        assert_eq!(report.constellation, "Lyra");
    }

    #[test]
    fn test_non_positive_parallax_rejected() {
        let mut record = vega_record();
        record.parallax_mas = 0.0;
        let err = derive_amateur(&record, &Unresolved).unwrap_err();
        assert!(matches!(
            err,
            StarError::NumericDomain {
                kind: MathErrorKind::DivisionByZero,
                ..
            }
        ));
    }

    #[test]
    fn test_bad_coordinates_rejected() {
        let mut record = vega_record();
        record.right_ascension = "garbage".to_string();
        assert!(matches!(
            derive_amateur(&record, &Unresolved).unwrap_err(),
            StarError::Parse { .. }
        ));
    }
}
