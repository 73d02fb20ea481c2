//! Sexagesimal angle parsing.
//!
//! Star catalogs record right ascension as hours-minutes-seconds and
//! declination as degrees-minutes-seconds. Accepted shapes:
//!
//! ```text
//! Space-separated:  18 36 56.34    +38 47 01.3
//! Colon-separated:  18:36:56.34    -60:50:02.3
//! Letter markers:   18h36m56.34s   38d47m01.3s
//! ```
//!
//! Signs are only valid at the beginning: `-38 47 01` works, `38 -47 01`
//! does not.
//!
//! ```
//! use starlore_core::{parse_dms, parse_hms};
//!
//! let ra = parse_hms("18 36 56.34").unwrap();
//! assert!((ra.hours() - 18.615650).abs() < 1e-6);
//!
//! let dec = parse_dms("-60 50 02.3").unwrap();
//! assert!(dec.degrees() < -60.0);
//! ```

use super::Angle;
use crate::errors::{StarError, StarResult};
use once_cell::sync::Lazy;
use regex::Regex;

static HMS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?x)
        ^\s*
        ([+-])?                  # optional sign
        (\d{1,3})                # hours
        [:hH\s]+                 # separator
        (\d{1,2})                # minutes
        [:mM\s]+                 # separator
        (\d{1,2}(?:\.\d+)?)      # seconds with optional fraction
        [sS]?
        \s*$
        "#,
    )
    .unwrap()
});

static DMS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?x)
        ^\s*
        ([+-])?                  # optional sign
        (\d{1,3})                # degrees
        [:dD\s]+                 # separator
        (\d{1,2})                # minutes
        [:mM'\s]+                # separator
        (\d{1,2}(?:\.\d+)?)      # seconds with optional fraction
        [sS"]?
        \s*$
        "#,
    )
    .unwrap()
});

/// Parse a string as hours-minutes-seconds.
///
/// Use this for right ascension. The result can exceed 24h if the input
/// does; catalog values stay within range.
///
/// # Errors
///
/// Returns [`StarError::Parse`] if the string does not match an HMS shape.
pub fn parse_hms(s: &str) -> StarResult<Angle> {
    let caps = HMS_REGEX
        .captures(s)
        .ok_or_else(|| StarError::parse(s, "HMS"))?;
    let (sign, a, b, c) = sexagesimal_parts(&caps);
    Ok(Angle::from_hours(sign * (a + b / 60.0 + c / 3600.0)))
}

/// Parse a string as degrees-minutes-seconds.
///
/// Use this for declination or any general angular measurement.
///
/// # Errors
///
/// Returns [`StarError::Parse`] if the string does not match a DMS shape.
pub fn parse_dms(s: &str) -> StarResult<Angle> {
    let caps = DMS_REGEX
        .captures(s)
        .ok_or_else(|| StarError::parse(s, "DMS"))?;
    let (sign, a, b, c) = sexagesimal_parts(&caps);
    Ok(Angle::from_degrees(sign * (a + b / 60.0 + c / 3600.0)))
}

fn sexagesimal_parts(caps: &regex::Captures) -> (f64, f64, f64, f64) {
    let sign = caps
        .get(1)
        .map_or(1.0, |m| if m.as_str() == "-" { -1.0 } else { 1.0 });
    // The capture groups only admit digit runs, so these parses cannot fail.
    let a: f64 = caps[2].parse().unwrap();
    let b: f64 = caps[3].parse().unwrap();
    let c: f64 = caps[4].parse().unwrap();
    (sign, a, b, c)
}
