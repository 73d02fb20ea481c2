//! The fixed-offset field contract of a Hipparcos main-catalog line.
//!
//! `hip_main.dat` is a fixed-width format; each field the derivations
//! consume lives at a documented byte range (0-based, end-exclusive):
//!
//! | Field | Bytes | Example |
//! |-------|-------|---------|
//! | HIP number | 8..14 | ` 91262` |
//! | Right ascension (h m s) | 17..28 | `18 36 56.34` |
//! | Declination (±d m s) | 29..40 | `+38 47 01.3` |
//! | Apparent V magnitude | 41..46 | ` 0.03` |
//! | Parallax (mas) | 79..86 | ` 130.23` |
//! | Color index B−V | 245..251 | ` 0.00` |
//! | Spectral type | 435..447 | `A0Va` |
//!
//! Ranges past the end of a short line read as empty, so a truncated line
//! fails on the first numeric field it cannot supply rather than panicking.

use starlore_core::{StarError, StarResult};

const HIP_RANGE: (usize, usize) = (8, 14);
const RA_RANGE: (usize, usize) = (17, 28);
const DEC_RANGE: (usize, usize) = (29, 40);
const VMAG_RANGE: (usize, usize) = (41, 46);
const PLX_RANGE: (usize, usize) = (79, 86);
const BV_RANGE: (usize, usize) = (245, 251);
const SPTYPE_RANGE: (usize, usize) = (435, 447);

/// Raw catalog fields for one star, extracted but minimally interpreted.
///
/// Coordinates stay as sexagesimal strings; the profile derivations parse
/// them with the semantics they need. Numeric photometric and astrometric
/// fields are parsed here because every consumer needs them as numbers.
#[derive(Debug, Clone, PartialEq)]
pub struct RawStarRecord {
    /// Hipparcos catalog number.
    pub hip: u32,
    /// Right ascension, `"HH MM SS.SS"` (ICRS, epoch J1991.25).
    pub right_ascension: String,
    /// Declination, `"±DD MM SS.S"`.
    pub declination: String,
    /// Apparent V-band magnitude.
    pub magnitude: f64,
    /// Trigonometric parallax in milliarcseconds.
    pub parallax_mas: f64,
    /// Johnson B−V color index. Negative for the bluest stars.
    pub color_index: f64,
    /// Spectral type string, e.g. `"G2V"`, `"M3III"`, `"DA2"`.
    pub spectral_type: String,
}

impl RawStarRecord {
    /// Extract the consumed fields from one catalog line.
    ///
    /// # Errors
    ///
    /// Returns [`StarError::Record`] naming the first numeric field that is
    /// empty or unparseable.
    pub fn parse_line(line: &str) -> StarResult<Self> {
        Ok(Self {
            hip: parse_field(line, HIP_RANGE, "hip")?,
            right_ascension: col(line, RA_RANGE).trim().to_string(),
            declination: col(line, DEC_RANGE).trim().to_string(),
            magnitude: parse_field(line, VMAG_RANGE, "magnitude")?,
            parallax_mas: parse_field(line, PLX_RANGE, "parallax")?,
            color_index: parse_field(line, BV_RANGE, "color_index")?,
            spectral_type: col(line, SPTYPE_RANGE).trim().to_string(),
        })
    }

    /// Extract just the HIP number from a catalog line, if present.
    ///
    /// Used while indexing: lines without a readable HIP field are skipped,
    /// not fatal.
    pub fn hip_of_line(line: &str) -> Option<u32> {
        col(line, HIP_RANGE).trim().parse().ok()
    }
}

/// Byte-range slice of a line, empty when the range falls past the end.
fn col(line: &str, (start, end): (usize, usize)) -> &str {
    let bytes = line.as_bytes();
    if start >= bytes.len() {
        return "";
    }
    let end = end.min(bytes.len());
    std::str::from_utf8(&bytes[start..end]).unwrap_or("")
}

fn parse_field<T: std::str::FromStr>(
    line: &str,
    range: (usize, usize),
    field: &'static str,
) -> StarResult<T> {
    let text = col(line, range).trim();
    text.parse().map_err(|_| {
        StarError::record(
            field,
            &format!("'{}' at bytes {}..{}", text, range.0, range.1),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Lay `text` into `line` starting at byte `start`.
    fn place(line: &mut [u8], start: usize, text: &str) {
        line[start..start + text.len()].copy_from_slice(text.as_bytes());
    }

    /// A synthetic Vega line with fields at the documented offsets.
    fn vega_line() -> String {
        let mut line = vec![b' '; 450];
        place(&mut line, 8, " 91262");
        place(&mut line, 17, "18 36 56.34");
        place(&mut line, 29, "+38 47 01.3");
        place(&mut line, 41, " 0.03");
        place(&mut line, 79, " 130.23");
        place(&mut line, 245, " 0.000");
        place(&mut line, 435, "A0Va");
        String::from_utf8(line).unwrap()
    }

    #[test]
    fn test_parse_vega_line() {
        let record = RawStarRecord::parse_line(&vega_line()).unwrap();
        assert_eq!(record.hip, 91262);
        assert_eq!(record.right_ascension, "18 36 56.34");
        assert_eq!(record.declination, "+38 47 01.3");
        assert!((record.magnitude - 0.03).abs() < 1e-12);
        assert!((record.parallax_mas - 130.23).abs() < 1e-12);
        assert!(record.color_index.abs() < 1e-12);
        assert_eq!(record.spectral_type, "A0Va");
    }

    #[test]
    fn test_negative_declination_and_color() {
        let mut line = vec![b' '; 450];
        place(&mut line, 8, " 30438");
        place(&mut line, 17, "06 23 57.11");
        place(&mut line, 29, "-52 41 44.4");
        place(&mut line, 41, "-0.62");
        place(&mut line, 79, "  10.43");
        place(&mut line, 245, " 0.164");
        place(&mut line, 435, "F0II");
        let record = RawStarRecord::parse_line(&String::from_utf8(line).unwrap()).unwrap();
        assert_eq!(record.hip, 30438);
        assert!(record.magnitude < 0.0);
        assert!(record.declination.starts_with('-'));
    }

    #[test]
    fn test_short_line_spectral_type_is_empty() {
        // A line cut off before byte 435 still parses; the classifier
        // handles the empty spectral type.
        let full = vega_line();
        let record = RawStarRecord::parse_line(&full[..260]).unwrap();
        assert_eq!(record.spectral_type, "");
    }

    #[test]
    fn test_missing_numeric_field_is_an_error() {
        let full = vega_line();
        let err = RawStarRecord::parse_line(&full[..60]).unwrap_err();
        assert!(matches!(err, StarError::Record { field: "parallax", .. }));
    }

    #[test]
    fn test_empty_line_is_an_error() {
        assert!(matches!(
            RawStarRecord::parse_line("").unwrap_err(),
            StarError::Record { field: "hip", .. }
        ));
    }

    #[test]
    fn test_hip_of_line() {
        assert_eq!(RawStarRecord::hip_of_line(&vega_line()), Some(91262));
        assert_eq!(RawStarRecord::hip_of_line("H|"), None);
    }
}
