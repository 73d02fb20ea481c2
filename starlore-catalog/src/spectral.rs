//! Spectral-type decomposition.
//!
//! A Hipparcos spectral type packs two classifications into one string: a
//! color (temperature) class like `G2` and a Roman-numeral luminosity class
//! like `III`. [`classify`] pulls them apart:
//!
//! ```
//! use starlore_catalog::spectral::{classify, LuminosityGroup};
//!
//! let class = classify("M3III");
//! assert_eq!(class.group, LuminosityGroup::Giant);
//! assert_eq!(class.color, "M3");
//! ```
//!
//! Unparseable input degrades to [`LuminosityGroup::Unknown`] rather than
//! erroring; a star with a messy spectral type still gets a profile.

use std::fmt;

/// Luminosity group of a star, decoded from its spectral type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LuminosityGroup {
    /// Class I
    Supergiant,
    /// Classes II and III
    Giant,
    /// Class IV
    Subgiant,
    /// Class V, plus `sd` subdwarfs
    MainSequence,
    /// `D`-prefixed types
    WhiteDwarf,
    /// No recognizable luminosity token
    Unknown,
}

impl fmt::Display for LuminosityGroup {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let str = match self {
            LuminosityGroup::Supergiant => "supergiant",
            LuminosityGroup::Giant => "giant",
            LuminosityGroup::Subgiant => "subgiant",
            LuminosityGroup::MainSequence => "main sequence",
            LuminosityGroup::WhiteDwarf => "white dwarf",
            LuminosityGroup::Unknown => "unknown",
        };
        write!(f, "{}", str)
    }
}

/// A decomposed spectral type.
#[derive(Debug, Clone, PartialEq)]
pub struct SpectralClass {
    /// Luminosity group.
    pub group: LuminosityGroup,
    /// Color/temperature label, e.g. `"G2"`; `"white"` for white dwarfs.
    pub color: String,
}

/// Luminosity tokens in match order. Longer tokens come before their own
/// prefixes (`III` before `II` before `I`, `IV` before `I`) so the first
/// hit is the longest.
const LUMINOSITY_TOKENS: [(&str, LuminosityGroup); 5] = [
    ("III", LuminosityGroup::Giant),
    ("II", LuminosityGroup::Giant),
    ("IV", LuminosityGroup::Subgiant),
    ("I", LuminosityGroup::Supergiant),
    ("V", LuminosityGroup::MainSequence),
];

/// Decompose a spectral type string into luminosity group and color label.
///
/// Three shapes are recognized:
///
/// 1. `sd<Color>` subdwarfs: main sequence, color is the remainder.
/// 2. `D<suffix>` white dwarfs: the suffix detail is dropped, color `"white"`.
/// 3. `<Color><Luminosity>`: first two characters are the color class, the
///    remainder is matched against the Roman-numeral tokens.
///
/// Anything too short or unrecognizable yields `Unknown` / `"unknown"`.
pub fn classify(spectral_type: &str) -> SpectralClass {
    if let Some(rest) = spectral_type.strip_prefix("sd") {
        let color = if rest.is_empty() { "unknown" } else { rest };
        return SpectralClass {
            group: LuminosityGroup::MainSequence,
            color: color.to_string(),
        };
    }
    if spectral_type.starts_with('D') {
        return SpectralClass {
            group: LuminosityGroup::WhiteDwarf,
            color: "white".to_string(),
        };
    }

    let Some(color) = spectral_type.get(..2) else {
        return SpectralClass {
            group: LuminosityGroup::Unknown,
            color: "unknown".to_string(),
        };
    };
    let rest = &spectral_type[2..];
    let group = LUMINOSITY_TOKENS
        .iter()
        .find(|(token, _)| rest.starts_with(token))
        .map(|&(_, group)| group)
        .unwrap_or(LuminosityGroup::Unknown);
    SpectralClass {
        group,
        color: color.to_string(),
    }
}
