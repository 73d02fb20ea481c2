//! Core angle type.
//!
//! [`Angle`] stores radians internally and converts to and from the units
//! that appear in star catalogs: degrees, hours (right ascension, 1h = 15°),
//! and arcseconds (parallax).
//!
//! ```
//! use starlore_core::Angle;
//!
//! let ra = Angle::from_hours(6.0);
//! assert!((ra.degrees() - 90.0).abs() < 1e-10);
//!
//! // A 100 mas parallax
//! let parallax = Angle::from_arcseconds(0.1);
//! assert!(parallax.radians() > 0.0);
//! ```

/// An angular measurement stored as radians.
///
/// `Copy` because an angle is one `f64`. `Eq`/`Ord` are not implemented
/// since the payload can be NaN.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
pub struct Angle {
    rad: f64,
}

impl Angle {
    /// Zero angle.
    pub const ZERO: Self = Self { rad: 0.0 };

    /// Creates an angle from radians.
    ///
    /// The only `const` constructor because radians are the internal
    /// representation.
    #[inline]
    pub const fn from_radians(rad: f64) -> Self {
        Self { rad }
    }

    /// Creates an angle from degrees.
    #[inline]
    pub fn from_degrees(deg: f64) -> Self {
        Self {
            rad: deg.to_radians(),
        }
    }

    /// Creates an angle from hours (1 hour = 15 degrees).
    ///
    /// Right ascension is conventionally measured in hours.
    #[inline]
    pub fn from_hours(h: f64) -> Self {
        Self {
            rad: (h * 15.0).to_radians(),
        }
    }

    /// Creates an angle from arcseconds (3600" = 1 degree).
    ///
    /// Parallax measurements arrive in arcseconds or milliarcseconds.
    #[inline]
    pub fn from_arcseconds(arcsec: f64) -> Self {
        Self {
            rad: (arcsec / 3600.0).to_radians(),
        }
    }

    /// Returns the angle in radians.
    #[inline]
    pub fn radians(self) -> f64 {
        self.rad
    }

    /// Returns the angle in degrees.
    #[inline]
    pub fn degrees(self) -> f64 {
        self.rad.to_degrees()
    }

    /// Returns the angle in hours.
    #[inline]
    pub fn hours(self) -> f64 {
        self.degrees() / 15.0
    }

    /// Returns the tangent of the angle.
    #[inline]
    pub fn tan(self) -> f64 {
        self.rad.tan()
    }
}
