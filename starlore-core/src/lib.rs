//! Photometric and astrometric building blocks for star profile derivation.
//!
//! `starlore-core` provides the pure computational layer shared by catalog
//! consumers: magnitude/flux and distance-modulus solvers, an observability
//! estimator, and sexagesimal angle handling.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | Angle type, HMS/DMS parsing |
//! | [`constants`] | Astronomical constants and precomputed reference values |
//! | [`difficulty`] | Observability estimate for a given apparent magnitude |
//! | [`errors`] | [`StarError`] and [`StarResult`] |
//! | [`magnitude`] | Single-unknown solvers for the magnitude relations |
//!
//! # Solving for the unknown slot
//!
//! Both solvers take every slot explicitly; exactly one must be
//! [`Quantity::Unknown`]:
//!
//! ```
//! use starlore_core::{solve_distance_modulus, Quantity};
//!
//! // Apparent magnitude 0.6 brighter than absolute: roughly 13.2 parsecs.
//! let d = solve_distance_modulus(
//!     Quantity::Known(0.6),
//!     Quantity::Known(0.0),
//!     Quantity::Unknown,
//! ).unwrap();
//! assert!((d - 13.18).abs() < 0.01);
//! ```
//!
//! # Design Notes
//!
//! - **Radians internally**: angle computations use radians; the [`Angle`]
//!   type converts for display and catalog input.
//! - **No implicit state**: every derivation is a pure function. The only
//!   process-wide values are the lazily computed constants
//!   [`constants::PARSEC_M`] and [`constants::F0_W_PER_M2`].

pub mod angle;
pub mod constants;
pub mod difficulty;
pub mod errors;
pub mod magnitude;

pub use angle::{parse_dms, parse_hms, Angle};
pub use difficulty::difficulty;
pub use errors::{MathErrorKind, StarError, StarResult};
pub use magnitude::{solve_distance_modulus, solve_magnitude_flux, Quantity};
