//! Star profiles from Hipparcos main-catalog records.
//!
//! This crate turns a raw fixed-width catalog line into two derived views of
//! a star: the sky-facing amateur profile (where it is, how hard it is to
//! see, how far away) and the intrinsic professional profile (absolute
//! magnitude, luminosity, temperature, radius, mass estimate).
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`catalog`] | In-memory HIP-number index over raw catalog lines |
//! | [`constellation`] | Injectable constellation-resolution seam |
//! | [`profile`] | Amateur and professional property derivations |
//! | [`record`] | The fixed-offset field contract of a catalog line |
//! | [`spectral`] | Spectral-type decomposition into luminosity group and color |
//!
//! # Quick Start
//!
//! ```no_run
//! use starlore_catalog::catalog::Catalog;
//! use starlore_catalog::constellation::Unresolved;
//! use starlore_catalog::profile::derive_report;
//!
//! let catalog = Catalog::load("hip_main.dat")?;
//! let record = catalog.get(91262)?;
//! let report = derive_report(&record, &Unresolved)?;
//! println!("{}", serde_json::to_string_pretty(&report)?);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod catalog;
pub mod constellation;
pub mod profile;
pub mod record;
pub mod spectral;

pub use catalog::Catalog;
pub use constellation::{ConstellationResolver, Unresolved};
pub use profile::{derive_amateur, derive_professional, derive_report};
pub use record::RawStarRecord;
pub use spectral::{classify, LuminosityGroup, SpectralClass};
