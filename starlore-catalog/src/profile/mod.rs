//! Amateur and professional star profile derivations.
//!
//! Both derivations start from the same [`RawStarRecord`](crate::record::RawStarRecord)
//! and run independently: [`derive_amateur`] answers "where is it and can I
//! see it", [`derive_professional`] answers "what kind of star is it".
//! [`derive_report`] bundles the two under the section names the combined
//! report uses.

mod amateur;
mod professional;

pub use amateur::{derive_amateur, AmateurReport};
pub use professional::{derive_professional, ProfessionalReport};

use crate::constellation::ConstellationResolver;
use crate::record::RawStarRecord;
use serde::Serialize;
use starlore_core::StarResult;

/// Combined report for one star.
#[derive(Debug, Serialize)]
pub struct StarReport {
    /// Sky-facing view: position, visibility, distance.
    #[serde(rename = "For Amateur Astronomers")]
    pub amateur: AmateurReport,
    /// Intrinsic physical properties.
    #[serde(rename = "Intrinsic Properties")]
    pub intrinsic: ProfessionalReport,
}

/// Derive both profiles for one record.
///
/// # Errors
///
/// Propagates the first failure from either derivation chain.
pub fn derive_report(
    record: &RawStarRecord,
    resolver: &dyn ConstellationResolver,
) -> StarResult<StarReport> {
    Ok(StarReport {
        amateur: derive_amateur(record, resolver)?,
        intrinsic: derive_professional(record)?,
    })
}
