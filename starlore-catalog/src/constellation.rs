//! Constellation resolution seam.
//!
//! Mapping equatorial coordinates to an IAU constellation needs boundary
//! tables this crate does not carry. The amateur profile takes the resolver
//! as a collaborator so embedders can plug in a real implementation; the
//! shipped [`Unresolved`] reports every position as unresolved and the
//! profile falls back to `"unknown"`.

/// Resolves an equatorial position to an IAU constellation name.
pub trait ConstellationResolver {
    /// Constellation containing the given position, or `None` when the
    /// resolver cannot say.
    fn resolve(&self, ra_deg: f64, dec_deg: f64) -> Option<String>;
}

/// Resolver that never resolves.
pub struct Unresolved;

impl ConstellationResolver for Unresolved {
    fn resolve(&self, _ra_deg: f64, _dec_deg: f64) -> Option<String> {
        None
    }
}
