//! Person enrichment lookups

use crate::domain::Enrichment;
use crate::error::EnrichError;

pub mod clearbit;

pub use clearbit::ClearbitClient;

/// Anything that can turn an email address into an enrichment record.
pub trait Enricher {
    /// Look up `email`. A missing match is `Ok` with `person: None`.
    fn lookup(&self, email: &str) -> Result<Enrichment, EnrichError>;
}
