//! The lookup itself: query the enricher and print what came back

use anyhow::Result;
use std::io::Write;

use crate::enrich::Enricher;
use crate::render::write_person;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupOutcome {
    Found,
    NotFound,
    Failed,
}

/// Look up `email` and write the result to `out`.
///
/// A failed or empty lookup is an outcome, not an error; only failures to
/// write output are propagated.
pub fn run_lookup<E, W>(enricher: &E, email: &str, out: &mut W) -> Result<LookupOutcome>
where
    E: Enricher + ?Sized,
    W: Write,
{
    let enrichment = match enricher.lookup(email) {
        Ok(enrichment) => enrichment,
        Err(e) => {
            tracing::error!("Getting an enrichment failed: {}", e);
            return Ok(LookupOutcome::Failed);
        }
    };

    if let Some(ref company) = enrichment.company {
        tracing::debug!("Company record: {:?}", company);
    }

    let Some(person) = enrichment.person else {
        writeln!(out, "Didn't find a person associated with: {email}")?;
        return Ok(LookupOutcome::NotFound);
    };

    write_person(out, &person)?;
    Ok(LookupOutcome::Found)
}
