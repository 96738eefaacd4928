//! stalk: look up the person behind an email address
//!
//! Queries the Clearbit combined-enrichment API and prints the matched
//! person's name, employer and public profile links.

pub mod cli;
pub mod config;
pub mod domain;
pub mod enrich;
pub mod error;
pub mod render;
