//! Human-readable summary of an enriched person.
//!
//! Each section is gated on its own fields only: a name line when the full
//! name is known, an employment line when the employer is known, then the
//! profile links in a fixed network order.

use crate::domain::{Network, Person, ProfileLink};
use std::io::{self, Write};

pub const LINKS_HEADER: &str = "You can follow them at:";
pub const NO_LINKS: &str = "No public links found.";

/// Width of the `"{label}:"` column so profile URLs line up.
const LABEL_WIDTH: usize = 9;

pub fn name_line(person: &Person) -> Option<String> {
    person.name.full_name.as_deref().map(|name| format!("This email seems to belong to: {name}"))
}

/// Employer with optional title. A title without an employer is not shown.
pub fn employment_line(person: &Person) -> Option<String> {
    let employer = person.employment.name.as_deref()?;
    Some(match person.employment.title.as_deref() {
        Some(title) => format!("This person works at {employer} as {title}"),
        None => format!("This person works at {employer}"),
    })
}

pub fn profile_links(person: &Person) -> Vec<ProfileLink> {
    Network::ALL
        .into_iter()
        .filter_map(|network| {
            person
                .handle(network)
                .map(|handle| ProfileLink { network, url: network.profile_url(handle) })
        })
        .collect()
}

impl ProfileLink {
    pub fn display_line(&self) -> String {
        let label = format!("{}:", self.network.label());
        format!("{label:<LABEL_WIDTH$} {}", self.url)
    }
}

/// All output lines for `person`, in print order.
pub fn render_person(person: &Person) -> Vec<String> {
    let mut lines = Vec::new();
    lines.extend(name_line(person));
    lines.extend(employment_line(person));

    let links = profile_links(person);
    if links.is_empty() {
        lines.push(NO_LINKS.to_string());
    } else {
        lines.push(LINKS_HEADER.to_string());
        lines.extend(links.iter().map(ProfileLink::display_line));
    }
    lines
}

pub fn write_person<W: Write>(out: &mut W, person: &Person) -> io::Result<()> {
    for line in render_person(person) {
        writeln!(out, "{line}")?;
    }
    Ok(())
}
