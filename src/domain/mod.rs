//! Core data types shared across modules
//!
//! These mirror the subset of the Clearbit combined-enrichment response that
//! the tool reads. Every field is optional: the service omits or nulls out
//! anything it does not know.

use serde::{Deserialize, Deserializer};
use std::path::PathBuf;

/// Result of a combined enrichment lookup.
///
/// `person` is `None` when the service has no match for the email.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Enrichment {
    pub person: Option<Person>,
    pub company: Option<Company>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Person {
    #[serde(deserialize_with = "null_as_default")]
    pub name: Name,
    #[serde(deserialize_with = "null_as_default")]
    pub employment: Employment,
    pub facebook: Option<Handle>,
    pub twitter: Option<Handle>,
    pub github: Option<Handle>,
    pub linkedin: Option<Handle>,
    pub googleplus: Option<Handle>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Name {
    pub full_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Employment {
    /// Employer name.
    pub name: Option<String>,
    pub title: Option<String>,
}

/// A username on one social network.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Handle {
    pub handle: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Company {
    pub name: Option<String>,
    pub domain: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Accept scalars of any type as a string, so `clearbit_key: 12345` in a
/// config file or `CLEARBIT_KEY=12345` still yields a key.
fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Scalar {
        Text(String),
        Unsigned(u64),
        Signed(i64),
        Float(f64),
        Flag(bool),
    }

    Ok(Option::<Scalar>::deserialize(deserializer)?.map(|scalar| match scalar {
        Scalar::Text(s) => s,
        Scalar::Unsigned(n) => n.to_string(),
        Scalar::Signed(n) => n.to_string(),
        Scalar::Float(n) => n.to_string(),
        Scalar::Flag(b) => b.to_string(),
    }))
}

/// Social networks the formatter knows how to link to, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Network {
    Facebook,
    Twitter,
    GitHub,
    LinkedIn,
    GooglePlus,
}

impl Network {
    pub const ALL: [Network; 5] =
        [Network::Facebook, Network::Twitter, Network::GitHub, Network::LinkedIn, Network::GooglePlus];

    pub fn label(self) -> &'static str {
        match self {
            Network::Facebook => "Facebook",
            Network::Twitter => "Twitter",
            Network::GitHub => "GitHub",
            Network::LinkedIn => "LinkedIn",
            Network::GooglePlus => "Google+",
        }
    }

    pub fn profile_url(self, handle: &str) -> String {
        match self {
            Network::Facebook => format!("https://facebook.com/{handle}"),
            Network::Twitter => format!("https://twitter.com/{handle}"),
            Network::GitHub => format!("https://github.com/{handle}"),
            Network::LinkedIn => format!("https://linkedin.com/{handle}"),
            Network::GooglePlus => format!("https://plus.google.com/{handle}"),
        }
    }
}

impl Person {
    /// The person's handle on `network`, if the service returned one.
    pub fn handle(&self, network: Network) -> Option<&str> {
        let slot = match network {
            Network::Facebook => &self.facebook,
            Network::Twitter => &self.twitter,
            Network::GitHub => &self.github,
            Network::LinkedIn => &self.linkedin,
            Network::GooglePlus => &self.googleplus,
        };
        slot.as_ref().and_then(|h| h.handle.as_deref())
    }
}

/// A link to a public profile, built only to be printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileLink {
    pub network: Network,
    pub url: String,
}

/// Resolved runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default, deserialize_with = "lenient_string")]
    pub clearbit_key: Option<String>,

    /// Overrides the combined-enrichment endpoint URL.
    #[serde(default)]
    pub clearbit_endpoint: Option<String>,

    /// Config file the values were read from, if any.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}
