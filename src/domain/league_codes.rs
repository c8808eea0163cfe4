//! Public league slug to upstream region code translation.

use std::collections::HashMap;
use thiserror::Error;

/// Built-in slug/region pairs.
pub const DEFAULT_LEAGUE_CODES: &[(&str, &str)] = &[
    ("laliga", "spain"),
    ("premier", "england"),
    ("bundesliga", "germany"),
    ("seriea", "italy"),
    ("ligue1", "france"),
];

/// An entry of the translation table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueCode {
    pub public_slug: String,
    pub upstream_region: String,
}

/// Errors raised while building a translation table.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LeagueCodeError {
    #[error("duplicate league slug '{0}'")]
    DuplicateSlug(String),

    #[error("malformed league code entry '{0}', expected 'slug=region'")]
    Malformed(String),
}

/// Read-only slug to region mapping.
///
/// Built once at startup and shared; slugs are compared case-insensitively.
#[derive(Debug, Clone)]
pub struct LeagueCodes {
    by_slug: HashMap<String, String>,
}

impl LeagueCodes {
    /// Builds a table from its entries.
    ///
    /// # Errors
    ///
    /// Returns [`LeagueCodeError::DuplicateSlug`] if two slugs differ only by case.
    pub fn new(entries: impl IntoIterator<Item = LeagueCode>) -> Result<Self, LeagueCodeError> {
        let mut by_slug = HashMap::new();
        for entry in entries {
            let slug = entry.public_slug.to_lowercase();
            if by_slug.insert(slug.clone(), entry.upstream_region).is_some() {
                return Err(LeagueCodeError::DuplicateSlug(slug));
            }
        }
        Ok(Self { by_slug })
    }

    /// Parses a `slug=region,slug=region` list.
    ///
    /// Whitespace around entries is ignored, as are empty entries.
    ///
    /// # Errors
    ///
    /// Returns [`LeagueCodeError::Malformed`] for entries without a non-empty
    /// slug and region, and [`LeagueCodeError::DuplicateSlug`] for repeated slugs.
    pub fn parse(list: &str) -> Result<Self, LeagueCodeError> {
        let entries = list
            .split(',')
            .map(str::trim)
            .filter(|entry| !entry.is_empty())
            .map(|entry| match entry.split_once('=') {
                Some((slug, region)) if !slug.trim().is_empty() && !region.trim().is_empty() => {
                    Ok(LeagueCode {
                        public_slug: slug.trim().to_string(),
                        upstream_region: region.trim().to_string(),
                    })
                }
                _ => Err(LeagueCodeError::Malformed(entry.to_string())),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(entries)
    }

    /// Translates a public slug into the upstream region code.
    ///
    /// Unknown slugs are returned unchanged so that leagues missing from the
    /// table still reach the upstream, which may reject them itself.
    pub fn translate(&self, slug: &str) -> String {
        self.by_slug
            .get(&slug.to_lowercase())
            .cloned()
            .unwrap_or_else(|| slug.to_string())
    }

    pub fn len(&self) -> usize {
        self.by_slug.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_slug.is_empty()
    }
}

impl Default for LeagueCodes {
    fn default() -> Self {
        Self {
            by_slug: DEFAULT_LEAGUE_CODES
                .iter()
                .map(|(slug, region)| (slug.to_string(), region.to_string()))
                .collect(),
        }
    }
}
