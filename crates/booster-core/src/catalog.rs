use std::collections::HashSet;
use std::fmt;

use crate::booster::Booster;

#[derive(Debug)]
pub enum CatalogError {
    Parse(serde_json::Error),
    DuplicateId(String),
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Parse(e) => write!(f, "invalid booster list: {e}"),
            CatalogError::DuplicateId(id) => write!(f, "duplicate booster id: {id}"),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Parse(e)
    }
}

/// Ordered collection of every booster known for the session.
///
/// Ids are unique; a list with a repeated id is rejected rather than
/// resolved, since selection over duplicates would be ambiguous.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Catalog {
    boosters: Vec<Booster>,
}

impl Catalog {
    pub fn new(boosters: Vec<Booster>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::with_capacity(boosters.len());
        for booster in &boosters {
            if !seen.insert(booster.id.as_str()) {
                return Err(CatalogError::DuplicateId(booster.id.clone()));
            }
        }
        Ok(Self { boosters })
    }

    /// Built-in catalog used when the configured source cannot be loaded.
    pub fn fallback() -> Self {
        Self {
            boosters: vec![
                Booster::new(
                    "welcome_booster",
                    "Welcome to BoosterKit!",
                    "Discover how easy it is to showcase new features and updates to your users.",
                    "star.circle.fill",
                    "Get Started",
                    10,
                ),
                Booster::new(
                    "feature_update",
                    "New Features Available",
                    "Check out the latest updates and improvements we've made.",
                    "sparkles",
                    "Learn More",
                    5,
                ),
            ],
        }
    }

    pub fn boosters(&self) -> &[Booster] {
        &self.boosters
    }

    pub fn iter(&self) -> impl Iterator<Item = &Booster> {
        self.boosters.iter()
    }

    pub fn get(&self, id: &str) -> Option<&Booster> {
        self.boosters.iter().find(|b| b.id == id)
    }

    pub fn len(&self) -> usize {
        self.boosters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.boosters.is_empty()
    }
}

/// Parse a JSON array of boosters and validate it into a [`Catalog`].
pub fn parse_catalog(json: &str) -> Result<Catalog, CatalogError> {
    let boosters: Vec<Booster> = serde_json::from_str(json)?;
    Catalog::new(boosters)
}
