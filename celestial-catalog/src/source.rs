use crate::{CatalogResult, StarRecord};

/// Anything that can produce an immutable snapshot of catalog stars.
pub trait StarSource {
    fn load(&self) -> CatalogResult<Vec<StarRecord>>;
}

/// A fixed list of stars, for fixtures and programmatic catalogs.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    stars: Vec<StarRecord>,
}

impl InMemoryCatalog {
    pub fn new(stars: Vec<StarRecord>) -> Self {
        Self { stars }
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }
}

impl FromIterator<StarRecord> for InMemoryCatalog {
    fn from_iter<I: IntoIterator<Item = StarRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl StarSource for InMemoryCatalog {
    fn load(&self) -> CatalogResult<Vec<StarRecord>> {
        Ok(self.stars.clone())
    }
}
