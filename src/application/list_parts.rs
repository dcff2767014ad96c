//! List catalog body parts use case

use crate::error::Result;
use crate::infrastructure::{BodylogRepository, CatalogCache, FileSystemRepository};

/// Service for listing the body parts available in the catalog
pub struct PartsService {
    cache: CatalogCache,
}

impl PartsService {
    /// Create the service, binding the cache to the configured catalog file
    pub fn new(repository: FileSystemRepository) -> Result<Self> {
        let config = repository.load_config()?;
        let cache = CatalogCache::new(config.videos_path(repository.root()));
        Ok(PartsService { cache })
    }

    /// Body-part names in catalog file order
    pub fn execute(&mut self) -> Vec<String> {
        self.cache
            .catalog()
            .part_names()
            .map(String::from)
            .collect()
    }
}
