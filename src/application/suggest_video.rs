//! Video suggestion use case

use crate::domain::rotation;
use crate::error::{BodylogError, Result};
use crate::infrastructure::{
    session, BodylogRepository, CatalogCache, FileSystemRepository,
};
use rand::Rng;

/// Service for suggesting a stretching video for a body part.
///
/// The rotation memory lives in .bodylog/session.toml, so the suggestion for
/// a part stays stable across invocations until the part changes or a reroll
/// is requested.
pub struct SuggestService {
    repository: FileSystemRepository,
    cache: CatalogCache,
}

impl SuggestService {
    /// Create the service, binding the cache to the configured catalog file
    pub fn new(repository: FileSystemRepository) -> Result<Self> {
        let config = repository.load_config()?;
        let cache = CatalogCache::new(config.videos_path(repository.root()));
        Ok(SuggestService { repository, cache })
    }

    /// Suggest a video for the part. Returns None when the part has no videos
    /// registered; an unknown part is an error.
    pub fn execute(&mut self, part: &str, reroll: bool) -> Result<Option<String>> {
        self.execute_with_rng(part, reroll, &mut rand::thread_rng())
    }

    /// Same as `execute` but with a caller-supplied RNG
    pub fn execute_with_rng<R: Rng + ?Sized>(
        &mut self,
        part: &str,
        reroll: bool,
        rng: &mut R,
    ) -> Result<Option<String>> {
        let videos = self
            .cache
            .catalog()
            .videos(part)
            .ok_or_else(|| BodylogError::UnknownPart(part.to_string()))?
            .to_vec();

        let state = session::load_session(self.repository.root())?;
        let (url, new_state) = rotation::pick(part, &videos, &state, reroll, rng);
        session::save_session(self.repository.root(), &new_state)?;

        Ok(url)
    }
}
