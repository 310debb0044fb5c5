//! Details fetcher
//!
//! Loads one character and every episode it appears in. Episode requests
//! are issued concurrently and joined before anything is returned.

use crate::catalog::CatalogApi;
use crate::error::Result;
use crate::types::{Character, CharacterId, Episode};
use futures::future::{join_all, try_join_all};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::{debug, warn};

/// How episode fetch failures are combined
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EpisodeJoin {
    /// One failed episode discards the whole batch
    #[default]
    AllOrNothing,
    /// Keep the episodes that loaded, list the ones that did not
    Partial,
}

/// A character together with its episodes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CharacterDetails {
    pub character: Character,
    /// Loaded episodes, in the character's episode order
    pub episodes: Vec<Episode>,
    /// Episode URLs that could not be shown
    pub missing_episodes: Vec<String>,
    /// Why episodes are missing
    pub episode_error: Option<String>,
}

impl CharacterDetails {
    /// Whether every episode was loaded
    pub fn is_complete(&self) -> bool {
        self.missing_episodes.is_empty()
    }
}

/// Fetches character details from a catalog
pub struct DetailsFetcher {
    api: Arc<dyn CatalogApi>,
    join: EpisodeJoin,
}

impl DetailsFetcher {
    /// Create a fetcher using the all-or-nothing episode join
    pub fn new(api: Arc<dyn CatalogApi>) -> Self {
        Self {
            api,
            join: EpisodeJoin::default(),
        }
    }

    /// Choose the episode join policy
    #[must_use]
    pub fn with_join(mut self, join: EpisodeJoin) -> Self {
        self.join = join;
        self
    }

    /// Fetch a character and its episodes.
    ///
    /// Fails only when the character itself cannot be fetched; episode
    /// failures are reported inside the returned details.
    pub async fn fetch(&self, id: CharacterId) -> Result<CharacterDetails> {
        let character = self.api.fetch_character(id).await?;
        debug!(
            id,
            episodes = character.episodes.len(),
            "fetching episodes"
        );

        let (episodes, missing_episodes, episode_error) = match self.join {
            EpisodeJoin::AllOrNothing => self.fetch_all_or_nothing(&character.episodes).await,
            EpisodeJoin::Partial => self.fetch_partial(&character.episodes).await,
        };

        Ok(CharacterDetails {
            character,
            episodes,
            missing_episodes,
            episode_error,
        })
    }

    async fn fetch_all_or_nothing(
        &self,
        urls: &[String],
    ) -> (Vec<Episode>, Vec<String>, Option<String>) {
        let requests = urls.iter().map(|url| self.api.fetch_episode(url));
        match try_join_all(requests).await {
            Ok(episodes) => (episodes, Vec::new(), None),
            Err(e) => {
                warn!("episode batch discarded: {e}");
                (Vec::new(), urls.to_vec(), Some(e.to_string()))
            }
        }
    }

    async fn fetch_partial(&self, urls: &[String]) -> (Vec<Episode>, Vec<String>, Option<String>) {
        let requests = urls.iter().map(|url| self.api.fetch_episode(url));
        let results = join_all(requests).await;

        let mut episodes = Vec::with_capacity(results.len());
        let mut missing = Vec::new();
        for (url, result) in urls.iter().zip(results) {
            match result {
                Ok(episode) => episodes.push(episode),
                Err(e) => {
                    warn!(url = %url, "episode fetch failed: {e}");
                    missing.push(url.clone());
                }
            }
        }

        let error = (!missing.is_empty())
            .then(|| format!("{} of {} episodes failed to load", missing.len(), urls.len()));
        (episodes, missing, error)
    }
}

impl std::fmt::Debug for DetailsFetcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DetailsFetcher")
            .field("join", &self.join)
            .finish_non_exhaustive()
    }
}
