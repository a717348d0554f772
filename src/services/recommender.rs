use std::collections::HashSet;

use thiserror::Error;
use uuid::Uuid;

use crate::models::{Movie, ScoredMovie};

/// Number of recommendations returned when the caller does not ask for more
pub const DEFAULT_LIMIT: usize = 2;

/// Error types for the recommender
#[derive(Debug, Error)]
pub enum RecommendError {
    #[error("Liked movie {0} not found in catalog")]
    LikedMovieNotFound(Uuid),
}

/// Recommender over an ordered catalog snapshot
///
/// Borrows the catalog for the duration of one request; holds no state of its
/// own, so repeated calls with the same inputs yield the same output.
pub struct Recommender<'a> {
    catalog: &'a [Movie],
}

impl<'a> Recommender<'a> {
    /// Creates a recommender over the given catalog
    pub fn new(catalog: &'a [Movie]) -> Self {
        Self { catalog }
    }

    /// Finds the top `limit` movies most similar to the liked one
    ///
    /// Scores every other catalog entry by Jaccard similarity of genre sets
    /// and ranks descending. Equal scores keep the candidates' relative
    /// catalog order (the sort is stable), so output is fully deterministic.
    ///
    /// A catalog containing only the liked movie yields an empty result, as
    /// does `limit == 0`. An unknown `liked_id` is an error.
    pub fn recommend(
        &self,
        liked_id: Uuid,
        limit: usize,
    ) -> Result<Vec<ScoredMovie>, RecommendError> {
        let liked = self
            .catalog
            .iter()
            .find(|movie| movie.id == liked_id)
            .ok_or(RecommendError::LikedMovieNotFound(liked_id))?;

        // Candidates are every catalog entry except the liked movie itself,
        // excluded by id so an identical genre set elsewhere still competes
        let mut scored: Vec<ScoredMovie> = self
            .catalog
            .iter()
            .filter(|candidate| candidate.id != liked.id)
            .map(|candidate| ScoredMovie {
                movie: candidate.clone(),
                score: jaccard(&liked.genres, &candidate.genres),
            })
            .collect();

        // Stable sort: ties keep catalog order
        scored.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(limit);

        Ok(scored)
    }
}

/// Jaccard similarity of two genre sets
///
/// |A ∩ B| / |A ∪ B|, with an empty union scoring 0 rather than dividing by
/// zero. Symmetric, and always in [0, 1].
pub fn jaccard(a: &HashSet<String>, b: &HashSet<String>) -> f64 {
    let union = a.union(b).count();
    if union == 0 {
        return 0.0;
    }
    let intersection = a.intersection(b).count();
    intersection as f64 / union as f64
}
