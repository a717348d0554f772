use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Represents a movie in the catalog
///
/// Immutable once loaded: the engine only ever reads it. Genres are a true
/// set, so repeated labels collapse and intersection/union come for free.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Movie {
    /// Unique identifier for the movie
    pub id: Uuid,
    /// Display title
    pub title: String,
    /// Genre labels (e.g., "sci-fi", "thriller")
    pub genres: HashSet<String>,
}

impl Movie {
    /// Creates a new movie with a fresh id
    pub fn new(title: impl Into<String>, genres: impl IntoIterator<Item = String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            title: title.into(),
            genres: genres.into_iter().collect(),
        }
    }
}

/// A candidate movie with its similarity score against the liked movie.
/// Created per recommendation request and discarded after use.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredMovie {
    pub movie: Movie,
    /// Jaccard similarity in [0, 1]
    pub score: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_movie() {
        let movie = Movie::new("The Matrix", vec!["sci-fi".to_string(), "action".to_string()]);
        assert_eq!(movie.title, "The Matrix");
        assert_eq!(movie.genres.len(), 2);
        assert!(movie.genres.contains("sci-fi"));
    }

    #[test]
    fn test_duplicate_genres_collapse() {
        let movie = Movie::new(
            "Alien",
            vec!["horror".to_string(), "horror".to_string(), "sci-fi".to_string()],
        );
        assert_eq!(movie.genres.len(), 2);
    }

    #[test]
    fn test_movie_serde_round_trip() {
        let movie = Movie::new("Heat", vec!["crime".to_string()]);
        let json = serde_json::to_string(&movie).unwrap();
        let deserialized: Movie = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, movie);
    }
}
