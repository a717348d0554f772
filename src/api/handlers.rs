use axum::{
    extract::{Query, State},
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::models::{Movie, ScoredMovie};
use crate::services::{Recommender, DEFAULT_LIMIT};

use super::AppState;

// Request/Response types

#[derive(Debug, Deserialize)]
pub struct ListMoviesQuery {
    /// `?sort=title` returns the alphabetical listing a selection UI wants;
    /// default is catalog order
    pub sort: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateMovieRequest {
    pub title: String,
    #[serde(default)]
    pub genres: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct MovieResponse {
    pub id: Uuid,
    pub title: String,
    pub genres: Vec<String>,
}

impl From<&Movie> for MovieResponse {
    fn from(movie: &Movie) -> Self {
        let mut genres: Vec<String> = movie.genres.iter().cloned().collect();
        genres.sort();
        Self {
            id: movie.id,
            title: movie.title.clone(),
            genres,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct RecommendationRequest {
    pub liked_id: Uuid,
    #[serde(default = "default_limit")]
    pub limit: usize,
}

fn default_limit() -> usize {
    DEFAULT_LIMIT
}

#[derive(Debug, Serialize)]
pub struct RecommendedMovie {
    pub id: Uuid,
    pub title: String,
    /// Exposed for diagnostics; clients only need the ordering
    pub score: f64,
}

impl From<&ScoredMovie> for RecommendedMovie {
    fn from(scored: &ScoredMovie) -> Self {
        Self {
            id: scored.movie.id,
            title: scored.movie.title.clone(),
            score: scored.score,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RecommendationResponse {
    pub liked: MovieResponse,
    pub recommendations: Vec<RecommendedMovie>,
}

// Handlers

/// Health check endpoint
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}

/// Get the catalog
pub async fn get_movies(
    State(state): State<AppState>,
    Query(params): Query<ListMoviesQuery>,
) -> Json<Vec<MovieResponse>> {
    let inner = state.inner.read().await;
    let mut movies: Vec<MovieResponse> = inner.catalog.iter().map(MovieResponse::from).collect();

    if params.sort.as_deref() == Some("title") {
        movies.sort_by(|a, b| a.title.cmp(&b.title));
    }

    Json(movies)
}

/// Add a movie to the catalog
pub async fn create_movie(
    State(state): State<AppState>,
    Json(request): Json<CreateMovieRequest>,
) -> AppResult<(StatusCode, Json<MovieResponse>)> {
    if request.title.trim().is_empty() {
        return Err(AppError::InvalidInput("Movie title must not be blank".to_string()));
    }

    let movie = Movie::new(request.title, request.genres);
    let response = MovieResponse::from(&movie);

    let mut inner = state.inner.write().await;
    inner.catalog.push(movie);

    tracing::info!(movie_count = inner.catalog.len(), "Movie added to catalog");

    Ok((StatusCode::CREATED, Json(response)))
}

/// Recommend the movies most similar to the liked one
pub async fn recommend(
    State(state): State<AppState>,
    Json(request): Json<RecommendationRequest>,
) -> AppResult<Json<RecommendationResponse>> {
    let inner = state.inner.read().await;

    let recommender = Recommender::new(&inner.catalog);
    let scored = recommender
        .recommend(request.liked_id, request.limit)
        .map_err(|e| AppError::NotFound(e.to_string()))?;

    // The engine already verified the liked id exists
    let liked = inner
        .catalog
        .iter()
        .find(|movie| movie.id == request.liked_id)
        .ok_or_else(|| AppError::Internal("Liked movie vanished mid-request".to_string()))?;

    tracing::debug!(
        liked = %liked.title,
        returned = scored.len(),
        limit = request.limit,
        "Recommendations computed"
    );

    Ok(Json(RecommendationResponse {
        liked: MovieResponse::from(liked),
        recommendations: scored.iter().map(RecommendedMovie::from).collect(),
    }))
}
