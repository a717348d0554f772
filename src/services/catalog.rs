use crate::{
    error::{AppError, AppResult},
    models::Movie,
};
use serde::Deserialize;

/// Catalog data source abstraction
///
/// The server does not care where the catalog comes from; anything that can
/// produce an ordered list of movies qualifies. Entry order matters: it is
/// the tie-break order for equally-scored recommendations.
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    /// Loads the full catalog
    async fn load(&self) -> AppResult<Vec<Movie>>;

    /// Source name for logging and debugging
    fn name(&self) -> &'static str;
}

/// Raw catalog entry as written in a seed file
///
/// Ids are assigned at load time, so seed files stay hand-editable:
/// `[{"title": "Alien", "genres": ["horror", "sci-fi"]}, ...]`
#[derive(Debug, Deserialize)]
pub struct CatalogEntry {
    pub title: String,
    #[serde(default)]
    pub genres: Vec<String>,
}

impl From<CatalogEntry> for Movie {
    fn from(entry: CatalogEntry) -> Self {
        Movie::new(entry.title, entry.genres)
    }
}

/// Catalog source backed by a JSON file on disk
pub struct JsonFileCatalog {
    path: String,
}

impl JsonFileCatalog {
    pub fn new(path: String) -> Self {
        Self { path }
    }
}

#[async_trait::async_trait]
impl CatalogSource for JsonFileCatalog {
    async fn load(&self) -> AppResult<Vec<Movie>> {
        let raw = tokio::fs::read_to_string(&self.path).await?;
        let entries: Vec<CatalogEntry> = serde_json::from_str(&raw)?;

        let mut catalog = Vec::with_capacity(entries.len());
        for entry in entries {
            if entry.title.trim().is_empty() {
                return Err(AppError::InvalidInput(format!(
                    "Catalog entry {} has a blank title",
                    catalog.len()
                )));
            }
            catalog.push(Movie::from(entry));
        }

        tracing::debug!(path = %self.path, movie_count = catalog.len(), "Parsed catalog file");

        Ok(catalog)
    }

    fn name(&self) -> &'static str {
        "json_file"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_seed(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[tokio::test]
    async fn test_load_preserves_file_order() {
        let seed = write_seed(
            r#"[
                {"title": "Alien", "genres": ["horror", "sci-fi"]},
                {"title": "Heat", "genres": ["crime"]},
                {"title": "Amelie", "genres": []}
            ]"#,
        );
        let source = JsonFileCatalog::new(seed.path().to_string_lossy().into_owned());
        let catalog = source.load().await.unwrap();

        assert_eq!(catalog.len(), 3);
        assert_eq!(catalog[0].title, "Alien");
        assert_eq!(catalog[1].title, "Heat");
        assert_eq!(catalog[2].title, "Amelie");
        assert!(catalog[2].genres.is_empty());
    }

    #[tokio::test]
    async fn test_load_assigns_unique_ids() {
        let seed = write_seed(
            r#"[
                {"title": "Alien", "genres": ["horror"]},
                {"title": "Alien", "genres": ["horror"]}
            ]"#,
        );
        let source = JsonFileCatalog::new(seed.path().to_string_lossy().into_owned());
        let catalog = source.load().await.unwrap();

        assert_ne!(catalog[0].id, catalog[1].id);
    }

    #[tokio::test]
    async fn test_load_missing_genres_default_empty() {
        let seed = write_seed(r#"[{"title": "Pi"}]"#);
        let source = JsonFileCatalog::new(seed.path().to_string_lossy().into_owned());
        let catalog = source.load().await.unwrap();
        assert!(catalog[0].genres.is_empty());
    }

    #[tokio::test]
    async fn test_load_rejects_blank_title() {
        let seed = write_seed(r#"[{"title": "  ", "genres": ["drama"]}]"#);
        let source = JsonFileCatalog::new(seed.path().to_string_lossy().into_owned());
        let result = source.load().await;
        assert!(matches!(result, Err(AppError::InvalidInput(_))));
    }

    #[tokio::test]
    async fn test_load_missing_file() {
        let source = JsonFileCatalog::new("/nonexistent/catalog.json".to_string());
        let result = source.load().await;
        assert!(matches!(result, Err(AppError::Io(_))));
    }

    #[tokio::test]
    async fn test_load_malformed_json() {
        let seed = write_seed("not json");
        let source = JsonFileCatalog::new(seed.path().to_string_lossy().into_owned());
        let result = source.load().await;
        assert!(matches!(result, Err(AppError::Json(_))));
    }
}
