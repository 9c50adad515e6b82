//! One-time catalog load from a file path or an http(s) URL

use super::{Catalog, CatalogError};
use std::path::Path;

/// Whether a data source names a remote document
pub fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}

/// Load and validate the catalog
///
/// Runs once at startup. Any failure is returned to the caller, which shows
/// it and stops initialization.
pub async fn load(source: &str) -> Result<Catalog, CatalogError> {
    let body = if is_url(source) {
        fetch(source).await?
    } else {
        read(Path::new(source)).await?
    };

    let catalog = Catalog::from_json(&body)?;
    let stats = catalog.stats();
    tracing::info!(
        grades = stats.grades,
        standards = stats.standards,
        sub_standards = stats.sub_standards,
        "Loaded catalog from {}",
        source
    );

    Ok(catalog)
}

async fn read(path: &Path) -> Result<String, CatalogError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| CatalogError::Read {
            path: path.to_path_buf(),
            source,
        })
}

async fn fetch(url: &str) -> Result<String, CatalogError> {
    let fetch_err = |source| CatalogError::Fetch {
        url: url.to_string(),
        source,
    };

    let response = reqwest::get(url).await.map_err(fetch_err)?;
    let status = response.status();
    if !status.is_success() {
        return Err(CatalogError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        });
    }

    response.text().await.map_err(fetch_err)
}
