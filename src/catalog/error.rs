//! Catalog load errors
//!
//! Every variant is fatal to initialization: the browser shows the message
//! and does not retry.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to fetch catalog from {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("catalog request to {url} failed with HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("standard code {code} appears more than once")]
    DuplicateStandardCode { code: String },

    #[error("sub-standard code {code} appears more than once")]
    DuplicateSubStandardCode { code: String },

    #[error("domain id {id:?} in grade {grade} contains the cluster separator '.'")]
    InvalidDomainId { grade: String, id: String },

    #[error("catalog contains no grades")]
    NoGrades,
}
