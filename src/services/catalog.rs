use crate::models::{CourseCode, CourseRecord};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

/// Failures from the external course catalog.
///
/// These are surfaced as validation warnings, never propagated as fatal
/// errors: affected codes stay in `Unknown` existence state (fail-open)
/// until a later lookup resolves them.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("catalog request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("catalog rejected the request: {0}")]
    Rejected(String),

    #[error("malformed catalog response: {0}")]
    Malformed(String),
}

/// One batched prerequisite/existence lookup response.
///
/// `prereqs` maps a normalized code to its OR-groups; `exists` carries
/// explicit existence flags. Codes present in `prereqs` but absent from
/// `exists` are treated as existing — a prerequisite entry implies the
/// catalog recognizes the code.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LookupResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub prereqs: HashMap<String, Vec<Vec<String>>>,
    #[serde(default)]
    pub exists: HashMap<String, bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    results: Vec<CourseRecord>,
}

/// The course catalog as consumed by the pipeline.
#[async_trait]
pub trait CatalogLookup: Send + Sync {
    /// One batched prerequisite/existence lookup for a whole frontier round.
    /// The request carries a comma-separated list of normalized codes.
    async fn lookup(&self, codes: &[CourseCode]) -> Result<LookupResponse, CatalogError>;

    /// Free-text course search with a result-count limit.
    async fn search(&self, query: &str, limit: usize) -> Result<Vec<CourseRecord>, CatalogError>;
}

/// HTTP implementation of [`CatalogLookup`] against the catalog service.
pub struct HttpCatalog {
    client: reqwest::Client,
    base_url: String,
}

impl HttpCatalog {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }
}

#[async_trait]
impl CatalogLookup for HttpCatalog {
    async fn lookup(&self, codes: &[CourseCode]) -> Result<LookupResponse, CatalogError> {
        let joined = codes
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<&str>>()
            .join(",");
        let url = format!("{}/prereqs", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("codes", joined.as_str())])
            .send()
            .await?
            .error_for_status()?;

        let body: LookupResponse = response
            .json()
            .await
            .map_err(|e| CatalogError::Malformed(e.to_string()))?;
        Ok(body)
    }

    async fn search(&self, query: &str, limit: usize) -> Result<Vec<CourseRecord>, CatalogError> {
        let url = format!("{}/search", self.base_url);

        let response = self
            .client
            .get(&url)
            .query(&[("query", query), ("limit", &limit.to_string())])
            .send()
            .await?
            .error_for_status()?;

        let body: SearchResponse = response
            .json()
            .await
            .map_err(|e| CatalogError::Malformed(e.to_string()))?;

        let mut results = body.results;
        results.truncate(limit);
        Ok(results)
    }
}
