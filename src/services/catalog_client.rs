//! Catalog client service
//!
//! Two read-only requests against a transformation catalog: list the
//! categories, and list the items in one category. Backed either by the
//! catalog HTTP API or by an offline YAML/JSON document.

use crate::error::{CatalogError, Result};
use crate::model::catalog::{id_as_string, ApiResponse, CatalogItem, Category};
use reqwest::blocking::{Client, ClientBuilder};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const USER_AGENT_VALUE: &str = concat!("transformation-catalog/", env!("CARGO_PKG_VERSION"));

/// Source of catalog categories and items
pub trait CatalogApi: Send + Sync {
    /// List every transformation category
    fn get_all_transformation_catalog_categories(&self) -> Result<ApiResponse<Vec<Category>>>;

    /// List the items of one category
    fn get_all_items_in_category(&self, category_id: &str)
        -> Result<ApiResponse<Vec<CatalogItem>>>;

    /// Short human-readable description of where data comes from
    fn describe(&self) -> String;
}

// ═══════════════════════════════════════════════════════════════════════════════
// HTTP Client
// ═══════════════════════════════════════════════════════════════════════════════

/// Catalog client speaking to the backend over HTTP
#[derive(Debug, Clone)]
pub struct HttpCatalogClient {
    client: Client,
    base_url: Url,
}

impl HttpCatalogClient {
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_builder(base_url, Client::builder())
    }

    fn with_builder(base_url: &str, builder: ClientBuilder) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| CatalogError::Config(format!("invalid API URL {base_url}: {e}")))?;
        if base_url.cannot_be_a_base() {
            return Err(CatalogError::Config(format!(
                "API URL cannot take a path: {base_url}"
            )));
        }

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(USER_AGENT, HeaderValue::from_static(USER_AGENT_VALUE));

        let client = builder
            .default_headers(headers)
            .build()
            .map_err(|e| CatalogError::Network(format!("failed to create HTTP client: {e}")))?;

        Ok(Self { client, base_url })
    }

    /// Base URL extended by the given path segments, each percent-encoded
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub fn categories_url(&self) -> Url {
        self.endpoint(&["transformation-catalog", "categories"])
    }

    pub fn items_url(&self, category_id: &str) -> Url {
        self.endpoint(&["transformation-catalog", "category", category_id, "items"])
    }

    /// GET a list endpoint; non-200 answers carry an empty list
    fn get_list<T: DeserializeOwned>(&self, url: Url) -> Result<ApiResponse<Vec<T>>> {
        tracing::debug!("GET {}", url);

        let response = self.client.get(url).send()?;
        let status = response.status().as_u16();

        if status != 200 {
            return Ok(ApiResponse {
                status,
                data: Vec::new(),
            });
        }

        let data: Vec<T> = response.json()?;
        Ok(ApiResponse { status, data })
    }
}

impl CatalogApi for HttpCatalogClient {
    fn get_all_transformation_catalog_categories(&self) -> Result<ApiResponse<Vec<Category>>> {
        self.get_list(self.categories_url())
    }

    fn get_all_items_in_category(
        &self,
        category_id: &str,
    ) -> Result<ApiResponse<Vec<CatalogItem>>> {
        self.get_list(self.items_url(category_id))
    }

    fn describe(&self) -> String {
        self.base_url.as_str().trim_end_matches('/').to_string()
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// File Client
// ═══════════════════════════════════════════════════════════════════════════════

/// Offline catalog document
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogDocument {
    #[serde(default)]
    pub categories: Vec<CategoryEntry>,
}

/// A category together with its items, as stored in a catalog document
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryEntry {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub items: Vec<CatalogItem>,
}

impl CategoryEntry {
    fn category(&self) -> Category {
        Category {
            id: self.id.clone(),
            name: self.name.clone(),
            icon: self.icon.clone(),
        }
    }
}

/// Catalog client reading a local YAML or JSON document
///
/// The file is re-read on every request so edits show up on the next fetch.
#[derive(Debug, Clone)]
pub struct FileCatalogClient {
    path: PathBuf,
}

impl FileCatalogClient {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn load(&self) -> Result<CatalogDocument> {
        parse_catalog_document(&self.path)
    }
}

/// Parse a catalog document, picking the format from the file extension
pub fn parse_catalog_document(path: &Path) -> Result<CatalogDocument> {
    let contents = fs::read_to_string(path)?;

    let is_json = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

    if is_json {
        serde_json::from_str(&contents).map_err(|e| CatalogError::CatalogFile(e.to_string()))
    } else {
        Ok(serde_yaml::from_str(&contents)?)
    }
}

impl CatalogApi for FileCatalogClient {
    fn get_all_transformation_catalog_categories(&self) -> Result<ApiResponse<Vec<Category>>> {
        let document = self.load()?;
        Ok(ApiResponse::ok(
            document.categories.iter().map(CategoryEntry::category).collect(),
        ))
    }

    fn get_all_items_in_category(
        &self,
        category_id: &str,
    ) -> Result<ApiResponse<Vec<CatalogItem>>> {
        let document = self.load()?;
        match document.categories.into_iter().find(|c| c.id == category_id) {
            Some(entry) => Ok(ApiResponse::ok(entry.items)),
            None => Ok(ApiResponse {
                status: 404,
                data: Vec::new(),
            }),
        }
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Build the catalog client for the given source
///
/// A catalog file takes precedence over the API URL.
pub fn connect(api_url: &str, catalog_file: Option<&Path>) -> Result<Arc<dyn CatalogApi>> {
    match catalog_file {
        Some(path) => {
            if !path.exists() {
                return Err(CatalogError::Config(format!(
                    "catalog file not found: {}",
                    path.display()
                )));
            }
            tracing::info!("Using offline catalog {}", path.display());
            Ok(Arc::new(FileCatalogClient::new(path)))
        }
        None => {
            tracing::info!("Using catalog API at {}", api_url);
            Ok(Arc::new(HttpCatalogClient::new(api_url)?))
        }
    }
}
