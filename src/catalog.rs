//! Source record model for the storefront catalog API.
//!
//! The catalog endpoint returns a `{ "data": [...] }` envelope around a
//! nested list of category records with mixed-case field names (`Title`,
//! `MetaTagDescription`, `hasChildren`). This module decodes that payload;
//! transport, authentication, and API error codes are the caller's problem
//! and are expected to have already resolved to either a valid payload or
//! an absent `data` value.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// A raw category record as returned by the catalog API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Category {
    /// Unique within its sibling list (not guaranteed globally unique).
    pub id: i64,
    pub name: String,
    /// May encode a numeric priority ("3") or a free-form label
    /// ("Featured #"); see [`crate::tree::order_from_entry`].
    #[serde(rename = "Title")]
    pub title: String,
    /// Reused downstream as the mapped node's image reference.
    #[serde(rename = "MetaTagDescription", default)]
    pub description: String,
    #[serde(default)]
    pub url: String,
    /// When false, any attached `children` value is ignored.
    #[serde(rename = "hasChildren", default)]
    pub has_children: bool,
    #[serde(default)]
    pub children: Option<Vec<Category>>,
}

impl Category {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Category {
            id,
            name: name.into(),
            title: String::new(),
            description: String::new(),
            url: String::new(),
            has_children: false,
            children: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Attach children and set `hasChildren` accordingly.
    pub fn with_children(mut self, children: Vec<Category>) -> Self {
        self.has_children = true;
        self.children = Some(children);
        self
    }
}

/// The catalog API response envelope.
///
/// `data: None` means "no data available" (upstream failure or empty
/// response), which is distinct from an empty category list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogResponse {
    #[serde(default)]
    pub data: Option<Vec<Category>>,
}

/// Decode a catalog API response body from JSON.
pub fn parse_catalog(json: &str) -> Result<CatalogResponse> {
    Ok(serde_json::from_str(json)?)
}

/// Read and decode a catalog API response from a file.
pub fn read_catalog(path: impl AsRef<Path>) -> Result<CatalogResponse> {
    let json = fs::read_to_string(path)?;
    parse_catalog(&json)
}
