//! Error message catalog.
//!
//! Keeps each domain's base and short messages in a TOML file instead of
//! in code, so external messages can be reworded or localized without a
//! rebuild.
//!
//! # TOML Example
//!
//! ```toml
//! [domains.storage]
//! origin = "layered::storage"
//! base = "storage failure"
//! short = "service unavailable"
//! ```
//!
//! `origin` is a module path and goes through [`Origin::resolve`]. It may be
//! omitted, giving an empty origin.

use std::collections::BTreeMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::annotator::Annotator;
use crate::host::{InitError, SharedAnnotator};
use crate::origin::Origin;

/// Error type for catalog loading and lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// Catalog file not found at the given path.
    #[error("catalog file not found")]
    FileNotFound,

    /// Catalog file exists but could not be read.
    #[error("failed to read catalog: {0}")]
    Io(String),

    /// TOML parsing failed.
    #[error("failed to parse catalog: {0}")]
    Parse(String),

    /// Semantic validation failed.
    #[error("catalog validation failed: {0}")]
    Validation(String),

    /// No domain with this name in the catalog.
    #[error("unknown error domain: {0}")]
    UnknownDomain(String),

    #[error(transparent)]
    Init(#[from] InitError),
}

/// Messages for one error domain.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DomainConfig {
    /// Module path the origin is resolved from.
    #[serde(default)]
    pub origin: Option<String>,

    /// Base error (category label).
    pub base: String,

    /// Short, externally safe error.
    pub short: String,
}

impl DomainConfig {
    /// Build the annotator this entry describes.
    pub fn annotator(&self) -> Annotator {
        let origin = self
            .origin
            .as_deref()
            .map(Origin::resolve)
            .unwrap_or_default();
        Annotator::new(origin, self.base.as_str(), self.short.as_str())
    }
}

/// A set of named error domains.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    #[serde(default)]
    pub domains: BTreeMap<String, DomainConfig>,
}

impl Catalog {
    /// Load and validate a catalog file.
    ///
    /// # Errors
    ///
    /// - `CatalogError::FileNotFound` if the file does not exist
    /// - `CatalogError::Io` if it cannot be read
    /// - `CatalogError::Parse` if the TOML is invalid
    /// - `CatalogError::Validation` if a domain has an empty message
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                CatalogError::FileNotFound
            } else {
                CatalogError::Io(e.to_string())
            }
        })?;

        let catalog = Self::from_toml(&content)?;
        tracing::debug!(
            path = %path.display(),
            domains = catalog.domains.len(),
            "error catalog loaded"
        );
        Ok(catalog)
    }

    /// Parse and validate a catalog from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, CatalogError> {
        let catalog: Self =
            toml::from_str(content).map_err(|e| CatalogError::Parse(e.to_string()))?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Check that every domain has a non-empty base and short error.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for (name, domain) in &self.domains {
            if domain.base.trim().is_empty() {
                return Err(CatalogError::Validation(format!(
                    "domain '{name}': base cannot be empty"
                )));
            }
            if domain.short.trim().is_empty() {
                return Err(CatalogError::Validation(format!(
                    "domain '{name}': short cannot be empty"
                )));
            }
        }
        Ok(())
    }

    pub fn domain(&self, name: &str) -> Option<&DomainConfig> {
        self.domains.get(name)
    }

    /// Build the annotator for `name`.
    pub fn annotator(&self, name: &str) -> Option<Annotator> {
        self.domain(name).map(DomainConfig::annotator)
    }

    /// Initialize `shared` from the domain `name`.
    pub fn init_shared(&self, name: &str, shared: &SharedAnnotator) -> Result<(), CatalogError> {
        let annotator = self
            .annotator(name)
            .ok_or_else(|| CatalogError::UnknownDomain(name.to_string()))?;
        shared.set(annotator)?;
        Ok(())
    }
}
