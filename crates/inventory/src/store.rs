use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use stockroom_core::Entity;
use stockroom_products::{Product, ProductRecord};

use crate::error::{StoreError, StoreResult};

/// What `Inventory::load` found on disk.
///
/// Only `Loaded` keeps data; the other outcomes leave the inventory empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded { count: usize },
    MissingFile,
    Malformed { reason: String },
}

/// Ordered product list mirrored to a single JSON file.
///
/// Names are matched exactly and the first match wins; duplicates are not
/// rejected. Not safe for concurrent writers: the last `save` wins.
#[derive(Debug, Clone)]
pub struct Inventory {
    path: PathBuf,
    products: Vec<Product>,
}

impl Inventory {
    /// Create an empty inventory bound to `path`. Does not touch the file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            products: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Replace the in-memory list with the contents of the backing file.
    ///
    /// A missing file or unreadable content resets the list to empty and is
    /// reported through the returned `LoadOutcome`. Other read failures are
    /// returned as errors and leave the list untouched.
    pub fn load(&mut self) -> StoreResult<LoadOutcome> {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                tracing::info!(
                    path = %self.path.display(),
                    "inventory file not found; starting with an empty inventory"
                );
                self.products.clear();
                return Ok(LoadOutcome::MissingFile);
            }
            Err(err) => return Err(StoreError::io(&self.path, err)),
        };

        match decode(&content) {
            Ok(products) => {
                let count = products.len();
                self.products = products;
                tracing::info!(path = %self.path.display(), count, "inventory loaded");
                Ok(LoadOutcome::Loaded { count })
            }
            Err(reason) => {
                tracing::warn!(
                    path = %self.path.display(),
                    %reason,
                    "inventory file is malformed; starting with an empty inventory"
                );
                self.products.clear();
                Ok(LoadOutcome::Malformed { reason })
            }
        }
    }

    /// Overwrite the backing file with the full in-memory list, in order.
    pub fn save(&self) -> StoreResult<()> {
        let records: Vec<ProductRecord> = self.products.iter().map(Product::to_record).collect();

        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        records.serialize(&mut serializer)?;

        if let Err(err) = fs::write(&self.path, &buf) {
            tracing::error!(path = %self.path.display(), "failed to save inventory: {err}");
            return Err(StoreError::io(&self.path, err));
        }

        tracing::debug!(path = %self.path.display(), count = records.len(), "inventory saved");
        Ok(())
    }

    /// Append a product and persist. Duplicate names are allowed.
    ///
    /// If the save fails the product stays in memory and the error is returned.
    pub fn add(&mut self, product: Product) -> StoreResult<()> {
        self.products.push(product);
        self.save()
    }

    /// First product whose name equals `name` exactly.
    pub fn find(&self, name: &str) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == name)
    }

    /// Remove the first product named `name` and persist.
    ///
    /// Returns `Ok(false)` without writing when nothing matches.
    pub fn remove(&mut self, name: &str) -> StoreResult<bool> {
        let Some(index) = self.position(name) else {
            return Ok(false);
        };
        self.products.remove(index);
        self.save()?;
        Ok(true)
    }

    /// Replace the first product named `name` in place and persist.
    ///
    /// Returns `Ok(false)` without writing when nothing matches.
    pub fn update(&mut self, name: &str, product: Product) -> StoreResult<bool> {
        let Some(index) = self.position(name) else {
            return Ok(false);
        };
        self.products[index] = product;
        self.save()?;
        Ok(true)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.products.iter().position(|p| p.id() == name)
    }
}

fn decode(content: &[u8]) -> Result<Vec<Product>, String> {
    let records: Vec<ProductRecord> =
        serde_json::from_slice(content).map_err(|e| e.to_string())?;
    records
        .iter()
        .map(Product::from_record)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| e.to_string())
}
