//! In-memory product store.
//!
//! One insertion-ordered `Vec` behind a `parking_lot::RwLock`. Each operation
//! takes the lock once and never across an `.await`, so a request's mutation
//! is never interleaved with another's.

use std::collections::BTreeMap;

use parking_lot::RwLock;
use uuid::Uuid;

use crate::error::ApiError;
use crate::product::{self, NewProduct, Product, ProductPatch};

pub const DEFAULT_PAGE: usize = 1;
pub const DEFAULT_LIMIT: usize = 3;

/// Filter and window for [`ProductStore::list`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListQuery {
    /// Exact-match category filter.
    pub category: Option<String>,
    /// 1-based page number.
    pub page: usize,
    pub limit: usize,
}

impl Default for ListQuery {
    fn default() -> Self {
        Self { category: None, page: DEFAULT_PAGE, limit: DEFAULT_LIMIT }
    }
}

impl ListQuery {
    fn offset(&self) -> usize {
        self.page.saturating_sub(1).saturating_mul(self.limit)
    }
}

/// One page of a filtered listing.
#[derive(Clone, Debug, PartialEq)]
pub struct Page {
    pub items: Vec<Product>,
    /// Size of the filtered set before windowing.
    pub total: usize,
    pub page: usize,
}

/// The product collection. Construct one per process, or one per test.
#[derive(Debug, Default)]
pub struct ProductStore {
    products: RwLock<Vec<Product>>,
}

impl ProductStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the three seed records.
    pub fn seeded() -> Self {
        Self { products: RwLock::new(product::seed()) }
    }

    pub fn len(&self) -> usize {
        self.products.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.read().is_empty()
    }

    /// Filters by category, then returns the requested window.
    ///
    /// A window past the end is empty, not an error.
    pub fn list(&self, query: &ListQuery) -> Page {
        let products = self.products.read();
        let filtered: Vec<&Product> = products
            .iter()
            .filter(|p| match &query.category {
                Some(category) => p.category.as_deref() == Some(category.as_str()),
                None => true,
            })
            .collect();

        let total = filtered.len();
        let items = filtered
            .into_iter()
            .skip(query.offset())
            .take(query.limit)
            .cloned()
            .collect();

        Page { items, total, page: query.page }
    }

    /// Case-insensitive substring match on `name`.
    pub fn search(&self, term: &str) -> Result<Vec<Product>, ApiError> {
        if term.is_empty() {
            return Err(ApiError::validation("Search term 'name' is required"));
        }
        let needle = term.to_lowercase();
        Ok(self
            .products
            .read()
            .iter()
            .filter(|p| p.name.to_lowercase().contains(&needle))
            .cloned()
            .collect())
    }

    /// Record count per category. Records without a category are skipped.
    pub fn stats(&self) -> BTreeMap<String, usize> {
        let mut counts = BTreeMap::new();
        for category in self.products.read().iter().filter_map(|p| p.category.as_ref()) {
            *counts.entry(category.clone()).or_insert(0) += 1;
        }
        counts
    }

    pub fn get(&self, id: &str) -> Result<Product, ApiError> {
        self.products
            .read()
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| ApiError::product_not_found(id))
    }

    /// Appends a new record under a fresh id.
    pub fn create(&self, new: NewProduct) -> Product {
        let mut products = self.products.write();
        let id = loop {
            let candidate = Uuid::new_v4().to_string();
            if !products.iter().any(|p| p.id == candidate) {
                break candidate;
            }
        };
        let product = Product::from_new(id, new);
        products.push(product.clone());
        product
    }

    pub fn update(&self, id: &str, patch: ProductPatch) -> Result<Product, ApiError> {
        let mut products = self.products.write();
        let product = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ApiError::product_not_found(id))?;
        product.apply(patch);
        Ok(product.clone())
    }

    /// Removes and returns the record. Order of the rest is preserved.
    pub fn delete(&self, id: &str) -> Result<Product, ApiError> {
        let mut products = self.products.write();
        let index = products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| ApiError::product_not_found(id))?;
        Ok(products.remove(index))
    }
}
