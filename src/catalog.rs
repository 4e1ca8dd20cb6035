// src/catalog.rs
//
// Read-only product catalog: resolves a product id to display metadata.
// Passed explicitly into the aggregator so tests can supply their own
// implementation; the core holds no ambient configuration.

use std::collections::HashMap;

/// Display metadata for one product.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProductInfo {
    pub name: String,
}

/// Lookup seam. Every product id in the selection must resolve; a miss
/// is a caller contract violation and aborts the aggregation.
pub trait Catalog {
    fn lookup(&self, product_id: &str) -> Option<&ProductInfo>;
}

/// HashMap-backed catalog, the implementation the embedding app ships.
#[derive(Clone, Debug, Default)]
pub struct ProductCatalog {
    products: HashMap<String, ProductInfo>,
}

impl ProductCatalog {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, id: impl Into<String>, name: impl Into<String>) {
        self.products.insert(id.into(), ProductInfo { name: name.into() });
    }

    pub fn len(&self) -> usize { self.products.len() }
    pub fn is_empty(&self) -> bool { self.products.is_empty() }
}

impl Catalog for ProductCatalog {
    fn lookup(&self, product_id: &str) -> Option<&ProductInfo> {
        self.products.get(product_id)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for ProductCatalog {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut cat = Self::new();
        for (id, name) in iter {
            cat.insert(id, name);
        }
        cat
    }
}
