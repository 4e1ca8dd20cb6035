// src/select.rs
//
// Selection aggregation: turn the flat list of selected granules into an
// ordered, de-duplicated per-product view for the download list.
//
// Two passes per product:
// 1. Group granules by product id, counting how many granules carry each
//    metadata-like href.
// 2. Promote hrefs common to every granule of a product to product level
//    (membership read off the first granule's link list); the rest stay
//    with their granule, minus browse previews. Granule entries are then
//    sorted by label.
//
// The whole view is rebuilt on every call; nothing is cached between
// selections.

use std::collections::{HashMap, HashSet};
use std::error::Error;
use std::fmt;

use crate::catalog::Catalog;
use crate::logd;
use crate::model::{Granule, Link};

/// Contract violation detected while aggregating.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SelectError {
    /// A granule references a product id the catalog cannot resolve.
    /// Raised on first sight; no partial view is returned.
    UnknownProduct { product: String },
}

impl fmt::Display for SelectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectError::UnknownProduct { product } => {
                write!(f, "granule references unknown product {product:?}")
            }
        }
    }
}

impl Error for SelectError {}

/// Normalized link ready for display: title always present.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayLink {
    pub href: String,
    pub title: String,
}

impl DisplayLink {
    /// Take the link's own title when present and non-empty, otherwise
    /// derive one from the final path segment of the href.
    pub fn from_link(link: &Link) -> Self {
        let title = match link.title.as_deref() {
            Some(t) if !t.is_empty() => t.to_string(),
            _ => basename(&link.href).to_string(),
        };
        Self { href: link.href.clone(), title }
    }
}

/// Final `/`-delimited segment of an href. An href ending in `/` yields
/// the empty string.
fn basename(href: &str) -> &str {
    href.rsplit('/').next().unwrap_or(href)
}

/// Download list entry for one granule: its display label and the links
/// that stayed at granule level.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GranuleItem {
    pub label: String,
    pub links: Vec<DisplayLink>,
}

/// Everything the download list shows for one product.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductView {
    pub product_id: String,
    pub name: String,
    /// Member granules, first-encountered order.
    pub granules: Vec<Granule>,
    /// href -> number of member granules carrying a metadata-like link
    /// with that href. Intermediate, kept for inspection. Keys on href
    /// alone; rel and title never disambiguate.
    pub link_counts: HashMap<String, usize>,
    /// Links common to every member granule, hoisted to product level.
    /// First-granule order, each href at most once.
    pub product_links: Vec<DisplayLink>,
    /// Per-granule entries, sorted ascending by label.
    pub items: Vec<GranuleItem>,
}

/// Ordered per-product view of the current selection. Owned by the
/// caller for one display cycle and rebuilt when the selection changes.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SelectionView {
    /// One entry per distinct product, first-encountered order.
    pub products: Vec<ProductView>,
}

impl SelectionView {
    /// Aggregate the current selection against `catalog`.
    ///
    /// Pure and synchronous: inputs are never mutated and the returned
    /// view is fully owned by the caller. An empty selection yields an
    /// empty view. Fails fast on the first granule whose product id is
    /// missing from the catalog.
    pub fn build(granules: &[Granule], catalog: &impl Catalog) -> Result<Self, SelectError> {
        let mut products: Vec<ProductView> = Vec::new();
        let mut by_id: HashMap<String, usize> = HashMap::new();

        // Grouping pass: bucket granules by product, resolving the name
        // on first sight, and count metadata-like hrefs.
        for granule in granules {
            let ix = match by_id.get(&granule.product) {
                Some(&ix) => ix,
                None => {
                    let info = catalog.lookup(&granule.product).ok_or_else(|| {
                        SelectError::UnknownProduct { product: granule.product.clone() }
                    })?;
                    let ix = products.len();
                    products.push(ProductView {
                        product_id: granule.product.clone(),
                        name: info.name.clone(),
                        granules: Vec::new(),
                        link_counts: HashMap::new(),
                        product_links: Vec::new(),
                        items: Vec::new(),
                    });
                    by_id.insert(granule.product.clone(), ix);
                    ix
                }
            };

            let product = &mut products[ix];
            for link in &granule.links {
                if link.rel.is_metadata() {
                    *product.link_counts.entry(link.href.clone()).or_insert(0) += 1;
                }
            }
            product.granules.push(granule.clone());
        }

        // Promotion pass.
        for product in &mut products {
            let n = product.granules.len();

            // An href counted once per granule is common to the whole
            // product. Membership comes from the first granule's links,
            // metadata-like only: a payload or browse link sharing a
            // fully-counted href must not ride along. The seen-set keeps
            // a repeated href from landing twice.
            let mut seen: HashSet<&str> = HashSet::new();
            for link in &product.granules[0].links {
                if link.rel.is_metadata()
                    && product.link_counts.get(&link.href) == Some(&n)
                    && seen.insert(link.href.as_str())
                {
                    product.product_links.push(DisplayLink::from_link(link));
                }
            }

            for granule in &product.granules {
                let mut item = GranuleItem {
                    label: granule.display_label().to_string(),
                    links: Vec::new(),
                };
                for link in &granule.links {
                    // Browse previews are never shown.
                    if link.rel.is_browse() {
                        continue;
                    }
                    // Already hoisted to product level.
                    if product.link_counts.get(&link.href) == Some(&n) {
                        continue;
                    }
                    item.links.push(DisplayLink::from_link(link));
                }
                product.items.push(item);
            }

            // Stable: granules sharing a label keep encounter order.
            product.items.sort_by(|a, b| a.label.cmp(&b.label));
        }

        let view = SelectionView { products };
        logd!(
            "selection: {} products, {} granules",
            view.products.len(),
            granules.len()
        );
        Ok(view)
    }

    pub fn len(&self) -> usize { self.products.len() }
    pub fn is_empty(&self) -> bool { self.products.is_empty() }
}
