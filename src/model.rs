// src/model.rs
//
// Data model for one selected granule and its links.
//
// - LinkRel: closed classification of a link relation. Upstream search
//   results carry rel URIs; everything that is not the data payload or
//   a browse preview counts as metadata-like.
// - Link / Granule: plain holders, fully materialized by the caller
//   before aggregation. The core never mutates them.

/// Link relation. `Data` is the downloadable payload, `Browse` a preview
/// image; anything else is metadata-like (documentation, service links).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LinkRel {
    Data,
    Browse,
    Other,
}

impl LinkRel {
    /// Classify an upstream rel URI. Fedsearch rels end in a fragment
    /// tag: ".../data#" for payloads, ".../browse#" for preview images.
    pub fn classify(rel: &str) -> Self {
        if rel.ends_with("/data#") { LinkRel::Data }
        else if rel.ends_with("/browse#") { LinkRel::Browse }
        else { LinkRel::Other }
    }

    #[inline] pub fn is_data(self) -> bool { self == LinkRel::Data }
    #[inline] pub fn is_browse(self) -> bool { self == LinkRel::Browse }

    /// True for links that take part in promotion counting.
    #[inline]
    pub fn is_metadata(self) -> bool { !self.is_data() && !self.is_browse() }
}

/// A single reference attached to a granule. `href` is the
/// de-duplication key within a product; `title` is an optional display
/// label (an empty string counts as absent).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Link {
    pub href: String,
    pub rel: LinkRel,
    pub title: Option<String>,
}

impl Link {
    pub fn new(href: impl Into<String>, rel: LinkRel) -> Self {
        Self { href: href.into(), rel, title: None }
    }

    pub fn with_title(
        href: impl Into<String>,
        rel: LinkRel,
        title: impl Into<String>,
    ) -> Self {
        Self { href: href.into(), rel, title: Some(title.into()) }
    }
}

/// One selected, downloadable data file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Granule {
    /// Identifier of the owning product (catalog key).
    pub product: String,
    pub label: String,
    /// Takes precedence over `label` in the download list when present.
    pub download_label: Option<String>,
    /// Order as received; hrefs are not assumed unique.
    pub links: Vec<Link>,
}

impl Granule {
    pub fn new(
        product: impl Into<String>,
        label: impl Into<String>,
        links: Vec<Link>,
    ) -> Self {
        Self {
            product: product.into(),
            label: label.into(),
            download_label: None,
            links,
        }
    }

    pub fn with_download_label(mut self, label: impl Into<String>) -> Self {
        self.download_label = Some(label.into());
        self
    }

    /// Label shown in the download list. An empty download label falls
    /// back to the plain label.
    pub fn display_label(&self) -> &str {
        match self.download_label.as_deref() {
            Some(dl) if !dl.is_empty() => dl,
            _ => &self.label,
        }
    }
}
