// tests/link_format.rs
//
// Link normalization and rel classification.
//
use dl_select::model::{Granule, Link, LinkRel};
use dl_select::select::DisplayLink;

#[test]
fn classify_fedsearch_rel_uris() {
    assert_eq!(
        LinkRel::classify("http://esipfed.org/ns/fedsearch/1.1/data#"),
        LinkRel::Data,
    );
    assert_eq!(
        LinkRel::classify("http://esipfed.org/ns/fedsearch/1.1/browse#"),
        LinkRel::Browse,
    );
    assert_eq!(
        LinkRel::classify("http://esipfed.org/ns/fedsearch/1.1/metadata#"),
        LinkRel::Other,
    );
    assert_eq!(LinkRel::classify(""), LinkRel::Other);
}

#[test]
fn metadata_is_everything_but_data_and_browse() {
    assert!(LinkRel::Other.is_metadata());
    assert!(!LinkRel::Data.is_metadata());
    assert!(!LinkRel::Browse.is_metadata());
}

#[test]
fn title_passes_through_when_present() {
    let link = Link::with_title("/docs/readme.html", LinkRel::Other, "Read Me");
    let dl = DisplayLink::from_link(&link);
    assert_eq!(dl.href, "/docs/readme.html");
    assert_eq!(dl.title, "Read Me");
}

#[test]
fn missing_title_falls_back_to_basename() {
    let link = Link::new("https://host/path/to/file.hdf", LinkRel::Data);
    let dl = DisplayLink::from_link(&link);
    // Scalar string, not a one-element list.
    assert_eq!(dl.title, "file.hdf");
}

#[test]
fn empty_title_treated_as_missing() {
    let link = Link::with_title("/a/b", LinkRel::Other, "");
    assert_eq!(DisplayLink::from_link(&link).title, "b");
}

#[test]
fn basename_edges() {
    // No slash at all: the whole href.
    let link = Link::new("plainfile", LinkRel::Data);
    assert_eq!(DisplayLink::from_link(&link).title, "plainfile");

    // Trailing slash degenerates to an empty title.
    let link = Link::new("https://host/dir/", LinkRel::Data);
    assert_eq!(DisplayLink::from_link(&link).title, "");
}

#[test]
fn display_label_precedence() {
    let g = Granule::new("p", "plain", vec![]);
    assert_eq!(g.display_label(), "plain");

    let g = Granule::new("p", "plain", vec![]).with_download_label("download");
    assert_eq!(g.display_label(), "download");

    // Empty download label behaves like none at all.
    let g = Granule::new("p", "plain", vec![]).with_download_label("");
    assert_eq!(g.display_label(), "plain");
}
