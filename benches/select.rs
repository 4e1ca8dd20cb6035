// benches/select.rs
use criterion::{criterion_group, criterion_main, Criterion, black_box};

use dl_select::catalog::ProductCatalog;
use dl_select::model::{Granule, Link, LinkRel};
use dl_select::select::SelectionView;

/// Synthetic selection: every granule carries one shared doc link (so it
/// promotes), one payload, one browse preview and one per-granule
/// metadata link.
fn synth_selection(products: usize, granules: usize) -> (Vec<Granule>, ProductCatalog) {
    let mut cat = ProductCatalog::new();
    let mut sel = Vec::new();
    for p in 0..products {
        let id = format!("product{p}");
        cat.insert(&id, format!("Product {p}"));
        for g in 0..granules {
            let links = vec![
                Link::new(format!("https://example.com/{id}/guide.html"), LinkRel::Other),
                Link::new(format!("https://example.com/{id}/g{g}.hdf"), LinkRel::Data),
                Link::new(format!("https://example.com/{id}/g{g}.jpg"), LinkRel::Browse),
                Link::new(format!("https://example.com/{id}/g{g}.xml"), LinkRel::Other),
            ];
            sel.push(Granule::new(&id, format!("granule {g:04}"), links));
        }
    }
    (sel, cat)
}

fn bench_select(c: &mut Criterion) {
    let (small_sel, small_cat) = synth_selection(2, 20);
    c.bench_function("select_2x20", |b| {
        b.iter(|| {
            let view = SelectionView::build(black_box(&small_sel), &small_cat).unwrap();
            black_box(view.len())
        })
    });

    let (big_sel, big_cat) = synth_selection(8, 250);
    c.bench_function("select_8x250", |b| {
        b.iter(|| {
            let view = SelectionView::build(black_box(&big_sel), &big_cat).unwrap();
            black_box(view.len())
        })
    });
}

criterion_group!(benches, bench_select);
criterion_main!(benches);
