//! Performance benchmarks for dom-elements.
//!
//! Run with: `cargo bench`
//!
//! Benchmarks include:
//! - Building lists of increasing size through `create_container`
//! - Rotating a list with the reorder helpers
//! - Rendering a JSON markup description to HTML

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dom_elements::dom::{element_children, parse, HtmlTree};
use dom_elements::{
    attributes, create_container, move_to_last, render_html, Content, Markup, Options,
};

const SAMPLE_MARKUP: &str = r#"{
    "tag": "nav",
    "attrs": { "class": "site-nav" },
    "children": [
        { "tag": "ul", "children": [
            { "tag": "li", "children": [{ "tag": "a", "attrs": { "href": "/" }, "children": ["Home"] }] },
            { "tag": "li", "children": [{ "tag": "a", "attrs": { "href": "/about" }, "children": ["About"] }] },
            { "tag": "li", "children": [{ "tag": "a", "attrs": { "href": "/blog" }, "children": ["Blog"] }] }
        ] }
    ]
}"#;

fn bench_build_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_list");
    for size in [10usize, 100, 1000] {
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, &size| {
            b.iter(|| {
                let doc = parse("");
                let tree = HtmlTree::new(&doc);
                let attrs = attributes([("class", "item")]);
                let list = create_container(&tree, "ul", None, [], None);
                for i in 0..size {
                    let text = Content::from(i.to_string());
                    create_container(&tree, "li", Some(&attrs), [text], Some(&list));
                }
                black_box(element_children(&list).len())
            });
        });
    }
    group.finish();
}

fn bench_rotate_list(c: &mut Criterion) {
    let doc = parse("");
    let tree = HtmlTree::new(&doc);
    let list = create_container(&tree, "ul", None, [], None);
    for i in 0..100 {
        create_container(&tree, "li", None, [Content::from(i.to_string())], Some(&list));
    }

    c.bench_function("rotate_list_100", |b| {
        b.iter(|| {
            if let Some(first) = list.first_child() {
                move_to_last(&tree, black_box(&first));
            }
        });
    });
}

fn bench_render_markup(c: &mut Criterion) {
    let Ok(markup) = Markup::from_json(SAMPLE_MARKUP) else {
        return;
    };
    let options = Options::default();

    c.bench_function("render_markup", |b| {
        b.iter(|| render_html(black_box(&markup), &options));
    });
}

criterion_group!(benches, bench_build_list, bench_rotate_list, bench_render_markup);
criterion_main!(benches);
