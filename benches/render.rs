//! This bench test renders a large document with deeply nested content —
//! quoted lists, multi-paragraph items, and mixed heading styles.

#![allow(missing_docs)]

use criterion::{criterion_group, criterion_main, Criterion};
use mdbuilder::{BulletStyle, Document, HeadingLevel};

/// Builds a document with 100 sections of nested content.
fn build_large_document() -> Document {
    Document::build(|doc| {
        doc.underlined_heading("Benchmark Document");
        for section in 1..=100 {
            doc.heading_with(format!("Section {section}"), HeadingLevel::H2)
                .paragraph_lines(["Introductory text", "with a second line"])
                .ordered_list(|list| {
                    for item in 1..=12 {
                        list.item_with(|entry| {
                            entry
                                .paragraph_lines([format!("Item {item}"), "continued".to_string()])
                                .unordered_list_items(["nested a", "nested b"]);
                        });
                    }
                })
                .block_quote(|quote| {
                    quote
                        .unordered_list_with(BulletStyle::Hyphen, |list| {
                            list.item("quoted one").item("quoted two");
                        })
                        .line("attribution");
                })
                .horizontal_rule();
        }
    })
}

fn render_large_document(c: &mut Criterion) {
    c.bench_function("render large document", |b| {
        b.iter(|| {
            let document = build_large_document();
            assert!(!document.is_empty());
        });
    });
}

criterion_group!(benches, render_large_document);
criterion_main!(benches);
