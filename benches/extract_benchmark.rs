//! Benchmarks for unresume extraction performance.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

#[path = "../tests/common/mod.rs"]
mod common;

use unresume::{FieldExtractor, PositionedSpan, TextSpan};

/// Spans for a resume with `jobs` work-experience entries.
fn synthetic_spans(jobs: usize) -> Vec<PositionedSpan> {
    let mut spans = vec![
        TextSpan::new("Jane Doe", 18.0, "Helvetica-Bold"),
        TextSpan::new("SKILLS", 14.0, "Helvetica-Bold"),
        TextSpan::new("Rust, Go, SQL, Kafka", 10.0, "Helvetica"),
        TextSpan::new("WORK EXPERIENCE", 14.0, "Helvetica-Bold"),
    ];
    for i in 0..jobs {
        spans.push(TextSpan::new(format!("Engineer {}", i), 11.0, "Helvetica-Bold"));
        spans.push(TextSpan::new("Acme Corp", 10.0, "Helvetica"));
        spans.push(TextSpan::new("01/2018 - 02/2020", 9.0, "Helvetica"));
        spans.push(TextSpan::new("Kept the billing pipeline running", 9.0, "Helvetica"));
    }

    spans
        .into_iter()
        .enumerate()
        .map(|(i, span)| PositionedSpan::new(span, 0, i as u32, 0))
        .collect()
}

fn synthetic_text(spans: &[PositionedSpan]) -> String {
    let mut text = String::from("jane.doe@gmail.com | https://github.com/janedoe\n");
    for s in spans {
        text.push_str(&s.span.text);
        text.push('\n');
    }
    text
}

/// Benchmark PDF header sniffing.
fn bench_sniff(c: &mut Criterion) {
    let pdf_data = common::resume_pdf();
    let non_pdf_data = b"Not a PDF file at all, just random text content";

    c.bench_function("sniff_valid_pdf", |b| {
        b.iter(|| unresume::sniff_bytes(black_box(&pdf_data)).unwrap());
    });

    c.bench_function("sniff_non_pdf", |b| {
        b.iter(|| unresume::sniff_bytes(black_box(non_pdf_data)).is_err());
    });
}

/// Benchmark segmentation and field extraction at various sizes.
fn bench_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction");
    let extractor = FieldExtractor::new();

    for jobs in [1, 10, 50].iter() {
        let spans = synthetic_spans(*jobs);
        let text = synthetic_text(&spans);

        group.bench_function(format!("{}_jobs", jobs), |b| {
            b.iter(|| {
                let sections = extractor.segment(black_box(&spans));
                extractor.extract(black_box(&text), &sections)
            });
        });
    }

    group.finish();
}

/// Benchmark the full pipeline over PDF bytes.
fn bench_pdf_pipeline(c: &mut Criterion) {
    let data = common::resume_pdf();
    let mut group = c.benchmark_group("pdf_pipeline");

    group.bench_function("parallel", |b| {
        b.iter(|| unresume::parse_bytes(black_box(&data)).unwrap());
    });

    group.bench_function("sequential", |b| {
        b.iter(|| {
            let options = unresume::ParseOptions::new().sequential();
            unresume::parse_bytes_with_options(black_box(&data), options).unwrap()
        });
    });

    group.finish();
}

/// Benchmark pattern compilation.
fn bench_extractor_creation(c: &mut Criterion) {
    c.bench_function("extractor_creation", |b| {
        b.iter(FieldExtractor::new);
    });
}

criterion_group!(
    benches,
    bench_sniff,
    bench_extraction,
    bench_pdf_pipeline,
    bench_extractor_creation,
);
criterion_main!(benches);
