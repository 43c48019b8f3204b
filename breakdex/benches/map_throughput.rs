//! Mapping throughput per boundary kind and code-unit width

use breakdex::{BoundaryAnalyzer, BoundaryKind, UnicodeAnalyzer};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

/// Mixed-script text of roughly `size_kb` kilobytes
fn generate_text(size_kb: usize) -> String {
    let base_text = "Dr. Smith met Mr. Jones at 3 p.m. today. Did it work? 今日は晴れです。 Größe zählt!\n";
    let target = size_kb * 1024;
    let mut text = base_text.repeat(target / base_text.len() + 1);
    let mut cut = target.min(text.len());
    while !text.is_char_boundary(cut) {
        cut -= 1;
    }
    text.truncate(cut);
    text
}

fn bench_utf8_by_kind(c: &mut Criterion) {
    let analyzer = UnicodeAnalyzer::for_locale("en").expect("embedded en table");

    for kind in BoundaryKind::ALL {
        let mut group = c.benchmark_group(format!("utf8_{kind}"));
        for size_kb in [1, 10, 100] {
            let text = generate_text(size_kb);
            group.throughput(Throughput::Bytes(text.len() as u64));
            group.bench_with_input(
                BenchmarkId::from_parameter(format!("{size_kb}KB")),
                &text,
                |b, text| b.iter(|| analyzer.map(kind, black_box(text.as_bytes()))),
            );
        }
        group.finish();
    }
}

fn bench_widths(c: &mut Criterion) {
    let mut group = c.benchmark_group("word_by_width");
    let analyzer = UnicodeAnalyzer::for_locale("en").expect("embedded en table");
    let text = generate_text(50);
    let utf16: Vec<u16> = text.encode_utf16().collect();
    let utf32: Vec<u32> = text.chars().map(u32::from).collect();
    group.throughput(Throughput::Bytes(text.len() as u64));

    group.bench_function("utf8", |b| {
        b.iter(|| analyzer.map(BoundaryKind::Word, black_box(text.as_bytes())))
    });
    group.bench_function("utf16", |b| {
        b.iter(|| analyzer.map(BoundaryKind::Word, black_box(&utf16[..])))
    });
    group.bench_function("utf32", |b| {
        b.iter(|| analyzer.map(BoundaryKind::Word, black_box(&utf32[..])))
    });

    group.finish();
}

criterion_group!(benches, bench_utf8_by_kind, bench_widths);
criterion_main!(benches);
