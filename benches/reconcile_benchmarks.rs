use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use template_composer::engine::{Document, VariableSlot, reconcile, render};
use template_composer::parser::scan;

/// Generate template text with `placeholders` tokens in the given pattern
fn generate_template(placeholders: usize, pattern: &str) -> String {
    let mut text = String::new();

    for i in 0..placeholders {
        let number = match pattern {
            "canonical" => i + 1,
            "reversed" => placeholders - i,
            "repeated" => i % 8 + 1,
            _ => (i * 7) % placeholders + 1,
        };
        text.push_str(&format!("line {i} has {{{{{number}}}}} in it\n"));
    }

    text
}

fn slots(count: usize) -> Vec<VariableSlot> {
    (0..count).map(|i| VariableSlot::new(format!("value-{i}"))).collect()
}

/// Scanning throughput (bytes per second)
fn bench_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("scan");

    for &size in &[10, 100, 1_000] {
        let text = generate_template(size, "canonical");

        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_with_input(BenchmarkId::new("placeholders", size), &text, |b, text| {
            b.iter(|| black_box(scan(black_box(text))))
        });
    }

    group.finish();
}

/// Reconciling canonical text is the hot path on every keystroke
fn bench_reconcile(c: &mut Criterion) {
    let mut group = c.benchmark_group("reconcile");

    for pattern in ["canonical", "reversed", "repeated", "scattered"] {
        let text = generate_template(200, pattern);
        let values = slots(200);

        group.bench_with_input(BenchmarkId::new(pattern, 200), &text, |b, text| {
            b.iter(|| black_box(reconcile(black_box(text), black_box(&values))))
        });
    }

    group.finish();
}

fn bench_mutations(c: &mut Criterion) {
    let base = Document::from_parts(generate_template(100, "canonical"), slots(100));

    c.bench_function("append_variable", |b| {
        b.iter(|| {
            let mut doc = base.clone();
            doc.append_variable();
            black_box(doc)
        })
    });

    c.bench_function("remove_first_variable", |b| {
        b.iter(|| {
            let mut doc = base.clone();
            let removed = doc.remove_variable(0);
            black_box((doc, removed))
        })
    });
}

fn bench_render(c: &mut Criterion) {
    let text = generate_template(500, "repeated");
    let values = slots(8);

    c.bench_function("render", |b| {
        b.iter(|| black_box(render(black_box(&text), black_box(&values))))
    });
}

criterion_group!(
    benches,
    bench_scan,
    bench_reconcile,
    bench_mutations,
    bench_render
);
criterion_main!(benches);
