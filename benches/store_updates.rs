use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use formdeck::store::{FieldValue, FormStore};

fn keystroke(i: usize) -> [(String, FieldValue); 1] {
    [("message".to_string(), FieldValue::Text("x".repeat(i % 64)))]
}

fn benchmark_single_field_update(c: &mut Criterion) {
    let mut store = FormStore::new();
    let mut i = 0usize;

    c.bench_function("update_single_field", |b| {
        b.iter(|| {
            i += 1;
            store.update_form_data(black_box(keystroke(i)))
        });
    });
}

fn benchmark_noop_update(c: &mut Criterion) {
    let mut store = FormStore::new();
    store.update_form_data([("name", "Alice"), ("email", "a@x.com")]);

    c.bench_function("update_unchanged", |b| {
        b.iter(|| store.update_form_data(black_box([("name", "Alice")])));
    });
}

fn benchmark_wide_form(c: &mut Criterion) {
    let partial: Vec<(String, FieldValue)> = (0..100)
        .map(|i| (format!("field_{}", i), FieldValue::from(i as i64)))
        .collect();

    let mut group = c.benchmark_group("wide_form");
    group.throughput(Throughput::Elements(partial.len() as u64));

    group.bench_function("fill_then_reset", |b| {
        b.iter(|| {
            let mut store = FormStore::new();
            store.update_form_data(black_box(partial.clone()));
            store.reset_form_data()
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_field_update,
    benchmark_noop_update,
    benchmark_wide_form
);
criterion_main!(benches);
