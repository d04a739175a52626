use criterion::{black_box, criterion_group, criterion_main, Criterion};
use typekit::numeric::{self, bits};
use typekit::{cast_to, classify, to_iterable, CastOptions, TypeCategory, Value};

fn bench_classify(c: &mut Criterion) {
    let values = vec![
        Value::Number(1.5),
        Value::str("0xff"),
        Value::Bool(true),
        Value::Array(vec![Value::Null; 8]),
        Value::object([("a", Value::Number(1.0))]),
        Value::Undefined,
    ];

    c.bench_function("classify mixed values", |b| {
        b.iter(|| {
            for v in &values {
                black_box(v.category());
                black_box(classify::is_number(v, true));
                black_box(classify::is_object(v, Default::default()));
            }
        })
    });
}

fn bench_numeric_forms(c: &mut Criterion) {
    let forms = ["42", "-3.25", "0xdeadbeef", "0o777", "0b101101", "6.02e23", "12px"];

    c.bench_function("numeric form detection", |b| {
        b.iter(|| {
            for s in &forms {
                black_box(numeric::is_numeric(&Value::str(*s)));
            }
        })
    });

    c.bench_function("base conversion round trip", |b| {
        b.iter(|| {
            for n in [0i64, 255, -255, 65_535, -1_000_000] {
                let hex = numeric::to_hex(&Value::Number(n as f64));
                black_box(numeric::to_decimal(&Value::str(hex)));
            }
        })
    });
}

fn bench_bit_calculator(c: &mut Criterion) {
    let numbers: Vec<i128> = (0..256).map(|i| i * 977 - 40_000).collect();

    c.bench_function("typed array selection 256", |b| {
        b.iter(|| black_box(bits::calculate_typed_array_class(&numbers)))
    });
}

fn bench_cast(c: &mut Criterion) {
    let options = CastOptions::default();

    c.bench_function("cast string to number", |b| {
        b.iter(|| black_box(cast_to(&Value::str("1234.5"), TypeCategory::Number, &options)))
    });

    c.bench_function("cast object to string", |b| {
        let obj = Value::object([
            ("name", Value::str("kernel")),
            ("count", Value::Number(3.0)),
        ]);
        b.iter(|| black_box(cast_to(&obj, TypeCategory::String, &options)))
    });
}

fn bench_iterable(c: &mut Criterion) {
    let source = Value::Array((0..100).map(|n| Value::Number(n as f64)).collect());

    c.bench_function("iterate 100 elements", |b| {
        b.iter(|| {
            let mut it = to_iterable(&source, false);
            while !it.next().done {}
            black_box(it.len())
        })
    });
}

criterion_group!(
    benches,
    bench_classify,
    bench_numeric_forms,
    bench_bit_calculator,
    bench_cast,
    bench_iterable
);
criterion_main!(benches);
