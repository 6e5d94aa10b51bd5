//! Conversion throughput for typical data objects

use criterion::{Criterion, criterion_group, criterion_main};
use serde_json::json;
use std::hint::black_box;
use yaml2fhir_core::Converter;

fn bench_blank_encounter(c: &mut Criterion) {
    let converter = Converter::new();
    let data = json!({ "resourceType": "Encounter" });

    c.bench_function("blank_encounter", |b| {
        b.iter(|| converter.convert(black_box(&data), Some("123"), "dstu2"));
    });
}

fn bench_observation(c: &mut Criterion) {
    let converter = Converter::new();
    let data = json!({
        "resourceType": "Observation",
        "status": "amended",
        "code": "LOINC#12345-6 Fake LOINC Code",
        "issued": "2018-10-10",
        "valueQuantity": "5.4 mg",
        "comments": "My Comments"
    });

    c.bench_function("observation_top_level", |b| {
        b.iter(|| converter.convert(black_box(&data), Some("123"), "dstu2"));
    });
}

fn bench_generated_ids(c: &mut Criterion) {
    let converter = Converter::new();
    let data = json!({ "resourceType": "Patient", "name": "Bobby Jones" });

    c.bench_function("patient_generated_id", |b| {
        b.iter(|| converter.convert(black_box(&data), None, "dstu2"));
    });
}

criterion_group!(
    benches,
    bench_blank_encounter,
    bench_observation,
    bench_generated_ids
);
criterion_main!(benches);
