// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Organigrama-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Organigrama and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};

use organigrama::build::{build_people, build_positions};
use organigrama::config::HierarchyConfig;
use organigrama::format::{normalize_people, normalize_positions, RawDocument, RecordKey};
use organigrama::query::{apply_unit_filter, business_unit_options, UnitFilter};
use organigrama::render::{render_outline, OutlineOptions};

mod fixtures;

use fixtures::Case;

// Benchmark identity (keep stable):
// - Group names in this file: `build.people`, `build.positions`, `query.filter`
// - Case IDs (the string after the `/`) must remain stable across refactors so
//   results stay comparable over time (e.g. `small`, `medium`, `large`).
fn benches_build(c: &mut Criterion) {
    let config = HierarchyConfig::default();
    let cases = [("small", Case::Small), ("medium", Case::Medium), ("large", Case::Large)];

    {
        let mut group = c.benchmark_group("build.people");
        for (case_id, case) in cases {
            let doc = fixtures::people(case);
            let records = RawDocument::detect(doc.clone(), RecordKey::Persona).records().len();
            group.throughput(Throughput::Elements(records as u64));
            group.bench_function(case_id, |b| {
                b.iter_batched(
                    || doc.clone(),
                    |doc| {
                        let raw = RawDocument::detect(doc, RecordKey::Persona);
                        let built = build_people(normalize_people(&raw), black_box(&config));
                        black_box(built.reachable_nodes().len())
                    },
                    BatchSize::LargeInput,
                )
            });
        }
        group.finish();
    }

    {
        let mut group = c.benchmark_group("build.positions");
        for (case_id, case) in cases {
            let doc = fixtures::positions(case);
            group.bench_function(case_id, |b| {
                b.iter_batched(
                    || doc.clone(),
                    |doc| {
                        let raw = RawDocument::detect(doc, RecordKey::Cargo);
                        let built = build_positions(normalize_positions(&raw), black_box(&config));
                        black_box(built.len())
                    },
                    BatchSize::LargeInput,
                )
            });
        }
        group.finish();
    }

    {
        let mut group = c.benchmark_group("query.filter");
        for (case_id, case) in cases {
            let raw = RawDocument::detect(fixtures::people(case), RecordKey::Persona);
            let nodes = build_people(normalize_people(&raw), &config).reachable_cloned();
            let filter = UnitFilter {
                department: Some("Tesorería".to_owned()),
                ..UnitFilter::default()
            };
            group.throughput(Throughput::Elements(nodes.len() as u64));
            group.bench_function(case_id, |b| {
                b.iter(|| {
                    let visible = apply_unit_filter(black_box(&nodes), black_box(&filter));
                    let options = business_unit_options(&visible);
                    let outline = render_outline(&visible, &OutlineOptions::default());
                    black_box(visible.len() + options.len() + outline.len())
                })
            });
        }
        group.finish();
    }
}

criterion_group!(benches, benches_build);
criterion_main!(benches);
