// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Netweave-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Netweave and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use netweave::format::{ingest_with_rng, GraphFormat};
use netweave::model::Canvas;
use rand::rngs::StdRng;
use rand::SeedableRng;

mod fixtures;
mod profiler;

// Benchmark identity (keep stable):
// - Group names in this file: `format.ingest_graphml`, `format.ingest_gexf`
// - Case IDs come from `fixtures::Case::id` and must not be renamed.
fn benches_ingest(c: &mut Criterion) {
    let cases: [(&str, GraphFormat, fn(fixtures::Case) -> String); 2] = [
        ("format.ingest_graphml", GraphFormat::GraphMl, fixtures::graphml),
        ("format.ingest_gexf", GraphFormat::Gexf, fixtures::gexf),
    ];
    for (group_name, format, render) in cases {
        let mut group = c.benchmark_group(group_name);

        for case in fixtures::Case::ALL {
            let text = render(case);
            group.throughput(Throughput::Bytes(text.len() as u64));
            group.bench_function(case.id(), move |b| {
                let mut rng = StdRng::seed_from_u64(7);
                b.iter(|| {
                    let document =
                        ingest_with_rng(black_box(&text), format, Canvas::default(), &mut rng)
                            .expect("ingest");
                    black_box(fixtures::checksum_document(black_box(&document)))
                })
            });
        }

        group.finish();
    }
}

criterion_group! {
    name = benches;
    config = profiler::criterion();
    targets = benches_ingest
}
criterion_main!(benches);
