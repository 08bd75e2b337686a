//! Performance benchmarks for answer stream processing
//!
//! Measures line reassembly, dispatch and finalization for streams of
//! different sizes.
//! Run with: cargo bench

use std::time::Duration;

use aifindr::sse::{parse_sse_line, EventDispatcher, FrameReader, SseLine};
use aifindr::traits::HttpError;
use aifindr::ResponseAccumulator;
use bytes::Bytes;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use futures::executor::block_on;
use futures::stream::{self, StreamExt};

/// Generate an SSE body with one retrieval event and `deltas` answer deltas
fn generate_stream(deltas: usize) -> String {
    let mut body = String::from(
        "event: search-workflow-knowledge-retrieved\n\
         data: [{\"chunk_external_id\":\"c1\",\"_additional\":{\"distance\":0.12},\"text\":\"El SCTR cubre accidentes de trabajo.\"}]\n\n",
    );
    body.push_str("event: search-workflow-answer-delta-generated\n");
    body.push_str("data: {\"delta\":\"{\\\"text_response\\\":\\\"\"}\n\n");
    for i in 0..deltas {
        body.push_str(&format!("data: {{\"delta\":\"palabra{} \"}}\n\n", i));
    }
    body.push_str("data: {\"delta\":\"\\\",\\\"product\\\":\\\"SCTR\\\"}\"}\n\n");
    body
}

/// Split a body into fixed-size network chunks
fn chunked(body: &str, size: usize) -> Vec<Bytes> {
    body.as_bytes()
        .chunks(size)
        .map(Bytes::copy_from_slice)
        .collect()
}

fn bench_frame_reader(c: &mut Criterion) {
    let mut group = c.benchmark_group("frame_reader");

    for deltas in [10, 100, 1000].iter() {
        let chunks = chunked(&generate_stream(*deltas), 512);
        let total: usize = chunks.iter().map(|c| c.len()).sum();
        group.throughput(Throughput::Bytes(total as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_deltas", deltas)),
            &chunks,
            |b, chunks| {
                b.iter(|| {
                    let bytes = stream::iter(chunks.clone().into_iter().map(Ok::<_, HttpError>));
                    let lines: Vec<_> = block_on(FrameReader::new(bytes).collect());
                    black_box(lines)
                });
            },
        );
    }

    group.finish();
}

fn bench_dispatch_and_finalize(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch_and_finalize");

    for deltas in [10, 100, 1000].iter() {
        let lines: Vec<SseLine> = generate_stream(*deltas)
            .lines()
            .map(parse_sse_line)
            .filter(SseLine::is_meaningful)
            .collect();
        group.throughput(Throughput::Elements(lines.len() as u64));

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}_deltas", deltas)),
            &lines,
            |b, lines| {
                b.iter(|| {
                    let mut dispatcher = EventDispatcher::new();
                    let mut accumulator = ResponseAccumulator::new();
                    for line in lines.iter().cloned() {
                        dispatcher.dispatch(line, &mut accumulator);
                    }
                    black_box(accumulator.finalize(Duration::from_millis(1)))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_frame_reader, bench_dispatch_and_finalize);
criterion_main!(benches);
