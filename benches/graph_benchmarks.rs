//! # Fofgraph Performance Benchmarks
//!
//! Tests key operations at edge-set sizes from 1 to 10k:
//! - Union strategies: `merge` (repeated insertion) vs `merge_replace`
//!   (linear three-way merge)
//! - Single insertion on the append fast path
//! - The mutual-connections query over a synthetic social graph

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use fofgraph::{EdgeSet, Graph, NodeId};

const SET_SIZES: [u32; 5] = [1, 10, 100, 1000, 10_000];

fn build_seq_set(start: u32, count: u32, incr: u32) -> EdgeSet {
    (0..count).map(|i| start + i * incr).collect()
}

/// Creates a synthetic undirected graph for benchmarking.
///
/// Deterministic structure for reproducibility: node `i` connects to a
/// handful of pseudo-random partners chosen with prime multipliers, which
/// yields the short average path lengths of social graphs without an RNG.
fn create_synthetic_graph(num_nodes: u32, edges_per_node: u32) -> Graph {
    let mut graph = Graph::new();
    for i in 0..num_nodes {
        for k in 1..=edges_per_node {
            let partner = (i * 7 + k * 13) % num_nodes;
            graph.add(NodeId(i), NodeId(partner));
        }
    }
    graph
}

/// Benchmarks the two union strategies across the size grid.
fn bench_merge_strategies(c: &mut Criterion) {
    let mut group = c.benchmark_group("edge_set_union");

    for &size_left in &SET_SIZES {
        // left covers even ids; right starts where left's range begins to overlap
        let left = build_seq_set(0, size_left, 2);
        for &size_right in &SET_SIZES {
            let right = build_seq_set(size_left, size_right, 1);

            group.throughput(Throughput::Elements((size_left + size_right) as u64));
            group.bench_with_input(
                BenchmarkId::new("merge", format!("L{size_left}_R{size_right}")),
                &right,
                |b, right| {
                    b.iter(|| {
                        let mut acc = left.clone();
                        acc.merge(black_box(right));
                        acc
                    });
                },
            );
            group.bench_with_input(
                BenchmarkId::new("merge_replace", format!("L{size_left}_R{size_right}")),
                &right,
                |b, right| {
                    b.iter(|| {
                        let mut acc = left.clone();
                        acc.merge_replace(black_box(right));
                        acc
                    });
                },
            );
        }
    }

    group.finish();
}

/// Benchmarks the append fast path of single insertion.
fn bench_insert_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("edge_set_insert_append");

    for &size in &SET_SIZES {
        let base = build_seq_set(0, size, 1);
        group.bench_with_input(BenchmarkId::from_parameter(size), &base, |b, base| {
            b.iter(|| {
                let mut set = base.clone();
                set.insert(black_box(NodeId(size + 1)));
                set
            });
        });
    }

    group.finish();
}

/// Benchmarks the mutual-connections query at several graph scales.
fn bench_mutual(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_mutual");

    for &num_nodes in &[1000u32, 10_000, 50_000] {
        let graph = create_synthetic_graph(num_nodes, 8);
        let ids: Vec<NodeId> = graph.nodes().collect();

        group.throughput(Throughput::Elements(1));
        group.bench_with_input(
            BenchmarkId::from_parameter(num_nodes),
            &graph,
            |b, graph| {
                let mut i = 0usize;
                b.iter(|| {
                    let start_at = ids[i % ids.len()];
                    i += 1;
                    black_box(graph.mutual(start_at))
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_merge_strategies,
    bench_insert_append,
    bench_mutual
);
criterion_main!(benches);
