//! # Temporal Edge Flattening
//!
//! Flattens the `T x V x V` adjacency tensor into a single timestamped edge list:
//! for every source node, every time step `t`, every set destination bit, one edge
//! `(src, dst, t / T)` is emitted.
//!
//! The dense scan is `O(T * V^2)` and dominates the pipeline, so the outer source-node
//! loop is sharded across a worker pool. Each shard fills a private buffer; buffers are
//! concatenated in ascending source order, keeping the output identical to a
//! single-threaded scan (monotonic by source, time-ordered within each source).

use ndarray::Array3;
use rayon::prelude::*;
use tracing::info;

use crate::{
    edge::TemporalEdge,
    error::Result,
    node::Node,
};

/// Result of the flattening pass.
#[derive(Debug, Clone)]
pub struct Flattened {
    /// All emitted edges, monotonic by source node
    pub edges: Vec<TemporalEdge>,
    /// Largest node id appearing as the source of at least one emitted edge.
    /// `None` if the tensor holds no edge at all.
    pub max_connected: Option<Node>,
}

/// Flattens the adjacency tensor on a worker pool of `threads` workers.
///
/// # Errors
/// Fails with [`PrepError::WorkerPool`](crate::error::PrepError::WorkerPool) if the
/// pool cannot be brought up.
pub fn flatten(adjs: &Array3<bool>, threads: usize) -> Result<Flattened> {
    let (num_timestamps, num_nodes, _) = adjs.dim();

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .build()?;

    let shards: Vec<Vec<TemporalEdge>> = pool.install(|| {
        (0..num_nodes)
            .into_par_iter()
            .map(|src| {
                let mut shard = Vec::new();
                for t in 0..num_timestamps {
                    for dst in 0..num_nodes {
                        if adjs[[t, src, dst]] {
                            shard.push(TemporalEdge::new(
                                src as Node,
                                dst as Node,
                                t as f64 / num_timestamps as f64,
                            ));
                        }
                    }
                }
                shard
            })
            .collect()
    });

    let max_connected = shards
        .iter()
        .enumerate()
        .filter_map(|(src, shard)| (!shard.is_empty()).then_some(src as Node))
        .max();

    let edges: Vec<TemporalEdge> = shards.into_iter().flatten().collect();

    info!(
        edges = edges.len(),
        max_connected = max_connected.map(|n| n as i64).unwrap_or(-1),
        "flattened adjacency tensor"
    );

    Ok(Flattened {
        edges,
        max_connected,
    })
}
