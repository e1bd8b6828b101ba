//! # Degree-Capped Sampling
//!
//! Caps how many label records are retained per label class. Records are first
//! restricted to nodes with at least one outgoing edge, sorted by node id, then
//! scanned in order while a per-label counter admits at most `limit` records per
//! class. The result is a class-balanced-ish sample: no class exceeds `limit`, but
//! classes with fewer records keep what they have.

use fxhash::FxHashMap;

use crate::{io::LabelRecord, node::Node};

/// Applies the per-label cap to a label record list.
///
/// `max_connected` is the largest node id that emitted at least one edge during
/// flattening; records of nodes beyond it (or all records, if `None`) are discarded
/// as label noise for inactive nodes.
pub fn cap_per_label(
    mut records: Vec<LabelRecord>,
    max_connected: Option<Node>,
    limit: u32,
) -> Vec<LabelRecord> {
    let Some(max_connected) = max_connected else {
        return Vec::new();
    };

    records.retain(|r| r.node <= max_connected);
    records.sort_unstable_by_key(|r| r.node);

    // Per-label counter, only alive for this scan
    let mut admitted: FxHashMap<u32, u32> = FxHashMap::default();
    records
        .into_iter()
        .filter(|r| {
            let count = admitted.entry(r.label).or_insert(0);
            if *count < limit {
                *count += 1;
                true
            } else {
                false
            }
        })
        .collect()
}
