/*!
# Edge Representation

Plain edges are tuple-structs `Edge(Node, Node)`. The synthetic generator treats them as
undirected and normalizes them; the dataset builder emits directed edges as stored in the
adjacency tensor.

[`TemporalEdge`] attaches a normalized timestamp in `[0, 1]` to an edge. Its `Display`
implementation renders the canonical `.wel` line `"<src> <dst> <timestamp>"`.
*/

use std::fmt::{Debug, Display};

use crate::{node::Node, time::round10};

/// An edge is defined by two nodes/endpoints.
/// It is up to the user whether an Edge is directed or not.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge(pub Node, pub Node);

/// We limit the number of edges to `2^32 - 1`.
pub type NumEdges = u32;

impl Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.0, self.1)
    }
}

impl Debug for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

impl Edge {
    /// Normalizes the edge such that the endpoint with smaller value comes first
    pub fn normalized(&self) -> Self {
        Edge(self.0.min(self.1), self.0.max(self.1))
    }

    /// Returns true if the endpoint with smaller index comes first
    pub fn is_normalized(&self) -> bool {
        self.0 <= self.1
    }

    /// Returns true if both endpoints are equal
    pub fn is_loop(&self) -> bool {
        self.0 == self.1
    }

    /// Bijection from `0..(n choose 2)` to all normalized non-loop edges of `n` nodes.
    ///
    /// Each node is assigned the next `(n - 1)/2` neighbors modulo `n` (up to rounding)
    /// and the resulting edge is normalized. Used by the uniform edge sampler to draw
    /// edges as plain integers.
    pub fn from_u64_undir(mut x: u64, n: u64) -> Self {
        debug_assert!(x < n * (n - 1) / 2);

        let mut num_neighbors = (n - 1) / 2;
        if n & 1 == 1 {
            // `n - 1` even: every node enumerates exactly `(n - 1)/2` neighbors
            let u = x / num_neighbors;
            let v = (u + 1 + (x % num_neighbors)) % n;

            Edge(u as Node, v as Node).normalized()
        } else {
            // `n - 1` odd: the first `n/2` nodes enumerate `floor((n - 1)/2)` neighbors,
            // the remaining nodes one more
            let half_n = n / 2;
            let lower_half = num_neighbors * half_n;

            if x < lower_half {
                let u = x / num_neighbors;
                let v = (u + 1 + (x % num_neighbors)) % n;

                // Edges are guaranteed to be normalized in the lower half
                return Edge(u as Node, v as Node);
            }

            x -= lower_half;
            num_neighbors += 1;

            let u = (x / num_neighbors) + half_n;
            let v = (u + 1 + (x % num_neighbors)) % n;

            Edge(u as Node, v as Node).normalized()
        }
    }
}

impl From<(Node, Node)> for Edge {
    fn from(value: (Node, Node)) -> Self {
        Edge(value.0, value.1)
    }
}

/// A timestamped edge: the record type of the `.wel` interchange format.
///
/// The timestamp is always normalized to `[0, 1]` relative to the full corpus of the
/// producing invocation, never per-line.
#[derive(Copy, Clone, PartialEq)]
pub struct TemporalEdge {
    /// Source node
    pub src: Node,
    /// Destination node
    pub dst: Node,
    /// Normalized timestamp in `[0, 1]`
    pub time: f64,
}

impl TemporalEdge {
    /// Creates a new timestamped edge
    pub fn new(src: Node, dst: Node, time: f64) -> Self {
        Self { src, dst, time }
    }

    /// The untimed endpoints
    pub fn edge(&self) -> Edge {
        Edge(self.src, self.dst)
    }
}

impl Display for TemporalEdge {
    /// Renders the canonical `.wel` line.
    ///
    /// The timestamp is rounded to 10 decimal digits and printed in the shortest
    /// round-trip form (`0.0`, `1.0`, `0.25`, ...).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} {:?}", self.src, self.dst, round10(self.time))
    }
}

impl Debug for TemporalEdge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        <Self as Display>::fmt(self, f)
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use super::*;

    #[test]
    fn undir_bijection_is_exhaustive() {
        // Both parities of `n` take different code paths
        for n in [2u64, 3, 4, 5, 8, 9, 16, 17] {
            let edges = (0..n * (n - 1) / 2)
                .map(|x| Edge::from_u64_undir(x, n))
                .sorted()
                .collect_vec();

            let expected = (0..n as Node)
                .flat_map(|u| ((u + 1)..n as Node).map(move |v| Edge(u, v)))
                .collect_vec();

            assert_eq!(edges, expected, "n = {n}");
        }
    }

    #[test]
    fn normalization() {
        assert_eq!(Edge(5, 3).normalized(), Edge(3, 5));
        assert!(Edge(3, 5).is_normalized());
        assert!(!Edge(5, 3).is_normalized());
        assert!(Edge(4, 4).is_loop());
    }

    #[test]
    fn debug_matches_display() {
        assert_eq!(format!("{:?}", Edge(3, 5)), "(3,5)");
        assert_eq!(format!("{:?}", TemporalEdge::new(1, 2, 0.5)), "1 2 0.5");
    }

    #[test]
    fn wel_line_rendering() {
        assert_eq!(TemporalEdge::new(1, 2, 0.0).to_string(), "1 2 0.0");
        assert_eq!(TemporalEdge::new(3, 4, 1.0).to_string(), "3 4 1.0");
        assert_eq!(TemporalEdge::new(0, 7, 0.25).to_string(), "0 7 0.25");
        assert_eq!(
            TemporalEdge::new(0, 1, 1.0 / 3.0).to_string(),
            "0 1 0.3333333333"
        );
    }
}
