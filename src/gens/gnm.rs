//! # G(n,m)
//!
//! Uniform sampling of exactly `m` distinct undirected edges on `n` nodes.

use std::marker::PhantomData;

use fxhash::FxHashMap;
use rand::Rng;

use crate::{
    edge::{Edge, NumEdges},
    node::{NumNodes, OptionalU64},
    utils::{FromCapacity, Map},
};

/// Marker trait to generalize over internal map implementations for tracking chosen edges.
///
/// This allows customizing the underlying structure used to perform the edge shuffle
/// in `G(n,m)` generation: [`FxHashMap`] for sparse graphs, `Vec<Option<_>>` for dense ones.
pub trait GnmMap: FromCapacity + Map<u64, OptionalU64> {}
impl<H> GnmMap for H where H: FromCapacity + Map<u64, OptionalU64> {}

/// Generator for uniform `G(n,m)` random graphs with `n` nodes and `m` edges.
///
/// The generator is parameterized via:
/// - `.nodes(n)` — total number of nodes
/// - `.edges(m)` — total number of edges
/// - `.with_mapper::<T>()` — optionally override the internal map type
///
/// Edges are undirected, normalized, loop-free, and pairwise distinct. The emission
/// order is an artifact of the sampling procedure and carries no meaning.
#[derive(Debug, Copy, Clone)]
pub struct Gnm<H = FxHashMap<u64, OptionalU64>>
where
    H: GnmMap,
{
    n: u64,
    m: u64,
    _phantom: PhantomData<H>,
}

impl<H> Default for Gnm<H>
where
    H: GnmMap,
{
    fn default() -> Self {
        Self {
            n: 0,
            m: 0,
            _phantom: Default::default(),
        }
    }
}

impl<H> Gnm<H>
where
    H: GnmMap,
{
    /// Creates a new empty `G(n,m)` generator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of nodes in the graph.
    pub fn nodes(mut self, n: NumNodes) -> Self {
        self.n = n as u64;
        self
    }

    /// Sets the number of edges in the graph.
    pub fn edges(mut self, m: NumEdges) -> Self {
        self.m = m as u64;
        self
    }

    /// Switches the internal map implementation used for edge sampling.
    pub fn with_mapper<M: GnmMap>(self) -> Gnm<M> {
        Gnm {
            n: self.n,
            m: self.m,
            _phantom: Default::default(),
        }
    }

    /// Returns a streaming iterator over a random `G(n,m)` edge set.
    ///
    /// Internally, edges are uniformly sampled without replacement.
    ///
    /// # Panics
    /// - If `n == 0`
    /// - If `m > n * (n - 1) / 2`
    pub fn stream<'a, R>(&self, rng: &'a mut R) -> GnmStream<'a, R, H>
    where
        R: Rng,
    {
        assert!(self.n > 0, "At least one node must be generated!");
        let end = self.n * (self.n - 1) / 2;
        assert!(
            self.m <= end,
            "A simple graph on {} nodes has at most {end} edges",
            self.n
        );

        GnmStream::new(
            rng,
            self.n,
            self.m,
            H::from_total_used_capacity(end as usize, self.m as usize),
        )
    }

    /// Generates the full edge list.
    pub fn generate<R>(&self, rng: &mut R) -> Vec<Edge>
    where
        R: Rng,
    {
        self.stream(rng).collect()
    }
}

/// Given `n` nodes and the edge space `0..(n choose 2)`, this iterator produces exactly
/// `m` uniformly random and distinct edges without replacement.
///
/// The algorithm used is based on:
/// > *V. Batagelj and U. Brandes. Efficient Generation of Large Random Networks.
/// > Physical Review E 71.3 (2005): 036113.*
///
/// Instead of shuffling the full edge space, a sparse map records the remappings of a
/// Fisher-Yates shuffle restricted to the `m` drawn positions.
pub struct GnmStream<'a, R, H>
where
    R: Rng,
    H: Map<u64, OptionalU64>,
{
    n: u64,
    rem: u64,
    cur: u64,
    end: u64,
    map: H,
    rng: &'a mut R,
}

impl<'a, R, H> GnmStream<'a, R, H>
where
    R: Rng,
    H: Map<u64, OptionalU64>,
{
    /// Creates a new stream yielding exactly `m` random edge values in `[0, end)`.
    ///
    /// # Panics
    /// Panics in debug mode if `m > end`, which would violate sampling without replacement.
    pub fn new(rng: &'a mut R, n: u64, m: u64, map: H) -> Self {
        let end = n * (n - 1) / 2;
        debug_assert!(m <= end);

        Self {
            n,
            rem: m,
            cur: 0,
            end,
            map,
            rng,
        }
    }

    /// Selects the next unique edge index using the Batagelj–Brandes partial mapping method.
    fn next_index(&mut self) -> Option<u64> {
        // Stop once `m` values were generated
        if self.rem == 0 {
            return None;
        }

        // Draw a position and resolve a pending remapping if one exists
        let pos = self.rng.random_range(self.cur..self.end);
        let drawn = match self.map.get(&pos) {
            Some(v) => v.get(),
            None => pos,
        };

        // The value at the front of the untouched range takes the drawn position
        if let Some(v) = self.map.get(&self.cur) {
            self.map.insert(pos, *v);
        } else {
            self.map.insert(pos, OptionalU64::new(self.cur).unwrap());
        }

        self.cur += 1;
        self.rem -= 1;

        Some(drawn)
    }
}

impl<'a, R, H> Iterator for GnmStream<'a, R, H>
where
    R: Rng,
    H: Map<u64, OptionalU64>,
{
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_index()
            .map(|x| Edge::from_u64_undir(x, self.n))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.rem as usize, Some(self.rem as usize))
    }
}

impl<'a, R, H> ExactSizeIterator for GnmStream<'a, R, H>
where
    R: Rng,
    H: Map<u64, OptionalU64>,
{
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;
    use crate::node::Node;

    #[test]
    fn exact_edge_count_without_duplicates() {
        let rng = &mut Pcg64Mcg::seed_from_u64(123);

        for n in [2 as NumNodes, 5, 10, 31] {
            let max_m = n * (n - 1) / 2;
            for m in [0, 1, max_m / 2, max_m] {
                let edges = Gnm::<FxHashMap<u64, OptionalU64>>::new()
                    .nodes(n)
                    .edges(m)
                    .generate(rng);

                assert_eq!(edges.len(), m as usize);
                assert_eq!(edges.iter().copied().sorted().dedup().count(), m as usize);

                for e in edges {
                    assert!(e.is_normalized());
                    assert!(!e.is_loop());
                    assert!(e.1 < n as Node);
                }
            }
        }
    }

    #[test]
    fn full_draw_covers_edge_space() {
        let rng = &mut Pcg64Mcg::seed_from_u64(7);

        let n: NumNodes = 9;
        let m = n * (n - 1) / 2;
        let edges = Gnm::<FxHashMap<u64, OptionalU64>>::new()
            .nodes(n)
            .edges(m)
            .generate(rng)
            .into_iter()
            .sorted()
            .collect_vec();

        let expected = (0..n)
            .flat_map(|u| ((u + 1)..n).map(move |v| Edge(u, v)))
            .collect_vec();

        assert_eq!(edges, expected);
    }

    #[test]
    fn identical_seeds_yield_identical_edges() {
        let gen = Gnm::<FxHashMap<u64, OptionalU64>>::new().nodes(50).edges(200);

        let a = gen.generate(&mut Pcg64Mcg::seed_from_u64(42));
        let b = gen.generate(&mut Pcg64Mcg::seed_from_u64(42));

        assert_eq!(a, b);
    }

    #[test]
    fn dense_mapper_matches_contract() {
        let rng = &mut Pcg64Mcg::seed_from_u64(99);

        let edges = Gnm::<FxHashMap<u64, OptionalU64>>::new()
            .with_mapper::<Vec<Option<OptionalU64>>>()
            .nodes(12)
            .edges(40)
            .generate(rng);

        assert_eq!(edges.len(), 40);
        assert_eq!(edges.iter().copied().sorted().dedup().count(), 40);
    }
}
