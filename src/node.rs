/*!
# Node Representation

We choose `Node = u32` as the datasets this pipeline prepares stay far below `2^32` nodes.
This (1) saves space compared to `usize`/`u64` and (2) allows manipulating node values
directly without abstracting over them.
*/

use std::num::NonZero;

/// Nodes can be any unsigned integer from `0` to `Node::MAX - 1`
pub type Node = u32;

/// There can be at most `2^32 - 1` nodes in a graph!
pub type NumNodes = Node;

/// As `Option<u64>` uses additional bytes for padding, it can be inefficient
/// since we sometimes need `Vec<Option<u64>>`. This instead uses the
/// `NonZero`-Wrapper to assign a constant value as the `None`-marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct OptionalU64Impl<const N: u64>(NonZero<u64>);

/// Often, `u64::MAX` is safe to pick as the `None`-Value
pub type OptionalU64 = OptionalU64Impl<{ u64::MAX }>;

impl<const N: u64> OptionalU64Impl<N> {
    /// Returns `Some(OptionalU64Impl)` if `n != N` and `None` otherwise
    pub const fn new(n: u64) -> Option<Self> {
        match NonZero::new(n ^ N) {
            Some(inner) => Some(OptionalU64Impl(inner)),
            None => None,
        }
    }

    /// Gets the underlying u64-Value
    pub const fn get(&self) -> u64 {
        self.0.get() ^ N
    }
}
