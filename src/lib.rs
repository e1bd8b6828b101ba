/*!
`tgprep` prepares temporal-graph datasets in a common **weighted-edge-list** format
consumable by a downstream temporal random-walk classifier.

# Data model

The interchange format is the `.wel` file: one temporal edge per line as
`"<src> <dst> <timestamp>"`, space-separated, where the timestamp is a decimal in
`[0, 1]` normalized relative to the *entire* corpus of one invocation. Line order is
generation order and carries no further meaning. Nodes are `u32` (see [`node`]).

# Components

Three independently invokable batch transformations populate this data model; no
component depends on another's output, and nothing persists across runs except the
files written to disk:

- [`normalize`] — parses raw edge records of unknown column layout (3 or 4 integer
  tokens per line, inferred per line by token count), rescales their timestamps to
  `[0, 1]` using the corpus-wide min/max, and emits a normalized `.wel` file.
- [`gens`] — synthesizes a seeded uniform `G(n,m)` random graph with random integer
  time buckets, rescaled to `[0, 1]`. Identical `(n, m, seed)` always produce an
  identical edge list.
- [`nodeclass`] — flattens a multi-snapshot dense adjacency tensor plus one-hot node
  labels into a timestamped edge list, applies a per-label sampling cap, and writes
  randomized train/validation/test partitions.

# Design

Components are configurable structs following the *Builder* pattern: set parameters
via chained setters, then call `run()`/`generate()`. All fallible operations return
[`error::Result`]; every output file is written atomically so a fatal error never
leaves a partial artifact (see [`io`]).

# Usage

```no_run
use tgprep::{gens::SynthTemporal, io::WelWrite};

fn main() -> tgprep::error::Result<()> {
    let gen = SynthTemporal::new().nodes(100).edges(400).seed(42);
    let edges = gen.generate()?;
    edges.try_write_wel_file(gen.output_filename())?;
    Ok(())
}
```
*/

pub mod edge;
pub mod error;
pub mod gens;
pub mod io;
pub mod node;
pub mod nodeclass;
pub mod normalize;
pub mod time;
pub mod utils;

/// `tgprep::prelude` includes the node/edge definitions, the error type, and the
/// timestamp scale used across all components.
pub mod prelude {
    pub use super::{
        edge::*,
        error::{PrepError, Result},
        node::*,
        time::*,
    };
}
