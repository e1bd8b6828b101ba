/*!
# Graph Generators

Random graph generation for controlled experiments.

Generators follow a builder-style pattern: create an instance, set parameters via
chained setters, then generate.

- [`Gnm`]: uniform `G(n,m)` edge sampler — exactly `m` distinct undirected non-loop
  edges drawn uniformly at random for any [`rand::Rng`].
- [`SynthTemporal`]: the full seeded synthetic temporal graph of the pipeline — a
  `G(n,m)` edge set with uniformly drawn integer time buckets normalized to `[0, 1]`,
  fully determined by `(n, m, seed)`.
*/

mod gnm;
mod synth;

pub use gnm::*;
pub use synth::*;
