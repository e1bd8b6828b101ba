/*!
# Node-Classification Dataset Builder

Turns a multi-snapshot archive (`T x V x V` adjacency tensor plus `V x L` one-hot
label matrix) into the flat artifacts the downstream node-classification consumer
expects:

| File | Content |
|---|---|
| `tgraph.wel` | flattened timestamped edge list |
| `labels.out` | one `"<node_id> <label_index>"` record per node |
| `train.tsv` / `valid.tsv` / `test.tsv` | randomized label partitions, same record shape |

The build runs four steps in order:
1. **Label extraction** — one record per node from the one-hot matrix.
2. **Flattening** — every tensor bit becomes an edge `(src, dst, t / T)`, sharded
   across a worker pool (see [`flatten`]).
3. **Capped filtering** — the label file is read back, restricted to nodes that
   emitted at least one edge, sorted by node id, and capped per label class
   (see [`cap_per_label`]).
4. **Partitioning** — a random permutation of the capped sample is cut into exact
   60/20/20 ranges (see [`split_indices`]).

All state (the cap counter, the maximum connected node id) lives inside one
[`DatasetBuilder::run`] call; invocations share nothing.
*/

pub mod archive;
pub mod flatten;
pub mod labels;
pub mod sample;
pub mod split;

use std::path::{Path, PathBuf};

use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;
use tracing::info;

use crate::{
    error::Result,
    io::{try_read_label_file, try_write_label_file, LabelRecord, WelWrite},
};

pub use archive::SnapshotArchive;
pub use flatten::{flatten, Flattened};
pub use labels::extract_labels;
pub use sample::cap_per_label;
pub use split::{split_indices, Splits};

/// Default number of flattening workers
pub const DEFAULT_THREADS: usize = 8;

/// Default per-label sampling cap
pub const DEFAULT_LIMIT: u32 = 300;

/// Paths of all artifacts written by one build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DatasetFiles {
    /// Flattened timestamped edge list
    pub wel: PathBuf,
    /// Per-node label records
    pub labels: PathBuf,
    /// Training partition
    pub train: PathBuf,
    /// Validation partition
    pub valid: PathBuf,
    /// Test partition
    pub test: PathBuf,
}

/// Builder for the node-classification dataset.
#[derive(Debug, Clone)]
pub struct DatasetBuilder {
    archive: PathBuf,
    out_dir: PathBuf,
    threads: usize,
    limit: u32,
    seed: Option<u64>,
}

impl DatasetBuilder {
    /// Creates a builder for the given snapshot archive with default settings.
    pub fn new<P: Into<PathBuf>>(archive: P) -> Self {
        Self {
            archive: archive.into(),
            out_dir: PathBuf::from("."),
            threads: DEFAULT_THREADS,
            limit: DEFAULT_LIMIT,
            seed: None,
        }
    }

    /// Directory all artifacts are written to. Defaults to the working directory.
    pub fn out_dir<P: Into<PathBuf>>(mut self, dir: P) -> Self {
        self.out_dir = dir.into();
        self
    }

    /// Number of flattening workers. Defaults to [`DEFAULT_THREADS`].
    pub fn threads(mut self, threads: usize) -> Self {
        self.threads = threads.max(1);
        self
    }

    /// Per-label sampling cap. Defaults to [`DEFAULT_LIMIT`].
    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Seed for the partition permutation. Unseeded builds draw from OS entropy.
    pub fn seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    /// Runs the full build and returns the written file paths.
    pub fn run(&self) -> Result<DatasetFiles> {
        let archive = SnapshotArchive::try_read(&self.archive)?;
        info!(
            timestamps = archive.num_timestamps(),
            nodes = archive.num_nodes(),
            labels = archive.num_labels(),
            "read snapshot archive"
        );

        let files = DatasetFiles {
            wel: self.out_dir.join("tgraph.wel"),
            labels: self.out_dir.join("labels.out"),
            train: self.out_dir.join("train.tsv"),
            valid: self.out_dir.join("valid.tsv"),
            test: self.out_dir.join("test.tsv"),
        };

        // Step 1: label extraction
        let label_records = extract_labels(&archive.labels)?;
        try_write_label_file(&files.labels, &label_records)?;
        info!(records = label_records.len(), file = %files.labels.display(), "wrote labels");

        // Step 2: temporal edge flattening
        let flat = flatten(&archive.adjs, self.threads)?;
        flat.edges.try_write_wel_file(&files.wel)?;
        info!(edges = flat.edges.len(), file = %files.wel.display(), "wrote edge list");

        // Step 3: capped filtering, consuming the on-disk label file
        let read_back = try_read_label_file(&files.labels)?;
        let capped = cap_per_label(read_back, flat.max_connected, self.limit);
        info!(records = capped.len(), limit = self.limit, "applied per-label cap");

        // Step 4: randomized partitioning
        let mut rng = match self.seed {
            Some(seed) => Pcg64Mcg::seed_from_u64(seed),
            None => Pcg64Mcg::from_os_rng(),
        };
        let splits = split_indices(capped.len(), &mut rng);

        write_partition(&files.train, &capped, &splits.train)?;
        write_partition(&files.valid, &capped, &splits.valid)?;
        write_partition(&files.test, &capped, &splits.test)?;
        info!(
            train = splits.train.len(),
            valid = splits.valid.len(),
            test = splits.test.len(),
            "wrote partitions"
        );

        Ok(files)
    }
}

/// Writes the records selected by a partition's index set, in permutation order
fn write_partition(path: &Path, records: &[LabelRecord], indices: &[usize]) -> Result<()> {
    try_write_label_file(path, indices.iter().map(|&i| &records[i]))
}

#[cfg(test)]
mod tests {
    use std::fs::File;

    use itertools::Itertools;
    use ndarray::{Array2, Array3};
    use ndarray_npy::NpzWriter;

    use super::*;
    use crate::io::try_read_wel_file;

    /// 4 time steps, 6 nodes, 2 labels; node 5 never emits an edge
    fn demo_archive(path: &Path) {
        let mut adjs = Array3::<i64>::zeros((4, 6, 6));
        for src in 0..5usize {
            for t in 0..4usize {
                adjs[[t, src, (src + 1) % 6]] = 1;
            }
        }
        let mut labels = Array2::<i64>::zeros((6, 2));
        for node in 0..6usize {
            labels[[node, node % 2]] = 1;
        }

        let mut npz = NpzWriter::new(File::create(path).unwrap());
        npz.add_array("adjs", &adjs).unwrap();
        npz.add_array("labels", &labels).unwrap();
        npz.finish().unwrap();
    }

    #[test]
    fn full_build_writes_all_artifacts() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("demo.npz");
        demo_archive(&archive);

        let files = DatasetBuilder::new(&archive)
            .out_dir(dir.path())
            .threads(2)
            .limit(2)
            .seed(Some(7))
            .run()
            .unwrap();

        // 5 sources x 4 time steps
        let edges = try_read_wel_file(&files.wel).unwrap();
        assert_eq!(edges.len(), 20);
        assert!(edges.iter().all(|e| (0.0..=1.0).contains(&e.time)));

        // labels.out keeps all 6 nodes, including the inactive one
        let labels = try_read_label_file(&files.labels).unwrap();
        assert_eq!(labels.len(), 6);

        // capped sample: node 5 dropped (inactive), then at most 2 per label
        let partitions: Vec<LabelRecord> = [&files.train, &files.valid, &files.test]
            .iter()
            .flat_map(|p| try_read_label_file(p).unwrap())
            .collect();

        let counts = partitions.iter().counts_by(|r| r.label);
        assert!(counts.values().all(|&c| c <= 2));
        assert!(partitions.iter().all(|r| r.node <= 4));

        // partition sizes: n = 4 (2 per label) -> 2 / 0 / 2
        assert_eq!(try_read_label_file(&files.train).unwrap().len(), 2);
        assert_eq!(try_read_label_file(&files.valid).unwrap().len(), 0);
        assert_eq!(try_read_label_file(&files.test).unwrap().len(), 2);

        // disjoint and complete over the capped sample
        let nodes = partitions.iter().map(|r| r.node).sorted().collect_vec();
        assert_eq!(nodes.iter().dedup().count(), nodes.len());
    }

    #[test]
    fn seeded_builds_are_reproducible() {
        let dir = tempfile::tempdir().unwrap();
        let archive = dir.path().join("demo.npz");
        demo_archive(&archive);

        let out_a = dir.path().join("a");
        let out_b = dir.path().join("b");
        std::fs::create_dir_all(&out_a).unwrap();
        std::fs::create_dir_all(&out_b).unwrap();

        let a = DatasetBuilder::new(&archive)
            .out_dir(&out_a)
            .seed(Some(11))
            .run()
            .unwrap();
        let b = DatasetBuilder::new(&archive)
            .out_dir(&out_b)
            .seed(Some(11))
            .run()
            .unwrap();

        for (x, y) in [(&a.train, &b.train), (&a.valid, &b.valid), (&a.test, &b.test)] {
            assert_eq!(
                std::fs::read_to_string(x).unwrap(),
                std::fs::read_to_string(y).unwrap()
            );
        }
    }

    #[test]
    fn missing_archive_aborts_before_any_write() {
        let dir = tempfile::tempdir().unwrap();

        let res = DatasetBuilder::new(dir.path().join("nope.npz"))
            .out_dir(dir.path())
            .run();

        assert!(res.is_err());
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
