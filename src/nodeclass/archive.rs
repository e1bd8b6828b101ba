//! # Snapshot Archives
//!
//! The dataset builder consumes an `.npz` archive holding two members:
//! - `adjs`: a dense `T x V x V` binary adjacency tensor, one `V x V` snapshot per
//!   discrete time step
//! - `labels`: a dense `V x L` one-hot label matrix
//!
//! Member dtypes vary between exporters (float, integer, boolean); anything whose
//! entries are `0`/`1` is accepted. Missing members and dimension mismatches are fatal
//! before any output file is written.

use std::{
    fs::File,
    io::{Read, Seek},
    path::Path,
};

use ndarray::{Array2, Array3, Dimension, Ix2, Ix3};
use ndarray_npy::NpzReader;

use crate::error::{PrepError, Result};

/// An in-memory snapshot archive: adjacency tensor plus one-hot label matrix.
#[derive(Debug, Clone)]
pub struct SnapshotArchive {
    /// `adjs[t][i][j]`: edge from node `i` to node `j` present at time step `t`
    pub adjs: Array3<bool>,
    /// `labels[i][k]`: node `i` belongs to class `k`
    pub labels: Array2<bool>,
}

impl SnapshotArchive {
    /// Reads and validates an archive.
    ///
    /// # Errors
    /// Fails with [`PrepError::ArchiveShape`] if a member is missing, has an
    /// unsupported dtype or rank, or the node dimensions of the two members disagree.
    pub fn try_read<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let mut npz = NpzReader::new(File::open(path)?)?;

        let adjs: Array3<bool> = read_binary(&mut npz, path, "adjs")?;
        let labels: Array2<bool> = read_binary(&mut npz, path, "labels")?;

        let (t, v, v2) = adjs.dim();
        let (vl, l) = labels.dim();

        let shape_err = |reason: String| PrepError::ArchiveShape {
            path: path.to_path_buf(),
            reason,
        };

        if t == 0 || v == 0 {
            return Err(shape_err("adjacency tensor is empty".into()));
        }
        if v != v2 {
            return Err(shape_err(format!(
                "adjacency snapshots must be square, got {v} x {v2}"
            )));
        }
        if vl != v {
            return Err(shape_err(format!(
                "label matrix covers {vl} nodes, adjacency tensor {v}"
            )));
        }
        if l == 0 {
            return Err(shape_err("label matrix has no label columns".into()));
        }

        Ok(Self { adjs, labels })
    }

    /// Number of discrete time steps `T`
    pub fn num_timestamps(&self) -> usize {
        self.adjs.dim().0
    }

    /// Number of nodes `V`
    pub fn num_nodes(&self) -> usize {
        self.adjs.dim().1
    }

    /// Number of label classes `L`
    pub fn num_labels(&self) -> usize {
        self.labels.dim().1
    }
}

/// Reads one archive member as a binary array, accepting the dtypes exporters
/// commonly produce (`i64`, `f64`, `u8`, `bool`).
fn read_binary<R, D>(
    npz: &mut NpzReader<R>,
    path: &Path,
    name: &str,
) -> Result<ndarray::Array<bool, D>>
where
    R: Read + Seek,
    D: Dimension + ReadDim,
{
    // `np.savez` stores members with a `.npy` suffix
    let member = npz
        .names()?
        .into_iter()
        .find(|n| n == name || n.strip_suffix(".npy") == Some(name))
        .ok_or_else(|| PrepError::ArchiveShape {
            path: path.to_path_buf(),
            reason: format!("missing archive member `{name}`"),
        })?;

    D::read_binary(npz, &member).map_err(|e| PrepError::ArchiveShape {
        path: path.to_path_buf(),
        reason: format!("member `{name}`: {e}"),
    })
}

/// Dimension-specific dtype probing for [`read_binary`]
trait ReadDim: Dimension + Sized {
    fn read_binary<R: Read + Seek>(
        npz: &mut NpzReader<R>,
        member: &str,
    ) -> std::result::Result<ndarray::Array<bool, Self>, ndarray_npy::ReadNpzError>;
}

macro_rules! impl_read_dim {
    ($dim:ty) => {
        impl ReadDim for $dim {
            fn read_binary<R: Read + Seek>(
                npz: &mut NpzReader<R>,
                member: &str,
            ) -> std::result::Result<ndarray::Array<bool, Self>, ndarray_npy::ReadNpzError>
            {
                if let Ok(a) = npz.by_name::<ndarray::OwnedRepr<bool>, $dim>(member) {
                    return Ok(a);
                }
                if let Ok(a) = npz.by_name::<ndarray::OwnedRepr<i64>, $dim>(member) {
                    return Ok(a.mapv(|x| x == 1));
                }
                if let Ok(a) = npz.by_name::<ndarray::OwnedRepr<u8>, $dim>(member) {
                    return Ok(a.mapv(|x| x == 1));
                }
                npz.by_name::<ndarray::OwnedRepr<f64>, $dim>(member)
                    .map(|a| a.mapv(|x| x == 1.0))
            }
        }
    };
}

impl_read_dim!(Ix2);
impl_read_dim!(Ix3);

#[cfg(test)]
mod tests {
    use ndarray::{Array2, Array3};
    use ndarray_npy::NpzWriter;

    use super::*;

    fn write_archive(path: &Path, adjs: &Array3<i64>, labels: &Array2<i64>) {
        let mut npz = NpzWriter::new(File::create(path).unwrap());
        npz.add_array("adjs", adjs).unwrap();
        npz.add_array("labels", labels).unwrap();
        npz.finish().unwrap();
    }

    #[test]
    fn valid_archive_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data.npz");

        let mut adjs = Array3::<i64>::zeros((2, 3, 3));
        adjs[[0, 0, 1]] = 1;
        adjs[[1, 2, 0]] = 1;
        let mut labels = Array2::<i64>::zeros((3, 2));
        labels[[0, 0]] = 1;
        labels[[1, 1]] = 1;
        labels[[2, 0]] = 1;
        write_archive(&path, &adjs, &labels);

        let archive = SnapshotArchive::try_read(&path).unwrap();

        assert_eq!(archive.num_timestamps(), 2);
        assert_eq!(archive.num_nodes(), 3);
        assert_eq!(archive.num_labels(), 2);
        assert!(archive.adjs[[0, 0, 1]]);
        assert!(!archive.adjs[[0, 1, 0]]);
        assert!(archive.labels[[1, 1]]);
    }

    #[test]
    fn missing_member_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.npz");

        let mut npz = NpzWriter::new(File::create(&path).unwrap());
        npz.add_array("adjs", &Array3::<i64>::zeros((1, 2, 2)))
            .unwrap();
        npz.finish().unwrap();

        assert!(matches!(
            SnapshotArchive::try_read(&path),
            Err(PrepError::ArchiveShape { .. })
        ));
    }

    #[test]
    fn node_dimension_mismatch_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("mismatch.npz");

        // 3 nodes in the tensor, 4 rows in the label matrix
        write_archive(
            &path,
            &Array3::<i64>::zeros((2, 3, 3)),
            &Array2::<i64>::zeros((4, 2)),
        );

        assert!(matches!(
            SnapshotArchive::try_read(&path),
            Err(PrepError::ArchiveShape { .. })
        ));
    }

    #[test]
    fn non_square_snapshots_are_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rect.npz");

        write_archive(
            &path,
            &Array3::<i64>::zeros((2, 3, 4)),
            &Array2::<i64>::zeros((3, 2)),
        );

        assert!(matches!(
            SnapshotArchive::try_read(&path),
            Err(PrepError::ArchiveShape { .. })
        ));
    }

    #[test]
    fn float_dtype_is_accepted() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("float.npz");

        let mut adjs = Array3::<f64>::zeros((1, 2, 2));
        adjs[[0, 0, 1]] = 1.0;
        let mut labels = Array2::<f64>::zeros((2, 2));
        labels[[0, 0]] = 1.0;
        labels[[1, 1]] = 1.0;

        let mut npz = NpzWriter::new(File::create(&path).unwrap());
        npz.add_array("adjs", &adjs).unwrap();
        npz.add_array("labels", &labels).unwrap();
        npz.finish().unwrap();

        let archive = SnapshotArchive::try_read(&path).unwrap();
        assert!(archive.adjs[[0, 0, 1]]);
        assert!(archive.labels[[1, 1]]);
    }
}
