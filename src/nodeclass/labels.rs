//! # Label Extraction
//!
//! Turns the one-hot `V x L` label matrix into one `(node_id, label_index)` record per
//! node. Each row must have exactly one set bit; a row with zero or multiple set bits
//! means the archive is corrupt and aborts the run before any file is written.

use ndarray::Array2;

use crate::{
    error::{PrepError, Result},
    io::LabelRecord,
    node::Node,
};

/// Extracts one [`LabelRecord`] per node from a one-hot label matrix, in node order.
///
/// # Errors
/// Fails with [`PrepError::Label`] on the first row violating the one-hot invariant.
pub fn extract_labels(labels: &Array2<bool>) -> Result<Vec<LabelRecord>> {
    labels
        .outer_iter()
        .enumerate()
        .map(|(node, row)| {
            let mut set = row.iter().enumerate().filter_map(|(k, &b)| b.then_some(k));

            let label = set.next().ok_or(PrepError::Label { node, set_bits: 0 })?;
            if set.next().is_some() {
                return Err(PrepError::Label {
                    node,
                    set_bits: row.iter().filter(|&&b| b).count(),
                });
            }

            Ok(LabelRecord {
                node: node as Node,
                label: label as u32,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn one_hot(rows: &[&[bool]]) -> Array2<bool> {
        let cols = rows[0].len();
        Array2::from_shape_vec(
            (rows.len(), cols),
            rows.iter().flat_map(|r| r.iter().copied()).collect(),
        )
        .unwrap()
    }

    #[test]
    fn set_bit_index_becomes_label() {
        let labels = one_hot(&[
            &[false, true, false],
            &[true, false, false],
            &[false, false, true],
        ]);

        let records = extract_labels(&labels).unwrap();

        assert_eq!(
            records,
            vec![
                LabelRecord { node: 0, label: 1 },
                LabelRecord { node: 1, label: 0 },
                LabelRecord { node: 2, label: 2 },
            ]
        );
    }

    #[test]
    fn empty_row_is_a_data_integrity_error() {
        let labels = one_hot(&[&[true, false], &[false, false]]);

        assert!(matches!(
            extract_labels(&labels),
            Err(PrepError::Label {
                node: 1,
                set_bits: 0
            })
        ));
    }

    #[test]
    fn multi_hot_row_is_a_data_integrity_error() {
        let labels = one_hot(&[&[true, true, false]]);

        assert!(matches!(
            extract_labels(&labels),
            Err(PrepError::Label {
                node: 0,
                set_bits: 2
            })
        ));
    }
}
