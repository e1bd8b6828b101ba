//! # Randomized Partitioning
//!
//! Splits the capped sample into train/validation/test partitions by drawing a uniform
//! random permutation of its indices and cutting it into three contiguous ranges.
//! Ratios are exact integer truncations: `|train| = floor(0.6 n)`,
//! `|valid| = floor(0.2 n)`, and test takes everything left, so truncation remainders
//! always land in the test range.

use rand::{seq::SliceRandom, Rng};

/// Train / validation / test shares in tenths
const TRAIN_TENTHS: usize = 6;
const VALID_TENTHS: usize = 2;

/// Disjoint index sets covering `0..n` exactly once each.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Splits {
    /// First `floor(0.6 n)` indices of the permutation
    pub train: Vec<usize>,
    /// Next `floor(0.2 n)` indices
    pub valid: Vec<usize>,
    /// Everything left, possibly slightly more than `0.2 n`
    pub test: Vec<usize>,
}

/// Draws a uniform random permutation of `0..n` and cuts it into the three partitions.
pub fn split_indices<R: Rng>(n: usize, rng: &mut R) -> Splits {
    let mut indices: Vec<usize> = (0..n).collect();
    indices.shuffle(rng);

    let train_size = n * TRAIN_TENTHS / 10;
    let valid_size = n * VALID_TENTHS / 10;

    let test = indices.split_off(train_size + valid_size);
    let valid = indices.split_off(train_size);

    Splits {
        train: indices,
        valid,
        test,
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;
    use rand::SeedableRng;
    use rand_pcg::Pcg64Mcg;

    use super::*;

    #[test]
    fn exact_truncated_sizes() {
        let rng = &mut Pcg64Mcg::seed_from_u64(1);

        for n in [0usize, 1, 5, 10, 99, 100, 301] {
            let splits = split_indices(n, rng);

            assert_eq!(splits.train.len(), n * 6 / 10, "n = {n}");
            assert_eq!(splits.valid.len(), n * 2 / 10, "n = {n}");
            assert_eq!(
                splits.test.len(),
                n - n * 6 / 10 - n * 2 / 10,
                "n = {n}"
            );
        }
    }

    #[test]
    fn partitions_are_disjoint_and_complete() {
        let rng = &mut Pcg64Mcg::seed_from_u64(2);
        let n = 137;

        let splits = split_indices(n, rng);

        let union = splits
            .train
            .iter()
            .chain(&splits.valid)
            .chain(&splits.test)
            .copied()
            .sorted()
            .collect_vec();

        assert_eq!(union, (0..n).collect_vec());
    }

    #[test]
    fn identical_seeds_yield_identical_partitions() {
        let a = split_indices(50, &mut Pcg64Mcg::seed_from_u64(9));
        let b = split_indices(50, &mut Pcg64Mcg::seed_from_u64(9));

        assert_eq!(a, b);
    }

    #[test]
    fn truncation_remainder_goes_to_test() {
        let rng = &mut Pcg64Mcg::seed_from_u64(3);

        // 7 * 0.6 = 4.2 and 7 * 0.2 = 1.4: train 4, valid 1, test picks up the rest
        let splits = split_indices(7, rng);

        assert_eq!(splits.train.len(), 4);
        assert_eq!(splits.valid.len(), 1);
        assert_eq!(splits.test.len(), 2);
    }
}
