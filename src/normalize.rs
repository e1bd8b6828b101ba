/*!
# Timestamp Normalizer

Rescales the raw integer timestamps of an edge file into `[0, 1]` relative to the
corpus-wide minimum and maximum, emitting a normalized `.wel` file.

The normalizer makes two passes over the input:
1. **Scan**: every line is tokenized and classified (see [`RawEdge`]); the raw
   timestamps determine the corpus-wide [`TimeScale`]. Any malformed line aborts the
   run before an output file exists.
2. **Rewrite**: the file is re-read and every line is emitted as
   `"<src> <dst> <normalized_timestamp>"`, preserving the original line order.

The output path derives from the input path: its extension is replaced by the
`_preproc.wel` suffix, next to the input file.
*/

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
};

use tracing::info;

use crate::{
    edge::TemporalEdge,
    error::{PrepError, Result},
    io::{write_atomic, RawEdge},
    time::TimeScale,
};

/// Two-pass timestamp normalization of a raw edge file.
#[derive(Debug, Clone, Default)]
pub struct Normalizer {
    /// Overrides the derived output path if set
    output: Option<PathBuf>,
}

impl Normalizer {
    /// Creates a normalizer with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the output path. By default it is derived from the input path.
    pub fn output<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.output = Some(path.into());
        self
    }

    /// The output path for a given input: filename stem plus `_preproc.wel`,
    /// alongside the input file.
    pub fn output_path(&self, input: &Path) -> PathBuf {
        if let Some(out) = &self.output {
            return out.clone();
        }

        let stem = input
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        input.with_file_name(format!("{stem}_preproc.wel"))
    }

    /// Runs both passes and returns the path of the written `.wel` file.
    ///
    /// # Errors
    /// - [`PrepError::Format`] / [`PrepError::Token`] on any malformed line
    /// - [`PrepError::EmptyInput`] if the file holds no edge records
    /// - [`PrepError::DegenerateRange`] if all timestamps are identical
    pub fn run<P: AsRef<Path>>(&self, input: P) -> Result<PathBuf> {
        let input = input.as_ref();
        let scale = self.scan(input)?;

        info!(
            min = scale.min(),
            max = scale.max(),
            diff = scale.width(),
            "scanned timestamp range"
        );

        let output = self.output_path(input);
        write_atomic(&output, |w| {
            let reader = BufReader::new(File::open(input)?);
            for (i, line) in reader.lines().enumerate() {
                let edge = RawEdge::parse(&line?, i + 1)?;
                let normalized =
                    TemporalEdge::new(edge.src, edge.dst, scale.rescale(edge.timestamp));
                writeln!(w, "{normalized}")?;
            }
            Ok(())
        })?;

        info!(output = %output.display(), "wrote normalized edge list");
        Ok(output)
    }

    /// Pass 1: classifies every line and computes the corpus-wide timestamp range.
    fn scan(&self, input: &Path) -> Result<TimeScale> {
        let reader = BufReader::new(File::open(input)?);

        let mut range: Option<(u64, u64)> = None;
        for (i, line) in reader.lines().enumerate() {
            let edge = RawEdge::parse(&line?, i + 1)?;
            range = Some(match range {
                Some((min, max)) => (min.min(edge.timestamp), max.max(edge.timestamp)),
                None => (edge.timestamp, edge.timestamp),
            });
        }

        let (min, max) = range.ok_or_else(|| PrepError::EmptyInput(input.to_path_buf()))?;
        TimeScale::try_new(min, max)
    }
}
