//! # Weighted Edge Lists
//!
//! The `.wel` interchange format: one `"<src> <dst> <timestamp>"` line per temporal
//! edge. Timestamps are decimals in `[0, 1]` rounded to at most 10 digits. Line order
//! equals generation order and is not guaranteed sorted.
//!
//! Label and split files share the same writer shape with `"<node_id> <label_index>"`
//! records — a deliberate reuse of the edge-list-shaped writer that the downstream
//! node-classification consumer expects.

use std::{
    fs::File,
    io::{BufRead, BufReader, Write},
    path::Path,
};

use crate::{
    edge::TemporalEdge,
    error::{PrepError, Result},
    io::write_atomic,
    node::Node,
};

/// Trait for writing a sequence of temporal edges in the `.wel` format.
pub trait WelWrite {
    /// Writes the edges to a writer, one line per edge, in iteration order.
    fn try_write_wel<W: Write>(&self, writer: W) -> Result<()>;

    /// Writes the edges atomically to a file.
    fn try_write_wel_file<P: AsRef<Path>>(&self, path: P) -> Result<()>;
}

impl<T: AsRef<[TemporalEdge]>> WelWrite for T {
    fn try_write_wel<W: Write>(&self, mut writer: W) -> Result<()> {
        for edge in self.as_ref() {
            writeln!(writer, "{edge}")?;
        }
        Ok(())
    }

    fn try_write_wel_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        write_atomic(path, |w| self.try_write_wel(w))
    }
}

/// Reads a `.wel` file back into memory. Mainly useful for consumers and tests;
/// the pipeline itself only ever writes this format.
pub fn try_read_wel_file<P: AsRef<Path>>(path: P) -> Result<Vec<TemporalEdge>> {
    let reader = BufReader::new(File::open(path)?);

    let mut edges = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let mut parts = line.split(' ').filter(|t| !t.is_empty());

        let src = parse_field(parts.next(), i + 1)?;
        let dst = parse_field(parts.next(), i + 1)?;
        let time: f64 = parse_field(parts.next(), i + 1)?;

        edges.push(TemporalEdge::new(src, dst, time));
    }

    Ok(edges)
}

/// A `(node_id, label_index)` record as stored in label and split files.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct LabelRecord {
    /// Node id
    pub node: Node,
    /// Index of the node's set column in the one-hot label matrix
    pub label: u32,
}

/// Writes `"<node_id> <label_index>"` records atomically to a file, in iteration order.
pub fn try_write_label_file<'a, P, I>(path: P, records: I) -> Result<()>
where
    P: AsRef<Path>,
    I: IntoIterator<Item = &'a LabelRecord>,
{
    let mut iter = records.into_iter();
    write_atomic(path, |w| {
        iter.try_for_each(|r| Ok(writeln!(w, "{} {}", r.node, r.label)?))
    })
}

/// Reads a label file back as `(node_id, label_index)` records.
pub fn try_read_label_file<P: AsRef<Path>>(path: P) -> Result<Vec<LabelRecord>> {
    let reader = BufReader::new(File::open(path)?);

    let mut records = Vec::new();
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let mut parts = line.split(' ').filter(|t| !t.is_empty());

        let node = parse_field(parts.next(), i + 1)?;
        let label = parse_field(parts.next(), i + 1)?;

        records.push(LabelRecord { node, label });
    }

    Ok(records)
}

/// Parses one space-separated field, reporting the line number on failure
fn parse_field<T: std::str::FromStr>(field: Option<&str>, line: usize) -> Result<T> {
    field.and_then(|f| f.parse().ok()).ok_or_else(|| {
        PrepError::Io(std::io::Error::new(
            std::io::ErrorKind::InvalidData,
            format!("line {line}: malformed record"),
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wel_lines_in_generation_order() {
        let edges = vec![
            TemporalEdge::new(1, 2, 0.0),
            TemporalEdge::new(3, 4, 1.0),
            TemporalEdge::new(0, 9, 0.3333333333),
        ];

        let mut buf = Vec::new();
        edges.try_write_wel(&mut buf).unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "1 2 0.0\n3 4 1.0\n0 9 0.3333333333\n"
        );
    }

    #[test]
    fn wel_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("graph.wel");

        let edges = vec![TemporalEdge::new(5, 6, 0.25), TemporalEdge::new(6, 5, 0.75)];
        edges.try_write_wel_file(&path).unwrap();

        assert_eq!(try_read_wel_file(&path).unwrap(), edges);
    }

    #[test]
    fn label_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("labels.out");

        let records = vec![
            LabelRecord { node: 0, label: 2 },
            LabelRecord { node: 1, label: 0 },
        ];
        try_write_label_file(&path, &records).unwrap();

        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "0 2\n1 0\n"
        );
        assert_eq!(try_read_label_file(&path).unwrap(), records);
    }
}
