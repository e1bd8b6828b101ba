//! # Raw Edge Lines
//!
//! Input lines of unknown encoding carrying embedded integer tokens. A line is valid
//! if it contains exactly 3 tokens (`src dst timestamp`) or 4 tokens
//! (`src dst <ignored> timestamp`); the third token of a 4-column line is carried
//! positionally by upstream exporters but semantically discarded. The layout is
//! inferred purely from the token count, there is no header or schema declaration.

use crate::{
    error::{PrepError, Result},
    node::Node,
};

/// A classified raw edge line: endpoints plus the raw (un-normalized) timestamp.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RawEdge {
    /// Source node id
    pub src: Node,
    /// Destination node id
    pub dst: Node,
    /// Raw integer timestamp
    pub timestamp: u64,
}

impl RawEdge {
    /// Parses one raw edge line.
    ///
    /// `line_no` is the 1-based line number, used only for error reporting.
    ///
    /// # Errors
    /// - [`PrepError::Format`] if the token count is neither 3 nor 4
    /// - [`PrepError::Token`] if a digit run does not fit into `u64`, or an
    ///   endpoint does not fit into [`Node`]
    pub fn parse(line: &str, line_no: usize) -> Result<Self> {
        let tokens = digit_runs(line, line_no)?;

        match tokens.as_slice() {
            [src, dst, ts] | [src, dst, _, ts] => Ok(RawEdge {
                src: node_id(*src, line_no)?,
                dst: node_id(*dst, line_no)?,
                timestamp: *ts,
            }),
            _ => Err(PrepError::Format {
                line: line_no,
                found: tokens.len(),
            }),
        }
    }
}

/// Narrows a raw endpoint token to the [`Node`] id domain
fn node_id(value: u64, line_no: usize) -> Result<Node> {
    Node::try_from(value).map_err(|_| PrepError::Token {
        line: line_no,
        token: value.to_string(),
    })
}

/// Extracts all maximal digit runs of a line as integers, ignoring every non-digit
/// character. This tolerates heterogeneous separators: commas, tabs, brackets, ...
pub fn digit_runs(line: &str, line_no: usize) -> Result<Vec<u64>> {
    let mut tokens = Vec::with_capacity(4);

    let mut chars = line.char_indices().peekable();
    while let Some((start, c)) = chars.next() {
        if !c.is_ascii_digit() {
            continue;
        }

        let mut end = start + 1;
        while let Some(&(i, d)) = chars.peek() {
            if !d.is_ascii_digit() {
                break;
            }
            end = i + 1;
            chars.next();
        }

        let run = &line[start..end];
        tokens.push(run.parse().map_err(|_| PrepError::Token {
            line: line_no,
            token: run.to_string(),
        })?);
    }

    Ok(tokens)
}
