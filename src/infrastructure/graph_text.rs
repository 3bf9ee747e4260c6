//! Loader for the plain-text graph format.
//!
//! ```text
//! <order> <size> <directed|undirected>
//! <u> <v> [weight]
//! ...
//! ```
//!
//! The header is the first non-blank line. Exactly `size` edge records follow;
//! blank lines are skipped. Any third header token other than `directed` yields an
//! undirected graph. The graph turns weighted as soon as one record carries a
//! weight.

use crate::domain::graph::Graph;
use anyhow::{Context, Result};
use thiserror::Error;
use tokio::fs;

/// Largest vertex count a header may declare. Every vertex is allocated up front, so
/// an unchecked header could abort the process instead of failing the parse.
pub const MAX_ORDER: usize = 1 << 24;

#[derive(Debug, Error, PartialEq)]
pub enum GraphParseError {
    #[error("missing header line")]
    MissingHeader,

    #[error("line {line}: header needs <order> <size> <directedness>, got {found} token(s)")]
    ShortHeader { line: usize, found: usize },

    #[error("line {line}: invalid {field} {value:?}")]
    InvalidCount {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error("line {line}: order {order} exceeds the limit of {max} vertices")]
    OrderTooLarge { line: usize, order: usize, max: usize },

    #[error("line {line}: edge record needs 2 or 3 fields, got {found}")]
    EdgeArity { line: usize, found: usize },

    #[error("line {line}: invalid vertex index {value:?}")]
    InvalidVertex { line: usize, value: String },

    #[error("line {line}: invalid weight {value:?}")]
    InvalidWeight { line: usize, value: String },

    #[error("line {line}: vertex {vertex} out of range for order {order}")]
    VertexOutOfRange {
        line: usize,
        vertex: usize,
        order: usize,
    },

    #[error("expected {expected} edge record(s), found {found}")]
    MissingEdges { expected: usize, found: usize },

    #[error("line {line}: unexpected content after {expected} edge record(s)")]
    TrailingContent { line: usize, expected: usize },
}

/// Parses `source` into a graph named `name`. No partial graph is returned on error.
pub fn parse_graph(name: &str, source: &str) -> Result<Graph, GraphParseError> {
    let mut lines = source
        .lines()
        .enumerate()
        .map(|(i, l)| (i + 1, l.trim()))
        .filter(|(_, l)| !l.is_empty());

    let (header_line, header) = lines.next().ok_or(GraphParseError::MissingHeader)?;
    let tokens: Vec<&str> = header.split_whitespace().collect();
    if tokens.len() < 3 {
        return Err(GraphParseError::ShortHeader {
            line: header_line,
            found: tokens.len(),
        });
    }
    let order = parse_count(header_line, "order", tokens[0])?;
    if order > MAX_ORDER {
        return Err(GraphParseError::OrderTooLarge {
            line: header_line,
            order,
            max: MAX_ORDER,
        });
    }
    let size = parse_count(header_line, "size", tokens[1])?;
    let directed = tokens[2] == "directed";

    let mut graph = Graph::new(name, order, size, directed, false);

    let mut found = 0;
    while found < size {
        let Some((line, record)) = lines.next() else {
            return Err(GraphParseError::MissingEdges {
                expected: size,
                found,
            });
        };
        let fields: Vec<&str> = record.split_whitespace().collect();
        if fields.len() != 2 && fields.len() != 3 {
            return Err(GraphParseError::EdgeArity {
                line,
                found: fields.len(),
            });
        }
        let u = parse_vertex(line, fields[0], order)?;
        let v = parse_vertex(line, fields[1], order)?;

        match fields.get(2) {
            Some(raw) => {
                let weight: f64 = raw.parse().map_err(|_| GraphParseError::InvalidWeight {
                    line,
                    value: raw.to_string(),
                })?;
                graph.set_weighted(true);
                graph.add_weighted_edge(u, v, weight);
            }
            None => graph.add_edge(u, v),
        }
        found += 1;
    }

    if let Some((line, _)) = lines.next() {
        return Err(GraphParseError::TrailingContent {
            line,
            expected: size,
        });
    }

    Ok(graph)
}

fn parse_count(line: usize, field: &'static str, raw: &str) -> Result<usize, GraphParseError> {
    raw.parse().map_err(|_| GraphParseError::InvalidCount {
        line,
        field,
        value: raw.to_string(),
    })
}

fn parse_vertex(line: usize, raw: &str, order: usize) -> Result<usize, GraphParseError> {
    let vertex: usize = raw.parse().map_err(|_| GraphParseError::InvalidVertex {
        line,
        value: raw.to_string(),
    })?;
    if vertex >= order {
        return Err(GraphParseError::VertexOutOfRange {
            line,
            vertex,
            order,
        });
    }
    Ok(vertex)
}

/// Reads and parses a graph file; the graph is named after `path`.
pub async fn read_graph_file(path: &str) -> Result<Graph> {
    let raw = fs::read_to_string(path).await?;
    let graph = parse_graph(path, &raw).with_context(|| format!("parsing graph file: {path}"))?;
    Ok(graph)
}
