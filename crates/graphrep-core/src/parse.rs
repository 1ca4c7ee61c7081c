//! Edge-list parsing.
//!
//! Each non-blank input line describes one undirected edge:
//!
//! ```text
//! <A, B, 5>
//! B, C, 3
//! ```
//!
//! Angle brackets are optional and stripped wherever they appear. Fields are
//! comma-separated and trimmed. Fields past the third are ignored.
//!
//! Lines end at `\n`, `\r\n` or a lone `\r`. Bytes that are not valid UTF-8
//! are decoded lossily rather than rejected.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::edge::Edge;
use crate::error::{GraphRepError, Result};

/// Parse a single input line into `(source, target, weight)`.
///
/// `line_no` is 1-based and only used for error reporting.
/// Returns `Ok(None)` for lines that are empty after trimming.
pub fn parse_line(line: &str, line_no: usize) -> Result<Option<(String, String, i32)>> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let stripped: String = line.chars().filter(|c| *c != '<' && *c != '>').collect();
    let mut parts: Vec<&str> = stripped.split(',').collect();
    // Trailing empty fields do not count: `<A, B,>` has two.
    while parts.last().is_some_and(|p| p.is_empty()) {
        parts.pop();
    }
    if parts.len() < 3 {
        return Err(GraphRepError::MissingField {
            line: line_no,
            found: parts.len(),
        });
    }

    let source = parts[0].trim().to_string();
    let target = parts[1].trim().to_string();
    let raw_weight = parts[2].trim();
    let weight = raw_weight
        .parse::<i32>()
        .map_err(|source| GraphRepError::InvalidWeight {
            line: line_no,
            value: raw_weight.to_string(),
            source,
        })?;

    Ok(Some((source, target, weight)))
}

/// Parse every line of `reader` into the directed edge collection.
///
/// Each valid line contributes `(s, t, w)` followed by `(t, s, w)`. The first
/// malformed line aborts the whole parse.
pub fn parse_edges<R: BufRead>(mut reader: R) -> Result<Vec<Edge>> {
    let mut edges = Vec::new();
    let mut line_no = 0;
    let mut buf = Vec::new();
    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let mut chunk = buf.as_slice();
        if let Some(rest) = chunk.strip_suffix(b"\n") {
            chunk = rest;
        }
        if let Some(rest) = chunk.strip_suffix(b"\r") {
            chunk = rest;
        }
        for raw in chunk.split(|b| *b == b'\r') {
            line_no += 1;
            let line = String::from_utf8_lossy(raw);
            if let Some((source, target, weight)) = parse_line(&line, line_no)? {
                let forward = Edge::new(source, target, weight);
                let reverse = forward.reversed();
                edges.push(forward);
                edges.push(reverse);
            }
        }
    }
    Ok(edges)
}

/// Read and parse the edge list stored at `path`.
pub fn read_edges(path: &Path) -> Result<Vec<Edge>> {
    let file = File::open(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => GraphRepError::NotFound {
            path: path.to_path_buf(),
        },
        _ => GraphRepError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let edges = parse_edges(BufReader::new(file)).map_err(|e| match e {
        GraphRepError::Read(source) => GraphRepError::Io {
            path: path.to_path_buf(),
            source,
        },
        other => other,
    })?;

    debug!(
        path = %path.display(),
        directed_edges = edges.len(),
        "parsed edge list"
    );
    Ok(edges)
}
