//! Weighted edge-list conversion for undirected graphs.
//!
//! Reads lines of the form `<A, B, 5>` and builds three equivalent views of
//! the resulting graph:
//! - **Adjacency list:** vertex -> its outgoing edges
//! - **Adjacency matrix:** dense N×N weight matrix indexed by vertex position
//! - **Array of lists:** the adjacency list's edge sequences, in key order
//!
//! Every input line is treated as an undirected edge and stored as two
//! directed edges (forward, then reverse).

pub mod edge;
pub mod error;
pub mod parse;
pub mod representation;
pub mod write;

pub use edge::Edge;
pub use error::{GraphRepError, Result};
pub use parse::{parse_edges, parse_line, read_edges};
pub use representation::{
    AdjacencyList, AdjacencyMatrix, ArrayOfLists, GraphSummary, Representations, VertexIndex,
    VertexOrder,
};
pub use write::{render_json, render_text, write_representations, OutputFormat};
