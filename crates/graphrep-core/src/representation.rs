//! The three graph representations built from a directed edge collection.
//!
//! All maps are insertion-ordered, so output is stable from run to run. With
//! [`VertexOrder::FirstSeen`] vertices are enumerated in the order they first
//! appear in the edge collection; with [`VertexOrder::Sorted`] they are
//! ordered lexicographically. Since the parser mirrors every edge, every
//! vertex is also a source, which keeps adjacency-list key order and matrix
//! row order identical under either policy.

use indexmap::{IndexMap, IndexSet};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::edge::Edge;
use crate::error::{GraphRepError, Result};

/// How vertices are enumerated for matrix indices and list ordering.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum VertexOrder {
    /// Order of first appearance in the edge collection.
    #[default]
    FirstSeen,
    /// Lexicographic order of vertex identifiers.
    Sorted,
}

impl VertexOrder {
    /// Parse a vertex order from a string.
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "first-seen" | "insertion" => Ok(VertexOrder::FirstSeen),
            "sorted" | "lexicographic" => Ok(VertexOrder::Sorted),
            _ => Err(GraphRepError::UnknownOrder {
                name: s.to_string(),
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            VertexOrder::FirstSeen => "first-seen",
            VertexOrder::Sorted => "sorted",
        }
    }
}

/// Vertex -> outgoing edges, in the order the edges were collected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdjacencyList {
    lists: IndexMap<String, Vec<Edge>>,
}

impl AdjacencyList {
    /// Group `edges` by source vertex.
    pub fn from_edges(edges: &[Edge]) -> Self {
        let mut lists: IndexMap<String, Vec<Edge>> = IndexMap::new();
        for edge in edges {
            lists
                .entry(edge.source.clone())
                .or_default()
                .push(edge.clone());
        }
        Self { lists }
    }

    /// Reorder the keys lexicographically. Per-vertex edge order is unchanged.
    pub fn sort_vertices(&mut self) {
        self.lists.sort_keys();
    }

    /// Outgoing edges of `vertex`, if it is a source of any edge.
    pub fn get(&self, vertex: &str) -> Option<&[Edge]> {
        self.lists.get(vertex).map(Vec::as_slice)
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Iterate `(vertex, edges)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Edge])> {
        self.lists.iter().map(|(v, es)| (v.as_str(), es.as_slice()))
    }
}

/// Vertex identifier <-> dense matrix index in `[0, len)`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexIndex {
    vertices: IndexSet<String>,
}

impl VertexIndex {
    /// Collect every distinct source and target in `edges`.
    pub fn from_edges(edges: &[Edge], order: VertexOrder) -> Self {
        let mut vertices: IndexSet<String> = IndexSet::new();
        for edge in edges {
            vertices.insert(edge.source.clone());
            vertices.insert(edge.target.clone());
        }
        if order == VertexOrder::Sorted {
            vertices.sort();
        }
        Self { vertices }
    }

    /// Matrix index of `vertex`.
    pub fn index_of(&self, vertex: &str) -> Option<usize> {
        self.vertices.get_index_of(vertex)
    }

    /// Vertex at matrix index `idx`.
    pub fn vertex(&self, idx: usize) -> Option<&str> {
        self.vertices.get_index(idx).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.vertices.iter().map(String::as_str)
    }
}

/// Dense N×N weight matrix; `0` means no edge.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AdjacencyMatrix {
    rows: Vec<Vec<i32>>,
}

impl AdjacencyMatrix {
    /// Build the matrix for `edges` using the indices in `index`.
    ///
    /// When several edges share an ordered `(source, target)` pair, the cell
    /// holds the weight of the last one.
    pub fn from_edges(edges: &[Edge], index: &VertexIndex) -> Self {
        Self::from_edges_counted(edges, index).0
    }

    /// Like [`AdjacencyMatrix::from_edges`], also returning how many writes
    /// replaced an earlier, different weight in the same cell.
    ///
    /// Edges whose endpoints are missing from `index` are skipped; that cannot
    /// happen when `index` was built from the same edges.
    pub fn from_edges_counted(edges: &[Edge], index: &VertexIndex) -> (Self, usize) {
        let n = index.len();
        let mut rows = vec![vec![0; n]; n];
        let mut written = vec![vec![false; n]; n];
        let mut overwritten = 0;

        for edge in edges {
            let (Some(i), Some(j)) = (index.index_of(&edge.source), index.index_of(&edge.target))
            else {
                continue;
            };
            if written[i][j] && rows[i][j] != edge.weight {
                overwritten += 1;
            }
            rows[i][j] = edge.weight;
            written[i][j] = true;
        }

        (Self { rows }, overwritten)
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.rows.len()
    }

    pub fn get(&self, row: usize, col: usize) -> Option<i32> {
        self.rows.get(row).and_then(|r| r.get(col)).copied()
    }

    pub fn rows(&self) -> &[Vec<i32>] {
        &self.rows
    }

    /// Whether `m[i][j] == m[j][i]` for every cell.
    pub fn is_symmetric(&self) -> bool {
        let n = self.size();
        (0..n).all(|i| (i + 1..n).all(|j| self.rows[i][j] == self.rows[j][i]))
    }
}

/// The adjacency list's edge sequences, in the adjacency list's key order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArrayOfLists {
    lists: Vec<Vec<Edge>>,
}

impl ArrayOfLists {
    pub fn from_adjacency(adjacency: &AdjacencyList) -> Self {
        Self {
            lists: adjacency.iter().map(|(_, edges)| edges.to_vec()).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &[Edge]> {
        self.lists.iter().map(Vec::as_slice)
    }
}

/// All three representations of one edge collection, built consistently.
#[derive(Debug, Clone, Serialize)]
pub struct Representations {
    /// Matrix index assignment.
    pub vertices: VertexIndex,
    pub adjacency_list: AdjacencyList,
    pub adjacency_matrix: AdjacencyMatrix,
    pub array_of_lists: ArrayOfLists,
    #[serde(skip)]
    summary: GraphSummary,
}

impl Representations {
    /// Build every representation of `edges` using the given vertex order.
    pub fn build(edges: &[Edge], order: VertexOrder) -> Self {
        let mut adjacency_list = AdjacencyList::from_edges(edges);
        if order == VertexOrder::Sorted {
            adjacency_list.sort_vertices();
        }
        let vertices = VertexIndex::from_edges(edges, order);
        let (adjacency_matrix, overwritten_cells) =
            AdjacencyMatrix::from_edges_counted(edges, &vertices);
        let array_of_lists = ArrayOfLists::from_adjacency(&adjacency_list);

        let self_loops = edges.iter().filter(|e| e.is_self_loop()).count();
        let summary = GraphSummary {
            input_edges: edges.len() / 2,
            directed_edges: edges.len(),
            vertex_count: vertices.len(),
            self_loops: self_loops / 2,
            overwritten_cells,
            symmetric: adjacency_matrix.is_symmetric(),
        };

        debug!(
            vertices = summary.vertex_count,
            directed_edges = summary.directed_edges,
            overwritten_cells,
            order = order.name(),
            "built graph representations"
        );

        Self {
            vertices,
            adjacency_list,
            adjacency_matrix,
            array_of_lists,
            summary,
        }
    }

    pub fn summary(&self) -> &GraphSummary {
        &self.summary
    }
}

/// Counts describing a built graph.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GraphSummary {
    /// Undirected edges read from the input (one per non-blank line).
    pub input_edges: usize,
    /// Directed edges after mirroring.
    pub directed_edges: usize,
    pub vertex_count: usize,
    /// Input lines whose source and target are the same vertex.
    pub self_loops: usize,
    /// Matrix writes that replaced a different weight (parallel edges).
    pub overwritten_cells: usize,
    pub symmetric: bool,
}
