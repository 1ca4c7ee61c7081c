//! The weighted edge value type.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A weighted directed edge between two vertex identifiers.
///
/// Vertex identifiers are opaque strings compared by exact equality.
/// Two edges with the same fields are indistinguishable; duplicates are kept.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    pub source: String,
    pub target: String,
    pub weight: i32,
}

impl Edge {
    /// Create an edge from `source` to `target`.
    pub fn new(source: impl Into<String>, target: impl Into<String>, weight: i32) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }

    /// The same edge traversed in the opposite direction.
    pub fn reversed(&self) -> Self {
        Self {
            source: self.target.clone(),
            target: self.source.clone(),
            weight: self.weight,
        }
    }

    /// Whether the edge starts and ends at the same vertex.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.target
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({} -> {}, weight: {})",
            self.source, self.target, self.weight
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_format() {
        let edge = Edge::new("A", "B", 5);
        assert_eq!(edge.to_string(), "(A -> B, weight: 5)");
    }

    #[test]
    fn display_negative_weight() {
        let edge = Edge::new("x", "y", -12);
        assert_eq!(edge.to_string(), "(x -> y, weight: -12)");
    }

    #[test]
    fn reversed_swaps_endpoints() {
        let edge = Edge::new("A", "B", 5);
        let rev = edge.reversed();
        assert_eq!(rev, Edge::new("B", "A", 5));
        assert_eq!(rev.reversed(), edge);
    }

    #[test]
    fn self_loop_detection() {
        assert!(Edge::new("A", "A", 7).is_self_loop());
        assert!(!Edge::new("A", "B", 7).is_self_loop());
        // Reversing a self-loop yields an identical edge
        let l = Edge::new("A", "A", 7);
        assert_eq!(l.reversed(), l);
    }
}
