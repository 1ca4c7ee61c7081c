//! `graphrep inspect` — summarize an edge list without writing output.

use std::path::Path;

use anyhow::{Context, Result};
use graphrep_core::{read_edges, GraphSummary, Representations, VertexOrder};

/// Parse and build `input`, then print a summary to stdout.
pub fn run(input: &Path, order: VertexOrder) -> Result<()> {
    let edges = read_edges(input)
        .with_context(|| format!("reading edge list {}", input.display()))?;
    let reps = Representations::build(&edges, order);
    print!("{}", render_summary(input, &reps));
    Ok(())
}

/// Render the summary block for a built graph.
pub fn render_summary(input: &Path, reps: &Representations) -> String {
    let GraphSummary {
        input_edges,
        directed_edges,
        vertex_count,
        self_loops,
        overwritten_cells,
        symmetric,
    } = reps.summary();

    let vertices: Vec<&str> = reps.vertices.iter().collect();

    let mut text = format!("--- Edge List ({}) ---\n", input.display());
    text.push_str(&format!("  Input edges:       {input_edges}\n"));
    text.push_str(&format!("  Directed edges:    {directed_edges}\n"));
    text.push_str(&format!("  Vertices:          {vertex_count}\n"));
    text.push_str(&format!("  Self-loops:        {self_loops}\n"));
    text.push_str(&format!("  Overwritten cells: {overwritten_cells}\n"));
    text.push_str(&format!(
        "  Symmetric matrix:  {}\n",
        if *symmetric { "yes" } else { "no" }
    ));
    text.push_str(&format!("  Vertex order:      [{}]\n", vertices.join(", ")));
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphrep_core::Edge;

    #[test]
    fn summary_lists_counts() {
        let edges = vec![
            Edge::new("A", "B", 5),
            Edge::new("B", "A", 5),
            Edge::new("A", "B", 6),
            Edge::new("B", "A", 6),
        ];
        let reps = Representations::build(&edges, VertexOrder::FirstSeen);
        let text = render_summary(Path::new("g.txt"), &reps);
        assert!(text.contains("--- Edge List (g.txt) ---"));
        assert!(text.contains("Input edges:       2"));
        assert!(text.contains("Vertices:          2"));
        assert!(text.contains("Overwritten cells: 2"));
        assert!(text.contains("Symmetric matrix:  yes"));
        assert!(text.contains("Vertex order:      [A, B]"));
    }

    #[test]
    fn inspect_does_not_write() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("g.txt");
        std::fs::write(&input, "<x, y, 1>\n").unwrap();
        run(&input, VertexOrder::Sorted).unwrap();
        let entries = std::fs::read_dir(dir.path()).unwrap().count();
        assert_eq!(entries, 1);
    }
}
