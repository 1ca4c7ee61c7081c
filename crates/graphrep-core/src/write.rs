//! Rendering and writing the built representations.
//!
//! The text format has three labeled sections in fixed order:
//!
//! ```text
//! Adjacency List:
//! A: [(A -> B, weight: 5)]
//! B: [(B -> A, weight: 5)]
//!
//! Adjacency Matrix:
//! [0, 5]
//! [5, 0]
//!
//! Array of Lists:
//! [(A -> B, weight: 5)]
//! [(B -> A, weight: 5)]
//! ```

use std::fmt::{Display, Write as _};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{GraphRepError, Result};
use crate::representation::Representations;

/// Output file format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// The three labeled text sections.
    #[default]
    Text,
    /// A pretty-printed JSON document.
    Json,
}

impl OutputFormat {
    /// Parse an output format from a string.
    pub fn parse(s: &str) -> Result<Self> {
        match s {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(GraphRepError::UnknownFormat {
                name: s.to_string(),
            }),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }

    /// Render `reps` in this format.
    pub fn render(&self, reps: &Representations) -> Result<String> {
        match self {
            OutputFormat::Text => Ok(render_text(reps)),
            OutputFormat::Json => render_json(reps),
        }
    }
}

/// Render a bracketed, comma-separated sequence: `[a, b, c]`.
fn bracketed<T: Display>(items: impl IntoIterator<Item = T>) -> String {
    let parts: Vec<String> = items.into_iter().map(|item| item.to_string()).collect();
    format!("[{}]", parts.join(", "))
}

/// Render the three-section text format.
pub fn render_text(reps: &Representations) -> String {
    let mut out = String::new();

    out.push_str("Adjacency List:\n");
    for (vertex, edges) in reps.adjacency_list.iter() {
        let _ = writeln!(out, "{vertex}: {}", bracketed(edges));
    }
    out.push('\n');

    out.push_str("Adjacency Matrix:\n");
    for row in reps.adjacency_matrix.rows() {
        let _ = writeln!(out, "{}", bracketed(row));
    }
    out.push('\n');

    out.push_str("Array of Lists:\n");
    for list in reps.array_of_lists.iter() {
        let _ = writeln!(out, "{}", bracketed(list));
    }

    out
}

/// Render all representations as pretty JSON.
pub fn render_json(reps: &Representations) -> Result<String> {
    let mut json = serde_json::to_string_pretty(reps)?;
    json.push('\n');
    Ok(json)
}

/// Create (or truncate) `path` and write `reps` to it in `format`.
///
/// Rendering happens before the file is opened, so a rendering failure
/// leaves any existing file untouched.
pub fn write_representations(
    path: &Path,
    reps: &Representations,
    format: OutputFormat,
) -> Result<()> {
    let rendered = format.render(reps)?;
    let io_err = |source: std::io::Error| GraphRepError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(rendered.as_bytes()).map_err(io_err)?;
    writer.flush().map_err(io_err)?;

    debug!(
        path = %path.display(),
        format = format.name(),
        bytes = rendered.len(),
        "wrote graph representations"
    );
    Ok(())
}
