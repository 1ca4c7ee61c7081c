//! `graphrep convert` — edge list in, three representations out.

use anyhow::{Context, Result};
use graphrep_core::{read_edges, write_representations, Representations};
use tracing::info;

use crate::config::Settings;

/// Parse the input, build every representation, and write the output file.
///
/// A parse failure returns before the output file is opened.
pub fn run(settings: &Settings) -> Result<()> {
    let edges = read_edges(&settings.input)
        .with_context(|| format!("reading edge list {}", settings.input.display()))?;

    let reps = Representations::build(&edges, settings.order);
    info!(
        vertices = reps.vertices.len(),
        directed_edges = edges.len(),
        "converted edge list"
    );

    write_representations(&settings.output, &reps, settings.format)
        .with_context(|| format!("writing {}", settings.output.display()))?;

    println!(
        "Wrote {} ({} vertices, {} directed edges, {} format)",
        settings.output.display(),
        reps.vertices.len(),
        edges.len(),
        settings.format.name()
    );
    Ok(())
}
