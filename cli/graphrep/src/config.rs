//! `graphrep.toml` configuration and run-setting resolution.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use graphrep_core::{OutputFormat, VertexOrder};
use serde::{Deserialize, Serialize};

/// Input file read when neither the command line nor the config names one.
pub const DEFAULT_INPUT: &str = "testFileGraph.txt";
/// Output file written when neither the command line nor the config names one.
pub const DEFAULT_OUTPUT: &str = "graphRepresentations.txt";

const CONFIG_FILE: &str = "graphrep.toml";

/// The top-level configuration file structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GraphrepConfig {
    /// Input/output settings.
    #[serde(default)]
    pub io: IoConfig,
    /// Vertex enumeration settings.
    #[serde(default)]
    pub vertices: VerticesConfig,
}

/// `[io]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct IoConfig {
    /// Edge-list file, relative to the config file's directory.
    #[serde(default)]
    pub input: Option<String>,
    /// Output file, relative to the config file's directory.
    #[serde(default)]
    pub output: Option<String>,
    /// Output format (text, json).
    #[serde(default)]
    pub format: Option<String>,
}

/// `[vertices]` section.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VerticesConfig {
    /// Vertex order (first-seen, sorted).
    #[serde(default)]
    pub order: Option<String>,
}

impl GraphrepConfig {
    /// Search upward from `start_dir` for a `graphrep.toml` file, parse and
    /// return it along with the directory it was found in.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(CONFIG_FILE);
            if candidate.is_file() {
                let content = std::fs::read_to_string(&candidate)
                    .with_context(|| format!("reading {}", candidate.display()))?;
                let config: GraphrepConfig = toml::from_str(&content)
                    .with_context(|| format!("parsing {}", candidate.display()))?;
                return Ok(Some((config, dir)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Parse a config from a TOML string.
    #[cfg(test)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("parsing graphrep.toml")
    }
}

/// Values given on the command line; `None` means "not given".
#[derive(Debug, Clone, Default)]
pub struct Overrides<'a> {
    pub input: Option<&'a str>,
    pub output: Option<&'a str>,
    pub format: Option<&'a str>,
    pub order: Option<&'a str>,
}

/// Fully resolved settings for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: OutputFormat,
    pub order: VertexOrder,
}

impl Settings {
    /// Merge command-line overrides, the config file (if any), and defaults.
    ///
    /// Command-line paths resolve against `cwd`, config paths against the
    /// directory holding the config, defaults against `cwd`.
    pub fn resolve(
        cwd: &Path,
        overrides: &Overrides<'_>,
        config: Option<(&GraphrepConfig, &Path)>,
    ) -> Result<Self> {
        let input = pick_path(
            cwd,
            overrides.input,
            config.and_then(|(c, dir)| c.io.input.as_deref().map(|p| (p, dir))),
            DEFAULT_INPUT,
        );
        let output = pick_path(
            cwd,
            overrides.output,
            config.and_then(|(c, dir)| c.io.output.as_deref().map(|p| (p, dir))),
            DEFAULT_OUTPUT,
        );

        let format = match overrides
            .format
            .or_else(|| config.and_then(|(c, _)| c.io.format.as_deref()))
        {
            Some(name) => OutputFormat::parse(name)?,
            None => OutputFormat::default(),
        };
        let order = match overrides
            .order
            .or_else(|| config.and_then(|(c, _)| c.vertices.order.as_deref()))
        {
            Some(name) => VertexOrder::parse(name)?,
            None => VertexOrder::default(),
        };

        Ok(Self {
            input,
            output,
            format,
            order,
        })
    }
}

fn pick_path(
    cwd: &Path,
    cli: Option<&str>,
    from_config: Option<(&str, &Path)>,
    default: &str,
) -> PathBuf {
    match (cli, from_config) {
        (Some(p), _) => cwd.join(p),
        (None, Some((p, dir))) => dir.join(p),
        (None, None) => cwd.join(default),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[io]
input = "data/edges.txt"
output = "out/graph.json"
format = "json"

[vertices]
order = "sorted"
"#;
        let config = GraphrepConfig::from_str(toml_str).unwrap();
        assert_eq!(config.io.input.as_deref(), Some("data/edges.txt"));
        assert_eq!(config.io.output.as_deref(), Some("out/graph.json"));
        assert_eq!(config.io.format.as_deref(), Some("json"));
        assert_eq!(config.vertices.order.as_deref(), Some("sorted"));
    }

    #[test]
    fn parse_empty_config() {
        let config = GraphrepConfig::from_str("").unwrap();
        assert!(config.io.input.is_none());
        assert!(config.vertices.order.is_none());
    }

    #[test]
    fn reject_invalid_toml() {
        let bad = "this is not valid toml [[[";
        assert!(GraphrepConfig::from_str(bad).is_err());
    }

    #[test]
    fn defaults_without_config() {
        let cwd = Path::new("/work");
        let settings = Settings::resolve(cwd, &Overrides::default(), None).unwrap();
        assert_eq!(settings.input, cwd.join(DEFAULT_INPUT));
        assert_eq!(settings.output, cwd.join(DEFAULT_OUTPUT));
        assert_eq!(settings.format, OutputFormat::Text);
        assert_eq!(settings.order, VertexOrder::FirstSeen);
    }

    #[test]
    fn config_paths_resolve_against_config_dir() {
        let config = GraphrepConfig::from_str(
            "[io]\ninput = \"edges.txt\"\nformat = \"json\"\n[vertices]\norder = \"sorted\"\n",
        )
        .unwrap();
        let cwd = Path::new("/work/sub");
        let cfg_dir = Path::new("/work");
        let settings =
            Settings::resolve(cwd, &Overrides::default(), Some((&config, cfg_dir))).unwrap();
        assert_eq!(settings.input, cfg_dir.join("edges.txt"));
        assert_eq!(settings.output, cwd.join(DEFAULT_OUTPUT));
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.order, VertexOrder::Sorted);
    }

    #[test]
    fn command_line_overrides_config() {
        let config = GraphrepConfig::from_str(
            "[io]\ninput = \"edges.txt\"\noutput = \"o.json\"\nformat = \"json\"\n",
        )
        .unwrap();
        let cwd = Path::new("/work");
        let overrides = Overrides {
            input: Some("other.txt"),
            output: None,
            format: Some("text"),
            order: Some("sorted"),
        };
        let settings =
            Settings::resolve(cwd, &overrides, Some((&config, Path::new("/cfg")))).unwrap();
        assert_eq!(settings.input, cwd.join("other.txt"));
        assert_eq!(settings.output, Path::new("/cfg").join("o.json"));
        assert_eq!(settings.format, OutputFormat::Text);
        assert_eq!(settings.order, VertexOrder::Sorted);
    }

    #[test]
    fn unknown_format_rejected() {
        let overrides = Overrides {
            format: Some("xml"),
            ..Overrides::default()
        };
        assert!(Settings::resolve(Path::new("/w"), &overrides, None).is_err());
    }

    #[test]
    fn find_and_load_in_current_dir() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[io]\nformat = \"json\"\n").unwrap();

        let result = GraphrepConfig::find_and_load(dir.path()).unwrap();
        let (config, found_dir) = result.unwrap();
        assert_eq!(config.io.format.as_deref(), Some("json"));
        assert_eq!(found_dir, dir.path());
    }

    #[test]
    fn find_and_load_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[vertices]\norder = \"sorted\"\n").unwrap();

        let nested = dir.path().join("a").join("b").join("c");
        std::fs::create_dir_all(&nested).unwrap();

        let (config, found_dir) = GraphrepConfig::find_and_load(&nested).unwrap().unwrap();
        assert_eq!(config.vertices.order.as_deref(), Some("sorted"));
        assert_eq!(found_dir, dir.path());
    }

    #[test]
    fn find_and_load_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[io\n").unwrap();
        assert!(GraphrepConfig::find_and_load(dir.path()).is_err());
    }
}
