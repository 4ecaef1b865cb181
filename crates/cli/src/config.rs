//! Configuration discovery, parsing and validation.
//!
//! An `acmatch.toml` is taken from `-C`/`ACMATCH_CONFIG`, or from the nearest
//! ancestor of the working directory that has one, without leaving the git
//! root. Unknown keys warn instead of failing.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};
use crate::output::OutputFormat;
use crate::trie::DuplicatePolicy;

/// Config file name looked up during discovery.
pub const CONFIG_FILE_NAME: &str = "acmatch.toml";

/// Raw config that keeps sections as tables so unknown keys can be reported.
#[derive(Deserialize)]
struct FlexibleConfig {
    version: Option<i64>,

    #[serde(default)]
    patterns: Option<toml::Table>,

    #[serde(default)]
    output: Option<toml::Table>,

    #[serde(flatten)]
    unknown: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Dictionary sources.
    #[serde(default)]
    pub patterns: PatternsConfig,

    /// Output defaults.
    #[serde(default)]
    pub output: OutputConfig,
}

/// Where patterns come from and how duplicates resolve.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct PatternsConfig {
    /// Inline patterns.
    #[serde(default)]
    pub words: Vec<String>,

    /// Pattern files, one pattern per line. Relative to the config file.
    #[serde(default)]
    pub files: Vec<PathBuf>,

    /// Index kept for duplicate patterns: "last" (default) or "first".
    #[serde(default)]
    pub duplicates: DuplicatePolicy,
}

/// Output configuration.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct OutputConfig {
    /// Default output format when `-o` is not given.
    pub format: Option<OutputFormat>,
}

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "patterns", "output"];

/// Known `[patterns]` keys.
const KNOWN_PATTERNS_KEYS: &[&str] = &["words", "files", "duplicates"];

/// Known `[output]` keys.
const KNOWN_OUTPUT_KEYS: &[&str] = &["format"];

/// A located config file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    /// The config file itself.
    pub path: PathBuf,
    /// Directory that relative paths inside the config resolve against.
    pub base: PathBuf,
}

impl ConfigSource {
    /// A config at a known path.
    pub fn at(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let base = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Self { path, base }
    }

    /// Locate the config for a run.
    ///
    /// An explicit path must name an existing file. Without one, the nearest
    /// `acmatch.toml` from `cwd` upward is used; the search ends at the first
    /// directory holding `.git`.
    pub fn locate(explicit: Option<&Path>, cwd: &Path) -> Result<Option<Self>> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(Error::Config {
                    message: format!("config file not found: {}", path.display()),
                    path: Some(path.to_path_buf()),
                });
            }
            return Ok(Some(Self::at(path)));
        }

        for dir in cwd.ancestors() {
            let candidate = dir.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                return Ok(Some(Self::at(candidate)));
            }
            if dir.join(".git").exists() {
                break;
            }
        }
        Ok(None)
    }

    /// Read and parse the file, rebasing pattern files onto [`Self::base`].
    pub fn load(&self) -> Result<Config> {
        let content = std::fs::read_to_string(&self.path).map_err(|e| Error::Io {
            path: self.path.clone(),
            source: e,
        })?;
        let mut config = parse(&content, &self.path)?;
        for file in &mut config.patterns.files {
            if file.is_relative() {
                *file = self.base.join(&*file);
            }
        }
        Ok(config)
    }
}

/// Find and load the config for a run, falling back to defaults.
pub fn resolve(explicit: Option<&Path>, cwd: &Path) -> Result<Config> {
    match ConfigSource::locate(explicit, cwd)? {
        Some(source) => {
            tracing::debug!("loading config from {}", source.path.display());
            source.load()
        }
        None => {
            tracing::debug!("no config found, using defaults");
            Ok(Config::default())
        }
    }
}

/// Parse config content. `path` is used for diagnostics only.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    let flexible: FlexibleConfig = toml::from_str(content).map_err(|e| config_error(e, path))?;
    let version = flexible.version.ok_or_else(|| Error::Config {
        message: "missing required field: version".to_string(),
        path: Some(path.to_path_buf()),
    })?;
    check_version(version, path)?;

    for key in flexible.unknown.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, key);
        }
    }

    let patterns: PatternsConfig = section(flexible.patterns, "patterns", KNOWN_PATTERNS_KEYS, path)?;
    let output: OutputConfig = section(flexible.output, "output", KNOWN_OUTPUT_KEYS, path)?;

    Ok(Config {
        version,
        patterns,
        output,
    })
}

/// Deserialize one table, warning about keys it does not know.
fn section<T>(table: Option<toml::Table>, name: &str, known: &[&str], path: &Path) -> Result<T>
where
    T: DeserializeOwned + Default,
{
    let Some(table) = table else {
        return Ok(T::default());
    };

    for key in table.keys() {
        if !known.contains(&key.as_str()) {
            warn_unknown_key(path, &format!("{}.{}", name, key));
        }
    }

    toml::Value::Table(table)
        .try_into()
        .map_err(|e| Error::Config {
            message: format!("[{}]: {}", name, e),
            path: Some(path.to_path_buf()),
        })
}

fn check_version(version: i64, path: &Path) -> Result<()> {
    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }
    Ok(())
}

fn config_error(err: toml::de::Error, path: &Path) -> Error {
    Error::Config {
        message: err.to_string(),
        path: Some(path.to_path_buf()),
    }
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "acmatch: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
