use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, info};

use crate::domain::{CaseInsensitiveSet, Policy};
use crate::error::{ConchError, Result};

/// Name of the configuration file looked up in a repository.
pub const STANDARD_FILENAME: &str = "conch.toml";

/// The only supported configuration format version.
pub const CONFIG_VERSION: u32 = 1;

/// Complete configuration for conch: the commit policy and the exclusion filter.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Config {
    pub policy: Policy,
    pub exclude: Exclude,
}

/// Messages that are skipped before parsing.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Exclude {
    pub prefixes: CaseInsensitiveSet,
}

impl Exclude {
    /// Whether `message` starts with one of the prefixes, ignoring case.
    pub fn is_excluded(&self, message: &str) -> bool {
        if self.prefixes.is_empty() {
            return false;
        }
        let message = message.to_lowercase();
        self.prefixes
            .iter()
            .any(|prefix| message.starts_with(&prefix.to_lowercase()))
    }
}

// On-disk layout. Every table rejects unknown keys and falls back to the
// default policy for keys it leaves out.

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    version: Option<u32>,
    #[serde(default)]
    policy: PolicyTable,
    #[serde(default)]
    exclude: ExcludeTable,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct PolicyTable {
    #[serde(default, rename = "type")]
    r#type: TypeTable,
    #[serde(default)]
    scope: ScopeTable,
    #[serde(default)]
    description: DescriptionTable,
    #[serde(default)]
    footer: FooterTable,
}

fn default_minor_types() -> Vec<String> {
    vec!["feat".to_string()]
}

fn default_patch_types() -> Vec<String> {
    vec!["fix".to_string()]
}

fn default_min_length() -> usize {
    1
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct TypeTable {
    #[serde(default)]
    types: Vec<String>,
    #[serde(default = "default_minor_types")]
    minor: Vec<String>,
    #[serde(default = "default_patch_types")]
    patch: Vec<String>,
}

impl Default for TypeTable {
    fn default() -> Self {
        TypeTable {
            types: Vec::new(),
            minor: default_minor_types(),
            patch: default_patch_types(),
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ScopeTable {
    #[serde(default)]
    required: bool,
    #[serde(default)]
    scopes: Vec<String>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DescriptionTable {
    #[serde(default = "default_min_length")]
    min_length: usize,
    #[serde(default)]
    max_length: usize,
}

impl Default for DescriptionTable {
    fn default() -> Self {
        DescriptionTable {
            min_length: default_min_length(),
            max_length: 0,
        }
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct FooterTable {
    #[serde(default)]
    required_tokens: Vec<String>,
    #[serde(default)]
    tokens: Vec<String>,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
struct ExcludeTable {
    #[serde(default)]
    prefixes: Vec<String>,
}

impl From<ConfigFile> for Config {
    fn from(file: ConfigFile) -> Self {
        let PolicyTable {
            r#type,
            scope,
            description,
            footer,
        } = file.policy;

        Config {
            policy: Policy {
                allowed_types: r#type.types.into_iter().collect(),
                minor_types: r#type.minor.into_iter().collect(),
                patch_types: r#type.patch.into_iter().collect(),
                scope_required: scope.required,
                allowed_scopes: scope.scopes.into_iter().collect(),
                min_length: description.min_length,
                max_length: description.max_length,
                required_tokens: footer.required_tokens.into_iter().collect(),
                allowed_tokens: footer.tokens.into_iter().collect(),
            },
            exclude: Exclude {
                prefixes: file.exclude.prefixes.into_iter().collect(),
            },
        }
    }
}

impl Config {
    /// Decode a configuration file's contents.
    pub fn from_toml_str(contents: &str) -> Result<Config> {
        let file: ConfigFile = toml::from_str(contents)?;
        if file.version != Some(CONFIG_VERSION) {
            return Err(ConchError::config("only version 1 is supported"));
        }
        Ok(file.into())
    }

    /// Read and decode the file at `path`.
    pub fn from_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path)?;
        Config::from_toml_str(&contents)
    }
}

/// Look for `conch.toml` directly inside `dir`.
///
/// # Returns
/// * `Ok(Some(path))` - The file exists
/// * `Ok(None)` - `dir` has no configuration file
/// * `Err` - `dir` does not exist or is not a directory
pub fn discover(dir: &Path) -> Result<Option<PathBuf>> {
    let metadata = fs::metadata(dir)?;
    if !metadata.is_dir() {
        return Err(ConchError::config(format!(
            "location must be a valid directory: {}",
            dir.display()
        )));
    }

    let path = dir.join(STANDARD_FILENAME);
    match fs::metadata(&path) {
        Ok(_) => Ok(Some(path)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `conch.toml` in the repository directory
/// 3. `conch/conch.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
/// * `repo_dir` - Directory searched for a repository-level file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If a file exists but cannot be read or decoded
pub fn load_config(config_path: Option<&Path>, repo_dir: &Path) -> Result<Config> {
    if let Some(path) = config_path {
        info!(path = %path.display(), "loading configuration");
        return Config::from_file(path);
    }

    if let Some(path) = discover(repo_dir)? {
        info!(path = %path.display(), "loading repository configuration");
        return Config::from_file(&path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        let path = config_dir.join("conch").join(STANDARD_FILENAME);
        if path.exists() {
            info!(path = %path.display(), "loading user configuration");
            return Config::from_file(&path);
        }
    }

    debug!("no configuration file found, using defaults");
    Ok(Config::default())
}
