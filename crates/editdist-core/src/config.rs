use etcetera::BaseStrategy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::error::{Error, Result};
use crate::limits::{InputLimit, MatrixLimit};

/// Environment variable pointing directly at a config file.
pub const CONFIG_ENV: &str = "EDITDIST_CONFIG";

const CONFIG_DIR_NAME: &str = ".editdist";

/// Try both `.yaml` and `.yml` extensions in a directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    let yaml = dir.join("config.yaml");
    if yaml.exists() {
        return Some(yaml);
    }
    let yml = dir.join("config.yml");
    if yml.exists() {
        return Some(yml);
    }
    None
}

/// Configuration loaded from YAML.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path this config was loaded from.
    #[serde(skip)]
    pub path: Option<String>,

    /// Longest accepted input in code points (0 = unlimited).
    pub max_input_chars: usize,

    /// Largest full distance matrix `--matrix` may build (0 = unlimited).
    pub max_matrix_cells: usize,

    pub suggest: SuggestConfig,

    pub batch: BatchConfig,
}

/// Defaults for the did-you-mean search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestConfig {
    /// Fixed threshold. When unset it adapts to the query length.
    pub max_distance: Option<usize>,
    /// Maximum number of suggestions returned (0 = all).
    pub limit: usize,
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            max_distance: None,
            limit: 5,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchConfig {
    /// Worker threads (0 = rayon default).
    pub threads: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            path: None,
            max_input_chars: 100_000,
            max_matrix_cells: 1_000_000,
            suggest: SuggestConfig::default(),
            batch: BatchConfig::default(),
        }
    }
}

impl Config {
    /// Load a config file, failing on I/O or parse errors.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config =
            serde_yaml::from_str::<Config>(&content).map_err(|source| Error::ConfigParse {
                path: path.to_path_buf(),
                source,
            })?;
        config.path = Some(path.display().to_string());
        Ok(config)
    }

    /// Discover and load the effective config.
    ///
    /// Resolution order:
    /// 1. `EDITDIST_CONFIG` pointing at a file
    /// 2. `.editdist/config.yaml` walking up from `cwd`, stopping at a `.git` boundary
    /// 3. user-level `editdist/config.yaml` in the platform config directory
    /// 4. built-in defaults
    ///
    /// A file that cannot be read or parsed is reported and replaced by the defaults.
    pub fn discover(cwd: Option<&str>) -> Self {
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            let path = path.trim();
            if !path.is_empty() {
                return Self::load_or_default(Path::new(path));
            }
        }

        if let Some(path) = discover_config_path(cwd) {
            return Self::load_or_default(&path);
        }

        if let Some(path) = user_config_path() {
            return Self::load_or_default(&path);
        }

        debug!("no config file found, using built-in defaults");
        Config::default()
    }

    fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => {
                debug!(path = %path.display(), "loaded config");
                config
            }
            Err(e) => {
                warn!("{e}; using built-in defaults");
                Config::default()
            }
        }
    }

    pub fn input_limit(&self) -> InputLimit {
        InputLimit::new(self.max_input_chars)
    }

    pub fn matrix_limit(&self) -> MatrixLimit {
        MatrixLimit::new(self.max_matrix_cells)
    }
}

/// Discover config path by walking up from cwd to .git boundary.
fn discover_config_path(cwd: Option<&str>) -> Option<PathBuf> {
    let start = cwd
        .map(PathBuf::from)
        .or_else(|| std::env::current_dir().ok())?;

    let mut current = start.as_path();
    loop {
        if let Some(candidate) = find_config_in_dir(&current.join(CONFIG_DIR_NAME)) {
            return Some(candidate);
        }

        // Directory or file (worktrees)
        if current.join(".git").exists() {
            return None;
        }

        match current.parent() {
            Some(parent) if parent != current => current = parent,
            _ => break,
        }
    }

    None
}

fn user_config_path() -> Option<PathBuf> {
    find_config_in_dir(&config_dir()?)
}

/// Get the user-level editdist config directory.
pub fn config_dir() -> Option<PathBuf> {
    let base = etcetera::choose_base_strategy().ok()?;
    Some(base.config_dir().join("editdist"))
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Serializes tests that touch `EDITDIST_CONFIG`.
    static ENV_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

    fn write_config(dir: &Path, name: &str, yaml: &str) -> PathBuf {
        let config_dir = dir.join(CONFIG_DIR_NAME);
        std::fs::create_dir_all(&config_dir).unwrap();
        let path = config_dir.join(name);
        std::fs::write(&path, yaml).unwrap();
        path
    }

    #[test]
    fn defaults() {
        let config = Config::default();
        assert_eq!(config.max_input_chars, 100_000);
        assert_eq!(config.suggest.limit, 5);
        assert_eq!(config.suggest.max_distance, None);
        assert_eq!(config.batch.threads, 0);
        assert_eq!(config.input_limit(), InputLimit::new(100_000));
        assert_eq!(config.matrix_limit(), MatrixLimit::new(1_000_000));
    }

    #[test]
    fn partial_yaml_keeps_defaults() {
        let config: Config = serde_yaml::from_str("suggest:\n  max_distance: 3\n").unwrap();
        assert_eq!(config.suggest.max_distance, Some(3));
        assert_eq!(config.suggest.limit, 5);
        assert_eq!(config.max_input_chars, 100_000);
    }

    #[test]
    fn load_records_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "config.yaml", "max_input_chars: 10\n");
        let config = Config::load(&path).unwrap();
        assert_eq!(config.max_input_chars, 10);
        assert_eq!(config.path.as_deref(), Some(path.display().to_string().as_str()));
    }

    #[test]
    fn load_missing_file_is_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(&dir.path().join("nope.yaml")).unwrap_err();
        assert!(matches!(err, Error::ConfigRead { .. }));
    }

    #[test]
    fn load_invalid_yaml_is_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_config(dir.path(), "config.yaml", "max_input_chars: [1, 2\n");
        let err = Config::load(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigParse { .. }));
    }

    #[test]
    fn discover_walks_up_to_config() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
        std::env::remove_var(CONFIG_ENV);

        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        write_config(dir.path(), "config.yml", "batch:\n  threads: 2\n");
        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let config = Config::discover(nested.to_str());
        assert_eq!(config.batch.threads, 2);
        assert!(config.path.unwrap().ends_with("config.yml"));
    }

    #[test]
    fn discover_stops_at_git_boundary() {
        let dir = tempfile::tempdir().unwrap();
        write_config(dir.path(), "config.yaml", "max_input_chars: 1\n");
        let repo = dir.path().join("repo");
        std::fs::create_dir_all(repo.join(".git")).unwrap();

        assert_eq!(discover_config_path(repo.to_str()), None);
    }

    #[test]
    fn discover_prefers_env_var() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        write_config(dir.path(), "config.yaml", "max_input_chars: 1\n");
        let explicit = dir.path().join("explicit.yaml");
        std::fs::write(&explicit, "max_input_chars: 42\n").unwrap();

        std::env::set_var(CONFIG_ENV, &explicit);
        let config = Config::discover(dir.path().to_str());
        std::env::remove_var(CONFIG_ENV);

        assert_eq!(config.max_input_chars, 42);
    }

    #[test]
    fn discover_falls_back_on_invalid_file() {
        let _guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());

        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.yaml");
        std::fs::write(&broken, "suggest: [\n").unwrap();

        std::env::set_var(CONFIG_ENV, &broken);
        let config = Config::discover(dir.path().to_str());
        std::env::remove_var(CONFIG_ENV);

        assert_eq!(config, Config::default());
    }
}
