use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Resolve the configuration file path based on priority:
/// 1. Explicit path (with tilde expansion)
/// 2. RTSTAT_CONFIG environment variable (with tilde expansion)
/// 3. XDG config directory (recommended default)
/// 4. ~/.rtstat/config.toml (fallback for systems without XDG)
pub fn resolve_config_path(explicit_path: Option<&Path>) -> Result<PathBuf> {
    // Priority 1: Explicit path
    if let Some(path) = explicit_path {
        return Ok(expand_tilde(&path.to_string_lossy()));
    }

    // Priority 2: RTSTAT_CONFIG environment variable
    if let Ok(env_path) = std::env::var("RTSTAT_CONFIG") {
        return Ok(expand_tilde(&env_path));
    }

    // Priority 3: XDG config directory
    if let Some(config_dir) = dirs::config_dir() {
        return Ok(config_dir.join("rtstat").join("config.toml"));
    }

    // Priority 4: ~/.rtstat
    if let Some(home) = std::env::var_os("HOME") {
        return Ok(PathBuf::from(home).join(".rtstat").join("config.toml"));
    }

    bail!("Could not determine configuration path: no HOME directory or XDG config directory found")
}

/// Expand tilde (~) in paths to the user's home directory
fn expand_tilde(path: &str) -> PathBuf {
    if let Some(stripped) = path.strip_prefix("~/")
        && let Some(home) = std::env::var_os("HOME")
    {
        return PathBuf::from(home).join(stripped);
    }
    PathBuf::from(path)
}

/// Defaults the front end hands to the engine as plain parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory scanned by `participants` when none is given
    pub data_dir: PathBuf,
    /// Extension appended to report paths that have none
    pub output_extension: String,
    /// Echo the rendered report to stdout after writing it
    pub include_summary: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            output_extension: "txt".to_string(),
            include_summary: false,
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Report destination with `output_extension` applied when `path` has no extension
    pub fn report_path(&self, path: &Path) -> PathBuf {
        let extension = self.output_extension.trim_start_matches('.');
        if path.extension().is_some() || extension.is_empty() {
            return path.to_path_buf();
        }
        path.with_extension(extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.data_dir, PathBuf::from("data"));
        assert_eq!(config.output_extension, "txt");
        assert!(!config.include_summary);
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nested").join("config.toml");

        let config = Config {
            data_dir: PathBuf::from("/experiments/sessions"),
            output_extension: "report".to_string(),
            include_summary: true,
        };

        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded, config);

        Ok(())
    }

    #[test]
    fn test_partial_config_uses_defaults() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "include_summary = true\n")?;

        let config = Config::load_from(&config_path)?;
        assert!(config.include_summary);
        assert_eq!(config.output_extension, "txt");
        assert_eq!(config.data_dir, PathBuf::from("data"));

        Ok(())
    }

    #[test]
    fn test_malformed_config_is_error() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "include_summary = \"maybe\"\n")?;

        assert!(Config::load_from(&config_path).is_err());
        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config, Config::default());

        Ok(())
    }

    #[test]
    fn test_report_path_extension() {
        let config = Config::default();
        assert_eq!(
            config.report_path(Path::new("out/p001")),
            PathBuf::from("out/p001.txt")
        );
        assert_eq!(
            config.report_path(Path::new("out/p001.md")),
            PathBuf::from("out/p001.md")
        );

        let dotted = Config {
            output_extension: ".log".to_string(),
            ..Config::default()
        };
        assert_eq!(
            dotted.report_path(Path::new("p001")),
            PathBuf::from("p001.log")
        );
    }

    #[test]
    fn test_explicit_config_path_wins() -> Result<()> {
        let path = resolve_config_path(Some(Path::new("/etc/rtstat.toml")))?;
        assert_eq!(path, PathBuf::from("/etc/rtstat.toml"));
        Ok(())
    }
}
