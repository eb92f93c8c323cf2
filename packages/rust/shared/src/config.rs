//! Application configuration for vstheme.
//!
//! User config lives at `~/.vstheme/vstheme.toml`.
//! CLI flags override config file values, which override defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Result, VsthemeError};

/// Default configuration file name.
const CONFIG_FILE_NAME: &str = "vstheme.toml";

/// Default config directory name under the user's home.
const CONFIG_DIR_NAME: &str = ".vstheme";

// ---------------------------------------------------------------------------
// Config structs (matching vstheme.toml schema)
// ---------------------------------------------------------------------------

/// Top-level application config, deserialized from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Input and output locations.
    #[serde(default)]
    pub paths: PathsConfig,

    /// Console preview settings.
    #[serde(default)]
    pub preview: PreviewConfig,
}

/// `[paths]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Markdown document holding the bullet-key documentation.
    #[serde(default = "default_markdown")]
    pub markdown: String,

    /// JSON theme definition holding the color values.
    #[serde(default = "default_colors")]
    pub colors: String,

    /// Where the merged JSON is written.
    #[serde(default = "default_output")]
    pub output: String,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            markdown: default_markdown(),
            colors: default_colors(),
            output: default_output(),
        }
    }
}

fn default_markdown() -> String {
    "docs/doc.md".into()
}
fn default_colors() -> String {
    "themes/maple-material-light-color-theme.json".into()
}
fn default_output() -> String {
    "colors_with_docs.json".into()
}

/// `[preview]` section.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PreviewConfig {
    /// Number of table rows printed after an export.
    #[serde(default = "default_rows")]
    pub rows: usize,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
        }
    }
}

fn default_rows() -> usize {
    5
}

// ---------------------------------------------------------------------------
// Export config (runtime, merged from config + CLI flags)
// ---------------------------------------------------------------------------

/// Runtime export configuration: the three files one pipeline run touches.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// Markdown documentation input.
    pub markdown_path: PathBuf,
    /// JSON color definitions input.
    pub colors_path: PathBuf,
    /// Merged JSON output.
    pub output_path: PathBuf,
}

impl From<&AppConfig> for ExportConfig {
    fn from(config: &AppConfig) -> Self {
        Self {
            markdown_path: PathBuf::from(&config.paths.markdown),
            colors_path: PathBuf::from(&config.paths.colors),
            output_path: PathBuf::from(&config.paths.output),
        }
    }
}

// ---------------------------------------------------------------------------
// Config loading
// ---------------------------------------------------------------------------

/// Get the path to the config directory (`~/.vstheme/`).
pub fn config_dir() -> Result<PathBuf> {
    let home =
        dirs::home_dir().ok_or_else(|| VsthemeError::config("could not determine home directory"))?;
    Ok(home.join(CONFIG_DIR_NAME))
}

/// Get the path to the config file (`~/.vstheme/vstheme.toml`).
pub fn config_file_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CONFIG_FILE_NAME))
}

/// Load the application config from disk. Returns defaults if the file does not exist.
pub fn load_config() -> Result<AppConfig> {
    let path = config_file_path()?;

    if !path.exists() {
        tracing::debug!(?path, "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    load_config_from(&path)
}

/// Load the application config from a specific file path.
pub fn load_config_from(path: &Path) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path).map_err(|e| VsthemeError::io(path, e))?;

    toml::from_str(&content)
        .map_err(|e| VsthemeError::config(format!("failed to parse {}: {e}", path.display())))
}

/// Create the config directory and write a default config file.
/// Returns the path to the created file.
pub fn init_config() -> Result<PathBuf> {
    let dir = config_dir()?;
    std::fs::create_dir_all(&dir).map_err(|e| VsthemeError::io(&dir, e))?;

    let path = dir.join(CONFIG_FILE_NAME);
    let content = toml::to_string_pretty(&AppConfig::default())
        .map_err(|e| VsthemeError::config(e.to_string()))?;

    std::fs::write(&path, content).map_err(|e| VsthemeError::io(&path, e))?;
    tracing::info!(?path, "created default config file");

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_serializes() {
        let toml_str = toml::to_string_pretty(&AppConfig::default()).expect("serialize default");
        assert!(toml_str.contains("[paths]"));
        assert!(toml_str.contains("docs/doc.md"));
        assert!(toml_str.contains("rows = 5"));
    }

    #[test]
    fn config_roundtrip() {
        let toml_str = toml::to_string_pretty(&AppConfig::default()).expect("serialize");
        let parsed: AppConfig = toml::from_str(&toml_str).expect("deserialize");
        assert_eq!(parsed.paths.output, "colors_with_docs.json");
        assert_eq!(parsed.preview.rows, 5);
    }

    #[test]
    fn partial_config_fills_defaults() {
        let toml_str = r#"
[paths]
colors = "themes/dark.json"
"#;
        let config: AppConfig = toml::from_str(toml_str).expect("parse");
        assert_eq!(config.paths.colors, "themes/dark.json");
        assert_eq!(config.paths.markdown, "docs/doc.md");
        assert_eq!(config.preview.rows, 5);
    }

    #[test]
    fn export_config_from_app_config() {
        let export = ExportConfig::from(&AppConfig::default());
        assert_eq!(export.markdown_path, PathBuf::from("docs/doc.md"));
        assert_eq!(
            export.colors_path,
            PathBuf::from("themes/maple-material-light-color-theme.json")
        );
        assert_eq!(export.output_path, PathBuf::from("colors_with_docs.json"));
    }

    #[test]
    fn load_config_from_reports_bad_toml() {
        let dir = tempfile::TempDir::new().expect("tempdir");
        let path = dir.path().join("vstheme.toml");
        std::fs::write(&path, "[paths\nmarkdown = 1").expect("write");

        let err = load_config_from(&path).unwrap_err();
        assert!(matches!(err, VsthemeError::Config { .. }));
        assert!(err.to_string().contains("failed to parse"));
    }

    #[test]
    fn load_config_from_missing_file_is_io() {
        let err = load_config_from(Path::new("/nonexistent/vstheme.toml")).unwrap_err();
        assert!(matches!(err, VsthemeError::Io { .. }));
    }
}
