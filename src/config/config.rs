use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub genbank: GenbankConfig,
    #[serde(default)]
    pub table: TableConfig,
    #[serde(default)]
    pub gtf: GtfConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenbankConfig {
    #[serde(default = "default_grouped_suffix")]
    pub grouped_suffix: String,
    #[serde(default = "default_single_suffix")]
    pub single_suffix: String,
    #[serde(default = "default_organism")]
    pub organism: String,
    /// Nucleotides added upstream when deriving an extended fragment view
    #[serde(default = "default_left_padding")]
    pub left_padding: u64,
    /// Nucleotides added downstream when deriving an extended fragment view
    #[serde(default = "default_right_padding")]
    pub right_padding: u64,
    #[serde(default = "default_line_width")]
    pub line_width: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableConfig {
    /// Minimum number of fragment column groups in the per-ncRNA table
    #[serde(default = "default_min_fragment_slots")]
    pub min_fragment_slots: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GtfConfig {
    #[serde(default = "default_gtf_source")]
    pub source: String,
    #[serde(default = "default_gtf_feature")]
    pub feature: String,
}

fn default_grouped_suffix() -> String {
    "_grouped.gbk".to_string()
}

fn default_single_suffix() -> String {
    "_single.gbk".to_string()
}

fn default_organism() -> String {
    "Homo sapiens".to_string()
}

fn default_left_padding() -> u64 {
    3
}

fn default_right_padding() -> u64 {
    5
}

fn default_line_width() -> usize {
    60
}

fn default_min_fragment_slots() -> usize {
    25
}

fn default_gtf_source() -> String {
    format!("flaimapper-v{}", env!("CARGO_PKG_VERSION"))
}

fn default_gtf_feature() -> String {
    "sncdRNA".to_string()
}

impl Default for GenbankConfig {
    fn default() -> Self {
        Self {
            grouped_suffix: default_grouped_suffix(),
            single_suffix: default_single_suffix(),
            organism: default_organism(),
            left_padding: default_left_padding(),
            right_padding: default_right_padding(),
            line_width: default_line_width(),
        }
    }
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            min_fragment_slots: default_min_fragment_slots(),
        }
    }
}

impl Default for GtfConfig {
    fn default() -> Self {
        Self {
            source: default_gtf_source(),
            feature: default_gtf_feature(),
        }
    }
}

impl Config {
    /// Load `config.toml` from the user config directory, or defaults when absent/unreadable
    pub fn load() -> Self {
        if let Some(proj_dirs) = ProjectDirs::from("org", "flaimapper", "flaimapper") {
            let config_path = proj_dirs.config_dir().join("config.toml");

            if config_path.exists() {
                match Self::from_path(&config_path) {
                    Ok(config) => return config,
                    Err(e) => log::warn!("Ignoring config {}: {:#}", config_path.display(), e),
                }
            }
        }
        Config::default()
    }

    pub fn from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Invalid config TOML")?;
        if config.genbank.line_width == 0 {
            anyhow::bail!("genbank.line_width must be greater than zero");
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = Config::from_toml("[genbank]\norganism = \"Mus musculus\"\n").unwrap();
        assert_eq!(config.genbank.organism, "Mus musculus");
        assert_eq!(config.genbank.grouped_suffix, "_grouped.gbk");
        assert_eq!(config.genbank.line_width, 60);
        assert_eq!(config.table.min_fragment_slots, 25);
        assert_eq!(config.gtf.feature, "sncdRNA");
        assert!(config.gtf.source.starts_with("flaimapper-v"));
    }

    #[test]
    fn test_zero_line_width_rejected() {
        assert!(Config::from_toml("[genbank]\nline_width = 0\n").is_err());
    }
}
