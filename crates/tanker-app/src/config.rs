//! Configuration management for tanker-fleet
//!
//! Config stored at: ~/.config/tanker-fleet/config.json

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::PathBuf;

use tanker_domain::service::{ClassificationRules, DivisionPolicy};
use tanker_types::{ConfigError, Division, OutputFormat, Result};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding trips.json, users.json, deactivated.json, vehicles.toml
    #[serde(default)]
    pub store_dir: Option<PathBuf>,

    /// HTTP bind address
    #[serde(default = "default_bind")]
    pub bind: String,

    /// Emit JSON log lines
    #[serde(default)]
    pub log_json: bool,

    #[serde(default = "default_page_size")]
    pub default_page_size: usize,

    #[serde(default = "default_max_page_size")]
    pub max_page_size: usize,

    /// Division code table
    #[serde(default)]
    pub divisions: DivisionPolicy,

    /// Classifier settings
    #[serde(default)]
    pub classification: ClassificationRules,

    /// Divisions whose users are listed as supervisors during enrichment
    #[serde(default = "default_supervisor_divisions")]
    pub supervisor_divisions: BTreeSet<Division>,

    /// Default output format (json, table)
    #[serde(default)]
    pub output_format: OutputFormat,
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_page_size() -> usize {
    10
}

fn default_max_page_size() -> usize {
    500
}

fn default_supervisor_divisions() -> BTreeSet<Division> {
    (0..4).map(Division).collect()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_dir: None,
            bind: default_bind(),
            log_json: false,
            default_page_size: default_page_size(),
            max_page_size: default_max_page_size(),
            divisions: DivisionPolicy::default(),
            classification: ClassificationRules::default(),
            supervisor_divisions: default_supervisor_divisions(),
            output_format: OutputFormat::default(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or(ConfigError::NotFound)?
            .join("tanker-fleet");
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.json"))
    }

    /// Get the store directory path
    pub fn store_dir(&self) -> Result<PathBuf> {
        if let Some(ref dir) = self.store_dir {
            return Ok(dir.clone());
        }

        let store_dir = dirs::data_dir()
            .ok_or(ConfigError::NotFound)?
            .join("tanker-fleet");
        Ok(store_dir)
    }

    /// Load config from file, or create default
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        if path.exists() {
            let content = std::fs::read_to_string(&path)?;
            Self::from_json(&content)
        } else {
            Ok(Config::default())
        }
    }

    pub fn from_json(content: &str) -> Result<Self> {
        serde_json::from_str(content)
            .map_err(|e| ConfigError::ParseError(e.to_string()).into())
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}

impl std::fmt::Display for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Tanker Fleet Configuration")?;
        writeln!(f, "==========================")?;
        writeln!(f)?;
        writeln!(
            f,
            "Store dir:        {}",
            self.store_dir()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|_| "(error)".to_string())
        )?;
        writeln!(f, "Bind:             {}", self.bind)?;
        writeln!(f, "Log JSON:         {}", self.log_json)?;
        writeln!(
            f,
            "Page size:        {} (max {})",
            self.default_page_size, self.max_page_size
        )?;
        let management: Vec<String> = self.divisions.management.iter().map(|d| d.to_string()).collect();
        writeln!(f, "Management codes: {}", management.join(", "))?;
        for scope in &self.divisions.admin {
            writeln!(f, "Admin code {}:     division {}", scope.code, scope.division)?;
        }
        let excluded: Vec<&str> = self
            .classification
            .outside_standing_excluded
            .iter()
            .map(String::as_str)
            .collect();
        writeln!(f, "Outside standing excludes: {}", excluded.join(", "))?;
        writeln!(f, "Output format:    {}", self.output_format)?;

        if let Ok(path) = Self::config_path() {
            writeln!(f)?;
            writeln!(f, "Config file:      {}", path.display())?;
        }

        Ok(())
    }
}
