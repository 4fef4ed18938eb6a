use anyhow::Context;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use urania::{EngineSettings, ReferenceData};

/// Searched in order when no explicit path is given.
pub const DEFAULT_CONFIG_PATHS: [&str; 2] = ["configs/urania.toml", "../../configs/urania.toml"];

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UraniaConfig {
    pub engine: EngineSettings,
    /// Reference table override, resolved against the config file's directory.
    pub reference_data: Option<PathBuf>,
    /// File the settings were read from, if any.
    pub source: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
struct UraniaToml {
    reference_data: Option<PathBuf>,
    engine: EngineSettings,
}

/// Read the config file text. An explicit path must exist; when none is given
/// the default locations are tried and `None` means none was found.
pub fn read_config_text(explicit: Option<&Path>) -> anyhow::Result<Option<(PathBuf, String)>> {
    if let Some(path) = explicit {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Could not read config file {}", path.display()))?;
        return Ok(Some((path.to_path_buf(), text)));
    }
    for p in &DEFAULT_CONFIG_PATHS {
        if let Ok(text) = fs::read_to_string(p) {
            return Ok(Some((PathBuf::from(p), text)));
        }
    }
    Ok(None)
}

pub fn parse_config(text: &str) -> anyhow::Result<UraniaConfig> {
    let raw: UraniaToml = toml::from_str(text).context("Failed to parse urania config")?;
    Ok(UraniaConfig {
        engine: raw.engine,
        reference_data: raw.reference_data,
        source: None,
    })
}

pub fn load_config(explicit: Option<&Path>) -> anyhow::Result<UraniaConfig> {
    match read_config_text(explicit)? {
        Some((path, text)) => {
            let mut config = parse_config(&text)
                .with_context(|| format!("Invalid config file {}", path.display()))?;
            log::info!("Loaded config from {}", path.display());
            config.source = Some(path);
            Ok(config)
        }
        None => {
            log::debug!("No config file found in {:?}, using defaults", DEFAULT_CONFIG_PATHS);
            Ok(UraniaConfig::default())
        }
    }
}

impl UraniaConfig {
    /// Reference override path, relative paths taken from the config file's directory.
    pub fn reference_data_path(&self) -> Option<PathBuf> {
        let path = self.reference_data.as_ref()?;
        if path.is_absolute() {
            return Some(path.clone());
        }
        let base = self
            .source
            .as_ref()
            .and_then(|s| s.parent())
            .unwrap_or_else(|| Path::new(""));
        Some(base.join(path))
    }
}

/// The override tables if configured, otherwise the embedded ones.
pub fn load_reference_data(config: &UraniaConfig) -> anyhow::Result<ReferenceData> {
    match config.reference_data_path() {
        Some(path) => ReferenceData::load(&path)
            .with_context(|| format!("Could not load reference data override {}", path.display())),
        None => ReferenceData::embedded().context("Embedded reference data is invalid"),
    }
}
