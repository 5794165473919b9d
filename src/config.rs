use crate::composer::Edge;
use crate::error::MarginError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

pub const DEFAULT_INPUT_PATH: &str = "/opt/gestaudit/public/timbrado.jpg";
pub const DEFAULT_OUTPUT_PATH: &str = "/opt/gestaudit/public/timbrado_with_margin.jpg";

/// 3.5cm at 300 DPI.
pub const DEFAULT_MARGIN_PX: u32 = 413;
pub const DEFAULT_QUALITY: u8 = 95;
pub const WHITE: [u8; 3] = [255, 255, 255];

const CONFIG_DIR_NAME: &str = "LetterheadMargin";
const CONFIG_FILE_NAME: &str = "config.json";

/// Settings for one run. Every field falls back to the built-in default when
/// it is missing from the config file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarginConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub margin: u32,
    pub fill: [u8; 3],
    pub edge: Edge,
    pub quality: u8,
}

impl Default for MarginConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            margin: DEFAULT_MARGIN_PX,
            fill: WHITE,
            edge: Edge::Top,
            quality: DEFAULT_QUALITY,
        }
    }
}

impl MarginConfig {
    /// `<config_dir>/LetterheadMargin/config.json`, or a path relative to the
    /// working directory when the platform has no config dir.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR_NAME)
            .join(CONFIG_FILE_NAME)
    }

    /// Reads the config file at `path`. A missing file yields the defaults;
    /// an unreadable or malformed one is an error.
    pub fn load(path: &Path) -> Result<Self, MarginError> {
        log::debug!("Attempting to load config from: {:?}", path);
        if !path.exists() {
            log::info!("ℹ️ Config file does not exist at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config = serde_json::from_str::<MarginConfig>(&content)?;
        log::info!("✅ Successfully loaded config from {:?}", path);
        Ok(config)
    }
}
