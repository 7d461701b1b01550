use crate::assets::AssetLoader;
use crate::error::{ConfigError, MAX_RESOLUTION};
use pixel_conv::{AlgorithmPreset, BorderMode, DisplayMode, Kernel, PresetTable};
use serde::Deserialize;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Default target grid width
    #[serde(default = "default_resolution")]
    pub resolution: u32,

    /// CSV display mode keyword (rgb, hex, gray)
    #[serde(default = "default_mode")]
    pub mode: String,

    /// Border mode keyword (clamp, pass-through)
    #[serde(default = "default_border")]
    pub border: String,

    /// Preset used when none is requested
    #[serde(default = "default_preset")]
    pub default_preset: String,

    /// Presets added to (or replacing) the built-in table
    #[serde(default)]
    pub presets: Vec<PresetConfig>,
}

fn default_resolution() -> u32 {
    32
}

fn default_mode() -> String {
    DisplayMode::default().as_str().to_string()
}

fn default_border() -> String {
    BorderMode::default().as_str().to_string()
}

fn default_preset() -> String {
    PresetTable::IDENTITY_ID.to_string()
}

/// A preset defined in config.yaml
#[derive(Debug, Deserialize, Clone)]
pub struct PresetConfig {
    pub id: String,

    /// Display name (defaults to the id)
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub formula: String,

    /// Three rows of three weights
    pub kernel: Vec<Vec<f32>>,

    /// Explicit divisor; the weight sum (or 1) when omitted
    #[serde(default)]
    pub divisor: Option<f32>,
}

impl PresetConfig {
    /// Validate and convert into a preset.
    pub fn to_preset(&self) -> Result<AlgorithmPreset, ConfigError> {
        let id = self.id.trim();
        if id.is_empty() {
            return Err(ConfigError::MissingPresetId);
        }
        let kernel =
            Kernel::try_from_rows(&self.kernel, self.divisor).map_err(|source| ConfigError::Preset {
                id: id.to_string(),
                source,
            })?;
        let name = self.name.clone().unwrap_or_else(|| id.to_string());
        Ok(AlgorithmPreset::new(
            id,
            name,
            self.description.clone(),
            self.formula.clone(),
            kernel,
        ))
    }
}

/// Check a target resolution against the accepted range.
pub fn validate_resolution(resolution: u32) -> Result<u32, ConfigError> {
    if (1..=MAX_RESOLUTION).contains(&resolution) {
        Ok(resolution)
    } else {
        Err(ConfigError::InvalidResolution(resolution))
    }
}

/// Parse a custom kernel from nine comma or whitespace separated weights
/// in row-major order, e.g. `"0,-1,0,-1,5,-1,0,-1,0"`.
pub fn parse_kernel(weights: &str, divisor: Option<f32>) -> Result<Kernel, ConfigError> {
    let values = weights
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            token
                .parse::<f32>()
                .map_err(|_| ConfigError::InvalidWeight(token.to_string()))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let rows: Vec<Vec<f32>> = values.chunks(3).map(<[f32]>::to_vec).collect();
    Ok(Kernel::try_from_rows(&rows, divisor)?)
}

impl AppConfig {
    /// Load configuration from AssetLoader (embedded or external)
    pub fn load_from_assets(loader: &AssetLoader) -> Self {
        match loader.read_config_string() {
            Ok(content) => match serde_yaml::from_str(&content) {
                Ok(config) => {
                    let config: Self = config;
                    tracing::info!(
                        resolution = config.resolution,
                        presets = config.presets.len(),
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    /// The configured display mode
    pub fn display_mode(&self) -> Result<DisplayMode, ConfigError> {
        Ok(self.mode.parse::<DisplayMode>()?)
    }

    /// The configured border mode
    pub fn border_mode(&self) -> Result<BorderMode, ConfigError> {
        Ok(self.border.parse::<BorderMode>()?)
    }

    /// The configured default resolution, validated
    pub fn target_resolution(&self) -> Result<u32, ConfigError> {
        validate_resolution(self.resolution)
    }

    /// Build the immutable preset table: built-ins plus configured presets.
    pub fn preset_table(&self) -> Result<PresetTable, ConfigError> {
        let extra = self
            .presets
            .iter()
            .map(PresetConfig::to_preset)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(PresetTable::builtin().with_presets(extra))
    }

    /// Look up the default preset in `table`.
    pub fn initial_preset<'a>(
        &self,
        table: &'a PresetTable,
    ) -> Result<&'a AlgorithmPreset, ConfigError> {
        table
            .get(&self.default_preset)
            .ok_or_else(|| ConfigError::UnknownPreset(self.default_preset.clone()))
    }

    /// Check every setting at once.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.target_resolution()?;
        self.display_mode()?;
        self.border_mode()?;
        let table = self.preset_table()?;
        self.initial_preset(&table)?;
        Ok(())
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            resolution: default_resolution(),
            mode: default_mode(),
            border: default_border(),
            default_preset: default_preset(),
            presets: Vec::new(),
        }
    }
}
