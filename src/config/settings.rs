//! Configuration settings for the Game of Life driver

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub grid: GridConfig,
    pub seed: SeedConfig,
    pub driver: DriverConfig,
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GridConfig {
    pub rows: usize,
    pub columns: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Probability that a cell starts alive
    pub density: f64,
    /// Fixed seed for reproducible runs; entropy when absent
    pub random_seed: Option<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriverConfig {
    pub generations: usize,
    pub tick_interval_ms: u64,
    /// Ask before every generation instead of ticking on a timer
    pub interactive: bool,
    /// Generations to look ahead when classifying patterns
    pub analysis_horizon: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    /// Relative paths in a config file resolve against the file's directory
    pub initial_state_file: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub save_intermediate: bool,
    pub output_directory: PathBuf,
    /// Print grids with block glyphs instead of `1` / `-`
    #[serde(default)]
    pub compact: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
    Visual,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid: GridConfig {
                rows: 32,
                columns: 32,
            },
            seed: SeedConfig {
                density: 0.5,
                random_seed: None,
            },
            driver: DriverConfig {
                generations: 10,
                tick_interval_ms: 100,
                interactive: false,
                analysis_horizon: 256,
            },
            input: InputConfig {
                initial_state_file: None,
            },
            output: OutputConfig {
                format: OutputFormat::Text,
                save_intermediate: false,
                output_directory: PathBuf::from("output/generations"),
                compact: false,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let mut settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        if let Some(base) = path.parent() {
            settings.resolve_relative_paths(base);
        }
        settings.validate()?;
        Ok(settings)
    }

    fn resolve_relative_paths(&mut self, base: &Path) {
        if let Some(ref mut file) = self.input.initial_state_file {
            if file.is_relative() {
                *file = base.join(&*file);
            }
        }
    }

    /// Load settings if the file exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::from_file(path)
        } else {
            log::warn!("config file {} not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &Path) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.grid.rows == 0 || self.grid.columns == 0 {
            anyhow::bail!(
                "Grid dimensions must be positive, got {}x{}",
                self.grid.rows, self.grid.columns
            );
        }

        if !(0.0..=1.0).contains(&self.seed.density) {
            anyhow::bail!("Seed density must be within [0, 1], got {}", self.seed.density);
        }

        if self.driver.tick_interval_ms == 0 {
            anyhow::bail!("Tick interval must be positive");
        }

        if let Some(ref file) = self.input.initial_state_file {
            if !file.exists() {
                anyhow::bail!("Initial state file does not exist: {}", file.display());
            }
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(rows) = cli_overrides.rows {
            self.grid.rows = rows;
        }
        if let Some(columns) = cli_overrides.columns {
            self.grid.columns = columns;
        }
        if let Some(seed) = cli_overrides.seed {
            self.seed.random_seed = Some(seed);
        }
        if let Some(generations) = cli_overrides.generations {
            self.driver.generations = generations;
        }
        if let Some(interval) = cli_overrides.tick_interval_ms {
            self.driver.tick_interval_ms = interval;
        }
        if cli_overrides.interactive {
            self.driver.interactive = true;
        }
        if let Some(ref input) = cli_overrides.input_file {
            self.input.initial_state_file = Some(input.clone());
        }
        if let Some(ref output_dir) = cli_overrides.output_dir {
            self.output.output_directory = output_dir.clone();
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
        if cli_overrides.save {
            self.output.save_intermediate = true;
        }
        if cli_overrides.compact {
            self.output.compact = true;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub rows: Option<usize>,
    pub columns: Option<usize>,
    pub seed: Option<u64>,
    pub generations: Option<usize>,
    pub tick_interval_ms: Option<u64>,
    pub interactive: bool,
    pub input_file: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub save: bool,
    pub compact: bool,
}
