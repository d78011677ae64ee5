//! YAML configuration file and command-line overrides

use std::path::Path;

use rebalance_core::AnalysisConfig;

/// Errors reading the configuration file
#[derive(Debug)]
pub enum ConfigFileError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigFileError::Io(msg) => write!(f, "IO error: {}", msg),
            ConfigFileError::Parse(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for ConfigFileError {}

pub fn parse_config(yaml: &str) -> Result<AnalysisConfig, ConfigFileError> {
    serde_saphyr::from_str(yaml).map_err(|e| ConfigFileError::Parse(e.to_string()))
}

/// Load the configuration file, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<AnalysisConfig, ConfigFileError> {
    let Some(path) = path else {
        tracing::debug!("no config file, using defaults");
        return Ok(AnalysisConfig::default());
    };

    let content = std::fs::read_to_string(path)
        .map_err(|e| ConfigFileError::Io(format!("Failed to read {}: {}", path.display(), e)))?;
    let config = parse_config(&content)
        .map_err(|e| ConfigFileError::Parse(format!("{}: {}", path.display(), e)))?;
    tracing::info!(path = %path.display(), "loaded config");
    Ok(config)
}

pub fn to_yaml(config: &AnalysisConfig) -> Result<String, ConfigFileError> {
    serde_saphyr::to_string(config).map_err(|e| ConfigFileError::Parse(e.to_string()))
}

/// Values given on the command line; `None` keeps the file's value
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub seed: Option<u64>,
    pub simulations: Option<usize>,
    pub years: Option<usize>,
}

impl Overrides {
    pub fn apply(&self, config: &mut AnalysisConfig) {
        let mc = &mut config.monte_carlo;
        if let Some(seed) = self.seed {
            mc.seed = Some(seed);
        }
        if let Some(n) = self.simulations {
            mc.n_simulations = n;
        }
        if let Some(years) = self.years {
            mc.years = years;
        }
    }
}
