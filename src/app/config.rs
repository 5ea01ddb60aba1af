//! Loads the optional `basebounties.toml` configuration file.

use std::path::Path;

use serde::Deserialize;

use crate::domain::{AnalysisApiConfig, AppError};

/// File name looked up in the working directory.
pub const CONFIG_FILE: &str = "basebounties.toml";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileConfig {
    #[serde(default)]
    analysis: AnalysisApiConfig,
}

/// Load the analysis configuration from `<dir>/basebounties.toml`.
///
/// An absent file yields the defaults; a present file must parse and validate.
pub fn load_analysis_config(dir: &Path) -> Result<AnalysisApiConfig, AppError> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        return Ok(AnalysisApiConfig::default());
    }

    let content = std::fs::read_to_string(&path)?;
    let file: FileConfig = toml::from_str(&content)
        .map_err(|e| AppError::InvalidConfig(format!("{}: {}", path.display(), e)))?;
    file.analysis.validate()?;
    Ok(file.analysis)
}
