use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub submit: SubmitConfig,
    pub ci: CiConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SubmitConfig {
    /// Artificial latency before the assessment is produced, in
    /// milliseconds. Presentational only.
    pub delay_ms: u64,
}

impl Default for SubmitConfig {
    fn default() -> Self {
        SubmitConfig { delay_ms: 1200 }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CiConfig {
    /// Exit nonzero when the diagnosis comes back positive.
    pub fail_on_positive: bool,
}

impl Config {
    pub fn load(dir: &Path) -> Result<Self, String> {
        let config_path = dir.join("symptom-doctor.toml");
        if !config_path.exists() {
            return Ok(Config::default());
        }
        let contents = std::fs::read_to_string(&config_path)
            .map_err(|e| format!("Failed to read config: {e}"))?;
        let config: Config =
            toml::from_str(&contents).map_err(|e| format!("Failed to parse config: {e}"))?;
        Ok(config)
    }
}
