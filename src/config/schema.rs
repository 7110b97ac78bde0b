use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::scoring::{PartialScoringConfig, ScoringConfig};

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Overrides merged over the default scoring configuration
    #[serde(default)]
    pub scoring: Option<PartialScoringConfig>,

    /// Where scored leads are kept (defaults to ~/.config/lead-triage/scores.json)
    #[serde(default)]
    pub store_path: Option<PathBuf>,
}

impl Config {
    /// Default scoring configuration with this file's overrides applied
    pub fn effective_scoring(&self) -> ScoringConfig {
        ScoringConfig::with_overrides(self.scoring.clone().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_parse() {
        let config: Config = serde_saphyr::from_str("{}").unwrap();
        assert!(config.scoring.is_none());
        assert!(config.store_path.is_none());
        assert_eq!(config.effective_scoring(), ScoringConfig::default());
    }

    #[test]
    fn test_scoring_overrides_parse() {
        let yaml = r#"
store_path: /tmp/leads.json
scoring:
  version: "2024-q3"
  thresholds:
    hot: 85
    warm: 65
    cold: 45
"#;
        let config: Config = serde_saphyr::from_str(yaml).unwrap();
        assert_eq!(config.store_path, Some(PathBuf::from("/tmp/leads.json")));

        let scoring = config.effective_scoring();
        assert_eq!(scoring.version, "2024-q3");
        assert_eq!(scoring.thresholds.hot, 85.0);
        assert_eq!(scoring.weights.budget, 0.25);
    }

    #[test]
    fn test_unknown_top_level_field_rejected() {
        let result: Result<Config, _> = serde_saphyr::from_str("queries: []\n");
        assert!(result.is_err());
    }
}
