use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_VERSION: &str = "1.0";

/// Relative importance of each scoring signal.
///
/// The weights are meant to sum to 1.0 but nothing enforces it: the composite
/// is `sum(sub_score * weight)` with no renormalization.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringWeights {
    pub company_size: f64,
    pub budget: f64,
    pub timeline: f64,
    pub pain_points: f64,
    pub tech_compatibility: f64,
    pub engagement: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            company_size: 0.20,
            budget: 0.25,
            timeline: 0.15,
            pain_points: 0.20,
            tech_compatibility: 0.10,
            engagement: 0.10,
        }
    }
}

impl ScoringWeights {
    pub fn sum(&self) -> f64 {
        self.company_size
            + self.budget
            + self.timeline
            + self.pain_points
            + self.tech_compatibility
            + self.engagement
    }
}

/// Minimum composite score for each tier. Checked top-down, first match wins.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringThresholds {
    pub hot: f64,
    pub warm: f64,
    pub cold: f64,
}

impl Default for ScoringThresholds {
    fn default() -> Self {
        Self {
            hot: 80.0,
            warm: 60.0,
            cold: 40.0,
        }
    }
}

/// Scoring configuration.
///
/// Example YAML:
/// ```yaml
/// scoring:
///   version: "2024-q3"
///   weights:
///     company_size: 0.2
///     budget: 0.25
///     timeline: 0.15
///     pain_points: 0.2
///     tech_compatibility: 0.1
///     engagement: 0.1
///   thresholds: { hot: 80, warm: 60, cold: 40 }
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ScoringConfig {
    pub weights: ScoringWeights,
    pub thresholds: ScoringThresholds,
    pub version: String,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            weights: ScoringWeights::default(),
            thresholds: ScoringThresholds::default(),
            version: DEFAULT_CONFIG_VERSION.to_string(),
        }
    }
}

/// Overrides for a [`ScoringConfig`]. Each present field replaces the whole
/// corresponding field of the target (a shallow merge: supplying `weights`
/// replaces all six weights).
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct PartialScoringConfig {
    #[serde(default)]
    pub weights: Option<ScoringWeights>,
    #[serde(default)]
    pub thresholds: Option<ScoringThresholds>,
    #[serde(default)]
    pub version: Option<String>,
}

impl ScoringConfig {
    /// Shallow-merge `partial` into this configuration
    pub fn merge(&mut self, partial: PartialScoringConfig) {
        if let Some(weights) = partial.weights {
            self.weights = weights;
        }
        if let Some(thresholds) = partial.thresholds {
            self.thresholds = thresholds;
        }
        if let Some(version) = partial.version {
            self.version = version;
        }
    }

    /// Defaults with `partial` applied on top
    pub fn with_overrides(partial: PartialScoringConfig) -> Self {
        let mut config = Self::default();
        config.merge(partial);
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_scoring_config() {
        let config = ScoringConfig::default();

        assert_eq!(config.weights.company_size, 0.20);
        assert_eq!(config.weights.budget, 0.25);
        assert_eq!(config.weights.timeline, 0.15);
        assert_eq!(config.weights.pain_points, 0.20);
        assert_eq!(config.weights.tech_compatibility, 0.10);
        assert_eq!(config.weights.engagement, 0.10);
        assert_eq!(config.thresholds.hot, 80.0);
        assert_eq!(config.thresholds.warm, 60.0);
        assert_eq!(config.thresholds.cold, 40.0);
        assert_eq!(config.version, "1.0");
        assert!((config.weights.sum() - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_scoring_config_serde_roundtrip() {
        let config = ScoringConfig::default();
        let yaml = serde_saphyr::to_string(&config).unwrap();
        let parsed: ScoringConfig = serde_saphyr::from_str(&yaml).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_partial_scoring_config_parse() {
        let yaml = r#"
version: "2024-q3"
thresholds:
  hot: 85
  warm: 65
  cold: 45
"#;
        let partial: PartialScoringConfig = serde_saphyr::from_str(yaml).unwrap();
        assert!(partial.weights.is_none());
        assert_eq!(partial.version.as_deref(), Some("2024-q3"));
        assert_eq!(partial.thresholds.unwrap().hot, 85.0);
    }

    #[test]
    fn test_empty_partial_parse() {
        let partial: PartialScoringConfig = serde_saphyr::from_str("{}").unwrap();
        assert_eq!(partial, PartialScoringConfig::default());
    }

    #[test]
    fn test_unknown_field_rejected() {
        let yaml = "bonus: 10\n";
        let result: Result<PartialScoringConfig, _> = serde_saphyr::from_str(yaml);
        assert!(result.is_err());
    }

    #[test]
    fn test_merge_replaces_only_supplied_fields() {
        let mut config = ScoringConfig::default();
        config.merge(PartialScoringConfig {
            version: Some("custom".to_string()),
            ..Default::default()
        });
        assert_eq!(config.version, "custom");
        assert_eq!(config.weights, ScoringWeights::default());
        assert_eq!(config.thresholds, ScoringThresholds::default());
    }

    #[test]
    fn test_merge_is_shallow() {
        let weights = ScoringWeights {
            company_size: 0.5,
            budget: 0.5,
            timeline: 0.0,
            pain_points: 0.0,
            tech_compatibility: 0.0,
            engagement: 0.0,
        };
        let config = ScoringConfig::with_overrides(PartialScoringConfig {
            weights: Some(weights),
            ..Default::default()
        });
        assert_eq!(config.weights, weights);
        assert_eq!(config.version, DEFAULT_CONFIG_VERSION);
    }
}
