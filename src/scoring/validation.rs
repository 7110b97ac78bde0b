use super::config::ScoringConfig;

fn named_weights(config: &ScoringConfig) -> [(&'static str, f64); 6] {
    [
        ("company_size", config.weights.company_size),
        ("budget", config.weights.budget),
        ("timeline", config.weights.timeline),
        ("pain_points", config.weights.pain_points),
        ("tech_compatibility", config.weights.tech_compatibility),
        ("engagement", config.weights.engagement),
    ]
}

/// Validate scoring configuration at startup.
/// Returns all validation errors at once (not just the first).
///
/// The weights are not required to sum to 1.0 or to be non-negative; see
/// [`weight_sum_drift`] and [`negative_weights`] for the softer checks.
pub fn validate_scoring(config: &ScoringConfig) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    for (name, value) in named_weights(config) {
        if !value.is_finite() {
            errors.push(format!("scoring.weights.{}: must be a finite number", name));
        }
    }

    let thresholds = [
        ("hot", config.thresholds.hot),
        ("warm", config.thresholds.warm),
        ("cold", config.thresholds.cold),
    ];
    let mut thresholds_finite = true;
    for (name, value) in thresholds {
        if !value.is_finite() {
            thresholds_finite = false;
            errors.push(format!("scoring.thresholds.{}: must be a finite number", name));
        }
    }

    if thresholds_finite {
        if config.thresholds.hot < config.thresholds.warm {
            errors.push(format!(
                "scoring.thresholds: hot ({}) must not be below warm ({})",
                config.thresholds.hot, config.thresholds.warm
            ));
        }
        if config.thresholds.warm < config.thresholds.cold {
            errors.push(format!(
                "scoring.thresholds: warm ({}) must not be below cold ({})",
                config.thresholds.warm, config.thresholds.cold
            ));
        }
    }

    if config.version.trim().is_empty() {
        errors.push("scoring.version: must not be empty".to_string());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// How far the weights are from summing to 1.0, if further than a rounding error
pub fn weight_sum_drift(config: &ScoringConfig) -> Option<f64> {
    let drift = config.weights.sum() - 1.0;
    if drift.abs() > 0.001 {
        Some(drift)
    } else {
        None
    }
}

/// Names of weights below zero. Allowed, but they invert a factor's effect.
pub fn negative_weights(config: &ScoringConfig) -> Vec<&'static str> {
    named_weights(config)
        .into_iter()
        .filter(|(_, value)| *value < 0.0)
        .map(|(name, _)| name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{ScoringThresholds, ScoringWeights};

    #[test]
    fn test_valid_config() {
        assert!(validate_scoring(&ScoringConfig::default()).is_ok());
    }

    #[test]
    fn test_negative_weight_is_allowed() {
        let mut config = ScoringConfig::default();
        config.weights.budget = -0.1;
        assert!(validate_scoring(&config).is_ok());
        assert_eq!(negative_weights(&config), vec!["budget"]);
        assert!(negative_weights(&ScoringConfig::default()).is_empty());
    }

    #[test]
    fn test_nan_weight() {
        let mut config = ScoringConfig::default();
        config.weights.engagement = f64::NAN;
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("finite"));
    }

    #[test]
    fn test_thresholds_out_of_order() {
        let config = ScoringConfig {
            thresholds: ScoringThresholds {
                hot: 50.0,
                warm: 60.0,
                cold: 70.0,
            },
            ..Default::default()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors[0].contains("hot"));
        assert!(errors[1].contains("warm"));
    }

    #[test]
    fn test_empty_version() {
        let config = ScoringConfig {
            version: "  ".to_string(),
            ..Default::default()
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert!(errors[0].contains("scoring.version"));
    }

    #[test]
    fn test_collects_all_errors() {
        let config = ScoringConfig {
            weights: ScoringWeights {
                company_size: f64::INFINITY,
                ..Default::default()
            },
            thresholds: ScoringThresholds {
                hot: 10.0,
                warm: 20.0,
                cold: 5.0,
            },
            version: String::new(),
        };
        let errors = validate_scoring(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn test_weight_sum_not_enforced() {
        let config = ScoringConfig {
            weights: ScoringWeights {
                company_size: 0.5,
                ..Default::default()
            },
            ..Default::default()
        };
        assert!(validate_scoring(&config).is_ok());
        let drift = weight_sum_drift(&config).unwrap();
        assert!((drift - 0.3).abs() < 1e-9);
        assert!(weight_sum_drift(&ScoringConfig::default()).is_none());
    }
}
