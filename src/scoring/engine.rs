use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{Arc, RwLock};
use tracing::debug;
use uuid::Uuid;

use super::confidence::confidence;
use super::config::{PartialScoringConfig, ScoringConfig, ScoringThresholds};
use super::factors::{
    budget_score, company_score, engagement_score, pain_point_score, tech_compatibility_score,
    timeline_score, ScoreFactor,
};
use crate::intake::{EngagementHistory, IntakeRecord};

/// Follow-up priority tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LeadTier {
    Hot,
    Warm,
    Cold,
    Nurture,
}

impl LeadTier {
    /// First threshold met wins, checked hot -> warm -> cold
    pub fn classify(score: i64, thresholds: &ScoringThresholds) -> Self {
        let score = score as f64;
        if score >= thresholds.hot {
            LeadTier::Hot
        } else if score >= thresholds.warm {
            LeadTier::Warm
        } else if score >= thresholds.cold {
            LeadTier::Cold
        } else {
            LeadTier::Nurture
        }
    }

    /// Ordering for comparisons: nurture < cold < warm < hot
    pub fn rank(&self) -> u8 {
        match self {
            LeadTier::Nurture => 0,
            LeadTier::Cold => 1,
            LeadTier::Warm => 2,
            LeadTier::Hot => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadTier::Hot => "hot",
            LeadTier::Warm => "warm",
            LeadTier::Cold => "cold",
            LeadTier::Nurture => "nurture",
        }
    }
}

impl fmt::Display for LeadTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The six sub-scores, each in [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct ComponentScores {
    pub company_size: f64,
    pub budget: f64,
    pub timeline: f64,
    pub pain_points: f64,
    pub tech_compatibility: f64,
    pub engagement: f64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ScoreResult {
    pub id: Uuid,
    /// Set by the caller after scoring; the engine never fills it in
    pub lead_id: Option<String>,
    pub total_score: i64,
    pub classification: LeadTier,
    pub confidence: u8,
    pub components: ComponentScores,
    pub scored_at: DateTime<Utc>,
    pub config_version: String,
    pub factors: Vec<ScoreFactor>,
}

impl ScoreResult {
    pub fn with_lead_id(mut self, lead_id: impl Into<String>) -> Self {
        self.lead_id = Some(lead_id.into());
        self
    }
}

/// Score a lead against an explicit configuration.
///
/// Never fails: missing or unrecognized fields fall back to fixed values.
/// Only the sub-scores are clamped; a weight set that does not sum to 1.0
/// can push the composite outside 0-100.
pub fn score_lead(
    intake: &IntakeRecord,
    engagement: Option<&EngagementHistory>,
    config: &ScoringConfig,
) -> ScoreResult {
    let weights = &config.weights;

    let company = company_score(intake, weights.company_size);
    let budget = budget_score(intake, weights.budget);
    let timeline = timeline_score(intake, weights.timeline);
    let pain_points = pain_point_score(intake, weights.pain_points);
    let tech = tech_compatibility_score(intake, weights.tech_compatibility);
    let engaged = engagement_score(engagement, weights.engagement);

    let components = ComponentScores {
        company_size: company.value,
        budget: budget.value,
        timeline: timeline.value,
        pain_points: pain_points.value,
        tech_compatibility: tech.value,
        engagement: engaged.value,
    };

    let weighted = components.company_size * weights.company_size
        + components.budget * weights.budget
        + components.timeline * weights.timeline
        + components.pain_points * weights.pain_points
        + components.tech_compatibility * weights.tech_compatibility
        + components.engagement * weights.engagement;
    let total_score = weighted.round() as i64;

    let classification = LeadTier::classify(total_score, &config.thresholds);
    let confidence = confidence(intake);

    let factors: Vec<ScoreFactor> = [company, budget, timeline, pain_points, tech, engaged]
        .into_iter()
        .flat_map(|s| s.factors)
        .collect();

    debug!(
        total_score,
        %classification,
        confidence,
        config_version = %config.version,
        "scored lead"
    );

    ScoreResult {
        id: Uuid::new_v4(),
        lead_id: None,
        total_score,
        classification,
        confidence,
        components,
        scored_at: Utc::now(),
        config_version: config.version.clone(),
        factors,
    }
}

/// A scoring engine that owns its configuration.
///
/// Two scorers never share state. `compute` borrows the scorer immutably, so
/// the configuration cannot change underneath a running computation.
#[derive(Debug, Clone, Default)]
pub struct LeadScorer {
    config: ScoringConfig,
}

impl LeadScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    pub fn compute(
        &self,
        intake: &IntakeRecord,
        engagement: Option<&EngagementHistory>,
    ) -> ScoreResult {
        score_lead(intake, engagement, &self.config)
    }

    /// Shallow-merge `partial` into the current configuration
    pub fn update_config(&mut self, partial: PartialScoringConfig) {
        self.config.merge(partial);
    }

    /// A copy of the current configuration
    pub fn config(&self) -> ScoringConfig {
        self.config.clone()
    }
}

/// A scorer that can be shared across threads and reconfigured in place.
///
/// Each `compute` takes a snapshot of the configuration before scoring, so an
/// update racing a computation is seen either entirely or not at all.
#[derive(Debug, Clone, Default)]
pub struct SharedLeadScorer {
    config: Arc<RwLock<Arc<ScoringConfig>>>,
}

impl SharedLeadScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self {
            config: Arc::new(RwLock::new(Arc::new(config))),
        }
    }

    fn snapshot(&self) -> Arc<ScoringConfig> {
        match self.config.read() {
            Ok(guard) => Arc::clone(&*guard),
            Err(poisoned) => Arc::clone(&*poisoned.into_inner()),
        }
    }

    pub fn compute(
        &self,
        intake: &IntakeRecord,
        engagement: Option<&EngagementHistory>,
    ) -> ScoreResult {
        let config = self.snapshot();
        score_lead(intake, engagement, &config)
    }

    pub fn update_config(&self, partial: PartialScoringConfig) {
        let mut guard = match self.config.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let mut next = ScoringConfig::clone(&**guard);
        next.merge(partial);
        *guard = Arc::new(next);
    }

    pub fn config(&self) -> ScoringConfig {
        ScoringConfig::clone(&self.snapshot())
    }
}

impl From<LeadScorer> for SharedLeadScorer {
    fn from(scorer: LeadScorer) -> Self {
        Self::new(scorer.config)
    }
}
