pub mod confidence;
pub mod config;
pub mod engine;
pub mod factors;
pub mod validation;

pub use config::*;
pub use engine::{score_lead, ComponentScores, LeadScorer, LeadTier, ScoreResult, SharedLeadScorer};
pub use factors::{ScoreFactor, TechCompatibility};
pub use validation::{negative_weights, validate_scoring, weight_sum_drift};
