//! Property-based tests for the lead scoring engine
//!
//! These tests verify invariants that should hold for all inputs:
//! - Every sub-score stays within [0, 100]
//! - Confidence stays within [0, 100]
//! - Scoring is deterministic apart from the result identity
//! - Tier assignment never drops as the score rises

use lead_triage::intake::{
    BudgetRange, CompanySize, EmailAction, EmailInteraction, EngagementHistory, IntakeRecord,
    PageView, Timeline,
};
use lead_triage::scoring::{score_lead, LeadTier, ScoringConfig, ScoringThresholds};
use proptest::prelude::*;

fn company_size() -> impl Strategy<Value = Option<CompanySize>> {
    prop_oneof![
        Just(None),
        Just(Some(CompanySize::Startup)),
        Just(Some(CompanySize::Small)),
        Just(Some(CompanySize::Medium)),
        Just(Some(CompanySize::Enterprise)),
        Just(Some(CompanySize::Unknown)),
    ]
}

fn budget() -> impl Strategy<Value = Option<BudgetRange>> {
    prop_oneof![
        Just(None),
        Just(Some(BudgetRange::Under10k)),
        Just(Some(BudgetRange::From10kTo50k)),
        Just(Some(BudgetRange::From50kTo100k)),
        Just(Some(BudgetRange::From100kTo500k)),
        Just(Some(BudgetRange::Over500k)),
        Just(Some(BudgetRange::Unknown)),
    ]
}

fn timeline() -> impl Strategy<Value = Option<Timeline>> {
    prop_oneof![
        Just(None),
        Just(Some(Timeline::Immediate)),
        Just(Some(Timeline::WithinMonth)),
        Just(Some(Timeline::WithinQuarter)),
        Just(Some(Timeline::WithinYear)),
        Just(Some(Timeline::Unknown)),
    ]
}

/// Free text biased toward the keywords the engine looks for
fn phrase() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("cost reduction".to_string()),
        Just("Process Automation".to_string()),
        Just("React".to_string()),
        Just("PostgreSQL".to_string()),
        Just("MongoDB".to_string()),
        Just("cloud API".to_string()),
        Just("fintech".to_string()),
        "[a-zA-Z ]{0,20}",
    ]
}

fn intake_record() -> impl Strategy<Value = IntakeRecord> {
    (
        (company_size(), budget(), timeline(), 0u8..=9),
        (
            prop::collection::vec(phrase(), 0..6),
            prop::collection::vec(phrase(), 0..6),
            prop::option::of(prop::collection::btree_map(phrase(), 0u8..=10, 0..4)),
        ),
        (phrase(), "[a-z]{0,8}", "[a-z@.]{0,12}", "[a-z ]{0,30}"),
    )
        .prop_map(
            |(
                (company_size, budget, timeline, urgency),
                (pain_points, current_tech, severity),
                (industry, first_name, email, project_description),
            )| IntakeRecord {
                first_name,
                email,
                industry,
                company_size,
                budget,
                timeline,
                urgency,
                pain_points,
                pain_point_severity: severity,
                current_tech,
                project_description,
                ..Default::default()
            },
        )
}

fn engagement() -> impl Strategy<Value = Option<EngagementHistory>> {
    prop::option::of(
        (
            prop::collection::vec(0u64..2_000, 0..15),
            prop::collection::vec(0usize..5, 0..8),
        )
            .prop_map(|(times, actions)| EngagementHistory {
                page_views: times
                    .into_iter()
                    .enumerate()
                    .map(|(i, t)| PageView {
                        url: format!("/page/{}", i),
                        timestamp: chrono::Utc::now(),
                        time_on_page: t,
                    })
                    .collect(),
                email_interactions: actions
                    .into_iter()
                    .map(|a| EmailInteraction {
                        action: match a {
                            0 => EmailAction::Delivered,
                            1 => EmailAction::Opened,
                            2 => EmailAction::Clicked,
                            3 => EmailAction::Replied,
                            _ => EmailAction::Bounced,
                        },
                        timestamp: None,
                    })
                    .collect(),
            }),
    )
}

proptest! {
    /// Property: each sub-score lies in [0, 100] and, with weights summing to
    /// 1.0, so does the composite
    #[test]
    fn prop_scores_are_bounded(intake in intake_record(), history in engagement()) {
        let result = score_lead(&intake, history.as_ref(), &ScoringConfig::default());
        let c = result.components;
        for value in [c.company_size, c.budget, c.timeline, c.pain_points, c.tech_compatibility, c.engagement] {
            prop_assert!((0.0..=100.0).contains(&value), "sub-score out of range: {}", value);
        }
        prop_assert!((0..=100).contains(&result.total_score));
        prop_assert!(result.confidence <= 100);
    }

    /// Property: identical inputs give identical scores
    #[test]
    fn prop_scoring_is_deterministic(intake in intake_record(), history in engagement()) {
        let config = ScoringConfig::default();
        let a = score_lead(&intake, history.as_ref(), &config);
        let b = score_lead(&intake, history.as_ref(), &config);
        prop_assert_eq!(a.components, b.components);
        prop_assert_eq!(a.total_score, b.total_score);
        prop_assert_eq!(a.classification, b.classification);
        prop_assert_eq!(a.confidence, b.confidence);
    }

    /// Property: a higher score never lands in a lower tier
    #[test]
    fn prop_classification_is_monotonic(low in -50i64..150, bump in 0i64..100) {
        let thresholds = ScoringThresholds::default();
        let lower = LeadTier::classify(low, &thresholds);
        let higher = LeadTier::classify(low + bump, &thresholds);
        prop_assert!(higher.rank() >= lower.rank());
    }

    /// Property: the documented fallbacks hold whatever else the lead reports
    #[test]
    fn prop_fixed_fallbacks(intake in intake_record()) {
        let mut intake = intake;
        intake.pain_points.clear();
        intake.current_tech.clear();
        let result = score_lead(&intake, None, &ScoringConfig::default());
        prop_assert_eq!(result.components.pain_points, 20.0);
        prop_assert_eq!(result.components.tech_compatibility, 50.0);
        prop_assert_eq!(result.components.engagement, 50.0);
    }
}
