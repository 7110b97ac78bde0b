//! How much a computed score should be trusted.
//!
//! Confidence blends two measures: how much of the intake form was filled in,
//! and whether the answers contradict each other.

use crate::intake::{BudgetRange, CompanySize, IntakeRecord, Timeline};

const COMPLETENESS_WEIGHT: f64 = 0.7;
const CONSISTENCY_WEIGHT: f64 = 0.3;

/// Number of intake fields that count toward completeness
pub const TRACKED_FIELDS: usize = 12;

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Percentage (0-100) of the tracked intake fields that were supplied
pub fn completeness(intake: &IntakeRecord) -> f64 {
    let checks = [
        filled(&intake.first_name),
        filled(&intake.email),
        filled(&intake.company),
        filled(&intake.position),
        filled(&intake.division),
        !intake.services.is_empty(),
        intake.company_size.is_some(),
        filled(&intake.industry),
        intake.budget.is_some(),
        intake.timeline.is_some(),
        !intake.pain_points.is_empty(),
        filled(&intake.project_description),
    ];
    let count = checks.iter().filter(|c| **c).count();
    count as f64 / TRACKED_FIELDS as f64 * 100.0
}

/// A cross-field contradiction and the points it costs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Inconsistency {
    pub description: &'static str,
    pub penalty: f64,
}

/// Every contradiction present in the intake record
pub fn inconsistencies(intake: &IntakeRecord) -> Vec<Inconsistency> {
    let mut found = Vec::new();

    match (intake.company_size, intake.budget) {
        (Some(CompanySize::Startup), Some(BudgetRange::From100kTo500k | BudgetRange::Over500k)) => {
            found.push(Inconsistency {
                description: "startup reporting a budget above 100k",
                penalty: 20.0,
            });
        }
        (Some(CompanySize::Enterprise), Some(BudgetRange::Under10k)) => {
            found.push(Inconsistency {
                description: "enterprise reporting a budget under 10k",
                penalty: 30.0,
            });
        }
        _ => {}
    }

    let urgency = intake.clamped_urgency();
    match intake.timeline {
        Some(Timeline::WithinYear) if urgency >= 4 => found.push(Inconsistency {
            description: "high urgency on a year-long timeline",
            penalty: 15.0,
        }),
        Some(Timeline::Immediate) if urgency <= 2 => found.push(Inconsistency {
            description: "low urgency on an immediate timeline",
            penalty: 15.0,
        }),
        _ => {}
    }

    found
}

/// 100 minus the penalties for every contradiction, floored at 0
pub fn consistency(intake: &IntakeRecord) -> f64 {
    let penalty: f64 = inconsistencies(intake).iter().map(|i| i.penalty).sum();
    (100.0 - penalty).max(0.0)
}

pub fn confidence(intake: &IntakeRecord) -> u8 {
    let combined =
        completeness(intake) * COMPLETENESS_WEIGHT + consistency(intake) * CONSISTENCY_WEIGHT;
    combined.round().clamp(0.0, 100.0) as u8
}
