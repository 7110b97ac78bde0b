use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::intake::{BudgetRange, CompanySize, EngagementHistory, IntakeRecord, Timeline};

pub const HIGH_VALUE_INDUSTRIES: &[&str] = &[
    "technology",
    "fintech",
    "healthcare",
    "saas",
    "ecommerce",
    "finance",
    "consulting",
    "manufacturing",
];

pub const HIGH_IMPACT_PAIN_POINTS: &[&str] = &[
    "revenue growth",
    "cost reduction",
    "efficiency",
    "automation",
    "competitive advantage",
    "scalability",
    "security",
    "compliance",
    "customer experience",
    "data insights",
];

pub const HIGH_COMPATIBILITY_TECH: &[&str] = &[
    "react",
    "nextjs",
    "typescript",
    "nodejs",
    "python",
    "supabase",
    "postgresql",
];

pub const MEDIUM_COMPATIBILITY_TECH: &[&str] =
    &["javascript", "html", "css", "mysql", "mongodb", "firebase"];

pub const EMERGING_TECH: &[&str] = &["ai", "machine learning", "automation", "api", "cloud"];

const COMPANY_BASE_SCORE: f64 = 50.0;
const INDUSTRY_BONUS: f64 = 10.0;
const EMPTY_PAIN_POINTS_SCORE: f64 = 20.0;
const PAIN_POINTS_BASE_SCORE: f64 = 40.0;
const HIGH_IMPACT_BONUS: f64 = 15.0;
const EMPTY_TECH_SCORE: f64 = 50.0;
const TECH_BASE_SCORE: f64 = 30.0;
const NO_ENGAGEMENT_SCORE: f64 = 50.0;

/// One signal's contribution to a lead's score, kept for audit and display.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ScoreFactor {
    pub category: String, // e.g. "Firmographics", "Intent"
    pub factor: String,   // e.g. "Company Size", "Industry"
    pub weight: f64,
    pub value: f64,  // Raw 0-100 value
    pub impact: f64, // value * weight
    pub reasoning: String,
}

impl ScoreFactor {
    fn new(category: &str, factor: &str, weight: f64, value: f64, reasoning: String) -> Self {
        Self {
            category: category.to_string(),
            factor: factor.to_string(),
            weight,
            value,
            impact: value * weight,
            reasoning,
        }
    }
}

/// A sub-score in [0, 100] and the factors that explain it.
#[derive(Debug, Clone, PartialEq)]
pub struct FactorScore {
    pub value: f64,
    pub factors: Vec<ScoreFactor>,
}

/// Compatibility of a lead's current stack with what we build on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TechCompatibility {
    High,
    Medium,
    Emerging,
    None,
}

impl TechCompatibility {
    pub fn as_str(&self) -> &'static str {
        match self {
            TechCompatibility::High => "high",
            TechCompatibility::Medium => "medium",
            TechCompatibility::Emerging => "emerging",
            TechCompatibility::None => "none",
        }
    }
}

pub fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

/// First keyword (lowercase) contained in `text`, ignoring case
pub fn first_keyword_match(text: &str, keywords: &[&'static str]) -> Option<&'static str> {
    let lowered = text.to_lowercase();
    keywords.iter().copied().find(|k| lowered.contains(k))
}

fn count_matching(items: &[String], keywords: &[&'static str]) -> usize {
    items
        .iter()
        .filter(|item| first_keyword_match(item, keywords).is_some())
        .count()
}

pub fn company_size_value(size: Option<CompanySize>) -> f64 {
    match size {
        Some(CompanySize::Startup) => 60.0,
        Some(CompanySize::Small) => 70.0,
        Some(CompanySize::Medium) => 85.0,
        Some(CompanySize::Enterprise) => 95.0,
        Some(CompanySize::Unknown) | None => COMPANY_BASE_SCORE,
    }
}

pub fn budget_value(budget: Option<BudgetRange>) -> f64 {
    match budget {
        Some(BudgetRange::Under10k) => 30.0,
        Some(BudgetRange::From10kTo50k) => 60.0,
        Some(BudgetRange::From50kTo100k) => 80.0,
        Some(BudgetRange::From100kTo500k) => 95.0,
        Some(BudgetRange::Over500k) => 100.0,
        Some(BudgetRange::Unknown) | None => 30.0,
    }
}

pub fn timeline_base_value(timeline: Option<Timeline>) -> f64 {
    match timeline {
        Some(Timeline::Immediate) => 100.0,
        Some(Timeline::WithinMonth) => 85.0,
        Some(Timeline::WithinQuarter) => 70.0,
        Some(Timeline::WithinYear) => 45.0,
        Some(Timeline::Unknown) | None => 30.0,
    }
}

/// `1 + (urgency - 3) * 0.1`, neutral at 3
pub fn urgency_multiplier(urgency: u8) -> f64 {
    1.0 + (f64::from(urgency) - 3.0) * 0.1
}

pub fn company_score(intake: &IntakeRecord, weight: f64) -> FactorScore {
    let size_label = intake.company_size.map_or("not provided", |s| s.as_str());
    let base = company_size_value(intake.company_size);
    let mut factors = vec![ScoreFactor::new(
        "Firmographics",
        "Company Size",
        weight,
        base,
        format!("Company size '{}' scores {}", size_label, base),
    )];

    let mut score = base;
    if let Some(keyword) = first_keyword_match(&intake.industry, HIGH_VALUE_INDUSTRIES) {
        let boosted = (score + INDUSTRY_BONUS).min(100.0);
        factors.push(ScoreFactor::new(
            "Firmographics",
            "Industry",
            weight,
            boosted - score,
            format!(
                "Industry '{}' matches high-value sector '{}'",
                intake.industry.trim(),
                keyword
            ),
        ));
        score = boosted;
    }

    FactorScore {
        value: clamp_score(score),
        factors,
    }
}

pub fn budget_score(intake: &IntakeRecord, weight: f64) -> FactorScore {
    let value = clamp_score(budget_value(intake.budget));
    let label = intake.budget.map_or("not provided", |b| b.as_str());
    FactorScore {
        value,
        factors: vec![ScoreFactor::new(
            "Intent",
            "Budget",
            weight,
            value,
            format!("Budget range '{}' scores {}", label, value),
        )],
    }
}

pub fn timeline_score(intake: &IntakeRecord, weight: f64) -> FactorScore {
    let base = timeline_base_value(intake.timeline);
    let urgency = intake.clamped_urgency();
    let multiplier = urgency_multiplier(urgency);
    let value = clamp_score((base * multiplier).min(100.0).round());
    let label = intake.timeline.map_or("not provided", |t| t.as_str());

    FactorScore {
        value,
        factors: vec![ScoreFactor::new(
            "Intent",
            "Timeline",
            weight,
            value,
            format!(
                "Timeline '{}' ({}) with urgency {}/5 (x{:.1})",
                label, base, urgency, multiplier
            ),
        )],
    }
}

pub fn pain_point_score(intake: &IntakeRecord, weight: f64) -> FactorScore {
    if intake.pain_points.is_empty() {
        return FactorScore {
            value: EMPTY_PAIN_POINTS_SCORE,
            factors: vec![ScoreFactor::new(
                "Needs",
                "Pain Points",
                weight,
                EMPTY_PAIN_POINTS_SCORE,
                "No pain points reported".to_string(),
            )],
        };
    }

    let mut score = PAIN_POINTS_BASE_SCORE;
    let mut details = vec![format!("{} pain points reported", intake.pain_points.len())];

    // Averaged over every severity entry, not just the listed pain points
    if let Some(ref severities) = intake.pain_point_severity {
        if !severities.is_empty() {
            let total: f64 = severities.values().map(|s| f64::from((*s).min(5))).sum();
            let average = total / severities.len() as f64;
            score += average * 10.0;
            details.push(format!("average severity {:.1}", average));
        }
    }

    let high_impact = count_matching(&intake.pain_points, HIGH_IMPACT_PAIN_POINTS);
    if high_impact > 0 {
        score += HIGH_IMPACT_BONUS * high_impact as f64;
        details.push(format!("{} high-impact", high_impact));
    }

    let value = clamp_score(score);
    FactorScore {
        value,
        factors: vec![ScoreFactor::new(
            "Needs",
            "Pain Points",
            weight,
            value,
            details.join(", "),
        )],
    }
}

pub fn tech_compatibility_score(intake: &IntakeRecord, weight: f64) -> FactorScore {
    if intake.current_tech.is_empty() {
        return FactorScore {
            value: EMPTY_TECH_SCORE,
            factors: vec![ScoreFactor::new(
                "Technology",
                "Tech Compatibility",
                weight,
                EMPTY_TECH_SCORE,
                "No current technology reported".to_string(),
            )],
        };
    }

    // Tiers are independent: a technology can count toward several
    let high = count_matching(&intake.current_tech, HIGH_COMPATIBILITY_TECH);
    let medium = count_matching(&intake.current_tech, MEDIUM_COMPATIBILITY_TECH);
    let emerging = count_matching(&intake.current_tech, EMERGING_TECH);

    let score =
        TECH_BASE_SCORE + 20.0 * high as f64 + 10.0 * medium as f64 + 15.0 * emerging as f64;
    let value = clamp_score(score);

    let level = if high > 0 {
        TechCompatibility::High
    } else if medium > 0 {
        TechCompatibility::Medium
    } else if emerging > 0 {
        TechCompatibility::Emerging
    } else {
        TechCompatibility::None
    };

    FactorScore {
        value,
        factors: vec![ScoreFactor::new(
            "Technology",
            "Tech Compatibility",
            weight,
            value,
            format!(
                "{} compatibility ({} high, {} medium, {} emerging)",
                level.as_str(),
                high,
                medium,
                emerging
            ),
        )],
    }
}

pub fn engagement_score(engagement: Option<&EngagementHistory>, weight: f64) -> FactorScore {
    let Some(history) = engagement else {
        return FactorScore {
            value: NO_ENGAGEMENT_SCORE,
            factors: vec![ScoreFactor::new(
                "Engagement",
                "Engagement Activity",
                weight,
                NO_ENGAGEMENT_SCORE,
                "No engagement history available".to_string(),
            )],
        };
    };

    let page_views = history.page_views.len();
    let emails = history.email_interactions.len();
    let seconds = history.total_time_on_site();

    let views_points = (3.0 * page_views as f64).min(30.0);
    let email_points = (8.0 * emails as f64).min(40.0);
    let time_points = (seconds as f64 / 60.0).min(30.0);
    let value = clamp_score(views_points + email_points + time_points);

    FactorScore {
        value,
        factors: vec![ScoreFactor::new(
            "Engagement",
            "Engagement Activity",
            weight,
            value,
            format!(
                "{} page views, {} email interactions, {} on site",
                page_views,
                emails,
                humantime::format_duration(Duration::from_secs(seconds))
            ),
        )],
    }
}
