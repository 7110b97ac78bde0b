use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Self-reported headcount bracket.
///
/// Strings that are not one of the known brackets deserialize to `Unknown`
/// and score like a missing value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CompanySize {
    Startup,
    Small,
    Medium,
    Enterprise,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub enum BudgetRange {
    #[serde(rename = "under-10k")]
    Under10k,
    #[serde(rename = "10k-50k")]
    From10kTo50k,
    #[serde(rename = "50k-100k")]
    From50kTo100k,
    #[serde(rename = "100k-500k")]
    From100kTo500k,
    #[serde(rename = "500k-plus")]
    Over500k,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Timeline {
    Immediate,
    WithinMonth,
    WithinQuarter,
    WithinYear,
    #[serde(other)]
    Unknown,
}

impl CompanySize {
    pub fn as_str(&self) -> &'static str {
        match self {
            CompanySize::Startup => "startup",
            CompanySize::Small => "small",
            CompanySize::Medium => "medium",
            CompanySize::Enterprise => "enterprise",
            CompanySize::Unknown => "unknown",
        }
    }
}

impl BudgetRange {
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetRange::Under10k => "under-10k",
            BudgetRange::From10kTo50k => "10k-50k",
            BudgetRange::From50kTo100k => "50k-100k",
            BudgetRange::From100kTo500k => "100k-500k",
            BudgetRange::Over500k => "500k-plus",
            BudgetRange::Unknown => "unknown",
        }
    }
}

impl Timeline {
    pub fn as_str(&self) -> &'static str {
        match self {
            Timeline::Immediate => "immediate",
            Timeline::WithinMonth => "within-month",
            Timeline::WithinQuarter => "within-quarter",
            Timeline::WithinYear => "within-year",
            Timeline::Unknown => "unknown",
        }
    }
}

fn default_urgency() -> u8 {
    3
}

/// Everything a lead told us on the intake form.
///
/// Every field is optional on the wire; missing data lowers the confidence
/// of the resulting score instead of rejecting the submission.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct IntakeRecord {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub position: String,
    pub division: String,
    pub industry: String,

    pub services: Vec<String>,

    pub company_size: Option<CompanySize>,
    pub budget: Option<BudgetRange>,
    pub timeline: Option<Timeline>,

    /// 1 (can wait) to 5 (on fire). Neutral at 3.
    #[serde(default = "default_urgency")]
    pub urgency: u8,

    pub pain_points: Vec<String>,
    /// Pain point -> severity on a 0-5 scale
    pub pain_point_severity: Option<BTreeMap<String, u8>>,
    pub current_tech: Vec<String>,
    pub desired_outcomes: Vec<String>,

    pub project_description: String,
}

impl Default for IntakeRecord {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            company: String::new(),
            position: String::new(),
            division: String::new(),
            industry: String::new(),
            services: Vec::new(),
            company_size: None,
            budget: None,
            timeline: None,
            urgency: default_urgency(),
            pain_points: Vec::new(),
            pain_point_severity: None,
            current_tech: Vec::new(),
            desired_outcomes: Vec::new(),
            project_description: String::new(),
        }
    }
}

impl IntakeRecord {
    /// Display name, falling back to the email address
    pub fn display_name(&self) -> String {
        let full = format!("{} {}", self.first_name.trim(), self.last_name.trim());
        let full = full.trim();
        if full.is_empty() {
            self.email.clone()
        } else {
            full.to_string()
        }
    }

    /// Urgency clamped to the 1-5 scale
    pub fn clamped_urgency(&self) -> u8 {
        self.urgency.clamp(1, 5)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EmailAction {
    Delivered,
    Opened,
    Clicked,
    Replied,
    Bounced,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageView {
    pub url: String,
    pub timestamp: DateTime<Utc>,
    /// Seconds spent on the page
    #[serde(default)]
    pub time_on_page: u64,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailInteraction {
    pub action: EmailAction,
    #[serde(default)]
    pub timestamp: Option<DateTime<Utc>>,
}

/// Site and email activity recorded for a lead before scoring.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, rename_all = "camelCase")]
pub struct EngagementHistory {
    pub page_views: Vec<PageView>,
    pub email_interactions: Vec<EmailInteraction>,
}

impl EngagementHistory {
    /// Total seconds on site, saturating at `u64::MAX`
    pub fn total_time_on_site(&self) -> u64 {
        self.page_views
            .iter()
            .fold(0u64, |acc, v| acc.saturating_add(v.time_on_page))
    }
}
