use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::intake::IntakeRecord;
use crate::scoring::ScoreResult;

pub const STORE_VERSION: u32 = 1;

/// A scored lead as persisted: who it was and what they scored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredLead {
    pub name: String,
    pub company: String,
    pub result: ScoreResult,
}

/// All stored score results, keyed by lead id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultStore {
    pub version: u32,
    #[serde(default)]
    pub leads: BTreeMap<String, StoredLead>,
}

impl Default for ResultStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultStore {
    pub fn new() -> Self {
        Self {
            version: STORE_VERSION,
            leads: BTreeMap::new(),
        }
    }

    /// Store a result under `lead_id`, replacing any earlier score for that lead.
    /// Returns the replaced entry, if any.
    pub fn insert(
        &mut self,
        lead_id: &str,
        intake: &IntakeRecord,
        result: ScoreResult,
    ) -> Option<StoredLead> {
        let entry = StoredLead {
            name: intake.display_name(),
            company: intake.company.clone(),
            result: result.with_lead_id(lead_id),
        };
        self.leads.insert(lead_id.to_string(), entry)
    }

    pub fn get(&self, lead_id: &str) -> Option<&StoredLead> {
        self.leads.get(lead_id)
    }

    pub fn remove(&mut self, lead_id: &str) -> bool {
        self.leads.remove(lead_id).is_some()
    }

    pub fn len(&self) -> usize {
        self.leads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.leads.is_empty()
    }

    /// Leads in follow-up order: score descending, then confidence descending,
    /// then the longest-waiting lead first
    pub fn ranked(&self) -> Vec<&StoredLead> {
        let mut leads: Vec<&StoredLead> = self.leads.values().collect();
        leads.sort_by(|a, b| {
            b.result
                .total_score
                .cmp(&a.result.total_score)
                .then_with(|| b.result.confidence.cmp(&a.result.confidence))
                .then_with(|| a.result.scored_at.cmp(&b.result.scored_at))
        });
        leads
    }
}
