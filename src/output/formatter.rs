use owo_colors::OwoColorize;
use std::io::IsTerminal;
use terminal_size::{terminal_size, Width};

use crate::scoring::{LeadTier, ScoreResult};
use crate::store::StoredLead;

/// Check if stdout is a TTY (for auto-detecting color support)
pub fn should_use_colors() -> bool {
    std::io::stdout().is_terminal()
}

/// Tier label padded to a fixed width, colored by urgency
pub fn format_tier(tier: LeadTier, use_colors: bool) -> String {
    let label = format!("{:<7}", tier.as_str().to_uppercase());
    if !use_colors {
        return label;
    }
    match tier {
        LeadTier::Hot => label.red().bold().to_string(),
        LeadTier::Warm => label.yellow().to_string(),
        LeadTier::Cold => label.cyan().to_string(),
        LeadTier::Nurture => label.dimmed().to_string(),
    }
}

/// Multi-line breakdown of a single result, one line per factor
pub fn format_result_detail(name: &str, result: &ScoreResult, use_colors: bool) -> String {
    let mut lines = Vec::new();

    let header = format!(
        "{}  score {}  confidence {}%",
        format_tier(result.classification, use_colors),
        result.total_score,
        result.confidence
    );
    if use_colors {
        lines.push(format!("{}", name.bold()));
    } else {
        lines.push(name.to_string());
    }
    lines.push(format!("  {}", header));
    if let Some(ref lead_id) = result.lead_id {
        lines.push(format!("  Lead: {}", lead_id));
    }
    lines.push(format!(
        "  Scored: {} (config {})",
        result.scored_at.format("%Y-%m-%d %H:%M UTC"),
        result.config_version
    ));
    lines.push("  Factors:".to_string());

    for factor in &result.factors {
        let impact = format!("{:>6.1}", factor.impact);
        let label = format!("{:<20}", factor.factor);
        let value = format!("{:>5.1} x {:.2}", factor.value, factor.weight);
        if use_colors {
            lines.push(format!(
                "    {} {} = {}  {}",
                label,
                value.dimmed(),
                impact.bold(),
                factor.reasoning.dimmed()
            ));
        } else {
            lines.push(format!(
                "    {} {} = {}  {}",
                label, value, impact, factor.reasoning
            ));
        }
    }

    lines.join("\n")
}

/// Get terminal width, defaulting to None for pipes (unlimited)
fn get_terminal_width() -> Option<usize> {
    terminal_size().map(|(Width(w), _)| w as usize)
}

/// Truncate text to fit available width, accounting for Unicode
fn truncate(text: &str, max_width: usize) -> String {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() <= max_width {
        text.to_string()
    } else if max_width > 3 {
        format!("{}...", chars[..max_width - 3].iter().collect::<String>())
    } else {
        chars[..max_width].iter().collect()
    }
}

fn lead_label(lead: &StoredLead) -> String {
    if lead.company.trim().is_empty() {
        lead.name.clone()
    } else {
        format!("{} ({})", lead.name, lead.company)
    }
}

/// Format leads as a ranked table: Index, Score, Tier, Confidence, Lead, Id
/// No headers. Leads are expected in ranked order.
pub fn format_ranked_table(leads: &[&StoredLead], use_colors: bool) -> String {
    if leads.is_empty() {
        return "No scored leads found.".to_string();
    }

    let term_width = get_terminal_width();
    // index(3) + space + score(4) + 2 + tier(7) + 2 + confidence(4) + 2 separators
    let fixed_width = 3 + 1 + 4 + 2 + 7 + 2 + 4 + 2 * 2;

    leads
        .iter()
        .enumerate()
        .map(|(idx, lead)| {
            let index_str = format!("{:>2}.", idx + 1);
            let score_str = format!("{:>4}", lead.result.total_score);
            let confidence_str = format!("{:>3}%", lead.result.confidence);
            let tier = format_tier(lead.result.classification, use_colors);
            let lead_id = lead.result.lead_id.as_deref().unwrap_or("-");

            let label = lead_label(lead);
            let label = match term_width {
                Some(width) if width > fixed_width + lead_id.len() + 10 => {
                    truncate(&label, width - fixed_width - lead_id.len())
                }
                Some(_) => truncate(&label, 20),
                None => label,
            };

            if use_colors {
                format!(
                    "{} {}  {}  {}  {}  {}",
                    index_str.dimmed(),
                    score_str.bold(),
                    tier,
                    confidence_str,
                    label,
                    lead_id.underline()
                )
            } else {
                format!(
                    "{} {}  {}  {}  {}  {}",
                    index_str, score_str, tier, confidence_str, label, lead_id
                )
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Format leads as tab-separated values for scripting
/// Columns: lead_id, score, tier, confidence, name, company (no headers, no colors)
pub fn format_tsv(leads: &[&StoredLead]) -> String {
    leads
        .iter()
        .map(|lead| {
            format!(
                "{}\t{}\t{}\t{}\t{}\t{}",
                lead.result.lead_id.as_deref().unwrap_or(""),
                lead.result.total_score,
                lead.result.classification,
                lead.result.confidence,
                lead.name,
                lead.company
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
