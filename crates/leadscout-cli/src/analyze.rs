//! The `analyze` command: load config, read profiles, score, render.

use std::path::Path;

use anyhow::Context;
use leadscout_core::{Lead, Profile};
use leadscout_engine::LeadEngine;

use crate::OutputFormat;

/// Run the full analysis over a JSON profile batch.
///
/// Malformed individual records are logged and skipped; only an unreadable
/// file or a non-array document is fatal.
pub(crate) fn run_analyze(
    input: &Path,
    config_path: &Path,
    format: OutputFormat,
    limit: Option<usize>,
) -> anyhow::Result<()> {
    let config = leadscout_core::load_config(config_path)
        .with_context(|| format!("loading scoring config from {}", config_path.display()))?;
    let engine = LeadEngine::new(config)?;

    let profiles = read_profiles(input)?;
    if profiles.is_empty() {
        println!("no parseable profile records in {}", input.display());
        return Ok(());
    }

    let mut leads = engine.analyze(&profiles);
    if let Some(limit) = limit {
        leads.truncate(limit);
    }

    if leads.is_empty() {
        println!("no leads met the minimum qualifying score");
        return Ok(());
    }

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&leads)?);
        }
        OutputFormat::Table => {
            print!("{}", render_table(&leads, &engine.config().output_columns));
        }
    }

    println!(
        "{} qualified lead(s) from {} profile(s)",
        leads.len(),
        profiles.len()
    );
    Ok(())
}

fn read_profiles(path: &Path) -> anyhow::Result<Vec<Profile>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading profile batch from {}", path.display()))?;
    parse_profiles(&content)
}

/// Parse a JSON array of profile records, skipping malformed entries.
///
/// Per-record failures must never abort the batch: each element is
/// deserialized on its own and failures are logged with their index.
fn parse_profiles(content: &str) -> anyhow::Result<Vec<Profile>> {
    let records: Vec<serde_json::Value> =
        serde_json::from_str(content).context("input must be a JSON array of profile records")?;

    let mut profiles = Vec::with_capacity(records.len());
    let mut skipped = 0usize;
    for (index, record) in records.into_iter().enumerate() {
        match serde_json::from_value::<Profile>(record) {
            Ok(profile) => profiles.push(profile),
            Err(e) => {
                skipped += 1;
                tracing::warn!(record = index, error = %e, "skipping malformed profile record");
            }
        }
    }
    if skipped > 0 {
        tracing::warn!(skipped, kept = profiles.len(), "dropped malformed profile records");
    }
    Ok(profiles)
}

/// Render leads as a text table projecting `columns` in order.
fn render_table(leads: &[Lead], columns: &[String]) -> String {
    let mut widths: Vec<usize> = columns.iter().map(String::len).collect();
    let rows: Vec<Vec<String>> = leads
        .iter()
        .map(|lead| {
            columns
                .iter()
                .enumerate()
                .map(|(i, column)| {
                    let value = field_value(lead, column);
                    widths[i] = widths[i].max(value.len());
                    value
                })
                .collect()
        })
        .collect();

    let mut out = String::new();
    for (i, column) in columns.iter().enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(&format!("{column:<width$}", width = widths[i]));
    }
    out.push('\n');
    for (i, width) in widths.iter().enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(&"-".repeat(*width));
    }
    out.push('\n');
    for row in rows {
        for (i, value) in row.iter().enumerate() {
            if i > 0 {
                out.push_str("  ");
            }
            out.push_str(&format!("{value:<width$}", width = widths[i]));
        }
        out.push('\n');
    }
    out
}

/// One output cell for a lead, by column name.
///
/// Unknown names render empty; they are rejected at config load, so this
/// arm is unreachable in practice.
fn field_value(lead: &Lead, column: &str) -> String {
    match column {
        "handle" => lead.handle.clone(),
        "account_type" => lead.account_type.to_string(),
        "smm_need_score" => lead.smm_need_score.to_string(),
        "score_grade" => lead.score_grade.clone(),
        "score_reasons" => lead.score_reasons.join(" | "),
        "posting_pattern" => lead.posting_pattern.to_string(),
        "follower_count" => lead.follower_count.to_string(),
        "follower_tier" => lead.follower_tier.clone(),
        "days_since_last_post" => lead.days_since_last_post.to_string(),
        "struggle_keywords_found" => lead.struggle_keywords_found.join(", "),
        "struggle_tweets" => lead
            .struggle_tweets
            .iter()
            .map(|s| format!("[T{}] {}", s.tier, s.text))
            .collect::<Vec<_>>()
            .join(" | "),
        "bio" => lead.bio.clone(),
        "profile_url" => lead.profile_url.clone(),
        _ => String::new(),
    }
}
