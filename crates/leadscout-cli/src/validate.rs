//! The `validate` command: load a config and report its shape.

use std::path::Path;

use anyhow::Context;

pub(crate) fn run_validate(config_path: &Path) -> anyhow::Result<()> {
    let config = leadscout_core::load_config(config_path)
        .with_context(|| format!("loading scoring config from {}", config_path.display()))?;

    println!("configuration OK: {}", config_path.display());
    println!(
        "  struggle keywords: {} tier-1, {} tier-2",
        config.keywords.tier1_struggle.len(),
        config.keywords.tier2_struggle.len()
    );
    println!(
        "  bio keywords: {} founder, {} project",
        config.keywords.founder_bio.len(),
        config.keywords.project_bio.len()
    );
    println!("  follower tiers: {}", config.follower_tiers.len());
    let grade_labels: Vec<&str> = config.grades.iter().map(|g| g.label.as_str()).collect();
    println!("  grades: {}", grade_labels.join(", "));
    println!("  minimum qualifying score: {}", config.min_qualifying_score);
    println!("  sort priority: {}", config.sort_priority.join(", "));

    Ok(())
}
