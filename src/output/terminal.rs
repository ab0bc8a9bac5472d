// Colored terminal output for assessments and the rule registry.
//
// This module handles all terminal-specific formatting: colors, tables,
// summary blocks. The main.rs display paths delegate here.

use colored::Colorize;

use crate::ai::AiVerdict;
use crate::engine::{Assessment, Registry, Severity};

/// Display a full assessment for a single message.
pub fn display_assessment(assessment: &Assessment) {
    println!(
        "\n{}",
        format!("=== {} (score {}) ===", assessment.verdict, assessment.total_score).bold()
    );
    println!("  {}", colorize_badge(&assessment.verdict_text, &assessment.badge_class));

    if !assessment.matches.is_empty() {
        println!("\n  {} signals detected:", assessment.matches.len());
        for record in &assessment.matches {
            println!(
                "    {:>4}  {}  [{}]",
                record.score,
                record.pattern.bold(),
                colorize_severity(record.severity),
            );
            let evidence = record.keywords.join(", ");
            println!("          {}", super::truncate_chars(&evidence, 100).dimmed());
        }
    }

    println!("\n  {}", "Explanation".bold());
    println!("  {}", assessment.explanation);

    if !assessment.safety_tips.is_empty() {
        println!("\n  {}", "Safety tips".bold());
        for tip in &assessment.safety_tips {
            println!("    - {tip}");
        }
    }
    println!();
}

/// Display an AI-derived verdict (same layout, no signal table).
pub fn display_ai_verdict(verdict: &AiVerdict) {
    println!("\n{}", format!("=== {} ===", verdict.verdict).bold());
    println!("  {}", colorize_badge(&verdict.verdict_text, &verdict.badge_class));

    println!("\n  {}", "Explanation".bold());
    println!("  {}", verdict.explanation);

    if !verdict.safety_tips.is_empty() {
        println!("\n  {}", "Safety tips".bold());
        for tip in &verdict.safety_tips {
            println!("    - {tip}");
        }
    }
    println!();
}

/// Display per-tier counts after a batch run.
pub fn display_batch_summary(assessments: &[(String, Assessment)]) {
    println!(
        "\n{}",
        format!("=== Batch Summary ({} messages) ===", assessments.len()).bold()
    );

    for verdict in [
        "HIGH RISK SCAM",
        "SUSPICIOUS",
        "CAUTION ADVISED",
        "LOW RISK",
        "POSSIBLY SAFE",
    ] {
        let count = assessments.iter().filter(|(_, a)| a.verdict == verdict).count();
        if count > 0 {
            println!("  {:>4}  {}", count, colorize_badge(verdict, badge_for(verdict)));
        }
    }

    let flagged: Vec<&(String, Assessment)> = assessments
        .iter()
        .filter(|(_, a)| a.badge_class != "safe")
        .collect();

    if !flagged.is_empty() {
        println!("\n  Flagged messages:");
        for (message, assessment) in &flagged {
            println!(
                "    [{:>3}] {}",
                assessment.total_score,
                super::truncate_chars(message, 90).dimmed()
            );
        }
    }
    println!();
}

/// Display the rule registry: patterns, category groups, phrase rules.
pub fn display_registry(registry: &Registry) {
    println!(
        "\n{}",
        format!("=== Rule Registry ({} patterns) ===", registry.patterns.len()).bold()
    );
    println!();
    println!(
        "  {:<28} {:<10} {:>9}  {:>5}",
        "Pattern".dimmed(),
        "Severity".dimmed(),
        "Keywords".dimmed(),
        "Tips".dimmed(),
    );
    println!("  {}", "-".repeat(58).dimmed());
    for pattern in &registry.patterns {
        println!(
            "  {:<28} {:<10} {:>9}  {:>5}",
            pattern.name,
            colorize_severity(pattern.severity),
            pattern.keywords.len(),
            pattern.safety_tips.len(),
        );
    }

    println!("\n  Category groups:");
    for group in &registry.categories {
        println!(
            "    {:<12} {}",
            group.label,
            super::truncate_chars(&group.keywords.join(", "), 80).dimmed()
        );
    }

    println!("\n  Special phrases:");
    for rule in &registry.phrases {
        println!("    {:>4}  \"{}\" → {}", rule.score, rule.phrase, rule.pattern);
    }
    println!();
}

/// Colorize text by badge class.
fn colorize_badge(text: &str, badge_class: &str) -> colored::ColoredString {
    match badge_class {
        "danger" => text.red().bold(),
        "warning" => text.bright_red(),
        "caution" => text.yellow(),
        "safe" => text.green(),
        _ => text.normal(),
    }
}

fn badge_for(verdict: &str) -> &'static str {
    match verdict {
        "HIGH RISK SCAM" => "danger",
        "SUSPICIOUS" => "warning",
        "CAUTION ADVISED" => "caution",
        _ => "safe",
    }
}

/// Colorize a severity tag.
fn colorize_severity(severity: Severity) -> colored::ColoredString {
    match severity {
        Severity::High => severity.as_str().red().bold(),
        Severity::Medium => severity.as_str().yellow(),
        Severity::Low => severity.as_str().green(),
    }
}
