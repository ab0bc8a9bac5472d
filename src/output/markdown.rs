// Markdown report generation for batch runs.
//
// Writes a summary table plus a per-message breakdown of flagged items.
// Returns the path written so the caller can print it.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::Utc;

use crate::engine::Assessment;
use crate::output::truncate_chars;

/// Generate a markdown report for a batch of analyzed messages.
pub fn generate_report(
    assessments: &[(String, Assessment)],
    output_path: &str,
) -> Result<String> {
    let mut doc = String::new();

    doc.push_str("# Kavach Batch Report\n\n");
    doc.push_str(&format!("Generated: {}\n\n", Utc::now().to_rfc3339()));
    doc.push_str(&format!("Messages analyzed: {}\n\n", assessments.len()));

    doc.push_str("## Verdict breakdown\n\n");
    doc.push_str("| Verdict | Count |\n|---|---|\n");
    for verdict in [
        "HIGH RISK SCAM",
        "SUSPICIOUS",
        "CAUTION ADVISED",
        "LOW RISK",
        "POSSIBLY SAFE",
    ] {
        let count = assessments.iter().filter(|(_, a)| a.verdict == verdict).count();
        doc.push_str(&format!("| {verdict} | {count} |\n"));
    }

    let flagged: Vec<&(String, Assessment)> = assessments
        .iter()
        .filter(|(_, a)| a.badge_class != "safe")
        .collect();

    if !flagged.is_empty() {
        doc.push_str("\n## Flagged messages\n\n");
        for (message, assessment) in &flagged {
            doc.push_str(&format!(
                "### {} (score {})\n\n",
                assessment.verdict, assessment.total_score
            ));
            doc.push_str(&format!("> {}\n\n", truncate_chars(message, 200)));
            for record in &assessment.matches {
                doc.push_str(&format!(
                    "- **{}** (+{}, {}): {}\n",
                    record.pattern,
                    record.score,
                    record.severity,
                    truncate_chars(&record.keywords.join(", "), 120),
                ));
            }
            doc.push('\n');
        }
    }

    if let Some(parent) = Path::new(output_path).parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create report directory {}", parent.display()))?;
        }
    }
    fs::write(output_path, &doc)
        .with_context(|| format!("Failed to write report to {output_path}"))?;

    Ok(output_path.to_string())
}
