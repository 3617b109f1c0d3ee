//! CLI presentation: text and JSON renderings of build results.

use crate::build::BuildReport;
use crate::error::ApiError;
use crate::summary::Summary;
use chrono::{SecondsFormat, Utc};
use comfy_table::presets::UTF8_FULL;
use comfy_table::Table;
use owo_colors::OwoColorize;
use serde_json::json;
use std::path::Path;

/// Per-entry notices, per-group counts, and the summary table.
pub fn format_build_report_text(report: &BuildReport, summary: &Summary, color: bool) -> String {
    let mut lines = Vec::new();

    for group in &report.groups {
        for entry in &group.entries {
            lines.push(format_notice(&entry.original, &entry.revised, color));
        }
        let count = group.revised.to_string();
        let noun = if group.revised == 1 { "file" } else { "files" };
        if color {
            lines.push(format!("Revved {} {}", count.cyan(), noun));
        } else {
            lines.push(format!("Revved {} {}", count, noun));
        }
    }

    if !summary.is_empty() {
        let mut table = Table::new();
        table.load_preset(UTF8_FULL);
        table.set_header(vec!["Original", "Revised"]);
        for (original, revised) in summary.snapshot() {
            table.add_row(vec![original, revised]);
        }
        lines.push(table.to_string());
    }

    lines.join("\n")
}

/// `✔ <original> changed to <revised file name>`
pub fn format_notice(original: &Path, revised: &Path, color: bool) -> String {
    let revised_name = revised
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    if color {
        format!(
            "{} {} {} {}",
            "✔".green(),
            original.display(),
            "changed to".dimmed(),
            revised_name
        )
    } else {
        format!("✔ {} changed to {}", original.display(), revised_name)
    }
}

/// JSON document with per-group counts and the full summary.
pub fn format_build_report_json(report: &BuildReport, summary: &Summary) -> Result<String, ApiError> {
    let groups: Vec<_> = report
        .groups
        .iter()
        .map(|g| {
            json!({
                "group": g.group,
                "revised": g.revised,
                "companions": g.companions,
            })
        })
        .collect();
    let out = json!({
        "generated_at": Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        "revised": report.total_revised(),
        "companions": report.total_companions(),
        "groups": groups,
        "summary": summary.snapshot(),
    });
    serde_json::to_string_pretty(&out)
        .map_err(|e| ApiError::Summary(format!("Failed to serialize report: {}", e)))
}

/// One `file -> revised name` line per hashed file.
pub fn format_hash_rows(rows: &[(String, String)]) -> String {
    rows.iter()
        .map(|(file, name)| format!("{} -> {}", file, name))
        .collect::<Vec<_>>()
        .join("\n")
}
