use std::path::Path;

use ansi_term::Colour::{Green, Red, Yellow};
use locsync_core::{ImportReport, LanguageReport, LanguageStatus, SyncOutcome, UpgradeSummary};

pub fn print_sync_report(outcomes: &[SyncOutcome]) {
    for outcome in outcomes {
        if outcome.added > 0 {
            println!(
                "✅ {}: {}",
                outcome.language,
                Green.paint(format!("added {} missing keys", outcome.added))
            );
        } else {
            println!("✅ {}: up to date", outcome.language);
        }
    }
}

pub fn print_check_report(reports: &[LanguageReport]) {
    for report in reports {
        match &report.status {
            LanguageStatus::Complete => {
                println!("✅ {}: {}", report.language, Green.paint("complete"));
            }
            LanguageStatus::Incomplete(missing) => {
                println!(
                    "❌ {}: {}",
                    report.language,
                    Red.paint(format!("incomplete, {} keys missing", missing.len()))
                );
                for key in missing {
                    println!("     {}", key);
                }
            }
            LanguageStatus::Missing => {
                println!(
                    "⚠️ {}: {}",
                    report.language,
                    Yellow.paint("translation file missing or unreadable")
                );
            }
        }
    }
}

pub fn print_upgrade_report(summary: &UpgradeSummary) {
    for language in &summary.upgraded {
        println!("✅ {}: {}", language, Green.paint("upgraded"));
    }
    for language in &summary.skipped {
        println!("⚠️ {}: {}", language, Yellow.paint("skipped"));
    }
    println!(
        "{} upgraded, {} skipped",
        summary.upgraded.len(),
        summary.skipped.len()
    );
}

pub fn print_import_report(master: &Path, language: &str, report: &ImportReport) {
    println!(
        "✅ merged \"{}\" into \"{}\" at column {} ({} data rows)",
        language,
        master.display(),
        report.inserted_at,
        report.data_rows
    );
}
