use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use crate::csv::CsvTable;
use crate::error::{LocaleError, Result};
use crate::store::LocaleStore;
use crate::tree::{Branch, Entry, Node, visit};

/// Where pre-upgrade snapshots go and whether they accumulate.
///
/// The default reproduces the historical behavior: a single
/// `<stem>.backup.json` next to the translation file, overwritten on every
/// run. `versioned` stamps each snapshot instead so nothing is lost, and
/// `dir` redirects snapshots into a staging directory (file names are then
/// prefixed with the language code to keep them apart).
#[derive(Debug, Clone, Default)]
pub struct BackupPolicy {
    pub dir: Option<PathBuf>,
    pub versioned: bool,
}

impl BackupPolicy {
    pub fn backup_path(&self, language: &str, file: &Path) -> PathBuf {
        let stem = file
            .file_stem()
            .and_then(|stem| stem.to_str())
            .unwrap_or("translation");
        let mut name = if self.versioned {
            let stamp = chrono::Utc::now().format("%Y%m%dT%H%M%S");
            format!("{}.backup.{}.json", stem, stamp)
        } else {
            format!("{}.backup.json", stem)
        };
        match &self.dir {
            Some(dir) => {
                name = format!("{}.{}", language, name);
                dir.join(name)
            }
            None => file.with_file_name(name),
        }
    }
}

/// Counts of a full workspace upgrade run.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpgradeSummary {
    pub upgraded: Vec<String>,
    pub skipped: Vec<String>,
}

/// Migrates every plain-string leaf to an annotated record.
///
/// Verification is checked against both the bare key name and the full
/// dotted path: the CSV source of truth is keyed by bare name while the
/// tree is keyed by path. Already-annotated leaves pass through unchanged,
/// so the migration is safe to re-run. Opaque values pass through.
pub fn upgrade_tree(tree: &Branch, verified: &HashSet<String>) -> Branch {
    upgrade_branch(tree, "", verified)
}

fn upgrade_branch(branch: &Branch, prefix: &str, verified: &HashSet<String>) -> Branch {
    let mut upgraded = Branch::with_capacity(branch.len());
    for (key, node) in branch {
        let path = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{}.{}", prefix, key)
        };
        let new_node = match node {
            Node::Branch(child) => Node::Branch(upgrade_branch(child, &path, verified)),
            Node::Text(text) => Node::Entry(Entry {
                text: text.clone(),
                human_verified: verified.contains(key) || verified.contains(path.as_str()),
            }),
            other => other.clone(),
        };
        upgraded.insert(key.clone(), new_node);
    }
    upgraded
}

/// Translation keys confirmed by a human, scanned from the master CSV data
/// rows. A key qualifies when it starts with one of the configured
/// prefixes. Rows are fully parsed, so a quoted value containing an early
/// comma cannot corrupt key detection.
pub fn verified_keys(table: &CsvTable, prefixes: &[String]) -> HashSet<String> {
    let mut keys = HashSet::new();
    for row in table.data_rows() {
        let Some(key) = row.first() else {
            continue;
        };
        if prefixes.iter().any(|prefix| key.starts_with(prefix.as_str())) {
            keys.insert(key.clone());
        }
    }
    keys
}

/// Upgrades every discovered language, backing each file up first.
///
/// The master CSV is the verification source of truth: failing to read it
/// aborts the run. A language whose tree cannot be loaded is logged,
/// counted as skipped, and the run continues.
pub fn upgrade_workspace(
    store: &LocaleStore,
    master_csv: &Path,
    prefixes: &[String],
    policy: &BackupPolicy,
) -> Result<UpgradeSummary> {
    let csv_text = fs::read_to_string(master_csv).map_err(|source| LocaleError::Read {
        path: master_csv.to_path_buf(),
        source,
    })?;
    let verified = verified_keys(&CsvTable::parse(&csv_text), prefixes);
    log::info!(
        "{} human-verified keys found in \"{}\"",
        verified.len(),
        master_csv.display()
    );

    if let Some(dir) = &policy.dir {
        fs::create_dir_all(dir).map_err(|source| LocaleError::Write {
            path: dir.clone(),
            source,
        })?;
    }

    let mut summary = UpgradeSummary::default();
    for language in store.discover_languages()? {
        let tree = match store.load_tree(&language) {
            Ok(tree) => tree,
            Err(err) => {
                log::warn!("skipping \"{}\": {}", language, err);
                summary.skipped.push(language);
                continue;
            }
        };

        let path = store.tree_path(&language);
        let backup = policy.backup_path(&language, &path);
        fs::copy(&path, &backup).map_err(|source| LocaleError::Write {
            path: backup.clone(),
            source,
        })?;

        let upgraded = upgrade_tree(&tree, &verified);
        store.save_tree(&language, &upgraded)?;

        let mut confirmed = 0usize;
        visit(&upgraded, &mut |_, node| {
            if matches!(node, Node::Entry(entry) if entry.human_verified) {
                confirmed += 1;
            }
        });
        log::info!("\"{}\": upgraded, {} leaves human-verified", language, confirmed);
        summary.upgraded.push(language);
    }

    log::info!(
        "upgrade finished: {} upgraded, {} skipped",
        summary.upgraded.len(),
        summary.skipped.len()
    );
    Ok(summary)
}
