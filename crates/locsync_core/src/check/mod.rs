use std::collections::BTreeSet;

use crate::store::LocaleStore;
use crate::tree::{Branch, flatten};

/// Outcome of checking one language against the baseline.
#[derive(Debug, Clone, PartialEq)]
pub enum LanguageStatus {
    Complete,
    /// Baseline key paths absent from the language tree.
    Incomplete(BTreeSet<String>),
    /// The translation file is absent or not parsable. Distinct from an
    /// empty missing-set.
    Missing,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LanguageReport {
    pub language: String,
    pub status: LanguageStatus,
}

impl LanguageReport {
    pub fn is_complete(&self) -> bool {
        matches!(self.status, LanguageStatus::Complete)
    }
}

/// Baseline key paths that the target tree lacks. Directional: keys the
/// target has beyond the baseline are never reported.
pub fn missing_keys(baseline: &Branch, target: &Branch) -> BTreeSet<String> {
    flatten(baseline)
        .difference(&flatten(target))
        .cloned()
        .collect()
}

/// Checks every discovered non-baseline language against the baseline.
/// Every language is evaluated before the overall verdict, so one corrupt
/// file never hides the results for the rest.
pub fn check_workspace(store: &LocaleStore) -> crate::Result<Vec<LanguageReport>> {
    let baseline = store.load_baseline()?;
    let mut reports = Vec::new();

    for language in store.discover_languages()? {
        if language == store.baseline() {
            continue;
        }
        let status = match store.load_tree(&language) {
            Ok(target) => {
                let missing = missing_keys(&baseline, &target);
                if missing.is_empty() {
                    LanguageStatus::Complete
                } else {
                    LanguageStatus::Incomplete(missing)
                }
            }
            Err(err) => {
                log::warn!("\"{}\": {}", language, err);
                LanguageStatus::Missing
            }
        };
        reports.push(LanguageReport { language, status });
    }

    Ok(reports)
}

/// The build gate: true iff every checked language is complete.
pub fn all_complete(reports: &[LanguageReport]) -> bool {
    reports.iter().all(|report| report.is_complete())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn tree(value: serde_json::Value) -> Branch {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_missing_keys_reports_baseline_minus_target() {
        let baseline = tree(json!({ "a": { "b": "hello", "c": "world" } }));
        let target = tree(json!({ "a": { "b": "bonjour" } }));
        let missing: Vec<String> = missing_keys(&baseline, &target).into_iter().collect();
        assert_eq!(missing, vec!["a.c"]);
    }

    #[test]
    fn test_target_only_keys_are_not_flagged() {
        let baseline = tree(json!({ "a": "1" }));
        let target = tree(json!({ "a": "1", "extra": "2" }));
        assert!(missing_keys(&baseline, &target).is_empty());
    }

    #[test]
    fn test_synced_tree_reports_nothing_missing() {
        let baseline = tree(json!({ "a": { "b": "hello", "c": "world" } }));
        let target = tree(json!({ "a": { "b": "bonjour" } }));
        let merged = crate::merge_missing(&target, &baseline);
        assert!(missing_keys(&baseline, &merged).is_empty());
    }

    #[test]
    fn test_check_workspace_reports_every_language() {
        let dir = tempfile::tempdir().unwrap();
        let seed = |language: &str, value: &serde_json::Value| {
            let lang_dir = dir.path().join("locales").join(language);
            std::fs::create_dir_all(&lang_dir).unwrap();
            std::fs::write(
                lang_dir.join("translation.json"),
                serde_json::to_string(value).unwrap(),
            )
            .unwrap();
        };
        seed("en", &json!({ "a": { "b": "hello", "c": "world" } }));
        seed("de", &json!({ "a": { "b": "hallo", "c": "welt" } }));
        seed("fr", &json!({ "a": { "b": "bonjour" } }));
        // A language directory without a translation file: entirely
        // missing, and it must not stop evaluation of later languages.
        std::fs::create_dir_all(dir.path().join("locales/es")).unwrap();

        let store =
            crate::LocaleStore::new(dir.path().join("locales"), "translation.json", "en");
        let reports = check_workspace(&store).unwrap();

        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].language, "de");
        assert_eq!(reports[0].status, LanguageStatus::Complete);
        assert_eq!(reports[1].language, "es");
        assert_eq!(reports[1].status, LanguageStatus::Missing);
        assert_eq!(reports[2].language, "fr");
        assert_eq!(
            reports[2].status,
            LanguageStatus::Incomplete(["a.c".to_string()].into())
        );
        assert!(!all_complete(&reports));
    }

    #[test]
    fn test_check_workspace_missing_baseline_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir_all(dir.path().join("locales/de")).unwrap();
        let store =
            crate::LocaleStore::new(dir.path().join("locales"), "translation.json", "en");
        assert!(check_workspace(&store).is_err());
    }

    #[test]
    fn test_all_complete_requires_every_language() {
        let reports = vec![
            LanguageReport {
                language: "de".to_string(),
                status: LanguageStatus::Complete,
            },
            LanguageReport {
                language: "uk".to_string(),
                status: LanguageStatus::Missing,
            },
        ];
        assert!(!all_complete(&reports));
        assert!(all_complete(&reports[..1]));
    }
}
