use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".locrc.json";

/// Workspace configuration, read from `.locrc.json` at the workspace
/// root. Every field has a default so the file is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocaleRc {
    /// The reference language whose tree defines which key paths exist.
    pub baseline: String,
    /// Directory holding one sub-directory per language code.
    pub locales_dir: String,
    /// Translation file name inside each language directory.
    pub translation_file: String,
    /// The master multi-language CSV, relative to the workspace root.
    pub master_csv: String,
    /// Key prefixes whose CSV rows count as human-verified.
    pub verified_prefixes: Vec<String>,
}

impl Default for LocaleRc {
    fn default() -> Self {
        Self {
            baseline: "en".to_string(),
            locales_dir: "locales".to_string(),
            translation_file: "translation.json".to_string(),
            master_csv: "translations.csv".to_string(),
            verified_prefixes: vec!["menu_".to_string(), "option_".to_string()],
        }
    }
}

/// Loads the configuration, falling back to defaults when the file is
/// absent or malformed. A malformed file is an error worth logging but
/// never aborts a run.
pub fn load_config(explicit: Option<&Path>, workspace_root: &Path) -> LocaleRc {
    let path: PathBuf = match explicit {
        Some(path) => path.to_path_buf(),
        None => workspace_root.join(CONFIG_FILE_NAME),
    };

    let content = match fs::read_to_string(&path) {
        Ok(content) => content,
        Err(err) => {
            if explicit.is_some() {
                log::error!("failed to read config file {:?}: {}", path, err);
            } else {
                log::info!("no config file at {:?}, using defaults", path);
            }
            return LocaleRc::default();
        }
    };

    match serde_json::from_str(&content) {
        Ok(config) => {
            log::info!("loaded config file: {:?}", path);
            config
        }
        Err(err) => {
            log::error!("failed to parse config file {:?}: {}", path, err);
            LocaleRc::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(load_config(None, dir.path()), LocaleRc::default());
    }

    #[test]
    fn test_malformed_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILE_NAME), "{ nope").unwrap();
        assert_eq!(load_config(None, dir.path()), LocaleRc::default());
    }

    #[test]
    fn test_partial_file_keeps_defaults_for_missing_fields() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{ "baseline": "en-US", "verifiedPrefixes": ["menu_"] }"#,
        )
        .unwrap();

        let config = load_config(None, dir.path());
        assert_eq!(config.baseline, "en-US");
        assert_eq!(config.verified_prefixes, vec!["menu_"]);
        assert_eq!(config.locales_dir, "locales");
        assert_eq!(config.master_csv, "translations.csv");
    }

    #[test]
    fn test_explicit_path_wins_over_workspace_root() {
        let dir = tempfile::tempdir().unwrap();
        let custom = dir.path().join("custom.json");
        fs::write(&custom, r#"{ "localesDir": "i18n" }"#).unwrap();
        fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{ "localesDir": "ignored" }"#,
        )
        .unwrap();

        let config = load_config(Some(&custom), dir.path());
        assert_eq!(config.locales_dir, "i18n");
    }
}
