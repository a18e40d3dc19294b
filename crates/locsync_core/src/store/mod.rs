use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::config::LocaleRc;
use crate::error::{LocaleError, Result};
use crate::tree::Branch;

/// Filesystem access to a locales directory: one sub-directory per
/// language code, each holding one translation file.
#[derive(Debug, Clone)]
pub struct LocaleStore {
    locales_root: PathBuf,
    file_name: String,
    baseline: String,
}

impl LocaleStore {
    pub fn new(
        locales_root: PathBuf,
        file_name: impl Into<String>,
        baseline: impl Into<String>,
    ) -> Self {
        Self {
            locales_root,
            file_name: file_name.into(),
            baseline: baseline.into(),
        }
    }

    pub fn from_config(workspace_root: &Path, rc: &LocaleRc) -> Self {
        Self::new(
            workspace_root.join(&rc.locales_dir),
            rc.translation_file.clone(),
            rc.baseline.clone(),
        )
    }

    pub fn baseline(&self) -> &str {
        &self.baseline
    }

    pub fn tree_path(&self, language: &str) -> PathBuf {
        self.locales_root.join(language).join(&self.file_name)
    }

    /// Language codes are the sub-directory names, never a hardcoded list.
    /// Sorted so that reports and logs are stable across filesystems.
    pub fn discover_languages(&self) -> Result<Vec<String>> {
        let mut languages = Vec::new();
        for entry in WalkDir::new(&self.locales_root).min_depth(1).max_depth(1) {
            let entry = entry.map_err(|err| LocaleError::ListLocales {
                path: self.locales_root.clone(),
                source: err
                    .into_io_error()
                    .unwrap_or_else(|| std::io::Error::other("directory walk failed")),
            })?;
            if entry.file_type().is_dir() {
                if let Some(name) = entry.file_name().to_str() {
                    languages.push(name.to_string());
                }
            }
        }
        languages.sort();
        log::debug!("discovered languages: {:?}", languages);
        Ok(languages)
    }

    pub fn load_tree(&self, language: &str) -> Result<Branch> {
        let path = self.tree_path(language);
        let content = fs::read_to_string(&path).map_err(|source| LocaleError::Read {
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| LocaleError::Json { path, source })
    }

    pub fn load_baseline(&self) -> Result<Branch> {
        self.load_tree(&self.baseline)
    }

    /// Whole-file rewrite through a sibling temp file and a rename, so an
    /// interrupted run cannot leave a truncated tree behind.
    pub fn save_tree(&self, language: &str, tree: &Branch) -> Result<()> {
        let path = self.tree_path(language);
        let mut content =
            serde_json::to_string_pretty(tree).map_err(|source| LocaleError::Json {
                path: path.clone(),
                source,
            })?;
        content.push('\n');
        write_atomic(&path, &content)
    }
}

pub(crate) fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let mut tmp_name = path
        .file_name()
        .map(|name| name.to_os_string())
        .unwrap_or_default();
    tmp_name.push(".tmp");
    let tmp = path.with_file_name(tmp_name);

    fs::write(&tmp, contents).map_err(|source| LocaleError::Write {
        path: tmp.clone(),
        source,
    })?;
    fs::rename(&tmp, path).map_err(|source| LocaleError::Write {
        path: path.to_path_buf(),
        source,
    })
}
