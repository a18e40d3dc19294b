mod check;
mod config;
mod csv;
mod error;
mod import;
mod store;
mod sync;
mod tree;
mod upgrade;

pub use check::{LanguageReport, LanguageStatus, all_complete, check_workspace, missing_keys};
pub use config::{LocaleRc, load_config};
pub use csv::{CsvLine, CsvTable, escape_field, parse_row, serialize_row};
pub use error::{LocaleError, Result};
pub use import::{ImportReport, import_language, merge_language_column};
pub use store::LocaleStore;
pub use sync::{SyncOutcome, merge_missing, sync_workspace};
pub use tree::{Branch, Entry, Node, flatten, visit};
pub use upgrade::{
    BackupPolicy, UpgradeSummary, upgrade_tree, upgrade_workspace, verified_keys,
};
