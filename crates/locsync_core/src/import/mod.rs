use std::collections::HashMap;
use std::fs;
use std::path::Path;

use crate::csv::{CsvLine, CsvTable};
use crate::error::{LocaleError, Result};
use crate::store::write_atomic;

/// What an import run did, for reporting.
#[derive(Debug, Clone, PartialEq)]
pub struct ImportReport {
    pub inserted_at: usize,
    pub data_rows: usize,
}

/// Splices a new language column into the master table at `insert_index`.
///
/// The incoming table is reduced to a `key -> text` map from its own key
/// column and the column named by `code` in its header (falling back to
/// column 1), so unrelated columns it carries are ignored. Line 0 of the
/// master gets the language code, line 1 the display name, and every data
/// row the mapped text, empty when the key is unknown to the incoming
/// table. Blank lines pass through. The operation is positional: no
/// column-name lookup is done on the master, and the index is clamped to
/// each row's length so short rows splice at their end.
pub fn merge_language_column(
    master: &CsvTable,
    incoming: &CsvTable,
    insert_index: usize,
    code: &str,
    display_name: &str,
) -> CsvTable {
    let mapping = incoming_mapping(incoming, code);

    let lines = master
        .lines()
        .iter()
        .enumerate()
        .map(|(idx, line)| match line {
            CsvLine::Blank => CsvLine::Blank,
            CsvLine::Row(fields) => {
                let value = match idx {
                    0 => code.to_string(),
                    1 => display_name.to_string(),
                    _ => fields
                        .first()
                        .and_then(|key| mapping.get(key))
                        .cloned()
                        .unwrap_or_default(),
                };
                let mut fields = fields.clone();
                let at = insert_index.min(fields.len());
                fields.insert(at, value);
                CsvLine::Row(fields)
            }
        })
        .collect();

    CsvTable::from_lines(lines)
}

fn incoming_mapping(incoming: &CsvTable, code: &str) -> HashMap<String, String> {
    let value_column = incoming
        .header()
        .and_then(|header| header.iter().position(|column| column == code))
        .unwrap_or(1);

    let mut mapping = HashMap::new();
    for row in incoming.data_rows() {
        let Some(key) = row.first() else {
            continue;
        };
        let value = row.get(value_column).cloned().unwrap_or_default();
        mapping.insert(key.clone(), value);
    }
    mapping
}

/// Merges a single-language CSV export into the master CSV on disk.
/// Destructive on the master file; the rewrite goes through a temp file
/// and a rename. `insert_index` defaults to appending after the last
/// master column.
pub fn import_language(
    master_path: &Path,
    incoming_path: &Path,
    insert_index: Option<usize>,
    code: &str,
    display_name: &str,
) -> Result<ImportReport> {
    let master_text = fs::read_to_string(master_path).map_err(|source| LocaleError::Read {
        path: master_path.to_path_buf(),
        source,
    })?;
    let incoming_text = fs::read_to_string(incoming_path).map_err(|source| LocaleError::Read {
        path: incoming_path.to_path_buf(),
        source,
    })?;

    let master = CsvTable::parse(&master_text);
    let incoming = CsvTable::parse(&incoming_text);

    let at = insert_index
        .unwrap_or_else(|| master.header().map(|header| header.len()).unwrap_or(0));
    let merged = merge_language_column(&master, &incoming, at, code, display_name);
    write_atomic(master_path, &merged.to_string())?;

    Ok(ImportReport {
        inserted_at: at,
        data_rows: merged.data_rows().count(),
    })
}
