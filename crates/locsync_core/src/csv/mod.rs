use std::fmt;

/// Index of the first data line in a translation CSV. Line 0 holds the
/// column keys, line 1 the human-readable language display names.
pub const DATA_LINE_START: usize = 2;

/// Parses one CSV line into its fields, honoring quoted fields and
/// doubled-quote escapes. A `,` inside quotes is literal. An unbalanced
/// trailing quote is not an error: the scanner flushes whatever it
/// accumulated.
pub fn parse_row(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' => {
                if quoted && chars.peek() == Some(&'"') {
                    current.push('"');
                    chars.next();
                } else {
                    quoted = !quoted;
                }
            }
            ',' if !quoted => {
                fields.push(std::mem::take(&mut current));
            }
            other => current.push(other),
        }
    }

    fields.push(current);
    fields
}

/// Wraps a field in quotes, doubling internal quotes, iff it contains a
/// comma, a quote or a newline. Other fields are returned unchanged.
pub fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

pub fn serialize_row<S: AsRef<str>>(fields: &[S]) -> String {
    fields
        .iter()
        .map(|field| escape_field(field.as_ref()))
        .collect::<Vec<_>>()
        .join(",")
}

#[derive(Debug, Clone, PartialEq)]
pub enum CsvLine {
    Blank,
    Row(Vec<String>),
}

/// A CSV file as an ordered sequence of lines. Blank lines are kept so
/// that rewriting a table reproduces the original layout.
///
/// Lines are split on `\n` before any field parsing, so embedded newlines
/// inside quoted fields are not supported: such a field is split across
/// two rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CsvTable {
    lines: Vec<CsvLine>,
}

impl CsvTable {
    pub fn parse(text: &str) -> CsvTable {
        let lines = text
            .split('\n')
            .map(|line| {
                let line = line.strip_suffix('\r').unwrap_or(line);
                if line.is_empty() {
                    CsvLine::Blank
                } else {
                    CsvLine::Row(parse_row(line))
                }
            })
            .collect();
        CsvTable { lines }
    }

    pub fn from_lines(lines: Vec<CsvLine>) -> CsvTable {
        CsvTable { lines }
    }

    pub fn lines(&self) -> &[CsvLine] {
        &self.lines
    }

    /// Data rows only: non-blank lines from [`DATA_LINE_START`] on.
    pub fn data_rows(&self) -> impl Iterator<Item = &Vec<String>> {
        self.lines
            .iter()
            .skip(DATA_LINE_START)
            .filter_map(|line| match line {
                CsvLine::Row(fields) => Some(fields),
                CsvLine::Blank => None,
            })
    }

    /// The column-key header, when line 0 is a row.
    pub fn header(&self) -> Option<&Vec<String>> {
        match self.lines.first() {
            Some(CsvLine::Row(fields)) => Some(fields),
            _ => None,
        }
    }
}

impl fmt::Display for CsvTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, line) in self.lines.iter().enumerate() {
            if idx > 0 {
                f.write_str("\n")?;
            }
            if let CsvLine::Row(fields) = line {
                f.write_str(&serialize_row(fields))?;
            }
        }
        Ok(())
    }
}
