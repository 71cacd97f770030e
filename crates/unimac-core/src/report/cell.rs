// ── Cell values and spreadsheet addressing ──

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Serialize, Serializer};

/// Text form of [`Cell::Timestamp`] in table, CSV, and JSON output.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One rendered value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cell {
    Text(String),
    Integer(i64),
    /// Local wall-clock time. A date cell in XLSX, text elsewhere.
    Timestamp(NaiveDateTime),
    /// No value: empty in text formats, `null` in JSON, unwritten in XLSX.
    Blank,
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}

impl From<Option<i64>> for Cell {
    fn from(n: Option<i64>) -> Self {
        n.map_or(Self::Blank, Self::Integer)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(s) => f.write_str(s),
            Self::Integer(n) => write!(f, "{n}"),
            Self::Timestamp(t) => write!(f, "{}", t.format(TIMESTAMP_FORMAT)),
            Self::Blank => Ok(()),
        }
    }
}

impl Serialize for Cell {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Text(s) => serializer.serialize_str(s),
            Self::Integer(n) => serializer.serialize_i64(*n),
            Self::Timestamp(t) => serializer.collect_str(&t.format(TIMESTAMP_FORMAT)),
            Self::Blank => serializer.serialize_none(),
        }
    }
}

// ── A1 addressing ────────────────────────────────────────────────────

/// Spreadsheet column letters for a zero-based index.
///
/// Bijective base-26: `0 → A`, `25 → Z`, `26 → AA`, `701 → ZZ`, `702 → AAA`.
pub fn column_name(index: u16) -> String {
    let mut n = u32::from(index) + 1;
    let mut letters = Vec::new();
    while n > 0 {
        let rem = (n - 1) % 26;
        letters.push(char::from(b'A' + u8::try_from(rem).unwrap_or_default()));
        n = (n - 1) / 26;
    }
    letters.iter().rev().collect()
}

/// Absolute range such as `$A$1:$L$9`, corners given zero-based.
pub fn absolute_range(first_row: u32, first_col: u16, last_row: u32, last_col: u16) -> String {
    format!(
        "${}${}:${}${}",
        column_name(first_col),
        u64::from(first_row) + 1,
        column_name(last_col),
        u64::from(last_row) + 1
    )
}
