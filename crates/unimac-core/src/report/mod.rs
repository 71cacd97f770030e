//! Report rendering: table, CSV, JSON, XLSX.
//!
//! Every renderer walks the same column enum, so labels, order, and cell
//! values agree across formats. Renderers write into any [`Write`]; callers
//! that produce files render into memory first and create the file only
//! once rendering has succeeded.

pub mod cell;
pub mod columns;
mod csv;
mod json;
mod table;
mod xlsx;

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use strum::IntoEnumIterator;
use thiserror::Error;

pub use cell::{Cell, absolute_range, column_name};
pub use columns::{ClientColumn, DeviceColumn};

// ── Row contract ─────────────────────────────────────────────────────

/// A record that can be laid out as one report row.
pub trait ReportRow {
    /// Column set; declaration order is output order, the static string is
    /// the header label.
    type Column: IntoEnumIterator + Into<&'static str> + Copy;

    /// Worksheet name for spreadsheet output.
    const TITLE: &'static str;

    fn cell(&self, column: Self::Column) -> Cell;
}

/// Columns of `R` in output order.
pub fn columns<R: ReportRow>() -> impl Iterator<Item = R::Column> {
    R::Column::iter()
}

/// Header labels of `R` in output order.
pub fn header<R: ReportRow>() -> Vec<&'static str> {
    columns::<R>().map(Into::into).collect()
}

// ── Errors ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("unsupported extension for {}", path.display())]
    UnsupportedExtension { path: PathBuf },

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error("CSV encoding failed: {0}")]
    Csv(#[from] ::csv::Error),

    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("XLSX encoding failed: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),
}

// ── Format selection ─────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum ReportFormat {
    /// Aligned text table, for terminals.
    Table,
    Csv,
    Json,
    Xlsx,
}

impl ReportFormat {
    /// Pick a file format from the path's extension, ignoring case.
    pub fn from_path(path: &Path) -> Result<Self, RenderError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("csv") => Ok(Self::Csv),
            Some("json") => Ok(Self::Json),
            Some("xlsx") => Ok(Self::Xlsx),
            _ => Err(RenderError::UnsupportedExtension {
                path: path.to_path_buf(),
            }),
        }
    }
}

/// Encode `rows` in `format` and write the result to `out`.
pub fn render<R: ReportRow>(
    format: ReportFormat,
    rows: &[R],
    out: &mut impl Write,
) -> Result<(), RenderError> {
    match format {
        ReportFormat::Table => table::render(rows, out),
        ReportFormat::Csv => csv::render(rows, out),
        ReportFormat::Json => json::render(rows, out),
        ReportFormat::Xlsx => xlsx::render(rows, out),
    }
}

/// Render into a fresh buffer.
pub fn render_to_vec<R: ReportRow>(format: ReportFormat, rows: &[R]) -> Result<Vec<u8>, RenderError> {
    let mut buf = Vec::new();
    render(format, rows, &mut buf)?;
    Ok(buf)
}
