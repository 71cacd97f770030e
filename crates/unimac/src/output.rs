//! Output targets and progress messages.
//!
//! Reports go to stdout or to a file chosen by `--output`. The format is
//! decided from the file extension before any controller traffic, and the
//! report is rendered into memory before the file is created, so a failed
//! run never leaves a partial file behind.

use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use unimac_core::ReportRow;
use unimac_core::report::{ReportFormat, render_to_vec};

use crate::error::CliError;

// ── Output target ────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    /// Aligned table on stdout.
    Stdout,
    File { path: PathBuf, format: ReportFormat },
}

impl OutputTarget {
    /// Resolve `--output`; an unsupported extension fails here.
    pub fn from_arg(path: Option<&Path>) -> Result<Self, CliError> {
        match path {
            None => Ok(Self::Stdout),
            Some(path) => Ok(Self::File {
                format: ReportFormat::from_path(path)?,
                path: path.to_path_buf(),
            }),
        }
    }

    pub fn format(&self) -> ReportFormat {
        match self {
            Self::Stdout => ReportFormat::Table,
            Self::File { format, .. } => *format,
        }
    }

    /// Render `rows` and deliver them to the target.
    pub fn emit<R: ReportRow>(&self, rows: &[R], progress: Progress) -> Result<(), CliError> {
        let bytes = render_to_vec(self.format(), rows)?;
        match self {
            Self::Stdout => {
                let mut stdout = io::stdout().lock();
                stdout.write_all(&bytes)?;
                stdout.flush()?;
            }
            Self::File { path, .. } => {
                write_file(path, &bytes)?;
                progress.line(format_args!("Report written to {}", path.display()));
            }
        }
        Ok(())
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), CliError> {
    let wrap = |source| CliError::OutputWrite {
        path: path.display().to_string(),
        source,
    };
    let mut file = File::create(path).map_err(wrap)?;
    file.write_all(bytes).map_err(wrap)?;
    file.sync_all().map_err(wrap)
}

// ── Progress ─────────────────────────────────────────────────────────

/// Human progress lines on stderr, silenced by `--quiet`.
#[derive(Debug, Clone, Copy)]
pub struct Progress {
    quiet: bool,
}

impl Progress {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn line(self, message: impl std::fmt::Display) {
        if self.quiet {
            return;
        }
        let mut stderr = io::stderr().lock();
        let _ = writeln!(stderr, "{message}");
    }
}
