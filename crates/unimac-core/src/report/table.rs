// Aligned text table for terminal output.

use std::io::Write;

use tabled::{builder::Builder, settings::Style};

use super::{RenderError, ReportRow, columns, header};

pub(super) fn render<R: ReportRow>(rows: &[R], out: &mut impl Write) -> Result<(), RenderError> {
    let mut builder = Builder::default();
    builder.push_record(header::<R>());
    for row in rows {
        builder.push_record(columns::<R>().map(|c| row.cell(c).to_string()));
    }

    let mut table = builder.build();
    table.with(Style::blank());
    writeln!(out, "{table}")?;
    Ok(())
}
