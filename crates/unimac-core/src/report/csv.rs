// CSV: header record, then one record per row.

use std::io::Write;

use super::{RenderError, ReportRow, columns, header};

pub(super) fn render<R: ReportRow>(rows: &[R], out: &mut impl Write) -> Result<(), RenderError> {
    let mut writer = csv::Writer::from_writer(out);

    writer.write_record(header::<R>())?;
    for row in rows {
        writer.write_record(columns::<R>().map(|c| row.cell(c).to_string()))?;
    }

    writer.flush()?;
    Ok(())
}
