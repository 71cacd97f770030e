// XLSX: one worksheet named after the report, bold frozen header in row 1,
// data from row 2, and a workbook-level name over the whole table.

use std::io::Write;

use chrono::{Datelike, NaiveDateTime, Timelike};
use rust_xlsxwriter::{ExcelDateTime, Format, Workbook, XlsxError};

use super::{Cell, RenderError, ReportRow, absolute_range, columns, header};

/// Workbook-level name covering the header and every data row.
pub(crate) fn data_range_name<R: ReportRow>() -> String {
    format!("{}Table", R::TITLE)
}

// Rows or columns past the sheet limits saturate and are rejected by
// rust_xlsxwriter with a limit error.
fn row_index(index: usize) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX)
}

fn col_index(index: usize) -> u16 {
    u16::try_from(index).unwrap_or(u16::MAX)
}

/// Excel number format matching the text form of a timestamp.
const TIMESTAMP_NUM_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";

/// Fails for dates Excel cannot hold (before 1900 or after 9999).
fn excel_datetime(t: NaiveDateTime) -> Result<ExcelDateTime, XlsxError> {
    let narrow = |n: u32| u8::try_from(n).unwrap_or(u8::MAX);
    let year = u16::try_from(t.year()).unwrap_or(u16::MAX);
    ExcelDateTime::from_ymd(year, narrow(t.month()), narrow(t.day()))?.and_hms(
        u16::from(narrow(t.hour())),
        narrow(t.minute()),
        narrow(t.second()),
    )
}

#[allow(clippy::cast_precision_loss, clippy::as_conversions)]
pub(super) fn render<R: ReportRow>(rows: &[R], out: &mut impl Write) -> Result<(), RenderError> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();
    let timestamp = Format::new().set_num_format(TIMESTAMP_NUM_FORMAT);

    let sheet = workbook.add_worksheet();
    sheet.set_name(R::TITLE)?;

    for (col, label) in header::<R>().into_iter().enumerate() {
        sheet.write_string_with_format(0, col_index(col), label, &bold)?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = row_index(i + 1);
        for (col, column) in columns::<R>().enumerate() {
            let c = col_index(col);
            match row.cell(column) {
                Cell::Text(s) => {
                    sheet.write_string(r, c, s)?;
                }
                Cell::Integer(n) => {
                    sheet.write_number(r, c, n as f64)?;
                }
                Cell::Timestamp(t) => match excel_datetime(t) {
                    Ok(dt) => {
                        sheet.write_datetime_with_format(r, c, &dt, &timestamp)?;
                    }
                    Err(_) => {
                        sheet.write_string(r, c, Cell::Timestamp(t).to_string())?;
                    }
                },
                Cell::Blank => {}
            }
        }
    }

    sheet.set_freeze_panes(1, 0)?;
    sheet.autofit();

    let last_col = col_index(columns::<R>().count().saturating_sub(1));
    let range = absolute_range(0, 0, row_index(rows.len()), last_col);
    workbook.define_name(data_range_name::<R>(), &format!("={}!{range}", R::TITLE))?;

    let bytes = workbook.save_to_buffer()?;
    out.write_all(&bytes)?;
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::io::Cursor;

    use calamine::{Data, Reader, Xlsx};
    use chrono::NaiveDate;

    use super::*;
    use crate::model::{Client, Device};
    use crate::report::tests::{read_sheet, sample_clients, sample_devices};

    // XLSX files are zip archives.
    const ZIP_MAGIC: &[u8] = b"PK\x03\x04";

    #[test]
    fn writes_a_workbook() {
        let mut out = Vec::new();
        render(&sample_clients(), &mut out).unwrap();
        assert!(out.starts_with(ZIP_MAGIC));
    }

    #[test]
    fn empty_report_is_still_valid() {
        let mut out = Vec::new();
        render::<Device>(&[], &mut out).unwrap();
        assert!(out.starts_with(ZIP_MAGIC));
    }

    #[test]
    fn devices_render() {
        let mut out = Vec::new();
        render(&sample_devices(), &mut out).unwrap();

        let sheet = read_sheet(out, Device::TITLE);
        assert_eq!(sheet.len(), 3);
        assert_eq!(sheet[0][0], Data::String("MAC".into()));
        assert_eq!(sheet[1][0], Data::String("00:00:00:00:00:02".into()));
        assert_eq!(sheet[2][4], Data::String("A1".into()));
    }

    #[test]
    fn defined_name_covers_header_and_rows() {
        let mut out = Vec::new();
        render(&sample_clients(), &mut out).unwrap();

        let book: Xlsx<_> = Xlsx::new(Cursor::new(out)).unwrap();
        let names: Vec<(String, String)> = book.defined_names().to_vec();
        assert_eq!(
            names,
            [("ClientsTable".to_owned(), "Clients!$A$1:$L$3".to_owned())]
        );
    }

    #[test]
    #[allow(clippy::cast_precision_loss, clippy::as_conversions)]
    fn timestamps_are_date_cells() {
        let seen = NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let mut out = Vec::new();
        render(&[Row(Cell::Timestamp(seen))], &mut out).unwrap();

        let sheet = read_sheet(out, Row::TITLE);
        let Data::DateTime(value) = &sheet[1][0] else {
            panic!("expected a date cell, got {:?}", sheet[1][0]);
        };
        // Excel serial: days since 1899-12-30, time as the fraction.
        let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let expected = (seen - epoch).num_seconds() as f64 / 86_400.0;
        assert!((value.as_f64() - expected).abs() < 1e-6, "{}", value.as_f64());
    }

    #[test]
    fn out_of_range_timestamp_falls_back_to_text() {
        let ancient = NaiveDate::from_ymd_opt(1850, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let mut out = Vec::new();
        render(&[Row(Cell::Timestamp(ancient))], &mut out).unwrap();

        let sheet = read_sheet(out, Row::TITLE);
        assert_eq!(sheet[1][0], Data::String("1850-01-01 00:00:00".into()));
    }

    /// Single-column report carrying an arbitrary cell.
    struct Row(Cell);

    #[derive(Debug, Clone, Copy, strum::EnumIter, strum::IntoStaticStr)]
    enum Only {
        Value,
    }

    impl ReportRow for Row {
        type Column = Only;
        const TITLE: &'static str = "Cells";

        fn cell(&self, _: Only) -> Cell {
            self.0.clone()
        }
    }

    #[test]
    fn range_names() {
        assert_eq!(data_range_name::<Client>(), "ClientsTable");
        assert_eq!(data_range_name::<Device>(), "DevicesTable");
    }
}
