// JSON: an array of objects, keys in column order, 4-space indent.

use std::io::Write;

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::ser::PrettyFormatter;

use super::{RenderError, ReportRow, columns};

/// Serializes one row as an object whose keys follow column order.
struct JsonRow<'a, R>(&'a R);

impl<R: ReportRow> Serialize for JsonRow<'_, R> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(None)?;
        for column in columns::<R>() {
            let label: &'static str = column.into();
            map.serialize_entry(label, &self.0.cell(column))?;
        }
        map.end()
    }
}

pub(super) fn render<R: ReportRow>(rows: &[R], out: &mut impl Write) -> Result<(), RenderError> {
    let formatter = PrettyFormatter::with_indent(b"    ");
    let mut serializer = serde_json::Serializer::with_formatter(&mut *out, formatter);
    serializer.collect_seq(rows.iter().map(JsonRow))?;
    writeln!(out)?;
    Ok(())
}
