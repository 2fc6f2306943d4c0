use std::io::{self, Write};

use super::CountTable;

/// First BASIC line number; key lines follow at 101, 102, ...
const BASIC_FIRST_LINE: u32 = 100;
/// Values per record announced in the BASIC header.
const BASIC_RECORD_WIDTH: u32 = 5;

/// How to render a [`CountTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// `<key>,<count>` per line.
    #[default]
    Plain,
    /// `DATA` statements for loading into a BASIC program.
    Basic,
}

impl ReportFormat {
    /// Pick the format from the optional mode argument. Only the exact
    /// literal `BASIC` selects [`ReportFormat::Basic`].
    pub fn from_arg(arg: Option<&str>) -> Self {
        match arg {
            Some("BASIC") => ReportFormat::Basic,
            _ => ReportFormat::Plain,
        }
    }
}

/// Write `table` to `out` in ascending key order.
pub fn write_report<W: Write>(table: &CountTable, format: ReportFormat, mut out: W) -> io::Result<()> {
    match format {
        ReportFormat::Plain => {
            for (key, count) in table {
                writeln!(out, "{},{}", key, count)?;
            }
        }
        ReportFormat::Basic => {
            writeln!(out, "{} DATA {},{}", BASIC_FIRST_LINE, table.len(), BASIC_RECORD_WIDTH)?;
            for (line, (key, count)) in (BASIC_FIRST_LINE + 1..).zip(table) {
                writeln!(out, "{} DATA \"{:>5}\",{}", line, key, count)?;
            }
        }
    }
    out.flush()
}
