/*
    Print the color counts
        header, then one row per cycle numbered from 1
        final line with the evaluation
*/

use std::io::{self, Write};
use check_indexes::BalanceReport;

pub fn write_report<W: Write>(writer: &mut W, report: &BalanceReport, delimiter: &str) -> io::Result<()> {
    writeln!(writer, "CYCLE{d}RED{d}GREEN", d = delimiter)?;
    for (pos, count) in report.table.iter().enumerate() {
        writeln!(writer, "{cycle}{d}{red}{d}{green}", cycle = pos + 1, d = delimiter,
                 red = count.red, green = count.green)?;
    }
    let evaluation = if report.valid { "Success" } else { "Failure" };
    writeln!(writer, "Evaluation: {evaluation}")
}
