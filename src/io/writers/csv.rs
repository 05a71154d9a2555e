use std::borrow::Cow;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::error::Result;
use crate::trace::TraceSession;

pub const CSV_HEADER: [&str; 5] = [
    "program",
    "arguments",
    "exit_status",
    "elapsed_ms",
    "utc_timestamp",
];

/// Quote a field when it contains a separator, quote or line break (RFC 4180).
fn escape_field(field: &str) -> Cow<'_, str> {
    if field.contains([',', '"', '\r', '\n']) {
        Cow::Owned(format!("\"{}\"", field.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(field)
    }
}

/// Every argument quoted RFC 4180 style, separated by single spaces. Keeps
/// argument boundaries and empty arguments; no arguments gives an empty cell.
fn encode_arguments(arguments: &[String]) -> String {
    arguments
        .iter()
        .map(|arg| format!("\"{}\"", arg.replace('"', "\"\"")))
        .collect::<Vec<_>>()
        .join(" ")
}

fn write_record<W: Write>(writer: &mut W, fields: &[&str]) -> std::io::Result<()> {
    let line = fields
        .iter()
        .map(|f| escape_field(f))
        .collect::<Vec<_>>()
        .join(",");
    writeln!(writer, "{}", line)
}

/// Write the session as a header row plus one data row.
pub fn write_csv(session: &TraceSession, output: &Path) -> Result<()> {
    let file = File::create(output)?;
    let mut writer = BufWriter::new(file);

    let arguments = encode_arguments(&session.arguments);
    let exit_status = session
        .exit_status
        .map(|code| code.to_string())
        .unwrap_or_default();
    let elapsed_ms = session.elapsed_ms().to_string();
    let timestamp = session.utc_timestamp();

    write_record(&mut writer, &CSV_HEADER)?;
    write_record(
        &mut writer,
        &[
            session.program.as_str(),
            arguments.as_str(),
            exit_status.as_str(),
            elapsed_ms.as_str(),
            timestamp.as_str(),
        ],
    )?;
    writer.flush()?;
    Ok(())
}
