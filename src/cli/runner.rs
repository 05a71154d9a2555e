use std::path::Path;

use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use crate::error::{Error, Result};
use crate::io::writers::{write_csv, write_xml};
use crate::trace::{TraceSession, launch};
use crate::types::{ExportFormat, ParsedArguments};

/// Install the stderr subscriber. `RUST_LOG` overrides the default `warn` level.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn export(session: &TraceSession, format: ExportFormat, path: &str) -> Result<()> {
    let output = Path::new(path);
    let written = match format {
        ExportFormat::Csv => write_csv(session, output),
        ExportFormat::Xml => write_xml(session, output),
    };
    written.map_err(|e| Error::Export {
        format,
        path: path.to_string(),
        source: Box::new(e),
    })
}

/// Launch the traced program, then write every requested export.
/// A failing program is recorded in the exports, not reported as an error.
pub fn run(args: ParsedArguments) -> Result<TraceSession> {
    debug!("Parsed arguments: {:?}", args);
    info!(
        "Tracing {} with {} argument(s)",
        args.program_name,
        args.remainder_arguments.len()
    );

    let session = launch(&args.program_name, &args.remainder_arguments)?;

    if !session.success() {
        match session.exit_status {
            Some(code) => warn!("{} exited with status {}", session.program, code),
            None => warn!("{} was terminated by a signal", session.program),
        }
    }

    let targets = args.export_targets();
    if targets.is_empty() {
        debug!("No export requested");
    }
    for (format, path) in targets {
        export(&session, format, path)?;
        info!("Wrote {} trace: {}", format, path);
    }

    Ok(session)
}
