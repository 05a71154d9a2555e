use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Instant;

use chrono::Utc;
use tracing::debug;

use super::session::TraceSession;
use crate::error::{Error, Result};

/// A bare file name that exists in `cwd` is run from there rather than
/// looked up on PATH.
fn resolve_program(program: &str, cwd: &Path) -> PathBuf {
    let path = Path::new(program);
    if path.components().count() == 1 && cwd.join(path).is_file() {
        cwd.join(path)
    } else {
        path.to_path_buf()
    }
}

/// Run `program` with `arguments`, inheriting stdio, and record the session.
pub fn launch(program: &str, arguments: &[String]) -> Result<TraceSession> {
    let resolved = resolve_program(program, Path::new("."));
    debug!("Launching {:?} with arguments {:?}", resolved, arguments);

    let started_at = Utc::now();
    let clock = Instant::now();
    let status = Command::new(&resolved)
        .args(arguments)
        .status()
        .map_err(|source| Error::Launch {
            program: program.to_string(),
            source,
        })?;
    let elapsed = clock.elapsed();

    debug!("{} exited with {} after {:?}", program, status, elapsed);

    Ok(TraceSession {
        program: program.to_string(),
        arguments: arguments.to_vec(),
        started_at,
        elapsed,
        exit_status: status.code(),
    })
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    #[test]
    fn records_exit_status_and_arguments() {
        let args = vec!["-c".to_string(), "exit 3".to_string()];
        let session = launch("sh", &args).unwrap();
        assert_eq!(session.program, "sh");
        assert_eq!(session.arguments, args);
        assert_eq!(session.exit_status, Some(3));
        assert!(!session.success());
    }

    #[test]
    fn missing_program_is_launch_error() {
        let err = launch("/nonexistent/cg-trace-target", &[]).unwrap_err();
        match err {
            Error::Launch { program, .. } => assert_eq!(program, "/nonexistent/cg-trace-target"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn paths_are_not_rewritten() {
        let cwd = Path::new(".");
        assert_eq!(resolve_program("/bin/sh", cwd), PathBuf::from("/bin/sh"));
        assert_eq!(
            resolve_program("no-such-file-here", cwd),
            PathBuf::from("no-such-file-here")
        );
    }

    #[test]
    fn bare_name_of_local_file_runs_from_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("script.sh"), "#!/bin/sh\n").unwrap();

        assert_eq!(
            resolve_program("script.sh", dir.path()),
            dir.path().join("script.sh")
        );
        assert_eq!(resolve_program("sh", dir.path()), PathBuf::from("sh"));
    }
}
