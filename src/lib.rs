#![doc = r#"
cg-trace: launch a program and record its trace session.

The command line is `cg-trace [--csv PATH] [--xml PATH] PROGNAME [ARG ...]`.
Everything after `PROGNAME` is forwarded to the traced program untouched, even
tokens that look like cg-trace's own options.

Parse a command line
--------------------
```rust
let parsed = cg_trace::parse(["--csv", "a.csv", "prog", "x", "--xml"])?;
assert_eq!(parsed.csv_path.as_deref(), Some("a.csv"));
assert_eq!(parsed.program_name, "prog");
assert_eq!(parsed.remainder_arguments, vec!["x", "--xml"]);
# Ok::<(), cg_trace::Error>(())
```

Trace a program
---------------
```rust,no_run
fn main() -> cg_trace::Result<()> {
    let parsed = cg_trace::parse(["--xml", "run.xml", "./build.sh", "--release"])?;
    let session = cg_trace::run(parsed)?;
    println!("exit status: {:?}", session.exit_status);
    Ok(())
}
```

Error handling
--------------
All public functions return `cg_trace::Result<T>`. `Error::Usage` wraps the
clap error so callers can print it with clap's formatting and exit code.

Useful modules
--------------
- [`cli`] — argument parsing and the runner.
- [`trace`] — launching the traced program, `TraceSession`.
- [`io`] — CSV and XML exporters.
- [`error`] — crate-level `Error` and `Result`.
"#]

pub mod cli;
pub mod error;
pub mod io;
pub mod trace;
pub mod types;

pub use cli::{parse, run};
pub use error::{Error, Result};
pub use io::{write_csv, write_xml};
pub use trace::{TraceSession, launch};
pub use types::{ExportFormat, ParsedArguments};
