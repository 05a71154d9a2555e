use std::ffi::OsString;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};

use crate::error::Result;
use crate::types::ParsedArguments;

const BIN_NAME: &str = env!("CARGO_PKG_NAME");

#[derive(Parser, Debug)]
#[command(
    name = BIN_NAME,
    version,
    about = "Launch a program and record its trace session",
    override_usage = "cg-trace [--csv PATH] [--xml PATH] PROGNAME [ARG ...]",
    args_override_self = true,
    disable_help_subcommand = true,
    subcommand_value_name = "PROGNAME",
    subcommand_help_heading = "Program"
)]
pub struct CliArgs {
    /// Write trace data in CSV format to PATH
    #[arg(long, value_name = "PATH")]
    pub csv: Option<String>,

    /// Write trace data in XML format to PATH
    #[arg(long, value_name = "PATH")]
    pub xml: Option<String>,

    #[command(subcommand)]
    pub target: Target,
}

/// The traced program and everything after it. clap hands external
/// subcommand tokens over untouched, so option-like arguments meant for the
/// program never reach our own option parsing.
#[derive(Subcommand, Debug)]
pub enum Target {
    /// File to run as the traced program, followed by its arguments
    #[command(external_subcommand)]
    Program(Vec<String>),
}

impl TryFrom<CliArgs> for ParsedArguments {
    type Error = clap::Error;

    fn try_from(args: CliArgs) -> std::result::Result<Self, Self::Error> {
        let Target::Program(tokens) = args.target;
        let mut tokens = tokens.into_iter();
        let Some(program_name) = tokens.next() else {
            return Err(CliArgs::command().error(ErrorKind::MissingSubcommand, "PROGNAME is required"));
        };

        Ok(ParsedArguments {
            csv_path: args.csv,
            xml_path: args.xml,
            program_name,
            remainder_arguments: tokens.collect(),
        })
    }
}

/// Parse command-line tokens (without the executable name) into
/// [`ParsedArguments`]. Malformed input yields [`crate::Error::Usage`].
/// `--help` and `--version` also come back as `Error::Usage`, carrying the
/// text clap prints; [`crate::Error::is_usage`] is false for those.
pub fn parse<I, T>(tokens: I) -> Result<ParsedArguments>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let argv = std::iter::once(OsString::from(BIN_NAME)).chain(tokens.into_iter().map(Into::into));
    let args = CliArgs::try_parse_from(argv)?;
    Ok(ParsedArguments::try_from(args)?)
}
