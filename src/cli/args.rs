use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/*-------------------------------------------------------------------------------------------------
  Command Line Interface (CLI) Arguments
-------------------------------------------------------------------------------------------------*/

#[derive(Parser, Debug)]
#[command(author, version, about="Compute subnet metadata for IPv4 CIDR prefixes.", long_about = None)]
pub struct Args {
    /// Target CIDR prefixes (a.b.c.d/n)
    #[arg(value_name = "CIDR")]
    pub cidrs: Vec<String>,

    /// Read target CIDR prefixes from a newline-delimited file
    #[arg(short = 'f', long = "file", value_name = "PATH")]
    pub cidr_file: Option<PathBuf>,

    /// Output format
    #[arg(short = 'o', long = "output", value_enum, default_value = "plain")]
    pub output: OutputFormat,

    /// Logging verbosity
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,
}

/*--------------------------------------------------------------------------------------
  Output Format
--------------------------------------------------------------------------------------*/

#[derive(ValueEnum, Clone, Copy, Debug, Eq, PartialEq)]
pub enum OutputFormat {
    /// Labeled line per field
    Plain,

    /// Comma-separated values
    Csv,

    /// Tab-separated values
    Tsv,
}

impl From<OutputFormat> for cidrcalc::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Plain => cidrcalc::OutputFormat::Plain,
            OutputFormat::Csv => cidrcalc::OutputFormat::Csv,
            OutputFormat::Tsv => cidrcalc::OutputFormat::Tsv,
        }
    }
}
