use crate::cli;
use cidrcalc::{format_records, parse_batch, BatchResults, Error, Result};
use log::{error, info};
use std::fs;

/*-------------------------------------------------------------------------------------------------
  Core functions
-------------------------------------------------------------------------------------------------*/

/*--------------------------------------------------------------------------------------
  Run the CIDR calculation pipeline
--------------------------------------------------------------------------------------*/

pub fn run(args: &cli::Args) -> Result<()> {
    let cidr_strings = collect_cidr_strings(args)?;

    let results = parse_batch(&cidr_strings);
    report_failures(&results);

    let output = format_records(&results.records, args.output.into());
    print!("{output}");

    Ok(())
}

/*--------------------------------------------------------------------------------------
  Collect target CIDR strings from CLI arguments
--------------------------------------------------------------------------------------*/

// Positional arguments take precedence over the CIDR list file; having neither is fatal.
fn collect_cidr_strings(args: &cli::Args) -> Result<Vec<String>> {
    if !args.cidrs.is_empty() {
        return Ok(args.cidrs.clone());
    }

    if let Some(path) = &args.cidr_file {
        let contents = fs::read_to_string(path).map_err(|error| Error::SourceUnavailable {
            reason: format!("unable to read {}: {}", path.display(), error),
        })?;
        return Ok(contents.lines().map(str::to_string).collect());
    }

    Err(Error::SourceUnavailable {
        reason: "no target CIDR (or CIDR list file) assigned".to_string(),
    })
}

/*--------------------------------------------------------------------------------------
  Report per-item parse failures
--------------------------------------------------------------------------------------*/

fn report_failures(results: &BatchResults) {
    for failure in &results.failures {
        error!(
            "CIDR string[{}] {} validate error: {}",
            failure.index, failure.input, failure.error
        );
    }

    let count_inputs = results.records.len() + results.failures.len();
    info!(
        "parsed {} of {} target CIDR string(s)",
        results.records.len(),
        count_inputs
    );
}
