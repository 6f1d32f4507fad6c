mod cli;

use clap::Parser;
use log::error;

/*-------------------------------------------------------------------------------------------------
  cidrcalc
-------------------------------------------------------------------------------------------------*/

fn main() {
    let args = cli::Args::parse();

    cli::log::init(&args.verbose);

    // Per-item parse failures are reported and tolerated inside run(); only an unavailable
    // CIDR source is fatal.
    if let Err(error) = cli::run(&args) {
        error!("{error}");
        std::process::exit(1);
    }
}
