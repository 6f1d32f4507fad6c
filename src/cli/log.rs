use clap_verbosity_flag::Verbosity;

/*-------------------------------------------------------------------------------------------------
  Logging Functions
-------------------------------------------------------------------------------------------------*/

/// Initialize stderr logging at the verbosity requested on the command line.
pub fn init(verbose: &Verbosity) {
    stderrlog::new()
        .verbosity(verbose.log_level_filter())
        .init()
        .expect("the logger is initialized once");
}
