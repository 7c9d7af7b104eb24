use log::{debug, info};

/// Initialize the logger with appropriate level based on verbosity.
///
/// Repeated initialization is a no-op so library tests can call this freely.
pub fn init_logger(verbose: bool, quiet: bool) {
    let level = if quiet {
        log::LevelFilter::Off
    } else if verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Off // Only show structured logs in verbose mode
    };

    let _ = env_logger::Builder::from_default_env()
        .filter_level(level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false)
        .try_init();

    debug!("Logger initialized with level: {level:?}");
}

/// Log candidate discovery information
pub fn log_candidate_discovery(unique_candidates: usize, total_found: usize) {
    info!("Found {unique_candidates} unique candidates (from {total_found} total)");
}

/// Log candidate resolution results
pub fn log_resolved_urls(url_count: usize) {
    debug!("Resolved {url_count} URL(s) from candidates");
}
