use reveal_platform::AppPaths;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, LevelFilter, SharedLogger, TermLogger,
    TerminalMode, WriteLogger,
};
use std::fs::File;

/// `debug_enabled` writes a log file under the data directory; `verbose`
/// echoes the same records to stderr. With neither, nothing is installed.
pub fn init_logging(debug_enabled: bool, verbose: bool) {
    if !debug_enabled && !verbose {
        return;
    }

    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .add_filter_allow_str("reveal")
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = Vec::new();

    if verbose {
        loggers.push(TermLogger::new(
            LevelFilter::Debug,
            config.clone(),
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ));
    }

    let mut log_path = None;
    if debug_enabled {
        let paths = AppPaths::new();
        let _ = paths.ensure_dirs();
        let path = paths.log_file();

        if let Ok(file) = File::create(&path) {
            loggers.push(WriteLogger::new(LevelFilter::Debug, config, file));
            log_path = Some(path);
        }
    }

    if loggers.is_empty() {
        return;
    }

    let _ = CombinedLogger::init(loggers);

    if let Some(path) = log_path {
        log::info!("Debug logging initialized, log file: {:?}", path);
    }
}
