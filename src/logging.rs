use log::LevelFilter;

/// Map the `-v` count onto a log filter and install env_logger. Timestamps
/// are dropped since the output is read on a console, not collected.
pub fn init(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .init();
}
