use std::io::Write;

use log::LevelFilter;

/// CLI verbosity counter to a log level: 0 info, 1 debug, 2+ trace.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Logs go to stderr so they never mix with the rendered board on stdout.
pub fn init_logging(verbosity: u8) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(level_for(verbosity));
    builder.parse_default_env();
    builder.format(|fmt, record| writeln!(fmt, "[{}] {}", record.level(), record.args()));
    // A second init in the same process keeps the first logger.
    let _ = builder.try_init();
}
