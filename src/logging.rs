// src/logging.rs
use log::LevelFilter;

/// Map `-v`/`-q` flags to a level. Warnings are shown by default.
pub fn level_filter(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Error;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the stderr logger. `RUST_LOG`, when set, takes precedence over the flags.
pub fn init(verbose: u8, quiet: bool) {
    let mut builder = env_logger::Builder::from_env(env_logger::Env::default());
    if std::env::var_os("RUST_LOG").is_none() {
        builder.filter_level(level_filter(verbose, quiet));
    }
    builder.format_timestamp(None).target(env_logger::Target::Stderr);
    // A logger may already be installed (tests); keep the existing one.
    let _ = builder.try_init();
}
