//! # Logger Setup

/// Route the `log` facade to stderr. Base verbosity is `Info`; every `-v`
/// raises it one level.
pub fn init(verbose: u8) {
    stderrlog::new()
        .verbosity(2 + verbose as usize)
        .timestamp(stderrlog::Timestamp::Off)
        .init()
        .ok();
}
