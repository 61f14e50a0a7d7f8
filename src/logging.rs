use env_logger::Env;

// `-v` raises the default level; RUST_LOG still wins when set.
pub fn init(verbosity: u8) {
    let default = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}
