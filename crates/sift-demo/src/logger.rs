use env_logger::{Builder, Env};

/// Installs the global logger. `RUST_LOG` wins; otherwise `info`, or
/// `debug` with `--verbose`.
pub fn init_logger(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    Builder::from_env(Env::default().default_filter_or(default))
        .format_timestamp(None)
        .init();
}
