/// Initialize the logging system.
///
/// Defaults to the `info` level; override with `RUST_LOG`.
pub fn init() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
}
