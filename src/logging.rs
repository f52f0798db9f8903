use tracing_subscriber::EnvFilter;

/// Initialize tracing on stderr so stdout carries only the report.
///
/// `RUST_LOG` wins when set; otherwise `warn`, or `info` with `verbose`.
pub fn init_tracing(verbose: bool) {
  let fallback = if verbose { "info" } else { "warn" };
  let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

  let _ = tracing_subscriber::fmt()
    .with_env_filter(filter)
    .with_writer(std::io::stderr)
    .with_target(false)
    .try_init();
}
