use tracing_subscriber::EnvFilter;
use tracing_subscriber::util::SubscriberInitExt;

/// Install a stdout subscriber. `RUST_LOG` wins over `verbose`.
///
/// Returns `false` when another global subscriber was already in place.
pub fn init(verbose: bool) -> bool {
    let default = if verbose { "cubestrip=debug" } else { "cubestrip=info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stdout)
        .with_target(false)
        .without_time()
        .finish();

    if subscriber.try_init().is_err() {
        eprintln!("cubestrip: a tracing subscriber is already installed; keeping it");
        return false;
    }
    true
}
