use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{layer::SubscriberExt, EnvFilter};

/// Installs the stderr logger. Stdout is reserved for the program's output.
///
/// Fails if a global subscriber is already installed.
pub fn init_cli_logger(verbose: bool, level: Option<&str>) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose, level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()
}

fn default_directive(verbose: bool, level: Option<&str>) -> String {
    if verbose {
        "circle_area=debug".to_string()
    } else {
        format!("circle_area={}", level.unwrap_or("warn"))
    }
}
