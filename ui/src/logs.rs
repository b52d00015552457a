//! Logging to the javascript console.

use tracing_subscriber::{EnvFilter, prelude::*};
use tracing_web::MakeWebConsoleWriter;

use crate::utils::is_dev_mode;

/// Initialize logging. Debug output from this crate is only enabled when
/// running against a local backend.
pub fn init_logging() {
    let directives = if is_dev_mode() {
        "error,ui=debug"
    } else {
        "error,ui=info"
    };
    let env_filter = EnvFilter::new(directives);

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_line_number(true)
        .with_ansi(false) // Only partially supported across browsers
        .without_time() // std::time is not available in browsers
        .with_writer(MakeWebConsoleWriter::new().with_pretty_level())
        .with_level(false);

    // A second App mount (e.g. hot reload) finds a subscriber already set.
    if tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .is_err()
    {
        return;
    }

    tracing::info!("Initialized logs");
}
