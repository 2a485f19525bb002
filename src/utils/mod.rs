use std::sync::Once;

use tracing_subscriber::{fmt, EnvFilter};

static TRACING_INIT: Once = Once::new();

/// Shell chatter at info; library crates only surface warnings.
const DEFAULT_DIRECTIVE: &str =
    "cashflow_planner=info,cashflow_core=warn,cashflow_storage_json=warn,cashflow_config=warn";

/// Initializes the global tracing subscriber, honoring `RUST_LOG`.
///
/// Output goes to stderr so script-mode stdout stays clean.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

        let _ = fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init();
    });
}
