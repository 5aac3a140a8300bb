//! Telemetry and Observability
//!
//! Structured logging setup shared by all three services.

use tracing_subscriber::{
    fmt,
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter,
};

use crate::config::ServiceKind;

/// Default filter when `RUST_LOG` is not set
pub const DEFAULT_FILTER: &str = "info,checkdev=debug,sqlx=warn,tower_http=debug";

/// Initialize tracing subscriber
///
/// Set `LOG_FORMAT=json` to emit one JSON object per line.
pub fn init_tracing(service: ServiceKind) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let json = std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    if json {
        registry
            .with(fmt::layer().json().with_current_span(true).with_target(true))
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .init();
    }

    tracing::info!(service = %service, "Tracing initialized");
}
