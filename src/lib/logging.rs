//! Browser console logging. Events go through `tracing`; the subscriber writes
//! them to the devtools console at the configured level. Panics are forwarded
//! to the console as well.

use crate::app_lib::config::AppConfig;
use tracing_subscriber::{fmt, layer::SubscriberExt, Registry};
use tracing_web::MakeWebConsoleWriter;

/// Installs the global subscriber. Calling it twice keeps the first one.
pub fn init(config: &AppConfig) {
    console_error_panic_hook::set_once();

    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_target(true)
        .with_writer(MakeWebConsoleWriter::new());

    let subscriber = Registry::default()
        .with(fmt_layer)
        .with(config.log_level_filter());

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        return;
    }

    tracing::info!(
        commit = crate::app_lib::build_info::git_commit_hash(),
        api_base_url = %config.api_base_url,
        timeout_ms = config.request_timeout_ms,
        "storefront starting"
    );
}
