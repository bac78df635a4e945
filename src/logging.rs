//! Structured logging setup using `tracing-subscriber`.
//!
//! The filter core only *emits* `tracing` diagnostics; hosts embedding the
//! crate own subscriber installation. These helpers cover the two common
//! setups:
//! - [`init`]: human-readable stderr output for development and one-shot
//!   tools
//! - [`init_json`]: JSON stderr output for service deployments
//!
//! Both are controlled by `RUST_LOG` (default: `info`). The scan path logs
//! at `trace`; dropped patterns log at `warn`. Logging failures never
//! affect scan results — diagnostics are fire-and-forget.

use tracing_subscriber::EnvFilter;

/// Initialise human-readable stderr logging.
///
/// Controlled by `RUST_LOG` (default: `info`). Safe to call once per
/// process; a second call panics in `tracing-subscriber`, so hosts with
/// their own subscriber should skip this.
pub fn init() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Initialise JSON stderr logging for service deployments.
///
/// Controlled by `RUST_LOG` (default: `info`).
pub fn init_json() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .json()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}
