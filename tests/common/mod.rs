#![allow(dead_code)]

pub mod builders;
pub mod handlers;
pub mod headers;

/// Routes middleware diagnostics to the test harness output. Set `RUST_LOG`
/// (for example `bunner_cors_negotiation=trace`) to see them.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
