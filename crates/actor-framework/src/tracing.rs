//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the process-wide subscriber. Libraries only emit events;
//! the binary decides where they go.
//!
//! The format is compact and hides the module prefix (`with_target(false)`): actors
//! identify themselves through the `entity_type` field and services through `service`.
//!
//! ```bash
//! RUST_LOG=info cargo run     # state changes only
//! RUST_LOG=debug cargo run    # request payloads as well
//! RUST_LOG=order_pipeline::discovery=debug cargo run
//! ```
//!
//! A successful order at `info` reads roughly:
//!
//! ```text
//! INFO resolve{service="user-service"}: Connecting to service address=127.0.0.1:50051
//! INFO resolve{service="menu-service"}: Connecting to service address=127.0.0.1:50052
//! INFO Created entity_type="Order" id=1 size=1
//! INFO Order persisted order_id=1 stage=persisted items=1
//! ```

/// Installs a compact `fmt` subscriber filtered by `RUST_LOG`.
///
/// Panics if a global subscriber is already set, so call it once from `main`.
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
