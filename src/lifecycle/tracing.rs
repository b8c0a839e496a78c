//! # Observability & Tracing
//!
//! [`setup_tracing`] installs the `tracing` subscriber used by the demo binary.
//!
//! The format is compact and hides module paths (`with_target(false)`); the actor loop
//! tags its events with `entity_type` instead. Levels come from `RUST_LOG`.
//!
//! ## What Gets Traced
//!
//! - **Actor lifecycle**: `Actor started`, `Shutdown` with the final store size
//! - **Requests**: `Create`, `Upsert`, `Get`, `List`, `Action` at `debug` with payloads
//! - **Mutations**: `Created`, `Upserted`, `Action ok`, `Subscribed` at `info`
//! - **Failures**: rejected transitions, locked items and validation errors at `warn`
//! - **Client spans**: one span per client call, carrying the acting phone number
//!
//! ```bash
//! RUST_LOG=info cargo run
//! RUST_LOG=debug cargo run        # full payloads
//! RUST_LOG=shop_dispatch::framework=debug cargo run
//! ```
//!
//! With `RUST_LOG=info`, dispatching and accepting an order looks like:
//!
//! ```text
//! INFO dispatch: Order sent order_id=3f0c... list_type=Vegetable items=2
//! INFO Created entity_type="Order" id=3f0c... size=1
//! INFO transition: Action ok entity_type="Order" id=3f0c...
//! INFO transition: Order status changed status=accepted
//! ```
pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_target(false)
        .compact()
        .init();
}
