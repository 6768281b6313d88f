//! # Order Pipeline
//!
//! > **Placing orders across services that do not trust each other.**
//!
//! Three services (a user directory, a menu catalog and an order service) run in one
//! process, each with its own resource actor as its store, and talk to each other over
//! an in-process RPC transport. A gateway sits in front of them.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. Placing an order ([`order_service`])
//! The [`OrderOrchestrator`](order_service::OrderOrchestrator) checks the user, then
//! checks and prices every line in request order, and only then stores the order with
//! the catalog's names and prices copied onto its lines. The first failed check ends the
//! attempt with a reason that names what was wrong.
//!
//! ### 2. Finding dependencies ([`discovery`], [`validation`])
//! A [`ConnectionCache`](discovery::ConnectionCache) turns a service name into a channel,
//! asking the [registry](discovery::ServiceRegistry) only on first use. The validators
//! go through it to reach the user directory and the catalog.
//!
//! ### 3. Talking ([`rpc`])
//! Channels, listeners, status codes, the three servers and their client stubs.
//!
//! ### 4. Storing ([`user_actor`], [`menu_actor`], [`order_actor`], [`clients`])
//! `ActorEntity` implementations on top of the `actor-framework` crate and the typed
//! clients that talk to them.
//!
//! ### 5. Running it ([`lifecycle`], [`gateway`], [`config`])
//! [`OrderSystem`](lifecycle::OrderSystem) boots everything from a [`Config`](config::Config)
//! and shuts it down again.
//!
//! ## Error Handling
//! Order failures surface as [`OrderError`](order_actor::OrderError), rendered as
//! `<code>: <reason>`:
//!
//! | Variant | When |
//! |---------|------|
//! | `InvalidArgument` | empty order, zero quantity, unknown user, unknown item |
//! | `ServiceUnavailable` | a dependency could not be located |
//! | `Internal` | the store failed |
//! | `NotFound` | reading an order that does not exist |
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo with info logs
//! RUST_LOG=info cargo run
//!
//! # Point it at a config file
//! ORDER_PIPELINE_CONFIG=./pipeline.yaml cargo run
//! ```

pub mod clients;
pub mod config;
pub mod discovery;
pub mod gateway;
pub mod lifecycle;
pub mod menu_actor;
pub mod model;
pub mod order_actor;
pub mod order_service;
pub mod rpc;
pub mod user_actor;
pub mod validation;
