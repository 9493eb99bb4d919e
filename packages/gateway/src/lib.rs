//! Public surface for the `bonus-gateway` crate.
//!
//! Exposes the mediator, the downstream client seam, and the router builder
//! so that external crates (e.g. the conformance test suite) can spin up an
//! in-process gateway without spawning a subprocess.

pub mod client;
pub mod config;
pub mod error;
pub mod handlers;
pub mod mediator;
pub mod middleware;
pub mod response;
pub mod router;
pub mod service;
pub mod user;

pub use client::{http::HttpBonusClient, BonusApiClient, CallEnvelope, EnvelopeValue};
pub use config::GatewayConfig;
pub use error::ClientError;
pub use mediator::Outcome;
pub use router::build_router;
pub use service::BonusService;
pub use user::User;
