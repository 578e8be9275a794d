//! Operation invocation for shapeshift.
//!
//! This crate ties the runtime together: it wraps one loaded service version
//! as an [`Api`], hands out stateless [`Operation`] handles, and drives the
//! resolve -> format -> sign -> dispatch pipeline per invocation. Everything
//! up to dispatch is a pure computation over immutable model data; the only
//! blocking point is the [`Transport`] at the end.
//!
//! # Modules
//!
//! - [`api`] - The per-service entry point
//! - [`error`] - The invocation umbrella error
//! - [`operation`] - One callable operation and its invoke pipeline
//! - [`options`] - Caller overrides for a single invocation
//! - [`region`] - Region, host, and endpoint resolution
//! - [`transport`] - The outbound HTTP boundary

pub mod api;
pub mod error;
pub mod operation;
pub mod options;
pub mod region;
pub mod transport;

pub use api::Api;
pub use error::{ClientError, ClientResult};
pub use operation::Operation;
pub use options::InvokeOptions;
pub use transport::{HttpTransport, Transport, TransportError, TransportResponse};
