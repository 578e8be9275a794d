//! AWS Signature Version 4 request signing for shapeshift.
//!
//! This crate implements the signing side of SigV4: given credentials, the
//! resolved signing context (region, signing name, endpoint), and the exact
//! headers/body a protocol formatter produced, it builds the canonical
//! request, derives the signing key through the four-step HMAC chain, and
//! returns a dispatch-ready request carrying the `Authorization` header.
//!
//! The signature is computed over exactly the bytes the formatter produced;
//! the formatter's own header mapping is never mutated, so the signature
//! cannot leak into state the caller continues to hold.
//!
//! # Modules
//!
//! - [`canonical`] - Canonical request construction
//! - [`credentials`] - The caller-supplied credential triple
//! - [`error`] - Signing error types
//! - [`sigv4`] - Key derivation, signature computation, request signing

pub mod canonical;
pub mod credentials;
pub mod error;
pub mod sigv4;

pub use credentials::Credentials;
pub use error::{AuthError, AuthResult};
pub use sigv4::{PayloadPolicy, SignedRequest, SigningParams, sign_request};
