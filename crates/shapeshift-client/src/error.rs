//! The invocation umbrella error.

use shapeshift_auth::AuthError;
use shapeshift_model::ModelError;
use shapeshift_protocol::ProtocolError;
use shapeshift_synth::SynthError;

use crate::transport::TransportError;

/// Any failure an invocation can surface.
///
/// Every variant except [`ClientError::Transport`] is a precondition or
/// formatting failure raised before network activity.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Model lookup failure (unknown operation, dangling shape, unsupported
    /// protocol).
    #[error(transparent)]
    Model(#[from] ModelError),

    /// Input synthesis precondition failure.
    #[error(transparent)]
    Synth(#[from] SynthError),

    /// Request formatting failure.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// Signing precondition failure.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Transport-level failure, surfaced unchanged.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

/// Convenience result type for invocations.
pub type ClientResult<T> = Result<T, ClientError>;
