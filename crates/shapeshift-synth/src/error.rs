//! Error types for input synthesis.

use shapeshift_model::ModelError;

/// Errors raised while synthesizing an input value tree.
///
/// Only precondition failures surface as errors; pattern-sampling failures
/// and unsupported shape variants are recovered locally with placeholder
/// values.
#[derive(Debug, thiserror::Error)]
pub enum SynthError {
    /// A shape reference pointed outside the graph.
    #[error(transparent)]
    Model(#[from] ModelError),

    /// A structure lists a required member it does not declare.
    #[error("structure {structure} marks {member} required but does not declare it")]
    MissingRequiredMember {
        /// The structure shape's name.
        structure: String,
        /// The undeclared member name.
        member: String,
    },
}

/// Convenience result type for synthesis.
pub type SynthResult<T> = Result<T, SynthError>;
