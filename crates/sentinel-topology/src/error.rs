//! Typed error surface for the core (see design note on error handling).
//!
//! The core never logs (that is a collaborator concern); it only ever
//! returns one of these variants. Each carries the diagnostic payload a
//! caller needs to act on or report the failure.

use crate::simplex::Simplex;
use crate::state_change::Case;

#[derive(Debug, thiserror::Error)]
pub enum TopologyError {
    /// An update referenced a cycle that is neither present nor being added.
    /// `cycle` is the offending cycle's vertex set, which is stable across
    /// topology snapshots and so doubles as a diagnostic identifier.
    #[error("labelling update references unknown cycle {cycle:?}")]
    Labelling { cycle: Simplex },

    /// The classifier returned a transition outside the closed catalogue.
    /// Recoverable: callers bisect the time step and retry.
    #[error("state change {case:?} is not an atomic transition")]
    NonAtomicChange { case: Case },

    /// Bisection exceeded its recursion cap without finding an atomic transition.
    #[error("bisection exceeded recursion depth {depth} at case {case:?}")]
    MaxRecursionDepth { depth: u32, case: Case },

    /// The initial alpha complex is not connected at the given radius.
    #[error("initial alpha complex is not connected at the given radius")]
    GraphNotConnected,

    /// The underlying Delaunay/alpha kernel failed.
    #[error("alpha-complex kernel failed: {context}")]
    KernelFailure {
        context: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl TopologyError {
    pub fn kernel_failure(context: impl Into<String>) -> Self {
        TopologyError::KernelFailure {
            context: context.into(),
            source: None,
        }
    }

    pub fn kernel_failure_with_source(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        TopologyError::KernelFailure {
            context: context.into(),
            source: Some(Box::new(source)),
        }
    }
}
