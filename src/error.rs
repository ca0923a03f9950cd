//! Error types for registry operations.

/// Error returned by fallible registry operations.
///
/// Every failure is synchronous and leaves the registry unmodified; there
/// is no partial region insertion to roll back.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    /// A supplied value is malformed: missing or duplicate identifier,
    /// non-positive size percentage, non-finite number, invalid metrics.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A target or referenced region identifier is absent from the registry.
    #[error("region not found: {0:?}")]
    NotFound(String),

    /// The operation is not permitted on the target, e.g. adjusting or
    /// removing one of the built-in base regions.
    #[error("invalid operation: {0}")]
    InvalidOperation(String),
}
