use thiserror::Error;

/// Errors raised while linking handlers together.
///
/// Dispatch itself never fails: an unhandled request is a `None` result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChainError {
    /// `from` is reachable from `to`, linking them would close a loop.
    #[error("linking {from} > {to} would create a cycle")]
    Cycle { from: String, to: String },
}
