//! The evaluator's single failure value.

use thiserror::Error;

/// Opaque evaluation failure.
///
/// Every lexical, syntactic, or semantic fault collapses to this one value:
/// callers get "this input is broken", not a diagnostic breakdown. The
/// display text is part of the public contract and must not change.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Error)]
#[error("Invalid Expression")]
pub struct InvalidExpression;
