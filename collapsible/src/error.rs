//! Error types for parsing configuration values.

use thiserror::Error;

/// An overflow keyword that is not one of the supported values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid overflow value '{0}' (expected hidden, visible, auto, scroll, inherit, initial or unset)")]
pub struct ParseOverflowError(pub String);
