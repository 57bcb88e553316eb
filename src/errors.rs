//! Shared error taxonomy for the transport boundary.
//!
//! Every domain error in this crate maps onto one of four kinds via its
//! `kind()` method. The transport layer translates kinds to wire statuses
//! (404/400/409/503); that mapping lives outside this crate.

use serde::{Deserialize, Serialize};

/// Coarse error classification surfaced to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorKind {
    /// A referenced entity does not exist.
    NotFound,
    /// The request is malformed or semantically impossible.
    InvalidArgument,
    /// The request is valid in isolation but incompatible with current entity state.
    Conflict,
    /// The injected store failed; the entity state is unknown.
    Unavailable,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorKind::NotFound => "not_found",
            ErrorKind::InvalidArgument => "invalid_argument",
            ErrorKind::Conflict => "conflict",
            ErrorKind::Unavailable => "unavailable",
        };
        write!(f, "{name}")
    }
}
