//! Engine error types and hardware status handling.
//!
//! The forwarding-table backend reports raw [`HwStatus`] codes; the engine
//! maps the ones with route-level meaning (`EntryExists`, `EntryNotFound`)
//! onto dedicated [`RouteError`] variants and wraps everything else in
//! [`RouteError::Hardware`] with the original status preserved for
//! diagnostics.

use std::fmt;
use thiserror::Error;

/// Raw status reported by the forwarding-table backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HwStatus {
    /// Unspecified backend failure.
    Failure,
    /// The keyed entry already exists.
    EntryExists,
    /// The keyed entry does not exist.
    EntryNotFound,
    /// The table has no room for another entry.
    TableFull,
    /// The backend rejected a parameter.
    ParamError,
    /// The backend does not support the requested operation.
    Unsupported,
}

impl fmt::Display for HwStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            HwStatus::Failure => "HW_STATUS_FAILURE",
            HwStatus::EntryExists => "HW_STATUS_ENTRY_EXISTS",
            HwStatus::EntryNotFound => "HW_STATUS_ENTRY_NOT_FOUND",
            HwStatus::TableFull => "HW_STATUS_TABLE_FULL",
            HwStatus::ParamError => "HW_STATUS_PARAM_ERROR",
            HwStatus::Unsupported => "HW_STATUS_UNSUPPORTED",
        };
        write!(f, "{}", s)
    }
}

/// Error type for route engine operations.
#[derive(Debug, Clone, Error)]
pub enum RouteError {
    /// A required input was missing or malformed.
    #[error("invalid parameter: {message}")]
    InvalidParameter { message: String },

    /// An attribute value was rejected; `index` is the position of the
    /// offending attribute in the caller's list (0 for single-attribute
    /// set calls).
    #[error("invalid value for attribute at index {index}")]
    InvalidAttrValue { index: usize },

    /// The route does not exist.
    #[error("route not found")]
    NotFound,

    /// The route already exists.
    #[error("route already exists")]
    AlreadyExists,

    /// A read projection the engine cannot produce yet.
    #[error("not implemented: {feature}")]
    NotImplemented { feature: &'static str },

    /// The requested attribute or operation is not supported.
    #[error("unsupported: {what}")]
    Unsupported { what: String },

    /// A forwarding-table operation failed; the raw status is preserved.
    #[error("hardware operation failed: {status}")]
    Hardware { status: HwStatus },
}

impl RouteError {
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        RouteError::InvalidParameter {
            message: message.into(),
        }
    }

    pub fn invalid_attr_value(index: usize) -> Self {
        RouteError::InvalidAttrValue { index }
    }

    pub fn unsupported(what: impl Into<String>) -> Self {
        RouteError::Unsupported { what: what.into() }
    }

    /// The underlying backend status, if this is a wrapped hardware failure.
    pub fn hw_status(&self) -> Option<HwStatus> {
        match self {
            RouteError::Hardware { status } => Some(*status),
            _ => None,
        }
    }
}

impl From<HwStatus> for RouteError {
    fn from(status: HwStatus) -> Self {
        match status {
            HwStatus::EntryExists => RouteError::AlreadyExists,
            HwStatus::EntryNotFound => RouteError::NotFound,
            _ => RouteError::Hardware { status },
        }
    }
}

/// Result type for route engine operations.
pub type Result<T> = std::result::Result<T, RouteError>;
