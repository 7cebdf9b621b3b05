//! Common value types for the unicast route engine.
//!
//! This crate provides the IP address and prefix types shared by the
//! forwarding-table engine and its collaborators:
//!
//! - [`IpAddress`]: a version-tagged IPv4/IPv6 address
//! - [`IpPrefix`]: an address plus prefix length in CIDR notation
//! - [`IpVersion`]: the protocol version discriminant
//!
//! All types parse from their canonical textual form and display back to it,
//! so they can travel through configuration and log output unchanged.

pub mod ip;

pub use ip::{IpAddress, IpPrefix, IpVersion};

use thiserror::Error;

/// Errors raised while parsing or constructing value types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// The string is not a valid IPv4 or IPv6 address.
    #[error("invalid IP address: {0}")]
    InvalidIpAddress(String),

    /// The string is not a valid CIDR prefix.
    #[error("invalid IP prefix: {0}")]
    InvalidIpPrefix(String),

    /// The prefix length exceeds what the address family allows.
    #[error("prefix length {len} exceeds maximum {max}")]
    PrefixLenOutOfRange { len: u8, max: u8 },
}
