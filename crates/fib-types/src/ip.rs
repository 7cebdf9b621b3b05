//! IP address and prefix types with safe parsing.

use crate::ParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use std::str::FromStr;

/// IP protocol version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IpVersion {
    V4,
    V6,
}

impl IpVersion {
    /// Maximum prefix length for this version (32 or 128 bits).
    pub const fn max_prefix_len(&self) -> u8 {
        match self {
            IpVersion::V4 => 32,
            IpVersion::V6 => 128,
        }
    }
}

impl fmt::Display for IpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpVersion::V4 => write!(f, "IPv4"),
            IpVersion::V6 => write!(f, "IPv6"),
        }
    }
}

/// A version-tagged IP address.
///
/// The variant is the version tag: an address can never disagree with its
/// own version, which is what downstream code relies on when it copies a
/// next-hop address into a forwarding entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IpAddress {
    V4(Ipv4Addr),
    V6(Ipv6Addr),
}

impl IpAddress {
    pub const fn version(&self) -> IpVersion {
        match self {
            IpAddress::V4(_) => IpVersion::V4,
            IpAddress::V6(_) => IpVersion::V6,
        }
    }

    pub const fn is_ipv4(&self) -> bool {
        matches!(self, IpAddress::V4(_))
    }

    pub const fn is_ipv6(&self) -> bool {
        matches!(self, IpAddress::V6(_))
    }

    /// Returns true for 0.0.0.0 or ::.
    pub const fn is_unspecified(&self) -> bool {
        match self {
            IpAddress::V4(a) => a.is_unspecified(),
            IpAddress::V6(a) => a.is_unspecified(),
        }
    }
}

impl fmt::Display for IpAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpAddress::V4(a) => a.fmt(f),
            IpAddress::V6(a) => a.fmt(f),
        }
    }
}

impl FromStr for IpAddress {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<IpAddr>()
            .map(IpAddress::from)
            .map_err(|_| ParseError::InvalidIpAddress(s.to_string()))
    }
}

impl From<Ipv4Addr> for IpAddress {
    fn from(addr: Ipv4Addr) -> Self {
        IpAddress::V4(addr)
    }
}

impl From<Ipv6Addr> for IpAddress {
    fn from(addr: Ipv6Addr) -> Self {
        IpAddress::V6(addr)
    }
}

impl From<IpAddr> for IpAddress {
    fn from(addr: IpAddr) -> Self {
        match addr {
            IpAddr::V4(a) => IpAddress::V4(a),
            IpAddr::V6(a) => IpAddress::V6(a),
        }
    }
}

/// An IP prefix in CIDR notation (e.g. 10.0.0.0/24 or 2001:db8::/32).
///
/// Construction validates the prefix length against the address family.
/// The stored address keeps whatever host bits the caller supplied;
/// [`IpPrefix::canonical`] masks them off when a normalized form is needed
/// as a table key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IpPrefix {
    address: IpAddress,
    len: u8,
}

impl IpPrefix {
    pub fn new(address: IpAddress, len: u8) -> Result<Self, ParseError> {
        let max = address.version().max_prefix_len();
        if len > max {
            return Err(ParseError::PrefixLenOutOfRange { len, max });
        }
        Ok(IpPrefix { address, len })
    }

    pub const fn address(&self) -> IpAddress {
        self.address
    }

    pub const fn len(&self) -> u8 {
        self.len
    }

    pub const fn version(&self) -> IpVersion {
        self.address.version()
    }

    /// True for the default route (0.0.0.0/0 or ::/0).
    pub const fn is_default(&self) -> bool {
        self.len == 0
    }

    /// True for a host route (/32 or /128).
    pub const fn is_host(&self) -> bool {
        self.len == self.address.version().max_prefix_len()
    }

    /// The network address with host bits cleared.
    pub fn network(&self) -> IpAddress {
        match self.address {
            IpAddress::V4(a) => {
                let mask = if self.len == 0 {
                    0
                } else {
                    u32::MAX << (32 - u32::from(self.len))
                };
                IpAddress::V4(Ipv4Addr::from(u32::from(a) & mask))
            }
            IpAddress::V6(a) => {
                let mask = if self.len == 0 {
                    0
                } else {
                    u128::MAX << (128 - u32::from(self.len))
                };
                IpAddress::V6(Ipv6Addr::from(u128::from(a) & mask))
            }
        }
    }

    /// This prefix with its address replaced by [`IpPrefix::network`].
    pub fn canonical(&self) -> IpPrefix {
        IpPrefix {
            address: self.network(),
            len: self.len,
        }
    }
}

impl fmt::Display for IpPrefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.address, self.len)
    }
}

impl FromStr for IpPrefix {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (addr, len) = s
            .rsplit_once('/')
            .ok_or_else(|| ParseError::InvalidIpPrefix(s.to_string()))?;
        let address: IpAddress = addr.parse()?;
        let len: u8 = len
            .parse()
            .map_err(|_| ParseError::InvalidIpPrefix(s.to_string()))?;
        IpPrefix::new(address, len)
    }
}
