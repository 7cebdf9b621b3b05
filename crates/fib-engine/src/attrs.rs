//! Route attribute surface.
//!
//! [`RouteAttr`] names each attribute a route entry exposes and carries its
//! capability flags: whether the attribute may appear in a create list, be
//! set on an existing route, or be read back. The flags mirror the vendor
//! attribute table of the hardware abstraction this engine implements:
//! packet action, trap priority, and next hop are fully supported, route
//! metadata is declared but wired to nothing.

use crate::error::{Result, RouteError};
use crate::types::{NextHopRef, PacketAction};
use std::fmt;

/// Identifier of a route attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteAttr {
    PacketAction,
    TrapPriority,
    NextHop,
    Metadata,
}

/// Capability flags for one attribute.
#[derive(Debug, Clone, Copy)]
pub struct AttrCaps {
    pub create: bool,
    pub set: bool,
    pub get: bool,
}

impl RouteAttr {
    /// Capability flags for this attribute.
    pub const fn caps(&self) -> AttrCaps {
        match self {
            RouteAttr::PacketAction | RouteAttr::TrapPriority | RouteAttr::NextHop => AttrCaps {
                create: true,
                set: true,
                get: true,
            },
            RouteAttr::Metadata => AttrCaps {
                create: false,
                set: false,
                get: false,
            },
        }
    }
}

impl fmt::Display for RouteAttr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RouteAttr::PacketAction => "packet-action",
            RouteAttr::TrapPriority => "trap-priority",
            RouteAttr::NextHop => "next-hop",
            RouteAttr::Metadata => "metadata",
        };
        write!(f, "{}", s)
    }
}

/// An attribute value; the variant identifies the attribute.
///
/// Trap priority travels as the raw integer so that out-of-range values
/// reach the engine's validation and are reported against the attribute's
/// position rather than failing at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteAttrValue {
    PacketAction(PacketAction),
    TrapPriority(u8),
    NextHop(NextHopRef),
}

impl RouteAttrValue {
    /// The attribute this value belongs to.
    pub const fn attr(&self) -> RouteAttr {
        match self {
            RouteAttrValue::PacketAction(_) => RouteAttr::PacketAction,
            RouteAttrValue::TrapPriority(_) => RouteAttr::TrapPriority,
            RouteAttrValue::NextHop(_) => RouteAttr::NextHop,
        }
    }
}

/// Validates an attribute list for a create call: each attribute may appear
/// at most once. The duplicate is reported by its position. Attributes that
/// are not creatable cannot be expressed as a [`RouteAttrValue`] in the
/// first place.
pub fn check_create_attrs(attrs: &[RouteAttrValue]) -> Result<()> {
    let mut seen = [false; 3];
    for (index, value) in attrs.iter().enumerate() {
        let slot = match value {
            RouteAttrValue::PacketAction(_) => 0,
            RouteAttrValue::TrapPriority(_) => 1,
            RouteAttrValue::NextHop(_) => 2,
        };
        if seen[slot] {
            return Err(RouteError::invalid_attr_value(index));
        }
        seen[slot] = true;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caps_table() {
        assert!(RouteAttr::PacketAction.caps().set);
        assert!(RouteAttr::NextHop.caps().create);
        assert!(!RouteAttr::Metadata.caps().get);
        assert!(!RouteAttr::Metadata.caps().create);
    }

    #[test]
    fn value_names_its_attr() {
        assert_eq!(
            RouteAttrValue::TrapPriority(3).attr(),
            RouteAttr::TrapPriority
        );
        assert_eq!(
            RouteAttrValue::NextHop(NextHopRef::Null).attr(),
            RouteAttr::NextHop
        );
    }

    #[test]
    fn duplicate_attr_rejected_by_position() {
        let attrs = [
            RouteAttrValue::PacketAction(PacketAction::Drop),
            RouteAttrValue::TrapPriority(1),
            RouteAttrValue::PacketAction(PacketAction::Trap),
        ];
        let err = check_create_attrs(&attrs).unwrap_err();
        assert!(matches!(err, RouteError::InvalidAttrValue { index: 2 }));
    }

    #[test]
    fn unique_attrs_pass() {
        let attrs = [
            RouteAttrValue::PacketAction(PacketAction::Drop),
            RouteAttrValue::NextHop(NextHopRef::Null),
        ];
        assert!(check_create_attrs(&attrs).is_ok());
    }
}
