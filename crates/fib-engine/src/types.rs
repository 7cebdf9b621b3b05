//! Core route data model.
//!
//! A route is identified by [`RouteKey`] and carries a [`PacketAction`], a
//! [`TrapPriority`], and a [`ForwardingTarget`]. The target is a closed sum
//! type: exactly one shape is active at a time, and adding a new shape is a
//! compile-time-checked change everywhere the target is matched.

use crate::oid::{NextHopGroupId, NextHopId, PortId, RouterInterfaceId, VirtualRouterId};
use fib_types::{IpAddress, IpPrefix};
use std::fmt;

/// Identity of a route: virtual router plus destination prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteKey {
    pub vrf: VirtualRouterId,
    pub prefix: IpPrefix,
}

impl RouteKey {
    pub fn new(vrf: VirtualRouterId, prefix: IpPrefix) -> Self {
        Self { vrf, prefix }
    }
}

impl fmt::Display for RouteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "route vrf:{} {}", self.vrf, self.prefix)
    }
}

/// What the router does with packets matching the route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PacketAction {
    /// Forward toward the target.
    Forward,
    /// Silently discard.
    Drop,
    /// Punt to the control plane instead of forwarding.
    Trap,
    /// Forward and copy to the control plane.
    Log,
    /// Forward and mirror.
    Mirror,
}

impl PacketAction {
    /// Actions that only make sense with a resolvable forwarding target.
    pub const fn needs_target(&self) -> bool {
        matches!(
            self,
            PacketAction::Forward | PacketAction::Log | PacketAction::Mirror
        )
    }
}

impl fmt::Display for PacketAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PacketAction::Forward => "forward",
            PacketAction::Drop => "drop",
            PacketAction::Trap => "trap",
            PacketAction::Log => "log",
            PacketAction::Mirror => "mirror",
        };
        write!(f, "{}", s)
    }
}

/// Priority used when the action punts packets to the control plane.
///
/// Valid values are `MIN..=MAX`; construction rejects anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TrapPriority(u8);

impl TrapPriority {
    pub const MIN: u8 = 0;
    pub const MAX: u8 = 7;

    /// Default priority applied when a route is created without one.
    pub const MEDIUM: TrapPriority = TrapPriority(4);

    pub const fn new(value: u8) -> Option<Self> {
        if value <= Self::MAX {
            Some(TrapPriority(value))
        } else {
            None
        }
    }

    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for TrapPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hardware-level ECMP container identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EcmpId(pub u32);

impl fmt::Display for EcmpId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ecmp:{}", self.0)
    }
}

/// Hardware-level router interface index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RifIndex(pub u32);

impl fmt::Display for RifIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rif:{}", self.0)
    }
}

/// An opaque next-hop reference as supplied by the caller.
///
/// Exactly the reference categories the resolver understands; anything
/// else is unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextHopRef {
    /// A single-next-hop container.
    NextHop(NextHopId),
    /// A multi-member ECMP container.
    Group(NextHopGroupId),
    /// A directly attached subnet via a router interface.
    RouterInterface(RouterInterfaceId),
    /// A port; only the CPU port is accepted.
    Port(PortId),
    /// No reference.
    Null,
}

impl fmt::Display for NextHopRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NextHopRef::NextHop(id) => write!(f, "nexthop {}", id),
            NextHopRef::Group(id) => write!(f, "nexthop-group {}", id),
            NextHopRef::RouterInterface(id) => write!(f, "rif {}", id),
            NextHopRef::Port(id) => write!(f, "port {}", id),
            NextHopRef::Null => write!(f, "null"),
        }
    }
}

/// The concrete forwarding shape committed to the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ForwardingTarget {
    /// A single next-hop address collapsed out of a one-member container.
    Resolved { address: IpAddress },
    /// An ECMP container processed at commit time.
    Group { group: EcmpId },
    /// Directly connected subnet delivered out a router interface.
    LocalEgress { rif: RifIndex },
    /// Delivery to the router's own control plane.
    HostDelivery,
    /// No target; valid only with drop/trap actions.
    None,
}

impl ForwardingTarget {
    pub const fn is_none(&self) -> bool {
        matches!(self, ForwardingTarget::None)
    }
}

impl fmt::Display for ForwardingTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ForwardingTarget::Resolved { address } => write!(f, "via {}", address),
            ForwardingTarget::Group { group } => write!(f, "via {}", group),
            ForwardingTarget::LocalEgress { rif } => write!(f, "local {}", rif),
            ForwardingTarget::HostDelivery => write!(f, "to-host"),
            ForwardingTarget::None => write!(f, "unreachable"),
        }
    }
}

/// A committed route entry as stored in the forwarding table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteEntry {
    pub action: PacketAction,
    pub trap_priority: TrapPriority,
    pub target: ForwardingTarget,
}

/// How a mutation reaches the forwarding table.
///
/// The backend can swap a route's target in place, but action and priority
/// changes require removing and re-adding the entry. The two `Reinsert`
/// calls are not atomic: a failed insert leaves the route absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateStrategy {
    /// Single replace of the full entry under the existing key.
    InPlace,
    /// Delete the existing key, then insert the updated entry.
    Reinsert,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn trap_priority_bounds() {
        assert_eq!(TrapPriority::new(0).unwrap().value(), 0);
        assert_eq!(TrapPriority::new(7).unwrap().value(), 7);
        assert!(TrapPriority::new(8).is_none());
        assert!(TrapPriority::new(255).is_none());
    }

    #[test]
    fn actions_needing_targets() {
        assert!(PacketAction::Forward.needs_target());
        assert!(PacketAction::Log.needs_target());
        assert!(PacketAction::Mirror.needs_target());
        assert!(!PacketAction::Drop.needs_target());
        assert!(!PacketAction::Trap.needs_target());
    }

    #[test]
    fn route_key_display() {
        let key = RouteKey::new(
            VirtualRouterId::new(1),
            "10.0.0.0/24".parse().unwrap(),
        );
        assert_eq!(key.to_string(), "route vrf:0x1 10.0.0.0/24");
    }

    #[test]
    fn target_display() {
        let t = ForwardingTarget::Resolved {
            address: "10.0.0.1".parse().unwrap(),
        };
        assert_eq!(t.to_string(), "via 10.0.0.1");
        assert_eq!(ForwardingTarget::None.to_string(), "unreachable");
    }
}
