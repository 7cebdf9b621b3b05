//! Collaborator seams consumed by the engine.
//!
//! [`FibTable`] is the transactional forwarding-table store keyed by
//! (vrf, prefix); it reports raw [`HwStatus`] codes which the engine maps
//! into [`crate::RouteError`]. [`SwitchObjects`] translates opaque object
//! references into the underlying hardware identifiers and back; it is the
//! boundary the next-hop resolver works against.

use crate::error::{HwStatus, Result};
use crate::oid::{NextHopGroupId, NextHopId, PortId, RouterInterfaceId};
use crate::types::{EcmpId, RifIndex, RouteEntry, RouteKey};
use fib_types::IpAddress;

/// One member of an ECMP container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EcmpMember {
    /// A plain IP next hop.
    Ip(IpAddress),
    /// A tunnel-encapsulated next hop; must stay container-addressed
    /// because encapsulation is applied at commit time.
    TunnelEncap,
}

/// The forwarding-table store.
///
/// All four primitives are synchronous and keyed by the full route key.
/// `replace` swaps the entry under an existing key in one call; there is no
/// primitive that updates action or priority in place, which is why the
/// engine reinserts for those changes.
pub trait FibTable {
    fn insert(&mut self, key: &RouteKey, entry: &RouteEntry) -> std::result::Result<(), HwStatus>;
    fn replace(&mut self, key: &RouteKey, entry: &RouteEntry) -> std::result::Result<(), HwStatus>;
    fn delete(&mut self, key: &RouteKey) -> std::result::Result<(), HwStatus>;
    fn get(&self, key: &RouteKey) -> std::result::Result<RouteEntry, HwStatus>;
}

/// Object reference translation.
///
/// The forward direction turns caller-supplied references into hardware
/// identifiers; the reverse direction wraps identifiers back into references
/// for attribute reads. Translation failures surface as whatever error the
/// implementation raises.
pub trait SwitchObjects {
    /// The ECMP container behind a single-next-hop object.
    fn next_hop_ecmp(&self, nh: NextHopId) -> Result<EcmpId>;

    /// The ECMP container behind a next-hop-group object.
    fn group_ecmp(&self, group: NextHopGroupId) -> Result<EcmpId>;

    /// Current members of an ECMP container.
    fn ecmp_members(&self, ecmp: EcmpId) -> Result<Vec<EcmpMember>>;

    /// Underlying interface index for a router-interface reference.
    fn rif_index(&self, rif: RouterInterfaceId) -> Result<RifIndex>;

    /// Underlying port index for a port reference.
    fn port_index(&self, port: PortId) -> Result<u32>;

    /// The port index of the CPU port.
    fn cpu_port_index(&self) -> u32;

    /// Wraps an interface index back into a reference.
    fn rif_ref(&self, rif: RifIndex) -> RouterInterfaceId;

    /// Wraps an ECMP container back into a group reference.
    fn group_ref(&self, ecmp: EcmpId) -> NextHopGroupId;

    /// The CPU port as a reference.
    fn cpu_port_ref(&self) -> PortId;
}
