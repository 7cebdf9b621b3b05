//! Next-hop reference resolution.
//!
//! Maps a [`NextHopRef`] onto the concrete [`ForwardingTarget`] the
//! forwarding table understands. Resolution can also adjust the packet
//! action: a route whose reference is withdrawn cannot legitimately keep
//! forwarding, so a null reference downgrades anything but `Trap` to `Drop`.

use crate::error::{Result, RouteError};
use crate::hw::{EcmpMember, SwitchObjects};
use crate::types::{ForwardingTarget, NextHopRef, PacketAction};
use log::error;

/// Outcome of resolving a next-hop reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    pub target: ForwardingTarget,
    pub action: PacketAction,
}

/// Resolves `nh` into a forwarding target.
///
/// `attr_index` is the position of the next-hop attribute in the caller's
/// list, used to tag value errors. `action` is the action the entry will
/// carry; it is returned unchanged except for the null-reference downgrade.
pub fn resolve<O: SwitchObjects>(
    objects: &O,
    nh: NextHopRef,
    attr_index: usize,
    action: PacketAction,
) -> Result<Resolution> {
    let target = match nh {
        NextHopRef::NextHop(id) => {
            let ecmp = objects.next_hop_ecmp(id)?;
            let members = objects.ecmp_members(ecmp)?;
            // A single-next-hop container holds exactly one member.
            let member = match members.as_slice() {
                [member] => *member,
                _ => {
                    error!("invalid next hop object {}: {} members", id, members.len());
                    return Err(RouteError::invalid_attr_value(attr_index));
                }
            };
            match member {
                // Encapsulation needs container-level processing at commit
                // time, so the one-member container is kept as a group.
                EcmpMember::TunnelEncap => ForwardingTarget::Group { group: ecmp },
                EcmpMember::Ip(address) => ForwardingTarget::Resolved { address },
            }
        }
        NextHopRef::Group(id) => {
            // Membership count is irrelevant for a real group.
            let group = objects.group_ecmp(id)?;
            ForwardingTarget::Group { group }
        }
        NextHopRef::RouterInterface(id) => {
            let rif = objects.rif_index(id).map_err(|e| {
                error!("failed to translate rif reference {}: {}", id, e);
                e
            })?;
            ForwardingTarget::LocalEgress { rif }
        }
        NextHopRef::Port(id) => {
            let port = objects.port_index(id)?;
            let cpu = objects.cpu_port_index();
            if port != cpu {
                error!(
                    "invalid port {} as next hop, only cpu port {} is valid",
                    port, cpu
                );
                return Err(RouteError::invalid_attr_value(attr_index));
            }
            ForwardingTarget::HostDelivery
        }
        NextHopRef::Null => {
            let action = if action == PacketAction::Trap {
                PacketAction::Trap
            } else {
                PacketAction::Drop
            };
            return Ok(Resolution {
                target: ForwardingTarget::None,
                action,
            });
        }
    };

    Ok(Resolution { target, action })
}
