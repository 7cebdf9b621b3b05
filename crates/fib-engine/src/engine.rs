//! Route CRUD facade and mutation strategy.
//!
//! [`RouteEngine`] owns the pending-action store and orchestrates the
//! resolver, the forwarding-table store, and the object translator. Each
//! operation runs to completion before returning; exclusive access is a
//! compile-time property of the `&mut self` methods, so callers wanting
//! concurrency wrap the whole engine in one lock.

use crate::attrs::{self, RouteAttr, RouteAttrValue};
use crate::error::{Result, RouteError};
use crate::hw::{FibTable, SwitchObjects};
use crate::pending::PendingActions;
use crate::resolve;
use crate::types::{
    NextHopRef, PacketAction, RouteEntry, RouteKey, TrapPriority, UpdateStrategy,
};
use log::{debug, error, info};

/// The route resolution and mutation engine.
pub struct RouteEngine<T: FibTable, O: SwitchObjects> {
    table: T,
    objects: O,
    pending: PendingActions,
}

impl<T: FibTable, O: SwitchObjects> RouteEngine<T, O> {
    pub fn new(table: T, objects: O) -> Self {
        Self {
            table,
            objects,
            pending: PendingActions::new(),
        }
    }

    /// The forwarding-table store, for inspection.
    pub fn table(&self) -> &T {
        &self.table
    }

    /// Deferred action recorded for `key`, if any.
    pub fn pending_action(&self, key: &RouteKey) -> Option<PacketAction> {
        self.pending.get(key)
    }

    /// Creates a route from an attribute list.
    ///
    /// Omitted attributes default to `Forward` action and medium trap
    /// priority. A `Forward`/`Mirror` request without a next-hop attribute
    /// is rejected before anything is written.
    pub fn create(&mut self, key: &RouteKey, attr_list: &[RouteAttrValue]) -> Result<()> {
        attrs::check_create_attrs(attr_list)?;

        info!("create {}", key);

        let mut action = PacketAction::Forward;
        let mut trap_priority = TrapPriority::MEDIUM;
        let mut next_hop: Option<(usize, NextHopRef)> = None;

        for (index, value) in attr_list.iter().enumerate() {
            match value {
                RouteAttrValue::PacketAction(a) => action = *a,
                RouteAttrValue::TrapPriority(v) => {
                    trap_priority = TrapPriority::new(*v).ok_or_else(|| {
                        error!(
                            "{}: trap priority {} out of range ({},{})",
                            key,
                            v,
                            TrapPriority::MIN,
                            TrapPriority::MAX
                        );
                        RouteError::invalid_attr_value(index)
                    })?;
                }
                RouteAttrValue::NextHop(nh) => next_hop = Some((index, *nh)),
            }
        }

        let requested = action;
        let (nh_index, nh) = next_hop.unwrap_or((0, NextHopRef::Null));
        let resolution = resolve::resolve(&self.objects, nh, nh_index, action)?;

        if matches!(requested, PacketAction::Forward | PacketAction::Mirror)
            && next_hop.is_none()
        {
            error!(
                "{}: action {} without a next hop or next hop group is not allowed",
                key, requested
            );
            return Err(RouteError::invalid_parameter(
                "forward/mirror action requires a next hop reference",
            ));
        }

        let entry = RouteEntry {
            action: resolution.action,
            trap_priority,
            target: resolution.target,
        };
        debug!("{}: insert {} {}", key, entry.action, entry.target);
        self.table.insert(key, &entry).map_err(|status| {
            error!("{}: insert failed: {}", key, status);
            RouteError::from(status)
        })
    }

    /// Removes a route.
    pub fn remove(&mut self, key: &RouteKey) -> Result<()> {
        info!("remove {}", key);
        self.table.delete(key).map_err(|status| {
            error!("{}: delete failed: {}", key, status);
            RouteError::from(status)
        })
    }

    /// Reads one attribute of the committed entry.
    ///
    /// A deferred action is not visible here; reads reflect hardware state.
    pub fn get_attribute(&self, key: &RouteKey, attr: RouteAttr) -> Result<RouteAttrValue> {
        let entry = self.get_entry(key)?;
        match attr {
            RouteAttr::PacketAction => Ok(RouteAttrValue::PacketAction(entry.action)),
            RouteAttr::TrapPriority => {
                Ok(RouteAttrValue::TrapPriority(entry.trap_priority.value()))
            }
            RouteAttr::NextHop => Ok(RouteAttrValue::NextHop(self.project_target(&entry)?)),
            RouteAttr::Metadata => Err(RouteError::unsupported("route metadata attribute")),
        }
    }

    /// Sets one attribute; the value variant selects the attribute.
    pub fn set_attribute(&mut self, key: &RouteKey, value: RouteAttrValue) -> Result<()> {
        debug!("{}: set {} attribute", key, value.attr());
        match value {
            RouteAttrValue::PacketAction(action) => self.set_packet_action(key, action),
            RouteAttrValue::TrapPriority(prio) => self.set_trap_priority(key, prio),
            RouteAttrValue::NextHop(nh) => self.set_next_hop(key, nh),
        }
    }

    /// Packet action policy: an upgrade to `Forward`/`Log` while the
    /// committed entry is `Drop`/`Trap` (and thus has no usable target) is
    /// deferred; every other change reinserts the entry.
    fn set_packet_action(&mut self, key: &RouteKey, action: PacketAction) -> Result<()> {
        let mut entry = self.get_entry(key)?;

        let committed = entry.action;
        if matches!(committed, PacketAction::Drop | PacketAction::Trap)
            && matches!(action, PacketAction::Forward | PacketAction::Log)
        {
            self.pending.save(*key, action);
            return Ok(());
        }

        self.pending.clear(key);
        entry.action = action;
        self.commit(key, &entry, UpdateStrategy::Reinsert)
    }

    fn set_trap_priority(&mut self, key: &RouteKey, prio: u8) -> Result<()> {
        let mut entry = self.get_entry(key)?;

        let prio = TrapPriority::new(prio).ok_or_else(|| {
            error!(
                "{}: trap priority {} out of range ({},{})",
                key,
                prio,
                TrapPriority::MIN,
                TrapPriority::MAX
            );
            RouteError::invalid_attr_value(0)
        })?;

        entry.trap_priority = prio;
        self.commit(key, &entry, UpdateStrategy::Reinsert)
    }

    /// Attaching a target consumes any deferred action: the entry is
    /// committed in one in-place write carrying both the new target and the
    /// action the caller asked for while the route was unresolvable.
    fn set_next_hop(&mut self, key: &RouteKey, nh: NextHopRef) -> Result<()> {
        let mut entry = self.get_entry(key)?;

        if let Some(action) = self.pending.fetch_and_clear(key) {
            debug!("{}: applying deferred action {}", key, action);
            entry.action = action;
        }

        let resolution = resolve::resolve(&self.objects, nh, 0, entry.action)?;
        entry.action = resolution.action;
        entry.target = resolution.target;
        self.commit(key, &entry, UpdateStrategy::InPlace)
    }

    fn get_entry(&self, key: &RouteKey) -> Result<RouteEntry> {
        self.table.get(key).map_err(RouteError::from)
    }

    fn project_target(&self, entry: &RouteEntry) -> Result<NextHopRef> {
        use crate::types::ForwardingTarget;
        match entry.target {
            ForwardingTarget::LocalEgress { rif } => {
                Ok(NextHopRef::RouterInterface(self.objects.rif_ref(rif)))
            }
            ForwardingTarget::Group { group } => {
                Ok(NextHopRef::Group(self.objects.group_ref(group)))
            }
            ForwardingTarget::HostDelivery => Ok(NextHopRef::Port(self.objects.cpu_port_ref())),
            ForwardingTarget::None => Ok(NextHopRef::Null),
            // A collapsed single next hop has no container to hand back.
            ForwardingTarget::Resolved { .. } => Err(RouteError::NotImplemented {
                feature: "next hop to ECMP container lookup",
            }),
        }
    }

    fn commit(
        &mut self,
        key: &RouteKey,
        entry: &RouteEntry,
        strategy: UpdateStrategy,
    ) -> Result<()> {
        match strategy {
            UpdateStrategy::InPlace => self.table.replace(key, entry).map_err(|status| {
                error!("{}: replace failed: {}", key, status);
                RouteError::from(status)
            }),
            UpdateStrategy::Reinsert => {
                self.table.delete(key).map_err(|status| {
                    error!("{}: delete failed: {}", key, status);
                    RouteError::from(status)
                })?;
                // Not atomic: a failure here leaves the route absent.
                self.table.insert(key, entry).map_err(|status| {
                    error!("{}: reinsert failed, route left absent: {}", key, status);
                    RouteError::from(status)
                })
            }
        }
    }
}
