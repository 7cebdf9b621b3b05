//! Deferred packet-action store.
//!
//! When a caller asks for `Forward`/`Log` on a route that has no committed
//! target, the change cannot reach hardware yet; the requested action is
//! parked here and applied when a target is attached. This is auxiliary
//! state only: losing it degrades a deferred request, it cannot corrupt the
//! forwarding table.

use crate::types::{PacketAction, RouteKey};
use log::debug;
use std::collections::HashMap;

/// Per-route shadow map of actions waiting for a target.
///
/// At most one record exists per key; `save` overwrites.
#[derive(Debug, Default)]
pub struct PendingActions {
    map: HashMap<RouteKey, PacketAction>,
}

impl PendingActions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `action` as pending for `key`, replacing any earlier record.
    pub fn save(&mut self, key: RouteKey, action: PacketAction) {
        debug!("{}: deferring action {} until a next hop is attached", key, action);
        self.map.insert(key, action);
    }

    /// Drops any record for `key`.
    pub fn clear(&mut self, key: &RouteKey) {
        if self.map.remove(key).is_some() {
            debug!("{}: cleared deferred action", key);
        }
    }

    /// Removes and returns the record for `key`, if any.
    pub fn fetch_and_clear(&mut self, key: &RouteKey) -> Option<PacketAction> {
        self.map.remove(key)
    }

    /// Read-only peek, for diagnostics.
    pub fn get(&self, key: &RouteKey) -> Option<PacketAction> {
        self.map.get(key).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
