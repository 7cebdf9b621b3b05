//! Unicast route resolution and mutation engine.
//!
//! This crate manages unicast route entries in a router's forwarding table:
//! creating, removing, reading, and mutating routes identified by
//! (virtual router, IP prefix). The interesting parts:
//!
//! - [`resolve`]: turns an opaque next-hop reference into the concrete
//!   forwarding-target shape the table understands
//! - [`engine::RouteEngine`]: decides whether an attribute change can be
//!   applied in place, needs a delete-then-reinsert, or must be deferred
//! - [`pending::PendingActions`]: parks a requested packet action that
//!   cannot be realized until the route gains a target
//!
//! The forwarding-table store and object translation are consumed through
//! the traits in [`hw`], so the engine is independent of any particular
//! backend.
//!
//! # Example
//!
//! ```ignore
//! use fib_engine::{RouteAttrValue, RouteEngine, RouteKey, PacketAction};
//!
//! fn blackhole(engine: &mut RouteEngine<impl FibTable, impl SwitchObjects>,
//!              key: &RouteKey) -> fib_engine::Result<()> {
//!     engine.create(key, &[RouteAttrValue::PacketAction(PacketAction::Drop)])
//! }
//! ```

pub mod attrs;
pub mod engine;
pub mod error;
pub mod hw;
pub mod oid;
pub mod pending;
pub mod resolve;
pub mod types;

pub use attrs::{AttrCaps, RouteAttr, RouteAttrValue};
pub use engine::RouteEngine;
pub use error::{HwStatus, Result, RouteError};
pub use hw::{EcmpMember, FibTable, SwitchObjects};
pub use oid::{
    NextHopGroupId, NextHopId, ObjectKind, ObjectRef, PortId, RawObjectId, RouterInterfaceId,
    VirtualRouterId,
};
pub use types::{
    EcmpId, ForwardingTarget, NextHopRef, PacketAction, RifIndex, RouteEntry, RouteKey,
    TrapPriority, UpdateStrategy,
};
