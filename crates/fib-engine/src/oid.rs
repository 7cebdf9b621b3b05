//! Type-safe object references.
//!
//! Callers hand the engine opaque object identifiers for next hops, groups,
//! router interfaces, ports, and virtual routers. The phantom kind parameter
//! makes those identifiers incompatible at compile time, so a port reference
//! cannot be passed where a next-hop reference is expected.

use std::fmt;
use std::hash::Hash;
use std::marker::PhantomData;

/// Raw object identifier value.
pub type RawObjectId = u64;

/// Marker trait for object reference kinds.
pub trait ObjectKind: Send + Sync + 'static {
    /// Kind name used in Debug output.
    fn kind_name() -> &'static str;
}

/// An opaque object reference tagged with its kind.
#[derive(Clone, Copy)]
pub struct ObjectRef<K: ObjectKind> {
    raw: RawObjectId,
    _kind: PhantomData<K>,
}

impl<K: ObjectKind> ObjectRef<K> {
    /// Wraps a raw identifier.
    pub const fn new(raw: RawObjectId) -> Self {
        Self {
            raw,
            _kind: PhantomData,
        }
    }

    /// The raw identifier value.
    pub const fn raw(&self) -> RawObjectId {
        self.raw
    }
}

impl<K: ObjectKind> fmt::Debug for ObjectRef<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(0x{:x})", K::kind_name(), self.raw)
    }
}

impl<K: ObjectKind> fmt::Display for ObjectRef<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{:x}", self.raw)
    }
}

impl<K: ObjectKind> PartialEq for ObjectRef<K> {
    fn eq(&self, other: &Self) -> bool {
        self.raw == other.raw
    }
}

impl<K: ObjectKind> Eq for ObjectRef<K> {}

impl<K: ObjectKind> Hash for ObjectRef<K> {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.raw.hash(state);
    }
}

macro_rules! define_object_ref {
    ($kind:ident, $name:literal, $alias:ident) => {
        #[derive(Debug, Clone, Copy)]
        pub struct $kind;

        impl ObjectKind for $kind {
            fn kind_name() -> &'static str {
                $name
            }
        }

        pub type $alias = ObjectRef<$kind>;
    };
}

define_object_ref!(VirtualRouterKind, "VirtualRouter", VirtualRouterId);
define_object_ref!(NextHopKind, "NextHop", NextHopId);
define_object_ref!(NextHopGroupKind, "NextHopGroup", NextHopGroupId);
define_object_ref!(RouterInterfaceKind, "RouterInterface", RouterInterfaceId);
define_object_ref!(PortKind, "Port", PortId);
