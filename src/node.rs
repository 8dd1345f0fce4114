//! Node identity carried by every generated identifier

use std::fmt;

use crate::error::IdError;

/// Validated node identity in `[0, 9999]`
///
/// The range is the product of the zone layout: [`NodeId::ZONES`] zones with
/// [`NodeId::NODES_PER_ZONE`] slots each. The value is assigned outside this
/// crate and only checked here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NodeId(u16);

impl NodeId {
    pub const ZONES: u16 = 10;
    pub const NODES_PER_ZONE: u16 = 1000;
    pub const MAX: u16 = Self::ZONES * Self::NODES_PER_ZONE - 1;

    /// Validate a raw node number
    pub fn new(node_id: u32) -> Result<Self, IdError> {
        if node_id > Self::MAX as u32 {
            return Err(IdError::InvalidNodeId {
                node_id,
                max: Self::MAX,
            });
        }
        Ok(Self(node_id as u16))
    }

    /// Compose a node identity from a zone and a slot inside that zone
    pub fn from_zone(zone: u32, slot: u32) -> Result<Self, IdError> {
        if zone >= Self::ZONES as u32 || slot >= Self::NODES_PER_ZONE as u32 {
            return Err(IdError::InvalidZone {
                zone,
                slot,
                zones: Self::ZONES,
                slots: Self::NODES_PER_ZONE,
            });
        }
        Ok(Self((zone * Self::NODES_PER_ZONE as u32 + slot) as u16))
    }

    #[inline(always)]
    pub const fn get(self) -> u16 {
        self.0
    }

    #[inline(always)]
    pub const fn zone(self) -> u16 {
        self.0 / Self::NODES_PER_ZONE
    }

    #[inline(always)]
    pub const fn slot(self) -> u16 {
        self.0 % Self::NODES_PER_ZONE
    }
}

impl TryFrom<u32> for NodeId {
    type Error = IdError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<NodeId> for u16 {
    fn from(node: NodeId) -> Self {
        node.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}", self.0)
    }
}
