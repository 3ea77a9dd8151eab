// Confgen: Synthesizing Device Configurations from Network Topologies
// Copyright (C) 2021  Tibor Schneider
//
// This program is free software; you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation; either version 2 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License along
// with this program; if not, write to the Free Software Foundation, Inc.,
// 51 Franklin Street, Fifth Floor, Boston, MA 02110-1301 USA.

//! # Autonomous Systems
//!
//! An autonomous system, as used here, is a protocol domain grouping nodes and links under a
//! single protocol. Each protocol variant owns the state it needs to generate its configuration
//! blocks: areas and border routers for OSPF and IS-IS, the exit point for OSPF, and the VLANs of a
//! bridging domain.

use crate::topology::{AsId, NodeId, ProtocolType};

/// Area of an OSPF or IS-IS domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Area {
    /// Area id
    pub id: u32,
    /// Name of the area
    pub name: String,
    /// Set if the area is the backbone of its domain
    pub backbone: bool,
}

impl Area {
    /// Create a new area
    pub fn new(id: u32, name: impl Into<String>, backbone: bool) -> Self {
        Self { id, name: name.into(), backbone }
    }
}

/// Virtual LAN of a bridging domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vlan {
    /// VLAN id
    pub id: u32,
    /// Name of the VLAN
    pub name: String,
}

impl Vlan {
    /// Create a new VLAN
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self { id, name: name.into() }
    }
}

/// State of a RIP domain. RIP has no areas.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RipDomain {}

/// State of an OSPF domain
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OspfDomain {
    pub(crate) areas: Vec<Area>,
    pub(crate) border_routers: Vec<NodeId>,
    pub(crate) exit_point: Option<NodeId>,
}

impl OspfDomain {
    /// Return all areas of the domain
    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    /// Return the area border routers
    pub fn border_routers(&self) -> &[NodeId] {
        &self.border_routers
    }

    /// Return the node which originates the default route into the domain, if any.
    pub fn exit_point(&self) -> Option<NodeId> {
        self.exit_point
    }
}

/// State of an IS-IS domain
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IsisDomain {
    pub(crate) areas: Vec<Area>,
    pub(crate) border_routers: Vec<NodeId>,
}

impl IsisDomain {
    /// Return all areas of the domain
    pub fn areas(&self) -> &[Area] {
        &self.areas
    }

    /// Return the border routers, i.e., the level-1-2 routers of the domain.
    pub fn border_routers(&self) -> &[NodeId] {
        &self.border_routers
    }
}

/// State of a VLAN bridging domain
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VlanDomain {
    pub(crate) vlans: Vec<Vlan>,
}

impl VlanDomain {
    /// Return all VLANs of the domain
    pub fn vlans(&self) -> &[Vlan] {
        &self.vlans
    }
}

/// Closed set of protocols a domain can run, each carrying its own state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Protocol {
    /// RIP domain
    Rip(RipDomain),
    /// OSPF domain
    Ospf(OspfDomain),
    /// IS-IS domain
    Isis(IsisDomain),
    /// VLAN domain
    Vlan(VlanDomain),
}

impl Protocol {
    /// Create an empty domain state for the given protocol.
    pub fn new(protocol: ProtocolType) -> Self {
        match protocol {
            ProtocolType::Rip => Protocol::Rip(RipDomain::default()),
            ProtocolType::Ospf => Protocol::Ospf(OspfDomain::default()),
            ProtocolType::Isis => Protocol::Isis(IsisDomain::default()),
            ProtocolType::Vlan => Protocol::Vlan(VlanDomain::default()),
        }
    }

    /// Return the protocol type
    pub fn protocol_type(&self) -> ProtocolType {
        match self {
            Protocol::Rip(_) => ProtocolType::Rip,
            Protocol::Ospf(_) => ProtocolType::Ospf,
            Protocol::Isis(_) => ProtocolType::Isis,
            Protocol::Vlan(_) => ProtocolType::Vlan,
        }
    }
}

/// # Autonomous System
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AutonomousSystem {
    as_id: AsId,
    name: String,
    pub(crate) protocol: Protocol,
}

impl AutonomousSystem {
    pub(crate) fn new(as_id: AsId, name: String, protocol: Protocol) -> Self {
        Self { as_id, name, protocol }
    }

    /// Return the id of the domain
    pub fn as_id(&self) -> AsId {
        self.as_id
    }

    /// Return the name of the domain
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Return the protocol and its state
    pub fn protocol(&self) -> &Protocol {
        &self.protocol
    }

    /// Return the protocol type
    pub fn protocol_type(&self) -> ProtocolType {
        self.protocol.protocol_type()
    }

    /// Return all areas of the domain. Domains without areas (RIP and VLAN) return an empty
    /// slice.
    pub fn areas(&self) -> &[Area] {
        match &self.protocol {
            Protocol::Ospf(d) => d.areas(),
            Protocol::Isis(d) => d.areas(),
            Protocol::Rip(_) | Protocol::Vlan(_) => &[],
        }
    }

    /// Return the area with the given id.
    pub fn area(&self, id: u32) -> Option<&Area> {
        self.areas().iter().find(|a| a.id == id)
    }

    /// Return the VLAN with the given id. Only VLAN domains hold VLANs.
    pub fn vlan(&self, id: u32) -> Option<&Vlan> {
        match &self.protocol {
            Protocol::Vlan(d) => d.vlans.iter().find(|v| v.id == id),
            _ => None,
        }
    }

    /// Returns true if the domain holds an area or a VLAN with the given id.
    pub fn contains_member(&self, id: u32) -> bool {
        self.area(id).is_some() || self.vlan(id).is_some()
    }

    /// Return the border routers of the domain. Only OSPF and IS-IS domains have border
    /// routers.
    pub fn border_routers(&self) -> &[NodeId] {
        match &self.protocol {
            Protocol::Ospf(d) => d.border_routers(),
            Protocol::Isis(d) => d.border_routers(),
            Protocol::Rip(_) | Protocol::Vlan(_) => &[],
        }
    }
}
