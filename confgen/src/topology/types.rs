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

//! Module containing all type definitions

use petgraph::prelude::*;
use std::fmt;
use thiserror::Error;

pub(crate) type IndexType = u32;
/// Node Identification (and index into the graph)
pub type NodeId = NodeIndex<IndexType>;
/// Link Identification (and index into the graph). Static routes are identified the same way.
pub type LinkId = EdgeIndex<IndexType>;
/// Identification of an autonomous system (protocol domain). This is the index into the list of
/// domains stored in the topology.
#[derive(PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
pub struct AsId(pub u32);

impl AsId {
    /// Returns the index of the domain inside the topology.
    pub fn index(&self) -> usize {
        self.0 as usize
    }
}

/// Kind of an edge in the topology graph.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum LinkKind {
    /// Physical link between two interfaces
    Physical,
    /// Static route, owned by the source node of the edge
    StaticRoute,
}

/// Protocol running inside an autonomous system.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum ProtocolType {
    /// Routing Information Protocol
    Rip,
    /// Open Shortest Path First
    Ospf,
    /// Intermediate System to Intermediate System
    Isis,
    /// Virtual LAN bridging domain
    Vlan,
}

impl fmt::Display for ProtocolType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ProtocolType::Rip => write!(f, "RIP"),
            ProtocolType::Ospf => write!(f, "OSPF"),
            ProtocolType::Isis => write!(f, "IS-IS"),
            ProtocolType::Vlan => write!(f, "VLAN"),
        }
    }
}

/// Role of a device, which selects the configuration sequence that is generated for it.
#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy)]
pub enum DeviceRole {
    /// Layer 3 device
    Router,
    /// Layer 2 device
    Switch,
}

impl fmt::Display for DeviceRole {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            DeviceRole::Router => write!(f, "router"),
            DeviceRole::Switch => write!(f, "switch"),
        }
    }
}

/// Topology Errors. Each variant names the offending node, link or autonomous system.
#[derive(Error, Debug, PartialEq)]
pub enum TopologyError {
    /// Node is not present in the topology
    #[error("Node was not found in topology: {0:?}")]
    NodeNotFound(NodeId),
    /// Node name is not present in the topology
    #[error("Node name was not found in topology: {0}")]
    NodeNameNotFound(String),
    /// Link is not present in the topology, or the edge is not a physical link
    #[error("Link was not found in topology: {0:?}")]
    LinkNotFound(LinkId),
    /// Static route is not present in the topology, or the edge is not a static route
    #[error("Static route was not found in topology: {0:?}")]
    StaticRouteNotFound(LinkId),
    /// Autonomous system is not present in the topology
    #[error("Autonomous system was not found in topology: {0:?}")]
    AsNotFound(AsId),
    /// Autonomous system name is not present in the topology
    #[error("Autonomous system name was not found in topology: {0}")]
    AsNameNotFound(String),
    /// The node is none of the two endpoints of the link
    #[error("Node {node:?} is not an endpoint of link {link:?}")]
    NotAnEndpoint {
        /// Queried node
        node: NodeId,
        /// Queried link
        link: LinkId,
    },
    /// The node is not a member of the autonomous system
    #[error("Node {0:?} is not a member of {1:?}")]
    NotMember(NodeId, AsId),
    /// A node must belong to exactly one area of an OSPF or IS-IS domain
    #[error("Node {node:?} belongs to {count} areas of {as_id:?}, but exactly one is required")]
    NodeAreaCount {
        /// Offending node
        node: NodeId,
        /// Domain in which the node is a member
        as_id: AsId,
        /// Number of areas the node belongs to
        count: usize,
    },
    /// A link must belong to exactly one area of an OSPF domain it participates in
    #[error("Link {link:?} belongs to {count} areas of {as_id:?}, but exactly one is required")]
    LinkAreaCount {
        /// Offending link
        link: LinkId,
        /// Domain in which the link participates
        as_id: AsId,
        /// Number of areas the link belongs to
        count: usize,
    },
    /// The link participates in a domain (or an area of it) which one of its endpoints does not
    /// hold.
    #[error("Link {link:?} carries members of {as_id:?} not held by its endpoint {node:?}")]
    LinkMembershipMismatch {
        /// Offending link
        link: LinkId,
        /// Endpoint missing the membership
        node: NodeId,
        /// Domain of the membership
        as_id: AsId,
    },
    /// An area or VLAN id is referenced which does not exist in the domain
    #[error("{as_id:?} has no area or VLAN with id {id}")]
    UnknownMember {
        /// Domain
        as_id: AsId,
        /// Unknown area or VLAN id
        id: u32,
    },
    /// An area or VLAN with the same id was already added to the domain
    #[error("{as_id:?} already has an area or VLAN with id {id}")]
    DuplicateMember {
        /// Domain
        as_id: AsId,
        /// Duplicate area or VLAN id
        id: u32,
    },
    /// A link participates in a VLAN domain without carrying any VLAN
    #[error("Link {link:?} participates in the VLAN domain {as_id:?} without any VLAN")]
    EmptyVlanSet {
        /// Offending link
        link: LinkId,
        /// VLAN domain
        as_id: AsId,
    },
    /// The operation requires a domain running a different protocol
    #[error("{as_id:?} runs {found}, but {expected} was expected")]
    WrongProtocol {
        /// Domain
        as_id: AsId,
        /// Protocol of the domain
        found: ProtocolType,
        /// Protocol required by the operation
        expected: ProtocolType,
    },
}
