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

//! # Links and Static Routes
//!
//! Edges of the topology graph. A [`Link`] connects two interfaces, one on each endpoint. The
//! attributes of each side are stored separately, and [`Link::side`] resolves them for the node
//! asking.

use crate::topology::device::{join_memberships, Memberships};
use crate::topology::{AsId, LinkId, LinkKind, NodeId, TopologyError};

/// Interface at one end of a physical link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interface {
    /// Name of the interface, like `Gi0/0`
    pub name: String,
    /// Address of the interface, as dotted-quad string
    pub address: String,
    /// Subnet mask, as dotted-quad string
    pub mask: String,
    /// OSPF cost in the direction leaving this interface
    pub cost: u32,
}

impl Interface {
    /// Create a new interface with the default cost of 1.
    pub fn new(
        name: impl Into<String>,
        address: impl Into<String>,
        mask: impl Into<String>,
    ) -> Self {
        Self { name: name.into(), address: address.into(), mask: mask.into(), cost: 1 }
    }

    /// Set the OSPF cost of the interface.
    pub fn with_cost(mut self, cost: u32) -> Self {
        self.cost = cost;
        self
    }
}

/// Physical link between two devices.
#[derive(Debug, Clone, PartialEq)]
pub struct Link {
    link_id: LinkId,
    source: NodeId,
    destination: NodeId,
    source_side: Interface,
    destination_side: Interface,
    memberships: Memberships,
}

impl Link {
    pub(crate) fn new(
        link_id: LinkId,
        source: NodeId,
        source_side: Interface,
        destination: NodeId,
        destination_side: Interface,
    ) -> Self {
        Self {
            link_id,
            source,
            destination,
            source_side,
            destination_side,
            memberships: Vec::new(),
        }
    }

    /// Return the link id
    pub fn link_id(&self) -> LinkId {
        self.link_id
    }

    /// Return both endpoints, `(source, destination)`.
    pub fn endpoints(&self) -> (NodeId, NodeId) {
        (self.source, self.destination)
    }

    /// Return the interface of the link located on `node`.
    pub fn side(&self, node: NodeId) -> Result<&Interface, TopologyError> {
        if node == self.source {
            Ok(&self.source_side)
        } else if node == self.destination {
            Ok(&self.destination_side)
        } else {
            Err(TopologyError::NotAnEndpoint { node, link: self.link_id })
        }
    }

    /// Return the endpoint opposite to `node`.
    pub fn neighbor(&self, node: NodeId) -> Result<NodeId, TopologyError> {
        if node == self.source {
            Ok(self.destination)
        } else if node == self.destination {
            Ok(self.source)
        } else {
            Err(TopologyError::NotAnEndpoint { node, link: self.link_id })
        }
    }

    /// Return all domains the link participates in, together with the areas or VLANs it
    /// carries, in the order they were added.
    pub fn memberships(&self) -> &[(AsId, Vec<u32>)] {
        &self.memberships
    }

    /// Return the areas or VLANs the link carries in the domain, or `None` if the link does not
    /// participate in it.
    pub fn members(&self, as_id: AsId) -> Option<&[u32]> {
        self.memberships.iter().find(|(a, _)| *a == as_id).map(|(_, m)| m.as_slice())
    }

    /// Returns true if and only if the link participates in the domain.
    pub fn is_member(&self, as_id: AsId) -> bool {
        self.memberships.iter().any(|(a, _)| *a == as_id)
    }

    pub(crate) fn set_link_id(&mut self, link_id: LinkId) {
        self.link_id = link_id;
    }

    pub(crate) fn join(&mut self, as_id: AsId, members: &[u32]) {
        join_memberships(&mut self.memberships, as_id, members)
    }
}

/// Static route, configured on the source node of the route edge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaticRoute {
    /// Destination subnet address
    pub subnet: String,
    /// Prefix length of the destination subnet
    pub prefix_len: u32,
    /// Address of the next hop
    pub next_hop: String,
}

impl StaticRoute {
    /// Create a new static route
    pub fn new(subnet: impl Into<String>, prefix_len: u32, next_hop: impl Into<String>) -> Self {
        Self { subnet: subnet.into(), prefix_len, next_hop: next_hop.into() }
    }
}

/// Weight of an edge in the topology graph.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Connection {
    Physical(Link),
    StaticRoute(StaticRoute),
}

impl Connection {
    pub(crate) fn kind(&self) -> LinkKind {
        match self {
            Connection::Physical(_) => LinkKind::Physical,
            Connection::StaticRoute(_) => LinkKind::StaticRoute,
        }
    }
}
