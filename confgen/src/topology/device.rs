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

//! # Network Device
//!
//! A device is a node in the topology graph: a router or a switch, together with its loopback
//! address and the autonomous systems it is a member of.

use crate::topology::{AsId, DeviceRole, NodeId};

/// Ordered mapping from an autonomous system to the ids of the areas (OSPF, IS-IS) or VLANs
/// (VLAN domains) held within it. The order in which domains were joined is kept, since it
/// determines the order of the generated configuration blocks.
pub type Memberships = Vec<(AsId, Vec<u32>)>;

/// # Network Device
#[derive(Debug, Clone, PartialEq)]
pub struct Device {
    node_id: NodeId,
    name: String,
    role: DeviceRole,
    loopback: String,
    default_route: Option<String>,
    memberships: Memberships,
}

impl Device {
    pub(crate) fn new(node_id: NodeId, name: String, role: DeviceRole, loopback: String) -> Self {
        Self { node_id, name, role, loopback, default_route: None, memberships: Vec::new() }
    }

    /// Return the node id of the device
    pub fn node_id(&self) -> NodeId {
        self.node_id
    }

    /// Return the name of the device
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Return the role of the device
    pub fn role(&self) -> DeviceRole {
        self.role
    }

    /// Return the loopback address, as dotted-quad string
    pub fn loopback(&self) -> &str {
        self.loopback.as_str()
    }

    /// Return the next hop of the default route, if any.
    pub fn default_route(&self) -> Option<&str> {
        self.default_route.as_deref()
    }

    /// Return all domain memberships in the order they were added.
    pub fn memberships(&self) -> &[(AsId, Vec<u32>)] {
        &self.memberships
    }

    /// Return the areas or VLANs held in the given domain, or `None` if the device is not a
    /// member.
    pub fn members(&self, as_id: AsId) -> Option<&[u32]> {
        self.memberships.iter().find(|(a, _)| *a == as_id).map(|(_, m)| m.as_slice())
    }

    /// Returns true if and only if the device is a member of the domain.
    pub fn is_member(&self, as_id: AsId) -> bool {
        self.memberships.iter().any(|(a, _)| *a == as_id)
    }

    pub(crate) fn set_node_id(&mut self, node_id: NodeId) {
        self.node_id = node_id;
    }

    pub(crate) fn set_default_route(&mut self, next_hop: Option<String>) {
        self.default_route = next_hop;
    }

    pub(crate) fn join(&mut self, as_id: AsId, members: &[u32]) {
        join_memberships(&mut self.memberships, as_id, members)
    }
}

/// Add the members to the membership list of a domain, creating the entry if it does not yet
/// exist. Members are never duplicated.
pub(crate) fn join_memberships(memberships: &mut Memberships, as_id: AsId, members: &[u32]) {
    let pos = match memberships.iter().position(|(a, _)| *a == as_id) {
        Some(pos) => pos,
        None => {
            memberships.push((as_id, Vec::with_capacity(members.len())));
            memberships.len() - 1
        }
    };
    let entry = &mut memberships[pos].1;
    for m in members {
        if !entry.contains(m) {
            entry.push(*m);
        }
    }
}
