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

//! # Top-level Topology module
//!
//! This module stores the topology (devices, physical links and static routes), together with the
//! protocol domains and the membership of every device and link in them.

use crate::topology::device::Device;
use crate::topology::domain::{Area, AutonomousSystem, Protocol, Vlan};
use crate::topology::link::{Connection, Interface, Link, StaticRoute};
use crate::topology::types::IndexType;
use crate::topology::{AsId, DeviceRole, LinkId, LinkKind, NodeId, ProtocolType, TopologyError};

use log::*;
use petgraph::stable_graph::StableGraph;
use petgraph::Directed;

type TopologyGraph = StableGraph<Device, Connection, Directed, IndexType>;

/// # Topology
///
/// The topology stores all devices as nodes of a graph. Physical links and static routes are
/// edges. Physical links are symmetric, even though the underlying graph is directed: the
/// direction only determines which side of the link is called the source. Static routes are
/// directed and belong to the source node.
///
/// All iterations over the topology are done in insertion order. Adjacent links are returned in
/// the order they were added, and domain memberships of devices and links are returned in the
/// order in which they were joined. This guarantees that the same topology always produces the
/// same configuration.
///
/// The topology is only mutated while it is being built. All accessors used during
/// configuration synthesis take `&self`.
#[derive(Debug, Clone, Default)]
pub struct Topology {
    graph: TopologyGraph,
    domains: Vec<AutonomousSystem>,
}

impl Topology {
    /// Generate an empty topology
    pub fn new() -> Self {
        Self { graph: StableGraph::default(), domains: Vec::new() }
    }

    /// Add a new router to the topology. This function returns the ID of the router, which can be
    /// used to reference it while configuring the topology.
    pub fn add_router(&mut self, name: impl Into<String>, loopback: impl Into<String>) -> NodeId {
        self.add_device(name.into(), DeviceRole::Router, loopback.into())
    }

    /// Add a new switch to the topology. This function returns the ID of the switch.
    pub fn add_switch(&mut self, name: impl Into<String>, loopback: impl Into<String>) -> NodeId {
        self.add_device(name.into(), DeviceRole::Switch, loopback.into())
    }

    fn add_device(&mut self, name: String, role: DeviceRole, loopback: String) -> NodeId {
        let node_id = self.graph.add_node(Device::new(NodeId::end(), name, role, loopback));
        self.graph[node_id].set_node_id(node_id);
        node_id
    }

    /// Set (or remove) the default route of a device.
    pub fn set_default_route(
        &mut self,
        node: NodeId,
        next_hop: Option<impl Into<String>>,
    ) -> Result<(), TopologyError> {
        self.get_node_mut(node)?.set_default_route(next_hop.map(|n| n.into()));
        Ok(())
    }

    /// Add a physical link between `source` and `destination`. The two interfaces describe the
    /// two sides of the link.
    pub fn add_link(
        &mut self,
        source: NodeId,
        source_side: Interface,
        destination: NodeId,
        destination_side: Interface,
    ) -> Result<LinkId, TopologyError> {
        self.get_node(source)?;
        self.get_node(destination)?;
        let link_id = self.graph.add_edge(
            source,
            destination,
            Connection::Physical(Link::new(
                LinkId::end(),
                source,
                source_side,
                destination,
                destination_side,
            )),
        );
        if let Connection::Physical(link) = &mut self.graph[link_id] {
            link.set_link_id(link_id);
        }
        Ok(link_id)
    }

    /// Add a static route, configured on `source`, which points towards `via`.
    pub fn add_static_route(
        &mut self,
        source: NodeId,
        via: NodeId,
        route: StaticRoute,
    ) -> Result<LinkId, TopologyError> {
        self.get_node(source)?;
        self.get_node(via)?;
        Ok(self.graph.add_edge(source, via, Connection::StaticRoute(route)))
    }

    /// Add a new autonomous system running the given protocol, and return its id.
    pub fn add_as(&mut self, name: impl Into<String>, protocol: ProtocolType) -> AsId {
        let as_id = AsId(self.domains.len() as u32);
        self.domains.push(AutonomousSystem::new(as_id, name.into(), Protocol::new(protocol)));
        as_id
    }

    /// Add an area to an OSPF or IS-IS domain.
    pub fn add_area(&mut self, as_id: AsId, area: Area) -> Result<(), TopologyError> {
        let domain = self.get_as_mut(as_id)?;
        if domain.contains_member(area.id) {
            return Err(TopologyError::DuplicateMember { as_id, id: area.id });
        }
        let found = domain.protocol_type();
        match &mut domain.protocol {
            Protocol::Ospf(d) => d.areas.push(area),
            Protocol::Isis(d) => d.areas.push(area),
            Protocol::Rip(_) | Protocol::Vlan(_) => {
                return Err(TopologyError::WrongProtocol {
                    as_id,
                    found,
                    expected: ProtocolType::Ospf,
                })
            }
        }
        Ok(())
    }

    /// Add a VLAN to a VLAN domain.
    pub fn add_vlan(&mut self, as_id: AsId, vlan: Vlan) -> Result<(), TopologyError> {
        let domain = self.get_as_mut(as_id)?;
        if domain.contains_member(vlan.id) {
            return Err(TopologyError::DuplicateMember { as_id, id: vlan.id });
        }
        let found = domain.protocol_type();
        match &mut domain.protocol {
            Protocol::Vlan(d) => d.vlans.push(vlan),
            _ => {
                return Err(TopologyError::WrongProtocol {
                    as_id,
                    found,
                    expected: ProtocolType::Vlan,
                })
            }
        }
        Ok(())
    }

    /// Make `node` a member of the domain, holding the given areas or VLANs. Joining the same
    /// domain twice extends the set of members.
    pub fn join(
        &mut self,
        node: NodeId,
        as_id: AsId,
        members: &[u32],
    ) -> Result<(), TopologyError> {
        self.check_members(as_id, members)?;
        self.get_node_mut(node)?.join(as_id, members);
        Ok(())
    }

    /// Let the link participate in the domain, carrying the given areas or VLANs.
    pub fn join_link(
        &mut self,
        link: LinkId,
        as_id: AsId,
        members: &[u32],
    ) -> Result<(), TopologyError> {
        self.check_members(as_id, members)?;
        match self.graph.edge_weight_mut(link) {
            Some(Connection::Physical(l)) => {
                l.join(as_id, members);
                Ok(())
            }
            _ => Err(TopologyError::LinkNotFound(link)),
        }
    }

    /// Set the exit point of an OSPF domain, which originates the default route.
    pub fn set_exit_point(&mut self, as_id: AsId, node: NodeId) -> Result<(), TopologyError> {
        self.get_node(node)?;
        let domain = self.get_as_mut(as_id)?;
        let found = domain.protocol_type();
        match &mut domain.protocol {
            Protocol::Ospf(d) => {
                d.exit_point = Some(node);
                Ok(())
            }
            _ => Err(TopologyError::WrongProtocol { as_id, found, expected: ProtocolType::Ospf }),
        }
    }

    /// Mark `node` as border router of an OSPF or IS-IS domain.
    pub fn add_border_router(&mut self, as_id: AsId, node: NodeId) -> Result<(), TopologyError> {
        self.get_node(node)?;
        let domain = self.get_as_mut(as_id)?;
        let found = domain.protocol_type();
        let border_routers = match &mut domain.protocol {
            Protocol::Ospf(d) => &mut d.border_routers,
            Protocol::Isis(d) => &mut d.border_routers,
            _ => {
                return Err(TopologyError::WrongProtocol {
                    as_id,
                    found,
                    expected: ProtocolType::Isis,
                })
            }
        };
        if !border_routers.contains(&node) {
            border_routers.push(node);
        }
        Ok(())
    }

    /// Returns the number of devices in the topology
    pub fn num_nodes(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns a vector with all node ids, in insertion order
    pub fn nodes(&self) -> Vec<NodeId> {
        self.graph.node_indices().collect()
    }

    /// Returns all domains, ordered by their id
    pub fn domains(&self) -> &[AutonomousSystem] {
        &self.domains
    }

    /// Returns a reference to the device
    pub fn get_node(&self, node: NodeId) -> Result<&Device, TopologyError> {
        self.graph.node_weight(node).ok_or(TopologyError::NodeNotFound(node))
    }

    fn get_node_mut(&mut self, node: NodeId) -> Result<&mut Device, TopologyError> {
        self.graph.node_weight_mut(node).ok_or(TopologyError::NodeNotFound(node))
    }

    /// Get the node ID from the name of a device. If multiple devices have the same name, the
    /// first one is returned.
    pub fn get_node_id(&self, name: impl AsRef<str>) -> Result<NodeId, TopologyError> {
        self.graph
            .node_indices()
            .find(|n| self.graph[*n].name() == name.as_ref())
            .ok_or_else(|| TopologyError::NodeNameNotFound(name.as_ref().to_string()))
    }

    /// Returns a reference to the physical link
    pub fn get_link(&self, link: LinkId) -> Result<&Link, TopologyError> {
        match self.graph.edge_weight(link) {
            Some(Connection::Physical(l)) => Ok(l),
            _ => Err(TopologyError::LinkNotFound(link)),
        }
    }

    /// Returns a reference to the static route
    pub fn get_static_route(&self, route: LinkId) -> Result<&StaticRoute, TopologyError> {
        match self.graph.edge_weight(route) {
            Some(Connection::StaticRoute(r)) => Ok(r),
            _ => Err(TopologyError::StaticRouteNotFound(route)),
        }
    }

    /// Returns a reference to the autonomous system
    pub fn get_as(&self, as_id: AsId) -> Result<&AutonomousSystem, TopologyError> {
        self.domains.get(as_id.index()).ok_or(TopologyError::AsNotFound(as_id))
    }

    fn get_as_mut(&mut self, as_id: AsId) -> Result<&mut AutonomousSystem, TopologyError> {
        self.domains.get_mut(as_id.index()).ok_or(TopologyError::AsNotFound(as_id))
    }

    /// Get the id of an autonomous system from its name.
    pub fn get_as_id(&self, name: impl AsRef<str>) -> Result<AsId, TopologyError> {
        self.domains
            .iter()
            .find(|d| d.name() == name.as_ref())
            .map(|d| d.as_id())
            .ok_or_else(|| TopologyError::AsNameNotFound(name.as_ref().to_string()))
    }

    /// Returns all edges of the given kind adjacent to `node`, together with the node on the
    /// other end, in the order in which they were added. For static routes, only the routes
    /// owned by `node` are returned.
    pub fn adjacent_links(
        &self,
        node: NodeId,
        kind: LinkKind,
    ) -> Result<Vec<(NodeId, LinkId)>, TopologyError> {
        self.get_node(node)?;
        Ok(self
            .graph
            .edge_indices()
            .filter(|e| self.graph[*e].kind() == kind)
            .filter_map(|e| {
                let (a, b) = self.graph.edge_endpoints(e)?;
                match kind {
                    LinkKind::Physical if a == node => Some((b, e)),
                    LinkKind::Physical if b == node => Some((a, e)),
                    LinkKind::StaticRoute if a == node => Some((b, e)),
                    _ => None,
                }
            })
            .collect())
    }

    /// Returns the domain memberships of the device, in the order they were joined.
    pub fn as_memberships(&self, node: NodeId) -> Result<&[(AsId, Vec<u32>)], TopologyError> {
        Ok(self.get_node(node)?.memberships())
    }

    /// Returns the domain memberships of the link, in the order they were joined.
    pub fn link_memberships(&self, link: LinkId) -> Result<&[(AsId, Vec<u32>)], TopologyError> {
        Ok(self.get_link(link)?.memberships())
    }

    /// Returns all static routes owned by the device.
    pub fn static_routes(&self, node: NodeId) -> Result<Vec<&StaticRoute>, TopologyError> {
        self.adjacent_links(node, LinkKind::StaticRoute)?
            .into_iter()
            .map(|(_, r)| self.get_static_route(r))
            .collect()
    }

    /// Returns all physical links participating in the domain.
    pub fn as_links(&self, as_id: AsId) -> Result<Vec<LinkId>, TopologyError> {
        self.get_as(as_id)?;
        Ok(self
            .graph
            .edge_indices()
            .filter(|e| match &self.graph[*e] {
                Connection::Physical(l) => l.is_member(as_id),
                Connection::StaticRoute(_) => false,
            })
            .collect())
    }

    /// Returns the single area the device belongs to in an OSPF or IS-IS domain. An error is
    /// returned if the device holds no area or more than one area.
    pub fn unique_area(&self, node: NodeId, as_id: AsId) -> Result<&Area, TopologyError> {
        let members =
            self.get_node(node)?.members(as_id).ok_or(TopologyError::NotMember(node, as_id))?;
        match members {
            [id] => self.resolve_area(as_id, *id),
            _ => Err(TopologyError::NodeAreaCount { node, as_id, count: members.len() }),
        }
    }

    /// Returns the single area the link belongs to in an OSPF or IS-IS domain. An error is
    /// returned if the link carries no area or more than one area.
    pub fn unique_link_area(&self, link: LinkId, as_id: AsId) -> Result<&Area, TopologyError> {
        let members = self.get_link(link)?.members(as_id).unwrap_or(&[]);
        match members {
            [id] => self.resolve_area(as_id, *id),
            _ => Err(TopologyError::LinkAreaCount { link, as_id, count: members.len() }),
        }
    }

    fn resolve_area(&self, as_id: AsId, id: u32) -> Result<&Area, TopologyError> {
        self.get_as(as_id)?.area(id).ok_or(TopologyError::UnknownMember { as_id, id })
    }

    /// Check that the device and its physical links are consistent:
    ///
    /// - every area or VLAN referenced by the device exists in its domain,
    /// - every domain membership of an adjacent link is held by both endpoints of that link, and
    ///   every area or VLAN carried by the link is held by both endpoints as well,
    /// - every adjacent link of an OSPF domain belongs to exactly one area of it,
    /// - the device belongs to exactly one area of each OSPF or IS-IS domain it is a member of.
    pub fn validate_node(&self, node: NodeId) -> Result<(), TopologyError> {
        for (as_id, members) in self.as_memberships(node)? {
            self.check_members(*as_id, members)?;
        }
        for (_, link_id) in self.adjacent_links(node, LinkKind::Physical)? {
            let link = self.get_link(link_id)?;
            let (source, destination) = link.endpoints();
            for (as_id, members) in link.memberships() {
                self.check_members(*as_id, members)?;
                for endpoint in [source, destination].iter() {
                    let held = self.get_node(*endpoint)?.members(*as_id).ok_or(
                        TopologyError::LinkMembershipMismatch {
                            link: link_id,
                            node: *endpoint,
                            as_id: *as_id,
                        },
                    )?;
                    if members.iter().any(|m| !held.contains(m)) {
                        return Err(TopologyError::LinkMembershipMismatch {
                            link: link_id,
                            node: *endpoint,
                            as_id: *as_id,
                        });
                    }
                }
                if self.get_as(*as_id)?.protocol_type() == ProtocolType::Ospf {
                    self.unique_link_area(link_id, *as_id)?;
                }
            }
        }
        for (as_id, _) in self.as_memberships(node)? {
            match self.get_as(*as_id)?.protocol_type() {
                ProtocolType::Ospf | ProtocolType::Isis => {
                    self.unique_area(node, *as_id)?;
                }
                _ => {}
            }
        }
        Ok(())
    }

    /// Compute the border routers of an IS-IS domain: all members which have a neighbor in the
    /// same domain, but in a different area. The result is ordered by node id.
    pub fn compute_isis_border_routers(&self, as_id: AsId) -> Result<Vec<NodeId>, TopologyError> {
        let domain = self.get_as(as_id)?;
        if domain.protocol_type() != ProtocolType::Isis {
            return Err(TopologyError::WrongProtocol {
                as_id,
                found: domain.protocol_type(),
                expected: ProtocolType::Isis,
            });
        }
        let mut border_routers = Vec::new();
        for node in self.graph.node_indices() {
            if !self.graph[node].is_member(as_id) {
                continue;
            }
            let area = self.unique_area(node, as_id)?;
            for (neighbor, _) in self.adjacent_links(node, LinkKind::Physical)? {
                if !self.get_node(neighbor)?.is_member(as_id) {
                    continue;
                }
                if self.unique_area(neighbor, as_id)? != area {
                    border_routers.push(node);
                    break;
                }
            }
        }
        debug!("Border routers of {:?}: {:?}", as_id, border_routers);
        Ok(border_routers)
    }

    fn check_members(&self, as_id: AsId, members: &[u32]) -> Result<(), TopologyError> {
        let domain = self.get_as(as_id)?;
        match members.iter().find(|m| !domain.contains_member(**m)) {
            Some(id) => Err(TopologyError::UnknownMember { as_id, id: *id }),
            None => Ok(()),
        }
    }
}
