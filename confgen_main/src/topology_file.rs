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


//! Loading a topology from a JSON file.
//!
//! ```json
//! {
//!   "nodes": [
//!     { "name": "R1", "loopback": "10.0.0.1", "domains": [{ "domain": "core", "members": [0] }] },
//!     { "name": "R2", "loopback": "10.0.0.2", "default_route": "10.1.1.1",
//!       "domains": [{ "domain": "core", "members": [0] }] }
//!   ],
//!   "domains": [
//!     { "name": "core", "protocol": "ospf", "exit_point": "R1",
//!       "areas": [{ "id": 0, "name": "Backbone", "backbone": true }] }
//!   ],
//!   "links": [
//!     { "source": "R1", "destination": "R2",
//!       "source_side": { "name": "Gi0/0", "address": "10.1.1.1", "mask": "255.255.255.252" },
//!       "destination_side": { "name": "Gi0/0", "address": "10.1.1.2", "mask": "255.255.255.252" },
//!       "domains": [{ "domain": "core", "members": [0] }] }
//!   ]
//! }
//! ```

use confgen::topology::{Area, Interface, ProtocolType, StaticRoute, Topology, TopologyError, Vlan};

use log::*;
use serde::Deserialize;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Cannot read the topology file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Cannot parse the topology file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid topology: {0}")]
    Topology(#[from] TopologyError),
}

#[derive(Debug, Deserialize)]
struct TopologyFile {
    nodes: Vec<NodeEntry>,
    #[serde(default)]
    domains: Vec<DomainEntry>,
    #[serde(default)]
    links: Vec<LinkEntry>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Role {
    Router,
    Switch,
}

impl Default for Role {
    fn default() -> Self {
        Role::Router
    }
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Protocol {
    Rip,
    Ospf,
    #[serde(alias = "is-is")]
    Isis,
    Vlan,
}

impl From<Protocol> for ProtocolType {
    fn from(p: Protocol) -> Self {
        match p {
            Protocol::Rip => ProtocolType::Rip,
            Protocol::Ospf => ProtocolType::Ospf,
            Protocol::Isis => ProtocolType::Isis,
            Protocol::Vlan => ProtocolType::Vlan,
        }
    }
}

#[derive(Debug, Deserialize)]
struct NodeEntry {
    name: String,
    #[serde(default)]
    role: Role,
    #[serde(default)]
    loopback: String,
    #[serde(default)]
    default_route: Option<String>,
    #[serde(default)]
    static_routes: Vec<StaticRouteEntry>,
    #[serde(default)]
    domains: Vec<MembershipEntry>,
}

#[derive(Debug, Deserialize)]
struct StaticRouteEntry {
    subnet: String,
    prefix_len: u32,
    next_hop: String,
    via: String,
}

#[derive(Debug, Deserialize)]
struct MembershipEntry {
    domain: String,
    #[serde(default)]
    members: Vec<u32>,
}

#[derive(Debug, Deserialize)]
struct DomainEntry {
    name: String,
    protocol: Protocol,
    #[serde(default)]
    areas: Vec<AreaEntry>,
    #[serde(default)]
    vlans: Vec<VlanEntry>,
    #[serde(default)]
    exit_point: Option<String>,
    #[serde(default)]
    border_routers: Option<Vec<String>>,
}

#[derive(Debug, Deserialize)]
struct AreaEntry {
    id: u32,
    name: String,
    #[serde(default)]
    backbone: bool,
}

#[derive(Debug, Deserialize)]
struct VlanEntry {
    id: u32,
    name: String,
}

#[derive(Debug, Deserialize)]
struct LinkEntry {
    source: String,
    destination: String,
    source_side: InterfaceEntry,
    destination_side: InterfaceEntry,
    #[serde(default)]
    domains: Vec<MembershipEntry>,
}

#[derive(Debug, Deserialize)]
struct InterfaceEntry {
    name: String,
    #[serde(default)]
    address: String,
    #[serde(default)]
    mask: String,
    #[serde(default = "default_cost")]
    cost: u32,
}

fn default_cost() -> u32 {
    1
}

impl From<InterfaceEntry> for Interface {
    fn from(i: InterfaceEntry) -> Self {
        Interface::new(i.name, i.address, i.mask).with_cost(i.cost)
    }
}

/// Read the topology from a JSON file.
pub fn load_topology(path: impl AsRef<Path>) -> Result<Topology, LoadError> {
    info!("Loading the topology from {}", path.as_ref().display());
    let reader = BufReader::new(File::open(path)?);
    let file: TopologyFile = serde_json::from_reader(reader)?;
    build(file)
}

/// Parse the topology from a JSON string.
pub fn parse_topology(json: &str) -> Result<Topology, LoadError> {
    build(serde_json::from_str(json)?)
}

fn build(file: TopologyFile) -> Result<Topology, LoadError> {
    let mut t = Topology::new();

    for node in file.nodes.iter() {
        let id = match node.role {
            Role::Router => t.add_router(node.name.as_str(), node.loopback.as_str()),
            Role::Switch => t.add_switch(node.name.as_str(), node.loopback.as_str()),
        };
        t.set_default_route(id, node.default_route.as_ref())?;
    }

    for domain in file.domains.iter() {
        let as_id = t.add_as(domain.name.as_str(), domain.protocol.into());
        for area in domain.areas.iter() {
            t.add_area(as_id, Area::new(area.id, area.name.as_str(), area.backbone))?;
        }
        for vlan in domain.vlans.iter() {
            t.add_vlan(as_id, Vlan::new(vlan.id, vlan.name.as_str()))?;
        }
    }

    for node in file.nodes {
        let id = t.get_node_id(&node.name)?;
        for membership in node.domains {
            let as_id = t.get_as_id(&membership.domain)?;
            t.join(id, as_id, &membership.members)?;
        }
        for route in node.static_routes {
            let via = t.get_node_id(&route.via)?;
            let route = StaticRoute::new(route.subnet, route.prefix_len, route.next_hop);
            t.add_static_route(id, via, route)?;
        }
    }

    for link in file.links {
        let source = t.get_node_id(&link.source)?;
        let destination = t.get_node_id(&link.destination)?;
        let link_id =
            t.add_link(source, link.source_side.into(), destination, link.destination_side.into())?;
        for membership in link.domains {
            let as_id = t.get_as_id(&membership.domain)?;
            t.join_link(link_id, as_id, &membership.members)?;
        }
    }

    for domain in file.domains {
        let as_id = t.get_as_id(&domain.name)?;
        if let Some(exit_point) = domain.exit_point {
            let node = t.get_node_id(&exit_point)?;
            t.set_exit_point(as_id, node)?;
        }
        let border_routers = match (domain.border_routers, domain.protocol) {
            (Some(names), _) => {
                names.iter().map(|n| t.get_node_id(n)).collect::<Result<Vec<_>, _>>()?
            }
            (None, Protocol::Isis) => t.compute_isis_border_routers(as_id)?,
            (None, _) => Vec::new(),
        };
        for node in border_routers {
            t.add_border_router(as_id, node)?;
        }
    }

    debug!("Loaded topology with {} devices", t.num_nodes());
    Ok(t)
}
