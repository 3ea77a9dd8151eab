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

#![deny(missing_docs, missing_debug_implementations)]

//! # Topology
//!
//! Read-only (at synthesis time) representation of the network: devices, physical links, static
//! routes, and the protocol domains ("autonomous systems") which group them.
//!
//! ## Example usage
//!
//! The following example builds two routers `R1` and `R2`, connected by a single link, which
//! both run OSPF in the backbone area.
//!
//! ```rust
//! use confgen::topology::{Area, Interface, LinkKind, ProtocolType, Topology};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut t = Topology::new();
//!
//!     let r1 = t.add_router("R1", "10.0.0.1");
//!     let r2 = t.add_router("R2", "10.0.0.2");
//!     let link = t.add_link(
//!         r1,
//!         Interface::new("Gi0/0", "10.1.1.1", "255.255.255.252"),
//!         r2,
//!         Interface::new("Gi0/0", "10.1.1.2", "255.255.255.252"),
//!     )?;
//!
//!     let ospf = t.add_as("core", ProtocolType::Ospf);
//!     t.add_area(ospf, Area::new(0, "Backbone", true))?;
//!     t.join(r1, ospf, &[0])?;
//!     t.join(r2, ospf, &[0])?;
//!     t.join_link(link, ospf, &[0])?;
//!
//!     assert_eq!(t.adjacent_links(r1, LinkKind::Physical)?, vec![(r2, link)]);
//!     assert_eq!(t.unique_area(r2, ospf)?.id, 0);
//!     assert_eq!(t.get_link(link)?.side(r2)?.address, "10.1.1.2");
//!
//!     Ok(())
//! }
//! ```

pub mod device;
pub mod domain;
pub mod link;
pub(crate) mod network;
pub(crate) mod types;

pub use device::Device;
pub use domain::{
    Area, AutonomousSystem, IsisDomain, OspfDomain, Protocol, RipDomain, Vlan, VlanDomain,
};
pub use link::{Interface, Link, StaticRoute};
pub use network::Topology;
pub use types::{AsId, DeviceRole, LinkId, LinkKind, NodeId, ProtocolType, TopologyError};
