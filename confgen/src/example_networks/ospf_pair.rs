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

//! # OSPF Pair

use super::ExampleNetwork;
use crate::topology::{Area, Interface, ProtocolType, Topology};

/// # OSPF Pair
///
/// Two routers connected by a single `/30` link, both in the backbone area of one OSPF domain.
///
/// ```text
/// R1 (10.0.0.1) Gi0/0 10.1.1.1 ---- 10.1.1.2 Gi0/0 R2 (10.0.0.2)
/// ```
pub struct OspfPair {}

impl ExampleNetwork for OspfPair {
    /// # Variant 0
    /// All costs are set to 1.
    ///
    /// # Variant 1
    /// The cost of the link is set to 10 on the side of R1.
    ///
    /// # Variant 2
    /// R1 is the exit point of the domain, and has a default route towards `203.0.113.1`.
    fn net(variant: usize) -> Topology {
        let mut t = Topology::new();

        let r1 = t.add_router("R1", "10.0.0.1");
        let r2 = t.add_router("R2", "10.0.0.2");

        let r1_side = Interface::new("Gi0/0", "10.1.1.1", "255.255.255.252");
        let r1_side = match variant {
            0 | 2 => r1_side,
            1 => r1_side.with_cost(10),
            _ => panic!("Invalid variant number"),
        };
        let r2_side = Interface::new("Gi0/0", "10.1.1.2", "255.255.255.252");
        let link = t.add_link(r1, r1_side, r2, r2_side).unwrap();

        let ospf = t.add_as("core", ProtocolType::Ospf);
        t.add_area(ospf, Area::new(0, "Backbone", true)).unwrap();
        t.join(r1, ospf, &[0]).unwrap();
        t.join(r2, ospf, &[0]).unwrap();
        t.join_link(link, ospf, &[0]).unwrap();

        if variant == 2 {
            t.set_exit_point(ospf, r1).unwrap();
            t.set_default_route(r1, Some("203.0.113.1")).unwrap();
        }

        t
    }
}
