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

//! # IS-IS Areas

use super::ExampleNetwork;
use crate::topology::{Area, Interface, ProtocolType, Topology};

/// # IS-IS Areas
///
/// Chain of four routers in a single IS-IS domain. `L1` and `L2` are in area 1, `C1` and `C2` in
/// the backbone (area 0). `L2` and `C1` are the border routers.
///
/// ```text
///    area 1              |   backbone
/// L1 ------------- L2 ------------- C1 ------------- C2
/// 10.0.0.2         10.0.0.3         10.0.0.4         10.0.0.5
/// ```
pub struct IsisAreas {}

impl ExampleNetwork for IsisAreas {
    /// # Variant 0
    /// The border routers are derived from the areas of the neighbors.
    fn net(variant: usize) -> Topology {
        if variant != 0 {
            panic!("Invalid variant number");
        }

        let mut t = Topology::new();

        let l1 = t.add_router("L1", "10.0.0.2");
        let l2 = t.add_router("L2", "10.0.0.3");
        let c1 = t.add_router("C1", "10.0.0.4");
        let c2 = t.add_router("C2", "10.0.0.5");

        let p2p = |name: &str, address: &str| Interface::new(name, address, "255.255.255.252");
        let l1_l2 = t.add_link(l1, p2p("Gi0/0", "10.2.0.1"), l2, p2p("Gi0/0", "10.2.0.2")).unwrap();
        let l2_c1 = t.add_link(l2, p2p("Gi0/1", "10.2.0.5"), c1, p2p("Gi0/0", "10.2.0.6")).unwrap();
        let c1_c2 =
            t.add_link(c1, p2p("Gi0/1", "10.2.0.9"), c2, p2p("Gi0/0", "10.2.0.10")).unwrap();

        let isis = t.add_as("isis", ProtocolType::Isis);
        t.add_area(isis, Area::new(0, "Backbone", true)).unwrap();
        t.add_area(isis, Area::new(1, "Access", false)).unwrap();

        t.join(l1, isis, &[1]).unwrap();
        t.join(l2, isis, &[1]).unwrap();
        t.join(c1, isis, &[0]).unwrap();
        t.join(c2, isis, &[0]).unwrap();
        t.join_link(l1_l2, isis, &[1]).unwrap();
        t.join_link(c1_c2, isis, &[0]).unwrap();
        // the link between both areas carries no area, since its endpoints do not share one.
        t.join_link(l2_c1, isis, &[]).unwrap();

        for border_router in t.compute_isis_border_routers(isis).unwrap() {
            t.add_border_router(isis, border_router).unwrap();
        }

        t
    }
}
