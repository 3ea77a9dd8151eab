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


//! # Dual Stack

use super::ExampleNetwork;
use crate::topology::{Area, Interface, ProtocolType, Topology};

/// # Dual Stack
///
/// Chain of three routers running OSPF and IS-IS side by side. The link between `R1` and `R2` is
/// in OSPF area 1, and the cost is set to 20 on the side of `R2`. The link between `R2` and `R3`
/// does not run OSPF. All three routers are in IS-IS area 2, and IS-IS runs on both links.
///
/// ```text
///        OSPF area 1 + IS-IS     IS-IS only
/// R1 ---------------------- R2 ------------- R3
/// 10.0.0.1                  10.0.0.2         10.0.0.3
/// ```
pub struct DualStack {}

impl ExampleNetwork for DualStack {
    /// # Variant 0
    /// All routers join OSPF before IS-IS.
    ///
    /// # Variant 1
    /// `R2` joins IS-IS before OSPF.
    fn net(variant: usize) -> Topology {
        if variant > 1 {
            panic!("Invalid variant number");
        }

        let mut t = Topology::new();

        let r1 = t.add_router("R1", "10.0.0.1");
        let r2 = t.add_router("R2", "10.0.0.2");
        let r3 = t.add_router("R3", "10.0.0.3");

        let p2p = |name: &str, address: &str| Interface::new(name, address, "255.255.255.252");
        let r1_r2 = t
            .add_link(r1, p2p("Gi0/0", "10.4.0.1"), r2, p2p("Gi0/0", "10.4.0.2").with_cost(20))
            .unwrap();
        let r2_r3 = t.add_link(r2, p2p("Gi0/1", "10.4.0.5"), r3, p2p("Gi0/0", "10.4.0.6")).unwrap();

        let ospf = t.add_as("ospf", ProtocolType::Ospf);
        t.add_area(ospf, Area::new(0, "Backbone", true)).unwrap();
        t.add_area(ospf, Area::new(1, "Branch", false)).unwrap();
        let isis = t.add_as("isis", ProtocolType::Isis);
        t.add_area(isis, Area::new(2, "Transit", false)).unwrap();

        t.join(r1, ospf, &[1]).unwrap();
        t.join(r1, isis, &[2]).unwrap();
        if variant == 1 {
            t.join(r2, isis, &[2]).unwrap();
            t.join(r2, ospf, &[1]).unwrap();
        } else {
            t.join(r2, ospf, &[1]).unwrap();
            t.join(r2, isis, &[2]).unwrap();
        }
        t.join(r3, isis, &[2]).unwrap();

        t.join_link(r1_r2, ospf, &[1]).unwrap();
        t.join_link(r1_r2, isis, &[2]).unwrap();
        t.join_link(r2_r3, isis, &[2]).unwrap();

        for border_router in t.compute_isis_border_routers(isis).unwrap() {
            t.add_border_router(isis, border_router).unwrap();
        }

        t
    }
}
