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

//! # RIP Chain

use super::ExampleNetwork;
use crate::topology::{Interface, ProtocolType, StaticRoute, Topology};

/// # RIP Chain
///
/// Three routers in a chain. Only `R1` and `R2` run RIP, `R3` reaches the loopbacks of the RIP
/// domain with a static route.
///
/// ```text
///       RIP
/// R1 ---------- R2 ---------- R3
/// ```
pub struct RipChain {}

impl ExampleNetwork for RipChain {
    /// # Variant 0
    /// `R3` has a static route towards `10.0.0.0/24` via `R2`.
    fn net(variant: usize) -> Topology {
        if variant != 0 {
            panic!("Invalid variant number");
        }

        let mut t = Topology::new();

        let r1 = t.add_router("R1", "10.0.0.1");
        let r2 = t.add_router("R2", "10.0.0.2");
        let r3 = t.add_router("R3", "10.0.0.3");

        let p2p = |name: &str, address: &str| Interface::new(name, address, "255.255.255.252");
        let r1_r2 = t.add_link(r1, p2p("Gi0/0", "10.3.0.1"), r2, p2p("Gi0/0", "10.3.0.2")).unwrap();
        t.add_link(r2, p2p("Gi0/1", "10.3.0.5"), r3, p2p("Gi0/0", "10.3.0.6")).unwrap();

        let rip = t.add_as("rip", ProtocolType::Rip);
        t.join(r1, rip, &[]).unwrap();
        t.join(r2, rip, &[]).unwrap();
        t.join_link(r1_r2, rip, &[]).unwrap();

        t.add_static_route(r3, r2, StaticRoute::new("10.0.0.0", 24, "10.3.0.5")).unwrap();

        t
    }
}
