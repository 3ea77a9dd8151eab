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

//! # Campus

use super::ExampleNetwork;
use crate::topology::{Interface, ProtocolType, Topology, Vlan};

/// # Campus
///
/// Three switches in a single VLAN domain with the VLANs 10 (`staff`) and 20 (`guests`). The
/// link between `S1` and `S2` is a trunk carrying both VLANs, the link between `S2` and `S3` is
/// an access link in VLAN 10.
///
/// ```text
///      10,20         10
/// S1 --------- S2 --------- S3
/// ```
pub struct Campus {}

impl ExampleNetwork for Campus {
    /// # Variant 0
    /// The trunk is joined with the VLANs in descending order (`[20, 10]`).
    fn net(variant: usize) -> Topology {
        if variant != 0 {
            panic!("Invalid variant number");
        }

        let mut t = Topology::new();

        let s1 = t.add_switch("S1", "10.0.1.1");
        let s2 = t.add_switch("S2", "10.0.1.2");
        let s3 = t.add_switch("S3", "10.0.1.3");

        let trunk = t
            .add_link(s1, Interface::new("Fa0/1", "", ""), s2, Interface::new("Fa0/1", "", ""))
            .unwrap();
        let access = t
            .add_link(s2, Interface::new("Fa0/2", "", ""), s3, Interface::new("Fa0/1", "", ""))
            .unwrap();

        let campus = t.add_as("campus", ProtocolType::Vlan);
        t.add_vlan(campus, Vlan::new(10, "staff")).unwrap();
        t.add_vlan(campus, Vlan::new(20, "guests")).unwrap();

        t.join(s1, campus, &[10, 20]).unwrap();
        t.join(s2, campus, &[10, 20]).unwrap();
        t.join(s3, campus, &[10]).unwrap();
        t.join_link(trunk, campus, &[20, 10]).unwrap();
        t.join_link(access, campus, &[10]).unwrap();

        t
    }
}
