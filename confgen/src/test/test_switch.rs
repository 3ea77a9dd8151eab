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


use crate::example_networks::*;
use crate::synthesis::CliMode;
use crate::synthesize;
use crate::topology::{Interface, ProtocolType, Topology, Vlan};

#[test]
fn test_trunk() {
    let t = Campus::net(0);
    let s1 = t.get_node_id("S1").unwrap();

    let config = synthesize(&t, s1).unwrap();
    assert_eq!(
        config.texts(),
        vec![
            "enable",
            "configure terminal",
            "vlan 10",
            "name staff",
            "exit",
            "vlan 20",
            "name guests",
            "exit",
            "interface Fa0/1",
            "switchport mode trunk",
            "switchport trunk allowed vlan add 10,20",
            "end",
        ]
    );
    assert_eq!(
        config.lines(),
        vec![
            " S1> enable\n",
            " S1# configure terminal\n",
            " S1(config)# vlan 10\n",
            " S1(config-vlan)# name staff\n",
            " S1(config-vlan)# exit\n",
            " S1(config)# vlan 20\n",
            " S1(config-vlan)# name guests\n",
            " S1(config-vlan)# exit\n",
            " S1(config)# interface Fa0/1\n",
            " S1(config-if)# switchport mode trunk\n",
            " S1(config-if)# switchport trunk allowed vlan add 10,20\n",
            " S1(config)# end\n",
        ]
    );
}

#[test]
fn test_trunk_and_access() {
    let t = Campus::net(0);
    let s2 = t.get_node_id("S2").unwrap();

    let config = synthesize(&t, s2).unwrap();
    assert_eq!(
        config.texts(),
        vec![
            "enable",
            "configure terminal",
            "vlan 10",
            "name staff",
            "exit",
            "vlan 20",
            "name guests",
            "exit",
            "interface Fa0/1",
            "switchport mode trunk",
            "switchport trunk allowed vlan add 10,20",
            "interface Fa0/2",
            "switchport mode access",
            "switchport access vlan 10",
            "end",
        ]
    );
}

#[test]
fn test_access_only() {
    let t = Campus::net(0);
    let s3 = t.get_node_id("S3").unwrap();

    let config = synthesize(&t, s3).unwrap();
    let texts = config.texts();
    assert_eq!(texts[2..5], ["vlan 10", "name staff", "exit"]);
    assert!(texts.contains(&"switchport mode access"));
    assert!(texts.contains(&"switchport access vlan 10"));
    assert!(!texts.iter().any(|c| c.contains("trunk")));
}

#[test]
fn test_vlans_created_before_interfaces() {
    let t = Campus::net(0);
    for node in t.nodes() {
        let config = synthesize(&t, node).unwrap();
        let last_vlan = config.commands().iter().rposition(|c| c.mode == CliMode::Vlan).unwrap();
        let first_iface =
            config.commands().iter().position(|c| c.text.starts_with("interface")).unwrap();
        assert!(last_vlan < first_iface);
    }
}

#[test]
fn test_port_mode_exclusive() {
    let mut t = Topology::new();
    let s1 = t.add_switch("S1", "10.0.1.1");
    let s2 = t.add_switch("S2", "10.0.1.2");
    let vlan = t.add_as("vlan", ProtocolType::Vlan);
    for id in [30, 5, 100, 12].iter() {
        t.add_vlan(vlan, Vlan::new(*id, format!("v{}", id))).unwrap();
    }
    t.join(s1, vlan, &[5, 12, 30, 100]).unwrap();
    t.join(s2, vlan, &[5, 12, 30, 100]).unwrap();

    let links = [&[100u32][..], &[100, 5][..], &[30, 100, 5, 12][..]];
    for members in links.iter() {
        let link = t
            .add_link(s1, Interface::new("Fa0/1", "", ""), s2, Interface::new("Fa0/1", "", ""))
            .unwrap();
        t.join_link(link, vlan, members).unwrap();
    }

    let config = synthesize(&t, s1).unwrap();
    let texts = config.texts();
    let ports = texts.split(|c| c.starts_with("interface")).skip(1).collect::<Vec<_>>();
    assert_eq!(ports.len(), 3);
    assert_eq!(ports[0], ["switchport mode access", "switchport access vlan 100"]);
    assert_eq!(ports[1], ["switchport mode trunk", "switchport trunk allowed vlan add 5,100"]);
    assert_eq!(
        ports[2],
        ["switchport mode trunk", "switchport trunk allowed vlan add 5,12,30,100", "end"]
    );
}
