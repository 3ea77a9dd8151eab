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
use crate::synthesis::{CliMode, Command};
use crate::topology::{Interface, ProtocolType, StaticRoute, Topology};
use crate::{synthesize, synthesize_all};

#[test]
fn test_empty_router() {
    let mut t = Topology::new();
    let r1 = t.add_router("R1", "10.0.0.1");

    let config = synthesize(&t, r1).unwrap();
    assert_eq!(
        config.commands(),
        &[
            Command::new(CliMode::User, "enable"),
            Command::new(CliMode::Privileged, "configure terminal"),
            Command::new(CliMode::Config, "interface Loopback0"),
            Command::new(CliMode::Interface, "ip address 10.0.0.1 255.255.255.255"),
            Command::new(CliMode::Interface, "exit"),
            Command::new(CliMode::Config, "end"),
        ]
    );
}

#[test]
fn test_ospf_pair() {
    let t = OspfPair::net(0);
    let r1 = t.get_node_id("R1").unwrap();

    let config = synthesize(&t, r1).unwrap();
    assert_eq!(config.name(), "R1");
    // every interface block is closed with `exit` (see "Interface exit" in DESIGN.md)
    assert_eq!(
        config.texts(),
        vec![
            "enable",
            "configure terminal",
            "interface Loopback0",
            "ip address 10.0.0.1 255.255.255.255",
            "exit",
            "interface Gi0/0",
            "ip address 10.1.1.1 255.255.255.252",
            "no shutdown",
            "exit",
            "router ospf 1",
            "network 10.1.1.1 0.0.0.3 area 0",
            "end",
        ]
    );
    assert_eq!(
        config.lines(),
        vec![
            " R1> enable\n",
            " R1# configure terminal\n",
            " R1(config)# interface Loopback0\n",
            " R1(config-if)# ip address 10.0.0.1 255.255.255.255\n",
            " R1(config-if)# exit\n",
            " R1(config)# interface Gi0/0\n",
            " R1(config-if)# ip address 10.1.1.1 255.255.255.252\n",
            " R1(config-if)# no shutdown\n",
            " R1(config-if)# exit\n",
            " R1(config)# router ospf 1\n",
            " R1(config-router)# network 10.1.1.1 0.0.0.3 area 0\n",
            " R1(config)# end\n",
        ]
    );
}

#[test]
fn test_ospf_pair_other_side() {
    let t = OspfPair::net(0);
    let r2 = t.get_node_id("R2").unwrap();

    let config = synthesize(&t, r2).unwrap();
    assert_eq!(
        config.texts(),
        vec![
            "enable",
            "configure terminal",
            "interface Loopback0",
            "ip address 10.0.0.2 255.255.255.255",
            "exit",
            "interface Gi0/0",
            "ip address 10.1.1.2 255.255.255.252",
            "no shutdown",
            "exit",
            "router ospf 1",
            "network 10.1.1.2 0.0.0.3 area 0",
            "end",
        ]
    );
}

#[test]
fn test_ospf_cost() {
    // default cost
    let t = OspfPair::net(0);
    for node in t.nodes() {
        let config = synthesize(&t, node).unwrap();
        assert!(config.texts().iter().all(|c| !c.starts_with("ip ospf cost")));
    }

    // cost 10 on the side of R1
    let t = OspfPair::net(1);
    let r1 = t.get_node_id("R1").unwrap();
    let r2 = t.get_node_id("R2").unwrap();

    let config = synthesize(&t, r1).unwrap();
    let texts = config.texts();
    assert_eq!(texts.iter().filter(|c| c.starts_with("ip ospf cost")).count(), 1);
    let pos = texts.iter().position(|c| *c == "ip ospf cost 10").unwrap();
    assert_eq!(texts[pos - 1], "no shutdown");
    assert_eq!(texts[pos + 1], "exit");

    let config = synthesize(&t, r2).unwrap();
    assert!(config.texts().iter().all(|c| !c.starts_with("ip ospf cost")));
}

#[test]
fn test_cost_without_ospf() {
    let mut t = Topology::new();
    let r1 = t.add_router("R1", "10.0.0.1");
    let r2 = t.add_router("R2", "10.0.0.2");
    let link = t
        .add_link(
            r1,
            Interface::new("Gi0/0", "10.1.1.1", "255.255.255.252").with_cost(5),
            r2,
            Interface::new("Gi0/0", "10.1.1.2", "255.255.255.252"),
        )
        .unwrap();
    let rip = t.add_as("rip", ProtocolType::Rip);
    t.join(r1, rip, &[]).unwrap();
    t.join(r2, rip, &[]).unwrap();
    t.join_link(link, rip, &[]).unwrap();

    let config = synthesize(&t, r1).unwrap();
    assert!(config.texts().iter().all(|c| !c.starts_with("ip ospf cost")));
}

#[test]
fn test_exit_point_and_default_route() {
    let t = OspfPair::net(2);
    let r1 = t.get_node_id("R1").unwrap();
    let r2 = t.get_node_id("R2").unwrap();

    let config = synthesize(&t, r1).unwrap();
    assert_eq!(
        &config.texts()[9..],
        &[
            "router ospf 1",
            "network 10.1.1.1 0.0.0.3 area 0",
            "default-information originate",
            "ip route 0.0.0.0 0.0.0.0 203.0.113.1",
            "end",
        ]
    );
    assert_eq!(config.commands()[11].mode, CliMode::Router);
    assert_eq!(config.commands()[12].mode, CliMode::Config);

    let config = synthesize(&t, r2).unwrap();
    assert!(!config.texts().contains(&"default-information originate"));
    assert!(config.texts().iter().all(|c| !c.starts_with("ip route")));
}

#[test]
fn test_ospf_and_isis() {
    let t = DualStack::net(0);
    let r2 = t.get_node_id("R2").unwrap();

    let config = synthesize(&t, r2).unwrap();
    assert_eq!(
        config.texts(),
        vec![
            "enable",
            "configure terminal",
            "interface Loopback0",
            "ip address 10.0.0.2 255.255.255.255",
            "exit",
            "interface Gi0/0",
            "ip address 10.4.0.2 255.255.255.252",
            "no shutdown",
            "ip ospf cost 20",
            "ip router isis",
            "isis circuit-type level-1",
            "exit",
            "interface Gi0/1",
            "ip address 10.4.0.5 255.255.255.252",
            "no shutdown",
            "ip router isis",
            "isis circuit-type level-1",
            "exit",
            "router ospf 1",
            "network 10.4.0.2 0.0.0.3 area 1",
            "passive-interface Gi0/1",
            "router isis",
            "net 49.0002.010.000.000.002.00",
            "is-type level-1",
            "passive-interface Loopback0",
            "exit",
            "end",
        ]
    );
    assert_eq!(config.commands()[20].mode, CliMode::Router);
    assert_eq!(config.commands()[21].mode, CliMode::Config);
}

#[test]
fn test_ospf_and_isis_edge() {
    let t = DualStack::net(0);
    let r1 = t.get_node_id("R1").unwrap();
    let r3 = t.get_node_id("R3").unwrap();

    // the cost is only set on the side of R2
    let config = synthesize(&t, r1).unwrap();
    assert_eq!(
        config.texts(),
        vec![
            "enable",
            "configure terminal",
            "interface Loopback0",
            "ip address 10.0.0.1 255.255.255.255",
            "exit",
            "interface Gi0/0",
            "ip address 10.4.0.1 255.255.255.252",
            "no shutdown",
            "ip router isis",
            "isis circuit-type level-1",
            "exit",
            "router ospf 1",
            "network 10.4.0.1 0.0.0.3 area 1",
            "router isis",
            "net 49.0002.010.000.000.001.00",
            "is-type level-1",
            "passive-interface Loopback0",
            "exit",
            "end",
        ]
    );

    let config = synthesize(&t, r3).unwrap();
    assert_eq!(
        config.texts(),
        vec![
            "enable",
            "configure terminal",
            "interface Loopback0",
            "ip address 10.0.0.3 255.255.255.255",
            "exit",
            "interface Gi0/0",
            "ip address 10.4.0.6 255.255.255.252",
            "no shutdown",
            "ip router isis",
            "isis circuit-type level-1",
            "exit",
            "router isis",
            "net 49.0002.010.000.000.003.00",
            "is-type level-1",
            "passive-interface Loopback0",
            "exit",
            "end",
        ]
    );
}

#[test]
fn test_process_order_follows_join_order() {
    let t = DualStack::net(1);
    let r2 = t.get_node_id("R2").unwrap();

    let config = synthesize(&t, r2).unwrap();
    let texts = config.texts();
    assert_eq!(
        &texts[5..12],
        &[
            "interface Gi0/0",
            "ip address 10.4.0.2 255.255.255.252",
            "no shutdown",
            "ip ospf cost 20",
            "ip router isis",
            "isis circuit-type level-1",
            "exit",
        ]
    );
    assert_eq!(
        &texts[18..],
        &[
            "router isis",
            "net 49.0002.010.000.000.002.00",
            "is-type level-1",
            "passive-interface Loopback0",
            "exit",
            "router ospf 1",
            "network 10.4.0.2 0.0.0.3 area 1",
            "passive-interface Gi0/1",
            "end",
        ]
    );
}

#[test]
fn test_static_routes() {
    let mut t = Topology::new();
    let r1 = t.add_router("R1", "10.0.0.1");
    let r2 = t.add_router("R2", "10.0.0.2");
    t.add_static_route(r1, r2, StaticRoute::new("192.168.0.0", 16, "10.1.1.2")).unwrap();
    t.add_static_route(r1, r2, StaticRoute::new("172.16.4.0", 22, "10.1.1.2")).unwrap();

    let config = synthesize(&t, r1).unwrap();
    assert_eq!(
        config.texts(),
        vec![
            "enable",
            "configure terminal",
            "interface Loopback0",
            "ip address 10.0.0.1 255.255.255.255",
            "exit",
            "ip route 192.168.0.0 255.255.0.0 10.1.1.2",
            "ip route 172.16.4.0 255.255.252.0 10.1.1.2",
            "end",
        ]
    );

    // static routes are owned by their source
    let config = synthesize(&t, r2).unwrap();
    assert_eq!(config.commands().len(), 6);
}

#[test]
fn test_deterministic() {
    let t = IsisAreas::net(0);
    for node in t.nodes() {
        let a = synthesize(&t, node).unwrap();
        let b = synthesize(&t, node).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.detailed(), b.detailed());
    }

    // rebuilding the same topology yields the same output
    let t1 = Campus::net(0);
    let t2 = Campus::net(0);
    for (n1, n2) in t1.nodes().into_iter().zip(t2.nodes().into_iter()) {
        let c1 = synthesize(&t1, n1).unwrap();
        let c2 = synthesize(&t2, n2).unwrap();
        assert_eq!(c1.detailed(), c2.detailed());
    }
}

#[test]
fn test_synthesize_all() {
    let _ = pretty_env_logger::try_init();
    let t = RipChain::net(0);
    let result = synthesize_all(&t);
    assert_eq!(result.len(), 3);
    assert_eq!(result.iter().map(|(n, _)| *n).collect::<Vec<_>>(), t.nodes());
    for (node, config) in result {
        let config = config.unwrap();
        assert_eq!(config.node(), node);
        assert_eq!(config, synthesize(&t, node).unwrap());
    }
}
