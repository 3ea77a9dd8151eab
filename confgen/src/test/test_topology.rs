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
use crate::topology::*;

#[test]
fn test_get_node() {
    let mut t = Topology::new();
    let r1 = t.add_router("R1", "10.0.0.1");
    let s1 = t.add_switch("S1", "10.0.1.1");

    assert_eq!(t.num_nodes(), 2);
    assert_eq!(t.nodes(), vec![r1, s1]);
    assert_eq!(t.get_node_id("S1"), Ok(s1));
    assert_eq!(t.get_node_id("X"), Err(TopologyError::NodeNameNotFound("X".to_string())));
    assert_eq!(t.get_node(r1).unwrap().role(), DeviceRole::Router);
    assert_eq!(t.get_node(s1).unwrap().role(), DeviceRole::Switch);
    assert_eq!(t.get_node(s1).unwrap().node_id(), s1);
    assert_eq!(t.get_node(NodeId::new(7)), Err(TopologyError::NodeNotFound(NodeId::new(7))));

    t.set_default_route(r1, Some("10.1.1.2")).unwrap();
    assert_eq!(t.get_node(r1).unwrap().default_route(), Some("10.1.1.2"));
    t.set_default_route(r1, None::<String>).unwrap();
    assert_eq!(t.get_node(r1).unwrap().default_route(), None);
}

#[test]
fn test_adjacent_links() {
    let t = RipChain::net(0);
    let r1 = t.get_node_id("R1").unwrap();
    let r2 = t.get_node_id("R2").unwrap();
    let r3 = t.get_node_id("R3").unwrap();

    let r2_links = t.adjacent_links(r2, LinkKind::Physical).unwrap();
    assert_eq!(r2_links.iter().map(|(n, _)| *n).collect::<Vec<_>>(), vec![r1, r3]);
    assert_eq!(t.adjacent_links(r1, LinkKind::Physical).unwrap(), vec![(r2, r2_links[0].1)]);

    // static routes belong to their source only
    assert!(t.adjacent_links(r2, LinkKind::StaticRoute).unwrap().is_empty());
    let routes = t.adjacent_links(r3, LinkKind::StaticRoute).unwrap();
    assert_eq!(routes.len(), 1);
    assert_eq!(routes[0].0, r2);
    assert_eq!(t.get_static_route(routes[0].1).unwrap().prefix_len, 24);
    assert_eq!(t.static_routes(r3).unwrap(), vec![&StaticRoute::new("10.0.0.0", 24, "10.3.0.5")]);
    assert_eq!(t.get_link(routes[0].1), Err(TopologyError::LinkNotFound(routes[0].1)));
}

#[test]
fn test_link_side() {
    let t = OspfPair::net(1);
    let r1 = t.get_node_id("R1").unwrap();
    let r2 = t.get_node_id("R2").unwrap();
    let (_, link_id) = t.adjacent_links(r1, LinkKind::Physical).unwrap()[0];
    let link = t.get_link(link_id).unwrap();

    assert_eq!(link.endpoints(), (r1, r2));
    assert_eq!(link.link_id(), link_id);
    assert_eq!(link.side(r1).unwrap().address, "10.1.1.1");
    assert_eq!(link.side(r1).unwrap().cost, 10);
    assert_eq!(link.side(r2).unwrap().address, "10.1.1.2");
    assert_eq!(link.side(r2).unwrap().cost, 1);
    assert_eq!(link.neighbor(r1), Ok(r2));
    assert_eq!(link.neighbor(r2), Ok(r1));

    let other = NodeId::new(5);
    let not_an_endpoint = TopologyError::NotAnEndpoint { node: other, link: link_id };
    assert_eq!(link.side(other), Err(not_an_endpoint));
    assert_eq!(
        link.neighbor(other),
        Err(TopologyError::NotAnEndpoint { node: other, link: link_id })
    );
}

#[test]
fn test_memberships() {
    let t = OspfPair::net(0);
    let r1 = t.get_node_id("R1").unwrap();
    let ospf = t.get_as_id("core").unwrap();
    let (_, link) = t.adjacent_links(r1, LinkKind::Physical).unwrap()[0];

    assert_eq!(t.as_memberships(r1).unwrap(), &[(ospf, vec![0])]);
    assert_eq!(t.link_memberships(link).unwrap(), &[(ospf, vec![0])]);
    assert_eq!(t.as_links(ospf), Ok(vec![link]));
    assert_eq!(t.unique_area(r1, ospf).unwrap(), &Area::new(0, "Backbone", true));
    assert_eq!(t.unique_link_area(link, ospf).unwrap().id, 0);
    assert_eq!(t.get_as_id("edge"), Err(TopologyError::AsNameNotFound("edge".to_string())));
    assert_eq!(t.get_as(AsId(3)), Err(TopologyError::AsNotFound(AsId(3))));
}

#[test]
fn test_join_order() {
    let mut t = Topology::new();
    let r1 = t.add_router("R1", "10.0.0.1");
    let isis = t.add_as("isis", ProtocolType::Isis);
    let rip = t.add_as("rip", ProtocolType::Rip);
    let ospf = t.add_as("ospf", ProtocolType::Ospf);
    t.add_area(isis, Area::new(2, "Access", false)).unwrap();
    t.add_area(ospf, Area::new(0, "Backbone", true)).unwrap();
    t.add_area(ospf, Area::new(1, "Access", false)).unwrap();

    t.join(r1, ospf, &[1]).unwrap();
    t.join(r1, rip, &[]).unwrap();
    t.join(r1, isis, &[2]).unwrap();
    t.join(r1, ospf, &[0, 1]).unwrap();

    assert_eq!(
        t.as_memberships(r1).unwrap(),
        &[(ospf, vec![1, 0]), (rip, vec![]), (isis, vec![2])]
    );
    assert_eq!(t.get_node(r1).unwrap().members(ospf), Some(&[1, 0][..]));
    assert_eq!(t.get_node(r1).unwrap().members(AsId(9)), None);
    assert_eq!(
        t.unique_area(r1, ospf),
        Err(TopologyError::NodeAreaCount { node: r1, as_id: ospf, count: 2 })
    );
}

#[test]
fn test_domains() {
    let mut t = Topology::new();
    let r1 = t.add_router("R1", "10.0.0.1");
    let rip = t.add_as("rip", ProtocolType::Rip);
    let vlan = t.add_as("vlan", ProtocolType::Vlan);
    let ospf = t.add_as("ospf", ProtocolType::Ospf);
    assert_eq!((rip, vlan, ospf), (AsId(0), AsId(1), AsId(2)));

    assert_eq!(
        t.add_area(rip, Area::new(0, "Backbone", true)),
        Err(TopologyError::WrongProtocol {
            as_id: rip,
            found: ProtocolType::Rip,
            expected: ProtocolType::Ospf
        })
    );
    assert_eq!(
        t.add_vlan(ospf, Vlan::new(10, "staff")),
        Err(TopologyError::WrongProtocol {
            as_id: ospf,
            found: ProtocolType::Ospf,
            expected: ProtocolType::Vlan
        })
    );
    t.add_vlan(vlan, Vlan::new(10, "staff")).unwrap();
    assert_eq!(
        t.add_vlan(vlan, Vlan::new(10, "guests")),
        Err(TopologyError::DuplicateMember { as_id: vlan, id: 10 })
    );
    assert!(t.set_exit_point(vlan, r1).is_err());

    t.set_exit_point(ospf, r1).unwrap();
    t.add_border_router(ospf, r1).unwrap();
    t.add_border_router(ospf, r1).unwrap();

    let domain = t.get_as(ospf).unwrap();
    assert_eq!(domain.name(), "ospf");
    assert_eq!(domain.protocol_type(), ProtocolType::Ospf);
    assert_eq!(domain.border_routers(), &[r1]);
    match domain.protocol() {
        Protocol::Ospf(d) => assert_eq!(d.exit_point(), Some(r1)),
        _ => unreachable!(),
    }
    assert_eq!(t.get_as(vlan).unwrap().vlan(10), Some(&Vlan::new(10, "staff")));
    assert!(t.get_as(vlan).unwrap().areas().is_empty());
    assert_eq!(t.domains().len(), 3);
    assert_eq!(ProtocolType::Isis.to_string(), "IS-IS");
}

#[test]
fn test_validate_node() {
    let t = IsisAreas::net(0);
    for node in t.nodes() {
        assert_eq!(t.validate_node(node), Ok(()));
    }

    let t = Campus::net(0);
    for node in t.nodes() {
        assert_eq!(t.validate_node(node), Ok(()));
    }
}

#[test]
fn test_compute_border_routers_wrong_protocol() {
    let t = OspfPair::net(0);
    let ospf = t.get_as_id("core").unwrap();
    assert_eq!(
        t.compute_isis_border_routers(ospf),
        Err(TopologyError::WrongProtocol {
            as_id: ospf,
            found: ProtocolType::Ospf,
            expected: ProtocolType::Isis
        })
    );
}
