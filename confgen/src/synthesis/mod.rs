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

//! # Configuration Synthesis
//!
//! Translates the state of a single device (its links, static routes and domain memberships) into
//! the ordered list of commands that configure it. The result only depends on the topology, and
//! on the order in which the topology was built. Synthesizing the same topology twice yields the
//! same commands.
//!
//! ## Router
//!
//! 1. `enable`, `configure terminal`
//! 2. Loopback interface `Loopback0` with a `/32` address
//! 3. Static routes
//! 4. One block per physical link: address, `no shutdown`, the OSPF cost (if the link runs OSPF
//!    and its cost is not 1), and the IS-IS activation of the interface.
//! 5. One routing process block per domain (RIP, OSPF, IS-IS), in the order the router joined them
//! 6. The default route, if any
//! 7. `end`
//!
//! ## Switch
//!
//! 1. `enable`, `configure terminal`
//! 2. Creation of every VLAN the switch holds
//! 3. One block per physical link, setting the port to access mode (one VLAN on the link) or to
//!    trunk mode (several VLANs on the link)
//! 4. `end`
//!
//! ## Errors
//!
//! If the topology around the device is malformed (see
//! [`Topology::validate_node`](crate::topology::Topology::validate_node)), or if an address cannot
//! be encoded, no configuration is returned at all. Domains running a protocol that cannot be
//! configured on the device (like a VLAN domain on a router) are skipped with a warning.

mod command;
mod isis;
mod ospf;
mod rip;
mod vlan;

pub use command::{CliMode, Command, DeviceConfig};
pub use isis::IsisLevel;
pub use ospf::{OSPF_LINK_PREFIX_LEN, OSPF_PROCESS_ID};

use crate::encoder::prefix_to_mask;
use crate::topology::{
    AsId, AutonomousSystem, Device, DeviceRole, Link, LinkKind, NodeId, Protocol, ProtocolType,
    Topology,
};
use crate::Error;

use log::*;

/// Name of the loopback interface of every router
pub const LOOPBACK_INTERFACE: &str = "Loopback0";

/// Everything a block generator needs to know about the device it generates commands for.
pub(crate) struct BlockContext<'a> {
    pub net: &'a Topology,
    pub device: &'a Device,
    pub as_id: AsId,
}

impl<'a> BlockContext<'a> {
    pub fn node(&self) -> NodeId {
        self.device.node_id()
    }
}

/// Uniform interface of the protocol variants. Each protocol generates its own blocks from the
/// state it owns.
pub(crate) trait BlockGenerator {
    /// Commands of the domain entered in global configuration mode (the routing process, or the
    /// VLAN database).
    fn process_block(&self, ctx: &BlockContext<'_>) -> Result<Vec<Command>, Error>;

    /// Commands entered inside the interface configuration of `link`. The interface is already
    /// selected when these commands are issued.
    fn interface_block(
        &self,
        _ctx: &BlockContext<'_>,
        _neighbor: &Device,
        _link: &Link,
    ) -> Result<Vec<Command>, Error> {
        Ok(Vec::new())
    }
}

/// Select the block generator of the domain, for the role of the device.
fn generator<'a>(
    device: &Device,
    domain: &'a AutonomousSystem,
) -> Result<&'a dyn BlockGenerator, Error> {
    match (device.role(), domain.protocol()) {
        (DeviceRole::Router, Protocol::Rip(d)) => Ok(d as &dyn BlockGenerator),
        (DeviceRole::Router, Protocol::Ospf(d)) => Ok(d as &dyn BlockGenerator),
        (DeviceRole::Router, Protocol::Isis(d)) => Ok(d as &dyn BlockGenerator),
        (DeviceRole::Switch, Protocol::Vlan(d)) => Ok(d as &dyn BlockGenerator),
        (role, protocol) => Err(Error::UnsupportedProtocolType {
            node: device.name().to_string(),
            as_id: domain.as_id(),
            protocol: protocol.protocol_type(),
            role,
        }),
    }
}

/// Resolve the block generators of all domains of the device, in membership order. Domains
/// without a generator for this device are skipped with a warning.
fn generators<'a>(
    net: &'a Topology,
    device: &Device,
) -> Result<Vec<(AsId, &'a dyn BlockGenerator)>, Error> {
    let mut result = Vec::with_capacity(device.memberships().len());
    for (as_id, _) in device.memberships() {
        match generator(device, net.get_as(*as_id)?) {
            Ok(gen) => result.push((*as_id, gen)),
            Err(e @ Error::UnsupportedProtocolType { .. }) => warn!("Skipping domain: {}", e),
            Err(e) => return Err(e),
        }
    }
    Ok(result)
}

/// Generate the configuration of a single device.
pub fn synthesize(net: &Topology, node: NodeId) -> Result<DeviceConfig, Error> {
    let device = net.get_node(node)?;
    debug!("Synthesize the configuration of {} ({})", device.name(), device.role());
    net.validate_node(node)?;

    let commands = match device.role() {
        DeviceRole::Router => router_config(net, device)?,
        DeviceRole::Switch => switch_config(net, device)?,
    };

    debug!("Generated {} commands for {}", commands.len(), device.name());
    Ok(DeviceConfig::new(node, device.name().to_string(), device.role(), commands))
}

/// Generate the configuration of every device in the topology, in the order the devices were
/// added. The failure of one device does not affect the others.
pub fn synthesize_all(net: &Topology) -> Vec<(NodeId, Result<DeviceConfig, Error>)> {
    net.nodes()
        .into_iter()
        .map(|n| {
            let result = synthesize(net, n);
            if let Err(e) = &result {
                warn!("Cannot generate the configuration of {:?}: {}", n, e);
            }
            (n, result)
        })
        .collect()
}

fn preamble() -> Vec<Command> {
    vec![
        Command::new(CliMode::User, "enable"),
        Command::new(CliMode::Privileged, "configure terminal"),
    ]
}

fn router_config(net: &Topology, device: &Device) -> Result<Vec<Command>, Error> {
    let node = device.node_id();
    let generators = generators(net, device)?;
    let mut cmds = preamble();

    cmds.push(Command::config(format!("interface {}", LOOPBACK_INTERFACE)));
    cmds.push(Command::interface(format!(
        "ip address {} {}",
        device.loopback(),
        prefix_to_mask(32)?
    )));
    cmds.push(Command::interface("exit"));

    for route in net.static_routes(node)? {
        cmds.push(Command::config(format!(
            "ip route {} {} {}",
            route.subnet,
            prefix_to_mask(route.prefix_len)?,
            route.next_hop
        )));
    }

    for (neighbor, link_id) in net.adjacent_links(node, LinkKind::Physical)? {
        let link = net.get_link(link_id)?;
        let neighbor = net.get_node(neighbor)?;
        let iface = link.side(node)?;

        cmds.push(Command::config(format!("interface {}", iface.name)));
        cmds.push(Command::interface(format!("ip address {} {}", iface.address, iface.mask)));
        cmds.push(Command::interface("no shutdown"));

        if iface.cost != 1 && runs_protocol(net, link, ProtocolType::Ospf)? {
            cmds.push(Command::interface(format!("ip ospf cost {}", iface.cost)));
        }

        // protocols enabled on the interface itself are configured here, so that the interface
        // needs not to be entered a second time.
        for (as_id, gen) in generators.iter() {
            let ctx = BlockContext { net, device, as_id: *as_id };
            cmds.extend(gen.interface_block(&ctx, neighbor, link)?);
        }

        cmds.push(Command::interface("exit"));
    }

    cmds.extend(process_blocks(net, device, &generators)?);

    if let Some(next_hop) = device.default_route() {
        cmds.push(Command::config(format!(
            "ip route 0.0.0.0 {} {}",
            prefix_to_mask(0)?,
            next_hop
        )));
    }

    cmds.push(Command::config("end"));
    Ok(cmds)
}

fn switch_config(net: &Topology, device: &Device) -> Result<Vec<Command>, Error> {
    let node = device.node_id();
    let generators = generators(net, device)?;
    let mut cmds = preamble();

    // all VLANs must exist before they are assigned to any port
    cmds.extend(process_blocks(net, device, &generators)?);

    for (neighbor, link_id) in net.adjacent_links(node, LinkKind::Physical)? {
        let link = net.get_link(link_id)?;
        let neighbor = net.get_node(neighbor)?;
        let iface = link.side(node)?;

        cmds.push(Command::config(format!("interface {}", iface.name)));

        for (as_id, gen) in generators.iter().filter(|(as_id, _)| link.is_member(*as_id)) {
            let ctx = BlockContext { net, device, as_id: *as_id };
            cmds.extend(gen.interface_block(&ctx, neighbor, link)?);
        }
    }

    cmds.push(Command::config("end"));
    Ok(cmds)
}

/// Generate the blocks of all resolved domains of the device.
fn process_blocks(
    net: &Topology,
    device: &Device,
    generators: &[(AsId, &dyn BlockGenerator)],
) -> Result<Vec<Command>, Error> {
    let mut cmds = Vec::new();
    for (as_id, gen) in generators {
        trace!("{}: block of {:?}", device.name(), as_id);
        let ctx = BlockContext { net, device, as_id: *as_id };
        cmds.extend(gen.process_block(&ctx)?);
    }
    Ok(cmds)
}

/// Returns true if the link participates in any domain running the protocol.
fn runs_protocol(net: &Topology, link: &Link, protocol: ProtocolType) -> Result<bool, Error> {
    for (as_id, _) in link.memberships() {
        if net.get_as(*as_id)?.protocol_type() == protocol {
            return Ok(true);
        }
    }
    Ok(false)
}
