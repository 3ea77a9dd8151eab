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

//! # Troubleshooting Reference
//!
//! Show and debug commands that help to verify a generated configuration on the device. Every
//! router gets the general commands. Protocol specific commands are added for the protocols the
//! router runs.

use crate::topology::{NodeId, ProtocolType, Topology};
use crate::Error;

/// Show or debug command, together with its abbreviation and a description of its output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TroubleshootingCommand {
    /// Full command
    pub command: &'static str,
    /// Shortest common abbreviation of the command
    pub abbreviation: &'static str,
    /// What the command displays (may span multiple lines)
    pub description: &'static str,
    /// Protocol this command is specific to, or `None` for general commands.
    pub protocol: Option<ProtocolType>,
}

const GENERAL_COMMANDS: [TroubleshootingCommand; 5] = [
    TroubleshootingCommand {
        command: "show ip route",
        abbreviation: "sh ip ro",
        description: "Routing table of the router: connected subnets (C), static and default \
                      routes (S, *) and learned routes (R, O, O IA, i L1, i L2).\n\
                      Each entry shows the administrative distance and the metric, and the \
                      gateway of last resort is listed on top.",
        protocol: None,
    },
    TroubleshootingCommand {
        command: "show ip protocols",
        abbreviation: "sh ip pro",
        description: "All running routing protocols with their timers, version, maximum paths \
                      and administrative distance.\n\
                      \"Routing for Networks\" lists the networks (and thus the interfaces) a \
                      protocol is enabled on, followed by its passive interfaces.",
        protocol: None,
    },
    TroubleshootingCommand {
        command: "show interface",
        abbreviation: "sh int",
        description: "Status and configuration of every interface: address and mask, line and \
                      protocol status, MTU, bandwidth, load and error counters.",
        protocol: None,
    },
    TroubleshootingCommand {
        command: "show ip interface brief",
        abbreviation: "sh ip int br",
        description: "One line per interface with its address, its administrative status and \
                      the status of the IP protocol.",
        protocol: None,
    },
    TroubleshootingCommand {
        command: "show running-config",
        abbreviation: "sh run",
        description: "Configuration currently held in memory.\n\
                      It is only persisted after \"copy running-config startup-config\" \
                      (\"copy run start\").",
        protocol: None,
    },
];

const RIP_COMMANDS: [TroubleshootingCommand; 2] = [
    TroubleshootingCommand {
        command: "debug ip rip",
        abbreviation: "deb ip rip",
        description: "Logs every RIP update sent and received on the interfaces of the router, \
                      which reveals version mismatches.\n\
                      Stop it with \"undebug rip\" or \"undebug all\".",
        protocol: Some(ProtocolType::Rip),
    },
    TroubleshootingCommand {
        command: "show ip rip database",
        abbreviation: "sh ip rip",
        description: "Summary addresses in the RIP database. Only addresses present in the \
                      database are advertised.",
        protocol: Some(ProtocolType::Rip),
    },
];

/// Returns the troubleshooting commands for the given device. The general commands come first,
/// followed by the commands of every protocol the device runs.
pub fn troubleshooting_commands(
    net: &Topology,
    node: NodeId,
) -> Result<Vec<TroubleshootingCommand>, Error> {
    let mut commands = GENERAL_COMMANDS.to_vec();
    let mut runs_rip = false;
    for (as_id, _) in net.as_memberships(node)? {
        runs_rip |= net.get_as(*as_id)?.protocol_type() == ProtocolType::Rip;
    }
    if runs_rip {
        commands.extend(RIP_COMMANDS.iter());
    }
    Ok(commands)
}
