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

//! # Helper (printer) functions for generated configurations
//! Module containing helper functions to get formatted strings of generated configurations and
//! of the topology.
//!
//! Every command is rendered as ` <device-name><mode-marker> <command-text>\n`. The pastable
//! form of a line is the part after the first `#` or `>`, followed by a newline.

use crate::synthesis::{Command, DeviceConfig};
use crate::topology::{LinkKind, Topology, TopologyError};
use crate::troubleshooting::TroubleshootingCommand;

/// Returns the detailed line of a command, including the prompt of the device.
pub fn command_line(device: &str, command: &Command) -> String {
    format!(" {}{} {}\n", device, command.mode.marker(), command.text)
}

/// Strip the prompt of a detailed line. The result is everything after the first `#` or `>`, up
/// to the end of the line, followed by a newline. A line without any prompt marker is kept
/// as it is.
pub fn pastable_line(line: &str) -> String {
    let rest = match line.find(|c: char| c == '#' || c == '>') {
        Some(pos) => &line[pos + 1..],
        None => line,
    };
    let rest = rest.split('\n').next().unwrap_or("");
    format!("{}\n", rest)
}

/// Return the configuration including all prompts.
pub fn detailed(config: &DeviceConfig) -> String {
    config.lines().concat()
}

/// Return the configuration with all prompts stripped.
pub fn pastable(config: &DeviceConfig) -> String {
    config.lines().iter().map(|l| pastable_line(l)).collect()
}

/// Print the detailed configuration to stdout
pub fn print_config(config: &DeviceConfig) {
    print!("{}", detailed(config));
}

/// Returns a formatted string of a troubleshooting command
pub fn troubleshooting_command(command: &TroubleshootingCommand) -> String {
    format!(
        "{} ({})\n{}\n",
        command.command,
        command.abbreviation,
        command
            .description
            .lines()
            .map(|l| format!("    {}", l))
            .collect::<Vec<_>>()
            .join("\n")
    )
}

/// Returns one line per device, with its name, role, loopback and neighbors.
pub fn topology_summary(net: &Topology) -> Result<Vec<String>, TopologyError> {
    net.nodes()
        .into_iter()
        .map(|n| {
            let device = net.get_node(n)?;
            let neighbors = net
                .adjacent_links(n, LinkKind::Physical)?
                .into_iter()
                .map(|(neighbor, _)| net.get_node(neighbor).map(|d| d.name()))
                .collect::<Result<Vec<_>, _>>()?;
            Ok(format!(
                "{} ({}, loopback {}): neighbors [{}]",
                device.name(),
                device.role(),
                device.loopback(),
                neighbors.join(", ")
            ))
        })
        .collect()
}
