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

//! # Configuration Commands
//!
//! A generated configuration is an ordered list of [`Command`]s. Each command knows the CLI mode
//! in which it must be entered, which is rendered as the prompt in front of the command (see
//! [`printer`](crate::printer)).

use crate::printer;
use crate::topology::{DeviceRole, NodeId};

use std::fmt;

/// CLI mode in which a command is entered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CliMode {
    /// User EXEC mode (`>`)
    User,
    /// Privileged EXEC mode (`#`)
    Privileged,
    /// Global configuration mode (`(config)#`)
    Config,
    /// Interface configuration mode (`(config-if)#`)
    Interface,
    /// Routing process configuration mode (`(config-router)#`)
    Router,
    /// VLAN configuration mode (`(config-vlan)#`)
    Vlan,
}

impl CliMode {
    /// Return the prompt marker which follows the device name
    pub fn marker(&self) -> &'static str {
        match self {
            CliMode::User => ">",
            CliMode::Privileged => "#",
            CliMode::Config => "(config)#",
            CliMode::Interface => "(config-if)#",
            CliMode::Router => "(config-router)#",
            CliMode::Vlan => "(config-vlan)#",
        }
    }
}

impl fmt::Display for CliMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.marker())
    }
}

/// Single configuration command, together with the mode it is entered in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Mode in which the command is entered
    pub mode: CliMode,
    /// Command text, without prompt
    pub text: String,
}

impl Command {
    /// Create a new command
    pub fn new(mode: CliMode, text: impl Into<String>) -> Self {
        Self { mode, text: text.into() }
    }

    /// Command entered in global configuration mode
    pub fn config(text: impl Into<String>) -> Self {
        Self::new(CliMode::Config, text)
    }

    /// Command entered in interface configuration mode
    pub fn interface(text: impl Into<String>) -> Self {
        Self::new(CliMode::Interface, text)
    }

    /// Command entered in routing process configuration mode
    pub fn router(text: impl Into<String>) -> Self {
        Self::new(CliMode::Router, text)
    }

    /// Command entered in VLAN configuration mode
    pub fn vlan(text: impl Into<String>) -> Self {
        Self::new(CliMode::Vlan, text)
    }
}

/// Complete configuration of a single device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceConfig {
    node: NodeId,
    name: String,
    role: DeviceRole,
    commands: Vec<Command>,
}

impl DeviceConfig {
    pub(crate) fn new(
        node: NodeId,
        name: String,
        role: DeviceRole,
        commands: Vec<Command>,
    ) -> Self {
        Self { node, name, role, commands }
    }

    /// Return the node id of the configured device
    pub fn node(&self) -> NodeId {
        self.node
    }

    /// Return the name of the configured device
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Return the role of the configured device
    pub fn role(&self) -> DeviceRole {
        self.role
    }

    /// Return all commands in order
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Return the command texts, without prompts
    pub fn texts(&self) -> Vec<&str> {
        self.commands.iter().map(|c| c.text.as_str()).collect()
    }

    /// Return all lines including the prompt, each terminated by a newline.
    pub fn lines(&self) -> Vec<String> {
        self.commands.iter().map(|c| printer::command_line(&self.name, c)).collect()
    }

    /// Return the configuration including the prompts.
    pub fn detailed(&self) -> String {
        printer::detailed(self)
    }

    /// Return the configuration without prompts, which can be pasted into a terminal session.
    pub fn pastable(&self) -> String {
        printer::pastable(self)
    }
}
