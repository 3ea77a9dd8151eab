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

//! VLAN creation and switch port modes

use super::{BlockContext, BlockGenerator, Command};
use crate::topology::{Device, Link, TopologyError, VlanDomain};
use crate::Error;

use itertools::Itertools;

impl BlockGenerator for VlanDomain {
    /// Create every VLAN of the domain held by the switch.
    fn process_block(&self, ctx: &BlockContext<'_>) -> Result<Vec<Command>, Error> {
        let mut cmds = Vec::new();
        for id in ctx.device.members(ctx.as_id).unwrap_or(&[]) {
            let vlan = self
                .vlans()
                .iter()
                .find(|v| v.id == *id)
                .ok_or(TopologyError::UnknownMember { as_id: ctx.as_id, id: *id })?;
            cmds.push(Command::config(format!("vlan {}", vlan.id)));
            cmds.push(Command::vlan(format!("name {}", vlan.name)));
            cmds.push(Command::vlan("exit"));
        }
        Ok(cmds)
    }

    /// A port carrying a single VLAN is an access port. A port carrying several VLANs is a trunk,
    /// allowing all of them (in ascending order).
    fn interface_block(
        &self,
        ctx: &BlockContext<'_>,
        _neighbor: &Device,
        link: &Link,
    ) -> Result<Vec<Command>, Error> {
        match link.members(ctx.as_id).unwrap_or(&[]) {
            [] => {
                Err(TopologyError::EmptyVlanSet { link: link.link_id(), as_id: ctx.as_id }.into())
            }
            [vlan] => Ok(vec![
                Command::interface("switchport mode access"),
                Command::interface(format!("switchport access vlan {}", vlan)),
            ]),
            vlans => Ok(vec![
                Command::interface("switchport mode trunk"),
                Command::interface(format!(
                    "switchport trunk allowed vlan add {}",
                    vlans.iter().sorted().join(",")
                )),
            ]),
        }
    }
}
