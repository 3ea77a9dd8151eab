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

//! OSPF routing process

use super::{BlockContext, BlockGenerator, Command};
use crate::encoder::wildcard_mask;
use crate::topology::{LinkKind, OspfDomain};
use crate::Error;

/// Process id of the single OSPF process on every router
pub const OSPF_PROCESS_ID: u32 = 1;
/// Prefix length assumed for every link running OSPF (point-to-point `/30` subnets)
pub const OSPF_LINK_PREFIX_LEN: u32 = 30;

impl BlockGenerator for OspfDomain {
    /// `router ospf 1`, followed by one `network` statement (with the wildcard mask of a `/30`) for
    /// every link of the domain, and a `passive-interface` for every other link. The exit point of
    /// the domain also originates the default route.
    fn process_block(&self, ctx: &BlockContext<'_>) -> Result<Vec<Command>, Error> {
        let node = ctx.node();
        let wildcard = wildcard_mask(OSPF_LINK_PREFIX_LEN)?;
        let mut cmds = vec![Command::config(format!("router ospf {}", OSPF_PROCESS_ID))];
        for (_, link_id) in ctx.net.adjacent_links(node, LinkKind::Physical)? {
            let link = ctx.net.get_link(link_id)?;
            let iface = link.side(node)?;
            if link.is_member(ctx.as_id) {
                let area = ctx.net.unique_link_area(link_id, ctx.as_id)?;
                cmds.push(Command::router(format!(
                    "network {} {} area {}",
                    iface.address, wildcard, area.id
                )));
            } else {
                cmds.push(Command::router(format!("passive-interface {}", iface.name)));
            }
        }
        if self.exit_point() == Some(node) {
            cmds.push(Command::router("default-information originate"));
        }
        Ok(cmds)
    }
}
