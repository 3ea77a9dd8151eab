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

//! RIP routing process

use super::{BlockContext, BlockGenerator, Command};
use crate::topology::{LinkKind, RipDomain};
use crate::Error;

impl BlockGenerator for RipDomain {
    /// `router rip`, followed by one `network` statement for every link of the domain, and a
    /// `passive-interface` for every other link.
    fn process_block(&self, ctx: &BlockContext<'_>) -> Result<Vec<Command>, Error> {
        let node = ctx.node();
        let mut cmds = vec![Command::config("router rip")];
        for (_, link_id) in ctx.net.adjacent_links(node, LinkKind::Physical)? {
            let link = ctx.net.get_link(link_id)?;
            let iface = link.side(node)?;
            if link.is_member(ctx.as_id) {
                cmds.push(Command::router(format!("network {}", iface.address)));
            } else {
                cmds.push(Command::router(format!("passive-interface {}", iface.name)));
            }
        }
        Ok(cmds)
    }
}
