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

//! # IS-IS routing process
//!
//! IS-IS is configured at two places. The routing process holds the NET and the level of the
//! router, while the circuit type is configured on each interface towards a neighbor in the same
//! domain.
//!
//! - Border routers are `level-1-2`, other routers in the backbone `level-2`, and all remaining
//!   routers `level-1`.
//! - A circuit is `level-2` if both ends are in different areas, or if the router is in the
//!   backbone. Otherwise, it is `level-1`.

use super::{BlockContext, BlockGenerator, Command, LOOPBACK_INTERFACE};
use crate::encoder::isis_net;
use crate::topology::{Area, Device, IsisDomain, Link, NodeId};
use crate::Error;

use std::fmt;

/// Level of an IS-IS router or circuit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IsisLevel {
    /// Intra-area routing only
    Level1,
    /// Inter-area routing only
    Level2,
    /// Both intra- and inter-area routing
    Level12,
}

impl fmt::Display for IsisLevel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IsisLevel::Level1 => write!(f, "level-1"),
            IsisLevel::Level2 => write!(f, "level-2"),
            IsisLevel::Level12 => write!(f, "level-1-2"),
        }
    }
}

impl IsisDomain {
    /// Level of a router located in `area`
    pub fn router_level(&self, node: NodeId, area: &Area) -> IsisLevel {
        if self.border_routers().contains(&node) {
            IsisLevel::Level12
        } else if area.backbone {
            IsisLevel::Level2
        } else {
            IsisLevel::Level1
        }
    }

    /// Circuit type of an interface between a router in `own` and a neighbor in `neighbor`.
    pub fn circuit_type(own: &Area, neighbor: &Area) -> IsisLevel {
        if own.id != neighbor.id || own.backbone {
            IsisLevel::Level2
        } else {
            IsisLevel::Level1
        }
    }
}

impl BlockGenerator for IsisDomain {
    fn process_block(&self, ctx: &BlockContext<'_>) -> Result<Vec<Command>, Error> {
        let area = ctx.net.unique_area(ctx.node(), ctx.as_id)?;
        let level = self.router_level(ctx.node(), area);
        let net = isis_net(area.id, ctx.device.loopback())?;
        Ok(vec![
            Command::config("router isis"),
            Command::router(format!("net {}", net)),
            Command::router(format!("is-type {}", level)),
            Command::router(format!("passive-interface {}", LOOPBACK_INTERFACE)),
            Command::router("exit"),
        ])
    }

    /// IS-IS is only enabled on interfaces towards neighbors of the same domain.
    fn interface_block(
        &self,
        ctx: &BlockContext<'_>,
        neighbor: &Device,
        _link: &Link,
    ) -> Result<Vec<Command>, Error> {
        if !neighbor.is_member(ctx.as_id) {
            return Ok(Vec::new());
        }
        let own_area = ctx.net.unique_area(ctx.node(), ctx.as_id)?;
        let neighbor_area = ctx.net.unique_area(neighbor.node_id(), ctx.as_id)?;
        let circuit_type = Self::circuit_type(own_area, neighbor_area);
        Ok(vec![
            Command::interface("ip router isis"),
            Command::interface(format!("isis circuit-type {}", circuit_type)),
        ])
    }
}
