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

//! Networks for testing

use crate::topology::Topology;

mod ospf_pair;
pub use ospf_pair::OspfPair;

mod isis_areas;
pub use isis_areas::IsisAreas;

mod rip_chain;
pub use rip_chain::RipChain;

mod campus;
pub use campus::Campus;

mod dual_stack;
pub use dual_stack::DualStack;

/// Trait for easier access to example networks.
pub trait ExampleNetwork {
    /// Get the topology of the chosen variant.
    fn net(variant: usize) -> Topology;
}
