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


use confgen::example_networks::{self, ExampleNetwork};
use confgen::topology::Topology;

use clap::ValueEnum;
use std::error::Error;
use std::fmt;

#[derive(ValueEnum, Debug, Clone, Copy)]
pub enum ExampleTopology {
    OspfPair,
    IsisAreas,
    RipChain,
    Campus,
    DualStack,
}

impl ExampleTopology {
    /// Number of variants the example network provides
    pub fn num_variants(&self) -> usize {
        match self {
            ExampleTopology::OspfPair => 3,
            ExampleTopology::DualStack => 2,
            ExampleTopology::IsisAreas | ExampleTopology::RipChain | ExampleTopology::Campus => 1,
        }
    }
}

impl fmt::Display for ExampleTopology {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ExampleTopology::OspfPair => write!(f, "OspfPair"),
            ExampleTopology::IsisAreas => write!(f, "IsisAreas"),
            ExampleTopology::RipChain => write!(f, "RipChain"),
            ExampleTopology::Campus => write!(f, "Campus"),
            ExampleTopology::DualStack => write!(f, "DualStack"),
        }
    }
}

pub fn get_example_topology(
    topo: ExampleTopology,
    variant: usize,
) -> Result<Topology, Box<dyn Error>> {
    if variant >= topo.num_variants() {
        return Err(format!("{} has no variant {}", topo, variant).into());
    }
    Ok(match topo {
        ExampleTopology::OspfPair => example_networks::OspfPair::net(variant),
        ExampleTopology::IsisAreas => example_networks::IsisAreas::net(variant),
        ExampleTopology::RipChain => example_networks::RipChain::net(variant),
        ExampleTopology::Campus => example_networks::Campus::net(variant),
        ExampleTopology::DualStack => example_networks::DualStack::net(variant),
    })
}
