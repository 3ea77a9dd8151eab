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

#![deny(missing_docs)]

//! # Confgen: Synthesizing Device Configurations from Network Topologies
//! This is a library for generating the command line configuration of routers and switches from
//! a topology, annotated with the protocol domains (RIP, OSPF, IS-IS and VLAN) every device and
//! link belongs to.
//!
//! ## Structure
//!
//! This library is structured in the following way:
//!
//! - **[`Topology`](topology)**: Devices, physical links, static routes and protocol domains.
//!   See the main structure [`Topology`](topology::Topology).
//!
//! - **[`Encoder`](encoder)**: Conversion of prefix lengths into masks, and composition of IS-IS
//!   Network Entity Titles.
//!
//! - **[`Synthesis`](synthesis)**: Generation of the ordered configuration commands of a single
//!   device ([`synthesize`]), or of all devices at once ([`synthesize_all`]). Each protocol
//!   generates its own configuration blocks.
//!
//! - **[`Printer`](printer)**: Detailed (including the prompt) and pastable (without the prompt)
//!   views of a generated configuration.
//!
//! - **[`Troubleshooting`](troubleshooting)**: Show and debug commands to verify a configuration
//!   on the device.
//!
//! - **[`ExampleNetworks`](example_networks)**: Collection of prepared topologies.
//!
//! ## Usage
//!
//! Build the [topology](topology::Topology), and call [`synthesize`] for every device you want
//! to configure.
//!
//! ```
//! use confgen::synthesize;
//! use confgen::Error;
//! # use confgen::example_networks::*;
//!
//! fn main() -> Result<(), Error> {
//!     // prepare the topology
//!     // let net = ...
//! # let net = OspfPair::net(0);
//!     let r1 = net.get_node_id("R1")?;
//!
//!     // generate the configuration
//!     let config = synthesize(&net, r1)?;
//!
//!     assert_eq!(config.commands()[0].text, "enable");
//!     assert!(config.detailed().starts_with(" R1> enable\n R1# configure terminal\n"));
//!     assert!(config.pastable().starts_with(" enable\n configure terminal\n"));
//!
//!     Ok(())
//! }
//! ```
// test modules
pub mod example_networks;
mod test;

pub mod encoder;
mod error;
pub mod printer;
pub mod synthesis;
pub mod topology;
pub mod troubleshooting;

pub use error::Error;
pub use synthesis::{synthesize, synthesize_all};
