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

//! Module containing all error types

use crate::encoder::EncodeError;
use crate::topology::{AsId, DeviceRole, ProtocolType, TopologyError};
use thiserror::Error;

/// Main error type
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// The topology violates one of its invariants (e.g., a node belongs to more than one area of
    /// an IS-IS domain). No configuration is generated for the affected node.
    #[error("Malformed topology: {0}")]
    MalformedTopology(#[from] TopologyError),
    /// An address, a mask or an identifier cannot be encoded. No configuration is generated for
    /// the affected node.
    #[error("Encoding error: {0}")]
    EncodeError(#[from] EncodeError),
    /// No configuration block can be generated for this protocol on a device of this role. This
    /// error is not fatal: the domain is skipped while the rest of the configuration is
    /// generated.
    #[error("Cannot configure {protocol} ({as_id:?}) on the {role} {node}")]
    UnsupportedProtocolType {
        /// Name of the device
        node: String,
        /// Domain that is skipped
        as_id: AsId,
        /// Protocol of the domain
        protocol: ProtocolType,
        /// Role of the device
        role: DeviceRole,
    },
}
