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

//! # Address and Identifier Encoding
//!
//! Pure functions converting prefix lengths into dotted masks, and composing IS-IS Network Entity
//! Titles (NET).
//!
//! A NET is made up of the AFI, the area id, the system id and the selector:
//!
//! - The AFI is fixed to `49` (private addressing).
//! - The area segment is the area id, zero-padded to 4 decimal digits.
//! - The system id is derived from the loopback address: each octet is zero-padded to 3 decimal
//!   digits, which gives the 12 digits (6 bytes) a system id requires.
//! - The selector is always `00`.
//!
//! ```
//! use confgen::encoder::{isis_net, prefix_to_mask, wildcard_mask};
//!
//! assert_eq!(prefix_to_mask(24).unwrap(), "255.255.255.0");
//! assert_eq!(wildcard_mask(30).unwrap(), "0.0.0.3");
//! assert_eq!(isis_net(1, "10.0.0.2").unwrap(), "49.0001.010.000.000.002.00");
//! assert!(prefix_to_mask(33).is_err());
//! ```

use itertools::Itertools;
use std::net::Ipv4Addr;
use thiserror::Error;

/// Authority and Format Identifier used in every NET
pub const ISIS_AFI: &str = "49";
/// NET selector byte
pub const ISIS_SEL: &str = "00";
/// Largest area id which fits into the 4-digit area segment of a NET
pub const MAX_ISIS_AREA_ID: u32 = 9999;

/// Encoding Errors
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum EncodeError {
    /// The prefix length is not in the range `0..=32`
    #[error("Invalid prefix length: {0} (must be between 0 and 32)")]
    InvalidPrefixLength(u32),
    /// The address is not a dotted-quad IPv4 address
    #[error("Malformed IPv4 address: {0:?}")]
    MalformedAddress(String),
    /// The area id cannot be written with 4 decimal digits
    #[error("Area id {0} does not fit into the area segment of a NET")]
    AreaIdOutOfRange(u32),
}

/// Convert a prefix length into a dotted subnet mask, e.g., `24` into `255.255.255.0`.
pub fn prefix_to_mask(prefix_len: u32) -> Result<String, EncodeError> {
    Ok(Ipv4Addr::from(mask_bits(prefix_len)?).to_string())
}

/// Convert a prefix length into a dotted wildcard mask (the complement of the subnet mask), e.g.,
/// `30` into `0.0.0.3`.
pub fn wildcard_mask(prefix_len: u32) -> Result<String, EncodeError> {
    Ok(Ipv4Addr::from(!mask_bits(prefix_len)?).to_string())
}

fn mask_bits(prefix_len: u32) -> Result<u32, EncodeError> {
    match prefix_len {
        0 => Ok(0),
        1..=32 => Ok(u32::MAX << (32 - prefix_len)),
        _ => Err(EncodeError::InvalidPrefixLength(prefix_len)),
    }
}

/// Parse a dotted-quad address into its four octets. Leading zeros are accepted (`010.0.0.1`),
/// signs, empty components and values above 255 are not.
pub fn parse_octets(address: &str) -> Result<[u8; 4], EncodeError> {
    let malformed = || EncodeError::MalformedAddress(address.to_string());
    let mut octets = [0u8; 4];
    let mut parts = address.split('.');
    for octet in octets.iter_mut() {
        let part = parts.next().ok_or_else(malformed)?;
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }
        *octet = part.parse().map_err(|_| malformed())?;
    }
    if parts.next().is_some() {
        return Err(malformed());
    }
    Ok(octets)
}

/// Compose the IS-IS NET of a router from its area id and its loopback address.
pub fn isis_net(area_id: u32, loopback: &str) -> Result<String, EncodeError> {
    if area_id > MAX_ISIS_AREA_ID {
        return Err(EncodeError::AreaIdOutOfRange(area_id));
    }
    let system_id = parse_octets(loopback)?.iter().map(|o| format!("{:03}", o)).join(".");
    Ok(format!("{}.{:04}.{}.{}", ISIS_AFI, area_id, system_id, ISIS_SEL))
}
