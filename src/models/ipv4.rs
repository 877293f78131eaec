//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4`] struct for representing CIDR blocks, the strict
//! dotted-quad codec, and the prefix/mask bit arithmetic the resolver and
//! VLSM allocator build on.

use crate::error::CalcError;
use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;
/// Smallest prefix length the resolver and allocator accept.
pub const PREFIX_MIN: u8 = 1;
/// Largest prefix length the resolver and allocator accept.
pub const PREFIX_MAX: u8 = 30;

lazy_static! {
    // Exactly four dot-separated decimal groups, nothing before or after.
    static ref ADDR_RE: Regex =
        Regex::new(r"^([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})\.([0-9]{1,3})$")
            .expect("Invalid Regex?");
}

/// Parse a dotted-quad IPv4 address.
///
/// Surrounding whitespace is trimmed; anything else that is not exactly four
/// dot-separated decimal octets in 0..=255 is rejected. Octets with leading
/// zeros are read as decimal ("001" == 1) and normalized on display.
///
/// # Arguments
/// * `text` - The address text, e.g. "192.168.1.0"
///
/// # Returns
/// * `Ok(Ipv4Addr)` - The parsed address
/// * `Err(CalcError::InvalidAddressFormat)` - With the reason for rejection
pub fn parse_addr(text: &str) -> Result<Ipv4Addr, CalcError> {
    let trimmed = text.trim();
    let caps = ADDR_RE
        .captures(trimmed)
        .ok_or_else(|| CalcError::InvalidAddressFormat {
            text: text.to_string(),
            reason: "expected four dot-separated octets".to_string(),
        })?;

    let mut octets = [0u8; 4];
    for (i, octet) in octets.iter_mut().enumerate() {
        let group = &caps[i + 1];
        *octet = group
            .parse::<u8>()
            .map_err(|_| CalcError::InvalidAddressFormat {
                text: text.to_string(),
                reason: format!("octet '{group}' is outside 0..=255"),
            })?;
    }

    Ok(Ipv4Addr::from(octets))
}

/// Render an address as four zero-padded binary octet groups.
///
/// E.g. 192.168.1.0 becomes "11000000.10101000.00000001.00000000".
pub fn to_binary(addr: Ipv4Addr) -> String {
    addr.octets().iter().map(|octet| format!("{octet:08b}")).join(".")
}

/// Convert a CIDR prefix length to a subnet mask as u32.
///
/// # Examples
/// ```
/// use subnet_vlsm_calc::models::prefix_to_mask;
/// assert_eq!(prefix_to_mask(24).unwrap(), 0xFFFFFF00);
/// ```
pub fn prefix_to_mask(len: u8) -> Result<u32, CalcError> {
    if len > MAX_LENGTH {
        Err(CalcError::InvalidPrefixRange {
            prefix: len,
            min: 0,
            max: MAX_LENGTH,
        })
    } else {
        let right_len = MAX_LENGTH - len;
        let all_bits = u32::MAX as u64;

        let mask = (all_bits >> right_len) << right_len;

        Ok(mask as u32)
    }
}

/// Derive the prefix length from a dotted-quad subnet mask.
///
/// The mask must be contiguous (all set bits above all clear bits); a mask
/// like 255.0.255.0 has a popcount but no prefix and is rejected.
pub fn mask_to_prefix(mask: Ipv4Addr) -> Result<u8, CalcError> {
    let bits = u32::from(mask);
    let prefix = bits.count_ones() as u8;
    if prefix_to_mask(prefix)? != bits {
        return Err(CalcError::NonContiguousMask { mask });
    }
    Ok(prefix)
}

/// Get the network address for a given IP and prefix length.
pub fn network_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, CalcError> {
    let mask = prefix_to_mask(len)?;
    Ok(Ipv4Addr::from(u32::from(addr) & mask))
}

/// Calculate the broadcast address for a given IP and prefix length.
pub fn broadcast_addr(addr: Ipv4Addr, len: u8) -> Result<Ipv4Addr, CalcError> {
    let mask = prefix_to_mask(len)?;
    let network_bits = u32::from(addr) & mask;
    Ok(Ipv4Addr::from(network_bits | !mask))
}

/// Total number of addresses in a subnet of the given prefix length.
pub fn subnet_size(len: u8) -> Result<u64, CalcError> {
    if len > MAX_LENGTH {
        return Err(CalcError::InvalidPrefixRange {
            prefix: len,
            min: 0,
            max: MAX_LENGTH,
        });
    }
    Ok(1u64 << (MAX_LENGTH - len))
}

/// Number of usable host addresses in a subnet of the given prefix length.
///
/// The network and broadcast addresses are excluded; /31 and /32 have none.
pub fn usable_hosts(len: u8) -> Result<u64, CalcError> {
    let size = subnet_size(len)?;
    Ok(size.saturating_sub(2))
}

/// Smallest prefix length whose subnet holds `hosts` usable addresses.
///
/// Adds the network and broadcast addresses to the request, then takes the
/// integer ceil(log2). Requests that only fit above the supported window
/// return [`CalcError::InvalidPrefixRange`]; requests smaller than a /30
/// still get a /30.
pub fn min_prefix_for_hosts(hosts: u32) -> Result<u8, CalcError> {
    let needed = u64::from(hosts) + 2; // network + broadcast
    let host_bits = (64 - (needed - 1).leading_zeros() as u8).max(MAX_LENGTH - PREFIX_MAX);
    if host_bits > MAX_LENGTH - PREFIX_MIN {
        return Err(CalcError::InvalidPrefixRange {
            prefix: 0,
            min: PREFIX_MIN,
            max: PREFIX_MAX,
        });
    }
    Ok(MAX_LENGTH - host_bits)
}

/// IPv4 address with CIDR notation support.
#[derive(Eq, Ord, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The subnet mask length (0-32).
    pub mask: u8,
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.addr, self.mask);
        serializer.serialize_str(&cidr)
    }
}

impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4::new(&s).map_err(de::Error::custom)
    }
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    pub fn new(addr_cidr: &str) -> Result<Ipv4, CalcError> {
        let addr_cidr = addr_cidr.trim();
        let parts: Vec<&str> = addr_cidr.split('/').collect();
        if parts.len() != 2 {
            return Err(CalcError::InvalidAddressFormat {
                text: addr_cidr.to_string(),
                reason: "expected address/prefix CIDR notation".to_string(),
            });
        }
        let addr = parse_addr(parts[0])?;
        let mask: u8 = parts[1]
            .parse()
            .map_err(|_| CalcError::InvalidAddressFormat {
                text: addr_cidr.to_string(),
                reason: format!("prefix '{}' is not a valid prefix length", parts[1]),
            })?;
        if mask > MAX_LENGTH {
            return Err(CalcError::InvalidPrefixRange {
                prefix: mask,
                min: 0,
                max: MAX_LENGTH,
            });
        }
        Ok(Ipv4 { addr, mask })
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        broadcast_addr(self.addr, self.mask)
            .unwrap_or_else(|e| panic!("Error calculating broadcast address: {}", e))
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        network_addr(self.addr, self.mask)
            .unwrap_or_else(|e| panic!("Error calculating network address for {}: {}", self, e))
    }

    /// Check if an IP address is contained within this subnet.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        ip >= self.lo() && ip <= self.hi()
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

impl PartialEq for Ipv4 {
    fn eq(&self, other: &Ipv4) -> bool {
        self.addr == other.addr && self.mask == other.mask
    }
}

impl PartialOrd for Ipv4 {
    fn partial_cmp(&self, other: &Ipv4) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}
