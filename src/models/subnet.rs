//! Resolved subnet facts.

use super::Ipv4;
use serde::Serialize;
use std::fmt;
use std::net::Ipv4Addr;

/// Classful address range, keyed off the first octet.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq)]
pub enum AddressClass {
    /// First octet 0-126.
    A,
    /// First octet 128-191.
    B,
    /// First octet 192-223.
    C,
    /// First octet 224-239 (multicast).
    D,
    /// First octet 240-255 (experimental).
    E,
    /// First octet 127 (the 127.0.0.0/8 loopback block).
    Loopback,
}

impl AddressClass {
    /// Classify an address by its first octet.
    pub fn of(addr: Ipv4Addr) -> AddressClass {
        match addr.octets()[0] {
            0..=126 => AddressClass::A,
            127 => AddressClass::Loopback,
            128..=191 => AddressClass::B,
            192..=223 => AddressClass::C,
            224..=239 => AddressClass::D,
            240..=255 => AddressClass::E,
        }
    }
}

impl fmt::Display for AddressClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AddressClass::A => "A",
            AddressClass::B => "B",
            AddressClass::C => "C",
            AddressClass::D => "D",
            AddressClass::E => "E",
            AddressClass::Loopback => "Loopback",
        };
        write!(f, "{name}")
    }
}

/// Everything the resolver derives for one subnet query.
///
/// Built fresh per query; all fields are plain values with no shared state.
#[derive(Serialize, Debug, Clone)]
pub struct SubnetResult {
    /// The subnet in CIDR notation, address masked down to its boundary.
    pub network: Ipv4,
    /// Dotted-quad subnet mask.
    pub mask: Ipv4Addr,
    /// Wildcard (inverted) mask.
    pub wildcard: Ipv4Addr,
    /// First usable host address (network + 1).
    pub first_host: Ipv4Addr,
    /// Last usable host address (broadcast - 1).
    pub last_host: Ipv4Addr,
    /// Broadcast address.
    pub broadcast: Ipv4Addr,
    /// Number of usable host addresses.
    pub usable_hosts: u64,
    /// Classful range of the queried address.
    pub address_class: AddressClass,
    /// Whether the queried address is RFC 1918 private space.
    pub private: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_class_boundaries() {
        assert_eq!(AddressClass::of(Ipv4Addr::new(0, 0, 0, 0)), AddressClass::A);
        assert_eq!(AddressClass::of(Ipv4Addr::new(1, 0, 0, 1)), AddressClass::A);
        assert_eq!(
            AddressClass::of(Ipv4Addr::new(126, 255, 255, 255)),
            AddressClass::A
        );
        assert_eq!(
            AddressClass::of(Ipv4Addr::new(127, 0, 0, 1)),
            AddressClass::Loopback
        );
        assert_eq!(
            AddressClass::of(Ipv4Addr::new(128, 0, 0, 1)),
            AddressClass::B
        );
        assert_eq!(
            AddressClass::of(Ipv4Addr::new(191, 255, 0, 1)),
            AddressClass::B
        );
        assert_eq!(
            AddressClass::of(Ipv4Addr::new(192, 168, 1, 1)),
            AddressClass::C
        );
        assert_eq!(
            AddressClass::of(Ipv4Addr::new(223, 0, 0, 1)),
            AddressClass::C
        );
        assert_eq!(
            AddressClass::of(Ipv4Addr::new(224, 0, 0, 1)),
            AddressClass::D
        );
        assert_eq!(
            AddressClass::of(Ipv4Addr::new(239, 255, 255, 255)),
            AddressClass::D
        );
        assert_eq!(
            AddressClass::of(Ipv4Addr::new(240, 0, 0, 1)),
            AddressClass::E
        );
        assert_eq!(
            AddressClass::of(Ipv4Addr::new(255, 255, 255, 255)),
            AddressClass::E
        );
    }

    #[test]
    fn test_address_class_display() {
        assert_eq!(AddressClass::A.to_string(), "A");
        assert_eq!(AddressClass::Loopback.to_string(), "Loopback");
    }
}
