//! Subnet resolution from an address plus prefix or dotted mask.
//!
//! Both entry points normalize to the same path: validate the prefix
//! window, mask the supplied address down to its network boundary, then
//! derive every subnet fact in one pass.

use crate::error::CalcError;
use crate::models::{
    broadcast_addr, mask_to_prefix, network_addr, parse_addr, prefix_to_mask, usable_hosts,
    AddressClass, Ipv4, SubnetResult, PREFIX_MAX, PREFIX_MIN,
};
use std::net::Ipv4Addr;

/// Resolve a subnet from an address and CIDR prefix length.
///
/// The address may be any host inside the subnet; it is masked down to the
/// network boundary before derivation.
///
/// # Arguments
/// * `network` - Address text, e.g. "192.168.1.0"
/// * `prefix` - CIDR prefix length, 1..=30
///
/// # Returns
/// * `Ok(SubnetResult)` - All derived subnet facts
/// * `Err(CalcError)` - If the address or prefix is invalid
pub fn resolve_cidr(network: &str, prefix: u8) -> Result<SubnetResult, CalcError> {
    let addr = parse_addr(network)?;
    resolve(addr, prefix)
}

/// Resolve a subnet from an address and dotted-quad subnet mask.
///
/// The mask must be contiguous; "255.0.255.0" style masks are rejected
/// with [`CalcError::NonContiguousMask`]. Equivalent inputs give results
/// identical to [`resolve_cidr`].
pub fn resolve_mask(ip: &str, mask: &str) -> Result<SubnetResult, CalcError> {
    let addr = parse_addr(ip)?;
    let mask_addr = parse_addr(mask)?;
    let prefix = mask_to_prefix(mask_addr)?;
    resolve(addr, prefix)
}

/// Shared derivation once the address and prefix are known.
fn resolve(addr: Ipv4Addr, prefix: u8) -> Result<SubnetResult, CalcError> {
    if !(PREFIX_MIN..=PREFIX_MAX).contains(&prefix) {
        return Err(CalcError::InvalidPrefixRange {
            prefix,
            min: PREFIX_MIN,
            max: PREFIX_MAX,
        });
    }

    let mask_bits = prefix_to_mask(prefix)?;
    let network = network_addr(addr, prefix)?;
    let broadcast = broadcast_addr(addr, prefix)?;

    log::debug!("resolve {addr}/{prefix} -> network {network} broadcast {broadcast}");

    Ok(SubnetResult {
        network: Ipv4 {
            addr: network,
            mask: prefix,
        },
        mask: Ipv4Addr::from(mask_bits),
        wildcard: Ipv4Addr::from(!mask_bits),
        first_host: Ipv4Addr::from(u32::from(network) + 1),
        last_host: Ipv4Addr::from(u32::from(broadcast) - 1),
        broadcast,
        usable_hosts: usable_hosts(prefix)?,
        address_class: AddressClass::of(addr),
        private: addr.is_private(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_cidr_24() {
        let result = resolve_cidr("192.168.1.0", 24).unwrap();
        assert_eq!(result.network.to_string(), "192.168.1.0/24");
        assert_eq!(result.mask, Ipv4Addr::new(255, 255, 255, 0));
        assert_eq!(result.wildcard, Ipv4Addr::new(0, 0, 0, 255));
        assert_eq!(result.first_host, Ipv4Addr::new(192, 168, 1, 1));
        assert_eq!(result.last_host, Ipv4Addr::new(192, 168, 1, 254));
        assert_eq!(result.broadcast, Ipv4Addr::new(192, 168, 1, 255));
        assert_eq!(result.usable_hosts, 254);
        assert_eq!(result.address_class, AddressClass::C);
        assert!(result.private);
    }

    #[test]
    fn test_resolve_cidr_masks_down() {
        // Any host address resolves to its subnet's facts
        let aligned = resolve_cidr("192.168.1.0", 24).unwrap();
        let unaligned = resolve_cidr("192.168.1.100", 24).unwrap();
        assert_eq!(unaligned.network, aligned.network);
        assert_eq!(unaligned.broadcast, aligned.broadcast);
        assert_eq!(unaligned.first_host, aligned.first_host);
        assert_eq!(unaligned.usable_hosts, aligned.usable_hosts);
    }

    #[test]
    fn test_resolve_mask_matches_cidr() {
        let by_mask = resolve_mask("192.168.1.100", "255.255.255.0").unwrap();
        let by_cidr = resolve_cidr("192.168.1.0", 24).unwrap();
        assert_eq!(by_mask.network, by_cidr.network);
        assert_eq!(by_mask.mask, by_cidr.mask);
        assert_eq!(by_mask.wildcard, by_cidr.wildcard);
        assert_eq!(by_mask.first_host, by_cidr.first_host);
        assert_eq!(by_mask.last_host, by_cidr.last_host);
        assert_eq!(by_mask.broadcast, by_cidr.broadcast);
        assert_eq!(by_mask.usable_hosts, by_cidr.usable_hosts);
    }

    #[test]
    fn test_resolve_cidr_30() {
        let result = resolve_cidr("10.0.0.0", 30).unwrap();
        assert_eq!(result.usable_hosts, 2);
        assert_eq!(result.first_host, Ipv4Addr::new(10, 0, 0, 1));
        assert_eq!(result.last_host, Ipv4Addr::new(10, 0, 0, 2));
        assert_eq!(result.broadcast, Ipv4Addr::new(10, 0, 0, 3));
    }

    #[test]
    fn test_resolve_prefix_window() {
        for prefix in [0u8, 31, 32, 33, 255] {
            let err = resolve_cidr("10.0.0.0", prefix).unwrap_err();
            assert_eq!(
                err,
                CalcError::InvalidPrefixRange {
                    prefix,
                    min: 1,
                    max: 30
                }
            );
        }
    }

    #[test]
    fn test_resolve_bad_inputs() {
        assert!(matches!(
            resolve_cidr("10.0.0", 24).unwrap_err(),
            CalcError::InvalidAddressFormat { .. }
        ));
        assert!(matches!(
            resolve_mask("10.0.0.1", "255.0.255.0").unwrap_err(),
            CalcError::NonContiguousMask { .. }
        ));
        assert!(matches!(
            resolve_mask("10.0.0.1", "255.255.255.300").unwrap_err(),
            CalcError::InvalidAddressFormat { .. }
        ));
        // /31 and /32 masks fall outside the prefix window
        assert!(matches!(
            resolve_mask("10.0.0.1", "255.255.255.254").unwrap_err(),
            CalcError::InvalidPrefixRange { prefix: 31, .. }
        ));
        assert!(matches!(
            resolve_mask("10.0.0.1", "255.255.255.255").unwrap_err(),
            CalcError::InvalidPrefixRange { prefix: 32, .. }
        ));
    }

    #[test]
    fn test_resolve_classes_and_private() {
        let a = resolve_cidr("10.0.0.0", 8).unwrap();
        assert_eq!(a.address_class, AddressClass::A);
        assert!(a.private);

        let b = resolve_mask("172.16.0.0", "255.240.0.0").unwrap();
        assert_eq!(b.address_class, AddressClass::B);
        assert!(b.private);

        let public = resolve_cidr("8.8.8.0", 24).unwrap();
        assert_eq!(public.address_class, AddressClass::A);
        assert!(!public.private);

        let loopback = resolve_cidr("127.0.0.1", 8).unwrap();
        assert_eq!(loopback.address_class, AddressClass::Loopback);

        let multicast = resolve_cidr("224.0.0.0", 4).unwrap();
        assert_eq!(multicast.address_class, AddressClass::D);
        assert!(!multicast.private);
    }
}
