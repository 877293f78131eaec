//! Post-allocation invariant checks.
//!
//! The allocator packs blocks contiguously, and these checks re-verify its
//! output independently: allocations must be pairwise disjoint and must stay
//! inside the base block.

use crate::models::{Ipv4, VlsmAllocation};
use colored::Colorize;
use std::error::Error;

/// Return an error if any two allocations overlap.
pub fn check_for_overlaps(allocations: &[VlsmAllocation]) -> Result<(), Box<dyn Error>> {
    let mut sorted: Vec<&VlsmAllocation> = allocations.iter().collect();
    sorted.sort_by_key(|alloc| alloc.subnet);

    for pair in sorted.windows(2) {
        let (lower, upper) = (pair[0], pair[1]);
        if upper.subnet.lo() <= lower.subnet.hi() {
            log::warn!(
                "{found} '{}' {} and '{}' {}",
                lower.name,
                lower.subnet,
                upper.name,
                upper.subnet,
                found = "Overlap found:".on_red()
            );
            return Err(format!(
                "Overlap found: '{}' {} and '{}' {}",
                lower.name, lower.subnet, upper.name, upper.subnet
            )
            .into());
        }
    }

    log::info!("No overlapping allocations found.");
    Ok(())
}

/// Return an error if any allocation reaches outside the base block.
pub fn check_within_block(
    base: &Ipv4,
    allocations: &[VlsmAllocation],
) -> Result<(), Box<dyn Error>> {
    for alloc in allocations {
        if !base.contains(alloc.subnet.lo()) || !base.contains(alloc.subnet.hi()) {
            log::warn!(
                "Allocation '{}' {} is {outside} base block {}",
                alloc.name,
                alloc.subnet,
                base,
                outside = "outside".on_red()
            );
            return Err(format!(
                "Allocation '{}' {} is outside base block {}",
                alloc.name, alloc.subnet, base
            )
            .into());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{prefix_to_mask, usable_hosts, SubnetRequest};
    use crate::processing::allocate_vlsm;
    use std::net::Ipv4Addr;

    fn alloc(name: &str, cidr: &str) -> VlsmAllocation {
        let subnet = Ipv4::new(cidr).unwrap();
        VlsmAllocation {
            name: name.to_string(),
            subnet,
            mask: Ipv4Addr::from(prefix_to_mask(subnet.mask).unwrap()),
            first_host: Ipv4Addr::from(u32::from(subnet.lo()) + 1),
            last_host: Ipv4Addr::from(u32::from(subnet.hi()) - 1),
            broadcast: subnet.hi(),
            requested_hosts: 1,
            actual_hosts: usable_hosts(subnet.mask).unwrap(),
            waste: 0,
        }
    }

    #[test]
    fn test_check_for_overlaps_passes_allocator_output() {
        let requests = vec![
            SubnetRequest {
                name: "a".to_string(),
                hosts: 100,
            },
            SubnetRequest {
                name: "b".to_string(),
                hosts: 50,
            },
            SubnetRequest {
                name: "c".to_string(),
                hosts: 10,
            },
        ];
        let allocations = allocate_vlsm("10.0.0.0/24", &requests).unwrap();
        check_for_overlaps(&allocations).expect("Allocator output should not overlap");
    }

    #[test]
    fn test_check_for_overlaps_detects_nested_block() {
        let allocations = vec![
            alloc("outer", "10.0.0.0/24"),
            alloc("inner", "10.0.0.64/26"),
        ];
        let err = check_for_overlaps(&allocations).unwrap_err();
        assert!(err.to_string().contains("Overlap found"));
    }

    #[test]
    fn test_check_for_overlaps_detects_identical_blocks() {
        let allocations = vec![alloc("one", "10.0.1.0/26"), alloc("two", "10.0.1.0/26")];
        assert!(check_for_overlaps(&allocations).is_err());
    }

    #[test]
    fn test_check_for_overlaps_allows_adjacent_blocks() {
        let allocations = vec![alloc("low", "10.0.0.0/25"), alloc("high", "10.0.0.128/25")];
        check_for_overlaps(&allocations).expect("Adjacent blocks do not overlap");
    }

    #[test]
    fn test_check_within_block() {
        let base = Ipv4::new("10.0.0.0/24").unwrap();
        let inside = vec![alloc("a", "10.0.0.0/25"), alloc("b", "10.0.0.128/26")];
        check_within_block(&base, &inside).expect("Allocations fit the base block");

        let outside = vec![alloc("a", "10.0.0.128/25"), alloc("b", "10.0.1.0/26")];
        let err = check_within_block(&base, &outside).unwrap_err();
        assert!(err.to_string().contains("outside base block"));
    }
}
