//! Greedy largest-first VLSM allocation.
//!
//! Packs host-count requests into a base block, biggest request first.
//! Every block is committed on its own size boundary: the cursor rounds
//! up before each commit, which only moves it for the first block of an
//! unaligned bare base since the sizes descend.

use crate::error::CalcError;
use crate::models::{
    min_prefix_for_hosts, parse_addr, prefix_to_mask, subnet_size, usable_hosts, Ipv4,
    SubnetRequest, VlsmAllocation,
};
use itertools::Itertools;
use std::cmp::Reverse;
use std::net::Ipv4Addr;

/// Allocate a subnet per request inside `base_network`, biggest first.
///
/// `base_network` is either CIDR notation ("10.0.0.0/24": the block every
/// allocation must fit inside) or a bare address ("10.0.0.0": the cursor
/// start, bounded only by the end of the IPv4 space). A start that does not
/// sit on the first block's size boundary rounds up to the next one.
/// Requests with a blank name or zero hosts are skipped. The returned list
/// is in the caller's original request order.
///
/// # Arguments
/// * `base_network` - Start of the address space to carve up
/// * `requests` - Named host-count requests
///
/// # Returns
/// * `Ok(Vec<VlsmAllocation>)` - One allocation per non-blank request
/// * `Err(CalcError)` - Invalid input, or the space ran out (no partial list)
pub fn allocate_vlsm(
    base_network: &str,
    requests: &[SubnetRequest],
) -> Result<Vec<VlsmAllocation>, CalcError> {
    let (cursor_start, block_end, base_label) = parse_base(base_network)?;
    log::info!(
        "#Start allocate_vlsm() base={base_label} requests={}",
        requests.len()
    );

    // Drop blank form rows before sorting
    let live: Vec<(usize, &SubnetRequest)> = requests
        .iter()
        .enumerate()
        .filter(|(i, request)| {
            if request.name.trim().is_empty() || request.hosts == 0 {
                log::info!(
                    "SKIPPING request {i} EMPTY: name='{name}' hosts={hosts}",
                    name = request.name,
                    hosts = request.hosts
                );
                false
            } else {
                true
            }
        })
        .collect();

    // Biggest request first; ties keep their request order
    let ordered = live
        .iter()
        .sorted_by_key(|&&(i, request)| (Reverse(request.hosts), i));

    let block_end = u64::from(u32::from(block_end));
    let mut cursor = u64::from(u32::from(cursor_start));
    let mut allocations: Vec<(usize, VlsmAllocation)> = Vec::with_capacity(live.len());

    for &(i, request) in ordered {
        let prefix = min_prefix_for_hosts(request.hosts)?;
        let size = subnet_size(prefix)?;
        // A block must start on its own size boundary. Only the first block
        // of an unaligned bare base can shift: afterwards the cursor stays a
        // multiple of every smaller size.
        let network_bits = (cursor + size - 1) & !(size - 1);
        let end = network_bits + size - 1;

        if end > block_end {
            return Err(CalcError::AddressSpaceExhausted {
                name: request.name.clone(),
                needed: size,
                remaining: (block_end + 1).saturating_sub(cursor),
                base: base_label,
            });
        }

        let network = Ipv4Addr::from(network_bits as u32);
        let broadcast = Ipv4Addr::from(end as u32);
        let actual_hosts = usable_hosts(prefix)?;

        log::debug!(
            "allocated '{name}' {network}/{prefix} for {hosts} hosts",
            name = request.name,
            hosts = request.hosts
        );

        allocations.push((
            i,
            VlsmAllocation {
                name: request.name.clone(),
                subnet: Ipv4 {
                    addr: network,
                    mask: prefix,
                },
                mask: Ipv4Addr::from(prefix_to_mask(prefix)?),
                first_host: Ipv4Addr::from(network_bits as u32 + 1),
                last_host: Ipv4Addr::from(end as u32 - 1),
                broadcast,
                requested_hosts: request.hosts,
                actual_hosts,
                waste: actual_hosts - u64::from(request.hosts),
            },
        ));

        cursor = end + 1;
    }

    // Hand the results back in the caller's order
    allocations.sort_by_key(|(i, _)| *i);
    Ok(allocations.into_iter().map(|(_, alloc)| alloc).collect())
}

/// Split a base into (cursor start, inclusive block end, display label).
fn parse_base(base_network: &str) -> Result<(Ipv4Addr, Ipv4Addr, String), CalcError> {
    let trimmed = base_network.trim();
    if trimmed.contains('/') {
        let base = Ipv4::new(trimmed)?;
        // Mask the base down; allocations are bounded by its broadcast.
        let block = Ipv4 {
            addr: base.lo(),
            mask: base.mask,
        };
        Ok((block.addr, block.hi(), block.to_string()))
    } else {
        let addr = parse_addr(trimmed)?;
        Ok((addr, Ipv4Addr::from(u32::MAX), addr.to_string()))
    }
}
