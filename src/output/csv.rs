//! CSV output for resolver and VLSM results.
//!
//! Tables go to stdout as quoted CSV; logging goes to stderr, so stdout
//! stays machine-readable. The VLSM table can also be written to a file.

use crate::models::{to_binary, Ipv4, SubnetResult, VlsmAllocation};
use colored::Colorize;
use std::error::Error;
use std::net::Ipv4Addr;

use super::terminal::{format_field, yes_no};

/// Print resolver results as CSV to stdout, one row per query.
pub fn print_resolved(results: &[SubnetResult]) {
    log::info!("#Start print_resolved() with {} result(s)", results.len());

    println!(
        r#"           "network",            "mask",        "wildcard",      "first_host",       "last_host",       "broadcast",     "hosts", "class","private",                     "network_binary",                        "mask_binary""#
    );

    for result in results {
        print_resolved_row(result);
    }
}

/// Print a single resolver CSV row.
fn print_resolved_row(result: &SubnetResult) {
    println!(
        r#"{network},{mask},{wildcard},{first_host},{last_host},{broadcast},{hosts},{class},{private},{network_binary},{mask_binary}"#,
        network = format_field(result.network, 20),
        mask = format_field(result.mask, 17),
        wildcard = format_field(result.wildcard, 17),
        first_host = format_field(result.first_host, 17),
        last_host = format_field(result.last_host, 17),
        broadcast = format_field(result.broadcast, 17),
        hosts = format_field(result.usable_hosts, 11),
        class = format_field(result.address_class, 8),
        private = format_field(yes_no(result.private), 9),
        network_binary = format_field(to_binary(result.network.addr), 37),
        mask_binary = format_field(to_binary(result.mask), 37),
    );
}

/// Print VLSM allocations as CSV to stdout, in request order.
///
/// # Arguments
/// * `base` - The base the allocator was given (CIDR or bare address)
/// * `allocations` - The allocator output
///
/// When `base` is a CIDR block, the unallocated remainder prints as a
/// trailing `-gap-` row and the footer sums requested/allocated/waste.
pub fn print_vlsm(base: &str, allocations: &[VlsmAllocation]) -> Result<(), Box<dyn Error>> {
    log::info!(
        "#Start print_vlsm() base={base} with {} allocation(s)",
        allocations.len()
    );

    println!(
        r#" "cnt",          "name",             "subnet",            "mask",      "first_host",       "last_host",       "broadcast","requested",  "actual", "waste""#
    );

    for (i, alloc) in allocations.iter().enumerate() {
        print_vlsm_row(i + 1, alloc);
    }

    if base.contains('/') {
        let block = Ipv4::new(base)?;
        if let Some((first_free, free_count)) = free_remainder(&block, allocations) {
            println!(
                r#"{cnt},{name},{subnet},{mask},{first_host},{last_host},{broadcast},{requested},{actual},{waste}"#,
                cnt = format_field(0, 6),
                name = format_field("-gap-", 16),
                subnet = format_field(first_free, 20),
                mask = format_field("None", 17),
                first_host = format_field(first_free, 17),
                last_host = format_field(block.hi(), 17),
                broadcast = format_field("None", 17),
                requested = format_field(0, 11),
                actual = format_field(free_count, 9),
                waste = format_field(0, 8),
            );
        }
    }

    let requested: u64 = allocations
        .iter()
        .map(|a| u64::from(a.requested_hosts))
        .sum();
    let allocated: u64 = allocations.iter().map(|a| a.actual_hosts).sum();
    let waste: u64 = allocations.iter().map(|a| a.waste).sum();
    println!(
        "#{}# End print_vlsm() requested={requested} allocated={allocated} waste={waste}",
        "NOTE".on_red(),
    );

    Ok(())
}

/// Print a single VLSM CSV row.
fn print_vlsm_row(cnt: usize, alloc: &VlsmAllocation) {
    println!(
        r#"{cnt},{name},{subnet},{mask},{first_host},{last_host},{broadcast},{requested},{actual},{waste}"#,
        cnt = format_field(cnt, 6),
        name = format_field(&alloc.name, 16),
        subnet = format_field(alloc.subnet, 20),
        mask = format_field(alloc.mask, 17),
        first_host = format_field(alloc.first_host, 17),
        last_host = format_field(alloc.last_host, 17),
        broadcast = format_field(alloc.broadcast, 17),
        requested = format_field(alloc.requested_hosts, 11),
        actual = format_field(alloc.actual_hosts, 9),
        waste = format_field(alloc.waste, 8),
    );
}

/// First free address and free address count left in `block`.
fn free_remainder(block: &Ipv4, allocations: &[VlsmAllocation]) -> Option<(Ipv4Addr, u64)> {
    let next_free: u64 = allocations
        .iter()
        .map(|a| u64::from(u32::from(a.subnet.hi())) + 1)
        .max()
        .unwrap_or_else(|| u64::from(u32::from(block.lo())));
    let block_end = u64::from(u32::from(block.hi()));

    if next_free > block_end {
        return None;
    }
    Some((Ipv4Addr::from(next_free as u32), block_end - next_free + 1))
}

/// Write VLSM allocations to a CSV file.
///
/// # Arguments
/// * `allocations` - Allocations to export, already in request order
/// * `csv_file` - Optional path. If None, uses `vlsm_plan_YYYY-MM-DD.csv`.
///
/// # Returns
/// * `Ok(String)` - The path written
/// * `Err` - If the file cannot be written
pub fn write_vlsm_csv(
    allocations: &[VlsmAllocation],
    csv_file: Option<&str>,
) -> Result<String, Box<dyn Error>> {
    let now = chrono::Utc::now();

    let csv_file = match csv_file {
        Some(file) => file.to_string(),
        None => format!("vlsm_plan_{}.csv", now.format("%Y-%m-%d")),
    };

    let mut csv =
        String::from("name,subnet,mask,first_host,last_host,broadcast,requested,actual,waste\n");
    for alloc in allocations {
        csv.push_str(&format!(
            "{name},{subnet},{mask},{first_host},{last_host},{broadcast},{requested},{actual},{waste}\n",
            name = escape_csv_field(&alloc.name),
            subnet = alloc.subnet,
            mask = alloc.mask,
            first_host = alloc.first_host,
            last_host = alloc.last_host,
            broadcast = alloc.broadcast,
            requested = alloc.requested_hosts,
            actual = alloc.actual_hosts,
            waste = alloc.waste,
        ));
    }

    log::info!("Writing CSV file: {csv_file}");
    std::fs::write(&csv_file, csv)
        .map_err(|e| format!("Error writing CSV file {csv_file}: {e}"))?;

    Ok(csv_file)
}

/// Quote a field if it contains a comma or double quote.
fn escape_csv_field(input: &str) -> String {
    if input.contains(',') || input.contains('"') {
        let escaped = input.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        input.to_string()
    }
}
