//! Domain models for subnet calculations.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Ipv4`] - IPv4 address with CIDR notation support, plus the address codec
//! - [`SubnetResult`] and [`AddressClass`] - resolved subnet facts
//! - [`SubnetRequest`] and [`VlsmAllocation`] - VLSM planning records

mod ipv4;
mod subnet;
mod vlsm;

// Re-export public types
pub use ipv4::{
    broadcast_addr, mask_to_prefix, min_prefix_for_hosts, network_addr, parse_addr,
    prefix_to_mask, subnet_size, to_binary, usable_hosts, Ipv4, MAX_LENGTH, PREFIX_MAX, PREFIX_MIN,
};
pub use subnet::{AddressClass, SubnetResult};
pub use vlsm::{SubnetRequest, VlsmAllocation};
