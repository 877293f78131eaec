//! VLSM request and allocation records.

use super::Ipv4;
use serde::{Deserialize, Serialize};
use std::net::Ipv4Addr;

/// One subnet request from a VLSM plan.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SubnetRequest {
    /// Display name of the subnet (e.g. "LAN A").
    pub name: String,
    /// Number of usable hosts the subnet must hold.
    pub hosts: u32,
}

impl Default for SubnetRequest {
    fn default() -> Self {
        SubnetRequest {
            name: "".to_string(),
            hosts: 0,
        }
    }
}

/// One allocated subnet in a VLSM result.
#[derive(Serialize, Debug, Clone)]
pub struct VlsmAllocation {
    /// Name copied from the request.
    pub name: String,
    /// The allocated block in CIDR notation.
    pub subnet: Ipv4,
    /// Dotted-quad subnet mask.
    pub mask: Ipv4Addr,
    /// First usable host address.
    pub first_host: Ipv4Addr,
    /// Last usable host address.
    pub last_host: Ipv4Addr,
    /// Broadcast address.
    pub broadcast: Ipv4Addr,
    /// Hosts asked for in the request.
    pub requested_hosts: u32,
    /// Usable hosts the allocated block provides.
    pub actual_hosts: u64,
    /// Usable hosts allocated beyond the request.
    pub waste: u64,
}
