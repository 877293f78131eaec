// cargo watch -x 'fmt' -x 'run'  // 'run -- subnet_plan.json'

pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod plan;
pub mod processing;

use models::{Ipv4, SubnetResult, VlsmAllocation};
use plan::Plan;
use std::error::Error;

pub use error::CalcError;

/// Run every resolve query in a plan, in order.
pub fn run_resolve_queries(plan: &Plan) -> Result<Vec<SubnetResult>, Box<dyn Error>> {
    let mut results = Vec::with_capacity(plan.resolve.len());
    for (i, query) in plan.resolve.iter().enumerate() {
        let result = query
            .run()
            .map_err(|e| format!("Resolve query {i} failed: {e}"))?;
        results.push(result);
    }
    Ok(results)
}

/// Run the VLSM section of a plan, if present, with post-allocation checks.
///
/// Returns the base network string together with the allocations so callers
/// can print or export them without going back to the plan.
pub fn run_vlsm_plan(
    plan: &Plan,
) -> Result<Option<(String, Vec<VlsmAllocation>)>, Box<dyn Error>> {
    let vlsm = match &plan.vlsm {
        Some(vlsm) => vlsm,
        None => return Ok(None),
    };

    let allocations = processing::allocate_vlsm(&vlsm.base_network, &vlsm.requests)?;

    processing::check_for_overlaps(&allocations)?;
    if vlsm.base_network.contains('/') {
        let base = Ipv4::new(&vlsm.base_network)?;
        processing::check_within_block(&base, &allocations)?;
    }

    Ok(Some((vlsm.base_network.clone(), allocations)))
}
