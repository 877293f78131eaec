//! Plan file model and JSON reading.
//!
//! A plan file describes the calculations to run: a list of resolve queries
//! and an optional VLSM section. See `src/tests/test_data/` for examples.

use crate::config;
use crate::error::CalcError;
use crate::models::{SubnetRequest, SubnetResult};
use crate::processing::{resolve_cidr, resolve_mask};
use serde::Deserialize;
use std::error::Error;
use std::path::Path;

/// A full calculation plan read from JSON.
#[derive(Deserialize, Debug, Default)]
pub struct Plan {
    /// Subnet resolve queries.
    #[serde(default)]
    pub resolve: Vec<ResolveQuery>,
    /// Optional VLSM allocation section.
    #[serde(default)]
    pub vlsm: Option<VlsmPlan>,
}

/// One resolve query, in either CIDR or dotted-mask form.
///
/// The two JSON shapes are distinguished by their keys:
/// `{"network": "...", "prefix": 24}` or `{"ip": "...", "mask": "..."}`.
#[derive(Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum ResolveQuery {
    /// Network address plus prefix length.
    Cidr { network: String, prefix: u8 },
    /// Host address plus dotted-quad subnet mask.
    Mask { ip: String, mask: String },
}

impl ResolveQuery {
    /// Run this query through the resolver.
    pub fn run(&self) -> Result<SubnetResult, CalcError> {
        match self {
            ResolveQuery::Cidr { network, prefix } => resolve_cidr(network, *prefix),
            ResolveQuery::Mask { ip, mask } => resolve_mask(ip, mask),
        }
    }
}

/// The VLSM section of a plan.
#[derive(Deserialize, Debug, Clone)]
pub struct VlsmPlan {
    /// Base network, CIDR ("10.0.0.0/24") or bare address ("10.0.0.0").
    pub base_network: String,
    /// Host-count requests to allocate.
    pub requests: Vec<SubnetRequest>,
}

/// Read a plan from a JSON file.
///
/// # Arguments
/// * `plan_file` - Optional path. If None, uses [`config::DEFAULT_PLAN_FILE`].
///
/// # Returns
/// * `Ok(Plan)` - The parsed plan
/// * `Err` - If the file is missing or the JSON is invalid (with the failing path)
pub fn read_plan(plan_file: Option<&str>) -> Result<Plan, Box<dyn Error>> {
    let plan_file = match plan_file {
        Some(file) => {
            if !Path::new(file).exists() {
                return Err(format!("Plan file does not exist: {file}").into());
            }
            log::info!("Using provided plan file: {file}");
            file.to_string()
        }
        None => config::DEFAULT_PLAN_FILE.to_string(),
    };

    let json = std::fs::read_to_string(&plan_file)
        .map_err(|e| format!("Error reading plan file {plan_file}: {e}"))?;
    log::info!("Reading plan file: {plan_file}");

    let mut deserializer = serde_json::Deserializer::from_str(&json);
    let plan: Plan = serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        format!(
            "Error parsing plan {plan_file}: path={path} error={e}",
            path = e.path()
        )
    })?;

    Ok(plan)
}
