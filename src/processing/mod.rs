//! Subnet calculation logic.
//!
//! This module contains the engine's business logic:
//! - [`resolve`] - deriving subnet facts from an address plus prefix or mask
//! - [`vlsm`] - greedy largest-first VLSM allocation
//! - [`overlap`] - post-hoc invariant checks on allocator output

mod overlap;
mod resolve;
mod vlsm;

// Re-export public functions
pub use overlap::{check_for_overlaps, check_within_block};
pub use resolve::{resolve_cidr, resolve_mask};
pub use vlsm::allocate_vlsm;
