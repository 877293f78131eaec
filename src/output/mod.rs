//! Output formatting for calculation results.
//!
//! This module handles formatting and outputting results:
//! - [`csv`] - stdout CSV tables and CSV file export
//! - [`terminal`] - quoted-field formatting helpers

mod csv;
mod terminal;

pub use csv::{print_resolved, print_vlsm, write_vlsm_csv};
pub use terminal::{format_field, yes_no};
