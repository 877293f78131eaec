//! Typed errors for the calculation engine.
//!
//! Every engine function validates its input up front and returns one of
//! these kinds before doing any arithmetic. The app layer (plan reading,
//! output, main) wraps them into its `Box<dyn Error>` results.

use std::net::Ipv4Addr;
use thiserror::Error;

/// Errors produced by the codec, resolver and VLSM allocator.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// The text is not a dotted-quad IPv4 address.
    #[error("invalid IPv4 address '{text}': {reason}")]
    InvalidAddressFormat { text: String, reason: String },

    /// The prefix length falls outside the supported window.
    #[error("prefix /{prefix} is outside the supported range /{min}..=/{max}")]
    InvalidPrefixRange { prefix: u8, min: u8, max: u8 },

    /// The subnet mask mixes set and clear bits (e.g. 255.0.255.0).
    #[error("subnet mask {mask} is not a contiguous mask")]
    NonContiguousMask { mask: Ipv4Addr },

    /// A VLSM request does not fit in the remaining base block space.
    #[error(
        "address space exhausted in {base}: request '{name}' needs {needed} addresses, {remaining} remaining"
    )]
    AddressSpaceExhausted {
        name: String,
        needed: u64,
        remaining: u64,
        base: String,
    },
}
