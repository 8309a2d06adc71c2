//! Calculate IPv4 subnet blocks containing an address.

use std::{net::Ipv4Addr, ops::RangeInclusive};

use serde::Serialize;

use crate::error::{Error, Result};

/// A block of consecutive addresses sharing a prefix.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SubnetBlock {
    /// First address of the block.
    pub first: Ipv4Addr,

    /// Last address of the block.
    pub last: Ipv4Addr,

    /// Prefix length.
    pub mask_bits: u8,

    /// Subnet mask.
    pub subnet_mask: Ipv4Addr,

    /// Number of addresses in the block.
    pub address_count: u64,

    /// First address of the preceding block of the same size.
    pub previous_block: Option<Ipv4Addr>,

    /// First address of the following block of the same size.
    pub next_block: Option<Ipv4Addr>,
}

/// The blocks containing an address, from the longest prefix down.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Subnets {
    /// Address immediately before the target.
    pub previous_address: Option<Ipv4Addr>,

    /// One block per prefix length.
    pub blocks: Vec<SubnetBlock>,
}

/// Parse a dotted-quad address.
///
/// Each of the four segments may be surrounded by whitespace and have leading
/// zeros.
pub fn parse_address(input: &str) -> Result<Ipv4Addr> {
    let invalid = || Error::InvalidAddress {
        address: input.to_string(),
    };

    let segments: Vec<&str> = input.split('.').collect();
    let [a, b, c, d] = segments[..] else {
        return Err(invalid());
    };

    let octet = |s: &str| s.trim().parse::<u8>().map_err(|_| invalid());

    Ok(Ipv4Addr::new(octet(a)?, octet(b)?, octet(c)?, octet(d)?))
}

fn mask(mask_bits: u8) -> u32 {
    u32::MAX.checked_shl(32 - u32::from(mask_bits)).unwrap_or(0)
}

/// Return the block of given prefix length containing `address`.
///
/// `mask_bits` is clamped to 32.
pub fn block(address: Ipv4Addr, mask_bits: u8) -> SubnetBlock {
    let mask_bits = mask_bits.min(32);
    let mask = mask(mask_bits);
    let first = u32::from(address) & mask;
    let last = first | !mask;

    SubnetBlock {
        first: first.into(),
        last: last.into(),
        mask_bits,
        subnet_mask: mask.into(),
        address_count: u64::from(last - first) + 1,
        previous_block: first.checked_sub(1).map(|addr| (addr & mask).into()),
        next_block: last.checked_add(1).map(Ipv4Addr::from),
    }
}

/// Return the blocks containing `address` for every prefix length in
/// `mask_bits`, longest first.
pub fn calculate(address: Ipv4Addr, mask_bits: RangeInclusive<u8>) -> Subnets {
    let previous_address = u32::from(address).checked_sub(1).map(Ipv4Addr::from);

    let blocks = mask_bits
        .rev()
        .filter(|bits| *bits <= 32)
        .map(|bits| block(address, bits))
        .collect();

    Subnets {
        previous_address,
        blocks,
    }
}
